//! Character visuals: glTF модель, прикреплённая к hit-box
//!
//! Порядок (hit-box уже создан симуляцией):
//! 1. `Added<HitBox>` → грузим model bundle (`Handle<Gltf>`)
//! 2. bundle загружен → SceneRoot child с offset + AnimationGraph из клипов
//! 3. `SceneInstanceReady` → stop + classify клипов, `ModelAttached`
//!
//! Ошибка загрузки уходит в `CharacterLoadFailed` без изменений.

use bevy::asset::LoadState;
use bevy::gltf::Gltf;
use bevy::prelude::*;
use bevy::scene::SceneInstanceReady;
use std::collections::HashMap;
use tilewalk_simulation::character::{
    classify_animations, AnimationControl, CharacterAnimations, CharacterLoadFailed,
};
use tilewalk_simulation::{log, log_error, CharacterConfig, HitBox, ModelAttached};

pub struct CharacterVisualPlugin;

impl Plugin for CharacterVisualPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (request_character_models, attach_character_models).chain(),
        );
    }
}

/// Model bundle в процессе загрузки (на hit-box)
#[derive(Component)]
struct PendingModel {
    gltf: Handle<Gltf>,
}

/// Визуальная сцена персонажа (child hit-box)
#[derive(Component)]
pub struct CharacterModel {
    pub character: Entity,
}

/// Клипы bundle в порядке загрузки + graph, в который они добавлены
#[derive(Component)]
struct ModelClips {
    graph: Handle<AnimationGraph>,
    clips: Vec<(String, AnimationNodeIndex)>,
}

/// `AnimationControl` поверх Bevy `AnimationPlayer`
pub struct PlayerControl<'a>(pub &'a mut AnimationPlayer);

impl AnimationControl<AnimationNodeIndex> for PlayerControl<'_> {
    fn stop(&mut self, clip: &AnimationNodeIndex) {
        self.0.stop(*clip);
    }
}

fn request_character_models(
    mut commands: Commands,
    hit_boxes: Query<Entity, Added<HitBox>>,
    asset_server: Res<AssetServer>,
    config: Res<CharacterConfig>,
) {
    for hit_box in hit_boxes.iter() {
        let path = config.model.asset_path();
        log(&format!("Loading character model '{}' for {:?}", path, hit_box));

        // Hit-box остаётся без mesh (невидимый), Visibility нужна для child scene
        commands.entity(hit_box).insert((
            Visibility::default(),
            PendingModel {
                gltf: asset_server.load(path),
            },
        ));
    }
}

fn attach_character_models(
    mut commands: Commands,
    pending: Query<(Entity, &HitBox, &PendingModel)>,
    asset_server: Res<AssetServer>,
    gltfs: Res<Assets<Gltf>>,
    mut graphs: ResMut<Assets<AnimationGraph>>,
    config: Res<CharacterConfig>,
    mut failed: EventWriter<CharacterLoadFailed>,
) {
    for (hit_box, owner, model) in pending.iter() {
        if let LoadState::Failed(err) = asset_server.load_state(&model.gltf) {
            log_error(&format!("Character model failed to load: {}", err));
            failed.write(CharacterLoadFailed {
                character: owner.owner,
                error: err.to_string(),
            });
            commands.entity(hit_box).remove::<PendingModel>();
            continue;
        }

        let Some(gltf) = gltfs.get(&model.gltf) else {
            continue;
        };
        commands.entity(hit_box).remove::<PendingModel>();

        let Some(scene) = gltf
            .default_scene
            .clone()
            .or_else(|| gltf.scenes.first().cloned())
        else {
            let error = "model bundle has no scenes".to_string();
            log_error(&format!("Character {:?}: {}", owner.owner, error));
            failed.write(CharacterLoadFailed {
                character: owner.owner,
                error,
            });
            continue;
        };

        let (graph, clips) = build_animation_graph(gltf);
        let clips = ModelClips {
            graph: graphs.add(graph),
            clips,
        };

        commands
            .spawn(character_model(
                hit_box,
                owner.owner,
                scene,
                clips,
                config.model_offset(),
            ))
            .observe(on_model_ready);
    }
}

/// Визуальная сцена, прикреплённая к hit-box со смещением `offset`
fn character_model(
    hit_box: Entity,
    character: Entity,
    scene: Handle<Scene>,
    clips: ModelClips,
    offset: Vec3,
) -> impl Bundle {
    (
        Name::new("character-model"),
        SceneRoot(scene),
        Transform::from_translation(offset),
        CharacterModel { character },
        clips,
        ChildOf(hit_box),
    )
}

/// Все клипы bundle в одном graph; имя клипа берём из `named_animations`
fn build_animation_graph(gltf: &Gltf) -> (AnimationGraph, Vec<(String, AnimationNodeIndex)>) {
    let names: HashMap<AssetId<AnimationClip>, &str> = gltf
        .named_animations
        .iter()
        .map(|(name, handle)| (handle.id(), name.as_ref()))
        .collect();

    let mut graph = AnimationGraph::new();
    let root = graph.root;
    let clips = gltf
        .animations
        .iter()
        .map(|clip| {
            let node = graph.add_clip(clip.clone(), 1.0, root);
            let name = names.get(&clip.id()).copied().unwrap_or_default();
            (name.to_string(), node)
        })
        .collect();

    (graph, clips)
}

fn on_model_ready(trigger: Trigger<SceneInstanceReady>, mut commands: Commands) {
    commands.run_system_cached_with(attach_model_animations, trigger.target());
}

/// Сцена модели заспавнена: graph → AnimationPlayer, stop + роли клипов, `ModelAttached`
fn attach_model_animations(
    In(root): In<Entity>,
    mut commands: Commands,
    models: Query<(&CharacterModel, &ModelClips)>,
    children: Query<&Children>,
    mut players: Query<&mut AnimationPlayer>,
    mut attached: EventWriter<ModelAttached>,
) {
    let Ok((model, clips)) = models.get(root) else {
        return;
    };

    let player_entity = children
        .iter_descendants(root)
        .find(|entity| players.contains(*entity));

    let animations: CharacterAnimations<AnimationNodeIndex> = match player_entity {
        Some(entity) => {
            commands
                .entity(entity)
                .insert(AnimationGraphHandle(clips.graph.clone()));
            match players.get_mut(entity) {
                Ok(mut player) => {
                    classify_animations(&mut PlayerControl(&mut player), &clips.clips)
                }
                Err(_) => classify_animations(&mut (), &clips.clips),
            }
        }
        // Модель без скелета: клипов для остановки нет
        None => classify_animations(&mut (), &clips.clips),
    };

    log(&format!(
        "Character {:?}: {} clips, {} roles bound",
        model.character,
        clips.clips.len(),
        animations.bound_count()
    ));

    commands.entity(model.character).insert(animations);
    attached.write(ModelAttached {
        character: model.character,
    });
}
