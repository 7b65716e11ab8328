//! Инициализация персонажа
//!
//! Порядок:
//! 1. `spawn_hit_boxes` — невидимый physics box в spawn position
//! 2-4. клиент: загрузка model bundle, parent к hit-box, stop + роли анимаций → `ModelAttached`
//! 5. `complete_initialization` — idle rotation action + `CharacterReady`

use bevy::prelude::*;

use crate::character::components::{Character, CharacterInitialized, HitBox, Orientation};
use crate::character::events::{CharacterReady, IdleFlourish, ModelAttached};
use crate::character::idle_rotation::IdleRotation;
use crate::config::CharacterConfig;
use crate::physics::hit_box_body;

/// Spawn hit-box entity для персонажа
///
/// # Компоненты
/// - Name (`hitbox-<name>`), Transform в spawn position
/// - HitBox (обратная ссылка), Orientation
/// - Rapier dynamic box (mass/friction/restitution из config)
///
/// Меша нет: hit-box невидим, визуальная модель — его child.
pub fn spawn_hit_box(
    commands: &mut Commands,
    owner: Entity,
    character: &Character,
    config: &CharacterConfig,
) -> Entity {
    commands
        .spawn((
            Name::new(character.hit_box_name()),
            Transform::from_translation(character.spawn_position),
            HitBox { owner },
            Orientation::default(),
            hit_box_body(config.hit_box_size(), config.body),
        ))
        .id()
}

/// Система: создать hit-box для новых персонажей (шаг 1)
pub fn spawn_hit_boxes(
    mut commands: Commands,
    mut characters: Query<(Entity, &mut Character), Added<Character>>,
    config: Res<CharacterConfig>,
) {
    for (owner, mut character) in characters.iter_mut() {
        if character.hit_box.is_some() {
            continue;
        }

        let hit_box = spawn_hit_box(&mut commands, owner, &character, &config);
        character.hit_box = Some(hit_box);

        crate::log_info(&format!(
            "Character '{}' hit-box {:?} spawned at {:?}",
            character.name, hit_box, character.spawn_position
        ));
    }
}

/// Система: модель прикреплена → idle rotation + CharacterReady (шаг 5)
pub fn complete_initialization(
    mut commands: Commands,
    mut attached: EventReader<ModelAttached>,
    mut ready: EventWriter<CharacterReady>,
    characters: Query<&Character>,
    config: Res<CharacterConfig>,
) {
    for event in attached.read() {
        let Ok(character) = characters.get(event.character) else {
            continue;
        };
        let Some(hit_box) = character.hit_box else {
            crate::log_warning(&format!(
                "Model attached to '{}' before hit-box exists, ignored",
                character.name
            ));
            continue;
        };

        if config.idle_rotation.enabled {
            commands
                .entity(hit_box)
                .insert(IdleRotation::from_config(&config.idle_rotation));
        }
        commands.entity(event.character).insert(CharacterInitialized);

        ready.write(CharacterReady {
            character: event.character,
            hit_box,
        });

        crate::log_info(&format!("Character '{}' ready", character.name));
    }
}

/// Система: IdleFlourish → запуск idle rotation от текущего поворота
pub fn start_idle_rotation(
    mut flourishes: EventReader<IdleFlourish>,
    characters: Query<&Character>,
    mut hit_boxes: Query<(&Orientation, &mut IdleRotation), With<HitBox>>,
) {
    for event in flourishes.read() {
        let Some(hit_box) = characters
            .get(event.character)
            .ok()
            .and_then(|c| c.hit_box)
        else {
            continue;
        };
        // Нет IdleRotation (вариант без flourish / ещё не готов) → no-op
        if let Ok((orientation, mut idle_rotation)) = hit_boxes.get_mut(hit_box) {
            idle_rotation.trigger(orientation.0);
        }
    }
}

/// Система: продвинуть запущенные idle rotation
pub fn tick_idle_rotation(
    time: Res<Time>,
    mut hit_boxes: Query<(&mut IdleRotation, &mut Orientation, &mut Transform), With<HitBox>>,
) {
    for (mut idle_rotation, mut orientation, mut transform) in hit_boxes.iter_mut() {
        if !idle_rotation.is_running() {
            continue;
        }

        if let Some(rotation) = idle_rotation.advance(time.delta()) {
            orientation.0 = rotation;
            orientation.apply_to(&mut transform);
        }
    }
}
