//! Ground visuals: mesh/material тайлов, picking bridge, edge outline
//!
//! Picking (`MeshPickingPlugin`) шлёт `Pointer<Over|Out|Click>` на mesh
//! тайла; observers переводят их в `TilePointer` для симуляции.

use bevy::picking::events::{Click, Out, Over, Pointer};
use bevy::picking::pointer::PointerButton;
use bevy::prelude::*;
use std::collections::HashMap;
use tilewalk_simulation::ground::{DebugLabel, EdgeStyle};
use tilewalk_simulation::{EdgeHighlight, Ground, GroundConfig, GroundTile, TilePointer};

use crate::labels::{retire_label_cameras, spawn_label_material};

pub struct GroundVisualPlugin;

impl Plugin for GroundVisualPlugin {
    fn build(&self, app: &mut App) {
        app.init_gizmo_group::<TileEdgeGizmos>()
            .init_resource::<TileAssets>()
            .add_systems(
                Update,
                (
                    show_grounds,
                    attach_tile_visuals,
                    configure_edge_gizmos,
                    draw_tile_edges,
                )
                    .chain(),
            )
            .add_systems(PostUpdate, retire_label_cameras);
    }
}

/// Gizmo group для edge outline тайлов (своя толщина линий)
#[derive(Default, Reflect, GizmoConfigGroup)]
pub struct TileEdgeGizmos;

/// Общие mesh (по размеру ребра) + материал тайлов без label
#[derive(Resource)]
struct TileAssets {
    meshes: HashMap<u32, Handle<Mesh>>,
    plain: Handle<StandardMaterial>,
}

impl FromWorld for TileAssets {
    fn from_world(world: &mut World) -> Self {
        let mut materials = world.resource_mut::<Assets<StandardMaterial>>();
        Self {
            meshes: HashMap::new(),
            plain: materials.add(Color::srgb(0.8, 0.8, 0.8)),
        }
    }
}

impl TileAssets {
    fn cube(&mut self, meshes: &mut Assets<Mesh>, size: f32) -> Handle<Mesh> {
        self.meshes
            .entry(size.to_bits())
            .or_insert_with(|| meshes.add(Cuboid::from_length(size)))
            .clone()
    }
}

/// Ground сам по себе без mesh; Visibility нужна для child тайлов
fn show_grounds(mut commands: Commands, grounds: Query<Entity, Added<Ground>>) {
    for ground in grounds.iter() {
        commands.entity(ground).insert(Visibility::default());
    }
}

fn attach_tile_visuals(
    mut commands: Commands,
    tiles: Query<(Entity, &GroundTile, Option<&DebugLabel>), Added<GroundTile>>,
    mut assets: ResMut<TileAssets>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut images: ResMut<Assets<Image>>,
    config: Res<GroundConfig>,
) {
    for (entity, tile, label) in tiles.iter() {
        let mesh = assets.cube(&mut meshes, tile.size);
        let material = match label {
            Some(label) => spawn_label_material(
                &mut commands,
                entity,
                &mut images,
                &mut materials,
                label,
                tile.index,
                &config,
            ),
            None => assets.plain.clone(),
        };

        commands
            .entity(entity)
            .insert((Mesh3d(mesh), MeshMaterial3d(material), Visibility::default()))
            .observe(forward_pointer_over)
            .observe(forward_pointer_out)
            .observe(forward_pointer_click);
    }
}

fn forward_pointer_over(trigger: Trigger<Pointer<Over>>, mut pointer: EventWriter<TilePointer>) {
    pointer.write(TilePointer::over(trigger.target()));
}

fn forward_pointer_out(trigger: Trigger<Pointer<Out>>, mut pointer: EventWriter<TilePointer>) {
    pointer.write(TilePointer::out(trigger.target()));
}

fn forward_pointer_click(trigger: Trigger<Pointer<Click>>, mut pointer: EventWriter<TilePointer>) {
    if trigger.event().button != PointerButton::Primary {
        return;
    }
    pointer.write(TilePointer::click(trigger.target()));
}

/// Толщина линий из EdgeStyle новых тайлов (одна на group)
fn configure_edge_gizmos(
    mut store: ResMut<GizmoConfigStore>,
    styles: Query<&EdgeStyle, Added<EdgeStyle>>,
) {
    let Some(style) = styles.iter().next() else {
        return;
    };
    let (gizmo_config, _) = store.config_mut::<TileEdgeGizmos>();
    gizmo_config.line.width = style.width;
    // Рёбра совпадают с гранями соседних кубов
    gizmo_config.depth_bias = -0.01;
}

fn draw_tile_edges(
    mut gizmos: Gizmos<TileEdgeGizmos>,
    tiles: Query<(&GlobalTransform, &GroundTile, &EdgeHighlight, &EdgeStyle)>,
) {
    for (transform, tile, highlight, style) in tiles.iter() {
        if !highlight.enabled {
            continue;
        }
        let [r, g, b, a] = style.color;
        gizmos.cuboid(
            Transform::from_translation(transform.translation())
                .with_scale(Vec3::splat(tile.size)),
            Color::srgba(r, g, b, a),
        );
    }
}
