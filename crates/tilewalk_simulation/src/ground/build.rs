//! Построение сетки тайлов
//!
//! Build один раз при появлении Ground; повторно — только по явному
//! `RebuildGround` (старые тайлы удаляются, выбор сбрасывается, `debug`
//! берётся текущий).

use bevy::prelude::*;

use crate::config::GroundConfig;
use crate::ground::components::{
    DebugLabel, EdgeHighlight, EdgeStyle, Ground, GroundTile, EDGE_COLOR,
};
use crate::ground::layout::{grid_coords, tile_index, tile_label, tile_name, tile_position};
use crate::physics::tile_body;

impl Ground {
    /// Spawn N² тайлов как children `ground_entity`
    ///
    /// # Компоненты тайла
    /// - Name (`Grid-<index>`), Transform (см. `tile_position`)
    /// - GroundTile, EdgeHighlight (выкл), EdgeStyle (чёрный, `edge_width`)
    /// - Rapier fixed box (mass 0)
    /// - DebugLabel — только если `debug` включён на момент build
    ///
    /// Уже построенная сетка не меняется: сначала [`Ground::clear`].
    pub fn build(&mut self, commands: &mut Commands, ground_entity: Entity, edge_width: f32) {
        if self.is_built() {
            return;
        }

        self.tiles.reserve(self.tile_count());
        for coords in grid_coords(self.grid_size) {
            let index = tile_index(coords, self.grid_size);
            debug_assert_eq!(index as usize, self.tiles.len());

            let mut tile = commands.spawn((
                Name::new(tile_name(index)),
                Transform::from_translation(tile_position(coords, self.grid_size, self.cube_size)),
                GroundTile {
                    ground: ground_entity,
                    index,
                    coords,
                    size: self.cube_size,
                },
                EdgeHighlight::default(),
                EdgeStyle {
                    color: EDGE_COLOR,
                    width: edge_width,
                },
                tile_body(self.cube_size),
                ChildOf(ground_entity),
            ));

            if self.debug {
                tile.insert(DebugLabel {
                    text: tile_label(index),
                });
            }

            self.tiles.push(tile.id());
        }
    }

    /// Despawn всех тайлов (с их children), сброс выбора
    pub fn clear(&mut self, commands: &mut Commands) {
        for tile in self.tiles.drain(..) {
            if let Ok(mut entity) = commands.get_entity(tile) {
                entity.despawn();
            }
        }
        self.selected = None;
    }
}

/// Event: перестроить сетку Ground с текущими настройками (в т.ч. `debug`)
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct RebuildGround {
    pub ground: Entity,
}

/// Система: построить сетку для новых Ground
pub fn build_ground_grids(
    mut commands: Commands,
    mut grounds: Query<(Entity, &mut Ground), Added<Ground>>,
    config: Res<GroundConfig>,
) {
    for (entity, mut ground) in grounds.iter_mut() {
        if ground.is_built() {
            continue;
        }

        ground.build(&mut commands, entity, config.edge_width);

        crate::log_info(&format!(
            "Ground {:?}: built {}x{} tiles (size {}, debug {})",
            entity, ground.grid_size, ground.grid_size, ground.cube_size, ground.debug
        ));
    }
}

/// Система: RebuildGround → clear + build
pub fn rebuild_ground_grids(
    mut commands: Commands,
    mut rebuilds: EventReader<RebuildGround>,
    mut grounds: Query<&mut Ground>,
    config: Res<GroundConfig>,
) {
    for event in rebuilds.read() {
        let Ok(mut ground) = grounds.get_mut(event.ground) else {
            crate::log_warning(&format!(
                "RebuildGround for missing ground {:?}",
                event.ground
            ));
            continue;
        };

        ground.clear(&mut commands);
        ground.build(&mut commands, event.ground, config.edge_width);

        crate::log_info(&format!(
            "Ground {:?}: rebuilt {} tiles (debug {})",
            event.ground,
            ground.tiles.len(),
            ground.debug
        ));
    }
}
