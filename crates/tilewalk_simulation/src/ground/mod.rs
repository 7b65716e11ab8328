//! Ground domain — процедурная N×N сетка интерактивных тайлов
//!
//! Содержит:
//! - Ground (агрегат: config + тайлы + выбранный тайл)
//! - layout (позиции, индексы, имена тайлов)
//! - build (spawn тайлов с physics и стилем рёбер)
//! - selection (hover highlight + click selection)
//!
//! Меши, debug текстуры и picking — в клиенте.

use bevy::prelude::*;

pub mod build;
pub mod components;
pub mod layout;
pub mod selection;

// Re-export основных типов
pub use build::RebuildGround;
pub use components::*;
pub use selection::{HighlightChange, PointerAction, TilePointer, TileSelected};

/// Ground Plugin
///
/// Порядок выполнения (Update, chain):
/// 1. build_ground_grids — тайлы для новых Ground
/// 1a. rebuild_ground_grids — RebuildGround (despawn + build заново)
/// 2. handle_tile_pointer — hover/click → highlight + selection
pub struct GroundPlugin;

impl Plugin for GroundPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<crate::config::GroundConfig>()
            .add_event::<TilePointer>()
            .add_event::<TileSelected>()
            .add_event::<RebuildGround>()
            .register_type::<Ground>()
            .register_type::<GroundTile>()
            .register_type::<EdgeHighlight>();

        app.add_systems(
            Update,
            (
                build::build_ground_grids,
                build::rebuild_ground_grids,
                selection::handle_tile_pointer,
            )
                .chain(),
        );
    }
}
