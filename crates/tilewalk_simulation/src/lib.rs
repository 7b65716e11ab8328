//! tilewalk Simulation Core
//!
//! Headless ECS-слой (Bevy 0.16): персонаж с дискретным движением по
//! сетке и пол из интерактивных тайлов.
//!
//! Разделение ответственности:
//! - ECS (этот crate) = игровые правила: шаги, facing angle, раскладка
//!   сетки, selection/highlight, описание physics тел
//! - клиент = рендер, загрузка glTF + анимаций, picking, debug текстуры

use bevy::prelude::*;

// Публичные модули
pub mod character;
pub mod config;
pub mod error;
pub mod ground;
pub mod logger;
pub mod physics;

// Re-export базовых типов для удобства
pub use character::{
    Character, CharacterPlugin, CharacterReady, HitBox, IdleFlourish, ModelAttached, MoveDirection,
    MovementCommand, Orientation,
};
pub use config::{CharacterConfig, GameConfig, GroundConfig};
pub use error::{CharacterError, ConfigError};
pub use ground::{
    EdgeHighlight, Ground, GroundPlugin, GroundTile, RebuildGround, TilePointer, TileSelected,
};
pub use logger::*;

/// Главный plugin симуляции (объединяет все подсистемы)
#[derive(Default)]
pub struct SimulationPlugin {
    pub config: GameConfig,
}

impl SimulationPlugin {
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }
}

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app
            // Config до подсистем: их init_resource не перетрёт значения
            .insert_resource(self.config.character.clone())
            .insert_resource(self.config.ground.clone())
            .add_plugins((CharacterPlugin, GroundPlugin));
    }
}

/// Создаёт minimal Bevy App для headless симуляции
pub fn create_headless_app() -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins);

    app
}
