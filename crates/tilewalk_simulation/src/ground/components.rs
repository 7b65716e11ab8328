//! Компоненты пола: Ground (агрегат сетки), GroundTile, подсветка рёбер

use bevy::prelude::*;

use crate::ground::layout::MAX_GRID_SIZE;

/// Чёрный контур рёбер тайла (RGBA)
pub const EDGE_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

/// Пол: N×N сетка тайлов + состояние выбора
///
/// Создание через [`Ground::new`] ничего не аллоцирует — тайлы появляются
/// при build (см. `build_ground_grids`). `debug` влияет только на
/// следующий build: уже созданные тайлы меняются лишь через `RebuildGround`.
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
#[require(Transform)]
pub struct Ground {
    pub cube_size: f32,
    pub grid_size: u32,
    pub debug: bool,
    /// Тайлы в порядке создания (row-major)
    pub tiles: Vec<Entity>,
    /// Текущий выбранный (кликнутый) тайл, максимум один
    pub selected: Option<Entity>,
}

impl Ground {
    /// `grid_size` больше [`MAX_GRID_SIZE`] урезается (с warning)
    pub fn new(cube_size: f32, grid_size: u32) -> Self {
        if grid_size > MAX_GRID_SIZE {
            crate::log_warning(&format!(
                "Ground grid_size {} exceeds {}, clamped",
                grid_size, MAX_GRID_SIZE
            ));
        }

        Self {
            cube_size,
            grid_size: grid_size.min(MAX_GRID_SIZE),
            debug: false,
            tiles: Vec::new(),
            selected: None,
        }
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn from_config(config: &crate::config::GroundConfig) -> Self {
        Self::new(config.cube_size, config.grid_size).with_debug(config.debug)
    }

    pub fn set_debug(&mut self, value: bool) {
        self.debug = value;
    }

    pub fn is_built(&self) -> bool {
        !self.tiles.is_empty()
    }

    pub fn tile_count(&self) -> usize {
        (self.grid_size as usize) * (self.grid_size as usize)
    }

    pub fn is_selected(&self, tile: Entity) -> bool {
        self.selected == Some(tile)
    }
}

/// Тайл пола
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct GroundTile {
    pub ground: Entity,
    /// Линейный индекс (x * N + y)
    pub index: u32,
    pub coords: UVec2,
    pub size: f32,
}

/// Edge highlight (рендер рёбер включён/выключен)
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct EdgeHighlight {
    pub enabled: bool,
}

/// Стиль рёбер тайла — есть у каждого тайла, независимо от debug
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct EdgeStyle {
    pub color: [f32; 4],
    pub width: f32,
}

impl Default for EdgeStyle {
    fn default() -> Self {
        Self {
            color: EDGE_COLOR,
            width: 4.0,
        }
    }
}

/// Debug label тайла (индекс), только у тайлов из debug build
#[derive(Component, Debug, Clone, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct DebugLabel {
    pub text: String,
}
