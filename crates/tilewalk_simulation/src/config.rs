//! Конфигурация персонажа и пола
//!
//! Значения по умолчанию = константы игры (шаг 3 юнита, hit-box 2×4×2,
//! mass 1 / friction 0.7 / restitution 0.7, edge width 4, label 500px/120px).
//! JSON-файл опционален: всё, чего в нём нет, берётся из Default.

use std::fs;
use std::path::Path;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Полная конфигурация (корень JSON-файла)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub character: CharacterConfig,
    pub ground: GroundConfig,
}

impl GameConfig {
    /// Загрузить конфигурацию из JSON файла
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Сохранить конфигурацию в JSON (pretty)
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Загрузить или взять defaults (файл не создаётся)
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => config,
            Err(ConfigError::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => {
                Self::default()
            }
            Err(err) => {
                crate::log_warning(&format!(
                    "Config {:?} ignored ({}), using defaults",
                    path, err
                ));
                Self::default()
            }
        }
    }
}

/// Параметры физического тела (Rapier)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyConfig {
    pub mass: f32,
    pub friction: f32,
    pub restitution: f32,
}

/// Источник модели: base path + имя файла внутри bundle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSource {
    pub base_path: String,
    pub file_name: String,
}

impl ModelSource {
    /// Путь asset'а относительно asset root (`base_path/file_name`)
    pub fn asset_path(&self) -> String {
        let base = self.base_path.trim_end_matches('/');
        if base.is_empty() {
            self.file_name.clone()
        } else {
            format!("{}/{}", base, self.file_name)
        }
    }
}

/// Idle flourish: медленный поворот hit-box (срабатывает только по явному trigger)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IdleRotationConfig {
    pub enabled: bool,
    /// Целевой Euler rotation (радианы)
    pub target: [f32; 3],
    pub duration_millis: u64,
}

/// Конфигурация персонажа
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterConfig {
    /// Дистанция одного шага (юниты)
    pub step_distance: f32,
    /// Размер hit-box (width, height, depth)
    pub hit_box_size: [f32; 3],
    /// Смещение визуальной модели относительно hit-box
    pub model_offset: [f32; 3],
    pub body: BodyConfig,
    pub model: ModelSource,
    pub idle_rotation: IdleRotationConfig,
}

impl Default for CharacterConfig {
    fn default() -> Self {
        Self {
            step_distance: 3.0,
            hit_box_size: [2.0, 4.0, 2.0],
            model_offset: [0.0, -2.0, 0.0],
            body: BodyConfig {
                mass: 1.0,
                friction: 0.7,
                restitution: 0.7,
            },
            model: ModelSource {
                base_path: "models".to_string(),
                file_name: "character.glb".to_string(),
            },
            idle_rotation: IdleRotationConfig {
                enabled: true,
                target: [0.0, 3.0, 0.0],
                duration_millis: 300,
            },
        }
    }
}

impl CharacterConfig {
    pub fn hit_box_size(&self) -> Vec3 {
        Vec3::from_array(self.hit_box_size)
    }

    pub fn model_offset(&self) -> Vec3 {
        Vec3::from_array(self.model_offset)
    }
}

/// Конфигурация пола (значения для новых Ground, созданных из config)
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroundConfig {
    /// Размер ребра тайла
    pub cube_size: f32,
    /// Сторона сетки N (N×N тайлов)
    pub grid_size: u32,
    pub debug: bool,
    /// Толщина edge outline (px)
    pub edge_width: f32,
    /// Разрешение canvas debug label (квадрат)
    pub label_canvas: u32,
    pub label_font_size: f32,
}

impl Default for GroundConfig {
    fn default() -> Self {
        Self {
            cube_size: 3.0,
            grid_size: 10,
            debug: false,
            edge_width: 4.0,
            label_canvas: 500,
            label_font_size: 120.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_config_defaults() {
        let config = CharacterConfig::default();
        assert_eq!(config.step_distance, 3.0);
        assert_eq!(config.hit_box_size(), Vec3::new(2.0, 4.0, 2.0));
        assert_eq!(config.model_offset(), Vec3::new(0.0, -2.0, 0.0));
        assert_eq!(config.body.mass, 1.0);
        assert_eq!(config.body.friction, 0.7);
        assert_eq!(config.body.restitution, 0.7);
        assert_eq!(config.idle_rotation.duration_millis, 300);
    }

    #[test]
    fn test_model_source_path() {
        let source = ModelSource {
            base_path: "models/".to_string(),
            file_name: "character.glb".to_string(),
        };
        assert_eq!(source.asset_path(), "models/character.glb");

        let bare = ModelSource {
            base_path: String::new(),
            file_name: "character.glb".to_string(),
        };
        assert_eq!(bare.asset_path(), "character.glb");
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let config: GameConfig =
            serde_json::from_str(r#"{ "ground": { "grid_size": 3, "debug": true } }"#).unwrap();

        assert_eq!(config.ground.grid_size, 3);
        assert!(config.ground.debug);
        assert_eq!(config.ground.edge_width, 4.0);
        assert_eq!(config.character, CharacterConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/tilewalk.json");

        let mut config = GameConfig::default();
        config.character.step_distance = 1.5;
        config.save(&path).unwrap();

        let loaded = GameConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = GameConfig::load_or_default(dir.path().join("missing.json"));
        assert_eq!(config, GameConfig::default());
    }
}
