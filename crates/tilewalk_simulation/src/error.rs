//! Ошибки симуляции
//!
//! Почти всё в симуляции деградирует в no-op (нет hit-box → команда
//! игнорируется). Явных ошибок две: внутренний guard персонажа и загрузка config.

/// Ошибки персонажа
#[derive(Debug, thiserror::Error)]
pub enum CharacterError {
    /// Facing angle запрошен до создания hit-box (не должно быть достижимо снаружи)
    #[error("hit-box mesh is not created for character `{name}`")]
    MissingHitBox { name: String },
}

/// Ошибки загрузки/сохранения конфигурации
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
