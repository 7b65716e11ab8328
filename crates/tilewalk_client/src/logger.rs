//! BevyLogPrinter — симуляционный logger поверх `bevy::log`
//!
//! Симуляция пишет через свой глобальный printer; в клиенте всё уходит
//! в tracing subscriber Bevy (LogPlugin из DefaultPlugins), он же ставит timestamp.

use bevy::log::{debug, error, info, warn};
use tilewalk_simulation::{LogLevel, LogPrinter};

pub struct BevyLogPrinter;

impl LogPrinter for BevyLogPrinter {
    fn log(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Debug => debug!("{}", message),
            LogLevel::Info => info!("{}", message),
            LogLevel::Warning => warn!("{}", message),
            LogLevel::Error => error!("{}", message),
        }
    }
}

/// Поставить Bevy printer вместо console (до создания App)
pub fn install() {
    tilewalk_simulation::set_logger(Box::new(BevyLogPrinter));
}
