//! Глобальный logger симуляции
//!
//! Один process-wide `LogPrinter` (console по умолчанию, клиент ставит свой
//! printer поверх `bevy::log`). Фильтр по уровню — здесь; timestamp
//! добавляет сам printer (у tracing subscriber Bevy он свой).

use once_cell::sync::Lazy;
use std::sync::{Mutex, MutexGuard};

static LOGGER: Lazy<Mutex<Option<Box<dyn LogPrinter>>>> = Lazy::new(|| Mutex::new(None));

pub static LOGGER_LEVEL: Lazy<Mutex<LogLevel>> = Lazy::new(|| Mutex::new(LogLevel::Debug));

/// Poisoned mutex не должен ронять игру из-за логов
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

pub fn set_logger(logger: Box<dyn LogPrinter>) {
    *lock(&LOGGER) = Some(logger);
}

pub fn set_log_level(level: LogLevel) {
    *lock(&LOGGER_LEVEL) = level;
}

pub fn log_level() -> LogLevel {
    *lock(&LOGGER_LEVEL)
}

pub fn set_logger_if_needed(logger: Box<dyn LogPrinter>) {
    let mut slot = lock(&LOGGER);
    if slot.is_none() {
        *slot = Some(logger);
    }
}

/// Уровень логирования (порядок вариантов = порядок важности)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
        }
    }
}

pub trait LogPrinter: Send + Sync {
    fn log(&self, level: LogLevel, message: &str);
}

pub fn log(message: &str) {
    log_with_level(LogLevel::Debug, message);
}

pub fn log_info(message: &str) {
    log_with_level(LogLevel::Info, message);
}

pub fn log_warning(message: &str) {
    log_with_level(LogLevel::Warning, message);
}

pub fn log_error(message: &str) {
    log_with_level(LogLevel::Error, message);
}

pub fn log_with_level(level: LogLevel, message: &str) {
    if level < log_level() {
        return;
    }

    if let Some(logger) = lock(&LOGGER).as_ref() {
        logger.log(level, message);
    }
}

pub struct ConsoleLogger;

impl ConsoleLogger {
    /// `[timestamp] [LEVEL] message`
    pub fn format_line(level: LogLevel, message: &str) -> String {
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        format!("[{}] [{}] {}", timestamp, level.as_str(), message)
    }
}

impl LogPrinter for ConsoleLogger {
    fn log(&self, level: LogLevel, message: &str) {
        let line = Self::format_line(level, message);
        if level >= LogLevel::Warning {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    }
}

pub fn init_logger() {
    set_logger_if_needed(Box::new(ConsoleLogger));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_ordering() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warning);
        assert!(LogLevel::Warning < LogLevel::Error);
        assert_eq!(LogLevel::Warning.as_str(), "WARNING");
    }

    #[test]
    fn test_console_line_has_single_timestamp_and_level() {
        let line = ConsoleLogger::format_line(LogLevel::Info, "ground built");
        assert!(line.ends_with("] [INFO] ground built"), "line = {}", line);
        assert_eq!(line.matches("] [").count(), 1);
    }

    /// Printer, запоминающий сообщения как есть
    struct RecordingPrinter(std::sync::Arc<Mutex<Vec<String>>>);

    impl LogPrinter for RecordingPrinter {
        fn log(&self, _level: LogLevel, message: &str) {
            lock(&self.0).push(message.to_string());
        }
    }

    #[test]
    fn test_printer_receives_message_without_prefix() {
        let records = std::sync::Arc::new(Mutex::new(Vec::new()));
        set_logger(Box::new(RecordingPrinter(records.clone())));

        log_warning("hit-box missing for 'penguin'");

        assert!(lock(&records)
            .iter()
            .any(|message| message == "hit-box missing for 'penguin'"));
        set_logger(Box::new(ConsoleLogger));
    }
}
