use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};

/// Severity of a console log line
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug = 0,
    Info = 1,
    Warn = 2,
    Error = 3,
}

impl LogLevel {
    fn from_u8(value: u8) -> Self {
        match value {
            0 => LogLevel::Debug,
            1 => LogLevel::Info,
            2 => LogLevel::Warn,
            _ => LogLevel::Error,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        };
        f.write_str(name)
    }
}

static MIN_LEVEL: AtomicU8 = AtomicU8::new(LogLevel::Debug as u8);

pub struct Logger;

impl Logger {
    /// Drop every message below `level`
    pub fn set_min_level(level: LogLevel) {
        MIN_LEVEL.store(level as u8, Ordering::Relaxed);
    }

    pub fn min_level() -> LogLevel {
        LogLevel::from_u8(MIN_LEVEL.load(Ordering::Relaxed))
    }

    pub fn debug_with_component(component: &str, message: &str) {
        Self::log(LogLevel::Debug, message, Some(component));
    }

    pub fn info_with_component(component: &str, message: &str) {
        Self::log(LogLevel::Info, message, Some(component));
    }

    pub fn warn_with_component(component: &str, message: &str) {
        Self::log(LogLevel::Warn, message, Some(component));
    }

    pub fn error_with_component(component: &str, message: &str) {
        Self::log(LogLevel::Error, message, Some(component));
    }

    fn log(level: LogLevel, message: &str, component: Option<&str>) {
        if level < Self::min_level() {
            return;
        }

        let line = format_line(level, component, message);
        match level {
            LogLevel::Debug => gloo::console::debug!(line),
            LogLevel::Info => gloo::console::info!(line),
            LogLevel::Warn => gloo::console::warn!(line),
            LogLevel::Error => gloo::console::error!(line),
        }
    }
}

fn format_line(level: LogLevel, component: Option<&str>, message: &str) -> String {
    match component {
        Some(component) => format!("[{}] [{}] {}", level, component, message),
        None => format!("[{}] {}", level, message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_with_component() {
        assert_eq!(
            format_line(LogLevel::Info, Some("HiringInsights"), "loaded 30 days"),
            "[INFO] [HiringInsights] loaded 30 days"
        );
    }

    #[test]
    fn test_format_line_without_component() {
        assert_eq!(format_line(LogLevel::Error, None, "boom"), "[ERROR] boom");
    }

    #[test]
    fn test_levels_are_ordered() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Warn < LogLevel::Error);
        assert_eq!(LogLevel::from_u8(LogLevel::Warn as u8), LogLevel::Warn);
    }
}
