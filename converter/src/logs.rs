//! Console logging for the converter.
//!
//! Info and success lines go to stdout, warnings and errors to stderr.
//! Library callers that want a silent run can call [`set_quiet`]; warnings
//! and errors are still printed.

use std::sync::atomic::{AtomicBool, Ordering};

/// Log level for console display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A single log entry
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    /// Indentation level for nested lines
    pub indent: u8,
}

impl LogEntry {
    pub fn info(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Info, message: message.into(), indent: 0 }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Success, message: message.into(), indent: 0 }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Warning, message: message.into(), indent: 0 }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Error, message: message.into(), indent: 0 }
    }

    pub fn with_indent(mut self, indent: u8) -> Self {
        self.indent = indent;
        self
    }

    /// Rendered line without trailing newline.
    pub fn render(&self) -> String {
        let prefix = match self.level {
            LogLevel::Info => "",
            LogLevel::Success => "✓ ",
            LogLevel::Warning => "⚠️  ",
            LogLevel::Error => "❌ ",
        };
        format!("{}{}{}", "   ".repeat(self.indent as usize), prefix, self.message)
    }
}

/// Global console logger
pub static LOGGER: Logger = Logger::new();

/// Writes log entries to the console
pub struct Logger {
    quiet: AtomicBool,
}

impl Logger {
    pub const fn new() -> Self {
        Self { quiet: AtomicBool::new(false) }
    }

    pub fn log(&self, entry: LogEntry) {
        match entry.level {
            LogLevel::Info | LogLevel::Success => {
                if !self.quiet.load(Ordering::Relaxed) {
                    println!("{}", entry.render());
                }
            }
            LogLevel::Warning | LogLevel::Error => eprintln!("{}", entry.render()),
        }
    }

    pub fn set_quiet(&self, quiet: bool) {
        self.quiet.store(quiet, Ordering::Relaxed);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Silence info and success lines.
pub fn set_quiet(quiet: bool) {
    LOGGER.set_quiet(quiet);
}

pub fn log_info(msg: impl Into<String>) {
    LOGGER.log(LogEntry::info(msg));
}

pub fn log_success(msg: impl Into<String>) {
    LOGGER.log(LogEntry::success(msg));
}

pub fn log_warning(msg: impl Into<String>) {
    LOGGER.log(LogEntry::warning(msg));
}

pub fn log_error(msg: impl Into<String>) {
    LOGGER.log(LogEntry::error(msg));
}

pub fn log_warning_indent(msg: impl Into<String>, indent: u8) {
    LOGGER.log(LogEntry::warning(msg).with_indent(indent));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_prefixes() {
        assert_eq!(LogEntry::info("Reading a.csv").render(), "Reading a.csv");
        assert_eq!(LogEntry::success("done").render(), "✓ done");
        assert!(LogEntry::error("boom").render().starts_with("❌"));
    }

    #[test]
    fn test_render_indent() {
        let line = LogEntry::warning("Column 'x'").with_indent(1).render();
        assert!(line.starts_with("   ⚠️"));
        assert!(line.ends_with("Column 'x'"));
    }
}
