//! Console Logger
//!
//! `log` backend for WASM frontends. Records go to the matching
//! `console.*` method in the browser; native builds (tests, tooling)
//! fall back to stderr.

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Logger that forwards records to the devtools console
pub struct ConsoleLogger {
    level: LevelFilter,
}

impl ConsoleLogger {
    pub fn new(level: LevelFilter) -> Self {
        Self { level }
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(record.level(), record.target(), &record.args().to_string());
        emit(record.level(), &line);
    }

    fn flush(&self) {}
}

/// Install the console logger as the global `log` backend.
///
/// Fails if a logger was already installed.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(ConsoleLogger::new(level)))?;
    log::set_max_level(level);
    Ok(())
}

/// `[LEVEL target] message`
pub fn format_line(level: Level, target: &str, message: &str) -> String {
    format!("[{} {}] {}", level, target, message)
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{}", line);
}
