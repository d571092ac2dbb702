//! Minimal logger writing to standard error.

use std::{env, io::Write};

use log::{LevelFilter, Log, Metadata, Record};

/// Environment variable holding the log level.
const LEVEL_VAR: &str = "BATTLESHIP_LOG";

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} - {}", record.level(), record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

static LOGGER: StderrLogger = StderrLogger;

/// Install the logger with the level named by `BATTLESHIP_LOG`, falling back to `info`
/// when it is unset or not a level name.
pub fn init() {
    let level = env::var(LEVEL_VAR)
        .ok()
        .and_then(|level| level.parse().ok())
        .unwrap_or(LevelFilter::Info);
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
