#![cfg(feature = "std")]

//! Minimal stderr logger so stdout stays free for boards and JSON output.

use std::env;
use log::{self, LevelFilter, Metadata, Record};

const LOG_ENV: &str = "BROADSIDE_LOG";

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{:<5} {} - {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn level_from_env() -> LevelFilter {
    env::var(LOG_ENV)
        .ok()
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Install the logger. An explicit `level` wins over `BROADSIDE_LOG`, which
/// defaults to `info` when unset or invalid. Later calls are ignored.
pub fn init_logging(level: Option<LevelFilter>) {
    let level = level.unwrap_or_else(level_from_env);
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
