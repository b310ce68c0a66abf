#![cfg(feature = "std")]

use std::env;
use log::{self, LevelFilter, Metadata, Record};

use crate::config::LOG_ENV_VAR;

struct SimpleLogger;

impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} [{}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: SimpleLogger = SimpleLogger;

/// Parse a level filter, falling back to `info` for missing or unknown values.
pub fn level_from(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Initialize logging with a level taken from the `NAVAL_SALVO_LOG` environment variable.
/// Defaults to `info` if the variable is not set or invalid. Records go to stderr.
pub fn init_logging() {
    let level = level_from(env::var(LOG_ENV_VAR).ok().as_deref());
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
