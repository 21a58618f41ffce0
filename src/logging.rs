//! Stderr logging for the binaries. The level comes from `SEA_BATTLE_LOG`.

use std::env;

use log::{LevelFilter, Log, Metadata, Record};

const LEVEL_VAR: &str = "SEA_BATTLE_LOG";

struct StderrSink;

impl Log for StderrSink {
    fn enabled(&self, meta: &Metadata) -> bool {
        meta.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        // stdout belongs to the game screen
        eprintln!("[{:<5} {}] {}", record.level(), record.target(), record.args());
    }

    fn flush(&self) {}
}

static SINK: StderrSink = StderrSink;

/// Unset or unparsable values fall back to `warn`.
fn parse_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(LevelFilter::Warn)
}

/// Install the stderr logger. Calling it more than once is harmless.
pub fn init_logging() {
    let level = parse_level(env::var(LEVEL_VAR).ok().as_deref());
    if log::set_logger(&SINK).is_ok() {
        log::set_max_level(level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_defaults_to_warn() {
        assert_eq!(parse_level(None), LevelFilter::Warn);
        assert_eq!(parse_level(Some("loud")), LevelFilter::Warn);
        assert_eq!(parse_level(Some("debug")), LevelFilter::Debug);
        assert_eq!(parse_level(Some(" TRACE\n")), LevelFilter::Trace);
    }
}
