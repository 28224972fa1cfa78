//! Logging utilities and structured logging support

pub use log::{debug, info, warn, error, trace};

use log::LevelFilter;

/// Initialize the logging system from `RUST_LOG`
pub fn init() {
    env_logger::init();
}

/// Initialize logging with a default level; `RUST_LOG` still takes precedence.
///
/// Safe to call more than once, later calls are ignored.
pub fn init_with_level(level: &str) {
    let filter = parse_level(level);
    let _ = env_logger::Builder::new()
        .filter_level(filter)
        .parse_env("RUST_LOG")
        .try_init();
}

/// Parse a level name, falling back to `Info` for anything unknown
pub fn parse_level(level: &str) -> LevelFilter {
    level.parse().unwrap_or_else(|_| {
        log::warn!("Unknown log level '{}', falling back to info", level);
        LevelFilter::Info
    })
}
