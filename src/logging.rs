// src/logging.rs
use env_logger::Env;
use log::LevelFilter;

/// Maps `-v` occurrences to a default filter; `RUST_LOG` still wins.
pub const fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

pub fn init(verbosity: u8) {
    let default = level_for(verbosity).as_str().to_ascii_lowercase();
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(default))
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}
