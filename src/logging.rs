//! Logger setup
//!
//! `env_logger` writes to stderr; lines look like
//! `[14:03:07.512 INFO  queens_board::console] message`.

use chrono::Local;
use log::{LevelFilter, SetLoggerError};
use std::io::Write;

/// Install the logger at `level`. Fails if another logger is already
/// installed.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    // The backend admits everything up to Debug so `set verbose` can widen
    // the level at runtime through `log::set_max_level`.
    env_logger::Builder::new()
        .filter_level(LevelFilter::Debug)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {:<5} {}] {}",
                Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init()?;
    log::set_max_level(level);
    Ok(())
}

/// Change the level of an installed logger
pub fn set_verbose(verbose: bool) {
    log::set_max_level(level_for(verbose));
}

pub fn level_for(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_once_then_toggle_verbose() {
        init(LevelFilter::Info).unwrap();
        assert_eq!(log::max_level(), LevelFilter::Info);
        assert!(init(LevelFilter::Info).is_err());

        set_verbose(true);
        assert_eq!(log::max_level(), LevelFilter::Debug);
        set_verbose(false);
        assert_eq!(log::max_level(), LevelFilter::Info);
    }
}
