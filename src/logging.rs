//! Thin façade over `log`/`env_logger` mirroring the reference engine's
//! five-level verbosity scheme.

use log::LevelFilter;

use crate::error::{Error, Result};

/// Installs `env_logger` as the global logger at the level `verbosity`
/// selects. `0` disables logging entirely; `1..=5` map to
/// `Error, Warn, Info, Debug, Trace`. Anything else is a usage error, not a
/// panic.
pub fn init(verbosity: u8) -> Result<()> {
    let level = level_for_verbosity(verbosity)?;
    env_logger::Builder::new().filter_level(level).init();
    Ok(())
}

fn level_for_verbosity(verbosity: u8) -> Result<LevelFilter> {
    match verbosity {
        0 => Ok(LevelFilter::Off),
        1 => Ok(LevelFilter::Error),
        2 => Ok(LevelFilter::Warn),
        3 => Ok(LevelFilter::Info),
        4 => Ok(LevelFilter::Debug),
        5 => Ok(LevelFilter::Trace),
        other => Err(Error::Parse(format!("verbosity must be 0..=5, got {other}"))),
    }
}
