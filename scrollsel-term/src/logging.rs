//! File logging. A full-screen TUI owns stdout, so logs go to disk.

use std::fs::{self, File};
use std::path::Path;

use simplelog::{Config, LevelFilter, WriteLogger};

use crate::error::TermError;

/// Parse a level name, falling back to `Debug` for anything unrecognised.
pub fn parse_level(name: &str) -> LevelFilter {
    name.parse().unwrap_or(LevelFilter::Debug)
}

/// Install a [`WriteLogger`] writing to `path`, creating its directory.
pub fn init(path: &Path, level: LevelFilter) -> Result<(), TermError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    WriteLogger::init(level, Config::default(), file)?;
    log::info!("[logging] writing to {} at {}", path.display(), level);
    Ok(())
}
