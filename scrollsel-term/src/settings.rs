//! On-disk settings for the demo, stored as JSON.

use std::fs;
use std::path::Path;

use scrollsel::{Point, SelectorConfig, Size};
use serde::{Deserialize, Serialize};

use crate::error::TermError;

/// Everything the demo reads at startup. Missing keys fall back to defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoSettings {
    /// Shared by both selectors. Sizes are in terminal cells.
    pub selector: SelectorConfig,

    /// Top-left cell of the integer selector.
    pub numbers_at: Point,

    /// Top-left cell of the string selector.
    pub words_at: Point,

    /// Maximum level written to the log file (`off`, `error`, ... `trace`).
    pub log_level: String,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            selector: SelectorConfig::new()
                .option_size(Size::new(14.0, 1.0))
                .font_size(1, false)
                .scrollbar_width(1.0)
                .render_distance(3),
            numbers_at: Point::new(2.0, 2.0),
            words_at: Point::new(22.0, 2.0),
            log_level: "debug".to_string(),
        }
    }
}

/// Read settings from `path`. A missing file yields the defaults.
pub fn load(path: &Path) -> Result<DemoSettings, TermError> {
    if !path.exists() {
        log::debug!("[settings] {} not found, using defaults", path.display());
        return Ok(DemoSettings::default());
    }

    let raw = fs::read_to_string(path)?;
    let settings = serde_json::from_str(&raw).map_err(|source| TermError::Settings {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("[settings] loaded {}", path.display());
    Ok(settings)
}

/// Write `settings` to `path` as pretty JSON, creating parent directories.
pub fn save(path: &Path, settings: &DemoSettings) -> Result<(), TermError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(settings).map_err(|source| TermError::Settings {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json)?;
    Ok(())
}
