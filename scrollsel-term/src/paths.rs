//! Platform-specific directory paths.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "scrollsel";
const APPLICATION: &str = "scrollsel-demo";

/// Archived logs kept next to `latest.log`.
const MAX_OLD_LOGS: usize = 10;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Directory holding `settings.json`.
///
/// - Linux: `$XDG_CONFIG_HOME/scrollsel-demo` or `~/.config/scrollsel-demo`
/// - macOS: `~/Library/Application Support/dev.scrollsel.scrollsel-demo`
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("settings.json"))
}

pub fn log_file() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join("latest.log"))
}

/// Move `latest.log` aside under a timestamped name and prune old archives.
///
/// Call once at startup, before the logger opens `latest.log`.
pub fn rotate_logs(dir: &Path) {
    let latest = dir.join("latest.log");
    if latest.exists() {
        let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let _ = fs::rename(&latest, dir.join(format!("{}.log", stamp)));
    }
    prune_logs(dir, MAX_OLD_LOGS);
}

/// Keep only the `keep` most recently modified archived logs in `dir`.
pub fn prune_logs(dir: &Path, keep: usize) {
    let Ok(entries) = fs::read_dir(dir) else { return };

    let mut logs: Vec<_> = entries
        .filter_map(|e| e.ok())
        .filter(|e| {
            let name = e.file_name();
            let name = name.to_string_lossy();
            name.ends_with(".log") && name != "latest.log"
        })
        .collect();

    if logs.len() <= keep {
        return;
    }

    logs.sort_by_key(|e| e.metadata().and_then(|m| m.modified()).ok());
    for entry in logs.iter().take(logs.len() - keep) {
        let _ = fs::remove_file(entry.path());
    }
}
