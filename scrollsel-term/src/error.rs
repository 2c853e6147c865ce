use std::path::PathBuf;

use scrollsel::SelectorError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TermError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid settings in {path}: {source}")]
    Settings {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not build selector: {0}")]
    Selector(#[from] SelectorError),

    #[error("could not start logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}
