//! Error types shared by both generators

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for generator operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Configuration file does not exist on disk
    #[error(
        "Configuration file not found: {}\nPlease create a config file. See config.example.json for reference.",
        path.display()
    )]
    ConfigNotFound { path: PathBuf },

    /// Configuration file exists but is not valid JSON (or has wrongly typed fields)
    #[error("Invalid JSON in configuration file {}: {source}", path.display())]
    ConfigInvalid {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Output file is open in another program or otherwise not writable
    #[error(
        "Unable to write to {}. Please close the file if it's open and try again.",
        path.display()
    )]
    OutputLocked { path: PathBuf },

    /// Workbook assembly failed
    #[error("Failed to build workbook: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),

    /// Any other I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
