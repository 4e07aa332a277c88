//! Error types for tabular ingestion.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while decoding an input source into a record table.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Reading the source file from disk failed.
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The source bytes could not be decoded as any supported table format.
    #[error("unreadable input '{name}': {detail}")]
    UnreadableInput { name: String, detail: String },

    /// A worksheet was requested by name but the workbook has no such sheet.
    #[error("worksheet '{sheet}' not found in '{name}' (available: {})", available.join(", "))]
    SheetNotFound {
        name: String,
        sheet: String,
        available: Vec<String>,
    },
}

pub type Result<T> = std::result::Result<T, IngestError>;
