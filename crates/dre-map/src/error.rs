//! Error types for mapping-table loading.

use std::path::PathBuf;

use dre_ingest::IngestError;
use dre_model::Domain;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MapError {
    /// No default table exists in any probed location and no file was
    /// supplied to stand in for it.
    #[error("no mapping table found for domain '{domain}'; searched: {}", display_paths(searched))]
    MappingNotFound {
        domain: Domain,
        searched: Vec<PathBuf>,
    },

    /// A default table exists but does not carry the canonical headers.
    #[error(
        "mapping table {path} must have columns '{category}' and '{target}' (found: {})",
        headers.join(", ")
    )]
    MissingMappingColumns {
        path: PathBuf,
        category: String,
        target: String,
        headers: Vec<String>,
    },

    /// A supplied table is too narrow to relate a category to a code.
    #[error("mapping table {path} needs at least two columns")]
    TooFewColumns { path: PathBuf },

    #[error(transparent)]
    Ingest(#[from] IngestError),
}

pub type Result<T> = std::result::Result<T, MapError>;

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|path| path.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
