//! Error types for the voxel editor core

use thiserror::Error;

/// Main error type for the editor core
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The persisted document could not be trusted (bad JSON, bad voxel location)
    #[error("Malformed document: {0}")]
    Document(#[from] serde_json::Error),

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// Save was requested but the session has no file path
    #[error("No destination path set, cannot save")]
    NoDestination,
}
