//! Error type for the organizing pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Failures that stop a run.
///
/// Empty stages are not errors; they are reported as
/// [`AbortReason`](crate::pipeline::AbortReason). Directory creation problems
/// are not errors either, see [`DirOutcome`](crate::directory::DirOutcome).
#[derive(Error, Debug)]
pub enum OrganizeError {
    /// The base directory could not be listed
    #[error("Failed to list music directory '{path}': {source}")]
    Scan {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// Tags for a file could not be read
    #[error("Failed to read tags from '{path}': {reason}")]
    TagRead { path: PathBuf, reason: String },

    /// A file path without a usable file name or parent directory
    #[error("Invalid music file path '{0}'")]
    InvalidPath(PathBuf),

    /// Something already sits at the computed destination
    #[error("Destination '{destination}' already exists, refusing to move '{source_path}'")]
    Collision {
        source_path: PathBuf,
        destination: PathBuf,
    },

    /// The album directory for a move was never created
    #[error("Destination directory '{0}' does not exist")]
    MissingParent(PathBuf),

    /// The rename itself failed
    #[error("Failed to move '{source_path}' to '{destination}': {source}")]
    Move {
        source_path: PathBuf,
        destination: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, OrganizeError>;
