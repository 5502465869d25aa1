use std::path::PathBuf;

use thiserror::Error;

use tradebook_core::DomainError;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot directory {} does not exist or is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not valid JSON: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid reporting window: {0}")]
    Window(#[from] DomainError),
}
