//! Error types for snapshot loading and topology construction

use std::path::PathBuf;
use thiserror::Error;

/// Failures while reading the key-value snapshot
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read snapshot {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed snapshot: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Terminal conditions raised while building a topology
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TopologyError {
    #[error("no nodes configured in the snapshot")]
    NoNodes,

    #[error("no eligible services found in the snapshot")]
    NoServices,

    #[error("node '{node}' has no services")]
    NodeWithoutServices { node: String },
}
