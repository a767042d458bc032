//! Key-value snapshot input

use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SnapshotError;

/// One entry of the configuration dump.
///
/// `value` is itself a JSON document encoded as a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KvPair {
    pub key: String,
    pub value: String,
}

impl KvPair {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Ordered list of key-value pairs as exported from the configuration store
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    pairs: Vec<KvPair>,
}

impl Snapshot {
    pub fn from_pairs(pairs: Vec<KvPair>) -> Self {
        Self { pairs }
    }

    /// Parse a snapshot from its JSON array form
    pub fn from_json(text: &str) -> Result<Self, SnapshotError> {
        let pairs: Vec<KvPair> = serde_json::from_str(text)?;
        Ok(Self { pairs })
    }

    /// Load a snapshot file from disk
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SnapshotError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => SnapshotError::NotFound(path.to_path_buf()),
            _ => SnapshotError::Io {
                path: path.to_path_buf(),
                source,
            },
        })?;
        let snapshot = Self::from_json(&text)?;
        tracing::debug!(path = %path.display(), pairs = snapshot.len(), "loaded snapshot");
        Ok(snapshot)
    }

    pub fn pairs(&self) -> &[KvPair] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
