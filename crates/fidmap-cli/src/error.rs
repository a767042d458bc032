use fidmap_config::ConfigError;
use fidmap_topology::{SnapshotError, TopologyError};
use thiserror::Error;

/// Terminal failures of one invocation
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Snapshot(#[from] SnapshotError),

    #[error(transparent)]
    Topology(#[from] TopologyError),
}
