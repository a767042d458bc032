//! fidmap-topology: Cluster topology from key-value snapshots
//!
//! This crate reconstructs the node/service layout of a storage cluster
//! from the flat key-value dump of its configuration:
//! - `Snapshot`: the raw `{key, value}` pairs, loaded from JSON
//! - `pattern`: recognizers for node declarations and service bindings
//! - `builder`: collects matches and assembles a `Topology`
//!
//! # Pipeline
//!
//! ```text
//! Snapshot ──► collect_nodes ──► collect_service_keys ──► build ──► Topology
//! ```

mod builder;
mod error;
mod model;
pub mod pattern;
mod snapshot;

pub use builder::{build, build_topology, collect_node_names, collect_nodes, collect_service_keys};
pub use error::{SnapshotError, TopologyError};
pub use model::{Node, ServiceFamily, ServiceRecord, Topology};
pub use pattern::{NodeDecl, ServiceBinding};
pub use snapshot::{KvPair, Snapshot};
