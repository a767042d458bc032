//! fidmap-query: Lookups and rendering over a built topology
//!
//! - `QueryEngine`: filter a `Topology` by node and service family
//! - `CurrentHostProvider`: where the default node name comes from
//! - `render`: plain-text and JSON output

mod host;
mod query;
mod render;

pub use host::{CurrentHostProvider, FixedHost, SystemHost};
pub use query::{QueryEngine, QueryMiss};
pub use render::{render_records, render_topology, OutputFormat};
