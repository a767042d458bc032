//! Query Engine - filter a topology by node and service
//!
//! Lookups never fail hard: a missing node or service is reported as a
//! `QueryMiss` and logged, and the caller decides what to print.

use fidmap_topology::{ServiceRecord, Topology};
use thiserror::Error;

use crate::host::CurrentHostProvider;

/// Non-fatal outcome of a lookup that found nothing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryMiss {
    #[error("node '{node}' not found")]
    NodeNotFound { node: String },

    #[error("service '{service}' not found on node '{node}'")]
    ServiceNotFound { node: String, service: String },
}

/// Query engine bound to one topology and a host provider
pub struct QueryEngine<'t, H> {
    topology: &'t Topology,
    host: H,
}

impl<'t, H: CurrentHostProvider> QueryEngine<'t, H> {
    pub fn new(topology: &'t Topology, host: H) -> Self {
        Self { topology, host }
    }

    /// The whole topology, unfiltered
    pub fn query_all(&self) -> &'t Topology {
        self.topology
    }

    /// Records on one node, optionally narrowed to one service name.
    ///
    /// `node` defaults to the current host. Service names match exactly and
    /// results keep discovery order.
    pub fn query_single(
        &self,
        node: Option<&str>,
        service: Option<&str>,
    ) -> Result<Vec<&'t ServiceRecord>, QueryMiss> {
        let node_name = match node {
            Some(name) => name.to_string(),
            None => self.host.current_host(),
        };

        let Some(found) = self.topology.node(&node_name) else {
            let miss = QueryMiss::NodeNotFound { node: node_name };
            tracing::debug!("{}", miss);
            return Err(miss);
        };

        let records: Vec<&'t ServiceRecord> = found
            .services
            .iter()
            .filter(|record| service.map_or(true, |wanted| record.name == wanted))
            .collect();

        match service {
            Some(wanted) if records.is_empty() => {
                let miss = QueryMiss::ServiceNotFound {
                    node: node_name,
                    service: wanted.to_string(),
                };
                tracing::debug!("{}", miss);
                Err(miss)
            }
            _ => Ok(records),
        }
    }
}
