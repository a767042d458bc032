//! Assemble a topology from snapshot matches

use crate::error::TopologyError;
use crate::model::{Node, ServiceRecord, Topology};
use crate::pattern::{self, NodeDecl};
use crate::snapshot::{KvPair, Snapshot};

/// Collect node declarations in encounter order
pub fn collect_nodes(pairs: &[KvPair]) -> Result<Vec<NodeDecl>, TopologyError> {
    let nodes: Vec<NodeDecl> = pairs.iter().filter_map(pattern::match_node_declaration).collect();
    if nodes.is_empty() {
        return Err(TopologyError::NoNodes);
    }
    Ok(nodes)
}

/// Collect declared node display names in encounter order
pub fn collect_node_names(pairs: &[KvPair]) -> Result<Vec<String>, TopologyError> {
    Ok(collect_nodes(pairs)?.into_iter().map(|decl| decl.name).collect())
}

/// Collect the keys of all recognized service bindings
pub fn collect_service_keys(pairs: &[KvPair]) -> Result<Vec<String>, TopologyError> {
    let keys: Vec<String> = pairs
        .iter()
        .filter(|pair| pattern::match_service_key(&pair.key).is_some())
        .map(|pair| pair.key.clone())
        .collect();
    if keys.is_empty() {
        return Err(TopologyError::NoServices);
    }
    Ok(keys)
}

/// Attach services to the declared nodes.
///
/// The node segment of a service key is resolved against node ids first and
/// display names second. Keys that resolve to no node are dropped.
pub fn build(nodes: Vec<NodeDecl>, service_keys: &[String]) -> Result<Topology, TopologyError> {
    if nodes.is_empty() {
        return Err(TopologyError::NoNodes);
    }
    let mut nodes: Vec<Node> = nodes
        .into_iter()
        .map(|decl| Node::new(decl.id, decl.name))
        .collect();

    for key in service_keys {
        let Some(binding) = pattern::match_service_key(key) else {
            tracing::debug!(key = %key, "ignoring unrecognized service key");
            continue;
        };

        let slot = nodes
            .iter()
            .position(|node| node.id == binding.node)
            .or_else(|| nodes.iter().position(|node| node.name == binding.node));

        match slot {
            Some(index) => nodes[index].push(ServiceRecord::new(binding.family, binding.process)),
            None => tracing::warn!(key = %key, node = %binding.node, "service key refers to an undeclared node"),
        }
    }

    if let Some(empty) = nodes.iter().find(|node| node.services.is_empty()) {
        return Err(TopologyError::NodeWithoutServices {
            node: empty.name.clone(),
        });
    }

    tracing::info!(
        nodes = nodes.len(),
        services = nodes.iter().map(|node| node.services.len()).sum::<usize>(),
        "built topology"
    );
    Ok(Topology::new(nodes))
}

/// Run the full collect-and-build pipeline over a snapshot
pub fn build_topology(snapshot: &Snapshot) -> Result<Topology, TopologyError> {
    let nodes = collect_nodes(snapshot.pairs())?;
    let service_keys = collect_service_keys(snapshot.pairs())?;
    build(nodes, &service_keys)
}
