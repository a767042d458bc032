//! Recognizers for the hierarchical snapshot keys
//!
//! Two key shapes carry topology:
//!
//! ```text
//! m0conf/nodes/<node-id>                                            node declaration
//! m0conf/nodes/<node>/processes/<process>/services/<service-type>   service binding
//! ```
//!
//! Anything else is ignored.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use crate::model::ServiceFamily;
use crate::snapshot::KvPair;

static NODE_KEY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^m0conf/nodes/([A-Za-z0-9:]+)$").expect("valid node key pattern"));

static SERVICE_KEY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^m0conf/nodes/([^/]+)/processes/([0-9]+)/services/(confd|ios|m0_client_s3)$")
        .expect("valid service key pattern")
});

/// A node declared in the snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeDecl {
    /// Last segment of the declaration key
    pub id: String,
    /// Display name taken from the declaration value
    pub name: String,
}

#[derive(Deserialize)]
struct NodeValue {
    name: String,
}

/// A decomposed service-binding key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceBinding {
    /// Node segment of the key (a node id or a node name)
    pub node: String,
    pub process: u64,
    pub family: ServiceFamily,
}

/// Whether `key` has the exact shape of a node declaration
pub fn is_node_key(key: &str) -> bool {
    NODE_KEY.is_match(key)
}

/// Match a node declaration and extract its display name from the value
pub fn match_node_declaration(pair: &KvPair) -> Option<NodeDecl> {
    let caps = NODE_KEY.captures(&pair.key)?;
    match serde_json::from_str::<NodeValue>(&pair.value) {
        Ok(value) => Some(NodeDecl {
            id: caps[1].to_string(),
            name: value.name,
        }),
        Err(err) => {
            tracing::debug!(key = %pair.key, error = %err, "skipping node declaration without a name");
            None
        }
    }
}

/// Match a service-binding key and decompose it
pub fn match_service_key(key: &str) -> Option<ServiceBinding> {
    let caps = SERVICE_KEY.captures(key)?;
    let process = match caps[2].parse::<u64>() {
        Ok(process) => process,
        Err(_) => {
            tracing::debug!(key, "skipping service key with out-of-range process id");
            return None;
        }
    };
    Some(ServiceBinding {
        node: caps[1].to_string(),
        process,
        family: ServiceFamily::from_token(&caps[3])?,
    })
}
