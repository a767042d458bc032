//! In-memory cluster model

use std::fmt;
use std::str::FromStr;

use fidmap_fid::{Fid, ObjType};
use serde::Serialize;

/// Service families recognized in service-binding keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceFamily {
    /// Configuration service
    Confd,
    /// I/O service
    IoService,
    /// Object-storage front-end
    S3Server,
}

impl ServiceFamily {
    pub const ALL: [ServiceFamily; 3] = [
        ServiceFamily::Confd,
        ServiceFamily::IoService,
        ServiceFamily::S3Server,
    ];

    /// Map the short code used in snapshot keys to a family
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "confd" => Some(ServiceFamily::Confd),
            "ios" => Some(ServiceFamily::IoService),
            "m0_client_s3" => Some(ServiceFamily::S3Server),
            _ => None,
        }
    }

    /// Short code used in snapshot keys
    pub fn token(self) -> &'static str {
        match self {
            ServiceFamily::Confd => "confd",
            ServiceFamily::IoService => "ios",
            ServiceFamily::S3Server => "m0_client_s3",
        }
    }

    /// Human-readable family name
    pub fn as_str(self) -> &'static str {
        match self {
            ServiceFamily::Confd => "confd",
            ServiceFamily::IoService => "ioservice",
            ServiceFamily::S3Server => "s3server",
        }
    }
}

impl fmt::Display for ServiceFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceFamily {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ServiceFamily::ALL
            .into_iter()
            .find(|family| family.as_str() == s)
            .ok_or_else(|| format!("Unknown service: {}. Expected: confd, ioservice, or s3server", s))
    }
}

/// One running service instance on a node
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceRecord {
    pub name: String,
    pub fid: Fid,
}

impl ServiceRecord {
    pub fn new(family: ServiceFamily, process: u64) -> Self {
        Self {
            name: family.as_str().to_string(),
            fid: ObjType::Process.fid(process),
        }
    }
}

/// A cluster member and the services discovered on it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    /// Identifier segment of the node's declaration key
    #[serde(skip)]
    pub id: String,
    pub name: String,
    pub services: Vec<ServiceRecord>,
}

impl Node {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            services: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, record: ServiceRecord) {
        self.services.push(record);
    }
}

/// All nodes of one snapshot, in declaration order.
///
/// Only `builder::build` constructs a `Topology`, so every instance holds
/// at least one node and every node at least one service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Topology {
    nodes: Vec<Node>,
}

impl Topology {
    pub(crate) fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// First node with the given display name
    pub fn node(&self, name: &str) -> Option<&Node> {
        self.nodes.iter().find(|node| node.name == name)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
