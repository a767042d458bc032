//! fidmap-fid: Motr object identifiers
//!
//! A fid is a `(container, key)` pair of 64-bit integers. The container
//! carries the object type tag in its high byte; the key is the object's
//! numeric id. The canonical textual form is `0x<container>:0x<key>` in
//! lowercase hex.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Errors produced when parsing a textual fid
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FidError {
    #[error("fid '{0}' is missing the ':' separator")]
    MissingSeparator(String),

    #[error("fid component '{0}' is not a 0x-prefixed hex number")]
    InvalidComponent(String),
}

/// Object types that fidmap knows how to tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjType {
    /// A Motr process (`'r'` type, container 1)
    Process,
}

impl ObjType {
    /// Container tag used when encoding fids of this type
    pub const fn tag(self) -> u64 {
        match self {
            ObjType::Process => 0x7200_0000_0000_0001,
        }
    }

    /// Build a fid of this type for the given key
    pub const fn fid(self, key: u64) -> Fid {
        Fid::new(self.tag(), key)
    }

    /// Recover the object type from a fid's container tag
    pub fn of(fid: &Fid) -> Option<ObjType> {
        match fid.container {
            c if c == ObjType::Process.tag() => Some(ObjType::Process),
            _ => None,
        }
    }
}

/// Encode a `(type tag, key)` pair into its textual fid form.
///
/// ```
/// assert_eq!(fidmap_fid::encode(0x20, 5), "0x20:0x5");
/// ```
pub fn encode(tag: u64, key: u64) -> String {
    format!("{:#x}:{:#x}", tag, key)
}

/// A `(container, key)` object identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fid {
    pub container: u64,
    pub key: u64,
}

impl Fid {
    pub const fn new(container: u64, key: u64) -> Self {
        Self { container, key }
    }
}

impl fmt::Display for Fid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode(self.container, self.key))
    }
}

fn parse_component(part: &str) -> Result<u64, FidError> {
    let digits = part
        .strip_prefix("0x")
        .or_else(|| part.strip_prefix("0X"))
        .ok_or_else(|| FidError::InvalidComponent(part.to_string()))?;
    u64::from_str_radix(digits, 16).map_err(|_| FidError::InvalidComponent(part.to_string()))
}

impl FromStr for Fid {
    type Err = FidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (container, key) = s
            .split_once(':')
            .ok_or_else(|| FidError::MissingSeparator(s.to_string()))?;
        Ok(Fid::new(parse_component(container)?, parse_component(key)?))
    }
}

impl Serialize for Fid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Fid {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
