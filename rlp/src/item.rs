//! The structural wire value.

use primitive_types::U256;
use serde::{Deserialize, Serialize};

/// One node of an RLP tree: either a byte string or a list of further items.
///
/// Purely structural; no semantic typing is assigned. Integers enter the tree
/// as their minimal big-endian byte string, zero as the empty string.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RlpItem {
    Bytes(Vec<u8>),
    List(Vec<RlpItem>),
}

impl RlpItem {
    /// The empty byte string, which is also the wire form of integer zero.
    pub fn empty() -> Self {
        Self::Bytes(Vec::new())
    }

    pub fn empty_list() -> Self {
        Self::List(Vec::new())
    }

    /// Minimal big-endian byte string of an integer; zero maps to the empty
    /// string.
    pub fn from_uint(value: u64) -> Self {
        let be = value.to_be_bytes();
        let first = be.iter().position(|&b| b != 0).unwrap_or(be.len());
        Self::Bytes(be[first..].to_vec())
    }

    /// Minimal big-endian byte string of a 256-bit integer.
    pub fn from_u256(value: U256) -> Self {
        let be = value.to_big_endian();
        let first = be.iter().position(|&b| b != 0).unwrap_or(be.len());
        Self::Bytes(be[first..].to_vec())
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes(b) => Some(b),
            Self::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[RlpItem]> {
        match self {
            Self::Bytes(_) => None,
            Self::List(items) => Some(items),
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// Short tag for diagnostics.
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Self::Bytes(_) => "byte string",
            Self::List(_) => "list",
        }
    }
}

impl From<Vec<u8>> for RlpItem {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

impl From<&[u8]> for RlpItem {
    fn from(bytes: &[u8]) -> Self {
        Self::Bytes(bytes.to_vec())
    }
}

impl From<Vec<RlpItem>> for RlpItem {
    fn from(items: Vec<RlpItem>) -> Self {
        Self::List(items)
    }
}
