//! Wei amounts.
//!
//! A wei amount is a non-negative 256-bit integer denominating value in the
//! ledger's smallest unit. The canonical wire form is minimal big-endian
//! bytes: no leading zero byte, and zero encodes as the empty byte string.

use std::fmt;

use primitive_types::U256;
use serde::{Deserialize, Serialize};

use crate::error::AmountError;

/// A non-negative amount of wei.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WeiAmount(U256);

impl WeiAmount {
    pub const ZERO: Self = Self(U256::zero());

    pub fn new(value: U256) -> Self {
        Self(value)
    }

    pub fn from_u64(value: u64) -> Self {
        Self(U256::from(value))
    }

    pub fn from_u128(value: u128) -> Self {
        Self(U256::from(value))
    }

    pub fn value(&self) -> U256 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    /// Minimal big-endian byte form: no leading zero byte, zero is empty.
    pub fn to_be_bytes_trimmed(&self) -> Vec<u8> {
        let full = self.0.to_big_endian();
        let first = full.iter().position(|&b| b != 0).unwrap_or(full.len());
        full[first..].to_vec()
    }

    /// Construct from big-endian bytes of at most 32 bytes.
    ///
    /// Leading zero bytes are tolerated here; producing canonical output is
    /// the encoder's job.
    pub fn from_be_bytes(bytes: &[u8]) -> Result<Self, AmountError> {
        if bytes.len() > 32 {
            return Err(AmountError::Oversized {
                length: bytes.len(),
            });
        }
        Ok(Self(U256::from_big_endian(bytes)))
    }
}

impl fmt::Display for WeiAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} wei", self.0)
    }
}

impl From<u64> for WeiAmount {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl From<U256> for WeiAmount {
    fn from(value: U256) -> Self {
        Self::new(value)
    }
}
