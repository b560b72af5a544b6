//! 20-byte account address with EIP-55 checksum encoding.
//!
//! Checksum: lowercase-hex the 20 bytes, Keccak-256 hash the 40 ASCII
//! characters, then uppercase hex letter `i` iff the hash's hex digit at the
//! same index has value >= 8. Digits are never changed.
//!
//! The lowercase and checksummed string forms are derived from the immutable
//! bytes and cached lazily; recomputing them is idempotent, so the caches need
//! no locking beyond `OnceLock`.

use std::fmt;
use std::sync::OnceLock;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha3::{Digest, Keccak256};

use crate::error::AddressError;

/// A 20-byte Ethereum account address.
#[derive(Clone, Default)]
pub struct Address {
    bytes: [u8; 20],
    lower: OnceLock<String>,
    checksum: OnceLock<String>,
}

impl Address {
    /// Address length in bytes.
    pub const LEN: usize = 20;

    pub fn new(bytes: [u8; 20]) -> Self {
        Self {
            bytes,
            lower: OnceLock::new(),
            checksum: OnceLock::new(),
        }
    }

    /// Construct from a slice, failing on any length other than 20.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, AddressError> {
        let bytes: [u8; 20] = bytes
            .try_into()
            .map_err(|_| AddressError::BadLength { length: bytes.len() })?;
        Ok(Self::new(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.bytes
    }

    /// Non-strict parse: `0x` followed by 40 hex characters, any casing.
    pub fn from_hex(addr: &str) -> Result<Self, AddressError> {
        if !Self::is_valid_string(addr) {
            return Err(AddressError::BadString {
                input: addr.to_string(),
            });
        }
        let mut bytes = [0u8; 20];
        hex::decode_to_slice(&addr[2..], &mut bytes).map_err(|_| AddressError::BadString {
            input: addr.to_string(),
        })?;
        Ok(Self::new(bytes))
    }

    /// Strict parse: the string must match its own recomputed checksum form
    /// exactly.
    pub fn from_checksum_hex(addr: &str) -> Result<Self, AddressError> {
        let expected = Self::calculate_checksum(addr)?;
        if expected != addr {
            return Err(AddressError::ChecksumMismatch {
                expected,
                found: addr.to_string(),
            });
        }
        Self::from_hex(addr)
    }

    /// Parse strictly iff the string looks checksum-cased, else non-strictly.
    ///
    /// See [`Address::has_checksum`] for the limits of the heuristic.
    pub fn from_hex_auto(addr: &str) -> Result<Self, AddressError> {
        if Self::has_checksum(addr) {
            Self::from_checksum_hex(addr)
        } else {
            Self::from_hex(addr)
        }
    }

    /// `0x`-prefixed lowercase hex form, cached on first use.
    pub fn to_hex(&self) -> &str {
        self.lower
            .get_or_init(|| format!("0x{}", hex::encode(self.bytes)))
    }

    /// EIP-55 checksummed form, cached on first use.
    pub fn to_checksum_hex(&self) -> &str {
        self.checksum
            .get_or_init(|| checksum_of(&hex::encode(self.bytes)))
    }

    /// Whether `addr` matches `0x` + 40 hex characters, case-insensitive.
    pub fn is_valid_string(addr: &str) -> bool {
        addr.len() == 42
            && addr.starts_with("0x")
            && addr[2..].bytes().all(|b| b.is_ascii_hexdigit())
    }

    /// Heuristic: a string is treated as checksum-cased iff it contains at
    /// least one uppercase `A`-`F`.
    ///
    /// This cannot distinguish "checksum omitted" from "checksum present but
    /// coincidentally all lowercase"; callers needing certainty must pick
    /// [`Address::from_hex`] or [`Address::from_checksum_hex`] explicitly.
    pub fn has_checksum(addr: &str) -> bool {
        addr.chars().any(|c| matches!(c, 'A'..='F'))
    }

    /// Recompute the checksum string for an address in any casing.
    pub fn calculate_checksum(addr: &str) -> Result<String, AddressError> {
        if !Self::is_valid_string(addr) {
            return Err(AddressError::BadString {
                input: addr.to_string(),
            });
        }
        Ok(checksum_of(&addr[2..].to_lowercase()))
    }
}

/// Apply EIP-55 casing to a 40-character lowercase hex payload.
fn checksum_of(lower40: &str) -> String {
    let hash = Keccak256::digest(lower40.as_bytes());
    let mut out = String::with_capacity(42);
    out.push_str("0x");
    for (i, c) in lower40.chars().enumerate() {
        let nibble = if i % 2 == 0 {
            hash[i / 2] >> 4
        } else {
            hash[i / 2] & 0x0f
        };
        if c.is_ascii_alphabetic() && nibble >= 8 {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}

impl PartialEq for Address {
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes
    }
}

impl Eq for Address {}

impl std::hash::Hash for Address {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.bytes.hash(state);
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_hex())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_hex())
    }
}

impl From<[u8; 20]> for Address {
    fn from(bytes: [u8; 20]) -> Self {
        Self::new(bytes)
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // EIP-55 reference vector.
    const CHECKSUMMED: &str = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";

    #[test]
    fn strict_accepts_reference_vector() {
        let addr = Address::from_checksum_hex(CHECKSUMMED).unwrap();
        assert_eq!(addr.to_checksum_hex(), CHECKSUMMED);
    }

    #[test]
    fn non_strict_accepts_lowercase() {
        let lower = CHECKSUMMED.to_lowercase();
        let addr = Address::from_hex(&lower).unwrap();
        assert_eq!(addr.to_checksum_hex(), CHECKSUMMED);
    }

    #[test]
    fn strict_rejects_wrong_casing() {
        let lower = CHECKSUMMED.to_lowercase();
        let err = Address::from_checksum_hex(&lower).unwrap_err();
        assert!(matches!(err, AddressError::ChecksumMismatch { .. }));
    }

    #[test]
    fn auto_mode_routes_on_heuristic() {
        assert!(Address::from_hex_auto(CHECKSUMMED).is_ok());
        assert!(Address::from_hex_auto(&CHECKSUMMED.to_lowercase()).is_ok());

        // One flipped-case letter makes it look checksummed, then fail strict.
        let bad = CHECKSUMMED.to_lowercase().replacen('a', "A", 1);
        assert!(Address::from_hex_auto(&bad).is_err());
    }

    #[test]
    fn has_checksum_heuristic() {
        assert!(Address::has_checksum(CHECKSUMMED));
        assert!(!Address::has_checksum(&CHECKSUMMED.to_lowercase()));
    }

    #[test]
    fn from_slice_rejects_wrong_length() {
        assert_eq!(
            Address::from_slice(&[0u8; 19]).unwrap_err(),
            AddressError::BadLength { length: 19 }
        );
        assert!(Address::from_slice(&[0u8; 20]).is_ok());
    }

    #[test]
    fn rejects_malformed_strings() {
        assert!(Address::from_hex("0x123").is_err());
        assert!(Address::from_hex("5aaeb6053f3e94c9b9a09f33669435e7ef1beaed").is_err());
        assert!(Address::from_hex("0xzzaeb6053f3e94c9b9a09f33669435e7ef1beaed").is_err());
    }

    #[test]
    fn checksum_accessor_is_idempotent() {
        let addr = Address::from_hex(&CHECKSUMMED.to_lowercase()).unwrap();
        let bytes_before = *addr.as_bytes();
        let first = addr.to_checksum_hex().to_string();
        let second = addr.to_checksum_hex().to_string();
        assert_eq!(first, second);
        assert_eq!(*addr.as_bytes(), bytes_before);
    }

    #[test]
    fn serde_roundtrip() {
        let addr = Address::from_checksum_hex(CHECKSUMMED).unwrap();
        let json = serde_json::to_string(&addr).unwrap();
        let back: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(addr, back);
    }
}
