//! Fundamental types for ethwire.
//!
//! This crate defines the value types shared across every other crate in the
//! workspace: 20-byte account addresses with EIP-55 checksum caching, wei
//! amounts, 32-byte transaction hashes, network configuration, and the hex
//! conventions used at text boundaries.

pub mod address;
pub mod amount;
pub mod error;
pub mod hash;
pub mod hex;
pub mod network;

pub use address::Address;
pub use amount::WeiAmount;
pub use error::{AddressError, AmountError, HashError, HexError};
pub use hash::TxHash;
pub use network::NetworkConfig;
