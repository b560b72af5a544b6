//! Cryptographic primitives for ethwire: Keccak-256 hashing and recoverable
//! signature component conventions.
//!
//! Elliptic-curve math itself is an external collaborator; this crate only
//! hashes bytes and interprets the components a signer hands back.

pub mod hash;
pub mod signature;

pub use hash::{hash_transaction, keccak256, keccak256_multi};
pub use signature::SignatureParts;
