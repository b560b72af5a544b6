//! The capability interface shared by every transaction variant.

use ethwire_crypto::hash_transaction;
use ethwire_rlp::Uint;
use ethwire_types::TxHash;

use crate::error::TxError;

/// Operations every envelope variant supports.
///
/// The wire marker byte doubles as the variant discriminant during decode
/// dispatch; see [`crate::dispatch`].
pub trait Envelope {
    /// Fully framed wire bytes: the signed field set as an RLP list, with
    /// the variant's marker byte prepended for typed envelopes.
    fn encode(&self) -> Result<Vec<u8>, TxError>;

    /// The hash a private key signs.
    ///
    /// This is not `encode()` with blanked signature fields: each variant
    /// runs its dedicated unsigned schema over the unsigned projection.
    /// Legacy substitutes the chain id in the v slot; typed variants omit
    /// the signature slots entirely.
    fn sign_pre_image(&self) -> Result<TxHash, TxError>;

    /// True iff r and s are both present and non-empty.
    fn is_signed(&self) -> bool;

    /// Canonical transaction identifier: Keccak-256 of the full wire bytes,
    /// marker and signature fields included.
    fn hash(&self) -> Result<TxHash, TxError> {
        Ok(hash_transaction(&self.encode()?))
    }
}

/// Strip and validate the leading marker byte of a typed envelope.
pub(crate) fn strip_marker(raw: &[u8], expected: u8) -> Result<&[u8], TxError> {
    let (&found, rest) = raw.split_first().ok_or(TxError::Empty)?;
    if found != expected {
        return Err(TxError::MarkerMismatch { expected, found });
    }
    Ok(rest)
}

/// Prepend a marker byte to an already framed list.
pub(crate) fn frame_with_marker(marker: u8, framed: Vec<u8>) -> Vec<u8> {
    let mut out = Vec::with_capacity(framed.len() + 1);
    out.push(marker);
    out.extend_from_slice(&framed);
    out
}

/// Downcast a decoded integer to a word-sized field.
pub(crate) fn expect_small(field: &'static str, value: Uint) -> Result<u64, TxError> {
    value.as_u64().ok_or_else(|| TxError::Field {
        field,
        reason: format!("value {} exceeds 64 bits", value.to_u256()),
    })
}
