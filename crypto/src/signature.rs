//! Recoverable signature components as produced by an external signer.
//!
//! The signing collaborator exposes `sign(hash) -> (r, s, recovery_id)`.
//! This module only interprets those components: the recovery id collapses
//! to a single y-parity bit, which legacy envelopes fold into `v` per the
//! EIP-155 replay-protection convention while typed envelopes store it
//! directly.

/// The components of one recoverable ECDSA signature.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignatureParts {
    pub r: Vec<u8>,
    pub s: Vec<u8>,
    pub recovery_id: u8,
}

impl SignatureParts {
    pub fn new(r: Vec<u8>, s: Vec<u8>, recovery_id: u8) -> Self {
        Self { r, s, recovery_id }
    }

    /// True iff the recovery id is one of the two odd-parity branch values.
    pub fn y_parity(&self) -> bool {
        matches!(self.recovery_id, 1 | 4)
    }

    /// Legacy replay-protected v: `chain_id * 2 + 35 + parity`.
    pub fn legacy_v(&self, chain_id: u64) -> u64 {
        chain_id * 2 + 35 + u64::from(self.y_parity())
    }

    /// `r` with leading zero bytes stripped, the wire-canonical integer form.
    pub fn r_trimmed(&self) -> &[u8] {
        trim_leading_zeros(&self.r)
    }

    /// `s` with leading zero bytes stripped.
    pub fn s_trimmed(&self) -> &[u8] {
        trim_leading_zeros(&self.s)
    }
}

fn trim_leading_zeros(bytes: &[u8]) -> &[u8] {
    let first = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    &bytes[first..]
}
