//! Variant detection for raw transaction bytes.
//!
//! Typed envelopes open with a marker byte below 0x80; a legacy payload
//! opens with its RLP list prefix, which is always 0xc0 or above. Legacy
//! payloads carry no tag of their own; routing on the first byte works only
//! because the marker range and the RLP prefix ranges are disjoint, a
//! structural property the wire format guarantees.

use serde::{Deserialize, Serialize};
use tracing::trace;

use ethwire_crypto::SignatureParts;
use ethwire_types::{NetworkConfig, TxHash};

use crate::access_list::AccessListTx;
use crate::envelope::Envelope;
use crate::error::TxError;
use crate::fee_market::FeeMarketTx;
use crate::legacy::LegacyTx;

/// Any transaction variant, unified behind one type for callers that handle
/// raw wire bytes of unknown provenance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transaction {
    Legacy(LegacyTx),
    AccessList(AccessListTx),
    FeeMarket(FeeMarketTx),
}

/// Everything below this is a typed-envelope marker, not RLP framing.
const MARKER_CEILING: u8 = 0x7f;

/// Route raw wire bytes to the matching variant decoder.
pub fn decode_transaction(raw: &[u8], network: NetworkConfig) -> Result<Transaction, TxError> {
    let &first = raw.first().ok_or(TxError::Empty)?;
    if first < MARKER_CEILING {
        match first {
            AccessListTx::MARKER => {
                trace!(marker = first, len = raw.len(), "decoding access-list transaction");
                Ok(Transaction::AccessList(AccessListTx::decode(raw)?))
            }
            FeeMarketTx::MARKER => {
                trace!(marker = first, len = raw.len(), "decoding fee-market transaction");
                Ok(Transaction::FeeMarket(FeeMarketTx::decode(raw)?))
            }
            found => Err(TxError::UnsupportedMarker { found }),
        }
    } else {
        trace!(len = raw.len(), "decoding legacy transaction");
        Ok(Transaction::Legacy(LegacyTx::decode(raw, network)?))
    }
}

impl Transaction {
    /// The marker byte for typed variants, none for legacy.
    pub fn marker(&self) -> Option<u8> {
        match self {
            Transaction::Legacy(_) => None,
            Transaction::AccessList(_) => Some(AccessListTx::MARKER),
            Transaction::FeeMarket(_) => Some(FeeMarketTx::MARKER),
        }
    }

    pub fn set_signature(&mut self, sig: &SignatureParts) {
        match self {
            Transaction::Legacy(tx) => tx.set_signature(sig),
            Transaction::AccessList(tx) => tx.set_signature(sig),
            Transaction::FeeMarket(tx) => tx.set_signature(sig),
        }
    }
}

impl Envelope for Transaction {
    fn encode(&self) -> Result<Vec<u8>, TxError> {
        match self {
            Transaction::Legacy(tx) => tx.encode(),
            Transaction::AccessList(tx) => tx.encode(),
            Transaction::FeeMarket(tx) => tx.encode(),
        }
    }

    fn sign_pre_image(&self) -> Result<TxHash, TxError> {
        match self {
            Transaction::Legacy(tx) => tx.sign_pre_image(),
            Transaction::AccessList(tx) => tx.sign_pre_image(),
            Transaction::FeeMarket(tx) => tx.sign_pre_image(),
        }
    }

    fn is_signed(&self) -> bool {
        match self {
            Transaction::Legacy(tx) => tx.is_signed(),
            Transaction::AccessList(tx) => tx.is_signed(),
            Transaction::FeeMarket(tx) => tx.is_signed(),
        }
    }
}

impl From<LegacyTx> for Transaction {
    fn from(tx: LegacyTx) -> Self {
        Transaction::Legacy(tx)
    }
}

impl From<AccessListTx> for Transaction {
    fn from(tx: AccessListTx) -> Self {
        Transaction::AccessList(tx)
    }
}

impl From<FeeMarketTx> for Transaction {
    fn from(tx: FeeMarketTx) -> Self {
        Transaction::FeeMarket(tx)
    }
}
