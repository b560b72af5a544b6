//! Ethereum transaction envelopes.
//!
//! Three wire formats share the same semantics but differ in framing and
//! signing preimage:
//!
//! - [`LegacyTx`]: a bare RLP list, replay-protected through the EIP-155
//!   `v = chain_id * 2 + 35 + parity` convention;
//! - [`AccessListTx`] (EIP-2930): marker byte `0x01` followed by an RLP list;
//! - [`FeeMarketTx`] (EIP-1559): marker byte `0x02` followed by an RLP list.
//!
//! Each variant owns two field-mapper schemas, one for the full signed field
//! set and one for the signing preimage. Signing itself happens outside this
//! crate; envelopes only accept externally produced signature components.

pub mod access_list;
pub mod dispatch;
pub mod envelope;
pub mod error;
pub mod fee_market;
pub mod legacy;
mod schema;

pub use access_list::AccessListTx;
pub use dispatch::{decode_transaction, Transaction};
pub use envelope::Envelope;
pub use error::TxError;
pub use fee_market::FeeMarketTx;
pub use legacy::LegacyTx;
