//! The legacy (pre-typed) transaction format.
//!
//! A legacy transaction is a bare 9-slot RLP list with no marker byte. Replay
//! protection follows EIP-155: a fresh or unsigned transaction carries the
//! chain id in its v slot, and signing replaces it with
//! `chain_id * 2 + 35 + parity`.

use serde::{Deserialize, Serialize};

use ethwire_crypto::{hash_transaction, SignatureParts};
use ethwire_rlp::{self as rlp, FieldMap, MapValue, Mappable, Uint};
use ethwire_types::{Address, NetworkConfig, TxHash, WeiAmount};

use crate::envelope::{expect_small, Envelope};
use crate::error::TxError;
use crate::schema;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyTx {
    pub nonce: u64,
    pub gas_price: WeiAmount,
    pub gas_limit: u64,
    /// Absent for contract creation.
    pub to: Option<Address>,
    pub value: WeiAmount,
    pub data: Vec<u8>,
    /// Chain id while unsigned, `chain_id * 2 + 35 + parity` once signed.
    pub v: u64,
    pub r: Vec<u8>,
    pub s: Vec<u8>,
    chain_id: u64,
}

impl LegacyTx {
    /// A fresh, unsigned transaction for the given network.
    pub fn new(network: NetworkConfig) -> Self {
        Self {
            nonce: 0,
            gas_price: WeiAmount::ZERO,
            gas_limit: 0,
            to: None,
            value: WeiAmount::ZERO,
            data: Vec::new(),
            v: network.chain_id,
            r: Vec::new(),
            s: Vec::new(),
            chain_id: network.chain_id,
        }
    }

    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// A copy with the signature cleared and v reset to the chain id.
    pub fn to_unsigned(&self) -> Self {
        let mut unsigned = self.clone();
        unsigned.v = self.chain_id;
        unsigned.r.clear();
        unsigned.s.clear();
        unsigned
    }

    /// Apply externally produced signature components.
    pub fn set_signature(&mut self, sig: &SignatureParts) {
        self.v = sig.legacy_v(self.chain_id);
        self.r = sig.r_trimmed().to_vec();
        self.s = sig.s_trimmed().to_vec();
    }

    /// Decode a bare RLP list. Legacy carries no marker byte to strip.
    pub fn decode(raw: &[u8], network: NetworkConfig) -> Result<Self, TxError> {
        let top = rlp::decode(raw)?;
        let items = top.as_list().ok_or(TxError::ExpectedList)?;
        let map = schema::LEGACY.decode(items)?;
        Self::from_map(map, network)
    }

    /// Build the immutable transaction from a complete decode in one step.
    fn from_map(mut map: FieldMap, network: NetworkConfig) -> Result<Self, TxError> {
        Ok(Self {
            nonce: expect_small("nonce", map.take_uint("nonce")?)?,
            gas_price: map.take_wei("gas_price")?,
            gas_limit: expect_small("gas_limit", map.take_uint("gas_limit")?)?,
            to: map.take_address("to")?,
            value: map.take_wei("value")?,
            data: map.take_bytes("data")?,
            v: expect_small("v", map.take_uint("v")?)?,
            r: map.take_bytes("r")?,
            s: map.take_bytes("s")?,
            chain_id: network.chain_id,
        })
    }
}

impl Mappable for LegacyTx {
    fn field(&self, name: &str) -> Option<MapValue> {
        match name {
            "nonce" => Some(MapValue::Uint(Uint::Small(self.nonce))),
            "gas_price" => Some(MapValue::Wei(self.gas_price)),
            "gas_limit" => Some(MapValue::Uint(Uint::Small(self.gas_limit))),
            "to" => Some(MapValue::Address(self.to.clone())),
            "value" => Some(MapValue::Wei(self.value)),
            "data" => Some(MapValue::Bytes(self.data.clone())),
            "v" => Some(MapValue::Uint(Uint::Small(self.v))),
            "r" => Some(MapValue::Bytes(self.r.clone())),
            "s" => Some(MapValue::Bytes(self.s.clone())),
            _ => None,
        }
    }
}

impl Envelope for LegacyTx {
    fn encode(&self) -> Result<Vec<u8>, TxError> {
        let items = schema::LEGACY.encode(self)?;
        Ok(rlp::encode_items(&items))
    }

    fn sign_pre_image(&self) -> Result<TxHash, TxError> {
        let unsigned = if self.is_signed() {
            self.to_unsigned()
        } else {
            self.clone()
        };
        Ok(hash_transaction(&unsigned.encode()?))
    }

    fn is_signed(&self) -> bool {
        !self.r.is_empty() && !self.s.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transfer() -> LegacyTx {
        let mut tx = LegacyTx::new(NetworkConfig::mainnet());
        tx.nonce = 9;
        tx.gas_price = WeiAmount::from_u64(20_000_000_000);
        tx.gas_limit = 21_000;
        tx.to = Some(Address::new([0x35; 20]));
        tx.value = WeiAmount::from_u64(1_000_000_000_000_000_000);
        tx
    }

    #[test]
    fn fresh_transaction_carries_chain_id_in_v() {
        let tx = LegacyTx::new(NetworkConfig::mainnet());
        assert_eq!(tx.v, 1);
        assert!(!tx.is_signed());
    }

    #[test]
    fn unsigned_preimage_encodes_chain_id_and_empty_signature() {
        let encoded = transfer().to_unsigned().encode().unwrap();
        // ... v = 1, r = "", s = ""
        assert_eq!(&encoded[encoded.len() - 3..], &[0x01, 0x80, 0x80]);
    }

    #[test]
    fn signing_folds_parity_into_v() {
        let mut tx = transfer();
        tx.set_signature(&SignatureParts::new(vec![0xaa; 32], vec![0xbb; 32], 0));
        assert_eq!(tx.v, 37); // 1*2 + 35
        assert!(tx.is_signed());

        let mut tx = transfer();
        tx.set_signature(&SignatureParts::new(vec![0xaa; 32], vec![0xbb; 32], 1));
        assert_eq!(tx.v, 38); // 1*2 + 36
    }

    #[test]
    fn preimage_is_stable_across_signing() {
        let unsigned = transfer();
        let before = unsigned.sign_pre_image().unwrap();
        let mut signed = unsigned.clone();
        signed.set_signature(&SignatureParts::new(vec![0xaa; 32], vec![0xbb; 32], 0));
        assert_eq!(signed.sign_pre_image().unwrap(), before);
        assert_ne!(signed.hash().unwrap(), before);
    }

    #[test]
    fn to_unsigned_resets_signature_fields() {
        let mut tx = transfer();
        tx.set_signature(&SignatureParts::new(vec![0xaa; 32], vec![0xbb; 32], 1));
        let unsigned = tx.to_unsigned();
        assert_eq!(unsigned.v, 1);
        assert!(unsigned.r.is_empty());
        assert!(unsigned.s.is_empty());
        assert!(!unsigned.is_signed());
        // The original is untouched.
        assert!(tx.is_signed());
    }

    #[test]
    fn roundtrip_preserves_every_field() {
        let mut tx = transfer();
        tx.data = vec![0xde, 0xad, 0xbe, 0xef];
        tx.set_signature(&SignatureParts::new(vec![0x11; 32], vec![0x22; 32], 1));
        let raw = tx.encode().unwrap();
        let back = LegacyTx::decode(&raw, NetworkConfig::mainnet()).unwrap();
        assert_eq!(back, tx);
    }

    #[test]
    fn contract_creation_roundtrip() {
        let mut tx = transfer();
        tx.to = None;
        tx.data = vec![0x60, 0x80, 0x60, 0x40];
        tx.set_signature(&SignatureParts::new(vec![0x11; 32], vec![0x22; 32], 0));
        let raw = tx.encode().unwrap();
        let back = LegacyTx::decode(&raw, NetworkConfig::mainnet()).unwrap();
        assert_eq!(back.to, None);
        assert_eq!(back, tx);
    }

    #[test]
    fn decode_rejects_non_list() {
        let raw = rlp::encode(&rlp::RlpItem::Bytes(b"not a tx".to_vec()));
        let err = LegacyTx::decode(&raw, NetworkConfig::mainnet()).unwrap_err();
        assert_eq!(err, TxError::ExpectedList);
    }

    #[test]
    fn decode_rejects_short_list() {
        let raw = rlp::encode_items(&[rlp::RlpItem::from_uint(9)]);
        let err = LegacyTx::decode(&raw, NetworkConfig::mainnet()).unwrap_err();
        assert!(matches!(err, TxError::Mapper(_)));
    }
}
