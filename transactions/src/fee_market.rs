//! The EIP-1559 fee-market transaction, envelope marker `0x02`.
//!
//! Replaces the single gas price with a priority tip cap and an overall fee
//! cap. Wire form is `0x02 || rlp([chain_id, nonce, max_priority_fee_per_gas,
//! max_fee_per_gas, gas_limit, to, value, data, access_list, y_parity, r,
//! s])`; the signing preimage covers the first nine slots.

use serde::{Deserialize, Serialize};

use ethwire_crypto::{hash_transaction, SignatureParts};
use ethwire_rlp::{self as rlp, FieldMap, MapValue, Mappable, RlpItem, Uint};
use ethwire_types::{Address, NetworkConfig, TxHash, WeiAmount};

use crate::envelope::{expect_small, frame_with_marker, strip_marker, Envelope};
use crate::error::TxError;
use crate::schema;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeMarketTx {
    pub chain_id: u64,
    pub nonce: u64,
    /// Tip cap paid to the block producer, per gas unit.
    pub max_priority_fee_per_gas: WeiAmount,
    /// Total per-gas ceiling, base fee included.
    pub max_fee_per_gas: WeiAmount,
    pub gas_limit: u64,
    /// Absent for contract creation.
    pub to: Option<Address>,
    pub value: WeiAmount,
    pub data: Vec<u8>,
    /// Opaque `[[address, [storage_key, ...]], ...]` structure.
    pub access_list: RlpItem,
    pub y_parity: Option<bool>,
    pub r: Vec<u8>,
    pub s: Vec<u8>,
}

impl FeeMarketTx {
    /// The envelope marker byte this variant answers to.
    pub const MARKER: u8 = 0x02;

    /// A fresh, unsigned transaction for the given network.
    pub fn new(network: NetworkConfig) -> Self {
        Self {
            chain_id: network.chain_id,
            nonce: 0,
            max_priority_fee_per_gas: WeiAmount::ZERO,
            max_fee_per_gas: WeiAmount::ZERO,
            gas_limit: 0,
            to: None,
            value: WeiAmount::ZERO,
            data: Vec::new(),
            access_list: RlpItem::empty_list(),
            y_parity: None,
            r: Vec::new(),
            s: Vec::new(),
        }
    }

    /// A copy with the signature fields nulled out.
    pub fn to_unsigned(&self) -> Self {
        let mut unsigned = self.clone();
        unsigned.y_parity = None;
        unsigned.r.clear();
        unsigned.s.clear();
        unsigned
    }

    /// Apply externally produced signature components; parity is stored
    /// directly, with no arithmetic transform.
    pub fn set_signature(&mut self, sig: &SignatureParts) {
        self.y_parity = Some(sig.y_parity());
        self.r = sig.r_trimmed().to_vec();
        self.s = sig.s_trimmed().to_vec();
    }

    /// Strip and validate the marker byte, then decode the RLP list behind
    /// it.
    pub fn decode(raw: &[u8]) -> Result<Self, TxError> {
        let payload = strip_marker(raw, Self::MARKER)?;
        let top = rlp::decode(payload)?;
        let items = top.as_list().ok_or(TxError::ExpectedList)?;
        let map = schema::FEE_MARKET.decode(items)?;
        Self::from_map(map)
    }

    fn from_map(mut map: FieldMap) -> Result<Self, TxError> {
        Ok(Self {
            chain_id: expect_small("chain_id", map.take_uint("chain_id")?)?,
            nonce: expect_small("nonce", map.take_uint("nonce")?)?,
            max_priority_fee_per_gas: map.take_wei("max_priority_fee_per_gas")?,
            max_fee_per_gas: map.take_wei("max_fee_per_gas")?,
            gas_limit: expect_small("gas_limit", map.take_uint("gas_limit")?)?,
            to: map.take_address("to")?,
            value: map.take_wei("value")?,
            data: map.take_bytes("data")?,
            access_list: map.take_raw("access_list")?,
            y_parity: Some(map.take_bool("y_parity")?),
            r: map.take_bytes("r")?,
            s: map.take_bytes("s")?,
        })
    }
}

impl Mappable for FeeMarketTx {
    fn field(&self, name: &str) -> Option<MapValue> {
        match name {
            "chain_id" => Some(MapValue::Uint(Uint::Small(self.chain_id))),
            "nonce" => Some(MapValue::Uint(Uint::Small(self.nonce))),
            "max_priority_fee_per_gas" => Some(MapValue::Wei(self.max_priority_fee_per_gas)),
            "max_fee_per_gas" => Some(MapValue::Wei(self.max_fee_per_gas)),
            "gas_limit" => Some(MapValue::Uint(Uint::Small(self.gas_limit))),
            "to" => Some(MapValue::Address(self.to.clone())),
            "value" => Some(MapValue::Wei(self.value)),
            "data" => Some(MapValue::Bytes(self.data.clone())),
            "access_list" => Some(MapValue::Raw(self.access_list.clone())),
            "y_parity" => Some(MapValue::Bool(self.y_parity.unwrap_or(false))),
            "r" => Some(MapValue::Bytes(self.r.clone())),
            "s" => Some(MapValue::Bytes(self.s.clone())),
            _ => None,
        }
    }
}

impl Envelope for FeeMarketTx {
    fn encode(&self) -> Result<Vec<u8>, TxError> {
        let items = schema::FEE_MARKET.encode(self)?;
        Ok(frame_with_marker(Self::MARKER, rlp::encode_items(&items)))
    }

    fn sign_pre_image(&self) -> Result<TxHash, TxError> {
        let unsigned = if self.is_signed() {
            self.to_unsigned()
        } else {
            self.clone()
        };
        let items = schema::FEE_MARKET_UNSIGNED.encode(&unsigned)?;
        let framed = frame_with_marker(Self::MARKER, rlp::encode_items(&items));
        Ok(hash_transaction(&framed))
    }

    fn is_signed(&self) -> bool {
        !self.r.is_empty() && !self.s.is_empty()
    }
}
