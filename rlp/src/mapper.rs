//! Declarative field-to-wire mapping.
//!
//! A [`Mapper`] binds an ordered list of named, typed slots to wire
//! positions. It is built once per transaction shape and used symmetrically:
//! [`Mapper::encode`] reads fields off a [`Mappable`] object by name and
//! produces the item sequence, [`Mapper::decode`] projects a decoded RLP list
//! back into a name-keyed [`FieldMap`].
//!
//! Name-keyed access is an explicit accessor table, not reflection: each
//! transaction implements [`Mappable`] as a match over its field names, so
//! the schema/struct agreement is checked by the mapper at runtime and by the
//! compiler at the accessor site.

use std::collections::BTreeMap;

use primitive_types::U256;

use ethwire_types::{Address, WeiAmount};

use crate::error::MapperError;
use crate::item::RlpItem;

/// Declared kind of one wire slot.
#[derive(Debug)]
enum SlotKind {
    /// Consumes a position, projects nothing.
    Skip,
    Uint,
    Address,
    Wei,
    Bool,
    Bytes,
    Nested(Mapper),
    /// The decoded item is passed through unconverted.
    Raw,
}

#[derive(Debug)]
struct Slot {
    name: &'static str,
    kind: SlotKind,
}

/// An ordered schema of named, typed wire slots.
#[derive(Debug, Default)]
pub struct Mapper {
    slots: Vec<Slot>,
}

/// An unsigned integer decoded off the wire.
///
/// A value that fits a native word stays native; anything larger is kept at
/// full 256-bit width. Downstream consumers must accept both.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Uint {
    Small(u64),
    Big(U256),
}

impl Uint {
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::Small(v) => Some(*v),
            Self::Big(_) => None,
        }
    }

    pub fn to_u256(&self) -> U256 {
        match self {
            Self::Small(v) => U256::from(*v),
            Self::Big(v) => *v,
        }
    }

    fn from_u256(value: U256) -> Self {
        if value.bits() <= 64 {
            Self::Small(value.as_u64())
        } else {
            Self::Big(value)
        }
    }
}

/// A field value crossing the mapping layer in either direction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MapValue {
    Uint(Uint),
    Wei(WeiAmount),
    Bool(bool),
    Bytes(Vec<u8>),
    /// `None` is the absent recipient (contract creation), encoded as the
    /// empty byte string.
    Address(Option<Address>),
    Nested(FieldMap),
    Raw(RlpItem),
}

impl MapValue {
    fn kind(&self) -> &'static str {
        match self {
            Self::Uint(_) => "uint",
            Self::Wei(_) => "wei",
            Self::Bool(_) => "bool",
            Self::Bytes(_) => "bytes",
            Self::Address(_) => "address",
            Self::Nested(_) => "nested map",
            Self::Raw(_) => "raw item",
        }
    }
}

/// Name-keyed accessor table implemented by every mappable object.
pub trait Mappable {
    /// Read the field called `name`, or `None` if no such field exists.
    fn field(&self, name: &str) -> Option<MapValue>;
}

/// The name-keyed result of a decode pass.
///
/// Envelopes convert a complete `FieldMap` into their immutable domain struct
/// in one step; a partially-populated transaction is never observable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldMap(BTreeMap<&'static str, MapValue>);

impl FieldMap {
    pub fn get(&self, name: &str) -> Option<&MapValue> {
        self.0.get(name)
    }

    /// Remove and return a field, failing if it was never decoded.
    pub fn take(&mut self, name: &'static str) -> Result<MapValue, MapperError> {
        self.0
            .remove(name)
            .ok_or(MapperError::MissingField { field: name })
    }

    pub fn take_uint(&mut self, name: &'static str) -> Result<Uint, MapperError> {
        match self.take(name)? {
            MapValue::Uint(v) => Ok(v),
            other => Err(bad(name, "uint", &other)),
        }
    }

    pub fn take_wei(&mut self, name: &'static str) -> Result<WeiAmount, MapperError> {
        match self.take(name)? {
            MapValue::Wei(v) => Ok(v),
            other => Err(bad(name, "wei", &other)),
        }
    }

    pub fn take_bool(&mut self, name: &'static str) -> Result<bool, MapperError> {
        match self.take(name)? {
            MapValue::Bool(v) => Ok(v),
            other => Err(bad(name, "bool", &other)),
        }
    }

    pub fn take_bytes(&mut self, name: &'static str) -> Result<Vec<u8>, MapperError> {
        match self.take(name)? {
            MapValue::Bytes(v) => Ok(v),
            other => Err(bad(name, "bytes", &other)),
        }
    }

    pub fn take_address(&mut self, name: &'static str) -> Result<Option<Address>, MapperError> {
        match self.take(name)? {
            MapValue::Address(v) => Ok(v),
            other => Err(bad(name, "address", &other)),
        }
    }

    pub fn take_raw(&mut self, name: &'static str) -> Result<RlpItem, MapperError> {
        match self.take(name)? {
            MapValue::Raw(v) => Ok(v),
            other => Err(bad(name, "raw item", &other)),
        }
    }
}

fn bad(field: &'static str, expected: &'static str, found: &MapValue) -> MapperError {
    MapperError::BadValue {
        field,
        expected,
        found: found.kind().to_string(),
    }
}

impl Mapper {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(mut self, name: &'static str, kind: SlotKind) -> Self {
        self.slots.push(Slot { name, kind });
        self
    }

    /// Append a slot that consumes a wire position and projects nothing.
    pub fn skip(self) -> Self {
        self.push("", SlotKind::Skip)
    }

    pub fn uint(self, name: &'static str) -> Self {
        self.push(name, SlotKind::Uint)
    }

    pub fn address(self, name: &'static str) -> Self {
        self.push(name, SlotKind::Address)
    }

    pub fn wei(self, name: &'static str) -> Self {
        self.push(name, SlotKind::Wei)
    }

    pub fn boolean(self, name: &'static str) -> Self {
        self.push(name, SlotKind::Bool)
    }

    pub fn bytes(self, name: &'static str) -> Self {
        self.push(name, SlotKind::Bytes)
    }

    pub fn nested(self, name: &'static str, mapper: Mapper) -> Self {
        self.push(name, SlotKind::Nested(mapper))
    }

    /// Append a slot whose item passes through unconverted (opaque
    /// structures such as access lists).
    pub fn raw(self, name: &'static str) -> Self {
        self.push(name, SlotKind::Raw)
    }

    /// Read each non-skip slot off the object by name and convert it to an
    /// RLP item, in wire order.
    ///
    /// Framing the result into an outer list is the caller's responsibility.
    pub fn encode(&self, object: &dyn Mappable) -> Result<Vec<RlpItem>, MapperError> {
        let mut items = Vec::with_capacity(self.slots.len());
        for slot in &self.slots {
            if matches!(slot.kind, SlotKind::Skip) {
                continue;
            }
            let value = object
                .field(slot.name)
                .ok_or(MapperError::MissingField { field: slot.name })?;
            items.push(encode_value(slot.name, &value)?);
        }
        Ok(items)
    }

    /// Project a decoded RLP list through the schema, position by position.
    pub fn decode(&self, items: &[RlpItem]) -> Result<FieldMap, MapperError> {
        let mut map = BTreeMap::new();
        for (position, slot) in self.slots.iter().enumerate() {
            let item = items.get(position).ok_or(MapperError::MissingPosition {
                position,
                field: slot.name,
            })?;
            if let Some(value) = decode_value(slot, item)? {
                map.insert(slot.name, value);
            }
        }
        Ok(FieldMap(map))
    }
}

fn encode_value(field: &'static str, value: &MapValue) -> Result<RlpItem, MapperError> {
    Ok(match value {
        MapValue::Uint(Uint::Small(v)) => RlpItem::from_uint(*v),
        MapValue::Uint(Uint::Big(v)) => RlpItem::from_u256(*v),
        MapValue::Wei(v) => RlpItem::Bytes(v.to_be_bytes_trimmed()),
        MapValue::Bool(v) => RlpItem::from_uint(*v as u64),
        MapValue::Bytes(v) => RlpItem::Bytes(v.clone()),
        MapValue::Address(Some(a)) => RlpItem::Bytes(a.as_bytes().to_vec()),
        MapValue::Address(None) => RlpItem::empty(),
        MapValue::Raw(item) => item.clone(),
        MapValue::Nested(_) => {
            // A nested map has lost its schema; it cannot re-enter the wire.
            return Err(MapperError::BadValue {
                field,
                expected: "encodable value",
                found: "nested map".to_string(),
            });
        }
    })
}

fn decode_value(slot: &Slot, item: &RlpItem) -> Result<Option<MapValue>, MapperError> {
    let value = match &slot.kind {
        SlotKind::Skip => return Ok(None),
        SlotKind::Uint => MapValue::Uint(Uint::from_u256(item_to_u256(slot.name, item)?)),
        SlotKind::Wei => {
            let bytes = expect_bytes(slot.name, item)?;
            let amount = WeiAmount::from_be_bytes(bytes).map_err(|_| MapperError::BadValue {
                field: slot.name,
                expected: "wei amount of at most 32 bytes",
                found: format!("{} bytes", bytes.len()),
            })?;
            MapValue::Wei(amount)
        }
        SlotKind::Bool => match item_to_u256(slot.name, item)? {
            v if v.is_zero() => MapValue::Bool(false),
            v if v == U256::one() => MapValue::Bool(true),
            v => {
                return Err(MapperError::BadValue {
                    field: slot.name,
                    expected: "boolean 0 or 1",
                    found: v.to_string(),
                })
            }
        },
        SlotKind::Bytes => MapValue::Bytes(expect_bytes(slot.name, item)?.to_vec()),
        SlotKind::Address => {
            let bytes = expect_bytes(slot.name, item)?;
            if bytes.is_empty() {
                MapValue::Address(None)
            } else {
                let addr = Address::from_slice(bytes).map_err(|_| MapperError::BadValue {
                    field: slot.name,
                    expected: "20-byte address or empty",
                    found: format!("{} bytes", bytes.len()),
                })?;
                MapValue::Address(Some(addr))
            }
        }
        SlotKind::Nested(mapper) => {
            let sub = item.as_list().ok_or_else(|| MapperError::BadValue {
                field: slot.name,
                expected: "list",
                found: item.kind().to_string(),
            })?;
            MapValue::Nested(mapper.decode(sub)?)
        }
        SlotKind::Raw => MapValue::Raw(item.clone()),
    };
    Ok(Some(value))
}

fn expect_bytes<'a>(field: &'static str, item: &'a RlpItem) -> Result<&'a [u8], MapperError> {
    item.as_bytes().ok_or_else(|| MapperError::BadValue {
        field,
        expected: "byte string",
        found: item.kind().to_string(),
    })
}

fn item_to_u256(field: &'static str, item: &RlpItem) -> Result<U256, MapperError> {
    let bytes = expect_bytes(field, item)?;
    if bytes.len() > 32 {
        return Err(MapperError::BadValue {
            field,
            expected: "integer of at most 32 bytes",
            found: format!("{} bytes", bytes.len()),
        });
    }
    Ok(U256::from_big_endian(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Sample {
        nonce: u64,
        value: WeiAmount,
        to: Option<Address>,
        data: Vec<u8>,
        flag: bool,
    }

    impl Mappable for Sample {
        fn field(&self, name: &str) -> Option<MapValue> {
            match name {
                "nonce" => Some(MapValue::Uint(Uint::Small(self.nonce))),
                "value" => Some(MapValue::Wei(self.value)),
                "to" => Some(MapValue::Address(self.to.clone())),
                "data" => Some(MapValue::Bytes(self.data.clone())),
                "flag" => Some(MapValue::Bool(self.flag)),
                _ => None,
            }
        }
    }

    fn schema() -> Mapper {
        Mapper::new()
            .uint("nonce")
            .wei("value")
            .address("to")
            .bytes("data")
            .boolean("flag")
    }

    fn sample() -> Sample {
        Sample {
            nonce: 9,
            value: WeiAmount::from_u64(1_000_000_000),
            to: Some(Address::new([0x35; 20])),
            data: b"hi".to_vec(),
            flag: true,
        }
    }

    #[test]
    fn encode_then_decode_roundtrips() {
        let items = schema().encode(&sample()).unwrap();
        assert_eq!(items.len(), 5);
        let mut map = schema().decode(&items).unwrap();
        assert_eq!(map.take_uint("nonce").unwrap(), Uint::Small(9));
        assert_eq!(
            map.take_wei("value").unwrap(),
            WeiAmount::from_u64(1_000_000_000)
        );
        assert_eq!(
            map.take_address("to").unwrap(),
            Some(Address::new([0x35; 20]))
        );
        assert_eq!(map.take_bytes("data").unwrap(), b"hi".to_vec());
        assert!(map.take_bool("flag").unwrap());
    }

    #[test]
    fn encode_fails_on_unknown_field() {
        let schema = Mapper::new().uint("nonce").uint("missing");
        let err = schema.encode(&sample()).unwrap_err();
        assert_eq!(err, MapperError::MissingField { field: "missing" });
    }

    #[test]
    fn decode_fails_on_short_list() {
        let items = vec![RlpItem::from_uint(9)];
        let err = schema().decode(&items).unwrap_err();
        assert_eq!(
            err,
            MapperError::MissingPosition {
                position: 1,
                field: "value"
            }
        );
    }

    #[test]
    fn skip_consumes_position_without_projecting() {
        let schema = Mapper::new().skip().uint("nonce");
        let items = vec![RlpItem::Bytes(b"junk".to_vec()), RlpItem::from_uint(7)];
        let mut map = schema.decode(&items).unwrap();
        assert_eq!(map.take_uint("nonce").unwrap(), Uint::Small(7));
        assert!(map.get("").is_none());
    }

    #[test]
    fn uint_promotes_past_u64() {
        let schema = Mapper::new().uint("n");
        let big = U256::from(u64::MAX) + U256::one();
        let mut map = schema.decode(&[RlpItem::from_u256(big)]).unwrap();
        assert_eq!(map.take_uint("n").unwrap(), Uint::Big(big));

        let schema = Mapper::new().uint("n");
        let mut map = schema
            .decode(&[RlpItem::from_uint(u64::MAX)])
            .unwrap();
        assert_eq!(map.take_uint("n").unwrap(), Uint::Small(u64::MAX));
    }

    #[test]
    fn bool_rejects_values_past_one() {
        let schema = Mapper::new().boolean("flag");
        let err = schema.decode(&[RlpItem::from_uint(2)]).unwrap_err();
        assert!(matches!(err, MapperError::BadValue { field: "flag", .. }));
    }

    #[test]
    fn empty_string_is_false_and_zero() {
        let mut map = Mapper::new()
            .boolean("flag")
            .uint("n")
            .decode(&[RlpItem::empty(), RlpItem::empty()])
            .unwrap();
        assert!(!map.take_bool("flag").unwrap());
        assert_eq!(map.take_uint("n").unwrap(), Uint::Small(0));
    }

    #[test]
    fn address_accepts_empty_as_absent() {
        let mut map = Mapper::new()
            .address("to")
            .decode(&[RlpItem::empty()])
            .unwrap();
        assert_eq!(map.take_address("to").unwrap(), None);
    }

    #[test]
    fn address_rejects_wrong_length() {
        let err = Mapper::new()
            .address("to")
            .decode(&[RlpItem::Bytes(vec![0u8; 19])])
            .unwrap_err();
        assert!(matches!(err, MapperError::BadValue { field: "to", .. }));
    }

    #[test]
    fn bytes_rejects_list() {
        let err = Mapper::new()
            .bytes("data")
            .decode(&[RlpItem::empty_list()])
            .unwrap_err();
        assert!(matches!(err, MapperError::BadValue { field: "data", .. }));
    }

    #[test]
    fn nested_recurses_and_requires_list() {
        let schema = Mapper::new().nested("inner", Mapper::new().uint("a"));
        let items = vec![RlpItem::List(vec![RlpItem::from_uint(3)])];
        let mut map = schema.decode(&items).unwrap();
        let mut inner = match map.take("inner").unwrap() {
            MapValue::Nested(m) => m,
            other => panic!("expected nested map, got {other:?}"),
        };
        assert_eq!(inner.take_uint("a").unwrap(), Uint::Small(3));

        let schema = Mapper::new().nested("inner", Mapper::new().uint("a"));
        let err = schema.decode(&[RlpItem::empty()]).unwrap_err();
        assert!(matches!(err, MapperError::BadValue { field: "inner", .. }));
    }

    #[test]
    fn raw_passes_item_through() {
        let list = RlpItem::List(vec![RlpItem::from_uint(1), RlpItem::empty_list()]);
        let mut map = Mapper::new()
            .raw("access_list")
            .decode(std::slice::from_ref(&list))
            .unwrap();
        assert_eq!(map.take_raw("access_list").unwrap(), list);
    }

    #[test]
    fn wei_rejects_oversized() {
        let err = Mapper::new()
            .wei("value")
            .decode(&[RlpItem::Bytes(vec![1u8; 33])])
            .unwrap_err();
        assert!(matches!(err, MapperError::BadValue { field: "value", .. }));
    }
}
