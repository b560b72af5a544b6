//! Field-mapper schemas, one per transaction shape.
//!
//! Built lazily on first use and reused for the life of the process; the
//! statics are read-only after construction so no further synchronization is
//! needed.

use std::sync::LazyLock;

use ethwire_rlp::Mapper;

/// Legacy transactions use one schema for both directions: the unsigned
/// projection reuses the v/r/s slots with the chain id and empty strings.
pub(crate) static LEGACY: LazyLock<Mapper> = LazyLock::new(|| {
    Mapper::new()
        .uint("nonce")
        .wei("gas_price")
        .uint("gas_limit")
        .address("to")
        .wei("value")
        .bytes("data")
        .uint("v")
        .bytes("r")
        .bytes("s")
});

pub(crate) static ACCESS_LIST: LazyLock<Mapper> = LazyLock::new(|| {
    Mapper::new()
        .uint("chain_id")
        .uint("nonce")
        .wei("gas_price")
        .uint("gas_limit")
        .address("to")
        .wei("value")
        .bytes("data")
        .raw("access_list")
        .boolean("y_parity")
        .bytes("r")
        .bytes("s")
});

pub(crate) static ACCESS_LIST_UNSIGNED: LazyLock<Mapper> = LazyLock::new(|| {
    Mapper::new()
        .uint("chain_id")
        .uint("nonce")
        .wei("gas_price")
        .uint("gas_limit")
        .address("to")
        .wei("value")
        .bytes("data")
        .raw("access_list")
});

pub(crate) static FEE_MARKET: LazyLock<Mapper> = LazyLock::new(|| {
    Mapper::new()
        .uint("chain_id")
        .uint("nonce")
        .wei("max_priority_fee_per_gas")
        .wei("max_fee_per_gas")
        .uint("gas_limit")
        .address("to")
        .wei("value")
        .bytes("data")
        .raw("access_list")
        .boolean("y_parity")
        .bytes("r")
        .bytes("s")
});

pub(crate) static FEE_MARKET_UNSIGNED: LazyLock<Mapper> = LazyLock::new(|| {
    Mapper::new()
        .uint("chain_id")
        .uint("nonce")
        .wei("max_priority_fee_per_gas")
        .wei("max_fee_per_gas")
        .uint("gas_limit")
        .address("to")
        .wei("value")
        .bytes("data")
        .raw("access_list")
});
