//! Hex conventions used at text boundaries.
//!
//! Values crossing into RPC or display contexts are `0x`-prefixed lowercase
//! hex. An odd-length payload is left-zero-padded to even length before byte
//! conversion; the same normalization applies on both directions.

use crate::error::HexError;

/// Encode bytes as a `0x`-prefixed lowercase hex string.
pub fn encode_0x(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Decode a hex string into bytes.
///
/// Accepts an optional `0x`/`0X` prefix. An odd-length payload is
/// left-zero-padded, so `"0xf"` decodes to `[0x0f]`.
pub fn decode_0x(input: &str) -> Result<Vec<u8>, HexError> {
    let payload = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input);

    let padded;
    let normalized = if payload.len() % 2 == 1 {
        padded = format!("0{payload}");
        padded.as_str()
    } else {
        payload
    };

    hex::decode(normalized).map_err(|e| match e {
        hex::FromHexError::InvalidHexCharacter { c, index } => HexError::InvalidCharacter {
            character: c,
            // Report the index in the caller's string, not the padded one.
            index: index + input.len() - normalized.len(),
        },
        _ => HexError::Malformed {
            input: input.to_string(),
        },
    })
}
