//! Canonical RLP encode and strict decode.
//!
//! Encoding rules:
//! - a single byte < 0x80 encodes as itself;
//! - a byte string of 0-55 bytes as `0x80 + len` then the bytes;
//! - a longer byte string as `0xb7 + len_of_len`, big-endian length, bytes;
//! - a list whose encoded payload is 0-55 bytes as `0xc0 + len` then the
//!   payload;
//! - a longer list as `0xf7 + len_of_len`, big-endian length, payload.
//!
//! Decoding is the exact inverse and strict: truncated input, length fields
//! that could have been expressed more compactly, and trailing bytes at the
//! outermost call are all rejected.

use crate::error::RlpError;
use crate::item::RlpItem;

const STRING_SHORT: u8 = 0x80;
const STRING_LONG: u8 = 0xb7;
const LIST_SHORT: u8 = 0xc0;
const LIST_LONG: u8 = 0xf7;

/// Encode one item, recursively.
pub fn encode(item: &RlpItem) -> Vec<u8> {
    let mut out = Vec::new();
    encode_into(item, &mut out);
    out
}

/// Frame a sequence of already-mapped items as a single RLP list.
///
/// This is the outer framing step the field mapper deliberately leaves to its
/// caller.
pub fn encode_items(items: &[RlpItem]) -> Vec<u8> {
    let mut payload = Vec::new();
    for item in items {
        encode_into(item, &mut payload);
    }
    let mut out = Vec::with_capacity(payload.len() + 9);
    write_header(&mut out, payload.len(), LIST_SHORT, LIST_LONG);
    out.extend_from_slice(&payload);
    out
}

fn encode_into(item: &RlpItem, out: &mut Vec<u8>) {
    match item {
        RlpItem::Bytes(bytes) => {
            if bytes.len() == 1 && bytes[0] < STRING_SHORT {
                out.push(bytes[0]);
            } else {
                write_header(out, bytes.len(), STRING_SHORT, STRING_LONG);
                out.extend_from_slice(bytes);
            }
        }
        RlpItem::List(items) => {
            let mut payload = Vec::new();
            for item in items {
                encode_into(item, &mut payload);
            }
            write_header(out, payload.len(), LIST_SHORT, LIST_LONG);
            out.extend_from_slice(&payload);
        }
    }
}

fn write_header(out: &mut Vec<u8>, len: usize, short_base: u8, long_base: u8) {
    if len <= 55 {
        out.push(short_base + len as u8);
    } else {
        let be = len.to_be_bytes();
        let first = be.iter().position(|&b| b != 0).unwrap_or(be.len() - 1);
        let len_bytes = &be[first..];
        out.push(long_base + len_bytes.len() as u8);
        out.extend_from_slice(len_bytes);
    }
}

/// Strictly decode one item occupying the entire input.
pub fn decode(data: &[u8]) -> Result<RlpItem, RlpError> {
    let (item, consumed) = decode_at(data, 0)?;
    if consumed != data.len() {
        return Err(RlpError::TrailingBytes {
            count: data.len() - consumed,
        });
    }
    Ok(item)
}

/// Decode the item starting at `pos`; returns the item and the offset just
/// past it.
fn decode_at(data: &[u8], pos: usize) -> Result<(RlpItem, usize), RlpError> {
    let first = *data.get(pos).ok_or(RlpError::UnexpectedEnd {
        offset: pos,
        needed: 1,
        remaining: 0,
    })?;

    match first {
        0x00..=0x7f => Ok((RlpItem::Bytes(vec![first]), pos + 1)),
        0x80..=0xb7 => {
            let len = (first - STRING_SHORT) as usize;
            let payload = take(data, pos + 1, len)?;
            if len == 1 && payload[0] < STRING_SHORT {
                return Err(RlpError::NonCanonical {
                    offset: pos,
                    reason: "single byte below 0x80 must encode as itself",
                });
            }
            Ok((RlpItem::Bytes(payload.to_vec()), pos + 1 + len))
        }
        0xb8..=0xbf => {
            let (len, header) = read_long_length(data, pos, first - STRING_LONG)?;
            let payload = take(data, pos + header, len)?;
            Ok((RlpItem::Bytes(payload.to_vec()), pos + header + len))
        }
        0xc0..=0xf7 => {
            let len = (first - LIST_SHORT) as usize;
            take(data, pos + 1, len)?;
            let items = decode_list_payload(data, pos + 1, len)?;
            Ok((RlpItem::List(items), pos + 1 + len))
        }
        0xf8..=0xff => {
            let (len, header) = read_long_length(data, pos, first - LIST_LONG)?;
            take(data, pos + header, len)?;
            let items = decode_list_payload(data, pos + header, len)?;
            Ok((RlpItem::List(items), pos + header + len))
        }
    }
}

/// Read a multi-byte big-endian length field; returns the length and the
/// total header size (marker byte included).
fn read_long_length(
    data: &[u8],
    pos: usize,
    len_of_len: u8,
) -> Result<(usize, usize), RlpError> {
    let len_of_len = len_of_len as usize;
    let len_bytes = take(data, pos + 1, len_of_len)?;
    if len_bytes[0] == 0 {
        return Err(RlpError::NonCanonical {
            offset: pos + 1,
            reason: "length field has a leading zero byte",
        });
    }
    let mut length: u64 = 0;
    for &b in len_bytes {
        length = length
            .checked_mul(256)
            .and_then(|l| l.checked_add(b as u64))
            .ok_or(RlpError::LengthOverflow {
                offset: pos + 1,
                length: u64::MAX,
            })?;
    }
    if length <= 55 {
        return Err(RlpError::NonCanonical {
            offset: pos,
            reason: "length of 55 or less must use the short form",
        });
    }
    let length = usize::try_from(length).map_err(|_| RlpError::LengthOverflow {
        offset: pos + 1,
        length,
    })?;
    Ok((length, 1 + len_of_len))
}

/// Decode consecutive items filling exactly `len` payload bytes.
fn decode_list_payload(data: &[u8], start: usize, len: usize) -> Result<Vec<RlpItem>, RlpError> {
    let end = start + len;
    let mut items = Vec::new();
    let mut pos = start;
    while pos < end {
        let (item, next) = decode_at(data, pos)?;
        if next > end {
            // An inner item may not read past its list's payload.
            return Err(RlpError::UnexpectedEnd {
                offset: pos,
                needed: next - pos,
                remaining: end - pos,
            });
        }
        items.push(item);
        pos = next;
    }
    Ok(items)
}

fn take(data: &[u8], pos: usize, len: usize) -> Result<&[u8], RlpError> {
    data.get(pos..pos + len).ok_or(RlpError::UnexpectedEnd {
        offset: pos,
        needed: len,
        remaining: data.len().saturating_sub(pos),
    })
}
