//! Recursive Length Prefix (RLP) serialization for ethwire.
//!
//! Two layers live here:
//!
//! - [`codec`]: the canonical, deterministic byte/list codec. It knows
//!   nothing about transactions; it encodes and strictly decodes trees of
//!   [`RlpItem`].
//! - [`mapper`]: a declarative schema binding named, typed fields to
//!   positional wire slots. A [`Mapper`] is built once per transaction shape
//!   and applied symmetrically for encode and decode.

pub mod codec;
pub mod error;
pub mod item;
pub mod mapper;

pub use codec::{decode, encode, encode_items};
pub use error::{MapperError, RlpError};
pub use item::RlpItem;
pub use mapper::{FieldMap, MapValue, Mappable, Mapper, Uint};
