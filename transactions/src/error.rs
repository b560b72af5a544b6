use ethwire_rlp::{MapperError, RlpError};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TxError {
    #[error("envelope marker mismatch: expected 0x{expected:02x}, found 0x{found:02x}")]
    MarkerMismatch { expected: u8, found: u8 },

    #[error("unsupported envelope marker 0x{found:02x}")]
    UnsupportedMarker { found: u8 },

    #[error("raw transaction is empty")]
    Empty,

    #[error("expected an RLP list at the top of the transaction payload")]
    ExpectedList,

    #[error("field {field:?}: {reason}")]
    Field { field: &'static str, reason: String },

    #[error(transparent)]
    Rlp(#[from] RlpError),

    #[error(transparent)]
    Mapper(#[from] MapperError),
}
