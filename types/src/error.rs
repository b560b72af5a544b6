use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressError {
    #[error("address must be exactly 20 bytes, got {length}")]
    BadLength { length: usize },

    #[error("malformed address string {input:?}")]
    BadString { input: String },

    #[error("checksum mismatch: expected {expected:?}, found {found:?}")]
    ChecksumMismatch { expected: String, found: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AmountError {
    #[error("wei amount exceeds 32 bytes, got {length}")]
    Oversized { length: usize },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HashError {
    #[error("hash must be exactly 32 bytes, got {length}")]
    BadLength { length: usize },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HexError {
    #[error("invalid hex character {character:?} at index {index}")]
    InvalidCharacter { character: char, index: usize },

    #[error("malformed hex string {input:?}")]
    Malformed { input: String },
}
