use thiserror::Error;

/// Malformed recursive encoding. All decode failures are fail-fast; malformed
/// wire data is rejected, never repaired.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RlpError {
    #[error("unexpected end of input at offset {offset}: need {needed} bytes, {remaining} remain")]
    UnexpectedEnd {
        offset: usize,
        needed: usize,
        remaining: usize,
    },

    #[error("non-canonical encoding at offset {offset}: {reason}")]
    NonCanonical { offset: usize, reason: &'static str },

    #[error("{count} trailing bytes after the outermost item")]
    TrailingBytes { count: usize },

    #[error("declared length {length} at offset {offset} does not fit in memory")]
    LengthOverflow { offset: usize, length: u64 },
}

/// Schema violation in the field-mapping layer: a field missing on the source
/// object, a wire position missing on decode, or a value that does not match
/// its declared kind.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MapperError {
    #[error("field {field:?} not present on source object")]
    MissingField { field: &'static str },

    #[error("wire position {position} for field {field:?} absent in decoded list")]
    MissingPosition {
        position: usize,
        field: &'static str,
    },

    #[error("field {field:?}: expected {expected}, found {found}")]
    BadValue {
        field: &'static str,
        expected: &'static str,
        found: String,
    },
}
