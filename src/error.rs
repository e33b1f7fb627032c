#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    /// Not enough room left in the output buffer for the next field.
    #[error("no space in buffer")]
    BufferFull,

    /// A string length or container count exceeds the u16 wire prefix.
    #[error("length {0} exceeds the u16 wire limit")]
    TooLong(usize),

    /// Optional field written before its field-set mask.
    #[error("optional field has no governing field set")]
    MaskMissing,
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// Input buffer ends in the middle of a field.
    #[error("buffer truncated")]
    Truncated,

    /// A constant sentinel on the wire does not match its declared value.
    #[error("constant mismatch (expected {expected:#x}, found {found:#x})")]
    ConstMismatch { expected: u64, found: u64 },

    /// Optional field read before its field-set mask.
    #[error("optional field has no governing field set")]
    MaskMissing,
}
