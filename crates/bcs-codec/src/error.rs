//! Error type shared by every encoder and decoder in the crate.

use bcs_codec_buffers::BufferError;

use crate::int::IntegerError;

/// Encoding or decoding failure.
///
/// Every variant is terminal for the message being processed: callers must
/// not sign, hash or trust any partial output.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    #[error("container depth limit exceeded")]
    DepthExceeded,
    #[error("container exit without matching enter")]
    UnbalancedContainer,
    #[error("length exceeds the maximum sequence length")]
    LengthTooLarge,
    #[error("ULEB128 value does not fit in 32 bits")]
    Uleb128Overflow,
    #[error("non-canonical ULEB128 encoding")]
    InvalidUleb128,
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
    #[error("invalid bool byte: 0x{0:02x}")]
    InvalidBool(u8),
    #[error("invalid UTF-8")]
    InvalidUtf8,
    #[error("map keys are not in strictly increasing order")]
    MapKeysNotIncreasing,
    #[error("cannot serialize an absent value")]
    NullObject,
    #[error("unsupported type: {0}")]
    Unimplemented(&'static str),
    #[error("{0} bytes remaining after decoding")]
    RemainingInput(usize),
    #[error("unknown variant index {index} for {name}")]
    UnknownVariant { name: &'static str, index: u32 },
    #[error(transparent)]
    Integer(#[from] IntegerError),
}

impl From<BufferError> for CodecError {
    fn from(err: BufferError) -> Self {
        match err {
            BufferError::EndOfBuffer => CodecError::UnexpectedEndOfInput,
            BufferError::InvalidUtf8 => CodecError::InvalidUtf8,
        }
    }
}

pub type Result<T, E = CodecError> = std::result::Result<T, E>;
