//! One-shot entry points.

use crate::bcs::{BcsDecoder, BcsEncoder};
use crate::codec::{Decode, Encode};
use crate::config::CodecConfig;
use crate::error::{CodecError, Result};

/// Encodes `value` with the default limits.
///
/// ```
/// assert_eq!(bcs_codec::to_bytes(&1u8).unwrap(), [0x01]);
/// ```
pub fn to_bytes<T: Encode + ?Sized>(value: &T) -> Result<Vec<u8>> {
    to_bytes_with_config(value, &CodecConfig::default())
}

pub fn to_bytes_with_config<T: Encode + ?Sized>(
    value: &T,
    config: &CodecConfig,
) -> Result<Vec<u8>> {
    let mut encoder = BcsEncoder::with_config(config);
    value.encode(&mut encoder)?;
    Ok(encoder.into_bytes())
}

/// Encodes a value that must be present. `None` fails with
/// [`CodecError::NullObject`].
pub fn to_bytes_required<T: Encode + ?Sized>(value: Option<&T>) -> Result<Vec<u8>> {
    to_bytes_required_with_config(value, &CodecConfig::default())
}

pub fn to_bytes_required_with_config<T: Encode + ?Sized>(
    value: Option<&T>,
    config: &CodecConfig,
) -> Result<Vec<u8>> {
    match value {
        Some(value) => to_bytes_with_config(value, config),
        None => Err(CodecError::NullObject),
    }
}

/// Decodes a complete message. Unread trailing bytes are an error.
pub fn from_bytes<T: Decode>(input: &[u8]) -> Result<T> {
    from_bytes_with_config(input, &CodecConfig::default())
}

pub fn from_bytes_with_config<T: Decode>(input: &[u8], config: &CodecConfig) -> Result<T> {
    let mut decoder = BcsDecoder::with_config(input, config);
    let value = T::decode(&mut decoder)?;
    decoder.finish()?;
    Ok(value)
}

/// Number of bytes `value` encodes to.
pub fn serialized_size<T: Encode + ?Sized>(value: &T) -> Result<usize> {
    to_bytes(value).map(|bytes| bytes.len())
}

pub fn new_encoder(max_depth: usize) -> BcsEncoder {
    BcsEncoder::with_max_depth(max_depth)
}

pub fn new_decoder(input: &[u8], max_depth: usize) -> BcsDecoder<'_> {
    BcsDecoder::with_max_depth(input, max_depth)
}

/// Takes the finished output of an encoder.
pub fn get_output(encoder: BcsEncoder) -> Vec<u8> {
    encoder.into_bytes()
}
