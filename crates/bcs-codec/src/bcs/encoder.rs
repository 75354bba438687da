//! `BcsEncoder`: canonical BCS writer.

use crate::binary::BinaryEncoder;
use crate::config::CodecConfig;
use crate::contract::Encoder;
use crate::error::{CodecError, Result};
use crate::int::{I128, I256, U128, U256};

use super::uleb128::write_uleb128;

/// Canonical BCS encoder.
///
/// Lengths and variant indices are ULEB128, integers are little-endian fixed
/// width, and map entries are reordered by their serialized key bytes once a
/// map is complete.
///
/// ```
/// use bcs_codec::{BcsEncoder, Encoder};
///
/// let mut encoder = BcsEncoder::new();
/// encoder.write_u64(1_700_312_272).unwrap();
/// assert_eq!(encoder.into_bytes(), [0xd0, 0xb4, 0x58, 0x65, 0, 0, 0, 0]);
/// ```
pub struct BcsEncoder {
    pub inner: BinaryEncoder,
    max_sequence_length: usize,
}

impl Default for BcsEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl BcsEncoder {
    pub fn new() -> Self {
        Self::with_config(&CodecConfig::default())
    }

    pub fn with_config(config: &CodecConfig) -> Self {
        Self {
            inner: BinaryEncoder::new(config.max_container_depth),
            max_sequence_length: config.sequence_length_limit(),
        }
    }

    pub fn with_max_depth(max_depth: usize) -> Self {
        Self::with_config(&CodecConfig::default().with_max_container_depth(max_depth))
    }

    pub fn depth(&self) -> usize {
        self.inner.depth()
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.inner.as_bytes()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.inner.into_bytes()
    }
}

impl Encoder for BcsEncoder {
    fn write_bool(&mut self, value: bool) -> Result<()> {
        self.inner.write_bool(value);
        Ok(())
    }

    fn write_u8(&mut self, value: u8) -> Result<()> {
        self.inner.write_u8(value);
        Ok(())
    }

    fn write_u16(&mut self, value: u16) -> Result<()> {
        self.inner.write_u16(value);
        Ok(())
    }

    fn write_u32(&mut self, value: u32) -> Result<()> {
        self.inner.write_u32(value);
        Ok(())
    }

    fn write_u64(&mut self, value: u64) -> Result<()> {
        self.inner.write_u64(value);
        Ok(())
    }

    fn write_u128(&mut self, value: U128) -> Result<()> {
        self.inner.write_u128(value);
        Ok(())
    }

    fn write_u256(&mut self, value: U256) -> Result<()> {
        self.inner.write_u256(value);
        Ok(())
    }

    fn write_i8(&mut self, value: i8) -> Result<()> {
        self.inner.write_i8(value);
        Ok(())
    }

    fn write_i16(&mut self, value: i16) -> Result<()> {
        self.inner.write_i16(value);
        Ok(())
    }

    fn write_i32(&mut self, value: i32) -> Result<()> {
        self.inner.write_i32(value);
        Ok(())
    }

    fn write_i64(&mut self, value: i64) -> Result<()> {
        self.inner.write_i64(value);
        Ok(())
    }

    fn write_i128(&mut self, value: I128) -> Result<()> {
        self.inner.write_i128(value);
        Ok(())
    }

    fn write_i256(&mut self, value: I256) -> Result<()> {
        self.inner.write_i256(value);
        Ok(())
    }

    fn write_fixed_bytes(&mut self, value: &[u8]) -> Result<()> {
        self.inner.write_fixed_bytes(value);
        Ok(())
    }

    fn write_len(&mut self, len: usize) -> Result<()> {
        if len > self.max_sequence_length {
            return Err(CodecError::LengthTooLarge);
        }
        let len = u32::try_from(len).map_err(|_| CodecError::LengthTooLarge)?;
        write_uleb128(&mut self.inner.writer, len);
        Ok(())
    }

    fn write_variant_index(&mut self, index: u32) -> Result<()> {
        write_uleb128(&mut self.inner.writer, index);
        Ok(())
    }

    fn enter_container(&mut self) -> Result<()> {
        self.inner.enter_container()
    }

    fn exit_container(&mut self) -> Result<()> {
        self.inner.exit_container()
    }

    fn offset(&self) -> usize {
        self.inner.offset()
    }

    fn sort_map_entries(&mut self, offsets: &[usize]) {
        if offsets.len() < 2 {
            return;
        }
        let start = offsets[0];
        let end = self.inner.offset();
        let written = self.inner.as_bytes();
        let mut entries: Vec<&[u8]> = offsets
            .iter()
            .zip(offsets.iter().skip(1).chain(std::iter::once(&end)))
            .map(|(&from, &to)| &written[from..to])
            .collect();
        // Keys are encoded first and no valid key encoding is a prefix of
        // another, so comparing whole entries orders them by key bytes.
        entries.sort_unstable();
        let sorted = entries.concat();
        self.inner.writer.overwrite(start, &sorted);
    }
}
