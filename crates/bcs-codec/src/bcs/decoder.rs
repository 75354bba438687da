//! `BcsDecoder`: canonical BCS reader.

use std::ops::Range;

use crate::binary::BinaryDecoder;
use crate::config::CodecConfig;
use crate::contract::Decoder;
use crate::error::{CodecError, Result};
use crate::int::{I128, I256, U128, U256};

use super::uleb128::read_uleb128;

/// Canonical BCS decoder over a borrowed input.
///
/// Rejects every non-canonical form it can observe: non-minimal ULEB128,
/// bool bytes other than 0 and 1, invalid UTF-8 and map keys out of order.
pub struct BcsDecoder<'a> {
    pub inner: BinaryDecoder<'a>,
    max_sequence_length: usize,
}

impl<'a> BcsDecoder<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self::with_config(input, &CodecConfig::default())
    }

    pub fn with_config(input: &'a [u8], config: &CodecConfig) -> Self {
        Self {
            inner: BinaryDecoder::new(input, config.max_container_depth),
            max_sequence_length: config.sequence_length_limit(),
        }
    }

    pub fn with_max_depth(input: &'a [u8], max_depth: usize) -> Self {
        Self::with_config(
            input,
            &CodecConfig::default().with_max_container_depth(max_depth),
        )
    }

    pub fn depth(&self) -> usize {
        self.inner.depth()
    }

    fn read_uleb(&mut self) -> Result<u32> {
        read_uleb128(self.inner.reader())
    }

    /// Fails with [`CodecError::RemainingInput`] if any input is unread.
    pub fn finish(&self) -> Result<()> {
        match self.inner.remaining() {
            0 => Ok(()),
            n => Err(CodecError::RemainingInput(n)),
        }
    }
}

impl<'a> Decoder for BcsDecoder<'a> {
    fn read_bool(&mut self) -> Result<bool> {
        self.inner.read_bool()
    }

    fn read_u8(&mut self) -> Result<u8> {
        self.inner.read_u8()
    }

    fn read_u16(&mut self) -> Result<u16> {
        self.inner.read_u16()
    }

    fn read_u32(&mut self) -> Result<u32> {
        self.inner.read_u32()
    }

    fn read_u64(&mut self) -> Result<u64> {
        self.inner.read_u64()
    }

    fn read_u128(&mut self) -> Result<U128> {
        self.inner.read_u128()
    }

    fn read_u256(&mut self) -> Result<U256> {
        self.inner.read_u256()
    }

    fn read_i8(&mut self) -> Result<i8> {
        self.inner.read_i8()
    }

    fn read_i16(&mut self) -> Result<i16> {
        self.inner.read_i16()
    }

    fn read_i32(&mut self) -> Result<i32> {
        self.inner.read_i32()
    }

    fn read_i64(&mut self) -> Result<i64> {
        self.inner.read_i64()
    }

    fn read_i128(&mut self) -> Result<I128> {
        self.inner.read_i128()
    }

    fn read_i256(&mut self) -> Result<I256> {
        self.inner.read_i256()
    }

    fn read_fixed_bytes(&mut self, len: usize) -> Result<Vec<u8>> {
        self.inner.read_fixed_bytes(len).map(<[u8]>::to_vec)
    }

    fn read_len(&mut self) -> Result<usize> {
        let start = self.inner.offset();
        let len = self.read_uleb()? as usize;
        if len > self.max_sequence_length {
            self.inner.rewind(start);
            return Err(CodecError::LengthTooLarge);
        }
        Ok(len)
    }

    fn read_variant_index(&mut self) -> Result<u32> {
        self.read_uleb()
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

    fn remaining(&self) -> usize {
        self.inner.remaining()
    }

    fn check_keys_increasing(&self, previous: Range<usize>, current: Range<usize>) -> Result<()> {
        let previous = self.inner.input_range(previous);
        let current = self.inner.input_range(current);
        match (previous, current) {
            (Some(previous), Some(current)) if previous < current => Ok(()),
            _ => Err(CodecError::MapKeysNotIncreasing),
        }
    }

    fn read_str(&mut self) -> Result<String> {
        let start = self.inner.offset();
        let len = self.read_len()?;
        match self.inner.read_utf8(len) {
            Ok(s) => Ok(s.to_string()),
            Err(err) => {
                self.inner.rewind(start);
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_uleb128_lengths() {
        let data = [0x00, 0x7f, 0x80, 0x01, 0xac, 0x02];
        let mut decoder = BcsDecoder::new(&data);
        assert_eq!(decoder.read_len(), Ok(0));
        assert_eq!(decoder.read_len(), Ok(127));
        assert_eq!(decoder.read_len(), Ok(128));
        assert_eq!(decoder.read_variant_index(), Ok(300));
        assert_eq!(decoder.finish(), Ok(()));
    }

    #[test]
    fn malformed_uleb128_keeps_cursor() {
        let data = [0x80, 0x00];
        let mut decoder = BcsDecoder::new(&data);
        assert_eq!(decoder.read_len(), Err(CodecError::InvalidUleb128));
        assert_eq!(decoder.offset(), 0);

        let data = [0x80, 0x80, 0x80, 0x80, 0x10];
        let mut decoder = BcsDecoder::new(&data);
        assert_eq!(decoder.read_variant_index(), Err(CodecError::Uleb128Overflow));

        let data = [0x80];
        let mut decoder = BcsDecoder::new(&data);
        assert_eq!(decoder.read_len(), Err(CodecError::UnexpectedEndOfInput));
        assert_eq!(decoder.remaining(), 1);
    }

    #[test]
    fn length_above_ceiling() {
        // 2^31
        let data = [0x80, 0x80, 0x80, 0x80, 0x08];
        let mut decoder = BcsDecoder::new(&data);
        assert_eq!(decoder.read_len(), Err(CodecError::LengthTooLarge));
        assert_eq!(decoder.offset(), 0);
        // The same bytes are a valid variant index.
        assert_eq!(decoder.read_variant_index(), Ok(1 << 31));
    }

    #[test]
    fn strings_are_validated() {
        let data = [0x02, 0xc3, 0x28];
        let mut decoder = BcsDecoder::new(&data);
        assert_eq!(decoder.read_str(), Err(CodecError::InvalidUtf8));
        assert_eq!(decoder.offset(), 0);

        let data = [0x03, b'a', b'b', b'c'];
        let mut decoder = BcsDecoder::new(&data);
        assert_eq!(decoder.read_str(), Ok("abc".to_string()));
    }

    #[test]
    fn truncated_bytes() {
        let data = [0x04, 1, 2];
        let mut decoder = BcsDecoder::new(&data);
        assert_eq!(decoder.read_bytes(), Err(CodecError::UnexpectedEndOfInput));
    }

    #[test]
    fn key_ranges_must_increase() {
        let data = [0x01, 0x02, 0x02, 0x01, 0x02, 0x03];
        let decoder = BcsDecoder::new(&data);
        assert_eq!(decoder.check_keys_increasing(0..1, 1..2), Ok(()));
        assert_eq!(
            decoder.check_keys_increasing(1..2, 2..3),
            Err(CodecError::MapKeysNotIncreasing)
        );
        assert_eq!(
            decoder.check_keys_increasing(2..3, 3..4),
            Err(CodecError::MapKeysNotIncreasing)
        );
        // A proper prefix sorts first.
        assert_eq!(decoder.check_keys_increasing(3..4, 3..5), Ok(()));
    }

    #[test]
    fn finish_reports_leftover() {
        let data = [0x01, 0x02, 0x03];
        let mut decoder = BcsDecoder::new(&data);
        decoder.read_u8().unwrap();
        assert_eq!(decoder.finish(), Err(CodecError::RemainingInput(2)));
    }
}
