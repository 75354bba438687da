//! Unsigned LEB128 for lengths and variant indices.
//!
//! Seven bits per octet, least significant group first, high bit set on every
//! octet except the last. Only minimal encodings of values up to `u32::MAX`
//! are accepted.

use bcs_codec_buffers::{Reader, Writer};

use crate::error::{CodecError, Result};

pub fn write_uleb128(writer: &mut Writer, value: u32) {
    let len = uleb128_len(value);
    let mut octets = [0u8; 5];
    for (i, octet) in octets[..len].iter_mut().enumerate() {
        *octet = (value >> (7 * i)) as u8 & 0x7f;
    }
    for octet in &mut octets[..len - 1] {
        *octet |= 0x80;
    }
    writer.buf(&octets[..len]);
}

/// Reads one ULEB128 value. On failure the cursor is restored.
pub fn read_uleb128(reader: &mut Reader) -> Result<u32> {
    let start = reader.x;
    let result = read_digits(reader);
    if result.is_err() {
        reader.x = start;
    }
    result
}

fn read_digits(reader: &mut Reader) -> Result<u32> {
    let mut value: u64 = 0;
    for shift in (0..32).step_by(7) {
        let byte = reader.u8()?;
        let digit = byte & 0x7f;
        value |= u64::from(digit) << shift;
        if digit == byte {
            if shift > 0 && digit == 0 {
                return Err(CodecError::InvalidUleb128);
            }
            return u32::try_from(value).map_err(|_| CodecError::Uleb128Overflow);
        }
    }
    Err(CodecError::Uleb128Overflow)
}

/// Number of octets `value` occupies on the wire.
pub fn uleb128_len(value: u32) -> usize {
    let bits = 32 - value.leading_zeros() as usize;
    bits.max(1).div_ceil(7)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(value: u32) -> Vec<u8> {
        let mut writer = Writer::new();
        write_uleb128(&mut writer, value);
        writer.flush()
    }

    fn decode(data: &[u8]) -> (Result<u32>, usize) {
        let mut reader = Reader::new(data);
        let result = read_uleb128(&mut reader);
        (result, reader.x)
    }

    #[test]
    fn encodes_minimal_groups() {
        assert_eq!(encode(0), vec![0x00]);
        assert_eq!(encode(1), vec![0x01]);
        assert_eq!(encode(127), vec![0x7f]);
        assert_eq!(encode(128), vec![0x80, 0x01]);
        assert_eq!(encode(300), vec![0xac, 0x02]);
        assert_eq!(encode(16_384), vec![0x80, 0x80, 0x01]);
        assert_eq!(encode(u32::MAX), vec![0xff, 0xff, 0xff, 0xff, 0x0f]);
    }

    #[test]
    fn decodes_what_it_encodes() {
        for value in [0, 1, 127, 128, 255, 300, 16_383, 16_384, 1 << 28, u32::MAX] {
            let bytes = encode(value);
            assert_eq!(decode(&bytes), (Ok(value), bytes.len()));
            assert_eq!(uleb128_len(value), bytes.len());
        }
    }

    #[test]
    fn rejects_values_above_u32() {
        assert_eq!(
            decode(&[0x80, 0x80, 0x80, 0x80, 0x10]),
            (Err(CodecError::Uleb128Overflow), 0)
        );
        assert_eq!(
            decode(&[0xff, 0xff, 0xff, 0xff, 0x80, 0x01]),
            (Err(CodecError::Uleb128Overflow), 0)
        );
    }

    #[test]
    fn rejects_trailing_zero_group() {
        assert_eq!(decode(&[0x80, 0x00]), (Err(CodecError::InvalidUleb128), 0));
        assert_eq!(
            decode(&[0x81, 0x80, 0x00]),
            (Err(CodecError::InvalidUleb128), 0)
        );
    }

    #[test]
    fn truncated_input() {
        assert_eq!(decode(&[]), (Err(CodecError::UnexpectedEndOfInput), 0));
        assert_eq!(
            decode(&[0x80, 0x80]),
            (Err(CodecError::UnexpectedEndOfInput), 0)
        );
    }
}
