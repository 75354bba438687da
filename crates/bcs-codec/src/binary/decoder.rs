//! Binary base decoder.

use std::ops::Range;

use bcs_codec_buffers::Reader;

use crate::depth::DepthBudget;
use crate::error::{CodecError, Result};
use crate::int::{I128, I256, U128, U256};

/// Reads little-endian fixed-width primitives from a borrowed input and
/// tracks container depth.
///
/// A read that does not fit in the remaining input fails with
/// [`CodecError::UnexpectedEndOfInput`] without moving the cursor.
pub struct BinaryDecoder<'a> {
    reader: Reader<'a>,
    budget: DepthBudget,
}

impl<'a> BinaryDecoder<'a> {
    pub fn new(input: &'a [u8], max_depth: usize) -> Self {
        Self {
            reader: Reader::new(input),
            budget: DepthBudget::new(max_depth),
        }
    }

    pub fn read_bool(&mut self) -> Result<bool> {
        match self.reader.peek()? {
            0 => {
                self.reader.u8()?;
                Ok(false)
            }
            1 => {
                self.reader.u8()?;
                Ok(true)
            }
            other => Err(CodecError::InvalidBool(other)),
        }
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.reader.u8()?)
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        Ok(self.reader.u16()?)
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        Ok(self.reader.u32()?)
    }

    pub fn read_u64(&mut self) -> Result<u64> {
        Ok(self.reader.u64()?)
    }

    pub fn read_u128(&mut self) -> Result<U128> {
        self.array().map(U128::from_le_bytes)
    }

    pub fn read_u256(&mut self) -> Result<U256> {
        self.array().map(U256::from_le_bytes)
    }

    pub fn read_i8(&mut self) -> Result<i8> {
        Ok(self.reader.i8()?)
    }

    pub fn read_i16(&mut self) -> Result<i16> {
        Ok(self.reader.i16()?)
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        Ok(self.reader.i32()?)
    }

    pub fn read_i64(&mut self) -> Result<i64> {
        Ok(self.reader.i64()?)
    }

    pub fn read_i128(&mut self) -> Result<I128> {
        self.array().map(I128::from_le_bytes)
    }

    pub fn read_i256(&mut self) -> Result<I256> {
        self.array().map(I256::from_le_bytes)
    }

    pub fn read_fixed_bytes(&mut self, len: usize) -> Result<&'a [u8]> {
        Ok(self.reader.buf(len)?)
    }

    /// Reads `len` bytes that must be valid UTF-8.
    pub fn read_utf8(&mut self, len: usize) -> Result<&'a str> {
        Ok(self.reader.utf8(len)?)
    }

    fn array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let bytes = self.reader.buf(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }

    pub fn enter_container(&mut self) -> Result<()> {
        self.budget.enter()
    }

    pub fn exit_container(&mut self) -> Result<()> {
        self.budget.exit()
    }

    pub fn depth(&self) -> usize {
        self.budget.depth()
    }

    pub fn offset(&self) -> usize {
        self.reader.x
    }

    pub(crate) fn reader(&mut self) -> &mut Reader<'a> {
        &mut self.reader
    }

    /// Moves the cursor back to an earlier position.
    pub(crate) fn rewind(&mut self, offset: usize) {
        debug_assert!(offset <= self.reader.x);
        self.reader.x = offset;
    }

    pub fn remaining(&self) -> usize {
        self.reader.size()
    }

    /// A region of the input, `None` if it is out of range.
    pub fn input_range(&self, range: Range<usize>) -> Option<&'a [u8]> {
        self.reader.range(range)
    }
}
