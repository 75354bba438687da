//! Binary base encoder.

use bcs_codec_buffers::Writer;

use crate::depth::DepthBudget;
use crate::error::Result;
use crate::int::{I128, I256, U128, U256};

/// Writes little-endian fixed-width primitives and tracks container depth.
pub struct BinaryEncoder {
    pub writer: Writer,
    budget: DepthBudget,
}

impl BinaryEncoder {
    pub fn new(max_depth: usize) -> Self {
        Self {
            writer: Writer::new(),
            budget: DepthBudget::new(max_depth),
        }
    }

    pub fn write_bool(&mut self, value: bool) {
        self.writer.u8(value as u8);
    }

    pub fn write_u8(&mut self, value: u8) {
        self.writer.u8(value);
    }

    pub fn write_u16(&mut self, value: u16) {
        self.writer.u16(value);
    }

    pub fn write_u32(&mut self, value: u32) {
        self.writer.u32(value);
    }

    pub fn write_u64(&mut self, value: u64) {
        self.writer.u64(value);
    }

    pub fn write_u128(&mut self, value: U128) {
        self.writer.buf(&value.to_le_bytes());
    }

    pub fn write_u256(&mut self, value: U256) {
        self.writer.buf(&value.to_le_bytes());
    }

    pub fn write_i8(&mut self, value: i8) {
        self.writer.i8(value);
    }

    pub fn write_i16(&mut self, value: i16) {
        self.writer.i16(value);
    }

    pub fn write_i32(&mut self, value: i32) {
        self.writer.i32(value);
    }

    pub fn write_i64(&mut self, value: i64) {
        self.writer.i64(value);
    }

    pub fn write_i128(&mut self, value: I128) {
        self.writer.buf(&value.to_le_bytes());
    }

    pub fn write_i256(&mut self, value: I256) {
        self.writer.buf(&value.to_le_bytes());
    }

    pub fn write_fixed_bytes(&mut self, value: &[u8]) {
        self.writer.buf(value);
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
        self.writer.len()
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.writer.as_slice()
    }

    pub fn into_bytes(mut self) -> Vec<u8> {
        self.writer.flush()
    }
}
