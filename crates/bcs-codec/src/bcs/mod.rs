//! Binary Canonical Serialization.
//!
//! Integers are little-endian fixed width, lengths and variant indices are
//! ULEB128 capped at `u32`, and map entries are ordered by the bytes of their
//! serialized keys. Every value has exactly one valid encoding.

pub mod decoder;
pub mod encoder;
pub mod uleb128;

pub use decoder::BcsDecoder;
pub use encoder::BcsEncoder;
