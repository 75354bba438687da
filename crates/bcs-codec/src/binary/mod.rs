//! Format-independent binary primitives.
//!
//! Fixed-width integers are little-endian, booleans are one byte, fixed byte
//! runs are copied verbatim. Everything a concrete format must decide for
//! itself (how lengths and variant indices look, how maps are ordered) is
//! left to the wrapping format.

pub mod decoder;
pub mod encoder;

pub use decoder::BinaryDecoder;
pub use encoder::BinaryEncoder;
