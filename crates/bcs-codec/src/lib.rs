//! Binary Canonical Serialization (BCS).
//!
//! Two layers: format-independent [`Encoder`]/[`Decoder`] contracts with a
//! little-endian [`binary`] base, and the canonical [`bcs`] format on top.
//! Types describe themselves once through [`Encode`]/[`Decode`] and can then
//! be written to any encoder.
//!
//! ```
//! use std::collections::BTreeMap;
//!
//! let mut map = BTreeMap::new();
//! map.insert("b".to_string(), 2u8);
//! map.insert("a".to_string(), 1u8);
//!
//! let bytes = bcs_codec::to_bytes(&map).unwrap();
//! assert_eq!(bytes, [0x02, 0x01, b'a', 0x01, 0x01, b'b', 0x02]);
//! let back: BTreeMap<String, u8> = bcs_codec::from_bytes(&bytes).unwrap();
//! assert_eq!(back, map);
//! ```

mod codec;
mod config;
mod contract;
mod depth;
mod error;
mod util;

pub mod bcs;
pub mod binary;
pub mod int;

pub use bcs::{BcsDecoder, BcsEncoder};
pub use codec::{Decode, Encode};
pub use config::{CodecConfig, MAX_CONTAINER_DEPTH, MAX_SEQUENCE_LENGTH};
pub use contract::{Decoder, Encoder};
pub use depth::DepthBudget;
pub use error::{CodecError, Result};
pub use int::{i64_from_integer, u64_from_integer, IntegerError, I128, I256, U128, U256};
pub use util::{
    from_bytes, from_bytes_with_config, get_output, new_decoder, new_encoder, serialized_size,
    to_bytes, to_bytes_required, to_bytes_required_with_config, to_bytes_with_config,
};
