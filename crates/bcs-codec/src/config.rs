//! Codec limits.

use serde::{Deserialize, Serialize};

/// Maximum nesting of records, unions, sequences and maps.
pub const MAX_CONTAINER_DEPTH: usize = 500;

/// Maximum element count of any length-prefixed value (2^31 - 1).
pub const MAX_SEQUENCE_LENGTH: usize = (1 << 31) - 1;

/// Limits applied by [`BcsEncoder`](crate::BcsEncoder) and
/// [`BcsDecoder`](crate::BcsDecoder).
///
/// Deserializable so it can be embedded in an application's own config file;
/// missing fields fall back to the interoperable defaults.
///
/// ```
/// use bcs_codec::CodecConfig;
///
/// let config = CodecConfig::default().with_max_container_depth(16);
/// assert_eq!(config.max_container_depth, 16);
/// assert_eq!(config.max_sequence_length, bcs_codec::MAX_SEQUENCE_LENGTH);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    pub max_container_depth: usize,
    pub max_sequence_length: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            max_container_depth: MAX_CONTAINER_DEPTH,
            max_sequence_length: MAX_SEQUENCE_LENGTH,
        }
    }
}

impl CodecConfig {
    pub fn with_max_container_depth(mut self, depth: usize) -> Self {
        self.max_container_depth = depth;
        self
    }

    pub fn with_max_sequence_length(mut self, length: usize) -> Self {
        self.max_sequence_length = length;
        self
    }

    /// The length ceiling actually enforced. It can be lowered but never
    /// raised above [`MAX_SEQUENCE_LENGTH`].
    pub fn sequence_length_limit(&self) -> usize {
        self.max_sequence_length.min(MAX_SEQUENCE_LENGTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_wire_constants() {
        let config = CodecConfig::default();
        assert_eq!(config.max_container_depth, 500);
        assert_eq!(config.max_sequence_length, 2_147_483_647);
    }

    #[test]
    fn sequence_length_is_clamped() {
        let config = CodecConfig::default().with_max_sequence_length(usize::MAX);
        assert_eq!(config.sequence_length_limit(), MAX_SEQUENCE_LENGTH);
        let config = CodecConfig::default().with_max_sequence_length(10);
        assert_eq!(config.sequence_length_limit(), 10);
    }
}
