//! 32-byte account addresses.

use std::fmt;
use std::str::FromStr;

use bcs_codec::{Decode, Decoder, Encode, Encoder, Result};

/// Errors parsing an address from hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AddressError {
    #[error("address is empty")]
    Empty,
    #[error("address has more than 64 hex digits")]
    TooLong,
    #[error("invalid hex digit {0:?}")]
    InvalidHex(char),
}

const ADDRESS_LENGTH: usize = 32;

/// An on-chain account address.
///
/// Written as 32 raw bytes with no length prefix. Text form is `0x` followed
/// by 64 lowercase hex digits; parsing also accepts the short form (`0x1`),
/// which is left-padded with zeros.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AccountAddress([u8; ADDRESS_LENGTH]);

impl AccountAddress {
    pub const LENGTH: usize = ADDRESS_LENGTH;
    pub const ZERO: Self = Self([0; Self::LENGTH]);
    pub const ONE: Self = Self::from_u8(1);

    pub const fn new(bytes: [u8; Self::LENGTH]) -> Self {
        Self(bytes)
    }

    const fn from_u8(last: u8) -> Self {
        let mut bytes = [0; Self::LENGTH];
        bytes[Self::LENGTH - 1] = last;
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; Self::LENGTH] {
        &self.0
    }

    pub fn into_bytes(self) -> [u8; Self::LENGTH] {
        self.0
    }

    /// `0x` followed by the hex digits with leading zeros removed; `0x0` for
    /// the zero address.
    pub fn to_short_string(&self) -> String {
        let full = self.to_hex();
        let trimmed = full.trim_start_matches('0');
        if trimmed.is_empty() {
            "0x0".to_string()
        } else {
            format!("0x{trimmed}")
        }
    }

    fn to_hex(self) -> String {
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }
}

impl fmt::Display for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", self.to_hex())
    }
}

impl FromStr for AccountAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        if digits.is_empty() {
            return Err(AddressError::Empty);
        }
        if digits.len() > Self::LENGTH * 2 {
            return Err(AddressError::TooLong);
        }
        let mut nibbles = Vec::with_capacity(Self::LENGTH * 2);
        nibbles.resize(Self::LENGTH * 2 - digits.len(), 0u8);
        for c in digits.chars() {
            let nibble = c.to_digit(16).ok_or(AddressError::InvalidHex(c))?;
            nibbles.push(nibble as u8);
        }
        let mut bytes = [0u8; Self::LENGTH];
        for (byte, pair) in bytes.iter_mut().zip(nibbles.chunks(2)) {
            *byte = (pair[0] << 4) | pair[1];
        }
        Ok(Self(bytes))
    }
}

impl From<[u8; ADDRESS_LENGTH]> for AccountAddress {
    fn from(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Self(bytes)
    }
}

impl Encode for AccountAddress {
    fn encode<E: Encoder>(&self, encoder: &mut E) -> Result<()> {
        encoder.write_fixed_bytes(&self.0)
    }
}

impl Decode for AccountAddress {
    fn decode<D: Decoder>(decoder: &mut D) -> Result<Self> {
        <[u8; ADDRESS_LENGTH]>::decode(decoder).map(Self)
    }
}
