//! Fixed-width 64/128/256-bit integer conversions built from 64-bit limbs.
//!
//! The types here carry no arithmetic. They exist so that wide integers can be
//! moved between arbitrary-precision values (malachite [`Integer`]) and the
//! little-endian wire layout, low limb first. Signed types store two's
//! complement bits with the sign in the high limb.

use std::cmp::Ordering;
use std::fmt;

use malachite::{Integer, Natural};

/// Failure converting an arbitrary-precision value into a fixed width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IntegerError {
    #[error("negative value for unsigned integer")]
    Negative,
    #[error("value does not fit in the target width")]
    Overflow,
}

/// Unsigned 128-bit integer, low limb first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct U128 {
    pub low: u64,
    pub high: u64,
}

/// Unsigned 256-bit integer, low limb first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct U256 {
    pub low: U128,
    pub high: U128,
}

/// Signed 128-bit integer in two's complement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct I128 {
    pub low: u64,
    pub high: i64,
}

/// Signed 256-bit integer in two's complement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct I256 {
    pub low: U128,
    pub high: I128,
}

// ------------------------------------------------------------------ helpers

fn pow2(bits: u64) -> Integer {
    Integer::from(1u32) << bits
}

/// Splits a non-negative value into exactly `limbs` 64-bit limbs.
fn unsigned_limbs(value: &Integer, limbs: usize) -> Result<Vec<u64>, IntegerError> {
    let natural = Natural::try_from(value).map_err(|_| IntegerError::Negative)?;
    let mut xs = natural.to_limbs_asc();
    if xs.len() > limbs {
        return Err(IntegerError::Overflow);
    }
    xs.resize(limbs, 0);
    Ok(xs)
}

/// Splits a value in `[-2^(bits-1), 2^(bits-1))` into two's complement limbs.
fn signed_limbs(value: &Integer, bits: u64) -> Result<Vec<u64>, IntegerError> {
    let half = pow2(bits - 1);
    let min = -half.clone();
    if value >= &half || value < &min {
        return Err(IntegerError::Overflow);
    }
    let limbs = (bits / 64) as usize;
    if value < &Integer::from(0) {
        unsigned_limbs(&(value + pow2(bits)), limbs)
    } else {
        unsigned_limbs(value, limbs)
    }
}

fn limbs_to_unsigned(xs: &[u64]) -> Integer {
    Integer::from(Natural::from_limbs_asc(xs))
}

fn limbs_to_signed(xs: &[u64]) -> Integer {
    let unsigned = limbs_to_unsigned(xs);
    let negative = xs.last().is_some_and(|top| *top >> 63 == 1);
    if negative {
        unsigned - pow2(64 * xs.len() as u64)
    } else {
        unsigned
    }
}

// ---------------------------------------------------------------------- 64

/// Narrows to a `u64`, telling negative input apart from overflow.
pub fn u64_from_integer(value: &Integer) -> Result<u64, IntegerError> {
    Ok(unsigned_limbs(value, 1)?[0])
}

pub fn i64_from_integer(value: &Integer) -> Result<i64, IntegerError> {
    Ok(signed_limbs(value, 64)?[0] as i64)
}

// --------------------------------------------------------------------- U128

impl U128 {
    pub const fn zero() -> Self {
        Self { low: 0, high: 0 }
    }

    pub const fn max() -> Self {
        Self {
            low: u64::MAX,
            high: u64::MAX,
        }
    }

    pub fn to_le_bytes(self) -> [u8; 16] {
        let mut out = [0u8; 16];
        out[..8].copy_from_slice(&self.low.to_le_bytes());
        out[8..].copy_from_slice(&self.high.to_le_bytes());
        out
    }

    pub fn from_le_bytes(bytes: [u8; 16]) -> Self {
        let mut low = [0u8; 8];
        let mut high = [0u8; 8];
        low.copy_from_slice(&bytes[..8]);
        high.copy_from_slice(&bytes[8..]);
        Self {
            low: u64::from_le_bytes(low),
            high: u64::from_le_bytes(high),
        }
    }
}

impl From<u128> for U128 {
    fn from(value: u128) -> Self {
        Self {
            low: value as u64,
            high: (value >> 64) as u64,
        }
    }
}

impl From<U128> for u128 {
    fn from(value: U128) -> Self {
        ((value.high as u128) << 64) | value.low as u128
    }
}

impl From<u64> for U128 {
    fn from(value: u64) -> Self {
        Self {
            low: value,
            high: 0,
        }
    }
}

impl TryFrom<&Integer> for U128 {
    type Error = IntegerError;

    fn try_from(value: &Integer) -> Result<Self, Self::Error> {
        let xs = unsigned_limbs(value, 2)?;
        Ok(Self {
            low: xs[0],
            high: xs[1],
        })
    }
}

impl From<U128> for Integer {
    fn from(value: U128) -> Self {
        limbs_to_unsigned(&[value.low, value.high])
    }
}

impl Ord for U128 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.high
            .cmp(&other.high)
            .then_with(|| self.low.cmp(&other.low))
    }
}

impl PartialOrd for U128 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for U128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", u128::from(*self))
    }
}

// --------------------------------------------------------------------- U256

impl U256 {
    pub const fn zero() -> Self {
        Self {
            low: U128::zero(),
            high: U128::zero(),
        }
    }

    pub const fn max() -> Self {
        Self {
            low: U128::max(),
            high: U128::max(),
        }
    }

    pub fn to_le_bytes(self) -> [u8; 32] {
        let mut out = [0u8; 32];
        out[..16].copy_from_slice(&self.low.to_le_bytes());
        out[16..].copy_from_slice(&self.high.to_le_bytes());
        out
    }

    pub fn from_le_bytes(bytes: [u8; 32]) -> Self {
        let mut low = [0u8; 16];
        let mut high = [0u8; 16];
        low.copy_from_slice(&bytes[..16]);
        high.copy_from_slice(&bytes[16..]);
        Self {
            low: U128::from_le_bytes(low),
            high: U128::from_le_bytes(high),
        }
    }

    fn limbs(self) -> [u64; 4] {
        [self.low.low, self.low.high, self.high.low, self.high.high]
    }
}

impl From<u128> for U256 {
    fn from(value: u128) -> Self {
        Self {
            low: U128::from(value),
            high: U128::zero(),
        }
    }
}

impl From<U128> for U256 {
    fn from(value: U128) -> Self {
        Self {
            low: value,
            high: U128::zero(),
        }
    }
}

impl TryFrom<&Integer> for U256 {
    type Error = IntegerError;

    fn try_from(value: &Integer) -> Result<Self, Self::Error> {
        let xs = unsigned_limbs(value, 4)?;
        Ok(Self {
            low: U128 {
                low: xs[0],
                high: xs[1],
            },
            high: U128 {
                low: xs[2],
                high: xs[3],
            },
        })
    }
}

impl From<U256> for Integer {
    fn from(value: U256) -> Self {
        limbs_to_unsigned(&value.limbs())
    }
}

impl Ord for U256 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.high
            .cmp(&other.high)
            .then_with(|| self.low.cmp(&other.low))
    }
}

impl PartialOrd for U256 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for U256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Integer::from(*self))
    }
}

// --------------------------------------------------------------------- I128

impl I128 {
    pub const fn zero() -> Self {
        Self { low: 0, high: 0 }
    }

    pub const fn max() -> Self {
        Self {
            low: u64::MAX,
            high: i64::MAX,
        }
    }

    pub const fn min() -> Self {
        Self {
            low: 0,
            high: i64::MIN,
        }
    }

    pub fn to_le_bytes(self) -> [u8; 16] {
        let mut out = [0u8; 16];
        out[..8].copy_from_slice(&self.low.to_le_bytes());
        out[8..].copy_from_slice(&self.high.to_le_bytes());
        out
    }

    pub fn from_le_bytes(bytes: [u8; 16]) -> Self {
        let unsigned = U128::from_le_bytes(bytes);
        Self {
            low: unsigned.low,
            high: unsigned.high as i64,
        }
    }
}

impl From<i128> for I128 {
    fn from(value: i128) -> Self {
        Self {
            low: value as u64,
            high: (value >> 64) as i64,
        }
    }
}

impl From<I128> for i128 {
    fn from(value: I128) -> Self {
        ((value.high as i128) << 64) | value.low as i128
    }
}

impl TryFrom<&Integer> for I128 {
    type Error = IntegerError;

    fn try_from(value: &Integer) -> Result<Self, Self::Error> {
        let xs = signed_limbs(value, 128)?;
        Ok(Self {
            low: xs[0],
            high: xs[1] as i64,
        })
    }
}

impl From<I128> for Integer {
    fn from(value: I128) -> Self {
        Integer::from(i128::from(value))
    }
}

impl Ord for I128 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.high
            .cmp(&other.high)
            .then_with(|| self.low.cmp(&other.low))
    }
}

impl PartialOrd for I128 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for I128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", i128::from(*self))
    }
}

// --------------------------------------------------------------------- I256

impl I256 {
    pub const fn zero() -> Self {
        Self {
            low: U128::zero(),
            high: I128::zero(),
        }
    }

    pub const fn max() -> Self {
        Self {
            low: U128::max(),
            high: I128::max(),
        }
    }

    pub const fn min() -> Self {
        Self {
            low: U128::zero(),
            high: I128::min(),
        }
    }

    pub fn to_le_bytes(self) -> [u8; 32] {
        let mut out = [0u8; 32];
        out[..16].copy_from_slice(&self.low.to_le_bytes());
        out[16..].copy_from_slice(&self.high.to_le_bytes());
        out
    }

    pub fn from_le_bytes(bytes: [u8; 32]) -> Self {
        let mut low = [0u8; 16];
        let mut high = [0u8; 16];
        low.copy_from_slice(&bytes[..16]);
        high.copy_from_slice(&bytes[16..]);
        Self {
            low: U128::from_le_bytes(low),
            high: I128::from_le_bytes(high),
        }
    }

    fn limbs(self) -> [u64; 4] {
        [
            self.low.low,
            self.low.high,
            self.high.low,
            self.high.high as u64,
        ]
    }
}

impl From<i128> for I256 {
    fn from(value: i128) -> Self {
        let sign = if value < 0 { -1 } else { 0 };
        Self {
            low: U128::from(value as u128),
            high: I128 {
                low: sign as u64,
                high: sign,
            },
        }
    }
}

impl TryFrom<&Integer> for I256 {
    type Error = IntegerError;

    fn try_from(value: &Integer) -> Result<Self, Self::Error> {
        let xs = signed_limbs(value, 256)?;
        Ok(Self {
            low: U128 {
                low: xs[0],
                high: xs[1],
            },
            high: I128 {
                low: xs[2],
                high: xs[3] as i64,
            },
        })
    }
}

impl From<I256> for Integer {
    fn from(value: I256) -> Self {
        limbs_to_signed(&value.limbs())
    }
}

impl Ord for I256 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.high
            .cmp(&other.high)
            .then_with(|| self.low.cmp(&other.low))
    }
}

impl PartialOrd for I256 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for I256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Integer::from(*self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(s: &str) -> Integer {
        s.parse().expect("decimal integer")
    }

    #[test]
    fn u128_native_roundtrip() {
        for v in [0u128, 1, u64::MAX as u128, u64::MAX as u128 + 1, u128::MAX] {
            assert_eq!(u128::from(U128::from(v)), v);
        }
        assert_eq!(U128::max(), U128::from(u128::MAX));
        assert_eq!(U128::from(1u128 << 64), U128 { low: 0, high: 1 });
    }

    #[test]
    fn i128_native_roundtrip() {
        for v in [0i128, 1, -1, i64::MIN as i128, i128::MIN, i128::MAX] {
            assert_eq!(i128::from(I128::from(v)), v);
        }
        assert_eq!(I128::min(), I128::from(i128::MIN));
        assert_eq!(I128::max(), I128::from(i128::MAX));
    }

    #[test]
    fn u64_conversion_separates_errors() {
        assert_eq!(u64_from_integer(&big("-1")), Err(IntegerError::Negative));
        assert_eq!(u64_from_integer(&pow2(64)), Err(IntegerError::Overflow));
        assert_eq!(u64_from_integer(&Integer::from(u64::MAX)), Ok(u64::MAX));
        assert_eq!(u64_from_integer(&Integer::from(0u32)), Ok(0));
    }

    #[test]
    fn i64_conversion_bounds() {
        assert_eq!(i64_from_integer(&Integer::from(i64::MIN)), Ok(i64::MIN));
        assert_eq!(i64_from_integer(&Integer::from(i64::MAX)), Ok(i64::MAX));
        assert_eq!(i64_from_integer(&big("-1")), Ok(-1));
        assert_eq!(i64_from_integer(&pow2(63)), Err(IntegerError::Overflow));
        assert_eq!(
            i64_from_integer(&(-pow2(63) - Integer::from(1u32))),
            Err(IntegerError::Overflow)
        );
    }

    #[test]
    fn unsigned_rejects_negative() {
        let minus_one = big("-1");
        assert_eq!(U128::try_from(&minus_one), Err(IntegerError::Negative));
        assert_eq!(U256::try_from(&minus_one), Err(IntegerError::Negative));
    }

    #[test]
    fn unsigned_rejects_wider_values() {
        let two_128 = pow2(128);
        assert_eq!(U128::try_from(&two_128), Err(IntegerError::Overflow));
        assert!(U256::try_from(&two_128).is_ok());
        assert_eq!(U256::try_from(&pow2(256)), Err(IntegerError::Overflow));
    }

    #[test]
    fn unsigned_max_fits() {
        let max = pow2(256) - Integer::from(1u32);
        assert_eq!(U256::try_from(&max), Ok(U256::max()));
        assert_eq!(Integer::from(U256::max()), max);
    }

    #[test]
    fn unsigned_zero_extends() {
        let v = U256::try_from(&Integer::from(5u32)).unwrap();
        assert_eq!(v, U256::from(5u128));
        assert_eq!(v.high, U128::zero());
        assert_eq!(U256::try_from(&Integer::from(0u32)), Ok(U256::zero()));
    }

    #[test]
    fn signed_bounds() {
        let half = pow2(255);
        let min = -half.clone();
        let max = half.clone() - Integer::from(1u32);
        assert_eq!(I256::try_from(&min), Ok(I256::min()));
        assert_eq!(I256::try_from(&max), Ok(I256::max()));
        assert_eq!(I256::try_from(&half), Err(IntegerError::Overflow));
        assert_eq!(
            I256::try_from(&(min - Integer::from(1u32))),
            Err(IntegerError::Overflow)
        );
        assert_eq!(
            I128::try_from(&pow2(127)),
            Err(IntegerError::Overflow)
        );
    }

    #[test]
    fn signed_negative_roundtrip() {
        for s in ["-1", "-2", "-340282366920938463463374607431768211456", "12345"] {
            let v = big(s);
            let fixed = I256::try_from(&v).unwrap();
            assert_eq!(Integer::from(fixed), v);
        }
        assert_eq!(I256::try_from(&big("-1")).unwrap(), I256::from(-1i128));
        assert_eq!(I128::try_from(&big("-7")).unwrap(), I128::from(-7i128));
    }

    #[test]
    fn le_bytes_layout_is_low_limb_first() {
        let v = U256::from(1u128);
        let bytes = v.to_le_bytes();
        assert_eq!(bytes[0], 1);
        assert!(bytes[1..].iter().all(|b| *b == 0));
        assert_eq!(U256::from_le_bytes(bytes), v);

        let minus_one = I256::from(-1i128);
        assert_eq!(minus_one.to_le_bytes(), [0xff; 32]);
        assert_eq!(I256::from_le_bytes([0xff; 32]), minus_one);
        assert_eq!(I128::from_le_bytes((-5i128).to_le_bytes()), I128::from(-5i128));
    }

    #[test]
    fn ordering_is_numeric() {
        assert!(U128::from(1u128 << 64) > U128::from(u64::MAX as u128));
        assert!(I128::from(-1i128) < I128::from(0i128));
        assert!(I256::min() < I256::from(-1i128));
        assert!(I256::from(-1i128) < I256::zero());
        assert!(U256::max() > U256::from(u128::MAX));
    }

    #[test]
    fn display_is_decimal() {
        assert_eq!(U128::max().to_string(), u128::MAX.to_string());
        assert_eq!(I128::from(-42i128).to_string(), "-42");
        assert_eq!(
            U256::max().to_string(),
            "115792089237316195423570985008687907853269984665640564039457584007913129639935"
        );
        assert_eq!(I256::from(-1i128).to_string(), "-1");
    }
}
