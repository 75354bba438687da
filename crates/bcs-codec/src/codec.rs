//! Value-level encoding.
//!
//! [`Encode`] and [`Decode`] describe how a type maps onto the primitive
//! calls of an [`Encoder`] or [`Decoder`]. Implementations must issue the
//! same calls in the same order on both sides.

use std::collections::BTreeMap;

use crate::contract::{Decoder, Encoder};
use crate::error::{CodecError, Result};
use crate::int::{I128, I256, U128, U256};

/// A value that can be written to any [`Encoder`].
pub trait Encode {
    fn encode<E: Encoder>(&self, encoder: &mut E) -> Result<()>;
}

/// A value that can be read back from any [`Decoder`].
pub trait Decode: Sized {
    fn decode<D: Decoder>(decoder: &mut D) -> Result<Self>;
}

macro_rules! primitive {
    ($ty:ty, $write:ident, $read:ident) => {
        impl Encode for $ty {
            fn encode<E: Encoder>(&self, encoder: &mut E) -> Result<()> {
                encoder.$write(*self)
            }
        }

        impl Decode for $ty {
            fn decode<D: Decoder>(decoder: &mut D) -> Result<Self> {
                decoder.$read()
            }
        }
    };
}

primitive!(bool, write_bool, read_bool);
primitive!(u8, write_u8, read_u8);
primitive!(u16, write_u16, read_u16);
primitive!(u32, write_u32, read_u32);
primitive!(u64, write_u64, read_u64);
primitive!(U128, write_u128, read_u128);
primitive!(U256, write_u256, read_u256);
primitive!(i8, write_i8, read_i8);
primitive!(i16, write_i16, read_i16);
primitive!(i32, write_i32, read_i32);
primitive!(i64, write_i64, read_i64);
primitive!(I128, write_i128, read_i128);
primitive!(I256, write_i256, read_i256);
primitive!(f32, write_f32, read_f32);
primitive!(f64, write_f64, read_f64);
primitive!(char, write_char, read_char);

impl Encode for u128 {
    fn encode<E: Encoder>(&self, encoder: &mut E) -> Result<()> {
        encoder.write_u128(U128::from(*self))
    }
}

impl Decode for u128 {
    fn decode<D: Decoder>(decoder: &mut D) -> Result<Self> {
        decoder.read_u128().map(u128::from)
    }
}

impl Encode for i128 {
    fn encode<E: Encoder>(&self, encoder: &mut E) -> Result<()> {
        encoder.write_i128(I128::from(*self))
    }
}

impl Decode for i128 {
    fn decode<D: Decoder>(decoder: &mut D) -> Result<Self> {
        decoder.read_i128().map(i128::from)
    }
}

impl Encode for () {
    fn encode<E: Encoder>(&self, encoder: &mut E) -> Result<()> {
        encoder.write_unit()
    }
}

impl Decode for () {
    fn decode<D: Decoder>(decoder: &mut D) -> Result<Self> {
        decoder.read_unit()
    }
}

impl Encode for str {
    fn encode<E: Encoder>(&self, encoder: &mut E) -> Result<()> {
        encoder.write_str(self)
    }
}

impl Encode for String {
    fn encode<E: Encoder>(&self, encoder: &mut E) -> Result<()> {
        encoder.write_str(self)
    }
}

impl Decode for String {
    fn decode<D: Decoder>(decoder: &mut D) -> Result<Self> {
        decoder.read_str()
    }
}

impl<T: Encode + ?Sized> Encode for &T {
    fn encode<E: Encoder>(&self, encoder: &mut E) -> Result<()> {
        (**self).encode(encoder)
    }
}

impl<T: Encode + ?Sized> Encode for Box<T> {
    fn encode<E: Encoder>(&self, encoder: &mut E) -> Result<()> {
        (**self).encode(encoder)
    }
}

impl<T: Decode> Decode for Box<T> {
    fn decode<D: Decoder>(decoder: &mut D) -> Result<Self> {
        T::decode(decoder).map(Box::new)
    }
}

impl<T: Encode> Encode for Option<T> {
    fn encode<E: Encoder>(&self, encoder: &mut E) -> Result<()> {
        encoder.write_option(self.as_ref())
    }
}

impl<T: Decode> Decode for Option<T> {
    fn decode<D: Decoder>(decoder: &mut D) -> Result<Self> {
        decoder.read_option()
    }
}

impl<T: Encode> Encode for [T] {
    fn encode<E: Encoder>(&self, encoder: &mut E) -> Result<()> {
        encoder.write_seq(self)
    }
}

impl<T: Encode> Encode for Vec<T> {
    fn encode<E: Encoder>(&self, encoder: &mut E) -> Result<()> {
        encoder.write_seq(self)
    }
}

impl<T: Decode> Decode for Vec<T> {
    fn decode<D: Decoder>(decoder: &mut D) -> Result<Self> {
        decoder.read_seq()
    }
}

/// Fixed-size byte arrays carry no length prefix.
impl<const N: usize> Encode for [u8; N] {
    fn encode<E: Encoder>(&self, encoder: &mut E) -> Result<()> {
        encoder.write_fixed_bytes(self)
    }
}

impl<const N: usize> Decode for [u8; N] {
    fn decode<D: Decoder>(decoder: &mut D) -> Result<Self> {
        let bytes = decoder.read_fixed_bytes(N)?;
        bytes
            .try_into()
            .map_err(|_| CodecError::UnexpectedEndOfInput)
    }
}

impl<K: Encode, V: Encode> Encode for BTreeMap<K, V> {
    fn encode<E: Encoder>(&self, encoder: &mut E) -> Result<()> {
        encoder.write_map(self.iter())
    }
}

impl<K: Decode + Ord, V: Decode> Decode for BTreeMap<K, V> {
    fn decode<D: Decoder>(decoder: &mut D) -> Result<Self> {
        decoder
            .read_map::<K, V>()
            .map(|entries| entries.into_iter().collect())
    }
}

macro_rules! tuple {
    ($($name:ident : $idx:tt),+) => {
        impl<$($name: Encode),+> Encode for ($($name,)+) {
            fn encode<E: Encoder>(&self, encoder: &mut E) -> Result<()> {
                $(self.$idx.encode(encoder)?;)+
                Ok(())
            }
        }

        impl<$($name: Decode),+> Decode for ($($name,)+) {
            fn decode<D: Decoder>(decoder: &mut D) -> Result<Self> {
                Ok(($($name::decode(decoder)?,)+))
            }
        }
    };
}

tuple!(T0: 0);
tuple!(T0: 0, T1: 1);
tuple!(T0: 0, T1: 1, T2: 2);
tuple!(T0: 0, T1: 1, T2: 2, T3: 3);
