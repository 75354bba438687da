//! Encoder and decoder capability contracts.
//!
//! A concrete format implements the required methods: fixed-width primitives,
//! the `len` and `variant_index` encodings, depth bookkeeping and the map
//! canonicalization hooks. Strings, byte sequences, options, sequences and
//! maps are provided on top of those and are the same for every format.
//!
//! Callers issue one call per logical field, in a fixed order, and the
//! decoder must be driven with the same sequence of calls that produced the
//! bytes.

use std::ops::Range;

use crate::codec::{Decode, Encode};
use crate::error::{CodecError, Result};
use crate::int::{I128, I256, U128, U256};

/// Write side of a binary format.
pub trait Encoder {
    fn write_bool(&mut self, value: bool) -> Result<()>;
    fn write_u8(&mut self, value: u8) -> Result<()>;
    fn write_u16(&mut self, value: u16) -> Result<()>;
    fn write_u32(&mut self, value: u32) -> Result<()>;
    fn write_u64(&mut self, value: u64) -> Result<()>;
    fn write_u128(&mut self, value: U128) -> Result<()>;
    fn write_u256(&mut self, value: U256) -> Result<()>;
    fn write_i8(&mut self, value: i8) -> Result<()>;
    fn write_i16(&mut self, value: i16) -> Result<()>;
    fn write_i32(&mut self, value: i32) -> Result<()>;
    fn write_i64(&mut self, value: i64) -> Result<()>;
    fn write_i128(&mut self, value: I128) -> Result<()>;
    fn write_i256(&mut self, value: I256) -> Result<()>;

    /// Writes raw bytes with no length prefix; the reader must know the size.
    fn write_fixed_bytes(&mut self, value: &[u8]) -> Result<()>;

    /// Writes a collection size.
    fn write_len(&mut self, len: usize) -> Result<()>;

    /// Writes the discriminant of a tagged union.
    fn write_variant_index(&mut self, index: u32) -> Result<()>;

    fn enter_container(&mut self) -> Result<()>;
    fn exit_container(&mut self) -> Result<()>;

    /// Number of bytes written so far.
    fn offset(&self) -> usize;

    /// Reorders the map entries starting at `offsets` (one per entry, in write
    /// order, the last one running to the current end of output) into
    /// canonical order.
    fn sort_map_entries(&mut self, offsets: &[usize]);

    fn write_unit(&mut self) -> Result<()> {
        Ok(())
    }

    fn write_f32(&mut self, _value: f32) -> Result<()> {
        Err(CodecError::Unimplemented("f32"))
    }

    fn write_f64(&mut self, _value: f64) -> Result<()> {
        Err(CodecError::Unimplemented("f64"))
    }

    fn write_char(&mut self, _value: char) -> Result<()> {
        Err(CodecError::Unimplemented("char"))
    }

    /// Writes a length-prefixed byte sequence.
    fn write_bytes(&mut self, value: &[u8]) -> Result<()> {
        self.write_len(value.len())?;
        self.write_fixed_bytes(value)
    }

    /// Writes a length-prefixed UTF-8 string.
    fn write_str(&mut self, value: &str) -> Result<()> {
        self.write_bytes(value.as_bytes())
    }

    fn write_option_tag(&mut self, present: bool) -> Result<()> {
        self.write_bool(present)
    }

    /// Runs `body` inside one container, releasing the depth budget whether
    /// or not `body` succeeds.
    fn container<T, F>(&mut self, body: F) -> Result<T>
    where
        Self: Sized,
        F: FnOnce(&mut Self) -> Result<T>,
    {
        self.enter_container()?;
        let result = body(self);
        let exited = self.exit_container();
        let value = result?;
        exited?;
        Ok(value)
    }

    fn write_option<T: Encode>(&mut self, value: Option<&T>) -> Result<()>
    where
        Self: Sized,
    {
        match value {
            Some(inner) => {
                self.write_option_tag(true)?;
                inner.encode(self)
            }
            None => self.write_option_tag(false),
        }
    }

    /// Writes a length followed by every element, as one container.
    fn write_seq<T: Encode>(&mut self, items: &[T]) -> Result<()>
    where
        Self: Sized,
    {
        self.container(|encoder| {
            encoder.write_len(items.len())?;
            for item in items {
                item.encode(encoder)?;
            }
            Ok(())
        })
    }

    /// Writes a map in the caller's iteration order, then canonicalizes the
    /// written entries.
    fn write_map<'a, K, V, I>(&mut self, entries: I) -> Result<()>
    where
        Self: Sized,
        K: Encode + 'a,
        V: Encode + 'a,
        I: ExactSizeIterator<Item = (&'a K, &'a V)>,
    {
        self.container(|encoder| {
            encoder.write_len(entries.len())?;
            let mut offsets = Vec::with_capacity(entries.len());
            for (key, value) in entries {
                offsets.push(encoder.offset());
                key.encode(encoder)?;
                value.encode(encoder)?;
            }
            encoder.sort_map_entries(&offsets);
            Ok(())
        })
    }
}

/// Read side of a binary format.
pub trait Decoder {
    fn read_bool(&mut self) -> Result<bool>;
    fn read_u8(&mut self) -> Result<u8>;
    fn read_u16(&mut self) -> Result<u16>;
    fn read_u32(&mut self) -> Result<u32>;
    fn read_u64(&mut self) -> Result<u64>;
    fn read_u128(&mut self) -> Result<U128>;
    fn read_u256(&mut self) -> Result<U256>;
    fn read_i8(&mut self) -> Result<i8>;
    fn read_i16(&mut self) -> Result<i16>;
    fn read_i32(&mut self) -> Result<i32>;
    fn read_i64(&mut self) -> Result<i64>;
    fn read_i128(&mut self) -> Result<I128>;
    fn read_i256(&mut self) -> Result<I256>;

    /// Reads exactly `len` raw bytes.
    fn read_fixed_bytes(&mut self, len: usize) -> Result<Vec<u8>>;

    fn read_len(&mut self) -> Result<usize>;
    fn read_variant_index(&mut self) -> Result<u32>;

    fn enter_container(&mut self) -> Result<()>;
    fn exit_container(&mut self) -> Result<()>;

    /// Number of input bytes consumed so far.
    fn offset(&self) -> usize;

    /// Number of input bytes not yet consumed.
    fn remaining(&self) -> usize;

    /// Fails with [`CodecError::MapKeysNotIncreasing`] unless the input bytes
    /// in `previous` sort strictly before the bytes in `current`.
    fn check_keys_increasing(&self, previous: Range<usize>, current: Range<usize>) -> Result<()>;

    fn read_unit(&mut self) -> Result<()> {
        Ok(())
    }

    fn read_f32(&mut self) -> Result<f32> {
        Err(CodecError::Unimplemented("f32"))
    }

    fn read_f64(&mut self) -> Result<f64> {
        Err(CodecError::Unimplemented("f64"))
    }

    fn read_char(&mut self) -> Result<char> {
        Err(CodecError::Unimplemented("char"))
    }

    fn read_bytes(&mut self) -> Result<Vec<u8>> {
        let len = self.read_len()?;
        self.read_fixed_bytes(len)
    }

    fn read_str(&mut self) -> Result<String> {
        let bytes = self.read_bytes()?;
        String::from_utf8(bytes).map_err(|_| CodecError::InvalidUtf8)
    }

    fn read_option_tag(&mut self) -> Result<bool> {
        self.read_bool()
    }

    fn container<T, F>(&mut self, body: F) -> Result<T>
    where
        Self: Sized,
        F: FnOnce(&mut Self) -> Result<T>,
    {
        self.enter_container()?;
        let result = body(self);
        let exited = self.exit_container();
        let value = result?;
        exited?;
        Ok(value)
    }

    fn read_option<T: Decode>(&mut self) -> Result<Option<T>>
    where
        Self: Sized,
    {
        if self.read_option_tag()? {
            T::decode(self).map(Some)
        } else {
            Ok(None)
        }
    }

    fn read_seq<T: Decode>(&mut self) -> Result<Vec<T>>
    where
        Self: Sized,
    {
        self.container(|decoder| {
            let len = decoder.read_len()?;
            // Capacity is bounded by the input, not by the claimed length.
            let mut items = Vec::with_capacity(len.min(decoder.remaining()));
            for _ in 0..len {
                items.push(T::decode(decoder)?);
            }
            Ok(items)
        })
    }

    /// Reads map entries, rejecting any encoding whose keys are not in
    /// strictly increasing byte order.
    fn read_map<K: Decode, V: Decode>(&mut self) -> Result<Vec<(K, V)>>
    where
        Self: Sized,
    {
        self.container(|decoder| {
            let len = decoder.read_len()?;
            let mut entries = Vec::with_capacity(len.min(decoder.remaining()));
            let mut previous: Option<Range<usize>> = None;
            for _ in 0..len {
                let start = decoder.offset();
                let key = K::decode(decoder)?;
                let current = start..decoder.offset();
                if let Some(previous) = previous {
                    decoder.check_keys_increasing(previous, current.clone())?;
                }
                previous = Some(current);
                let value = V::decode(decoder)?;
                entries.push((key, value));
            }
            Ok(entries)
        })
    }
}
