//! Deferred-decode values.
//!
//! A `Lazy<T>` either holds a materialized `T` or a borrowed slice of
//! the source buffer trimmed to exactly one `T`'s wire length (the
//! sizer computes the trim). Decoding a record that embeds a lazy
//! field therefore skips the field's sub-tree in one bounded walk;
//! the payload is decoded on first access and cached.
//!
//! Materialization goes through a once-cell, so a `&Lazy` can
//! transition from deferred to materialized; the type is not meant to
//! be shared across threads.

use std::cell::OnceCell;

use crate::decode::{Decoder, decode};
use crate::encode::Encoder;
use crate::error::{DecodeError, EncodeError};
use crate::measure::{Sizer, try_measure};
use crate::wire::{Decode, Encode, Measure};

pub struct Lazy<'b, T> {
    buf: &'b [u8],
    cell: OnceCell<T>,
}

impl<'b, T> Lazy<'b, T> {
    /// A lazy that is materialized from the start.
    pub fn from_value(value: T) -> Self {
        let cell = OnceCell::new();
        let _ = cell.set(value);
        Self { buf: &[], cell }
    }

    /// A deferred lazy over the encoding at the start of `buf`. The
    /// slice is trimmed to the payload's exact wire length.
    pub fn from_buffer(buf: &'b [u8]) -> Result<Self, DecodeError>
    where
        T: Measure,
    {
        let len = try_measure::<T>(buf)?;
        Ok(Self {
            buf: &buf[..len],
            cell: OnceCell::new(),
        })
    }

    /// Whether the payload has been materialized yet.
    pub fn has_value(&self) -> bool {
        self.cell.get().is_some()
    }

    /// Wire length of the backing slice; zero for value-born lazies.
    pub fn buffer_size(&self) -> usize {
        self.buf.len()
    }

    /// The payload, decoding and caching it on first access.
    pub fn get(&self) -> Result<&T, DecodeError>
    where
        T: Decode<'b>,
    {
        self.materialize()?;
        Ok(self.cell.get().expect("materialized above"))
    }

    /// Mutable access to the payload, materializing it first.
    pub fn get_mut(&mut self) -> Result<&mut T, DecodeError>
    where
        T: Decode<'b>,
    {
        self.materialize()?;
        Ok(self.cell.get_mut().expect("materialized above"))
    }

    fn materialize(&self) -> Result<(), DecodeError>
    where
        T: Decode<'b>,
    {
        if self.cell.get().is_none() {
            let (value, _) = decode::<T>(self.buf)?;
            let _ = self.cell.set(value);
        }
        Ok(())
    }
}

impl<'b, T: Default> Default for Lazy<'b, T> {
    fn default() -> Self {
        Self::from_value(T::default())
    }
}

impl<'b, T> From<T> for Lazy<'b, T> {
    fn from(value: T) -> Self {
        Self::from_value(value)
    }
}

impl<'b, T: Clone> Clone for Lazy<'b, T> {
    fn clone(&self) -> Self {
        Self {
            buf: self.buf,
            cell: self.cell.clone(),
        }
    }
}

impl<'b, T: std::fmt::Debug> std::fmt::Debug for Lazy<'b, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.cell.get() {
            Some(value) => f.debug_tuple("Lazy").field(value).finish(),
            None => write!(f, "Lazy(deferred, {} bytes)", self.buf.len()),
        }
    }
}

/// A materialized lazy encodes its value; a deferred one copies its
/// backing bytes verbatim, so the output matches the source slice
/// byte for byte.
impl<'b, T: Encode> Encode for Lazy<'b, T> {
    fn encode(&self, enc: &mut Encoder<'_>) -> Result<(), EncodeError> {
        match self.cell.get() {
            Some(value) => value.encode(enc),
            None => enc.put_raw(self.buf),
        }
    }
}

impl<'b, T: Measure> Decode<'b> for Lazy<'b, T> {
    fn decode(dec: &mut Decoder<'b>) -> Result<Self, DecodeError> {
        let len = try_measure::<T>(dec.rest())?;
        let buf = dec.take(len)?;
        Ok(Self {
            buf,
            cell: OnceCell::new(),
        })
    }
}

impl<'b, T: Measure> Measure for Lazy<'b, T> {
    fn measure(szr: &mut Sizer<'_>) -> Result<(), DecodeError> {
        T::measure(szr)
    }
}
