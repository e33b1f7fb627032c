//! decode.rs — the reading traversal.
//!
//! A [`Decoder`] owns a read cursor over the input slice and the
//! governing optional-field mask, which stays empty until the first
//! mask word is read. Every read is bounds-checked; the decoder
//! never reaches past the slice it was given.

use crate::error::DecodeError;
use crate::mask::FieldMask;
use crate::net::NetScalar;
use crate::wire::Decode;

/// Reads exactly one wire form of `T` from the start of `buf`,
/// returning the value and the unconsumed remainder.
pub fn decode<'b, T: Decode<'b>>(buf: &'b [u8]) -> Result<(T, &'b [u8]), DecodeError> {
    let mut dec = Decoder::new(buf);
    let value = T::decode(&mut dec)?;
    Ok((value, dec.rest()))
}

/// Stateful reading visitor. Public so callers can chain several
/// `apply` calls over one buffer while sharing mask state.
pub struct Decoder<'b> {
    buf: &'b [u8],
    pos: usize,
    mask: Option<FieldMask>,
}

impl<'b> Decoder<'b> {
    pub fn new(buf: &'b [u8]) -> Self {
        Self {
            buf,
            pos: 0,
            mask: None,
        }
    }

    /// Decode one value at the current position.
    pub fn apply<T: Decode<'b>>(&mut self) -> Result<T, DecodeError> {
        T::decode(self)
    }

    /// Bytes consumed so far.
    pub fn consumed(&self) -> usize {
        self.pos
    }

    /// The unconsumed remainder of the input.
    pub fn rest(&self) -> &'b [u8] {
        &self.buf[self.pos..]
    }

    /// Consume the next `n` bytes.
    pub fn take(&mut self, n: usize) -> Result<&'b [u8], DecodeError> {
        if n > self.buf.len() - self.pos {
            return Err(DecodeError::Truncated);
        }
        let taken = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(taken)
    }

    /// Read one fixed-width integer in network byte order.
    pub fn get_scalar<S: NetScalar>(&mut self) -> Result<S, DecodeError> {
        let raw = self.take(S::WIDTH)?;
        Ok(S::get_be(raw))
    }

    /// Read a u16 count prefix.
    pub fn get_count(&mut self) -> Result<usize, DecodeError> {
        Ok(self.get_scalar::<u16>()? as usize)
    }

    /// Read a mask word into the governing mask.
    pub fn load_mask(&mut self) -> Result<(), DecodeError> {
        let word = self.get_scalar::<u16>()?;
        self.mask = Some(FieldMask::from(word));
        Ok(())
    }

    /// Whether `bit` is set in the governing mask. Fails if no mask
    /// word has been read yet.
    pub fn mask_bit(&self, bit: u8) -> Result<bool, DecodeError> {
        let mask = self.mask.ok_or(DecodeError::MaskMissing)?;
        Ok(mask.test(bit))
    }
}
