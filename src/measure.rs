//! measure.rs — the sizing traversal.
//!
//! A [`Sizer`] walks a wire form that is already present in a buffer
//! and reports its exact byte length without materializing values.
//! Fixed-width kinds advance by their width; strings and containers
//! peek their prefixes to know how far to skip. The accumulated size
//! is the distance traveled.
//!
//! A sizing walk shares the optional-field protocol with the other
//! traversals, except that a missing mask reads as all-absent rather
//! than an error.

use crate::error::DecodeError;
use crate::mask::FieldMask;
use crate::net::NetScalar;
use crate::wire::Measure;

/// On-wire byte length of the `T` starting at `buf`.
///
/// # Panics
///
/// Panics if `buf` ends before the encoding it describes; measuring
/// untrusted input goes through [`try_measure`] instead.
pub fn measure<T: Measure>(buf: &[u8]) -> usize {
    try_measure::<T>(buf).expect("buffer shorter than the encoding it describes")
}

/// Checked variant of [`measure`].
pub fn try_measure<T: Measure>(buf: &[u8]) -> Result<usize, DecodeError> {
    let mut szr = Sizer::new(buf);
    T::measure(&mut szr)?;
    Ok(szr.size())
}

/// Stateful sizing visitor. Public so callers can chain several
/// `apply` calls over one buffer while sharing mask state.
pub struct Sizer<'b> {
    buf: &'b [u8],
    pos: usize,
    mask: FieldMask,
}

impl<'b> Sizer<'b> {
    pub fn new(buf: &'b [u8]) -> Self {
        Self {
            buf,
            pos: 0,
            mask: FieldMask::new(),
        }
    }

    /// Measure one value at the current position.
    pub fn apply<T: Measure>(&mut self) -> Result<(), DecodeError> {
        T::measure(self)
    }

    /// Total bytes accounted for so far.
    pub fn size(&self) -> usize {
        self.pos
    }

    /// Account for `n` bytes of fixed-width or already-counted data.
    pub fn add_fixed(&mut self, n: usize) -> Result<(), DecodeError> {
        if n > self.buf.len() - self.pos {
            return Err(DecodeError::Truncated);
        }
        self.pos += n;
        Ok(())
    }

    /// Peek a u16 count prefix and account for its two bytes.
    pub fn read_count(&mut self) -> Result<usize, DecodeError> {
        if self.buf.len() - self.pos < 2 {
            return Err(DecodeError::Truncated);
        }
        let count = u16::get_be(&self.buf[self.pos..]) as usize;
        self.pos += 2;
        Ok(count)
    }

    /// Peek a mask word into the governing mask and account for it.
    pub fn load_mask(&mut self) -> Result<(), DecodeError> {
        if self.buf.len() - self.pos < 2 {
            return Err(DecodeError::Truncated);
        }
        self.mask.load(u16::get_be(&self.buf[self.pos..]));
        self.pos += 2;
        Ok(())
    }

    /// Whether `bit` is set in the governing mask; all-absent before
    /// any mask word has been seen.
    pub fn mask_bit(&self, bit: u8) -> bool {
        self.mask.test(bit)
    }
}
