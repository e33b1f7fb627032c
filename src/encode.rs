//! encode.rs — the writing traversal.
//!
//! An [`Encoder`] owns a write cursor over a caller-provided output
//! slice plus the state of the optional-field protocol: the current
//! mask value and the in-buffer offset of the most recently reserved
//! mask word, which is rewritten in place as present fields are
//! serialized after it.

use crate::error::EncodeError;
use crate::mask::FieldMask;
use crate::net::NetScalar;
use crate::wire::Encode;

/// Writes one wire form of `value` at the start of `buf` and returns
/// the unwritten tail of the buffer.
///
/// On error the written prefix up to the failing field may remain in
/// the buffer; callers must treat the whole buffer as invalid.
pub fn encode<'b, T: Encode>(buf: &'b mut [u8], value: &T) -> Result<&'b mut [u8], EncodeError> {
    let mut enc = Encoder::new(buf);
    value.encode(&mut enc)?;
    Ok(enc.into_rest())
}

/// Stateful writing visitor. Public so callers can chain several
/// `apply` calls over one buffer while sharing mask state.
pub struct Encoder<'b> {
    buf: &'b mut [u8],
    pos: usize,
    mask: FieldMask,
    mask_at: Option<usize>,
}

impl<'b> Encoder<'b> {
    pub fn new(buf: &'b mut [u8]) -> Self {
        Self {
            buf,
            pos: 0,
            mask: FieldMask::new(),
            mask_at: None,
        }
    }

    /// Encode one value at the current position.
    pub fn apply<T: Encode>(&mut self, value: &T) -> Result<(), EncodeError> {
        value.encode(self)
    }

    /// Bytes written so far.
    pub fn written(&self) -> usize {
        self.pos
    }

    /// Space left in the output buffer.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Consume the encoder, returning the unwritten tail.
    pub fn into_rest(self) -> &'b mut [u8] {
        let Self { buf, pos, .. } = self;
        &mut buf[pos..]
    }

    /// Copy raw bytes through unchanged.
    pub fn put_raw(&mut self, bytes: &[u8]) -> Result<(), EncodeError> {
        if bytes.len() > self.remaining() {
            return Err(EncodeError::BufferFull);
        }
        self.buf[self.pos..self.pos + bytes.len()].copy_from_slice(bytes);
        self.pos += bytes.len();
        Ok(())
    }

    /// Write one fixed-width integer in network byte order.
    pub fn put_scalar<S: NetScalar>(&mut self, v: S) -> Result<(), EncodeError> {
        if S::WIDTH > self.remaining() {
            return Err(EncodeError::BufferFull);
        }
        v.put_be(&mut self.buf[self.pos..self.pos + S::WIDTH]);
        self.pos += S::WIDTH;
        Ok(())
    }

    /// Write a u16 count prefix, rejecting counts the prefix cannot hold.
    pub fn put_count(&mut self, n: usize) -> Result<(), EncodeError> {
        let count = u16::try_from(n).map_err(|_| EncodeError::TooLong(n))?;
        self.put_scalar(count)
    }

    /// Write a length-prefixed byte run. Space for the prefix and the
    /// payload is verified up front, so nothing is written on overflow.
    pub fn put_bytes_prefixed(&mut self, bytes: &[u8]) -> Result<(), EncodeError> {
        let len = u16::try_from(bytes.len()).map_err(|_| EncodeError::TooLong(bytes.len()))?;
        if 2 + bytes.len() > self.remaining() {
            return Err(EncodeError::BufferFull);
        }
        self.put_scalar(len)?;
        self.put_raw(bytes)
    }

    pub fn put_str(&mut self, s: &str) -> Result<(), EncodeError> {
        self.put_bytes_prefixed(s.as_bytes())
    }

    /// Reserve a fresh mask word at the current position, written as
    /// zero. It becomes the governing mask for the optional fields
    /// that follow, replacing any previous one.
    pub fn begin_mask(&mut self) -> Result<(), EncodeError> {
        self.mask.reset();
        if self.remaining() < 2 {
            return Err(EncodeError::BufferFull);
        }
        self.mask_at = Some(self.pos);
        self.put_scalar(0u16)
    }

    /// Fail unless a mask word governs the current position.
    pub fn require_mask(&self) -> Result<(), EncodeError> {
        if self.mask_at.is_none() {
            return Err(EncodeError::MaskMissing);
        }
        Ok(())
    }

    /// Set `bit` in the governing mask and rewrite the reserved mask
    /// word in place.
    pub fn mark_present(&mut self, bit: u8) -> Result<(), EncodeError> {
        let at = self.mask_at.ok_or(EncodeError::MaskMissing)?;
        self.mask.set(bit);
        self.buf[at..at + 2].copy_from_slice(&self.mask.to_u16().to_be_bytes());
        Ok(())
    }
}
