//! Optional fields and the mask word that governs them.
//!
//! An [`OptionalSet`] field reserves a 16-bit mask word in the record
//! it appears in; every [`Optional`] field after it (until the next
//! `OptionalSet`) stores its presence in one bit of that word. Absent
//! fields contribute zero payload bytes. Touching an `Optional` when
//! no mask word governs the walk is a protocol error on encode and
//! decode; the sizer treats it as all-absent.

use std::ops::{Deref, DerefMut};

use crate::decode::Decoder;
use crate::encode::Encoder;
use crate::error::{DecodeError, EncodeError};
use crate::measure::Sizer;
use crate::wire::{Decode, Encode, Measure};

/// The mask-word field. Encodes as a u16 reserved at zero and
/// rewritten in place as the optionals behind it are serialized.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct OptionalSet;

impl Encode for OptionalSet {
    fn encode(&self, enc: &mut Encoder<'_>) -> Result<(), EncodeError> {
        enc.begin_mask()
    }
}

impl<'b> Decode<'b> for OptionalSet {
    fn decode(dec: &mut Decoder<'b>) -> Result<Self, DecodeError> {
        dec.load_mask()?;
        Ok(OptionalSet)
    }
}

impl Measure for OptionalSet {
    fn measure(szr: &mut Sizer<'_>) -> Result<(), DecodeError> {
        szr.load_mask()
    }
}

/// An optional field occupying presence bit `BIT` (0..=15) of the
/// governing mask. Dereferences to the inner `Option<T>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Optional<T, const BIT: u8>(pub Option<T>);

impl<T, const BIT: u8> Optional<T, BIT> {
    pub fn some(value: T) -> Self {
        Self(Some(value))
    }

    pub const fn none() -> Self {
        Self(None)
    }

    pub fn into_inner(self) -> Option<T> {
        self.0
    }
}

impl<T, const BIT: u8> Default for Optional<T, BIT> {
    fn default() -> Self {
        Self(None)
    }
}

impl<T, const BIT: u8> From<T> for Optional<T, BIT> {
    fn from(value: T) -> Self {
        Self(Some(value))
    }
}

impl<T, const BIT: u8> From<Option<T>> for Optional<T, BIT> {
    fn from(value: Option<T>) -> Self {
        Self(value)
    }
}

impl<T, const BIT: u8> Deref for Optional<T, BIT> {
    type Target = Option<T>;

    fn deref(&self) -> &Option<T> {
        &self.0
    }
}

impl<T, const BIT: u8> DerefMut for Optional<T, BIT> {
    fn deref_mut(&mut self) -> &mut Option<T> {
        &mut self.0
    }
}

impl<T: Encode, const BIT: u8> Encode for Optional<T, BIT> {
    fn encode(&self, enc: &mut Encoder<'_>) -> Result<(), EncodeError> {
        // The governing mask must exist even when the field is absent.
        enc.require_mask()?;
        if let Some(value) = &self.0 {
            enc.mark_present(BIT)?;
            value.encode(enc)?;
        }
        Ok(())
    }
}

impl<'b, T: Decode<'b>, const BIT: u8> Decode<'b> for Optional<T, BIT> {
    fn decode(dec: &mut Decoder<'b>) -> Result<Self, DecodeError> {
        if dec.mask_bit(BIT)? {
            Ok(Self(Some(T::decode(dec)?)))
        } else {
            Ok(Self(None))
        }
    }
}

impl<T: Measure, const BIT: u8> Measure for Optional<T, BIT> {
    fn measure(szr: &mut Sizer<'_>) -> Result<(), DecodeError> {
        if szr.mask_bit(BIT) {
            T::measure(szr)?;
        }
        Ok(())
    }
}
