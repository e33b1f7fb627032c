//! The closed algebra of serializable shapes.
//!
//! Every wire-kind implements the three traversal traits below, one
//! impl per kind per direction. The traits share the engine types
//! ([`Encoder`], [`Decoder`], [`Sizer`]) but carry no state of their
//! own, so a single record description drives all three walks.

use crate::decode::Decoder;
use crate::encode::Encoder;
use crate::error::{DecodeError, EncodeError};
use crate::measure::Sizer;

mod containers;
mod enums;
mod scalar;
mod sentinel;
mod time;

pub use sentinel::Const;
pub use time::TimePoint;

/// Writes `self`'s wire form through an [`Encoder`].
pub trait Encode {
    fn encode(&self, enc: &mut Encoder<'_>) -> Result<(), EncodeError>;
}

/// Reads one value from a [`Decoder`] over a buffer with lifetime
/// `'b`. Owned kinds implement this for every `'b`; borrowing kinds
/// (lazy views) tie themselves to the buffer.
pub trait Decode<'b>: Sized {
    fn decode(dec: &mut Decoder<'b>) -> Result<Self, DecodeError>;
}

/// Walks one wire form under a [`Sizer`] without materializing it.
pub trait Measure {
    fn measure(szr: &mut Sizer<'_>) -> Result<(), DecodeError>;
}

/// A kind supporting all three traversals.
pub trait Wire<'b>: Encode + Decode<'b> + Measure {}

impl<'b, T: Encode + Decode<'b> + Measure> Wire<'b> for T {}
