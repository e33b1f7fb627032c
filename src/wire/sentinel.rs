//! Compile-time constant sentinels.
//!
//! A `Const<U, V>` occupies `U`'s width on the wire and always
//! carries the value `V` — version words, magic markers, and the
//! like. Decoding fails unless the wire value matches exactly.

use std::fmt;
use std::marker::PhantomData;

use crate::decode::Decoder;
use crate::encode::Encoder;
use crate::error::{DecodeError, EncodeError};
use crate::measure::Sizer;
use crate::wire::{Decode, Encode, Measure};

/// A zero-sized field encoded as the unsigned integer type `U`
/// holding the fixed value `V` (truncated to `U`'s width).
pub struct Const<U, const V: u64>(PhantomData<U>);

impl<U, const V: u64> Const<U, V> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<U, const V: u64> Default for Const<U, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<U, const V: u64> Clone for Const<U, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<U, const V: u64> Copy for Const<U, V> {}

impl<U, const V: u64> PartialEq for Const<U, V> {
    fn eq(&self, _: &Self) -> bool {
        true
    }
}

impl<U, const V: u64> Eq for Const<U, V> {}

impl<U, const V: u64> fmt::Debug for Const<U, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Const({:#x})", V)
    }
}

macro_rules! const_wire {
    ($($t:ty),+ $(,)?) => {
        $(
            impl<const V: u64> Const<$t, V> {
                /// The value this sentinel puts on the wire.
                pub const VALUE: $t = V as $t;
            }

            impl<const V: u64> Encode for Const<$t, V> {
                fn encode(&self, enc: &mut Encoder<'_>) -> Result<(), EncodeError> {
                    enc.put_scalar(Self::VALUE)
                }
            }

            impl<'b, const V: u64> Decode<'b> for Const<$t, V> {
                fn decode(dec: &mut Decoder<'b>) -> Result<Self, DecodeError> {
                    let found: $t = dec.get_scalar()?;
                    if found != Self::VALUE {
                        return Err(DecodeError::ConstMismatch {
                            expected: Self::VALUE as u64,
                            found: found as u64,
                        });
                    }
                    Ok(Self::new())
                }
            }

            impl<const V: u64> Measure for Const<$t, V> {
                fn measure(szr: &mut Sizer<'_>) -> Result<(), DecodeError> {
                    szr.add_fixed(std::mem::size_of::<$t>())
                }
            }
        )+
    };
}

const_wire!(u8, u16, u32, u64);
