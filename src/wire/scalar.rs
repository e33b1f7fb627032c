//! Fixed-width leaf kinds: integers, bool, floats.

use crate::decode::Decoder;
use crate::encode::Encoder;
use crate::error::{DecodeError, EncodeError};
use crate::measure::Sizer;
use crate::net;
use crate::wire::{Decode, Encode, Measure};

macro_rules! wire_int {
    ($($t:ty),+ $(,)?) => {
        $(
            impl Encode for $t {
                fn encode(&self, enc: &mut Encoder<'_>) -> Result<(), EncodeError> {
                    enc.put_scalar(*self)
                }
            }
            impl<'b> Decode<'b> for $t {
                fn decode(dec: &mut Decoder<'b>) -> Result<Self, DecodeError> {
                    dec.get_scalar()
                }
            }
            impl Measure for $t {
                fn measure(szr: &mut Sizer<'_>) -> Result<(), DecodeError> {
                    szr.add_fixed(std::mem::size_of::<$t>())
                }
            }
        )+
    };
}

wire_int!(u8, u16, u32, u64, i8, i16, i32, i64);

impl Encode for bool {
    fn encode(&self, enc: &mut Encoder<'_>) -> Result<(), EncodeError> {
        enc.put_scalar(*self as u8)
    }
}

impl<'b> Decode<'b> for bool {
    /// Any nonzero byte reads as true.
    fn decode(dec: &mut Decoder<'b>) -> Result<Self, DecodeError> {
        Ok(dec.get_scalar::<u8>()? != 0)
    }
}

impl Measure for bool {
    fn measure(szr: &mut Sizer<'_>) -> Result<(), DecodeError> {
        szr.add_fixed(1)
    }
}

impl Encode for f32 {
    fn encode(&self, enc: &mut Encoder<'_>) -> Result<(), EncodeError> {
        enc.put_scalar(net::pack_f32(*self))
    }
}

impl<'b> Decode<'b> for f32 {
    fn decode(dec: &mut Decoder<'b>) -> Result<Self, DecodeError> {
        Ok(net::unpack_f32(dec.get_scalar()?))
    }
}

impl Measure for f32 {
    fn measure(szr: &mut Sizer<'_>) -> Result<(), DecodeError> {
        szr.add_fixed(4)
    }
}

impl Encode for f64 {
    fn encode(&self, enc: &mut Encoder<'_>) -> Result<(), EncodeError> {
        enc.put_scalar(net::pack_f64(*self))
    }
}

impl<'b> Decode<'b> for f64 {
    fn decode(dec: &mut Decoder<'b>) -> Result<Self, DecodeError> {
        Ok(net::unpack_f64(dec.get_scalar()?))
    }
}

impl Measure for f64 {
    fn measure(szr: &mut Sizer<'_>) -> Result<(), DecodeError> {
        szr.add_fixed(8)
    }
}
