//! Length- and count-prefixed kinds: strings, sequences, maps, pairs.

use std::collections::HashMap;
use std::hash::Hash;

use crate::decode::Decoder;
use crate::encode::Encoder;
use crate::error::{DecodeError, EncodeError};
use crate::measure::Sizer;
use crate::wire::{Decode, Encode, Measure};

impl Encode for String {
    fn encode(&self, enc: &mut Encoder<'_>) -> Result<(), EncodeError> {
        enc.put_str(self)
    }
}

impl Encode for &str {
    fn encode(&self, enc: &mut Encoder<'_>) -> Result<(), EncodeError> {
        enc.put_str(self)
    }
}

impl<'b> Decode<'b> for String {
    /// Copies the payload into a fresh owned string. Byte runs that
    /// are not valid UTF-8 have the offending sequences replaced;
    /// binary payloads belong in `Vec<u8>`, which shares this wire
    /// shape.
    fn decode(dec: &mut Decoder<'b>) -> Result<Self, DecodeError> {
        let len = dec.get_count()?;
        let raw = dec.take(len)?;
        Ok(String::from_utf8_lossy(raw).into_owned())
    }
}

impl Measure for String {
    fn measure(szr: &mut Sizer<'_>) -> Result<(), DecodeError> {
        let len = szr.read_count()?;
        szr.add_fixed(len)
    }
}

impl<T: Encode> Encode for Vec<T> {
    fn encode(&self, enc: &mut Encoder<'_>) -> Result<(), EncodeError> {
        enc.put_count(self.len())?;
        for item in self {
            item.encode(enc)?;
        }
        Ok(())
    }
}

impl<'b, T: Decode<'b>> Decode<'b> for Vec<T> {
    fn decode(dec: &mut Decoder<'b>) -> Result<Self, DecodeError> {
        let count = dec.get_count()?;
        let mut items = Vec::with_capacity(count);
        for _ in 0..count {
            items.push(T::decode(dec)?);
        }
        Ok(items)
    }
}

impl<T: Measure> Measure for Vec<T> {
    fn measure(szr: &mut Sizer<'_>) -> Result<(), DecodeError> {
        let count = szr.read_count()?;
        for _ in 0..count {
            T::measure(szr)?;
        }
        Ok(())
    }
}

/// Entries go out in the map's iteration order, which is not
/// deterministic; callers needing reproducible bytes pre-sort into a
/// `Vec` of pairs.
impl<K: Encode, V: Encode> Encode for HashMap<K, V> {
    fn encode(&self, enc: &mut Encoder<'_>) -> Result<(), EncodeError> {
        enc.put_count(self.len())?;
        for (k, v) in self {
            k.encode(enc)?;
            v.encode(enc)?;
        }
        Ok(())
    }
}

impl<'b, K: Decode<'b> + Eq + Hash, V: Decode<'b>> Decode<'b> for HashMap<K, V> {
    /// Duplicate keys resolve last-write-wins.
    fn decode(dec: &mut Decoder<'b>) -> Result<Self, DecodeError> {
        let count = dec.get_count()?;
        let mut map = HashMap::with_capacity(count);
        for _ in 0..count {
            let (k, v) = <(K, V)>::decode(dec)?;
            map.insert(k, v);
        }
        Ok(map)
    }
}

impl<K: Measure, V: Measure> Measure for HashMap<K, V> {
    fn measure(szr: &mut Sizer<'_>) -> Result<(), DecodeError> {
        let count = szr.read_count()?;
        for _ in 0..count {
            <(K, V)>::measure(szr)?;
        }
        Ok(())
    }
}

impl<A: Encode, B: Encode> Encode for (A, B) {
    fn encode(&self, enc: &mut Encoder<'_>) -> Result<(), EncodeError> {
        self.0.encode(enc)?;
        self.1.encode(enc)
    }
}

impl<'b, A: Decode<'b>, B: Decode<'b>> Decode<'b> for (A, B) {
    fn decode(dec: &mut Decoder<'b>) -> Result<Self, DecodeError> {
        let a = A::decode(dec)?;
        let b = B::decode(dec)?;
        Ok((a, b))
    }
}

impl<A: Measure, B: Measure> Measure for (A, B) {
    fn measure(szr: &mut Sizer<'_>) -> Result<(), DecodeError> {
        A::measure(szr)?;
        B::measure(szr)
    }
}
