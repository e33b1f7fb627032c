//! Microsecond-resolution instants relative to the Unix epoch.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::decode::Decoder;
use crate::encode::Encoder;
use crate::error::{DecodeError, EncodeError};
use crate::measure::Sizer;
use crate::wire::{Decode, Encode, Measure};

/// An instant carried on the wire as a signed 64-bit count of
/// microseconds since the Unix epoch (range about ±292,000 years).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimePoint(i64);

impl TimePoint {
    pub const fn from_unix_micros(micros: i64) -> Self {
        Self(micros)
    }

    pub const fn unix_micros(self) -> i64 {
        self.0
    }

    /// Current wall-clock time, truncated to microseconds.
    pub fn now() -> Self {
        SystemTime::now().into()
    }

    pub fn to_system_time(self) -> SystemTime {
        if self.0 >= 0 {
            UNIX_EPOCH + Duration::from_micros(self.0 as u64)
        } else {
            UNIX_EPOCH - Duration::from_micros(self.0.unsigned_abs())
        }
    }
}

impl From<SystemTime> for TimePoint {
    /// Saturates at the i64 microsecond range.
    fn from(t: SystemTime) -> Self {
        let micros = match t.duration_since(UNIX_EPOCH) {
            Ok(since) => i64::try_from(since.as_micros()).unwrap_or(i64::MAX),
            Err(before) => i64::try_from(before.duration().as_micros())
                .map(|m| -m)
                .unwrap_or(i64::MIN),
        };
        Self(micros)
    }
}

impl Encode for TimePoint {
    fn encode(&self, enc: &mut Encoder<'_>) -> Result<(), EncodeError> {
        enc.put_scalar(self.0)
    }
}

impl<'b> Decode<'b> for TimePoint {
    fn decode(dec: &mut Decoder<'b>) -> Result<Self, DecodeError> {
        Ok(Self(dec.get_scalar()?))
    }
}

impl Measure for TimePoint {
    fn measure(szr: &mut Sizer<'_>) -> Result<(), DecodeError> {
        szr.add_fixed(8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_time_conversion_roundtrips() {
        let tp = TimePoint::from_unix_micros(1_462_079_700_123_456);
        assert_eq!(TimePoint::from(tp.to_system_time()), tp);
    }

    #[test]
    fn pre_epoch_instants_go_negative() {
        let before = UNIX_EPOCH - Duration::from_micros(1_500);
        assert_eq!(TimePoint::from(before).unix_micros(), -1_500);
    }
}
