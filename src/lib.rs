//! wiregram — compile-time-driven binary serialization for
//! structured message data.
//!
//! A record description is a static tree of wire-kinds (scalars,
//! strings, containers, time points, enums, constant sentinels,
//! optional fields, nested records). The same description drives
//! three mutually consistent traversals over a raw byte buffer:
//!
//! - [`encode`] writes a value in network byte order,
//! - [`decode`] reads a value back and returns the remainder,
//! - [`measure`] reports a value's exact on-wire length without
//!   materializing it, which powers the deferred [`Lazy`] view.
//!
//! Records are declared with [`wire_record!`], enums with
//! [`wire_enum!`]. The format is compact and fixed: big-endian
//! scalars, u16 length/count prefixes, no padding, no type tags —
//! sender and receiver share the description by construction.

mod decode;
mod encode;
mod error;
mod lazy;
mod mask;
mod measure;
pub mod net;
mod optional;
mod record;
mod tests;
pub mod wire;

pub use crate::decode::{Decoder, decode};
pub use crate::encode::{Encoder, encode};
pub use crate::error::{DecodeError, EncodeError};
pub use crate::lazy::Lazy;
pub use crate::mask::{FieldMask, MASK_BITS};
pub use crate::measure::{Sizer, measure, try_measure};
pub use crate::optional::{Optional, OptionalSet};
pub use crate::wire::{Const, Decode, Encode, Measure, TimePoint, Wire};
