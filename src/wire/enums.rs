//! Enumerations carried as their underlying integer.

/// Declares an enum that crosses the wire as its underlying integer
/// type.
///
/// ```
/// wiregram::wire_enum! {
///     #[derive(Debug, Clone, Copy, PartialEq, Eq)]
///     pub enum MsgType: u16 {
///         Unknown = 0,
///         DataRequest = 1,
///         DataSeries = 2,
///     }
/// }
/// ```
///
/// The declaration needs `Clone` and `Copy` among its derives. A
/// discriminant not listed here decodes to the *first* variant, so
/// lead with a catch-all variant when foreign peers may send values
/// this build does not know.
#[macro_export]
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $repr:ty {
            $( $(#[$vmeta:meta])* $variant:ident = $value:expr ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[repr($repr)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant = $value, )+
        }

        impl $name {
            /// The wire discriminant of this variant.
            $vis fn to_wire(self) -> $repr {
                self as $repr
            }

            /// Maps unlisted discriminants to the first variant.
            $vis fn from_wire(raw: $repr) -> Self {
                $( if raw == $value { return $name::$variant; } )+
                $crate::wire_enum!(@first $name $(, $variant)+)
            }
        }

        impl $crate::Encode for $name {
            fn encode(
                &self,
                enc: &mut $crate::Encoder<'_>,
            ) -> ::core::result::Result<(), $crate::EncodeError> {
                enc.put_scalar(*self as $repr)
            }
        }

        impl<'b> $crate::Decode<'b> for $name {
            fn decode(
                dec: &mut $crate::Decoder<'b>,
            ) -> ::core::result::Result<Self, $crate::DecodeError> {
                Ok(Self::from_wire(dec.get_scalar::<$repr>()?))
            }
        }

        impl $crate::Measure for $name {
            fn measure(
                szr: &mut $crate::Sizer<'_>,
            ) -> ::core::result::Result<(), $crate::DecodeError> {
                szr.add_fixed(::core::mem::size_of::<$repr>())
            }
        }
    };

    (@first $name:ident, $first:ident $(, $rest:ident)*) => {
        $name::$first
    };
}
