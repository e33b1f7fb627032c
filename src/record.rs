//! Record declaration.
//!
//! A record is an ordered tuple of named, statically-typed fields,
//! serialized by concatenation in declared order with no delimiters
//! or padding. `wire_record!` declares the struct and derives all
//! three traversals from the field list, so declaration order *is*
//! the wire order.

/// Declares a record struct together with its wire traversals.
///
/// ```
/// wiregram::wire_record! {
///     #[derive(Debug, Default, Clone, PartialEq)]
///     pub struct Greeting {
///         pub id: String,
///         pub count: u32,
///     }
/// }
/// ```
///
/// Records that embed [`Lazy`](crate::Lazy) fields borrow from the
/// decode buffer and take a lifetime parameter:
///
/// ```
/// wiregram::wire_record! {
///     #[derive(Debug, Clone)]
///     pub struct Envelope<'b> {
///         pub tag: u16,
///         pub body: wiregram::Lazy<'b, String>,
///     }
/// }
/// ```
#[macro_export]
macro_rules! wire_record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident<$lt:lifetime> {
            $( $(#[$fmeta:meta])* $fvis:vis $field:ident : $fty:ty ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name<$lt> {
            $( $(#[$fmeta])* $fvis $field: $fty, )+
        }

        impl<$lt> $crate::Encode for $name<$lt> {
            fn encode(
                &self,
                enc: &mut $crate::Encoder<'_>,
            ) -> ::core::result::Result<(), $crate::EncodeError> {
                $( $crate::Encode::encode(&self.$field, enc)?; )+
                Ok(())
            }
        }

        impl<$lt> $crate::Decode<$lt> for $name<$lt> {
            fn decode(
                dec: &mut $crate::Decoder<$lt>,
            ) -> ::core::result::Result<Self, $crate::DecodeError> {
                Ok(Self {
                    $( $field: $crate::Decode::decode(dec)?, )+
                })
            }
        }

        impl<$lt> $crate::Measure for $name<$lt> {
            fn measure(
                szr: &mut $crate::Sizer<'_>,
            ) -> ::core::result::Result<(), $crate::DecodeError> {
                $( <$fty as $crate::Measure>::measure(szr)?; )+
                Ok(())
            }
        }
    };

    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $( $(#[$fmeta:meta])* $fvis:vis $field:ident : $fty:ty ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $( $(#[$fmeta])* $fvis $field: $fty, )+
        }

        impl $crate::Encode for $name {
            fn encode(
                &self,
                enc: &mut $crate::Encoder<'_>,
            ) -> ::core::result::Result<(), $crate::EncodeError> {
                $( $crate::Encode::encode(&self.$field, enc)?; )+
                Ok(())
            }
        }

        impl<'b> $crate::Decode<'b> for $name {
            fn decode(
                dec: &mut $crate::Decoder<'b>,
            ) -> ::core::result::Result<Self, $crate::DecodeError> {
                Ok(Self {
                    $( $field: $crate::Decode::decode(dec)?, )+
                })
            }
        }

        impl $crate::Measure for $name {
            fn measure(
                szr: &mut $crate::Sizer<'_>,
            ) -> ::core::result::Result<(), $crate::DecodeError> {
                $( <$fty as $crate::Measure>::measure(szr)?; )+
                Ok(())
            }
        }
    };
}
