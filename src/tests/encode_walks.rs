#[cfg(test)]
mod tests {
    use crate::{Const, EncodeError, Encoder, Lazy, Optional, OptionalSet, TimePoint, encode};
    use std::collections::HashMap;

    crate::wire_enum! {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        enum MsgType: u16 {
            A = 0,
            B = 1,
            C = 2,
        }
    }

    crate::wire_enum! {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        enum Fruit: u8 {
            Apple = b'a',
            Banana = b'b',
            Lemon = b'l',
        }
    }

    crate::wire_enum! {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        enum Wide: u32 {
            X = 0,
            Y = 1,
        }
    }

    crate::wire_record! {
        #[derive(Debug, Default, Clone, PartialEq)]
        struct Header {
            version: Const<u16, 0xf001>,
            seq_num: u32,
            msg_type: MsgType,
        }
    }

    crate::wire_record! {
        #[derive(Debug, Default, Clone, PartialEq)]
        struct Properties {
            value: Vec<String>,
        }
    }

    crate::wire_record! {
        #[derive(Debug, Default, Clone, PartialEq)]
        struct SomeMessage {
            id: String,
            properties: Properties,
        }
    }

    impl Default for MsgType {
        fn default() -> Self {
            MsgType::A
        }
    }

    #[test]
    fn writes_single_integral_value() {
        let mut buf = [0u8; 8];
        let mut enc = Encoder::new(&mut buf);
        enc.apply(&5i32).unwrap();
        assert_eq!(enc.remaining(), 4);
        assert_eq!(&buf[..4], &[0, 0, 0, 5]);
    }

    #[test]
    fn writes_two_integral_values_of_different_widths() {
        let mut buf = [0u8; 8];
        let mut enc = Encoder::new(&mut buf);
        enc.apply(&20i16).unwrap();
        enc.apply(&5i32).unwrap();
        assert_eq!(enc.remaining(), 2);
        assert_eq!(&buf[..6], &[0, 20, 0, 0, 0, 5]);
    }

    #[test]
    fn fails_when_writing_more_than_the_buffer_holds() {
        let mut buf = [0u8; 8];
        let mut enc = Encoder::new(&mut buf);
        enc.apply(&5i32).unwrap();
        assert_eq!(enc.apply(&10i64), Err(EncodeError::BufferFull));
    }

    #[test]
    fn scalar_overflow_writes_nothing() {
        let mut buf = [0u8; 8];
        let mut enc = Encoder::new(&mut buf);
        enc.apply(&Wide::Y).unwrap();
        enc.apply(&1i16).unwrap();
        let before = enc.remaining();
        assert_eq!(enc.apply(&Wide::X), Err(EncodeError::BufferFull));
        assert_eq!(enc.remaining(), before);
    }

    #[test]
    fn writes_every_integer_width() {
        let mut buf = [0u8; 64];
        let mut enc = Encoder::new(&mut buf);
        enc.apply(&5u8).unwrap();
        enc.apply(&5i8).unwrap();
        enc.apply(&5u16).unwrap();
        enc.apply(&5i16).unwrap();
        enc.apply(&5u32).unwrap();
        enc.apply(&5i32).unwrap();
        enc.apply(&5u64).unwrap();
        enc.apply(&5i64).unwrap();
        assert_eq!(enc.written(), 1 + 1 + 2 + 2 + 4 + 4 + 8 + 8);
    }

    #[test]
    fn writes_bool_as_one_byte() {
        let mut buf = [0u8; 4];
        let mut enc = Encoder::new(&mut buf);
        enc.apply(&true).unwrap();
        enc.apply(&false).unwrap();
        assert_eq!(enc.written(), 2);
        assert_eq!(&buf[..2], &[0x01, 0x00]);
    }

    #[test]
    fn writes_floats_as_their_bit_patterns() {
        let e = 2.718_281_f32;
        let e_precise = 2.718_281_828_459_f64;

        let mut buf = [0u8; 12];
        let mut enc = Encoder::new(&mut buf);
        enc.apply(&e).unwrap();
        enc.apply(&e_precise).unwrap();
        assert_eq!(enc.written(), 12);
        assert_eq!(&buf[..4], &e.to_bits().to_be_bytes());
        assert_eq!(&buf[4..12], &e_precise.to_bits().to_be_bytes());
    }

    #[test]
    fn float_overflow_is_reported() {
        let mut buf = [0u8; 10];
        let mut enc = Encoder::new(&mut buf);
        enc.apply(&2.718_281_f32).unwrap();
        assert_eq!(
            enc.apply(&2.718_281_828_459_f64),
            Err(EncodeError::BufferFull)
        );
    }

    #[test]
    fn writes_enums_as_their_underlying_integer() {
        let mut buf = [0u8; 8];
        let mut enc = Encoder::new(&mut buf);
        enc.apply(&Fruit::Banana).unwrap();
        assert_eq!(enc.written(), 1);
        enc.apply(&MsgType::C).unwrap();
        assert_eq!(enc.written(), 3);
        enc.apply(&Wide::Y).unwrap();
        assert_eq!(enc.written(), 7);
        assert_eq!(&buf[..7], &[b'b', 0, 2, 0, 0, 0, 1]);
    }

    #[test]
    fn writes_constant_sentinels() {
        let mut buf = [0u8; 6];
        let mut enc = Encoder::new(&mut buf);
        enc.apply(&Const::<u16, 0xf001>::new()).unwrap();
        assert_eq!(enc.written(), 2);
        enc.apply(&Const::<u32, 0xf001_0203>::new()).unwrap();
        assert_eq!(enc.written(), 6);
        assert_eq!(&buf, &[0xf0, 0x01, 0xf0, 0x01, 0x02, 0x03]);

        let mut enc = Encoder::new(&mut buf);
        enc.apply(&Const::<u32, 0xf001_0203>::new()).unwrap();
        assert_eq!(
            enc.apply(&Const::<u32, 0xf001_0203>::new()),
            Err(EncodeError::BufferFull)
        );
    }

    #[test]
    fn writes_length_prefixed_string() {
        let mut buf = [0u8; 10];
        let mut enc = Encoder::new(&mut buf);
        enc.apply(&String::from("ABC")).unwrap();
        assert_eq!(enc.remaining(), 10 - 2 - 3);
        assert_eq!(&buf[..5], &[0x00, 0x03, b'A', b'B', b'C']);
    }

    #[test]
    fn overlong_string_writes_nothing() {
        let mut buf = [0u8; 10];
        let mut enc = Encoder::new(&mut buf);
        assert_eq!(
            enc.apply(&String::from("Too long for buffer")),
            Err(EncodeError::BufferFull)
        );
        assert_eq!(enc.written(), 0);
    }

    #[test]
    fn string_beyond_u16_is_too_long() {
        let mut storage = vec![0u8; 70_000];
        let mut enc = Encoder::new(&mut storage);
        let oversized = "x".repeat(u16::MAX as usize + 1);
        assert_eq!(
            enc.apply(&oversized),
            Err(EncodeError::TooLong(u16::MAX as usize + 1))
        );
    }

    #[test]
    fn writes_vector_of_integers_with_count_prefix() {
        let numbers = vec![1i32, 5, 10, 15];
        let mut buf = [0u8; 20];
        let mut enc = Encoder::new(&mut buf);
        enc.apply(&numbers).unwrap();
        assert_eq!(enc.remaining(), 20 - 2 - 4 * 4);
        assert_eq!(&buf[..2], &[0x00, 0x04]);
    }

    #[test]
    fn writes_vector_of_strings() {
        let words = vec!["A".to_string(), "AB".to_string(), "ABC".to_string()];
        let mut buf = [0u8; 20];
        let mut enc = Encoder::new(&mut buf);
        enc.apply(&words).unwrap();
        assert_eq!(enc.written(), 14);
    }

    #[test]
    fn vector_overflow_may_leave_a_partial_prefix() {
        let too_long = vec![
            "A".to_string(),
            "AB".to_string(),
            "ABC".to_string(),
            "A very very long string".to_string(),
        ];
        let mut buf = [0u8; 20];
        let mut enc = Encoder::new(&mut buf);
        assert_eq!(enc.apply(&too_long), Err(EncodeError::BufferFull));
        assert_ne!(enc.written(), 0);
    }

    #[test]
    fn writes_map_with_count_prefix() {
        let elements: HashMap<i32, String> = [
            (1, "A".to_string()),
            (2, "B".to_string()),
            (3, "AB".to_string()),
        ]
        .into();
        let mut buf = [0u8; 30];
        let mut enc = Encoder::new(&mut buf);
        enc.apply(&elements).unwrap();
        let expected = 2 + 3 * 4 + (2 + 1) + (2 + 1) + (2 + 2);
        assert_eq!(enc.written(), expected);
        assert_eq!(&buf[..2], &[0x00, 0x03]);
    }

    #[test]
    fn map_overflow_is_reported() {
        let too_big: HashMap<i32, u32> = [(1, 5), (2, 10), (3, 15), (4, 30)].into();
        let mut buf = [0u8; 30];
        let mut enc = Encoder::new(&mut buf);
        assert_eq!(enc.apply(&too_big), Err(EncodeError::BufferFull));
    }

    #[test]
    fn writes_time_point_as_eight_bytes() {
        // 2016-05-01 05:15:00.123456 UTC
        let tp = TimePoint::from_unix_micros(1_462_079_700_123_456);
        let mut buf = [0u8; 15];
        let mut enc = Encoder::new(&mut buf);
        enc.apply(&tp).unwrap();
        assert_eq!(enc.written(), 8);
        assert_eq!(enc.apply(&tp), Err(EncodeError::BufferFull));
        assert_eq!(&buf[..8], &1_462_079_700_123_456i64.to_be_bytes());
    }

    #[test]
    fn writes_record_fields_in_declared_order() {
        let header = Header {
            version: Const::new(),
            seq_num: 1,
            msg_type: MsgType::B,
        };
        let mut buf = [0u8; 20];
        let mut enc = Encoder::new(&mut buf);
        enc.apply(&header).unwrap();
        assert_eq!(enc.written(), 8);
        assert_eq!(&buf[..8], &[0xf0, 0x01, 0, 0, 0, 1, 0, 1]);
    }

    #[test]
    fn writes_nested_records() {
        let msg = SomeMessage {
            id: "12".to_string(),
            properties: Properties {
                value: vec!["AB".to_string(), "C".to_string()],
            },
        };
        let mut buf = [0u8; 30];
        let mut enc = Encoder::new(&mut buf);
        enc.apply(&msg).unwrap();
        assert_eq!(enc.written(), 13);
        assert_eq!(
            &buf[..13],
            &[0, 2, b'1', b'2', 0, 2, 0, 2, b'A', b'B', 0, 1, b'C']
        );
    }

    #[test]
    fn reserves_mask_word_as_zero() {
        let mut buf = [0u8; 10];
        let mut enc = Encoder::new(&mut buf);
        enc.apply(&OptionalSet).unwrap();
        assert_eq!(enc.written(), 2);
        assert_eq!(&buf[..2], &[0x00, 0x00]);
    }

    #[test]
    fn mask_word_needs_two_bytes() {
        let mut buf = [0u8; 10];
        let mut enc = Encoder::new(&mut buf);
        enc.apply(&String::from("1234567")).unwrap();
        assert_eq!(enc.apply(&OptionalSet), Err(EncodeError::BufferFull));
    }

    #[test]
    fn present_optional_sets_its_bit_in_place() {
        let mut buf = [0u8; 10];
        let mut enc = Encoder::new(&mut buf);
        enc.apply(&OptionalSet).unwrap();
        enc.apply(&Optional::<i32, 0>::some(5)).unwrap();
        assert_eq!(enc.written(), 6);
        assert_eq!(&buf[..6], &[0x00, 0x01, 0, 0, 0, 5]);
    }

    #[test]
    fn absent_optional_writes_nothing() {
        let mut buf = [0u8; 10];
        let mut enc = Encoder::new(&mut buf);
        enc.apply(&OptionalSet).unwrap();
        enc.apply(&Optional::<MsgType, 1>::none()).unwrap();
        assert_eq!(enc.written(), 2);
    }

    #[test]
    fn later_optionals_accumulate_into_the_mask() {
        let mut buf = [0u8; 10];
        let mut enc = Encoder::new(&mut buf);
        enc.apply(&OptionalSet).unwrap();
        enc.apply(&Optional::<MsgType, 1>::none()).unwrap();
        enc.apply(&Optional::<String, 2>::some("AB".to_string()))
            .unwrap();
        assert_eq!(enc.written(), 6);
        assert_eq!(&buf[..2], &[0x00, 0x04]);
        assert_eq!(&buf[2..6], &[0, 2, b'A', b'B']);
    }

    #[test]
    fn optional_before_mask_is_a_protocol_error() {
        let mut buf = [0u8; 10];
        let mut enc = Encoder::new(&mut buf);
        assert_eq!(
            enc.apply(&Optional::<i32, 0>::some(5)),
            Err(EncodeError::MaskMissing)
        );
    }

    #[test]
    fn writes_lazy_vector_like_its_value() {
        let numbers: Lazy<'_, Vec<i32>> = Lazy::from_value(vec![1, 5, 10, 15]);
        let mut buf = [0u8; 20];
        let mut enc = Encoder::new(&mut buf);
        enc.apply(&numbers).unwrap();
        assert_eq!(enc.remaining(), 20 - 2 - 4 * 4);
    }

    #[test]
    fn encode_entry_point_returns_the_tail() {
        let mut buf = [0u8; 8];
        let rest = encode(&mut buf, &20i16).unwrap();
        let rest = encode(rest, &5i32).unwrap();
        assert_eq!(rest.len(), 2);
    }
}
