//! Unit tests for the immediate size classifier.
//!
//! Focus: the boundaries an x86-64 encoder cares about (imm8, imm16, imm32,
//! imm64) and the zero special case.

use jitbits_core::encoding::{fits_in, size, EncodingWidth, ImmediateSize};

#[test]
fn test_zero_needs_no_bytes() {
    assert_eq!(size(0u8), 0);
    assert_eq!(size(0u16), 0);
    assert_eq!(size(0u32), 0);
    assert_eq!(size(0u64), 0);
    assert_eq!(size(0i8), 0);
    assert_eq!(size(0i16), 0);
    assert_eq!(size(0i32), 0);
    assert_eq!(size(0i64), 0);
    assert!(EncodingWidth::of(0u64).is_implicit());
}

#[test]
fn test_unsigned_examples() {
    assert_eq!(size(0xFFu32), 1);
    assert_eq!(size(0x100u32), 2);
    assert_eq!(size(0x10000u32), 4);
    assert_eq!(size(0x1_0000_0000u64), 8);
}

#[test]
fn test_signed_examples() {
    assert_eq!(size(-1i32), 1);
    assert_eq!(size(127i32), 1);
    assert_eq!(size(128i32), 2);
    assert_eq!(size(-129i32), 2);
}

#[test]
fn test_size_is_capped_at_type_width() {
    assert_eq!(size(u8::MAX), 1);
    assert_eq!(size(i8::MIN), 1);
    assert_eq!(size(u16::MAX), 2);
    assert_eq!(size(i16::MAX), 2);
    assert_eq!(size(u32::MAX), 4);
    assert_eq!(size(i32::MIN), 4);
    assert_eq!(size(u64::MAX), 8);
    assert_eq!(size(i64::MAX), 8);
}

#[test]
fn test_every_i16_matches_range_rule() {
    for v in i16::MIN..=i16::MAX {
        let expected = match v {
            0 => 0,
            -128..=127 => 1,
            _ => 2,
        };
        assert_eq!(size(v), expected, "value {}", v);
    }
}

#[test]
fn test_every_u16_matches_range_rule() {
    for v in 0..=u16::MAX {
        let expected = match v {
            0 => 0,
            1..=255 => 1,
            _ => 2,
        };
        assert_eq!(size(v), expected, "value {}", v);
    }
}

#[test]
fn test_every_i8_and_u8() {
    for v in i8::MIN..=i8::MAX {
        assert_eq!(size(v), u32::from(v != 0));
    }
    for v in 0..=u8::MAX {
        assert_eq!(size(v), u32::from(v != 0));
    }
}

#[test]
fn test_same_magnitude_differs_by_signedness() {
    // 0x80 needs 2 bytes signed (sign bit) but 1 byte unsigned
    assert_eq!(size(0x80i32), 2);
    assert_eq!(size(0x80u32), 1);
    assert_eq!(size(0x8000_0000i64), 8);
    assert_eq!(size(0x8000_0000u64), 4);
}

#[test]
fn test_method_and_function_agree() {
    assert_eq!((-0x8000i32).min_encoding_size(), size(-0x8000i32));
    assert_eq!(size(-0x8000i32), 2);
    assert_eq!(size(-0x8001i32), 4);
}

#[test]
fn test_encoding_width_of_displacements() {
    assert_eq!(EncodingWidth::of(-8i32), EncodingWidth::Byte);
    assert_eq!(EncodingWidth::of(0x7fff_ffffi64), EncodingWidth::Dword);
    assert_eq!(EncodingWidth::of(-0x8000_0001i64), EncodingWidth::Qword);
    assert_eq!(u32::from(EncodingWidth::of(300u16)), 2);
}

#[test]
fn test_fits_in_full_width_always() {
    assert!(fits_in(i64::MIN, 8));
    assert!(fits_in(u32::MAX, 4));
    assert!(fits_in(u32::MAX, 8));
    assert!(!fits_in(u32::MAX, 2));
}
