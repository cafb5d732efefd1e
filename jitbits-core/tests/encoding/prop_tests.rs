//! Property-based tests for the immediate size classifier.
//!
//! The central property: the low `size(v)` bytes of a non-zero value,
//! extended back to the original width, reproduce the value.

use jitbits_core::encoding::{fits_in, size};
use proptest::prelude::*;

fn sign_extend_i64(v: i64, bytes: u32) -> i64 {
    if bytes >= 8 {
        return v;
    }
    let shift = 64 - bytes * 8;
    (v << shift) >> shift
}

fn zero_extend_u64(v: u64, bytes: u32) -> u64 {
    if bytes >= 8 {
        return v;
    }
    v & ((1u64 << (bytes * 8)) - 1)
}

/// Narrower width in the 1/2/4/8 ladder, if any.
fn narrower(bytes: u32) -> Option<u32> {
    match bytes {
        2 | 4 | 8 => Some(bytes / 2),
        _ => None,
    }
}

proptest! {
    #[test]
    fn prop_i64_round_trip(v in any::<i64>().prop_filter("non-zero", |v| *v != 0)) {
        let s = size(v);
        prop_assert!(matches!(s, 1 | 2 | 4 | 8));
        prop_assert_eq!(sign_extend_i64(v, s), v);
        if let Some(n) = narrower(s) {
            prop_assert_ne!(sign_extend_i64(v, n), v, "size must be minimal");
        }
    }

    #[test]
    fn prop_u64_round_trip(v in 1u64..=u64::MAX) {
        let s = size(v);
        prop_assert!(matches!(s, 1 | 2 | 4 | 8));
        prop_assert_eq!(zero_extend_u64(v, s), v);
        if let Some(n) = narrower(s) {
            prop_assert_ne!(zero_extend_u64(v, n), v, "size must be minimal");
        }
    }

    #[test]
    fn prop_i32_round_trip(v in any::<i32>().prop_filter("non-zero", |v| *v != 0)) {
        let s = size(v);
        prop_assert!(s <= 4);
        prop_assert_eq!(sign_extend_i64(v as i64, s) as i32, v);
    }

    #[test]
    fn prop_u32_round_trip(v in 1u32..=u32::MAX) {
        let s = size(v);
        prop_assert!(s <= 4);
        prop_assert_eq!(zero_extend_u64(v as u64, s) as u32, v);
    }

    #[test]
    fn prop_imm8_boundary_neighborhood(v in -300i64..300) {
        // Dense coverage around the imm8 boundary
        let expected = match v {
            0 => 0,
            -128..=127 => 1,
            _ => 2,
        };
        prop_assert_eq!(size(v), expected);
    }

    #[test]
    fn prop_widening_keeps_signed_size(v in any::<i32>()) {
        // An i32 immediate sign-extended to i64 needs the same bytes
        prop_assert_eq!(size(v as i64), size(v));
    }

    #[test]
    fn prop_widening_keeps_unsigned_size(v in any::<u32>()) {
        prop_assert_eq!(size(v as u64), size(v));
    }

    #[test]
    fn prop_fits_in_agrees_with_size(v in any::<i64>()) {
        let s = size(v);
        prop_assert!(fits_in(v, s));
        if let Some(n) = narrower(s) {
            prop_assert!(!fits_in(v, n));
        }
    }
}
