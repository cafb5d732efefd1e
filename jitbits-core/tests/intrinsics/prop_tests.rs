//! Property-based tests for jitbits-core intrinsics module.
//!
//! Uses proptest to verify the bit-vector contracts across random words and
//! indices.

use proptest::prelude::*;

fn reference_popcount(x: u64) -> u32 {
    (0..64).filter(|&i| (x >> i) & 1 == 1).count() as u32
}

proptest! {
    // =========================================================================
    // popcount.rs properties
    // =========================================================================

    #[test]
    fn prop_popcount_table_matches_reference_u64(x in any::<u64>()) {
        use jitbits_core::intrinsics::popcount_table;

        prop_assert_eq!(popcount_table(x), reference_popcount(x));
    }

    #[test]
    fn prop_popcount_table_matches_reference_u32(x in any::<u32>()) {
        use jitbits_core::intrinsics::popcount_table;

        prop_assert_eq!(popcount_table(x), reference_popcount(x as u64));
    }

    #[test]
    fn prop_popcount_dispatch_matches_table(x in any::<u64>()) {
        use jitbits_core::intrinsics::{popcount, popcount_hardware, popcount_table};

        // Whatever strategy this machine resolved, the answer is the same
        prop_assert_eq!(popcount(x), popcount_table(x));
        prop_assert_eq!(popcount(x as u32), popcount_table(x as u32));
        if let Some(hw) = popcount_hardware(x) {
            prop_assert_eq!(hw, popcount_table(x));
        }
    }

    // =========================================================================
    // bits.rs properties
    // =========================================================================

    #[test]
    fn prop_lowest_set_bit_postcondition(x in 1u64..=u64::MAX) {
        use jitbits_core::intrinsics::lowest_set_bit;

        let i = lowest_set_bit(x).unwrap();
        prop_assert!(i < 64);
        prop_assert!((x & (1u64 << i)) != 0, "bit i must be set");
        prop_assert_eq!(x & ((1u64 << i) - 1), 0, "bits below i must be clear");
    }

    #[test]
    fn prop_highest_set_bit_postcondition(x in 1u32..=u32::MAX) {
        use jitbits_core::intrinsics::highest_set_bit;

        let j = highest_set_bit(x).unwrap();
        prop_assert!(j < 32);
        prop_assert!((x & (1u32 << j)) != 0, "bit j must be set");
        if j < 31 {
            prop_assert_eq!(x >> (j + 1), 0, "bits above j must be clear");
        }
    }

    #[test]
    fn prop_scans_agree_on_single_bit(i in 0u32..64) {
        use jitbits_core::intrinsics::{highest_set_bit, lowest_set_bit};

        prop_assert_eq!(lowest_set_bit(1u64 << i), Some(i));
        prop_assert_eq!(highest_set_bit(1u64 << i), Some(i));
    }

    #[test]
    fn prop_test_and_set_then_test(x in any::<u64>(), i in 0u32..64) {
        use jitbits_core::intrinsics::{test_and_set_bit, test_bit};

        let mut w = x;
        let prior = test_and_set_bit(&mut w, i);
        prop_assert_eq!(prior, test_bit(x, i));
        prop_assert!(test_bit(w, i));
        prop_assert_eq!(w & !(1u64 << i), x & !(1u64 << i), "other bits untouched");
    }

    #[test]
    fn prop_test_and_clear_then_test(x in any::<u32>(), i in 0u32..32) {
        use jitbits_core::intrinsics::{test_and_clear_bit, test_bit};

        let mut w = x;
        let prior = test_and_clear_bit(&mut w, i);
        prop_assert_eq!(prior, test_bit(x, i));
        prop_assert!(!test_bit(w, i));
        prop_assert_eq!(w & !(1u32 << i), x & !(1u32 << i), "other bits untouched");
    }

    #[test]
    fn prop_set_bit_idempotent(x in any::<u64>(), i in 0u32..64) {
        use jitbits_core::intrinsics::set_bit;

        let mut once = x;
        set_bit(&mut once, i);
        let mut twice = once;
        set_bit(&mut twice, i);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_set_then_clear_restores_clear_bit(x in any::<u32>(), i in 0u32..32) {
        use jitbits_core::intrinsics::{clear_bit, set_bit};

        let original = x & !(1u32 << i);
        let mut w = original;
        set_bit(&mut w, i);
        clear_bit(&mut w, i);
        prop_assert_eq!(w, original);
    }

    #[test]
    fn prop_set_bit_changes_popcount_by_at_most_one(x in any::<u64>(), i in 0u32..64) {
        use jitbits_core::intrinsics::{popcount, test_and_set_bit};

        let mut w = x;
        let was_set = test_and_set_bit(&mut w, i);
        let delta = if was_set { 0 } else { 1 };
        prop_assert_eq!(popcount(w), popcount(x) + delta);
    }
}
