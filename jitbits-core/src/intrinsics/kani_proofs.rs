//! Kani formal verification proofs for the intrinsics module.
//!
//! These proofs cover the whole input space of the table popcount, the bit
//! scans and the test-and-mutate operations.
//!
//! Run with: `cargo kani --package jitbits-core`

use super::bits::{
    highest_set_bit, lowest_set_bit, set_bit, test_and_clear_bit, test_and_set_bit, test_bit,
};
use super::popcount::popcount_table;
use super::reinterpret::SameSize;

// ============================================================================
// Proof 1: table popcount equals the instruction semantics
// ============================================================================
// What: popcount_table(x) == x.count_ones() for every u32 and u64
// Why: the fallback and hardware paths must be interchangeable

/// Verify the per-byte table sum agrees with `count_ones` for every `u64`.
#[kani::proof]
fn verify_table_popcount_u64() {
    let x: u64 = kani::any();
    kani::assert(
        popcount_table(x) == x.count_ones(),
        "table popcount must equal count_ones",
    );
}

/// Verify the per-byte table sum agrees with `count_ones` for every `u32`.
#[kani::proof]
fn verify_table_popcount_u32() {
    let x: u32 = kani::any();
    kani::assert(
        popcount_table(x) == x.count_ones(),
        "table popcount must equal count_ones",
    );
}

// ============================================================================
// Proof 2: bit scan postconditions
// ============================================================================
// What: lowest/highest set bit are set, and bits below/above are clear
// Why: register allocators index register tables with the result

/// Verify `lowest_set_bit` returns a set bit with all lower bits clear.
#[kani::proof]
fn verify_lowest_set_bit() {
    let x: u64 = kani::any();
    match lowest_set_bit(x) {
        None => kani::assert(x == 0, "None only for zero"),
        Some(i) => {
            kani::assert(i < 64, "index in range");
            kani::assert(x & (1u64 << i) != 0, "bit i must be set");
            kani::assert(x & ((1u64 << i) - 1) == 0, "lower bits must be clear");
        }
    }
}

/// Verify `highest_set_bit` returns a set bit with all higher bits clear.
#[kani::proof]
fn verify_highest_set_bit() {
    let x: u64 = kani::any();
    match highest_set_bit(x) {
        None => kani::assert(x == 0, "None only for zero"),
        Some(j) => {
            kani::assert(j < 64, "index in range");
            kani::assert(x & (1u64 << j) != 0, "bit j must be set");
            kani::assert(j == 63 || x >> (j + 1) == 0, "higher bits must be clear");
        }
    }
}

// ============================================================================
// Proof 3: test-and-mutate touches exactly one bit
// ============================================================================
// What: prior value is reported, target bit ends set/clear, others unchanged
// Why: a stray bit in a free mask hands the same register out twice

/// Verify `test_and_set_bit` reports the prior bit and changes only that bit.
#[kani::proof]
fn verify_test_and_set_bit() {
    let x: u64 = kani::any();
    let i: u32 = kani::any();
    kani::assume(i < 64);

    let mut w = x;
    let prior = test_and_set_bit(&mut w, i);

    kani::assert(prior == test_bit(x, i), "prior value reported");
    kani::assert(test_bit(w, i), "bit set afterwards");
    kani::assert((w ^ x) & !(1u64 << i) == 0, "other bits unchanged");
}

/// Verify `test_and_clear_bit` reports the prior bit and changes only that bit.
#[kani::proof]
fn verify_test_and_clear_bit() {
    let x: u32 = kani::any();
    let i: u32 = kani::any();
    kani::assume(i < 32);

    let mut w = x;
    let prior = test_and_clear_bit(&mut w, i);

    kani::assert(prior == test_bit(x, i), "prior value reported");
    kani::assert(!test_bit(w, i), "bit clear afterwards");
    kani::assert((w ^ x) & !(1u32 << i) == 0, "other bits unchanged");
}

/// Verify `set_bit` is idempotent.
#[kani::proof]
fn verify_set_bit_idempotent() {
    let x: u64 = kani::any();
    let i: u32 = kani::any();
    kani::assume(i < 64);

    let mut once = x;
    set_bit(&mut once, i);
    let mut twice = once;
    set_bit(&mut twice, i);

    kani::assert(once == twice, "second set_bit is a no-op");
}

// ============================================================================
// Proof 4: reinterpretation is lossless
// ============================================================================

/// Verify `u64 -> i64 -> u64` reinterpretation is the identity.
#[kani::proof]
fn verify_reinterpret_round_trip() {
    let x: u64 = kani::any();
    let signed: i64 = x.reinterpret();
    let back: u64 = signed.reinterpret();
    kani::assert(back == x, "reinterpretation must not change bits");
}
