//! Kani formal verification proofs for the encoding size classifier.
//!
//! Run with: `cargo kani --package jitbits-core`

use super::{fits_in, size};

// ============================================================================
// Proof 1: truncate-and-extend round trip
// ============================================================================
// What: a non-zero value truncated to size(v) bytes and extended back is v
// Why: the encoder emits exactly size(v) bytes and the CPU extends them

/// Verify sign-extending the low `size(v)` bytes of an `i64` reproduces it.
#[kani::proof]
fn verify_i64_round_trip() {
    let v: i64 = kani::any();
    kani::assume(v != 0);

    let bits = size(v) * 8;
    let back = if bits == 64 {
        v
    } else {
        let shift = 64 - bits;
        (v << shift) >> shift
    };

    kani::assert(back == v, "sign extension must reproduce the value");
}

/// Verify zero-extending the low `size(v)` bytes of a `u64` reproduces it.
#[kani::proof]
fn verify_u64_round_trip() {
    let v: u64 = kani::any();
    kani::assume(v != 0);

    let bits = size(v) * 8;
    let back = if bits == 64 { v } else { v & ((1u64 << bits) - 1) };

    kani::assert(back == v, "zero extension must reproduce the value");
}

// ============================================================================
// Proof 2: the size is minimal
// ============================================================================
// What: v does not fit in the next narrower encoding
// Why: a non-minimal answer wastes instruction bytes

/// Verify no narrower width than `size(v)` encodes a signed 32-bit value.
#[kani::proof]
fn verify_i32_size_minimal() {
    let v: i32 = kani::any();
    let s = size(v);

    kani::assert(fits_in(v, s), "value fits in its size");
    let narrower = match s {
        0 => None,
        1 => Some(0),
        n => Some(n / 2),
    };
    if let Some(n) = narrower {
        kani::assert(!fits_in(v, n), "value must not fit in a narrower width");
    }
}

/// Verify the result is always one of 0, 1, 2, 4, 8 and zero maps to zero.
#[kani::proof]
fn verify_u64_size_domain() {
    let v: u64 = kani::any();
    let s = size(v);
    kani::assert(matches!(s, 0 | 1 | 2 | 4 | 8), "size in {0,1,2,4,8}");
    kani::assert((s == 0) == (v == 0), "only zero has size 0");
}
