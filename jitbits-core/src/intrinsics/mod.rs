// =============================================================================
// Intrinsics Module
// =============================================================================
//
// Bit-vector primitives over 32-bit and 64-bit words: population count with a
// hardware/table dispatch, bit scans, and bit test/set/clear.

/// Bit scans and bit test/set/clear: tzcnt, lzcnt, bt, bts, btr.
pub mod bits;

/// Single-word bitmap newtype with set-bit iteration.
pub mod bitmap;

/// POPCNT capability probe and strategy selection.
pub mod cpu;

/// Population count: hardware and per-byte-table paths.
pub mod popcount;

/// Same-size integer reinterpretation.
pub mod reinterpret;

/// Kani formal verification proofs.
#[cfg(kani)]
mod kani_proofs;

// =============================================================================
// Public Re-exports
// =============================================================================

// Bit operations
pub use bits::{
    clear_bit, highest_set_bit, lowest_set_bit, set_bit, test_and_clear_bit, test_and_set_bit,
    test_bit, IntoWord, Word,
};

// Bitmap
pub use bitmap::{SetBits, WordBitmap};

// Population count and its strategy
pub use cpu::{init, is_popcnt_supported, PopcountStrategy};
pub use popcount::{popcount, popcount_hardware, popcount_table, BITS_SET_IN_BYTE};

// Reinterpretation
pub use reinterpret::SameSize;
