//! # jitbits-core: Bit-Vector Primitives and Immediate Sizing for an x86-64 JIT
//!
//! `jitbits-core` is a `no_std`, allocation-free library holding the two
//! lowest-level facilities of a native code generator:
//!
//! 1. **Bit-vector primitives** over 32-bit and 64-bit words used as bitmaps
//!    (register free/used sets): population count, lowest/highest set-bit
//!    scan, bit test, test-and-set, test-and-clear.
//! 2. **Minimal encoding size** of integer immediates: the smallest of
//!    0, 1, 2, 4 or 8 bytes an instruction encoder needs for a value.
//!
//! Both run once per register decision or once per emitted immediate, so
//! every operation is O(1) and carries no runtime checks in release builds.
//!
//! ## Population Count Dispatch
//!
//! [`popcount`] uses the POPCNT instruction when the processor has it and a
//! 256-entry per-byte table otherwise. The choice is probed once per process
//! (see [`PopcountStrategy`]) and both paths return identical results for
//! every input. Call [`init`] at startup to take the probe off the hot path.
//!
//! ## Quick Start
//!
//! ```
//! use jitbits_core::{lowest_set_bit, size, test_and_clear_bit, test_and_set_bit};
//!
//! jitbits_core::init();
//!
//! // Register allocator: free mask with RAX..RDI available.
//! let mut free: u32 = 0xFF;
//! let reg = lowest_set_bit(free).unwrap();
//! assert!(test_and_clear_bit(&mut free, reg));
//! assert_eq!(reg, 0);
//!
//! // Releasing it again.
//! assert!(!test_and_set_bit(&mut free, reg));
//!
//! // Instruction encoder: pick imm8 vs imm32.
//! assert_eq!(size(-8i32), 1);
//! assert_eq!(size(4096i32), 2);
//! ```
//!
//! ## Bit Index Contract
//!
//! Bit indices must be below the word width. This is a precondition, not a
//! checked error: debug builds assert it, release builds reduce the index
//! modulo the width like the x86 `BT`/`BTS`/`BTR` register forms.
//!
//! ## Module Organization
//!
//! - [`intrinsics`] - Bit scans, bit test/set/clear, popcount dispatch, bitmaps
//! - [`encoding`] - Minimal immediate size classification

#![no_std]
#![deny(missing_docs)]

// =============================================================================
// Module Declarations
// =============================================================================

/// Minimal encoding size of integer immediates.
pub mod encoding;

/// Bit-vector primitives over 32-bit and 64-bit words.
pub mod intrinsics;

// =============================================================================
// Convenience Re-exports (Clean Public API)
// =============================================================================

// Bit scans and bit test/set/clear
pub use intrinsics::{
    clear_bit, highest_set_bit, lowest_set_bit, set_bit, test_and_clear_bit, test_and_set_bit,
    test_bit, IntoWord, Word,
};

// Population count
pub use intrinsics::{init, is_popcnt_supported, popcount, PopcountStrategy};

// Bitmap and reinterpretation helpers
pub use intrinsics::{SameSize, WordBitmap};

// Immediate sizing
pub use encoding::{fits_in, size, EncodingWidth, ImmediateSize};
