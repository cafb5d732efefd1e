// =============================================================================
// Population Count
// =============================================================================
//
// One entry point, `popcount`, dispatching on the strategy resolved by the
// capability probe: the POPCNT instruction when present, otherwise a sum of
// per-byte table lookups. Both paths agree on every input.

use super::bits::Word;
use super::cpu::{is_popcnt_supported, PopcountStrategy};
#[cfg(target_arch = "x86_64")]
use super::reinterpret::SameSize;

/// Number of set bits in each byte value: `BITS_SET_IN_BYTE[b] == b.count_ones()`.
pub static BITS_SET_IN_BYTE: [u8; 256] = build_bits_set_in_byte();

const fn build_bits_set_in_byte() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        // table[i >> 1] is already filled in; the low bit adds the rest.
        table[i] = table[i >> 1] + (i & 1) as u8;
        i += 1;
    }
    table
}

/// Returns the number of set bits in `word`.
///
/// Uses POPCNT when the processor supports it and the per-byte table
/// otherwise. The choice is made once per process; see [`PopcountStrategy`].
#[inline(always)]
pub fn popcount<W: Word>(word: W) -> u32 {
    match PopcountStrategy::current() {
        #[cfg(target_arch = "x86_64")]
        // SAFETY: `Hardware` is only resolved when the probe found POPCNT.
        PopcountStrategy::Hardware => unsafe { word.popcnt_instruction() },
        _ => popcount_table(word),
    }
}

/// Counts set bits by summing [`BITS_SET_IN_BYTE`] over the word's bytes.
///
/// This is the fallback path of [`popcount`]; it is exposed so callers and
/// tests can compare both strategies on the same machine.
#[inline]
pub fn popcount_table<W: Word>(word: W) -> u32 {
    word.to_le_bytes()
        .as_ref()
        .iter()
        .map(|&b| BITS_SET_IN_BYTE[b as usize] as u32)
        .sum()
}

/// Counts set bits with the POPCNT instruction, or `None` if the processor
/// lacks it.
///
/// Unlike [`popcount`], this ignores the `portable-popcount` feature.
#[inline]
pub fn popcount_hardware<W: Word>(word: W) -> Option<u32> {
    #[cfg(target_arch = "x86_64")]
    if is_popcnt_supported() {
        // SAFETY: the probe confirmed POPCNT on this processor.
        return Some(unsafe { word.popcnt_instruction() });
    }

    #[cfg(not(target_arch = "x86_64"))]
    let _ = (word, is_popcnt_supported());

    None
}

#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "popcnt")]
#[inline]
pub(super) unsafe fn popcnt_u32(value: u32) -> u32 {
    let bits: i32 = value.reinterpret();
    core::arch::x86_64::_popcnt32(bits) as u32
}

#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "popcnt")]
#[inline]
pub(super) unsafe fn popcnt_u64(value: u64) -> u32 {
    let bits: i64 = value.reinterpret();
    core::arch::x86_64::_popcnt64(bits) as u32
}
