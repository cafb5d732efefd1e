// =============================================================================
// Bit Scan and Bit Test Intrinsics
// =============================================================================
//
// Single-word bitmap operations for 32-bit and 64-bit words. Each operation
// lowers to one x86-64 instruction (BSF/TZCNT, BSR/LZCNT, BT, BTS, BTR) or a
// short shift-and-mask sequence.
//
// Bit indices are never range-checked in release builds. An index must lie in
// `[0, W::BITS)`; debug builds assert it, release builds reduce it modulo the
// word width, which is what the register forms of BT/BTS/BTR do.

mod sealed {
    pub trait Sealed {}

    impl Sealed for u32 {}
    impl Sealed for u64 {}
}

/// A fixed-width unsigned word interpreted as a bitmap (bit 0 = least significant).
///
/// Implemented for `u32` and `u64` only. The trait is sealed.
pub trait Word: sealed::Sealed + Copy + Eq + core::fmt::Debug {
    /// Width of the word in bits.
    const BITS: u32;

    /// The word with no bits set.
    const ZERO: Self;

    /// The word with every bit set.
    const ALL: Self;

    /// Little-endian byte representation, consumed by the table popcount.
    type Bytes: AsRef<[u8]>;

    /// Returns the bytes of the word, least significant first.
    fn to_le_bytes(self) -> Self::Bytes;

    /// Counts set bits with the POPCNT instruction.
    ///
    /// # Safety
    ///
    /// The executing processor must support POPCNT.
    #[cfg(target_arch = "x86_64")]
    unsafe fn popcnt_instruction(self) -> u32;

    /// Number of trailing zero bits; `BITS` for zero.
    fn tzcnt(self) -> u32;

    /// Number of leading zero bits; `BITS` for zero.
    fn lzcnt(self) -> u32;

    /// Clears the lowest set bit (`x & (x - 1)`).
    fn blsr(self) -> Self;

    /// Mask with only bit `index % BITS` set.
    fn bit(index: u32) -> Self;

    /// Bitwise AND.
    fn and(self, other: Self) -> Self;

    /// Bitwise OR.
    fn or(self, other: Self) -> Self;

    /// Bitwise complement.
    fn not(self) -> Self;
}

macro_rules! impl_word {
    ($ty:ty, $popcnt:ident) => {
        impl Word for $ty {
            const BITS: u32 = <$ty>::BITS;
            const ZERO: Self = 0;
            const ALL: Self = <$ty>::MAX;

            type Bytes = [u8; core::mem::size_of::<$ty>()];

            #[inline(always)]
            fn to_le_bytes(self) -> Self::Bytes {
                <$ty>::to_le_bytes(self)
            }

            #[cfg(target_arch = "x86_64")]
            #[inline(always)]
            unsafe fn popcnt_instruction(self) -> u32 {
                super::popcount::$popcnt(self)
            }

            #[inline(always)]
            fn tzcnt(self) -> u32 {
                self.trailing_zeros()
            }

            #[inline(always)]
            fn lzcnt(self) -> u32 {
                self.leading_zeros()
            }

            #[inline(always)]
            fn blsr(self) -> Self {
                self & self.wrapping_sub(1)
            }

            #[inline(always)]
            fn bit(index: u32) -> Self {
                (1 as $ty).wrapping_shl(index)
            }

            #[inline(always)]
            fn and(self, other: Self) -> Self {
                self & other
            }

            #[inline(always)]
            fn or(self, other: Self) -> Self {
                self | other
            }

            #[inline(always)]
            fn not(self) -> Self {
                !self
            }
        }
    };
}

impl_word!(u32, popcnt_u32);
impl_word!(u64, popcnt_u64);

/// Integer types whose bits can be tested by [`test_bit`].
///
/// Types of at most 32 bits are widened to a `u32` word (signed types are
/// sign-extended, so the replicated sign bit is visible above their width);
/// 64-bit types map onto a `u64` word bit for bit.
pub trait IntoWord: Copy {
    /// The word the value is widened or reinterpreted into.
    type Word: Word;

    /// Converts the value into its word.
    fn into_word(self) -> Self::Word;
}

macro_rules! impl_into_word {
    ($word:ty; $($ty:ty),*) => {
        $(
            impl IntoWord for $ty {
                type Word = $word;

                #[inline(always)]
                fn into_word(self) -> $word {
                    self as $word
                }
            }
        )*
    };
}

impl_into_word!(u32; u8, u16, u32, i8, i16, i32);
impl_into_word!(u64; u64, i64);

#[inline(always)]
fn debug_check_index<W: Word>(index: u32) {
    debug_assert!(
        index < W::BITS,
        "bit index {} out of range for {}-bit word",
        index,
        W::BITS
    );
}

/// Returns the index of the least significant set bit, or `None` for zero.
///
/// When `Some(i)` is returned, bit `i` is set and bits `0..i` are clear.
#[inline(always)]
pub fn lowest_set_bit<W: Word>(word: W) -> Option<u32> {
    if word == W::ZERO {
        None
    } else {
        Some(word.tzcnt())
    }
}

/// Returns the index of the most significant set bit, or `None` for zero.
///
/// When `Some(j)` is returned, bit `j` is set and bits `j+1..W::BITS` are clear.
#[inline(always)]
pub fn highest_set_bit<W: Word>(word: W) -> Option<u32> {
    if word == W::ZERO {
        None
    } else {
        Some(W::BITS - 1 - word.lzcnt())
    }
}

/// Returns whether bit `index` of `value` is set.
///
/// Does not verify that `index` is in range for the value's word.
#[inline(always)]
pub fn test_bit<T: IntoWord>(value: T, index: u32) -> bool {
    is_bit_set(value.into_word(), index)
}

#[inline(always)]
pub(crate) fn is_bit_set<W: Word>(word: W, index: u32) -> bool {
    debug_check_index::<W>(index);
    word.and(W::bit(index)) != W::ZERO
}

/// Sets bit `index` and returns whether it was set before.
///
/// Does not verify that `index` is in range.
#[inline(always)]
pub fn test_and_set_bit<W: Word>(word: &mut W, index: u32) -> bool {
    let prior = is_bit_set(*word, index);
    *word = word.or(W::bit(index));
    prior
}

/// Clears bit `index` and returns whether it was set before.
///
/// Does not verify that `index` is in range.
#[inline(always)]
pub fn test_and_clear_bit<W: Word>(word: &mut W, index: u32) -> bool {
    let prior = is_bit_set(*word, index);
    *word = word.and(W::bit(index).not());
    prior
}

/// Sets bit `index`. Naming convenience for [`test_and_set_bit`].
#[inline(always)]
pub fn set_bit<W: Word>(word: &mut W, index: u32) {
    test_and_set_bit(word, index);
}

/// Clears bit `index`. Naming convenience for [`test_and_clear_bit`].
#[inline(always)]
pub fn clear_bit<W: Word>(word: &mut W, index: u32) {
    test_and_clear_bit(word, index);
}
