// =============================================================================
// Single-Word Bitmap
// =============================================================================
//
// A `Copy` newtype over one word, for callers that keep register sets and
// similar small sets as bitmaps. Every method forwards to the free functions
// in `bits` and `popcount`; the type only adds set-style naming and iteration.
// It never decides which bit to claim.

use core::fmt;
use core::iter::FusedIterator;

use super::bits::{
    clear_bit, highest_set_bit, is_bit_set, lowest_set_bit, set_bit, test_and_clear_bit,
    test_and_set_bit, Word,
};
use super::popcount::popcount;

/// A set of bit indices in `[0, W::BITS)` stored in a single word.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct WordBitmap<W: Word> {
    word: W,
}

impl<W: Word> WordBitmap<W> {
    /// Bitmap with no bits set.
    pub const EMPTY: Self = Self { word: W::ZERO };

    /// Bitmap with every bit set.
    pub const FULL: Self = Self { word: W::ALL };

    /// Wraps an existing word.
    #[inline(always)]
    pub const fn from_word(word: W) -> Self {
        Self { word }
    }

    /// Returns the underlying word.
    #[inline(always)]
    pub fn word(self) -> W {
        self.word
    }

    /// Number of set bits.
    #[inline(always)]
    pub fn len(self) -> u32 {
        popcount(self.word)
    }

    /// Returns `true` if no bit is set.
    #[inline(always)]
    pub fn is_empty(self) -> bool {
        self.word == W::ZERO
    }

    /// Returns whether bit `index` is set.
    #[inline(always)]
    pub fn contains(self, index: u32) -> bool {
        is_bit_set(self.word, index)
    }

    /// Lowest set index.
    #[inline(always)]
    pub fn first(self) -> Option<u32> {
        lowest_set_bit(self.word)
    }

    /// Highest set index.
    #[inline(always)]
    pub fn last(self) -> Option<u32> {
        highest_set_bit(self.word)
    }

    /// Sets bit `index`, returning its prior value.
    #[inline(always)]
    pub fn test_and_set(&mut self, index: u32) -> bool {
        test_and_set_bit(&mut self.word, index)
    }

    /// Clears bit `index`, returning its prior value.
    #[inline(always)]
    pub fn test_and_clear(&mut self, index: u32) -> bool {
        test_and_clear_bit(&mut self.word, index)
    }

    /// Sets bit `index`.
    #[inline(always)]
    pub fn set(&mut self, index: u32) {
        set_bit(&mut self.word, index);
    }

    /// Clears bit `index`.
    #[inline(always)]
    pub fn clear(&mut self, index: u32) {
        clear_bit(&mut self.word, index);
    }

    /// Bits set in both bitmaps.
    #[inline(always)]
    pub fn intersection(self, other: Self) -> Self {
        Self::from_word(self.word.and(other.word))
    }

    /// Bits set in either bitmap.
    #[inline(always)]
    pub fn union(self, other: Self) -> Self {
        Self::from_word(self.word.or(other.word))
    }

    /// Bits set in `self` but not in `other`.
    #[inline(always)]
    pub fn difference(self, other: Self) -> Self {
        Self::from_word(self.word.and(other.word.not()))
    }

    /// Iterates set indices from lowest to highest.
    #[inline(always)]
    pub fn iter(self) -> SetBits<W> {
        SetBits { remaining: self.word }
    }
}

impl<W: Word> Default for WordBitmap<W> {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl<W: Word> From<W> for WordBitmap<W> {
    fn from(word: W) -> Self {
        Self::from_word(word)
    }
}

impl<W: Word> FromIterator<u32> for WordBitmap<W> {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        let mut bitmap = Self::EMPTY;
        for index in iter {
            bitmap.set(index);
        }
        bitmap
    }
}

impl<W: Word> IntoIterator for WordBitmap<W> {
    type Item = u32;
    type IntoIter = SetBits<W>;

    fn into_iter(self) -> SetBits<W> {
        self.iter()
    }
}

impl<W: Word> fmt::Debug for WordBitmap<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Iterator over the set indices of a [`WordBitmap`], lowest first.
///
/// Each step is one bit scan plus one `blsr`.
#[derive(Clone, Debug)]
pub struct SetBits<W: Word> {
    remaining: W,
}

impl<W: Word> Iterator for SetBits<W> {
    type Item = u32;

    #[inline(always)]
    fn next(&mut self) -> Option<u32> {
        let index = lowest_set_bit(self.remaining)?;
        self.remaining = self.remaining.blsr();
        Some(index)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = popcount(self.remaining) as usize;
        (n, Some(n))
    }
}

impl<W: Word> ExactSizeIterator for SetBits<W> {}

impl<W: Word> FusedIterator for SetBits<W> {}
