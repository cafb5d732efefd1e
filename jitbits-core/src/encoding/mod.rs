//! Minimal encoding size of immediate operands.
//!
//! An instruction encoder asks, once per immediate or displacement, how many
//! bytes the value needs. The answer is one of 0, 1, 2, 4 or 8:
//!
//! - **0** means the value is zero and needs no literal bytes at all. Some
//!   encodings represent a zero operand implicitly. Callers outside immediate
//!   encoding must not read this as "zero fits in one byte".
//! - Otherwise it is the smallest of 1, 2, 4, 8 (capped at the type's own
//!   width) such that truncating the value to that many bytes and extending it
//!   back (sign extension for signed types, zero extension for unsigned ones)
//!   reproduces the value.
//!
//! ```
//! use jitbits_core::encoding::size;
//!
//! assert_eq!(size(0u32), 0);
//! assert_eq!(size(0xFFu32), 1);
//! assert_eq!(size(0x100u32), 2);
//! assert_eq!(size(-1i32), 1);
//! assert_eq!(size(128i32), 2);
//! assert_eq!(size(0x1_0000_0000u64), 8);
//! ```

mod width;

/// Kani formal verification proofs.
#[cfg(kani)]
mod kani_proofs;

pub use width::EncodingWidth;

mod sealed {
    pub trait Sealed {}

    macro_rules! sealed {
        ($($ty:ty),*) => { $(impl Sealed for $ty {})* };
    }

    sealed!(u8, u16, u32, u64, i8, i16, i32, i64);
}

/// Integer types the size classifier accepts.
///
/// Implemented for the 8, 16, 32 and 64-bit signed and unsigned integers.
pub trait ImmediateSize: sealed::Sealed + Copy {
    /// Width of the type in bytes.
    const BYTES: u32;

    /// Whether the type is extended with its sign bit.
    const SIGNED: bool;

    /// Minimum number of bytes (0, 1, 2, 4 or 8) needed to encode `self`.
    fn min_encoding_size(self) -> u32;

    /// Widens to `i128` without changing the numeric value.
    fn to_i128(self) -> i128;
}

impl ImmediateSize for u8 {
    const BYTES: u32 = 1;
    const SIGNED: bool = false;

    #[inline]
    fn min_encoding_size(self) -> u32 {
        match self {
            0 => 0,
            _ => 1,
        }
    }

    #[inline(always)]
    fn to_i128(self) -> i128 {
        self as i128
    }
}

impl ImmediateSize for u16 {
    const BYTES: u32 = 2;
    const SIGNED: bool = false;

    #[inline]
    fn min_encoding_size(self) -> u32 {
        match self {
            0 => 0,
            0x1..=0xff => 1,
            _ => 2,
        }
    }

    #[inline(always)]
    fn to_i128(self) -> i128 {
        self as i128
    }
}

impl ImmediateSize for u32 {
    const BYTES: u32 = 4;
    const SIGNED: bool = false;

    #[inline]
    fn min_encoding_size(self) -> u32 {
        match self {
            0 => 0,
            0x1..=0xff => 1,
            0x100..=0xffff => 2,
            _ => 4,
        }
    }

    #[inline(always)]
    fn to_i128(self) -> i128 {
        self as i128
    }
}

impl ImmediateSize for u64 {
    const BYTES: u32 = 8;
    const SIGNED: bool = false;

    #[inline]
    fn min_encoding_size(self) -> u32 {
        match self {
            0 => 0,
            0x1..=0xff => 1,
            0x100..=0xffff => 2,
            0x1_0000..=0xffff_ffff => 4,
            _ => 8,
        }
    }

    #[inline(always)]
    fn to_i128(self) -> i128 {
        self as i128
    }
}

impl ImmediateSize for i8 {
    const BYTES: u32 = 1;
    const SIGNED: bool = true;

    #[inline]
    fn min_encoding_size(self) -> u32 {
        match self {
            0 => 0,
            _ => 1,
        }
    }

    #[inline(always)]
    fn to_i128(self) -> i128 {
        self as i128
    }
}

impl ImmediateSize for i16 {
    const BYTES: u32 = 2;
    const SIGNED: bool = true;

    #[inline]
    fn min_encoding_size(self) -> u32 {
        match self {
            0 => 0,
            -0x80..=0x7f => 1,
            _ => 2,
        }
    }

    #[inline(always)]
    fn to_i128(self) -> i128 {
        self as i128
    }
}

impl ImmediateSize for i32 {
    const BYTES: u32 = 4;
    const SIGNED: bool = true;

    #[inline]
    fn min_encoding_size(self) -> u32 {
        match self {
            0 => 0,
            -0x80..=0x7f => 1,
            -0x8000..=0x7fff => 2,
            _ => 4,
        }
    }

    #[inline(always)]
    fn to_i128(self) -> i128 {
        self as i128
    }
}

impl ImmediateSize for i64 {
    const BYTES: u32 = 8;
    const SIGNED: bool = true;

    #[inline]
    fn min_encoding_size(self) -> u32 {
        match self {
            0 => 0,
            -0x80..=0x7f => 1,
            -0x8000..=0x7fff => 2,
            -0x8000_0000..=0x7fff_ffff => 4,
            _ => 8,
        }
    }

    #[inline(always)]
    fn to_i128(self) -> i128 {
        self as i128
    }
}

/// Minimum number of bytes (0, 1, 2, 4 or 8) needed to encode `value`.
///
/// Returns 0 for zero. See the [module docs](self).
#[inline(always)]
pub fn size<T: ImmediateSize>(value: T) -> u32 {
    value.min_encoding_size()
}

/// Returns whether `value` survives truncation to `bytes` bytes followed by
/// sign extension (signed types) or zero extension (unsigned types).
///
/// Zero is the only value that fits in zero bytes; every value fits in its
/// own width or more.
#[inline]
pub fn fits_in<T: ImmediateSize>(value: T, bytes: u32) -> bool {
    if bytes >= T::BYTES {
        return true;
    }
    let v = value.to_i128();
    if bytes == 0 {
        return v == 0;
    }
    let bits = bytes * 8;
    if T::SIGNED {
        let bound = 1i128 << (bits - 1);
        (-bound..bound).contains(&v)
    } else {
        (0..1i128 << bits).contains(&v)
    }
}
