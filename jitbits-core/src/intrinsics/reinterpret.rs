//! Same-size bit-pattern reinterpretation between integer types.
//!
//! Bit intrinsics take whichever signedness the instruction wrapper was
//! declared with (`_popcnt64` takes `i64`, bitmaps are `u64`). [`SameSize`]
//! moves a value between two integer types of identical width without
//! changing a single bit, and refuses to compile for types of different
//! widths.

use core::mem::size_of;

/// Reinterprets `Self` as `T`, bit for bit. `Self` and `T` have equal size.
pub trait SameSize<T>: Copy {
    /// Returns the value with its bits unchanged, typed as `T`.
    fn reinterpret(self) -> T;
}

macro_rules! same_size {
    ($($a:ty => $b:ty),* $(,)?) => {
        $(
            impl SameSize<$b> for $a {
                #[inline(always)]
                fn reinterpret(self) -> $b {
                    const { assert!(size_of::<$a>() == size_of::<$b>()) };
                    self as $b
                }
            }

            impl SameSize<$a> for $b {
                #[inline(always)]
                fn reinterpret(self) -> $a {
                    const { assert!(size_of::<$a>() == size_of::<$b>()) };
                    self as $a
                }
            }
        )*
    };
}

same_size!(u8 => i8, u16 => i16, u32 => i32, u64 => i64);

/// Runs `f` on `target` viewed as `U`, then writes the result back.
///
/// This is the mutable counterpart of [`SameSize::reinterpret`]: a signed
/// bitmap can be handed to the `u64` mutators without a pointer cast.
///
/// ```
/// use jitbits_core::intrinsics::{reinterpret::update_as, test_and_set_bit};
///
/// let mut mask: i64 = 0;
/// let prior = update_as::<i64, u64, _>(&mut mask, |w| test_and_set_bit(w, 63));
/// assert!(!prior);
/// assert_eq!(mask, i64::MIN);
/// ```
#[inline(always)]
pub fn update_as<T, U, R>(target: &mut T, f: impl FnOnce(&mut U) -> R) -> R
where
    T: SameSize<U>,
    U: SameSize<T>,
{
    let mut view: U = (*target).reinterpret();
    let result = f(&mut view);
    *target = view.reinterpret();
    result
}
