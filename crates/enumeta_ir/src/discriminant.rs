//! Primitive integer types that can back an enumeration.

use std::fmt;
use std::hash::Hash;

mod sealed {
    pub trait Sealed {}
}

/// An integer type usable as an enumeration's underlying representation.
///
/// Sealed: implemented for `i8`, `i16`, `i32`, `i64`, `isize`, `u8`, `u16`,
/// `u32`, `u64` and `usize`. Every value converts to `i128` without loss.
pub trait Discriminant:
    Copy + Eq + Ord + Hash + fmt::Debug + fmt::Display + Send + Sync + sealed::Sealed + 'static
{
    /// Whether the type is signed.
    const SIGNED: bool;

    /// Width in bits.
    const BITS: u32;

    /// Widen to `i128`.
    fn to_i128(self) -> i128;

    /// Narrow from `i128`, `None` if out of range.
    fn from_i128(value: i128) -> Option<Self>;
}

macro_rules! impl_discriminant {
    ($($ty:ty => $signed:literal),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Discriminant for $ty {
                const SIGNED: bool = $signed;
                const BITS: u32 = <$ty>::BITS;

                #[inline]
                // `allow`: each lint fires for only some of the stamped types.
                #[allow(
                    clippy::cast_lossless,
                    clippy::cast_possible_wrap,
                    reason = "every supported type is at most 64 bits wide"
                )]
                fn to_i128(self) -> i128 {
                    self as i128
                }

                #[inline]
                fn from_i128(value: i128) -> Option<Self> {
                    <$ty>::try_from(value).ok()
                }
            }
        )*
    };
}

impl_discriminant! {
    i8 => true,
    i16 => true,
    i32 => true,
    i64 => true,
    isize => true,
    u8 => false,
    u16 => false,
    u32 => false,
    u64 => false,
    usize => false,
}

#[cfg(test)]
mod tests;
