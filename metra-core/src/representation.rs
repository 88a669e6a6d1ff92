//! Numeric representations a [`Quantity`](crate::Quantity) can store its scalar in.

use crate::ratio::Ratio;
use core::fmt::{Debug, Display};
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Floating-point storage type of a quantity's scalar (`f32` or `f64`).
///
/// All arithmetic follows the IEEE-754 semantics of the implementing type: dividing by zero yields an infinity
/// or NaN, overflow saturates to infinity.
pub trait Representation:
    Copy
    + Default
    + PartialEq
    + PartialOrd
    + Debug
    + Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + 'static
{
    /// Additive identity.
    const ZERO: Self;
    /// Multiplicative identity; the step used by increment and decrement.
    const ONE: Self;
    /// Not-a-number.
    const NAN: Self;

    /// Materializes an exact ratio as the nearest representable value.
    fn from_ratio(ratio: Ratio) -> Self;

    /// Absolute value.
    fn abs(self) -> Self;

    /// Returns `true` for NaN.
    fn is_nan(self) -> bool;
}

macro_rules! impl_representation {
    ($t:ty, $to:ident, $libm_abs:path) => {
        impl Representation for $t {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const NAN: Self = <$t>::NAN;

            #[inline]
            fn from_ratio(ratio: Ratio) -> Self {
                ratio.$to()
            }

            #[inline]
            fn abs(self) -> Self {
                #[cfg(feature = "std")]
                {
                    <$t>::abs(self)
                }
                #[cfg(not(feature = "std"))]
                {
                    $libm_abs(self)
                }
            }

            #[inline]
            fn is_nan(self) -> bool {
                <$t>::is_nan(self)
            }
        }
    };
}

impl_representation!(f32, to_f32, libm::fabsf);
impl_representation!(f64, to_f64, libm::fabs);

/// Conversion of a scalar between representations, used by [`Quantity::cast`](crate::Quantity::cast).
///
/// Follows Rust's `as` rules: widening is exact, narrowing rounds to the nearest representable value and
/// out-of-range magnitudes become infinities.
pub trait RepresentationCast<T: Representation>: Representation {
    /// Converts `self` into `T`.
    fn cast(self) -> T;
}

macro_rules! impl_cast {
    ($($from:ty => $to:ty),* $(,)?) => {
        $(
            impl RepresentationCast<$to> for $from {
                #[inline]
                fn cast(self) -> $to {
                    self as $to
                }
            }
        )*
    };
}

impl_cast!(f32 => f32, f32 => f64, f64 => f32, f64 => f64);
