//! Exact rational numbers usable in `const` context.
//!
//! Unit scales and dimension exponents are tracked as [`Ratio`] values so that chains of derived units
//! (`m·in/s`, `kg·m/s^2`, …) never accumulate floating-point error. A ratio only becomes a float at the point
//! where a conversion factor is applied to a scalar.

use core::fmt::{Display, Formatter, Result};
use core::ops::{Add, Div, Mul, Neg, Sub};

/// An exact rational number `num / den`.
///
/// Values are always kept in lowest terms with a strictly positive denominator, so two ratios are equal exactly
/// when their fields are equal. All arithmetic is `const fn`; a zero denominator or an `i128` overflow inside a
/// constant is reported by the compiler, and panics when it happens at runtime.
///
/// ```rust
/// use metra_core::Ratio;
///
/// const INCH: Ratio = Ratio::new(254, 10_000);
/// assert_eq!(INCH, Ratio::new(127, 5_000));
/// assert_eq!(INCH.to_f64(), 0.0254);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ratio {
    num: i128,
    den: i128,
}

const fn gcd(a: i128, b: i128) -> i128 {
    let mut a = a.unsigned_abs();
    let mut b = b.unsigned_abs();
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    // 2^127 wraps to i128::MIN, which still divides both operands exactly.
    a as i128
}

const fn checked(value: Option<i128>) -> i128 {
    match value {
        Some(v) => v,
        None => panic!("ratio arithmetic overflowed i128"),
    }
}

impl Ratio {
    /// `0 / 1`.
    pub const ZERO: Self = Self { num: 0, den: 1 };

    /// `1 / 1`.
    pub const ONE: Self = Self { num: 1, den: 1 };

    /// Creates the reduced ratio `num / den`.
    ///
    /// # Panics
    ///
    /// Panics if `den` is zero (a compile error when evaluated in a constant).
    pub const fn new(num: i128, den: i128) -> Self {
        assert!(den != 0, "ratio denominator must be non-zero");
        let g = gcd(num, den);
        let (num, den) = (num / g, den / g);
        if den < 0 {
            Self {
                num: checked(num.checked_neg()),
                den: checked(den.checked_neg()),
            }
        } else {
            Self { num, den }
        }
    }

    /// Creates the integer ratio `n / 1`.
    pub const fn integer(n: i128) -> Self {
        Self { num: n, den: 1 }
    }

    /// Numerator in lowest terms (carries the sign).
    pub const fn numer(self) -> i128 {
        self.num
    }

    /// Denominator in lowest terms (always positive).
    pub const fn denom(self) -> i128 {
        self.den
    }

    /// Returns `true` for `0`.
    pub const fn is_zero(self) -> bool {
        self.num == 0
    }

    /// Returns `true` when the denominator is `1`.
    pub const fn is_integer(self) -> bool {
        self.den == 1
    }

    /// Const equality (the derived `PartialEq` cannot be called from `const fn`).
    pub const fn const_eq(self, other: Self) -> bool {
        self.num == other.num && self.den == other.den
    }

    /// Exact sum.
    ///
    /// # Panics
    ///
    /// Panics if an intermediate term overflows `i128`.
    pub const fn add(self, rhs: Self) -> Self {
        let g = gcd(self.den, rhs.den);
        let lhs_factor = rhs.den / g;
        let rhs_factor = self.den / g;
        Self::new(
            checked(
                checked(self.num.checked_mul(lhs_factor))
                    .checked_add(checked(rhs.num.checked_mul(rhs_factor))),
            ),
            checked(self.den.checked_mul(lhs_factor)),
        )
    }

    /// Exact difference.
    pub const fn sub(self, rhs: Self) -> Self {
        self.add(rhs.neg())
    }

    /// Negation.
    pub const fn neg(self) -> Self {
        Self {
            num: checked(self.num.checked_neg()),
            den: self.den,
        }
    }

    /// Exact product. Factors are cross-cancelled first to keep intermediates small.
    ///
    /// # Panics
    ///
    /// Panics if the reduced numerator or denominator overflows `i128`.
    pub const fn mul(self, rhs: Self) -> Self {
        let g1 = gcd(self.num, rhs.den);
        let g2 = gcd(rhs.num, self.den);
        Self::new(
            checked((self.num / g1).checked_mul(rhs.num / g2)),
            checked((self.den / g2).checked_mul(rhs.den / g1)),
        )
    }

    /// Reciprocal.
    ///
    /// # Panics
    ///
    /// Panics on zero.
    pub const fn recip(self) -> Self {
        assert!(self.num != 0, "reciprocal of a zero ratio");
        Self::new(self.den, self.num)
    }

    /// Exact quotient.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    pub const fn div(self, rhs: Self) -> Self {
        self.mul(rhs.recip())
    }

    /// Raises the ratio to an integer power.
    pub const fn powi(self, exp: i32) -> Self {
        let base = if exp < 0 { self.recip() } else { self };
        let mut remaining = exp.unsigned_abs();
        let mut acc = Self::ONE;
        while remaining > 0 {
            acc = acc.mul(base);
            remaining -= 1;
        }
        acc
    }

    /// Nearest `f64` to this ratio.
    ///
    /// Numerator and denominator are converted separately and divided once, so any ratio whose terms fit in the
    /// 53-bit mantissa (every unit in the bundled catalogs) is correctly rounded.
    pub const fn to_f64(self) -> f64 {
        self.num as f64 / self.den as f64
    }

    /// `f32` approximation of this ratio, rounded from [`Ratio::to_f64`].
    ///
    /// Terms wider than the 24-bit `f32` mantissa (the pound's `45359237`) would round on their own if divided
    /// in single precision, so the quotient is formed in `f64` first.
    pub const fn to_f32(self) -> f32 {
        self.to_f64() as f32
    }
}

impl Default for Ratio {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<i128> for Ratio {
    fn from(n: i128) -> Self {
        Self::integer(n)
    }
}

impl Add for Ratio {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Ratio::add(self, rhs)
    }
}

impl Sub for Ratio {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Ratio::sub(self, rhs)
    }
}

impl Mul for Ratio {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Ratio::mul(self, rhs)
    }
}

impl Div for Ratio {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        Ratio::div(self, rhs)
    }
}

impl Neg for Ratio {
    type Output = Self;
    fn neg(self) -> Self {
        Ratio::neg(self)
    }
}

impl Display for Ratio {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if self.den == 1 {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn new_reduces_and_normalizes_sign() {
        let r = Ratio::new(10, -4);
        assert_eq!(r.numer(), -5);
        assert_eq!(r.denom(), 2);
        assert_eq!(Ratio::new(0, -7), Ratio::ZERO);
    }

    #[test]
    #[should_panic(expected = "denominator must be non-zero")]
    fn zero_denominator_panics() {
        let _ = Ratio::new(1, 0);
    }

    #[test]
    #[should_panic(expected = "reciprocal of a zero ratio")]
    fn division_by_zero_ratio_panics() {
        let _ = Ratio::ONE.div(Ratio::ZERO);
    }

    #[test]
    fn arithmetic() {
        let a = Ratio::new(1, 2);
        let b = Ratio::new(1, 3);
        assert_eq!(a + b, Ratio::new(5, 6));
        assert_eq!(a - b, Ratio::new(1, 6));
        assert_eq!(a * b, Ratio::new(1, 6));
        assert_eq!(a / b, Ratio::new(3, 2));
        assert_eq!(-a, Ratio::new(-1, 2));
        assert_eq!(b.recip(), Ratio::integer(3));
    }

    #[test]
    fn powi_handles_negative_exponents() {
        let r = Ratio::new(2, 3);
        assert_eq!(r.powi(0), Ratio::ONE);
        assert_eq!(r.powi(3), Ratio::new(8, 27));
        assert_eq!(r.powi(-2), Ratio::new(9, 4));
    }

    #[test]
    fn usable_in_constants() {
        const SQUARE_INCH: Ratio = Ratio::new(254, 10_000).mul(Ratio::new(254, 10_000));
        assert_eq!(SQUARE_INCH, Ratio::new(16_129, 25_000_000));
        const BACK: Ratio = SQUARE_INCH.div(Ratio::new(127, 5_000));
        assert!(BACK.const_eq(Ratio::new(127, 5_000)));
    }

    #[test]
    fn float_materialization() {
        assert_eq!(Ratio::new(254, 10_000).to_f64(), 0.0254);
        assert_eq!(Ratio::new(254, 10_000).to_f32(), 0.0254f32);
        assert_eq!(Ratio::new(1, 3).to_f64(), 1.0 / 3.0);
        assert_eq!(Ratio::integer(-4).to_f64(), -4.0);
    }

    #[test]
    fn f32_materialization_of_wide_terms() {
        let pounds_per_kilogram = Ratio::new(100_000_000, 45_359_237);
        assert_eq!(pounds_per_kilogram.to_f32(), 2.204_622_5f32);
        assert_eq!(pounds_per_kilogram.to_f32(), (100_000_000f64 / 45_359_237f64) as f32);
    }

    #[test]
    #[should_panic(expected = "ratio arithmetic overflowed i128")]
    fn runtime_sum_overflow_panics() {
        let _ = Ratio::integer(i128::MAX) + Ratio::ONE;
    }

    #[test]
    #[should_panic(expected = "ratio arithmetic overflowed i128")]
    fn runtime_product_overflow_panics() {
        let _ = Ratio::integer(i128::MAX) * Ratio::integer(2);
    }

    #[test]
    #[should_panic(expected = "ratio arithmetic overflowed i128")]
    fn runtime_negation_overflow_panics() {
        let _ = -Ratio::integer(i128::MIN);
    }

    #[test]
    fn extreme_terms_still_reduce() {
        assert_eq!(Ratio::new(i128::MIN, i128::MIN), Ratio::ONE);
        assert_eq!(Ratio::new(0, i128::MIN), Ratio::ZERO);
        assert_eq!(Ratio::new(i128::MAX, i128::MAX), Ratio::ONE);
    }

    #[test]
    fn display() {
        assert_eq!(Ratio::integer(3).to_string(), "3");
        assert_eq!(Ratio::new(-2, 4).to_string(), "-1/2");
    }

    proptest! {
        #[test]
        fn prop_mul_then_div_restores(
            a in -10_000i128..10_000, b in 1i128..10_000,
            c in 1i128..10_000, d in 1i128..10_000,
        ) {
            let x = Ratio::new(a, b);
            let y = Ratio::new(c, d);
            prop_assert_eq!(x.mul(y).div(y), x);
            prop_assert_eq!(x.div(y).mul(y), x);
        }

        #[test]
        fn prop_add_then_sub_restores(
            a in -10_000i128..10_000, b in 1i128..10_000,
            c in -10_000i128..10_000, d in 1i128..10_000,
        ) {
            let x = Ratio::new(a, b);
            let y = Ratio::new(c, d);
            prop_assert_eq!(x.add(y).sub(y), x);
        }
    }
}
