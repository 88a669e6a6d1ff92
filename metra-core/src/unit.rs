//! Unit types and traits.

use crate::dimension::{same_dimension, Dimension, DivDim, MulDim};
use crate::ratio::Ratio;
use crate::representation::Representation;
use core::fmt::{Debug, Formatter, Result};
use core::marker::PhantomData;

/// Trait implemented by every **unit** type.
///
/// * `SCALE` is the exact factor converting one of this unit into the SI base unit of the same dimension.
///   Example: metres are the SI length unit (`Metre::SCALE == 1`), so inches use `Inch::SCALE == 254/10000`
///   because `1 in = 0.0254 m`.
///
/// * `SYMBOL` is the printable string (e.g. `"m"` or `"in"`).
///
/// * `Dim` ties the unit to its underlying [`Dimension`].
///
/// # Invariants
///
/// - Implementations should be zero-sized marker types (this crate's built-in units are unit structs with no
///   fields).
/// - `SCALE` must be non-zero.
pub trait Unit: Copy + PartialEq + Debug + 'static {
    /// Dimension to which this unit belongs.
    type Dim: Dimension;

    /// Exact unit-to-SI conversion factor.
    const SCALE: Ratio;

    /// Printable symbol, shown by [`core::fmt::Display`].
    const SYMBOL: &'static str;

    /// `true` for units built from other units ([`Prod`], [`Per`]).
    const COMPOSITE: bool = false;

    /// Writes the unit symbol. Composite units write their operands recursively.
    fn write_symbol(f: &mut Formatter<'_>) -> Result {
        f.write_str(Self::SYMBOL)
    }
}

fn write_operand<U: Unit>(f: &mut Formatter<'_>) -> Result {
    if U::COMPOSITE {
        f.write_str("(")?;
        U::write_symbol(f)?;
        f.write_str(")")
    } else {
        U::write_symbol(f)
    }
}

/// Unit representing the product of two other units.
///
/// `Prod<A, B>` has dimension `A::Dim · B::Dim` and scale `A::SCALE · B::SCALE`, both computed exactly at compile
/// time. It is the result unit of multiplying two quantities.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Prod<A: Unit, B: Unit>(PhantomData<(A, B)>);

impl<A: Unit, B: Unit> Unit for Prod<A, B> {
    type Dim = MulDim<A::Dim, B::Dim>;
    const SCALE: Ratio = A::SCALE.mul(B::SCALE);
    const SYMBOL: &'static str = "";
    const COMPOSITE: bool = true;

    fn write_symbol(f: &mut Formatter<'_>) -> Result {
        A::write_symbol(f)?;
        f.write_str("·")?;
        write_operand::<B>(f)
    }
}

/// Unit representing the division of two other units.
///
/// `Per<N, D>` corresponds to `N / D` and carries both the dimensional information and the exact scale of the
/// constituent units. It is generic over any numerator and denominator units, which allows implementing
/// arithmetic generically for all pairs without bespoke macros.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Per<N: Unit, D: Unit>(PhantomData<(N, D)>);

impl<N: Unit, D: Unit> Unit for Per<N, D> {
    type Dim = DivDim<N::Dim, D::Dim>;
    const SCALE: Ratio = N::SCALE.div(D::SCALE);
    const SYMBOL: &'static str = "";
    const COMPOSITE: bool = true;

    fn write_symbol(f: &mut Formatter<'_>) -> Result {
        N::write_symbol(f)?;
        f.write_str("/")?;
        write_operand::<D>(f)
    }
}

/// Conversion factor from a source unit `Src` into a destination unit `Dst`.
///
/// [`RATIO`](Self::RATIO) is the exact `Src::SCALE / Dst::SCALE`: multiplying a scalar expressed in `Src` by it
/// yields the equivalent scalar in `Dst`. Evaluating it for units of different dimensions fails to compile:
///
/// ```compile_fail
/// use metra_core::ConversionFactor;
/// use metra_core::si::{Metre, Second};
///
/// let _ = ConversionFactor::<Metre, Second>::RATIO;
/// ```
///
/// ```rust
/// use metra_core::{ConversionFactor, Ratio};
/// use metra_core::imperial::Inch;
/// use metra_core::si::Metre;
///
/// assert_eq!(ConversionFactor::<Metre, Inch>::RATIO, Ratio::new(127, 5_000));
/// assert_eq!(ConversionFactor::<Metre, Inch>::value::<f64>(), 0.0254);
/// ```
pub struct ConversionFactor<Dst: Unit, Src: Unit>(PhantomData<(Dst, Src)>);

impl<Dst: Unit, Src: Unit> ConversionFactor<Dst, Src> {
    /// Exact `Src::SCALE / Dst::SCALE`.
    pub const RATIO: Ratio = {
        assert!(
            same_dimension::<Dst::Dim, Src::Dim>(),
            "Requested scale computation for physical units of different physical dimensions."
        );
        Src::SCALE.div(Dst::SCALE)
    };

    /// [`RATIO`](Self::RATIO) materialized as an `f64`.
    pub const F64: f64 = Self::RATIO.to_f64();

    /// [`RATIO`](Self::RATIO) materialized as an `f32`.
    pub const F32: f32 = Self::RATIO.to_f32();

    /// [`RATIO`](Self::RATIO) materialized in representation `R`.
    #[inline]
    pub fn value<R: Representation>() -> R {
        R::from_ratio(Self::RATIO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension::{Area, Length, Speed};
    use crate::imperial::{Foot, Inch};
    use crate::si::{Metre, Second};
    use approx::assert_relative_eq;

    #[test]
    fn product_scale_is_exact() {
        type MetreInch = Prod<Metre, Inch>;
        assert_eq!(MetreInch::SCALE, Ratio::new(254, 10_000));
        assert!(same_dimension::<<MetreInch as Unit>::Dim, Area>());
    }

    #[test]
    fn quotient_scale_is_exact() {
        type InchPerSecond = Per<Inch, Second>;
        assert_eq!(InchPerSecond::SCALE, Ratio::new(127, 5_000));
        assert!(same_dimension::<<InchPerSecond as Unit>::Dim, Speed>());
    }

    #[test]
    fn chained_derivation_stays_exact() {
        type Chain = Per<Prod<Prod<Inch, Inch>, Foot>, Prod<Inch, Foot>>;
        assert_eq!(Chain::SCALE, Inch::SCALE);
        assert!(same_dimension::<<Chain as Unit>::Dim, Length>());
    }

    #[test]
    fn conversion_factor() {
        assert_eq!(ConversionFactor::<Metre, Inch>::RATIO, Ratio::new(127, 5_000));
        assert_eq!(ConversionFactor::<Inch, Metre>::RATIO, Ratio::new(5_000, 127));
        assert_eq!(ConversionFactor::<Inch, Foot>::RATIO, Ratio::integer(12));
        assert_eq!(ConversionFactor::<Metre, Inch>::F64, 0.0254);
        assert_relative_eq!(ConversionFactor::<Inch, Metre>::F64, 39.370_078_740_157_48);
        assert_eq!(ConversionFactor::<Metre, Inch>::value::<f32>(), 0.0254f32);
    }

    #[test]
    fn conversion_factor_round_trip_is_exactly_one() {
        fn round_trip<A: Unit, B: Unit>() -> Ratio {
            ConversionFactor::<A, B>::RATIO.mul(ConversionFactor::<B, A>::RATIO)
        }
        assert_eq!(round_trip::<Metre, Inch>(), Ratio::ONE);
        assert_eq!(round_trip::<Foot, Inch>(), Ratio::ONE);
        assert_eq!(round_trip::<Prod<Metre, Inch>, Prod<Foot, Foot>>(), Ratio::ONE);
        assert_eq!(round_trip::<Second, Second>(), Ratio::ONE);
    }

    #[test]
    fn conversion_between_structurally_equal_dimensions() {
        type MetrePerSecondTimesSecond = Prod<Per<Metre, Second>, Second>;
        assert_eq!(ConversionFactor::<Inch, MetrePerSecondTimesSecond>::RATIO, Ratio::new(5_000, 127));
    }
}
