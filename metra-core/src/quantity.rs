//! Quantity type and its implementations.

use crate::representation::{Representation, RepresentationCast};
use crate::unit::{ConversionFactor, Per, Prod, Unit};
use core::cmp::Ordering;
use core::fmt::{Debug, Display, Formatter, Result};
use core::marker::PhantomData;
use core::ops::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Vector {}
    impl Sealed for super::Affine {}
}

/// Role marker of a [`Quantity`]: [`Vector`] or [`Affine`].
///
/// The two roles share every operation defined in this crate. Operands of a binary operation must have the same
/// role, so the marker keeps displacement-like and point-like values from mixing by accident.
pub trait Kind: sealed::Sealed + Copy + Debug + 'static {}

/// Role of a magnitude or displacement (the default).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Vector {}
impl Kind for Vector {}

/// Role of a point-like, origin-relative value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Affine {}
impl Kind for Affine {}

/// A quantity with a specific unit.
///
/// `Quantity<U, R, K>` wraps a single scalar of representation `R` (`f64` by default) together with phantom type
/// information about its unit `U` and role `K`. This enables compile-time dimensional analysis while keeping the
/// runtime footprint of a bare `R`.
///
/// Operands of `+`, `-` and the comparison operators may use different units of the same dimension: the right
/// operand is converted into the left operand's unit first, and the result keeps the left unit. Operands of
/// different dimensions do not compile.
///
/// # Examples
///
/// ```rust
/// use metra_core::{Dimension, Exponents, Quantity, Ratio, Unit};
///
/// pub enum Length {}
/// impl Dimension for Length {
///     const EXPONENTS: Exponents = Exponents::LENGTH;
/// }
///
/// #[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
/// pub enum Metre {}
/// impl Unit for Metre {
///     type Dim = Length;
///     const SCALE: Ratio = Ratio::ONE;
///     const SYMBOL: &'static str = "m";
/// }
///
/// let x = Quantity::<Metre>::new(5.0);
/// let y = Quantity::<Metre>::new(3.0);
/// let sum = x + y;
/// assert_eq!(sum.scalar(), 8.0);
/// ```
///
/// ```compile_fail
/// use metra_core::si::{Metres, Seconds};
///
/// let _ = Metres::new(1.0) + Seconds::new(1.0); // different dimensions
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Quantity<U: Unit, R: Representation = f64, K: Kind = Vector>(R, PhantomData<(U, K)>);

/// A quantity in the [`Vector`] role.
pub type VectorQuantity<U, R = f64> = Quantity<U, R, Vector>;

/// A quantity in the [`Affine`] role.
pub type AffineQuantity<U, R = f64> = Quantity<U, R, Affine>;

impl<U: Unit, R: Representation, K: Kind> Quantity<U, R, K> {
    /// A constant representing NaN for this quantity type.
    ///
    /// ```rust
    /// use metra_core::si::Metres;
    /// assert!(Metres::NAN.scalar().is_nan());
    /// ```
    pub const NAN: Self = Self::new(R::NAN);

    /// Creates a new quantity holding `value` as-is.
    ///
    /// ```rust
    /// use metra_core::si::Metres;
    /// let d = Metres::new(3.0);
    /// assert_eq!(d.scalar(), 3.0);
    /// ```
    #[inline]
    pub const fn new(value: R) -> Self {
        Self(value, PhantomData)
    }

    /// Returns the raw stored scalar, expressed in `U`.
    #[inline]
    pub fn scalar(self) -> R {
        self.0
    }

    /// Same as [`scalar`](Self::scalar).
    ///
    /// ```rust
    /// use metra_core::si::Seconds;
    /// let t = Seconds::new(2.5);
    /// assert_eq!(t.value(), 2.5);
    /// ```
    #[inline]
    pub fn value(self) -> R {
        self.0
    }

    /// Converts this quantity to another unit of the same dimension.
    ///
    /// The scalar is multiplied by [`ConversionFactor<T, U>`], computed exactly at compile time and
    /// materialized in `R`.
    ///
    /// ```rust
    /// use metra_core::imperial::{Inch, Inches};
    /// use metra_core::si::Metre;
    ///
    /// let i = Inches::new(1.0);
    /// assert_eq!(i.to::<Metre>().scalar(), 0.0254);
    /// ```
    #[inline]
    pub fn to<T: Unit>(self) -> Quantity<T, R, K> {
        Quantity::new(self.0 * ConversionFactor::<T, U>::value::<R>())
    }

    /// Builds this quantity from one expressed in another unit of the same dimension.
    ///
    /// ```rust
    /// use metra_core::imperial::Inches;
    /// use metra_core::si::Metres;
    ///
    /// let i = Inches::convert_from(Metres::new(5.0));
    /// assert_eq!(i.scalar(), 5.0 / 0.0254);
    /// ```
    #[inline]
    pub fn convert_from<V: Unit>(other: Quantity<V, R, K>) -> Self {
        other.to::<U>()
    }

    /// Re-expresses the scalar in representation `S`, keeping the unit.
    ///
    /// ```rust
    /// use metra_core::si::{Metre, Metres};
    /// use metra_core::Quantity;
    ///
    /// let single: Quantity<Metre, f32> = Metres::new(0.1).cast::<f32>();
    /// assert_eq!(single.scalar(), 0.1f32);
    /// ```
    #[inline]
    pub fn cast<S: Representation>(self) -> Quantity<U, S, K>
    where
        R: RepresentationCast<S>,
    {
        Quantity::new(self.0.cast())
    }

    /// Returns the absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.0.abs())
    }

    /// Returns `true` if the scalar is NaN.
    #[inline]
    pub fn is_nan(self) -> bool {
        self.0.is_nan()
    }

    /// Returns the smaller of two quantities in the same unit, ignoring a NaN operand like `f64::min`.
    ///
    /// ```rust
    /// use metra_core::si::Metres;
    /// let a = Metres::new(3.0);
    /// assert_eq!(a.min(Metres::new(5.0)).scalar(), 3.0);
    /// assert_eq!(Metres::NAN.min(a).scalar(), 3.0);
    /// ```
    #[inline]
    pub fn min(self, other: Self) -> Self {
        if self.0.is_nan() || other.0 < self.0 {
            other
        } else {
            self
        }
    }

    /// Returns the larger of two quantities in the same unit, ignoring a NaN operand like `f64::max`.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        if self.0.is_nan() || other.0 > self.0 {
            other
        } else {
            self
        }
    }

    /// Adds one (in the current unit) and returns the updated value.
    ///
    /// ```rust
    /// use metra_core::si::Metres;
    /// let mut m = Metres::new(3.0);
    /// assert_eq!(m.pre_increment().scalar(), 4.0);
    /// assert_eq!(m.scalar(), 4.0);
    /// ```
    #[inline]
    pub fn pre_increment(&mut self) -> Self {
        self.0 += R::ONE;
        *self
    }

    /// Adds one (in the current unit) and returns the value held before the update.
    ///
    /// ```rust
    /// use metra_core::si::Metres;
    /// let mut m = Metres::new(3.0);
    /// assert_eq!(m.post_increment().scalar(), 3.0);
    /// assert_eq!(m.scalar(), 4.0);
    /// ```
    #[inline]
    pub fn post_increment(&mut self) -> Self {
        let cache = *self;
        self.0 += R::ONE;
        cache
    }

    /// Subtracts one (in the current unit) and returns the updated value.
    #[inline]
    pub fn pre_decrement(&mut self) -> Self {
        self.0 -= R::ONE;
        *self
    }

    /// Subtracts one (in the current unit) and returns the value held before the update.
    #[inline]
    pub fn post_decrement(&mut self) -> Self {
        let cache = *self;
        self.0 -= R::ONE;
        cache
    }
}

impl<U: Unit, R: Representation, K: Kind> Default for Quantity<U, R, K> {
    /// The additive identity.
    #[inline]
    fn default() -> Self {
        Self::new(R::ZERO)
    }
}

impl<U: Unit, R: Representation, K: Kind> Display for Quantity<U, R, K> {
    /// Formats as `<scalar> <symbol>`; width and precision flags apply to the scalar.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        Display::fmt(&self.0, f)?;
        if U::COMPOSITE || !U::SYMBOL.is_empty() {
            f.write_str(" ")?;
            U::write_symbol(f)?;
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Same-dimension operators (right operand converted into the left unit)
// ─────────────────────────────────────────────────────────────────────────────

impl<U: Unit, V: Unit, R: Representation, K: Kind> Add<Quantity<V, R, K>> for Quantity<U, R, K> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Quantity<V, R, K>) -> Self {
        Self::new(self.0 + rhs.to::<U>().0)
    }
}

impl<U: Unit, V: Unit, R: Representation, K: Kind> AddAssign<Quantity<V, R, K>> for Quantity<U, R, K> {
    #[inline]
    fn add_assign(&mut self, rhs: Quantity<V, R, K>) {
        self.0 += rhs.to::<U>().0;
    }
}

impl<U: Unit, V: Unit, R: Representation, K: Kind> Sub<Quantity<V, R, K>> for Quantity<U, R, K> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Quantity<V, R, K>) -> Self {
        Self::new(self.0 - rhs.to::<U>().0)
    }
}

impl<U: Unit, V: Unit, R: Representation, K: Kind> SubAssign<Quantity<V, R, K>> for Quantity<U, R, K> {
    #[inline]
    fn sub_assign(&mut self, rhs: Quantity<V, R, K>) {
        self.0 -= rhs.to::<U>().0;
    }
}

impl<U: Unit, V: Unit, R: Representation, K: Kind> PartialEq<Quantity<V, R, K>> for Quantity<U, R, K> {
    #[inline]
    fn eq(&self, other: &Quantity<V, R, K>) -> bool {
        self.0 == other.to::<U>().0
    }
}

impl<U: Unit, V: Unit, R: Representation, K: Kind> PartialOrd<Quantity<V, R, K>> for Quantity<U, R, K> {
    #[inline]
    fn partial_cmp(&self, other: &Quantity<V, R, K>) -> Option<Ordering> {
        self.0.partial_cmp(&other.to::<U>().0)
    }
}

impl<U: Unit, R: Representation, K: Kind> Neg for Quantity<U, R, K> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.0)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Scalar operators
// ─────────────────────────────────────────────────────────────────────────────

/// Scales in place by a bare scalar of any representation; the scalar is cast into `R` first.
///
/// ```rust
/// use metra_core::si::Metre;
/// use metra_core::Quantity;
///
/// let mut m = Quantity::<Metre, f32>::new(3.0);
/// m *= 0.5f64;
/// assert_eq!(m.scalar(), 1.5f32);
/// ```
impl<U: Unit, R: Representation, K: Kind, S: RepresentationCast<R>> MulAssign<S> for Quantity<U, R, K> {
    #[inline]
    fn mul_assign(&mut self, rhs: S) {
        self.0 *= RepresentationCast::<R>::cast(rhs);
    }
}

/// Divides in place by a bare scalar of any representation; the scalar is cast into `R` first.
impl<U: Unit, R: Representation, K: Kind, S: RepresentationCast<R>> DivAssign<S> for Quantity<U, R, K> {
    #[inline]
    fn div_assign(&mut self, rhs: S) {
        self.0 /= RepresentationCast::<R>::cast(rhs);
    }
}

macro_rules! impl_scalar_ops {
    ($($t:ty),*) => {
        $(
            impl<U: Unit, K: Kind> Mul<$t> for Quantity<U, $t, K> {
                type Output = Self;
                #[inline]
                fn mul(self, rhs: $t) -> Self {
                    Self::new(self.0 * rhs)
                }
            }

            impl<U: Unit, K: Kind> Mul<Quantity<U, $t, K>> for $t {
                type Output = Quantity<U, $t, K>;
                #[inline]
                fn mul(self, rhs: Quantity<U, $t, K>) -> Self::Output {
                    rhs * self
                }
            }

            impl<U: Unit, K: Kind> Div<$t> for Quantity<U, $t, K> {
                type Output = Self;
                #[inline]
                fn div(self, rhs: $t) -> Self {
                    Self::new(self.0 / rhs)
                }
            }
        )*
    };
}

impl_scalar_ops!(f32, f64);

// ─────────────────────────────────────────────────────────────────────────────
// Unit-deriving operators
// ─────────────────────────────────────────────────────────────────────────────

impl<U: Unit, V: Unit, R: Representation, K: Kind> Mul<Quantity<V, R, K>> for Quantity<U, R, K> {
    type Output = Quantity<Prod<U, V>, R, K>;

    /// Plain product of the scalars, tagged with the derived unit `U·V`.
    #[inline]
    fn mul(self, rhs: Quantity<V, R, K>) -> Self::Output {
        Quantity::new(self.0 * rhs.0)
    }
}

impl<U: Unit, V: Unit, R: Representation, K: Kind> Div<Quantity<V, R, K>> for Quantity<U, R, K> {
    type Output = Quantity<Per<U, V>, R, K>;

    /// Plain quotient of the scalars, tagged with the derived unit `U/V`.
    #[inline]
    fn div(self, rhs: Quantity<V, R, K>) -> Self::Output {
        Quantity::new(self.0 / rhs.0)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<U: Unit, R: Representation + Serialize, K: Kind> Serialize for Quantity<U, R, K> {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, U: Unit, R: Representation + Deserialize<'de>, K: Kind> Deserialize<'de> for Quantity<U, R, K> {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = R::deserialize(deserializer)?;
        Ok(Quantity::new(value))
    }
}

/// Serde helper module for serializing quantities with unit information.
///
/// Use this with the `#[serde(with = "...")]` attribute to preserve unit symbols in serialized data. Composite
/// units serialize their full symbol (`"m/s"`, `"kg·m"`).
///
/// # Examples
///
/// ```rust
/// use metra_core::si::Metres;
/// use serde::{Serialize, Deserialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Config {
///     #[serde(with = "metra_core::serde_with_unit")]
///     max_distance: Metres,  // Serializes as {"value": 100.0, "unit": "m"}
///
///     min_distance: Metres,  // Serializes as 50.0 (default, compact)
/// }
/// ```
#[cfg(all(feature = "serde", feature = "std"))]
pub mod serde_with_unit {
    use super::*;
    use serde::de::{self, MapAccess, Visitor};
    use serde::ser::SerializeStruct;

    struct Symbol<U>(PhantomData<U>);

    impl<U: Unit> Display for Symbol<U> {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            U::write_symbol(f)
        }
    }

    impl<U: Unit> Serialize for Symbol<U> {
        fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
            serializer.collect_str(self)
        }
    }

    /// Serializes a `Quantity<U, R, K>` as a struct with `value` and `unit` fields.
    ///
    /// # Example JSON Output
    /// ```json
    /// {"value": 42.5, "unit": "m"}
    /// ```
    pub fn serialize<U, R, K, S>(quantity: &Quantity<U, R, K>, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        U: Unit,
        R: Representation + Serialize,
        K: Kind,
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Quantity", 2)?;
        state.serialize_field("value", &quantity.scalar())?;
        state.serialize_field("unit", &Symbol::<U>(PhantomData))?;
        state.end()
    }

    /// Deserializes a `Quantity<U, R, K>` from a struct with `value` and optionally `unit` fields.
    ///
    /// The `unit` field is validated if present but not required for backwards compatibility.
    pub fn deserialize<'de, U, R, K, D>(deserializer: D) -> core::result::Result<Quantity<U, R, K>, D::Error>
    where
        U: Unit,
        R: Representation + Deserialize<'de>,
        K: Kind,
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(field_identifier, rename_all = "lowercase")]
        enum Field {
            Value,
            Unit,
        }

        struct QuantityVisitor<U, R, K>(PhantomData<(U, R, K)>);

        impl<'de, U: Unit, R: Representation + Deserialize<'de>, K: Kind> Visitor<'de> for QuantityVisitor<U, R, K> {
            type Value = Quantity<U, R, K>;

            fn expecting(&self, formatter: &mut Formatter) -> Result {
                formatter.write_str("struct Quantity with value and unit fields")
            }

            fn visit_map<V>(self, mut map: V) -> core::result::Result<Quantity<U, R, K>, V::Error>
            where
                V: MapAccess<'de>,
            {
                let mut value: Option<R> = None;
                let mut unit: Option<String> = None;

                while let Some(key) = map.next_key()? {
                    match key {
                        Field::Value => {
                            if value.is_some() {
                                return Err(de::Error::duplicate_field("value"));
                            }
                            value = Some(map.next_value()?);
                        }
                        Field::Unit => {
                            if unit.is_some() {
                                return Err(de::Error::duplicate_field("unit"));
                            }
                            unit = Some(map.next_value()?);
                        }
                    }
                }

                let value = value.ok_or_else(|| de::Error::missing_field("value"))?;

                if let Some(ref unit_str) = unit {
                    let expected = Symbol::<U>(PhantomData).to_string();
                    if *unit_str != expected {
                        return Err(de::Error::custom(format!(
                            "unit mismatch: expected '{}', found '{}'",
                            expected, unit_str
                        )));
                    }
                }

                Ok(Quantity::new(value))
            }
        }

        deserializer.deserialize_struct(
            "Quantity",
            &["value", "unit"],
            QuantityVisitor(PhantomData),
        )
    }
}
