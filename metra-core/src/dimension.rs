//! Dimension types and traits.
//!
//! Every physical quantity decomposes into a product of the seven SI base dimensions, each raised to a rational
//! exponent:
//!
//! | quantity            | SI unit   | symbol |
//! |---------------------|-----------|--------|
//! | length              | metre     | `L`    |
//! | mass                | kilogram  | `M`    |
//! | time                | second    | `T`    |
//! | electric current    | ampere    | `I`    |
//! | temperature         | kelvin    | `K`    |
//! | amount of substance | mole      | `N`    |
//! | luminous intensity  | candela   | `J`    |
//!
//! A [`Dimension`] is an uninhabited marker type carrying that exponent vector as an associated constant.
//! Multiplying dimensions adds exponents ([`MulDim`]), dividing subtracts them ([`DivDim`]). Two dimensions are
//! the same dimension exactly when their [`Exponents`] are equal, whichever way they were derived.

use crate::ratio::Ratio;
use core::fmt::{Display, Formatter, Result};
use core::marker::PhantomData;

/// Rational exponents of the seven SI base dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Exponents {
    /// Length exponent (`L`).
    pub length: Ratio,
    /// Mass exponent (`M`).
    pub mass: Ratio,
    /// Time exponent (`T`).
    pub time: Ratio,
    /// Electric current exponent (`I`).
    pub current: Ratio,
    /// Temperature exponent (`K`).
    pub temperature: Ratio,
    /// Amount of substance exponent (`N`).
    pub substance: Ratio,
    /// Luminous intensity exponent (`J`).
    pub luminous_intensity: Ratio,
}

impl Exponents {
    /// All exponents zero: a dimensionless quantity.
    pub const NONE: Self = Self {
        length: Ratio::ZERO,
        mass: Ratio::ZERO,
        time: Ratio::ZERO,
        current: Ratio::ZERO,
        temperature: Ratio::ZERO,
        substance: Ratio::ZERO,
        luminous_intensity: Ratio::ZERO,
    };

    /// `L^1`.
    pub const LENGTH: Self = Self {
        length: Ratio::ONE,
        ..Self::NONE
    };
    /// `M^1`.
    pub const MASS: Self = Self {
        mass: Ratio::ONE,
        ..Self::NONE
    };
    /// `T^1`.
    pub const TIME: Self = Self {
        time: Ratio::ONE,
        ..Self::NONE
    };
    /// `I^1`.
    pub const CURRENT: Self = Self {
        current: Ratio::ONE,
        ..Self::NONE
    };
    /// `K^1`.
    pub const TEMPERATURE: Self = Self {
        temperature: Ratio::ONE,
        ..Self::NONE
    };
    /// `N^1`.
    pub const SUBSTANCE: Self = Self {
        substance: Ratio::ONE,
        ..Self::NONE
    };
    /// `J^1`.
    pub const LUMINOUS_INTENSITY: Self = Self {
        luminous_intensity: Ratio::ONE,
        ..Self::NONE
    };

    /// Exponents of a product: component-wise sum.
    pub const fn mul(self, rhs: Self) -> Self {
        Self {
            length: self.length.add(rhs.length),
            mass: self.mass.add(rhs.mass),
            time: self.time.add(rhs.time),
            current: self.current.add(rhs.current),
            temperature: self.temperature.add(rhs.temperature),
            substance: self.substance.add(rhs.substance),
            luminous_intensity: self.luminous_intensity.add(rhs.luminous_intensity),
        }
    }

    /// Exponents of a quotient: component-wise difference.
    pub const fn div(self, rhs: Self) -> Self {
        Self {
            length: self.length.sub(rhs.length),
            mass: self.mass.sub(rhs.mass),
            time: self.time.sub(rhs.time),
            current: self.current.sub(rhs.current),
            temperature: self.temperature.sub(rhs.temperature),
            substance: self.substance.sub(rhs.substance),
            luminous_intensity: self.luminous_intensity.sub(rhs.luminous_intensity),
        }
    }

    /// Exponents raised to a rational power: every component scaled by `power`.
    pub const fn pow(self, power: Ratio) -> Self {
        Self {
            length: self.length.mul(power),
            mass: self.mass.mul(power),
            time: self.time.mul(power),
            current: self.current.mul(power),
            temperature: self.temperature.mul(power),
            substance: self.substance.mul(power),
            luminous_intensity: self.luminous_intensity.mul(power),
        }
    }

    /// Exponents as an array in `L, M, T, I, K, N, J` order.
    pub const fn to_array(self) -> [Ratio; 7] {
        [
            self.length,
            self.mass,
            self.time,
            self.current,
            self.temperature,
            self.substance,
            self.luminous_intensity,
        ]
    }

    /// Const equality over all seven exponents.
    pub const fn const_eq(self, other: Self) -> bool {
        let lhs = self.to_array();
        let rhs = other.to_array();
        let mut i = 0;
        while i < lhs.len() {
            if !lhs[i].const_eq(rhs[i]) {
                return false;
            }
            i += 1;
        }
        true
    }

    /// Returns `true` when every exponent is zero.
    pub const fn is_dimensionless(self) -> bool {
        self.const_eq(Self::NONE)
    }
}

const SYMBOLS: [&str; 7] = ["L", "M", "T", "I", "K", "N", "J"];

impl Display for Exponents {
    /// Formats as `L·T^-1`, `L^1/2`, or `1` for a dimensionless vector.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let mut first = true;
        for (symbol, exponent) in SYMBOLS.iter().zip(self.to_array()) {
            if exponent.is_zero() {
                continue;
            }
            if !first {
                f.write_str("·")?;
            }
            first = false;
            f.write_str(symbol)?;
            if exponent != Ratio::ONE {
                write!(f, "^{}", exponent)?;
            }
        }
        if first {
            f.write_str("1")?;
        }
        Ok(())
    }
}

/// Marker trait for **dimensions** (Length, Time, Mass …).
///
/// A *dimension* is the category that distinguishes a metre from a second. Model each one as an empty enum and
/// give it its exponent vector:
///
/// ```rust
/// use metra_core::{Dimension, Exponents, Ratio};
///
/// /// Length^(1/2), as used by some noise spectral densities.
/// pub enum RootLength {}
/// impl Dimension for RootLength {
///     const EXPONENTS: Exponents = Exponents::LENGTH.pow(Ratio::new(1, 2));
/// }
/// ```
pub trait Dimension: 'static {
    /// Exponents of the seven SI base dimensions.
    const EXPONENTS: Exponents;
}

/// Dimension formed by multiplying two [`Dimension`]s (exponents add).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MulDim<A: Dimension, B: Dimension>(PhantomData<(A, B)>);
impl<A: Dimension, B: Dimension> Dimension for MulDim<A, B> {
    const EXPONENTS: Exponents = A::EXPONENTS.mul(B::EXPONENTS);
}

/// Dimension formed by dividing one [`Dimension`] by another (exponents subtract).
///
/// This is used to model composite dimensions such as `Length/Time` for speeds or `Angle/Time` for angular
/// speeds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DivDim<N: Dimension, D: Dimension>(PhantomData<(N, D)>);
impl<N: Dimension, D: Dimension> Dimension for DivDim<N, D> {
    const EXPONENTS: Exponents = N::EXPONENTS.div(D::EXPONENTS);
}

/// Returns `true` when `A` and `B` have identical exponent vectors.
///
/// ```rust
/// use metra_core::{same_dimension, DivDim, Length, MulDim, Speed, Time};
///
/// assert!(same_dimension::<MulDim<Speed, Time>, Length>());
/// assert!(!same_dimension::<Speed, Length>());
/// assert!(same_dimension::<DivDim<Length, Length>, metra_core::Angle>());
/// ```
pub const fn same_dimension<A: Dimension, B: Dimension>() -> bool {
    A::EXPONENTS.const_eq(B::EXPONENTS)
}

macro_rules! base_dimension {
    ($(#[$meta:meta])* $name:ident => $exponents:expr) => {
        $(#[$meta])*
        #[derive(Debug)]
        pub enum $name {}
        impl Dimension for $name {
            const EXPONENTS: Exponents = $exponents;
        }
    };
}

base_dimension!(
    /// Plane angle. Dimensionless (all exponents zero); radians are its SI unit.
    Angle => Exponents::NONE
);
base_dimension!(
    /// Length (`L`).
    Length => Exponents::LENGTH
);
base_dimension!(
    /// Mass (`M`).
    Mass => Exponents::MASS
);
base_dimension!(
    /// Time (`T`).
    Time => Exponents::TIME
);
base_dimension!(
    /// Electric current (`I`).
    Current => Exponents::CURRENT
);
base_dimension!(
    /// Thermodynamic temperature (`K`).
    Temperature => Exponents::TEMPERATURE
);
base_dimension!(
    /// Amount of substance (`N`).
    Substance => Exponents::SUBSTANCE
);
base_dimension!(
    /// Luminous intensity (`J`).
    LuminousIntensity => Exponents::LUMINOUS_INTENSITY
);

/// `Angle / Time`.
pub type AngularSpeed = DivDim<Angle, Time>;
/// `Length / Time`.
pub type Speed = DivDim<Length, Time>;
/// `Length · Length`.
pub type Area = MulDim<Length, Length>;
/// `Area · Length`.
pub type Volume = MulDim<Area, Length>;
/// `Speed / Time`.
pub type Acceleration = DivDim<Speed, Time>;
/// `Mass · Acceleration`.
pub type Force = MulDim<Mass, Acceleration>;
