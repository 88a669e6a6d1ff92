//! SI units.
//!
//! The base units have scale `1`; every other unit is an exact ratio to its base unit.
//!
//! ```rust
//! use metra_core::si::{Hours, Second};
//!
//! let h = Hours::new(1.5);
//! assert_eq!(h.to::<Second>().scalar(), 5_400.0);
//! ```

use crate::dimension::{
    Acceleration, Angle, AngularSpeed, Area, Current, Force, Length, LuminousIntensity, Mass, Speed, Substance,
    Temperature, Time, Volume,
};
use crate::Quantity;
use metra_derive::Unit;

// ─────────────────────────────────────────────────────────────────────────────
// Base units
// ─────────────────────────────────────────────────────────────────────────────

/// Radian, the SI unit of plane angle.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "rad", dimension = Angle, scale = 1)]
pub struct Radian;
/// A quantity measured in radians.
pub type Radians = Quantity<Radian>;

/// Metre (SI base unit of length).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "m", dimension = Length, scale = 1)]
pub struct Metre;
/// A quantity measured in metres.
pub type Metres = Quantity<Metre>;
/// One metre.
pub const M: Metres = Metres::new(1.0);

/// Kilogram (SI base unit of mass).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "kg", dimension = Mass, scale = 1)]
pub struct Kilogram;
/// A quantity measured in kilograms.
pub type Kilograms = Quantity<Kilogram>;
/// One kilogram.
pub const KG: Kilograms = Kilograms::new(1.0);

/// Second (SI base unit of time).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "s", dimension = Time, scale = 1)]
pub struct Second;
/// A quantity measured in seconds.
pub type Seconds = Quantity<Second>;
/// One second.
pub const S: Seconds = Seconds::new(1.0);

/// Ampere (SI base unit of electric current).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "A", dimension = Current, scale = 1)]
pub struct Ampere;
/// A quantity measured in amperes.
pub type Amperes = Quantity<Ampere>;

/// Kelvin (SI base unit of thermodynamic temperature).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "K", dimension = Temperature, scale = 1)]
pub struct Kelvin;
/// A temperature difference measured in kelvin.
pub type KelvinTemperatureDifference = Quantity<Kelvin>;

/// Mole (SI base unit of amount of substance).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "mol", dimension = Substance, scale = 1)]
pub struct Mole;
/// A quantity measured in moles.
pub type Moles = Quantity<Mole>;

/// Candela (SI base unit of luminous intensity).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "cd", dimension = LuminousIntensity, scale = 1)]
pub struct Candela;
/// A quantity measured in candelas.
pub type Candelas = Quantity<Candela>;

// ─────────────────────────────────────────────────────────────────────────────
// Prefixed and customary units
// ─────────────────────────────────────────────────────────────────────────────

/// Kilometre (`1000 m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "km", dimension = Length, scale = 1_000)]
pub struct Kilometre;
/// A quantity measured in kilometres.
pub type Kilometres = Quantity<Kilometre>;

/// Centimetre (`1/100 m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "cm", dimension = Length, scale = (1, 100))]
pub struct Centimetre;
/// A quantity measured in centimetres.
pub type Centimetres = Quantity<Centimetre>;

/// Millimetre (`1/1000 m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "mm", dimension = Length, scale = (1, 1_000))]
pub struct Millimetre;
/// A quantity measured in millimetres.
pub type Millimetres = Quantity<Millimetre>;

/// Gram (`1/1000 kg`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "g", dimension = Mass, scale = (1, 1_000))]
pub struct Gram;
/// A quantity measured in grams.
pub type Grams = Quantity<Gram>;

/// Minute (`60 s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "min", dimension = Time, scale = 60)]
pub struct Minute;
/// A quantity measured in minutes.
pub type Minutes = Quantity<Minute>;

/// Hour (`3600 s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "h", dimension = Time, scale = 3_600)]
pub struct Hour;
/// A quantity measured in hours.
pub type Hours = Quantity<Hour>;

crate::impl_unit_conversions!(Second, Minute, Hour);

// ─────────────────────────────────────────────────────────────────────────────
// Coherent derived units
// ─────────────────────────────────────────────────────────────────────────────

/// Square metre.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "m^2", dimension = Area, scale = 1)]
pub struct SquareMetre;
/// A quantity measured in square metres.
pub type SquareMetres = Quantity<SquareMetre>;

/// Cubic metre.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "m^3", dimension = Volume, scale = 1)]
pub struct CubicMetre;
/// A quantity measured in cubic metres.
pub type CubicMetres = Quantity<CubicMetre>;

/// Metre per second.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "m/s", dimension = Speed, scale = 1)]
pub struct MetrePerSecond;
/// A speed measured in metres per second.
pub type MetresPerSecond = Quantity<MetrePerSecond>;

/// Metre per second squared.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "m/s^2", dimension = Acceleration, scale = 1)]
pub struct MetrePerSecondSquared;
/// An acceleration measured in metres per second squared.
pub type MetresPerSecondSquared = Quantity<MetrePerSecondSquared>;

/// Radian per second.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "rad/s", dimension = AngularSpeed, scale = 1)]
pub struct RadianPerSecond;
/// An angular speed measured in radians per second.
pub type RadiansPerSecond = Quantity<RadianPerSecond>;

/// Newton (`kg·m/s^2`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "N", dimension = Force, scale = 1)]
pub struct Newton;
/// A force measured in newtons.
pub type Newtons = Quantity<Newton>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{same_dimension, Ratio, Unit};

    #[test]
    fn base_units_have_unit_scale() {
        assert_eq!(Metre::SCALE, Ratio::ONE);
        assert_eq!(Kilogram::SCALE, Ratio::ONE);
        assert_eq!(Second::SCALE, Ratio::ONE);
        assert_eq!(Radian::SCALE, Ratio::ONE);
        assert_eq!(Candela::SCALE, Ratio::ONE);
    }

    #[test]
    fn prefixed_scales() {
        assert_eq!(Kilometre::SCALE, Ratio::integer(1_000));
        assert_eq!(Millimetre::SCALE, Ratio::new(1, 1_000));
        assert_eq!(Hour::SCALE, Ratio::integer(3_600));
    }

    #[test]
    fn time_conversions() {
        let s: Seconds = Minutes::new(2.0).into();
        assert_eq!(s.scalar(), 120.0);
        let h: Hours = Minutes::new(90.0).into();
        assert_eq!(h.scalar(), 1.5);
    }

    #[test]
    fn derived_quantities_convert_into_named_units() {
        let d = Metres::new(100.0);
        let t = Seconds::new(20.0);
        let v: MetresPerSecond = (d / t).to();
        assert_eq!(v.scalar(), 5.0);

        let a: MetresPerSecondSquared = (v / Seconds::new(2.0)).to();
        let f: Newtons = (Kilograms::new(3.0) * a).to();
        assert_eq!(f.scalar(), 7.5);

        let area: SquareMetres = (Metres::new(2.0) * Metres::new(3.0)).to();
        let volume: CubicMetres = (area * Metres::new(4.0)).to();
        assert_eq!(volume.scalar(), 24.0);

        let w: RadiansPerSecond = (Radians::new(6.0) / Seconds::new(3.0)).to();
        assert_eq!(w.scalar(), 2.0);
    }

    #[test]
    fn catalog_dimensions() {
        assert!(same_dimension::<<Newton as Unit>::Dim, Force>());
        assert!(same_dimension::<<Radian as Unit>::Dim, Angle>());
        assert!(!same_dimension::<<Kelvin as Unit>::Dim, <Ampere as Unit>::Dim>());
    }

    #[test]
    fn unit_constants() {
        assert_eq!((3.0 * M).scalar(), 3.0);
        assert_eq!((KG * 2.0).scalar(), 2.0);
        assert_eq!((S / 4.0).scalar(), 0.25);
    }
}
