//! Imperial units, defined exactly from the international yard and pound (1959).

use crate::dimension::{Length, Mass};
use crate::Quantity;
use metra_derive::Unit;

/// Inch (`0.0254 m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "in", dimension = Length, scale = (254, 10_000))]
pub struct Inch;
/// A quantity measured in inches.
pub type Inches = Quantity<Inch>;

/// Foot (`0.3048 m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "ft", dimension = Length, scale = (3_048, 10_000))]
pub struct Foot;
/// A quantity measured in feet.
pub type Feet = Quantity<Foot>;

/// Yard (`0.9144 m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "yd", dimension = Length, scale = (9_144, 10_000))]
pub struct Yard;
/// A quantity measured in yards.
pub type Yards = Quantity<Yard>;

/// Statute mile (`1609.344 m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "mi", dimension = Length, scale = (1_609_344, 1_000))]
pub struct Mile;
/// A quantity measured in miles.
pub type Miles = Quantity<Mile>;

/// Avoirdupois pound (`0.45359237 kg`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "lb", dimension = Mass, scale = (45_359_237, 100_000_000))]
pub struct Pound;
/// A quantity measured in pounds.
pub type Pounds = Quantity<Pound>;
