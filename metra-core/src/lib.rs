//! Core type system for dimensionally checked physical quantities.
//!
//! `metra-core` provides a zero-cost units model:
//!
//! - A *dimension* is an uninhabited marker implementing [`Dimension`], carrying the rational exponents of the
//!   seven SI base dimensions as an associated constant ([`Exponents`]).
//! - A *unit* is a zero-sized marker implementing [`Unit`]: a dimension plus an exact rational [`Ratio`] scale
//!   to the SI unit of that dimension.
//! - A value tagged with a unit is a [`Quantity<U, R, K>`]: one scalar of representation `R` (`f64` by default)
//!   in the [`Vector`] or [`Affine`] role `K`.
//! - Products and quotients of quantities produce the derived units [`Prod<A, B>`] and [`Per<N, D>`], whose
//!   dimensions and scales are computed exactly at compile time.
//!
//! Most users should depend on `metra` (the facade crate) unless they need direct access to these primitives.
//!
//! # What this crate solves
//!
//! - Compile-time separation of dimensions: adding a length to a time, or converting a metre into a second,
//!   does not build.
//! - Exact unit scales: chains of derived units never accumulate rounding error; a ratio is turned into a
//!   float only when a conversion is applied to a scalar.
//! - Mixed-unit arithmetic: `metres + inches` converts the right operand into the left operand's unit.
//! - Zero runtime overhead for unit tags (phantom types only).
//!
//! # What this crate does not try to solve
//!
//! - Exact scalar arithmetic (scalars are IEEE-754 floats).
//! - Symbolic simplification of unit expressions: `Prod<Metre, Metre>` and `SquareMetre` are different types of
//!   the same dimension, convertible through [`Quantity::to`].
//! - Offset units (degrees Celsius); every scale is a pure multiplicative factor.
//!
//! # Quick start
//!
//! Convert between predefined units:
//!
//! ```rust
//! use metra_core::imperial::Inch;
//! use metra_core::si::Metres;
//!
//! let m = Metres::new(1.0);
//! let i = m.to::<Inch>();
//! assert!((i.value() - 39.370_078_740_157_48).abs() < 1e-12);
//! ```
//!
//! Mix units of one dimension and derive new ones:
//!
//! ```rust
//! use metra_core::imperial::Inches;
//! use metra_core::si::{MetrePerSecond, Metres, Seconds};
//!
//! let total = Metres::new(5.0) + Inches::new(30.0);
//! assert!((total.value() - 5.762).abs() < 1e-12);
//!
//! let v = (total / Seconds::new(2.0)).to::<MetrePerSecond>();
//! assert!((v.value() - 2.881).abs() < 1e-12);
//! ```
//!
//! # `no_std`
//!
//! Disable default features to build `metra-core` without `std`:
//!
//! ```toml
//! [dependencies]
//! metra-core = { version = "0.1.0", default-features = false }
//! ```
//!
//! When `std` is disabled, floating-point math that isn't available in `core` is provided via `libm`.
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support.
//! - `serde`: enables `serde` support for `Quantity`; serialization is the raw scalar only. With `std` as well,
//!   [`serde_with_unit`] serializes the unit symbol next to the value.
//!
//! # Panics and errors
//!
//! This crate does not define an error type and does not return `Result` from its core operations. Dimension
//! mismatches are compile errors. Conversions and arithmetic are pure float computations; they do not panic on
//! their own, but they follow IEEE-754 behavior (NaN and infinities propagate according to the underlying
//! operation). [`Ratio::new`] and [`Ratio::div`] panic on a zero denominator, which is a compile error when they
//! are evaluated in a constant such as a unit scale.
//!
//! # SemVer and stability
//!
//! This crate is currently `0.x`. Expect breaking changes between minor versions until `1.0`.

#![deny(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(not(feature = "std"))]
extern crate libm;

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

mod dimension;
mod macros;
mod quantity;
mod ratio;
mod representation;
mod unit;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use dimension::{
    same_dimension, Acceleration, Angle, AngularSpeed, Area, Current, Dimension, DivDim, Exponents, Force, Length,
    LuminousIntensity, Mass, MulDim, Speed, Substance, Temperature, Time, Volume,
};
pub use quantity::{Affine, AffineQuantity, Kind, Quantity, Vector, VectorQuantity};
pub use ratio::Ratio;
pub use representation::{Representation, RepresentationCast};
pub use unit::{ConversionFactor, Per, Prod, Unit};

#[cfg(all(feature = "serde", feature = "std"))]
pub use quantity::serde_with_unit;

// ─────────────────────────────────────────────────────────────────────────────
// Predefined unit catalogs
// ─────────────────────────────────────────────────────────────────────────────

/// Predefined unit catalogs.
///
/// These are defined in `metra-core` so they can implement conversion traits without running into Rust's orphan
/// rules.
pub mod units;

pub use units::imperial;
pub use units::si;
