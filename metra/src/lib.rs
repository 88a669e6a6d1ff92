//! Dimensionally checked physical quantities with exact unit scales.
//!
//! `metra` is the user-facing crate in this workspace. It re-exports the full API from `metra-core` plus the SI
//! and imperial unit catalogs.
//!
//! The core idea is: a value is always a `Quantity<U>`, where `U` is a zero-sized type describing the unit. The
//! unit carries its dimension (seven rational exponents) and an exact rational scale to the SI unit, so
//! dimensional analysis happens at compile time with no runtime overhead beyond the scalar.
//!
//! # What this crate solves
//!
//! - Prevents mixing incompatible dimensions (you can't add metres to seconds).
//! - Makes unit conversion explicit and type-checked (`to::<TargetUnit>()`), with factors computed exactly.
//! - Lets units of one dimension mix freely: `Metres + Inches` yields metres.
//! - Derives product and quotient units (`m·in`, `m/s`) with their dimensions and scales.
//!
//! # What this crate does not try to solve
//!
//! - Symbolic simplification: a derived unit converts into a named unit of the same dimension through `to`.
//! - Exact arithmetic on values: quantities are backed by `f32` or `f64`.
//! - Offset units such as degrees Celsius or Fahrenheit.
//!
//! # Quick start
//!
//! Convert metres to inches:
//!
//! ```rust
//! use metra::{Inch, Metres};
//!
//! let m = Metres::new(1.0);
//! let i = m.to::<Inch>();
//! assert!((i.value() - 39.370_078_7).abs() < 1e-7);
//! ```
//!
//! Compose and use derived units (speed = length / time):
//!
//! ```rust
//! use metra::{Kilometres, MetrePerSecond, Seconds};
//!
//! let d = Kilometres::new(1.0);
//! let t = Seconds::new(100.0);
//! let v = (d / t).to::<MetrePerSecond>();
//! assert!((v.value() - 10.0).abs() < 1e-12);
//! ```
//!
//! # Incorrect usage (compile errors)
//!
//! Operands of different dimensions:
//!
//! ```compile_fail
//! use metra::{Kilometres, Seconds};
//!
//! let d = Kilometres::new(1.0);
//! let t = Seconds::new(1.0);
//! let _ = d + t; // cannot add a length and a time
//! ```
//!
//! Operands of different representations:
//!
//! ```compile_fail
//! use metra::{Metre, Metres, Quantity};
//!
//! let a = Metres::new(1.0);
//! let b = Quantity::<Metre, f32>::new(1.0);
//! let _ = a + b; // f64 and f32 scalars do not mix; use `cast`
//! ```
//!
//! Conversion to a unit of another dimension:
//!
//! ```compile_fail
//! use metra::{Pounds, Second};
//!
//! let _ = Pounds::new(1.0).to::<Second>();
//! ```
//!
//! Vector and affine quantities do not mix either:
//!
//! ```compile_fail
//! use metra::{AffineQuantity, Metre, Metres};
//!
//! let _ = Metres::new(1.0) + AffineQuantity::<Metre>::new(1.0);
//! ```
//!
//! Products and quotients need one representation on both sides:
//!
//! ```compile_fail
//! use metra::{Inch, Metres, Quantity};
//!
//! let _ = Metres::new(4.0) * Quantity::<Inch, f32>::new(5.0); // cast one operand first
//! ```
//!
//! ```compile_fail
//! use metra::{Metres, Quantity, Second};
//!
//! let _ = Metres::new(4.0) / Quantity::<Second, f32>::new(2.0);
//! ```
//!
//! Comparisons across dimensions:
//!
//! ```compile_fail
//! use metra::{Metres, Seconds};
//!
//! let _ = Metres::new(1.0) < Seconds::new(1.0);
//! ```
//!
//! ```compile_fail
//! use metra::{Kilograms, Metres};
//!
//! let _ = Metres::new(1.0) == Kilograms::new(1.0);
//! ```
//!
//! Compound assignment across dimensions:
//!
//! ```compile_fail
//! use metra::{Metres, Seconds};
//!
//! let mut d = Metres::new(1.0);
//! d += Seconds::new(1.0);
//! ```
//!
//! ```compile_fail
//! use metra::{Metres, Seconds};
//!
//! let mut d = Metres::new(1.0);
//! d -= Seconds::new(1.0);
//! ```
//!
//! The same shapes with matching dimensions and representations build:
//!
//! ```rust
//! use metra::{Inches, Metres, Quantity, Second};
//!
//! let area = Metres::new(4.0) * Inches::new(5.0);
//! assert_eq!(area.value(), 20.0);
//! let speed = Metres::new(4.0).cast::<f32>() / Quantity::<Second, f32>::new(2.0);
//! assert_eq!(speed.value(), 2.0f32);
//! assert!(Metres::new(0.0253) < Inches::new(1.0));
//! let mut d = Metres::new(1.0);
//! d += Inches::new(100.0);
//! d -= Inches::new(100.0);
//! assert!((d.value() - 1.0).abs() < 1e-15);
//! ```
//!
//! # Modules
//!
//! Units are grouped by system under modules (also re-exported at the crate root for convenience):
//!
//! - `metra::si` (base units, prefixed lengths and masses, minutes and hours, coherent derived units)
//! - `metra::imperial` (inch, foot, yard, mile, pound)
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support in `metra-core`.
//! - `serde`: enables `serde` support for `Quantity`; serialization is the raw scalar only.
//!
//! Disable default features for `no_std`:
//!
//! ```toml
//! [dependencies]
//! metra = { version = "0.1.0", default-features = false }
//! ```
//!
//! # Panics and errors
//!
//! This crate does not define an error type and does not return `Result` from its core operations. Dimension
//! mismatches are rejected at compile time. Conversions and arithmetic are pure float computations; they do not
//! panic on their own, but they follow IEEE-754 behavior (NaN and infinities propagate according to the
//! underlying operation).
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor versions until `1.0`.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub use metra_core::*;

/// Derive macro used by `metra-core` to define unit marker types.
///
/// This macro expands in terms of `crate::Unit` and `crate::Ratio`, so it is intended for use inside
/// `metra-core` (or crates exposing the same crate-root API). Most users should not need this.
pub use metra_derive::Unit;

pub use metra_core::units::imperial;
pub use metra_core::units::si;

pub use metra_core::units::imperial::*;
pub use metra_core::units::si::*;
