//! Predefined unit catalogs.
//!
//! `metra-core` ships the catalogs so that conversions and formatting work out of the box without downstream
//! crates having to fight Rust's orphan rules.
//!
//! ## Modules
//!
//! - [`si`]: the seven SI base units, the radian, common prefixed units and a few coherent derived units.
//! - [`imperial`]: inch, foot, yard, mile and pound, defined exactly from their international values.
//!
//! Every pair of catalog units sharing a dimension converts through `From`/`Into`, across catalogs as well.

pub mod imperial;
pub mod si;

use imperial::{Foot, Inch, Mile, Pound, Yard};
use si::{Centimetre, Gram, Kilogram, Kilometre, Metre, Millimetre};

crate::impl_unit_conversions!(Metre, Kilometre, Centimetre, Millimetre, Inch, Foot, Yard, Mile);
crate::impl_unit_conversions!(Kilogram, Gram, Pound);
