//! Build configuration labels for the `metra` workspace.
//!
//! The crate reports which of the four build configurations produced the running artefact and renders those
//! labels as text. Raw discriminants coming from outside the type system (FFI, persisted settings) are validated
//! before rendering: an out-of-range value is an error and nothing is written.
//!
//! ```rust
//! use metra_build_info::{write_raw_build_type, BuildInfoError, BuildType};
//!
//! let mut out = String::new();
//! write_raw_build_type(&mut out, BuildType::RelWithDebInfo as u8).unwrap();
//! assert_eq!(out, "RelWithDebInfo");
//!
//! let mut out = String::new();
//! let err = write_raw_build_type(&mut out, 42).unwrap_err();
//! assert!(matches!(err, BuildInfoError::InvalidEnumValue { value: 42 }));
//! assert!(out.is_empty());
//! ```

#![deny(missing_docs)]
#![forbid(unsafe_code)]

mod error;

pub use error::{BuildInfoError, BuildInfoResult};

use log::{info, warn};
use std::fmt::{self, Display, Formatter, Write};
use std::str::FromStr;

/// Label of the build configuration, captured by the build script.
const BUILD_TYPE_LABEL: &str = env!("METRA_BUILD_TYPE");

/// The closed set of build configurations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum BuildType {
    /// Unoptimized, with debug information.
    Debug = 0,
    /// Optimized, without debug information.
    Release = 1,
    /// Optimized, with debug information.
    RelWithDebInfo = 2,
    /// Optimized for size.
    MinSizeRel = 3,
}

impl BuildType {
    /// Every build type, in discriminant order.
    pub const ALL: [BuildType; 4] = [
        BuildType::Debug,
        BuildType::Release,
        BuildType::RelWithDebInfo,
        BuildType::MinSizeRel,
    ];

    /// The human-readable label.
    pub const fn label(self) -> &'static str {
        match self {
            BuildType::Debug => "Debug",
            BuildType::Release => "Release",
            BuildType::RelWithDebInfo => "RelWithDebInfo",
            BuildType::MinSizeRel => "MinSizeRel",
        }
    }

    /// The build type this crate was compiled with.
    pub fn current() -> BuildInfoResult<Self> {
        BUILD_TYPE_LABEL.parse()
    }
}

impl Display for BuildType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<u8> for BuildType {
    type Error = BuildInfoError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match BuildType::ALL.get(usize::from(value)) {
            Some(build_type) => Ok(*build_type),
            None => {
                warn!("Rejected raw BuildType discriminant {}", value);
                Err(BuildInfoError::InvalidEnumValue { value })
            }
        }
    }
}

impl FromStr for BuildType {
    type Err = BuildInfoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BuildType::ALL
            .into_iter()
            .find(|build_type| build_type.label() == s)
            .ok_or_else(|| BuildInfoError::UnknownLabel(s.to_string()))
    }
}

/// Writes the label of a raw build type discriminant to `out`.
///
/// The discriminant is validated first, so an invalid value leaves `out` untouched.
pub fn write_raw_build_type<W: Write>(out: &mut W, raw: u8) -> BuildInfoResult<()> {
    let build_type = BuildType::try_from(raw)?;
    write!(out, "{}", build_type)?;
    Ok(())
}

/// Package identity and build configuration of the running artefact.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildInformation {
    /// Package name.
    pub package: &'static str,
    /// Package version.
    pub version: &'static str,
    /// Build configuration.
    pub build_type: BuildType,
}

impl BuildInformation {
    /// Information about this crate's own build.
    pub fn current() -> BuildInfoResult<Self> {
        Ok(BuildInformation {
            package: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            build_type: BuildType::current()?,
        })
    }

    /// Emits the build information as an `info` log record.
    pub fn log(&self) {
        info!(
            "{} {} ({} build)",
            self.package, self.version, self.build_type
        );
    }
}

impl Display for BuildInformation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} [{}]", self.package, self.version, self.build_type)
    }
}
