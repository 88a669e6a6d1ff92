//! Error types for build information rendering.

/// Result type for build information operations
pub type BuildInfoResult<T> = Result<T, BuildInfoError>;

/// Error type for build information operations
#[derive(Debug, thiserror::Error)]
pub enum BuildInfoError {
    /// A raw discriminant outside the four build types.
    #[error("Invalid value provided for enumeration BuildType: {value}")]
    InvalidEnumValue {
        /// The rejected discriminant.
        value: u8,
    },

    /// A label that names none of the four build types.
    #[error("Unknown build type label: {0}")]
    UnknownLabel(String),

    /// The output sink refused the rendered text.
    #[error("Formatting error: {0}")]
    Format(#[from] std::fmt::Error),
}
