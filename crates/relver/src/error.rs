//! Version Error Model
use std::num::ParseIntError;
use thiserror::Error;

/// Result type alias for version operations
pub type Result<T> = std::result::Result<T, VersionError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    /// Input does not match the version number grammar
    #[error("invalid version {0:?}")]
    InvalidVersionFormat(String),

    /// Input does not match the binary version grammar
    #[error("invalid binary version {0:?}")]
    InvalidBinaryFormat(String),

    /// Binary version is well formed but its series is not a known platform
    #[error("unknown series {0:?}")]
    UnknownSeries(String),

    /// A bare `major[.minor]` string could not be parsed
    #[error("{reason}")]
    InvalidMajorMinor {
        input: String,
        reason: MajorMinorReason,
    },
}

/// Why a `major[.minor]` string was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MajorMinorReason {
    #[error("invalid major.minor version number {0}")]
    TooManyComponents(String),

    #[error("invalid major version number {literal}: {cause}")]
    NonNumericMajor {
        literal: String,
        #[source]
        cause: ParseIntError,
    },

    #[error("invalid minor version number {literal}: {cause}")]
    NonNumericMinor {
        literal: String,
        #[source]
        cause: ParseIntError,
    },
}
