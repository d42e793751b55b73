//! Errors raised while resolving series or loading series tables.
use crate::family::OsFamily;
use thiserror::Error;

/// Result type alias for series operations
pub type Result<T> = std::result::Result<T, SeriesError>;

#[derive(Debug, Error)]
pub enum SeriesError {
    /// The series is not present in the table consulted
    #[error("unknown series {0:?}")]
    UnknownSeries(String),

    /// The OS family name is not one of the known families
    #[error("unknown OS family {0:?}")]
    UnknownFamily(String),

    /// The same series was registered under two different families
    #[error("series {series:?} listed under both {first} and {second}")]
    DuplicateSeries {
        series: String,
        first: OsFamily,
        second: OsFamily,
    },

    /// The table document is malformed
    #[error("invalid series table: {0}")]
    InvalidTable(String),

    #[error("failed to read series table: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_yaml::Error> for SeriesError {
    fn from(e: serde_yaml::Error) -> Self {
        SeriesError::InvalidTable(e.to_string())
    }
}
