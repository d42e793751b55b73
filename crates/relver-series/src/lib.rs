//! relver-series: platform series resolution
//!
//! Maps a series name, as carried by a binary version such as
//! `1.2.3-trusty-amd64`, to the operating system family it belongs to.
//!
//! # Example
//!
//! ```
//! use relver_series::{lookup_os_family, OsFamily};
//!
//! assert_eq!(lookup_os_family("trusty").unwrap(), OsFamily::Ubuntu);
//! assert!(lookup_os_family("nosuchseries").is_err());
//! ```

pub mod error;
pub mod family;
pub mod table;

pub use error::{Result, SeriesError};
pub use family::OsFamily;
pub use table::{SeriesFile, SeriesTable};

/// Resolves series names to OS families.
///
/// Implementations may be backed by I/O; callers treat a lookup as a
/// blocking call and never retry it.
pub trait SeriesLookup {
    fn lookup_os_family(&self, series: &str) -> Result<OsFamily>;
}

/// Resolve a series against the built-in table
pub fn lookup_os_family(series: &str) -> Result<OsFamily> {
    SeriesTable::builtin().lookup_os_family(series)
}
