//! relver: release version parsing, formatting and ordering
//!
//! Versions are written `MAJOR.MINOR.PATCH[.BUILD]` for releases and
//! `MAJOR.MINOR-TAGPATCH[.BUILD]` for pre-releases. Binary versions append
//! the series and architecture of a build: `1.2.3-trusty-amd64`.
//!
//! The ordering is not semantic versioning: any tagged version sorts before
//! the release sharing its major and minor, whatever the patch.
//!
//! # Example
//!
//! ```
//! use relver::{Binary, Number};
//!
//! let beta: Number = "1.2-beta1".parse().unwrap();
//! let release: Number = "1.2.0".parse().unwrap();
//! assert!(beta < release);
//!
//! let binary = Binary::parse("1.2.3-trusty-amd64").unwrap();
//! assert_eq!(binary.number, Number::new(1, 2, 3));
//! assert_eq!(binary.to_string(), "1.2.3-trusty-amd64");
//! ```

pub mod binary;
pub mod codec;
pub mod error;
pub mod grammar;
pub mod major_minor;
pub mod number;

pub use binary::Binary;
pub use error::{MajorMinorReason, Result, VersionError};
pub use major_minor::{parse_major_minor, MINOR_UNSPECIFIED};
pub use number::Number;
pub use relver_series::{OsFamily, SeriesLookup, SeriesTable};
