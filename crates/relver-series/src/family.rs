//! Operating system families
//!
//! Every known series belongs to exactly one family.

use crate::error::SeriesError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An operating system family a series can resolve to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OsFamily {
    Ubuntu,
    Windows,
    Osx,
    CentOs,
    OpenSuse,
    GenericLinux,
}

impl OsFamily {
    /// All families, in declaration order
    pub const ALL: [OsFamily; 6] = [
        OsFamily::Ubuntu,
        OsFamily::Windows,
        OsFamily::Osx,
        OsFamily::CentOs,
        OsFamily::OpenSuse,
        OsFamily::GenericLinux,
    ];

    /// Lower-case name used in tables and serialized forms
    pub fn as_str(&self) -> &'static str {
        match self {
            OsFamily::Ubuntu => "ubuntu",
            OsFamily::Windows => "windows",
            OsFamily::Osx => "osx",
            OsFamily::CentOs => "centos",
            OsFamily::OpenSuse => "opensuse",
            OsFamily::GenericLinux => "genericlinux",
        }
    }
}

impl fmt::Display for OsFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OsFamily {
    type Err = SeriesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OsFamily::ALL
            .iter()
            .copied()
            .find(|family| family.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| SeriesError::UnknownFamily(s.to_string()))
    }
}
