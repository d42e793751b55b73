//! Platform-qualified versions.
//!
//! A [`Binary`] is a [`Number`] plus the series and architecture an
//! artifact was built for, written `<number>-<series>-<arch>`, e.g.
//! `1.2.3-trusty-amd64` or `1.2-alpha3.4-trusty-amd64`.

use crate::error::{Result, VersionError};
use crate::grammar;
use crate::number::Number;
use relver_series::{OsFamily, SeriesLookup, SeriesTable};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A version number bound to a target platform
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Binary {
    pub number: Number,
    /// Platform release, e.g. `trusty`
    pub series: String,
    /// CPU architecture, e.g. `amd64`
    pub arch: String,
}

impl Binary {
    /// Build a binary version without validating the series
    pub fn new(number: Number, series: impl Into<String>, arch: impl Into<String>) -> Self {
        Self {
            number,
            series: series.into(),
            arch: arch.into(),
        }
    }

    /// Parse a binary version, resolving its series against the built-in table
    pub fn parse(text: &str) -> Result<Self> {
        Self::parse_with(text, SeriesTable::builtin())
    }

    /// Parse a binary version, resolving its series with `lookup`
    pub fn parse_with<L>(text: &str, lookup: &L) -> Result<Self>
    where
        L: SeriesLookup + ?Sized,
    {
        let parts = grammar::match_binary(text).ok_or_else(|| {
            tracing::debug!(input = text, "rejected binary version");
            VersionError::InvalidBinaryFormat(text.to_string())
        })?;

        lookup.lookup_os_family(parts.series).map_err(|err| {
            tracing::debug!(input = text, error = %err, "binary version has unknown series");
            VersionError::UnknownSeries(parts.series.to_string())
        })?;

        Ok(Self {
            number: Number::from_parts(&parts.number),
            series: parts.series.to_string(),
            arch: parts.arch.to_string(),
        })
    }

    /// Parse a binary version known to be valid.
    ///
    /// # Panics
    ///
    /// Panics if `text` is malformed or names an unknown series. Only use
    /// this for literals.
    pub fn must_parse(text: &str) -> Self {
        Self::parse(text).unwrap_or_else(|err| panic!("{}", err))
    }

    /// OS family of the series, from the built-in table
    pub fn os_family(&self) -> Result<OsFamily> {
        self.os_family_with(SeriesTable::builtin())
    }

    /// OS family of the series, resolved with `lookup`
    pub fn os_family_with<L>(&self, lookup: &L) -> Result<OsFamily>
    where
        L: SeriesLookup + ?Sized,
    {
        lookup
            .lookup_os_family(&self.series)
            .map_err(|_| VersionError::UnknownSeries(self.series.clone()))
    }
}

impl Ord for Binary {
    fn cmp(&self, other: &Self) -> Ordering {
        self.number
            .cmp(&other.number)
            .then_with(|| self.series.cmp(&other.series))
            .then_with(|| self.arch.cmp(&other.arch))
    }
}

impl PartialOrd for Binary {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Binary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.number, self.series, self.arch)
    }
}

impl FromStr for Binary {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self> {
        Binary::parse(s)
    }
}
