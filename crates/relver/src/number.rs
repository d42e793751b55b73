//! Version numbers and their ordering.
//!
//! A [`Number`] is written `MAJOR.MINOR.PATCH[.BUILD]` for releases and
//! `MAJOR.MINOR-TAGPATCH[.BUILD]` for pre-releases, e.g. `1.21.0`,
//! `1.21-alpha1` or `1.21-alpha1.3`.

use crate::error::{Result, VersionError};
use crate::grammar::{self, digits_value};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A release version number
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Number {
    pub major: u32,
    pub minor: u32,
    /// Pre-release channel; empty for released versions
    pub tag: String,
    pub patch: u32,
    pub build: u32,
}

impl Number {
    /// `0.0.0`
    pub const ZERO: Number = Number {
        major: 0,
        minor: 0,
        tag: String::new(),
        patch: 0,
        build: 0,
    };

    /// A released version with no build number
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            tag: String::new(),
            patch,
            build: 0,
        }
    }

    /// Set the pre-release tag
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    /// Set the build number
    pub fn with_build(mut self, build: u32) -> Self {
        self.build = build;
        self
    }

    /// Parse a version number such as `1.2.3`, `1.2.3.4` or `1.2-beta1`
    pub fn parse(text: &str) -> Result<Self> {
        match grammar::match_number(text) {
            Some(parts) => Ok(Self::from_parts(&parts)),
            None => {
                tracing::debug!(input = text, "rejected version number");
                Err(VersionError::InvalidVersionFormat(text.to_string()))
            }
        }
    }

    /// Parse a version number known to be valid.
    ///
    /// # Panics
    ///
    /// Panics if `text` is not a valid version number. Only use this for
    /// literals.
    pub fn must_parse(text: &str) -> Self {
        Self::parse(text).unwrap_or_else(|err| panic!("{}", err))
    }

    pub(crate) fn from_parts(parts: &grammar::NumberParts<'_>) -> Self {
        Self {
            major: digits_value(parts.major),
            minor: digits_value(parts.minor),
            tag: parts.tag.to_string(),
            patch: digits_value(parts.patch),
            build: parts.build.map(digits_value).unwrap_or(0),
        }
    }

    /// Whether this is a development version: tagged, or with a build number
    pub fn is_dev(&self) -> bool {
        !self.tag.is_empty() || self.build > 0
    }

    /// The same version without its build number
    pub fn to_patch(&self) -> Number {
        Number {
            build: 0,
            ..self.clone()
        }
    }

    /// Whether this version carries a pre-release tag
    pub fn is_tagged(&self) -> bool {
        !self.tag.is_empty()
    }
}

impl Ord for Number {
    fn cmp(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then_with(|| self.minor.cmp(&other.minor))
            .then_with(|| match (self.is_tagged(), other.is_tagged()) {
                // Any pre-release sorts before the release of the same major.minor
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                _ => self.tag.as_bytes().cmp(other.tag.as_bytes()),
            })
            .then_with(|| self.patch.cmp(&other.patch))
            .then_with(|| self.build.cmp(&other.build))
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.tag.is_empty() {
            write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        } else {
            write!(f, "{}.{}-{}{}", self.major, self.minor, self.tag, self.patch)?;
        }
        if self.build > 0 {
            write!(f, ".{}", self.build)?;
        }
        Ok(())
    }
}

impl FromStr for Number {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self> {
        Number::parse(s)
    }
}
