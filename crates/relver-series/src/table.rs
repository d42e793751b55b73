//! Series tables.
//!
//! A table maps series names (e.g. `trusty`, `win2012r2`) to the OS family
//! they belong to. The built-in table is compiled into the crate; other
//! tables are loaded from YAML documents of the form:
//!
//! ```yaml
//! version: "1"
//! families:
//!   ubuntu: [precise, trusty, xenial]
//!   windows: [win2012r2, win10]
//! ```

use crate::error::{Result, SeriesError};
use crate::family::OsFamily;
use crate::SeriesLookup;
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

/// Series known to the built-in table
const BUILTIN_SERIES: &[(OsFamily, &[&str])] = &[
    (
        OsFamily::Ubuntu,
        &[
            "precise", "quantal", "raring", "saucy", "trusty", "utopic", "vivid", "wily",
            "xenial", "yakkety", "zesty", "artful", "bionic", "cosmic", "disco", "eoan",
            "focal",
        ],
    ),
    (
        OsFamily::Windows,
        &[
            "win2008r2", "win2012hvr2", "win2012hv", "win2012r2", "win2012", "win2016",
            "win2016hv", "win2016nano", "win7", "win8", "win81", "win10",
        ],
    ),
    (OsFamily::Osx, &["yosemite", "elcapitan", "sierra", "highsierra"]),
    (OsFamily::CentOs, &["centos7"]),
    (OsFamily::OpenSuse, &["opensuseleap"]),
    (OsFamily::GenericLinux, &["genericlinux"]),
];

static BUILTIN_TABLE: Lazy<SeriesTable> = Lazy::new(|| {
    let mut families = HashMap::new();
    for (family, names) in BUILTIN_SERIES {
        for name in *names {
            families.insert((*name).to_string(), *family);
        }
    }
    SeriesTable { families }
});

/// On-disk table document
#[derive(Debug, Clone, Deserialize)]
pub struct SeriesFile {
    pub version: String,
    #[serde(default)]
    pub families: BTreeMap<OsFamily, Vec<String>>,
}

/// Mapping from series name to OS family
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeriesTable {
    families: HashMap<String, OsFamily>,
}

impl SeriesTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// The table compiled into the crate
    pub fn builtin() -> &'static SeriesTable {
        &BUILTIN_TABLE
    }

    /// Load a table from a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let table = Self::from_yaml(&content)?;
        tracing::info!(path = %path.display(), series = table.len(), "loaded series table");
        Ok(table)
    }

    /// Build a table from YAML content
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let file: SeriesFile = serde_yaml::from_str(yaml)?;
        tracing::debug!(version = %file.version, families = file.families.len(), "parsed series document");

        let mut table = Self::new();
        for (family, names) in file.families {
            for name in names {
                table.insert(name, family)?;
            }
        }
        Ok(table)
    }

    /// Register a series under a family.
    ///
    /// Registering the same series twice under one family is a no-op;
    /// registering it under a second family is an error.
    pub fn insert(&mut self, series: impl Into<String>, family: OsFamily) -> Result<()> {
        let series = series.into();
        let trimmed = series.trim();
        if trimmed.is_empty() {
            return Err(SeriesError::InvalidTable(format!(
                "empty series name under {}",
                family
            )));
        }
        if trimmed.contains('-') {
            // Binary versions split on '-', such a series could never be parsed
            return Err(SeriesError::InvalidTable(format!(
                "series name {:?} contains '-'",
                trimmed
            )));
        }

        match self.families.get(trimmed) {
            Some(&existing) if existing != family => Err(SeriesError::DuplicateSeries {
                series: trimmed.to_string(),
                first: existing,
                second: family,
            }),
            Some(_) => Ok(()),
            None => {
                self.families.insert(trimmed.to_string(), family);
                Ok(())
            }
        }
    }

    /// Whether the series is known to this table
    pub fn contains(&self, series: &str) -> bool {
        self.families.contains_key(series)
    }

    /// Known series of a family, sorted by name
    pub fn series_for(&self, family: OsFamily) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .families
            .iter()
            .filter(|(_, f)| **f == family)
            .map(|(name, _)| name.as_str())
            .collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.families.len()
    }

    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }
}

impl SeriesLookup for SeriesTable {
    fn lookup_os_family(&self, series: &str) -> Result<OsFamily> {
        self.families
            .get(series)
            .copied()
            .ok_or_else(|| SeriesError::UnknownSeries(series.to_string()))
    }
}
