//! Parsed version record

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::version_parser::{VersionError, VersionParser};

/// A parsed `major.minor.patch[-prerelease][+build]` version.
///
/// Equality and ordering ignore build metadata. A prerelease is compared as
/// one opaque string, so `1.0.0-rc.10` sorts before `1.0.0-rc.9`; this is
/// simpler than the dot-wise identifier precedence most semver tooling uses.
#[derive(Debug, Clone, Default)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
    prerelease: String,
    build_metadata: String,
}

impl Version {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            ..Self::default()
        }
    }

    pub fn with_prerelease(self, prerelease: impl Into<String>) -> Self {
        Self {
            prerelease: prerelease.into(),
            ..self
        }
    }

    pub fn with_build_metadata(self, build_metadata: impl Into<String>) -> Self {
        Self {
            build_metadata: build_metadata.into(),
            ..self
        }
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    /// Prerelease token, `None` when absent or empty
    pub fn prerelease(&self) -> Option<&str> {
        non_empty(&self.prerelease)
    }

    /// Build metadata, `None` when absent or empty
    pub fn build_metadata(&self) -> Option<&str> {
        non_empty(&self.build_metadata)
    }

    pub fn is_prerelease(&self) -> bool {
        !self.prerelease.is_empty()
    }

    fn triple(&self) -> (u64, u64, u64) {
        (self.major, self.minor, self.patch)
    }
}

fn non_empty(s: &str) -> Option<&str> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        // A prerelease precedes any release, whatever the numbers say
        let prerelease = match (self.prerelease(), other.prerelease()) {
            (Some(a), Some(b)) => a.cmp(b),
            (Some(_), None) => return Ordering::Less,
            (None, Some(_)) => return Ordering::Greater,
            (None, None) => Ordering::Equal,
        };

        prerelease.then_with(|| self.triple().cmp(&other.triple()))
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(pre) = self.prerelease() {
            write!(f, "-{}", pre)?;
        }
        if let Some(build) = self.build_metadata() {
            write!(f, "+{}", build)?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VersionParser::new().parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Version {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Version {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
