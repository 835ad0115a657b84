//! Version extraction and parsing module

use std::num::ParseIntError;

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use crate::version::Version;

/// Error type for version parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    #[error("Invalid semver format \"{version}\": expected major.minor.patch")]
    Format { version: String },
    #[error("Invalid version component \"{segment}\": {source}")]
    NumericParse {
        segment: String,
        #[source]
        source: ParseIntError,
    },
    #[error("Invalid operator \"{0}\"")]
    InvalidOperator(String),
}

lazy_static! {
    // Leftmost version-like substring; [0-9] instead of \d keeps digits ASCII
    static ref VERSION_RE: Regex = Regex::new(
        r"[0-9]+\.[0-9]+\.[0-9]+(?:-[0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*)?(?:\+[0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*)?"
    ).unwrap();
}

/// Returns the first `sep`-delimited segment following the first `sep`.
fn split_first_segment(input: &str, sep: char) -> (&str, &str) {
    match input.split_once(sep) {
        Some((head, tail)) => (head, tail.split(sep).next().unwrap_or_default()),
        None => (input, ""),
    }
}

/// Version parser
///
/// Extraction pulls the first version-looking substring out of free text
/// (`"v1.2.3-rc.1 (stable)"` yields `"1.2.3-rc.1"`); parsing turns a strict
/// `M.N.P[-pre][+meta]` string into a [`Version`].
#[derive(Debug, Clone, Copy, Default)]
pub struct VersionParser;

impl VersionParser {
    pub fn new() -> Self {
        Self
    }

    /// Extracts the leftmost version-like substring, or `""` when there is none.
    pub fn normalize<'a>(&self, input: &'a str) -> &'a str {
        let found = VERSION_RE.find(input).map(|m| m.as_str()).unwrap_or_default();
        log::trace!("Normalized {:?} to {:?}", input, found);
        found
    }

    /// Parses a strict `M.N.P[-pre][+meta]` string.
    ///
    /// Only the first `+` and the first `-` split the input, and only the
    /// segment directly after each is kept: `"1.0.0-rc-1"` has prerelease
    /// `"rc"`. Empty tokens after a trailing separator are accepted.
    pub fn parse(&self, version: &str) -> Result<Version, VersionError> {
        let (rest, build_metadata) = split_first_segment(version, '+');
        let (core, prerelease) = split_first_segment(rest, '-');

        let segments: Vec<&str> = core.split('.').collect();
        let [major, minor, patch] = segments.as_slice() else {
            log::debug!("Rejecting {:?}: {} segments in {:?}", version, segments.len(), core);
            return Err(VersionError::Format {
                version: version.to_string(),
            });
        };

        Ok(Version::new(
            parse_component(major)?,
            parse_component(minor)?,
            parse_component(patch)?,
        )
        .with_prerelease(prerelease)
        .with_build_metadata(build_metadata))
    }

    /// Extracts a version from free text, then parses it.
    ///
    /// Text without any version-like substring fails with
    /// [`VersionError::Format`].
    pub fn parse_lenient(&self, input: &str) -> Result<Version, VersionError> {
        self.parse(self.normalize(input))
    }
}

// Components must fit a signed 64-bit integer even though they are never negative
fn parse_component(segment: &str) -> Result<u64, VersionError> {
    segment.parse::<i64>().and_then(|_| segment.parse::<u64>()).map_err(|source| {
        log::debug!("Rejecting version component {:?}", segment);
        VersionError::NumericParse {
            segment: segment.to_string(),
            source,
        }
    })
}
