//! Semantic version extraction, parsing and comparison
//!
//! Versions are pulled out of arbitrary text (`"v1.2.3-rc.1 (stable)"`),
//! parsed into a [`Version`] and ordered by precedence. Prerelease tokens are
//! compared as whole strings and build metadata is ignored.

mod comparator;
mod operator;
mod semver;
mod version;
mod version_parser;

use std::cmp::Ordering;

pub use comparator::Comparator;
pub use operator::Operator;
pub use semver::Semver;
pub use version::Version;
pub use version_parser::{VersionError, VersionParser};

/// Orders two version strings, extracting each from surrounding text first.
///
/// ```
/// use std::cmp::Ordering;
///
/// assert_eq!(vercmp::compare("1.0.0-alpha", "1.0.0-beta").unwrap(), Ordering::Less);
/// assert_eq!(vercmp::compare("v1.0.1", "1.0.0+build").unwrap(), Ordering::Greater);
/// ```
pub fn compare(version1: &str, version2: &str) -> Result<Ordering, VersionError> {
    Comparator::compare(version1, version2)
}

/// Parses a strict `major.minor.patch[-prerelease][+build]` string.
///
/// ```
/// let version = vercmp::parse_version("1.2.3-rc+42").unwrap();
/// assert_eq!(version.prerelease(), Some("rc"));
/// assert_eq!(version.build_metadata(), Some("42"));
/// ```
pub fn parse_version(version: &str) -> Result<Version, VersionError> {
    VersionParser::new().parse(version)
}
