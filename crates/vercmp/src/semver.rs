//! Semver facade providing high-level version operations

use std::cmp::Ordering;

use crate::{Comparator, Version, VersionError, VersionParser};

/// Main facade for semantic versioning operations
pub struct Semver;

impl Semver {
    /// Orders two version strings, extracting each from surrounding text first
    pub fn compare(version1: &str, version2: &str) -> Result<Ordering, VersionError> {
        Comparator::compare(version1, version2)
    }

    /// Parses a strict `M.N.P[-pre][+meta]` string
    pub fn parse_version(version: &str) -> Result<Version, VersionError> {
        VersionParser::new().parse(version)
    }

    /// Sort versions in ascending order
    pub fn sort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, true)
    }

    /// Sort versions in descending order (reverse sort)
    pub fn rsort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, false)
    }

    fn usort(versions: &[&str], ascending: bool) -> Vec<String> {
        let parser = VersionParser::new();

        // Parsed versions with their original index; unparsable input is dropped
        let mut parsed: Vec<(Version, usize)> = versions
            .iter()
            .enumerate()
            .filter_map(|(i, v)| match parser.parse_lenient(v) {
                Ok(version) => Some((version, i)),
                Err(err) => {
                    log::debug!("Skipping {:?} while sorting: {}", v, err);
                    None
                }
            })
            .collect();

        parsed.sort_by(|(a, _), (b, _)| {
            if ascending {
                a.cmp(b)
            } else {
                b.cmp(a)
            }
        });

        // Return original versions in sorted order
        parsed
            .into_iter()
            .map(|(_, i)| versions[i].to_string())
            .collect()
    }
}
