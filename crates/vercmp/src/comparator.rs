//! Version comparison utilities

use std::cmp::Ordering;

use crate::operator::Operator;
use crate::version_parser::{VersionError, VersionParser};

/// Comparator for comparing version strings
///
/// Each side is extracted from its surrounding text and parsed before
/// comparing, so `"v1.2.3 (stable)"` compares like `"1.2.3"`. A side that
/// cannot be parsed aborts the comparison with its error.
pub struct Comparator;

impl Comparator {
    /// Orders version1 relative to version2
    pub fn compare(version1: &str, version2: &str) -> Result<Ordering, VersionError> {
        let parser = VersionParser::new();
        let left = parser.parse_lenient(version1)?;
        let right = parser.parse_lenient(version2)?;
        Ok(left.cmp(&right))
    }

    /// Like [`Comparator::compare`], as -1, 0 or 1
    pub fn compare_int(version1: &str, version2: &str) -> Result<i32, VersionError> {
        Self::compare(version1, version2).map(|ordering| ordering as i32)
    }

    /// Compare version1 to version2 using the given operator
    pub fn compare_with(version1: &str, operator: Operator, version2: &str) -> Result<bool, VersionError> {
        Self::compare(version1, version2).map(|ordering| operator.accepts(ordering))
    }

    /// Check if version1 > version2
    pub fn greater_than(version1: &str, version2: &str) -> Result<bool, VersionError> {
        Self::compare_with(version1, Operator::GreaterThan, version2)
    }

    /// Check if version1 >= version2
    pub fn greater_than_or_equal_to(version1: &str, version2: &str) -> Result<bool, VersionError> {
        Self::compare_with(version1, Operator::GreaterThanOrEqual, version2)
    }

    /// Check if version1 < version2
    pub fn less_than(version1: &str, version2: &str) -> Result<bool, VersionError> {
        Self::compare_with(version1, Operator::LessThan, version2)
    }

    /// Check if version1 <= version2
    pub fn less_than_or_equal_to(version1: &str, version2: &str) -> Result<bool, VersionError> {
        Self::compare_with(version1, Operator::LessThanOrEqual, version2)
    }

    /// Check if version1 == version2
    pub fn equal_to(version1: &str, version2: &str) -> Result<bool, VersionError> {
        Self::compare_with(version1, Operator::Equal, version2)
    }

    /// Check if version1 != version2
    pub fn not_equal_to(version1: &str, version2: &str) -> Result<bool, VersionError> {
        Self::compare_with(version1, Operator::NotEqual, version2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cmp(a: &str, b: &str) -> i32 {
        Comparator::compare_int(a, b).unwrap()
    }

    #[test]
    fn test_compare() {
        assert_eq!(cmp("1.0.0", "1.0.0"), 0);
        assert_eq!(cmp("1.0.1", "1.0.0"), 1);
        assert_eq!(cmp("1.0.2", "1.2.3"), -1);
        assert_eq!(cmp("1.0.0-alpha", "1.0.0-alpha"), 0);
        assert_eq!(cmp("1.0.0-beta", "1.0.0-alpha"), 1);
        assert_eq!(cmp("1.0.0-alpha", "1.0.0-beta"), -1);
        assert_eq!(cmp("1.0.0-alpha+001", "1.0.0-beta+001"), -1);
        assert_eq!(cmp("1.0.0-beta+001", "1.0.0-alpha+001"), 1);
        assert_eq!(cmp("1.0.0+20130313144700", "1.0.0+20130313144701"), 0);
        assert_eq!(cmp("1.0.0-alpha+001", "1.0.0-alpha+002"), 0);
        assert_eq!(cmp("1.0.0", "1.0.1"), -1);
    }

    #[test]
    fn test_compare_extracts_from_text() {
        assert_eq!(cmp("v1.2.3", "1.2.3"), 0);
        assert_eq!(cmp("release 2.0.0 (lts)", "v1.9.9"), 1);
        assert_eq!(cmp("v1.2.3-rc.1 (stable)", "1.2.3"), -1);
    }

    #[test]
    fn test_compare_major_minor_patch_precedence() {
        assert_eq!(cmp("2.0.0", "1.9.9"), 1);
        assert_eq!(cmp("1.10.0", "1.9.0"), 1);
        assert_eq!(cmp("1.1.10", "1.1.9"), 1);
        assert_eq!(cmp("0.0.1", "0.1.0"), -1);
    }

    #[test]
    fn test_compare_prerelease_ignores_numbers() {
        assert_eq!(cmp("1.0.0-alpha", "0.0.1"), -1);
        assert_eq!(cmp("0.0.1", "5.0.0-rc"), 1);
        assert_eq!(cmp("2.0.0-alpha", "1.0.0-beta"), -1);
    }

    #[test]
    fn test_compare_errors() {
        assert!(matches!(
            Comparator::compare("1.2", "1.2.3"),
            Err(VersionError::Format { .. })
        ));
        assert!(matches!(
            Comparator::compare("1.2.3", "unknown"),
            Err(VersionError::Format { .. })
        ));
        assert!(Comparator::compare_int("", "").is_err());
    }

    #[test]
    fn test_greater_than() {
        assert!(Comparator::greater_than("1.25.0", "1.24.0").unwrap());
        assert!(!Comparator::greater_than("1.25.0", "1.25.0").unwrap());
        assert!(!Comparator::greater_than("1.25.0", "1.26.0").unwrap());
    }

    #[test]
    fn test_greater_than_or_equal_to() {
        assert!(Comparator::greater_than_or_equal_to("1.25.0", "1.24.0").unwrap());
        assert!(Comparator::greater_than_or_equal_to("1.25.0", "1.25.0").unwrap());
        assert!(!Comparator::greater_than_or_equal_to("1.25.0", "1.26.0").unwrap());
    }

    #[test]
    fn test_less_than() {
        assert!(!Comparator::less_than("1.25.0", "1.24.0").unwrap());
        assert!(!Comparator::less_than("1.25.0", "1.25.0").unwrap());
        assert!(Comparator::less_than("1.25.0", "1.26.0").unwrap());
        assert!(Comparator::less_than("1.25.0-beta", "1.25.0").unwrap());
    }

    #[test]
    fn test_less_than_or_equal_to() {
        assert!(!Comparator::less_than_or_equal_to("1.25.0", "1.24.0").unwrap());
        assert!(Comparator::less_than_or_equal_to("1.25.0", "1.25.0").unwrap());
        assert!(Comparator::less_than_or_equal_to("1.25.0", "1.26.0").unwrap());
    }

    #[test]
    fn test_equal_to() {
        assert!(!Comparator::equal_to("1.25.0", "1.24.0").unwrap());
        assert!(Comparator::equal_to("1.25.0", "1.25.0").unwrap());
        assert!(Comparator::equal_to("1.25.0+linux", "1.25.0+darwin").unwrap());
    }

    #[test]
    fn test_not_equal_to() {
        assert!(Comparator::not_equal_to("1.25.0", "1.24.0").unwrap());
        assert!(!Comparator::not_equal_to("1.25.0", "1.25.0").unwrap());
        assert!(Comparator::not_equal_to("1.25.0-rc", "1.25.0").unwrap());
    }

    #[test]
    fn test_compare_with() {
        let op: Operator = "<>".parse().unwrap();
        assert!(Comparator::compare_with("1.25.0", op, "1.24.0").unwrap());
        assert!(Comparator::compare_with("1.25.0", Operator::LessThanOrEqual, "1.25.0").unwrap());
        assert!(Comparator::compare_with("1.x.0", Operator::Equal, "1.0.0").is_err());
    }
}
