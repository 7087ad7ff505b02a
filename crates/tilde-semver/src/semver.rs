//! Semver facade providing high-level version operations

use thiserror::Error;

use crate::constraint::{Constraint, ConstraintError};
use crate::version::Version;
use crate::version_parser::VersionError;

/// Error type for the set-level operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SemverError {
    #[error(transparent)]
    Version(#[from] VersionError),
    #[error(transparent)]
    Constraint(#[from] ConstraintError),
    #[error("No version satisfies constraints: {constraints}")]
    NoSolution { constraints: String },
}

/// Main facade for string-based versioning operations
pub struct Semver;

impl Semver {
    /// Check if a version satisfies a comma-separated list of constraints
    pub fn satisfies(version: &str, constraints: &str) -> bool {
        let version = match Version::parse(version) {
            Ok(v) => v,
            Err(_) => return false,
        };

        let constraints = match Self::parse_constraints(constraints) {
            Ok(c) => c,
            Err(_) => return false,
        };

        constraints.iter().all(|c| c.matches(&version))
    }

    /// Return all versions that satisfy the given constraints.
    ///
    /// Versions that fail to parse are skipped.
    pub fn satisfied_by(versions: &[&str], constraints: &str) -> Vec<String> {
        let constraints = match Self::parse_constraints(constraints) {
            Ok(c) => c,
            Err(_) => return Vec::new(),
        };

        versions
            .iter()
            .filter_map(|v| {
                let version = Version::parse(v).ok()?;
                if constraints.iter().all(|c| c.matches(&version)) {
                    Some(v.to_string())
                } else {
                    None
                }
            })
            .collect()
    }

    /// Parse a comma-separated conjunction such as `">= 1.0, < 2.0"`
    pub fn parse_constraints(constraints: &str) -> Result<Vec<Constraint>, ConstraintError> {
        constraints.split(',').map(Constraint::parse).collect()
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
        // Parsed versions with their original index
        let mut parsed: Vec<(Version, usize)> = versions
            .iter()
            .enumerate()
            .filter_map(|(i, v)| Some((Version::parse(v).ok()?, i)))
            .collect();

        parsed.sort_by(|(a, _), (b, _)| if ascending { a.cmp(b) } else { b.cmp(a) });

        parsed
            .into_iter()
            .map(|(_, i)| versions[i].to_string())
            .collect()
    }
}
