//! Version and constraint string parsing

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use thiserror::Error;

use crate::constraint::{ConstraintError, Operator};

/// Error type for version parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    #[error("Invalid version string \"{0}\"")]
    InvalidFormat(String),
}

lazy_static! {
    /// Dot-separated, non-empty identifiers
    static ref IDENTIFIERS_REGEX: &'static str = r"[0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*";

    /// Version grammars, most specific first. Capture groups are always
    /// major, minor, patch, pre-release, build.
    static ref GRAMMARS: Vec<Regex> = vec![
        Regex::new(&format!(
            r"^(\d+)\.(\d+)\.(\d+)(?:-({ids}))?(?:\+({ids}))?$",
            ids = *IDENTIFIERS_REGEX
        )).unwrap(),
        Regex::new(r"^(\d+)\.(\d+)\.(\d+)$").unwrap(),
        Regex::new(r"^(\d+)\.(\d+)$").unwrap(),
        Regex::new(r"^(\d+)$").unwrap(),
    ];

    static ref IDENTIFIERS_RE: Regex = Regex::new(&format!(r"^{}$", *IDENTIFIERS_REGEX)).unwrap();

    // Leading operator, table order decides between `~>` and `~`
    static ref OPERATOR_RE: Regex = Regex::new(r"^(~>|~|>=|<=|=|>|<)\s*(.*)$").unwrap();
}

/// Components of a version string as they were written.
///
/// `minor` and `patch` are `None` when the input left them out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedVersion {
    pub major: u64,
    pub minor: Option<u64>,
    pub patch: Option<u64>,
    pub pre_release: Option<String>,
    pub build: Option<String>,
}

/// Parser for version and constraint strings
#[derive(Debug, Clone, Copy, Default)]
pub struct VersionParser;

impl VersionParser {
    /// Create a new version parser
    pub fn new() -> Self {
        VersionParser
    }

    /// Check if a version string is valid
    pub fn is_valid(&self, version: &str) -> bool {
        self.parse_version(version).is_ok()
    }

    /// Check if a dotted identifier list (pre-release or build) is well formed
    pub fn is_valid_identifiers(&self, identifiers: &str) -> bool {
        IDENTIFIERS_RE.is_match(identifiers)
    }

    /// Parse a version string, keeping track of which components were given
    pub fn parse_version(&self, version: &str) -> Result<ParsedVersion, VersionError> {
        let version = version.trim();
        match_grammars(version).ok_or_else(|| VersionError::InvalidFormat(version.to_string()))
    }

    /// Split a constraint string into its operator and version components.
    ///
    /// A bare version (leading digit) gets the `=` operator.
    pub fn split_constraint(&self, constraint: &str) -> Result<(Operator, ParsedVersion), ConstraintError> {
        let constraint = constraint.trim();
        let invalid = || ConstraintError::InvalidFormat(constraint.to_string());

        let (operator, version) = if constraint.starts_with(|c: char| c.is_ascii_digit()) {
            (Operator::Equal, constraint)
        } else {
            let caps = OPERATOR_RE.captures(constraint).ok_or_else(invalid)?;
            let operator = Operator::from_symbol(&caps[1]).map_err(|_| invalid())?;
            (operator, caps.get(2).map_or("", |m| m.as_str()))
        };

        let parsed = match_grammars(version).ok_or_else(invalid)?;
        Ok((operator, parsed))
    }
}

fn match_grammars(version: &str) -> Option<ParsedVersion> {
    let caps = GRAMMARS.iter().find_map(|re| re.captures(version))?;

    Some(ParsedVersion {
        major: number(&caps, 1)??,
        minor: number(&caps, 2)?,
        patch: number(&caps, 3)?,
        pre_release: caps.get(4).map(|m| m.as_str().to_string()),
        build: caps.get(5).map(|m| m.as_str().to_string()),
    })
}

/// Outer `None` means the digits overflowed, inner `None` means the group
/// did not participate.
fn number(caps: &Captures, index: usize) -> Option<Option<u64>> {
    match caps.get(index) {
        Some(m) => m.as_str().parse::<u64>().ok().map(Some),
        None => Some(None),
    }
}
