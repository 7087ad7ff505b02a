//! Semantic version value type

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::identifier::{self, Identifier, IdentifierKind};
use crate::version_parser::{ParsedVersion, VersionError, VersionParser};

/// An immutable semantic version (`major.minor.patch[-pre_release][+build]`)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
    pre_release: Option<String>,
    build: Option<String>,
}

impl Version {
    /// Create a normal release
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            pre_release: None,
            build: None,
        }
    }

    /// Create a version from all five components.
    ///
    /// Empty suffixes are treated as absent; anything else must be a valid
    /// dotted identifier list.
    pub fn from_parts(
        major: u64,
        minor: u64,
        patch: u64,
        pre_release: Option<&str>,
        build: Option<&str>,
    ) -> Result<Self, VersionError> {
        let parser = VersionParser::new();
        let check = |suffix: Option<&str>| -> Result<Option<String>, VersionError> {
            match suffix {
                None | Some("") => Ok(None),
                Some(s) if parser.is_valid_identifiers(s) => Ok(Some(s.to_string())),
                Some(s) => Err(VersionError::InvalidFormat(s.to_string())),
            }
        };

        Ok(Version {
            major,
            minor,
            patch,
            pre_release: check(pre_release)?,
            build: check(build)?,
        })
    }

    /// Parse a version string
    pub fn parse(version: &str) -> Result<Self, VersionError> {
        let parsed = VersionParser::new().parse_version(version)?;
        Ok(Self::from(parsed))
    }

    /// Return `version` as a `Version`, parsing it if it is a string
    pub fn coerce<V: IntoVersion>(version: V) -> Result<Self, VersionError> {
        version.into_version()
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

    pub fn pre_release(&self) -> Option<&str> {
        self.pre_release.as_deref()
    }

    pub fn build(&self) -> Option<&str> {
        self.build.as_deref()
    }

    /// Check if this is `0.0.0` with no suffixes, the unconstrained default
    pub fn is_zero(&self) -> bool {
        self.major == 0
            && self.minor == 0
            && self.patch == 0
            && self.pre_release.is_none()
            && self.build.is_none()
    }

    /// Check if this version carries a pre-release suffix
    pub fn is_pre_release(&self) -> bool {
        self.pre_release.as_deref().map_or(false, |s| !s.is_empty())
    }

    /// Split the pre-release or build suffix into identifiers
    pub fn identifiers(&self, kind: IdentifierKind) -> Vec<Identifier> {
        match kind {
            IdentifierKind::PreRelease => identifier::split(self.pre_release()),
            IdentifierKind::Build => identifier::split(self.build()),
        }
    }

    /// Compare by SemVer precedence only, ignoring build metadata
    pub fn cmp_precedence(&self, other: &Version) -> Ordering {
        self.major
            .cmp(&other.major)
            .then(self.minor.cmp(&other.minor))
            .then(self.patch.cmp(&other.patch))
            .then_with(|| match (self.is_pre_release(), other.is_pre_release()) {
                (false, false) => Ordering::Equal,
                (false, true) => Ordering::Greater,
                (true, false) => Ordering::Less,
                (true, true) => identifier::compare_sequences(
                    &self.identifiers(IdentifierKind::PreRelease),
                    &other.identifiers(IdentifierKind::PreRelease),
                ),
            })
    }

    /// Same release and pre-release, build stripped
    pub(crate) fn without_build(&self) -> Version {
        Version {
            build: None,
            ..self.clone()
        }
    }
}

impl Ord for Version {
    /// Precedence first; versions that differ only in build metadata are
    /// ordered by their build identifiers, absent build first.
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_precedence(other).then_with(|| match (&self.build, &other.build) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(_), Some(_)) => identifier::compare_sequences(
                &self.identifiers(IdentifierKind::Build),
                &other.identifiers(IdentifierKind::Build),
            ),
        })
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<ParsedVersion> for Version {
    fn from(parsed: ParsedVersion) -> Self {
        Version {
            major: parsed.major,
            minor: parsed.minor.unwrap_or(0),
            patch: parsed.patch.unwrap_or(0),
            pre_release: parsed.pre_release.filter(|s| !s.is_empty()),
            build: parsed.build.filter(|s| !s.is_empty()),
        }
    }
}

impl From<(u64, u64, u64)> for Version {
    fn from((major, minor, patch): (u64, u64, u64)) -> Self {
        Version::new(major, minor, patch)
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(pre) = &self.pre_release {
            write!(f, "-{}", pre)?;
        }
        if let Some(build) = &self.build {
            write!(f, "+{}", build)?;
        }
        Ok(())
    }
}

/// Conversion into a [`Version`], parsing strings on the way
pub trait IntoVersion {
    fn into_version(self) -> Result<Version, VersionError>;
}

impl IntoVersion for Version {
    fn into_version(self) -> Result<Version, VersionError> {
        Ok(self)
    }
}

impl IntoVersion for &Version {
    fn into_version(self) -> Result<Version, VersionError> {
        Ok(self.clone())
    }
}

impl IntoVersion for &str {
    fn into_version(self) -> Result<Version, VersionError> {
        Version::parse(self)
    }
}

impl IntoVersion for String {
    fn into_version(self) -> Result<Version, VersionError> {
        Version::parse(&self)
    }
}

impl IntoVersion for &String {
    fn into_version(self) -> Result<Version, VersionError> {
        Version::parse(self)
    }
}
