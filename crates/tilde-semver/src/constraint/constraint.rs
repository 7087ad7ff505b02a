//! Single version constraint implementation

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::{Bound, Operator};
use crate::version::{IntoVersion, Version};
use crate::version_parser::{VersionError, VersionParser};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConstraintError {
    #[error("Invalid constraint string \"{0}\"")]
    InvalidFormat(String),
    #[error(transparent)]
    InvalidVersion(#[from] VersionError),
}

/// A single version constraint (e.g., ">= 1.0.0" or "~> 2.1")
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Constraint {
    operator: Operator,
    version: Version,
    minor: Option<u64>,
    patch: Option<u64>,
}

impl Constraint {
    /// Create a constraint against a fully specified version
    pub fn new(operator: Operator, version: Version) -> Self {
        Constraint {
            operator,
            minor: Some(version.minor()),
            patch: Some(version.patch()),
            version,
        }
    }

    /// Parse a constraint string such as `">= 1.2"` or `"~> 2.0.3"`.
    ///
    /// Non-approximate constraints fill missing minor/patch with 0; `~>`
    /// keeps track of what was written since that decides the range.
    pub fn parse(constraint: &str) -> Result<Self, ConstraintError> {
        let (operator, mut parsed) = VersionParser::new().split_constraint(constraint)?;

        if !operator.is_approximate() {
            parsed.minor = parsed.minor.or(Some(0));
            parsed.patch = parsed.patch.or(Some(0));
        }

        Ok(Constraint {
            operator,
            minor: parsed.minor,
            patch: parsed.patch,
            version: Version::from(parsed),
        })
    }

    /// Return `constraint` as a `Constraint`; `None` gives the default
    pub fn coerce<C: IntoConstraint>(constraint: C) -> Result<Self, ConstraintError> {
        constraint.into_constraint()
    }

    /// Get the operator
    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// Get the version, missing components filled with 0
    pub fn version(&self) -> &Version {
        &self.version
    }

    /// Minor component as written
    pub fn minor(&self) -> Option<u64> {
        self.minor
    }

    /// Patch component as written
    pub fn patch(&self) -> Option<u64> {
        self.patch
    }

    /// Exclusive upper bound of a `~>` constraint
    pub fn upper_bound(&self) -> Option<Bound> {
        match self.operator {
            Operator::Approximate => Some(Bound::approximate(&self.version, self.patch)),
            _ => None,
        }
    }

    /// Check if `version` satisfies this constraint, parsing it first if needed
    pub fn satisfies<V: IntoVersion>(&self, version: V) -> Result<bool, ConstraintError> {
        let version = version.into_version()?;
        Ok(self.matches(&version))
    }

    /// Check if `version` satisfies this constraint
    pub fn matches(&self, version: &Version) -> bool {
        // A release bound never pulls in pre-releases, except from below
        if !self.version.is_zero()
            && version.is_pre_release()
            && !self.version.is_pre_release()
            && !self.operator.is_less_than()
        {
            log::trace!("{} rejects pre-release {}", self, version);
            return false;
        }

        match self.operator {
            Operator::Equal => *version == self.version,
            Operator::GreaterThan => *version > self.version,
            Operator::LessThan => *version < self.version,
            Operator::GreaterThanOrEqual => *version >= self.version,
            Operator::LessThanOrEqual => *version <= self.version,
            Operator::Approximate => {
                *version >= self.version && self.upper_bound().map_or(true, |bound| bound.admits(version))
            }
        }
    }
}

impl Default for Constraint {
    /// `>= 0.0.0`, which admits every version
    fn default() -> Self {
        Constraint::new(Operator::GreaterThanOrEqual, Version::new(0, 0, 0))
    }
}

impl FromStr for Constraint {
    type Err = ConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Constraint::parse(s)
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.operator, self.version.major())?;
        if let Some(minor) = self.minor {
            write!(f, ".{}", minor)?;
        }
        if let Some(patch) = self.patch {
            write!(f, ".{}", patch)?;
        }
        if let Some(pre) = self.version.pre_release() {
            write!(f, "-{}", pre)?;
        }
        if let Some(build) = self.version.build() {
            write!(f, "+{}", build)?;
        }
        Ok(())
    }
}

/// Conversion into a [`Constraint`], parsing strings on the way
pub trait IntoConstraint {
    fn into_constraint(self) -> Result<Constraint, ConstraintError>;
}

impl IntoConstraint for Constraint {
    fn into_constraint(self) -> Result<Constraint, ConstraintError> {
        Ok(self)
    }
}

impl IntoConstraint for &Constraint {
    fn into_constraint(self) -> Result<Constraint, ConstraintError> {
        Ok(self.clone())
    }
}

impl IntoConstraint for &str {
    fn into_constraint(self) -> Result<Constraint, ConstraintError> {
        Constraint::parse(self)
    }
}

impl IntoConstraint for String {
    fn into_constraint(self) -> Result<Constraint, ConstraintError> {
        Constraint::parse(&self)
    }
}

impl IntoConstraint for &String {
    fn into_constraint(self) -> Result<Constraint, ConstraintError> {
        Constraint::parse(self)
    }
}

impl<C: IntoConstraint> IntoConstraint for Option<C> {
    fn into_constraint(self) -> Result<Constraint, ConstraintError> {
        match self {
            Some(constraint) => constraint.into_constraint(),
            None => Ok(Constraint::default()),
        }
    }
}
