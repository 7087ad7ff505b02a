//! Semantic versioning with pessimistic (`~>`) constraints
//!
//! This crate parses SemVer 2.0.0 versions and single-operator constraints,
//! orders versions by precedence, and picks the best release satisfying a
//! set of constraints.

pub mod constraint;
mod identifier;
mod semver;
#[cfg(feature = "serde")]
mod serialize;
mod version;
mod version_parser;

pub use constraint::{Bound, Constraint, ConstraintError, IntoConstraint, InvalidOperatorError, Operator};
pub use identifier::{Identifier, IdentifierKind};
pub use semver::{Semver, SemverError};
pub use version::{IntoVersion, Version};
pub use version_parser::{ParsedVersion, VersionError, VersionParser};
