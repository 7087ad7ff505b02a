//! Exclusive upper bounds of pessimistic constraints

use std::cmp::Ordering;
use std::fmt;

use crate::identifier::{Identifier, IdentifierKind};
use crate::version::Version;

/// Exclusive upper bound of a `~>` constraint.
///
/// The pre-release and build variants stand for a synthetic identifier
/// appended to `prefix` that sorts above every real identifier, so a
/// candidate is below the bound unless it sorts after `prefix` at one of
/// the prefix positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Bound {
    /// Below this version
    Version(Version),
    /// No ceiling, the next release would not fit in a `u64`
    Unbounded,
    /// Below every pre-release of `release` starting with `prefix`
    PreRelease {
        release: Version,
        prefix: Vec<Identifier>,
    },
    /// Below every build of `base` starting with `prefix`
    Build {
        base: Version,
        prefix: Vec<Identifier>,
    },
}

impl Bound {
    /// Compute the upper bound of `~> version`.
    ///
    /// `patch` is the patch component as written; `None` widens the range to
    /// the next major.
    pub fn approximate(version: &Version, patch: Option<u64>) -> Self {
        if patch.is_none() {
            return next_major(version);
        }

        if version.build().is_some() {
            return Bound::Build {
                base: version.without_build(),
                prefix: ceiling_prefix(version.identifiers(IdentifierKind::Build)),
            };
        }

        if version.is_pre_release() {
            return Bound::PreRelease {
                release: Version::new(version.major(), version.minor(), version.patch()),
                prefix: ceiling_prefix(version.identifiers(IdentifierKind::PreRelease)),
            };
        }

        match version.minor().checked_add(1) {
            Some(minor) => Bound::Version(Version::new(version.major(), minor, 0)),
            None => next_major(version),
        }
    }

    /// Check if `version` sorts strictly below this bound
    pub fn admits(&self, version: &Version) -> bool {
        match self {
            Bound::Version(bound) => version < bound,
            Bound::Unbounded => true,
            Bound::PreRelease { release, prefix } => {
                let core = (version.major(), version.minor(), version.patch());
                match core.cmp(&(release.major(), release.minor(), release.patch())) {
                    Ordering::Less => true,
                    Ordering::Greater => false,
                    // A release sorts above all of its pre-releases
                    Ordering::Equal => {
                        version.is_pre_release()
                            && below_ceiling(&version.identifiers(IdentifierKind::PreRelease), prefix)
                    }
                }
            }
            Bound::Build { base, prefix } => match version.cmp_precedence(base) {
                Ordering::Less => true,
                Ordering::Greater => false,
                Ordering::Equal => match version.build() {
                    None => true,
                    Some(_) => below_ceiling(&version.identifiers(IdentifierKind::Build), prefix),
                },
            },
        }
    }
}

fn next_major(version: &Version) -> Bound {
    match version.major().checked_add(1) {
        Some(major) => Bound::Version(Version::new(major, 0, 0)),
        None => Bound::Unbounded,
    }
}

/// Trailing numeric identifiers are replaced by the ceiling, alphanumeric
/// ones keep their place and the ceiling goes after them.
fn ceiling_prefix(mut identifiers: Vec<Identifier>) -> Vec<Identifier> {
    if identifiers.last().map_or(false, Identifier::is_numeric) {
        identifiers.pop();
    }
    identifiers
}

fn below_ceiling(identifiers: &[Identifier], prefix: &[Identifier]) -> bool {
    identifiers
        .iter()
        .zip(prefix.iter())
        .map(|(a, b)| a.cmp(b))
        .find(|ord| *ord != Ordering::Equal)
        .map_or(true, |ord| ord == Ordering::Less)
}

fn write_ceiling(f: &mut fmt::Formatter<'_>, prefix: &[Identifier]) -> fmt::Result {
    for identifier in prefix {
        write!(f, "{}.", identifier)?;
    }
    write!(f, "*")
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::Version(version) => write!(f, "< {}", version),
            Bound::Unbounded => write!(f, "< *"),
            Bound::PreRelease { release, prefix } => {
                write!(f, "< {}-", release)?;
                write_ceiling(f, prefix)
            }
            Bound::Build { base, prefix } => {
                write!(f, "< {}+", base)?;
                write_ceiling(f, prefix)
            }
        }
    }
}
