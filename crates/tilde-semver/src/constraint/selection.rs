//! Filtering and best-match selection over candidate versions

use indexmap::IndexSet;

use super::{Constraint, IntoConstraint};
use crate::semver::SemverError;
use crate::version::{IntoVersion, Version};

impl Constraint {
    /// Return the versions that satisfy every constraint.
    ///
    /// Both inputs are coerced and de-duplicated; the result keeps the
    /// order in which versions were first given. No constraints admit
    /// every version.
    pub fn satisfy_all<C, V>(constraints: C, versions: V) -> Result<Vec<Version>, SemverError>
    where
        C: IntoIterator,
        C::Item: IntoConstraint,
        V: IntoIterator,
        V::Item: IntoVersion,
    {
        let constraints = collect_constraints(constraints)?;
        let versions = collect_versions(versions)?;
        Ok(filter(&constraints, versions))
    }

    /// Return the highest version that satisfies every constraint
    pub fn satisfy_best<C, V>(constraints: C, versions: V) -> Result<Version, SemverError>
    where
        C: IntoIterator,
        C::Item: IntoConstraint,
        V: IntoIterator,
        V::Item: IntoVersion,
    {
        let constraints = collect_constraints(constraints)?;
        let versions = collect_versions(versions)?;

        let best = filter(&constraints, versions).into_iter().max();
        match best {
            Some(version) => {
                log::debug!("Selected {} for [{}]", version, describe(&constraints));
                Ok(version)
            }
            None => Err(SemverError::NoSolution {
                constraints: describe(&constraints),
            }),
        }
    }
}

fn collect_constraints<C>(constraints: C) -> Result<IndexSet<Constraint>, SemverError>
where
    C: IntoIterator,
    C::Item: IntoConstraint,
{
    let constraints = constraints
        .into_iter()
        .map(IntoConstraint::into_constraint)
        .collect::<Result<IndexSet<_>, _>>()?;
    Ok(constraints)
}

fn collect_versions<V>(versions: V) -> Result<IndexSet<Version>, SemverError>
where
    V: IntoIterator,
    V::Item: IntoVersion,
{
    let versions = versions
        .into_iter()
        .map(IntoVersion::into_version)
        .collect::<Result<IndexSet<_>, _>>()?;
    Ok(versions)
}

fn filter(constraints: &IndexSet<Constraint>, versions: IndexSet<Version>) -> Vec<Version> {
    let total = versions.len();
    let satisfied: Vec<Version> = versions
        .into_iter()
        .filter(|version| match constraints.iter().find(|c| !c.matches(version)) {
            Some(rejected) => {
                log::trace!("{} does not satisfy {}", version, rejected);
                false
            }
            None => true,
        })
        .collect();

    log::debug!(
        "{} of {} versions satisfy [{}]",
        satisfied.len(),
        total,
        describe(constraints)
    );
    satisfied
}

fn describe(constraints: &IndexSet<Constraint>) -> String {
    constraints
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
