//! Integration tests for tilde-semver crate
//!
//! These exercise the public API the way a dependency resolver would:
//! raw requirement strings in, concrete versions out.

use tilde_semver::{Constraint, IdentifierKind, Semver, SemverError, Version};

fn v(s: &str) -> Version {
    Version::parse(s).unwrap()
}

#[test]
fn test_pre_release_precedence() {
    assert!(v("1.0.0-alpha") < v("1.0.0"));
    assert!(v("1.0.0-alpha") < v("1.0.0-alpha.1"));
    assert!(v("1.0.0-alpha.1") < v("1.0.0-alpha.beta"));
}

#[test]
fn test_greedy_match_guard() {
    let lower = Constraint::parse(">= 1.0.0").unwrap();
    assert!(!lower.satisfies("2.0.0-alpha").unwrap());

    let pre_lower = Constraint::parse(">= 2.0.0-alpha").unwrap();
    assert!(pre_lower.satisfies("2.0.0-alpha").unwrap());
}

#[test]
fn test_approximate_ranges() {
    let minor = Constraint::parse("~> 2.1").unwrap();
    assert!(minor.satisfies("2.1.0").unwrap());
    assert!(minor.satisfies("2.9.9").unwrap());
    assert!(!minor.satisfies("3.0.0").unwrap());

    let patch = Constraint::parse("~> 2.1.3").unwrap();
    assert!(patch.satisfies("2.1.3").unwrap());
    assert!(patch.satisfies("2.1.4000").unwrap());
    assert!(!patch.satisfies("2.2.0").unwrap());
}

#[test]
fn test_satisfy_all() {
    let result = Constraint::satisfy_all([">= 1.0.0", "< 2.0.0"], ["0.9.0", "1.5.0", "2.0.0"]).unwrap();
    assert_eq!(result, vec![v("1.5.0")]);
}

#[test]
fn test_satisfy_best() {
    let best = Constraint::satisfy_best([">= 1.0.0"], ["1.0.0", "1.2.0", "1.1.0"]).unwrap();
    assert_eq!(best.to_string(), "1.2.0");
}

#[test]
fn test_satisfy_best_no_solution() {
    let result = Constraint::satisfy_best(["~> 3.0"], ["1.0.0", "2.5.0"]);
    assert!(matches!(result, Err(SemverError::NoSolution { .. })));
}

#[test]
fn test_malformed_input() {
    assert!(Version::parse("hello").is_err());
    assert!(Version::parse("1.0.0.0.0").is_err());
    assert!(Constraint::parse("hello").is_err());
    assert!(Constraint::parse("1.0.0.0.0").is_err());
    assert!(Constraint::parse("%% 1.0").is_err());
    assert!(Constraint::parse("=>").is_err());
}

#[test]
fn test_resolve_from_mixed_inputs() {
    // Requirements coming from several dependents, one of them unconstrained
    let requirements: Vec<Option<&str>> = vec![Some("~> 1.4"), None, Some("< 1.9")];
    let published = vec![
        "1.3.0".to_string(),
        "1.4.2".to_string(),
        "1.8.0".to_string(),
        "1.8.1-rc.1".to_string(),
        "1.9.0".to_string(),
        "2.0.0".to_string(),
    ];

    let best = Constraint::satisfy_best(requirements, &published).unwrap();
    assert_eq!(best, v("1.8.0"));
}

#[test]
fn test_identifiers_and_rendering() {
    let version = v("3.0.0-rc.2+sha.abc123");
    assert_eq!(version.identifiers(IdentifierKind::PreRelease).len(), 2);
    assert_eq!(version.identifiers(IdentifierKind::Build).len(), 2);
    assert_eq!(version.to_string(), "3.0.0-rc.2+sha.abc123");

    let constraint = Constraint::parse("~>1.2").unwrap();
    assert_eq!(constraint.to_string(), "~> 1.2");
}

#[test]
fn test_facade_agrees_with_constraints() {
    let versions = ["0.9.0", "1.5.0", "2.0.0"];
    assert_eq!(Semver::satisfied_by(&versions, ">= 1.0.0, < 2.0.0"), vec!["1.5.0"]);
    assert_eq!(Semver::rsort(&versions), vec!["2.0.0", "1.5.0", "0.9.0"]);
}
