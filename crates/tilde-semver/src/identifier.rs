//! Pre-release and build identifiers

use std::cmp::Ordering;
use std::fmt;

/// Which dotted suffix of a version to split into identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentifierKind {
    /// The part after `-`
    PreRelease,
    /// The part after `+`
    Build,
}

/// A single dot-separated token of a pre-release or build suffix
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Identifier {
    /// All-digit token that fits in a `u64`
    Numeric(u64),
    /// Anything else
    AlphaNumeric(String),
}

impl Identifier {
    /// Classify a raw token.
    ///
    /// Digits with a leading zero stay alphanumeric so that distinct tokens
    /// never compare equal.
    pub fn parse(token: &str) -> Self {
        let canonical = token == "0" || !token.starts_with('0');
        if canonical && !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(n) = token.parse::<u64>() {
                return Identifier::Numeric(n);
            }
        }
        Identifier::AlphaNumeric(token.to_string())
    }

    /// Check if this is a numeric identifier
    pub fn is_numeric(&self) -> bool {
        matches!(self, Identifier::Numeric(_))
    }
}

impl Ord for Identifier {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Identifier::Numeric(a), Identifier::Numeric(b)) => a.cmp(b),
            (Identifier::Numeric(_), Identifier::AlphaNumeric(_)) => Ordering::Less,
            (Identifier::AlphaNumeric(_), Identifier::Numeric(_)) => Ordering::Greater,
            (Identifier::AlphaNumeric(a), Identifier::AlphaNumeric(b)) => a.cmp(b),
        }
    }
}

impl PartialOrd for Identifier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Numeric(n) => write!(f, "{}", n),
            Identifier::AlphaNumeric(s) => write!(f, "{}", s),
        }
    }
}

/// Split a dotted suffix into identifiers
pub(crate) fn split(suffix: Option<&str>) -> Vec<Identifier> {
    match suffix {
        Some(s) if !s.is_empty() => s.split('.').map(Identifier::parse).collect(),
        _ => Vec::new(),
    }
}

/// Compare two identifier sequences.
///
/// Position by position; when one sequence is a prefix of the other the
/// shorter one sorts first.
pub(crate) fn compare_sequences(a: &[Identifier], b: &[Identifier]) -> Ordering {
    for (x, y) in a.iter().zip(b.iter()) {
        match x.cmp(y) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    a.len().cmp(&b.len())
}
