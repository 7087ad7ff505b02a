//! Operator types for version constraints

use std::fmt;
use thiserror::Error;

/// Comparison operators for version constraints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Equal (=)
    Equal,
    /// Greater than (>)
    GreaterThan,
    /// Less than (<)
    LessThan,
    /// Greater than or equal (>=)
    GreaterThanOrEqual,
    /// Less than or equal (<=)
    LessThanOrEqual,
    /// Pessimistic range (~> or ~)
    Approximate,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid operator: {0}")]
pub struct InvalidOperatorError(pub String);

impl Operator {
    /// Parse operator from its symbol
    pub fn from_symbol(s: &str) -> Result<Self, InvalidOperatorError> {
        match s {
            "=" => Ok(Operator::Equal),
            ">" => Ok(Operator::GreaterThan),
            "<" => Ok(Operator::LessThan),
            ">=" => Ok(Operator::GreaterThanOrEqual),
            "<=" => Ok(Operator::LessThanOrEqual),
            "~>" | "~" => Ok(Operator::Approximate),
            _ => Err(InvalidOperatorError(s.to_string())),
        }
    }

    /// Get the string representation of the operator
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Equal => "=",
            Operator::GreaterThan => ">",
            Operator::LessThan => "<",
            Operator::GreaterThanOrEqual => ">=",
            Operator::LessThanOrEqual => "<=",
            Operator::Approximate => "~>",
        }
    }

    /// Get all supported operator symbols, in parse precedence order
    pub fn supported_operators() -> &'static [&'static str] {
        &["~>", "~", ">=", "<=", "=", ">", "<"]
    }

    pub fn is_approximate(&self) -> bool {
        *self == Operator::Approximate
    }

    /// `<` and `<=`, the operators allowed to match pre-releases of a
    /// release bound
    pub fn is_less_than(&self) -> bool {
        matches!(self, Operator::LessThan | Operator::LessThanOrEqual)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_symbol() {
        for symbol in Operator::supported_operators() {
            assert!(Operator::from_symbol(symbol).is_ok(), "{}", symbol);
        }
        assert_eq!(Operator::from_symbol("~").unwrap(), Operator::Approximate);
        assert_eq!(
            Operator::from_symbol("!="),
            Err(InvalidOperatorError("!=".to_string()))
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Operator::Approximate.to_string(), "~>");
        assert_eq!(Operator::GreaterThanOrEqual.to_string(), ">=");
    }

    #[test]
    fn test_less_than_family() {
        assert!(Operator::LessThan.is_less_than());
        assert!(Operator::LessThanOrEqual.is_less_than());
        assert!(!Operator::Equal.is_less_than());
        assert!(!Operator::Approximate.is_less_than());
    }
}
