//! Constraint types for version matching

mod bound;
pub mod constraint;
mod operator;
mod selection;

pub use bound::Bound;
pub use constraint::{Constraint, ConstraintError, IntoConstraint};
pub use operator::{InvalidOperatorError, Operator};
