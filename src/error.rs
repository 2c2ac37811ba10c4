//! Errors of the fallible union operations.

use thiserror::Error;

/// The error returned when no alternative of a union accepts an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum UnionError {
    /// The union has no alternatives, so it has no values to produce.
    #[error("a union without alternatives is uninhabited")]
    Uninhabited,
    /// Every alternative rejected the input.
    #[error("none of the {arity} alternatives accepted the input")]
    NoAlternative { arity: usize },
}
