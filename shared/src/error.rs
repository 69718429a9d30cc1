//! Model validation errors

use thiserror::Error;

/// A local model violates a domain rule
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    #[error("{0} must not be empty")]
    MissingField(&'static str),

    #[error("a secondary color requires a primary color")]
    SecondaryWithoutPrimary,

    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f64 },

    #[error("remaining weight {remaining}g exceeds initial weight {initial}g")]
    RemainingExceedsInitial { remaining: f64, initial: f64 },
}
