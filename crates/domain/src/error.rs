//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`ConsoleError`] via `#[from]`. Fetch failures never travel as errors:
//! they are folded into an [`ErrorInfo`](crate::envelope::ErrorInfo) inside a
//! rejected envelope before they reach the application layer.

/// Base error for domain operations.
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    /// A domain invariant was violated.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// An identifier could not be parsed.
    #[error("invalid identifier")]
    Id(#[from] IdError),
}

/// Invariant violations detected when building a resource.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The resource name is missing or empty.
    #[error("name must not be empty")]
    EmptyName,
}

/// Identifier parsing failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdError {
    /// The identifier does not start with the prefix of its resource.
    #[error("identifier {value:?} must start with {expected:?}")]
    Prefix {
        expected: &'static str,
        value: String,
    },

    /// The identifier has the right prefix but nothing after it.
    #[error("identifier {value:?} has an empty body")]
    EmptyBody { value: String },
}
