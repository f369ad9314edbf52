//! Result envelope: the `{ status, instance, errors }` shape every fetch
//! settles into.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Status string of a successful envelope. Any other status is a failure.
pub const ACCEPTED: &str = "accepted";

/// Status used when a fetcher builds a failed envelope itself.
pub const REJECTED: &str = "rejected";

/// Message shown when a failed envelope carries no error at all.
pub const UNSPECIFIED_MESSAGE: &str = "An unexpected error occurred.";

/// A single user-facing failure reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    pub message: String,
}

impl ErrorInfo {
    /// Error with a message and no code.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }

    /// Attach a server error code such as `ATH-0001`.
    #[must_use]
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Stand-in for a failed envelope whose error list is empty.
    #[must_use]
    pub fn unspecified() -> Self {
        Self::new(UNSPECIFIED_MESSAGE)
    }
}

impl fmt::Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.code {
            Some(code) => write!(f, "{code}: {}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

/// Tagged result of a fetch: accepted with an instance, or failed with errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultEnvelope<C> {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance: Option<C>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ErrorInfo>,
}

impl<C> ResultEnvelope<C> {
    /// Successful envelope carrying `instance`.
    #[must_use]
    pub fn accepted(instance: C) -> Self {
        Self {
            status: ACCEPTED.to_string(),
            instance: Some(instance),
            errors: Vec::new(),
        }
    }

    /// Failed envelope carrying `errors`.
    #[must_use]
    pub fn rejected(errors: Vec<ErrorInfo>) -> Self {
        Self {
            status: REJECTED.to_string(),
            instance: None,
            errors,
        }
    }

    /// Failed envelope with a single error.
    #[must_use]
    pub fn failure(error: ErrorInfo) -> Self {
        Self::rejected(vec![error])
    }

    /// Whether the status is exactly `accepted`.
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        self.status == ACCEPTED
    }

    /// Reduce the envelope to its outcome.
    ///
    /// An accepted envelope yields its (possibly missing) instance. Anything
    /// else yields the first error, or [`ErrorInfo::unspecified`] when the
    /// list is empty.
    ///
    /// # Errors
    ///
    /// Returns the display error when the status is not `accepted`.
    pub fn into_outcome(self) -> Result<Option<C>, ErrorInfo> {
        if self.is_accepted() {
            return Ok(self.instance);
        }
        Err(self
            .errors
            .into_iter()
            .next()
            .unwrap_or_else(ErrorInfo::unspecified))
    }
}
