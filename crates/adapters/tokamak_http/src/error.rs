//! Tokamak client error types.

use tokamak_console_domain::envelope::ErrorInfo;

/// Errors raised while talking to the Tokamak API.
///
/// None of these reach the controller: [`ClientError::into_errors`] turns
/// them into the `errors` of a rejected envelope.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The underlying HTTP client could not be configured.
    #[error("failed to build HTTP client")]
    Build(#[source] reqwest::Error),

    /// Connection, TLS, timeout or body-read failure.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-2xx status.
    #[error("HTTP {status}")]
    Status {
        status: u16,
        /// Errors parsed from the response body, possibly none.
        errors: Vec<ErrorInfo>,
    },

    /// A 2xx body that is not the expected list representation.
    #[error("failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),
}

impl ClientError {
    /// The errors to report in a rejected envelope. Never empty.
    #[must_use]
    pub fn into_errors(self) -> Vec<ErrorInfo> {
        match self {
            Self::Status { errors, .. } if !errors.is_empty() => errors,
            other => vec![ErrorInfo::new(other.to_string())],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_keep_errors_parsed_from_body() {
        let err = ClientError::Status {
            status: 403,
            errors: vec![ErrorInfo::new("forbidden").with_code("AUTH-403")],
        };

        assert_eq!(
            err.into_errors(),
            vec![ErrorInfo::new("forbidden").with_code("AUTH-403")]
        );
    }

    #[test]
    fn should_fall_back_to_status_line_when_body_has_no_errors() {
        let err = ClientError::Status {
            status: 502,
            errors: vec![],
        };

        assert_eq!(err.into_errors(), vec![ErrorInfo::new("HTTP 502")]);
    }

    #[test]
    fn should_use_decode_error_text_as_message() {
        let json_err = serde_json::from_str::<serde_json::Value>("{{bad").unwrap_err();
        let err = ClientError::Decode(json_err);

        let errors = err.into_errors();

        assert_eq!(errors.len(), 1);
        assert!(
            errors[0]
                .message
                .starts_with("failed to decode response body:")
        );
    }
}
