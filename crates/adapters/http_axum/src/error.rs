//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use tokamak_console_domain::resource::UnknownResourceKind;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Errors raised by the adapter itself rather than by a view.
///
/// Fetch failures are not API errors: they travel inside the directive as
/// `show_error` with a `200 OK`.
#[derive(Debug)]
pub enum ApiError {
    UnknownResource(UnknownResourceKind),
    Render(askama::Error),
}

impl From<UnknownResourceKind> for ApiError {
    fn from(err: UnknownResourceKind) -> Self {
        Self::UnknownResource(err)
    }
}

impl From<askama::Error> for ApiError {
    fn from(err: askama::Error) -> Self {
        Self::Render(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::UnknownResource(err) => (StatusCode::NOT_FOUND, err.to_string()),
            Self::Render(err) => {
                tracing::error!(error = %err, "failed to render page");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "failed to render page".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
