//! JSON API handlers.

#[allow(clippy::missing_errors_doc)]
pub mod views;

use axum::Router;
use axum::routing::get;

use tokamak_console_app::ports::ConsoleFetcher;

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<F: ConsoleFetcher>() -> Router<AppState<F>> {
    Router::new().route("/views/{kind}", get(views::directive::<F>))
}
