//! Server-side rendered HTML pages (no JavaScript).

pub mod help;
pub mod lists;

use axum::Router;
use axum::response::Redirect;
use axum::routing::get;

use tokamak_console_app::ports::ConsoleFetcher;

use crate::state::AppState;

/// Build the dashboard sub-router for SSR HTML pages.
pub fn routes<F: ConsoleFetcher>() -> Router<AppState<F>> {
    Router::new()
        .route("/", get(|| async { Redirect::to("/authorities") }))
        .route("/authorities", get(lists::authorities::<F>))
        .route("/roles", get(lists::roles::<F>))
        .route("/scopes", get(lists::scopes::<F>))
        .route("/help", get(help::page::<F>))
}
