//! Dashboard pages for the three resource lists.

use axum::extract::State;
use axum::response::Html;

use tokamak_console_app::ports::{ListRenderer, ResourceFetcher};
use tokamak_console_domain::authority::Authority;
use tokamak_console_domain::resource::Resource;
use tokamak_console_domain::role::Role;
use tokamak_console_domain::scope::Scope;

use crate::error::ApiError;
use crate::state::AppState;

async fn render<R, F>(state: &AppState<F>) -> Result<Html<String>, ApiError>
where
    R: Resource,
    F: ResourceFetcher<R> + Send + Sync + 'static,
{
    let directive = state.decide::<R>().await;
    let view = state.console.view(R::KIND);
    Ok(Html(state.renderer.render(view, &directive)?))
}

/// `GET /authorities`
pub async fn authorities<F>(State(state): State<AppState<F>>) -> Result<Html<String>, ApiError>
where
    F: ResourceFetcher<Authority> + Send + Sync + 'static,
{
    render::<Authority, F>(&state).await
}

/// `GET /roles`
pub async fn roles<F>(State(state): State<AppState<F>>) -> Result<Html<String>, ApiError>
where
    F: ResourceFetcher<Role> + Send + Sync + 'static,
{
    render::<Role, F>(&state).await
}

/// `GET /scopes`
pub async fn scopes<F>(State(state): State<AppState<F>>) -> Result<Html<String>, ApiError>
where
    F: ResourceFetcher<Scope> + Send + Sync + 'static,
{
    render::<Scope, F>(&state).await
}
