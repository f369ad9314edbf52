//! `GET /api/views/{kind}`: the render directive of one view as JSON.

use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use tokamak_console_app::controller::RenderDirective;
use tokamak_console_app::ports::ConsoleFetcher;
use tokamak_console_domain::authority::Authority;
use tokamak_console_domain::resource::{Resource, ResourceKind};
use tokamak_console_domain::role::Role;
use tokamak_console_domain::scope::Scope;

use crate::error::ApiError;
use crate::state::AppState;

/// Response body: which view was mounted and what it decided.
#[derive(Debug, Serialize)]
pub struct ViewResponse<R: Resource> {
    pub resource: ResourceKind,
    pub render: RenderDirective<R>,
}

impl<R: Resource> ViewResponse<R> {
    fn new(render: RenderDirective<R>) -> Self {
        Self {
            resource: R::KIND,
            render,
        }
    }
}

/// Mount the view named by `kind` and return its directive.
pub async fn directive<F: ConsoleFetcher>(
    State(state): State<AppState<F>>,
    Path(kind): Path<String>,
) -> Result<Response, ApiError> {
    let kind: ResourceKind = kind.parse()?;
    let response = match kind {
        ResourceKind::Authorities => {
            Json(ViewResponse::new(state.decide::<Authority>().await)).into_response()
        }
        ResourceKind::Roles => Json(ViewResponse::new(state.decide::<Role>().await)).into_response(),
        ResourceKind::Scopes => {
            Json(ViewResponse::new(state.decide::<Scope>().await)).into_response()
        }
    };
    Ok(response)
}
