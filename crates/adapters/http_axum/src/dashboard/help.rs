//! Static help page the list views link to.

use askama::Template;
use axum::extract::State;
use axum::response::Html;

use tokamak_console_domain::resource::ResourceKind;

use crate::error::ApiError;
use crate::render::Layout;
use crate::state::AppState;

const SECTIONS: [(ResourceKind, &str); 3] = [
    (
        ResourceKind::Authorities,
        "An authority is an OAuth2 authorization server configuration. It owns \
         the signing keys and token lifetimes used when apps request access.",
    ),
    (
        ResourceKind::Roles,
        "A role groups permissions granted to accounts. Accounts inherit every \
         permission of every role assigned to them.",
    ),
    (
        ResourceKind::Scopes,
        "A scope names a slice of access an app can request from an authority, \
         such as reading a user's profile.",
    ),
];

struct HelpSection {
    kind: ResourceKind,
    title: &'static str,
    text: &'static str,
}

/// Help page template, one anchored section per view.
#[derive(Template)]
#[template(path = "help.html")]
struct HelpTemplate<'a> {
    layout: Layout<'a>,
    sections: Vec<HelpSection>,
}

/// `GET /help`
pub async fn page<F>(State(state): State<AppState<F>>) -> Result<Html<String>, ApiError> {
    let sections = SECTIONS
        .into_iter()
        .map(|(kind, text)| HelpSection {
            kind,
            title: state.console.view(kind).title,
            text,
        })
        .collect();
    let template = HelpTemplate {
        layout: state.renderer.layout("Help", None, false),
        sections,
    };
    Ok(Html(template.render()?))
}
