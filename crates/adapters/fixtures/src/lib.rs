//! # tokamak-console-adapter-fixtures
//!
//! In-memory fetcher for development and tests. Serves a [`Catalog`] with
//! optional simulated latency and per-collection forced failures, so every
//! view state (loader, error, empty, table) can be reproduced without a
//! Tokamak backend.
//!
//! ## Dependency rule
//!
//! Depends on `tokamak-console-app` (port traits) and `tokamak-console-domain`
//! only.

mod catalog;
mod config;

use std::collections::HashSet;
use std::time::Duration;

use tokamak_console_app::ports::ResourceFetcher;
use tokamak_console_domain::authority::{AuthoritiesRepresentation, Authority};
use tokamak_console_domain::envelope::{ErrorInfo, ResultEnvelope};
use tokamak_console_domain::resource::{ListRepresentation, Resource, ResourceKind};
use tokamak_console_domain::role::{Role, RolesRepresentation};
use tokamak_console_domain::scope::{Scope, ScopesRepresentation};

pub use catalog::Catalog;
pub use config::FixtureConfig;

/// Code attached to forced failures.
pub const FORCED_FAILURE_CODE: &str = "FIXTURE-503";

/// Fetcher answering from an in-memory [`Catalog`].
#[derive(Debug, Clone, Default)]
pub struct FixtureFetcher {
    catalog: Catalog,
    latency: Duration,
    failing: HashSet<ResourceKind>,
}

impl FixtureFetcher {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            latency: Duration::ZERO,
            failing: HashSet::new(),
        }
    }

    /// Demo catalog shaped by `config`.
    #[must_use]
    pub fn from_config(config: &FixtureConfig) -> Self {
        config
            .fail
            .iter()
            .fold(
                Self::new(Catalog::demo()).with_latency(config.latency()),
                |fetcher, kind| fetcher.failing(*kind),
            )
    }

    /// Delay every fetch by `latency`.
    #[must_use]
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Reject every fetch of `kind`.
    #[must_use]
    pub fn failing(mut self, kind: ResourceKind) -> Self {
        self.failing.insert(kind);
        self
    }

    async fn respond<R: Resource>(&self, items: Option<&Vec<R>>) -> ResultEnvelope<R::List> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        if self.failing.contains(&R::KIND) {
            tracing::debug!(resource = %R::KIND, "serving forced failure");
            return ResultEnvelope::failure(
                ErrorInfo::new(format!("{} are unavailable", R::KIND))
                    .with_code(FORCED_FAILURE_CODE),
            );
        }

        ResultEnvelope::accepted(<R::List as ListRepresentation<R>>::from_items(
            items.cloned(),
        ))
    }
}

impl ResourceFetcher<Authority> for FixtureFetcher {
    async fn list(&self) -> ResultEnvelope<AuthoritiesRepresentation> {
        self.respond(self.catalog.authorities.as_ref()).await
    }
}

impl ResourceFetcher<Role> for FixtureFetcher {
    async fn list(&self) -> ResultEnvelope<RolesRepresentation> {
        self.respond(self.catalog.roles.as_ref()).await
    }
}

impl ResourceFetcher<Scope> for FixtureFetcher {
    async fn list(&self) -> ResultEnvelope<ScopesRepresentation> {
        self.respond(self.catalog.scopes.as_ref()).await
    }
}
