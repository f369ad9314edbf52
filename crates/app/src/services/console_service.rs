//! Console service: mounts list-view controllers over a shared fetcher.

use std::sync::Arc;

use tokamak_console_domain::authority::Authority;
use tokamak_console_domain::resource::{Resource, ResourceKind};
use tokamak_console_domain::role::Role;
use tokamak_console_domain::scope::Scope;

use crate::controller::{EmptyPolicy, ListController};
use crate::ports::ResourceFetcher;
use crate::views::ListView;

/// Application service that hands out one started controller per mount.
pub struct ConsoleService<F> {
    fetcher: Arc<F>,
    authorities: ListView,
    roles: ListView,
    scopes: ListView,
}

impl<F> ConsoleService<F> {
    /// Create a service with the default view descriptors.
    pub fn new(fetcher: F) -> Self {
        Self::from_arc(Arc::new(fetcher))
    }

    /// Create a service from a fetcher that is already shared elsewhere.
    pub fn from_arc(fetcher: Arc<F>) -> Self {
        Self {
            fetcher,
            authorities: ListView::authorities(),
            roles: ListView::roles(),
            scopes: ListView::scopes(),
        }
    }

    /// Override the empty-state policy of one view.
    #[must_use]
    pub fn with_empty_policy(mut self, kind: ResourceKind, policy: EmptyPolicy) -> Self {
        self.view_mut(kind).empty_policy = policy;
        self
    }

    /// The descriptor of the view for `kind`.
    #[must_use]
    pub fn view(&self, kind: ResourceKind) -> &ListView {
        match kind {
            ResourceKind::Authorities => &self.authorities,
            ResourceKind::Roles => &self.roles,
            ResourceKind::Scopes => &self.scopes,
        }
    }

    fn view_mut(&mut self, kind: ResourceKind) -> &mut ListView {
        match kind {
            ResourceKind::Authorities => &mut self.authorities,
            ResourceKind::Roles => &mut self.roles,
            ResourceKind::Scopes => &mut self.scopes,
        }
    }

    /// Mount the view of `R`: build its controller and start the fetch.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn mount<R>(&self) -> ListController<R, F>
    where
        R: Resource,
        F: ResourceFetcher<R> + Send + Sync + 'static,
    {
        let controller =
            ListController::new(Arc::clone(&self.fetcher), self.view(R::KIND).empty_policy);
        controller.start();
        tracing::debug!(resource = %R::KIND, "view mounted");
        controller
    }

    /// Mount the authorities view.
    pub fn authorities(&self) -> ListController<Authority, F>
    where
        F: ResourceFetcher<Authority> + Send + Sync + 'static,
    {
        self.mount()
    }

    /// Mount the roles view.
    pub fn roles(&self) -> ListController<Role, F>
    where
        F: ResourceFetcher<Role> + Send + Sync + 'static,
    {
        self.mount()
    }

    /// Mount the scopes view.
    pub fn scopes(&self) -> ListController<Scope, F>
    where
        F: ResourceFetcher<Scope> + Send + Sync + 'static,
    {
        self.mount()
    }
}
