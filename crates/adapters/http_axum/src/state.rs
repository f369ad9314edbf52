//! Shared application state for axum handlers.

use std::sync::Arc;
use std::time::Duration;

use tokamak_console_app::controller::RenderDirective;
use tokamak_console_app::ports::ResourceFetcher;
use tokamak_console_app::services::console_service::ConsoleService;
use tokamak_console_domain::resource::Resource;

use crate::pending::PendingViews;
use crate::render::HtmlRenderer;

/// How long a request waits for its view to settle before showing the loader.
pub const DEFAULT_SETTLE_TIMEOUT: Duration = Duration::from_millis(1500);

/// Application state shared across all axum handlers.
///
/// Generic over the fetcher to avoid dynamic dispatch. `Clone` is implemented
/// manually so `F` does not need to be `Clone`; only the `Arc` wrappers are
/// cloned.
pub struct AppState<F> {
    /// Mounts one controller per view request.
    pub console: Arc<ConsoleService<F>>,
    /// Turns directives into pages.
    pub renderer: Arc<HtmlRenderer>,
    /// Upper bound on the time a page waits for its fetch.
    pub settle_timeout: Duration,
    /// Views still loading when their last request gave up waiting.
    pub pending: Arc<PendingViews>,
}

impl<F> Clone for AppState<F> {
    fn clone(&self) -> Self {
        Self {
            console: Arc::clone(&self.console),
            renderer: Arc::clone(&self.renderer),
            settle_timeout: self.settle_timeout,
            pending: Arc::clone(&self.pending),
        }
    }
}

impl<F> AppState<F> {
    /// Create a new application state with the default renderer and timeout.
    pub fn new(console: ConsoleService<F>) -> Self {
        Self {
            console: Arc::new(console),
            renderer: Arc::new(HtmlRenderer::default()),
            settle_timeout: DEFAULT_SETTLE_TIMEOUT,
            pending: Arc::new(PendingViews::default()),
        }
    }

    #[must_use]
    pub fn with_renderer(mut self, renderer: HtmlRenderer) -> Self {
        self.renderer = Arc::new(renderer);
        self
    }

    #[must_use]
    pub fn with_settle_timeout(mut self, settle_timeout: Duration) -> Self {
        self.settle_timeout = settle_timeout;
        self
    }

    /// Mount the view of `R` and wait for its directive.
    ///
    /// Returns [`RenderDirective::ShowLoader`] when the fetch outlives
    /// [`Self::settle_timeout`]. The controller then stays parked in
    /// [`Self::pending`], and the next request for the view resumes it rather
    /// than mounting again. A settled controller is released.
    pub async fn decide<R>(&self) -> RenderDirective<R>
    where
        R: Resource,
        F: ResourceFetcher<R> + Send + Sync + 'static,
    {
        let controller = self.pending.checkout(|| self.console.mount::<R>());
        match controller.settled_within(self.settle_timeout).await {
            Some(directive) => {
                self.pending.release(&controller);
                directive
            }
            None => {
                tracing::debug!(resource = %R::KIND, "view still loading, rendering loader");
                controller.current_decision()
            }
        }
    }
}
