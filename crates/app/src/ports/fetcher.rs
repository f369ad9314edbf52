//! Resource fetcher port. Retrieves one collection from the backend.

use std::future::Future;
use std::sync::Arc;

use tokamak_console_domain::authority::Authority;
use tokamak_console_domain::envelope::ResultEnvelope;
use tokamak_console_domain::resource::Resource;
use tokamak_console_domain::role::Role;
use tokamak_console_domain::scope::Scope;

/// Fetches the full list of `R` from wherever the console's data lives.
///
/// The returned future always settles into a [`ResultEnvelope`]: transport
/// failures, bad status codes and decoding problems must be folded into a
/// rejected envelope by the implementation. The controller never sees a Rust
/// error from this port.
pub trait ResourceFetcher<R: Resource> {
    /// Fetch the collection.
    fn list(&self) -> impl Future<Output = ResultEnvelope<R::List>> + Send;
}

impl<R: Resource, T: ResourceFetcher<R> + Send + Sync> ResourceFetcher<R> for Arc<T> {
    fn list(&self) -> impl Future<Output = ResultEnvelope<R::List>> + Send {
        ResourceFetcher::<R>::list(&**self)
    }
}

/// A fetcher for every collection the console lists.
///
/// Blanket-implemented; use it as a bound instead of spelling out the three
/// [`ResourceFetcher`] impls.
pub trait ConsoleFetcher:
    ResourceFetcher<Authority> + ResourceFetcher<Role> + ResourceFetcher<Scope> + Send + Sync + 'static
{
}

impl<T> ConsoleFetcher for T where
    T: ResourceFetcher<Authority>
        + ResourceFetcher<Role>
        + ResourceFetcher<Scope>
        + Send
        + Sync
        + 'static
{
}
