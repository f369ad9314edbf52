//! Controllers kept alive between requests while their fetch is in flight.
//!
//! A page that times out waiting for its view renders the loader and parks
//! the controller here. The loader's refresh picks the same controller up
//! again, so a slow fetch is awaited across requests instead of being
//! restarted by every one of them.

use std::any::Any;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use tokamak_console_app::controller::ListController;
use tokamak_console_domain::resource::{Resource, ResourceKind};

type Slot = Arc<dyn Any + Send + Sync>;

/// At most one parked controller per view.
#[derive(Default)]
pub struct PendingViews {
    slots: Mutex<HashMap<ResourceKind, Slot>>,
}

impl PendingViews {
    /// The parked controller of `R`, or a freshly mounted one.
    ///
    /// `mount` runs only when nothing is parked for `R::KIND`. The returned
    /// controller stays parked until [`release`](Self::release).
    pub fn checkout<R, F>(
        &self,
        mount: impl FnOnce() -> ListController<R, F>,
    ) -> Arc<ListController<R, F>>
    where
        R: Resource,
        F: Send + Sync + 'static,
    {
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(slot) = slots.get(&R::KIND)
            && let Ok(controller) = Arc::clone(slot).downcast::<ListController<R, F>>()
        {
            tracing::debug!(resource = %R::KIND, "resuming parked view");
            return controller;
        }
        let controller = Arc::new(mount());
        slots.insert(R::KIND, Arc::clone(&controller) as Slot);
        controller
    }

    /// Forget `controller` once it has settled.
    ///
    /// Only removes the slot when it still holds this very controller.
    pub fn release<R, F>(&self, controller: &Arc<ListController<R, F>>)
    where
        R: Resource,
        F: Send + Sync + 'static,
    {
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        let parked = slots
            .get(&R::KIND)
            .is_some_and(|slot| std::ptr::addr_eq(Arc::as_ptr(slot), Arc::as_ptr(controller)));
        if parked {
            slots.remove(&R::KIND);
        }
    }

    /// Whether a controller is parked for `kind`.
    #[must_use]
    pub fn is_parked(&self, kind: ResourceKind) -> bool {
        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&kind)
    }
}
