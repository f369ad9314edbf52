//! List-view load controller.
//!
//! One controller is created per mount of a list view. It fetches its
//! collection at most once and exposes a single render decision derived from
//! its [`LoadState`]:
//!
//! ```text
//! NotStarted --start()--> Loading --accepted--> Loaded(list)
//!                                  \--rejected--> Failed(error)
//! ```
//!
//! `Loaded` and `Failed` are terminal. The fetch runs on a spawned task whose
//! continuation is delivered back through a [`watch`] channel; every
//! transition is a compare-and-set on the current variant, so a second
//! `start()` or a late settlement can never move the state twice.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokamak_console_domain::envelope::{ErrorInfo, ResultEnvelope};
use tokamak_console_domain::list::ResourceList;
use tokamak_console_domain::resource::{ListRepresentation, Resource};

use crate::ports::ResourceFetcher;

/// Lifecycle of one fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<R> {
    NotStarted,
    Loading,
    Loaded(ResourceList<R>),
    Failed(ErrorInfo),
}

impl<R> LoadState<R> {
    /// `true` for `Loaded` and `Failed`.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Loaded(_) | Self::Failed(_))
    }

    /// Reduce a settled envelope to its terminal state.
    ///
    /// An accepted envelope without an instance counts as an absent
    /// collection.
    pub fn from_envelope<C: ListRepresentation<R>>(envelope: ResultEnvelope<C>) -> Self {
        match envelope.into_outcome() {
            Ok(instance) => Self::Loaded(ResourceList::from(instance.and_then(C::into_items))),
            Err(error) => Self::Failed(error),
        }
    }

    /// The render directive for this state under `policy`.
    #[must_use]
    pub fn decide(&self, policy: EmptyPolicy) -> RenderDirective<R>
    where
        R: Clone,
    {
        match self {
            Self::NotStarted | Self::Loading => RenderDirective::ShowLoader,
            Self::Failed(error) => RenderDirective::ShowError(error.clone()),
            Self::Loaded(list) if policy.is_empty(list) => RenderDirective::ShowEmpty,
            Self::Loaded(list) => RenderDirective::ShowList(list.as_slice().to_vec()),
        }
    }
}

/// What a list page should display.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "directive", content = "data", rename_all = "snake_case")]
pub enum RenderDirective<R> {
    ShowLoader,
    ShowError(ErrorInfo),
    ShowEmpty,
    ShowList(Vec<R>),
}

/// When a loaded collection should render as the empty state.
///
/// The three views disagree on this, so it is configured per view rather
/// than hard-coded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyPolicy {
    /// Empty when the collection is absent or has no items.
    AbsentOrZero,
    /// Empty only when the collection field is absent; `[]` renders a table.
    AbsentOnly,
    /// Never empty; the list renderer always runs.
    Never,
}

impl EmptyPolicy {
    /// Whether `list` should render as the empty state.
    #[must_use]
    pub fn is_empty<T>(self, list: &ResourceList<T>) -> bool {
        match self {
            Self::AbsentOrZero => list.is_empty(),
            Self::AbsentOnly => list.is_absent(),
            Self::Never => false,
        }
    }
}

struct Shared<R> {
    state: watch::Sender<LoadState<R>>,
    active: AtomicBool,
}

impl<R: Resource> Shared<R> {
    fn settle(&self, envelope: ResultEnvelope<R::List>) {
        if !self.active.load(Ordering::Acquire) {
            tracing::debug!(resource = %R::KIND, "discarding settlement after unmount");
            return;
        }
        let next = LoadState::from_envelope(envelope);
        match &next {
            LoadState::Loaded(list) => {
                tracing::debug!(resource = %R::KIND, items = list.len(), "fetch settled");
            }
            LoadState::Failed(error) => {
                tracing::warn!(resource = %R::KIND, error = %error, "fetch failed");
            }
            LoadState::NotStarted | LoadState::Loading => {}
        }
        self.state.send_if_modified(|state| {
            if matches!(state, LoadState::Loading) {
                *state = next;
                true
            } else {
                false
            }
        });
    }
}

/// Fetches one collection per mount and decides what to render.
///
/// Unmounting (explicitly or by dropping the controller) aborts the in-flight
/// fetch and discards any settlement that still arrives.
pub struct ListController<R, F> {
    fetcher: Arc<F>,
    policy: EmptyPolicy,
    shared: Arc<Shared<R>>,
    task: OnceLock<JoinHandle<()>>,
}

impl<R, F> ListController<R, F>
where
    R: Resource,
    F: ResourceFetcher<R> + Send + Sync + 'static,
{
    /// Create a controller in the `NotStarted` state. The fetcher is stored,
    /// not called.
    #[must_use]
    pub fn new(fetcher: Arc<F>, policy: EmptyPolicy) -> Self {
        let (state, _) = watch::channel(LoadState::NotStarted);
        Self {
            fetcher,
            policy,
            shared: Arc::new(Shared {
                state,
                active: AtomicBool::new(true),
            }),
            task: OnceLock::new(),
        }
    }

    /// Begin the fetch.
    ///
    /// Only a controller in `NotStarted` moves to `Loading` and spawns the
    /// fetch; every other call is a no-op. Returns whether this call started
    /// the fetch.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn start(&self) -> bool {
        if !self.shared.active.load(Ordering::Acquire) {
            return false;
        }
        let began = self.shared.state.send_if_modified(|state| {
            if matches!(state, LoadState::NotStarted) {
                *state = LoadState::Loading;
                true
            } else {
                false
            }
        });
        if !began {
            tracing::debug!(resource = %R::KIND, "start ignored, already started");
            return false;
        }

        tracing::debug!(resource = %R::KIND, "fetch started");
        let fetcher = Arc::clone(&self.fetcher);
        let shared = Arc::clone(&self.shared);
        let handle = tokio::spawn(async move {
            let envelope = ResourceFetcher::<R>::list(&*fetcher).await;
            shared.settle(envelope);
        });
        // Only the call that won the NotStarted -> Loading transition gets here.
        let _ = self.task.set(handle);
        true
    }
}

impl<R, F> ListController<R, F>
where
    R: Resource,
{
    /// Snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> LoadState<R> {
        self.shared.state.borrow().clone()
    }

    /// The render directive for the current state.
    #[must_use]
    pub fn current_decision(&self) -> RenderDirective<R> {
        self.shared.state.borrow().decide(self.policy)
    }

    /// Observe every state transition.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<LoadState<R>> {
        self.shared.state.subscribe()
    }

    /// Wait for the terminal state and return its decision.
    ///
    /// Returns the current decision early if the controller is unmounted
    /// while waiting. Never resolves for a controller that was not started.
    pub async fn settled(&self) -> RenderDirective<R> {
        let mut rx = self.shared.state.subscribe();
        let active = &self.shared.active;
        let waited = rx
            .wait_for(|state| state.is_terminal() || !active.load(Ordering::Acquire))
            .await
            .map(|state| state.decide(self.policy));
        waited.unwrap_or_else(|_| self.current_decision())
    }

    /// Like [`settled`](Self::settled) but gives up after `timeout`.
    pub async fn settled_within(&self, timeout: Duration) -> Option<RenderDirective<R>> {
        tokio::time::timeout(timeout, self.settled()).await.ok()
    }

    /// Whether the controller has been unmounted.
    #[must_use]
    pub fn is_unmounted(&self) -> bool {
        !self.shared.active.load(Ordering::Acquire)
    }

    /// Tear the controller down: abort the fetch and ignore its result.
    pub fn unmount(&self) {
        if !self.shared.active.swap(false, Ordering::AcqRel) {
            return;
        }
        if let Some(task) = self.task.get() {
            task.abort();
        }
        // Wake anyone in `settled()` so they observe the unmount.
        self.shared.state.send_modify(|_| {});
        tracing::debug!(resource = %R::KIND, "controller unmounted");
    }
}

impl<R, F> Drop for ListController<R, F> {
    fn drop(&mut self) {
        self.shared.active.store(false, Ordering::Release);
        if let Some(task) = self.task.get() {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::sync::atomic::AtomicUsize;

    use tokamak_console_domain::authority::{AuthoritiesRepresentation, Authority};
    use tokamak_console_domain::role::{Role, RolesRepresentation};
    use tokamak_console_domain::scope::{Scope, ScopesRepresentation};
    use tokio::sync::oneshot;

    /// Fetcher that returns a canned envelope after an optional delay and
    /// counts how often it was called.
    struct CannedFetcher<C> {
        envelope: ResultEnvelope<C>,
        delay: Option<Duration>,
        calls: AtomicUsize,
    }

    impl<C> CannedFetcher<C> {
        fn new(envelope: ResultEnvelope<C>) -> Self {
            Self {
                envelope,
                delay: None,
                calls: AtomicUsize::new(0),
            }
        }

        fn delayed(envelope: ResultEnvelope<C>, delay: Duration) -> Self {
            Self {
                delay: Some(delay),
                ..Self::new(envelope)
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl<R: Resource> ResourceFetcher<R> for CannedFetcher<R::List>
    where
        R::List: Clone,
    {
        fn list(&self) -> impl Future<Output = ResultEnvelope<R::List>> + Send {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let envelope = self.envelope.clone();
            let delay = self.delay;
            async move {
                if let Some(delay) = delay {
                    tokio::time::sleep(delay).await;
                }
                envelope
            }
        }
    }

    /// Fetcher whose result is released by the test through a oneshot.
    struct GatedFetcher<C> {
        gate: Mutex<Option<oneshot::Receiver<ResultEnvelope<C>>>>,
    }

    impl<C> GatedFetcher<C> {
        fn new() -> (Self, oneshot::Sender<ResultEnvelope<C>>) {
            let (tx, rx) = oneshot::channel();
            (
                Self {
                    gate: Mutex::new(Some(rx)),
                },
                tx,
            )
        }
    }

    impl<R: Resource> ResourceFetcher<R> for GatedFetcher<R::List> {
        fn list(&self) -> impl Future<Output = ResultEnvelope<R::List>> + Send {
            let gate = self.gate.lock().unwrap().take();
            async move {
                match gate {
                    Some(rx) => rx
                        .await
                        .unwrap_or_else(|_| ResultEnvelope::failure(ErrorInfo::new("gate dropped"))),
                    None => ResultEnvelope::failure(ErrorInfo::new("fetched twice")),
                }
            }
        }
    }

    fn scope(id: &str, name: &str) -> Scope {
        Scope::builder()
            .id(id.parse().unwrap())
            .name(name)
            .build()
            .unwrap()
    }

    fn role(name: &str) -> Role {
        Role::builder().name(name).build().unwrap()
    }

    fn authority(name: &str) -> Authority {
        Authority::builder().name(name).build().unwrap()
    }

    fn controller<R: Resource, F: ResourceFetcher<R> + Send + Sync + 'static>(
        fetcher: &Arc<F>,
        policy: EmptyPolicy,
    ) -> ListController<R, F> {
        ListController::new(Arc::clone(fetcher), policy)
    }

    #[tokio::test]
    async fn should_not_call_fetcher_when_constructed() {
        let fetcher = Arc::new(CannedFetcher::new(ResultEnvelope::accepted(
            ScopesRepresentation::default(),
        )));
        let ctrl: ListController<Scope, _> = controller(&fetcher, EmptyPolicy::Never);

        tokio::task::yield_now().await;

        assert_eq!(fetcher.calls(), 0);
        assert_eq!(ctrl.state(), LoadState::NotStarted);
        assert_eq!(ctrl.current_decision(), RenderDirective::ShowLoader);
    }

    #[tokio::test]
    async fn should_move_to_loading_when_started() {
        let (fetcher, _tx) = GatedFetcher::<ScopesRepresentation>::new();
        let fetcher = Arc::new(fetcher);
        let ctrl: ListController<Scope, _> = controller(&fetcher, EmptyPolicy::Never);

        assert!(ctrl.start());

        assert_eq!(ctrl.state(), LoadState::Loading);
    }

    #[tokio::test]
    async fn should_show_list_in_order_when_accepted_with_items() {
        let items = vec![scope("scp_1", "read"), scope("scp_2", "write")];
        let fetcher = Arc::new(CannedFetcher::new(ResultEnvelope::accepted(
            ScopesRepresentation {
                scopes: Some(items.clone()),
            },
        )));
        let ctrl: ListController<Scope, _> = controller(&fetcher, EmptyPolicy::Never);

        ctrl.start();

        assert_eq!(ctrl.settled().await, RenderDirective::ShowList(items));
    }

    #[tokio::test]
    async fn should_show_first_error_when_rejected() {
        let fetcher = Arc::new(CannedFetcher::new(
            ResultEnvelope::<AuthoritiesRepresentation>::rejected(vec![
                ErrorInfo::new("unauthorized"),
                ErrorInfo::new("ignored"),
            ]),
        ));
        let ctrl: ListController<Authority, _> = controller(&fetcher, EmptyPolicy::AbsentOrZero);

        ctrl.start();

        assert_eq!(
            ctrl.settled().await,
            RenderDirective::ShowError(ErrorInfo::new("unauthorized"))
        );
    }

    #[tokio::test]
    async fn should_show_error_when_status_is_not_accepted() {
        let envelope = ResultEnvelope::<RolesRepresentation> {
            status: "error".to_string(),
            instance: None,
            errors: vec![ErrorInfo::new("unauthorized")],
        };
        let fetcher = Arc::new(CannedFetcher::new(envelope));
        let ctrl: ListController<Role, _> = controller(&fetcher, EmptyPolicy::AbsentOnly);

        ctrl.start();

        assert_eq!(
            ctrl.settled().await,
            RenderDirective::ShowError(ErrorInfo::new("unauthorized"))
        );
    }

    #[tokio::test]
    async fn should_show_loader_until_settled_however_often_queried() {
        let (fetcher, tx) = GatedFetcher::<ScopesRepresentation>::new();
        let fetcher = Arc::new(fetcher);
        let ctrl: ListController<Scope, _> = controller(&fetcher, EmptyPolicy::Never);

        ctrl.start();
        for _ in 0..5 {
            tokio::task::yield_now().await;
            assert_eq!(ctrl.current_decision(), RenderDirective::ShowLoader);
        }

        tx.send(ResultEnvelope::accepted(ScopesRepresentation {
            scopes: Some(vec![]),
        }))
        .unwrap();

        assert_eq!(ctrl.settled().await, RenderDirective::ShowList(vec![]));
    }

    #[tokio::test]
    async fn should_fetch_once_when_started_twice() {
        let fetcher = Arc::new(CannedFetcher::new(ResultEnvelope::accepted(
            RolesRepresentation {
                roles: Some(vec![role("admin")]),
            },
        )));
        let ctrl: ListController<Role, _> = controller(&fetcher, EmptyPolicy::AbsentOnly);
        let mut rx = ctrl.subscribe();

        assert!(ctrl.start());
        assert!(!ctrl.start());
        ctrl.settled().await;
        rx.borrow_and_update();

        assert!(!ctrl.start());
        tokio::task::yield_now().await;

        assert_eq!(fetcher.calls(), 1);
        assert!(!rx.has_changed().unwrap());
        assert!(ctrl.state().is_terminal());
    }

    #[tokio::test]
    async fn should_show_empty_when_authorities_loaded_with_zero_items() {
        let fetcher = Arc::new(CannedFetcher::new(ResultEnvelope::accepted(
            AuthoritiesRepresentation {
                authorities: Some(vec![]),
            },
        )));
        let ctrl: ListController<Authority, _> = controller(&fetcher, EmptyPolicy::AbsentOrZero);

        ctrl.start();

        assert_eq!(ctrl.settled().await, RenderDirective::ShowEmpty);
    }

    #[tokio::test]
    async fn should_show_empty_when_authorities_collection_is_absent() {
        let fetcher = Arc::new(CannedFetcher::new(ResultEnvelope::accepted(
            AuthoritiesRepresentation { authorities: None },
        )));
        let ctrl: ListController<Authority, _> = controller(&fetcher, EmptyPolicy::AbsentOrZero);

        ctrl.start();

        assert_eq!(ctrl.settled().await, RenderDirective::ShowEmpty);
    }

    #[tokio::test]
    async fn should_show_list_when_authorities_loaded_with_items() {
        let items = vec![authority("ROLE_ADMIN")];
        let fetcher = Arc::new(CannedFetcher::new(ResultEnvelope::accepted(
            AuthoritiesRepresentation {
                authorities: Some(items.clone()),
            },
        )));
        let ctrl: ListController<Authority, _> = controller(&fetcher, EmptyPolicy::AbsentOrZero);

        ctrl.start();

        assert_eq!(ctrl.settled().await, RenderDirective::ShowList(items));
    }

    #[tokio::test]
    async fn should_show_empty_when_roles_are_null() {
        let fetcher = Arc::new(CannedFetcher::new(ResultEnvelope::accepted(
            RolesRepresentation { roles: None },
        )));
        let ctrl: ListController<Role, _> = controller(&fetcher, EmptyPolicy::AbsentOnly);

        ctrl.start();

        assert_eq!(ctrl.settled().await, RenderDirective::ShowEmpty);
    }

    #[tokio::test]
    async fn should_show_empty_list_when_roles_are_an_empty_array() {
        let fetcher = Arc::new(CannedFetcher::new(ResultEnvelope::accepted(
            RolesRepresentation {
                roles: Some(vec![]),
            },
        )));
        let ctrl: ListController<Role, _> = controller(&fetcher, EmptyPolicy::AbsentOnly);

        ctrl.start();

        assert_eq!(ctrl.settled().await, RenderDirective::ShowList(vec![]));
    }

    #[tokio::test]
    async fn should_show_list_when_scopes_collection_is_absent() {
        let fetcher = Arc::new(CannedFetcher::new(ResultEnvelope::accepted(
            ScopesRepresentation { scopes: None },
        )));
        let ctrl: ListController<Scope, _> = controller(&fetcher, EmptyPolicy::Never);

        ctrl.start();

        assert_eq!(ctrl.settled().await, RenderDirective::ShowList(vec![]));
    }

    #[tokio::test]
    async fn should_treat_accepted_envelope_without_instance_as_absent() {
        let envelope = ResultEnvelope::<RolesRepresentation> {
            status: "accepted".to_string(),
            instance: None,
            errors: vec![],
        };
        let fetcher = Arc::new(CannedFetcher::new(envelope));
        let ctrl: ListController<Role, _> = controller(&fetcher, EmptyPolicy::AbsentOnly);

        ctrl.start();
        ctrl.settled().await;

        assert_eq!(ctrl.state(), LoadState::Loaded(ResourceList::Absent));
    }

    #[tokio::test(start_paused = true)]
    async fn should_show_loader_before_delay_and_list_after() {
        let items = vec![scope("scp_1", "read"), scope("scp_2", "write")];
        let fetcher = Arc::new(CannedFetcher::delayed(
            ResultEnvelope::accepted(ScopesRepresentation {
                scopes: Some(items.clone()),
            }),
            Duration::from_millis(500),
        ));
        let ctrl: ListController<Scope, _> = controller(&fetcher, EmptyPolicy::Never);

        ctrl.start();
        tokio::time::sleep(Duration::from_millis(499)).await;
        assert_eq!(ctrl.current_decision(), RenderDirective::ShowLoader);

        tokio::time::sleep(Duration::from_millis(2)).await;
        tokio::task::yield_now().await;
        assert_eq!(ctrl.settled().await, RenderDirective::ShowList(items));
    }

    #[tokio::test]
    async fn should_show_unauthorized_error_when_rejected_immediately() {
        let fetcher = Arc::new(CannedFetcher::new(ResultEnvelope::<
            ScopesRepresentation,
        >::rejected(vec![
            ErrorInfo::new("unauthorized"),
        ])));
        let ctrl: ListController<Scope, _> = controller(&fetcher, EmptyPolicy::Never);

        ctrl.start();

        let decision = ctrl.settled().await;
        assert_eq!(
            decision,
            RenderDirective::ShowError(ErrorInfo::new("unauthorized"))
        );
    }

    #[tokio::test]
    async fn should_ignore_settlement_after_unmount() {
        let (fetcher, tx) = GatedFetcher::<ScopesRepresentation>::new();
        let fetcher = Arc::new(fetcher);
        let ctrl: ListController<Scope, _> = controller(&fetcher, EmptyPolicy::Never);

        ctrl.start();
        ctrl.unmount();
        let _ = tx.send(ResultEnvelope::accepted(ScopesRepresentation::default()));
        tokio::task::yield_now().await;

        assert!(ctrl.is_unmounted());
        assert_eq!(ctrl.state(), LoadState::Loading);
        assert!(!ctrl.start());
    }

    #[tokio::test]
    async fn should_abort_fetch_and_discard_result_when_dropped() {
        let (fetcher, tx) = GatedFetcher::<ScopesRepresentation>::new();
        let fetcher = Arc::new(fetcher);
        let ctrl: ListController<Scope, _> = controller(&fetcher, EmptyPolicy::Never);
        let rx = ctrl.subscribe();

        ctrl.start();
        tokio::task::yield_now().await;
        drop(ctrl);
        for _ in 0..10 {
            if tx.is_closed() {
                break;
            }
            tokio::task::yield_now().await;
        }

        assert!(tx.is_closed());
        assert!(
            tx.send(ResultEnvelope::accepted(ScopesRepresentation::default()))
                .is_err()
        );
        assert_eq!(*rx.borrow(), LoadState::Loading);
    }

    #[tokio::test]
    async fn should_wake_settled_waiter_when_unmounted() {
        let (fetcher, _tx) = GatedFetcher::<ScopesRepresentation>::new();
        let fetcher = Arc::new(fetcher);
        let ctrl: ListController<Scope, _> = controller(&fetcher, EmptyPolicy::Never);
        ctrl.start();

        let (decision, ()) = tokio::join!(ctrl.settled(), async { ctrl.unmount() });

        assert_eq!(decision, RenderDirective::ShowLoader);
    }

    #[tokio::test]
    async fn should_return_none_when_not_settled_within_timeout() {
        let (fetcher, _tx) = GatedFetcher::<ScopesRepresentation>::new();
        let fetcher = Arc::new(fetcher);
        let ctrl: ListController<Scope, _> = controller(&fetcher, EmptyPolicy::Never);
        ctrl.start();

        let decision = ctrl.settled_within(Duration::from_millis(10)).await;

        assert!(decision.is_none());
    }

    #[test]
    fn should_apply_empty_policies_to_absent_and_empty_lists() {
        let absent: ResourceList<u8> = ResourceList::Absent;
        let empty: ResourceList<u8> = ResourceList::Items(vec![]);
        let filled: ResourceList<u8> = ResourceList::Items(vec![1]);

        assert!(EmptyPolicy::AbsentOrZero.is_empty(&absent));
        assert!(EmptyPolicy::AbsentOrZero.is_empty(&empty));
        assert!(!EmptyPolicy::AbsentOrZero.is_empty(&filled));

        assert!(EmptyPolicy::AbsentOnly.is_empty(&absent));
        assert!(!EmptyPolicy::AbsentOnly.is_empty(&empty));

        assert!(!EmptyPolicy::Never.is_empty(&absent));
        assert!(!EmptyPolicy::Never.is_empty(&empty));
    }

    #[test]
    fn should_deserialize_empty_policy_from_snake_case() {
        let policy: EmptyPolicy = serde_json::from_str("\"absent_only\"").unwrap();
        assert_eq!(policy, EmptyPolicy::AbsentOnly);
    }

    #[test]
    fn should_serialize_directive_with_tag() {
        let directive: RenderDirective<Scope> =
            RenderDirective::ShowError(ErrorInfo::new("unauthorized"));
        let json = serde_json::to_value(&directive).unwrap();
        assert_eq!(json["directive"], "show_error");
        assert_eq!(json["data"]["message"], "unauthorized");
    }
}
