//! Page Fetch Lifecycle
//!
//! Every page owns a [`RequestState`] for each collection it shows and a
//! [`ViewLifetime`] tying its requests to its mount. A response that arrives
//! after the page was disposed, or after a newer attempt was started, is
//! dropped instead of being written into state.

use std::cell::Cell;
use std::fmt;
use std::future::Future;
use std::rc::Rc;

/// Where a request state is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchPhase {
    Idle,
    Loading,
    Success,
    Failure,
}

/// The `{ data, loading, error }` triple owned by a page
#[derive(Debug, Clone, PartialEq)]
pub struct RequestState<T> {
    pub data: T,
    pub loading: bool,
    pub error: Option<String>,
    settled: bool,
}

impl<T: Default> Default for RequestState<T> {
    fn default() -> Self {
        Self::idle()
    }
}

impl<T: Default> RequestState<T> {
    /// Nothing requested yet
    pub fn idle() -> Self {
        Self {
            data: T::default(),
            loading: false,
            error: None,
            settled: false,
        }
    }

    /// State on mount: the first fetch starts immediately
    pub fn loading() -> Self {
        Self {
            loading: true,
            ..Self::idle()
        }
    }
}

impl<T> RequestState<T> {
    /// Enter Loading; data and error are kept until the attempt settles
    pub fn begin(&mut self) {
        self.loading = true;
    }

    /// Store a successful result
    pub fn succeed(&mut self, data: T) {
        self.data = data;
        self.loading = false;
        self.error = None;
        self.settled = true;
    }

    /// Store a failure message, leaving data at its prior value
    pub fn fail(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = Some(message.into());
        self.settled = true;
    }

    /// Apply the outcome of a fetch
    pub fn settle<E: fmt::Display>(&mut self, result: Result<T, E>) {
        match result {
            Ok(data) => self.succeed(data),
            Err(e) => {
                let message = e.to_string();
                tracing::debug!(error = %message, "fetch failed");
                self.fail(message);
            }
        }
    }

    pub fn phase(&self) -> FetchPhase {
        if self.loading {
            FetchPhase::Loading
        } else if self.error.is_some() {
            FetchPhase::Failure
        } else if self.settled {
            FetchPhase::Success
        } else {
            FetchPhase::Idle
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// Identifies one fetch attempt within a view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Default)]
struct LifetimeInner {
    disposed: Cell<bool>,
    generation: Cell<u64>,
}

/// Cancellation guard bound to a mounted view
///
/// Cloning shares the same lifetime. Single-threaded, like the UI event loop.
#[derive(Debug, Clone, Default)]
pub struct ViewLifetime {
    inner: Rc<LifetimeInner>,
}

impl ViewLifetime {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new attempt, superseding any earlier one
    pub fn start(&self) -> Ticket {
        let next = self.inner.generation.get() + 1;
        self.inner.generation.set(next);
        Ticket(next)
    }

    /// Whether results for `ticket` may still be applied
    pub fn is_current(&self, ticket: Ticket) -> bool {
        !self.inner.disposed.get() && self.inner.generation.get() == ticket.0
    }

    /// Mark the view as gone; every outstanding attempt becomes stale
    pub fn dispose(&self) {
        self.inner.disposed.set(true);
    }

    pub fn is_disposed(&self) -> bool {
        self.inner.disposed.get()
    }

    /// Run `fut` as a new attempt, yielding `None` if it went stale
    ///
    /// The attempt is registered when `guard` is called, not when the
    /// returned future is first polled.
    pub fn guard<F: Future>(&self, fut: F) -> impl Future<Output = Option<F::Output>> {
        let ticket = self.start();
        let lifetime = self.clone();
        async move {
            let output = fut.await;
            if lifetime.is_current(ticket) {
                Some(output)
            } else {
                tracing::debug!("discarding stale response");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use tokio::sync::oneshot;

    #[test]
    fn test_mount_state_is_loading_and_empty() {
        let state = RequestState::<Vec<u32>>::loading();
        assert_eq!(state.phase(), FetchPhase::Loading);
        assert!(state.data.is_empty());
        assert_eq!(state.error(), None);
        assert_eq!(RequestState::<Vec<u32>>::default().phase(), FetchPhase::Idle);
    }

    #[test]
    fn test_success_clears_error() {
        let mut state = RequestState::<Vec<u32>>::loading();
        state.fail("boom");
        state.begin();
        state.settle(Ok::<_, ClientError>(vec![1, 2]));

        assert_eq!(state.phase(), FetchPhase::Success);
        assert!(!state.loading);
        assert_eq!(state.error, None);
        assert_eq!(state.data, vec![1, 2]);
    }

    #[test]
    fn test_failure_keeps_prior_data() {
        let mut state = RequestState::<Vec<u32>>::loading();
        state.succeed(vec![7]);
        state.begin();
        assert_eq!(state.phase(), FetchPhase::Loading);

        state.settle(Err::<Vec<u32>, _>(ClientError::status(500, "")));
        assert_eq!(state.phase(), FetchPhase::Failure);
        assert!(!state.loading);
        assert_eq!(state.data, vec![7]);
        assert_eq!(state.error(), Some("Request failed with status code 500"));
    }

    #[tokio::test]
    async fn test_guard_applies_current_attempt() {
        let lifetime = ViewLifetime::new();
        assert_eq!(lifetime.guard(async { 5 }).await, Some(5));
    }

    #[tokio::test]
    async fn test_guard_discards_after_dispose() {
        let lifetime = ViewLifetime::new();
        let (tx, rx) = oneshot::channel::<u32>();

        let pending = lifetime.guard(async move { rx.await.unwrap() });
        lifetime.dispose();
        tx.send(1).unwrap();

        assert_eq!(pending.await, None);
        assert!(lifetime.is_disposed());
    }

    #[tokio::test]
    async fn test_guard_discards_superseded_attempt() {
        let lifetime = ViewLifetime::new();
        let (tx, rx) = oneshot::channel::<&str>();

        let first = lifetime.guard(async move { rx.await.unwrap() });
        let second = lifetime.guard(async { "second" });
        tx.send("first").unwrap();

        assert_eq!(second.await, Some("second"));
        assert_eq!(first.await, None);
    }

    #[test]
    fn test_clones_share_lifetime() {
        let lifetime = ViewLifetime::new();
        let ticket = lifetime.start();
        let handle = lifetime.clone();
        handle.dispose();
        assert!(!lifetime.is_current(ticket));
    }
}
