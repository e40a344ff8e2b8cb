//! Fetch Hooks
//!
//! Wires a page's [`RequestState`] to a signal and its requests to the
//! page's lifetime: when the page is disposed, or a newer request starts,
//! the pending response is dropped instead of written.

use std::future::Future;
use std::rc::Rc;

use leptos::*;
use surya::{ClientResult, RequestState, ViewLifetime};

/// Request state of one collection plus a way to re-fetch it
pub struct Fetch<T: 'static> {
    pub state: RwSignal<RequestState<T>>,
    pub refresh: Callback<()>,
}

impl<T: 'static> Clone for Fetch<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for Fetch<T> {}

/// Fetch on mount
pub fn use_fetch<T, Fut>(label: &'static str, fetcher: impl Fn() -> Fut + 'static) -> Fetch<T>
where
    T: Default + 'static,
    Fut: Future<Output = ClientResult<T>> + 'static,
{
    use_keyed_fetch(label, || Some(()), move |_| fetcher())
}

/// Fetch whenever `key` yields a value
///
/// While `key` returns `None` (e.g. a route parameter not yet resolved) the
/// state stays in Loading and nothing is requested.
pub fn use_keyed_fetch<K, T, Fut>(
    label: &'static str,
    key: impl Fn() -> Option<K> + 'static,
    fetcher: impl Fn(K) -> Fut + 'static,
) -> Fetch<T>
where
    K: 'static,
    T: Default + 'static,
    Fut: Future<Output = ClientResult<T>> + 'static,
{
    let state = create_rw_signal(RequestState::<T>::loading());

    let lifetime = ViewLifetime::new();
    on_cleanup({
        let lifetime = lifetime.clone();
        move || lifetime.dispose()
    });

    let run = Rc::new(move |key: K| {
        state.update(|s| s.begin());
        let pending = lifetime.guard(fetcher(key));
        spawn_local(async move {
            let Some(result) = pending.await else {
                return;
            };
            if let Err(e) = &result {
                web_sys::console::error_1(&format!("Failed to fetch {}: {}", label, e).into());
            }
            state.update(|s| s.settle(result));
        });
    });

    let key = Rc::new(key);

    {
        let run = Rc::clone(&run);
        let key = Rc::clone(&key);
        create_effect(move |_| {
            if let Some(k) = key() {
                run(k);
            }
        });
    }

    let refresh = Callback::new(move |_: ()| {
        if let Some(k) = untrack(|| key()) {
            run(k);
        }
    });

    Fetch { state, refresh }
}
