//! Session context provider and hooks.
//!
//! [`SessionProvider`] owns the process-wide [`SessionStore`] and mirrors
//! every published state change into a `Signal<SessionState>` so components
//! re-render when the session changes. Wrap the router with it once, at the
//! top of the app.

use api::HttpAuthClient;
use dioxus::prelude::*;
use session::{SessionState, SessionStore};

#[cfg(all(target_arch = "wasm32", feature = "web"))]
type ClientStorage = session::LocalStorage;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
type ClientStorage = session::MemoryStorage;

/// Session store wired to the platform storage and the HTTP auth API:
/// `localStorage` on the web, an in-memory fallback elsewhere.
pub type ClientSession = SessionStore<ClientStorage, HttpAuthClient>;

/// Current session state.
/// Panics when called outside a [`SessionProvider`]; that is a programming
/// error, not a runtime condition.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Handle for login/register/logout. Panics outside a [`SessionProvider`].
pub fn use_session_store() -> ClientSession {
    use_context::<ClientSession>()
}

/// Provider component that manages the session for its subtree.
///
/// Restores the persisted session on mount, so every descendant sees
/// `loading == true` until restoration completes.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let store = use_hook(|| ClientSession::new(ClientStorage::new(), HttpAuthClient::new()));
    let mut state = use_signal(SessionState::default);

    // Restore once, then mirror every published change into the signal.
    {
        let store = store.clone();
        use_future(move || {
            let store = store.clone();
            async move {
                let mut rx = store.subscribe();
                store.restore().await;
                loop {
                    state.set(rx.borrow_and_update().clone());
                    if rx.changed().await.is_err() {
                        break;
                    }
                }
            }
        });
    }

    use_context_provider(|| store);
    use_context_provider(|| state);

    rsx! {
        {children}
    }
}
