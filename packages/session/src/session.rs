//! # SessionStore — the single writer of authentication state
//!
//! [`SessionStore`] owns "who is logged in" for the lifetime of the process.
//! It keeps the current [`SessionState`] inside a `tokio::sync::watch`
//! channel: [`SessionStore::snapshot`] reads it, [`SessionStore::subscribe`]
//! hands out a receiver for reactive re-evaluation, and every mutation goes
//! through one of four operations:
//!
//! | Operation | Effect |
//! |-----------|--------|
//! | [`restore`](SessionStore::restore) | Re-reads the persisted token + user record at boot, clearing both on corruption, and drops the loading flag. |
//! | [`login`](SessionStore::login) | Exchanges credentials; on success persists and adopts the returned session. |
//! | [`register`](SessionStore::register) | Same contract as `login`, against the registration endpoint. |
//! | [`logout`](SessionStore::logout) | Clears both persisted entries and the in-memory state. Idempotent. |
//!
//! Cloning the store is cheap and shares the same state; readers must never
//! mutate it through other means. Concurrent `login` calls are not
//! serialized — the last exchange to resolve wins, for both memory and
//! storage. The UI prevents duplicate submission; the tests below only assert
//! that the race cannot corrupt the token/user pairing.

use tokio::sync::watch;

use crate::exchange::{AuthExchange, AuthPayload};
use crate::response::ApiResponse;
use crate::role::Role;
use crate::storage::{KeyValueStore, TOKEN_KEY, USER_KEY};
use crate::user::User;

/// Snapshot of the current authentication state.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
    pub token: Option<String>,
    /// True only while the persisted session is being restored at boot;
    /// false for the rest of the process lifetime. Submission busy state is
    /// owned by the individual views, not by the session.
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            user: None,
            token: None,
            loading: true,
        }
    }
}

impl SessionState {
    /// Authenticated iff both the identity and the credential are present.
    /// Always derived, never stored, so it cannot drift from the fields.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.token.is_some()
    }

    /// Role of the current user, if any.
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|user| user.role)
    }
}

/// Single source of truth for the process-wide session.
#[derive(Debug, Clone)]
pub struct SessionStore<S, X> {
    storage: S,
    exchange: X,
    tx: watch::Sender<SessionState>,
}

impl<S: KeyValueStore, X: AuthExchange> SessionStore<S, X> {
    /// Create an empty, still-loading session backed by `storage` and
    /// `exchange`. Call [`restore`](Self::restore) once before routing.
    pub fn new(storage: S, exchange: X) -> Self {
        let (tx, _rx) = watch::channel(SessionState::default());
        Self {
            storage,
            exchange,
            tx,
        }
    }

    /// Current state. Cheap clone of the latest published value.
    pub fn snapshot(&self) -> SessionState {
        self.tx.borrow().clone()
    }

    /// Subscribe to state changes. The receiver sees every publication made
    /// after this call; the current value is available immediately.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.tx.subscribe()
    }

    /// Restore the persisted session. Invoked once at boot.
    ///
    /// Both entries must be present and the user record must parse; anything
    /// else is treated as a logged-out state and the entries are cleared so
    /// the corruption cannot resurface on the next reload. Parse errors are
    /// logged but never surfaced — there is no UI yet to show them. The
    /// loading flag is dropped on every path.
    pub async fn restore(&self) {
        let token = self.storage.get(TOKEN_KEY).await;
        let user_json = self.storage.get(USER_KEY).await;

        let restored = match (token, user_json) {
            (Some(token), Some(json)) => match serde_json::from_str::<User>(&json) {
                Ok(user) => Some((user, token)),
                Err(err) => {
                    tracing::warn!(error = %err, "persisted user record is unreadable, clearing session");
                    self.clear_persisted().await;
                    None
                }
            },
            (None, None) => None,
            _ => {
                tracing::warn!("persisted session is incomplete, clearing both entries");
                self.clear_persisted().await;
                None
            }
        };

        self.tx.send_modify(|state| {
            if let Some((user, token)) = restored {
                state.user = Some(user);
                state.token = Some(token);
            }
            state.loading = false;
        });
    }

    /// Exchange credentials for a session.
    ///
    /// On success the token and user record are persisted together and the
    /// in-memory state replaced; on failure nothing changes. The exchange
    /// result is returned unchanged either way so the caller can show the
    /// error or pick a role-aware redirect.
    pub async fn login(&self, email: &str, password: &str) -> ApiResponse<AuthPayload> {
        let response = self.exchange.authenticate(email, password).await;
        self.adopt(&response).await;
        response
    }

    /// Create an account and log in. Identical contract to [`login`](Self::login).
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        phone: Option<&str>,
    ) -> ApiResponse<AuthPayload> {
        let response = self
            .exchange
            .create_account(name, email, password, phone)
            .await;
        self.adopt(&response).await;
        response
    }

    /// Clear the session. Safe to call when already logged out.
    pub async fn logout(&self) {
        self.clear_persisted().await;
        self.tx.send_modify(|state| {
            state.user = None;
            state.token = None;
        });
    }

    /// Persist and adopt a successful exchange; ignore failures.
    async fn adopt(&self, response: &ApiResponse<AuthPayload>) {
        let ApiResponse::Success { data, .. } = response else {
            return;
        };
        let json = match serde_json::to_string(&data.user) {
            Ok(json) => json,
            Err(err) => {
                tracing::error!(error = %err, "failed to encode user record, session not persisted");
                return;
            }
        };
        // Both entries are written together; a reader that sees one sees both.
        self.storage.set(TOKEN_KEY, &data.token).await;
        self.storage.set(USER_KEY, &json).await;
        self.tx.send_modify(|state| {
            state.user = Some(data.user.clone());
            state.token = Some(data.token.clone());
        });
    }

    async fn clear_persisted(&self) {
        self.storage.remove(TOKEN_KEY).await;
        self.storage.remove(USER_KEY).await;
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::guard::{route_decision, RouteDecision};
    use crate::memory::MemoryStorage;
    use crate::user::UserStatus;

    /// Exchange stub that pops scripted responses in order.
    #[derive(Clone)]
    struct StubExchange {
        responses: Arc<Mutex<VecDeque<ApiResponse<AuthPayload>>>>,
    }

    impl StubExchange {
        fn scripted<I>(responses: I) -> Self
        where
            I: IntoIterator<Item = ApiResponse<AuthPayload>>,
        {
            Self {
                responses: Arc::new(Mutex::new(responses.into_iter().collect())),
            }
        }

        fn with(response: ApiResponse<AuthPayload>) -> Self {
            Self::scripted([response])
        }

        fn next(&self) -> ApiResponse<AuthPayload> {
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| ApiResponse::failure("no scripted response"))
        }
    }

    impl AuthExchange for StubExchange {
        async fn authenticate(&self, _email: &str, _password: &str) -> ApiResponse<AuthPayload> {
            self.next()
        }

        async fn create_account(
            &self,
            _name: &str,
            _email: &str,
            _password: &str,
            _phone: Option<&str>,
        ) -> ApiResponse<AuthPayload> {
            self.next()
        }
    }

    fn student(id: i64, token: &str) -> AuthPayload {
        AuthPayload {
            user: User {
                id,
                name: format!("Student {id}"),
                email: format!("student{id}@example.com"),
                phone: None,
                role: Role::Student,
                status: UserStatus::Active,
                created_at: None,
                updated_at: None,
            },
            token: token.to_string(),
            message: None,
        }
    }

    fn store_with(
        storage: MemoryStorage,
        exchange: StubExchange,
    ) -> SessionStore<MemoryStorage, StubExchange> {
        SessionStore::new(storage, exchange)
    }

    #[test]
    fn authentication_is_derived_from_both_fields() {
        let mut state = SessionState::default();
        assert!(!state.is_authenticated());

        state.user = Some(student(1, "t").user);
        assert!(!state.is_authenticated(), "user alone is not a session");
        assert_eq!(state.role(), Some(Role::Student));

        state.user = None;
        state.token = Some("t".to_string());
        assert!(!state.is_authenticated(), "token alone is not a session");
        assert_eq!(state.role(), None);

        state.user = Some(student(1, "t").user);
        assert!(state.is_authenticated());
    }

    #[tokio::test]
    async fn test_restore_with_nothing_persisted() {
        let store = store_with(MemoryStorage::new(), StubExchange::scripted([]));
        assert!(store.snapshot().loading);

        store.restore().await;
        let state = store.snapshot();
        assert!(state.user.is_none());
        assert!(state.token.is_none());
        assert!(!state.loading);

        // Restoring again yields the same result.
        store.restore().await;
        assert_eq!(store.snapshot(), state);
    }

    #[tokio::test]
    async fn test_restore_with_valid_persisted_session() {
        let storage = MemoryStorage::new();
        let payload = student(1, "abc");
        storage.set(TOKEN_KEY, &payload.token).await;
        storage
            .set(USER_KEY, &serde_json::to_string(&payload.user).unwrap())
            .await;

        let store = store_with(storage, StubExchange::scripted([]));
        assert!(store.snapshot().loading);

        store.restore().await;
        let state = store.snapshot();
        assert!(!state.loading);
        assert!(state.is_authenticated());
        assert_eq!(state.token.as_deref(), Some("abc"));
        assert_eq!(state.user, Some(payload.user));

        // A student-only route renders without redirecting.
        assert_eq!(
            route_decision(&state, &[Role::Student]),
            RouteDecision::Render
        );
    }

    #[tokio::test]
    async fn test_restore_clears_token_without_user() {
        let storage = MemoryStorage::new();
        storage.set(TOKEN_KEY, "orphan").await;

        let store = store_with(storage.clone(), StubExchange::scripted([]));
        store.restore().await;

        let state = store.snapshot();
        assert!(!state.is_authenticated());
        assert!(!state.loading);
        assert!(storage.get(TOKEN_KEY).await.is_none());
        assert!(storage.get(USER_KEY).await.is_none());
    }

    #[tokio::test]
    async fn test_restore_clears_malformed_user_record() {
        let storage = MemoryStorage::new();
        storage.set(TOKEN_KEY, "abc").await;
        storage.set(USER_KEY, "{not json").await;

        let store = store_with(storage.clone(), StubExchange::scripted([]));
        store.restore().await;

        let state = store.snapshot();
        assert!(!state.is_authenticated());
        assert!(!state.loading);
        assert!(storage.get(TOKEN_KEY).await.is_none());
        assert!(storage.get(USER_KEY).await.is_none());
    }

    #[tokio::test]
    async fn test_login_success_persists_and_updates_state() {
        let storage = MemoryStorage::new();
        let payload = student(5, "T");
        let store = store_with(
            storage.clone(),
            StubExchange::with(ApiResponse::success(payload.clone())),
        );
        store.restore().await;

        let response = store.login("a@b.com", "pw").await;
        assert!(response.is_success());
        assert_eq!(response.data(), Some(&payload));

        let state = store.snapshot();
        assert_eq!(state.token.as_deref(), Some("T"));
        assert_eq!(state.user, Some(payload.user.clone()));
        assert!(!state.loading, "login never re-enters the loading phase");

        assert_eq!(storage.get(TOKEN_KEY).await.as_deref(), Some("T"));
        let persisted: User =
            serde_json::from_str(&storage.get(USER_KEY).await.unwrap()).unwrap();
        assert_eq!(persisted, payload.user);
    }

    #[tokio::test]
    async fn test_login_failure_changes_nothing() {
        let storage = MemoryStorage::new();
        let store = store_with(
            storage.clone(),
            StubExchange::with(ApiResponse::failure("Invalid email or password")),
        );
        store.restore().await;
        let before = store.snapshot();

        let response = store.login("a@b.com", "wrong").await;
        assert!(!response.is_success());
        assert_eq!(response.message(), Some("Invalid email or password"));

        assert_eq!(store.snapshot(), before);
        assert!(storage.get(TOKEN_KEY).await.is_none());
        assert!(storage.get(USER_KEY).await.is_none());
    }

    #[tokio::test]
    async fn test_register_follows_the_login_contract() {
        let storage = MemoryStorage::new();
        let payload = student(9, "fresh");
        let store = store_with(
            storage.clone(),
            StubExchange::with(ApiResponse::success(payload.clone())),
        );
        store.restore().await;

        let response = store
            .register("Student 9", "student9@example.com", "pw", Some("555"))
            .await;
        assert!(response.is_success());
        assert!(store.snapshot().is_authenticated());
        assert_eq!(storage.get(TOKEN_KEY).await.as_deref(), Some("fresh"));
    }

    #[tokio::test]
    async fn test_logout_clears_state_and_storage() {
        let storage = MemoryStorage::new();
        let store = store_with(
            storage.clone(),
            StubExchange::with(ApiResponse::success(student(2, "tok"))),
        );
        store.restore().await;
        store.login("a@b.com", "pw").await;
        assert!(store.snapshot().is_authenticated());

        store.logout().await;
        let state = store.snapshot();
        assert!(state.user.is_none());
        assert!(state.token.is_none());
        assert!(storage.get(TOKEN_KEY).await.is_none());
        assert!(storage.get(USER_KEY).await.is_none());

        // Logging out again is a side-effect-free no-op.
        store.logout().await;
        assert_eq!(store.snapshot(), state);
    }

    #[tokio::test]
    async fn test_subscribers_observe_every_mutation() {
        let store = store_with(
            MemoryStorage::new(),
            StubExchange::with(ApiResponse::success(student(3, "tok"))),
        );
        let mut rx = store.subscribe();

        store.restore().await;
        assert!(rx.has_changed().unwrap());
        assert!(!rx.borrow_and_update().loading);

        store.login("a@b.com", "pw").await;
        assert!(rx.has_changed().unwrap());
        assert!(rx.borrow_and_update().is_authenticated());

        store.logout().await;
        assert!(rx.has_changed().unwrap());
        assert!(!rx.borrow_and_update().is_authenticated());
    }

    #[tokio::test]
    async fn test_concurrent_logins_leave_a_consistent_pair() {
        let storage = MemoryStorage::new();
        let first = student(10, "first-token");
        let second = student(20, "second-token");
        let store = store_with(
            storage.clone(),
            StubExchange::scripted([
                ApiResponse::success(first.clone()),
                ApiResponse::success(second.clone()),
            ]),
        );
        store.restore().await;

        let (a, b) = tokio::join!(store.login("a@b.com", "pw"), store.login("a@b.com", "pw"));
        assert!(a.is_success() && b.is_success());

        // Last write wins, but the user and token must come from the same
        // exchange, both in memory and in storage.
        let state = store.snapshot();
        let winner = if state.token.as_deref() == Some("first-token") {
            &first
        } else {
            &second
        };
        assert_eq!(state.token.as_deref(), Some(winner.token.as_str()));
        assert_eq!(state.user, Some(winner.user.clone()));
        assert_eq!(
            storage.get(TOKEN_KEY).await.as_deref(),
            Some(winner.token.as_str())
        );
        let persisted: User =
            serde_json::from_str(&storage.get(USER_KEY).await.unwrap()).unwrap();
        assert_eq!(persisted, winner.user);
    }
}
