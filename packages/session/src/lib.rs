//! # Session crate — authentication state and route access for the portal
//!
//! This crate is the single place where the portal decides who is logged in
//! and what they may see. It is deliberately framework-free so the same logic
//! runs under the web frontend, in native dev builds, and in plain unit tests.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`role`] | The closed role set (`student`, `staff`, `super_admin`) |
//! | [`user`] | Account record exchanged with the API and persisted locally |
//! | [`response`] | Uniform success/failure envelope used by every API call |
//! | [`storage`] | Async key-value persistence contract and the session keys |
//! | [`exchange`] | Credential exchange contract (login / registration) |
//! | [`session`] | [`SessionStore`] — the single writer of session state |
//! | [`guard`] | Pure route-access decision function |
//! | [`routes`] | Route table and the role-aware landing resolver |
//!
//! ## Flow
//!
//! At boot the application calls [`SessionStore::restore`], which re-reads the
//! persisted token and user record and then drops the loading flag. Views and
//! the router read [`SessionStore::snapshot`] or [`SessionStore::subscribe`]
//! and feed the state into [`guard::route_decision`] on every evaluation.
//! Login, registration and logout are the only other mutations.

pub mod exchange;
pub mod guard;
pub mod role;
pub mod routes;
pub mod session;
pub mod storage;
pub mod user;

mod memory;
pub use memory::MemoryStorage;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorage;

mod response;
pub use response::ApiResponse;

pub use exchange::{AuthExchange, AuthPayload};
pub use guard::{route_decision, RouteDecision};
pub use role::Role;
pub use session::{SessionState, SessionStore};
pub use storage::{KeyValueStore, TOKEN_KEY, USER_KEY};
pub use user::{User, UserStatus};
