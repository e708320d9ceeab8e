//! Persistence contract for the session record.
//!
//! The session survives reloads as two entries in a durable key-value store:
//! the raw token under [`TOKEN_KEY`] and the JSON-encoded user record under
//! [`USER_KEY`]. The store itself offers no transactions; the pair is kept
//! consistent by always writing and removing both keys together (see
//! [`crate::SessionStore`]). A state with only one entry present is treated
//! as corruption and cleared.

/// Key holding the opaque credential token.
pub const TOKEN_KEY: &str = "aab_jwt_token";

/// Key holding the serialized user record.
pub const USER_KEY: &str = "aab_user_info";

/// Async trait for durable key-value persistence.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> impl std::future::Future<Output = Option<String>>;
    fn set(&self, key: &str, value: &str) -> impl std::future::Future<Output = ()>;
    fn remove(&self, key: &str) -> impl std::future::Future<Output = ()>;
}
