//! Shared UI for the portal: session context, alerts, spinner, navbar shell.

mod session_provider;
pub use session_provider::{use_session, use_session_store, ClientSession, SessionProvider};

mod alert;
pub use alert::{Alert, AlertKind};

mod spinner;
pub use spinner::LoadingSpinner;

mod navbar;
pub use navbar::Navbar;
