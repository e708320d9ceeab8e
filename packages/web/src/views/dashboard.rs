//! Root redirect: `/dashboard` forwards to the role's landing page.

use dioxus::prelude::*;
use ui::{use_session, LoadingSpinner};

use crate::views::landing_target;

#[component]
pub fn Dashboard() -> Element {
    let state = use_session();
    let nav = use_navigator();
    let s = state();

    // State is unknown until restoration completes; suspending here avoids a
    // flash-redirect to login on a refresh of /dashboard.
    if s.loading {
        return rsx! {
            LoadingSpinner {}
        };
    }

    let role = if s.is_authenticated() { s.role() } else { None };
    nav.replace(landing_target(role));
    rsx! {}
}
