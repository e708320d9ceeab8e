use dioxus::prelude::*;

use crate::Route;

/// Unknown paths go back to the public landing page.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    tracing::debug!(path = segments.join("/"), "unknown route, redirecting home");
    nav.replace(Route::Home {});
    rsx! {}
}
