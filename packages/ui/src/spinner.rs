use dioxus::prelude::*;

/// Centered loading placeholder, shown while the session is restoring and
/// while guarded routes are suspended.
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            class: "spinner-wrap",
            div { class: "spinner" }
            span { class: "spinner-label", "Loading..." }
        }
    }
}
