//! Application shell: navbar, routed content, footer.

use dioxus::prelude::*;
use ui::{use_session, use_session_store, Navbar};

use crate::views::landing_target;
use crate::Route;

#[component]
pub fn AppLayout() -> Element {
    rsx! {
        SiteNavbar {}
        main { class: "content",
            Outlet::<Route> {}
        }
        footer { class: "footer",
            p { "American Academy Barhi — learn anywhere." }
        }
    }
}

/// Session-aware navbar content.
#[component]
fn SiteNavbar() -> Element {
    let state = use_session();
    let store = use_session_store();
    let nav = use_navigator();
    let s = state();

    let handle_logout = move |_| {
        let store = store.clone();
        async move {
            store.logout().await;
            nav.replace(Route::Login {});
        }
    };

    rsx! {
        Navbar {
            Link { class: "brand", to: Route::Home {}, "American Academy Barhi" }

            div { class: "nav-session",
                if s.is_authenticated() {
                    Link { class: "nav-link", to: landing_target(s.role()), "Dashboard" }
                    if let Some(user) = s.user.as_ref() {
                        span { class: "nav-user", "{user.name}" }
                    }
                    button {
                        class: "btn btn-danger",
                        onclick: handle_logout,
                        "Logout"
                    }
                } else {
                    Link { class: "nav-link", to: Route::Login {}, "Login" }
                    Link { class: "btn btn-primary", to: Route::Signup {}, "Sign Up" }
                }
            }
        }
    }
}
