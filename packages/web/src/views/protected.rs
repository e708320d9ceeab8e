//! Route guard wrapping protected subtrees.

use dioxus::prelude::*;
use session::{route_decision, Role, RouteDecision};
use ui::{use_session, LoadingSpinner};

use crate::Route;

/// Gates `children` behind the session.
///
/// Renders a spinner while the session is restoring (never redirecting on a
/// refresh), sends unauthenticated visitors to the login page, and bounces
/// authenticated users whose role is not in `allowed_roles` back to the
/// public landing page. The guarded subtree is only ever rendered on a
/// positive decision. Re-evaluates whenever the session changes, so a logout
/// on a protected view redirects on the next render.
#[component]
pub fn ProtectedRoute(#[props(default)] allowed_roles: Vec<Role>, children: Element) -> Element {
    let state = use_session();
    let nav = use_navigator();

    match route_decision(&state(), &allowed_roles) {
        RouteDecision::Render => rsx! {
            {children}
        },
        RouteDecision::Suspend => rsx! {
            LoadingSpinner {}
        },
        RouteDecision::RedirectToLogin => {
            nav.replace(Route::Login {});
            rsx! {}
        }
        RouteDecision::RedirectToFallback => {
            nav.replace(Route::Home {});
            rsx! {}
        }
    }
}
