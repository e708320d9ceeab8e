//! Student view group. Content is placeholder plumbing; the guard wiring is
//! the part that matters.

use dioxus::prelude::*;
use session::Role;
use ui::use_session;

use crate::views::ProtectedRoute;

#[component]
pub fn StudentDashboard() -> Element {
    rsx! {
        ProtectedRoute { allowed_roles: vec![Role::Student],
            StudentDashboardContent {}
        }
    }
}

#[component]
fn StudentDashboardContent() -> Element {
    let state = use_session();
    let name = state()
        .user
        .map(|user| user.name)
        .unwrap_or_default();

    rsx! {
        section { class: "page",
            h1 { "Student Dashboard" }
            p { "Welcome back, {name}." }
            p { class: "muted",
                "Your courses, lectures, payments, attendance and certificates live here."
            }
        }
    }
}
