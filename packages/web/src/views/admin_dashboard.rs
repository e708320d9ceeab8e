//! Admin view group: shared by staff and super admins, with a super-admin
//! only user management page.

use dioxus::prelude::*;
use session::Role;
use ui::use_session;

use crate::views::ProtectedRoute;

#[component]
pub fn AdminDashboard() -> Element {
    rsx! {
        ProtectedRoute { allowed_roles: vec![Role::Staff, Role::SuperAdmin],
            AdminDashboardContent {}
        }
    }
}

#[component]
fn AdminDashboardContent() -> Element {
    let state = use_session();
    let s = state();
    let name = s.user.as_ref().map(|user| user.name.clone()).unwrap_or_default();
    let role = s.role().map(|role| role.as_str()).unwrap_or("unknown");

    rsx! {
        section { class: "page",
            h1 { "Admin Dashboard" }
            p { "Signed in as {name} ({role})." }
            p { class: "muted",
                "Students, courses, lectures, timetable, attendance and payments are managed here."
            }
        }
    }
}

#[component]
pub fn AdminUsers() -> Element {
    rsx! {
        ProtectedRoute { allowed_roles: vec![Role::SuperAdmin],
            section { class: "page",
                h1 { "User Management" }
                p { class: "muted", "Staff and student accounts. Super admins only." }
            }
        }
    }
}
