//! Public landing page.

use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn Home() -> Element {
    rsx! {
        section { class: "page hero",
            h1 { "American Academy Barhi" }
            p { class: "hero-sub",
                "Courses, timetables, certificates and more — in one place."
            }
            div { class: "hero-actions",
                Link { class: "btn btn-primary", to: Route::Signup {}, "Get started" }
                Link { class: "btn", to: Route::Dashboard {}, "Go to dashboard" }
            }
        }
    }
}
