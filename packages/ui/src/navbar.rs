use dioxus::prelude::*;

/// Navigation bar shell. The application supplies the links and the
/// session-aware controls as children.
#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        nav {
            class: "navbar",
            {children}
        }
    }
}
