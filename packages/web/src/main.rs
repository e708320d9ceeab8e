use dioxus::prelude::*;

use ui::SessionProvider;
use views::{
    AdminDashboard, AdminUsers, AppLayout, Dashboard, Home, Login, NotFound, Signup,
    StudentDashboard,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
        #[route("/")]
        Home {},
        #[route("/login")]
        Login {},
        #[route("/signup")]
        Signup {},
        #[route("/dashboard")]
        Dashboard {},
        #[route("/student/dashboard")]
        StudentDashboard {},
        #[route("/admin/dashboard")]
        AdminDashboard {},
        #[route("/admin/users")]
        AdminUsers {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            Router::<Route> {}
        }
    }
}
