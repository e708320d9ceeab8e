//! Login page with the email/password form.

use dioxus::prelude::*;
use ui::{use_session, use_session_store, Alert, AlertKind};

use crate::views::landing_target;
use crate::Route;

#[component]
pub fn Login() -> Element {
    let state = use_session();
    let store = use_session_store();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut busy = use_signal(|| false);

    // Already signed in: straight to the role's dashboard.
    let s = state();
    if !s.loading && s.is_authenticated() {
        nav.replace(landing_target(s.role()));
        return rsx! {};
    }

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let store = store.clone();
        spawn(async move {
            error.set(None);

            let e = email().trim().to_string();
            let p = password();

            if e.is_empty() || !e.contains('@') {
                error.set(Some("Please enter a valid email".to_string()));
                return;
            }
            if p.is_empty() {
                error.set(Some("Password is required".to_string()));
                return;
            }

            busy.set(true);
            let response = store.login(&e, &p).await;
            if response.is_success() {
                let role = response.data().map(|payload| payload.user.role);
                nav.replace(landing_target(role));
            } else {
                busy.set(false);
                error.set(Some(
                    response.message().unwrap_or("Login failed").to_string(),
                ));
            }
        });
    };

    rsx! {
        div { class: "auth-page",
            h1 { "Login" }
            p { class: "auth-sub", "Sign in to your account" }

            form { class: "auth-form", onsubmit: handle_login,
                if let Some(err) = error() {
                    Alert { message: err, kind: AlertKind::Error }
                }

                input {
                    class: "field",
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                input {
                    class: "field",
                    r#type: "password",
                    placeholder: "Password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: busy(),
                    if busy() { "Signing in..." } else { "Login" }
                }
            }

            p { class: "auth-alt",
                "Don't have an account? "
                Link { to: Route::Signup {}, "Sign up" }
            }
        }
    }
}
