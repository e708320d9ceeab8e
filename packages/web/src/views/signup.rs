//! Signup page; a successful registration logs the new account in.

use dioxus::prelude::*;
use ui::{use_session, use_session_store, Alert, AlertKind};

use crate::views::landing_target;
use crate::Route;

#[component]
pub fn Signup() -> Element {
    let state = use_session();
    let store = use_session_store();
    let nav = use_navigator();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut busy = use_signal(|| false);

    let s = state();
    if !s.loading && s.is_authenticated() {
        nav.replace(landing_target(s.role()));
        return rsx! {};
    }

    let handle_signup = move |evt: FormEvent| {
        evt.prevent_default();
        let store = store.clone();
        spawn(async move {
            error.set(None);

            let n = name().trim().to_string();
            let e = email().trim().to_string();
            let ph = phone().trim().to_string();
            let p = password();
            let cp = confirm_password();

            if n.is_empty() {
                error.set(Some("Name is required".to_string()));
                return;
            }
            if e.is_empty() || !e.contains('@') {
                error.set(Some("Please enter a valid email".to_string()));
                return;
            }
            if p.len() < 8 {
                error.set(Some("Password must be at least 8 characters".to_string()));
                return;
            }
            if p != cp {
                error.set(Some("Passwords do not match".to_string()));
                return;
            }

            busy.set(true);
            let phone_arg = if ph.is_empty() { None } else { Some(ph.as_str()) };
            let response = store.register(&n, &e, &p, phone_arg).await;
            if response.is_success() {
                let role = response.data().map(|payload| payload.user.role);
                nav.replace(landing_target(role));
            } else {
                busy.set(false);
                error.set(Some(
                    response.message().unwrap_or("Signup failed").to_string(),
                ));
            }
        });
    };

    rsx! {
        div { class: "auth-page",
            h1 { "Create Account" }
            p { class: "auth-sub", "Join the academy" }

            form { class: "auth-form", onsubmit: handle_signup,
                if let Some(err) = error() {
                    Alert { message: err, kind: AlertKind::Error }
                }

                input {
                    class: "field",
                    r#type: "text",
                    placeholder: "Name",
                    value: name(),
                    oninput: move |evt: FormEvent| name.set(evt.value()),
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
                    r#type: "tel",
                    placeholder: "Phone (optional)",
                    value: phone(),
                    oninput: move |evt: FormEvent| phone.set(evt.value()),
                }

                input {
                    class: "field",
                    r#type: "password",
                    placeholder: "Password (min 8 characters)",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                input {
                    class: "field",
                    r#type: "password",
                    placeholder: "Confirm password",
                    value: confirm_password(),
                    oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                }

                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: busy(),
                    if busy() { "Creating account..." } else { "Sign up" }
                }
            }

            p { class: "auth-alt",
                "Already have an account? "
                Link { to: Route::Login {}, "Sign in" }
            }
        }
    }
}
