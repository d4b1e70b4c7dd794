//! Login page with "remember me".

use dioxus::prelude::*;
use ui::{make_session_manager, make_store, use_config, use_session, SessionState};

use crate::Route;

#[component]
pub fn Login() -> Element {
    let mut session = use_session();
    let config = use_config();
    let nav = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut remember = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    // Already logged in
    if session().user.is_some() {
        nav.replace(Route::Applicants {});
    }

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        match make_store().authenticate(email().trim(), &password()) {
            Ok(Some(user)) => {
                if let Err(e) = make_session_manager(&config).set_logged_in_user(&user, remember()) {
                    tracing::error!("Failed to store session: {}", e);
                    error.set(Some("Could not save your session.".to_string()));
                    return;
                }
                session.set(SessionState { user: Some(user) });
                nav.push(Route::Applicants {});
            }
            Ok(None) => error.set(Some("Invalid email or password.".to_string())),
            Err(e) => {
                tracing::error!("Failed to read users: {}", e);
                error.set(Some("Stored data could not be read.".to_string()));
            }
        }
    };

    rsx! {
        div {
            class: "d-flex align-items-center justify-content-center min-vh-100 p-4",
            form {
                class: "card login-card shadow-sm p-4",
                onsubmit: onsubmit,

                h1 { class: "h4 mb-1", "PESO Portal" }
                p { class: "text-muted mb-4", "Public Employment Service Office" }

                if let Some(message) = error() {
                    div { class: "alert alert-danger py-2", "{message}" }
                }

                div {
                    class: "mb-3",
                    label { class: "form-label", r#for: "email", "Email" }
                    input {
                        id: "email",
                        class: "form-control",
                        r#type: "email",
                        value: "{email}",
                        oninput: move |evt| email.set(evt.value()),
                    }
                }
                div {
                    class: "mb-3",
                    label { class: "form-label", r#for: "password", "Password" }
                    input {
                        id: "password",
                        class: "form-control",
                        r#type: "password",
                        value: "{password}",
                        oninput: move |evt| password.set(evt.value()),
                    }
                }
                div {
                    class: "form-check mb-3",
                    input {
                        id: "remember",
                        class: "form-check-input",
                        r#type: "checkbox",
                        checked: remember(),
                        onchange: move |evt| remember.set(evt.checked()),
                    }
                    label { class: "form-check-label", r#for: "remember", "Remember me" }
                }
                button {
                    class: "btn btn-primary w-100",
                    r#type: "submit",
                    "Log in"
                }
            }
        }
    }
}
