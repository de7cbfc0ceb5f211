//! Login form and logout button for a role.

use api::endpoints::Login;
use api::{FetchOutcome, SubmitState};
use dioxus::prelude::*;
use store::Role;

use crate::app::{controller, use_app, use_navigation};
use crate::components::{use_toast, ToastOptions};
use crate::icons::{FaEye, FaEyeSlash, FaRightFromBracket};
use crate::status::SubmitError;
use crate::Icon;

/// Email/password form. On success the session is stored and the router
/// replaces the login screen with the role's home.
#[component]
pub fn LoginForm(role: Role) -> Element {
    let app = use_app();
    let nav = use_navigation();
    let toast_api = use_toast();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut show_password = use_signal(|| false);
    let mut state = use_signal(SubmitState::default);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        if state.peek().is_submitting() {
            return;
        }
        let credentials = Login {
            email: email().trim().to_string(),
            password: password(),
        };
        if credentials.email.is_empty() || credentials.password.is_empty() {
            state.set(SubmitState::Failed(api::ApiError::Api {
                status: 0,
                message: "Enter your email and password.".to_string(),
            }));
            return;
        }
        let app = app.clone();
        let nav = nav.clone();
        state.set(SubmitState::Submitting);
        spawn(async move {
            match controller(&app, &nav, role).sign_in(&credentials).await {
                FetchOutcome::Ready(grant) => {
                    state.set(SubmitState::Done);
                    let name = grant.display_name.unwrap_or_else(|| credentials.email.clone());
                    toast_api.success(format!("Welcome, {name}"), ToastOptions::new());
                }
                FetchOutcome::Failed(e) => {
                    tracing::warn!("{role} login failed: {e}");
                    state.set(SubmitState::Failed(e));
                }
                FetchOutcome::Redirected(_) | FetchOutcome::Stale => {}
            }
        });
    };

    rsx! {
        form {
            class: "login-form",
            onsubmit: onsubmit,
            h1 { "{role.title()} login" }

            div {
                class: "form-field",
                label { r#for: "login-email", "Email" }
                input {
                    id: "login-email",
                    r#type: "email",
                    autocomplete: "username",
                    value: email(),
                    oninput: move |evt| email.set(evt.value()),
                }
            }

            div {
                class: "form-field",
                label { r#for: "login-password", "Password" }
                div {
                    class: "password-field",
                    input {
                        id: "login-password",
                        r#type: if show_password() { "text" } else { "password" },
                        autocomplete: "current-password",
                        value: password(),
                        oninput: move |evt| password.set(evt.value()),
                    }
                    button {
                        r#type: "button",
                        class: "password-toggle",
                        title: if show_password() { "Hide password" } else { "Show password" },
                        onclick: move |_| show_password.toggle(),
                        if show_password() {
                            Icon { icon: FaEyeSlash, width: 14, height: 14 }
                        } else {
                            Icon { icon: FaEye, width: 14, height: 14 }
                        }
                    }
                }
            }

            SubmitError { state: state() }

            button {
                r#type: "submit",
                class: "primary",
                disabled: state().is_submitting(),
                if state().is_submitting() {
                    "Signing in..."
                } else {
                    "Sign in"
                }
            }
        }
    }
}

/// Button to log out the role and return to its login screen.
#[component]
pub fn LogoutButton(
    role: Role,
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let app = use_app();
    let nav = use_navigation();

    let onclick = move |_| {
        tracing::info!("Signing out {role}");
        controller(&app, &nav, role).sign_out();
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            Icon { icon: FaRightFromBracket, width: 12, height: 12 }
            " {label}"
        }
    }
}
