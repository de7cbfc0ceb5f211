//! Login page for one role.

use api::NavMode;
use dioxus::prelude::*;
use store::Role;
use ui::{use_app, use_navigation, LoginForm};

#[component]
pub fn Login(role: Role) -> Element {
    let app = use_app();
    let nav = use_navigation();

    // If already logged in, go to the dashboard
    if app.session.is_signed_in(role) {
        nav.get()
            .navigate(&app.session.profile(role).home_path, NavMode::Replace);
        return rsx! {};
    }

    rsx! {
        div {
            class: "centered",
            LoginForm { role }
            button {
                class: "secondary",
                onclick: nav.push_to("/".to_string()),
                "Choose another dashboard"
            }
        }
    }
}
