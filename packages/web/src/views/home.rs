//! Role picker shown at `/`.

use dioxus::prelude::*;
use store::Role;
use ui::{use_app, use_navigation};

#[component]
pub fn Home() -> Element {
    let app = use_app();
    let nav = use_navigation();

    rsx! {
        div {
            class: "centered",
            h1 { "PropDesk" }
            p { class: "muted", "Choose your dashboard:" }
            div {
                class: "role-picker",
                for role in Role::ALL {
                    button {
                        key: "{role.slug()}",
                        // Signed-in roles go straight to their dashboard
                        onclick: {
                            let profile = app.session.profile(role);
                            let target = if app.session.is_signed_in(role) {
                                profile.home_path.clone()
                            } else {
                                profile.login_path.clone()
                            };
                            nav.push_to(target)
                        },
                        "{role.title()}"
                    }
                }
            }
        }
    }
}
