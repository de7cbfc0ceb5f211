use api::navigation::paths;
use dioxus::prelude::*;
use store::Role;

use crate::app::{use_app, use_navigation};
use crate::auth::LogoutButton;
use crate::clock::Clock;
use crate::sections::{sections_for, Section};

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

#[component]
pub fn Navbar(role: Role, #[props(default)] active: Option<Section>) -> Element {
    let app = use_app();
    let nav = use_navigation();
    let user = app.session.display_name(role);
    let home = app.session.profile(role).home_path.clone();

    rsx! {
        document::Stylesheet { href: NAVBAR_CSS }
        nav {
            class: "navbar",
            button {
                class: "navbar-brand",
                onclick: nav.push_to(home),
                "PropDesk"
                span { class: "navbar-role", "{role.title()}" }
            }
            div {
                class: "navbar-links",
                for section in sections_for(role).iter().copied() {
                    button {
                        key: "{section.slug()}",
                        class: if active == Some(section) { "navbar-link active" } else { "navbar-link" },
                        onclick: nav.push_to(paths::section(role, section.slug())),
                        "{section.title()}"
                    }
                }
            }
            div {
                class: "navbar-end",
                Clock {}
                if let Some(user) = user {
                    span { class: "navbar-user", "{user}" }
                }
                LogoutButton { role, class: "navbar-logout" }
            }
        }
    }
}
