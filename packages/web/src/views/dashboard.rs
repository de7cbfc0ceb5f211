//! Role home: one tile per section the role offers, plus summary panels.

use api::navigation::paths;
use dioxus::prelude::*;
use store::Role;
use ui::sections::{offers, sections_for, Section};
use ui::views::DuesSummary;
use ui::{use_app, use_navigation};

#[component]
pub fn Dashboard(role: Role) -> Element {
    let app = use_app();
    let nav = use_navigation();
    let name = app
        .session
        .display_name(role)
        .unwrap_or_else(|| role.title().to_string());

    rsx! {
        section {
            class: "screen",
            header { class: "screen-header", h2 { "Welcome, {name}" } }
            div {
                class: "dashboard-tiles",
                for section in sections_for(role).iter().copied() {
                    button {
                        key: "{section.slug()}",
                        onclick: nav.push_to(paths::section(role, section.slug())),
                        "{section.title()}"
                    }
                }
            }
            if offers(role, Section::Dues) {
                DuesSummary { role }
            }
        }
    }
}
