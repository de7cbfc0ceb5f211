use api::endpoints::FetchProfile;
use dioxus::prelude::*;
use store::Role;

use crate::fetch::use_fetch;
use crate::status::{StatusGate, ViewStatus};

#[component]
pub fn ProfileView(role: Role) -> Element {
    let mut fetch = use_fetch(role, || FetchProfile);
    let state = fetch.state.read().clone();

    rsx! {
        section {
            class: "screen",
            header { class: "screen-header", h2 { "Profile" } }
            StatusGate {
                status: ViewStatus::of(&state),
                on_retry: move |_| fetch.retry(),
                if let Some(profile) = state.ready() {
                    article {
                        class: "detail-card",
                        h2 { "{profile.display_name()}" }
                        dl {
                            dt { "Role" }
                            dd { {profile.role.clone().unwrap_or_else(|| role.title().to_string())} }
                            dt { "Email" }
                            dd { {profile.email.clone().unwrap_or_else(|| "-".to_string())} }
                            dt { "Phone" }
                            dd { {profile.phone.clone().unwrap_or_else(|| "-".to_string())} }
                        }
                    }
                }
            }
        }
    }
}
