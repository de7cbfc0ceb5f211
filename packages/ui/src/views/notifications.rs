use api::endpoints::{FetchProfile, ListNotifications};
use api::Profile;
use dioxus::prelude::*;
use store::Role;

use crate::fetch::use_dependent_fetch;
use crate::format::date_or_dash;
use crate::status::{ErrorChannel, StatusGate, ViewStatus};

/// Notifications for the signed-in user; the user id comes from the profile,
/// so the list is only requested once the profile has loaded.
#[component]
pub fn NotificationsView(role: Role) -> Element {
    let mut fetch = use_dependent_fetch(role, || FetchProfile, |profile: &Profile| {
        ListNotifications {
            user_id: profile.id.clone(),
        }
    });
    let state = fetch.state.read().clone();

    rsx! {
        section {
            class: "screen",
            header {
                class: "screen-header",
                h2 { "Notifications" }
                button {
                    class: "secondary",
                    disabled: state.is_loading(),
                    onclick: move |_| fetch.retry(),
                    "Refresh"
                }
            }
            StatusGate {
                status: ViewStatus::of(&state),
                channel: ErrorChannel::Toast,
                if let Some((_, notifications)) = state.ready() {
                    if notifications.is_empty() {
                        p { class: "empty", "You're all caught up." }
                    } else {
                        ul {
                            class: "notification-list",
                            for note in notifications.iter() {
                                li {
                                    key: "{note.id}",
                                    class: if note.read { "notification" } else { "notification unread" },
                                    div {
                                        class: "notification-head",
                                        strong { "{note.name}" }
                                        span { class: "muted", {date_or_dash(note.created_at.as_deref())} }
                                    }
                                    if let Some(message) = &note.message {
                                        p { "{message}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
