use api::endpoints::GetProperty;
use dioxus::prelude::*;
use store::Role;

use crate::app::use_navigation;
use crate::fetch::use_fetch;
use crate::format::money_or_dash;
use crate::icons::FaArrowLeft;
use crate::status::{StatusGate, ViewStatus};
use crate::Icon;

#[component]
pub fn PropertyDetailView(role: Role, id: String) -> Element {
    // Track the id in a signal so the fetch re-runs on route param change
    let mut id_signal = use_signal(|| id.clone());
    if *id_signal.peek() != id {
        id_signal.set(id.clone());
    }

    let nav = use_navigation();
    let mut fetch = use_fetch(role, move || GetProperty { id: id_signal() });
    let state = fetch.state.read().clone();

    rsx! {
        section {
            class: "screen",
            header {
                class: "screen-header",
                button {
                    class: "back",
                    onclick: move |_| nav.get().back(),
                    Icon { icon: FaArrowLeft, width: 12, height: 12 }
                    " Back"
                }
            }
            StatusGate {
                status: ViewStatus::of(&state),
                on_retry: move |_| fetch.retry(),
                if let Some(property) = state.ready() {
                    article {
                        class: "detail-card",
                        h2 { "{property.name}" }
                        dl {
                            dt { "Address" }
                            dd { {property.address.clone().unwrap_or_else(|| "-".to_string())} }
                            dt { "City" }
                            dd { {property.city.clone().unwrap_or_else(|| "-".to_string())} }
                            dt { "Units" }
                            dd { {property.units.map(|u| u.to_string()).unwrap_or_else(|| "-".to_string())} }
                            dt { "Rent" }
                            dd { {money_or_dash(property.rent)} }
                            dt { "Status" }
                            dd { {property.status.clone().unwrap_or_else(|| "-".to_string())} }
                        }
                    }
                }
            }
        }
    }
}
