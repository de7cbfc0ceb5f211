use api::endpoints::ListProperties;
use api::filter::{search, Range};
use api::navigation::paths;
use api::Property;
use dioxus::prelude::*;
use store::Role;

use crate::app::{use_app, use_navigation};
use crate::fetch::use_fetch;
use crate::format::money_or_dash;
use crate::search::{RangeFilter, SearchBox};
use crate::status::{StatusGate, ViewStatus};

/// Paginated property list with name search and a rent range.
#[component]
pub fn PropertiesView(role: Role) -> Element {
    let app = use_app();
    let nav = use_navigation();
    let page_size = app.config.api.page_size;
    let mut page = use_signal(|| 1u32);
    let mut query = use_signal(String::new);
    let mut rent = use_signal(Range::default);

    let mut fetch = use_fetch(role, move || ListProperties {
        page: Some(page()),
        limit: Some(page_size),
    });
    let state = fetch.state.read().clone();

    let fetched = state.ready().map(Vec::len).unwrap_or(0);
    let visible: Vec<Property> = state
        .ready()
        .map(|items| {
            search(items, &query())
                .into_iter()
                .filter(|p| rent().contains(p.rent))
                .cloned()
                .collect()
        })
        .unwrap_or_default();

    rsx! {
        section {
            class: "screen",
            header {
                class: "screen-header",
                h2 { "Properties" }
                SearchBox { query: query(), on_input: move |q| query.set(q) }
                RangeFilter { label: "Rent", on_change: move |r| rent.set(r) }
            }

            StatusGate {
                status: ViewStatus::of(&state),
                on_retry: move |_| fetch.retry(),
                if visible.is_empty() {
                    p { class: "empty", "No properties match." }
                } else {
                    table {
                        class: "data-table clickable",
                        thead {
                            tr {
                                th { "Name" }
                                th { "Address" }
                                th { "City" }
                                th { class: "num", "Units" }
                                th { class: "num", "Rent" }
                                th { "Status" }
                            }
                        }
                        tbody {
                            for property in visible {
                                tr {
                                    key: "{property.id}",
                                    onclick: nav.push_to(paths::detail(role, "properties", &property.id)),
                                    td { "{property.name}" }
                                    td { {property.address.clone().unwrap_or_default()} }
                                    td { {property.city.clone().unwrap_or_default()} }
                                    td { class: "num", {property.units.map(|u| u.to_string()).unwrap_or_default()} }
                                    td { class: "num", {money_or_dash(property.rent)} }
                                    td { {property.status.clone().unwrap_or_default()} }
                                }
                            }
                        }
                    }
                }
            }

            div {
                class: "pager",
                button {
                    disabled: page() <= 1,
                    onclick: move |_| page -= 1,
                    "Previous"
                }
                span { "Page {page}" }
                button {
                    disabled: state.is_loading() || fetched < page_size as usize,
                    onclick: move |_| page += 1,
                    "Next"
                }
            }
        }
    }
}
