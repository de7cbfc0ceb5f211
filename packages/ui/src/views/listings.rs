use api::endpoints::ListListings;
use api::filter::{search, Range};
use api::Listing;
use dioxus::prelude::*;
use store::Role;

use crate::fetch::use_fetch;
use crate::format::money_or_dash;
use crate::search::{RangeFilter, SearchBox};
use crate::status::{StatusGate, ViewStatus};

#[component]
pub fn ListingsView(role: Role) -> Element {
    let mut query = use_signal(String::new);
    let mut price = use_signal(Range::default);
    let mut fetch = use_fetch(role, || ListListings);
    let state = fetch.state.read().clone();

    let visible: Vec<Listing> = state
        .ready()
        .map(|items| {
            search(items, &query())
                .into_iter()
                .filter(|l| price().contains(l.price))
                .cloned()
                .collect()
        })
        .unwrap_or_default();

    rsx! {
        section {
            class: "screen",
            header {
                class: "screen-header",
                h2 { "Listings" }
                SearchBox { query: query(), on_input: move |q| query.set(q) }
                RangeFilter { label: "Price", on_change: move |r| price.set(r) }
            }
            StatusGate {
                status: ViewStatus::of(&state),
                on_retry: move |_| fetch.retry(),
                if visible.is_empty() {
                    p { class: "empty", "No listings match." }
                } else {
                    div {
                        class: "card-grid",
                        for listing in visible {
                            article {
                                key: "{listing.id}",
                                class: "card",
                                h3 { "{listing.name}" }
                                p { class: "muted", {listing.location.clone().unwrap_or_default()} }
                                p { class: "card-price", {money_or_dash(listing.price)} }
                                if let Some(status) = &listing.status {
                                    span { class: "badge", "{status}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
