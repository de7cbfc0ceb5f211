use api::endpoints::ListDues;
use api::filter::{matches_query, within, Range, Searchable};
use api::Due;
use dioxus::prelude::*;
use store::Role;

use crate::fetch::use_fetch;
use crate::format::{date_or_dash, money, money_or_dash};
use crate::search::{RangeFilter, SearchBox};
use crate::status::{StatusGate, ViewStatus};

/// Sum of amounts not yet paid.
pub fn outstanding(dues: &[Due]) -> f64 {
    dues.iter()
        .filter(|d| !d.is_paid())
        .filter_map(|d| d.amount)
        .sum()
}

#[component]
pub fn DuesView(role: Role) -> Element {
    let mut query = use_signal(String::new);
    let mut amount = use_signal(Range::default);
    let mut fetch = use_fetch(role, || ListDues);
    let state = fetch.state.read().clone();

    let visible: Vec<Due> = state
        .ready()
        .map(|items| {
            within(items, amount(), |d| d.amount)
                .into_iter()
                .filter(|d| matches_query(d.search_text(), &query()))
                .cloned()
                .collect()
        })
        .unwrap_or_default();
    let total = money(outstanding(&visible));

    rsx! {
        section {
            class: "screen",
            header {
                class: "screen-header",
                h2 { "Dues" }
                SearchBox { query: query(), on_input: move |q| query.set(q) }
                RangeFilter { label: "Amount", on_change: move |r| amount.set(r) }
            }

            StatusGate {
                status: ViewStatus::of(&state),
                on_retry: move |_| fetch.retry(),
                p { class: "summary", "Outstanding: {total}" }
                if visible.is_empty() {
                    p { class: "empty", "No dues match." }
                } else {
                    table {
                        class: "data-table",
                        thead {
                            tr {
                                th { "Name" }
                                th { "Property" }
                                th { "Due date" }
                                th { class: "num", "Amount" }
                                th { "Status" }
                            }
                        }
                        tbody {
                            for due in visible {
                                tr {
                                    key: "{due.id}",
                                    class: if due.is_paid() { "paid" } else { "unpaid" },
                                    td { "{due.name}" }
                                    td { {due.property.clone().unwrap_or_default()} }
                                    td { {date_or_dash(due.due_date.as_deref())} }
                                    td { class: "num", {money_or_dash(due.amount)} }
                                    td { {due.status.clone().unwrap_or_else(|| "pending".to_string())} }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Compact outstanding total for a dashboard.
#[component]
pub fn DuesSummary(role: Role) -> Element {
    let mut fetch = use_fetch(role, || ListDues);
    let state = fetch.state.read().clone();
    let (count, total) = state
        .ready()
        .map(|dues| (dues.iter().filter(|d| !d.is_paid()).count(), outstanding(dues)))
        .unwrap_or((0, 0.0));

    rsx! {
        div {
            class: "panel",
            h3 { "Outstanding dues" }
            StatusGate {
                status: ViewStatus::of(&state),
                on_retry: move |_| fetch.retry(),
                p { class: "panel-figure", {money(total)} }
                p { class: "panel-caption", "{count} unpaid" }
            }
        }
    }
}
