use api::endpoints::ListWorkOrders;
use api::filter::search;
use api::WorkOrder;
use dioxus::prelude::*;
use store::Role;

use crate::fetch::use_fetch;
use crate::format::date_or_dash;
use crate::search::SearchBox;
use crate::status::{StatusGate, ViewStatus};

#[component]
pub fn WorkOrdersView(role: Role) -> Element {
    let mut query = use_signal(String::new);
    let mut fetch = use_fetch(role, || ListWorkOrders);
    let state = fetch.state.read().clone();

    let visible: Vec<WorkOrder> = state
        .ready()
        .map(|items| search(items, &query()).into_iter().cloned().collect())
        .unwrap_or_default();

    rsx! {
        section {
            class: "screen",
            header {
                class: "screen-header",
                h2 { "Work orders" }
                SearchBox { query: query(), on_input: move |q| query.set(q) }
            }
            StatusGate {
                status: ViewStatus::of(&state),
                on_retry: move |_| fetch.retry(),
                if visible.is_empty() {
                    p { class: "empty", "No work orders match." }
                } else {
                    table {
                        class: "data-table",
                        thead {
                            tr {
                                th { "Task" }
                                th { "Property" }
                                th { "Priority" }
                                th { "Scheduled" }
                                th { "Status" }
                            }
                        }
                        tbody {
                            for order in visible {
                                tr {
                                    key: "{order.id}",
                                    td { "{order.name}" }
                                    td { {order.property.clone().unwrap_or_default()} }
                                    td { {order.priority.clone().unwrap_or_default()} }
                                    td { {date_or_dash(order.scheduled_for.as_deref())} }
                                    td { {order.status.clone().unwrap_or_else(|| "open".to_string())} }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
