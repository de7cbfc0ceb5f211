//! Local filter widgets. They narrow what a screen already holds.

use api::filter::Range;
use dioxus::prelude::*;

use crate::icons::FaMagnifyingGlass;
use crate::Icon;

#[component]
pub fn SearchBox(
    query: String,
    on_input: EventHandler<String>,
    #[props(default = "Search by name".to_string())] placeholder: String,
) -> Element {
    rsx! {
        label {
            class: "search-box",
            Icon { icon: FaMagnifyingGlass, width: 12, height: 12 }
            input {
                r#type: "search",
                placeholder: "{placeholder}",
                value: "{query}",
                oninput: move |evt| on_input.call(evt.value()),
            }
        }
    }
}

/// Min/max inputs; emits the parsed [`Range`] on every change.
#[component]
pub fn RangeFilter(label: String, on_change: EventHandler<Range>) -> Element {
    let mut min = use_signal(String::new);
    let mut max = use_signal(String::new);

    rsx! {
        div {
            class: "range-filter",
            span { class: "range-filter-label", "{label}" }
            input {
                r#type: "text",
                inputmode: "decimal",
                placeholder: "Min",
                value: min(),
                oninput: move |evt| {
                    min.set(evt.value());
                    on_change.call(Range::parse(&min(), &max()));
                },
            }
            input {
                r#type: "text",
                inputmode: "decimal",
                placeholder: "Max",
                value: max(),
                oninput: move |evt| {
                    max.set(evt.value());
                    on_change.call(Range::parse(&min(), &max()));
                },
            }
        }
    }
}
