use dioxus::prelude::*;
use dioxus_primitives::toast;

pub use dioxus_primitives::toast::{use_toast, ToastOptions};

/// Toast region for the app; at most `max_toasts` are shown at once.
#[component]
pub fn ToastProvider(#[props(default = 5)] max_toasts: usize, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("/src/components/toast/style.css") }
        toast::ToastProvider {
            max_toasts: max_toasts.max(1),
            {children}
        }
    }
}
