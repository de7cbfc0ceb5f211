//! Loading / error / ready rendering shared by every screen.

use api::{ApiError, ErrorKind, LoadState, SubmitState};
use dioxus::prelude::*;

use crate::icons::{FaRotateRight, FaTriangleExclamation, FaWifi};
use crate::components::{use_toast, ToastOptions};
use crate::Icon;

/// Where a screen reports its fetch error.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ErrorChannel {
    #[default]
    Inline,
    Toast,
}

/// A [`LoadState`] without its payload, cheap to pass as a prop.
#[derive(Clone, Debug, PartialEq)]
pub enum ViewStatus {
    Loading,
    Ready,
    Failed(ApiError),
}

impl ViewStatus {
    pub fn of<T>(state: &LoadState<T>) -> Self {
        match state {
            LoadState::Loading => ViewStatus::Loading,
            LoadState::Ready(_) => ViewStatus::Ready,
            LoadState::Failed(e) => ViewStatus::Failed(e.clone()),
        }
    }

    fn message(&self) -> Option<String> {
        match self {
            ViewStatus::Failed(e) => Some(e.user_message()),
            _ => None,
        }
    }
}

/// Renders a placeholder while loading, the error when failed, else `children`.
///
/// With [`ErrorChannel::Toast`] the error is raised once as a toast and the
/// children are not rendered.
#[component]
pub fn StatusGate(
    status: ViewStatus,
    #[props(default)] channel: ErrorChannel,
    #[props(default)] on_retry: Option<EventHandler<()>>,
    #[props(default = "Loading...".to_string())] loading_label: String,
    children: Element,
) -> Element {
    let toast_api = use_toast();
    let message = status.message();

    use_effect(use_reactive!(|(message, channel)| {
        if channel == ErrorChannel::Toast {
            if let Some(message) = message {
                toast_api.error(message, ToastOptions::new());
            }
        }
    }));

    match (&status, channel) {
        (ViewStatus::Loading, _) => rsx! {
            LoadingPlaceholder { label: loading_label }
        },
        (ViewStatus::Failed(_), ErrorChannel::Toast) => rsx! {},
        (ViewStatus::Failed(error), ErrorChannel::Inline) => rsx! {
            ErrorBanner { error: error.clone(), on_retry }
        },
        (ViewStatus::Ready, _) => rsx! {
            {children}
        },
    }
}

#[component]
pub fn LoadingPlaceholder(#[props(default = "Loading...".to_string())] label: String) -> Element {
    rsx! {
        div {
            class: "status-loading",
            span { class: "status-spinner" }
            span { "{label}" }
        }
    }
}

#[component]
pub fn ErrorBanner(error: ApiError, #[props(default)] on_retry: Option<EventHandler<()>>) -> Element {
    let message = error.user_message();
    rsx! {
        div {
            class: "status-error",
            role: "alert",
            if error.kind() == ErrorKind::Network {
                Icon { icon: FaWifi, width: 14, height: 14 }
            } else {
                Icon { icon: FaTriangleExclamation, width: 14, height: 14 }
            }
            span { class: "status-error-message", "{message}" }
            if let Some(retry) = on_retry {
                button {
                    class: "status-retry",
                    onclick: move |_| retry.call(()),
                    Icon { icon: FaRotateRight, width: 12, height: 12 }
                    " Retry"
                }
            }
        }
    }
}

/// Inline error for a form submission, if it failed.
#[component]
pub fn SubmitError(state: SubmitState) -> Element {
    match state.error() {
        Some(error) => rsx! {
            ErrorBanner { error: error.clone() }
        },
        None => rsx! {},
    }
}
