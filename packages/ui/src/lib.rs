//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const UI_CSS: Asset = asset!("/assets/styling/ui.css");

mod app;
pub use app::{controller, use_app, use_navigation, AppContext, AppProvider, Navigation, PlatformStorage};

mod fetch;
pub use fetch::{use_dependent_fetch, use_fetch, use_submit, FetchHandle, SubmitHandle};

pub mod format;

mod status;
pub use status::{ErrorBanner, ErrorChannel, LoadingPlaceholder, StatusGate, SubmitError, ViewStatus};

mod search;
pub use search::{RangeFilter, SearchBox};

mod clock;
pub use clock::Clock;

pub mod sections;
pub use sections::{sections_for, Section};

mod auth;
pub use auth::{LoginForm, LogoutButton};

mod navbar;
pub use navbar::Navbar;

pub mod views;
