use dioxus::prelude::*;

use store::{AppConfig, Role};
use ui::{AppProvider, Section};
use views::{
    Dashboard, Dues, Home, Listings, Login, NotFound, Notifications, Profile, Properties,
    PropertyDetail, Protected, Shell, Tenants, WorkOrders,
};

mod bridge;
mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/:role/login")]
        Login { role: Role },
        #[layout(Protected)]
            #[route("/:role/dashboard")]
            Dashboard { role: Role },
            #[route("/:role/properties")]
            Properties { role: Role },
            #[route("/:role/properties/:id")]
            PropertyDetail { role: Role, id: String },
            #[route("/:role/tenants")]
            Tenants { role: Role },
            #[route("/:role/dues")]
            Dues { role: Role },
            #[route("/:role/notifications")]
            Notifications { role: Role },
            #[route("/:role/profile")]
            Profile { role: Role },
            #[route("/:role/work-orders")]
            WorkOrders { role: Role },
            #[route("/:role/listings")]
            Listings { role: Role },
        #[end_layout]
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

impl Route {
    /// The role a protected route belongs to; `None` for public routes.
    fn protected_role(&self) -> Option<Role> {
        match self {
            Route::Home {} | Route::Login { .. } | Route::NotFound { .. } => None,
            Route::Dashboard { role }
            | Route::Properties { role }
            | Route::PropertyDetail { role, .. }
            | Route::Tenants { role }
            | Route::Dues { role }
            | Route::Notifications { role }
            | Route::Profile { role }
            | Route::WorkOrders { role }
            | Route::Listings { role } => Some(*role),
        }
    }

    fn section(&self) -> Option<Section> {
        match self {
            Route::Properties { .. } | Route::PropertyDetail { .. } => Some(Section::Properties),
            Route::Tenants { .. } => Some(Section::Tenants),
            Route::Dues { .. } => Some(Section::Dues),
            Route::Notifications { .. } => Some(Section::Notifications),
            Route::Profile { .. } => Some(Section::Profile),
            Route::WorkOrders { .. } => Some(Section::WorkOrders),
            Route::Listings { .. } => Some(Section::Listings),
            _ => None,
        }
    }
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const CONFIG_TOML: &str = include_str!("../propdesk.toml");

fn main() {
    dioxus::launch(App);
}

/// Bundled configuration, with the backend URL overridable at build time.
fn load_config() -> AppConfig {
    let config = AppConfig::from_toml(CONFIG_TOML).unwrap_or_else(|e| {
        tracing::error!("Invalid {}: {e}; using defaults", AppConfig::filename());
        AppConfig::default()
    });
    match option_env!("PROPDESK_API_URL") {
        Some(url) if !url.trim().is_empty() => config.with_base_url(url),
        _ => config,
    }
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: ui::UI_CSS }

        AppProvider {
            config,
            Router::<Route> {}
        }
    }
}
