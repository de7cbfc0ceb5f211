//! Application-wide context: session, API client, configuration, navigation.

use std::rc::Rc;

use api::{ApiClient, FetchController, NavMode, Navigate, ReqwestTransport};
use dioxus::prelude::*;
use store::{AppConfig, Role, RoleRegistry, Session};

use crate::components::ToastProvider;

/// Storage behind the session: `localStorage` in the browser, memory elsewhere.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStorage = store::LocalStorage;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformStorage = store::MemoryStorage;

/// Everything a screen needs to talk to the backend.
#[derive(Clone)]
pub struct AppContext {
    pub session: Session<PlatformStorage>,
    pub client: ApiClient<ReqwestTransport>,
    pub config: AppConfig,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        let roles = RoleRegistry::from_config(&config);
        let session = Session::new(PlatformStorage::default(), roles);
        session.report_key_mismatches();
        let client = ApiClient::new(&config.api.base_url, ReqwestTransport::new());
        tracing::info!("Using backend at {}", client.base_url());
        Self {
            session,
            client,
            config,
        }
    }
}

pub fn use_app() -> AppContext {
    use_context::<AppContext>()
}

/// Provider component that builds the [`AppContext`] once from `config`.
#[component]
pub fn AppProvider(config: AppConfig, children: Element) -> Element {
    use_context_provider(|| AppContext::new(config.clone()));

    rsx! {
        ToastProvider {
            max_toasts: config.ui.toast_limit,
            {children}
        }
    }
}

/// Router-backed navigation, provided by the shell inside the router.
#[derive(Clone)]
pub struct Navigation(Rc<dyn Navigate>);

impl Navigation {
    pub fn new(navigate: impl Navigate + 'static) -> Self {
        Self(Rc::new(navigate))
    }

    pub fn get(&self) -> &dyn Navigate {
        &*self.0
    }

    /// Click handler that pushes `path`.
    pub fn push_to(&self, path: String) -> impl FnMut(MouseEvent) + 'static {
        let nav = self.clone();
        move |_| nav.get().navigate(&path, NavMode::Push)
    }
}

pub fn use_navigation() -> Navigation {
    use_context::<Navigation>()
}

/// Build a controller for `role` from the app and navigation contexts.
pub fn controller<'a>(
    app: &'a AppContext,
    nav: &'a Navigation,
    role: Role,
) -> FetchController<'a, PlatformStorage, ReqwestTransport, &'a dyn Navigate> {
    FetchController::new(&app.session, &app.client, nav.get(), role)
}
