use api::{GuardDecision, NavMode, RouteGuard};
use dioxus::prelude::*;
use ui::sections::offers;
use ui::{use_app, use_navigation, Navbar, Navigation};

use crate::bridge::RouterBridge;
use crate::Route;

/// Outermost layout: provides router-backed navigation to everything below.
#[component]
pub fn Shell() -> Element {
    let navigator = use_navigator();
    use_context_provider(|| Navigation::new(RouterBridge(navigator)));

    rsx! {
        Outlet::<Route> {}
    }
}

/// Layout for role screens. The guard runs once per navigation; without a
/// token for the route's role it replaces the route with that role's login.
#[component]
pub fn Protected() -> Element {
    let app = use_app();
    let nav = use_navigation();
    let route = use_route::<Route>();

    match RouteGuard::check(&app.session, route.protected_role()) {
        GuardDecision::Denied { redirect, .. } => {
            nav.get().navigate(&redirect, NavMode::Replace);
            rsx! {}
        }
        GuardDecision::Open => rsx! {
            Outlet::<Route> {}
        },
        GuardDecision::Granted { role, .. } => {
            let active = route.section();
            let allowed = active.map_or(true, |s| offers(role, s));
            rsx! {
                Navbar { role, active }
                main {
                    if allowed {
                        Outlet::<Route> {}
                    } else {
                        section {
                            class: "screen",
                            h2 { "Not available" }
                            p { class: "muted", "This section is not part of the {role.title()} dashboard." }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigation();
    let path = format!("/{}", segments.join("/"));

    rsx! {
        div {
            class: "centered",
            h1 { "Page not found" }
            p { class: "muted", "Nothing lives at {path}." }
            button {
                class: "primary",
                onclick: nav.push_to("/".to_string()),
                "Choose a dashboard"
            }
        }
    }
}
