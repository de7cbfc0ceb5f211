//! Route components for the role screens; each renders the shared view.

use dioxus::prelude::*;
use store::Role;
use ui::views::{
    DuesView, ListingsView, NotificationsView, ProfileView, PropertiesView, PropertyDetailView,
    TenantsView, WorkOrdersView,
};

#[component]
pub fn Properties(role: Role) -> Element {
    rsx! { PropertiesView { role } }
}

#[component]
pub fn PropertyDetail(role: Role, id: String) -> Element {
    rsx! { PropertyDetailView { role, id } }
}

#[component]
pub fn Tenants(role: Role) -> Element {
    rsx! { TenantsView { role } }
}

#[component]
pub fn Dues(role: Role) -> Element {
    rsx! { DuesView { role } }
}

#[component]
pub fn Notifications(role: Role) -> Element {
    rsx! { NotificationsView { role } }
}

#[component]
pub fn Profile(role: Role) -> Element {
    rsx! { ProfileView { role } }
}

#[component]
pub fn WorkOrders(role: Role) -> Element {
    rsx! { WorkOrdersView { role } }
}

#[component]
pub fn Listings(role: Role) -> Element {
    rsx! { ListingsView { role } }
}
