use api::endpoints::{AddTenant, ListProperties, ListTenants};
use api::filter::search;
use api::{Tenant, TenantDraft};
use dioxus::prelude::*;
use store::Role;

use crate::components::{use_toast, ToastOptions};
use crate::fetch::{use_fetch, use_submit};
use crate::format::money_or_dash;
use crate::icons::FaPlus;
use crate::search::SearchBox;
use crate::status::{StatusGate, SubmitError, ViewStatus};
use crate::views::ModalOverlay;
use crate::Icon;

#[component]
pub fn TenantsView(role: Role) -> Element {
    let toast_api = use_toast();
    let mut query = use_signal(String::new);
    let mut adding = use_signal(|| false);
    let mut fetch = use_fetch(role, ListTenants::default);
    let state = fetch.state.read().clone();

    let visible: Vec<Tenant> = state
        .ready()
        .map(|items| search(items, &query()).into_iter().cloned().collect())
        .unwrap_or_default();

    rsx! {
        section {
            class: "screen",
            header {
                class: "screen-header",
                h2 { "Tenants" }
                SearchBox { query: query(), on_input: move |q| query.set(q) }
                button {
                    class: "primary",
                    onclick: move |_| adding.set(true),
                    Icon { icon: FaPlus, width: 12, height: 12 }
                    " Add tenant"
                }
            }

            StatusGate {
                status: ViewStatus::of(&state),
                on_retry: move |_| fetch.retry(),
                if visible.is_empty() {
                    p { class: "empty", "No tenants match." }
                } else {
                    table {
                        class: "data-table",
                        thead {
                            tr {
                                th { "Name" }
                                th { "Email" }
                                th { "Phone" }
                                th { "Property" }
                                th { class: "num", "Rent" }
                            }
                        }
                        tbody {
                            for tenant in visible {
                                tr {
                                    key: "{tenant.id}",
                                    td { "{tenant.name}" }
                                    td { {tenant.email.clone().unwrap_or_default()} }
                                    td { {tenant.phone.clone().unwrap_or_default()} }
                                    td { {tenant.property.clone().unwrap_or_default()} }
                                    td { class: "num", {money_or_dash(tenant.rent)} }
                                }
                            }
                        }
                    }
                }
            }

            if adding() {
                AddTenantForm {
                    role,
                    on_close: move |_| adding.set(false),
                    on_saved: move |tenant: Tenant| {
                        adding.set(false);
                        toast_api.success(format!("Added {}", tenant.name), ToastOptions::new());
                        fetch.retry();
                    },
                }
            }
        }
    }
}

/// Modal form; its draft lives only while the modal is open.
#[component]
fn AddTenantForm(role: Role, on_close: EventHandler<()>, on_saved: EventHandler<Tenant>) -> Element {
    let mut draft = use_signal(TenantDraft::default);
    let mut invalid = use_signal(|| Option::<&'static str>::None);
    let submitter = use_submit(role);
    let properties = use_fetch(role, ListProperties::default);
    let properties = properties.state.read().clone();

    let onsubmit = {
        let submitter = submitter.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let current = draft();
            if let Err(problem) = current.validate() {
                invalid.set(Some(problem));
                return;
            }
            invalid.set(None);
            submitter.submit(AddTenant { draft: current }, None, move |tenant| on_saved.call(tenant));
        }
    };
    let submit_state = submitter.state.read().clone();

    rsx! {
        ModalOverlay {
            title: "Add tenant",
            on_close: move |_| on_close.call(()),
            form {
                class: "modal-form",
                onsubmit: onsubmit,
                div {
                    class: "form-field",
                    label { "Name" }
                    input {
                        value: draft().name,
                        oninput: move |evt| draft.write().name = evt.value(),
                    }
                }
                div {
                    class: "form-field",
                    label { "Email" }
                    input {
                        r#type: "email",
                        value: draft().email,
                        oninput: move |evt| draft.write().email = evt.value(),
                    }
                }
                div {
                    class: "form-field",
                    label { "Phone" }
                    input {
                        r#type: "tel",
                        value: draft().phone,
                        oninput: move |evt| draft.write().phone = evt.value(),
                    }
                }
                div {
                    class: "form-field",
                    label { "Property" }
                    select {
                        value: draft().property_id,
                        onchange: move |evt| draft.write().property_id = evt.value(),
                        option { value: "", "Choose a property" }
                        if let Some(items) = properties.ready() {
                            for property in items.iter() {
                                option { key: "{property.id}", value: "{property.id}", "{property.name}" }
                            }
                        }
                    }
                }
                div {
                    class: "form-field",
                    label { "Monthly rent" }
                    input {
                        inputmode: "decimal",
                        value: draft().rent,
                        oninput: move |evt| draft.write().rent = evt.value(),
                    }
                }

                if let Some(problem) = invalid() {
                    p { class: "form-invalid", "{problem}" }
                }
                SubmitError { state: submit_state.clone() }

                div {
                    class: "form-actions",
                    button {
                        r#type: "submit",
                        class: "primary",
                        disabled: submit_state.is_submitting(),
                        if submit_state.is_submitting() { "Saving..." } else { "Save" }
                    }
                    button {
                        r#type: "button",
                        class: "secondary",
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                }
            }
        }
    }
}
