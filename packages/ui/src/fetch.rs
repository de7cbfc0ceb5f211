//! Hooks that run the fetch lifecycle for a mounted screen.
//!
//! Each hook owns a [`RequestScope`] for the component that called it. Every
//! run of the resource takes a fresh ticket, and the scope is closed on
//! unmount, so a late response never writes into a dead or superseded screen.
//! Signals read inside the `make` closure are tracked: changing them refetches.

use api::{Endpoint, LoadState, RequestScope, SubmitState};
use dioxus::prelude::*;
use store::Role;

use crate::app::{controller, use_app, use_navigation, AppContext, Navigation};

/// State of a screen's fetch plus a way to issue it again.
pub struct FetchHandle<T: 'static> {
    pub state: Signal<LoadState<T>>,
    resource: Resource<()>,
}

impl<T: 'static> Clone for FetchHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for FetchHandle<T> {}

impl<T: 'static> FetchHandle<T> {
    /// Refetch; the result replaces the current state wholesale.
    pub fn retry(&mut self) {
        self.resource.restart();
    }
}

fn use_scope() -> RequestScope {
    let scope = use_hook(RequestScope::new);
    use_drop({
        let scope = scope.clone();
        move || scope.close()
    });
    scope
}

/// Fetch `make()` for `role` on mount and whenever signals read by `make` change.
pub fn use_fetch<E, F>(role: Role, make: F) -> FetchHandle<E::Output>
where
    E: Endpoint + 'static,
    E::Output: 'static,
    F: Fn() -> E + 'static,
{
    let app = use_app();
    let nav = use_navigation();
    let scope = use_scope();
    let mut state = use_signal(|| LoadState::Loading);

    let resource = use_resource(move || {
        let endpoint = make();
        let app = app.clone();
        let nav = nav.clone();
        let ticket = scope.begin();
        async move {
            state.set(LoadState::Loading);
            let outcome = controller(&app, &nav, role)
                .load_scoped(&ticket, &endpoint)
                .await;
            if let Some(next) = outcome.into_state() {
                state.set(next);
            }
        }
    });

    FetchHandle { state, resource }
}

/// Fetch `first`, then the endpoint `next` derives from its result.
///
/// The second request waits for the first and is skipped if it failed.
pub fn use_dependent_fetch<A, B, F, G>(role: Role, first: F, next: G) -> FetchHandle<(A::Output, B::Output)>
where
    A: Endpoint + 'static,
    B: Endpoint + 'static,
    A::Output: 'static,
    B::Output: 'static,
    F: Fn() -> A + 'static,
    G: Fn(&A::Output) -> B + Copy + 'static,
{
    let app = use_app();
    let nav = use_navigation();
    let scope = use_scope();
    let mut state = use_signal(|| LoadState::Loading);

    let resource = use_resource(move || {
        let endpoint = first();
        let app = app.clone();
        let nav = nav.clone();
        let ticket = scope.begin();
        async move {
            state.set(LoadState::Loading);
            let outcome = controller(&app, &nav, role)
                .load_then(&ticket, &endpoint, next)
                .await;
            if let Some(loaded) = outcome.into_state() {
                state.set(loaded);
            }
        }
    });

    FetchHandle { state, resource }
}

/// Form submission for one role.
#[derive(Clone)]
pub struct SubmitHandle {
    pub state: Signal<SubmitState>,
    app: AppContext,
    nav: Navigation,
    scope: RequestScope,
    role: Role,
}

impl SubmitHandle {
    /// Send `endpoint`; on success push `success_path` (if any) and call `on_done`.
    pub fn submit<E, D>(&self, endpoint: E, success_path: Option<String>, on_done: D)
    where
        E: Endpoint + 'static,
        D: FnOnce(E::Output) + 'static,
    {
        if self.state.peek().is_submitting() {
            return;
        }
        let mut state = self.state;
        let app = self.app.clone();
        let nav = self.nav.clone();
        let ticket = self.scope.begin();
        let role = self.role;
        state.set(SubmitState::Submitting);
        spawn(async move {
            let outcome = controller(&app, &nav, role)
                .submit(&ticket, &endpoint, success_path.as_deref())
                .await;
            match outcome {
                api::FetchOutcome::Ready(value) => {
                    state.set(SubmitState::Done);
                    on_done(value);
                }
                other => {
                    if let Some(next) = other.into_submit_state() {
                        state.set(next);
                    }
                }
            }
        });
    }

    pub fn reset(&mut self) {
        self.state.set(SubmitState::Idle);
    }
}

pub fn use_submit(role: Role) -> SubmitHandle {
    let app = use_app();
    let nav = use_navigation();
    let scope = use_scope();
    let state = use_signal(SubmitState::default);
    SubmitHandle {
        state,
        app,
        nav,
        scope,
        role,
    }
}
