//! # API crate: backend access for PropDesk
//!
//! Everything between a screen and the property-management backend lives
//! here: endpoint contracts, envelope normalization, error classification,
//! the route guard, and the fetch lifecycle every screen runs through. Nothing
//! in this crate depends on the UI framework; navigation is reached through
//! the [`Navigate`] trait so the lifecycle is testable without a router.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: builds requests, sends them, classifies responses |
//! | [`controller`] | [`FetchController`]: guard, fetch, 401 recovery, stale-result dropping |
//! | [`endpoints`] | One typed adapter per backend contract |
//! | [`envelope`] | Absorbs the backend's inconsistent response envelopes |
//! | [`error`] | [`ApiError`] and the fixed user-facing messages |
//! | [`filter`] | Client-side search and numeric range filters |
//! | [`guard`] | [`RouteGuard`]: the single token check before protected screens |
//! | [`models`] | Domain records decoded from backend JSON |
//! | [`navigation`] | [`Navigate`] seam and role path helpers |
//! | [`scope`] | [`RequestScope`]: request lifetimes tied to a mounted screen |
//! | [`transport`] | [`HttpTransport`] seam and the `reqwest` implementation |

pub mod client;
pub mod controller;
pub mod endpoints;
pub mod envelope;
pub mod error;
pub mod filter;
pub mod guard;
pub mod models;
pub mod navigation;
pub mod scope;
pub mod transport;

#[cfg(test)]
pub(crate) mod testing;

pub use client::ApiClient;
pub use controller::{FetchController, FetchOutcome, LoadState, SubmitState};
pub use endpoints::Endpoint;
pub use error::{ApiError, ErrorKind};
pub use guard::{GuardDecision, RouteGuard};
pub use models::{
    Due, Listing, LoginGrant, Notification, Profile, Property, Tenant, TenantDraft, WorkOrder,
};
pub use navigation::{NavMode, Navigate};
pub use scope::{RequestScope, RequestTicket};
pub use transport::{HttpTransport, ReqwestTransport};
