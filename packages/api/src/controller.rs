//! # Fetch-and-render controller
//!
//! Every screen goes through the same lifecycle, implemented once here:
//!
//! 1. **Entry**: the [`RouteGuard`] looks up the role's token. Without one the
//!    controller navigates (replace) to the role's login path and issues no
//!    request.
//! 2. **Request**: the endpoint is called with `Authorization: Bearer <token>`.
//!    Nothing is retried or deduplicated.
//! 3. **Settle**: success becomes [`FetchOutcome::Ready`], which replaces the
//!    screen's state wholesale. A 401 signs the role out and navigates to its
//!    login path, once. Every other error is terminal and surfaced to the
//!    screen.
//! 4. **Staleness**: if the request's [`RequestTicket`] was superseded or its
//!    scope closed while in flight, the result is dropped as
//!    [`FetchOutcome::Stale`]: no state write, no navigation.
//!
//! [`FetchController::load_then`] chains a dependent request that is only
//! issued after the first one resolved successfully. Forms use
//! [`FetchController::submit`]; login and logout use
//! [`FetchController::sign_in`] / [`FetchController::sign_out`].

use store::{Role, RoleProfile, Session, SessionStorage, SignIn};

use crate::client::ApiClient;
use crate::endpoints::{Endpoint, Login};
use crate::error::{ApiError, INVALID_CREDENTIALS_MESSAGE, SESSION_EXPIRED_MESSAGE};
use crate::guard::RouteGuard;
use crate::models::LoginGrant;
use crate::navigation::{NavMode, Navigate};
use crate::scope::RequestTicket;
use crate::transport::HttpTransport;

/// What a screen shows for one fetched resource.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Ready(T),
    Failed(ApiError),
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            LoadState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            LoadState::Failed(e) => Some(e),
            _ => None,
        }
    }
}

/// Lifecycle of a form submission.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
    Done,
    Failed(ApiError),
}

impl SubmitState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmitState::Submitting)
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            SubmitState::Failed(e) => Some(e),
            _ => None,
        }
    }
}

/// How a controller call ended.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome<T> {
    Ready(T),
    Failed(ApiError),
    /// The controller navigated away (missing token or 401).
    Redirected(String),
    /// Superseded or unmounted while in flight; must not be applied.
    Stale,
}

impl<T> FetchOutcome<T> {
    /// The screen state to write, if any.
    pub fn into_state(self) -> Option<LoadState<T>> {
        match self {
            FetchOutcome::Ready(value) => Some(LoadState::Ready(value)),
            FetchOutcome::Failed(e) => Some(LoadState::Failed(e)),
            FetchOutcome::Redirected(_) | FetchOutcome::Stale => None,
        }
    }

    /// The form state to write, if any.
    pub fn into_submit_state(self) -> Option<SubmitState> {
        match self {
            FetchOutcome::Ready(_) => Some(SubmitState::Done),
            FetchOutcome::Failed(e) => Some(SubmitState::Failed(e)),
            FetchOutcome::Redirected(_) | FetchOutcome::Stale => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> FetchOutcome<U> {
        match self {
            FetchOutcome::Ready(value) => FetchOutcome::Ready(f(value)),
            FetchOutcome::Failed(e) => FetchOutcome::Failed(e),
            FetchOutcome::Redirected(path) => FetchOutcome::Redirected(path),
            FetchOutcome::Stale => FetchOutcome::Stale,
        }
    }
}

/// Runs the fetch lifecycle for one role.
pub struct FetchController<'a, S, T, N> {
    session: &'a Session<S>,
    client: &'a ApiClient<T>,
    navigator: N,
    role: Role,
}

impl<'a, S, T, N> FetchController<'a, S, T, N>
where
    S: SessionStorage,
    T: HttpTransport,
    N: Navigate,
{
    pub fn new(session: &'a Session<S>, client: &'a ApiClient<T>, navigator: N, role: Role) -> Self {
        Self {
            session,
            client,
            navigator,
            role,
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    fn profile(&self) -> &RoleProfile {
        self.session.profile(self.role)
    }

    fn redirect_to_login<O>(&self) -> FetchOutcome<O> {
        let path = self.profile().login_path.clone();
        self.navigator.navigate(&path, NavMode::Replace);
        FetchOutcome::Redirected(path)
    }

    fn settle<O>(&self, result: Result<O, ApiError>) -> FetchOutcome<O> {
        match result {
            Ok(value) => FetchOutcome::Ready(value),
            Err(ApiError::Unauthorized(message)) => {
                tracing::warn!("{} session rejected: {message}", self.role);
                self.session.sign_out(self.role);
                self.redirect_to_login()
            }
            Err(e) => FetchOutcome::Failed(e),
        }
    }

    /// Fetch outside any request scope.
    pub async fn load<E: Endpoint>(&self, endpoint: &E) -> FetchOutcome<E::Output> {
        self.load_scoped(&RequestTicket::detached(), endpoint).await
    }

    /// Fetch, dropping the result if `ticket` went stale meanwhile.
    pub async fn load_scoped<E: Endpoint>(
        &self,
        ticket: &RequestTicket,
        endpoint: &E,
    ) -> FetchOutcome<E::Output> {
        if !ticket.is_current() {
            return FetchOutcome::Stale;
        }
        let decision = RouteGuard::check(self.session, Some(self.role));
        let Some(token) = decision.token() else {
            return self.redirect_to_login();
        };

        let result = self
            .client
            .execute(&self.profile().api_prefix, endpoint, Some(token))
            .await;

        if !ticket.is_current() {
            tracing::debug!("Dropping stale response for {}", endpoint.path());
            return FetchOutcome::Stale;
        }
        self.settle(result)
    }

    /// Fetch `first`, then the endpoint `next` derives from its result.
    ///
    /// The second request is never issued if the first did not succeed.
    pub async fn load_then<A, B, F>(
        &self,
        ticket: &RequestTicket,
        first: &A,
        next: F,
    ) -> FetchOutcome<(A::Output, B::Output)>
    where
        A: Endpoint,
        B: Endpoint,
        F: FnOnce(&A::Output) -> B,
    {
        let head = match self.load_scoped(ticket, first).await {
            FetchOutcome::Ready(value) => value,
            FetchOutcome::Failed(e) => return FetchOutcome::Failed(e),
            FetchOutcome::Redirected(path) => return FetchOutcome::Redirected(path),
            FetchOutcome::Stale => return FetchOutcome::Stale,
        };
        let second = next(&head);
        self.load_scoped(ticket, &second)
            .await
            .map(|tail| (head, tail))
    }

    /// Send a form; on success optionally push `success_path`.
    pub async fn submit<E: Endpoint>(
        &self,
        ticket: &RequestTicket,
        endpoint: &E,
        success_path: Option<&str>,
    ) -> FetchOutcome<E::Output> {
        let outcome = self.load_scoped(ticket, endpoint).await;
        if let (FetchOutcome::Ready(_), Some(path)) = (&outcome, success_path) {
            self.navigator.navigate(path, NavMode::Push);
        }
        outcome
    }

    /// Log in, store the grant under the role's keys and go to its home screen.
    ///
    /// A refused login is a semantic error on the form, not a redirect.
    pub async fn sign_in(&self, credentials: &Login) -> FetchOutcome<LoginGrant> {
        let profile = self.profile();
        match self.client.execute(&profile.api_prefix, credentials, None).await {
            Ok(grant) => {
                self.session.sign_in(self.role, &SignIn::from(grant.clone()));
                self.navigator.navigate(&profile.home_path, NavMode::Replace);
                FetchOutcome::Ready(grant)
            }
            Err(ApiError::Unauthorized(message)) => {
                let message = if message == SESSION_EXPIRED_MESSAGE {
                    INVALID_CREDENTIALS_MESSAGE.to_string()
                } else {
                    message
                };
                FetchOutcome::Failed(ApiError::Api {
                    status: 401,
                    message,
                })
            }
            Err(e) => FetchOutcome::Failed(e),
        }
    }

    /// Clear the role's keys and go to its login screen.
    pub fn sign_out(&self) {
        self.session.sign_out(self.role);
        self.navigator
            .navigate(&self.profile().login_path, NavMode::Replace);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoints::{FetchProfile, ListNotifications, ListProperties, ListTenants};
    use crate::scope::RequestScope;
    use crate::testing::{MockTransport, RecordingNavigator};
    use serde_json::json;
    use store::{MemoryStorage, RoleRegistry};

    struct Fixture {
        storage: MemoryStorage,
        session: Session<MemoryStorage>,
        transport: MockTransport,
        client: ApiClient<MockTransport>,
        nav: RecordingNavigator,
    }

    impl Fixture {
        fn new() -> Self {
            let storage = MemoryStorage::new();
            let transport = MockTransport::new();
            Self {
                session: Session::new(storage.clone(), RoleRegistry::default()),
                client: ApiClient::new("https://api.example.com", transport.clone()),
                storage,
                transport,
                nav: RecordingNavigator::new(),
            }
        }

        fn controller(&self, role: Role) -> FetchController<'_, MemoryStorage, MockTransport, RecordingNavigator> {
            FetchController::new(&self.session, &self.client, self.nav.clone(), role)
        }
    }

    #[tokio::test]
    async fn test_missing_token_redirects_without_request() {
        let fx = Fixture::new();
        let outcome = fx.controller(Role::Landlord).load(&ListProperties::default()).await;

        assert_eq!(outcome, FetchOutcome::Redirected("/landlord/login".to_string()));
        assert_eq!(
            fx.nav.visits(),
            vec![("/landlord/login".to_string(), NavMode::Replace)]
        );
        assert!(fx.transport.requests().is_empty());
        assert!(outcome.into_state().is_none());
    }

    #[tokio::test]
    async fn test_bare_array_response_is_rendered_as_is() {
        let fx = Fixture::new();
        fx.session.put("token", "abc");
        fx.transport.respond(
            200,
            json!([
                { "_id": "p1", "name": "Maple Court", "rent": 1200 },
                { "_id": "p2", "name": "Oak Villa" }
            ]),
        );

        let state = fx
            .controller(Role::Landlord)
            .load(&ListProperties::default())
            .await
            .into_state()
            .unwrap();
        let properties = state.ready().unwrap();
        let ids: Vec<&str> = properties.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p1", "p2"]);
        assert_eq!(properties[0].rent, Some(1200.0));

        let sent = fx.transport.requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].bearer.as_deref(), Some("abc"));
        assert_eq!(sent[0].url, "https://api.example.com/api/landlord/properties");
        assert!(fx.nav.visits().is_empty());
    }

    #[tokio::test]
    async fn test_data_envelope_is_unwrapped() {
        let fx = Fixture::new();
        fx.session.put("orgToken", "org");
        fx.transport.respond(
            200,
            json!({ "success": true, "data": [{ "id": 1, "name": "Asha" }] }),
        );
        let outcome = fx
            .controller(Role::PropertyManager)
            .load(&ListTenants::default())
            .await;
        let FetchOutcome::Ready(tenants) = outcome else {
            panic!("expected tenants, got {outcome:?}");
        };
        assert_eq!(tenants.len(), 1);
        assert_eq!(tenants[0].name, "Asha");
    }

    #[tokio::test]
    async fn test_success_false_shows_server_message() {
        let fx = Fixture::new();
        fx.session.put("sellertoken", "s");
        fx.transport
            .respond(200, json!({ "success": false, "message": "X" }));
        let state = fx
            .controller(Role::Seller)
            .load(&ListProperties::default())
            .await
            .into_state()
            .unwrap();
        assert_eq!(state.error().unwrap().user_message(), "X");
        assert!(fx.nav.visits().is_empty());
    }

    #[tokio::test]
    async fn test_unauthorized_clears_token_and_redirects_once() {
        let fx = Fixture::new();
        fx.session.sign_in(
            Role::Tenant,
            &SignIn {
                token: "expired".to_string(),
                user_id: Some("t1".to_string()),
                display_name: None,
            },
        );
        fx.session.put("token", "landlord-still-valid");
        fx.transport.respond(401, json!({ "message": "jwt expired" }));

        let outcome = fx
            .controller(Role::Tenant)
            .load(&ListProperties::default())
            .await;

        assert_eq!(outcome, FetchOutcome::Redirected("/tenant/login".to_string()));
        assert_eq!(
            fx.nav.visits(),
            vec![("/tenant/login".to_string(), NavMode::Replace)]
        );
        assert!(fx.session.token(Role::Tenant).is_none());
        assert!(fx.session.user_id(Role::Tenant).is_none());
        assert_eq!(fx.storage.keys(), vec!["token".to_string()]);

        // Mounting again now hits the guard: no request, one more redirect
        let again = fx.controller(Role::Tenant).load(&ListProperties::default()).await;
        assert!(matches!(again, FetchOutcome::Redirected(_)));
        assert_eq!(fx.transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_transport_and_parse_errors_are_distinct() {
        let fx = Fixture::new();
        fx.session.put("workerToken", "w");
        fx.transport.fail("connection reset");
        fx.transport.respond_text(200, "<!doctype html><p>maintenance</p>");
        let controller = fx.controller(Role::Worker);

        let network = controller.load(&ListProperties::default()).await;
        let parse = controller.load(&ListProperties::default()).await;
        let (FetchOutcome::Failed(a), FetchOutcome::Failed(b)) = (network, parse) else {
            panic!("expected two failures");
        };
        assert_ne!(a.user_message(), b.user_message());
        assert_eq!(a.kind(), crate::error::ErrorKind::Network);
        assert_eq!(b.kind(), crate::error::ErrorKind::Parse);
    }

    #[tokio::test]
    async fn test_dependent_fetch_uses_first_result() {
        let fx = Fixture::new();
        fx.session.put("token", "abc");
        fx.transport
            .respond(200, json!({ "success": true, "data": { "_id": "u42", "name": "Ravi" } }));
        fx.transport
            .respond(200, json!([{ "_id": "n1", "title": "Rent due" }]));

        let outcome = fx
            .controller(Role::Landlord)
            .load_then(&RequestTicket::detached(), &FetchProfile, |profile| {
                ListNotifications {
                    user_id: profile.id.clone(),
                }
            })
            .await;

        let FetchOutcome::Ready((profile, notifications)) = outcome else {
            panic!("expected both results, got {outcome:?}");
        };
        assert_eq!(profile.display_name(), "Ravi");
        assert_eq!(notifications[0].name, "Rent due");

        let urls: Vec<String> = fx.transport.requests().into_iter().map(|r| r.url).collect();
        assert_eq!(
            urls,
            vec![
                "https://api.example.com/api/landlord/profile".to_string(),
                "https://api.example.com/api/landlord/notifications/u42".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_dependent_fetch_stops_after_failure() {
        let fx = Fixture::new();
        fx.session.put("token", "abc");
        fx.transport.respond(500, json!({ "message": "Profile service down" }));

        let outcome = fx
            .controller(Role::Landlord)
            .load_then(&RequestTicket::detached(), &FetchProfile, |profile| {
                ListNotifications {
                    user_id: profile.id.clone(),
                }
            })
            .await;

        assert!(matches!(outcome, FetchOutcome::Failed(ApiError::Api { status: 500, .. })));
        assert_eq!(fx.transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_superseded_before_polling_skips_request() {
        let fx = Fixture::new();
        fx.session.put("token", "abc");

        let scope = RequestScope::new();
        let ticket = scope.begin();
        let controller = fx.controller(Role::Landlord);
        let endpoint = ListProperties::default();
        let pending = controller.load_scoped(&ticket, &endpoint);
        // Futures are lazy: the newer ticket exists before the first poll
        let _newer = scope.begin();
        let outcome = pending.await;

        assert_eq!(outcome, FetchOutcome::Stale);
        assert!(fx.transport.requests().is_empty());
        assert!(fx.nav.visits().is_empty());
    }

    #[tokio::test]
    async fn test_response_superseded_in_flight_writes_nothing() {
        let fx = Fixture::new();
        fx.session.put("token", "abc");
        fx.transport.respond(401, json!({ "message": "jwt expired" }));

        let scope = RequestScope::new();
        let ticket = scope.begin();
        let remount = scope.clone();
        fx.transport.while_in_flight(move || {
            remount.begin();
        });

        let outcome = fx
            .controller(Role::Landlord)
            .load_scoped(&ticket, &ListProperties::default())
            .await;

        assert_eq!(outcome, FetchOutcome::Stale);
        assert_eq!(fx.transport.requests().len(), 1);
        assert!(fx.nav.visits().is_empty());
        assert_eq!(fx.session.token(Role::Landlord).as_deref(), Some("abc"));
    }

    #[tokio::test]
    async fn test_response_after_unmount_writes_nothing() {
        let fx = Fixture::new();
        fx.session.put("token", "abc");
        fx.transport.respond(401, json!({}));

        let scope = RequestScope::new();
        let ticket = scope.begin();
        let unmount = scope.clone();
        fx.transport.while_in_flight(move || unmount.close());

        let outcome = fx
            .controller(Role::Landlord)
            .load_scoped(&ticket, &ListProperties::default())
            .await;

        assert_eq!(outcome, FetchOutcome::Stale);
        assert!(fx.nav.visits().is_empty());
        assert_eq!(fx.session.token(Role::Landlord).as_deref(), Some("abc"));
    }

    #[tokio::test]
    async fn test_closed_scope_skips_request() {
        let fx = Fixture::new();
        fx.session.put("token", "abc");
        let scope = RequestScope::new();
        let ticket = scope.begin();
        scope.close();

        let outcome = fx
            .controller(Role::Landlord)
            .load_scoped(&ticket, &ListProperties::default())
            .await;
        assert_eq!(outcome, FetchOutcome::Stale);
        assert!(fx.transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_submit_navigates_on_success_only() {
        let fx = Fixture::new();
        fx.session.put("token", "abc");
        fx.transport
            .respond(201, json!({ "success": true, "data": { "_id": "t9", "name": "Kabir" } }));
        fx.transport
            .respond(422, json!({ "success": false, "message": "Email already used" }));
        let controller = fx.controller(Role::Landlord);
        let add = crate::endpoints::AddTenant {
            draft: crate::models::TenantDraft {
                name: "Kabir".to_string(),
                email: "k@example.com".to_string(),
                property_id: "p1".to_string(),
                ..Default::default()
            },
        };

        let ticket = RequestTicket::detached();
        let done = controller
            .submit(&ticket, &add, Some("/landlord/tenants"))
            .await
            .into_submit_state();
        assert_eq!(done, Some(SubmitState::Done));

        let failed = controller
            .submit(&ticket, &add, Some("/landlord/tenants"))
            .await
            .into_submit_state()
            .unwrap();
        assert_eq!(failed.error().unwrap().user_message(), "Email already used");

        assert_eq!(
            fx.nav.visits(),
            vec![("/landlord/tenants".to_string(), NavMode::Push)]
        );
    }

    #[tokio::test]
    async fn test_sign_in_stores_grant_and_goes_home() {
        let fx = Fixture::new();
        fx.storage.set("tenantToken", "legacy");
        fx.transport.respond(
            200,
            json!({ "success": true, "token": "fresh", "tenant": { "_id": "t7", "name": "Nia" } }),
        );
        let outcome = fx
            .controller(Role::Tenant)
            .sign_in(&Login {
                email: "nia@example.com".to_string(),
                password: "pw".to_string(),
            })
            .await;

        assert!(matches!(outcome, FetchOutcome::Ready(_)));
        assert_eq!(fx.session.token(Role::Tenant).as_deref(), Some("fresh"));
        assert!(fx.session.key_mismatches(Role::Tenant).is_empty());
        assert_eq!(
            fx.nav.visits(),
            vec![("/tenant/dashboard".to_string(), NavMode::Replace)]
        );
    }

    #[tokio::test]
    async fn test_refused_sign_in_is_form_error() {
        let fx = Fixture::new();
        fx.transport.respond_text(401, "");
        let outcome = fx
            .controller(Role::Seller)
            .sign_in(&Login {
                email: "s@example.com".to_string(),
                password: "wrong".to_string(),
            })
            .await;
        let FetchOutcome::Failed(err) = outcome else {
            panic!("expected failure");
        };
        assert_eq!(err.user_message(), INVALID_CREDENTIALS_MESSAGE);
        assert!(!err.is_auth());
        assert!(fx.nav.visits().is_empty());
    }

    #[tokio::test]
    async fn test_sign_out() {
        let fx = Fixture::new();
        fx.session.put("subOwnerToken", "x");
        fx.session.put("subOwnerId", "9");
        fx.controller(Role::SubOwner).sign_out();
        assert!(fx.storage.keys().is_empty());
        assert_eq!(
            fx.nav.visits(),
            vec![("/sub-owner/login".to_string(), NavMode::Replace)]
        );
    }
}
