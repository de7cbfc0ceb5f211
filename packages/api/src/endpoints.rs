//! # Endpoint adapters
//!
//! One adapter per backend contract. An adapter knows its method, its path
//! (relative to the role's API prefix), its query and body, and how to turn
//! the decoded JSON into a fixed typed result. Envelope guessing lives here and
//! in [`crate::envelope`], never in a screen.
//!
//! | Adapter | Request | Output |
//! |---------|---------|--------|
//! | [`Login`] | `POST /login` | [`LoginGrant`] |
//! | [`FetchProfile`] | `GET /profile` | [`Profile`] |
//! | [`ListProperties`] | `GET /properties?page&limit` | `Vec<Property>` |
//! | [`GetProperty`] | `GET /properties/{id}` | [`Property`] |
//! | [`ListTenants`] | `GET /tenants?page&limit` | `Vec<Tenant>` |
//! | [`AddTenant`] | `POST /tenants` | [`Tenant`] |
//! | [`ListDues`] | `GET /dues` | `Vec<Due>` |
//! | [`ListNotifications`] | `GET /notifications/{user_id}` | `Vec<Notification>` |
//! | [`ListWorkOrders`] | `GET /work-orders` | `Vec<WorkOrder>` |
//! | [`ListListings`] | `GET /listings` | `Vec<Listing>` |

use reqwest::Url;
use serde_json::{json, Value};

use crate::envelope::{record, records, single};
use crate::error::ApiError;
use crate::models::{
    Due, Listing, LoginGrant, Notification, Profile, Property, Tenant, TenantDraft, WorkOrder,
};
use crate::transport::Method;

/// A backend contract with a typed result.
pub trait Endpoint {
    type Output;

    fn method(&self) -> Method {
        Method::Get
    }

    /// Path relative to the role prefix.
    fn path(&self) -> String;

    fn query(&self) -> Vec<(String, String)> {
        Vec::new()
    }

    fn body(&self) -> Option<Value> {
        None
    }

    /// Turn the decoded body into the typed result.
    fn adapt(&self, body: Value) -> Result<Self::Output, ApiError>;
}

fn page_query(page: Option<u32>, limit: Option<u32>) -> Vec<(String, String)> {
    let mut query = Vec::new();
    if let Some(page) = page {
        query.push(("page".to_string(), page.to_string()));
    }
    if let Some(limit) = limit {
        query.push(("limit".to_string(), limit.to_string()));
    }
    query
}

/// Relative path from raw segments; each one is percent-encoded as a single
/// path segment, so server ids containing `/`, `?` or `#` stay in place.
fn path_of(segments: &[&str]) -> String {
    let Ok(mut url) = Url::parse("relative:/") else {
        return segments.join("/");
    };
    if let Ok(mut path) = url.path_segments_mut() {
        path.clear().extend(segments);
    }
    url.path().trim_start_matches('/').to_string()
}

/// Email/password login for a role.
#[derive(Debug, Clone, PartialEq)]
pub struct Login {
    pub email: String,
    pub password: String,
}

impl Endpoint for Login {
    type Output = LoginGrant;

    fn method(&self) -> Method {
        Method::Post
    }

    fn path(&self) -> String {
        "login".to_string()
    }

    fn body(&self) -> Option<Value> {
        Some(json!({ "email": self.email.trim(), "password": self.password }))
    }

    fn adapt(&self, body: Value) -> Result<LoginGrant, ApiError> {
        let data = body.get("data");
        let token = ["token", "accessToken", "access_token"]
            .iter()
            .find_map(|k| body.get(k).or_else(|| data.and_then(|d| d.get(k))))
            .and_then(Value::as_str)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ApiError::Parse("login response carried no token".to_string()))?;

        let user = body
            .get("user")
            .or_else(|| data.and_then(|d| d.get("user")))
            .or(data)
            .unwrap_or(&body);
        let text = |v: &Value| match v {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        };
        let user_id = ["_id", "id", "userId"]
            .iter()
            .find_map(|k| user.get(k).and_then(text));
        let display_name = ["name", "fullName", "username"]
            .iter()
            .find_map(|k| user.get(k).and_then(text));

        Ok(LoginGrant {
            token: token.to_string(),
            user_id,
            display_name,
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FetchProfile;

impl Endpoint for FetchProfile {
    type Output = Profile;

    fn path(&self) -> String {
        "profile".to_string()
    }

    fn adapt(&self, body: Value) -> Result<Profile, ApiError> {
        // Some backends nest the record one level deeper under `user`.
        let inner = record(body)?;
        match inner.get("user") {
            Some(user @ Value::Object(_)) => single(user.clone()),
            _ => single(inner),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ListProperties {
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl Endpoint for ListProperties {
    type Output = Vec<Property>;

    fn path(&self) -> String {
        "properties".to_string()
    }

    fn query(&self) -> Vec<(String, String)> {
        page_query(self.page, self.limit)
    }

    fn adapt(&self, body: Value) -> Result<Vec<Property>, ApiError> {
        records(body)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GetProperty {
    pub id: String,
}

impl Endpoint for GetProperty {
    type Output = Property;

    fn path(&self) -> String {
        path_of(&["properties", self.id.as_str()])
    }

    fn adapt(&self, body: Value) -> Result<Property, ApiError> {
        single(body)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ListTenants {
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl Endpoint for ListTenants {
    type Output = Vec<Tenant>;

    fn path(&self) -> String {
        "tenants".to_string()
    }

    fn query(&self) -> Vec<(String, String)> {
        page_query(self.page, self.limit)
    }

    fn adapt(&self, body: Value) -> Result<Vec<Tenant>, ApiError> {
        records(body)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddTenant {
    pub draft: TenantDraft,
}

impl Endpoint for AddTenant {
    type Output = Tenant;

    fn method(&self) -> Method {
        Method::Post
    }

    fn path(&self) -> String {
        "tenants".to_string()
    }

    fn body(&self) -> Option<Value> {
        let d = &self.draft;
        let rent = d.rent.trim().parse::<f64>().ok();
        Some(json!({
            "name": d.name.trim(),
            "email": d.email.trim(),
            "phone": d.phone.trim(),
            "propertyId": d.property_id.trim(),
            "rent": rent,
        }))
    }

    fn adapt(&self, body: Value) -> Result<Tenant, ApiError> {
        let inner = record(body)?;
        match inner.get("tenant") {
            Some(tenant @ Value::Object(_)) => single(tenant.clone()),
            _ => single(inner),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ListDues;

impl Endpoint for ListDues {
    type Output = Vec<Due>;

    fn path(&self) -> String {
        "dues".to_string()
    }

    fn adapt(&self, body: Value) -> Result<Vec<Due>, ApiError> {
        records(body)
    }
}

/// Notifications for a user id taken from the profile.
#[derive(Debug, Clone, PartialEq)]
pub struct ListNotifications {
    pub user_id: String,
}

impl Endpoint for ListNotifications {
    type Output = Vec<Notification>;

    fn path(&self) -> String {
        path_of(&["notifications", self.user_id.as_str()])
    }

    fn adapt(&self, body: Value) -> Result<Vec<Notification>, ApiError> {
        records(body)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ListWorkOrders;

impl Endpoint for ListWorkOrders {
    type Output = Vec<WorkOrder>;

    fn path(&self) -> String {
        "work-orders".to_string()
    }

    fn adapt(&self, body: Value) -> Result<Vec<WorkOrder>, ApiError> {
        records(body)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ListListings;

impl Endpoint for ListListings {
    type Output = Vec<Listing>;

    fn path(&self) -> String {
        "listings".to_string()
    }

    fn adapt(&self, body: Value) -> Result<Vec<Listing>, ApiError> {
        records(body)
    }
}
