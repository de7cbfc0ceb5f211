//! # Signed-in user records
//!
//! - [`LoginGrant`]: what a login endpoint hands back: the bearer token plus
//!   whatever identity fields the backend chose to include. Extracted by the
//!   `Login` adapter, which looks for the token under `token`, `accessToken`
//!   or `data.token`.
//! - [`Profile`]: the `/profile` record of the signed-in user. Its `id` is
//!   what dependent requests (notifications) are keyed on.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::lenient::Fields;

/// Result of a successful login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginGrant {
    pub token: String,
    pub user_id: Option<String>,
    pub display_name: Option<String>,
}

impl From<LoginGrant> for store::SignIn {
    fn from(grant: LoginGrant) -> Self {
        store::SignIn {
            token: grant.token,
            user_id: grant.user_id,
            display_name: grant.display_name,
        }
    }
}

/// The signed-in user's profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct Profile {
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub role: Option<String>,
}

impl TryFrom<Map<String, Value>> for Profile {
    type Error = String;

    fn try_from(map: Map<String, Value>) -> Result<Self, Self::Error> {
        let f = Fields::from(map);
        Ok(Profile {
            id: f.id(&["id", "_id"])?,
            name: f.opt_string(&["name", "fullName", "username"]),
            email: f.opt_string(&["email"]),
            phone: f.opt_string(&["phone", "mobile"]),
            role: f.opt_string(&["role"]),
        })
    }
}

impl Profile {
    /// Get display name, falling back to email, then id.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or(&self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_profile_from_loose_json() {
        let profile: Profile = serde_json::from_value(json!({
            "_id": 981,
            "fullName": "Meera Iyer",
            "mobile": 9876543210u64,
        }))
        .unwrap();
        assert_eq!(profile.id, "981");
        assert_eq!(profile.name.as_deref(), Some("Meera Iyer"));
        assert_eq!(profile.phone.as_deref(), Some("9876543210"));
        assert_eq!(profile.display_name(), "Meera Iyer");
    }

    #[test]
    fn test_profile_with_both_id_keys() {
        let profile: Profile = serde_json::from_value(json!({
            "_id": "u7",
            "id": "u7",
            "name": "Meera",
            "fullName": "Meera Iyer",
        }))
        .unwrap();
        assert_eq!(profile.id, "u7");
        assert_eq!(profile.name.as_deref(), Some("Meera"));
    }

    #[test]
    fn test_display_name_fallbacks() {
        let profile: Profile =
            serde_json::from_value(json!({ "id": "p1", "email": "a@b.co", "name": "" })).unwrap();
        assert!(profile.name.is_none());
        assert_eq!(profile.display_name(), "a@b.co");
    }
}
