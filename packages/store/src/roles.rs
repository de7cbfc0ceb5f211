//! # Roles and their session key layout
//!
//! Every dashboard in PropDesk belongs to one [`Role`]. A role decides which
//! browser-storage keys hold its bearer token and profile fields, which API
//! prefix its requests go to, and where its login and home screens live.
//!
//! The layout is described by a [`RoleProfile`]. Profiles are resolved once at
//! startup into a [`RoleRegistry`] (defaults merged with the `[roles.<slug>]`
//! sections of [`AppConfig`]) and then passed around by reference; screens never
//! spell out storage keys themselves.
//!
//! ## Default keys
//!
//! | Role | Token key | Legacy aliases | Id key |
//! |------|-----------|----------------|--------|
//! | landlord | `token` | | `landlordId` |
//! | tenant | `tenanttoken` | `tenantToken` | `tenantId` |
//! | property-manager | `orgToken` | | `orgId` |
//! | sub-owner | `subOwnerToken` | | `subOwnerId` |
//! | regional-manager | `regionalToken` | | `regionalId` |
//! | seller | `sellertoken` | | `sellerId` |
//! | worker | `workerToken` | | `workerId` |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::{AppConfig, RoleOverride};

/// A dashboard audience.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    Landlord,
    Tenant,
    PropertyManager,
    SubOwner,
    RegionalManager,
    Seller,
    Worker,
}

impl Role {
    /// All roles in registry order.
    pub const ALL: [Role; 7] = [
        Role::Landlord,
        Role::Tenant,
        Role::PropertyManager,
        Role::SubOwner,
        Role::RegionalManager,
        Role::Seller,
        Role::Worker,
    ];

    /// URL and config slug: `"property-manager"`.
    pub fn slug(&self) -> &'static str {
        match self {
            Role::Landlord => "landlord",
            Role::Tenant => "tenant",
            Role::PropertyManager => "property-manager",
            Role::SubOwner => "sub-owner",
            Role::RegionalManager => "regional-manager",
            Role::Seller => "seller",
            Role::Worker => "worker",
        }
    }

    /// Human readable title for headers.
    pub fn title(&self) -> &'static str {
        match self {
            Role::Landlord => "Landlord",
            Role::Tenant => "Tenant",
            Role::PropertyManager => "Property Manager",
            Role::SubOwner => "Sub-owner",
            Role::RegionalManager => "Regional Manager",
            Role::Seller => "Seller",
            Role::Worker => "Worker",
        }
    }

    fn index(&self) -> usize {
        match self {
            Role::Landlord => 0,
            Role::Tenant => 1,
            Role::PropertyManager => 2,
            Role::SubOwner => 3,
            Role::RegionalManager => 4,
            Role::Seller => 5,
            Role::Worker => 6,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Error returned when a slug names no role.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownRole(pub String);

impl fmt::Display for UnknownRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown role: {}", self.0)
    }
}

impl std::error::Error for UnknownRole {}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.slug() == s)
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}

/// Storage keys, API prefix and routes for one role.
#[derive(Clone, Debug, PartialEq)]
pub struct RoleProfile {
    pub role: Role,
    /// Canonical key holding the bearer token.
    pub token_key: String,
    /// Keys older screens wrote the token under. Read only for mismatch
    /// reporting and always cleared on sign-in and sign-out.
    pub legacy_token_keys: Vec<String>,
    pub id_key: String,
    pub name_key: String,
    /// Any further keys the role owns and must drop on sign-out.
    pub extra_clear_keys: Vec<String>,
    /// Path prefix for this role's endpoints: `"/api/landlord"`.
    pub api_prefix: String,
    pub login_path: String,
    pub home_path: String,
}

impl RoleProfile {
    /// Built-in layout for a role.
    pub fn default_for(role: Role) -> Self {
        let (token_key, legacy, id_key, name_key) = match role {
            Role::Landlord => ("token", None, "landlordId", "landlordName"),
            Role::Tenant => ("tenanttoken", Some("tenantToken"), "tenantId", "tenantName"),
            Role::PropertyManager => ("orgToken", None, "orgId", "orgName"),
            Role::SubOwner => ("subOwnerToken", None, "subOwnerId", "subOwnerName"),
            Role::RegionalManager => ("regionalToken", None, "regionalId", "regionalName"),
            Role::Seller => ("sellertoken", None, "sellerId", "sellerName"),
            Role::Worker => ("workerToken", None, "workerId", "workerName"),
        };
        let slug = role.slug();
        Self {
            role,
            token_key: token_key.to_string(),
            legacy_token_keys: legacy.into_iter().map(String::from).collect(),
            id_key: id_key.to_string(),
            name_key: name_key.to_string(),
            extra_clear_keys: Vec::new(),
            api_prefix: format!("/api/{slug}"),
            login_path: format!("/{slug}/login"),
            home_path: format!("/{slug}/dashboard"),
        }
    }

    /// Every key this role owns, canonical token first, without duplicates.
    pub fn keys_to_clear(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = Vec::new();
        let candidates = std::iter::once(self.token_key.as_str())
            .chain(self.legacy_token_keys.iter().map(String::as_str))
            .chain([self.id_key.as_str(), self.name_key.as_str()])
            .chain(self.extra_clear_keys.iter().map(String::as_str));
        for key in candidates {
            if !key.is_empty() && !keys.contains(&key) {
                keys.push(key);
            }
        }
        keys
    }

    fn apply(&mut self, overrides: &RoleOverride) {
        if let Some(ref v) = overrides.token_key {
            self.token_key = v.clone();
        }
        if let Some(ref v) = overrides.legacy_token_keys {
            self.legacy_token_keys = v.clone();
        }
        if let Some(ref v) = overrides.id_key {
            self.id_key = v.clone();
        }
        if let Some(ref v) = overrides.name_key {
            self.name_key = v.clone();
        }
        if let Some(ref v) = overrides.extra_clear_keys {
            self.extra_clear_keys = v.clone();
        }
        if let Some(ref v) = overrides.api_prefix {
            self.api_prefix = v.trim_end_matches('/').to_string();
        }
        if let Some(ref v) = overrides.login_path {
            self.login_path = v.clone();
        }
        if let Some(ref v) = overrides.home_path {
            self.home_path = v.clone();
        }
    }
}

/// All role profiles, resolved once at startup.
#[derive(Clone, Debug, PartialEq)]
pub struct RoleRegistry {
    profiles: Vec<RoleProfile>,
}

impl Default for RoleRegistry {
    fn default() -> Self {
        Self {
            profiles: Role::ALL.into_iter().map(RoleProfile::default_for).collect(),
        }
    }
}

impl RoleRegistry {
    /// Merge the `[roles.<slug>]` overrides of `config` over the defaults.
    ///
    /// Unknown slugs are logged and skipped. Roles that end up sharing a
    /// token key are logged too, since signing one of them out signs out both.
    pub fn from_config(config: &AppConfig) -> Self {
        let mut registry = Self::default();
        for (slug, overrides) in &config.roles {
            match slug.parse::<Role>() {
                Ok(role) => registry.profiles[role.index()].apply(overrides),
                Err(e) => tracing::warn!("Ignoring [roles.{slug}] in config: {e}"),
            }
        }
        for (a, b, key) in registry.shared_token_keys() {
            tracing::warn!("Roles {a} and {b} share token key {key:?}");
        }
        registry
    }

    pub fn get(&self, role: Role) -> &RoleProfile {
        &self.profiles[role.index()]
    }

    /// Pairs of roles configured with the same canonical token key.
    pub fn shared_token_keys(&self) -> Vec<(Role, Role, String)> {
        let mut shared = Vec::new();
        for (i, a) in self.profiles.iter().enumerate() {
            for b in &self.profiles[i + 1..] {
                if a.token_key == b.token_key {
                    shared.push((a.role, b.role, a.token_key.clone()));
                }
            }
        }
        shared
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_roundtrip() {
        for role in Role::ALL {
            assert_eq!(role.slug().parse::<Role>(), Ok(role));
            assert_eq!(role.to_string(), role.slug());
        }
        assert!("admin".parse::<Role>().is_err());
    }

    #[test]
    fn test_default_profiles() {
        let registry = RoleRegistry::default();
        let tenant = registry.get(Role::Tenant);
        assert_eq!(tenant.token_key, "tenanttoken");
        assert_eq!(tenant.legacy_token_keys, vec!["tenantToken".to_string()]);
        assert_eq!(tenant.login_path, "/tenant/login");
        assert_eq!(tenant.home_path, "/tenant/dashboard");

        let manager = registry.get(Role::PropertyManager);
        assert_eq!(manager.token_key, "orgToken");
        assert_eq!(manager.api_prefix, "/api/property-manager");

        assert!(registry.shared_token_keys().is_empty());
    }

    #[test]
    fn test_keys_to_clear_dedups() {
        let mut profile = RoleProfile::default_for(Role::Landlord);
        profile.extra_clear_keys = vec!["landlordId".to_string(), "propertyId".to_string()];
        assert_eq!(
            profile.keys_to_clear(),
            vec!["token", "landlordId", "landlordName", "propertyId"]
        );
    }

    #[test]
    fn test_overrides_from_config() {
        let config = AppConfig::from_toml(
            r#"
            [roles.tenant]
            token_key = "tenantToken"
            legacy_token_keys = ["tenanttoken"]

            [roles.seller]
            api_prefix = "/v2/seller/"

            [roles.janitor]
            token_key = "x"
            "#,
        )
        .unwrap();
        let registry = RoleRegistry::from_config(&config);

        let tenant = registry.get(Role::Tenant);
        assert_eq!(tenant.token_key, "tenantToken");
        assert_eq!(tenant.legacy_token_keys, vec!["tenanttoken".to_string()]);
        assert_eq!(registry.get(Role::Seller).api_prefix, "/v2/seller");
        // Unknown role sections leave everything else untouched
        assert_eq!(registry.get(Role::Landlord), &RoleProfile::default_for(Role::Landlord));
    }

    #[test]
    fn test_shared_token_keys_detected() {
        let config = AppConfig::from_toml(
            r#"
            [roles.worker]
            token_key = "token"
            "#,
        )
        .unwrap();
        let registry = RoleRegistry::from_config(&config);
        assert_eq!(
            registry.shared_token_keys(),
            vec![(Role::Landlord, Role::Worker, "token".to_string())]
        );
    }
}
