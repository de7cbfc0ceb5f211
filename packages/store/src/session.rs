//! # Session store: tokens and profile fields per role
//!
//! [`Session`] is the only place that touches persistent browser storage. It
//! wraps a [`SessionStorage`] backend (a plain key → string map) together with
//! the resolved [`RoleRegistry`], and is handed to screens through context
//! rather than read as an ad hoc global.
//!
//! ## Raw operations
//!
//! | Method | Behaviour |
//! |--------|-----------|
//! | [`put`](Session::put) | Store a string. No validation, overwrites silently. |
//! | [`get`](Session::get) | Read a string. Empty, `"undefined"` and `"null"` read as absent. |
//! | [`clear`](Session::clear) | Remove a list of keys. |
//!
//! ## Role operations
//!
//! [`token`](Session::token), [`sign_in`](Session::sign_in) and
//! [`sign_out`](Session::sign_out) go through the role's [`RoleProfile`], so the
//! set of keys written on login and removed on logout is defined in one place.
//! Legacy token aliases are never used as the token; they are reported by
//! [`key_mismatches`](Session::key_mismatches) and dropped on sign-in/out.
//!
//! There is no expiry or refresh: a token is valid until the backend answers
//! 401 or the user signs out.

use crate::roles::{Role, RoleProfile, RoleRegistry};

/// Synchronous key → string storage.
pub trait SessionStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Log a backend write or removal that did not go through.
///
/// `attempt` is `None` when the backend itself is unavailable. Returns
/// whether the change was applied.
#[cfg_attr(not(all(target_arch = "wasm32", feature = "web")), allow(dead_code))]
pub(crate) fn settle_write<E>(action: &str, key: &str, attempt: Option<Result<(), E>>) -> bool {
    match attempt {
        Some(Ok(())) => true,
        Some(Err(_)) => {
            tracing::warn!("Storage rejected {action} of {key:?}");
            false
        }
        None => {
            tracing::warn!("Storage unavailable, dropping {action} of {key:?}");
            false
        }
    }
}

/// A legacy token alias that currently holds a value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyMismatch {
    pub role: Role,
    pub canonical_key: String,
    pub legacy_key: String,
    /// Whether the canonical key is also set.
    pub canonical_present: bool,
}

/// Token and profile fields a successful login leaves behind.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SignIn {
    pub token: String,
    pub user_id: Option<String>,
    pub display_name: Option<String>,
}

/// Role-aware view over a [`SessionStorage`] backend.
#[derive(Clone, Debug)]
pub struct Session<S> {
    storage: S,
    roles: RoleRegistry,
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| {
        let v = v.trim();
        !v.is_empty() && v != "undefined" && v != "null"
    })
}

impl<S: SessionStorage> Session<S> {
    pub fn new(storage: S, roles: RoleRegistry) -> Self {
        Self { storage, roles }
    }

    pub fn profile(&self, role: Role) -> &RoleProfile {
        self.roles.get(role)
    }

    pub fn put(&self, key: &str, value: &str) {
        self.storage.set(key, value);
    }

    pub fn get(&self, key: &str) -> Option<String> {
        present(self.storage.get(key))
    }

    pub fn clear<'a>(&self, keys: impl IntoIterator<Item = &'a str>) {
        for key in keys {
            self.storage.remove(key);
        }
    }

    /// Bearer token for `role`, read from the canonical key only.
    pub fn token(&self, role: Role) -> Option<String> {
        self.get(&self.profile(role).token_key)
    }

    pub fn user_id(&self, role: Role) -> Option<String> {
        self.get(&self.profile(role).id_key)
    }

    pub fn display_name(&self, role: Role) -> Option<String> {
        self.get(&self.profile(role).name_key)
    }

    pub fn is_signed_in(&self, role: Role) -> bool {
        self.token(role).is_some()
    }

    /// Store a login result under the role's canonical keys.
    ///
    /// Legacy token aliases are removed so the two spellings can never
    /// disagree after a fresh login.
    pub fn sign_in(&self, role: Role, grant: &SignIn) {
        let profile = self.profile(role);
        self.clear(profile.legacy_token_keys.iter().map(String::as_str));
        self.put(&profile.token_key, &grant.token);
        match grant.user_id {
            Some(ref id) => self.put(&profile.id_key, id),
            None => self.storage.remove(&profile.id_key),
        }
        match grant.display_name {
            Some(ref name) => self.put(&profile.name_key, name),
            None => self.storage.remove(&profile.name_key),
        }
        tracing::debug!("Signed in as {role}");
    }

    /// Remove every key the role owns and nothing else.
    pub fn sign_out(&self, role: Role) {
        let keys = self.profile(role).keys_to_clear();
        tracing::debug!("Signing out {role}, clearing {keys:?}");
        self.clear(keys);
    }

    /// Legacy token aliases of `role` that hold a value.
    pub fn key_mismatches(&self, role: Role) -> Vec<KeyMismatch> {
        let profile = self.profile(role);
        let canonical_present = self.get(&profile.token_key).is_some();
        profile
            .legacy_token_keys
            .iter()
            .filter(|key| self.get(key).is_some())
            .map(|key| KeyMismatch {
                role,
                canonical_key: profile.token_key.clone(),
                legacy_key: key.clone(),
                canonical_present,
            })
            .collect()
    }

    /// Log every legacy alias in use across all roles.
    pub fn report_key_mismatches(&self) -> Vec<KeyMismatch> {
        let mismatches: Vec<KeyMismatch> = Role::ALL
            .into_iter()
            .flat_map(|role| self.key_mismatches(role))
            .collect();
        for m in &mismatches {
            tracing::warn!(
                "Token for {} found under legacy key {:?} (canonical {:?} {}); it will not be used",
                m.role,
                m.legacy_key,
                m.canonical_key,
                if m.canonical_present { "also set" } else { "missing" },
            );
        }
        mismatches
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::MemoryStorage;

    fn session() -> (MemoryStorage, Session<MemoryStorage>) {
        let storage = MemoryStorage::new();
        (storage.clone(), Session::new(storage, RoleRegistry::default()))
    }

    #[test]
    fn test_failed_writes_are_reported() {
        assert!(settle_write::<()>("write", "token", Some(Ok(()))));
        assert!(!settle_write("removal", "token", Some(Err("quota"))));
        assert!(!settle_write::<()>("removal", "orgToken", None));
    }

    #[test]
    fn test_put_get_overwrites() {
        let (_, session) = session();
        assert!(session.get("token").is_none());
        session.put("token", "a");
        session.put("token", "b");
        assert_eq!(session.get("token").as_deref(), Some("b"));
    }

    #[test]
    fn test_placeholder_values_are_absent() {
        let (storage, session) = session();
        for junk in ["", "  ", "undefined", "null"] {
            storage.set("token", junk);
            assert!(session.token(Role::Landlord).is_none(), "{junk:?}");
        }
    }

    #[test]
    fn test_clear_removes_listed_keys_only() {
        let (storage, session) = session();
        session.put("a", "1");
        session.put("b", "2");
        session.put("c", "3");
        session.clear(["a", "c", "missing"]);
        assert_eq!(storage.keys(), vec!["b".to_string()]);
    }

    #[test]
    fn test_sign_in_writes_canonical_keys() {
        let (storage, session) = session();
        storage.set("tenantToken", "old");
        session.sign_in(
            Role::Tenant,
            &SignIn {
                token: "t-1".to_string(),
                user_id: Some("42".to_string()),
                display_name: Some("Asha".to_string()),
            },
        );
        assert_eq!(session.token(Role::Tenant).as_deref(), Some("t-1"));
        assert_eq!(session.user_id(Role::Tenant).as_deref(), Some("42"));
        assert_eq!(session.display_name(Role::Tenant).as_deref(), Some("Asha"));
        assert!(storage.get("tenantToken").is_none());
    }

    #[test]
    fn test_sign_out_clears_only_own_keys() {
        let (storage, session) = session();
        let grant = SignIn {
            token: "x".to_string(),
            user_id: Some("1".to_string()),
            display_name: None,
        };
        session.sign_in(Role::Landlord, &grant);
        session.sign_in(Role::Seller, &grant);
        storage.set("theme", "dark");

        session.sign_out(Role::Landlord);

        assert!(!session.is_signed_in(Role::Landlord));
        assert!(session.user_id(Role::Landlord).is_none());
        assert!(session.is_signed_in(Role::Seller));
        assert_eq!(storage.get("theme").as_deref(), Some("dark"));
    }

    #[test]
    fn test_sign_out_uses_configured_extra_keys() {
        let config = AppConfig::from_toml(
            r#"
            [roles.landlord]
            extra_clear_keys = ["propertyId"]
            "#,
        )
        .unwrap();
        let storage = MemoryStorage::new();
        let session = Session::new(storage.clone(), RoleRegistry::from_config(&config));
        storage.set("token", "x");
        storage.set("propertyId", "p-9");
        session.sign_out(Role::Landlord);
        assert!(storage.keys().is_empty());
    }

    #[test]
    fn test_legacy_alias_is_reported_not_used() {
        let (storage, session) = session();
        storage.set("tenantToken", "legacy");

        assert!(session.token(Role::Tenant).is_none());
        let mismatches = session.key_mismatches(Role::Tenant);
        assert_eq!(
            mismatches,
            vec![KeyMismatch {
                role: Role::Tenant,
                canonical_key: "tenanttoken".to_string(),
                legacy_key: "tenantToken".to_string(),
                canonical_present: false,
            }]
        );
        assert_eq!(session.report_key_mismatches().len(), 1);

        session.sign_out(Role::Tenant);
        assert!(session.key_mismatches(Role::Tenant).is_empty());
    }
}
