//! # Application configuration: `propdesk.toml`
//!
//! Defines the TOML file bundled with the web client (filename:
//! [`AppConfig::filename`] = `"propdesk.toml"`). It is parsed once at startup;
//! the resulting [`AppConfig`] feeds the API client base URL, UI timers and the
//! per-role session key layout ([`crate::RoleRegistry::from_config`]).
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "https://api.example.com"
//! page_size = 20
//!
//! [ui]
//! clock_refresh_secs = 1
//! toast_limit = 4
//!
//! [roles.tenant]
//! token_key = "tenanttoken"
//! legacy_token_keys = ["tenantToken"]
//! ```
//!
//! All structs default every field, so a missing or empty file is equivalent
//! to the default configuration.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `propdesk.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
    /// Per-role overrides keyed by role slug (`"property-manager"`).
    #[serde(default)]
    pub roles: BTreeMap<String, RoleOverride>,
}

/// Remote backend settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Scheme and host every request goes to, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// `limit` sent by paginated list endpoints.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_page_size() -> u32 {
    20
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            page_size: default_page_size(),
        }
    }
}

/// Presentation settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Refresh interval of the header clock.
    #[serde(default = "default_clock_refresh")]
    pub clock_refresh_secs: u32,
    /// How many toasts stay on screen before the oldest is dropped.
    #[serde(default = "default_toast_limit")]
    pub toast_limit: usize,
}

fn default_clock_refresh() -> u32 {
    1
}

fn default_toast_limit() -> usize {
    4
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            clock_refresh_secs: default_clock_refresh(),
            toast_limit: default_toast_limit(),
        }
    }
}

/// Optional replacements for fields of a [`crate::RoleProfile`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RoleOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legacy_token_keys: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_clear_keys: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_path: Option<String>,
}

impl AppConfig {
    /// Builder method to point the client at another backend.
    pub fn with_base_url(mut self, url: &str) -> Self {
        self.api.base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "propdesk.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(s)?;
        config.api.base_url = config.api.base_url.trim_end_matches('/').to_string();
        Ok(config)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
