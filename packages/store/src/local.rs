//! # Browser local storage backend
//!
//! [`LocalStorage`] is the [`SessionStorage`] implementation used on the **web
//! platform**. It reads and writes `window.localStorage` through `web-sys`.
//!
//! Like the rest of the session layer it never surfaces storage failures:
//! when storage is unavailable (private browsing quota, sandboxed iframe)
//! reads return `None` and writes are dropped with a warning.

use crate::session::{settle_write, SessionStorage};

/// `window.localStorage`-backed SessionStorage.
///
/// Zero-size and `Clone`; the storage handle is looked up on every call.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl SessionStorage for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let attempt = Self::storage().map(|storage| storage.set_item(key, value));
        settle_write("write", key, attempt);
    }

    fn remove(&self, key: &str) {
        let attempt = Self::storage().map(|storage| storage.remove_item(key));
        settle_write("removal", key, attempt);
    }
}
