//! Navigation bridge: the imperative "go to path" capability screens and the
//! controller use for redirects, plus builders for the paths they go to.

use store::{Role, RoleProfile};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavMode {
    /// Add a history entry.
    Push,
    /// Replace the current entry (redirects).
    Replace,
}

/// Something that can change the visible screen.
pub trait Navigate {
    fn navigate(&self, path: &str, mode: NavMode);
    fn back(&self);
}

impl<N: Navigate + ?Sized> Navigate for &N {
    fn navigate(&self, path: &str, mode: NavMode) {
        (**self).navigate(path, mode)
    }

    fn back(&self) {
        (**self).back()
    }
}

/// Route paths built from role slugs and server identifiers.
pub mod paths {
    use super::*;

    pub fn login(profile: &RoleProfile) -> &str {
        &profile.login_path
    }

    pub fn home(profile: &RoleProfile) -> &str {
        &profile.home_path
    }

    /// Screen path for one of a role's sections: `/landlord/tenants`.
    pub fn section(role: Role, name: &str) -> String {
        format!("/{}/{}", role.slug(), name.trim_matches('/'))
    }

    /// Deep link to a record the server identified: `/landlord/properties/64f1c`.
    pub fn detail(role: Role, name: &str, id: &str) -> String {
        format!("{}/{}", section(role, name), id.trim_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingNavigator;

    #[test]
    fn test_back_through_trait_object() {
        let recorder = RecordingNavigator::new();
        let nav: &dyn Navigate = &recorder;
        nav.navigate("/tenant/dues", NavMode::Push);
        (&nav).back();

        assert_eq!(recorder.backs(), 1);
        assert_eq!(
            recorder.visits(),
            vec![("/tenant/dues".to_string(), NavMode::Push)]
        );
    }

    #[test]
    fn test_paths() {
        let profile = RoleProfile::default_for(Role::SubOwner);
        assert_eq!(paths::login(&profile), "/sub-owner/login");
        assert_eq!(paths::home(&profile), "/sub-owner/dashboard");
        assert_eq!(paths::section(Role::Worker, "/work-orders/"), "/worker/work-orders");
        assert_eq!(
            paths::detail(Role::Landlord, "properties", "64f1c"),
            "/landlord/properties/64f1c"
        );
    }
}
