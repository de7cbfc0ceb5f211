//! Route guard evaluated once per navigation.
//!
//! Protected routes name the role they belong to; the guard admits them when
//! that role holds a token and otherwise answers with the role's login path.
//! Public routes (login screens, the role picker) carry no role and always
//! pass, which is what keeps a 401 redirect from looping.

use store::{Role, Session, SessionStorage};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Public route.
    Open,
    /// Protected route with a token present.
    Granted { role: Role, token: String },
    /// Protected route without a token; go to `redirect`.
    Denied { role: Role, redirect: String },
}

impl GuardDecision {
    pub fn token(&self) -> Option<&str> {
        match self {
            GuardDecision::Granted { token, .. } => Some(token),
            _ => None,
        }
    }

    pub fn is_denied(&self) -> bool {
        matches!(self, GuardDecision::Denied { .. })
    }
}

pub struct RouteGuard;

impl RouteGuard {
    /// Decide whether a route owned by `role` (if any) may render.
    pub fn check<S: SessionStorage>(session: &Session<S>, role: Option<Role>) -> GuardDecision {
        let Some(role) = role else {
            return GuardDecision::Open;
        };
        match session.token(role) {
            Some(token) => GuardDecision::Granted { role, token },
            None => {
                let redirect = session.profile(role).login_path.clone();
                tracing::debug!("No {role} token, redirecting to {redirect}");
                GuardDecision::Denied { role, redirect }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::{MemoryStorage, RoleRegistry};

    #[test]
    fn test_guard_decisions() {
        let storage = MemoryStorage::new();
        let session = Session::new(storage.clone(), RoleRegistry::default());

        assert_eq!(RouteGuard::check(&session, None), GuardDecision::Open);
        assert_eq!(
            RouteGuard::check(&session, Some(Role::Seller)),
            GuardDecision::Denied {
                role: Role::Seller,
                redirect: "/seller/login".to_string()
            }
        );

        session.put("sellertoken", "s-1");
        let decision = RouteGuard::check(&session, Some(Role::Seller));
        assert_eq!(decision.token(), Some("s-1"));
        assert!(!decision.is_denied());
    }

    #[test]
    fn test_other_roles_token_does_not_grant() {
        let session = Session::new(MemoryStorage::new(), RoleRegistry::default());
        session.put("token", "landlord-token");
        assert!(RouteGuard::check(&session, Some(Role::Tenant)).is_denied());
    }
}
