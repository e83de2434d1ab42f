//! Session state and auth payload types. The session is a plain value:
//! construction goes through [`Session::from_token`] so a token and its
//! decoded claims never drift apart, and role checks live here as methods
//! instead of string comparisons scattered through the UI.

use serde::{Deserialize, Serialize};
use session_token::TokenClaims;
use std::collections::BTreeSet;

pub const SUPER_ADMIN_ROLE: &str = "super_administrador";
pub const ADMIN_ROLE: &str = "administrador";
pub const SALES_EXEC_ROLE: &str = "ejecutivo_ventas";

/// Roles that make a user part of the administrative tier. An explicit
/// any-of list: sales executives count, and super administrators are
/// tracked separately via [`Session::is_super_admin`].
pub const ADMIN_TIER_ROLES: &[&str] = &[ADMIN_ROLE, SALES_EXEC_ROLE];

/// The authenticated state of this client. Empty by default; populated
/// only from a token whose claims decoded successfully.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
    user_id: Option<String>,
    roles: BTreeSet<String>,
}

impl Session {
    /// Builds the session for a decoded token. Callers must pass the claims
    /// decoded from the same token string.
    pub fn from_token(token: impl Into<String>, claims: TokenClaims) -> Self {
        Self {
            token: Some(token.into()),
            user_id: Some(claims.usuario_id),
            roles: claims.roles.into_iter().collect(),
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    pub fn roles(&self) -> &BTreeSet<String> {
        &self.roles
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.contains(role)
    }

    /// True when at least one of `roles` is held. An empty list never
    /// matches.
    pub fn has_any_role<'a>(&self, roles: impl IntoIterator<Item = &'a str>) -> bool {
        roles.into_iter().any(|role| self.roles.contains(role))
    }

    pub fn is_super_admin(&self) -> bool {
        self.has_role(SUPER_ADMIN_ROLE)
    }

    pub fn is_admin_tier(&self) -> bool {
        self.has_any_role(ADMIN_TIER_ROLES.iter().copied())
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_with_roles(roles: &[&str]) -> Session {
        Session::from_token(
            "header.claims.sig",
            TokenClaims {
                usuario_id: "1".to_string(),
                roles: roles.iter().map(ToString::to_string).collect(),
                exp: None,
            },
        )
    }

    #[test]
    fn default_session_is_logged_out() {
        let session = Session::default();
        assert!(!session.is_authenticated());
        assert_eq!(session.token(), None);
        assert_eq!(session.user_id(), None);
        assert!(session.roles().is_empty());
        assert!(!session.is_super_admin());
        assert!(!session.is_admin_tier());
    }

    #[test]
    fn from_token_carries_claims() {
        let session = session_with_roles(&[ADMIN_ROLE]);
        assert!(session.is_authenticated());
        assert_eq!(session.token(), Some("header.claims.sig"));
        assert_eq!(session.user_id(), Some("1"));
        assert!(session.has_role(ADMIN_ROLE));
        assert!(!session.has_role(SUPER_ADMIN_ROLE));
    }

    #[test]
    fn admin_tier_accepts_either_role() {
        assert!(session_with_roles(&[ADMIN_ROLE]).is_admin_tier());
        assert!(session_with_roles(&[SALES_EXEC_ROLE]).is_admin_tier());
        assert!(session_with_roles(&[ADMIN_ROLE, SALES_EXEC_ROLE]).is_admin_tier());
    }

    #[test]
    fn super_admin_alone_is_not_admin_tier() {
        let session = session_with_roles(&[SUPER_ADMIN_ROLE]);
        assert!(session.is_super_admin());
        assert!(!session.is_admin_tier());
    }

    #[test]
    fn has_any_role_with_empty_list_never_matches() {
        let session = session_with_roles(&[ADMIN_ROLE]);
        assert!(!session.has_any_role(std::iter::empty()));
    }

    #[test]
    fn login_request_serializes_expected_fields() {
        let request = LoginRequest {
            email: "ventas@prefabrica.cl".to_string(),
            password: "secreto".to_string(),
        };

        let json = serde_json::to_string(&request).expect("Failed to serialize");
        assert!(json.contains("\"email\""));
        assert!(json.contains("\"password\""));

        let response: LoginResponse =
            serde_json::from_str("{\"token\":\"a.b.c\"}").expect("Failed to deserialize");
        assert_eq!(response.token, "a.b.c");
    }
}
