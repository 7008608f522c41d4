//! User, role and session types
//!
//! A session is either fully authenticated with a valid role, or absent.
//! There is no partially-authenticated state: `AuthSession` is only ever
//! constructed by the login flow, and the session cell stores
//! `Option<AuthSession>`.

use serde::{Deserialize, Serialize};

/// Dashboard user role. Closed enumeration; each role has its own
/// default dashboard route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Relationship manager: client-specific visibility.
    Rm,
    /// Executive: territory-wide visibility.
    Executive,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Rm => "rm",
            UserRole::Executive => "executive",
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Profile attached to an authenticated session.
///
/// Role-specific attributes are optional: `rm_id` is set for relationship
/// managers, `territories`/`team_ids` for executives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rm_id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub territories: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub team_ids: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

/// Authenticated session as held by the session cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSession {
    pub is_authenticated: bool,
    pub user: UserProfile,
}

impl AuthSession {
    /// Build a session for a matched profile. The only constructor the
    /// login flow uses; `is_authenticated` is always true here.
    pub fn authenticated(user: UserProfile) -> Self {
        Self {
            is_authenticated: true,
            user,
        }
    }
}
