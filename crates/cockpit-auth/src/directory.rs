//! User directory and login flow
//!
//! The seeded directory stands in for a real identity store. Email lookup
//! is case-insensitive; passwords are compared as stored. A failed login
//! is an absent result, not an error; the caller presents the login error.

use async_trait::async_trait;
use tracing::debug;

use cockpit_core::{AuthSession, DirectoryUser, UserDirectory, UserProfile, UserRole};

/// Fixed in-memory user directory.
pub struct StaticUserDirectory {
    users: Vec<DirectoryUser>,
}

impl StaticUserDirectory {
    /// Directory with the two seeded dashboard users.
    pub fn seeded() -> Self {
        Self {
            users: vec![
                DirectoryUser {
                    email: "rm_user@nuvama.com".into(),
                    password: "cockpit2025".into(),
                    profile: UserProfile {
                        id: "rm-001".into(),
                        name: "Rajesh Kumar".into(),
                        email: "rm_user@nuvama.com".into(),
                        role: UserRole::Rm,
                        rm_id: Some("RM-MUM-001".into()),
                        territories: vec![],
                        team_ids: vec![],
                        photo_url: None,
                    },
                },
                DirectoryUser {
                    email: "exec_user@nuvama.com".into(),
                    password: "cockpit2025".into(),
                    profile: UserProfile {
                        id: "exec-001".into(),
                        name: "Amit Saxena".into(),
                        email: "exec_user@nuvama.com".into(),
                        role: UserRole::Executive,
                        rm_id: None,
                        territories: vec!["Mumbai".into(), "Delhi".into(), "Bangalore".into()],
                        team_ids: vec![
                            "team-west".into(),
                            "team-north".into(),
                            "team-south".into(),
                        ],
                        photo_url: None,
                    },
                },
            ],
        }
    }

    /// Directory over an arbitrary user list.
    pub fn with_users(users: Vec<DirectoryUser>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl UserDirectory for StaticUserDirectory {
    async fn find_by_email(&self, email: &str) -> Option<DirectoryUser> {
        let needle = email.to_lowercase();
        self.users
            .iter()
            .find(|user| user.email.to_lowercase() == needle)
            .cloned()
    }
}

/// Match credentials against the directory.
///
/// Returns an authenticated session on a match, `None` otherwise.
pub async fn authenticate(
    directory: &dyn UserDirectory,
    email: &str,
    password: &str,
) -> Option<AuthSession> {
    let user = directory.find_by_email(email).await?;
    if user.password != password {
        debug!(email, "login rejected: password mismatch");
        return None;
    }
    Some(AuthSession::authenticated(user.profile))
}
