//! Store traits for the user directory and trigger book
//!
//! The in-memory fixture stores stand in for a real datastore. Both sit
//! behind these traits so that swapping in a real backend requires no
//! change to the guard or aggregator logic.

use async_trait::async_trait;

use crate::{LiquidityTrigger, UserProfile};

/// A directory entry: stored credentials plus the profile returned on a
/// successful login.
#[derive(Debug, Clone)]
pub struct DirectoryUser {
    pub email: String,
    pub password: String,
    pub profile: UserProfile,
}

/// Lookup interface over the user directory.
///
/// Implementations:
/// - `StaticUserDirectory`: fixed in-memory list (cockpit-auth)
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Find a user by email. Lookup is case-insensitive on the email;
    /// returns `None` when no entry matches.
    async fn find_by_email(&self, email: &str) -> Option<DirectoryUser>;
}

/// Read interface over the liquidity trigger book.
#[async_trait]
pub trait TriggerStore: Send + Sync {
    /// All triggers, in upstream order.
    async fn all(&self) -> Vec<LiquidityTrigger>;
}
