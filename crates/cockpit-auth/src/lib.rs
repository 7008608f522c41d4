//! Cockpit Session and Role Guard
//!
//! This crate owns the authentication surface of the dashboard:
//! - `SessionStore`: the single mutable session cell with get/set/clear
//! - `StaticUserDirectory` and `authenticate`: the login flow
//! - `authorize` / `RoleGuard`: the role gate mounted by every dashboard
//!   page, expressing unauthorized states as redirects, never as errors

pub mod directory;
pub mod guard;
pub mod session;

pub use directory::{authenticate, StaticUserDirectory};
pub use guard::{authorize, default_dashboard_route, GuardOutcome, Navigator, RoleGuard, LOGIN_ROUTE};
pub use session::SessionStore;
