//! Role guard
//!
//! Every dashboard page mounts the guard before rendering. Unauthorized
//! states are soft: the guard navigates (to login, or to the session
//! role's own dashboard) and reports `authorized = false`. It never
//! errors and never panics. The check is re-run whenever the required
//! role or the stored session changes.

use cockpit_core::{AuthSession, UserRole};
use tracing::debug;

use crate::session::SessionStore;

/// Route of the login view.
pub const LOGIN_ROUTE: &str = "/login";

/// Fixed role -> default dashboard route table.
const DASHBOARD_ROUTES: [(UserRole, &str); 2] =
    [(UserRole::Rm, "/rm"), (UserRole::Executive, "/executive")];

/// Default dashboard route for a role.
pub fn default_dashboard_route(role: UserRole) -> &'static str {
    DASHBOARD_ROUTES
        .iter()
        .find(|(candidate, _)| *candidate == role)
        .map(|(_, route)| *route)
        .unwrap_or(LOGIN_ROUTE)
}

/// Navigation side-effect seam. Exactly one `replace` call happens per
/// unauthorized evaluation; none when authorized.
pub trait Navigator {
    fn replace(&mut self, route: &str);
}

/// Outcome of a guard evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuardOutcome {
    pub authorized: bool,
}

/// Evaluate the guard for one (session, required role) pair.
///
/// - absent or unauthenticated session: navigate to login
/// - role mismatch: navigate to the session role's own dashboard
/// - match: authorized, no navigation
pub fn authorize(
    session: Option<&AuthSession>,
    required_role: UserRole,
    navigator: &mut dyn Navigator,
) -> GuardOutcome {
    let session = match session {
        Some(session) if session.is_authenticated => session,
        _ => {
            debug!(%required_role, "guard: no session, redirecting to login");
            navigator.replace(LOGIN_ROUTE);
            return GuardOutcome { authorized: false };
        }
    };

    if session.user.role != required_role {
        let home = default_dashboard_route(session.user.role);
        debug!(
            actual = %session.user.role,
            %required_role,
            route = home,
            "guard: role mismatch, redirecting to own dashboard"
        );
        navigator.replace(home);
        return GuardOutcome { authorized: false };
    }

    GuardOutcome { authorized: true }
}

/// A guard bound to a session cell and a required role.
///
/// `evaluate` re-reads the cell every time, so callers re-run it on any
/// navigation or session change and always see the current state.
pub struct RoleGuard<'a> {
    store: &'a SessionStore,
    required_role: UserRole,
}

impl<'a> RoleGuard<'a> {
    pub fn new(store: &'a SessionStore, required_role: UserRole) -> Self {
        Self {
            store,
            required_role,
        }
    }

    pub fn evaluate(&self, navigator: &mut dyn Navigator) -> GuardOutcome {
        let session = self.store.get();
        authorize(session.as_ref(), self.required_role, navigator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cockpit_core::UserProfile;

    /// Records every navigation the guard performs.
    #[derive(Default)]
    struct RecordingNavigator {
        routes: Vec<String>,
    }

    impl Navigator for RecordingNavigator {
        fn replace(&mut self, route: &str) {
            self.routes.push(route.to_string());
        }
    }

    fn session_for(role: UserRole) -> AuthSession {
        let (id, name, email) = match role {
            UserRole::Rm => ("rm-001", "Rajesh Kumar", "rm_user@nuvama.com"),
            UserRole::Executive => ("exec-001", "Amit Saxena", "exec_user@nuvama.com"),
        };
        AuthSession::authenticated(UserProfile {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            role,
            rm_id: None,
            territories: vec![],
            team_ids: vec![],
            photo_url: None,
        })
    }

    #[test]
    fn no_session_redirects_to_login_for_any_role() {
        for required in [UserRole::Rm, UserRole::Executive] {
            let mut nav = RecordingNavigator::default();
            let outcome = authorize(None, required, &mut nav);
            assert!(!outcome.authorized);
            assert_eq!(nav.routes, vec![LOGIN_ROUTE]);
        }
    }

    #[test]
    fn role_mismatch_redirects_to_own_dashboard_never_login() {
        let session = session_for(UserRole::Rm);
        let mut nav = RecordingNavigator::default();

        let outcome = authorize(Some(&session), UserRole::Executive, &mut nav);

        assert!(!outcome.authorized);
        assert_eq!(nav.routes, vec!["/rm"]);
    }

    #[test]
    fn matching_role_authorizes_without_navigation() {
        let session = session_for(UserRole::Executive);
        let mut nav = RecordingNavigator::default();

        let outcome = authorize(Some(&session), UserRole::Executive, &mut nav);

        assert!(outcome.authorized);
        assert!(nav.routes.is_empty());
    }

    #[test]
    fn unauthenticated_session_counts_as_absent() {
        let mut session = session_for(UserRole::Rm);
        session.is_authenticated = false;
        let mut nav = RecordingNavigator::default();

        let outcome = authorize(Some(&session), UserRole::Rm, &mut nav);

        assert!(!outcome.authorized);
        assert_eq!(nav.routes, vec![LOGIN_ROUTE]);
    }

    #[test]
    fn exactly_one_navigation_per_unauthorized_evaluation() {
        let session = session_for(UserRole::Executive);
        let mut nav = RecordingNavigator::default();

        authorize(Some(&session), UserRole::Rm, &mut nav);
        authorize(Some(&session), UserRole::Rm, &mut nav);

        assert_eq!(nav.routes, vec!["/executive", "/executive"]);
    }

    #[test]
    fn role_guard_reacts_to_session_changes() {
        let store = SessionStore::new();
        let guard = RoleGuard::new(&store, UserRole::Rm);

        let mut nav = RecordingNavigator::default();
        assert!(!guard.evaluate(&mut nav).authorized);
        assert_eq!(nav.routes, vec![LOGIN_ROUTE]);

        store.set(session_for(UserRole::Rm));
        let mut nav = RecordingNavigator::default();
        assert!(guard.evaluate(&mut nav).authorized);
        assert!(nav.routes.is_empty());

        store.clear();
        let mut nav = RecordingNavigator::default();
        assert!(!guard.evaluate(&mut nav).authorized);
        assert_eq!(nav.routes, vec![LOGIN_ROUTE]);
    }

    #[test]
    fn route_table_is_fixed() {
        assert_eq!(default_dashboard_route(UserRole::Rm), "/rm");
        assert_eq!(default_dashboard_route(UserRole::Executive), "/executive");
    }
}
