//! Login session - a credential-less role selector.
//!
//! Logging in only records who is acting and in which role. The role is resolved
//! once here and then drives which dashboard is built and which actions are allowed.

use crate::{
    core::{Action, Outcome, PortalStore},
    dashboard::Dashboard,
    errors::{Error, Result},
    models::{CurrentUser, Role},
};
use tracing::info;

/// Holds the current user, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    current: Option<CurrentUser>,
}

impl Session {
    /// Creates a logged-out session.
    #[must_use]
    pub const fn new() -> Self {
        Self { current: None }
    }

    /// Logs in as `name` with `role`, replacing any current user.
    ///
    /// # Errors
    /// [`Error::MissingRequiredField`] when the name is blank.
    pub fn login(&mut self, role: Role, name: &str) -> Result<&CurrentUser> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::MissingRequiredField { field: "name" });
        }

        info!("{} logged in as {}", name, role);
        Ok(&*self.current.insert(CurrentUser::new(role, name)))
    }

    /// Logs out, returning the user that was logged in.
    pub fn logout(&mut self) -> Option<CurrentUser> {
        let previous = self.current.take();
        if let Some(user) = &previous {
            info!("{} logged out", user.name);
        }
        previous
    }

    /// Whether someone is logged in.
    #[must_use]
    pub const fn is_logged_in(&self) -> bool {
        self.current.is_some()
    }

    /// The logged-in user.
    ///
    /// # Errors
    /// [`Error::NotLoggedIn`] when nobody is logged in.
    pub fn current_user(&self) -> Result<&CurrentUser> {
        self.current.as_ref().ok_or(Error::NotLoggedIn)
    }

    /// Dispatches `action` on `store` as the logged-in user.
    ///
    /// # Errors
    /// [`Error::NotLoggedIn`], or whatever [`PortalStore::dispatch`] returns.
    pub fn dispatch(&self, store: &mut PortalStore, action: Action) -> Result<Outcome> {
        store.dispatch(self.current_user()?, action)
    }

    /// Builds the dashboard for the logged-in user's role.
    ///
    /// # Errors
    /// [`Error::NotLoggedIn`] when nobody is logged in.
    pub fn dashboard(&self, store: &PortalStore) -> Result<Dashboard> {
        Ok(Dashboard::build(self.current_user()?, store))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::{models::RecordRef, test_utils::*};

    #[test]
    fn test_login_and_logout() {
        let mut session = Session::new();
        assert!(!session.is_logged_in());

        let user = session.login(Role::Finance, "  Frank Finance ").unwrap();
        assert_eq!(user, &CurrentUser::new(Role::Finance, "Frank Finance"));
        assert!(session.is_logged_in());

        let previous = session.logout().unwrap();
        assert_eq!(previous.role, Role::Finance);
        assert!(matches!(session.current_user().unwrap_err(), Error::NotLoggedIn));
        assert!(session.logout().is_none());
    }

    #[test]
    fn test_login_requires_name() {
        let mut session = Session::new();
        let result = session.login(Role::Vendor, " ");
        assert!(matches!(
            result.unwrap_err(),
            Error::MissingRequiredField { field: "name" }
        ));
        assert!(!session.is_logged_in());
    }

    #[test]
    fn test_dispatch_requires_login() {
        let mut store = seeded_store();
        let session = Session::new();
        let result = session.dispatch(
            &mut store,
            Action::StartReview {
                target: RecordRef::Invoice("INV-001".to_string()),
            },
        );
        assert!(matches!(result.unwrap_err(), Error::NotLoggedIn));
    }

    #[test]
    fn test_dashboard_follows_role() {
        let store = seeded_store();
        let mut session = Session::new();
        assert!(session.dashboard(&store).is_err());

        session.login(Role::Approver, "Dana Approver").unwrap();
        assert!(matches!(
            session.dashboard(&store).unwrap(),
            Dashboard::Approver(_)
        ));

        session.login(Role::Purchase, "Pat Purchase").unwrap();
        assert!(matches!(
            session.dashboard(&store).unwrap(),
            Dashboard::Purchase(_)
        ));
    }
}
