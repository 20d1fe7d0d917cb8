//! Session bootstrap from environment variables.
//!
//! The binary has no login form, so the acting user comes from `PORTAL_ROLE` and
//! `PORTAL_USER` (usually set in `.env`). Both are optional; when the role is
//! absent nobody is logged in.

use crate::{
    errors::{Error, Result},
    models::{CurrentUser, Role},
};
use std::str::FromStr;

/// Environment variable holding the role to log in as.
pub const ROLE_VAR: &str = "PORTAL_ROLE";
/// Environment variable holding the display name to log in as.
pub const USER_VAR: &str = "PORTAL_USER";

/// Resolves a login from raw role and name values.
///
/// # Errors
/// Returns [`Error::Config`] for an unknown role or a role without a name.
pub fn resolve_login(role: Option<&str>, name: Option<&str>) -> Result<Option<CurrentUser>> {
    let Some(role) = role.map(str::trim).filter(|r| !r.is_empty()) else {
        return Ok(None);
    };

    let role = Role::from_str(role).map_err(|_| Error::Config {
        message: format!("{ROLE_VAR} must be one of vendor, purchase, finance, approver; got '{role}'"),
    })?;

    let name = name
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .ok_or_else(|| Error::Config {
            message: format!("{USER_VAR} must be set when {ROLE_VAR} is set"),
        })?;

    Ok(Some(CurrentUser::new(role, name)))
}

/// Reads the login from `PORTAL_ROLE` / `PORTAL_USER`.
///
/// # Errors
/// See [`resolve_login`].
pub fn login_from_env() -> Result<Option<CurrentUser>> {
    let role = std::env::var(ROLE_VAR).ok();
    let name = std::env::var(USER_VAR).ok();
    resolve_login(role.as_deref(), name.as_deref())
}
