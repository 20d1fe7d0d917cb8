//! Application configuration.
//!
//! Gathers everything the binary needs at start-up: the fixture file to seed the
//! store with and the user to log in as.

/// Fixture loading from a TOML file
pub mod fixtures;
/// Login bootstrap from environment variables
pub mod users;

use crate::{errors::Result, models::CurrentUser};
use fixtures::{DEFAULT_FIXTURES_PATH, PortalFixtures};
use std::path::PathBuf;
use tracing::info;

/// Environment variable overriding the fixture file location.
pub const FIXTURES_VAR: &str = "PORTAL_FIXTURES";

/// Start-up configuration for the portal binary.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Where the fixtures were read from
    pub fixtures_path: PathBuf,
    /// Seed data for the store
    pub fixtures: PortalFixtures,
    /// User to log in as, if configured
    pub login: Option<CurrentUser>,
}

/// Loads the application configuration from the environment.
///
/// # Errors
/// Returns an error if the fixture file exists but is invalid, or the login
/// variables are inconsistent.
pub fn load_app_configuration() -> Result<AppConfig> {
    let fixtures_path = PathBuf::from(
        std::env::var(FIXTURES_VAR).unwrap_or_else(|_| DEFAULT_FIXTURES_PATH.to_string()),
    );
    let fixtures = fixtures::load_fixtures_or_empty(&fixtures_path)?;
    let login = users::login_from_env()?;

    info!(
        "Configuration loaded from {:?} (login configured: {})",
        fixtures_path,
        login.is_some()
    );
    Ok(AppConfig {
        fixtures_path,
        fixtures,
        login,
    })
}
