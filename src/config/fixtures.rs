//! Fixture loading from a TOML file.
//!
//! The portal keeps nothing on disk. Instead, each run starts from a fixture file
//! describing the vendors, applications, invoices and history to seed the store
//! with. A missing file simply means an empty store.

use crate::{
    errors::{Error, Result},
    models::{ApprovalRecord, Invoice, OnboardingApplication, Vendor},
};
use serde::Deserialize;
use std::{collections::HashSet, hash::Hash, path::Path};
use tracing::{debug, warn};

/// Default fixture file, relative to the working directory.
pub const DEFAULT_FIXTURES_PATH: &str = "portal.toml";

/// Seed data for a [`crate::core::PortalStore`].
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct PortalFixtures {
    /// Vendors to seed
    #[serde(default)]
    pub vendors: Vec<Vendor>,
    /// Onboarding applications to seed
    #[serde(default)]
    pub applications: Vec<OnboardingApplication>,
    /// Invoices to seed
    #[serde(default)]
    pub invoices: Vec<Invoice>,
    /// Approval history to seed
    #[serde(default)]
    pub history: Vec<ApprovalRecord>,
}

fn ensure_unique<T, K, F>(items: &[T], what: &str, key: F) -> Result<()>
where
    K: Eq + Hash + std::fmt::Display,
    F: Fn(&T) -> K,
{
    let mut seen = HashSet::new();
    for item in items {
        let id = key(item);
        if seen.contains(&id) {
            return Err(Error::Config {
                message: format!("Duplicate {what} id '{id}' in fixtures"),
            });
        }
        seen.insert(id);
    }
    Ok(())
}

impl PortalFixtures {
    /// Parses fixtures from TOML text and checks ids are unique per collection.
    ///
    /// # Errors
    /// Returns [`Error::Config`] if the TOML is invalid or ids repeat.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let fixtures: Self = toml::from_str(contents).map_err(|e| Error::Config {
            message: format!("Failed to parse fixtures: {e}"),
        })?;

        ensure_unique(&fixtures.vendors, "vendor", |v| v.id)?;
        ensure_unique(&fixtures.applications, "application", |a| a.id)?;
        ensure_unique(&fixtures.invoices, "invoice", |i| i.id.clone())?;
        ensure_unique(&fixtures.history, "history", |h| h.id)?;
        Ok(fixtures)
    }
}

/// Loads fixtures from a TOML file.
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid or a record is malformed
/// - Ids repeat within a collection
pub fn load_fixtures<P: AsRef<Path>>(path: P) -> Result<PortalFixtures> {
    let path = path.as_ref();
    debug!("Loading fixtures from {:?}", path);
    let contents = std::fs::read_to_string(path).map_err(|e| Error::Config {
        message: format!("Failed to read fixture file {path:?}: {e}"),
    })?;
    PortalFixtures::from_toml(&contents)
}

/// Loads fixtures, falling back to an empty set when the file does not exist.
///
/// # Errors
/// Same as [`load_fixtures`] for a file that exists.
pub fn load_fixtures_or_empty<P: AsRef<Path>>(path: P) -> Result<PortalFixtures> {
    let path = path.as_ref();
    if !path.exists() {
        warn!("Fixture file {:?} not found, starting with an empty store", path);
        return Ok(PortalFixtures::default());
    }
    load_fixtures(path)
}
