//! Portal users and their roles.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// The closed set of portal roles. Each role gets exactly one dashboard.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Role {
    /// External supplier submitting invoices and onboarding documents
    Vendor,
    /// Purchasing team managing vendor onboarding
    Purchase,
    /// Finance team reviewing invoices
    Finance,
    /// Final invoice approver
    Approver,
}

/// The logged-in user. No credentials are attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    /// Role selected at login
    pub role: Role,
    /// Display name, used to stamp decisions and as the vendor name on invoices
    pub name: String,
}

impl CurrentUser {
    /// Creates a user with the given role and display name.
    #[must_use]
    pub fn new(role: Role, name: impl Into<String>) -> Self {
        Self {
            role,
            name: name.into(),
        }
    }
}
