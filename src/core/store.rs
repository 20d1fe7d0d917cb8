//! The portal state container.
//!
//! `PortalStore` owns every collection the portal works with. It is a plain value:
//! build one from fixtures, hand it to whatever drives the session, and throw it
//! away at logout. Nothing here touches disk.

use crate::{
    config::fixtures::PortalFixtures,
    models::{ApprovalRecord, Invoice, OnboardingApplication, Vendor},
};
use chrono::{NaiveDate, Utc};
use tracing::info;

/// In-memory collections for one session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PortalStore {
    pub(crate) vendors: Vec<Vendor>,
    pub(crate) applications: Vec<OnboardingApplication>,
    pub(crate) invoices: Vec<Invoice>,
    pub(crate) history: Vec<ApprovalRecord>,
}

impl PortalStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with fixture records.
    #[must_use]
    pub fn from_fixtures(fixtures: PortalFixtures) -> Self {
        info!(
            "Seeding store: {} vendors, {} applications, {} invoices, {} history entries",
            fixtures.vendors.len(),
            fixtures.applications.len(),
            fixtures.invoices.len(),
            fixtures.history.len()
        );
        Self {
            vendors: fixtures.vendors,
            applications: fixtures.applications,
            invoices: fixtures.invoices,
            history: fixtures.history,
        }
    }

    /// All vendors, in insertion order.
    #[must_use]
    pub fn vendors(&self) -> &[Vendor] {
        &self.vendors
    }

    /// All onboarding applications, in insertion order.
    #[must_use]
    pub fn applications(&self) -> &[OnboardingApplication] {
        &self.applications
    }

    /// All invoices regardless of status, in insertion order.
    #[must_use]
    pub fn invoices(&self) -> &[Invoice] {
        &self.invoices
    }

    /// The approval history log, oldest first.
    #[must_use]
    pub fn history(&self) -> &[ApprovalRecord] {
        &self.history
    }

    /// Looks up an invoice by invoice number.
    #[must_use]
    pub fn invoice(&self, id: &str) -> Option<&Invoice> {
        self.invoices.iter().find(|invoice| invoice.id == id)
    }

    /// Looks up a vendor by id.
    #[must_use]
    pub fn vendor(&self, id: u32) -> Option<&Vendor> {
        self.vendors.iter().find(|vendor| vendor.id == id)
    }

    /// Looks up a vendor by email, ignoring case.
    #[must_use]
    pub fn vendor_by_email(&self, email: &str) -> Option<&Vendor> {
        self.vendors
            .iter()
            .find(|vendor| vendor.email.eq_ignore_ascii_case(email.trim()))
    }

    /// Looks up an onboarding application by id.
    #[must_use]
    pub fn application(&self, id: u32) -> Option<&OnboardingApplication> {
        self.applications.iter().find(|app| app.id == id)
    }

    /// Today's date, used to stamp submissions and decisions.
    #[must_use]
    pub fn today() -> NaiveDate {
        Utc::now().date_naive()
    }

    pub(crate) fn next_vendor_id(&self) -> u32 {
        self.vendors.iter().map(|v| v.id).max().unwrap_or(0) + 1
    }

    pub(crate) fn next_application_id(&self) -> u32 {
        self.applications.iter().map(|a| a.id).max().unwrap_or(0) + 1
    }

    pub(crate) fn next_history_id(&self) -> u32 {
        self.history.iter().map(|h| h.id).max().unwrap_or(0) + 1
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn test_new_store_is_empty() {
        let store = PortalStore::new();
        assert!(store.vendors().is_empty());
        assert!(store.applications().is_empty());
        assert!(store.invoices().is_empty());
        assert!(store.history().is_empty());
    }

    #[test]
    fn test_lookups_on_seeded_store() {
        let store = seeded_store();
        assert_eq!(store.invoice("INV-001").unwrap().vendor, "Acme Supplies");
        assert!(store.invoice("INV-404").is_none());
        assert_eq!(store.vendor(1).unwrap().name, "Acme Supplies");
        assert_eq!(
            store.vendor_by_email("ORDERS@ACME.EXAMPLE").unwrap().id,
            1
        );
        assert_eq!(store.application(1).unwrap().vendor_name, "Northwind Traders");
    }

    #[test]
    fn test_next_ids_follow_highest_existing() {
        let store = seeded_store();
        assert_eq!(store.next_vendor_id(), 4);
        assert_eq!(store.next_application_id(), 3);
        assert_eq!(store.next_history_id(), 3);
        assert_eq!(PortalStore::new().next_vendor_id(), 1);
    }
}
