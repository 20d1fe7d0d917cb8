//! Core business logic - framework-agnostic workflow operations.
//!
//! Each submodule owns one concern of the workflow model. Operations take the
//! [`PortalStore`] they act on as their first argument and validate fully before
//! mutating it.

/// Typed actions and role permissions
pub mod action;
/// Review transitions for invoices, applications and vendors
pub mod decision;
/// Invoice submission
pub mod invoice;
/// Currency parsing and formatting
pub mod money;
/// Vendor onboarding submission
pub mod onboarding;
/// Derived counts, totals and rates
pub mod report;
/// The in-memory state container
pub mod store;
/// Vendor invitations
pub mod vendor;

pub use action::{Action, Outcome};
pub use store::PortalStore;
