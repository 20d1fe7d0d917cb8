//! Domain records held by the portal store.
//!
//! Each record kind has a closed status enumeration. Records that go through an
//! approve/reject review implement [`Reviewable`], which is what lets a single
//! transition function drive invoices, onboarding applications and vendors alike.

pub mod approval;
pub mod invoice;
pub mod onboarding;
pub mod user;
pub mod vendor;

pub use approval::{ApprovalAction, ApprovalRecord};
pub use invoice::{Invoice, InvoiceStatus, Priority};
pub use onboarding::{OnboardingApplication, OnboardingStatus};
pub use user::{CurrentUser, Role};
pub use vendor::{Vendor, VendorStatus};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// The kinds of record a review decision can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RecordKind {
    /// An invoice submitted by a vendor
    Invoice,
    /// A vendor onboarding application
    Onboarding,
    /// A vendor account
    Vendor,
}

/// Outcome of a review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Decision {
    /// Accept the record
    Approve,
    /// Refuse the record
    Reject,
}

/// Identifies one record in the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordRef {
    /// Invoice by invoice number
    Invoice(String),
    /// Onboarding application by id
    Onboarding(u32),
    /// Vendor by id
    Vendor(u32),
}

impl RecordRef {
    /// Kind of record this reference points at.
    #[must_use]
    pub const fn kind(&self) -> RecordKind {
        match self {
            Self::Invoice(_) => RecordKind::Invoice,
            Self::Onboarding(_) => RecordKind::Onboarding,
            Self::Vendor(_) => RecordKind::Vendor,
        }
    }

    /// Identifier rendered as text, as used in error messages.
    #[must_use]
    pub fn id_string(&self) -> String {
        match self {
            Self::Invoice(id) => id.clone(),
            Self::Onboarding(id) | Self::Vendor(id) => id.to_string(),
        }
    }
}

/// A record that moves through review: awaiting, under review, then decided.
pub trait Reviewable {
    /// Kind reported in errors
    const KIND: RecordKind;

    /// Current status as its wire label
    fn status_label(&self) -> String;

    /// True when the record is in its initial pending state
    fn is_pending(&self) -> bool;

    /// True when the record is pending or under review
    fn is_awaiting_decision(&self) -> bool;

    /// Moves a pending record to under review
    fn mark_under_review(&mut self);

    /// Applies a decision and stamps the reviewer
    fn mark_decided(&mut self, decision: Decision, reviewer: &str, on: NaiveDate);
}
