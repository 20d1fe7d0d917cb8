//! Vendor record - a supplier account moving from invitation to approval.

use super::{Decision, RecordKind, Reviewable};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Lifecycle of a vendor account.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum VendorStatus {
    /// Invitation sent, nothing submitted yet
    Invited,
    /// Onboarding submitted, awaiting review
    Pending,
    /// Purchase team is reviewing the vendor
    UnderReview,
    /// Vendor may submit invoices
    Approved,
    /// Vendor was turned down
    Rejected,
}

/// A vendor known to the portal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vendor {
    /// Unique identifier
    pub id: u32,
    /// Company name
    pub name: String,
    /// Contact email, unique across vendors (case-insensitive)
    pub email: String,
    /// Current lifecycle status
    pub status: VendorStatus,
    /// Date the vendor was invited or seeded
    #[serde(default)]
    pub onboarding_date: Option<NaiveDate>,
    /// Name of the user who decided on this vendor
    #[serde(default)]
    pub reviewed_by: Option<String>,
    /// Date of the decision
    #[serde(default)]
    pub reviewed_on: Option<NaiveDate>,
}

impl Reviewable for Vendor {
    const KIND: RecordKind = RecordKind::Vendor;

    fn status_label(&self) -> String {
        self.status.to_string()
    }

    fn is_pending(&self) -> bool {
        self.status == VendorStatus::Pending
    }

    fn is_awaiting_decision(&self) -> bool {
        matches!(
            self.status,
            VendorStatus::Pending | VendorStatus::UnderReview
        )
    }

    fn mark_under_review(&mut self) {
        self.status = VendorStatus::UnderReview;
    }

    fn mark_decided(&mut self, decision: Decision, reviewer: &str, on: NaiveDate) {
        self.status = match decision {
            Decision::Approve => VendorStatus::Approved,
            Decision::Reject => VendorStatus::Rejected,
        };
        self.reviewed_by = Some(reviewer.to_string());
        self.reviewed_on = Some(on);
    }
}
