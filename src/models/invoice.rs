//! Invoice record.
//!
//! Amounts are held as [`Decimal`] and only turned into display strings by the
//! presentation helpers in [`crate::core::money`].

use super::{Decision, RecordKind, Reviewable};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Lifecycle of an invoice.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum InvoiceStatus {
    /// Submitted, waiting for finance or an approver
    PendingApproval,
    /// Picked up for review
    UnderReview,
    /// Approved for payment
    Approved,
    /// Refused
    Rejected,
}

/// Review priority assigned to an invoice.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Priority {
    /// Routine
    Normal,
    /// Elevated
    Medium,
    /// Needs attention first
    High,
}

/// An invoice submitted against a purchase order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    /// Invoice number, unique within the store
    pub id: String,
    /// Name of the submitting vendor
    pub vendor: String,
    /// Purchase order the invoice is raised against
    pub po_reference: String,
    /// Date printed on the invoice
    pub invoice_date: NaiveDate,
    /// Payment due date
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    /// Amount before tax
    pub amount: Decimal,
    /// Tax on top of the amount
    #[serde(default)]
    pub tax_amount: Decimal,
    /// `amount + tax_amount`, rounded to cents
    pub total_amount: Decimal,
    /// Current lifecycle status
    pub status: InvoiceStatus,
    /// Date the invoice entered the portal
    pub submitted_date: NaiveDate,
    /// Free-text description
    #[serde(default)]
    pub description: Option<String>,
    /// Department the spend belongs to
    #[serde(default)]
    pub department: Option<String>,
    /// Who has to sign off, e.g. `Department Head` or `Finance`
    #[serde(default)]
    pub approval_level: Option<String>,
    /// Review priority
    #[serde(default)]
    pub priority: Option<Priority>,
    /// Name of the user who decided on this invoice
    #[serde(default)]
    pub reviewed_by: Option<String>,
    /// Date of the decision
    #[serde(default)]
    pub reviewed_on: Option<NaiveDate>,
}

impl Reviewable for Invoice {
    const KIND: RecordKind = RecordKind::Invoice;

    fn status_label(&self) -> String {
        self.status.to_string()
    }

    fn is_pending(&self) -> bool {
        self.status == InvoiceStatus::PendingApproval
    }

    fn is_awaiting_decision(&self) -> bool {
        matches!(
            self.status,
            InvoiceStatus::PendingApproval | InvoiceStatus::UnderReview
        )
    }

    fn mark_under_review(&mut self) {
        self.status = InvoiceStatus::UnderReview;
    }

    fn mark_decided(&mut self, decision: Decision, reviewer: &str, on: NaiveDate) {
        self.status = match decision {
            Decision::Approve => InvoiceStatus::Approved,
            Decision::Reject => InvoiceStatus::Rejected,
        };
        self.reviewed_by = Some(reviewer.to_string());
        self.reviewed_on = Some(on);
    }
}
