//! Approval history entries.

use super::Decision;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// What happened to the invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ApprovalAction {
    /// Invoice approved
    Approved,
    /// Invoice rejected
    Rejected,
}

impl From<Decision> for ApprovalAction {
    fn from(decision: Decision) -> Self {
        match decision {
            Decision::Approve => Self::Approved,
            Decision::Reject => Self::Rejected,
        }
    }
}

/// Append-only log entry written when an invoice is decided.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovalRecord {
    /// Unique identifier
    pub id: u32,
    /// Invoice the decision applied to
    #[serde(default)]
    pub invoice_id: String,
    /// Vendor named on the invoice
    pub vendor: String,
    /// Invoice total at the time of the decision
    pub amount: Decimal,
    /// Approved or rejected
    pub action: ApprovalAction,
    /// Decision date
    pub date: NaiveDate,
    /// Name of the deciding user
    pub approver: String,
}
