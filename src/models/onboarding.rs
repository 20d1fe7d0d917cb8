//! Onboarding application - the documents a vendor submits for verification.
//!
//! Applications are matched to vendors only loosely, by email. An application can
//! exist without any vendor record, and the other way around.

use super::{Decision, RecordKind, Reviewable};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Lifecycle of an onboarding application.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum OnboardingStatus {
    /// Submitted, not yet picked up
    Pending,
    /// Documents are being verified
    UnderReview,
    /// Vendor accepted
    Approved,
    /// Vendor refused
    Rejected,
}

/// A submitted onboarding application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingApplication {
    /// Unique identifier
    pub id: u32,
    /// Company name as entered on the form
    pub vendor_name: String,
    /// Contact email as entered on the form
    #[serde(default)]
    pub email: String,
    /// Submission date
    pub submitted_date: NaiveDate,
    /// Current lifecycle status
    pub status: OnboardingStatus,
    /// Number of documents attached
    pub document_count: u32,
    /// Name of the user who decided on this application
    #[serde(default)]
    pub reviewed_by: Option<String>,
    /// Date of the decision
    #[serde(default)]
    pub reviewed_on: Option<NaiveDate>,
}

impl Reviewable for OnboardingApplication {
    const KIND: RecordKind = RecordKind::Onboarding;

    fn status_label(&self) -> String {
        self.status.to_string()
    }

    fn is_pending(&self) -> bool {
        self.status == OnboardingStatus::Pending
    }

    fn is_awaiting_decision(&self) -> bool {
        matches!(
            self.status,
            OnboardingStatus::Pending | OnboardingStatus::UnderReview
        )
    }

    fn mark_under_review(&mut self) {
        self.status = OnboardingStatus::UnderReview;
    }

    fn mark_decided(&mut self, decision: Decision, reviewer: &str, on: NaiveDate) {
        self.status = match decision {
            Decision::Approve => OnboardingStatus::Approved,
            Decision::Reject => OnboardingStatus::Rejected,
        };
        self.reviewed_by = Some(reviewer.to_string());
        self.reviewed_on = Some(on);
    }
}
