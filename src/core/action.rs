//! Typed actions and role permissions.
//!
//! Whatever drives the portal (a dashboard, a script, a test) mutates the store only
//! through [`PortalStore::dispatch`]. The acting user's role is checked against the
//! action before any operation runs.

use crate::{
    core::{
        decision::{self, Transition},
        invoice::{self, InvoiceAttachments, InvoiceSubmission},
        onboarding::{self, OnboardingDocuments, OnboardingForm},
        store::PortalStore,
        vendor,
    },
    errors::{Error, Result},
    models::{
        ApprovalRecord, CurrentUser, Decision, Invoice, OnboardingApplication, RecordKind,
        RecordRef, Role, Vendor,
    },
};
use tracing::{debug, warn};

/// Every mutation the portal supports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Vendor submits an invoice
    SubmitInvoice {
        /// Form fields
        submission: InvoiceSubmission,
        /// Upload flags
        attachments: InvoiceAttachments,
    },
    /// Vendor submits onboarding details
    SubmitOnboarding {
        /// Form fields
        form: OnboardingForm,
        /// Upload flags
        documents: OnboardingDocuments,
    },
    /// Reviewer picks up a pending record
    StartReview {
        /// Record to review
        target: RecordRef,
    },
    /// Reviewer approves or rejects a record
    Decide {
        /// Record to decide
        target: RecordRef,
        /// Approve or reject
        decision: Decision,
    },
    /// Purchase team invites a vendor
    InviteVendor {
        /// Vendor email
        email: String,
        /// Optional company name
        name: Option<String>,
    },
}

/// Result of a successfully dispatched action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The new invoice
    InvoiceSubmitted(Invoice),
    /// The new onboarding application
    OnboardingSubmitted(OnboardingApplication),
    /// The record is now under review
    ReviewStarted(RecordRef),
    /// The record was decided; invoices carry their history entry
    Decided {
        /// Record that was decided
        target: RecordRef,
        /// History entry written for invoice decisions
        history: Option<ApprovalRecord>,
    },
    /// The invited vendor
    VendorInvited(Vendor),
}

impl Action {
    /// Short description used in permission errors.
    #[must_use]
    pub const fn describe(&self) -> &'static str {
        match self {
            Self::SubmitInvoice { .. } => "submit invoices",
            Self::SubmitOnboarding { .. } => "submit onboarding",
            Self::StartReview { target } | Self::Decide { target, .. } => match target.kind() {
                RecordKind::Invoice => "review invoices",
                RecordKind::Onboarding => "review onboarding applications",
                RecordKind::Vendor => "review vendors",
            },
            Self::InviteVendor { .. } => "invite vendors",
        }
    }
}

impl Role {
    /// Whether this role may perform `action`.
    #[must_use]
    pub const fn permits(self, action: &Action) -> bool {
        match action {
            Action::SubmitInvoice { .. } | Action::SubmitOnboarding { .. } => {
                matches!(self, Self::Vendor)
            }
            Action::InviteVendor { .. } => matches!(self, Self::Purchase),
            Action::StartReview { target } | Action::Decide { target, .. } => {
                match target.kind() {
                    RecordKind::Invoice => matches!(self, Self::Finance | Self::Approver),
                    RecordKind::Onboarding => matches!(self, Self::Finance),
                    RecordKind::Vendor => matches!(self, Self::Purchase),
                }
            }
        }
    }
}

impl PortalStore {
    /// Runs `action` on behalf of `actor`, stamped with today's date.
    ///
    /// # Errors
    /// * [`Error::Forbidden`] when the actor's role does not permit the action
    /// * any validation or lookup error from the underlying operation
    pub fn dispatch(&mut self, actor: &CurrentUser, action: Action) -> Result<Outcome> {
        if !actor.role.permits(&action) {
            warn!(
                "{} ({}) attempted to {}",
                actor.name,
                actor.role,
                action.describe()
            );
            return Err(Error::Forbidden {
                role: actor.role,
                action: action.describe(),
            });
        }

        let today = Self::today();
        debug!("Dispatching {} for {}", action.describe(), actor.name);

        match action {
            Action::SubmitInvoice {
                submission,
                attachments,
            } => invoice::submit_invoice(self, &actor.name, submission, attachments, today)
                .map(Outcome::InvoiceSubmitted),
            Action::SubmitOnboarding { form, documents } => {
                onboarding::submit_onboarding(self, &form, documents, today)
                    .map(Outcome::OnboardingSubmitted)
            }
            Action::StartReview { target } => {
                decision::transition(self, &target, Transition::StartReview, actor, today)?;
                Ok(Outcome::ReviewStarted(target))
            }
            Action::Decide {
                target,
                decision: verdict,
            } => {
                let history = decision::decide(self, &target, verdict, actor, today)?;
                Ok(Outcome::Decided { target, history })
            }
            Action::InviteVendor { email, name } => {
                vendor::invite_vendor(self, &email, name.as_deref(), today)
                    .map(Outcome::VendorInvited)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::{
        core::report::{approval_rate, pending_invoice_count},
        models::{ApprovalAction, InvoiceStatus, OnboardingStatus, VendorStatus},
        test_utils::*,
    };

    #[test]
    fn test_vendor_submits_invoice_under_own_name() {
        let mut store = PortalStore::new();
        let actor = CurrentUser::new(Role::Vendor, "Acme Supplies");

        let outcome = store
            .dispatch(
                &actor,
                Action::SubmitInvoice {
                    submission: invoice_submission("INV-900"),
                    attachments: invoice_attachments(),
                },
            )
            .unwrap();

        let Outcome::InvoiceSubmitted(invoice) = outcome else {
            panic!("expected an invoice");
        };
        assert_eq!(invoice.vendor, "Acme Supplies");
        assert_eq!(invoice.submitted_date, PortalStore::today());
        assert_eq!(invoice.status, InvoiceStatus::PendingApproval);
    }

    #[test]
    fn test_approver_decides_invoice() {
        let mut store = seeded_store();
        let pending_before = pending_invoice_count(&store);

        let outcome = store
            .dispatch(
                &approver(),
                Action::Decide {
                    target: RecordRef::Invoice("INV-001".to_string()),
                    decision: Decision::Approve,
                },
            )
            .unwrap();

        let Outcome::Decided { history, .. } = outcome else {
            panic!("expected a decision");
        };
        let entry = history.unwrap();
        assert_eq!(entry.action, ApprovalAction::Approved);
        assert_eq!(entry.date, PortalStore::today());
        assert_eq!(pending_invoice_count(&store), pending_before - 1);
        assert_eq!(approval_rate(store.history()), 67);
    }

    #[test]
    fn test_purchase_invites_and_reviews_vendor() {
        let mut store = seeded_store();
        let outcome = store
            .dispatch(
                &purchase_user(),
                Action::InviteVendor {
                    email: "a@b.com".to_string(),
                    name: None,
                },
            )
            .unwrap();
        let Outcome::VendorInvited(vendor) = outcome else {
            panic!("expected a vendor");
        };
        assert_eq!(vendor.status, VendorStatus::Invited);

        store
            .dispatch(
                &purchase_user(),
                Action::StartReview {
                    target: RecordRef::Vendor(2),
                },
            )
            .unwrap();
        assert_eq!(store.vendor(2).unwrap().status, VendorStatus::UnderReview);
    }

    #[test]
    fn test_finance_decides_onboarding() {
        let mut store = seeded_store();
        let review = Action::StartReview {
            target: RecordRef::Onboarding(1),
        };
        assert!(matches!(
            store.dispatch(&purchase_user(), review.clone()).unwrap_err(),
            Error::Forbidden {
                role: Role::Purchase,
                action: "review onboarding applications"
            }
        ));

        store.dispatch(&finance_user(), review).unwrap();
        let outcome = store
            .dispatch(
                &finance_user(),
                Action::Decide {
                    target: RecordRef::Onboarding(1),
                    decision: Decision::Approve,
                },
            )
            .unwrap();

        assert!(matches!(outcome, Outcome::Decided { history: None, .. }));
        let application = store.application(1).unwrap();
        assert_eq!(application.status, OnboardingStatus::Approved);
        assert_eq!(application.reviewed_by.as_deref(), Some("Frank Finance"));
    }

    #[test]
    fn test_role_permissions() {
        let invoice_decision = Action::Decide {
            target: RecordRef::Invoice("INV-001".to_string()),
            decision: Decision::Approve,
        };
        let vendor_decision = Action::Decide {
            target: RecordRef::Vendor(1),
            decision: Decision::Approve,
        };
        let onboarding_decision = Action::Decide {
            target: RecordRef::Onboarding(1),
            decision: Decision::Approve,
        };
        let invite = Action::InviteVendor {
            email: "x@y.z".to_string(),
            name: None,
        };

        assert!(Role::Finance.permits(&invoice_decision));
        assert!(Role::Approver.permits(&invoice_decision));
        assert!(!Role::Purchase.permits(&invoice_decision));
        assert!(!Role::Vendor.permits(&invoice_decision));

        assert!(Role::Purchase.permits(&vendor_decision));
        assert!(!Role::Finance.permits(&vendor_decision));

        assert!(Role::Finance.permits(&onboarding_decision));
        assert!(!Role::Purchase.permits(&onboarding_decision));
        assert!(!Role::Approver.permits(&onboarding_decision));

        assert!(Role::Purchase.permits(&invite));
        assert!(!Role::Approver.permits(&invite));
    }

    #[test]
    fn test_forbidden_action_leaves_store_untouched() {
        let mut store = seeded_store();
        let before = store.clone();

        let result = store.dispatch(
            &CurrentUser::new(Role::Vendor, "Acme Supplies"),
            Action::Decide {
                target: RecordRef::Invoice("INV-001".to_string()),
                decision: Decision::Approve,
            },
        );

        assert!(matches!(
            result.unwrap_err(),
            Error::Forbidden {
                role: Role::Vendor,
                action: "review invoices"
            }
        ));
        assert_eq!(store, before);
    }
}
