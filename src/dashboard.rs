//! Role dashboards.
//!
//! One dashboard per role, built from a snapshot of the store. The variants own
//! their data so a dashboard can be rendered after the store has moved on.

use crate::{
    core::{
        PortalStore,
        money::format_currency,
        report::{
            applications_awaiting_decision, approval_rate, count_by, decision_counts,
            decisions_on, format_progress_bar, invoices_for_vendor, onboarding_status_for,
            pending_amount_total, pending_invoices, priority_counts, recent_history,
            vendors_awaiting_decision, DecisionCounts, PriorityCounts,
        },
    },
    models::{
        ApprovalRecord, CurrentUser, Invoice, InvoiceStatus, OnboardingApplication,
        OnboardingStatus, Role, Vendor, VendorStatus,
    },
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::{cmp::Reverse, fmt};
use strum::IntoEnumIterator;

/// How many history entries the approver dashboard lists.
const RECENT_HISTORY_LIMIT: usize = 5;

/// A vendor's own invoices and onboarding progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorDashboard {
    /// Vendor name the dashboard was built for
    pub vendor_name: String,
    /// Invoices submitted under that name
    pub invoices: Vec<Invoice>,
    /// How many of them await a decision
    pub pending_count: usize,
    /// Status of the latest onboarding application, if any
    pub onboarding_status: Option<OnboardingStatus>,
}

/// Vendor onboarding overview for the purchase team.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseDashboard {
    /// Vendor count per status, in lifecycle order
    pub vendor_counts: Vec<(VendorStatus, usize)>,
    /// Vendors pending or under review
    pub vendors_awaiting: Vec<Vendor>,
}

/// Invoice and onboarding review queues for finance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinanceDashboard {
    /// Invoices awaiting a decision
    pub awaiting: Vec<Invoice>,
    /// Size of the pending set
    pub pending_count: usize,
    /// Invoices currently under review
    pub under_review_count: usize,
    /// Total value of the pending set
    pub pending_total: Decimal,
    /// Onboarding applications pending or under review
    pub applications_awaiting: Vec<OnboardingApplication>,
    /// Applications awaiting a decision
    pub pending_onboarding: usize,
    /// Applications already approved
    pub approved_onboarding: usize,
}

/// Approval queue and track record for approvers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApproverDashboard {
    /// Pending invoices, highest priority first
    pub pending: Vec<Invoice>,
    /// Priority breakdown of the pending set
    pub priorities: PriorityCounts,
    /// Approved share of all decisions, in percent
    pub approval_rate: u32,
    /// Latest decisions, newest first
    pub recent: Vec<ApprovalRecord>,
    /// Day the dashboard was built for
    pub today: NaiveDate,
    /// Decisions recorded on `today`
    pub decided_today: Vec<ApprovalRecord>,
    /// Approved and rejected totals over the whole history
    pub decisions: DecisionCounts,
}

/// The dashboard for one role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dashboard {
    /// Vendor view
    Vendor(VendorDashboard),
    /// Purchase team view
    Purchase(PurchaseDashboard),
    /// Finance view
    Finance(FinanceDashboard),
    /// Approver view
    Approver(ApproverDashboard),
}

impl Dashboard {
    /// Builds the dashboard matching `user`'s role as of today.
    #[must_use]
    pub fn build(user: &CurrentUser, store: &PortalStore) -> Self {
        Self::build_on(user, store, PortalStore::today())
    }

    /// Builds the dashboard matching `user`'s role as of `today`.
    #[must_use]
    pub fn build_on(user: &CurrentUser, store: &PortalStore, today: NaiveDate) -> Self {
        match user.role {
            Role::Vendor => Self::Vendor(VendorDashboard::build(&user.name, store)),
            Role::Purchase => Self::Purchase(PurchaseDashboard::build(store)),
            Role::Finance => Self::Finance(FinanceDashboard::build(store)),
            Role::Approver => Self::Approver(ApproverDashboard::build(store, today)),
        }
    }
}

impl VendorDashboard {
    fn build(vendor_name: &str, store: &PortalStore) -> Self {
        let invoices: Vec<Invoice> = invoices_for_vendor(store, vendor_name)
            .into_iter()
            .cloned()
            .collect();
        let pending_count = invoices
            .iter()
            .filter(|invoice| {
                matches!(
                    invoice.status,
                    InvoiceStatus::PendingApproval | InvoiceStatus::UnderReview
                )
            })
            .count();

        Self {
            vendor_name: vendor_name.to_string(),
            invoices,
            pending_count,
            onboarding_status: onboarding_status_for(store, vendor_name),
        }
    }
}

impl PurchaseDashboard {
    fn build(store: &PortalStore) -> Self {
        let counts = count_by(store.vendors(), |vendor| vendor.status);
        let vendor_counts = VendorStatus::iter()
            .map(|status| (status, counts.get(&status).copied().unwrap_or(0)))
            .collect();

        Self {
            vendor_counts,
            vendors_awaiting: vendors_awaiting_decision(store)
                .into_iter()
                .cloned()
                .collect(),
        }
    }
}

impl FinanceDashboard {
    fn build(store: &PortalStore) -> Self {
        let awaiting: Vec<Invoice> = pending_invoices(store).into_iter().cloned().collect();
        let under_review_count = awaiting
            .iter()
            .filter(|invoice| invoice.status == InvoiceStatus::UnderReview)
            .count();

        let applications_awaiting: Vec<OnboardingApplication> =
            applications_awaiting_decision(store)
                .into_iter()
                .cloned()
                .collect();
        let onboarding = count_by(store.applications(), |app| app.status);

        Self {
            pending_count: awaiting.len(),
            under_review_count,
            pending_total: pending_amount_total(store),
            awaiting,
            pending_onboarding: applications_awaiting.len(),
            approved_onboarding: onboarding
                .get(&OnboardingStatus::Approved)
                .copied()
                .unwrap_or(0),
            applications_awaiting,
        }
    }
}

impl ApproverDashboard {
    fn build(store: &PortalStore, today: NaiveDate) -> Self {
        let mut pending: Vec<Invoice> = pending_invoices(store).into_iter().cloned().collect();
        pending.sort_by_key(|invoice| Reverse(invoice.priority));

        Self {
            pending,
            priorities: priority_counts(store),
            approval_rate: approval_rate(store.history()),
            recent: recent_history(store, RECENT_HISTORY_LIMIT)
                .into_iter()
                .cloned()
                .collect(),
            today,
            decided_today: decisions_on(store, today).into_iter().cloned().collect(),
            decisions: decision_counts(store.history()),
        }
    }
}

fn write_invoice_line(f: &mut fmt::Formatter<'_>, invoice: &Invoice) -> fmt::Result {
    let priority = invoice
        .priority
        .map_or_else(|| "-".to_string(), |p| p.to_string());
    writeln!(
        f,
        "  {} | {} | PO {} | {} | {} | {}",
        invoice.id,
        invoice.vendor,
        invoice.po_reference,
        format_currency(invoice.total_amount),
        invoice.status,
        priority
    )
}

impl fmt::Display for Dashboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vendor(d) => {
                writeln!(f, "Vendor dashboard: {}", d.vendor_name)?;
                let onboarding = d
                    .onboarding_status
                    .map_or_else(|| "not submitted".to_string(), |s| s.to_string());
                writeln!(f, "Onboarding: {onboarding}")?;
                writeln!(
                    f,
                    "Invoices: {} submitted, {} awaiting decision",
                    d.invoices.len(),
                    d.pending_count
                )?;
                for invoice in &d.invoices {
                    write_invoice_line(f, invoice)?;
                }
            }
            Self::Purchase(d) => {
                writeln!(f, "Purchase dashboard")?;
                for (status, count) in &d.vendor_counts {
                    writeln!(f, "  vendors {status}: {count}")?;
                }
                writeln!(f, "Vendors awaiting decision: {}", d.vendors_awaiting.len())?;
                for vendor in &d.vendors_awaiting {
                    writeln!(
                        f,
                        "  #{} {} <{}> | {}",
                        vendor.id, vendor.name, vendor.email, vendor.status
                    )?;
                }
            }
            Self::Finance(d) => {
                writeln!(f, "Finance dashboard")?;
                writeln!(
                    f,
                    "Pending: {} ({} under review), total {}",
                    d.pending_count,
                    d.under_review_count,
                    format_currency(d.pending_total)
                )?;
                for invoice in &d.awaiting {
                    write_invoice_line(f, invoice)?;
                }
                writeln!(
                    f,
                    "Onboarding: {} awaiting decision, {} approved",
                    d.pending_onboarding, d.approved_onboarding
                )?;
                for app in &d.applications_awaiting {
                    writeln!(
                        f,
                        "  #{} {} | submitted {} | {} documents | {}",
                        app.id, app.vendor_name, app.submitted_date, app.document_count, app.status
                    )?;
                }
            }
            Self::Approver(d) => {
                writeln!(f, "Approver dashboard")?;
                writeln!(
                    f,
                    "Pending: {} (high {}, medium {}, normal {}, unassigned {})",
                    d.pending.len(),
                    d.priorities.high,
                    d.priorities.medium,
                    d.priorities.normal,
                    d.priorities.unassigned
                )?;
                writeln!(
                    f,
                    "Approval rate: {}",
                    format_progress_bar(d.approval_rate, None)
                )?;
                writeln!(
                    f,
                    "Decisions: {} approved, {} rejected, {} on {}",
                    d.decisions.approved,
                    d.decisions.rejected,
                    d.decided_today.len(),
                    d.today
                )?;
                for invoice in &d.pending {
                    write_invoice_line(f, invoice)?;
                }
                writeln!(f, "Recent decisions:")?;
                for record in &d.recent {
                    writeln!(
                        f,
                        "  {} | {} | {} | {} by {}",
                        record.date,
                        record.invoice_id,
                        format_currency(record.amount),
                        record.action,
                        record.approver
                    )?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::{
        core::decision::decide,
        models::{Decision, Priority, RecordRef},
        test_utils::*,
    };
    use rust_decimal_macros::dec;

    #[test]
    fn test_vendor_dashboard() {
        let store = seeded_store();
        let Dashboard::Vendor(d) =
            Dashboard::build(&CurrentUser::new(Role::Vendor, "Globex Corp"), &store)
        else {
            panic!("expected vendor dashboard");
        };

        assert_eq!(d.invoices.len(), 2);
        assert_eq!(d.pending_count, 1);
        assert_eq!(d.onboarding_status, Some(OnboardingStatus::UnderReview));
    }

    #[test]
    fn test_purchase_dashboard() {
        let store = seeded_store();
        let Dashboard::Purchase(d) = Dashboard::build(&purchase_user(), &store) else {
            panic!("expected purchase dashboard");
        };

        assert_eq!(d.vendor_counts.len(), 5);
        assert_eq!(d.vendor_counts[0], (VendorStatus::Invited, 1));
        assert_eq!(d.vendor_counts[3], (VendorStatus::Approved, 1));
        assert_eq!(d.vendors_awaiting.len(), 1);

        let text = Dashboard::Purchase(d).to_string();
        assert!(!text.contains("Onboarding"));
    }

    #[test]
    fn test_finance_dashboard() {
        let store = seeded_store();
        let Dashboard::Finance(d) = Dashboard::build(&finance_user(), &store) else {
            panic!("expected finance dashboard");
        };

        assert_eq!(d.pending_count, 3);
        assert_eq!(d.under_review_count, 1);
        assert_eq!(d.pending_total, dec!(1849.99));
        assert_eq!(d.applications_awaiting.len(), 2);
        assert_eq!(d.pending_onboarding, 2);
        assert_eq!(d.approved_onboarding, 0);
    }

    #[test]
    fn test_finance_dashboard_tracks_onboarding_decisions() {
        let mut store = seeded_store();
        decide(
            &mut store,
            &RecordRef::Onboarding(2),
            Decision::Approve,
            &finance_user(),
            day(2024, 6, 1),
        )
        .unwrap();

        let dashboard = Dashboard::build(&finance_user(), &store);
        let Dashboard::Finance(d) = &dashboard else {
            panic!("expected finance dashboard");
        };
        assert_eq!(d.pending_onboarding, 1);
        assert_eq!(d.approved_onboarding, 1);
        assert!(dashboard
            .to_string()
            .contains("Onboarding: 1 awaiting decision, 1 approved"));
    }

    #[test]
    fn test_approver_dashboard_orders_by_priority() {
        let store = seeded_store();
        let Dashboard::Approver(d) = Dashboard::build(&approver(), &store) else {
            panic!("expected approver dashboard");
        };

        let priorities: Vec<Option<Priority>> = d.pending.iter().map(|i| i.priority).collect();
        assert_eq!(
            priorities,
            vec![Some(Priority::High), Some(Priority::Medium), None]
        );
        assert_eq!(d.approval_rate, 50);
        assert_eq!(d.recent.len(), 2);
        assert_eq!(d.recent[0].id, 2);
    }

    #[test]
    fn test_approver_dashboard_decisions_today() {
        let store = seeded_store();
        let Dashboard::Approver(d) = Dashboard::build_on(&approver(), &store, day(2024, 1, 30))
        else {
            panic!("expected approver dashboard");
        };
        assert_eq!(d.decided_today.len(), 2);
        assert_eq!(d.decisions.approved, 1);
        assert_eq!(d.decisions.rejected, 1);

        let text = Dashboard::build_on(&approver(), &store, day(2024, 2, 1)).to_string();
        assert!(text.contains("Decisions: 1 approved, 1 rejected, 0 on 2024-02-01"));
    }

    #[test]
    fn test_render_uses_formatted_currency() {
        let store = seeded_store();
        let text = Dashboard::build(&finance_user(), &store).to_string();

        assert!(text.starts_with("Finance dashboard"));
        assert!(text.contains("total $1,849.99"));
        assert!(text.contains("INV-001 | Acme Supplies | PO PO-2024-001 | $1,250.00"));
    }

    #[test]
    fn test_render_approver_rate_bar() {
        let store = seeded_store();
        let text = Dashboard::build(&approver(), &store).to_string();
        assert!(text.contains("Approval rate: [█████░░░░░] 50%"));
    }
}
