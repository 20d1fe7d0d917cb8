//! Review transitions shared by invoices, onboarding applications and vendors.
//!
//! Every record kind is decided the same way: the record is located by id, its
//! status changes in place and the reviewer is stamped on it. Invoices additionally
//! leave an entry in the approval history. A decided invoice drops out of the
//! pending set because that set is derived from status, not kept as its own list.

use crate::{
    core::store::PortalStore,
    errors::{Error, Result},
    models::{ApprovalRecord, CurrentUser, Decision, RecordRef, Reviewable},
};
use chrono::NaiveDate;
use tracing::{info, instrument, warn};

/// A status change a reviewer can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Pick up a pending record for review
    StartReview,
    /// Approve or reject a record awaiting a decision
    Decide(Decision),
}

fn apply_transition<R: Reviewable>(
    record: &mut R,
    id: String,
    transition: Transition,
    reviewer: &str,
    today: NaiveDate,
) -> Result<()> {
    let allowed = match transition {
        Transition::StartReview => record.is_pending(),
        Transition::Decide(_) => record.is_awaiting_decision(),
    };
    if !allowed {
        warn!(
            "Rejected {:?} on {} '{}' in status '{}'",
            transition,
            R::KIND,
            id,
            record.status_label()
        );
        return Err(Error::InvalidTransition {
            kind: R::KIND,
            id,
            from: record.status_label(),
        });
    }

    match transition {
        Transition::StartReview => record.mark_under_review(),
        Transition::Decide(decision) => record.mark_decided(decision, reviewer, today),
    }
    Ok(())
}

fn not_found(target: &RecordRef) -> Error {
    Error::NotFound {
        kind: target.kind(),
        id: target.id_string(),
    }
}

/// Applies `transition` to the record `target` points at.
///
/// Returns the approval history entry when an invoice was decided.
///
/// # Errors
/// * [`Error::NotFound`] when no record has that id
/// * [`Error::InvalidTransition`] when the record's status does not allow it
#[instrument(skip(store, actor), fields(actor = %actor.name))]
pub fn transition(
    store: &mut PortalStore,
    target: &RecordRef,
    transition: Transition,
    actor: &CurrentUser,
    today: NaiveDate,
) -> Result<Option<ApprovalRecord>> {
    let history_id = store.next_history_id();
    let id = target.id_string();

    let entry = match target {
        RecordRef::Invoice(invoice_id) => {
            let invoice = store
                .invoices
                .iter_mut()
                .find(|invoice| invoice.id == *invoice_id)
                .ok_or_else(|| not_found(target))?;
            apply_transition(invoice, id, transition, &actor.name, today)?;

            match transition {
                Transition::StartReview => None,
                Transition::Decide(decision) => Some(ApprovalRecord {
                    id: history_id,
                    invoice_id: invoice.id.clone(),
                    vendor: invoice.vendor.clone(),
                    amount: invoice.total_amount,
                    action: decision.into(),
                    date: today,
                    approver: actor.name.clone(),
                }),
            }
        }
        RecordRef::Onboarding(app_id) => {
            let application = store
                .applications
                .iter_mut()
                .find(|app| app.id == *app_id)
                .ok_or_else(|| not_found(target))?;
            apply_transition(application, id, transition, &actor.name, today)?;
            None
        }
        RecordRef::Vendor(vendor_id) => {
            let vendor = store
                .vendors
                .iter_mut()
                .find(|vendor| vendor.id == *vendor_id)
                .ok_or_else(|| not_found(target))?;
            apply_transition(vendor, id, transition, &actor.name, today)?;
            None
        }
    };

    info!(
        "{} '{}': {:?} by {}",
        target.kind(),
        target.id_string(),
        transition,
        actor.name
    );
    if let Some(entry) = &entry {
        store.history.push(entry.clone());
    }
    Ok(entry)
}

/// Approves or rejects a record.
///
/// # Errors
/// See [`transition`].
pub fn decide(
    store: &mut PortalStore,
    target: &RecordRef,
    decision: Decision,
    actor: &CurrentUser,
    today: NaiveDate,
) -> Result<Option<ApprovalRecord>> {
    transition(store, target, Transition::Decide(decision), actor, today)
}

/// Moves a pending record to under review.
///
/// # Errors
/// See [`transition`].
pub fn start_review(
    store: &mut PortalStore,
    target: &RecordRef,
    actor: &CurrentUser,
    today: NaiveDate,
) -> Result<()> {
    transition(store, target, Transition::StartReview, actor, today).map(|_| ())
}
