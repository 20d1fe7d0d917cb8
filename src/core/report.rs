//! Derived read-only views over the store.
//!
//! Counts, totals and rates the dashboards show. Nothing here mutates; every
//! figure is recomputed from the collections on each call.

use crate::{
    core::store::PortalStore,
    models::{
        ApprovalAction, ApprovalRecord, Invoice, OnboardingApplication, OnboardingStatus,
        Priority, Reviewable, Vendor,
    },
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::{collections::HashMap, hash::Hash};

/// Pending invoices broken down by priority.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PriorityCounts {
    /// High priority
    pub high: usize,
    /// Medium priority
    pub medium: usize,
    /// Normal priority
    pub normal: usize,
    /// No priority assigned
    pub unassigned: usize,
}

/// Approved and rejected totals over a set of decisions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecisionCounts {
    /// Approved decisions
    pub approved: usize,
    /// Rejected decisions
    pub rejected: usize,
}

/// Counts items by a key, e.g. records by status.
pub fn count_by<T, K, F>(items: &[T], key: F) -> HashMap<K, usize>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut counts = HashMap::new();
    for item in items {
        *counts.entry(key(item)).or_insert(0) += 1;
    }
    counts
}

/// Invoices awaiting a decision (`pending_approval` or `under_review`).
#[must_use]
pub fn pending_invoices(store: &PortalStore) -> Vec<&Invoice> {
    store
        .invoices()
        .iter()
        .filter(|invoice| invoice.is_awaiting_decision())
        .collect()
}

/// Number of invoices awaiting a decision.
#[must_use]
pub fn pending_invoice_count(store: &PortalStore) -> usize {
    pending_invoices(store).len()
}

/// Sum of `total_amount` across the pending set.
#[must_use]
pub fn pending_amount_total(store: &PortalStore) -> Decimal {
    pending_invoices(store)
        .into_iter()
        .map(|invoice| invoice.total_amount)
        .sum()
}

/// Priority breakdown of the pending set.
#[must_use]
pub fn priority_counts(store: &PortalStore) -> PriorityCounts {
    let mut counts = PriorityCounts::default();
    for invoice in pending_invoices(store) {
        match invoice.priority {
            Some(Priority::High) => counts.high += 1,
            Some(Priority::Medium) => counts.medium += 1,
            Some(Priority::Normal) => counts.normal += 1,
            None => counts.unassigned += 1,
        }
    }
    counts
}

/// Share of approved decisions in the history, as a whole percentage.
///
/// Rounds half up; an empty history yields 0.
#[must_use]
pub fn approval_rate(history: &[ApprovalRecord]) -> u32 {
    let total = history.len();
    if total == 0 {
        return 0;
    }
    let approved = history
        .iter()
        .filter(|record| record.action == ApprovalAction::Approved)
        .count();

    let rate = (200 * approved + total) / (2 * total);
    u32::try_from(rate).unwrap_or(100)
}

/// History entries recorded on `date`, in the order they were made.
#[must_use]
pub fn decisions_on(store: &PortalStore, date: NaiveDate) -> Vec<&ApprovalRecord> {
    store
        .history()
        .iter()
        .filter(|record| record.date == date)
        .collect()
}

/// Approved and rejected totals for `history`.
#[must_use]
pub fn decision_counts<'a, I>(history: I) -> DecisionCounts
where
    I: IntoIterator<Item = &'a ApprovalRecord>,
{
    history
        .into_iter()
        .fold(DecisionCounts::default(), |mut counts, record| {
            match record.action {
                ApprovalAction::Approved => counts.approved += 1,
                ApprovalAction::Rejected => counts.rejected += 1,
            }
            counts
        })
}

/// Invoices submitted by one vendor, matched by name.
#[must_use]
pub fn invoices_for_vendor<'a>(store: &'a PortalStore, vendor: &str) -> Vec<&'a Invoice> {
    store
        .invoices()
        .iter()
        .filter(|invoice| invoice.vendor.eq_ignore_ascii_case(vendor.trim()))
        .collect()
}

/// Applications awaiting a decision (`pending` or `under_review`).
#[must_use]
pub fn applications_awaiting_decision(store: &PortalStore) -> Vec<&OnboardingApplication> {
    store
        .applications()
        .iter()
        .filter(|app| app.is_awaiting_decision())
        .collect()
}

/// Vendors awaiting a decision (`pending` or `under_review`).
#[must_use]
pub fn vendors_awaiting_decision(store: &PortalStore) -> Vec<&Vendor> {
    store
        .vendors()
        .iter()
        .filter(|vendor| vendor.is_awaiting_decision())
        .collect()
}

/// Status of the most recent application submitted under `vendor_name`.
#[must_use]
pub fn onboarding_status_for(store: &PortalStore, vendor_name: &str) -> Option<OnboardingStatus> {
    store
        .applications()
        .iter()
        .filter(|app| app.vendor_name.eq_ignore_ascii_case(vendor_name.trim()))
        .max_by_key(|app| (app.submitted_date, app.id))
        .map(|app| app.status)
}

/// The latest `limit` history entries, newest first.
#[must_use]
pub fn recent_history(store: &PortalStore, limit: usize) -> Vec<&ApprovalRecord> {
    store.history().iter().rev().take(limit).collect()
}

/// Generates a progress bar string for a percentage.
///
/// Creates a text-based progress bar like: `[████████░░] 80%`
#[must_use]
pub fn format_progress_bar(percent: u32, bar_length: Option<usize>) -> String {
    let length = bar_length.unwrap_or(10);
    let clamped = percent.min(100) as usize;

    let filled = (clamped * length + 50) / 100;
    let empty = length.saturating_sub(filled);

    let filled_str = "█".repeat(filled);
    let empty_str = "░".repeat(empty);

    format!("[{filled_str}{empty_str}] {percent}%")
}
