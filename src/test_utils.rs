//! Shared test utilities.
//!
//! Builders with sensible defaults and a small seeded store that most tests start
//! from. The seeded store contains:
//!
//! * vendors: 1 Acme Supplies (approved), 2 Globex Corp (pending), 3 Initech (invited)
//! * applications: 1 Northwind Traders (pending), 2 Globex Corp (under review)
//! * invoices: INV-001 Acme high 1250.00 (pending approval), INV-002 Acme medium
//!   500.00 (under review), INV-003 Globex normal 300.00 (approved), INV-004 Globex
//!   99.99 with no priority (pending approval)
//! * history: 1 approved, 2 rejected

use crate::{
    config::fixtures::PortalFixtures,
    core::{
        PortalStore,
        invoice::{InvoiceAttachments, InvoiceSubmission},
        onboarding::{OnboardingDocuments, OnboardingForm},
    },
    models::{
        ApprovalAction, ApprovalRecord, CurrentUser, Invoice, InvoiceStatus,
        OnboardingApplication, OnboardingStatus, Priority, Role, Vendor, VendorStatus,
    },
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Builds a date, panicking on an impossible one.
#[allow(clippy::unwrap_used)]
pub fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// The approver used across tests.
pub fn approver() -> CurrentUser {
    CurrentUser::new(Role::Approver, "Dana Approver")
}

/// The finance user used across tests.
pub fn finance_user() -> CurrentUser {
    CurrentUser::new(Role::Finance, "Frank Finance")
}

/// The purchase user used across tests.
pub fn purchase_user() -> CurrentUser {
    CurrentUser::new(Role::Purchase, "Pat Purchase")
}

/// A complete invoice form.
///
/// # Defaults
/// * `po_reference`: `"PO-2024-100"`
/// * `invoice_date`: `"2024-02-28"`
/// * `amount`: `"100.00"`, `tax_amount`: `"8.25"`
pub fn invoice_submission(invoice_number: &str) -> InvoiceSubmission {
    InvoiceSubmission {
        po_reference: "PO-2024-100".to_string(),
        invoice_number: invoice_number.to_string(),
        invoice_date: "2024-02-28".to_string(),
        amount: "100.00".to_string(),
        tax_amount: "8.25".to_string(),
        ..InvoiceSubmission::default()
    }
}

/// Attachments with the invoice document uploaded.
pub const fn invoice_attachments() -> InvoiceAttachments {
    InvoiceAttachments {
        invoice_document: true,
        receipt: false,
        delivery_note: false,
    }
}

/// A complete onboarding form for `company_name`.
pub fn onboarding_form(company_name: &str, email: &str) -> OnboardingForm {
    OnboardingForm {
        company_name: company_name.to_string(),
        business_type: "corporation".to_string(),
        registration_number: "REG-2024-0042".to_string(),
        tax_id: "TAX-12345".to_string(),
        address: "1 Industrial Way".to_string(),
        contact_person: "Sam Contact".to_string(),
        phone: "+1 555 0100".to_string(),
        email: email.to_string(),
        bank_name: "First Bank".to_string(),
        account_number: "000123456789".to_string(),
        routing_number: "021000021".to_string(),
    }
}

/// All four onboarding documents uploaded.
pub const fn onboarding_documents() -> OnboardingDocuments {
    OnboardingDocuments {
        registration_certificate: true,
        tax_document: true,
        bank_verification: true,
        kyc_documents: true,
    }
}

/// A vendor with the given status.
pub fn vendor(id: u32, name: &str, email: &str, status: VendorStatus) -> Vendor {
    Vendor {
        id,
        name: name.to_string(),
        email: email.to_string(),
        status,
        onboarding_date: Some(day(2024, 1, 10)),
        reviewed_by: None,
        reviewed_on: None,
    }
}

/// An onboarding application with four documents.
pub fn application(
    id: u32,
    vendor_name: &str,
    email: &str,
    status: OnboardingStatus,
) -> OnboardingApplication {
    OnboardingApplication {
        id,
        vendor_name: vendor_name.to_string(),
        email: email.to_string(),
        submitted_date: day(2024, 2, 1),
        status,
        document_count: 4,
        reviewed_by: None,
        reviewed_on: None,
    }
}

/// An invoice whose amount equals its total (no tax).
pub fn invoice(
    id: &str,
    vendor: &str,
    total: Decimal,
    status: InvoiceStatus,
    priority: Option<Priority>,
) -> Invoice {
    Invoice {
        id: id.to_string(),
        vendor: vendor.to_string(),
        po_reference: format!("PO-2024-{}", id.trim_start_matches("INV-")),
        invoice_date: day(2024, 2, 20),
        due_date: None,
        amount: total,
        tax_amount: Decimal::ZERO,
        total_amount: total,
        status,
        submitted_date: day(2024, 2, 21),
        description: None,
        department: None,
        approval_level: None,
        priority,
        reviewed_by: None,
        reviewed_on: None,
    }
}

/// A history entry with the given action.
pub fn history_entry(id: u32, action: ApprovalAction) -> ApprovalRecord {
    ApprovalRecord {
        id,
        invoice_id: format!("INV-H{id:02}"),
        vendor: "Acme Supplies".to_string(),
        amount: dec!(100.00),
        action,
        date: day(2024, 1, 30),
        approver: "Dana Approver".to_string(),
    }
}

/// Fixtures behind [`seeded_store`].
pub fn seed_fixtures() -> PortalFixtures {
    PortalFixtures {
        vendors: vec![
            vendor(1, "Acme Supplies", "orders@acme.example", VendorStatus::Approved),
            vendor(2, "Globex Corp", "billing@globex.example", VendorStatus::Pending),
            vendor(3, "Initech", "it@initech.example", VendorStatus::Invited),
        ],
        applications: vec![
            application(
                1,
                "Northwind Traders",
                "hello@northwind.example",
                OnboardingStatus::Pending,
            ),
            application(
                2,
                "Globex Corp",
                "billing@globex.example",
                OnboardingStatus::UnderReview,
            ),
        ],
        invoices: vec![
            invoice(
                "INV-001",
                "Acme Supplies",
                dec!(1250.00),
                InvoiceStatus::PendingApproval,
                Some(Priority::High),
            ),
            invoice(
                "INV-002",
                "Acme Supplies",
                dec!(500.00),
                InvoiceStatus::UnderReview,
                Some(Priority::Medium),
            ),
            invoice(
                "INV-003",
                "Globex Corp",
                dec!(300.00),
                InvoiceStatus::Approved,
                Some(Priority::Normal),
            ),
            invoice(
                "INV-004",
                "Globex Corp",
                dec!(99.99),
                InvoiceStatus::PendingApproval,
                None,
            ),
        ],
        history: vec![
            history_entry(1, ApprovalAction::Approved),
            history_entry(2, ApprovalAction::Rejected),
        ],
    }
}

/// A store seeded with [`seed_fixtures`].
pub fn seeded_store() -> PortalStore {
    PortalStore::from_fixtures(seed_fixtures())
}
