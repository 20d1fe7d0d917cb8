//! Invoice submission.
//!
//! Vendors submit invoices as raw form text plus upload flags. Everything is
//! validated and parsed before the store is touched; on success the invoice enters
//! the pending set with status `pending_approval`.

use crate::{
    core::{
        money::{parse_amount, parse_optional_amount, round_cents},
        store::PortalStore,
    },
    errors::{Error, Result},
    models::{Invoice, InvoiceStatus, Priority},
};
use chrono::NaiveDate;
use tracing::{info, instrument, warn};

/// Raw invoice form fields as entered by the vendor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvoiceSubmission {
    /// Purchase order reference (required)
    pub po_reference: String,
    /// Invoice number, becomes the invoice id (required)
    pub invoice_number: String,
    /// Invoice date as `YYYY-MM-DD` (required)
    pub invoice_date: String,
    /// Payment due date as `YYYY-MM-DD`, blank when not given
    pub due_date: String,
    /// Amount before tax (required)
    pub amount: String,
    /// Tax amount, blank means zero
    pub tax_amount: String,
    /// Optional description
    pub description: String,
    /// Optional department
    pub department: Option<String>,
    /// Optional sign-off level, e.g. `Department Head`
    pub approval_level: Option<String>,
    /// Optional review priority
    pub priority: Option<Priority>,
}

/// Upload flags attached to an invoice submission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InvoiceAttachments {
    /// The invoice document itself (required)
    pub invoice_document: bool,
    /// Payment receipt
    pub receipt: bool,
    /// Delivery note or proof of delivery
    pub delivery_note: bool,
}

impl InvoiceAttachments {
    /// Number of files uploaded.
    #[must_use]
    pub fn count(self) -> usize {
        [self.invoice_document, self.receipt, self.delivery_note]
            .into_iter()
            .filter(|uploaded| *uploaded)
            .count()
    }
}

impl InvoiceSubmission {
    /// Required fields in the order they are checked.
    fn required_fields(&self) -> [(&'static str, &str); 4] {
        [
            ("po_reference", &self.po_reference),
            ("invoice_number", &self.invoice_number),
            ("invoice_date", &self.invoice_date),
            ("amount", &self.amount),
        ]
    }
}

/// Parses a `YYYY-MM-DD` form date.
pub fn parse_form_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| Error::InvalidDate {
        value: input.to_string(),
    })
}

/// Validates a submission and appends it to the store as a pending invoice.
///
/// # Arguments
/// * `store` - The portal store
/// * `vendor` - Name of the submitting vendor
/// * `submission` - Raw form fields
/// * `attachments` - Upload flags; the invoice document is mandatory
/// * `today` - Submission date
///
/// # Errors
/// * [`Error::MissingRequiredField`] for the first blank required field
/// * [`Error::MissingRequiredAttachment`] when no invoice document is attached
/// * [`Error::InvalidDate`] / [`Error::InvalidAmount`] for unparseable input
/// * [`Error::DuplicateInvoice`] when the invoice number is already used
#[instrument(skip(store, submission, attachments), fields(invoice = %submission.invoice_number))]
pub fn submit_invoice(
    store: &mut PortalStore,
    vendor: &str,
    submission: InvoiceSubmission,
    attachments: InvoiceAttachments,
    today: NaiveDate,
) -> Result<Invoice> {
    if let Some((field, _)) = submission
        .required_fields()
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
    {
        warn!("Invoice submission rejected, missing field '{}'", field);
        return Err(Error::MissingRequiredField { field });
    }

    if !attachments.invoice_document {
        warn!("Invoice submission rejected, no invoice document attached");
        return Err(Error::MissingRequiredAttachment {
            attachment: "invoice_document",
        });
    }

    let invoice_date = parse_form_date(&submission.invoice_date)?;
    let due_date = match submission.due_date.trim() {
        "" => None,
        due => Some(parse_form_date(due)?),
    };
    let amount = parse_amount("amount", &submission.amount)?;
    let tax_amount = parse_optional_amount(&submission.tax_amount)?;

    let id = submission.invoice_number.trim().to_string();
    if store.invoice(&id).is_some() {
        return Err(Error::DuplicateInvoice { id });
    }

    let description = submission.description.trim();
    let invoice = Invoice {
        id,
        vendor: vendor.trim().to_string(),
        po_reference: submission.po_reference.trim().to_string(),
        invoice_date,
        due_date,
        amount,
        tax_amount,
        total_amount: round_cents(amount + tax_amount),
        status: InvoiceStatus::PendingApproval,
        submitted_date: today,
        description: (!description.is_empty()).then(|| description.to_string()),
        department: submission.department,
        approval_level: submission.approval_level,
        priority: submission.priority,
        reviewed_by: None,
        reviewed_on: None,
    };

    info!(
        "Invoice '{}' submitted by '{}' for {} with {} attachment(s)",
        invoice.id,
        invoice.vendor,
        invoice.total_amount,
        attachments.count()
    );
    store.invoices.push(invoice.clone());
    Ok(invoice)
}
