//! Vendor onboarding submission.
//!
//! An onboarding application needs the company identity, tax id and contact fields
//! filled in and all four verification documents uploaded. A successful submission creates a
//! pending application and, when an invited vendor with the same email exists,
//! moves that vendor to pending as well.

use crate::{
    core::store::PortalStore,
    errors::{Error, Result},
    models::{OnboardingApplication, OnboardingStatus, VendorStatus},
};
use chrono::NaiveDate;
use tracing::{debug, info, instrument, warn};

/// Number of documents a complete application carries.
pub const REQUIRED_DOCUMENT_COUNT: u32 = 4;

/// Onboarding form fields.
///
/// Company identity, tax id, contact person and email are required. Address,
/// phone and banking details may be completed later.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OnboardingForm {
    /// Registered company name
    pub company_name: String,
    /// Legal form, e.g. `corporation`, `llc`, `partnership`, `sole_proprietorship`
    pub business_type: String,
    /// Company registration number
    pub registration_number: String,
    /// Tax identification number
    pub tax_id: String,
    /// Registered address
    pub address: String,
    /// Primary contact person
    pub contact_person: String,
    /// Contact phone
    pub phone: String,
    /// Contact email
    pub email: String,
    /// Bank name for payments
    pub bank_name: String,
    /// Bank account number for payments
    pub account_number: String,
    /// Bank routing number
    pub routing_number: String,
}

/// Upload flags for the verification documents. All are required.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OnboardingDocuments {
    /// Business registration certificate
    pub registration_certificate: bool,
    /// Tax identification document
    pub tax_document: bool,
    /// Bank account verification
    pub bank_verification: bool,
    /// KYC compliance documents
    pub kyc_documents: bool,
}

impl OnboardingForm {
    /// Required fields in the order they are checked.
    fn required_fields(&self) -> [(&'static str, &str); 6] {
        [
            ("company_name", &self.company_name),
            ("business_type", &self.business_type),
            ("registration_number", &self.registration_number),
            ("tax_id", &self.tax_id),
            ("contact_person", &self.contact_person),
            ("email", &self.email),
        ]
    }
}

impl OnboardingDocuments {
    fn flags(self) -> [(&'static str, bool); 4] {
        [
            ("registration_certificate", self.registration_certificate),
            ("tax_document", self.tax_document),
            ("bank_verification", self.bank_verification),
            ("kyc_documents", self.kyc_documents),
        ]
    }
}

/// Validates an onboarding form and records a pending application.
///
/// # Errors
/// * [`Error::MissingRequiredField`] for the first blank required field
/// * [`Error::MissingRequiredAttachment`] for the first document not uploaded
#[instrument(skip(store, form, documents), fields(company = %form.company_name))]
pub fn submit_onboarding(
    store: &mut PortalStore,
    form: &OnboardingForm,
    documents: OnboardingDocuments,
    today: NaiveDate,
) -> Result<OnboardingApplication> {
    if let Some((field, _)) = form
        .required_fields()
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
    {
        warn!("Onboarding rejected, missing field '{}'", field);
        return Err(Error::MissingRequiredField { field });
    }

    if let Some((attachment, _)) = documents.flags().into_iter().find(|(_, present)| !present) {
        warn!("Onboarding rejected, missing document '{}'", attachment);
        return Err(Error::MissingRequiredAttachment { attachment });
    }

    let email = form.email.trim();
    let application = OnboardingApplication {
        id: store.next_application_id(),
        vendor_name: form.company_name.trim().to_string(),
        email: email.to_string(),
        submitted_date: today,
        status: OnboardingStatus::Pending,
        document_count: REQUIRED_DOCUMENT_COUNT,
        reviewed_by: None,
        reviewed_on: None,
    };

    if let Some(vendor) = store
        .vendors
        .iter_mut()
        .find(|vendor| vendor.email.eq_ignore_ascii_case(email))
    {
        if vendor.status == VendorStatus::Invited {
            debug!("Vendor {} moves from invited to pending", vendor.id);
            vendor.status = VendorStatus::Pending;
        }
    }

    info!(
        "Onboarding application {} submitted for '{}'",
        application.id, application.vendor_name
    );
    store.applications.push(application.clone());
    Ok(application)
}
