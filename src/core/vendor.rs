//! Vendor invitations.

use crate::{
    core::store::PortalStore,
    errors::{Error, Result},
    models::{Vendor, VendorStatus},
};
use chrono::NaiveDate;
use tracing::{info, instrument};

/// Invites a vendor by email.
///
/// The vendor starts in `invited`. When no name is given, the local part of the
/// email stands in until the vendor submits onboarding.
///
/// # Errors
/// * [`Error::MissingRequiredField`] when the email is blank
/// * [`Error::DuplicateVendor`] when a vendor with that email already exists
#[instrument(skip(store))]
pub fn invite_vendor(
    store: &mut PortalStore,
    email: &str,
    name: Option<&str>,
    today: NaiveDate,
) -> Result<Vendor> {
    let email = email.trim();
    if email.is_empty() {
        return Err(Error::MissingRequiredField { field: "email" });
    }

    if store.vendor_by_email(email).is_some() {
        return Err(Error::DuplicateVendor {
            email: email.to_string(),
        });
    }

    let name = name
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| email.split('@').next().unwrap_or(email));

    let vendor = Vendor {
        id: store.next_vendor_id(),
        name: name.to_string(),
        email: email.to_string(),
        status: VendorStatus::Invited,
        onboarding_date: Some(today),
        reviewed_by: None,
        reviewed_on: None,
    };

    info!("Invited vendor {} <{}>", vendor.id, vendor.email);
    store.vendors.push(vendor.clone());
    Ok(vendor)
}
