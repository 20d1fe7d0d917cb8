//! Currency parsing and formatting.
//!
//! Amounts live as [`Decimal`] everywhere in the store. Text only appears at the
//! edges: form input is parsed once on submission, and display strings are produced
//! by [`format_currency`] when a dashboard is rendered.

use crate::errors::{Error, Result};
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Parses a form amount such as `"1250"`, `"1,250.00"` or `"$1,250.00"`.
///
/// A blank input is reported as a missing `field`. Anything that does not parse,
/// or parses to a negative value, is an [`Error::InvalidAmount`].
pub fn parse_amount(field: &'static str, input: &str) -> Result<Decimal> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(Error::MissingRequiredField { field });
    }

    let cleaned: String = trimmed
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',')
        .collect();

    let value = Decimal::from_str(cleaned.trim()).map_err(|_| Error::InvalidAmount {
        value: input.to_string(),
    })?;

    if value.is_sign_negative() && !value.is_zero() {
        return Err(Error::InvalidAmount {
            value: input.to_string(),
        });
    }

    Ok(value)
}

/// Parses an optional amount, treating blank input as zero.
pub fn parse_optional_amount(input: &str) -> Result<Decimal> {
    if input.trim().is_empty() {
        return Ok(Decimal::ZERO);
    }
    parse_amount("amount", input)
}

/// Rounds to cents (half away from zero) and fixes the scale at two places,
/// so `100 + 8.25` reads `108.25` and `100` reads `100.00`.
#[must_use]
pub fn round_cents(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

/// Formats an amount for display, e.g. `$12,345.60` or `-$5.00`.
#[must_use]
pub fn format_currency(amount: Decimal) -> String {
    let rounded = round_cents(amount);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let text = rounded.abs().to_string();
    let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    if negative {
        format!("-${grouped}.{cents}")
    } else {
        format!("${grouped}.{cents}")
    }
}
