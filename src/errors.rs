//! Unified error types for the portal.
//!
//! Every store operation validates its input before touching any collection,
//! so an `Err` always means the state was left exactly as it was.

use thiserror::Error;

/// All errors raised by the workflow model, session, and configuration layers.
#[derive(Debug, Error)]
pub enum Error {
    /// A mandatory form field was absent or blank
    #[error("Missing required field: {field}")]
    MissingRequiredField {
        /// Name of the missing field
        field: &'static str,
    },

    /// A mandatory upload flag was not set
    #[error("Missing required attachment: {attachment}")]
    MissingRequiredAttachment {
        /// Name of the missing attachment
        attachment: &'static str,
    },

    /// An action referenced a record that does not exist
    #[error("{kind} '{id}' not found")]
    NotFound {
        /// Kind of record looked up
        kind: crate::models::RecordKind,
        /// Identifier that was not found
        id: String,
    },

    /// The record is not in a state that accepts the requested transition
    #[error("{kind} '{id}' cannot move from status '{from}'")]
    InvalidTransition {
        /// Kind of record
        kind: crate::models::RecordKind,
        /// Record identifier
        id: String,
        /// Current status of the record
        from: String,
    },

    /// An amount could not be parsed or was negative
    #[error("Invalid amount: '{value}'")]
    InvalidAmount {
        /// The offending input
        value: String,
    },

    /// A date could not be parsed as `YYYY-MM-DD`
    #[error("Invalid date: '{value}' (expected YYYY-MM-DD)")]
    InvalidDate {
        /// The offending input
        value: String,
    },

    /// An invoice with the same number already exists
    #[error("Invoice '{id}' already exists")]
    DuplicateInvoice {
        /// The invoice number
        id: String,
    },

    /// A vendor with the same email already exists
    #[error("Vendor with email '{email}' already exists")]
    DuplicateVendor {
        /// The vendor email
        email: String,
    },

    /// The acting user's role does not permit the action
    #[error("Role '{role}' is not allowed to {action}")]
    Forbidden {
        /// Role of the acting user
        role: crate::models::Role,
        /// Short description of the rejected action
        action: &'static str,
    },

    /// No user is logged in
    #[error("No user is logged in")]
    NotLoggedIn,

    /// Configuration loading or parsing failed
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the failure
        message: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Environment variable error
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
