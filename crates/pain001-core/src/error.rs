//! # Error Types
//!
//! Errors surfaced by the pain.001 generator. All errors use `thiserror`
//! for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - The permissive builder path never fails. Only export and parsing
//!   return errors.
//! - I/O errors pass through transparently so callers see the original
//!   `std::io::Error` message and kind.
//! - XML engine errors are wrapped, never swallowed.
//! - Strict validation failures name the offending field and value.

use thiserror::Error;

/// Top-level error type for pain.001 generation.
#[derive(Error, Debug)]
pub enum Pain001Error {
    /// The XML engine could not encode the document tree.
    #[error("xml serialization error: {0}")]
    Serialization(#[from] quick_xml::SeError),

    /// The XML engine could not decode a document.
    #[error("xml deserialization error: {0}")]
    Deserialization(#[from] quick_xml::DeError),

    /// Writing the document to disk failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Strict input validation rejected a field.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// A field rejected by the strict validation layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required text field is empty or whitespace only.
    #[error("required field is blank: {field}")]
    Blank {
        /// Name of the blank field.
        field: &'static str,
    },

    /// A text field exceeds the schema's maximum length.
    #[error("field {field} exceeds {max} characters: {value}")]
    TooLong {
        /// Name of the field.
        field: &'static str,
        /// Maximum permitted length.
        max: usize,
        /// The offending value.
        value: String,
    },

    /// IBAN format or checksum failure.
    #[error("invalid IBAN in {field}: {reason}")]
    InvalidIban {
        /// Name of the field carrying the IBAN.
        field: &'static str,
        /// Reason the IBAN was rejected.
        reason: String,
    },

    /// BIC format failure.
    #[error("invalid BIC: {0}")]
    InvalidBic(String),

    /// Currency is not a three-letter uppercase code.
    #[error("invalid currency code: {0}")]
    InvalidCurrency(String),

    /// Country is not a two-letter uppercase code.
    #[error("invalid country code: {0}")]
    InvalidCountry(String),

    /// Amount is non-positive or has too many fractional digits.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),
}
