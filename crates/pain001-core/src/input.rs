//! # Builder Inputs
//!
//! Business-level inputs accepted by [`crate::Pain001Generator`]. These are
//! plain data carriers: nothing here is validated unless the caller opts
//! into the strict layer in [`crate::validation`].

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One-time setup data for a new pain.001 document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Initialization {
    /// Message id (`GrpHdr/MsgId`). Banks use it for duplicate detection,
    /// so the caller must keep it unique per message.
    pub unique_document_id: String,
    /// Name of the paying party, used for both the initiating party and
    /// the debtor.
    pub sender_party_name: String,
    /// IBAN of the account to be debited.
    pub sender_iban: String,
    /// Requested execution date of the whole payment block.
    pub execution_date: NaiveDate,
    /// BIC of the debtor's bank. Blank or absent leaves the element out.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_bic: Option<String>,
}

/// The payee of a single credit transfer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receiver {
    pub name: String,
    pub street_name: String,
    /// Building number, appended to the street name when non-blank.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street_number: Option<String>,
    pub zip: String,
    pub city: String,
    /// ISO 3166 alpha-2 country code.
    pub country_code: String,
}

/// Amount and routing of a single credit transfer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Becomes the end-to-end id (`PmtId/EndToEndId`).
    pub reference_identification: String,
    /// ISO 4217 currency code.
    pub currency_code: String,
    /// Instructed amount, copied verbatim including its scale.
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub receiver_iban: String,
}

/// Empty or whitespace-only text counts as absent.
pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
