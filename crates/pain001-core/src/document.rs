//! # pain.001 Document Tree
//!
//! Typed model of a `pain.001.001.03.ch.02` customer credit-transfer
//! initiation. Field names are readable Rust identifiers; the serde
//! `rename` attributes carry the ISO 20022 XML tag names, and field
//! declaration order is the element order required by the schema.
//!
//! ## Levels
//!
//! - **A** — [`GroupHeader`] (`GrpHdr`), once per message.
//! - **B** — [`PaymentInstruction`] (`PmtInf`), the debtor-side block.
//! - **C** — [`CreditTransferTransaction`] (`CdtTrfTxInf`), one per payee.
//!
//! The message holds exactly one header and one payment block. Both are
//! plain fields, so the cardinality cannot change after construction.
//!
//! Optional elements are `Option` fields skipped when `None`. Many of them
//! are never set by [`crate::Pain001Generator`]; they exist for callers who
//! adjust the tree through [`crate::Pain001Generator::document_mut`].

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::temporal::CreationDateTime;

/// Default XML namespace of the Swiss pain.001 schema.
pub const PAIN001_NAMESPACE: &str =
    "http://www.six-interbank-clearing.com/de/pain.001.001.03.ch.02.xsd";

/// XML Schema instance namespace.
pub const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// XML Schema namespace.
pub const XSD_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema";

fn default_namespace() -> String {
    PAIN001_NAMESPACE.to_string()
}

fn default_xsi_namespace() -> String {
    XSI_NAMESPACE.to_string()
}

fn default_xsd_namespace() -> String {
    XSD_NAMESPACE.to_string()
}

/// Root element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "Document")]
pub struct Document {
    #[serde(rename = "@xmlns:xsi", default = "default_xsi_namespace")]
    pub xmlns_xsi: String,
    #[serde(rename = "@xmlns:xsd", default = "default_xsd_namespace")]
    pub xmlns_xsd: String,
    #[serde(rename = "@xmlns", default = "default_namespace")]
    pub xmlns: String,
    #[serde(rename = "CstmrCdtTrfInitn")]
    pub customer_credit_transfer_initiation: CustomerCreditTransferInitiation,
}

impl Document {
    /// Wrap a message body with the ch.02 namespace declarations.
    pub fn new(body: CustomerCreditTransferInitiation) -> Self {
        Self {
            xmlns_xsi: default_xsi_namespace(),
            xmlns_xsd: default_xsd_namespace(),
            xmlns: default_namespace(),
            customer_credit_transfer_initiation: body,
        }
    }

    pub fn group_header(&self) -> &GroupHeader {
        &self.customer_credit_transfer_initiation.group_header
    }

    pub fn payment_information(&self) -> &PaymentInstruction {
        &self.customer_credit_transfer_initiation.payment_information
    }

    /// Level C records in append order.
    pub fn transactions(&self) -> &[CreditTransferTransaction] {
        &self.payment_information().credit_transfer_transactions
    }
}

/// `CstmrCdtTrfInitn` — the message body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerCreditTransferInitiation {
    #[serde(rename = "GrpHdr")]
    pub group_header: GroupHeader,
    #[serde(rename = "PmtInf")]
    pub payment_information: PaymentInstruction,
}

/// `GrpHdr` — level A.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupHeader {
    #[serde(rename = "MsgId")]
    pub message_id: String,
    #[serde(rename = "CreDtTm")]
    pub creation_date_time: CreationDateTime,
    /// Kept as text because the schema types it as `Max15NumericText`.
    #[serde(rename = "NbOfTxs")]
    pub number_of_transactions: String,
    #[serde(
        rename = "CtrlSum",
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::str_option"
    )]
    pub control_sum: Option<Decimal>,
    #[serde(rename = "InitgPty")]
    pub initiating_party: InitiatingParty,
}

/// `InitgPty` — who created the file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitiatingParty {
    #[serde(rename = "Nm", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "CtctDtls", default, skip_serializing_if = "Option::is_none")]
    pub contact_details: Option<ContactDetails>,
}

/// `CtctDtls` — identifies the generating software.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    #[serde(rename = "Nm", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "Othr", default, skip_serializing_if = "Option::is_none")]
    pub other: Option<String>,
}

/// `PmtInf` — level B.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentInstruction {
    #[serde(rename = "PmtInfId")]
    pub payment_information_id: String,
    #[serde(rename = "PmtMtd")]
    pub payment_method: PaymentMethod,
    #[serde(rename = "BtchBookg", default, skip_serializing_if = "Option::is_none")]
    pub batch_booking: Option<bool>,
    #[serde(rename = "ReqdExctnDt")]
    pub requested_execution_date: NaiveDate,
    #[serde(rename = "Dbtr")]
    pub debtor: Party,
    #[serde(rename = "DbtrAcct")]
    pub debtor_account: CashAccount,
    #[serde(rename = "DbtrAgt")]
    pub debtor_agent: FinancialInstitution,
    #[serde(rename = "CdtTrfTxInf", default)]
    pub credit_transfer_transactions: Vec<CreditTransferTransaction>,
}

/// `PmtMtd` code (`PaymentMethod3Code`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentMethod {
    /// `CHK` — cheque.
    Cheque,
    /// `TRF` — credit transfer.
    CreditTransfer,
    /// `TRA` — transfer advice.
    TransferAdvice,
}

impl PaymentMethod {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Cheque => "CHK",
            Self::CreditTransfer => "TRF",
            Self::TransferAdvice => "TRA",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "CHK" => Ok(Self::Cheque),
            "TRF" => Ok(Self::CreditTransfer),
            "TRA" => Ok(Self::TransferAdvice),
            other => Err(format!("unknown payment method code: {other:?}")),
        }
    }
}

impl Serialize for PaymentMethod {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for PaymentMethod {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// `Dbtr` / `Cdtr` — a named party with an optional postal address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Party {
    #[serde(rename = "Nm", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "PstlAdr", default, skip_serializing_if = "Option::is_none")]
    pub postal_address: Option<PostalAddress>,
}

/// `PstlAdr` (`PostalAddress6CH`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostalAddress {
    #[serde(rename = "StrtNm", default, skip_serializing_if = "Option::is_none")]
    pub street_name: Option<String>,
    #[serde(rename = "BldgNb", default, skip_serializing_if = "Option::is_none")]
    pub building_number: Option<String>,
    #[serde(rename = "PstCd", default, skip_serializing_if = "Option::is_none")]
    pub post_code: Option<String>,
    #[serde(rename = "TwnNm", default, skip_serializing_if = "Option::is_none")]
    pub town_name: Option<String>,
    #[serde(rename = "Ctry", default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// `DbtrAcct` / `CdtrAcct`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashAccount {
    #[serde(rename = "Id")]
    pub id: AccountIdentification,
    #[serde(rename = "Ccy", default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

impl CashAccount {
    pub fn iban(iban: impl Into<String>) -> Self {
        Self {
            id: AccountIdentification {
                iban: Some(iban.into()),
                other: None,
            },
            currency: None,
        }
    }
}

/// `Id` choice of an account: IBAN or a proprietary identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountIdentification {
    #[serde(rename = "IBAN", default, skip_serializing_if = "Option::is_none")]
    pub iban: Option<String>,
    #[serde(rename = "Othr", default, skip_serializing_if = "Option::is_none")]
    pub other: Option<GenericAccountIdentification>,
}

/// `Othr` account id, e.g. a postal account number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenericAccountIdentification {
    #[serde(rename = "Id")]
    pub id: String,
}

/// `DbtrAgt` / `CdtrAgt` — the bank of a party.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialInstitution {
    #[serde(rename = "FinInstnId")]
    pub financial_institution_id: FinancialInstitutionId,
}

/// `FinInstnId`. An empty value serializes as `<FinInstnId/>`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialInstitutionId {
    #[serde(rename = "BIC", default, skip_serializing_if = "Option::is_none")]
    pub bic: Option<String>,
}

/// `CdtTrfTxInf` — level C.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditTransferTransaction {
    #[serde(rename = "PmtId")]
    pub payment_id: PaymentIdentification,
    #[serde(rename = "PmtTpInf", default, skip_serializing_if = "Option::is_none")]
    pub payment_type_information: Option<PaymentTypeInformation>,
    #[serde(rename = "Amt")]
    pub amount: Amount,
    #[serde(rename = "CdtrAgt", default, skip_serializing_if = "Option::is_none")]
    pub creditor_agent: Option<FinancialInstitution>,
    #[serde(rename = "Cdtr")]
    pub creditor: Party,
    #[serde(rename = "CdtrAcct")]
    pub creditor_account: CashAccount,
}

/// `PmtId`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentIdentification {
    #[serde(rename = "InstrId", default, skip_serializing_if = "Option::is_none")]
    pub instruction_id: Option<String>,
    #[serde(rename = "EndToEndId")]
    pub end_to_end_id: String,
}

/// `PmtTpInf`. Emitted empty by the builder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentTypeInformation {
    #[serde(rename = "InstrPrty", default, skip_serializing_if = "Option::is_none")]
    pub instruction_priority: Option<String>,
    #[serde(rename = "SvcLvl", default, skip_serializing_if = "Option::is_none")]
    pub service_level: Option<CodeOrProprietary>,
    #[serde(rename = "LclInstrm", default, skip_serializing_if = "Option::is_none")]
    pub local_instrument: Option<CodeOrProprietary>,
    #[serde(rename = "CtgyPurp", default, skip_serializing_if = "Option::is_none")]
    pub category_purpose: Option<CodeOrProprietary>,
}

/// `Cd` / `Prtry` pair used by service level, local instrument and
/// category purpose.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeOrProprietary {
    #[serde(rename = "Cd", default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(rename = "Prtry", default, skip_serializing_if = "Option::is_none")]
    pub proprietary: Option<String>,
}

/// `Amt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amount {
    #[serde(rename = "InstdAmt")]
    pub instructed_amount: CurrencyAndAmount,
}

/// `InstdAmt` — `<InstdAmt Ccy="CHF">100.00</InstdAmt>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyAndAmount {
    #[serde(rename = "@Ccy")]
    pub currency: String,
    #[serde(rename = "$text", with = "rust_decimal::serde::str")]
    pub value: Decimal,
}
