//! # pain001-core — ISO 20022 pain.001 Credit-Transfer Initiation
//!
//! Builds a Swiss `pain.001.001.03.ch.02` customer credit-transfer
//! initiation from a handful of business inputs and serializes it to XML.
//!
//! ## Usage
//!
//! 1. Create a [`Pain001Generator`] from an [`Initialization`] (message id,
//!    debtor name, IBAN, execution date, optional BIC).
//! 2. Call [`Pain001Generator::add_transaction`] once per payee.
//! 3. Export with [`Pain001Generator::to_xml_string`] or
//!    [`Pain001Generator::save_to_file`].
//!
//! ```no_run
//! use chrono::NaiveDate;
//! use pain001_core::{Initialization, Pain001Generator, Receiver, Transaction};
//! use rust_decimal::Decimal;
//!
//! let mut generator = Pain001Generator::new(&Initialization {
//!     unique_document_id: "MSG1".into(),
//!     sender_party_name: "ACME GmbH".into(),
//!     sender_iban: "CH9300762011623852957".into(),
//!     execution_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
//!     sender_bic: None,
//! });
//! generator.add_transaction(
//!     &Receiver {
//!         name: "Jane Doe".into(),
//!         street_name: "Main St".into(),
//!         street_number: Some("12".into()),
//!         zip: "8000".into(),
//!         city: "Zurich".into(),
//!         country_code: "CH".into(),
//!     },
//!     &Transaction {
//!         reference_identification: "INV-1".into(),
//!         currency_code: "CHF".into(),
//!         amount: Decimal::new(10000, 2),
//!         receiver_iban: "CH5604835012345678009".into(),
//!     },
//! );
//! generator.save_to_file("pain001.xml")?;
//! # Ok::<(), pain001_core::Pain001Error>(())
//! ```
//!
//! ## Crate Policy
//!
//! - The builder path is permissive: inputs are copied, never rejected.
//!   Strict checks live in [`validation`] and are opt-in.
//! - XML naming and ordering are declared once, on the [`document`] types.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod builder;
pub mod document;
pub mod error;
pub mod input;
pub mod temporal;
pub mod validation;
pub mod xml;

pub use builder::{
    Pain001Generator, GENERATOR_NAME, GENERATOR_VERSION, INSTRUCTION_ID_PREFIX,
    PAYMENT_INFORMATION_ID,
};
pub use document::{Document, PaymentMethod, PAIN001_NAMESPACE};
pub use error::{Pain001Error, ValidationError};
pub use input::{Initialization, Receiver, Transaction};
pub use temporal::CreationDateTime;
pub use xml::{from_xml_str, to_xml_string};
