//! # pain.001 Document Builder
//!
//! [`Pain001Generator`] owns one [`Document`] and grows it one credit
//! transfer at a time.
//!
//! ## Invariants
//!
//! - `GrpHdr/NbOfTxs` equals the number of `CdtTrfTxInf` records. It is
//!   recomputed before [`Pain001Generator::add_transaction`] returns.
//! - Transactions are append-only and kept in call order.
//! - The j-th transaction (0-based) carries `InstrId` `1-j`, derived from
//!   the sequence length before the append.
//! - `GrpHdr/CtrlSum` stays zero. Downstream consumers expect that value,
//!   so amounts are not aggregated into it.
//!
//! The direct tree handle ([`Pain001Generator::document_mut`]) bypasses all
//! of the above.
//!
//! ## Thread safety
//!
//! Mutation takes `&mut self`. A generator shared between threads has to
//! be wrapped externally, e.g. in a `Mutex`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use rust_decimal::Decimal;

use crate::document::{
    Amount, CashAccount, ContactDetails, CreditTransferTransaction, CurrencyAndAmount,
    CustomerCreditTransferInitiation, Document, FinancialInstitution, FinancialInstitutionId,
    GroupHeader, InitiatingParty, Party, PaymentIdentification, PaymentInstruction, PaymentMethod,
    PaymentTypeInformation, PostalAddress,
};
use crate::error::{Pain001Error, ValidationError};
use crate::input::{is_blank, Initialization, Receiver, Transaction};
use crate::temporal::CreationDateTime;
use crate::{validation, xml};

/// Name written to `InitgPty/CtctDtls/Nm`.
pub const GENERATOR_NAME: &str = "iso20022-Generator";

/// Version written to `InitgPty/CtctDtls/Othr`.
pub const GENERATOR_VERSION: &str = "1.3.0";

/// `PmtInfId` of the single payment block.
pub const PAYMENT_INFORMATION_ID: &str = "PmtInfId-1";

/// Prefix of every generated `InstrId`.
pub const INSTRUCTION_ID_PREFIX: &str = "1-";

/// Builds a single pain.001 credit-transfer initiation message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pain001Generator {
    document: Document,
}

impl Pain001Generator {
    /// Set up the header and payment block, stamped with the current time.
    ///
    /// Inputs are taken as-is. See [`Pain001Generator::try_new`] for the
    /// validating variant.
    pub fn new(init: &Initialization) -> Self {
        Self::with_creation_time(init, CreationDateTime::now())
    }

    /// Like [`Pain001Generator::new`] with an explicit `CreDtTm`.
    pub fn with_creation_time(init: &Initialization, created_at: CreationDateTime) -> Self {
        let group_header = GroupHeader {
            message_id: init.unique_document_id.clone(),
            creation_date_time: created_at,
            number_of_transactions: "0".to_string(),
            control_sum: Some(Decimal::ZERO),
            initiating_party: InitiatingParty {
                name: Some(init.sender_party_name.clone()),
                contact_details: Some(ContactDetails {
                    name: Some(GENERATOR_NAME.to_string()),
                    other: Some(GENERATOR_VERSION.to_string()),
                }),
            },
        };

        // The BIC element is left out entirely when none was supplied, which
        // keeps output identical to files produced before BIC support.
        let debtor_bic = init.sender_bic.clone().filter(|bic| !is_blank(bic));

        let payment_information = PaymentInstruction {
            payment_information_id: PAYMENT_INFORMATION_ID.to_string(),
            payment_method: PaymentMethod::TransferAdvice,
            batch_booking: Some(true),
            requested_execution_date: init.execution_date,
            debtor: Party {
                name: Some(init.sender_party_name.clone()),
                postal_address: None,
            },
            debtor_account: CashAccount::iban(init.sender_iban.clone()),
            debtor_agent: FinancialInstitution {
                financial_institution_id: FinancialInstitutionId { bic: debtor_bic },
            },
            credit_transfer_transactions: Vec::new(),
        };

        tracing::debug!(
            message_id = %group_header.message_id,
            execution_date = %init.execution_date,
            "initialized pain.001 document"
        );

        Self {
            document: Document::new(CustomerCreditTransferInitiation {
                group_header,
                payment_information,
            }),
        }
    }

    /// Validate `init` with the strict rules, then build as [`Pain001Generator::new`].
    pub fn try_new(init: &Initialization) -> Result<Self, ValidationError> {
        validation::validate_initialization(init)?;
        Ok(Self::new(init))
    }

    /// Append one credit transfer and refresh `NbOfTxs`.
    ///
    /// Every field is copied verbatim. Blank receiver fields end up as
    /// empty elements; nothing is rejected.
    pub fn add_transaction(&mut self, receiver: &Receiver, transaction: &Transaction) {
        let index = self.transaction_count();
        let record = credit_transfer(index, receiver, transaction);

        let payment = &mut self.document.customer_credit_transfer_initiation.payment_information;
        payment.credit_transfer_transactions.push(record);
        self.refresh_group_header();

        tracing::debug!(
            instruction_id = %format!("{INSTRUCTION_ID_PREFIX}{index}"),
            end_to_end_id = %transaction.reference_identification,
            count = index + 1,
            "appended credit transfer"
        );
    }

    /// Validate both inputs, then append as [`Pain001Generator::add_transaction`].
    ///
    /// Nothing is appended when validation fails.
    pub fn try_add_transaction(
        &mut self,
        receiver: &Receiver,
        transaction: &Transaction,
    ) -> Result<(), ValidationError> {
        validation::validate_receiver(receiver)?;
        validation::validate_transaction(transaction)?;
        self.add_transaction(receiver, transaction);
        Ok(())
    }

    /// Number of credit transfers appended so far.
    pub fn transaction_count(&self) -> usize {
        self.document.transactions().len()
    }

    /// Serialize the document and write it to `path`, replacing any
    /// existing file.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), Pain001Error> {
        let path = path.as_ref();
        let xml = self.to_xml_string()?;
        let mut writer = BufWriter::new(File::create(path)?);
        writer.write_all(xml.as_bytes())?;
        writer.flush()?;
        tracing::info!(
            path = %path.display(),
            transactions = self.transaction_count(),
            "wrote pain.001 document"
        );
        Ok(())
    }

    /// Serialize the document to XML text.
    pub fn to_xml_string(&self) -> Result<String, Pain001Error> {
        xml::to_xml_string(&self.document)
    }

    /// Read-only view of the document tree.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Direct mutable access to the document tree.
    ///
    /// Intended for institutions that need elements this builder does not
    /// set (service level, account currency, ...). Changes made here are
    /// not checked: `NbOfTxs` and instruction ids are only maintained by
    /// [`Pain001Generator::add_transaction`].
    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    /// Consume the generator and return the tree.
    pub fn into_document(self) -> Document {
        self.document
    }

    fn refresh_group_header(&mut self) {
        let count = self.transaction_count();
        self.document
            .customer_credit_transfer_initiation
            .group_header
            .number_of_transactions = count.to_string();
    }
}

/// Build the level C record for the transfer at position `index`.
fn credit_transfer(
    index: usize,
    receiver: &Receiver,
    transaction: &Transaction,
) -> CreditTransferTransaction {
    let street_name = match receiver.street_number.as_deref() {
        Some(number) if !is_blank(number) => {
            format!("{} {}", receiver.street_name, number)
        }
        _ => receiver.street_name.clone(),
    };

    CreditTransferTransaction {
        payment_id: PaymentIdentification {
            instruction_id: Some(format!("{INSTRUCTION_ID_PREFIX}{index}")),
            end_to_end_id: transaction.reference_identification.clone(),
        },
        payment_type_information: Some(PaymentTypeInformation::default()),
        amount: Amount {
            instructed_amount: CurrencyAndAmount {
                currency: transaction.currency_code.clone(),
                value: transaction.amount,
            },
        },
        creditor_agent: Some(FinancialInstitution::default()),
        creditor: Party {
            name: Some(receiver.name.clone()),
            postal_address: Some(PostalAddress {
                street_name: Some(street_name),
                building_number: None,
                post_code: Some(receiver.zip.clone()),
                town_name: Some(receiver.city.clone()),
                country: Some(receiver.country_code.clone()),
            }),
        },
        creditor_account: CashAccount::iban(transaction.receiver_iban.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn init(bic: Option<&str>) -> Initialization {
        Initialization {
            unique_document_id: "MSG1".to_string(),
            sender_party_name: "ACME GmbH".to_string(),
            sender_iban: "CH9300762011623852957".to_string(),
            execution_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            sender_bic: bic.map(str::to_string),
        }
    }

    fn receiver(number: Option<&str>) -> Receiver {
        Receiver {
            name: "Jane Doe".to_string(),
            street_name: "Main St".to_string(),
            street_number: number.map(str::to_string),
            zip: "8000".to_string(),
            city: "Zurich".to_string(),
            country_code: "CH".to_string(),
        }
    }

    fn transaction(reference: &str, amount: &str) -> Transaction {
        Transaction {
            reference_identification: reference.to_string(),
            currency_code: "CHF".to_string(),
            amount: Decimal::from_str(amount).unwrap(),
            receiver_iban: "CH5604835012345678009".to_string(),
        }
    }

    #[test]
    fn skeleton_has_fixed_literals() {
        let gen = Pain001Generator::new(&init(None));
        let header = gen.document().group_header();
        assert_eq!(header.message_id, "MSG1");
        assert_eq!(header.number_of_transactions, "0");
        assert_eq!(header.control_sum, Some(Decimal::ZERO));
        assert_eq!(header.initiating_party.name.as_deref(), Some("ACME GmbH"));
        let contact = header.initiating_party.contact_details.as_ref().unwrap();
        assert_eq!(contact.name.as_deref(), Some(GENERATOR_NAME));
        assert_eq!(contact.other.as_deref(), Some(GENERATOR_VERSION));

        let pmt = gen.document().payment_information();
        assert_eq!(pmt.payment_information_id, PAYMENT_INFORMATION_ID);
        assert_eq!(pmt.payment_method, PaymentMethod::TransferAdvice);
        assert_eq!(pmt.batch_booking, Some(true));
        assert_eq!(pmt.debtor.name.as_deref(), Some("ACME GmbH"));
        assert_eq!(
            pmt.debtor_account.id.iban.as_deref(),
            Some("CH9300762011623852957")
        );
        assert!(pmt.credit_transfer_transactions.is_empty());
    }

    #[test]
    fn debtor_bic_only_when_non_blank() {
        for bic in [None, Some(""), Some("   ")] {
            let gen = Pain001Generator::new(&init(bic));
            let agent = &gen.document().payment_information().debtor_agent;
            assert_eq!(agent.financial_institution_id.bic, None, "bic={bic:?}");
        }
        let gen = Pain001Generator::new(&init(Some("UBSWCHZH80A")));
        let agent = &gen.document().payment_information().debtor_agent;
        assert_eq!(
            agent.financial_institution_id.bic.as_deref(),
            Some("UBSWCHZH80A")
        );
    }

    #[test]
    fn instruction_ids_follow_append_position() {
        let mut gen = Pain001Generator::new(&init(None));
        for (i, reference) in ["Z", "A", "M"].iter().enumerate() {
            gen.add_transaction(&receiver(None), &transaction(reference, "1"));
            assert_eq!(gen.transaction_count(), i + 1);
            assert_eq!(
                gen.document().group_header().number_of_transactions,
                (i + 1).to_string()
            );
        }
        let ids: Vec<_> = gen
            .document()
            .transactions()
            .iter()
            .map(|t| t.payment_id.instruction_id.clone().unwrap())
            .collect();
        assert_eq!(ids, ["1-0", "1-1", "1-2"]);
        let refs: Vec<_> = gen
            .document()
            .transactions()
            .iter()
            .map(|t| t.payment_id.end_to_end_id.as_str())
            .collect();
        assert_eq!(refs, ["Z", "A", "M"]);
    }

    #[test]
    fn street_number_joined_with_single_space() {
        let mut gen = Pain001Generator::new(&init(None));
        gen.add_transaction(&receiver(Some("12")), &transaction("a", "1"));
        gen.add_transaction(&receiver(Some(" ")), &transaction("b", "1"));
        gen.add_transaction(&receiver(None), &transaction("c", "1"));
        let streets: Vec<_> = gen
            .document()
            .transactions()
            .iter()
            .map(|t| {
                t.creditor
                    .postal_address
                    .as_ref()
                    .and_then(|a| a.street_name.clone())
                    .unwrap()
            })
            .collect();
        assert_eq!(streets, ["Main St 12", "Main St", "Main St"]);
    }

    #[test]
    fn amount_copied_verbatim() {
        let mut gen = Pain001Generator::new(&init(None));
        gen.add_transaction(&receiver(None), &transaction("neg", "-5.125"));
        let amt = &gen.document().transactions()[0].amount.instructed_amount;
        assert_eq!(amt.currency, "CHF");
        assert_eq!(amt.value.to_string(), "-5.125");
        assert_eq!(
            gen.document().group_header().control_sum,
            Some(Decimal::ZERO)
        );
    }

    #[test]
    fn creditor_agent_and_payment_type_are_empty_placeholders() {
        let mut gen = Pain001Generator::new(&init(Some("UBSWCHZH80A")));
        gen.add_transaction(&receiver(None), &transaction("x", "1"));
        let tx = &gen.document().transactions()[0];
        assert_eq!(
            tx.payment_type_information,
            Some(PaymentTypeInformation::default())
        );
        assert_eq!(tx.creditor_agent, Some(FinancialInstitution::default()));
    }

    #[test]
    fn blank_receiver_fields_pass_through() {
        let mut gen = Pain001Generator::new(&init(None));
        let blank = Receiver {
            name: String::new(),
            street_name: String::new(),
            street_number: None,
            zip: String::new(),
            city: String::new(),
            country_code: String::new(),
        };
        gen.add_transaction(&blank, &transaction("", "0"));
        let tx = &gen.document().transactions()[0];
        assert_eq!(tx.creditor.name.as_deref(), Some(""));
        assert_eq!(tx.payment_id.end_to_end_id, "");
        assert_eq!(gen.transaction_count(), 1);
    }

    #[test]
    fn try_add_transaction_leaves_document_untouched_on_error() {
        let mut gen = Pain001Generator::new(&init(None));
        let mut bad = transaction("x", "1");
        bad.currency_code = "chf".to_string();
        let before = gen.clone();
        assert!(gen.try_add_transaction(&receiver(None), &bad).is_err());
        assert_eq!(gen, before);
    }

    #[test]
    fn try_new_rejects_bad_iban() {
        let mut bad = init(None);
        bad.sender_iban = "CH0000".to_string();
        assert!(matches!(
            Pain001Generator::try_new(&bad),
            Err(ValidationError::InvalidIban { .. })
        ));
    }

    #[test]
    fn document_mut_edits_are_visible() {
        let mut gen = Pain001Generator::new(&init(None));
        gen.document_mut()
            .customer_credit_transfer_initiation
            .payment_information
            .debtor_account
            .currency = Some("CHF".to_string());
        assert_eq!(
            gen.document().payment_information().debtor_account.currency.as_deref(),
            Some("CHF")
        );
    }

    #[test]
    fn save_to_file_reports_io_errors() {
        let dir = tempfile::tempdir().unwrap();
        let gen = Pain001Generator::new(&init(None));
        let missing = dir.path().join("no-such-dir").join("out.xml");
        let err = gen.save_to_file(&missing).unwrap_err();
        match err {
            Pain001Error::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
            other => panic!("expected io error, got {other:?}"),
        }
    }

    #[test]
    fn save_to_file_matches_string_rendering() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pain.xml");
        let mut gen = Pain001Generator::new(&init(None));
        gen.add_transaction(&receiver(Some("12")), &transaction("INV-1", "100.00"));
        gen.save_to_file(&path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, gen.to_xml_string().unwrap());
    }
}
