//! # Payment Batch Files
//!
//! YAML (or JSON) description of one pain.001 message: the debtor, the
//! execution date and the ordered list of transfers.
//!
//! ```yaml
//! message_id: MSG1            # optional; a UUID is generated when absent
//! execution_date: 2024-01-01  # optional if --execution-date is given
//! sender:
//!   name: ACME GmbH
//!   iban: CH9300762011623852957
//!   bic: UBSWCHZH80A          # optional
//! transactions:
//!   - receiver:
//!       name: Jane Doe
//!       street_name: Main St
//!       street_number: "12"
//!       zip: "8000"
//!       city: Zurich
//!       country_code: CH
//!     transaction:
//!       reference_identification: INV-1
//!       currency_code: CHF
//!       amount: 100.00
//!       receiver_iban: CH5604835012345678009
//! ```

use std::path::Path;

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use pain001_core::{Initialization, Receiver, Transaction};

/// A parsed batch file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentBatch {
    #[serde(default)]
    pub message_id: Option<String>,
    #[serde(default)]
    pub execution_date: Option<NaiveDate>,
    pub sender: Sender,
    #[serde(default)]
    pub transactions: Vec<BatchEntry>,
}

/// The debtor side of the batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sender {
    pub name: String,
    pub iban: String,
    #[serde(default)]
    pub bic: Option<String>,
}

/// One transfer in the batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchEntry {
    pub receiver: Receiver,
    pub transaction: Transaction,
}

impl PaymentBatch {
    /// Read and parse a batch file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read batch file: {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("failed to parse batch file: {}", path.display()))
    }

    /// Parse batch text. JSON is accepted as a YAML subset.
    pub fn parse(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Resolve the builder input.
    ///
    /// Explicit overrides win over the file. A missing message id falls
    /// back to `generated_id`; a missing execution date is an error.
    pub fn initialization(
        &self,
        message_id: Option<&str>,
        execution_date: Option<NaiveDate>,
        generated_id: impl FnOnce() -> String,
    ) -> Result<Initialization> {
        let unique_document_id = match message_id.or(self.message_id.as_deref()) {
            Some(id) => id.to_string(),
            None => {
                let id = generated_id();
                tracing::info!(message_id = %id, "batch has no message_id, generated one");
                id
            }
        };
        let Some(execution_date) = execution_date.or(self.execution_date) else {
            bail!("batch has no execution_date and --execution-date was not given");
        };
        Ok(Initialization {
            unique_document_id,
            sender_party_name: self.sender.name.clone(),
            sender_iban: self.sender.iban.clone(),
            execution_date,
            sender_bic: self.sender.bic.clone(),
        })
    }
}
