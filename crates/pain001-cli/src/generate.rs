//! # Generate Subcommand
//!
//! Turns a payment batch file into a pain.001 document.
//!
//! By default inputs go through the permissive builder unchanged. With
//! `--strict` the initialization and every transfer are validated first and
//! the command stops at the first rejected field, naming the transfer.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Args;
use uuid::Uuid;

use pain001_core::Pain001Generator;

use crate::batch::PaymentBatch;

/// Arguments for the `pain001 generate` subcommand.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Path to the batch file (YAML or JSON).
    #[arg(value_name = "BATCH")]
    pub batch: PathBuf,

    /// Write the XML here instead of stdout.
    #[arg(long, short)]
    pub out: Option<PathBuf>,

    /// Validate IBANs, BICs, codes and amounts before building.
    #[arg(long)]
    pub strict: bool,

    /// Override the batch's requested execution date (YYYY-MM-DD).
    #[arg(long)]
    pub execution_date: Option<NaiveDate>,

    /// Override the batch's message id.
    #[arg(long)]
    pub message_id: Option<String>,
}

/// Execute the generate subcommand.
///
/// Returns exit code 0 on success; failures are returned as errors.
pub fn run_generate(args: &GenerateArgs) -> Result<u8> {
    let batch = PaymentBatch::load(&args.batch)?;
    let generator = build(&batch, args)?;

    match args.out {
        Some(ref out) => {
            generator
                .save_to_file(out)
                .with_context(|| format!("failed to write pain.001 file: {}", out.display()))?;
            println!(
                "OK: wrote {} transaction(s) to {}",
                generator.transaction_count(),
                out.display()
            );
        }
        None => {
            let xml = generator
                .to_xml_string()
                .context("failed to serialize pain.001 document")?;
            print!("{xml}");
        }
    }
    Ok(0)
}

/// Build the document for `batch`, honoring the argument overrides.
pub fn build(batch: &PaymentBatch, args: &GenerateArgs) -> Result<Pain001Generator> {
    let init = batch.initialization(args.message_id.as_deref(), args.execution_date, || {
        Uuid::new_v4().simple().to_string()
    })?;

    let mut generator = if args.strict {
        Pain001Generator::try_new(&init).context("invalid sender data")?
    } else {
        Pain001Generator::new(&init)
    };

    for (i, entry) in batch.transactions.iter().enumerate() {
        if args.strict {
            generator
                .try_add_transaction(&entry.receiver, &entry.transaction)
                .with_context(|| {
                    format!(
                        "invalid transaction #{} ({})",
                        i + 1,
                        entry.transaction.reference_identification
                    )
                })?;
        } else {
            generator.add_transaction(&entry.receiver, &entry.transaction);
        }
    }

    tracing::debug!(
        message_id = %generator.document().group_header().message_id,
        transactions = generator.transaction_count(),
        strict = args.strict,
        "built pain.001 document"
    );
    Ok(generator)
}
