//! # Inspect Subcommand
//!
//! Parses a generated pain.001 file and prints a short summary: header
//! fields followed by one line per credit transfer.

use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use pain001_core::{from_xml_str, Document};

/// Arguments for the `pain001 inspect` subcommand.
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Path to a pain.001 XML file.
    #[arg(value_name = "XML")]
    pub file: PathBuf,
}

/// Execute the inspect subcommand.
pub fn run_inspect(args: &InspectArgs) -> Result<u8> {
    let xml = std::fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read pain.001 file: {}", args.file.display()))?;
    let document = from_xml_str(&xml)
        .with_context(|| format!("failed to parse pain.001 file: {}", args.file.display()))?;
    print!("{}", summarize(&document));
    Ok(0)
}

/// Render the summary text for `document`.
pub fn summarize(document: &Document) -> String {
    let header = document.group_header();
    let payment = document.payment_information();
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "message id:      {}", header.message_id);
    let _ = writeln!(out, "created:         {}", header.creation_date_time);
    let _ = writeln!(out, "transactions:    {}", header.number_of_transactions);
    let _ = writeln!(
        out,
        "control sum:     {}",
        header
            .control_sum
            .map(|s| s.to_string())
            .unwrap_or_else(|| "-".to_string())
    );
    let _ = writeln!(
        out,
        "execution date:  {}",
        payment.requested_execution_date
    );
    let _ = writeln!(
        out,
        "debtor:          {} ({})",
        payment.debtor.name.as_deref().unwrap_or("-"),
        payment.debtor_account.id.iban.as_deref().unwrap_or("-")
    );

    for tx in document.transactions() {
        let amount = &tx.amount.instructed_amount;
        let _ = writeln!(
            out,
            "  {:<8} {:<20} {:>14} {}  {} -> {}",
            tx.payment_id.instruction_id.as_deref().unwrap_or("-"),
            tx.payment_id.end_to_end_id,
            amount.value,
            amount.currency,
            tx.creditor.name.as_deref().unwrap_or("-"),
            tx.creditor_account.id.iban.as_deref().unwrap_or("-"),
        );
    }
    out
}
