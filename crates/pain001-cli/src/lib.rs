//! # pain001-cli — Command-Line Interface
//!
//! Provides the `pain001` binary on top of `pain001-core`.
//!
//! ## Subcommands
//!
//! - `pain001 generate` — Build a pain.001 file from a YAML/JSON batch.
//! - `pain001 inspect` — Summarize an existing pain.001 file.
//!
//! ```bash
//! pain001 generate payments.yaml --out pain001.xml
//! pain001 generate payments.yaml --strict --execution-date 2024-01-31
//! pain001 inspect pain001.xml
//! ```
//!
//! ## Crate Policy
//!
//! - Argument parsing lives in the `*Args` structs; `run_*` handlers return
//!   an exit code and delegate document work to `pain001-core`.

pub mod batch;
pub mod generate;
pub mod inspect;
