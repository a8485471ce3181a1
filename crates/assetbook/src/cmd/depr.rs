//! Shared implementation for the abook-depr command.

use anyhow::{Context, Result};
use assetbook_calc::process_batch_json;
use assetbook_core::{BatchOutput, InputError};
use chrono::Utc;
use clap::Parser;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::Level;

/// Message printed when the payload is empty.
pub const NO_INPUT_MESSAGE: &str = "No input provided";

/// Compute straight-line depreciation for a batch of assets.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// JSON file with an array of assets ("-" or absent reads stdin)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Pretty-print the result JSON
    #[arg(short, long)]
    pub pretty: bool,

    /// Evaluation instant as epoch seconds (defaults to the current time)
    #[arg(long, value_name = "EPOCH")]
    pub now: Option<i64>,

    /// Show verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress the result print (just use exit code)
    #[arg(short, long)]
    pub quiet: bool,
}

/// Read the whole payload from a file or stdin.
///
/// The buffer grows to the input: there is no fixed input-size ceiling.
pub fn read_payload(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => io::read_to_string(io::stdin()).context("failed to read stdin"),
    }
}

/// Render the batch output for a non-empty payload.
///
/// Structural and per-item errors are data, not process failures; the
/// result is always a well-formed JSON document.
pub fn render(payload: &str, now: i64, pretty: bool) -> Result<String> {
    let output = process_batch_json(payload, now);
    if let BatchOutput::Batch(batch) = &output {
        tracing::debug!(
            processed = batch.processed_count,
            errors = batch.error_count,
            "batch complete"
        );
    }
    let rendered = if pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    Ok(rendered)
}

/// Map a raw payload to the output line and process exit status.
///
/// An empty payload yields the bare `{"error": "No input provided"}`
/// object and status 1. Everything else renders through the batch
/// pipeline with status 0, whatever the per-item outcomes.
pub fn respond(payload: &str, now: i64, pretty: bool) -> Result<(String, u8)> {
    if payload.is_empty() {
        let error = InputError {
            error: NO_INPUT_MESSAGE.to_string(),
        };
        return Ok((serde_json::to_string(&error)?, 1));
    }
    Ok((render(payload, now, pretty)?, 0))
}

fn run(args: &Args) -> Result<ExitCode> {
    let payload = read_payload(args.file.as_deref())?;
    tracing::debug!(bytes = payload.len(), "read payload");

    let now = args.now.unwrap_or_else(|| Utc::now().timestamp());
    let (rendered, status) = respond(&payload, now, args.pretty)?;
    if !args.quiet {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{rendered}")?;
    }
    Ok(ExitCode::from(status))
}

/// Main entry point for the depr command.
pub fn main() -> ExitCode {
    let args = Args::parse();

    if args.verbose {
        tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .init();
    }

    match run(&args) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(2)
        }
    }
}
