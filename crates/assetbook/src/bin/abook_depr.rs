//! abook-depr - Batch depreciation calculator.
//!
//! Reads a JSON array of assets and prints the batch result.

fn main() -> std::process::ExitCode {
    assetbook::cmd::depr::main()
}
