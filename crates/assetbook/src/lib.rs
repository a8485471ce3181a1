//! Assetbook CLI tools.
//!
//! This crate provides the command-line surface over the depreciation
//! engine:
//!
//! - `abook-depr`: read a JSON array of assets from a file or stdin
//!   and print the batch depreciation result
//!
//! # Example Usage
//!
//! ```bash
//! abook-depr assets.json
//! cat assets.json | abook-depr --pretty
//! abook-depr assets.json --now 1700000000
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cmd;
