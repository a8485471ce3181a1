//! Core types for assetbook.
//!
//! This crate defines the value types shared by the depreciation engine
//! and the CLI tools:
//!
//! - [`AssetInput`]: one asset's request fields
//! - [`AssetResult`]: the per-asset outcome (error, active, or disposed)
//! - [`BatchResult`] / [`BatchOutput`]: batch summaries and the
//!   top-level output envelope
//! - [`ValidationError`]: typed per-asset validation failures
//!
//! All types are plain immutable value records: constructed from input,
//! computed, serialized, and discarded. There is no identity beyond the
//! input `id` string and no mutation after construction.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod input;
mod money;
mod result;

pub use error::ValidationError;
pub use input::AssetInput;
pub use money::{round_cents, DAYS_PER_YEAR, SECONDS_PER_DAY};
pub use result::{
    ActiveAsset, AssetError, AssetResult, AssetStatus, BatchOutput, BatchResult, DisposedAsset,
    InputError,
};
