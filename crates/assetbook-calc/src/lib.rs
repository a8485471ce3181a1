//! Straight-line depreciation engine.
//!
//! Two layers, evaluated leaf-first:
//!
//! - [`calculate`]: pure per-asset calculation. Validates the input,
//!   then computes either disposed metrics (net book value frozen at
//!   the disposal proceeds) or active metrics (annual depreciation
//!   prorated by days in use, capped at the purchase amount).
//! - [`process_batch`] / [`process_batch_json`]: run the calculator
//!   over a sequence of assets. One bad item never aborts the batch;
//!   its error is recorded and the remaining items still compute.
//!
//! Everything is synchronous and pure: the evaluation instant `now` is
//! an explicit argument, sampled once per batch by the caller so that
//! every item in a batch is judged against the same instant.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod batch;
mod calculator;

pub use batch::{process_batch, process_batch_json, INVALID_INPUT_MESSAGE};
pub use calculator::{calculate, validate};
