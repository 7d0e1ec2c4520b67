//! Training record schema
//!
//! This module defines the JSON wire form of a training record and the adapter
//! that parses batches of records and resolves them into `Training` values.

mod adapter;
mod record;

pub use adapter::*;
pub use record::*;
