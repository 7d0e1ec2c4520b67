//! fittrack - Training metrics for running, walking and swimming
//!
//! fittrack turns raw activity counters into derived training metrics through a
//! small deterministic pipeline: record parsing → profile resolution → metric
//! calculation → text or JSON report.
//!
//! ## Modules
//!
//! - **Metrics**: closed-form distance, speed and calorie formulas
//! - **Report**: kind dispatch and the fixed text summary
//! - **Pipeline**: JSON records in, reports out, with an optional user profile

pub mod encoder;
pub mod error;
pub mod metrics;
pub mod pipeline;
pub mod report;
pub mod schema;
pub mod types;

// FFI bindings for C interop (always available for cdylib/staticlib builds)
pub mod ffi;

pub use error::ComputeError;
pub use pipeline::{training_to_json, training_to_text, TrainingProcessor};
pub use report::{show_training_info, UNKNOWN_TRAINING_MESSAGE};
pub use types::{Training, TrainingKind, TrainingSummary, UserProfile};

// Schema exports
pub use schema::{RecordAdapter, TrainingRecord};

/// fittrack version embedded in all JSON reports
pub const FITTRACK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Producer name for JSON reports
pub const PRODUCER_NAME: &str = "fittrack";
