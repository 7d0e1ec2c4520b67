//! Training record definition
//!
//! One record describes one training. Physiological fields are optional so a
//! batch can rely on a shared `UserProfile` instead of repeating them.

use serde::{Deserialize, Serialize};

/// A single training as it arrives on the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingRecord {
    /// Caller-assigned record identifier, echoed into JSON reports
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Kind label (`Бег`, `Ходьба`, `Плавание`, or `running`, `walking`, `swimming`)
    pub kind: String,
    /// Steps or strokes
    pub action: i64,
    /// Duration in hours
    pub duration_hours: f64,
    /// Weight (kg); falls back to the profile when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    /// Height (cm); falls back to the profile when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<f64>,
    /// Pool length (m)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pool_length_m: Option<i64>,
    /// Number of pool lengths swum
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pool_count: Option<i64>,
}
