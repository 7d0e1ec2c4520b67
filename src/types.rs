//! Core types for fittrack
//!
//! This module defines the values that flow through a calculation: the training
//! kind, the resolved training parameters, the computed summary and the user
//! profile used to fill gaps in incoming records.

use serde::{Deserialize, Serialize};

/// Display label for running trainings
pub const RUNNING_LABEL: &str = "Бег";
/// Display label for walking trainings
pub const WALKING_LABEL: &str = "Ходьба";
/// Display label for swimming trainings
pub const SWIMMING_LABEL: &str = "Плавание";

/// Training kind selecting which formula set applies
///
/// Serialized as its identifier; deserialized through `from_label`, so display
/// labels and identifiers are both accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TrainingKind {
    Running,
    Walking,
    Swimming,
    /// Any label that is not recognized; reports for it are the sentinel text
    Other(String),
}

impl From<String> for TrainingKind {
    fn from(label: String) -> Self {
        TrainingKind::from_label(&label)
    }
}

impl From<TrainingKind> for String {
    fn from(kind: TrainingKind) -> Self {
        kind.as_str().to_string()
    }
}

impl TrainingKind {
    /// All recognized kinds, in display order
    pub const KNOWN: [TrainingKind; 3] = [
        TrainingKind::Running,
        TrainingKind::Walking,
        TrainingKind::Swimming,
    ];

    /// Resolve a label into a kind.
    ///
    /// Accepts both the display labels (`Бег`, `Ходьба`, `Плавание`) and the
    /// identifiers (`running`, `walking`, `swimming`). Matching is exact.
    pub fn from_label(label: &str) -> Self {
        match label {
            RUNNING_LABEL | "running" => TrainingKind::Running,
            WALKING_LABEL | "walking" => TrainingKind::Walking,
            SWIMMING_LABEL | "swimming" => TrainingKind::Swimming,
            other => TrainingKind::Other(other.to_string()),
        }
    }

    /// Machine identifier
    pub fn as_str(&self) -> &str {
        match self {
            TrainingKind::Running => "running",
            TrainingKind::Walking => "walking",
            TrainingKind::Swimming => "swimming",
            TrainingKind::Other(name) => name.as_str(),
        }
    }

    /// Label printed in the text report
    pub fn label(&self) -> &str {
        match self {
            TrainingKind::Running => RUNNING_LABEL,
            TrainingKind::Walking => WALKING_LABEL,
            TrainingKind::Swimming => SWIMMING_LABEL,
            TrainingKind::Other(name) => name.as_str(),
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, TrainingKind::Other(_))
    }

    /// Whether the calorie formula for this kind reads the user's weight
    pub fn requires_weight(&self) -> bool {
        self.is_known()
    }

    /// Whether the calorie formula for this kind reads the user's height
    pub fn requires_height(&self) -> bool {
        matches!(self, TrainingKind::Walking)
    }
}

/// Fully resolved parameters of a single training
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Training {
    pub kind: TrainingKind,
    /// Steps for running and walking, strokes for swimming
    pub action: i64,
    /// Duration in hours
    pub duration_hours: f64,
    /// User weight (kg)
    pub weight_kg: f64,
    /// User height (cm)
    pub height_cm: f64,
    /// Pool length (m), swimming only
    pub pool_length_m: i64,
    /// Number of pool lengths swum, swimming only
    pub pool_count: i64,
}

impl Default for Training {
    fn default() -> Self {
        Self {
            kind: TrainingKind::Running,
            action: 0,
            duration_hours: 0.0,
            weight_kg: 0.0,
            height_cm: 0.0,
            pool_length_m: 0,
            pool_count: 0,
        }
    }
}

/// Derived metrics of a training with a recognized kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingSummary {
    pub kind: TrainingKind,
    /// Duration in hours
    pub duration_hours: f64,
    /// Distance covered (km)
    pub distance_km: f64,
    /// Mean speed over the whole session (km/h)
    pub mean_speed_kmh: f64,
    /// Calories burned (kcal)
    pub calories_kcal: f64,
}

/// Default physiological parameters applied to records that omit them
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Weight (kg)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    /// Height (cm)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<f64>,
}

impl UserProfile {
    pub fn new(weight_kg: f64, height_cm: f64) -> Self {
        Self {
            weight_kg: Some(weight_kg),
            height_cm: Some(height_cm),
        }
    }

    /// Load a profile from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize the profile to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

// ============================================================================
// JSON report types
// ============================================================================

/// JSON report for one training
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingReport {
    /// Report format version
    pub report_version: String,
    /// Producer metadata
    pub producer: ReportProducer,
    /// When the report was computed (RFC 3339, UTC)
    pub computed_at_utc: String,
    /// Identifier of the source record, if it carried one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record_id: Option<String>,
    /// Computed metrics; `null` for an unrecognized kind
    pub summary: Option<ReportSummary>,
    /// Sentinel text for an unrecognized kind
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Report producer metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportProducer {
    pub name: String,
    pub version: String,
    pub instance_id: String,
}

/// Computed metrics as they appear in a JSON report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Kind identifier (`running`, `walking`, `swimming`)
    pub kind: String,
    /// Display label
    pub label: String,
    pub duration_hours: f64,
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories_kcal: f64,
}
