//! JSON report encoding
//!
//! This module encodes computed training summaries into JSON reports that carry
//! producer metadata alongside the metrics.

use crate::error::ComputeError;
use crate::report::UNKNOWN_TRAINING_MESSAGE;
use crate::types::{ReportProducer, ReportSummary, Training, TrainingReport, TrainingSummary};
use crate::{FITTRACK_VERSION, PRODUCER_NAME};
use chrono::Utc;
use uuid::Uuid;

/// Current report format version
pub const REPORT_VERSION: &str = "1.0.0";

/// Encoder for producing JSON training reports
pub struct TrainingEncoder {
    instance_id: String,
}

impl Default for TrainingEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl TrainingEncoder {
    /// Create a new encoder with a unique instance ID
    pub fn new() -> Self {
        Self {
            instance_id: Uuid::new_v4().to_string(),
        }
    }

    /// Create an encoder with a specific instance ID
    pub fn with_instance_id(instance_id: String) -> Self {
        Self { instance_id }
    }

    pub fn instance_id(&self) -> &str {
        &self.instance_id
    }

    /// Encode a training into a report
    pub fn encode(&self, training: &Training, record_id: Option<&str>) -> TrainingReport {
        let producer = ReportProducer {
            name: PRODUCER_NAME.to_string(),
            version: FITTRACK_VERSION.to_string(),
            instance_id: self.instance_id.clone(),
        };

        let summary = TrainingSummary::compute(training).map(|s| ReportSummary {
            kind: s.kind.as_str().to_string(),
            label: s.kind.label().to_string(),
            duration_hours: s.duration_hours,
            distance_km: s.distance_km,
            mean_speed_kmh: s.mean_speed_kmh,
            calories_kcal: s.calories_kcal,
        });
        let message = summary
            .is_none()
            .then(|| UNKNOWN_TRAINING_MESSAGE.to_string());

        TrainingReport {
            report_version: REPORT_VERSION.to_string(),
            producer,
            computed_at_utc: Utc::now().to_rfc3339(),
            record_id: record_id.map(str::to_string),
            summary,
            message,
        }
    }

    /// Encode to JSON string
    pub fn encode_to_json(
        &self,
        training: &Training,
        record_id: Option<&str>,
    ) -> Result<String, ComputeError> {
        let report = self.encode(training, record_id);
        serde_json::to_string(&report).map_err(|e| ComputeError::EncodingError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TrainingKind;

    fn make_running() -> Training {
        Training {
            kind: TrainingKind::Running,
            action: 1000,
            duration_hours: 1.0,
            weight_kg: 70.0,
            height_cm: 175.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_encode_report() {
        let encoder = TrainingEncoder::with_instance_id("test-instance".to_string());
        let report = encoder.encode(&make_running(), Some("run-1"));

        assert_eq!(report.report_version, REPORT_VERSION);
        assert_eq!(report.producer.name, PRODUCER_NAME);
        assert_eq!(report.producer.version, FITTRACK_VERSION);
        assert_eq!(report.producer.instance_id, "test-instance");
        assert_eq!(report.record_id.as_deref(), Some("run-1"));
        assert!(report.message.is_none());

        let summary = report.summary.unwrap();
        assert_eq!(summary.kind, "running");
        assert_eq!(summary.label, "Бег");
        assert!((summary.distance_km - 0.65).abs() < 1e-9);
        assert!((summary.calories_kcal - 87.9606).abs() < 1e-9);
    }

    #[test]
    fn test_encode_unknown_kind() {
        let training = Training {
            kind: TrainingKind::Other("yoga".to_string()),
            ..make_running()
        };
        let report = TrainingEncoder::new().encode(&training, None);

        assert!(report.summary.is_none());
        assert_eq!(report.message.as_deref(), Some(UNKNOWN_TRAINING_MESSAGE));
    }

    #[test]
    fn test_encode_to_json() {
        let encoder = TrainingEncoder::new();
        let json = encoder.encode_to_json(&make_running(), None).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(parsed.get("report_version").is_some());
        assert!(parsed.get("producer").is_some());
        assert!(parsed.get("computed_at_utc").is_some());
        assert!(parsed.get("record_id").is_none());
        assert!(parsed.get("message").is_none());
        assert_eq!(parsed["summary"]["kind"], "running");
    }

    #[test]
    fn test_instance_ids_are_unique() {
        assert_ne!(
            TrainingEncoder::new().instance_id(),
            TrainingEncoder::new().instance_id()
        );
    }
}
