//! Pipeline orchestration
//!
//! This module provides the record-level public API for fittrack.
//! It takes training records from JSON through resolution to a text or JSON
//! report.

use crate::encoder::TrainingEncoder;
use crate::error::ComputeError;
use crate::report::render;
use crate::schema::{RecordAdapter, TrainingRecord};
use crate::types::{TrainingReport, UserProfile};

/// Convert a JSON training record to the text report.
///
/// # Arguments
/// * `raw_json` - A single training record
///
/// # Returns
/// The multi-line report, or the sentinel text for an unrecognized kind
///
/// # Example
/// ```ignore
/// let text = training_to_text(
///     r#"{"kind": "Бег", "action": 1000, "duration_hours": 1.0, "weight_kg": 70}"#.to_string(),
/// )?;
/// ```
pub fn training_to_text(raw_json: String) -> Result<String, ComputeError> {
    TrainingProcessor::new().process_text(&raw_json)
}

/// Convert a JSON training record to a JSON report.
///
/// # Arguments
/// * `raw_json` - A single training record
///
/// # Example
/// ```ignore
/// let report = training_to_json(
///     r#"{"kind": "swimming", "action": 900, "duration_hours": 1.0,
///         "weight_kg": 70, "pool_length_m": 25, "pool_count": 40}"#.to_string(),
/// )?;
/// ```
pub fn training_to_json(raw_json: String) -> Result<String, ComputeError> {
    TrainingProcessor::new().process_json(&raw_json)
}

/// Processor carrying a default profile across many records.
///
/// Use this when a batch of records shares the same user and leaves weight or
/// height out.
pub struct TrainingProcessor {
    profile: Option<UserProfile>,
    encoder: TrainingEncoder,
}

impl Default for TrainingProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl TrainingProcessor {
    /// Create a processor without a default profile
    pub fn new() -> Self {
        Self {
            profile: None,
            encoder: TrainingEncoder::new(),
        }
    }

    /// Create a processor with a default profile
    pub fn with_profile(profile: UserProfile) -> Self {
        Self {
            profile: Some(profile),
            encoder: TrainingEncoder::new(),
        }
    }

    /// Replace the default profile from JSON
    pub fn load_profile(&mut self, json: &str) -> Result<(), ComputeError> {
        let profile =
            UserProfile::from_json(json).map_err(|e| ComputeError::ParseError(e.to_string()))?;
        self.profile = Some(profile);
        Ok(())
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    /// Process one JSON record into the text report
    pub fn process_text(&self, raw_json: &str) -> Result<String, ComputeError> {
        let record = RecordAdapter::parse_record(raw_json)?;
        let training = RecordAdapter::to_training(&record, self.profile.as_ref())?;
        Ok(render(&training))
    }

    /// Process one JSON record into a JSON report
    pub fn process_json(&self, raw_json: &str) -> Result<String, ComputeError> {
        let record = RecordAdapter::parse_record(raw_json)?;
        let training = RecordAdapter::to_training(&record, self.profile.as_ref())?;
        self.encoder.encode_to_json(&training, record.id.as_deref())
    }

    /// Process parsed records into JSON reports
    pub fn process_records(
        &self,
        records: &[TrainingRecord],
    ) -> Result<Vec<TrainingReport>, ComputeError> {
        let mut reports = Vec::with_capacity(records.len());

        for record in records {
            let training = RecordAdapter::to_training(record, self.profile.as_ref())?;
            reports.push(self.encoder.encode(&training, record.id.as_deref()));
        }

        log::debug!("processed {} training records", reports.len());
        Ok(reports)
    }

    /// Render parsed records into text reports, one per record
    pub fn render_records(&self, records: &[TrainingRecord]) -> Result<Vec<String>, ComputeError> {
        let trainings = RecordAdapter::to_trainings(records, self.profile.as_ref())?;
        Ok(trainings.iter().map(render).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::UNKNOWN_TRAINING_MESSAGE;
    use pretty_assertions::assert_eq;

    fn sample_running_json() -> &'static str {
        r#"{"id": "run-1", "kind": "Бег", "action": 1000, "duration_hours": 1.0, "weight_kg": 70}"#
    }

    fn sample_batch() -> Vec<TrainingRecord> {
        RecordAdapter::parse_ndjson(
            r#"{"id": "a", "kind": "Ходьба", "action": 20000, "duration_hours": 2.5}
{"id": "b", "kind": "Плавание", "action": 2000, "duration_hours": 1.25, "weight_kg": 68, "pool_length_m": 50, "pool_count": 30}
{"id": "c", "kind": "Гребля", "action": 10, "duration_hours": 1.0}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_training_to_text() {
        let text = training_to_text(sample_running_json().to_string()).unwrap();
        assert_eq!(
            text,
            "Тип тренировки: Бег\n\
             Длительность: 1.00 ч.\n\
             Дистанция: 0.65 км.\n\
             Скорость: 0.65 км/ч\n\
             Сожгли калорий: 87.96\n"
        );
    }

    #[test]
    fn test_training_to_text_unknown_kind() {
        let text =
            training_to_text(r#"{"kind": "Бокс", "action": 1, "duration_hours": 0}"#.to_string())
                .unwrap();
        assert_eq!(text, UNKNOWN_TRAINING_MESSAGE);
    }

    #[test]
    fn test_training_to_json() {
        let json = training_to_json(sample_running_json().to_string()).unwrap();
        let payload: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(payload["record_id"], "run-1");
        assert_eq!(payload["summary"]["label"], "Бег");
        assert_eq!(payload["producer"]["name"], "fittrack");
    }

    #[test]
    fn test_invalid_json() {
        let result = training_to_text("not json".to_string());
        assert!(matches!(result, Err(ComputeError::JsonError(_))));
    }

    #[test]
    fn test_missing_weight_without_profile() {
        let result =
            training_to_text(r#"{"kind": "Бег", "action": 1000, "duration_hours": 1}"#.to_string());
        assert!(matches!(result, Err(ComputeError::MissingField(_))));
    }

    #[test]
    fn test_processor_profile_fills_gaps() {
        let mut processor = TrainingProcessor::new();
        processor
            .load_profile(r#"{"weight_kg": 80, "height_cm": 180}"#)
            .unwrap();

        let texts = processor.render_records(&sample_batch()).unwrap();
        assert_eq!(texts.len(), 3);
        assert!(texts[0].ends_with("Сожгли калорий: 824.02\n"));
        // Record weight overrides the profile
        assert!(texts[1].ends_with("Сожгли калорий: 391.00\n"));
        assert_eq!(texts[2], UNKNOWN_TRAINING_MESSAGE);
    }

    #[test]
    fn test_process_records() {
        let processor = TrainingProcessor::with_profile(UserProfile::new(80.0, 180.0));
        let reports = processor.process_records(&sample_batch()).unwrap();

        assert_eq!(reports.len(), 3);
        assert_eq!(reports[0].record_id.as_deref(), Some("a"));
        assert!(reports[0].summary.is_some());
        assert!(reports[2].summary.is_none());
        assert_eq!(
            reports[0].producer.instance_id,
            reports[1].producer.instance_id
        );
    }

    #[test]
    fn test_invalid_profile() {
        let mut processor = TrainingProcessor::new();
        let result = processor.load_profile("{not json");
        assert!(matches!(result, Err(ComputeError::ParseError(_))));
        assert!(processor.profile().is_none());
    }
}
