//! Adapter for converting training records into resolved trainings
//!
//! Parses single records, JSON arrays and NDJSON streams, and fills the
//! physiological parameters a record leaves out from a `UserProfile`.

use crate::error::ComputeError;
use crate::schema::record::TrainingRecord;
use crate::types::{Training, TrainingKind, UserProfile};

/// Adapter for converting training records to trainings
pub struct RecordAdapter;

impl RecordAdapter {
    /// Parse a JSON string containing a single record
    pub fn parse_record(json: &str) -> Result<TrainingRecord, ComputeError> {
        let record: TrainingRecord = serde_json::from_str(json)?;
        Ok(record)
    }

    /// Parse a JSON string containing an array of records
    pub fn parse_array(json: &str) -> Result<Vec<TrainingRecord>, ComputeError> {
        let records: Vec<TrainingRecord> = serde_json::from_str(json)?;
        Ok(records)
    }

    /// Parse NDJSON (newline-delimited JSON) containing records
    pub fn parse_ndjson(ndjson: &str) -> Result<Vec<TrainingRecord>, ComputeError> {
        let mut records = Vec::new();
        for (line_num, line) in ndjson.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            match serde_json::from_str::<TrainingRecord>(trimmed) {
                Ok(record) => records.push(record),
                Err(e) => {
                    return Err(ComputeError::ParseError(format!(
                        "Failed to parse line {}: {}",
                        line_num + 1,
                        e
                    )));
                }
            }
        }
        Ok(records)
    }

    /// Resolve a record into a training.
    ///
    /// Weight and height come from the record, else from the profile. Only the
    /// parameters the selected formula reads are required; the rest default to
    /// zero. Unrecognized kinds never fail so they can render as the sentinel.
    pub fn to_training(
        record: &TrainingRecord,
        profile: Option<&UserProfile>,
    ) -> Result<Training, ComputeError> {
        let kind = TrainingKind::from_label(&record.kind);

        let weight_kg = resolve_field(
            "weight_kg",
            record.weight_kg,
            profile.and_then(|p| p.weight_kg),
            kind.requires_weight(),
        )?;
        let height_cm = resolve_field(
            "height_cm",
            record.height_cm,
            profile.and_then(|p| p.height_cm),
            kind.requires_height(),
        )?;

        log::debug!(
            "resolved {} record {}: action={} duration={}h",
            kind.as_str(),
            record.id.as_deref().unwrap_or("-"),
            record.action,
            record.duration_hours
        );

        Ok(Training {
            kind,
            action: record.action,
            duration_hours: record.duration_hours,
            weight_kg,
            height_cm,
            pool_length_m: record.pool_length_m.unwrap_or(0),
            pool_count: record.pool_count.unwrap_or(0),
        })
    }

    /// Resolve a batch of records, stopping at the first failure
    pub fn to_trainings(
        records: &[TrainingRecord],
        profile: Option<&UserProfile>,
    ) -> Result<Vec<Training>, ComputeError> {
        records
            .iter()
            .map(|record| Self::to_training(record, profile))
            .collect()
    }
}

fn resolve_field(
    name: &str,
    own: Option<f64>,
    fallback: Option<f64>,
    required: bool,
) -> Result<f64, ComputeError> {
    match (own.or(fallback), required) {
        (Some(value), _) => Ok(value),
        (None, true) => Err(ComputeError::MissingField(name.to_string())),
        (None, false) => Ok(0.0),
    }
}
