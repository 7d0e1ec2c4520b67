//! Text report rendering
//!
//! Selects the formula set for a training kind and renders the fixed
//! multi-line summary. Unrecognized kinds render as a single sentinel line.

use std::fmt;

use crate::metrics::{
    distance, mean_speed, running_spent_calories, swimming_mean_speed, swimming_spent_calories,
    walking_spent_calories,
};
use crate::types::{Training, TrainingKind, TrainingSummary};

/// Text returned for trainings whose kind is not recognized
pub const UNKNOWN_TRAINING_MESSAGE: &str = "неизвестный тип тренировки";

impl TrainingSummary {
    /// Compute the summary for a training, or `None` for an unrecognized kind
    pub fn compute(training: &Training) -> Option<Self> {
        let (mean_speed_kmh, calories_kcal) = match &training.kind {
            TrainingKind::Running => (
                mean_speed(training.action, training.duration_hours),
                running_spent_calories(
                    training.action,
                    training.weight_kg,
                    training.duration_hours,
                ),
            ),
            TrainingKind::Walking => (
                mean_speed(training.action, training.duration_hours),
                walking_spent_calories(
                    training.action,
                    training.duration_hours,
                    training.weight_kg,
                    training.height_cm,
                ),
            ),
            TrainingKind::Swimming => (
                swimming_mean_speed(
                    training.pool_length_m,
                    training.pool_count,
                    training.duration_hours,
                ),
                swimming_spent_calories(
                    training.pool_length_m,
                    training.pool_count,
                    training.duration_hours,
                    training.weight_kg,
                ),
            ),
            TrainingKind::Other(label) => {
                log::debug!("unknown training kind {label:?}");
                return None;
            }
        };

        Some(Self {
            kind: training.kind.clone(),
            duration_hours: training.duration_hours,
            distance_km: distance(training.action),
            mean_speed_kmh,
            calories_kcal,
        })
    }
}

impl fmt::Display for TrainingSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Тип тренировки: {}\n\
             Длительность: {:.2} ч.\n\
             Дистанция: {:.2} км.\n\
             Скорость: {:.2} км/ч\n\
             Сожгли калорий: {:.2}\n",
            self.kind.label(),
            self.duration_hours,
            self.distance_km,
            self.mean_speed_kmh,
            self.calories_kcal
        )
    }
}

/// Render the text report for a training, or the sentinel for an unknown kind
pub fn render(training: &Training) -> String {
    match TrainingSummary::compute(training) {
        Some(summary) => summary.to_string(),
        None => UNKNOWN_TRAINING_MESSAGE.to_string(),
    }
}

/// Render the text report from loose parameters.
///
/// # Arguments
/// * `action` - Steps (running, walking) or strokes (swimming)
/// * `training_type` - Kind label, e.g. `Бег` or `running`
/// * `duration` - Duration in hours
/// * `weight` - User weight (kg)
/// * `height` - User height (cm)
/// * `length_pool` - Pool length (m)
/// * `count_pool` - Number of pool lengths swum
pub fn show_training_info(
    action: i64,
    training_type: &str,
    duration: f64,
    weight: f64,
    height: f64,
    length_pool: i64,
    count_pool: i64,
) -> String {
    let training = Training {
        kind: TrainingKind::from_label(training_type),
        action,
        duration_hours: duration,
        weight_kg: weight,
        height_cm: height,
        pool_length_m: length_pool,
        pool_count: count_pool,
    };
    render(&training)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_running_report() {
        let report = show_training_info(1000, "Бег", 1.0, 70.0, 175.0, 0, 0);
        assert_eq!(
            report,
            "Тип тренировки: Бег\n\
             Длительность: 1.00 ч.\n\
             Дистанция: 0.65 км.\n\
             Скорость: 0.65 км/ч\n\
             Сожгли калорий: 87.96\n"
        );
    }

    #[test]
    fn test_walking_report() {
        let report = show_training_info(20000, "Ходьба", 2.5, 80.0, 180.0, 0, 0);
        assert_eq!(
            report,
            "Тип тренировки: Ходьба\n\
             Длительность: 2.50 ч.\n\
             Дистанция: 13.00 км.\n\
             Скорость: 5.20 км/ч\n\
             Сожгли калорий: 824.02\n"
        );
    }

    #[test]
    fn test_swimming_report_uses_pool_speed() {
        let report = show_training_info(2000, "Плавание", 1.25, 68.0, 180.0, 50, 30);
        assert_eq!(
            report,
            "Тип тренировки: Плавание\n\
             Длительность: 1.25 ч.\n\
             Дистанция: 1.30 км.\n\
             Скорость: 1.20 км/ч\n\
             Сожгли калорий: 391.00\n"
        );
    }

    #[test]
    fn test_identifier_prints_display_label() {
        let by_label = show_training_info(1000, "Бег", 1.0, 70.0, 175.0, 0, 0);
        let by_id = show_training_info(1000, "running", 1.0, 70.0, 175.0, 0, 0);
        assert_eq!(by_label, by_id);
    }

    #[test]
    fn test_unknown_kind_returns_sentinel() {
        assert_eq!(
            show_training_info(1000, "Велосипед", 1.0, 70.0, 175.0, 0, 0),
            UNKNOWN_TRAINING_MESSAGE
        );
        assert_eq!(
            show_training_info(-5, "", 0.0, -1.0, 0.0, -3, 7),
            UNKNOWN_TRAINING_MESSAGE
        );
    }

    #[test]
    fn test_zero_duration_report() {
        let report = show_training_info(1000, "Ходьба", 0.0, 70.0, 175.0, 0, 0);
        assert_eq!(
            report,
            "Тип тренировки: Ходьба\n\
             Длительность: 0.00 ч.\n\
             Дистанция: 0.65 км.\n\
             Скорость: 0.00 км/ч\n\
             Сожгли калорий: 0.00\n"
        );
    }

    #[test]
    fn test_compute_summary() {
        let training = Training {
            kind: TrainingKind::Swimming,
            action: 2000,
            duration_hours: 1.0,
            weight_kg: 70.0,
            pool_length_m: 25,
            pool_count: 40,
            ..Default::default()
        };

        let summary = TrainingSummary::compute(&training).unwrap();
        assert!((summary.distance_km - 1.3).abs() < 1e-9);
        assert!((summary.mean_speed_kmh - 1.0).abs() < 1e-9);
        assert!((summary.calories_kcal - 294.0).abs() < 1e-9);
    }

    #[test]
    fn test_compute_unknown_is_none() {
        let training = Training {
            kind: TrainingKind::Other("yoga".to_string()),
            ..Default::default()
        };
        assert!(TrainingSummary::compute(&training).is_none());
        assert_eq!(render(&training), UNKNOWN_TRAINING_MESSAGE);
    }
}
