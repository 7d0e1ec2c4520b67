//! Training metrics
//!
//! Closed-form formulas deriving distance, mean speed and spent calories from
//! raw activity counters:
//! - Distance from steps or strokes
//! - Mean speed from distance (or pool geometry) and duration
//! - Calories for running, walking and swimming

/// Average step length (m)
pub const STEP_LENGTH_M: f64 = 0.65;
/// Meters in a kilometer
pub const METERS_IN_KM: f64 = 1000.0;
/// Minutes in an hour
pub const MINUTES_IN_HOUR: f64 = 60.0;
/// km/h to m/s conversion factor
pub const KMH_IN_MSEC: f64 = 0.278;
/// Centimeters in a meter
pub const CM_IN_M: f64 = 100.0;

/// Mean speed multiplier for running calories
pub const RUNNING_CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
/// Mean speed shift for running calories
pub const RUNNING_CALORIES_MEAN_SPEED_SHIFT: f64 = 1.79;

/// Body weight multiplier for walking calories
pub const WALKING_CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
/// Height multiplier for walking calories
pub const WALKING_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

/// Mean speed shift for swimming calories
pub const SWIMMING_CALORIES_MEAN_SPEED_SHIFT: f64 = 1.1;
/// Body weight multiplier for swimming calories
pub const SWIMMING_CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

/// Distance covered (km) for a number of steps or strokes
pub fn distance(action: i64) -> f64 {
    action as f64 * STEP_LENGTH_M / METERS_IN_KM
}

/// Mean speed (km/h) over the whole training.
///
/// Returns 0 for a zero duration instead of dividing by zero.
pub fn mean_speed(action: i64, duration_hours: f64) -> f64 {
    if duration_hours == 0.0 {
        return 0.0;
    }
    distance(action) / duration_hours
}

/// Mean swimming speed (km/h) derived from pool geometry.
///
/// Returns 0 for a zero duration.
pub fn swimming_mean_speed(pool_length_m: i64, pool_count: i64, duration_hours: f64) -> f64 {
    if duration_hours == 0.0 {
        return 0.0;
    }
    pool_length_m as f64 * pool_count as f64 / METERS_IN_KM / duration_hours
}

/// Calories burned while running
pub fn running_spent_calories(action: i64, weight_kg: f64, duration_hours: f64) -> f64 {
    let duration_min = duration_hours * MINUTES_IN_HOUR;
    (RUNNING_CALORIES_MEAN_SPEED_MULTIPLIER
        * mean_speed(action, duration_hours)
        * RUNNING_CALORIES_MEAN_SPEED_SHIFT)
        * weight_kg
        / METERS_IN_KM
        * duration_min
}

/// Calories burned while walking.
///
/// Height is taken in centimeters; the squared speed over height is scaled by
/// `CM_IN_M` rather than converting height to meters first, which keeps the
/// numbers identical to the reference tables.
pub fn walking_spent_calories(
    action: i64,
    duration_hours: f64,
    weight_kg: f64,
    height_cm: f64,
) -> f64 {
    let speed_ms = mean_speed(action, duration_hours) * KMH_IN_MSEC;
    let duration_min = duration_hours * MINUTES_IN_HOUR;
    (WALKING_CALORIES_WEIGHT_MULTIPLIER * weight_kg
        + (speed_ms.powi(2) / height_cm * CM_IN_M) * WALKING_SPEED_HEIGHT_MULTIPLIER * weight_kg)
        * duration_min
}

/// Calories burned while swimming
pub fn swimming_spent_calories(
    pool_length_m: i64,
    pool_count: i64,
    duration_hours: f64,
    weight_kg: f64,
) -> f64 {
    let speed = swimming_mean_speed(pool_length_m, pool_count, duration_hours);
    (speed + SWIMMING_CALORIES_MEAN_SPEED_SHIFT)
        * SWIMMING_CALORIES_WEIGHT_MULTIPLIER
        * weight_kg
        * duration_hours
}
