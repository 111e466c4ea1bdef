/// Application-level constants
pub const APP_NAME: &str = "CoagCompanion";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Fallback maintenance dose (mg/day) when the log history carries no doses.
pub const DEFAULT_MAINTENANCE_DOSE_MG: f64 = 5.0;

/// How many trailing log entries feed the maintenance-dose average.
pub const DOSE_HISTORY_WINDOW: usize = 7;

/// How many trailing INR-bearing entries feed the trend fit.
pub const INR_HISTORY_WINDOW: usize = 7;

/// Minimum qualifying observations before a trend fit is attempted.
pub const MIN_POINTS_FOR_PREDICTION: usize = 3;

/// Days projected forward by the predictor.
pub const PREDICTION_HORIZON_DAYS: i64 = 3;

/// Physiologically plausible bounds predictions are clamped to.
pub const PREDICTED_INR_MIN: f64 = 0.5;
pub const PREDICTED_INR_MAX: f64 = 6.0;

/// Default therapeutic target range.
pub const DEFAULT_TARGET_INR_MIN: f64 = 2.0;
pub const DEFAULT_TARGET_INR_MAX: f64 = 3.0;

/// How far outside the target range still counts as a near miss.
pub const NEAR_MISS_MARGIN: f64 = 0.3;

/// Lookback window for the dashboard INR average.
pub const INR_AVERAGE_WINDOW_DAYS: i64 = 30;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_range_is_ordered() {
        assert!(DEFAULT_TARGET_INR_MIN < DEFAULT_TARGET_INR_MAX);
    }

    #[test]
    fn prediction_bounds_are_ordered() {
        assert!(PREDICTED_INR_MIN < PREDICTED_INR_MAX);
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, env!("CARGO_PKG_VERSION"));
    }
}
