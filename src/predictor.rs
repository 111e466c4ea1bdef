//! Short-horizon INR trend projection.
//!
//! Fits an ordinary least-squares line through the most recent INR readings
//! and projects it 1-3 days forward. Best-effort: anything short of a clean
//! fit degrades to an empty result, never an error.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;

use crate::config;
use crate::models::LogEntry;

/// One projected reading, clamped to a plausible range and rounded to
/// two decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InrPrediction {
    pub date: NaiveDate,
    pub predicted_inr: f64,
}

/// Projects INR 1-3 days past the last reading.
///
/// Takes the chronological log history (oldest first), keeps the last 7
/// entries carrying an INR reading (home preferred over lab), and fits a
/// line over their positions. Fewer than 3 qualifying entries, or a
/// degenerate fit, yields an empty vector.
pub fn predict_inr(recent_logs: &[LogEntry]) -> Vec<InrPrediction> {
    let qualifying: Vec<&LogEntry> = {
        let with_inr: Vec<&LogEntry> = recent_logs
            .iter()
            .filter(|log| log.effective_inr().is_some())
            .collect();
        let start = with_inr.len().saturating_sub(config::INR_HISTORY_WINDOW);
        with_inr[start..].to_vec()
    };

    if qualifying.len() < config::MIN_POINTS_FOR_PREDICTION {
        return Vec::new();
    }

    let Some(last) = qualifying.last() else {
        return Vec::new();
    };
    let last_date = last.date;
    let last_index = (qualifying.len() - 1) as f64;

    let xs: Vec<f64> = (0..qualifying.len()).map(|i| i as f64).collect();
    let ys: Vec<f64> = qualifying
        .iter()
        .filter_map(|log| log.effective_inr())
        .collect();

    let slope = (&xs).covariance(&ys) / (&xs).variance();
    let intercept = (&ys).mean() - slope * (&xs).mean();

    if !slope.is_finite() || !intercept.is_finite() {
        tracing::warn!(slope, intercept, "degenerate INR trend fit, skipping prediction");
        return Vec::new();
    }

    (1..=config::PREDICTION_HORIZON_DAYS)
        .map(|day| {
            let projected = intercept + slope * (last_index + day as f64);
            let clamped = projected.clamp(config::PREDICTED_INR_MIN, config::PREDICTED_INR_MAX);
            InrPrediction {
                date: last_date + chrono::Duration::days(day),
                predicted_inr: (clamped * 100.0).round() / 100.0,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn home_reading(day: u32, inr: f64) -> LogEntry {
        let mut log = LogEntry::new(NaiveDate::from_ymd_opt(2024, 3, day).unwrap());
        log.home_inr = Some(inr);
        log
    }

    fn lab_reading(day: u32, inr: f64) -> LogEntry {
        let mut log = LogEntry::new(NaiveDate::from_ymd_opt(2024, 3, day).unwrap());
        log.lab_inr = Some(inr);
        log
    }

    #[test]
    fn too_few_readings_yield_nothing() {
        assert!(predict_inr(&[]).is_empty());
        let two = vec![home_reading(1, 2.0), home_reading(2, 2.1)];
        assert!(predict_inr(&two).is_empty());
    }

    #[test]
    fn entries_without_inr_do_not_count() {
        let mut history = vec![home_reading(1, 2.0), home_reading(2, 2.1)];
        let mut dosed_only = LogEntry::new(date("2024-03-03"));
        dosed_only.warfarin_dose = Some(5.0);
        history.push(dosed_only);
        assert!(predict_inr(&history).is_empty());
    }

    #[test]
    fn linear_series_continues_the_trend() {
        let history: Vec<LogEntry> = (0..7)
            .map(|i| home_reading(i + 1, 2.0 + 0.1 * i as f64))
            .collect();
        let predictions = predict_inr(&history);
        assert_eq!(predictions.len(), 3);
        assert_eq!(predictions[0].predicted_inr, 2.7);
        assert_eq!(predictions[1].predicted_inr, 2.8);
        assert_eq!(predictions[2].predicted_inr, 2.9);
    }

    #[test]
    fn dates_follow_the_last_reading_despite_gaps() {
        // Readings on the 1st, 5th, and 20th: predictions start on the 21st
        let history = vec![
            home_reading(1, 2.2),
            home_reading(5, 2.4),
            home_reading(20, 2.6),
        ];
        let predictions = predict_inr(&history);
        assert_eq!(predictions.len(), 3);
        assert_eq!(predictions[0].date, date("2024-03-21"));
        assert_eq!(predictions[1].date, date("2024-03-22"));
        assert_eq!(predictions[2].date, date("2024-03-23"));
    }

    #[test]
    fn steep_rise_is_clamped_high() {
        let history = vec![
            lab_reading(1, 4.0),
            lab_reading(2, 4.8),
            lab_reading(3, 5.6),
        ];
        let predictions = predict_inr(&history);
        assert_eq!(predictions.len(), 3);
        assert!(predictions.iter().all(|p| p.predicted_inr <= 6.0));
        assert_eq!(predictions[2].predicted_inr, 6.0);
    }

    #[test]
    fn steep_fall_is_clamped_low() {
        let history = vec![
            lab_reading(1, 2.0),
            lab_reading(2, 1.2),
            lab_reading(3, 0.6),
        ];
        let predictions = predict_inr(&history);
        assert!(predictions.iter().all(|p| p.predicted_inr >= 0.5));
        assert_eq!(predictions[2].predicted_inr, 0.5);
    }

    #[test]
    fn flat_series_predicts_flat() {
        let history: Vec<LogEntry> = (1..=5).map(|day| home_reading(day, 2.5)).collect();
        let predictions = predict_inr(&history);
        assert_eq!(predictions.len(), 3);
        assert!(predictions.iter().all(|p| p.predicted_inr == 2.5));
    }

    #[test]
    fn home_readings_outrank_lab_readings() {
        // Home series is flat at 3.0 while lab values would trend down
        let history: Vec<LogEntry> = (1..=4)
            .map(|day| {
                let mut log = home_reading(day, 3.0);
                log.lab_inr = Some(3.0 - 0.5 * day as f64);
                log
            })
            .collect();
        let predictions = predict_inr(&history);
        assert!(predictions.iter().all(|p| p.predicted_inr == 3.0));
    }

    #[test]
    fn only_last_seven_readings_feed_the_fit() {
        // Ten flat readings then nothing: an early spike outside the window
        // must not bend the line
        let mut history = vec![home_reading(1, 6.0), home_reading(2, 6.0), home_reading(3, 6.0)];
        history.extend((4..=10).map(|day| home_reading(day, 2.5)));
        let predictions = predict_inr(&history);
        assert_eq!(predictions.len(), 3);
        assert!(predictions.iter().all(|p| p.predicted_inr == 2.5));
    }

    // A non-finite reading poisons the fit; the predictor logs and degrades
    // instead of propagating anything.
    #[test]
    fn non_finite_reading_degrades_to_empty() {
        let subscriber = tracing_subscriber::fmt().with_test_writer().finish();
        tracing::subscriber::with_default(subscriber, || {
            let history = vec![
                home_reading(1, 2.0),
                home_reading(2, f64::NAN),
                home_reading(3, 2.2),
            ];
            assert!(predict_inr(&history).is_empty());
        });
    }

    #[test]
    fn identical_inputs_give_identical_output() {
        let history: Vec<LogEntry> = (1..=5)
            .map(|day| home_reading(day, 2.0 + 0.05 * day as f64))
            .collect();
        assert_eq!(predict_inr(&history), predict_inr(&history));
    }
}
