//! Dashboard aggregates derived from the log history.
//!
//! Pure functions over `(logs, settings, today)` — the reference date is an
//! explicit parameter so results stay reproducible.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config;
use crate::models::{AppSettings, InrSource, LogEntry, VitaminKLevel};

// ─── Public types ────────────────────────────────────────────────────────────

/// Headline numbers and alerts for the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    /// Display form of the target range, e.g. "2.0 - 3.0".
    pub current_target: String,
    pub average_inr_30_days: Option<f64>,
    pub total_doses_logged: usize,
    pub recent_alerts: Vec<String>,
    pub last_inr: Option<f64>,
    pub last_inr_date: Option<NaiveDate>,
    pub last_inr_source: Option<InrSource>,
}

/// Where a reading sits relative to the target range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InrStatus {
    InRange,
    NearMiss,
    OutOfRange,
    Unknown,
}

/// Reading counts split by target range, with percentages to one decimal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeInRange {
    pub below: usize,
    pub in_range: usize,
    pub above: usize,
    pub below_pct: f64,
    pub in_range_pct: f64,
    pub above_pct: f64,
}

// ─── Aggregation ─────────────────────────────────────────────────────────────

/// Assembles dashboard stats from the full log history. `today` anchors the
/// 30-day average window.
pub fn dashboard_stats(
    logs: &[LogEntry],
    settings: &AppSettings,
    today: NaiveDate,
) -> DashboardStats {
    let mut sorted: Vec<&LogEntry> = logs.iter().collect();
    sorted.sort_by_key(|log| log.date);

    // Newest entry carrying any reading wins; home beats lab within an entry
    let mut last_inr = None;
    let mut last_inr_date = None;
    let mut last_inr_source = None;
    for log in sorted.iter().rev() {
        if let Some(inr) = log.home_inr {
            last_inr = Some(inr);
            last_inr_date = Some(log.date);
            last_inr_source = Some(InrSource::Home);
            break;
        } else if let Some(inr) = log.lab_inr {
            last_inr = Some(inr);
            last_inr_date = Some(log.date);
            last_inr_source = Some(InrSource::Lab);
            break;
        }
    }

    let window_start = today - chrono::Duration::days(config::INR_AVERAGE_WINDOW_DAYS);
    let recent_inrs: Vec<f64> = sorted
        .iter()
        .filter(|log| log.date >= window_start)
        .filter_map(|log| log.effective_inr())
        .collect();
    let average_inr_30_days = if recent_inrs.is_empty() {
        None
    } else {
        let avg = recent_inrs.iter().sum::<f64>() / recent_inrs.len() as f64;
        Some((avg * 100.0).round() / 100.0)
    };

    let total_doses_logged = logs.iter().filter(|log| log.warfarin_dose.is_some()).count();

    let recent_alerts = collect_alerts(&sorted, settings, last_inr);

    DashboardStats {
        current_target: format!(
            "{:.1} - {:.1}",
            settings.target_inr_min, settings.target_inr_max
        ),
        average_inr_30_days,
        total_doses_logged,
        recent_alerts,
        last_inr,
        last_inr_date,
        last_inr_source,
    }
}

fn collect_alerts(
    sorted: &[&LogEntry],
    settings: &AppSettings,
    last_inr: Option<f64>,
) -> Vec<String> {
    let mut alerts = Vec::new();

    if let Some(inr) = last_inr {
        if inr < settings.target_inr_min {
            alerts.push(format!(
                "INR below target range ({inr:.1} < {})",
                settings.target_inr_min
            ));
        } else if inr > settings.target_inr_max {
            alerts.push(format!(
                "INR above target range ({inr:.1} > {})",
                settings.target_inr_max
            ));
        }

        if inr < 2.0 {
            alerts.push("Consider bridging with Fraxiparine injections".to_string());
        }

        if inr > 4.0 {
            alerts.push(
                "⚠️ CRITICAL: INR dangerously high - contact doctor immediately".to_string(),
            );
        }
    }

    // More than 2 high-vitamin-K days in the last week may explain a drift
    let start = sorted.len().saturating_sub(7);
    let high_vit_k_days = sorted[start..]
        .iter()
        .filter(|log| {
            matches!(
                log.vitamin_k_intake,
                Some(VitaminKLevel::High) | Some(VitaminKLevel::VeryHigh)
            ) || log
                .comment
                .as_deref()
                .is_some_and(|c| {
                    let lower = c.to_lowercase();
                    lower.contains("kale") || lower.contains("spinach")
                })
        })
        .count();
    if high_vit_k_days > 2 {
        alerts.push("High vitamin K intake detected in recent days - may affect INR".to_string());
    }

    alerts
}

/// Classifies a reading against the target range. Readings within 0.3 of
/// either bound count as near misses.
pub fn inr_status(inr: Option<f64>, target_min: f64, target_max: f64) -> InrStatus {
    let Some(inr) = inr else {
        return InrStatus::Unknown;
    };

    if inr >= target_min && inr <= target_max {
        InrStatus::InRange
    } else if (inr >= target_min - config::NEAR_MISS_MARGIN && inr < target_min)
        || (inr > target_max && inr <= target_max + config::NEAR_MISS_MARGIN)
    {
        InrStatus::NearMiss
    } else {
        InrStatus::OutOfRange
    }
}

/// Splits all readings by target range. `None` when the history has no
/// readings at all.
pub fn time_in_range(logs: &[LogEntry], settings: &AppSettings) -> Option<TimeInRange> {
    let readings: Vec<f64> = logs.iter().filter_map(|log| log.effective_inr()).collect();
    if readings.is_empty() {
        return None;
    }

    let below = readings
        .iter()
        .filter(|&&inr| inr < settings.target_inr_min)
        .count();
    let above = readings
        .iter()
        .filter(|&&inr| inr > settings.target_inr_max)
        .count();
    let in_range = readings.len() - below - above;

    let pct = |count: usize| (count as f64 / readings.len() as f64 * 1000.0).round() / 10.0;

    Some(TimeInRange {
        below,
        in_range,
        above,
        below_pct: pct(below),
        in_range_pct: pct(in_range),
        above_pct: pct(above),
    })
}
