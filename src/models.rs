//! Domain model for daily therapy logs and user settings.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config;

/// One day of therapy data. Dates are day-resolution and intended to be
/// unique per day, though nothing here enforces that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: Uuid,
    pub date: NaiveDate,
    pub lab_inr: Option<f64>,
    pub home_inr: Option<f64>,
    /// Warfarin dose taken that day, in mg.
    pub warfarin_dose: Option<f64>,
    pub injections: Option<String>,
    pub comment: Option<String>,
    pub vitamin_k_intake: Option<VitaminKLevel>,
}

impl LogEntry {
    /// Empty entry for the given day.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            lab_inr: None,
            home_inr: None,
            warfarin_dose: None,
            injections: None,
            comment: None,
            vitamin_k_intake: None,
        }
    }

    /// The INR reading that counts for this entry: home when present,
    /// lab otherwise.
    pub fn effective_inr(&self) -> Option<f64> {
        self.home_inr.or(self.lab_inr)
    }
}

/// Categorical dietary vitamin K level logged alongside an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VitaminKLevel {
    None,
    Low,
    Medium,
    High,
    VeryHigh,
}

/// Which device produced an INR reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InrSource {
    Lab,
    Home,
}

/// Per-user preferences consumed by the analytics layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    pub target_inr_min: f64,
    pub target_inr_max: f64,
    /// Preferred INR test time, "HH:MM".
    pub inr_test_time: String,
    /// Preferred dose time, "HH:MM".
    pub dose_time: String,
    pub notifications_enabled: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            target_inr_min: config::DEFAULT_TARGET_INR_MIN,
            target_inr_max: config::DEFAULT_TARGET_INR_MAX,
            inr_test_time: "10:00".into(),
            dose_time: "13:00".into(),
            notifications_enabled: true,
        }
    }
}
