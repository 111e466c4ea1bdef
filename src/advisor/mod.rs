//! Rule-based warfarin dose and vitamin K advisor.
//!
//! Classifies a newly observed INR into one of five bands, applies the
//! band's one-time multiplier to the recent maintenance-dose average, and
//! resolves the result into a whole-mg dose or alternating schedule.
//! A simplified nomogram-style heuristic, not a validated clinical tool.

pub mod pattern;
pub mod vitamin_k;

use serde::{Deserialize, Serialize};

use crate::config;
use crate::models::LogEntry;
use pattern::{resolve_pattern, DosePattern};
use vitamin_k::VitaminKGuidance;

// ─── Public types ────────────────────────────────────────────────────────────

/// Dose recommendation for today, produced fresh on every call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoseSuggestion {
    /// Maintenance dose resolved from the last 7 logged doses, whole mg.
    pub current_dose: u32,
    /// Recommended dose for today, whole mg. 0 means hold.
    pub suggested_dose: u32,
    /// Alternating schedule for the suggested dose, when one applies.
    pub alternating_pattern: Option<String>,
    /// Long-term adjustment band, e.g. "Increase maintenance by 10% (5-15% range)".
    pub maintenance_dose_change: String,
    pub reasoning: String,
    pub warning: Option<String>,
    pub vitamin_k_suggestion: Option<String>,
}

/// INR band, evaluated lowest-first with half-open boundaries: 2.0 is in
/// range, 4.0 is elevated, anything above 4.0 holds the dose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InrBand {
    CriticallyLow,
    BelowRange,
    InRange,
    Elevated,
    CriticallyHigh,
}

impl InrBand {
    pub fn classify(inr: f64) -> Self {
        if inr < 1.5 {
            Self::CriticallyLow
        } else if inr < 2.0 {
            Self::BelowRange
        } else if inr <= 3.0 {
            Self::InRange
        } else if inr <= 4.0 {
            Self::Elevated
        } else {
            Self::CriticallyHigh
        }
    }

    /// One-time multiplier on the maintenance average. `None` holds the dose.
    fn multiplier(self) -> Option<f64> {
        match self {
            Self::CriticallyLow => Some(1.75),
            Self::BelowRange => Some(1.5),
            Self::InRange => Some(1.0),
            Self::Elevated => Some(0.5),
            Self::CriticallyHigh => None,
        }
    }

    fn maintenance_change(self) -> &'static str {
        match self {
            Self::CriticallyLow => "Increase maintenance by 15% (10-20% range)",
            Self::BelowRange => "Increase maintenance by 10% (5-15% range)",
            Self::InRange => "No change",
            Self::Elevated => "Decrease maintenance by 7.5% (5-10% range)",
            Self::CriticallyHigh => "HOLD dose and consult doctor immediately",
        }
    }

    fn warning(self) -> Option<&'static str> {
        match self {
            Self::CriticallyLow => Some(
                "INR is critically low. Contact your doctor immediately and consider bridging with injections.",
            ),
            Self::BelowRange => {
                Some("Consider bridging with Fraxiparine injections until INR is in range.")
            }
            Self::InRange => None,
            Self::Elevated => {
                Some("INR is elevated. Monitor closely and avoid high vitamin K foods.")
            }
            Self::CriticallyHigh => Some(
                "⚠️ CRITICAL: INR is dangerously high. HOLD today's dose and contact your doctor IMMEDIATELY. Risk of bleeding.",
            ),
        }
    }

    pub fn vitamin_k_guidance(self) -> VitaminKGuidance {
        vitamin_k::guidance_for(self)
    }
}

// ─── Advisor ─────────────────────────────────────────────────────────────────

/// Computes a dose suggestion from a new INR reading and the chronological
/// log history (oldest first). Only the last 7 entries feed the
/// maintenance-dose average; entries without a recorded dose are skipped,
/// and an empty window falls back to 5.0 mg.
pub fn suggest_dose(current_inr: f64, recent_logs: &[LogEntry]) -> DoseSuggestion {
    let doses: Vec<f64> = recent_logs
        .iter()
        .rev()
        .take(config::DOSE_HISTORY_WINDOW)
        .filter_map(|log| log.warfarin_dose)
        .collect();

    let avg_maintenance = if doses.is_empty() {
        config::DEFAULT_MAINTENANCE_DOSE_MG
    } else {
        doses.iter().sum::<f64>() / doses.len() as f64
    };

    let baseline = resolve_pattern(avg_maintenance);
    let band = InrBand::classify(current_inr);
    tracing::debug!(inr = current_inr, band = ?band, "classified INR reading");

    let suggestion = match band.multiplier() {
        Some(multiplier) => resolve_pattern(avg_maintenance * multiplier),
        None => DosePattern {
            dose: 0,
            pattern: None,
        },
    };

    DoseSuggestion {
        current_dose: baseline.dose,
        suggested_dose: suggestion.dose,
        reasoning: reasoning(band, current_inr, baseline.pattern.as_deref()),
        alternating_pattern: suggestion.pattern,
        maintenance_dose_change: band.maintenance_change().to_string(),
        warning: band.warning().map(str::to_string),
        vitamin_k_suggestion: Some(band.vitamin_k_guidance().render()),
    }
}

/// Renders the explanation sentence for a band. The in-range variant carries
/// the baseline schedule description so the user sees how to keep taking
/// their current dose.
fn reasoning(band: InrBand, inr: f64, baseline_pattern: Option<&str>) -> String {
    match band {
        InrBand::CriticallyLow => format!(
            "INR is critically low ({inr:.1}). Suggested one-time dose increase of 75% and maintenance increase of 15%."
        ),
        InrBand::BelowRange => format!(
            "INR is below target range ({inr:.1}). Suggested one-time dose increase of 50% and maintenance increase of 10%."
        ),
        InrBand::InRange => {
            let mut text = format!(
                "INR is within target range ({inr:.1}). Continue current maintenance dose."
            );
            if let Some(schedule) = baseline_pattern {
                text.push(' ');
                text.push_str(schedule);
            }
            text
        }
        InrBand::Elevated => format!(
            "INR is above target range ({inr:.1}). Suggested one-time dose reduction of 50% and maintenance decrease of 7.5%."
        ),
        InrBand::CriticallyHigh => format!(
            "INR is dangerously high ({inr:.1}). DO NOT take today's dose."
        ),
    }
}
