//! Dietary vitamin K guidance paired with each INR band.
//!
//! Guidance runs inverse to anticoagulation need: a low INR gets a low
//! vitamin K target, a dangerously high INR gets a high one.

use serde::{Deserialize, Serialize};

use super::InrBand;

/// A daily intake target with example foods in that range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VitaminKGuidance {
    pub level: &'static str,
    pub mcg_min: u32,
    pub mcg_max: u32,
    pub examples: &'static str,
}

impl VitaminKGuidance {
    /// Single display line: level, mcg/day range, example foods.
    pub fn render(&self) -> String {
        format!(
            "Aim for {} vitamin K intake ({}-{} mcg/day). Example foods: {}.",
            self.level, self.mcg_min, self.mcg_max, self.examples
        )
    }
}

pub(super) fn guidance_for(band: InrBand) -> VitaminKGuidance {
    match band {
        InrBand::CriticallyLow => VitaminKGuidance {
            level: "Low",
            mcg_min: 60,
            mcg_max: 90,
            examples: "green beans, carrots, cucumber",
        },
        InrBand::BelowRange => VitaminKGuidance {
            level: "Low-Medium",
            mcg_min: 80,
            mcg_max: 120,
            examples: "green beans, peas, asparagus",
        },
        InrBand::InRange => VitaminKGuidance {
            level: "Medium",
            mcg_min: 100,
            mcg_max: 150,
            examples: "broccoli, Brussels sprouts, cabbage",
        },
        InrBand::Elevated => VitaminKGuidance {
            level: "Medium-High",
            mcg_min: 120,
            mcg_max: 180,
            examples: "broccoli, Brussels sprouts, green lettuce",
        },
        InrBand::CriticallyHigh => VitaminKGuidance {
            level: "High",
            mcg_min: 150,
            mcg_max: 250,
            examples: "spinach, kale, collard greens",
        },
    }
}
