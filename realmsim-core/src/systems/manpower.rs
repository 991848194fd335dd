//! Manpower system - pool size, monthly recovery and recruitment gates.

use crate::state::{Province, RegimentType};
use crate::systems::autonomy::{get_output_modifier, OutputType};
use crate::systems::economy::apply_modifier;
use realmdata::defines::{combat, economy, manpower as defines};
use serde::{Deserialize, Serialize};

/// Maximum manpower from owned provinces, after autonomy and modifiers.
pub fn calculate_max_manpower(provinces: &[Province], modifiers: f64) -> f64 {
    let from_provinces: f64 = provinces
        .iter()
        .map(|p| {
            p.development.manpower.max(0.0)
                * defines::MEN_PER_DEV
                * get_output_modifier(p.autonomy, OutputType::Manpower)
                / 100.0
        })
        .sum();
    apply_modifier(defines::BASE_MANPOWER + from_provinces, modifiers).max(0.0)
}

/// Men recovered per month: 2% of max, scaled, clamped to 1%..50% of max.
pub fn calculate_monthly_recovery(max_manpower: f64, modifiers: f64) -> f64 {
    let rate = apply_modifier(1.0 / defines::RECOVERY_MONTHS, modifiers)
        .clamp(defines::MIN_RECOVERY_RATE, defines::MAX_RECOVERY_RATE);
    max_manpower.max(0.0) * rate
}

/// Next month's pool. A pool already at or over its maximum is left alone.
pub fn calculate_new_manpower(current: f64, max_manpower: f64, recovery: f64) -> f64 {
    if current >= max_manpower {
        return current;
    }
    (current + recovery.max(0.0)).min(max_manpower)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ManpowerStatus {
    Depleted,
    Low,
    Moderate,
    Good,
    Full,
}

impl ManpowerStatus {
    pub fn label(self) -> &'static str {
        match self {
            ManpowerStatus::Depleted => "Depleted",
            ManpowerStatus::Low => "Low",
            ManpowerStatus::Moderate => "Moderate",
            ManpowerStatus::Good => "Good",
            ManpowerStatus::Full => "Full",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            ManpowerStatus::Depleted => "#8b0000",
            ManpowerStatus::Low => "#d9534f",
            ManpowerStatus::Moderate => "#f0ad4e",
            ManpowerStatus::Good => "#9acd32",
            ManpowerStatus::Full => "#5cb85c",
        }
    }
}

/// Band for a current/max ratio. Ratios clamp to [0, 1]; NaN is depleted.
pub fn get_manpower_status(ratio: f64) -> ManpowerStatus {
    if ratio.is_nan() {
        return ManpowerStatus::Depleted;
    }
    let ratio = ratio.clamp(0.0, 1.0);
    if ratio < 0.1 {
        ManpowerStatus::Depleted
    } else if ratio < 0.25 {
        ManpowerStatus::Low
    } else if ratio < 0.5 {
        ManpowerStatus::Moderate
    } else if ratio < 0.75 {
        ManpowerStatus::Good
    } else {
        ManpowerStatus::Full
    }
}

pub fn get_manpower_color(ratio: f64) -> &'static str {
    get_manpower_status(ratio).color()
}

/// Ducats to raise one regiment.
pub fn recruitment_cost(kind: RegimentType) -> f64 {
    match kind {
        RegimentType::Infantry => economy::INFANTRY_COST,
        RegimentType::Cavalry => economy::CAVALRY_COST,
        RegimentType::Artillery => economy::ARTILLERY_COST,
    }
}

pub fn can_recruit(manpower: f64, treasury: f64, kind: RegimentType, count: u32) -> bool {
    let count = count as f64;
    manpower >= combat::REGIMENT_SIZE * count && treasury >= recruitment_cost(kind) * count
}
