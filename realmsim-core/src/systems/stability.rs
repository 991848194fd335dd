//! Stability system - level effects, raising cost and province unrest.
//!
//! Stability is an integer in [-3, 3]. Each level carries a fixed effects
//! bundle including a monthly drift rate; callers decide when to apply it.

use crate::bounded::Stability;
use crate::systems::economy::{apply_modifier, round_up};
use realmdata::defines::{stability as defines, unrest};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StabilityEffects {
    pub level: i32,
    /// Percent.
    pub tax_modifier: f64,
    /// Added to every province.
    pub unrest: f64,
    /// Drift toward zero per month.
    pub monthly_change: f64,
    /// Percent.
    pub missionary_strength: f64,
}

/// Effects of a stability level; out-of-range levels clamp.
pub fn get_stability_effects(level: i32) -> StabilityEffects {
    let level = level.clamp(defines::MIN, defines::MAX);
    let (tax_modifier, unrest, monthly_change, missionary_strength) = match level {
        -3 => (-30.0, 6.0, 0.1, -3.0),
        -2 => (-20.0, 4.0, 0.05, -2.0),
        -1 => (-10.0, 2.0, 0.02, -1.0),
        0 => (0.0, 0.0, 0.0, 0.0),
        1 => (5.0, -1.0, 0.0, 1.0),
        2 => (10.0, -2.0, -0.02, 2.0),
        _ => (15.0, -3.0, -0.05, 3.0),
    };
    StabilityEffects {
        level,
        tax_modifier,
        unrest,
        monthly_change,
        missionary_strength,
    }
}

/// Administrative power to climb from `current` to `target`.
///
/// Each step costs `max(25, 100 + 50 * level_reached)`; the sum is scaled by
/// the generic modifier and rounded up. Zero when not climbing.
pub fn calculate_stability_cost(current: i32, target: i32, modifiers: f64) -> f64 {
    let current = current.clamp(defines::MIN, defines::MAX);
    let target = target.min(defines::MAX);
    if target <= current {
        return 0.0;
    }
    let total: f64 = (current + 1..=target)
        .map(|level| {
            (defines::BASE_COST + defines::COST_PER_LEVEL * level as f64).max(defines::MIN_STEP_COST)
        })
        .sum();
    round_up(apply_modifier(total, modifiers)).max(0.0)
}

pub fn can_afford_stability(current: i32, target: i32, admin_power: f64, modifiers: f64) -> bool {
    admin_power >= calculate_stability_cost(current, target, modifiers)
}

/// Step a stability value by the result of a purchase or event.
pub fn change_stability(stability: &mut Stability, delta: i32) {
    let before = stability.get();
    stability.add(delta);
    log::debug!("Stability {} -> {}", before, stability.get());
}

/// Inputs to a province's unrest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnrestFactors {
    pub base_unrest: f64,
    pub stability: i32,
    pub wrong_culture: bool,
    pub wrong_religion: bool,
    pub not_cored: bool,
    /// Percent.
    pub overextension: f64,
    pub war_exhaustion: f64,
    pub autonomy: f64,
}

pub fn calculate_province_unrest(f: &UnrestFactors) -> f64 {
    let mut total = f.base_unrest - f.stability as f64;
    if f.wrong_culture {
        total += unrest::WRONG_CULTURE;
    }
    if f.wrong_religion {
        total += unrest::WRONG_RELIGION;
    }
    if f.not_cored {
        total += unrest::NOT_CORED;
    }
    total += f.overextension / unrest::OVEREXTENSION_DIVISOR;
    total += f.war_exhaustion / unrest::WAR_EXHAUSTION_DIVISOR;
    total -= f.autonomy / unrest::AUTONOMY_DIVISOR;
    total.max(0.0)
}
