//! Autonomy system - output bands, monthly drift and autonomy actions.
//!
//! Output is read from a five-band table: the highest threshold not above
//! the province's autonomy decides the percentage kept by the owner.

use crate::bounded::clamp_f64;
use realmdata::defines::autonomy as defines;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputType {
    Tax,
    Production,
    Manpower,
}

/// `(threshold, tax, production, manpower)`, ascending thresholds.
const OUTPUT_BANDS: [(f64, f64, f64, f64); 5] = [
    (0.0, 100.0, 100.0, 100.0),
    (25.0, 80.0, 85.0, 75.0),
    (50.0, 55.0, 65.0, 50.0),
    (75.0, 30.0, 40.0, 25.0),
    (100.0, 10.0, 15.0, 0.0),
];

/// Percent of `kind` output kept at `autonomy`.
pub fn get_output_modifier(autonomy: f64, kind: OutputType) -> f64 {
    let autonomy = clamp_f64(autonomy, 0.0, 100.0);
    let (_, tax, production, manpower) = OUTPUT_BANDS
        .iter()
        .rev()
        .find(|(threshold, ..)| *threshold <= autonomy)
        .copied()
        .unwrap_or(OUTPUT_BANDS[0]);
    match kind {
        OutputType::Tax => tax,
        OutputType::Production => production,
        OutputType::Manpower => manpower,
    }
}

/// Monthly autonomy change. Zero at or below the minimum; never overshoots it.
pub fn calculate_monthly_change(current: f64, minimum: f64, unrest: f64, modifiers: f64) -> f64 {
    if current <= minimum {
        return 0.0;
    }
    let damping = (1.0 - unrest / defines::UNREST_DAMPING).max(0.0);
    let change = -defines::MONTHLY_DECAY * (1.0 + modifiers / 100.0) * damping;
    // Modifiers below -100% would flip decay into growth; hold instead.
    change.min(0.0).max(minimum - current)
}

/// Inputs that raise a province's autonomy floor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MinAutonomyFactors {
    pub is_cored: bool,
    pub is_territory: bool,
    pub different_religion: bool,
    pub trade_company: bool,
}

pub fn calculate_minimum_autonomy(factors: MinAutonomyFactors) -> f64 {
    let mut floor: f64 = 0.0;
    if !factors.is_cored {
        floor = floor.max(defines::UNCORED_FLOOR);
    }
    if factors.is_territory {
        floor = floor.max(defines::TERRITORY_FLOOR);
    }
    if factors.different_religion {
        floor += defines::DIFFERENT_RELIGION;
    }
    if factors.trade_company {
        floor += defines::TRADE_COMPANY;
    }
    floor.clamp(0.0, 100.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AutonomyAction {
    Increase,
    Decrease,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AutonomyActionResult {
    pub autonomy: f64,
    pub unrest_change: f64,
    pub cooldown_months: u32,
}

pub fn apply_autonomy_action(current: f64, minimum: f64, action: AutonomyAction) -> AutonomyActionResult {
    match action {
        AutonomyAction::Increase => AutonomyActionResult {
            autonomy: clamp_f64(current + defines::ACTION_STEP, 0.0, 100.0),
            unrest_change: defines::INCREASE_UNREST,
            cooldown_months: 0,
        },
        AutonomyAction::Decrease => AutonomyActionResult {
            autonomy: clamp_f64((current - defines::ACTION_STEP).max(minimum), 0.0, 100.0),
            unrest_change: defines::DECREASE_UNREST,
            cooldown_months: defines::DECREASE_COOLDOWN_MONTHS,
        },
    }
}
