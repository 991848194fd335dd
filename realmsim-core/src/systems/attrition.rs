//! Attrition system - monthly losses from supply, terrain and season.

use realmdata::defines::attrition as defines;
use realmdata::{Climate, Season, Terrain};

/// Monthly attrition percent for `regiments` in a province with `supply_limit`.
///
/// Over-limit armies take `1 + (regiments - limit) / limit`; terrain, climate
/// and winter add on top. Capped at 5%.
pub fn calculate_attrition(
    regiments: u32,
    supply_limit: f64,
    terrain: Terrain,
    climate: Climate,
    season: Season,
) -> f64 {
    let regiments = regiments as f64;
    let over_limit = if supply_limit <= 0.0 {
        if regiments > 0.0 {
            defines::NO_SUPPLY_PERCENT
        } else {
            0.0
        }
    } else if regiments > supply_limit {
        let ratio = (regiments - supply_limit) / supply_limit;
        defines::BASE_PERCENT + ratio * defines::OVER_LIMIT_MULTIPLIER
    } else {
        0.0
    };

    let total = over_limit + terrain.stats().attrition + climate.attrition() + season.attrition();
    total.clamp(0.0, defines::MAX_PERCENT)
}

/// Men lost this month.
pub fn calculate_attrition_losses(strength: f64, attrition_percent: f64) -> f64 {
    (strength * attrition_percent / 100.0).max(0.0)
}
