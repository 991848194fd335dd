//! Pricing of administrative actions and per-source income.
//!
//! Multiplicative modifiers always apply in the same order: terrain, climate,
//! institution penalty, then the generic percentage.

use crate::state::UnitComposition;
use crate::systems::autonomy::{get_output_modifier, OutputType};
use crate::systems::development::terrain_cost_multiplier;
use crate::systems::economy::{apply_modifier, round_up};
use realmdata::defines::economy as defines;
use realmdata::Terrain;

/// `1 + 10% per missing institution`.
pub fn institution_penalty_multiplier(missing_institutions: u32) -> f64 {
    1.0 + defines::INSTITUTION_PENALTY_PERCENT * missing_institutions as f64 / 100.0
}

/// Monarch power for the next technology level. Levels past the last one
/// cost the same as the last one.
pub fn calculate_tech_cost(level: u8, missing_institutions: u32, modifiers: f64) -> f64 {
    let level = level.min(defines::MAX_TECH_LEVEL);
    let base = defines::TECH_BASE_COST + defines::TECH_COST_PER_LEVEL * level as f64;
    let cost = apply_modifier(base * institution_penalty_multiplier(missing_institutions), modifiers);
    round_up(cost).max(0.0)
}

/// Administrative power to core a province.
pub fn calculate_coring_cost(development: f64, terrain: Terrain, modifiers: f64) -> f64 {
    let base = defines::CORING_COST_PER_DEV * development.max(0.0);
    round_up(apply_modifier(base * terrain_cost_multiplier(terrain), modifiers)).max(0.0)
}

/// Months to core a province, at least one.
pub fn calculate_coring_time(modifiers: f64) -> f64 {
    round_up(apply_modifier(defines::BASE_CORING_TIME, modifiers)).max(1.0)
}

/// Monthly salary for an advisor of `skill`.
pub fn calculate_advisor_cost(skill: u8, modifiers: f64) -> f64 {
    let skill = skill as f64;
    apply_modifier(defines::ADVISOR_SALARY_PER_SKILL_SQ * skill * skill, modifiers).max(0.0)
}

/// Monthly land maintenance.
pub fn calculate_army_maintenance(composition: &UnitComposition, modifiers: f64) -> f64 {
    let base = composition.infantry as f64 * defines::INFANTRY_MAINTENANCE
        + composition.cavalry as f64 * defines::CAVALRY_MAINTENANCE
        + composition.artillery as f64 * defines::ARTILLERY_MAINTENANCE;
    apply_modifier(base, modifiers).max(0.0)
}

pub fn calculate_fort_maintenance(level: u32) -> f64 {
    level as f64 * defines::FORT_MAINTENANCE_PER_LEVEL
}

/// Monthly trade income from a node.
pub fn calculate_trade_income(trade_value: f64, power_share: f64, efficiency: f64) -> f64 {
    apply_modifier(trade_value * power_share / 100.0, efficiency).max(0.0)
}

/// Monthly tax from one province.
pub fn calculate_tax_income(base_tax: f64, autonomy: f64, modifiers: f64) -> f64 {
    let output = get_output_modifier(autonomy, OutputType::Tax) / 100.0;
    apply_modifier(base_tax / defines::MONTHS_PER_YEAR * output, modifiers).max(0.0)
}

/// Monthly production income from one province.
pub fn calculate_production_income(
    base_production: f64,
    goods_price: f64,
    autonomy: f64,
    modifiers: f64,
) -> f64 {
    let output = get_output_modifier(autonomy, OutputType::Production) / 100.0;
    let goods = base_production * defines::BASE_PRODUCTION_MULTIPLIER;
    apply_modifier(goods * goods_price / defines::MONTHS_PER_YEAR * output, modifiers).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tech_cost() {
        assert_eq!(calculate_tech_cost(0, 0, 0.0), 600.0);
        assert_eq!(calculate_tech_cost(0, 1, 0.0), 660.0);
        assert_eq!(calculate_tech_cost(10, 0, 0.0), 1200.0);
        // 1200 * 1.2 = 1440
        assert_eq!(calculate_tech_cost(10, 2, 0.0), 1440.0);
        // 1440 * 0.9 = 1296
        assert_eq!(calculate_tech_cost(10, 2, -10.0), 1296.0);
    }

    #[test]
    fn test_tech_cost_clamped_to_max_level() {
        // 600 + 60*32 = 2520
        assert_eq!(calculate_tech_cost(defines::MAX_TECH_LEVEL, 0, 0.0), 2520.0);
        assert_eq!(calculate_tech_cost(200, 0, 0.0), 2520.0);
        assert_eq!(calculate_tech_cost(u8::MAX, 1, 0.0), 2772.0);
    }

    #[test]
    fn test_coring_cost_and_time() {
        assert_eq!(calculate_coring_cost(10.0, Terrain::Plains, 0.0), 100.0);
        // mountains +40%
        assert_eq!(calculate_coring_cost(10.0, Terrain::Mountains, 0.0), 140.0);
        assert_eq!(calculate_coring_cost(-4.0, Terrain::Plains, 0.0), 0.0);
        assert_eq!(calculate_coring_time(0.0), 36.0);
        assert_eq!(calculate_coring_time(-25.0), 27.0);
        assert_eq!(calculate_coring_time(-100.0), 1.0);
    }

    #[test]
    fn test_advisor_cost() {
        assert_eq!(calculate_advisor_cost(3, 0.0), 9.0);
        assert_eq!(calculate_advisor_cost(2, 50.0), 6.0);
    }

    #[test]
    fn test_maintenance() {
        let army = UnitComposition::new(10, 2, 5);
        // 2.0 + 1.0 + 3.0
        assert!((calculate_army_maintenance(&army, 0.0) - 6.0).abs() < 1e-12);
        assert_eq!(calculate_fort_maintenance(3), 3.0);
    }

    #[test]
    fn test_trade_income() {
        assert_eq!(calculate_trade_income(10.0, 50.0, 0.0), 5.0);
        assert_eq!(calculate_trade_income(10.0, 50.0, 100.0), 10.0);
    }

    #[test]
    fn test_tax_and_production_scale_with_autonomy() {
        assert_eq!(calculate_tax_income(12.0, 0.0, 0.0), 1.0);
        assert!(calculate_tax_income(12.0, 50.0, 0.0) < 1.0);
        assert_eq!(calculate_tax_income(12.0, 100.0, 0.0), 0.1);
        // 5 * 0.2 * 2.4 / 12 = 0.2
        assert!((calculate_production_income(5.0, 2.4, 0.0, 0.0) - 0.2).abs() < 1e-12);
    }
}
