//! Development system - development cost, building slots and supply.

use crate::systems::balance::institution_penalty_multiplier;
use crate::systems::economy::{apply_modifier, round_up};
use realmdata::defines::development as defines;
use realmdata::{Climate, Terrain};

pub use crate::state::{DevType, Development};

/// Terrain multiplier on development and coring costs.
pub fn terrain_cost_multiplier(terrain: Terrain) -> f64 {
    1.0 + terrain.stats().development_cost / 100.0
}

pub fn climate_cost_multiplier(climate: Climate) -> f64 {
    1.0 + climate.development_cost() / 100.0
}

/// Monarch power to add one point of development.
///
/// `(50 + 2 * max(0, dev - 10))`, then terrain, climate, institution and
/// generic modifiers in that order, rounded up.
pub fn calculate_development_cost(
    current_dev: f64,
    terrain: Terrain,
    climate: Climate,
    missing_institutions: u32,
    modifiers: f64,
) -> f64 {
    let above = (current_dev - defines::COST_THRESHOLD).max(0.0);
    let mut cost = defines::BASE_COST + defines::COST_PER_DEV_ABOVE_THRESHOLD * above;
    cost *= terrain_cost_multiplier(terrain);
    cost *= climate_cost_multiplier(climate);
    cost *= institution_penalty_multiplier(missing_institutions);
    round_up(apply_modifier(cost, modifiers)).max(0.0)
}

pub fn calculate_building_slots(development: f64) -> u32 {
    defines::BASE_BUILDING_SLOTS + (development.max(0.0) / defines::DEV_PER_BUILDING_SLOT).floor() as u32
}

/// Regiments a province can feed.
pub fn calculate_supply_limit(development: f64, terrain: Terrain) -> f64 {
    (development * (1.0 + terrain.stats().supply_modifier / 100.0))
        .floor()
        .max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_cost() {
        assert_eq!(calculate_development_cost(3.0, Terrain::Plains, Climate::Temperate, 0, 0.0), 50.0);
        assert_eq!(calculate_development_cost(10.0, Terrain::Plains, Climate::Temperate, 0, 0.0), 50.0);
        assert_eq!(calculate_development_cost(20.0, Terrain::Plains, Climate::Temperate, 0, 0.0), 70.0);
    }

    #[test]
    fn test_multipliers_stack() {
        // 50 * 1.25 (hills) * 1.25 (tropical) = 78.125 -> 79
        assert_eq!(calculate_development_cost(5.0, Terrain::Hills, Climate::Tropical, 0, 0.0), 79.0);
        // 50 * 1.1 (one institution) = 55
        assert_eq!(calculate_development_cost(5.0, Terrain::Plains, Climate::Temperate, 1, 0.0), 55.0);
        assert_eq!(calculate_development_cost(5.0, Terrain::Plains, Climate::Temperate, 0, -20.0), 40.0);
    }

    #[test]
    fn test_cost_never_negative() {
        assert_eq!(calculate_development_cost(5.0, Terrain::Plains, Climate::Temperate, 0, -300.0), 0.0);
    }

    #[test]
    fn test_building_slots() {
        assert_eq!(calculate_building_slots(3.0), 2);
        assert_eq!(calculate_building_slots(10.0), 3);
        assert_eq!(calculate_building_slots(25.0), 4);
    }

    #[test]
    fn test_supply_limit() {
        assert_eq!(calculate_supply_limit(10.0, Terrain::Plains), 10.0);
        assert_eq!(calculate_supply_limit(10.0, Terrain::Farmlands), 12.0);
        assert_eq!(calculate_supply_limit(10.0, Terrain::Mountains), 7.0);
    }
}
