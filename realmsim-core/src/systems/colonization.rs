//! Colonization system - settler growth, completion and upkeep.

use realmdata::defines::colonial as defines;

/// Settlers gained per month, never below one.
pub fn calculate_colonial_growth(
    base_growth: f64,
    modifier_growth: f64,
    modifier_percent: f64,
    native_hostility: f64,
) -> f64 {
    let growth = (modifier_growth + base_growth) * (1.0 + modifier_percent / 100.0)
        - native_hostility * defines::HOSTILITY_PENALTY;
    growth.max(defines::MIN_GROWTH)
}

/// Months until the colony reaches its settler target.
pub fn calculate_completion_time(settlers: f64, growth: f64) -> f64 {
    let remaining = defines::SETTLERS_TARGET - settlers;
    if remaining <= 0.0 {
        return 0.0;
    }
    (remaining / growth.max(defines::MIN_GROWTH)).ceil()
}

pub fn is_colony_complete(settlers: f64) -> bool {
    settlers >= defines::SETTLERS_TARGET
}

/// Monthly ducats for `active_colonies` at `distance` from the capital.
pub fn calculate_colony_maintenance(active_colonies: u32, distance: f64) -> f64 {
    active_colonies as f64
        * (defines::BASE_MAINTENANCE
            + distance.max(0.0) / 100.0 * defines::MAINTENANCE_PER_100_DISTANCE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_growth() {
        assert_eq!(calculate_colonial_growth(25.0, 25.0, 0.0, 0.0), 50.0);
        assert_eq!(calculate_colonial_growth(25.0, 25.0, 20.0, 0.0), 60.0);
        assert_eq!(calculate_colonial_growth(25.0, 25.0, 0.0, 5.0), 40.0);
        assert_eq!(calculate_colonial_growth(1.0, 0.0, 0.0, 10.0), 1.0);
    }

    #[test]
    fn test_completion_time() {
        assert_eq!(calculate_completion_time(0.0, 50.0), 20.0);
        assert_eq!(calculate_completion_time(990.0, 3.0), 4.0);
        assert_eq!(calculate_completion_time(1000.0, 3.0), 0.0);
        assert_eq!(calculate_completion_time(0.0, 0.0), 1000.0);
        assert!(is_colony_complete(1000.0));
        assert!(!is_colony_complete(999.0));
    }

    #[test]
    fn test_maintenance() {
        assert_eq!(calculate_colony_maintenance(2, 300.0), 16.0);
        assert_eq!(calculate_colony_maintenance(0, 300.0), 0.0);
    }
}
