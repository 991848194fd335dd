//! Typed modifier keys shared by ideas and policies.

use serde::Serialize;

keyed_enum! {
    /// What a modifier changes. Values are additive percentages unless noted.
    pub enum ModifierKey {
        /// Flat combat width.
        CombatWidth => "combat_width",
        Discipline => "discipline",
        LandMorale => "land_morale",
        /// Flat pips added to leaders.
        LeaderFire => "leader_fire",
        LeaderShock => "leader_shock",
        SiegeAbility => "siege_ability",
        TaxModifier => "tax_modifier",
        ProductionEfficiency => "production_efficiency",
        TradeEfficiency => "trade_efficiency",
        ManpowerModifier => "manpower_modifier",
        ManpowerRecovery => "manpower_recovery",
        LandMaintenance => "land_maintenance",
        DevelopmentCost => "development_cost",
        CoreCreation => "core_creation",
        StabilityCost => "stability_cost",
        TechnologyCost => "technology_cost",
        AdvisorCost => "advisor_cost",
        InterestRate => "interest_rate",
        GlobalUnrest => "global_unrest",
        /// Flat settlers per month.
        ColonistGrowth => "colonist_growth",
        /// Flat reputation.
        DiplomaticReputation => "diplomatic_reputation",
        AggressiveExpansion => "aggressive_expansion",
        WarExhaustion => "war_exhaustion",
        LibertyDesire => "liberty_desire",
        AutonomyChange => "autonomy_change",
    }
}

/// A single modifier entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Modifier {
    pub key: ModifierKey,
    pub value: f64,
}

pub const fn modifier(key: ModifierKey, value: f64) -> Modifier {
    Modifier { key, value }
}

/// Sum every modifier with `key`.
pub fn sum_modifiers<'a, I>(modifiers: I, key: ModifierKey) -> f64
where
    I: IntoIterator<Item = &'a Modifier>,
{
    modifiers
        .into_iter()
        .filter(|m| m.key == key)
        .map(|m| m.value)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_filters_by_key() {
        let mods = [
            modifier(ModifierKey::Discipline, 5.0),
            modifier(ModifierKey::CombatWidth, 1.0),
            modifier(ModifierKey::Discipline, 2.5),
        ];
        assert_eq!(sum_modifiers(&mods, ModifierKey::Discipline), 7.5);
        assert_eq!(sum_modifiers(&mods, ModifierKey::CombatWidth), 1.0);
        assert_eq!(sum_modifiers(&mods, ModifierKey::TaxModifier), 0.0);
    }
}
