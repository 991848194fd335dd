//! Peace system - demand pricing, acceptance and war exhaustion.

use crate::bounded::clamp_f64;
use crate::systems::economy::{apply_modifier, round_up};
use realmdata::defines::peace as defines;
use realmdata::{PeaceDemandDef, PeaceDemandKind, ScalingFactor};
use serde::{Deserialize, Serialize};
use tracing::instrument;

fn scaled_cost(base: f64, scaling: ScalingFactor, value: f64, modifiers: f64) -> f64 {
    let scaled = match scaling {
        ScalingFactor::None => base,
        ScalingFactor::Development => base * value,
        ScalingFactor::Treasury | ScalingFactor::Income => {
            base * value / defines::VALUE_SCALING_DIVISOR
        }
    };
    round_up(apply_modifier(scaled, modifiers)).max(0.0)
}

/// War score a demand costs. `value` is the development, ducats or income
/// the demand scales with; ignored for flat demands.
pub fn calculate_demand_warscore(demand: &PeaceDemandDef, value: f64, modifiers: f64) -> f64 {
    scaled_cost(demand.base_warscore, demand.scaling, value, modifiers)
}

/// Aggressive expansion a demand generates.
pub fn calculate_demand_ae(demand: &PeaceDemandDef, value: f64, modifiers: f64) -> f64 {
    scaled_cost(demand.base_ae, demand.scaling, value, modifiers)
}

/// Chance (0..=100) the enemy accepts a deal of the given cost.
pub fn calculate_acceptance_chance(
    warscore: f64,
    demand_cost: f64,
    war_exhaustion: f64,
    relations: f64,
) -> f64 {
    let chance = warscore - demand_cost
        + defines::WAR_EXHAUSTION_WEIGHT * war_exhaustion
        + relations / defines::RELATIONS_DIVISOR;
    clamp_f64(chance, 0.0, 100.0)
}

pub fn can_enforce_peace(warscore: f64, total_cost: f64) -> bool {
    warscore >= total_cost
}

/// One line of a peace offer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeaceDemand {
    pub kind: PeaceDemandKind,
    /// Development, ducats or income the demand scales with.
    #[serde(default)]
    pub value: f64,
    #[serde(default)]
    pub modifiers: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeaceEvaluation {
    pub total_warscore: f64,
    pub total_ae: f64,
    pub acceptance: f64,
    pub enforceable: bool,
}

/// Price a whole offer and score it.
#[instrument(skip_all, name = "evaluate_peace")]
pub fn evaluate_peace_deal(
    warscore: f64,
    demands: &[PeaceDemand],
    war_exhaustion: f64,
    relations: f64,
) -> PeaceEvaluation {
    let (total_warscore, total_ae) = demands.iter().fold((0.0, 0.0), |(ws, ae), d| {
        let def = d.kind.def();
        (
            ws + calculate_demand_warscore(def, d.value, d.modifiers),
            ae + calculate_demand_ae(def, d.value, d.modifiers),
        )
    });
    let evaluation = PeaceEvaluation {
        total_warscore,
        total_ae,
        acceptance: calculate_acceptance_chance(warscore, total_warscore, war_exhaustion, relations),
        enforceable: can_enforce_peace(warscore, total_warscore),
    };
    log::debug!(
        "peace deal: {} demands cost {} ws, acceptance {:.1}",
        demands.len(),
        evaluation.total_warscore,
        evaluation.acceptance
    );
    evaluation
}

/// AE left after `months` of decay.
pub fn decay_aggressive_expansion(ae: f64, months: u32) -> f64 {
    (ae - defines::AE_DECAY_PER_MONTH * months as f64).max(0.0)
}

/// War exhaustion from time at war, lost battles and occupied territory (percent).
pub fn calculate_war_exhaustion(months_at_war: u32, battles_lost: u32, occupied_percent: f64) -> f64 {
    let exhaustion = defines::EXHAUSTION_PER_MONTH * months_at_war as f64
        + defines::EXHAUSTION_PER_BATTLE_LOST * battles_lost as f64
        + occupied_percent.max(0.0) / defines::OCCUPATION_EXHAUSTION_DIVISOR;
    exhaustion.min(defines::MAX_WAR_EXHAUSTION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_development_scaled_demand() {
        let cede = PeaceDemandKind::CedeProvince.def();
        assert_eq!(calculate_demand_warscore(cede, 10.0, 0.0), 10.0);
        assert_eq!(calculate_demand_ae(cede, 10.0, 0.0), 10.0);
        assert_eq!(calculate_demand_warscore(cede, 10.0, 10.0), 11.0);
    }

    #[test]
    fn test_flat_and_treasury_demands() {
        let humiliate = PeaceDemandKind::Humiliate.def();
        assert_eq!(calculate_demand_warscore(humiliate, 999.0, 0.0), 20.0);
        let gold = PeaceDemandKind::TakeGold.def();
        // 10 * 250 / 100 = 25
        assert_eq!(calculate_demand_warscore(gold, 250.0, 0.0), 25.0);
        assert_eq!(calculate_demand_warscore(gold, 15.0, 0.0), 2.0);
        let white = PeaceDemandKind::WhitePeace.def();
        assert_eq!(calculate_demand_warscore(white, 0.0, 0.0), 0.0);
    }

    #[test]
    fn test_demand_cost_never_negative() {
        let cede = PeaceDemandKind::CedeProvince.def();
        assert_eq!(calculate_demand_warscore(cede, 10.0, -200.0), 0.0);
    }

    #[test]
    fn test_acceptance_chance() {
        assert_eq!(calculate_acceptance_chance(50.0, 30.0, 5.0, 100.0), 40.0);
        assert_eq!(calculate_acceptance_chance(10.0, 60.0, 0.0, 0.0), 0.0);
        assert_eq!(calculate_acceptance_chance(100.0, 0.0, 20.0, 200.0), 100.0);
    }

    #[test]
    fn test_enforce_requires_enough_score() {
        assert!(can_enforce_peace(30.0, 30.0));
        assert!(!can_enforce_peace(29.0, 30.0));
    }

    #[test]
    fn test_evaluate_deal() {
        let demands = vec![
            PeaceDemand {
                kind: PeaceDemandKind::CedeProvince,
                value: 12.0,
                modifiers: 0.0,
            },
            PeaceDemand {
                kind: PeaceDemandKind::WarReparations,
                value: 0.0,
                modifiers: 0.0,
            },
        ];
        let eval = evaluate_peace_deal(40.0, &demands, 2.0, 0.0);
        assert_eq!(eval.total_warscore, 22.0);
        assert_eq!(eval.total_ae, 12.0);
        assert_eq!(eval.acceptance, 22.0);
        assert!(eval.enforceable);
    }

    #[test]
    fn test_ae_decay() {
        assert_eq!(decay_aggressive_expansion(10.0, 3), 4.0);
        assert_eq!(decay_aggressive_expansion(10.0, 12), 0.0);
    }

    #[test]
    fn test_war_exhaustion() {
        // 0.05 * 20 + 0.5 * 2 + 40 / 20
        assert_eq!(calculate_war_exhaustion(20, 2, 40.0), 4.0);
        assert_eq!(calculate_war_exhaustion(1000, 50, 100.0), 20.0);
    }
}
