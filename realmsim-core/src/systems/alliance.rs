//! Alliance system - acceptance scoring for alliance offers and calls to arms.
//!
//! Every scorer returns an itemised [`Acceptance`]: the reasons always sum to
//! the final chance, so a tooltip can list them verbatim.

use realmdata::ai_personalities::{ai_personality, AiPersonalityId};
use realmdata::defines::diplomacy as defines;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One line of an acceptance breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcceptanceReason {
    pub description: String,
    pub value: f64,
}

/// Chance (0..=100) that the AI agrees, and why.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Acceptance {
    pub chance: f64,
    pub reasons: Vec<AcceptanceReason>,
}

impl Acceptance {
    /// Sum the contributions and clamp. A clamp adds a "Capped" or "Floored"
    /// line so the reasons still add up to `chance`.
    fn from_contributions(contributions: Vec<(&str, f64)>) -> Self {
        let mut reasons: Vec<AcceptanceReason> = contributions
            .into_iter()
            .filter(|(_, value)| *value != 0.0)
            .map(|(description, value)| AcceptanceReason {
                description: description.to_string(),
                value,
            })
            .collect();

        let sum: f64 = reasons.iter().map(|r| r.value).sum();
        let chance = sum.clamp(0.0, 100.0);
        if sum > 100.0 {
            reasons.push(AcceptanceReason {
                description: "Capped".to_string(),
                value: chance - sum,
            });
        } else if sum < 0.0 {
            reasons.push(AcceptanceReason {
                description: "Floored".to_string(),
                value: chance - sum,
            });
        }

        Self { chance, reasons }
    }

    pub fn accepts(&self) -> bool {
        self.chance >= 50.0
    }
}

/// Inputs for an alliance offer, seen from the receiving nation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllianceRequest {
    pub relations: f64,
    pub diplomatic_reputation: f64,
    /// Sender's power minus receiver's, in percentage points.
    pub power_difference: f64,
    pub same_religion: bool,
    pub bordering_common_enemy: bool,
    pub is_rival: bool,
    /// Personality of the receiving AI, if any.
    pub personality: Option<AiPersonalityId>,
}

#[instrument(skip_all, name = "alliance_acceptance")]
pub fn calculate_alliance_acceptance(request: &AllianceRequest) -> Acceptance {
    let power = (request.power_difference * defines::POWER_WEIGHT)
        .clamp(-defines::POWER_CAP, defines::POWER_CAP);
    let personality = request
        .personality
        .and_then(ai_personality)
        .map(|p| p.alliance_bias)
        .unwrap_or(0.0);

    let acceptance = Acceptance::from_contributions(vec![
        ("Relations", request.relations * defines::RELATIONS_WEIGHT),
        (
            "Diplomatic reputation",
            request.diplomatic_reputation * defines::REPUTATION_WEIGHT,
        ),
        ("Relative power", power),
        (
            "Same religion",
            if request.same_religion { defines::SAME_RELIGION_BONUS } else { 0.0 },
        ),
        (
            "Common enemy",
            if request.bordering_common_enemy { defines::COMMON_ENEMY_BONUS } else { 0.0 },
        ),
        ("Rival", if request.is_rival { defines::RIVAL_PENALTY } else { 0.0 }),
        ("AI personality", personality),
    ]);
    log::debug!("alliance acceptance {:.1}", acceptance.chance);
    acceptance
}

/// Inputs for a call to arms, seen from the called ally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CallRequest {
    pub trust: f64,
    pub relations: f64,
    pub in_debt: bool,
    pub stability: i32,
    pub already_at_war: bool,
    /// Enemy strength divided by the caller's side. Above 1 the enemy is stronger.
    pub enemy_strength_ratio: f64,
}

impl Default for CallRequest {
    fn default() -> Self {
        Self {
            trust: defines::NEUTRAL_TRUST,
            relations: 0.0,
            in_debt: false,
            stability: 0,
            already_at_war: false,
            enemy_strength_ratio: 1.0,
        }
    }
}

/// Trust term: rewarded gently above neutral, punished hard below it.
fn trust_contribution(trust: f64) -> f64 {
    let delta = trust - defines::NEUTRAL_TRUST;
    if delta >= 0.0 {
        delta * defines::TRUST_ABOVE_WEIGHT
    } else {
        delta * defines::TRUST_BELOW_WEIGHT
    }
}

#[instrument(skip_all, name = "call_acceptance")]
pub fn calculate_call_acceptance(request: &CallRequest) -> Acceptance {
    let stability = if request.stability < 0 {
        request.stability as f64 * defines::NEGATIVE_STABILITY_PENALTY
    } else {
        0.0
    };
    let enemy = if request.enemy_strength_ratio > 1.0 {
        -(defines::ENEMY_STRENGTH_WEIGHT * (request.enemy_strength_ratio - 1.0))
            .min(defines::ENEMY_STRENGTH_CAP)
    } else {
        0.0
    };

    let acceptance = Acceptance::from_contributions(vec![
        ("Base", defines::CALL_BASE),
        ("Trust", trust_contribution(request.trust)),
        ("Relations", request.relations / defines::CALL_RELATIONS_DIVISOR),
        ("In debt", if request.in_debt { defines::DEBT_PENALTY } else { 0.0 }),
        ("Negative stability", stability),
        (
            "Already at war",
            if request.already_at_war { defines::ALREADY_AT_WAR_PENALTY } else { 0.0 },
        ),
        ("Stronger enemy", enemy),
    ]);
    log::debug!("call acceptance {:.1}", acceptance.chance);
    acceptance
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn reason<'a>(a: &'a Acceptance, description: &str) -> Option<&'a AcceptanceReason> {
        a.reasons.iter().find(|r| r.description == description)
    }

    fn reason_sum(a: &Acceptance) -> f64 {
        a.reasons.iter().map(|r| r.value).sum()
    }

    #[test]
    fn test_friendly_alliance_offer() {
        let request = AllianceRequest {
            relations: 100.0,
            same_religion: true,
            bordering_common_enemy: true,
            ..Default::default()
        };
        let a = calculate_alliance_acceptance(&request);
        assert_eq!(a.chance, 80.0);
        assert_eq!(reason_sum(&a), 80.0);
        assert_eq!(a.reasons.len(), 3);
        assert!(reason(&a, "Diplomatic reputation").is_none());
        assert!(a.accepts());
    }

    #[test]
    fn test_rival_is_floored() {
        let request = AllianceRequest {
            relations: 50.0,
            is_rival: true,
            ..Default::default()
        };
        let a = calculate_alliance_acceptance(&request);
        assert_eq!(a.chance, 0.0);
        assert_eq!(reason(&a, "Floored").map(|r| r.value), Some(75.0));
        assert_eq!(reason_sum(&a), 0.0);
    }

    #[test]
    fn test_high_scores_are_capped() {
        let request = AllianceRequest {
            relations: 200.0,
            diplomatic_reputation: 5.0,
            ..Default::default()
        };
        let a = calculate_alliance_acceptance(&request);
        assert_eq!(a.chance, 100.0);
        assert_eq!(reason(&a, "Capped").map(|r| r.value), Some(-25.0));
    }

    #[test]
    fn test_power_term_is_clamped() {
        let request = AllianceRequest {
            power_difference: 100.0,
            ..Default::default()
        };
        let a = calculate_alliance_acceptance(&request);
        assert_eq!(a.chance, 20.0);
        let request = AllianceRequest {
            power_difference: -100.0,
            relations: 100.0,
            ..Default::default()
        };
        assert_eq!(calculate_alliance_acceptance(&request).chance, 30.0);
    }

    #[test]
    fn test_personality_bias() {
        let request = AllianceRequest {
            relations: 100.0,
            personality: Some(AiPersonalityId::Diplomat),
            ..Default::default()
        };
        let a = calculate_alliance_acceptance(&request);
        assert_eq!(reason(&a, "AI personality").map(|r| r.value), Some(15.0));
        assert_eq!(a.chance, 65.0);
    }

    #[test]
    fn test_neutral_call_is_coin_flip() {
        let a = calculate_call_acceptance(&CallRequest::default());
        assert_eq!(a.chance, 50.0);
        assert_eq!(a.reasons.len(), 1);
    }

    #[test]
    fn test_trust_is_asymmetric() {
        let high = calculate_call_acceptance(&CallRequest {
            trust: 70.0,
            ..Default::default()
        });
        assert_eq!(high.chance, 60.0);
        let low = calculate_call_acceptance(&CallRequest {
            trust: 40.0,
            ..Default::default()
        });
        assert_eq!(low.chance, 30.0);
    }

    #[test]
    fn test_call_penalties() {
        let a = calculate_call_acceptance(&CallRequest {
            trust: 80.0,
            relations: 100.0,
            in_debt: true,
            stability: -2,
            ..Default::default()
        });
        // 50 + 15 + 10 - 25 - 20
        assert_eq!(a.chance, 30.0);
        assert_eq!(reason(&a, "Negative stability").map(|r| r.value), Some(-20.0));
    }

    #[test]
    fn test_stronger_enemy_penalty_is_capped() {
        let a = calculate_call_acceptance(&CallRequest {
            enemy_strength_ratio: 1.5,
            ..Default::default()
        });
        assert_eq!(a.chance, 40.0);
        let a = calculate_call_acceptance(&CallRequest {
            enemy_strength_ratio: 10.0,
            ..Default::default()
        });
        assert_eq!(a.chance, 20.0);
        let a = calculate_call_acceptance(&CallRequest {
            already_at_war: true,
            enemy_strength_ratio: 10.0,
            trust: 0.0,
            ..Default::default()
        });
        assert_eq!(a.chance, 0.0);
        assert!(reason(&a, "Floored").is_some());
    }

    proptest! {
        #[test]
        fn prop_alliance_reasons_sum_to_chance(
            relations in -200.0..200.0f64,
            reputation in -3.0..8.0f64,
            power in -100.0..100.0f64,
            same_religion: bool,
            enemy: bool,
            rival: bool,
        ) {
            let a = calculate_alliance_acceptance(&AllianceRequest {
                relations,
                diplomatic_reputation: reputation,
                power_difference: power,
                same_religion,
                bordering_common_enemy: enemy,
                is_rival: rival,
                personality: None,
            });
            prop_assert!((0.0..=100.0).contains(&a.chance));
            prop_assert!((reason_sum(&a) - a.chance).abs() < 1e-9);
            prop_assert!(a.reasons.iter().all(|r| r.value != 0.0));
        }

        #[test]
        fn prop_call_reasons_sum_to_chance(
            trust in -100.0..100.0f64,
            relations in -200.0..200.0f64,
            in_debt: bool,
            stability in -3..=3i32,
            at_war: bool,
            ratio in 0.0..5.0f64,
        ) {
            let a = calculate_call_acceptance(&CallRequest {
                trust,
                relations,
                in_debt,
                stability,
                already_at_war: at_war,
                enemy_strength_ratio: ratio,
            });
            prop_assert!((0.0..=100.0).contains(&a.chance));
            prop_assert!((reason_sum(&a) - a.chance).abs() < 1e-9);
        }
    }
}
