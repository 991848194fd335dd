//! War score - battle, occupation, war-goal and blockade components.
//!
//! Each component is capped on its own; the total is capped again at 100.

use crate::bounded::clamp_f64;
use realmdata::defines::peace as defines;
use serde::{Deserialize, Serialize};

/// One side's war score, broken down by source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WarScore {
    pub battles: f64,
    pub occupation: f64,
    pub war_goal: f64,
    pub blockade: f64,
}

impl WarScore {
    /// Sum of the clamped components, at most 100.
    pub fn total(&self) -> f64 {
        let sum = clamp_f64(self.battles, 0.0, defines::MAX_BATTLE_SCORE)
            + clamp_f64(self.occupation, 0.0, defines::MAX_OCCUPATION_SCORE)
            + clamp_f64(self.war_goal, 0.0, defines::MAX_WAR_GOAL_SCORE)
            + clamp_f64(self.blockade, 0.0, defines::MAX_BLOCKADE_SCORE);
        sum.min(defines::MAX_TOTAL_SCORE)
    }
}

/// Battle score after one more won battle.
pub fn award_battle_score(current: f64) -> f64 {
    clamp_f64(current + defines::SCORE_PER_BATTLE, 0.0, defines::MAX_BATTLE_SCORE)
}

/// Share of the enemy's development under occupation, as score.
pub fn calculate_occupation_score(occupied_development: f64, enemy_total_development: f64) -> f64 {
    if enemy_total_development <= 0.0 {
        return 0.0;
    }
    let score = occupied_development / enemy_total_development * 100.0;
    clamp_f64(score, 0.0, defines::MAX_OCCUPATION_SCORE)
}

pub fn calculate_war_goal_score(months_held: u32) -> f64 {
    (months_held as f64 * defines::WAR_GOAL_SCORE_PER_MONTH).min(defines::MAX_WAR_GOAL_SCORE)
}

pub fn calculate_blockade_score(blockaded_ports: u32, total_ports: u32) -> f64 {
    if total_ports == 0 {
        return 0.0;
    }
    let ratio = (blockaded_ports.min(total_ports)) as f64 / total_ports as f64;
    ratio * defines::MAX_BLOCKADE_SCORE
}
