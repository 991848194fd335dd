//! Siege system - progress per phase and the siege dice roll.
//!
//! A siege phase succeeds when
//! `roll + progress + min(artillery, 5) + general siege + blockade - fort_level >= 20`.
//! A natural 14 breaches the walls outright; a natural 1 brings disease.

use crate::state::Leader;
use realmdata::defines::siege as defines;
use serde::{Deserialize, Serialize};

/// Progress gained this phase, never below one.
pub fn calculate_siege_progress(troops: f64, artillery: u32, fort_level: u32) -> u32 {
    let raw = (troops.max(0.0) / defines::TROOPS_PER_PROGRESS
        + artillery as f64 * defines::ARTILLERY_PROGRESS)
        .floor()
        - fort_level as f64 * defines::FORT_LEVEL_PENALTY;
    if raw < defines::MIN_PROGRESS as f64 {
        defines::MIN_PROGRESS
    } else {
        raw as u32
    }
}

/// Best siege pip among the besieging generals, 0 without one.
pub fn best_siege_general(generals: &[Leader]) -> u8 {
    generals.iter().map(|g| g.siege).max().unwrap_or(0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SiegeRollOutcome {
    /// Fort falls.
    Captured,
    /// Natural breach; fort falls.
    WallsBreached,
    /// Phase fails and besiegers take disease losses.
    Disease,
    /// Phase fails.
    Holds,
}

impl SiegeRollOutcome {
    pub fn is_success(self) -> bool {
        matches!(self, SiegeRollOutcome::Captured | SiegeRollOutcome::WallsBreached)
    }
}

/// Resolve one siege phase for a d14 `roll`.
///
/// `general_siege` is the siege pip of the best besieging general.
pub fn resolve_siege_roll(
    roll: u8,
    progress: u32,
    artillery: u32,
    general_siege: u8,
    fort_level: u32,
    blockaded: bool,
) -> SiegeRollOutcome {
    if roll == defines::WALL_BREACH_ROLL {
        log::debug!("Siege roll {}: walls breached", roll);
        return SiegeRollOutcome::WallsBreached;
    }
    let blockade = if blockaded { defines::BLOCKADE_BONUS } else { 0 };
    let general = i64::from(general_siege) * defines::GENERAL_SIEGE_PIP_BONUS;
    let artillery = artillery.min(defines::ARTILLERY_BONUS_MAX);
    // i64 so large progress or fort values cannot wrap.
    let total = i64::from(roll) + i64::from(progress) + i64::from(artillery) + general + blockade
        - i64::from(fort_level);
    log::trace!(
        "Siege roll {} + progress {} + artillery {} + general {} + blockade {} - fort {} = {}",
        roll,
        progress,
        artillery,
        general,
        blockade,
        fort_level,
        total
    );
    if total >= defines::SUCCESS_THRESHOLD {
        SiegeRollOutcome::Captured
    } else if roll == defines::DISEASE_OUTBREAK_ROLL {
        SiegeRollOutcome::Disease
    } else {
        SiegeRollOutcome::Holds
    }
}
