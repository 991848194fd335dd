//! Combat system - per-phase damage, morale and battle outcome.
//!
//! Battles alternate fire and shock phases. Each phase both sides deal
//! damage computed from strength, tactics, regiment mix, leader pips,
//! discipline and terrain; casualties then drain morale and a side whose
//! morale falls to half its maximum retreats.

use crate::state::{CombatUnit, Leader, UnitComposition};
use realmdata::defines::combat as defines;
use realmdata::ideas::idea_group;
use realmdata::{IdeaGroupId, Terrain};
use serde::{Deserialize, Serialize};
use tracing::instrument;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CombatPhase {
    Fire,
    Shock,
}

impl CombatPhase {
    /// Phases alternate every three days.
    pub fn for_day(day: u32) -> Self {
        if (day / 3) % 2 == 0 {
            CombatPhase::Fire
        } else {
            CombatPhase::Shock
        }
    }
}

/// Frontline width for a military tech level plus flat idea bonuses.
pub fn calculate_combat_width(mil_tech: u8, ideas: &[IdeaGroupId]) -> u32 {
    let base = defines::WIDTH_BY_TECH
        .iter()
        .rev()
        .find(|(tech, _)| *tech <= mil_tech)
        .map(|(_, width)| *width)
        .unwrap_or(defines::WIDTH_BY_TECH[0].1);
    let bonus: u32 = ideas
        .iter()
        .filter_map(|id| idea_group(*id))
        .map(|g| g.combat_width_bonus())
        .sum();
    base + bonus
}

/// Regiment-weighted damage multiplier for the phase. Empty armies count as 1.0.
fn type_factor(composition: &UnitComposition, phase: CombatPhase) -> f64 {
    let total = composition.total();
    if total == 0 {
        return 1.0;
    }
    let (artillery_mult, cavalry_mult) = match phase {
        CombatPhase::Fire => (defines::ARTILLERY_FIRE_MULTIPLIER, 1.0),
        CombatPhase::Shock => (1.0, defines::CAVALRY_SHOCK_MULTIPLIER),
    };
    let weighted = composition.infantry as f64
        + composition.cavalry as f64 * cavalry_mult
        + composition.artillery as f64 * artillery_mult;
    weighted / total as f64
}

/// Damage one side deals in a phase.
pub fn calculate_unit_damage(
    unit: &CombatUnit,
    phase: CombatPhase,
    leader: Option<&Leader>,
    terrain: Terrain,
    is_attacker: bool,
) -> f64 {
    let base = unit.strength.max(0.0) * unit.tactics.max(0.0);
    let pips = leader
        .map(|l| match phase {
            CombatPhase::Fire => l.fire,
            CombatPhase::Shock => l.shock,
        })
        .unwrap_or(0) as f64;

    let mut damage = base * type_factor(&unit.composition, phase) + pips * defines::LEADER_PIP_DAMAGE;
    damage *= 1.0 + (unit.discipline - defines::BASE_DISCIPLINE) / 100.0;

    let stats = terrain.stats();
    let terrain_value = if is_attacker {
        stats.attacker_modifier
    } else {
        stats.defender_bonus
    };
    damage *= 1.0 + terrain_value / defines::TERRAIN_DIVISOR;

    damage.max(0.0)
}

/// Morale lost from taking `casualties` out of `total_troops`.
pub fn calculate_morale_damage(casualties: f64, total_troops: f64, morale: f64) -> f64 {
    if total_troops <= 0.0 {
        return 0.0;
    }
    (morale * (casualties / total_troops) * defines::MORALE_DAMAGE_FACTOR).max(0.0)
}

/// The only retreat trigger: morale at or below half of maximum.
pub fn will_retreat(current_morale: f64, max_morale: f64) -> bool {
    current_morale <= max_morale * defines::RETREAT_MORALE_RATIO
}

/// Percent damage bonus from frontline slots the enemy cannot contest.
pub fn calculate_flanking_bonus(own_regiments: u32, enemy_regiments: u32, combat_width: u32) -> f64 {
    let own = own_regiments.min(combat_width) as f64;
    let enemy = enemy_regiments.min(combat_width) as f64;
    ((own - enemy) * defines::FLANKING_BONUS_PER_SLOT).clamp(0.0, defines::MAX_FLANKING_BONUS)
}

/// Battle parameters shared by both sides for one phase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleContext {
    pub phase: CombatPhase,
    pub terrain: Terrain,
    pub combat_width: u32,
    #[serde(default)]
    pub attacker_leader: Option<Leader>,
    #[serde(default)]
    pub defender_leader: Option<Leader>,
}

/// Outcome of a phase for one side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SideOutcome {
    pub damage_dealt: f64,
    /// Men lost, never more than the side had.
    pub casualties: f64,
    pub morale_loss: f64,
    pub morale_after: f64,
    pub retreats: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseOutcome {
    pub attacker: SideOutcome,
    pub defender: SideOutcome,
}

/// Resolve one combat phase between two units.
#[instrument(skip_all, name = "combat_phase")]
pub fn resolve_combat_phase(
    attacker: &CombatUnit,
    defender: &CombatUnit,
    ctx: &BattleContext,
) -> PhaseOutcome {
    let attacker_damage = side_damage(attacker, defender, ctx, true);
    let defender_damage = side_damage(defender, attacker, ctx, false);

    let attacker_out = take_losses(attacker, defender_damage, attacker_damage);
    let defender_out = take_losses(defender, attacker_damage, defender_damage);

    log::debug!(
        "{:?} phase: attacker lost {:.0} men (morale {:.2}), defender lost {:.0} men (morale {:.2})",
        ctx.phase,
        attacker_out.casualties,
        attacker_out.morale_after,
        defender_out.casualties,
        defender_out.morale_after
    );

    PhaseOutcome {
        attacker: attacker_out,
        defender: defender_out,
    }
}

fn side_damage(unit: &CombatUnit, enemy: &CombatUnit, ctx: &BattleContext, is_attacker: bool) -> f64 {
    let leader = if is_attacker {
        ctx.attacker_leader.as_ref()
    } else {
        ctx.defender_leader.as_ref()
    };
    let flanking = calculate_flanking_bonus(
        unit.composition.total(),
        enemy.composition.total(),
        ctx.combat_width,
    );
    calculate_unit_damage(unit, ctx.phase, leader, ctx.terrain, is_attacker) * (1.0 + flanking / 100.0)
}

fn take_losses(unit: &CombatUnit, damage_taken: f64, damage_dealt: f64) -> SideOutcome {
    let casualties = (damage_taken * defines::CASUALTIES_PER_DAMAGE).clamp(0.0, unit.strength.max(0.0));
    let morale_loss = calculate_morale_damage(casualties, unit.strength, unit.morale);
    let morale_after = (unit.morale - morale_loss).max(0.0);
    SideOutcome {
        damage_dealt,
        casualties,
        morale_loss,
        morale_after,
        retreats: will_retreat(morale_after, unit.max_morale),
    }
}

/// War score and prestige the victor earns from a battle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BattleRewards {
    pub war_score: f64,
    pub prestige: f64,
}

pub fn calculate_battle_rewards(loser_casualties: f64) -> BattleRewards {
    let war_score = (loser_casualties / defines::CASUALTIES_PER_WARSCORE)
        .clamp(defines::MIN_BATTLE_WARSCORE, defines::MAX_BATTLE_WARSCORE);
    BattleRewards {
        war_score,
        prestige: war_score * defines::PRESTIGE_PER_WARSCORE,
    }
}
