//! Scenario evaluation and text rendering.

use crate::loader::{BattleScenario, ProvinceScenario, RebelScenario, Scenario, SubjectScenario};
use anyhow::{anyhow, Result};
use realmdata::{provinces, Climate, RebelKind, Terrain};
use realmsim_core::achievements::{self, ACHIEVEMENTS};
use realmsim_core::notifications::{
    self, Notification, NotificationCategory, NotificationKind, Priority,
};
use realmsim_core::save::{self, SaveGame};
use realmsim_core::state::{GameDate, Province};
use realmsim_core::systems::alliance::{calculate_alliance_acceptance, calculate_call_acceptance};
use realmsim_core::systems::autonomy::calculate_minimum_autonomy;
use realmsim_core::systems::balance::{calculate_coring_cost, calculate_tax_income};
use realmsim_core::systems::combat::{
    calculate_battle_rewards, calculate_combat_width, resolve_combat_phase, BattleContext,
    BattleRewards, CombatPhase,
};
use realmsim_core::systems::development::{
    calculate_building_slots, calculate_development_cost, calculate_supply_limit,
};
use realmsim_core::systems::economy::EconomicHealth;
use realmsim_core::systems::peace::{evaluate_peace_deal, PeaceEvaluation};
use realmsim_core::systems::rebels::{
    calculate_rebel_army_size, calculate_uprising_progress, determine_rebel_type_seeded, will_rise,
};
use realmsim_core::systems::subjects::{
    calculate_annexation_cost, calculate_liberty_desire, calculate_subject_income,
    can_start_annexation, is_disloyal,
};
use realmsim_core::{Acceptance, BudgetSummary, Memo, RulesConfig};
use serde::Serialize;
use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Attacker,
    Defender,
}

#[derive(Debug, Clone, Serialize)]
pub struct BattleReport {
    pub combat_width: u32,
    pub days_fought: u32,
    pub attacker_casualties: f64,
    pub defender_casualties: f64,
    pub attacker_morale: f64,
    pub defender_morale: f64,
    pub winner: Option<Side>,
    pub rewards: Option<BattleRewards>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PeaceReport {
    pub war_score: f64,
    #[serde(flatten)]
    pub evaluation: PeaceEvaluation,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProvinceReport {
    pub id: u32,
    pub name: String,
    pub development: f64,
    pub development_cost: f64,
    pub building_slots: u32,
    pub supply_limit: f64,
    pub monthly_tax: f64,
    pub coring_cost: f64,
    pub minimum_autonomy: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubjectReport {
    pub liberty_desire: f64,
    pub disloyal: bool,
    pub can_annex: bool,
    pub annexation_cost: f64,
    pub income_to_overlord: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RebelReport {
    pub faction: RebelKind,
    pub army_size: u32,
    pub progress: f64,
    pub rises: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct AchievementReport {
    pub unlocked: Vec<&'static str>,
    pub completion: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SaveReport {
    pub name: String,
    pub checksum_valid: bool,
    pub play_time: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Report {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub battle: Option<BattleReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<BudgetSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peace: Option<PeaceReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alliance: Option<Acceptance>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_to_arms: Option<Acceptance>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub provinces: Vec<ProvinceReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<SubjectReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rebels: Option<RebelReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub achievements: Option<AchievementReport>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub saves: Vec<SaveReport>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notifications: Vec<Notification>,
}

pub fn build_report(scenario: &Scenario, config: &RulesConfig) -> Result<Report> {
    let mut report = Report {
        battle: scenario.battle.as_ref().map(run_battle),
        budget: scenario.budget.as_ref().map(|b| b.summary()),
        peace: scenario.peace.as_ref().map(|p| {
            let war_score = p.war_score.total();
            PeaceReport {
                war_score,
                evaluation: evaluate_peace_deal(war_score, &p.demands, p.war_exhaustion, p.relations),
            }
        }),
        alliance: scenario.alliance.as_ref().map(calculate_alliance_acceptance),
        call_to_arms: scenario.call_to_arms.as_ref().map(calculate_call_acceptance),
        provinces: evaluate_provinces(&scenario.provinces, config)?,
        subject: scenario.subject.as_ref().map(evaluate_subject),
        rebels: scenario
            .rebels
            .as_ref()
            .map(|r| evaluate_rebels(r, config.rebel_seed)),
        achievements: scenario.stats.as_ref().map(|stats| {
            let date = GameDate::default();
            let progress = achievements::update_progress(ACHIEVEMENTS, &[], stats, date);
            AchievementReport {
                unlocked: achievements::evaluate_achievements(ACHIEVEMENTS, &[], stats)
                    .iter()
                    .map(|a| a.id)
                    .collect(),
                completion: achievements::completion_percentage(&progress, ACHIEVEMENTS.len()),
            }
        }),
        saves: evaluate_saves(&scenario.saves, config.autosaves_to_keep),
        notifications: Vec::new(),
    };
    report.notifications = collect_notifications(&report, config.max_notifications);
    Ok(report)
}

fn run_battle(battle: &BattleScenario) -> BattleReport {
    let combat_width = calculate_combat_width(battle.military_tech, &battle.ideas);
    let mut attacker = battle.attacker.clone();
    let mut defender = battle.defender.clone();
    let mut attacker_casualties = 0.0;
    let mut defender_casualties = 0.0;
    let mut winner = None;
    let mut days_fought = 0;

    for day in 0..battle.days {
        days_fought = day + 1;
        let ctx = BattleContext {
            phase: CombatPhase::for_day(day),
            terrain: battle.terrain,
            combat_width,
            attacker_leader: battle.attacker_leader,
            defender_leader: battle.defender_leader,
        };
        let outcome = resolve_combat_phase(&attacker, &defender, &ctx);

        attacker.strength -= outcome.attacker.casualties;
        attacker.morale = outcome.attacker.morale_after;
        defender.strength -= outcome.defender.casualties;
        defender.morale = outcome.defender.morale_after;
        attacker_casualties += outcome.attacker.casualties;
        defender_casualties += outcome.defender.casualties;

        match (outcome.attacker.retreats, outcome.defender.retreats) {
            (false, true) => {
                winner = Some(Side::Attacker);
                break;
            }
            (true, false) => {
                winner = Some(Side::Defender);
                break;
            }
            (true, true) => break,
            (false, false) => {}
        }
    }

    let rewards = winner.map(|side| {
        calculate_battle_rewards(match side {
            Side::Attacker => defender_casualties,
            Side::Defender => attacker_casualties,
        })
    });
    log::info!("Battle ended after {} days, winner {:?}", days_fought, winner);

    BattleReport {
        combat_width,
        days_fought,
        attacker_casualties,
        defender_casualties,
        attacker_morale: attacker.morale,
        defender_morale: defender.morale,
        winner,
        rewards,
    }
}

type DevCostArgs = (f64, Terrain, Climate, u32, f64);

fn evaluate_provinces(
    scenarios: &[ProvinceScenario],
    config: &RulesConfig,
) -> Result<Vec<ProvinceReport>> {
    let mut dev_cost = Memo::with_enabled(
        |(dev, terrain, climate, missing, modifiers): &DevCostArgs| {
            calculate_development_cost(*dev, *terrain, *climate, *missing, *modifiers)
        },
        config.memoize,
    );

    let mut reports = Vec::with_capacity(scenarios.len());
    for s in scenarios {
        let def = provinces::province(s.id).ok_or_else(|| anyhow!("Unknown province id {}", s.id))?;
        let mut province = Province::from(def);
        if let Some(autonomy) = s.autonomy {
            province.autonomy = autonomy;
        }
        let development = province.development.total();
        reports.push(ProvinceReport {
            id: province.id,
            name: province.name.clone(),
            development,
            development_cost: dev_cost.get(&(
                development,
                province.terrain,
                province.climate,
                s.missing_institutions,
                s.development_cost_modifier,
            )),
            building_slots: calculate_building_slots(development),
            supply_limit: calculate_supply_limit(development, province.terrain),
            monthly_tax: calculate_tax_income(province.development.tax, province.autonomy, s.tax_modifier),
            coring_cost: calculate_coring_cost(development, province.terrain, 0.0),
            minimum_autonomy: calculate_minimum_autonomy(s.autonomy_factors),
        });
    }
    if config.memoize {
        log::debug!("development cost memo: {} hits, {} misses", dev_cost.hits(), dev_cost.misses());
    }
    Ok(reports)
}

fn evaluate_subject(s: &SubjectScenario) -> SubjectReport {
    let liberty_desire = calculate_liberty_desire(
        s.kind,
        s.subject_development,
        s.overlord_development,
        &s.modifiers,
    );
    SubjectReport {
        liberty_desire,
        disloyal: is_disloyal(liberty_desire),
        can_annex: can_start_annexation(s.kind, s.years_as_subject, liberty_desire, s.relations),
        annexation_cost: calculate_annexation_cost(s.subject_development, 0.0),
        income_to_overlord: calculate_subject_income(s.kind, s.monthly_income),
    }
}

fn evaluate_rebels(r: &RebelScenario, seed: u64) -> RebelReport {
    let progress = calculate_uprising_progress(r.progress, r.unrest);
    RebelReport {
        faction: determine_rebel_type_seeded(&r.context, seed),
        army_size: calculate_rebel_army_size(r.total_development, r.unrest),
        progress,
        rises: will_rise(progress),
    }
}

fn evaluate_saves(saves: &[SaveGame], keep: usize) -> Vec<SaveReport> {
    save::prune_autosaves(saves.to_vec(), keep)
        .iter()
        .map(|s| SaveReport {
            name: s.name.clone(),
            checksum_valid: save::verify_checksum(s),
            play_time: save::format_play_time(s.play_time_seconds),
        })
        .collect()
}

fn collect_notifications(report: &Report, max: usize) -> Vec<Notification> {
    let date = GameDate::default();
    let mut notes = Vec::new();
    let mut push = |kind, category, priority, title: &str, message: String| {
        notes.push(Notification {
            id: notes.len() as u64 + 1,
            kind,
            category,
            priority,
            title: title.to_string(),
            message,
            date,
            read: false,
            actions: Vec::new(),
        });
    };

    if let Some(battle) = &report.battle {
        if let Some(winner) = battle.winner {
            push(
                NotificationKind::Info,
                NotificationCategory::War,
                Priority::Normal,
                "Battle decided",
                format!("The {winner:?} held the field after {} days.", battle.days_fought),
            );
        }
    }
    if let Some(budget) = &report.budget {
        if matches!(budget.health, EconomicHealth::Critical | EconomicHealth::Poor) {
            push(
                NotificationKind::Warning,
                NotificationCategory::Economy,
                Priority::High,
                "Finances in trouble",
                format!("Economic health is {}.", budget.health.label()),
            );
        }
    }
    if let Some(subject) = &report.subject {
        if subject.disloyal {
            push(
                NotificationKind::Warning,
                NotificationCategory::Diplomacy,
                Priority::High,
                "Disloyal subject",
                format!("Liberty desire has reached {:.0}%.", subject.liberty_desire),
            );
        }
    }
    if let Some(rebels) = &report.rebels {
        if rebels.rises {
            push(
                NotificationKind::Danger,
                NotificationCategory::War,
                Priority::Critical,
                "Rebels have risen",
                format!("{} regiments of {} rebels are in the field.", rebels.army_size, rebels.faction),
            );
        }
    }
    if let Some(progress) = &report.achievements {
        for &id in &progress.unlocked {
            let name = achievements::achievement(id).map(|a| a.name).unwrap_or(id);
            push(
                NotificationKind::Success,
                NotificationCategory::Achievement,
                Priority::Normal,
                "Achievement unlocked",
                name.to_string(),
            );
        }
    }

    notifications::sort_notifications(&mut notes);
    let mut kept = notifications::prune_notifications(notes, max);
    notifications::sort_notifications(&mut kept);
    kept
}

fn write_acceptance(out: &mut String, title: &str, a: &Acceptance, itemise: bool) -> std::fmt::Result {
    writeln!(out, "{title}: {:.1}%", a.chance)?;
    if itemise {
        for reason in &a.reasons {
            writeln!(out, "  {:<24} {:+.1}", reason.description, reason.value)?;
        }
    }
    Ok(())
}

/// Human-readable report. Acceptance breakdowns follow `show_tooltips`.
pub fn render_text(report: &Report, config: &RulesConfig) -> Result<String, std::fmt::Error> {
    let itemise = config.settings.show_tooltips;
    let mut out = String::new();

    if let Some(b) = &report.battle {
        writeln!(out, "== Battle ==")?;
        writeln!(out, "Combat width: {}", b.combat_width)?;
        writeln!(out, "Days fought: {}", b.days_fought)?;
        writeln!(
            out,
            "Casualties: attacker {:.0}, defender {:.0}",
            b.attacker_casualties, b.defender_casualties
        )?;
        match (&b.winner, &b.rewards) {
            (Some(side), Some(rewards)) => writeln!(
                out,
                "Winner: {side:?} (+{:.1} war score, +{:.1} prestige)",
                rewards.war_score, rewards.prestige
            )?,
            _ => writeln!(out, "Winner: none")?,
        }
    }

    if let Some(s) = &report.budget {
        writeln!(out, "== Budget ==")?;
        writeln!(out, "Income: {:.2}", s.total_income)?;
        writeln!(out, "Expenses: {:.2} (interest {:.2})", s.total_expenses, s.loan_interest)?;
        writeln!(out, "Balance: {:+.2}", s.balance)?;
        if s.debt > 0.0 {
            if s.payoff_months.is_finite() {
                writeln!(out, "Debt: {:.0}, paid off in {} months", s.debt, s.payoff_months)?;
            } else {
                writeln!(out, "Debt: {:.0}, never paid off at this balance", s.debt)?;
            }
        }
        writeln!(out, "Health: {}", s.health.label())?;
        if s.bankrupt {
            writeln!(out, "Bankrupt: no loans left to cover the deficit")?;
        }
    }

    if let Some(p) = &report.peace {
        writeln!(out, "== Peace ==")?;
        writeln!(out, "War score: {:.1}", p.war_score)?;
        writeln!(out, "Demands cost: {:.0} (AE {:.0})", p.evaluation.total_warscore, p.evaluation.total_ae)?;
        writeln!(out, "Acceptance: {:.1}%", p.evaluation.acceptance)?;
        writeln!(out, "Enforceable: {}", if p.evaluation.enforceable { "yes" } else { "no" })?;
    }

    if let Some(a) = &report.alliance {
        writeln!(out, "== Alliance ==")?;
        write_acceptance(&mut out, "Alliance acceptance", a, itemise)?;
    }
    if let Some(a) = &report.call_to_arms {
        writeln!(out, "== Call to arms ==")?;
        write_acceptance(&mut out, "Call acceptance", a, itemise)?;
    }

    if !report.provinces.is_empty() {
        writeln!(out, "== Provinces ==")?;
        for p in &report.provinces {
            writeln!(
                out,
                "{} ({}): dev {:.0}, dev cost {:.0}, slots {}, supply {:.0}, tax {:.2}/month, core cost {:.0}, min autonomy {:.0}",
                p.name,
                p.id,
                p.development,
                p.development_cost,
                p.building_slots,
                p.supply_limit,
                p.monthly_tax,
                p.coring_cost,
                p.minimum_autonomy
            )?;
        }
    }

    if let Some(s) = &report.subject {
        writeln!(out, "== Subject ==")?;
        writeln!(out, "Liberty desire: {:.1}%{}", s.liberty_desire, if s.disloyal { " (disloyal)" } else { "" })?;
        writeln!(out, "Annexation: {} ({:.0} diplomatic power)", if s.can_annex { "possible" } else { "blocked" }, s.annexation_cost)?;
        writeln!(out, "Pays overlord: {:.2}/month", s.income_to_overlord)?;
    }

    if let Some(r) = &report.rebels {
        writeln!(out, "== Rebels ==")?;
        writeln!(out, "Faction: {}", r.faction)?;
        writeln!(out, "Army size: {} regiments", r.army_size)?;
        writeln!(out, "Progress: {:.0}%{}", r.progress, if r.rises { " (rising)" } else { "" })?;
    }

    if let Some(a) = &report.achievements {
        writeln!(out, "== Achievements ==")?;
        writeln!(out, "Completion: {:.1}%", a.completion)?;
        for id in &a.unlocked {
            writeln!(out, "Unlocked: {id}")?;
        }
    }

    if !report.saves.is_empty() {
        writeln!(out, "== Saves ==")?;
        for s in &report.saves {
            let status = if s.checksum_valid { "ok" } else { "unverified" };
            writeln!(out, "{} [{}] {}", s.name, s.play_time, status)?;
        }
    }

    if !report.notifications.is_empty() {
        writeln!(out, "== Notifications ==")?;
        for n in &report.notifications {
            let info = notifications::category_info(n.category);
            writeln!(out, "[{}] {}: {}", info.label, n.title, n.message)?;
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario(json: &str) -> Scenario {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_empty_scenario_gives_empty_report() {
        let report = build_report(&Scenario::default(), &RulesConfig::default()).unwrap();
        assert!(report.battle.is_none());
        assert!(report.notifications.is_empty());
        assert_eq!(render_text(&report, &RulesConfig::default()).unwrap(), "");
    }

    #[test]
    fn test_alliance_section() {
        let s = scenario(
            r#"{ "alliance": { "relations": 100, "same_religion": true, "bordering_common_enemy": true } }"#,
        );
        let report = build_report(&s, &RulesConfig::default()).unwrap();
        assert_eq!(report.alliance.as_ref().map(|a| a.chance), Some(80.0));
        let text = render_text(&report, &RulesConfig::default()).unwrap();
        assert!(text.contains("Alliance acceptance: 80.0%"));
        assert!(text.contains("Same religion"));
    }

    #[test]
    fn test_tooltips_off_hides_reasons() {
        let s = scenario(r#"{ "alliance": { "relations": 100 } }"#);
        let mut config = RulesConfig::default();
        config.settings.show_tooltips = false;
        let report = build_report(&s, &config).unwrap();
        let text = render_text(&report, &config).unwrap();
        assert!(text.contains("Alliance acceptance: 50.0%"));
        assert!(!text.contains("Relations"));
    }

    #[test]
    fn test_province_lookup() {
        let s = scenario(r#"{ "provinces": [ { "id": 183 }, { "id": 183 } ] }"#);
        let config = RulesConfig {
            memoize: true,
            ..Default::default()
        };
        let report = build_report(&s, &config).unwrap();
        assert_eq!(report.provinces.len(), 2);
        assert_eq!(report.provinces[0].name, "Paris");
        assert_eq!(report.provinces[0].development, 24.0);
        assert_eq!(report.provinces[0].development_cost, report.provinces[1].development_cost);
    }

    #[test]
    fn test_unknown_province_is_an_error() {
        let s = scenario(r#"{ "provinces": [ { "id": 99999 } ] }"#);
        let err = build_report(&s, &RulesConfig::default()).unwrap_err();
        assert!(err.to_string().contains("99999"));
    }

    #[test]
    fn test_battle_produces_a_winner() {
        let s = scenario(
            r#"{ "battle": {
                "attacker": { "strength": 20000, "morale": 3, "max_morale": 3, "discipline": 110, "tactics": 1,
                              "composition": { "infantry": 16, "cavalry": 4 } },
                "defender": { "strength": 5000, "morale": 2, "max_morale": 3, "discipline": 100, "tactics": 1,
                              "composition": { "infantry": 5 } },
                "days": 30
            } }"#,
        );
        let report = build_report(&s, &RulesConfig::default()).unwrap();
        let battle = report.battle.unwrap();
        assert_eq!(battle.winner, Some(Side::Attacker));
        assert!(battle.rewards.is_some());
        assert!(battle.defender_casualties > 0.0);
    }

    #[test]
    fn test_rising_rebels_raise_critical_notification() {
        let s = scenario(
            r#"{ "rebels": {
                "context": { "wrong_culture": false, "has_core_claim": false, "wrong_religion": true,
                             "legitimacy": 100, "autonomy": 50 },
                "total_development": 20, "unrest": 10, "progress": 95
            } }"#,
        );
        let report = build_report(&s, &RulesConfig::default()).unwrap();
        let rebels = report.rebels.as_ref().unwrap();
        assert_eq!(rebels.faction, RebelKind::Religious);
        assert!(rebels.rises);
        assert_eq!(report.notifications.len(), 1);
        assert_eq!(report.notifications[0].priority, Priority::Critical);
    }

    #[test]
    fn test_notifications_are_pruned() {
        let s = scenario(r#"{ "stats": { "battles_won": 60, "allies": 5, "subjects": 6 } }"#);
        let config = RulesConfig {
            max_notifications: 2,
            ..Default::default()
        };
        let report = build_report(&s, &config).unwrap();
        assert_eq!(report.achievements.as_ref().map(|a| a.unlocked.len()), Some(4));
        assert_eq!(report.notifications.len(), 2);
    }
}
