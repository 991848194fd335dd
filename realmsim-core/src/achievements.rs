//! Achievement catalogue and unlock checks.
//!
//! Conditions are typed: each [`ConditionKind`] reads one field of
//! [`GameStats`], so a new stat needs a new variant rather than a string key.

use crate::state::GameDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::instrument;

/// Snapshot of the player's record, as the achievement checks see it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameStats {
    pub provinces_owned: u32,
    pub total_development: f64,
    pub treasury: f64,
    pub battles_won: u32,
    pub wars_won: u32,
    pub allies: u32,
    pub subjects: u32,
    pub stability: i32,
    pub loans: u32,
    pub prestige: f64,
    pub years_played: u32,
    pub colonies_founded: u32,
    pub tech_level: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionKind {
    ProvincesOwned,
    TotalDevelopment,
    Treasury,
    BattlesWon,
    WarsWon,
    Allies,
    Subjects,
    Stability,
    Loans,
    Prestige,
    YearsPlayed,
    ColoniesFounded,
    TechLevel,
}

impl ConditionKind {
    pub fn value_in(self, stats: &GameStats) -> f64 {
        match self {
            ConditionKind::ProvincesOwned => stats.provinces_owned as f64,
            ConditionKind::TotalDevelopment => stats.total_development,
            ConditionKind::Treasury => stats.treasury,
            ConditionKind::BattlesWon => stats.battles_won as f64,
            ConditionKind::WarsWon => stats.wars_won as f64,
            ConditionKind::Allies => stats.allies as f64,
            ConditionKind::Subjects => stats.subjects as f64,
            ConditionKind::Stability => stats.stability as f64,
            ConditionKind::Loans => stats.loans as f64,
            ConditionKind::Prestige => stats.prestige,
            ConditionKind::YearsPlayed => stats.years_played as f64,
            ConditionKind::ColoniesFounded => stats.colonies_founded as f64,
            ConditionKind::TechLevel => stats.tech_level as f64,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparison {
    AtLeast,
    AtMost,
    Exactly,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub kind: ConditionKind,
    pub comparison: Comparison,
    pub value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementCategory {
    Conquest,
    Economy,
    Diplomacy,
    Military,
    Exploration,
    Special,
}

#[derive(Debug, Clone, Serialize)]
pub struct Achievement {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: AchievementCategory,
    /// All must hold.
    pub conditions: &'static [Condition],
    /// Hidden until unlocked.
    pub hidden: bool,
}

/// Unlock state of one achievement in one save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AchievementProgress {
    pub achievement_id: String,
    pub unlocked: bool,
    #[serde(default)]
    pub unlocked_at: Option<GameDate>,
    /// 0..=100.
    #[serde(default)]
    pub progress: f64,
}

macro_rules! cond {
    ($kind:ident $cmp:ident $value:literal) => {
        Condition {
            kind: ConditionKind::$kind,
            comparison: Comparison::$cmp,
            value: $value,
        }
    };
}

pub static ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        id: "first_blood",
        name: "First Blood",
        description: "Win your first battle.",
        category: AchievementCategory::Military,
        conditions: &[cond!(BattlesWon AtLeast 1.0)],
        hidden: false,
    },
    Achievement {
        id: "warlord",
        name: "Warlord",
        description: "Win 50 battles.",
        category: AchievementCategory::Military,
        conditions: &[cond!(BattlesWon AtLeast 50.0)],
        hidden: false,
    },
    Achievement {
        id: "victor",
        name: "Victor",
        description: "Win 5 wars.",
        category: AchievementCategory::Conquest,
        conditions: &[cond!(WarsWon AtLeast 5.0)],
        hidden: false,
    },
    Achievement {
        id: "great_power",
        name: "Great Power",
        description: "Own 100 provinces.",
        category: AchievementCategory::Conquest,
        conditions: &[cond!(ProvincesOwned AtLeast 100.0)],
        hidden: false,
    },
    Achievement {
        id: "developed",
        name: "Developed",
        description: "Reach 500 total development.",
        category: AchievementCategory::Economy,
        conditions: &[cond!(TotalDevelopment AtLeast 500.0)],
        hidden: false,
    },
    Achievement {
        id: "treasure_fleet",
        name: "Treasure Fleet",
        description: "Hold 5000 ducats without a single loan.",
        category: AchievementCategory::Economy,
        conditions: &[cond!(Treasury AtLeast 5000.0), cond!(Loans Exactly 0.0)],
        hidden: false,
    },
    Achievement {
        id: "debtor",
        name: "Living on Credit",
        description: "Carry 10 loans at once.",
        category: AchievementCategory::Special,
        conditions: &[cond!(Loans AtLeast 10.0)],
        hidden: true,
    },
    Achievement {
        id: "network",
        name: "Network of Friends",
        description: "Have 4 allies at once.",
        category: AchievementCategory::Diplomacy,
        conditions: &[cond!(Allies AtLeast 4.0)],
        hidden: false,
    },
    Achievement {
        id: "overlord",
        name: "Overlord",
        description: "Have 5 subjects.",
        category: AchievementCategory::Diplomacy,
        conditions: &[cond!(Subjects AtLeast 5.0)],
        hidden: false,
    },
    Achievement {
        id: "golden_age",
        name: "Golden Age",
        description: "Reach +3 stability with 100 prestige.",
        category: AchievementCategory::Special,
        conditions: &[cond!(Stability Exactly 3.0), cond!(Prestige AtLeast 100.0)],
        hidden: false,
    },
    Achievement {
        id: "turmoil",
        name: "Turmoil",
        description: "Fall to -3 stability.",
        category: AchievementCategory::Special,
        conditions: &[cond!(Stability AtMost -3.0)],
        hidden: true,
    },
    Achievement {
        id: "new_world",
        name: "New World",
        description: "Found 10 colonies.",
        category: AchievementCategory::Exploration,
        conditions: &[cond!(ColoniesFounded AtLeast 10.0)],
        hidden: false,
    },
    Achievement {
        id: "enlightened",
        name: "Enlightened",
        description: "Reach technology level 20 within 150 years.",
        category: AchievementCategory::Special,
        conditions: &[cond!(TechLevel AtLeast 20.0), cond!(YearsPlayed AtMost 150.0)],
        hidden: false,
    },
];

pub fn achievement(id: &str) -> Option<&'static Achievement> {
    ACHIEVEMENTS.iter().find(|a| a.id == id)
}

pub fn check_condition(condition: &Condition, stats: &GameStats) -> bool {
    let actual = condition.kind.value_in(stats);
    match condition.comparison {
        Comparison::AtLeast => actual >= condition.value,
        Comparison::AtMost => actual <= condition.value,
        Comparison::Exactly => actual == condition.value,
    }
}

/// An achievement without conditions never unlocks.
pub fn is_unlocked(achievement: &Achievement, stats: &GameStats) -> bool {
    !achievement.conditions.is_empty()
        && achievement.conditions.iter().all(|c| check_condition(c, stats))
}

fn condition_progress(condition: &Condition, stats: &GameStats) -> f64 {
    if check_condition(condition, stats) {
        return 1.0;
    }
    match condition.comparison {
        Comparison::AtLeast if condition.value > 0.0 => {
            (condition.kind.value_in(stats) / condition.value).clamp(0.0, 1.0)
        }
        _ => 0.0,
    }
}

/// Percent complete (0..=100), averaged over the conditions.
pub fn calculate_progress(achievement: &Achievement, stats: &GameStats) -> f64 {
    if achievement.conditions.is_empty() {
        return 0.0;
    }
    let sum: f64 = achievement
        .conditions
        .iter()
        .map(|c| condition_progress(c, stats))
        .sum();
    sum / achievement.conditions.len() as f64 * 100.0
}

fn is_recorded_unlocked(progress: &[AchievementProgress], id: &str) -> bool {
    progress.iter().any(|p| p.achievement_id == id && p.unlocked)
}

/// Achievements unlocked by `stats` that `progress` does not yet record.
#[instrument(skip_all, name = "evaluate_achievements")]
pub fn evaluate_achievements<'a>(
    catalogue: &'a [Achievement],
    progress: &[AchievementProgress],
    stats: &GameStats,
) -> Vec<&'a Achievement> {
    let unlocked: Vec<&Achievement> = catalogue
        .iter()
        .filter(|a| !is_recorded_unlocked(progress, a.id))
        .filter(|a| is_unlocked(a, stats))
        .collect();
    for a in &unlocked {
        log::info!("achievement unlocked: {}", a.name);
    }
    unlocked
}

/// Progress records for every achievement in `catalogue`, carrying over
/// existing unlocks and stamping new ones with `date`.
pub fn update_progress(
    catalogue: &[Achievement],
    progress: &[AchievementProgress],
    stats: &GameStats,
    date: GameDate,
) -> Vec<AchievementProgress> {
    catalogue
        .iter()
        .map(|a| {
            if let Some(existing) = progress.iter().find(|p| p.achievement_id == a.id && p.unlocked) {
                return existing.clone();
            }
            let unlocked = is_unlocked(a, stats);
            AchievementProgress {
                achievement_id: a.id.to_string(),
                unlocked,
                unlocked_at: unlocked.then_some(date),
                progress: calculate_progress(a, stats),
            }
        })
        .collect()
}

pub fn filter_by_category(
    achievements: &[Achievement],
    category: AchievementCategory,
) -> Vec<&Achievement> {
    achievements.iter().filter(|a| a.category == category).collect()
}

/// Unlocked first, then by name.
pub fn sort_achievements<'a>(
    achievements: &[&'a Achievement],
    progress: &[AchievementProgress],
) -> Vec<&'a Achievement> {
    let mut sorted = achievements.to_vec();
    sorted.sort_by(|a, b| {
        let a_unlocked = is_recorded_unlocked(progress, a.id);
        let b_unlocked = is_recorded_unlocked(progress, b.id);
        match (a_unlocked, b_unlocked) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => a.name.cmp(b.name),
        }
    });
    sorted
}

/// Percent of `total` achievements unlocked.
pub fn completion_percentage(progress: &[AchievementProgress], total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let unlocked = progress.iter().filter(|p| p.unlocked).count();
    unlocked.min(total) as f64 / total as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unlocked(id: &str) -> AchievementProgress {
        AchievementProgress {
            achievement_id: id.to_string(),
            unlocked: true,
            unlocked_at: None,
            progress: 100.0,
        }
    }

    #[test]
    fn test_comparisons() {
        let stats = GameStats {
            stability: 3,
            loans: 0,
            ..Default::default()
        };
        assert!(check_condition(&cond!(Stability Exactly 3.0), &stats));
        assert!(check_condition(&cond!(Loans AtMost 0.0), &stats));
        assert!(!check_condition(&cond!(Stability AtLeast 4.0), &stats));
    }

    #[test]
    fn test_all_conditions_required() {
        let fleet = achievement("treasure_fleet").unwrap();
        let rich = GameStats {
            treasury: 6000.0,
            ..Default::default()
        };
        assert!(is_unlocked(fleet, &rich));
        let indebted = GameStats {
            loans: 1,
            ..rich.clone()
        };
        assert!(!is_unlocked(fleet, &indebted));
    }

    #[test]
    fn test_progress_is_partial_for_thresholds() {
        let warlord = achievement("warlord").unwrap();
        let stats = GameStats {
            battles_won: 25,
            ..Default::default()
        };
        assert_eq!(calculate_progress(warlord, &stats), 50.0);
        let golden = achievement("golden_age").unwrap();
        let stats = GameStats {
            stability: 3,
            prestige: 50.0,
            ..Default::default()
        };
        // (1.0 + 0.5) / 2
        assert_eq!(calculate_progress(golden, &stats), 75.0);
    }

    #[test]
    fn test_evaluate_skips_recorded_unlocks() {
        let stats = GameStats {
            battles_won: 60,
            ..Default::default()
        };
        let new: Vec<_> = evaluate_achievements(ACHIEVEMENTS, &[], &stats)
            .iter()
            .map(|a| a.id)
            .collect();
        assert_eq!(new, vec!["first_blood", "warlord"]);

        let new = evaluate_achievements(ACHIEVEMENTS, &[unlocked("first_blood")], &stats);
        assert_eq!(new.len(), 1);
        assert_eq!(new[0].id, "warlord");
    }

    #[test]
    fn test_update_progress_stamps_date() {
        let stats = GameStats {
            battles_won: 1,
            ..Default::default()
        };
        let date = GameDate::new(1450, 1, 1);
        let progress = update_progress(ACHIEVEMENTS, &[], &stats, date);
        assert_eq!(progress.len(), ACHIEVEMENTS.len());
        let first = progress.iter().find(|p| p.achievement_id == "first_blood").unwrap();
        assert!(first.unlocked);
        assert_eq!(first.unlocked_at, Some(date));
    }

    #[test]
    fn test_filter_and_sort() {
        let military = filter_by_category(ACHIEVEMENTS, AchievementCategory::Military);
        assert_eq!(military.len(), 2);

        let sorted = sort_achievements(&military, &[unlocked("warlord")]);
        assert_eq!(sorted[0].id, "warlord");
        assert_eq!(sorted[1].id, "first_blood");

        let sorted = sort_achievements(&military, &[]);
        assert_eq!(sorted[0].name, "First Blood");
    }

    #[test]
    fn test_completion_percentage() {
        let progress = vec![unlocked("a"), unlocked("b")];
        assert_eq!(completion_percentage(&progress, 4), 50.0);
        assert_eq!(completion_percentage(&progress, 0), 0.0);
    }

    #[test]
    fn test_ids_are_unique() {
        for a in ACHIEVEMENTS {
            assert_eq!(ACHIEVEMENTS.iter().filter(|o| o.id == a.id).count(), 1, "{}", a.id);
        }
    }
}
