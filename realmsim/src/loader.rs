use anyhow::{Context, Result};
use realmsim_core::achievements::GameStats;
use realmsim_core::state::{CombatUnit, Leader};
use realmsim_core::systems::alliance::{AllianceRequest, CallRequest};
use realmsim_core::systems::autonomy::MinAutonomyFactors;
use realmsim_core::systems::economy::Budget;
use realmsim_core::systems::peace::PeaceDemand;
use realmsim_core::systems::rebels::RebelContext;
use realmsim_core::systems::war_score::WarScore;
use realmsim_core::{RulesConfig, SaveGame};
use realmdata::{IdeaGroupId, SubjectKind, Terrain};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Everything a report can be asked about. All sections are optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Scenario {
    pub battle: Option<BattleScenario>,
    pub budget: Option<Budget>,
    pub peace: Option<PeaceScenario>,
    pub alliance: Option<AllianceRequest>,
    pub call_to_arms: Option<CallRequest>,
    pub provinces: Vec<ProvinceScenario>,
    pub subject: Option<SubjectScenario>,
    pub rebels: Option<RebelScenario>,
    pub stats: Option<GameStats>,
    pub saves: Vec<SaveGame>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BattleScenario {
    pub attacker: CombatUnit,
    pub defender: CombatUnit,
    #[serde(default = "default_terrain")]
    pub terrain: Terrain,
    #[serde(default)]
    pub attacker_leader: Option<Leader>,
    #[serde(default)]
    pub defender_leader: Option<Leader>,
    #[serde(default)]
    pub military_tech: u8,
    #[serde(default)]
    pub ideas: Vec<IdeaGroupId>,
    /// Days to fight unless a side breaks first.
    #[serde(default = "default_battle_days")]
    pub days: u32,
}

fn default_terrain() -> Terrain {
    Terrain::Plains
}

fn default_battle_days() -> u32 {
    12
}

#[derive(Debug, Clone, Deserialize)]
pub struct PeaceScenario {
    pub war_score: WarScore,
    pub demands: Vec<PeaceDemand>,
    #[serde(default)]
    pub war_exhaustion: f64,
    #[serde(default)]
    pub relations: f64,
}

/// A starting province, looked up by id, with per-scenario overrides.
#[derive(Debug, Clone, Deserialize)]
pub struct ProvinceScenario {
    pub id: u32,
    #[serde(default)]
    pub autonomy: Option<f64>,
    #[serde(default)]
    pub missing_institutions: u32,
    /// Generic development cost modifier, percent.
    #[serde(default)]
    pub development_cost_modifier: f64,
    #[serde(default)]
    pub tax_modifier: f64,
    #[serde(default)]
    pub autonomy_factors: MinAutonomyFactors,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubjectScenario {
    pub kind: SubjectKind,
    pub subject_development: f64,
    pub overlord_development: f64,
    #[serde(default)]
    pub modifiers: Vec<f64>,
    #[serde(default)]
    pub years_as_subject: u32,
    #[serde(default)]
    pub relations: f64,
    #[serde(default)]
    pub monthly_income: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RebelScenario {
    pub context: RebelContext,
    pub total_development: f64,
    pub unrest: f64,
    #[serde(default)]
    pub progress: f64,
}

pub fn load_scenario(path: &Path) -> Result<Scenario> {
    log::info!("Loading scenario from {:?}", path);
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read scenario {}", path.display()))?;
    let scenario: Scenario = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse scenario {}", path.display()))?;
    Ok(scenario)
}

/// Defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<RulesConfig> {
    let Some(path) = path else {
        return Ok(RulesConfig::default());
    };
    log::info!("Loading config from {:?}", path);
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    RulesConfig::from_json_str(&text)
        .with_context(|| format!("Invalid config {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_scenario_parses() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{}}").unwrap();
        let scenario = load_scenario(file.path()).unwrap();
        assert!(scenario.battle.is_none());
        assert!(scenario.provinces.is_empty());
    }

    #[test]
    fn test_battle_defaults() {
        let json = r#"{
            "battle": {
                "attacker": { "strength": 10000, "morale": 3, "max_morale": 3, "discipline": 100, "tactics": 1 },
                "defender": { "strength": 8000, "morale": 3, "max_morale": 3, "discipline": 100, "tactics": 1 }
            }
        }"#;
        let scenario: Scenario = serde_json::from_str(json).unwrap();
        let battle = scenario.battle.unwrap();
        assert_eq!(battle.terrain, Terrain::Plains);
        assert_eq!(battle.days, 12);
    }

    #[test]
    fn test_missing_config_mentions_path() {
        let err = load_config(Some(Path::new("/nonexistent/rules.json"))).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/rules.json"));
    }

    #[test]
    fn test_no_config_gives_defaults() {
        assert_eq!(load_config(None).unwrap(), RulesConfig::default());
    }
}
