//! Policies: synergies between two completed idea groups.

use crate::ideas::{IdeaCategory, IdeaGroupId};
use serde::Serialize;

keyed_enum! {
    pub enum PolicyId {
        CombinationAct => "combination_act",
        CodeOfConduct => "code_of_conduct",
        ColonialCompanies => "colonial_companies",
        CitizenArmy => "citizen_army",
        MercantilismAct => "mercantilism_act",
        StandingArmyAct => "standing_army_act",
        ReligiousTolerance => "religious_tolerance",
        ExpeditionaryForces => "expeditionary_forces",
    }
}

/// Policy definition.
#[derive(Debug, Clone, Serialize)]
pub struct PolicyDef {
    pub id: PolicyId,
    pub name: &'static str,
    pub category: IdeaCategory,
    pub idea_group_1: IdeaGroupId,
    pub idea_group_2: IdeaGroupId,
    pub effects: &'static [&'static str],
    /// Monarch power per month while enacted.
    pub monthly_cost: f64,
}

impl PolicyDef {
    /// True when both required groups are among `completed`.
    pub fn is_unlocked_by(&self, completed: &[IdeaGroupId]) -> bool {
        completed.contains(&self.idea_group_1) && completed.contains(&self.idea_group_2)
    }
}

macro_rules! policy {
    ($id:ident, $name:literal, $cat:ident, $g1:ident + $g2:ident, [$($effect:literal),+]) => {
        PolicyDef {
            id: PolicyId::$id,
            name: $name,
            category: IdeaCategory::$cat,
            idea_group_1: IdeaGroupId::$g1,
            idea_group_2: IdeaGroupId::$g2,
            effects: &[$($effect),+],
            monthly_cost: 1.0,
        }
    };
}

pub static POLICIES: &[PolicyDef] = &[
    policy!(CombinationAct, "The Combination Act", Adm, Administrative + Economic, ["-10% development cost"]),
    policy!(CodeOfConduct, "Code of Conduct", Adm, Humanist + Administrative, ["-1 global unrest"]),
    policy!(ColonialCompanies, "Colonial Companies", Dip, Exploration + Trade, ["+10% trade efficiency"]),
    policy!(CitizenArmy, "Citizen Army", Mil, Quantity + Defensive, ["+10% manpower recovery"]),
    policy!(MercantilismAct, "Mercantilism Act", Dip, Trade + Economic, ["+5% production efficiency"]),
    policy!(StandingArmyAct, "Standing Army Act", Mil, Quality + Offensive, ["+5% discipline"]),
    policy!(ReligiousTolerance, "Religious Tolerance", Adm, Humanist + Diplomatic, ["-10% stability cost"]),
    policy!(ExpeditionaryForces, "Expeditionary Forces", Mil, Exploration + Offensive, ["-10% land maintenance", "+5% siege ability"]),
];

pub fn policy(id: PolicyId) -> Option<&'static PolicyDef> {
    POLICIES.iter().find(|p| p.id == id)
}

/// Policies unlocked by the completed idea groups.
pub fn available_policies(completed: &[IdeaGroupId]) -> Vec<&'static PolicyDef> {
    POLICIES.iter().filter(|p| p.is_unlocked_by(completed)).collect()
}
