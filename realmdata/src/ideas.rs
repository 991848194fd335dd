//! Generic idea groups.
//!
//! Each group has seven ideas unlocked in order and a completion bonus once
//! all seven are taken. Groups are keyed by [`IdeaGroupId`].

use crate::modifiers::{sum_modifiers, Modifier, ModifierKey as K};
use serde::Serialize;

keyed_enum! {
    /// Idea group identifier.
    pub enum IdeaGroupId {
        Administrative => "administrative",
        Economic => "economic",
        Humanist => "humanist",
        Diplomatic => "diplomatic",
        Trade => "trade",
        Exploration => "exploration",
        Offensive => "offensive",
        Defensive => "defensive",
        Quality => "quality",
        Quantity => "quantity",
    }
}

keyed_enum! {
    /// Idea category (monarch power type spent).
    pub enum IdeaCategory {
        Adm => "adm",
        Dip => "dip",
        Mil => "mil",
    }
}

/// A single idea.
#[derive(Debug, Clone, Serialize)]
pub struct IdeaDef {
    pub name: &'static str,
    pub modifiers: &'static [Modifier],
}

/// Idea group definition.
#[derive(Debug, Clone, Serialize)]
pub struct IdeaGroupDef {
    pub id: IdeaGroupId,
    pub name: &'static str,
    pub category: IdeaCategory,
    pub ideas: &'static [IdeaDef],
    /// Granted once every idea is taken.
    pub bonus: &'static [Modifier],
}

impl IdeaGroupDef {
    /// Total of `key` across all ideas and the completion bonus.
    pub fn modifier_total(&self, key: K) -> f64 {
        let ideas: f64 = self
            .ideas
            .iter()
            .map(|idea| sum_modifiers(idea.modifiers, key))
            .sum();
        ideas + sum_modifiers(self.bonus, key)
    }

    /// Flat combat width granted by the completed group.
    pub fn combat_width_bonus(&self) -> u32 {
        self.modifier_total(K::CombatWidth).max(0.0) as u32
    }
}

macro_rules! idea {
    ($name:literal, $($key:ident = $value:literal),+) => {
        IdeaDef {
            name: $name,
            modifiers: &[$(Modifier { key: K::$key, value: $value }),+],
        }
    };
}

macro_rules! bonus {
    ($($key:ident = $value:literal),+) => {
        &[$(Modifier { key: K::$key, value: $value }),+]
    };
}

pub static IDEA_GROUPS: &[IdeaGroupDef] = &[
    IdeaGroupDef {
        id: IdeaGroupId::Administrative,
        name: "Administrative Ideas",
        category: IdeaCategory::Adm,
        ideas: &[
            idea!("Adaptability", CoreCreation = -25.0),
            idea!("Administrative Efficiency", StabilityCost = -10.0),
            idea!("Civil Servants", AdvisorCost = -10.0),
            idea!("Bureaucracy", DevelopmentCost = -5.0),
            idea!("Organized Mercenary Payments", LandMaintenance = -5.0),
            idea!("Benefits for Mercenaries", InterestRate = -10.0),
            idea!("Centralization", AutonomyChange = -20.0),
        ],
        bonus: bonus!(CoreCreation = -10.0),
    },
    IdeaGroupDef {
        id: IdeaGroupId::Economic,
        name: "Economic Ideas",
        category: IdeaCategory::Adm,
        ideas: &[
            idea!("Bureaucracy", TaxModifier = 10.0),
            idea!("Organized Construction", DevelopmentCost = -10.0),
            idea!("National Bank", InterestRate = -25.0),
            idea!("Debt and Loans", InterestRate = -10.0),
            idea!("Centralization", TaxModifier = 10.0),
            idea!("Nationalistic Enthusiasm", LandMaintenance = -5.0),
            idea!("Smithian Economics", ProductionEfficiency = 10.0),
        ],
        bonus: bonus!(DevelopmentCost = -10.0),
    },
    IdeaGroupDef {
        id: IdeaGroupId::Humanist,
        name: "Humanist Ideas",
        category: IdeaCategory::Adm,
        ideas: &[
            idea!("Tolerance", GlobalUnrest = -10.0),
            idea!("Local Traditions", GlobalUnrest = -10.0),
            idea!("Ecumenism", StabilityCost = -10.0),
            idea!("Indirect Rule", LibertyDesire = -10.0),
            idea!("Cultural Ties", AutonomyChange = -10.0),
            idea!("Benevolence", AggressiveExpansion = -10.0),
            idea!("Humanist Tolerance", GlobalUnrest = -10.0),
        ],
        bonus: bonus!(StabilityCost = -10.0),
    },
    IdeaGroupDef {
        id: IdeaGroupId::Diplomatic,
        name: "Diplomatic Ideas",
        category: IdeaCategory::Dip,
        ideas: &[
            idea!("Foreign Embassies", DiplomaticReputation = 1.0),
            idea!("Cabinet", AdvisorCost = -5.0),
            idea!("War Cabinet", WarExhaustion = -10.0),
            idea!("Benign Diplomats", DiplomaticReputation = 1.0),
            idea!("Diplomatic Corps", AggressiveExpansion = -10.0),
            idea!("Flexible Negotiation", WarExhaustion = -10.0),
            idea!("Diplomatic Influence", LibertyDesire = -10.0),
        ],
        bonus: bonus!(DiplomaticReputation = 1.0),
    },
    IdeaGroupDef {
        id: IdeaGroupId::Trade,
        name: "Trade Ideas",
        category: IdeaCategory::Dip,
        ideas: &[
            idea!("Shrewd Commerce Practice", TradeEfficiency = 10.0),
            idea!("Free Trade", TradeEfficiency = 5.0),
            idea!("Merchant Adventures", TradeEfficiency = 5.0),
            idea!("National Trade Policy", ProductionEfficiency = 5.0),
            idea!("Overseas Merchants", TradeEfficiency = 5.0),
            idea!("Trade Manipulation", TradeEfficiency = 5.0),
            idea!("Fast Negotiations", TradeEfficiency = 5.0),
        ],
        bonus: bonus!(TradeEfficiency = 10.0),
    },
    IdeaGroupDef {
        id: IdeaGroupId::Exploration,
        name: "Exploration Ideas",
        category: IdeaCategory::Dip,
        ideas: &[
            idea!("Colonial Ventures", ColonistGrowth = 10.0),
            idea!("Quest for the New World", ColonistGrowth = 5.0),
            idea!("Overseas Exploration", ColonistGrowth = 5.0),
            idea!("Land of Opportunity", ColonistGrowth = 5.0),
            idea!("Vice Roys", LibertyDesire = -10.0),
            idea!("Free Colonies", ColonistGrowth = 5.0),
            idea!("Global Empire", TradeEfficiency = 5.0),
        ],
        bonus: bonus!(ColonistGrowth = 10.0),
    },
    IdeaGroupDef {
        id: IdeaGroupId::Offensive,
        name: "Offensive Ideas",
        category: IdeaCategory::Mil,
        ideas: &[
            idea!("Bayonet Leaders", LeaderShock = 1.0),
            idea!("National Conscripts", ManpowerRecovery = 10.0),
            idea!("Superior Firepower", LeaderFire = 1.0),
            idea!("Glorious Arms", LandMorale = 5.0),
            idea!("Engineer Corps", SiegeAbility = 20.0),
            idea!("Grand Army", CombatWidth = 1.0),
            idea!("Napoleonic Warfare", Discipline = 2.5),
        ],
        bonus: bonus!(SiegeAbility = 10.0),
    },
    IdeaGroupDef {
        id: IdeaGroupId::Defensive,
        name: "Defensive Ideas",
        category: IdeaCategory::Mil,
        ideas: &[
            idea!("Battlefield Commissions", LandMorale = 5.0),
            idea!("Military Drill", LandMorale = 5.0),
            idea!("Improved Manoeuvre", LeaderShock = 1.0),
            idea!("Regimental System", ManpowerRecovery = 10.0),
            idea!("Defensive Mentality", LandMaintenance = -5.0),
            idea!("Supply Trains", WarExhaustion = -5.0),
            idea!("Improved Foraging", LandMorale = 5.0),
        ],
        bonus: bonus!(LandMorale = 5.0),
    },
    IdeaGroupDef {
        id: IdeaGroupId::Quality,
        name: "Quality Ideas",
        category: IdeaCategory::Mil,
        ideas: &[
            idea!("Private to Marshal", Discipline = 2.5),
            idea!("Quality Education", LandMorale = 5.0),
            idea!("Finest of Horses", LeaderShock = 1.0),
            idea!("Escort Ships", LeaderFire = 1.0),
            idea!("Naval Drill", LandMorale = 5.0),
            idea!("Copper Bottoms", Discipline = 2.5),
            idea!("Massed Battery", LeaderFire = 1.0),
        ],
        bonus: bonus!(Discipline = 5.0),
    },
    IdeaGroupDef {
        id: IdeaGroupId::Quantity,
        name: "Quantity Ideas",
        category: IdeaCategory::Mil,
        ideas: &[
            idea!("Mass Army", ManpowerModifier = 50.0),
            idea!("The Young can Serve", ManpowerRecovery = 20.0),
            idea!("Enforced Service", LandMaintenance = -10.0),
            idea!("The Old and Infirm", ManpowerModifier = 25.0),
            idea!("Mercenary Contracts", LandMaintenance = -5.0),
            idea!("Garrison Conscription", ManpowerRecovery = 10.0),
            idea!("Expanded Supply Trains", CombatWidth = 1.0),
        ],
        bonus: bonus!(CombatWidth = 1.0),
    },
];

/// Look up an idea group by id.
pub fn idea_group(id: IdeaGroupId) -> Option<&'static IdeaGroupDef> {
    IDEA_GROUPS.iter().find(|g| g.id == id)
}
