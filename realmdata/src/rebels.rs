//! Rebel factions.

use serde::Serialize;

keyed_enum! {
    /// Rebel faction kind.
    pub enum RebelKind {
        Nationalist => "nationalist",
        Religious => "religious",
        Pretender => "pretender",
        Particularist => "particularist",
        Noble => "noble",
        Peasant => "peasant",
    }
}

/// Static rebel faction description.
#[derive(Debug, Clone, Serialize)]
pub struct RebelDef {
    pub kind: RebelKind,
    pub name: &'static str,
    pub description: &'static str,
    /// What the faction enforces if it wins.
    pub demands: &'static [&'static str],
}

pub static REBELS: &[RebelDef] = &[
    RebelDef {
        kind: RebelKind::Nationalist,
        name: "Separatists",
        description: "Want to restore a nation that holds a core on the province.",
        demands: &["release_nation"],
    },
    RebelDef {
        kind: RebelKind::Religious,
        name: "Religious Zealots",
        description: "Seek to convert the state to their faith.",
        demands: &["change_religion"],
    },
    RebelDef {
        kind: RebelKind::Pretender,
        name: "Pretenders",
        description: "Back a rival claimant to the throne.",
        demands: &["replace_ruler"],
    },
    RebelDef {
        kind: RebelKind::Particularist,
        name: "Particularists",
        description: "Demand more local self-rule.",
        demands: &["increase_autonomy", "reduce_crown_land"],
    },
    RebelDef {
        kind: RebelKind::Noble,
        name: "Noble Rebels",
        description: "Nobles resisting the centralization of power.",
        demands: &["increase_noble_influence", "lose_stability"],
    },
    RebelDef {
        kind: RebelKind::Peasant,
        name: "Peasant Revolt",
        description: "Peasants rising against taxation and hardship.",
        demands: &["cancel_loans", "lose_stability"],
    },
];

/// Look up a faction by kind.
pub fn rebel(kind: RebelKind) -> Option<&'static RebelDef> {
    REBELS.iter().find(|r| r.kind == kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_has_a_definition() {
        for kind in RebelKind::ALL {
            let def = rebel(*kind).unwrap_or_else(|| panic!("missing {kind}"));
            assert!(!def.demands.is_empty());
        }
    }
}
