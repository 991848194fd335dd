//! AI personality weights.
//!
//! Biases are additive percentage points applied by the acceptance scorers
//! when the counterpart is AI-controlled.

use serde::Serialize;

keyed_enum! {
    pub enum AiPersonalityId {
        Balanced => "balanced",
        Aggressive => "aggressive",
        Diplomat => "diplomat",
        Merchant => "merchant",
        Isolationist => "isolationist",
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AiPersonalityDef {
    pub id: AiPersonalityId,
    pub name: &'static str,
    /// 0..=1 weights.
    pub aggressiveness: f64,
    pub diplomacy: f64,
    pub economy_focus: f64,
    /// Added to alliance acceptance.
    pub alliance_bias: f64,
    /// Added to peace-deal acceptance.
    pub peace_acceptance_bias: f64,
}

pub static AI_PERSONALITIES: &[AiPersonalityDef] = &[
    AiPersonalityDef {
        id: AiPersonalityId::Balanced,
        name: "Balanced",
        aggressiveness: 0.5,
        diplomacy: 0.5,
        economy_focus: 0.5,
        alliance_bias: 0.0,
        peace_acceptance_bias: 0.0,
    },
    AiPersonalityDef {
        id: AiPersonalityId::Aggressive,
        name: "Conqueror",
        aggressiveness: 0.9,
        diplomacy: 0.2,
        economy_focus: 0.3,
        alliance_bias: -10.0,
        peace_acceptance_bias: -15.0,
    },
    AiPersonalityDef {
        id: AiPersonalityId::Diplomat,
        name: "Diplomat",
        aggressiveness: 0.2,
        diplomacy: 0.9,
        economy_focus: 0.4,
        alliance_bias: 15.0,
        peace_acceptance_bias: 10.0,
    },
    AiPersonalityDef {
        id: AiPersonalityId::Merchant,
        name: "Merchant",
        aggressiveness: 0.3,
        diplomacy: 0.5,
        economy_focus: 0.9,
        alliance_bias: 5.0,
        peace_acceptance_bias: 5.0,
    },
    AiPersonalityDef {
        id: AiPersonalityId::Isolationist,
        name: "Isolationist",
        aggressiveness: 0.1,
        diplomacy: 0.1,
        economy_focus: 0.6,
        alliance_bias: -20.0,
        peace_acceptance_bias: 15.0,
    },
];

pub fn ai_personality(id: AiPersonalityId) -> Option<&'static AiPersonalityDef> {
    AI_PERSONALITIES.iter().find(|p| p.id == id)
}
