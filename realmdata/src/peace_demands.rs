//! Peace-deal demand catalogue.

use serde::Serialize;

keyed_enum! {
    /// What a demand's cost scales with.
    pub enum ScalingFactor {
        None => "none",
        /// Development of the demanded provinces.
        Development => "development",
        /// Ducats, per hundred.
        Treasury => "treasury",
        /// Monthly income, per hundred.
        Income => "income",
    }
}

keyed_enum! {
    pub enum PeaceDemandKind {
        CedeProvince => "cede_province",
        ReturnCores => "return_cores",
        ReleaseNation => "release_nation",
        WarReparations => "war_reparations",
        TakeGold => "take_gold",
        Humiliate => "humiliate",
        ForceReligion => "force_religion",
        BecomeVassal => "become_vassal",
        AnnulTreaties => "annul_treaties",
        WhitePeace => "white_peace",
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PeaceDemandDef {
    pub kind: PeaceDemandKind,
    pub name: &'static str,
    pub base_warscore: f64,
    pub base_ae: f64,
    pub scaling: ScalingFactor,
}

macro_rules! demand {
    ($kind:ident, $name:literal, ws $ws:literal, ae $ae:literal, $scaling:ident) => {
        PeaceDemandDef {
            kind: PeaceDemandKind::$kind,
            name: $name,
            base_warscore: $ws,
            base_ae: $ae,
            scaling: ScalingFactor::$scaling,
        }
    };
}

pub static PEACE_DEMANDS: &[PeaceDemandDef] = &[
    demand!(CedeProvince, "Cede Province", ws 1.0, ae 1.0, Development),
    demand!(ReturnCores, "Return Cores", ws 0.5, ae 0.5, Development),
    demand!(ReleaseNation, "Release Nation", ws 0.5, ae 0.0, Development),
    demand!(WarReparations, "War Reparations", ws 10.0, ae 0.0, None),
    demand!(TakeGold, "Take Gold", ws 10.0, ae 0.0, Treasury),
    demand!(Humiliate, "Humiliate", ws 20.0, ae 0.0, None),
    demand!(ForceReligion, "Force Religion", ws 40.0, ae 10.0, None),
    demand!(BecomeVassal, "Become Vassal", ws 1.0, ae 1.5, Development),
    demand!(AnnulTreaties, "Annul Treaties", ws 10.0, ae 0.0, None),
    demand!(WhitePeace, "White Peace", ws 0.0, ae 0.0, None),
];

impl PeaceDemandKind {
    pub fn def(self) -> &'static PeaceDemandDef {
        PEACE_DEMANDS
            .iter()
            .find(|d| d.kind == self)
            .unwrap_or(&PEACE_DEMANDS[PEACE_DEMANDS.len() - 1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_has_a_row() {
        for kind in PeaceDemandKind::ALL {
            assert_eq!(kind.def().kind, *kind);
        }
    }

    #[test]
    fn test_scaling_keys() {
        assert_eq!("treasury".parse::<ScalingFactor>().unwrap(), ScalingFactor::Treasury);
        assert_eq!(PeaceDemandKind::CedeProvince.def().scaling, ScalingFactor::Development);
    }
}
