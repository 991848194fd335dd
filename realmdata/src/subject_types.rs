//! Subject relationship types.

use serde::Serialize;

keyed_enum! {
    pub enum SubjectKind {
        Vassal => "vassal",
        March => "march",
        PersonalUnion => "personal_union",
        Tributary => "tributary",
        Colony => "colony",
        Daimyo => "daimyo",
    }
}

/// Rules attached to a subject type.
#[derive(Debug, Clone, Serialize)]
pub struct SubjectTypeDef {
    pub kind: SubjectKind,
    pub name: &'static str,
    pub base_liberty_desire: f64,
    pub can_be_annexed: bool,
    pub min_years_before_annex: u32,
    /// Fraction of subject income paid to the overlord.
    pub pays_overlord: f64,
    pub joins_overlord_wars: bool,
}

pub static SUBJECT_TYPES: &[SubjectTypeDef] = &[
    SubjectTypeDef {
        kind: SubjectKind::Vassal,
        name: "Vassal",
        base_liberty_desire: 0.0,
        can_be_annexed: true,
        min_years_before_annex: 10,
        pays_overlord: 0.1,
        joins_overlord_wars: true,
    },
    SubjectTypeDef {
        kind: SubjectKind::March,
        name: "March",
        base_liberty_desire: -15.0,
        can_be_annexed: false,
        min_years_before_annex: 0,
        pays_overlord: 0.0,
        joins_overlord_wars: true,
    },
    SubjectTypeDef {
        kind: SubjectKind::PersonalUnion,
        name: "Personal Union",
        base_liberty_desire: 0.0,
        can_be_annexed: true,
        min_years_before_annex: 50,
        pays_overlord: 0.0,
        joins_overlord_wars: true,
    },
    SubjectTypeDef {
        kind: SubjectKind::Tributary,
        name: "Tributary State",
        base_liberty_desire: -25.0,
        can_be_annexed: false,
        min_years_before_annex: 0,
        pays_overlord: 0.125,
        joins_overlord_wars: false,
    },
    SubjectTypeDef {
        kind: SubjectKind::Colony,
        name: "Colonial Nation",
        base_liberty_desire: 0.0,
        can_be_annexed: false,
        min_years_before_annex: 0,
        pays_overlord: 0.5,
        joins_overlord_wars: true,
    },
    SubjectTypeDef {
        kind: SubjectKind::Daimyo,
        name: "Daimyo",
        base_liberty_desire: 0.0,
        can_be_annexed: true,
        min_years_before_annex: 10,
        pays_overlord: 0.1,
        joins_overlord_wars: true,
    },
];

impl SubjectKind {
    pub fn def(self) -> &'static SubjectTypeDef {
        SUBJECT_TYPES
            .iter()
            .find(|t| t.kind == self)
            .unwrap_or(&SUBJECT_TYPES[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_has_a_row() {
        for kind in SubjectKind::ALL {
            assert_eq!(kind.def().kind, *kind);
        }
    }

    #[test]
    fn test_annexable_kinds() {
        assert!(SubjectKind::Vassal.def().can_be_annexed);
        assert!(!SubjectKind::March.def().can_be_annexed);
        assert_eq!(SubjectKind::PersonalUnion.def().min_years_before_annex, 50);
    }
}
