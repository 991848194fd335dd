//! Playable nations and their historical relations.

use serde::Serialize;

keyed_enum! {
    /// Technology group.
    pub enum TechGroup {
        Western => "western",
        Eastern => "eastern",
        Ottoman => "ottoman",
        Muslim => "muslim",
        Indian => "indian",
        Chinese => "chinese",
        Nomadic => "nomadic",
    }
}

impl TechGroup {
    /// Technology cost modifier (percent) relative to the western group.
    pub fn tech_cost_modifier(self) -> f64 {
        match self {
            TechGroup::Western => 0.0,
            TechGroup::Eastern | TechGroup::Ottoman => 10.0,
            TechGroup::Muslim | TechGroup::Indian => 20.0,
            TechGroup::Chinese => 25.0,
            TechGroup::Nomadic => 50.0,
        }
    }
}

/// Map color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// `#rrggbb` form.
    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Static nation identity.
#[derive(Debug, Clone, Serialize)]
pub struct NationDef {
    /// Three-letter tag.
    pub tag: &'static str,
    pub name: &'static str,
    pub flag: &'static str,
    pub color: Rgb,
    pub government: &'static str,
    pub religion: &'static str,
    pub culture: &'static str,
    pub tech_group: TechGroup,
    pub rivals: &'static [&'static str],
    pub friends: &'static [&'static str],
}

pub static NATIONS: &[NationDef] = &[
    NationDef {
        tag: "FRA",
        name: "France",
        flag: "FRA.png",
        color: Rgb(20, 50, 210),
        government: "monarchy",
        religion: "catholic",
        culture: "francien",
        tech_group: TechGroup::Western,
        rivals: &["ENG", "BUR", "HAB"],
        friends: &["SCO", "CAS"],
    },
    NationDef {
        tag: "ENG",
        name: "England",
        flag: "ENG.png",
        color: Rgb(193, 26, 14),
        government: "monarchy",
        religion: "catholic",
        culture: "english",
        tech_group: TechGroup::Western,
        rivals: &["FRA", "SCO"],
        friends: &["POR", "BUR"],
    },
    NationDef {
        tag: "CAS",
        name: "Castile",
        flag: "CAS.png",
        color: Rgb(193, 171, 8),
        government: "monarchy",
        religion: "catholic",
        culture: "castillian",
        tech_group: TechGroup::Western,
        rivals: &["GRA", "POR"],
        friends: &["FRA", "ARA"],
    },
    NationDef {
        tag: "POR",
        name: "Portugal",
        flag: "POR.png",
        color: Rgb(2, 118, 61),
        government: "monarchy",
        religion: "catholic",
        culture: "portugese",
        tech_group: TechGroup::Western,
        rivals: &["CAS"],
        friends: &["ENG"],
    },
    NationDef {
        tag: "HAB",
        name: "Austria",
        flag: "HAB.png",
        color: Rgb(235, 235, 235),
        government: "monarchy",
        religion: "catholic",
        culture: "austrian",
        tech_group: TechGroup::Western,
        rivals: &["FRA", "HUN", "BOH"],
        friends: &["BUR"],
    },
    NationDef {
        tag: "BUR",
        name: "Burgundy",
        flag: "BUR.png",
        color: Rgb(142, 78, 150),
        government: "monarchy",
        religion: "catholic",
        culture: "burgundian",
        tech_group: TechGroup::Western,
        rivals: &["FRA"],
        friends: &["ENG", "HAB"],
    },
    NationDef {
        tag: "SWE",
        name: "Sweden",
        flag: "SWE.png",
        color: Rgb(6, 108, 198),
        government: "monarchy",
        religion: "catholic",
        culture: "swedish",
        tech_group: TechGroup::Western,
        rivals: &["DAN", "MOS"],
        friends: &["POL"],
    },
    NationDef {
        tag: "DAN",
        name: "Denmark",
        flag: "DAN.png",
        color: Rgb(153, 22, 22),
        government: "monarchy",
        religion: "catholic",
        culture: "danish",
        tech_group: TechGroup::Western,
        rivals: &["SWE", "HSA"],
        friends: &[],
    },
    NationDef {
        tag: "POL",
        name: "Poland",
        flag: "POL.png",
        color: Rgb(199, 83, 100),
        government: "monarchy",
        religion: "catholic",
        culture: "polish",
        tech_group: TechGroup::Eastern,
        rivals: &["TEU", "MOS"],
        friends: &["LIT", "SWE"],
    },
    NationDef {
        tag: "MOS",
        name: "Muscovy",
        flag: "MOS.png",
        color: Rgb(74, 140, 67),
        government: "monarchy",
        religion: "orthodox",
        culture: "russian",
        tech_group: TechGroup::Eastern,
        rivals: &["LIT", "NOV", "POL"],
        friends: &[],
    },
    NationDef {
        tag: "TUR",
        name: "Ottomans",
        flag: "TUR.png",
        color: Rgb(119, 172, 105),
        government: "monarchy",
        religion: "sunni",
        culture: "turkish",
        tech_group: TechGroup::Ottoman,
        rivals: &["HUN", "VEN", "QAR"],
        friends: &[],
    },
    NationDef {
        tag: "MNG",
        name: "Ming",
        flag: "MNG.png",
        color: Rgb(200, 180, 80),
        government: "monarchy",
        religion: "confucianism",
        culture: "chihan",
        tech_group: TechGroup::Chinese,
        rivals: &["OIR"],
        friends: &["KOR"],
    },
];

/// Look up a nation by tag.
pub fn nation(tag: &str) -> Option<&'static NationDef> {
    NATIONS.iter().find(|n| n.tag == tag)
}

impl NationDef {
    pub fn is_rival_of(&self, tag: &str) -> bool {
        self.rivals.contains(&tag)
    }

    pub fn is_friend_of(&self, tag: &str) -> bool {
        self.friends.contains(&tag)
    }

    pub fn shares_religion(&self, other: &NationDef) -> bool {
        self.religion == other.religion
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_tag() {
        let fra = nation("FRA").unwrap();
        assert_eq!(fra.name, "France");
        assert!(fra.is_rival_of("ENG"));
        assert!(fra.is_friend_of("SCO"));
        assert!(nation("XXX").is_none());
    }

    #[test]
    fn test_tags_are_unique() {
        for n in NATIONS {
            assert_eq!(NATIONS.iter().filter(|o| o.tag == n.tag).count(), 1, "{}", n.tag);
        }
    }

    #[test]
    fn test_color_hex() {
        assert_eq!(Rgb(20, 50, 210).hex(), "#1432d2");
    }
}
