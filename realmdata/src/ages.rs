//! Historical ages.

use serde::Serialize;

keyed_enum! {
    pub enum AgeId {
        Discovery => "discovery",
        Reformation => "reformation",
        Absolutism => "absolutism",
        Revolutions => "revolutions",
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AgeDef {
    pub id: AgeId,
    pub name: &'static str,
    /// Inclusive.
    pub start_year: i32,
    /// Inclusive.
    pub end_year: i32,
    pub description: &'static str,
}

pub static AGES: &[AgeDef] = &[
    AgeDef {
        id: AgeId::Discovery,
        name: "Age of Discovery",
        start_year: 1444,
        end_year: 1559,
        description: "Explorers chart new lands and the first colonies are founded.",
    },
    AgeDef {
        id: AgeId::Reformation,
        name: "Age of Reformation",
        start_year: 1560,
        end_year: 1659,
        description: "Religious upheaval divides the realms of Christendom.",
    },
    AgeDef {
        id: AgeId::Absolutism,
        name: "Age of Absolutism",
        start_year: 1660,
        end_year: 1749,
        description: "Monarchs centralize power at the expense of the estates.",
    },
    AgeDef {
        id: AgeId::Revolutions,
        name: "Age of Revolutions",
        start_year: 1750,
        end_year: 1821,
        description: "New ideas of liberty challenge the old order.",
    },
];

/// Age containing `year`. Years before 1444 map to the first age and years
/// after 1821 to the last.
pub fn age_for_year(year: i32) -> &'static AgeDef {
    let first = &AGES[0];
    let last = &AGES[AGES.len() - 1];
    if year < first.start_year {
        log::debug!("Year {} predates {}, clamping", year, first.name);
        return first;
    }
    AGES.iter()
        .find(|a| (a.start_year..=a.end_year).contains(&year))
        .unwrap_or_else(|| {
            log::debug!("Year {} is past {}, clamping", year, last.name);
            last
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_boundaries() {
        assert_eq!(age_for_year(1444).id, AgeId::Discovery);
        assert_eq!(age_for_year(1559).id, AgeId::Discovery);
        assert_eq!(age_for_year(1560).id, AgeId::Reformation);
        assert_eq!(age_for_year(1700).id, AgeId::Absolutism);
        assert_eq!(age_for_year(1821).id, AgeId::Revolutions);
    }

    #[test]
    fn test_out_of_range_years() {
        assert_eq!(age_for_year(1300).id, AgeId::Discovery);
        assert_eq!(age_for_year(1900).id, AgeId::Revolutions);
    }

    #[test]
    fn test_ages_are_contiguous() {
        for pair in AGES.windows(2) {
            assert_eq!(pair[0].end_year + 1, pair[1].start_year);
        }
    }
}
