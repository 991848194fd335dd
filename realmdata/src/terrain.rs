//! Terrain, climate and season definitions.
//!
//! Terrain drives combat modifiers, development and coring cost, attrition
//! and supply. Climate and season only add cost and attrition on top.

keyed_enum! {
    /// Province terrain.
    pub enum Terrain {
        Plains => "plains",
        Farmlands => "farmlands",
        Grasslands => "grasslands",
        Woods => "woods",
        Forest => "forest",
        Hills => "hills",
        Highlands => "highlands",
        Mountains => "mountains",
        Desert => "desert",
        Drylands => "drylands",
        Marsh => "marsh",
        Jungle => "jungle",
        Steppe => "steppe",
        Coastal => "coastal",
        Glacier => "glacier",
    }
}

/// Per-terrain modifiers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerrainStats {
    /// Attacker damage modifier, applied as `1 + value / 10` (never positive).
    pub attacker_modifier: f64,
    /// Defender damage bonus, applied as `1 + value / 10`.
    pub defender_bonus: f64,
    /// Development and coring cost modifier (percent).
    pub development_cost: f64,
    /// Extra monthly attrition (percentage points).
    pub attrition: f64,
    /// Supply limit modifier (percent).
    pub supply_modifier: f64,
}

impl Terrain {
    pub fn stats(self) -> TerrainStats {
        let (attacker_modifier, defender_bonus, development_cost, attrition, supply_modifier) =
            match self {
                Terrain::Plains => (0.0, 0.0, 0.0, 0.0, 0.0),
                Terrain::Farmlands => (0.0, 0.0, -5.0, 0.0, 25.0),
                Terrain::Grasslands => (0.0, 0.0, 0.0, 0.0, 10.0),
                Terrain::Steppe => (0.0, 0.0, 20.0, 0.0, -10.0),
                Terrain::Coastal => (0.0, 0.0, -10.0, 0.0, 0.0),
                Terrain::Woods => (-1.0, 1.0, 10.0, 0.0, 0.0),
                Terrain::Forest => (-1.0, 1.0, 20.0, 0.0, -10.0),
                Terrain::Hills => (-1.0, 1.0, 25.0, 0.0, -10.0),
                Terrain::Drylands => (0.0, 0.0, 5.0, 0.0, -10.0),
                Terrain::Highlands => (-1.0, 1.0, 25.0, 0.0, -10.0),
                Terrain::Marsh => (-1.0, 1.0, 25.0, 1.0, -20.0),
                Terrain::Jungle => (-1.0, 1.0, 35.0, 1.0, -20.0),
                Terrain::Mountains => (-2.0, 2.0, 40.0, 1.0, -25.0),
                Terrain::Desert => (0.0, 0.0, 50.0, 1.0, -30.0),
                Terrain::Glacier => (-1.0, 1.0, 50.0, 2.0, -50.0),
            };
        TerrainStats {
            attacker_modifier,
            defender_bonus,
            development_cost,
            attrition,
            supply_modifier,
        }
    }
}

keyed_enum! {
    /// Province climate.
    pub enum Climate {
        Temperate => "temperate",
        Tropical => "tropical",
        Arid => "arid",
        Arctic => "arctic",
    }
}

impl Climate {
    /// Development cost modifier (percent).
    pub fn development_cost(self) -> f64 {
        match self {
            Climate::Temperate => 0.0,
            Climate::Tropical => 25.0,
            Climate::Arid => 25.0,
            Climate::Arctic => 25.0,
        }
    }

    /// Extra monthly attrition (percentage points).
    pub fn attrition(self) -> f64 {
        match self {
            Climate::Temperate => 0.0,
            Climate::Tropical | Climate::Arid => 0.5,
            Climate::Arctic => 1.0,
        }
    }
}

keyed_enum! {
    /// Season of the campaign month.
    pub enum Season {
        Spring => "spring",
        Summer => "summer",
        Autumn => "autumn",
        Winter => "winter",
    }
}

impl Season {
    /// Season for a calendar month (1–12). Out-of-range months wrap.
    pub fn from_month(month: u8) -> Self {
        match (month.max(1) - 1) % 12 + 1 {
            3..=5 => Season::Spring,
            6..=8 => Season::Summer,
            9..=11 => Season::Autumn,
            _ => Season::Winter,
        }
    }

    /// Extra monthly attrition (percentage points).
    pub fn attrition(self) -> f64 {
        match self {
            Season::Winter => 1.0,
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attackers_never_benefit_from_terrain() {
        for terrain in Terrain::ALL {
            let stats = terrain.stats();
            assert!(stats.attacker_modifier <= 0.0, "{terrain}");
            assert!(stats.defender_bonus >= 0.0, "{terrain}");
        }
    }

    #[test]
    fn test_mountains_are_hardest() {
        let mountains = Terrain::Mountains.stats();
        assert_eq!(mountains.attacker_modifier, -2.0);
        assert_eq!(mountains.defender_bonus, 2.0);
    }

    #[test]
    fn test_season_from_month() {
        assert_eq!(Season::from_month(1), Season::Winter);
        assert_eq!(Season::from_month(4), Season::Spring);
        assert_eq!(Season::from_month(7), Season::Summer);
        assert_eq!(Season::from_month(10), Season::Autumn);
        assert_eq!(Season::from_month(12), Season::Winter);
        assert_eq!(Season::from_month(0), Season::Winter);
    }

    #[test]
    fn test_terrain_keys_parse() {
        for terrain in Terrain::ALL {
            assert_eq!(terrain.key().parse::<Terrain>().unwrap(), *terrain);
        }
    }
}
