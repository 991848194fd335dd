//! Province building definitions.

use serde::Serialize;

keyed_enum! {
    /// Building identifier.
    pub enum BuildingId {
        Marketplace => "marketplace",
        TradeDepot => "trade_depot",
        StockExchange => "stock_exchange",
        Temple => "temple",
        Cathedral => "cathedral",
        Workshop => "workshop",
        CountingHouse => "counting_house",
        Barracks => "barracks",
        TrainingFields => "training_fields",
        RegimentalCamp => "regimental_camp",
        Fort => "fort",
        Courthouse => "courthouse",
        TownHall => "town_hall",
        Dock => "dock",
        Shipyard => "shipyard",
    }
}

keyed_enum! {
    /// Building category.
    pub enum BuildingCategory {
        Economy => "economy",
        Trade => "trade",
        Production => "production",
        Military => "military",
        Government => "government",
        Naval => "naval",
    }
}

/// Static building definition.
#[derive(Debug, Clone, Serialize)]
pub struct BuildingDef {
    pub id: BuildingId,
    pub name: &'static str,
    pub category: BuildingCategory,
    /// Gold cost to build.
    pub cost: f64,
    /// Months to construct.
    pub build_time_months: u32,
    /// Required administrative/diplomatic/military tech (whichever applies).
    pub required_tech: u8,
    /// Human-readable effects.
    pub effects: &'static [&'static str],
}

pub static BUILDINGS: &[BuildingDef] = &[
    BuildingDef {
        id: BuildingId::Marketplace,
        name: "Marketplace",
        category: BuildingCategory::Trade,
        cost: 100.0,
        build_time_months: 12,
        required_tech: 3,
        effects: &["+0.5 local trade power", "+10% local trade power"],
    },
    BuildingDef {
        id: BuildingId::TradeDepot,
        name: "Trade Depot",
        category: BuildingCategory::Trade,
        cost: 300.0,
        build_time_months: 24,
        required_tech: 12,
        effects: &["+1 local trade power", "+25% local trade power"],
    },
    BuildingDef {
        id: BuildingId::StockExchange,
        name: "Stock Exchange",
        category: BuildingCategory::Trade,
        cost: 500.0,
        build_time_months: 36,
        required_tech: 22,
        effects: &["+1.5 local trade power", "+50% local trade power"],
    },
    BuildingDef {
        id: BuildingId::Temple,
        name: "Temple",
        category: BuildingCategory::Economy,
        cost: 100.0,
        build_time_months: 12,
        required_tech: 3,
        effects: &["+1 local tax", "+40% local tax modifier"],
    },
    BuildingDef {
        id: BuildingId::Cathedral,
        name: "Cathedral",
        category: BuildingCategory::Economy,
        cost: 300.0,
        build_time_months: 24,
        required_tech: 14,
        effects: &["+1 local tax", "+60% local tax modifier", "-2 local unrest"],
    },
    BuildingDef {
        id: BuildingId::Workshop,
        name: "Workshop",
        category: BuildingCategory::Production,
        cost: 100.0,
        build_time_months: 12,
        required_tech: 4,
        effects: &["+50% local production efficiency"],
    },
    BuildingDef {
        id: BuildingId::CountingHouse,
        name: "Counting House",
        category: BuildingCategory::Production,
        cost: 400.0,
        build_time_months: 24,
        required_tech: 17,
        effects: &["+100% local production efficiency"],
    },
    BuildingDef {
        id: BuildingId::Barracks,
        name: "Barracks",
        category: BuildingCategory::Military,
        cost: 100.0,
        build_time_months: 12,
        required_tech: 6,
        effects: &["+1 local manpower", "+25% local manpower modifier"],
    },
    BuildingDef {
        id: BuildingId::TrainingFields,
        name: "Training Fields",
        category: BuildingCategory::Military,
        cost: 300.0,
        build_time_months: 24,
        required_tech: 19,
        effects: &["+2 local manpower", "+50% local manpower modifier"],
    },
    BuildingDef {
        id: BuildingId::RegimentalCamp,
        name: "Regimental Camp",
        category: BuildingCategory::Military,
        cost: 200.0,
        build_time_months: 12,
        required_tech: 8,
        effects: &["+1 land force limit"],
    },
    BuildingDef {
        id: BuildingId::Fort,
        name: "Fort",
        category: BuildingCategory::Military,
        cost: 200.0,
        build_time_months: 24,
        required_tech: 5,
        effects: &["+2 fort level", "-1 ducat monthly maintenance per level"],
    },
    BuildingDef {
        id: BuildingId::Courthouse,
        name: "Courthouse",
        category: BuildingCategory::Government,
        cost: 100.0,
        build_time_months: 12,
        required_tech: 7,
        effects: &["-25% local autonomy change cooldown", "+5 local governing capacity"],
    },
    BuildingDef {
        id: BuildingId::TownHall,
        name: "Town Hall",
        category: BuildingCategory::Government,
        cost: 200.0,
        build_time_months: 24,
        required_tech: 20,
        effects: &["-1 local unrest", "+10 local governing capacity"],
    },
    BuildingDef {
        id: BuildingId::Dock,
        name: "Dock",
        category: BuildingCategory::Naval,
        cost: 100.0,
        build_time_months: 12,
        required_tech: 5,
        effects: &["+1 local sailors", "+1 naval force limit"],
    },
    BuildingDef {
        id: BuildingId::Shipyard,
        name: "Shipyard",
        category: BuildingCategory::Naval,
        cost: 100.0,
        build_time_months: 12,
        required_tech: 5,
        effects: &["-10% local ship cost", "+25% local ship build speed"],
    },
];

/// Look up a building definition by id.
pub fn building(id: BuildingId) -> Option<&'static BuildingDef> {
    BUILDINGS.iter().find(|b| b.id == id)
}

/// All buildings of one category.
pub fn buildings_in(category: BuildingCategory) -> impl Iterator<Item = &'static BuildingDef> {
    BUILDINGS.iter().filter(move |b| b.category == category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_id_has_a_definition() {
        for id in BuildingId::ALL {
            let def = building(*id).unwrap_or_else(|| panic!("missing building {id}"));
            assert!(def.cost > 0.0);
            assert!(def.build_time_months > 0);
        }
    }

    #[test]
    fn test_buildings_in_category() {
        let trade: Vec<_> = buildings_in(BuildingCategory::Trade).map(|b| b.id).collect();
        assert_eq!(
            trade,
            vec![
                BuildingId::Marketplace,
                BuildingId::TradeDepot,
                BuildingId::StockExchange
            ]
        );
    }
}
