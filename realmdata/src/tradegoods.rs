//! Trade good definitions and base prices.

use serde::Serialize;

keyed_enum! {
    /// Trade good identifier.
    pub enum TradeGoodId {
        Grain => "grain",
        Fish => "fish",
        Livestock => "livestock",
        Wine => "wine",
        Wool => "wool",
        Cloth => "cloth",
        NavalSupplies => "naval_supplies",
        Salt => "salt",
        Iron => "iron",
        Copper => "copper",
        Fur => "fur",
        Spices => "spices",
        Silk => "silk",
        Ivory => "ivory",
        Sugar => "sugar",
        Coffee => "coffee",
        Gold => "gold",
    }
}

keyed_enum! {
    /// Broad price category of a good.
    pub enum TradeGoodCategory {
        Common => "common",
        Luxury => "luxury",
        Precious => "precious",
    }
}

/// Trade good price definition.
#[derive(Debug, Clone, Serialize)]
pub struct TradeGoodDef {
    pub id: TradeGoodId,
    pub name: &'static str,
    /// Base price in ducats.
    pub base_price: f64,
    pub category: TradeGoodCategory,
}

macro_rules! good {
    ($id:ident, $name:literal, $price:literal, $category:ident) => {
        TradeGoodDef {
            id: TradeGoodId::$id,
            name: $name,
            base_price: $price,
            category: TradeGoodCategory::$category,
        }
    };
}

pub static TRADE_GOODS: &[TradeGoodDef] = &[
    good!(Grain, "Grain", 2.5, Common),
    good!(Fish, "Fish", 2.5, Common),
    good!(Livestock, "Livestock", 2.5, Common),
    good!(Wine, "Wine", 2.5, Common),
    good!(Wool, "Wool", 2.5, Common),
    good!(Cloth, "Cloth", 3.0, Common),
    good!(NavalSupplies, "Naval Supplies", 2.0, Common),
    good!(Salt, "Salt", 3.0, Common),
    good!(Iron, "Iron", 3.5, Common),
    good!(Copper, "Copper", 3.0, Common),
    good!(Fur, "Fur", 3.5, Luxury),
    good!(Spices, "Spices", 3.0, Luxury),
    good!(Silk, "Silk", 4.0, Luxury),
    good!(Ivory, "Ivory", 4.0, Luxury),
    good!(Sugar, "Sugar", 3.0, Luxury),
    good!(Coffee, "Coffee", 3.0, Luxury),
    good!(Gold, "Gold", 0.0, Precious),
];

/// Look up a trade good by id.
pub fn trade_good(id: TradeGoodId) -> Option<&'static TradeGoodDef> {
    TRADE_GOODS.iter().find(|g| g.id == id)
}

impl TradeGoodId {
    /// Base price, or zero for goods priced by mine output (gold).
    pub fn base_price(self) -> f64 {
        trade_good(self).map(|g| g.base_price).unwrap_or(0.0)
    }

    /// Gold is mined straight into the treasury and causes inflation.
    pub fn is_goldtype(self) -> bool {
        matches!(self, TradeGoodId::Gold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_prices() {
        assert_eq!(TradeGoodId::Grain.base_price(), 2.5);
        assert_eq!(TradeGoodId::Cloth.base_price(), 3.0);
        assert_eq!(TradeGoodId::Gold.base_price(), 0.0);
        assert!(TradeGoodId::Gold.is_goldtype());
    }

    #[test]
    fn test_every_good_is_listed_once() {
        for id in TradeGoodId::ALL {
            assert_eq!(TRADE_GOODS.iter().filter(|g| g.id == *id).count(), 1, "{id}");
        }
    }
}
