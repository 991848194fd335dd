//! Starting province definitions.

use crate::terrain::{Climate, Terrain};
use crate::tradegoods::TradeGoodId;
use serde::Serialize;

/// Static province setup at game start.
#[derive(Debug, Clone, Serialize)]
pub struct ProvinceDef {
    pub id: u32,
    pub name: &'static str,
    pub base_tax: f64,
    pub base_production: f64,
    pub base_manpower: f64,
    pub terrain: Terrain,
    pub climate: Climate,
    pub trade_good: TradeGoodId,
    pub owner: Option<&'static str>,
    pub fort_level: u32,
    pub cores: &'static [&'static str],
    pub coastal: bool,
}

impl ProvinceDef {
    pub fn development(&self) -> f64 {
        self.base_tax + self.base_production + self.base_manpower
    }
}

macro_rules! province {
    (
        $id:literal, $name:literal, ($tax:literal, $prod:literal, $mp:literal),
        $terrain:ident, $climate:ident, $good:ident, $owner:expr,
        fort $fort:literal, cores [$($core:literal),*], coastal $coastal:literal
    ) => {
        ProvinceDef {
            id: $id,
            name: $name,
            base_tax: $tax,
            base_production: $prod,
            base_manpower: $mp,
            terrain: Terrain::$terrain,
            climate: Climate::$climate,
            trade_good: TradeGoodId::$good,
            owner: $owner,
            fort_level: $fort,
            cores: &[$($core),*],
            coastal: $coastal,
        }
    };
}

pub static PROVINCES: &[ProvinceDef] = &[
    province!(1, "Stockholm", (5.0, 5.0, 3.0), Farmlands, Temperate, Grain, Some("SWE"), fort 2, cores ["SWE"], coastal true),
    province!(6, "Skane", (4.0, 4.0, 3.0), Farmlands, Temperate, Grain, Some("DAN"), fort 0, cores ["DAN", "SWE"], coastal true),
    province!(12, "Sjaelland", (6.0, 5.0, 3.0), Plains, Temperate, Fish, Some("DAN"), fort 2, cores ["DAN"], coastal true),
    province!(151, "Constantinople", (11.0, 10.0, 5.0), Farmlands, Temperate, Silk, Some("BYZ"), fort 4, cores ["BYZ", "TUR"], coastal true),
    province!(183, "Paris", (9.0, 9.0, 6.0), Farmlands, Temperate, Cloth, Some("FRA"), fort 2, cores ["FRA"], coastal false),
    province!(192, "Bourgogne", (6.0, 5.0, 3.0), Hills, Temperate, Wine, Some("BUR"), fort 0, cores ["BUR", "FRA"], coastal false),
    province!(206, "Lisboa", (6.0, 6.0, 3.0), Coastal, Temperate, Fish, Some("POR"), fort 2, cores ["POR"], coastal true),
    province!(213, "Castilla La Vieja", (5.0, 4.0, 3.0), Drylands, Arid, Wool, Some("CAS"), fort 0, cores ["CAS"], coastal false),
    province!(236, "London", (10.0, 10.0, 5.0), Farmlands, Temperate, Cloth, Some("ENG"), fort 2, cores ["ENG"], coastal true),
    province!(134, "Wien", (8.0, 7.0, 5.0), Farmlands, Temperate, Wine, Some("HAB"), fort 2, cores ["HAB"], coastal false),
    province!(262, "Krakow", (6.0, 6.0, 4.0), Plains, Temperate, Salt, Some("POL"), fort 2, cores ["POL"], coastal false),
    province!(295, "Moskva", (8.0, 7.0, 6.0), Forest, Temperate, Fur, Some("MOS"), fort 2, cores ["MOS"], coastal false),
    province!(1765, "Beijing", (12.0, 11.0, 8.0), Farmlands, Temperate, Silk, Some("MNG"), fort 4, cores ["MNG"], coastal false),
    province!(4559, "Tirol", (3.0, 3.0, 2.0), Mountains, Temperate, Copper, Some("HAB"), fort 0, cores ["HAB"], coastal false),
    province!(1779, "Aadrar", (1.0, 1.0, 1.0), Desert, Arid, Salt, None, fort 0, cores [], coastal false),
];

/// Look up a province by id.
pub fn province(id: u32) -> Option<&'static ProvinceDef> {
    PROVINCES.iter().find(|p| p.id == id)
}

/// All starting provinces owned by `tag`.
pub fn provinces_of(tag: &str) -> impl Iterator<Item = &'static ProvinceDef> + '_ {
    PROVINCES.iter().filter(move |p| p.owner == Some(tag))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        let paris = province(183).unwrap();
        assert_eq!(paris.name, "Paris");
        assert_eq!(paris.development(), 24.0);
        assert!(province(9999).is_none());
    }

    #[test]
    fn test_owned_provinces_are_cored_by_owner() {
        for p in PROVINCES {
            if let Some(owner) = p.owner {
                assert!(p.cores.contains(&owner), "{} lacks owner core", p.name);
            }
        }
    }

    #[test]
    fn test_provinces_of() {
        let habsburg: Vec<_> = provinces_of("HAB").map(|p| p.id).collect();
        assert_eq!(habsburg, vec![134, 4559]);
    }
}
