//! Builders for test fixtures.

use crate::state::{CombatUnit, Development, Province, ProvinceId, UnitComposition};
use realmdata::{Climate, Terrain};

pub struct ProvinceBuilder {
    province: Province,
}

impl ProvinceBuilder {
    pub fn new(id: ProvinceId) -> Self {
        Self {
            province: Province {
                id,
                name: format!("Province {id}"),
                development: Development::new(1.0, 1.0, 1.0),
                terrain: Terrain::Plains,
                climate: Climate::Temperate,
                owner: None,
                controller: None,
                autonomy: 0.0,
                unrest: 0.0,
                fort_level: 0,
                buildings: Vec::new(),
                cores: Vec::new(),
                claims: Vec::new(),
            },
        }
    }

    pub fn development(mut self, tax: f64, production: f64, manpower: f64) -> Self {
        self.province.development = Development::new(tax, production, manpower);
        self
    }

    pub fn autonomy(mut self, autonomy: f64) -> Self {
        self.province.autonomy = autonomy;
        self
    }

    pub fn terrain(mut self, terrain: Terrain) -> Self {
        self.province.terrain = terrain;
        self
    }

    pub fn climate(mut self, climate: Climate) -> Self {
        self.province.climate = climate;
        self
    }

    /// Sets owner and controller, and cores the province for the owner.
    pub fn owner(mut self, tag: &str) -> Self {
        self.province.owner = Some(tag.to_string());
        self.province.controller = Some(tag.to_string());
        if !self.province.is_cored_by(tag) {
            self.province.cores.push(tag.to_string());
        }
        self
    }

    pub fn cores(mut self, tags: &[&str]) -> Self {
        self.province.cores = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn fort_level(mut self, level: u32) -> Self {
        self.province.fort_level = level;
        self
    }

    pub fn build(self) -> Province {
        self.province
    }
}

pub struct UnitBuilder {
    unit: CombatUnit,
}

impl UnitBuilder {
    pub fn new() -> Self {
        Self {
            unit: CombatUnit {
                strength: 1000.0,
                morale: 3.0,
                max_morale: 3.0,
                discipline: 100.0,
                tactics: 1.0,
                composition: UnitComposition::default(),
            },
        }
    }

    pub fn strength(mut self, strength: f64) -> Self {
        self.unit.strength = strength;
        self
    }

    pub fn morale(mut self, morale: f64) -> Self {
        self.unit.morale = morale;
        self.unit.max_morale = self.unit.max_morale.max(morale);
        self
    }

    pub fn discipline(mut self, discipline: f64) -> Self {
        self.unit.discipline = discipline;
        self
    }

    pub fn tactics(mut self, tactics: f64) -> Self {
        self.unit.tactics = tactics;
        self
    }

    pub fn infantry(mut self, regiments: u32) -> Self {
        self.unit.composition.infantry = regiments;
        self
    }

    pub fn cavalry(mut self, regiments: u32) -> Self {
        self.unit.composition.cavalry = regiments;
        self
    }

    pub fn artillery(mut self, regiments: u32) -> Self {
        self.unit.composition.artillery = regiments;
        self
    }

    pub fn build(self) -> CombatUnit {
        self.unit
    }
}

impl Default for ProvinceBuilder {
    fn default() -> Self {
        Self::new(1)
    }
}

impl Default for UnitBuilder {
    fn default() -> Self {
        Self::new()
    }
}
