//! Plain snapshot records handed to the formulas.
//!
//! Callers own authoritative state; every function in this crate reads a
//! snapshot and returns derived values without mutating shared data.

use realmdata::{BuildingId, Climate, Terrain};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// In-game calendar date. Months are a flat 30 days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GameDate {
    pub year: i32,
    pub month: u8, // 1-12
    pub day: u8,   // 1-30
}

impl GameDate {
    pub const DAYS_PER_MONTH: u32 = 30;

    pub fn new(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    pub fn add_days(&self, days: u32) -> Self {
        let mut d = self.day as u32 + days;
        let mut m = self.month as u32;
        let mut y = self.year;

        while d > Self::DAYS_PER_MONTH {
            d -= Self::DAYS_PER_MONTH;
            m += 1;
            if m > 12 {
                m -= 12;
                y += 1;
            }
        }

        Self {
            year: y,
            month: m as u8,
            day: d as u8,
        }
    }

    pub fn add_months(&self, months: u32) -> Self {
        let zero_based = self.month as u32 - 1 + months;
        Self {
            year: self.year + (zero_based / 12) as i32,
            month: (zero_based % 12 + 1) as u8,
            day: self.day,
        }
    }

    /// Whole months from `self` to `later`; negative if `later` is earlier.
    pub fn months_until(&self, later: &GameDate) -> i64 {
        let months = (later.year as i64 - self.year as i64) * 12
            + (later.month as i64 - self.month as i64);
        if later.day < self.day {
            months - 1
        } else {
            months
        }
    }
}

impl Default for GameDate {
    fn default() -> Self {
        Self::new(1444, 11, 11)
    }
}

impl fmt::Display for GameDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.year, self.month, self.day)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid date '{0}', expected year.month.day")]
pub struct ParseDateError(pub String);

impl FromStr for GameDate {
    type Err = ParseDateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseDateError(s.to_string());
        let mut parts = s.trim().split('.');
        let year = parts.next().and_then(|p| p.parse().ok()).ok_or_else(err)?;
        let month: u8 = parts.next().and_then(|p| p.parse().ok()).ok_or_else(err)?;
        let day: u8 = parts.next().and_then(|p| p.parse().ok()).ok_or_else(err)?;
        if parts.next().is_some() || !(1..=12).contains(&month) || !(1..=30).contains(&day) {
            return Err(err());
        }
        Ok(Self::new(year, month, day))
    }
}

pub type Tag = String;
pub type ProvinceId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegimentType {
    Infantry,
    Cavalry,
    Artillery,
}

/// Regiment counts per type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnitComposition {
    pub infantry: u32,
    pub cavalry: u32,
    pub artillery: u32,
}

impl UnitComposition {
    pub fn new(infantry: u32, cavalry: u32, artillery: u32) -> Self {
        Self {
            infantry,
            cavalry,
            artillery,
        }
    }

    pub fn total(&self) -> u32 {
        self.infantry + self.cavalry + self.artillery
    }

    pub fn count(&self, kind: RegimentType) -> u32 {
        match kind {
            RegimentType::Infantry => self.infantry,
            RegimentType::Cavalry => self.cavalry,
            RegimentType::Artillery => self.artillery,
        }
    }
}

/// An army as seen by one combat tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatUnit {
    /// Men.
    pub strength: f64,
    pub morale: f64,
    pub max_morale: f64,
    /// Percent; 100 is neutral.
    pub discipline: f64,
    /// Damage multiplier per man.
    pub tactics: f64,
    #[serde(default)]
    pub composition: UnitComposition,
}

/// Commander pips. Siege pips feed [`resolve_siege_roll`] directly.
///
/// [`resolve_siege_roll`]: crate::systems::siege::resolve_siege_roll
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Leader {
    pub fire: u8,
    pub shock: u8,
    pub siege: u8,
}

/// Which of the three development columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DevType {
    Tax,
    Production,
    Manpower,
}

/// Development triple.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Development {
    pub tax: f64,
    pub production: f64,
    pub manpower: f64,
}

impl Development {
    pub fn new(tax: f64, production: f64, manpower: f64) -> Self {
        Self {
            tax,
            production,
            manpower,
        }
    }

    pub fn total(&self) -> f64 {
        self.tax + self.production + self.manpower
    }

    /// Copy with one point added to `kind`.
    pub fn develop(&self, kind: DevType) -> Self {
        let mut next = *self;
        match kind {
            DevType::Tax => next.tax += 1.0,
            DevType::Production => next.production += 1.0,
            DevType::Manpower => next.manpower += 1.0,
        }
        next
    }
}

/// Province snapshot as held by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Province {
    pub id: ProvinceId,
    pub name: String,
    pub development: Development,
    pub terrain: Terrain,
    pub climate: Climate,
    pub owner: Option<Tag>,
    pub controller: Option<Tag>,
    /// 0-100.
    #[serde(default)]
    pub autonomy: f64,
    #[serde(default)]
    pub unrest: f64,
    #[serde(default)]
    pub fort_level: u32,
    #[serde(default)]
    pub buildings: Vec<BuildingId>,
    #[serde(default)]
    pub cores: Vec<Tag>,
    #[serde(default)]
    pub claims: Vec<Tag>,
}

impl Province {
    pub fn is_cored_by(&self, tag: &str) -> bool {
        self.cores.iter().any(|c| c == tag)
    }

    pub fn is_occupied(&self) -> bool {
        self.controller.is_some() && self.controller != self.owner
    }
}

impl From<&realmdata::ProvinceDef> for Province {
    fn from(def: &realmdata::ProvinceDef) -> Self {
        let owner = def.owner.map(str::to_string);
        Self {
            id: def.id,
            name: def.name.to_string(),
            development: Development::new(def.base_tax, def.base_production, def.base_manpower),
            terrain: def.terrain,
            climate: def.climate,
            controller: owner.clone(),
            owner,
            autonomy: 0.0,
            unrest: 0.0,
            fort_level: def.fort_level,
            buildings: Vec::new(),
            cores: def.cores.iter().map(|c| c.to_string()).collect(),
            claims: Vec::new(),
        }
    }
}
