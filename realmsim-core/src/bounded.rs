use serde::{Deserialize, Serialize};

/// A value clamped to a float range (for continuous values).
/// Used for: autonomy (0 to 100), relations (-200 to +200), trust, liberty desire.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundedF64 {
    value: f64,
    min: f64,
    max: f64,
}

impl BoundedF64 {
    /// NaN inputs land on `min`.
    pub fn new(value: f64, min: f64, max: f64) -> Self {
        Self {
            value: clamp_f64(value, min, max),
            min,
            max,
        }
    }

    pub fn get(&self) -> f64 {
        self.value
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn add(&mut self, delta: f64) {
        self.value = clamp_f64(self.value + delta, self.min, self.max);
    }

    pub fn set(&mut self, value: f64) {
        self.value = clamp_f64(value, self.min, self.max);
    }

    /// Ratio from 0.0 to 1.0.
    /// Returns 0 if max == min.
    pub fn ratio(&self) -> f64 {
        let range = self.max - self.min;
        if range == 0.0 {
            return 0.0;
        }
        (self.value - self.min) / range
    }

    /// Decay toward a target by a rate (e.g., 0.05 = 5%)
    ///
    /// `value = value + (target - value) * rate`
    pub fn decay_toward(&mut self, target: f64, rate: f64) {
        let delta = (target - self.value) * rate;
        self.add(delta);
    }
}

/// Clamp that maps NaN to `min` instead of propagating it.
pub fn clamp_f64(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        return min;
    }
    value.max(min).min(max)
}

/// A value clamped to an integer range (for discrete values).
/// Used for: stability (-3 to +3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoundedInt {
    value: i32,
    min: i32,
    max: i32,
}

impl BoundedInt {
    pub const fn new(value: i32, min: i32, max: i32) -> Self {
        let value = if value < min {
            min
        } else if value > max {
            max
        } else {
            value
        };
        Self { value, min, max }
    }

    pub fn get(&self) -> i32 {
        self.value
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn add(&mut self, delta: i32) {
        self.value = self.value.saturating_add(delta).clamp(self.min, self.max);
    }

    pub fn set(&mut self, value: i32) {
        self.value = value.clamp(self.min, self.max);
    }

    /// Ratio from 0.0 to 1.0.
    /// Returns 0 if max == min.
    pub fn ratio(&self) -> f64 {
        let range = self.max - self.min;
        if range == 0 {
            return 0.0;
        }
        (self.value - self.min) as f64 / range as f64
    }
}

pub type Stability = BoundedInt;
pub type Autonomy = BoundedF64;
pub type Relations = BoundedF64;
pub type Trust = BoundedF64;
pub type LibertyDesire = BoundedF64;

// Factory functions
pub const fn new_stability(level: i32) -> Stability {
    BoundedInt::new(level, -3, 3)
}

pub fn new_autonomy(value: f64) -> Autonomy {
    BoundedF64::new(value, 0.0, 100.0)
}

pub fn new_relations(value: f64) -> Relations {
    use realmdata::defines::diplomacy::{MAX_RELATIONS, MIN_RELATIONS};
    BoundedF64::new(value, MIN_RELATIONS, MAX_RELATIONS)
}

pub fn new_trust(value: f64) -> Trust {
    use realmdata::defines::diplomacy::{MAX_TRUST, MIN_TRUST};
    BoundedF64::new(value, MIN_TRUST, MAX_TRUST)
}

pub fn new_liberty_desire(value: f64) -> LibertyDesire {
    BoundedF64::new(value, 0.0, 100.0)
}
