//! Argument-keyed result cache for pure formulas.
//!
//! Keys are the JSON form of the argument. Arguments that fail to serialize
//! bypass the cache and call the function directly, so cached and uncached
//! results are always identical.

use rustc_hash::FxHashMap;
use serde::Serialize;

pub struct Memo<A, R, F>
where
    F: Fn(&A) -> R,
{
    func: F,
    enabled: bool,
    entries: FxHashMap<String, R>,
    hits: u64,
    misses: u64,
    _arg: std::marker::PhantomData<fn(&A)>,
}

impl<A, R, F> Memo<A, R, F>
where
    A: Serialize,
    R: Clone,
    F: Fn(&A) -> R,
{
    pub fn new(func: F) -> Self {
        Self::with_enabled(func, true)
    }

    /// A disabled memo always calls through; see `RulesConfig::memoize`.
    pub fn with_enabled(func: F, enabled: bool) -> Self {
        Self {
            func,
            enabled,
            entries: FxHashMap::default(),
            hits: 0,
            misses: 0,
            _arg: std::marker::PhantomData,
        }
    }

    pub fn get(&mut self, arg: &A) -> R {
        if !self.enabled {
            return (self.func)(arg);
        }
        let key = match serde_json::to_string(arg) {
            Ok(key) => key,
            Err(e) => {
                log::trace!("Memo key serialization failed, calling through: {}", e);
                return (self.func)(arg);
            }
        };
        if let Some(hit) = self.entries.get(&key) {
            self.hits += 1;
            return hit.clone();
        }
        self.misses += 1;
        let result = (self.func)(arg);
        self.entries.insert(key, result.clone());
        result
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
