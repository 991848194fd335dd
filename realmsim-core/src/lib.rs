//! # Realm Simulation Core
//!
//! Rules and formula engine for a grand-strategy game.
//!
//! Every public function is pure: it reads its arguments and the static
//! tables in `realmdata` and returns a value. There is no game loop, no
//! shared mutable state and no I/O, so identical inputs always give
//! identical outputs.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │   Caller    │────▶│ plain inputs │────▶│  systems::* │
//! │ (UI, CLI)   │     │ (snapshots)  │     │ (pure fns)  │
//! └─────────────┘     └──────────────┘     └──────┬──────┘
//!                                                 │
//!                     ┌──────────────┐     ┌──────▼──────┐
//!                     │  realmdata   │────▶│  results +  │
//!                     │  (tables)    │     │  breakdowns │
//!                     └──────────────┘     └─────────────┘
//! ```
//!
//! ## Key Types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`CombatUnit`] | Army snapshot fed to the combat formulas |
//! | [`Province`] | Province snapshot (development, autonomy, cores) |
//! | [`Budget`] | Income and expense sources with a [`BudgetSummary`] |
//! | [`Acceptance`] | Itemised AI acceptance chance |
//! | [`WarScore`] | War score broken down by source |
//! | [`RulesConfig`] | Seed, caching and bookkeeping limits |
//!
//! ## Bookkeeping
//!
//! Outside the formulas proper:
//! - [`achievements`]: typed unlock conditions over [`GameStats`]
//! - [`notifications`]: filtering, ordering and pruning
//! - [`save`]: save metadata and its SHA-256 checksum

pub mod achievements;
pub mod bounded;
pub mod cache;
pub mod config;
pub mod notifications;
pub mod save;
pub mod state;
pub mod systems;
pub mod testing;

pub use achievements::{Achievement, AchievementProgress, GameStats};
pub use bounded::{new_stability, BoundedF64, BoundedInt};
pub use cache::Memo;
pub use config::{ConfigError, PersistedSettings, RulesConfig};
pub use notifications::Notification;
pub use save::{SaveError, SaveGame};
pub use state::{CombatUnit, GameDate, Leader, Province, Tag, UnitComposition};
pub use systems::{
    calculate_alliance_acceptance, calculate_call_acceptance, evaluate_peace_deal, Acceptance,
    Budget, BudgetSummary, WarScore,
};
