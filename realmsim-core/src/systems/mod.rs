//! Rules systems. Each module is a set of pure formulas over plain inputs.

pub mod alliance;
pub mod attrition;
pub mod autonomy;
pub mod balance;
pub mod colonization;
pub mod combat;
pub mod development;
pub mod diplomacy;
pub mod economy;
pub mod manpower;
pub mod peace;
pub mod rebels;
pub mod siege;
pub mod stability;
pub mod subjects;
pub mod war_score;

pub use alliance::{calculate_alliance_acceptance, calculate_call_acceptance, Acceptance};
pub use combat::{calculate_combat_width, resolve_combat_phase, BattleContext, CombatPhase};
pub use economy::{Budget, BudgetSummary, EconomicHealth};
pub use peace::{evaluate_peace_deal, PeaceDemand, PeaceEvaluation};
pub use war_score::WarScore;
