//! Game mechanic constants (defines).
//!
//! Every formula in `realmsim-core` reads its tuning numbers from here so the
//! rules can be rebalanced in one place. Percentages are expressed in 0–100.

/// Combat constants
pub mod combat {
    /// Combat width by military technology: `(minimum tech, width)`.
    pub const WIDTH_BY_TECH: &[(u8, u32)] = &[
        (1, 20),
        (5, 22),
        (10, 24),
        (15, 26),
        (19, 28),
        (22, 30),
        (24, 32),
        (27, 34),
        (30, 36),
    ];

    /// Artillery damage multiplier during the fire phase
    pub const ARTILLERY_FIRE_MULTIPLIER: f64 = 1.5;

    /// Cavalry damage multiplier during the shock phase
    pub const CAVALRY_SHOCK_MULTIPLIER: f64 = 1.25;

    /// Flat damage added per leader pip in the active phase
    pub const LEADER_PIP_DAMAGE: f64 = 50.0;

    /// Discipline at which no bonus or penalty applies
    pub const BASE_DISCIPLINE: f64 = 100.0;

    /// Divisor for terrain modifiers (`1 + value / 10`)
    pub const TERRAIN_DIVISOR: f64 = 10.0;

    /// Fraction of casualty ratio converted into morale damage
    pub const MORALE_DAMAGE_FACTOR: f64 = 0.5;

    /// Units retreat at or below this fraction of maximum morale
    pub const RETREAT_MORALE_RATIO: f64 = 0.5;

    /// Flanking bonus per uncontested frontline slot (percent)
    pub const FLANKING_BONUS_PER_SLOT: f64 = 5.0;

    /// Maximum flanking bonus (percent)
    pub const MAX_FLANKING_BONUS: f64 = 25.0;

    /// Men per regiment
    pub const REGIMENT_SIZE: f64 = 1000.0;

    /// Casualties inflicted per point of phase damage
    pub const CASUALTIES_PER_DAMAGE: f64 = 0.01;

    /// War score per battle is `loser casualties / this`, clamped to the range below
    pub const CASUALTIES_PER_WARSCORE: f64 = 1000.0;
    pub const MIN_BATTLE_WARSCORE: f64 = 1.0;
    pub const MAX_BATTLE_WARSCORE: f64 = 10.0;

    /// Prestige gained per point of battle war score
    pub const PRESTIGE_PER_WARSCORE: f64 = 0.5;
}

/// Siege constants
pub mod siege {
    /// Progress per 1000 besieging troops per phase
    pub const TROOPS_PER_PROGRESS: f64 = 1000.0;

    /// Progress per artillery regiment
    pub const ARTILLERY_PROGRESS: f64 = 2.0;

    /// Progress removed per fort level
    pub const FORT_LEVEL_PENALTY: f64 = 3.0;

    /// Siege progress never drops below this per phase
    pub const MIN_PROGRESS: u32 = 1;

    /// A siege phase succeeds when the total reaches this value
    pub const SUCCESS_THRESHOLD: i64 = 20;

    /// Artillery bonus to the siege roll is capped here
    pub const ARTILLERY_BONUS_MAX: u32 = 5;

    /// Bonus for a blockaded coastal fort
    pub const BLOCKADE_BONUS: i64 = 1;

    /// Roll bonus per siege pip of the besieging general
    pub const GENERAL_SIEGE_PIP_BONUS: i64 = 1;

    /// Natural roll that causes disease among the besiegers
    pub const DISEASE_OUTBREAK_ROLL: u8 = 1;

    /// Natural roll that breaches the walls outright
    pub const WALL_BREACH_ROLL: u8 = 14;
}

/// Attrition constants
pub mod attrition {
    /// Base attrition when over the supply limit (percent)
    pub const BASE_PERCENT: f64 = 1.0;

    /// Attrition added per 100% over the supply limit (percent)
    pub const OVER_LIMIT_MULTIPLIER: f64 = 1.0;

    /// Attrition used when the supply limit is zero or negative
    pub const NO_SUPPLY_PERCENT: f64 = 5.0;

    /// Maximum monthly attrition (percent)
    pub const MAX_PERCENT: f64 = 5.0;
}

/// Economy constants
pub mod economy {
    /// Goods produced per point of base production
    pub const BASE_PRODUCTION_MULTIPLIER: f64 = 0.2;

    /// Months in a year for income calculations
    pub const MONTHS_PER_YEAR: f64 = 12.0;

    /// Loan size as a multiple of monthly income
    pub const LOAN_SIZE_INCOME_MONTHS: f64 = 5.0;

    /// Base yearly interest rate (percent)
    pub const BASE_INTEREST_RATE: f64 = 4.0;

    /// Interest rate added per outstanding loan (percent)
    pub const INTEREST_PER_LOAN: f64 = 0.5;

    /// Default maximum number of concurrent loans
    pub const MAX_LOANS: u32 = 10;

    /// Yearly inflation per unit of gold share of income (fraction)
    pub const GOLD_INFLATION_FACTOR: f64 = 0.5;

    /// Monthly maintenance per regiment by type (ducats)
    pub const INFANTRY_MAINTENANCE: f64 = 0.2;
    pub const CAVALRY_MAINTENANCE: f64 = 0.5;
    pub const ARTILLERY_MAINTENANCE: f64 = 0.6;

    /// Monthly maintenance per fort level (ducats)
    pub const FORT_MAINTENANCE_PER_LEVEL: f64 = 1.0;

    /// Recruitment cost per regiment by type (ducats)
    pub const INFANTRY_COST: f64 = 10.0;
    pub const CAVALRY_COST: f64 = 25.0;
    pub const ARTILLERY_COST: f64 = 30.0;

    /// Base technology cost (monarch power) and per-level increase
    pub const TECH_BASE_COST: f64 = 600.0;
    pub const TECH_COST_PER_LEVEL: f64 = 60.0;

    /// Maximum technology level
    pub const MAX_TECH_LEVEL: u8 = 32;

    /// Cost increase per missing institution (percent)
    pub const INSTITUTION_PENALTY_PERCENT: f64 = 10.0;

    /// Coring cost per development (administrative power)
    pub const CORING_COST_PER_DEV: f64 = 10.0;

    /// Base coring time (months)
    pub const BASE_CORING_TIME: f64 = 36.0;

    /// Advisor salary per squared skill level (ducats/month)
    pub const ADVISOR_SALARY_PER_SKILL_SQ: f64 = 1.0;

    /// Economic health thresholds: `(loans, inflation)` per band, worst first
    pub const CRITICAL_THRESHOLD: (u32, f64) = (10, 20.0);
    pub const POOR_THRESHOLD: (u32, f64) = (5, 10.0);
    pub const STRAINED_THRESHOLD: (u32, f64) = (2, 5.0);
    pub const STABLE_THRESHOLD: (u32, f64) = (1, 2.0);
}

/// Bankruptcy effects bundle
pub mod bankruptcy {
    pub const STABILITY_CHANGE: i32 = -3;
    pub const PRESTIGE_CHANGE: f64 = -50.0;
    pub const INFLATION_CHANGE: f64 = 10.0;
    pub const DURATION_MONTHS: u32 = 60;
    pub const TAX_MODIFIER: f64 = -50.0;
    pub const INTEREST_MODIFIER: f64 = 100.0;
}

/// Stability constants
pub mod stability {
    pub const MIN: i32 = -3;
    pub const MAX: i32 = 3;

    /// Flat administrative cost of every stability step
    pub const BASE_COST: f64 = 100.0;

    /// Cost per level of the stability being reached
    pub const COST_PER_LEVEL: f64 = 50.0;

    /// No single step costs less than this
    pub const MIN_STEP_COST: f64 = 25.0;
}

/// Unrest constants
pub mod unrest {
    pub const WRONG_CULTURE: f64 = 2.0;
    pub const WRONG_RELIGION: f64 = 4.0;
    pub const NOT_CORED: f64 = 2.0;
    pub const OVEREXTENSION_DIVISOR: f64 = 10.0;
    pub const WAR_EXHAUSTION_DIVISOR: f64 = 2.0;
    pub const AUTONOMY_DIVISOR: f64 = 25.0;
}

/// Autonomy constants
pub mod autonomy {
    /// Monthly autonomy decay toward the minimum (percentage points)
    pub const MONTHLY_DECAY: f64 = 0.05;

    /// Unrest at which autonomy stops decaying entirely
    pub const UNREST_DAMPING: f64 = 20.0;

    /// Minimum autonomy for provinces without a core
    pub const UNCORED_FLOOR: f64 = 75.0;

    /// Minimum autonomy for territories
    pub const TERRITORY_FLOOR: f64 = 50.0;

    pub const DIFFERENT_RELIGION: f64 = 25.0;
    pub const TRADE_COMPANY: f64 = 25.0;

    /// Raise/lower autonomy actions
    pub const ACTION_STEP: f64 = 25.0;
    pub const INCREASE_UNREST: f64 = -10.0;
    pub const DECREASE_UNREST: f64 = 10.0;
    pub const DECREASE_COOLDOWN_MONTHS: u32 = 120;
}

/// Development constants
pub mod development {
    pub const BASE_COST: f64 = 50.0;

    /// Development above which every further point costs more
    pub const COST_THRESHOLD: f64 = 10.0;

    pub const COST_PER_DEV_ABOVE_THRESHOLD: f64 = 2.0;

    /// Building slots: base plus one per this much development
    pub const BASE_BUILDING_SLOTS: u32 = 2;
    pub const DEV_PER_BUILDING_SLOT: f64 = 10.0;
}

/// Manpower constants
pub mod manpower {
    /// Men per point of base manpower development
    pub const MEN_PER_DEV: f64 = 1000.0;

    /// Base manpower pool for all countries
    pub const BASE_MANPOWER: f64 = 10000.0;

    /// Months to recover from 0 to max manpower at the base rate
    pub const RECOVERY_MONTHS: f64 = 50.0;

    /// Monthly recovery is clamped to this range (fraction of max)
    pub const MIN_RECOVERY_RATE: f64 = 0.01;
    pub const MAX_RECOVERY_RATE: f64 = 0.5;
}

/// Colonisation constants
pub mod colonial {
    /// Settlers needed for a colony to become a city
    pub const SETTLERS_TARGET: f64 = 1000.0;

    /// Growth lost per point of native hostility
    pub const HOSTILITY_PENALTY: f64 = 2.0;

    /// Colonies always grow at least this much per month
    pub const MIN_GROWTH: f64 = 1.0;

    /// Monthly maintenance per colony and per 100 distance
    pub const BASE_MAINTENANCE: f64 = 5.0;
    pub const MAINTENANCE_PER_100_DISTANCE: f64 = 1.0;
}

/// Rebellion constants
pub mod rebels {
    pub const BASE_ARMY_SIZE: f64 = 3.0;
    pub const DEV_PER_REGIMENT: f64 = 10.0;
    pub const UNREST_DIVISOR: f64 = 20.0;
    pub const MIN_ARMY_SIZE: u32 = 3;
    pub const MAX_ARMY_SIZE: u32 = 50;

    /// Below this legitimacy pretenders rise
    pub const PRETENDER_LEGITIMACY: f64 = 50.0;

    /// Below this autonomy particularists rise
    pub const PARTICULARIST_AUTONOMY: f64 = 25.0;

    /// Rebels rise once progress reaches this value
    pub const UPRISING_THRESHOLD: f64 = 100.0;
}

/// War score and peace constants
pub mod peace {
    pub const MAX_BATTLE_SCORE: f64 = 40.0;
    pub const MAX_OCCUPATION_SCORE: f64 = 100.0;
    pub const MAX_WAR_GOAL_SCORE: f64 = 25.0;
    pub const MAX_BLOCKADE_SCORE: f64 = 25.0;
    pub const MAX_TOTAL_SCORE: f64 = 100.0;

    /// War score gained per battle won
    pub const SCORE_PER_BATTLE: f64 = 5.0;

    /// War-goal score gained per month the goal is held
    pub const WAR_GOAL_SCORE_PER_MONTH: f64 = 1.0;

    /// Acceptance: weight of war exhaustion and divisor of relations
    pub const WAR_EXHAUSTION_WEIGHT: f64 = 2.0;
    pub const RELATIONS_DIVISOR: f64 = 10.0;

    /// Treasury/income scaled demands are divided by this first
    pub const VALUE_SCALING_DIVISOR: f64 = 100.0;

    /// Aggressive expansion decay per month
    pub const AE_DECAY_PER_MONTH: f64 = 2.0;

    /// War exhaustion accrual
    pub const EXHAUSTION_PER_MONTH: f64 = 0.05;
    pub const EXHAUSTION_PER_BATTLE_LOST: f64 = 0.5;
    pub const OCCUPATION_EXHAUSTION_DIVISOR: f64 = 20.0;
    pub const MAX_WAR_EXHAUSTION: f64 = 20.0;
}

/// Diplomacy constants
pub mod diplomacy {
    pub const MIN_RELATIONS: f64 = -200.0;
    pub const MAX_RELATIONS: f64 = 200.0;
    pub const MIN_TRUST: f64 = -100.0;
    pub const MAX_TRUST: f64 = 100.0;

    /// Alliance acceptance weights
    pub const RELATIONS_WEIGHT: f64 = 0.5;
    pub const REPUTATION_WEIGHT: f64 = 5.0;
    pub const POWER_WEIGHT: f64 = 0.5;
    pub const POWER_CAP: f64 = 20.0;
    pub const SAME_RELIGION_BONUS: f64 = 10.0;
    pub const COMMON_ENEMY_BONUS: f64 = 20.0;
    pub const RIVAL_PENALTY: f64 = -100.0;

    /// Call-to-arms acceptance weights
    pub const CALL_BASE: f64 = 50.0;
    pub const NEUTRAL_TRUST: f64 = 50.0;
    pub const TRUST_ABOVE_WEIGHT: f64 = 0.5;
    pub const TRUST_BELOW_WEIGHT: f64 = 2.0;
    pub const CALL_RELATIONS_DIVISOR: f64 = 10.0;
    pub const DEBT_PENALTY: f64 = -25.0;
    pub const NEGATIVE_STABILITY_PENALTY: f64 = 10.0;
    pub const ALREADY_AT_WAR_PENALTY: f64 = -30.0;
    pub const ENEMY_STRENGTH_WEIGHT: f64 = 20.0;
    pub const ENEMY_STRENGTH_CAP: f64 = 30.0;

    /// Trust changes
    pub const TRUST_PER_HONORED_CALL: f64 = 5.0;
    pub const TRUST_PER_REFUSED_CALL: f64 = -10.0;
    pub const MAX_TRUST_FROM_YEARS: f64 = 50.0;

    /// Declining a call to arms
    pub const DECLINE_PRESTIGE: f64 = -25.0;
    pub const DECLINE_TRUST: f64 = -10.0;
}

/// Subject constants
pub mod subjects {
    /// Weight of the relative-power term in liberty desire
    pub const RELATIVE_POWER_WEIGHT: f64 = 0.5;

    /// Annexation requires liberty desire strictly below this
    pub const ANNEX_MAX_LIBERTY_DESIRE: f64 = 50.0;

    /// Annexation requires relations at or above this
    pub const ANNEX_MIN_RELATIONS: f64 = 190.0;

    /// Diplomatic power per development to annex
    pub const ANNEX_COST_PER_DEV: f64 = 8.0;

    /// Subjects at or above this liberty desire are disloyal
    pub const DISLOYAL_THRESHOLD: f64 = 50.0;
}
