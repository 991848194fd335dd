//! Rebellion system - army size, faction choice and uprising progress.
//!
//! Faction choice follows a fixed precedence. Only the final noble/peasant
//! split is random, and it draws from a caller-supplied RNG so replays stay
//! deterministic.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use realmdata::defines::rebels as defines;
use realmdata::RebelKind;
use serde::{Deserialize, Serialize};

/// Regiments in a rising, clamped to 3..=50.
pub fn calculate_rebel_army_size(total_development: f64, unrest: f64) -> u32 {
    let base = defines::BASE_ARMY_SIZE + total_development.max(0.0) / defines::DEV_PER_REGIMENT;
    let size = (base * (1.0 + unrest.max(0.0) / defines::UNREST_DIVISOR)).round();
    (size as u32).clamp(defines::MIN_ARMY_SIZE, defines::MAX_ARMY_SIZE)
}

/// Province and country conditions that pick the rebel faction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RebelContext {
    pub wrong_culture: bool,
    /// Another nation holds a core on the province.
    pub has_core_claim: bool,
    pub wrong_religion: bool,
    pub legitimacy: f64,
    pub autonomy: f64,
}

/// Nationalist, religious, pretender, particularist, then a coin flip.
pub fn determine_rebel_type<R: Rng>(ctx: &RebelContext, rng: &mut R) -> RebelKind {
    if ctx.wrong_culture && ctx.has_core_claim {
        RebelKind::Nationalist
    } else if ctx.wrong_religion {
        RebelKind::Religious
    } else if ctx.legitimacy < defines::PRETENDER_LEGITIMACY {
        RebelKind::Pretender
    } else if ctx.autonomy < defines::PARTICULARIST_AUTONOMY {
        RebelKind::Particularist
    } else if rng.gen_bool(0.5) {
        RebelKind::Noble
    } else {
        RebelKind::Peasant
    }
}

pub fn determine_rebel_type_seeded(ctx: &RebelContext, seed: u64) -> RebelKind {
    let mut rng = StdRng::seed_from_u64(seed);
    determine_rebel_type(ctx, &mut rng)
}

/// Monthly progress toward a rising; unrest below zero rolls progress back.
pub fn calculate_uprising_progress(current: f64, unrest: f64) -> f64 {
    (current + unrest).clamp(0.0, defines::UPRISING_THRESHOLD)
}

pub fn will_rise(progress: f64) -> bool {
    progress >= defines::UPRISING_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loyal() -> RebelContext {
        RebelContext {
            wrong_culture: false,
            has_core_claim: false,
            wrong_religion: false,
            legitimacy: 100.0,
            autonomy: 50.0,
        }
    }

    #[test]
    fn test_army_size() {
        // (3 + 20/10) * (1 + 10/20) = 7.5 -> 8
        assert_eq!(calculate_rebel_army_size(20.0, 10.0), 8);
        assert_eq!(calculate_rebel_army_size(0.0, 0.0), 3);
        assert_eq!(calculate_rebel_army_size(1000.0, 40.0), 50);
    }

    #[test]
    fn test_precedence() {
        let mut rng = StdRng::seed_from_u64(1);
        let everything = RebelContext {
            wrong_culture: true,
            has_core_claim: true,
            wrong_religion: true,
            legitimacy: 0.0,
            autonomy: 0.0,
        };
        assert_eq!(determine_rebel_type(&everything, &mut rng), RebelKind::Nationalist);

        // Wrong culture without a claim falls through.
        let no_claim = RebelContext {
            has_core_claim: false,
            ..everything
        };
        assert_eq!(determine_rebel_type(&no_claim, &mut rng), RebelKind::Religious);

        let pretender = RebelContext {
            legitimacy: 40.0,
            autonomy: 0.0,
            ..loyal()
        };
        assert_eq!(determine_rebel_type(&pretender, &mut rng), RebelKind::Pretender);

        let particularist = RebelContext {
            autonomy: 10.0,
            ..loyal()
        };
        assert_eq!(determine_rebel_type(&particularist, &mut rng), RebelKind::Particularist);
    }

    #[test]
    fn test_fallback_is_noble_or_peasant_and_seeded() {
        let ctx = loyal();
        let first = determine_rebel_type_seeded(&ctx, 42);
        assert!(matches!(first, RebelKind::Noble | RebelKind::Peasant));
        for _ in 0..10 {
            assert_eq!(determine_rebel_type_seeded(&ctx, 42), first);
        }
        let kinds: Vec<_> = (0..64).map(|seed| determine_rebel_type_seeded(&ctx, seed)).collect();
        assert!(kinds.contains(&RebelKind::Noble));
        assert!(kinds.contains(&RebelKind::Peasant));
    }

    #[test]
    fn test_uprising() {
        assert_eq!(calculate_uprising_progress(90.0, 5.0), 95.0);
        assert_eq!(calculate_uprising_progress(98.0, 5.0), 100.0);
        assert_eq!(calculate_uprising_progress(3.0, -5.0), 0.0);
        assert!(will_rise(100.0));
        assert!(!will_rise(99.9));
    }
}
