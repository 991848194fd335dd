//! Subject system - liberty desire, annexation and tribute.

use crate::bounded::new_liberty_desire;
use crate::systems::economy::{apply_modifier, round_up};
use realmdata::defines::subjects as defines;
use realmdata::SubjectKind;

/// Liberty desire of a subject, 0..=100.
///
/// A subject with an overlord of no development is fully disloyal.
pub fn calculate_liberty_desire(
    kind: SubjectKind,
    subject_development: f64,
    overlord_development: f64,
    modifiers: &[f64],
) -> f64 {
    if overlord_development <= 0.0 {
        return 100.0;
    }
    let relative_power =
        subject_development.max(0.0) / overlord_development * 100.0 * defines::RELATIVE_POWER_WEIGHT;
    let total = kind.def().base_liberty_desire + relative_power + modifiers.iter().sum::<f64>();
    new_liberty_desire(total).get()
}

pub fn can_start_annexation(
    kind: SubjectKind,
    years_as_subject: u32,
    liberty_desire: f64,
    relations: f64,
) -> bool {
    let def = kind.def();
    def.can_be_annexed
        && years_as_subject >= def.min_years_before_annex
        && liberty_desire < defines::ANNEX_MAX_LIBERTY_DESIRE
        && relations >= defines::ANNEX_MIN_RELATIONS
}

/// Diplomatic power to annex a subject of the given development.
pub fn calculate_annexation_cost(development: f64, modifiers: f64) -> f64 {
    round_up(apply_modifier(defines::ANNEX_COST_PER_DEV * development.max(0.0), modifiers)).max(0.0)
}

/// Monthly ducats the subject pays its overlord.
pub fn calculate_subject_income(kind: SubjectKind, subject_income: f64) -> f64 {
    (subject_income * kind.def().pays_overlord).max(0.0)
}

pub fn is_disloyal(liberty_desire: f64) -> bool {
    liberty_desire >= defines::DISLOYAL_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_liberty_desire() {
        // 10 / 100 * 100 * 0.5
        assert_eq!(calculate_liberty_desire(SubjectKind::Vassal, 10.0, 100.0, &[]), 5.0);
        assert_eq!(calculate_liberty_desire(SubjectKind::Vassal, 10.0, 100.0, &[10.0, -5.0]), 10.0);
        // March base -15 floors at 0
        assert_eq!(calculate_liberty_desire(SubjectKind::March, 10.0, 100.0, &[]), 0.0);
        assert_eq!(calculate_liberty_desire(SubjectKind::Vassal, 500.0, 100.0, &[]), 100.0);
    }

    #[test]
    fn test_liberty_desire_without_overlord_development() {
        assert_eq!(calculate_liberty_desire(SubjectKind::Vassal, 10.0, 0.0, &[]), 100.0);
        assert_eq!(calculate_liberty_desire(SubjectKind::March, 0.0, -5.0, &[]), 100.0);
    }

    #[test]
    fn test_annexation_gate() {
        assert!(can_start_annexation(SubjectKind::Vassal, 10, 20.0, 190.0));
        assert!(!can_start_annexation(SubjectKind::Vassal, 9, 20.0, 190.0));
        assert!(!can_start_annexation(SubjectKind::Vassal, 10, 50.0, 190.0));
        assert!(!can_start_annexation(SubjectKind::Vassal, 10, 20.0, 189.0));
        assert!(!can_start_annexation(SubjectKind::March, 100, 0.0, 200.0));
        assert!(!can_start_annexation(SubjectKind::PersonalUnion, 49, 0.0, 200.0));
        assert!(can_start_annexation(SubjectKind::PersonalUnion, 50, 0.0, 200.0));
    }

    #[test]
    fn test_annexation_cost() {
        assert_eq!(calculate_annexation_cost(20.0, 0.0), 160.0);
        assert_eq!(calculate_annexation_cost(20.0, -25.0), 120.0);
        assert_eq!(calculate_annexation_cost(5.0, 10.0), 44.0);
    }

    #[test]
    fn test_subject_income_and_loyalty() {
        assert_eq!(calculate_subject_income(SubjectKind::Vassal, 10.0), 1.0);
        assert_eq!(calculate_subject_income(SubjectKind::March, 10.0), 0.0);
        assert!(is_disloyal(50.0));
        assert!(!is_disloyal(49.9));
    }

    proptest! {
        #[test]
        fn prop_liberty_desire_in_range(
            subject in 0.0..1000.0f64,
            overlord in -10.0..1000.0f64,
            modifier in -100.0..100.0f64,
        ) {
            for kind in SubjectKind::ALL {
                let ld = calculate_liberty_desire(*kind, subject, overlord, &[modifier]);
                prop_assert!((0.0..=100.0).contains(&ld));
            }
        }
    }
}
