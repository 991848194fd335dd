//! Diplomacy system - relation records, opinion decay and trust.

use crate::bounded::{new_relations, new_trust};
use crate::state::Tag;
use realmdata::defines::diplomacy as defines;
use serde::{Deserialize, Serialize};

/// A decaying opinion entry such as "Insulted" or "Improved relations".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpinionModifier {
    pub id: String,
    pub value: f64,
    /// Magnitude removed per month.
    pub decay: f64,
    /// Months left; `None` lasts until decayed to zero.
    #[serde(default)]
    pub duration_months: Option<u32>,
}

/// One month of decay. Returns `None` once the modifier has expired.
pub fn decay_opinion_modifier(modifier: &OpinionModifier) -> Option<OpinionModifier> {
    let step = modifier.decay.abs();
    let value = if modifier.value > 0.0 {
        (modifier.value - step).max(0.0)
    } else {
        (modifier.value + step).min(0.0)
    };
    let duration_months = match modifier.duration_months {
        Some(0) | Some(1) => return None,
        Some(n) => Some(n - 1),
        None => None,
    };
    if value == 0.0 {
        return None;
    }
    Some(OpinionModifier {
        id: modifier.id.clone(),
        value,
        decay: modifier.decay,
        duration_months,
    })
}

/// Base opinion plus modifiers, clamped to [-200, 200].
pub fn calculate_opinion(base: f64, modifiers: &[OpinionModifier]) -> f64 {
    let total = base + modifiers.iter().map(|m| m.value).sum::<f64>();
    new_relations(total).get()
}

/// Relation between two nations. Symmetric: the pair order carries no meaning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiplomaticRelation {
    pub nation_a: Tag,
    pub nation_b: Tag,
    pub relations: f64,
    pub trust: f64,
    #[serde(default)]
    pub modifiers: Vec<OpinionModifier>,
}

impl DiplomaticRelation {
    pub fn new(a: &str, b: &str) -> Self {
        Self {
            nation_a: a.to_string(),
            nation_b: b.to_string(),
            relations: 0.0,
            trust: defines::NEUTRAL_TRUST,
            modifiers: Vec::new(),
        }
    }

    pub fn involves(&self, a: &str, b: &str) -> bool {
        (self.nation_a == a && self.nation_b == b) || (self.nation_a == b && self.nation_b == a)
    }

    /// The other side of the pair, if `tag` is in it.
    pub fn other(&self, tag: &str) -> Option<&str> {
        if self.nation_a == tag {
            Some(&self.nation_b)
        } else if self.nation_b == tag {
            Some(&self.nation_a)
        } else {
            None
        }
    }

    pub fn opinion(&self) -> f64 {
        calculate_opinion(self.relations, &self.modifiers)
    }

    /// Copy with every modifier decayed by one month.
    pub fn decayed(&self) -> Self {
        Self {
            modifiers: self.modifiers.iter().filter_map(decay_opinion_modifier).collect(),
            ..self.clone()
        }
    }
}

/// Find the relation between two nations in either order.
pub fn find_relation<'a>(
    relations: &'a [DiplomaticRelation],
    a: &str,
    b: &str,
) -> Option<&'a DiplomaticRelation> {
    relations.iter().find(|r| r.involves(a, b))
}

/// Trust earned from an alliance's history. This is a delta; see
/// [`apply_trust_change`] for the bounded result.
pub fn calculate_trust_change(honored_calls: u32, refused_calls: u32, years_allied: f64) -> f64 {
    defines::TRUST_PER_HONORED_CALL * honored_calls as f64
        + defines::TRUST_PER_REFUSED_CALL * refused_calls as f64
        + years_allied.max(0.0).min(defines::MAX_TRUST_FROM_YEARS)
}

/// Apply a trust delta, keeping trust within [-100, 100].
pub fn apply_trust_change(current: f64, delta: f64) -> f64 {
    let mut trust = new_trust(current);
    trust.add(delta);
    trust.get()
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeclinePenalties {
    pub prestige: f64,
    /// Applied to every ally, not only the caller.
    pub trust_with_all_allies: f64,
    pub breaks_alliance: bool,
}

pub fn decline_call_penalties() -> DeclinePenalties {
    DeclinePenalties {
        prestige: defines::DECLINE_PRESTIGE,
        trust_with_all_allies: defines::DECLINE_TRUST,
        breaks_alliance: true,
    }
}

/// Trust gained with the caller for answering a call to arms.
pub fn accept_call_trust_bonus() -> f64 {
    defines::TRUST_PER_HONORED_CALL
}

#[cfg(test)]
mod tests {
    use super::*;

    fn modifier(value: f64, decay: f64, duration: Option<u32>) -> OpinionModifier {
        OpinionModifier {
            id: "test".to_string(),
            value,
            decay,
            duration_months: duration,
        }
    }

    #[test]
    fn test_decay_moves_toward_zero() {
        let m = decay_opinion_modifier(&modifier(50.0, 1.0, None)).unwrap();
        assert_eq!(m.value, 49.0);
        let m = decay_opinion_modifier(&modifier(-50.0, 1.0, None)).unwrap();
        assert_eq!(m.value, -49.0);
        assert!(decay_opinion_modifier(&modifier(0.5, 1.0, None)).is_none());
    }

    #[test]
    fn test_decay_expires_by_duration() {
        let m = decay_opinion_modifier(&modifier(50.0, 0.0, Some(2))).unwrap();
        assert_eq!(m.duration_months, Some(1));
        assert_eq!(m.value, 50.0);
        assert!(decay_opinion_modifier(&m).is_none());
    }

    #[test]
    fn test_opinion_clamps() {
        let mods = vec![modifier(150.0, 1.0, None), modifier(100.0, 1.0, None)];
        assert_eq!(calculate_opinion(0.0, &mods), 200.0);
        assert_eq!(calculate_opinion(-300.0, &[]), -200.0);
    }

    #[test]
    fn test_relation_is_symmetric() {
        let rel = DiplomaticRelation::new("FRA", "CAS");
        assert!(rel.involves("FRA", "CAS"));
        assert!(rel.involves("CAS", "FRA"));
        assert!(!rel.involves("FRA", "ENG"));
        assert_eq!(rel.other("CAS"), Some("FRA"));
        assert_eq!(rel.other("ENG"), None);
        let all = vec![rel.clone(), DiplomaticRelation::new("ENG", "POR")];
        assert_eq!(find_relation(&all, "POR", "ENG").map(|r| r.nation_a.as_str()), Some("ENG"));
    }

    #[test]
    fn test_relation_decay_drops_expired() {
        let mut rel = DiplomaticRelation::new("FRA", "CAS");
        rel.modifiers.push(modifier(1.0, 1.0, None));
        rel.modifiers.push(modifier(10.0, 1.0, None));
        let next = rel.decayed();
        assert_eq!(next.modifiers.len(), 1);
        assert_eq!(next.opinion(), 9.0);
    }

    #[test]
    fn test_trust_change() {
        assert_eq!(calculate_trust_change(2, 1, 10.0), 10.0);
        assert_eq!(calculate_trust_change(0, 0, 80.0), 50.0);
        // The delta itself is unbounded...
        assert_eq!(calculate_trust_change(40, 0, 50.0), 250.0);
        // ...but applied trust is not.
        assert_eq!(apply_trust_change(50.0, 250.0), 100.0);
        assert_eq!(apply_trust_change(-90.0, -50.0), -100.0);
        assert_eq!(apply_trust_change(50.0, 5.0), 55.0);
    }

    #[test]
    fn test_call_consequences() {
        let p = decline_call_penalties();
        assert_eq!(p.prestige, -25.0);
        assert_eq!(p.trust_with_all_allies, -10.0);
        assert!(p.breaks_alliance);
        assert_eq!(accept_call_trust_bonus(), 5.0);
    }
}
