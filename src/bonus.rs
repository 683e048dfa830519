//! Hand bonus resolution.
//!
//! Each hand classification maps to one named stat transform. Only the
//! single winning classification's bonus applies per resolution pass;
//! there is no stacking across hands.

use crate::derived::StatTotals;
use crate::hand::HandRank;

/// The stat transform granted by one hand classification.
///
/// All fields are flat deltas except `damage_reduction`, which is a
/// combat-time rule rather than a stat mutation, and `text`, the effect
/// description shown alongside the hand title.
///
/// # Examples
///
/// ```rust
/// use grimhand::{HandBonus, HandRank};
///
/// let bonus = HandBonus::for_hand(HandRank::StraightFlush);
/// assert_eq!(bonus.life_max, 2);
/// assert_eq!(bonus.ap_max, 1);
///
/// let none = HandBonus::for_hand(HandRank::HighCard);
/// assert!(none.is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandBonus {
    /// Delta to the attack score.
    pub attack: i32,
    /// Delta to strength.
    pub strength: i32,
    /// Delta to agility.
    pub agility: i32,
    /// Delta to maximum life essence.
    pub life_max: i32,
    /// Delta to maximum action points.
    pub ap_max: i32,
    /// Incoming damage reduction (floor 0), applied at combat time.
    pub damage_reduction: i32,
    /// Effect text for the display layer.
    pub text: &'static str,
}

const NO_BONUS: HandBonus = HandBonus {
    attack: 0,
    strength: 0,
    agility: 0,
    life_max: 0,
    ap_max: 0,
    damage_reduction: 0,
    text: "",
};

impl HandBonus {
    /// Look up the bonus for a classification. Total over all hands;
    /// [`HandRank::HighCard`] yields the empty bonus.
    pub fn for_hand(hand: HandRank) -> HandBonus {
        match hand {
            HandRank::HighCard => NO_BONUS,
            HandRank::OnePair => HandBonus {
                attack: 1,
                text: "+1 Attack Score",
                ..NO_BONUS
            },
            HandRank::TwoPair => HandBonus {
                ap_max: 1,
                text: "+1 Action Point (Max)",
                ..NO_BONUS
            },
            HandRank::ThreeOfAKind => HandBonus {
                strength: 1,
                text: "+1 Strength",
                ..NO_BONUS
            },
            HandRank::Straight => HandBonus {
                agility: 1,
                text: "+1 Agility",
                ..NO_BONUS
            },
            HandRank::Flush => HandBonus {
                life_max: 1,
                text: "+1 Life Essence (Max)",
                ..NO_BONUS
            },
            HandRank::FullHouse => HandBonus {
                damage_reduction: 1,
                text: "Reduce all incoming damage by 1 (min 0)",
                ..NO_BONUS
            },
            HandRank::FourOfAKind => HandBonus {
                attack: 2,
                text: "+2 Attack Score",
                ..NO_BONUS
            },
            HandRank::StraightFlush => HandBonus {
                life_max: 2,
                ap_max: 1,
                text: "+2 Life Essence (Max) and +1 Action Point (Max)",
                ..NO_BONUS
            },
            HandRank::FiveOfAKind => HandBonus {
                attack: 3,
                text: "+3 Attack Score",
                ..NO_BONUS
            },
        }
    }

    /// Whether this bonus changes nothing (High Card).
    pub fn is_empty(&self) -> bool {
        *self == NO_BONUS
    }

    /// Apply the stat deltas to a set of running totals.
    ///
    /// Damage reduction is deliberately not applied here; it lives on
    /// [`DerivedStats`](crate::DerivedStats) and only takes effect in
    /// combat.
    pub fn apply(&self, totals: &mut StatTotals) {
        totals.attack += self.attack;
        totals.strength += self.strength;
        totals.agility += self.agility;
        totals.life_max += self.life_max;
        totals.ap_max += self.ap_max;
    }

    /// The display summary for a hand and its bonus, e.g.
    /// `"Primal Current: +2 Life Essence (Max) and +1 Action Point (Max)"`.
    pub fn summary(hand: HandRank) -> String {
        let bonus = HandBonus::for_hand(hand);
        if bonus.is_empty() {
            format!("{}: No bonus for this hand.", hand.title())
        } else {
            format!("{}: {}", hand.title(), bonus.text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_hand_has_a_bonus_entry() {
        let hands = [
            HandRank::HighCard,
            HandRank::OnePair,
            HandRank::TwoPair,
            HandRank::ThreeOfAKind,
            HandRank::Straight,
            HandRank::Flush,
            HandRank::FullHouse,
            HandRank::FourOfAKind,
            HandRank::StraightFlush,
            HandRank::FiveOfAKind,
        ];
        for hand in hands {
            let bonus = HandBonus::for_hand(hand);
            if hand == HandRank::HighCard {
                assert!(bonus.is_empty());
            } else {
                assert!(!bonus.is_empty() || !bonus.text.is_empty());
            }
        }
    }

    #[test]
    fn test_pair_grants_attack() {
        let mut totals = StatTotals::default();
        HandBonus::for_hand(HandRank::OnePair).apply(&mut totals);
        assert_eq!(totals.attack, 1);
        assert_eq!(totals.strength, 0);
    }

    #[test]
    fn test_straight_flush_grants_both() {
        let mut totals = StatTotals::default();
        HandBonus::for_hand(HandRank::StraightFlush).apply(&mut totals);
        assert_eq!(totals.life_max, 2);
        assert_eq!(totals.ap_max, 1);
    }

    #[test]
    fn test_full_house_does_not_mutate_stats() {
        let mut totals = StatTotals::default();
        let bonus = HandBonus::for_hand(HandRank::FullHouse);
        bonus.apply(&mut totals);
        assert_eq!(totals, StatTotals::default());
        assert_eq!(bonus.damage_reduction, 1);
    }

    #[test]
    fn test_summary_format() {
        assert_eq!(
            HandBonus::summary(HandRank::TwoPair),
            "Dual Grip: +1 Action Point (Max)"
        );
        assert_eq!(
            HandBonus::summary(HandRank::HighCard),
            "Desperate Scramble: No bonus for this hand."
        );
    }
}
