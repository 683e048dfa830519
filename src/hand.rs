//! Hand classification.
//!
//! Up to five equipped items, viewed as cards, classify into exactly one
//! of ten ranked hands. Classification is a pure function over the card
//! multiset: rules are checked in fixed descending-level order and the
//! first satisfied rule wins, so no input ever resolves to two hands.
//!
//! Rules that require a minimum card count cannot be satisfied by fewer
//! cards even when the ranks would otherwise qualify: three cards never
//! form a straight, four cards never form a flush.

use crate::card::{Card, ACE};
use serde::{Deserialize, Serialize};

/// One of the ten hand classifications, ordered worst to best.
///
/// The discriminant is the classification level (9 = best). `Ord` follows
/// the level, so hands compare the way the rules rank them.
///
/// # Examples
///
/// ```rust
/// use grimhand::HandRank;
///
/// assert!(HandRank::StraightFlush > HandRank::Flush);
/// assert_eq!(HandRank::TwoPair.level(), 2);
/// assert_eq!(HandRank::HighCard.title(), "Desperate Scramble");
/// ```
#[derive(
    Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub enum HandRank {
    #[default]
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    FiveOfAKind = 9,
}

impl HandRank {
    /// The classification level, 0..=9.
    pub fn level(self) -> u8 {
        self as u8
    }

    /// The conventional poker name, used for rule lookups and logs.
    pub fn name(self) -> &'static str {
        match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
            HandRank::FiveOfAKind => "Five of a Kind",
        }
    }

    /// The in-world title shown to players.
    pub fn title(self) -> &'static str {
        match self {
            HandRank::HighCard => "Desperate Scramble",
            HandRank::OnePair => "Unified Effort",
            HandRank::TwoPair => "Dual Grip",
            HandRank::ThreeOfAKind => "Triad Impact",
            HandRank::Straight => "Unfettered Path",
            HandRank::Flush => "Pure Affinity",
            HandRank::FullHouse => "Anchored Power",
            HandRank::FourOfAKind => "Resonant Force",
            HandRank::StraightFlush => "Primal Current",
            HandRank::FiveOfAKind => "Monolithic Quintessence",
        }
    }
}

impl std::fmt::Display for HandRank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Precomputed shape of a card set, shared by all rule predicates.
struct HandProfile {
    /// Number of valid cards in the hand.
    cards: usize,
    /// Number of distinct ranks appearing exactly twice.
    pairs: usize,
    /// Some rank appears exactly three times.
    trips: bool,
    /// Some rank appears exactly four times.
    quads: bool,
    /// Some rank appears five times.
    quints: bool,
    /// Five or more cards, all one affinity.
    flush: bool,
    /// Five consecutive unique ranks (Ace may play low).
    straight: bool,
}

impl HandProfile {
    fn of(cards: &[Card]) -> HandProfile {
        let mut counts = [0u8; 15];
        for card in cards {
            counts[card.rank.value() as usize] += 1;
        }

        // Ascending by construction.
        let unique: Vec<u8> = (2..=ACE).filter(|&r| counts[r as usize] > 0).collect();

        let flush = cards.len() >= 5
            && cards
                .windows(2)
                .all(|pair| pair[0].affinity == pair[1].affinity);

        HandProfile {
            cards: cards.len(),
            pairs: counts.iter().filter(|&&c| c == 2).count(),
            trips: counts.contains(&3),
            quads: counts.contains(&4),
            quints: counts.contains(&5),
            flush,
            straight: cards.len() >= 5 && is_straight(&unique),
        }
    }
}

/// Five consecutive unique ranks, with 2-3-4-5-A allowed as the low run.
fn is_straight(unique: &[u8]) -> bool {
    if unique.len() < 5 {
        return false;
    }
    if [2, 3, 4, 5, ACE].iter().all(|r| unique.contains(r)) {
        return true;
    }
    unique
        .windows(5)
        .any(|run| run.windows(2).all(|pair| pair[1] == pair[0] + 1))
}

/// Classify up to five cards into exactly one hand.
///
/// Pure and order-independent over the input multiset: the same cards in
/// any order classify identically. Zero cards classify as
/// [`HandRank::HighCard`].
///
/// # Examples
///
/// ```rust
/// use grimhand::{classify, Affinity, Card, HandRank};
///
/// let wheel: Vec<Card> = [2, 3, 4, 5, 14]
///     .iter()
///     .map(|&r| Card::new(r, Affinity::Iron).unwrap())
///     .collect();
/// assert_eq!(classify(&wheel), HandRank::StraightFlush);
///
/// assert_eq!(classify(&[]), HandRank::HighCard);
/// ```
pub fn classify(cards: &[Card]) -> HandRank {
    let profile = HandProfile::of(cards);

    // Descending-level rule table; the first satisfied predicate wins and
    // lower rules are never consulted.
    let rules: [(fn(&HandProfile) -> bool, HandRank); 9] = [
        (|p| p.cards == 5 && p.quints, HandRank::FiveOfAKind),
        (|p| p.straight && p.flush, HandRank::StraightFlush),
        (|p| p.cards >= 4 && p.quads, HandRank::FourOfAKind),
        (|p| p.cards >= 5 && p.trips && p.pairs == 1, HandRank::FullHouse),
        (|p| p.flush, HandRank::Flush),
        (|p| p.straight, HandRank::Straight),
        (|p| p.cards >= 3 && p.trips, HandRank::ThreeOfAKind),
        (|p| p.cards >= 4 && p.pairs == 2, HandRank::TwoPair),
        (|p| p.cards >= 2 && p.pairs == 1, HandRank::OnePair),
    ];

    rules
        .iter()
        .find(|(applies, _)| applies(&profile))
        .map(|&(_, rank)| rank)
        .unwrap_or(HandRank::HighCard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::affinity::Affinity;

    fn cards(ranks: &[u8], affinities: &[Affinity]) -> Vec<Card> {
        ranks
            .iter()
            .zip(affinities.iter())
            .map(|(&r, &a)| Card::new(r, a).unwrap())
            .collect()
    }

    fn mono(ranks: &[u8], affinity: Affinity) -> Vec<Card> {
        ranks
            .iter()
            .map(|&r| Card::new(r, affinity).unwrap())
            .collect()
    }

    use Affinity::{Blood, Bone, Iron, Nature, Shadow};

    #[test]
    fn test_empty_hand_is_high_card() {
        assert_eq!(classify(&[]), HandRank::HighCard);
        assert_eq!(classify(&[]).level(), 0);
    }

    #[test]
    fn test_single_card_is_high_card() {
        assert_eq!(classify(&mono(&[14], Iron)), HandRank::HighCard);
    }

    #[test]
    fn test_five_of_a_kind() {
        let hand = cards(&[9, 9, 9, 9, 9], &[Blood, Bone, Shadow, Iron, Nature]);
        assert_eq!(classify(&hand), HandRank::FiveOfAKind);
    }

    #[test]
    fn test_straight_flush_with_low_ace() {
        let hand = mono(&[2, 3, 4, 5, 14], Iron);
        assert_eq!(classify(&hand), HandRank::StraightFlush);
        assert_eq!(classify(&hand).level(), 8);
    }

    #[test]
    fn test_straight_flush_high() {
        let hand = mono(&[10, 11, 12, 13, 14], Shadow);
        assert_eq!(classify(&hand), HandRank::StraightFlush);
    }

    #[test]
    fn test_four_of_a_kind_with_four_cards() {
        let hand = cards(&[7, 7, 7, 7], &[Blood, Bone, Shadow, Iron]);
        assert_eq!(classify(&hand), HandRank::FourOfAKind);
    }

    #[test]
    fn test_full_house() {
        let hand = cards(&[8, 8, 8, 4, 4], &[Blood, Bone, Shadow, Iron, Nature]);
        assert_eq!(classify(&hand), HandRank::FullHouse);
    }

    #[test]
    fn test_flush_beats_straight_ordering() {
        // Flush but not straight.
        let hand = mono(&[2, 5, 9, 11, 13], Nature);
        assert_eq!(classify(&hand), HandRank::Flush);
        // Straight but not flush.
        let hand = cards(&[5, 6, 7, 8, 9], &[Blood, Bone, Shadow, Iron, Nature]);
        assert_eq!(classify(&hand), HandRank::Straight);
    }

    #[test]
    fn test_three_of_a_kind_with_three_cards() {
        let hand = cards(&[6, 6, 6], &[Blood, Bone, Shadow]);
        assert_eq!(classify(&hand), HandRank::ThreeOfAKind);
    }

    #[test]
    fn test_two_pair_not_one_pair() {
        let hand = cards(&[5, 5, 9, 9, 2], &[Blood, Bone, Shadow, Iron, Nature]);
        assert_eq!(classify(&hand), HandRank::TwoPair);
        assert_eq!(classify(&hand).level(), 2);
    }

    #[test]
    fn test_one_pair() {
        let hand = cards(&[5, 5, 9], &[Blood, Bone, Shadow]);
        assert_eq!(classify(&hand), HandRank::OnePair);
        let hand = cards(&[5, 5], &[Blood, Bone]);
        assert_eq!(classify(&hand), HandRank::OnePair);
    }

    #[test]
    fn test_pair_plus_kickers_is_still_one_pair() {
        let hand = cards(&[5, 5, 9, 8, 2], &[Blood, Bone, Shadow, Iron, Nature]);
        assert_eq!(classify(&hand), HandRank::OnePair);
    }

    #[test]
    fn test_count_gates_block_short_hands() {
        // Three consecutive ranks are never a straight.
        assert_eq!(classify(&mono(&[4, 5, 6], Iron)), HandRank::HighCard);
        // Four same-affinity cards are never a flush.
        assert_eq!(classify(&mono(&[2, 7, 9, 13], Bone)), HandRank::HighCard);
        // Two pairs in four cards qualify, three cards cannot hold two pairs.
        let hand = cards(&[5, 5, 9, 9], &[Blood, Bone, Shadow, Iron]);
        assert_eq!(classify(&hand), HandRank::TwoPair);
    }

    #[test]
    fn test_order_independence() {
        let a = cards(&[5, 9, 5, 2, 9], &[Blood, Shadow, Bone, Nature, Iron]);
        let b = cards(&[9, 9, 5, 5, 2], &[Shadow, Iron, Blood, Bone, Nature]);
        assert_eq!(classify(&a), classify(&b));
    }

    #[test]
    fn test_exactly_one_level_per_input() {
        // A straight flush input must not fall through to flush or straight.
        let hand = mono(&[6, 7, 8, 9, 10], Blood);
        assert_eq!(classify(&hand), HandRank::StraightFlush);
        // A full house input must not fall through to three of a kind.
        let hand = cards(&[3, 3, 3, 12, 12], &[Blood, Bone, Shadow, Iron, Nature]);
        assert_eq!(classify(&hand), HandRank::FullHouse);
    }

    #[test]
    fn test_no_wraparound_straight() {
        // K-A-2-3-4 does not wrap.
        let hand = cards(&[13, 14, 2, 3, 4], &[Blood, Bone, Shadow, Iron, Nature]);
        assert_eq!(classify(&hand), HandRank::HighCard);
    }
}
