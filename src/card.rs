//! Card ranks and the card view of equipped items.
//!
//! Equipped items carry a card-like rank (2-10, J, Q, K, A) and an
//! affinity that doubles as a suit. Hand classification operates on the
//! `Card` view built from slots where both halves are present.

use crate::affinity::Affinity;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A card rank in the 2..=14 domain.
///
/// Face cards map onto the high end: Jack=11, Queen=12, King=13, Ace=14.
/// The Ace may additionally act as a low card to complete a 2-3-4-5-A
/// straight during classification.
///
/// # Examples
///
/// ```rust
/// use grimhand::Rank;
///
/// assert_eq!(Rank::parse("A"), Rank::new(14));
/// assert_eq!(Rank::parse("10"), Rank::new(10));
/// assert_eq!(Rank::parse("q").unwrap().value(), 12);
/// assert_eq!(Rank::parse("15"), None);
/// assert_eq!(Rank::new(14).unwrap().to_string(), "A");
/// ```
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Rank(u8);

/// Numeric value of an Ace when used high.
pub const ACE: u8 = 14;

impl Rank {
    /// Create a rank from its numeric value, rejecting anything outside
    /// the 2..=14 domain.
    pub fn new(value: u8) -> Option<Rank> {
        if (2..=ACE).contains(&value) {
            Some(Rank(value))
        } else {
            None
        }
    }

    /// Parse a rank from catalog text.
    ///
    /// Like [`Affinity::parse`](crate::Affinity::parse) this is lenient:
    /// whitespace is trimmed, face cards accept either case, and numeric
    /// ranks are accepted as digits. Unrecognized text yields `None` and
    /// downstream code treats the slot as incomplete.
    pub fn parse(text: &str) -> Option<Rank> {
        let text = text.trim();
        match text.to_ascii_uppercase().as_str() {
            "A" => Rank::new(14),
            "K" => Rank::new(13),
            "Q" => Rank::new(12),
            "J" => Rank::new(11),
            other => other.parse::<u8>().ok().and_then(Rank::new),
        }
    }

    /// The numeric value, always in 2..=14.
    pub fn value(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            14 => f.write_str("A"),
            13 => f.write_str("K"),
            12 => f.write_str("Q"),
            11 => f.write_str("J"),
            n => write!(f, "{}", n),
        }
    }
}

// Ranks travel over the wire as their numeric value; deserialization
// re-validates the 2..=14 domain.
impl Serialize for Rank {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Rank {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = u8::deserialize(deserializer)?;
        Rank::new(value).ok_or_else(|| {
            serde::de::Error::custom(format!("rank {} outside the 2..=14 domain", value))
        })
    }
}

/// The card view of a fully specified equipped item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Card rank, Ace high.
    pub rank: Rank,
    /// Affinity acting as the suit.
    pub affinity: Affinity,
}

impl Card {
    /// Create a card from a raw rank value, for tests and demos.
    ///
    /// Returns `None` if the value is outside 2..=14.
    pub fn new(rank: u8, affinity: Affinity) -> Option<Card> {
        Rank::new(rank).map(|rank| Card { rank, affinity })
    }
}
