//! Affinity identity.
//!
//! Affinities are a shared category on both characters and equipment. A
//! character's affinity drives the per-item alignment bonus, and item
//! affinities double as card suits for hand classification.

use serde::{Deserialize, Serialize};

/// One of the five affinities shared by characters and items.
///
/// # Examples
///
/// ```rust
/// use grimhand::Affinity;
///
/// assert_eq!(Affinity::parse("iron"), Some(Affinity::Iron));
/// assert_eq!(Affinity::parse(" Blood "), Some(Affinity::Blood));
/// assert_eq!(Affinity::parse("Void"), None);
/// assert_eq!(Affinity::Shadow.name(), "Shadow");
/// ```
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Affinity {
    Blood,
    Bone,
    Shadow,
    Iron,
    Nature,
}

/// The stat that receives the +1 alignment bonus for an aligned item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignedStat {
    LifeMax,
    Strength,
    Agility,
    ApMax,
}

impl Affinity {
    /// All five affinities, in declaration order.
    pub const ALL: [Affinity; 5] = [
        Affinity::Blood,
        Affinity::Bone,
        Affinity::Shadow,
        Affinity::Iron,
        Affinity::Nature,
    ];

    /// Parse an affinity from catalog text.
    ///
    /// Parsing is lenient: surrounding whitespace is trimmed and case is
    /// ignored, since the text comes from externally maintained
    /// spreadsheets. Unrecognized text yields `None`, which downstream
    /// code treats as an incomplete slot rather than an error.
    pub fn parse(text: &str) -> Option<Affinity> {
        match text.trim().to_ascii_lowercase().as_str() {
            "blood" => Some(Affinity::Blood),
            "bone" => Some(Affinity::Bone),
            "shadow" => Some(Affinity::Shadow),
            "iron" => Some(Affinity::Iron),
            "nature" => Some(Affinity::Nature),
            _ => None,
        }
    }

    /// The canonical display name, matching attribute table keys.
    pub fn name(self) -> &'static str {
        match self {
            Affinity::Blood => "Blood",
            Affinity::Bone => "Bone",
            Affinity::Shadow => "Shadow",
            Affinity::Iron => "Iron",
            Affinity::Nature => "Nature",
        }
    }

    /// The stat a matching equipped item grants +1 to.
    ///
    /// Blood and Nature both feed life; the alignment bonus is keyed on
    /// affinity identity, not on the item itself.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use grimhand::{Affinity, AlignedStat};
    ///
    /// assert_eq!(Affinity::Iron.aligned_stat(), AlignedStat::Strength);
    /// assert_eq!(Affinity::Nature.aligned_stat(), AlignedStat::LifeMax);
    /// ```
    pub fn aligned_stat(self) -> AlignedStat {
        match self {
            Affinity::Blood | Affinity::Nature => AlignedStat::LifeMax,
            Affinity::Bone => AlignedStat::Agility,
            Affinity::Shadow => AlignedStat::ApMax,
            Affinity::Iron => AlignedStat::Strength,
        }
    }
}

impl std::fmt::Display for Affinity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
