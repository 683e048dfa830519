//! Derived stat output.
//!
//! [`DerivedStats`] is the complete output of one resolution pass: base
//! totals before equipment, grand totals after the alignment and hand
//! bonus pipeline, and the display summary for the active hand. It is
//! always recomputed whole, never patched, which makes it a pure function
//! of the character and table snapshot that produced it.

use crate::hand::HandRank;
use serde::{Deserialize, Serialize};

/// The six running totals the resolution pipeline operates on.
///
/// # Examples
///
/// ```rust
/// use grimhand::StatTotals;
///
/// let totals = StatTotals::default();
/// assert_eq!(totals.life_max, 0);
/// assert_eq!(totals.attack, 0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatTotals {
    /// Maximum life essence.
    pub life_max: i32,
    /// Strength score.
    pub strength: i32,
    /// Agility score.
    pub agility: i32,
    /// Maximum action points.
    pub ap_max: i32,
    /// Starting gold contribution.
    pub gold: i32,
    /// Attack score.
    pub attack: i32,
}

/// Fully resolved stats for one character against one table snapshot.
///
/// Read-only output for the display layer. Two resolution passes over
/// unchanged input produce equal `DerivedStats`, bit for bit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedStats {
    /// Totals from race + class + affinity alone, before any equipment.
    pub base: StatTotals,
    /// Grand totals after alignment bonuses and the hand bonus.
    pub total: StatTotals,
    /// How many equipped items share the character's affinity. Each one
    /// also contributed +1 to `total.attack`.
    pub aligned_count: u32,
    /// The winning hand classification for the equipped cards.
    pub hand: HandRank,
    /// Display string for the active hand bonus, e.g.
    /// `"Dual Grip: +1 Action Point (Max)"`.
    pub hand_summary: String,
    /// Combat-time incoming damage reduction granted by the hand bonus.
    /// This is not a stat mutation; apply it via [`DerivedStats::mitigate`].
    pub damage_reduction: i32,
}

impl DerivedStats {
    /// Reduce incoming damage by the active hand's reduction, floored at 0.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use grimhand::{DerivedStats, HandRank, StatTotals};
    ///
    /// let stats = DerivedStats {
    ///     base: StatTotals::default(),
    ///     total: StatTotals::default(),
    ///     aligned_count: 0,
    ///     hand: HandRank::FullHouse,
    ///     hand_summary: String::new(),
    ///     damage_reduction: 1,
    /// };
    /// assert_eq!(stats.mitigate(4), 3);
    /// assert_eq!(stats.mitigate(0), 0);
    /// ```
    pub fn mitigate(&self, incoming: i32) -> i32 {
        (incoming - self.damage_reduction).max(0)
    }
}
