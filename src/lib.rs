//! # grimhand - Character Stat & Equipment Hand Evaluation Engine
//!
//! A deterministic engine that turns a character's race/class/affinity
//! selections plus up to five equipped item "cards" into final derived
//! stats, using a ranked card-hand classifier and a restricted arithmetic
//! formula evaluator.
//!
//! ## Core Concepts
//!
//! ### Resolution Pipeline
//!
//! Stats flow through a fixed pipeline on every resolution pass:
//!
//! ```text
//! [AttributeTable] -> base sums -> alignment bonuses -> [classify] -> [HandBonus] -> DerivedStats
//! ```
//!
//! 1. The three selected [`AttributeBundle`]s are summed into base totals
//! 2. Every equipped item sharing the character's affinity adds +1 to the
//!    stat keyed by that affinity, and +1 attack per match
//! 3. The valid cards classify into exactly one [`HandRank`] and that
//!    hand's single [`HandBonus`] applies
//!
//! The pipeline is a pure function of character state and the table
//! snapshot: [`DerivedStats`] is recomputed whole, never patched, so the
//! same input always produces bit-identical output.
//!
//! ### Key Properties
//!
//! - **One hand per evaluation**: rules are checked highest level first
//!   and the first match wins; bonuses never stack across hands
//! - **Permissive slots**: items with missing or unreadable rank/affinity
//!   are excluded from hand evaluation, never surfaced as errors
//! - **Clamped resources**: current life and action points always stay in
//!   `[0, max]`, including when a maximum shrinks
//! - **Safe formulas**: the XP formula accepts only numeric literals, a
//!   fixed variable whitelist, and `+ - * / ( )`; everything else is a
//!   classified error, never executed
//!
//! ## Example
//!
//! ```rust
//! use grimhand::*;
//! use std::sync::Arc;
//!
//! let table = Arc::new(AttributeTable::builtin());
//! let recruit = Character::new("New Recruit", "Human", "Warrior", Affinity::Iron);
//! let mut sheet = CharacterSheet::new(recruit, table).unwrap();
//!
//! // Base life: Human 5 + Warrior 6 + Iron 2.
//! assert_eq!(sheet.derived().total.life_max, 13);
//!
//! // Equip a pair of rank-4 items: One Pair, +1 Attack Score.
//! let spike = EquipmentCatalogRow {
//!     item_name: "Coffin Spike".into(),
//!     rank: "4".into(),
//!     affinity: "Bone".into(),
//!     primary_effect: String::new(),
//! };
//! let nail = EquipmentCatalogRow { rank: "4".into(), affinity: "Blood".into(), ..spike.clone() };
//! sheet.equip(SlotId::new(0).unwrap(), &spike).unwrap();
//! sheet.equip(SlotId::new(1).unwrap(), &nail).unwrap();
//! assert_eq!(sheet.derived().hand, HandRank::OnePair);
//! ```
//!
//! ## Modules
//!
//! - [`attributes`] - Attribute bundles and the name-keyed lookup table
//! - [`affinity`] - Affinity identity and the alignment-bonus mapping
//! - [`card`] - Card ranks and the card view of equipped items
//! - [`hand`] - Hand classification (the ranked, tie-broken classifier)
//! - [`bonus`] - Per-hand bonus resolution
//! - [`character`] - Character state, equipment slots, resource counters
//! - [`derived`] - The fully resolved stat output
//! - [`resolver`] - The aggregation pipeline and the `CharacterSheet`
//! - [`formula`] - The restricted arithmetic formula evaluator
//! - [`error`] - Error types

pub mod affinity;
pub mod attributes;
pub mod bonus;
pub mod card;
pub mod character;
pub mod derived;
pub mod error;
pub mod formula;
pub mod hand;
pub mod resolver;

// Re-export main types for convenience
pub use affinity::{Affinity, AlignedStat};
pub use attributes::{AttributeBundle, AttributeTable};
pub use bonus::HandBonus;
pub use card::{Card, Rank};
pub use character::{
    Character, CounterKind, EquipmentCatalogRow, EquippedItem, ResourcePool, SlotId, SLOT_COUNT,
};
pub use derived::{DerivedStats, StatTotals};
pub use error::{FormulaError, FormulaErrorKind, StatError};
pub use formula::{evaluate, StatSnapshot, DEFAULT_FORMULA};
pub use hand::{classify, HandRank};
pub use resolver::{resolve, CharacterSheet};
