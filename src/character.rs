//! Character state.
//!
//! A [`Character`] holds the three selections, five fixed equipment
//! slots, and the resource counters. Slots have stable identity: items
//! are equipped into and cleared from a slot, never removed from the
//! array, so downstream views stay aligned across edits.

use crate::affinity::Affinity;
use crate::card::{Card, Rank};
use serde::{Deserialize, Serialize};

/// Number of equipment slots on every character.
pub const SLOT_COUNT: usize = 5;

/// Stable identifier for one of the five equipment slots.
///
/// # Examples
///
/// ```rust
/// use grimhand::SlotId;
///
/// let slot = SlotId::new(0).unwrap();
/// assert_eq!(slot.index(), 0);
/// assert!(SlotId::new(5).is_none());
/// assert_eq!(SlotId::all().count(), 5);
/// ```
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SlotId(u8);

impl SlotId {
    /// Create a slot id from a zero-based index, rejecting out-of-range.
    pub fn new(index: usize) -> Option<SlotId> {
        if index < SLOT_COUNT {
            Some(SlotId(index as u8))
        } else {
            None
        }
    }

    /// The zero-based index of this slot.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// All five slot ids in order.
    pub fn all() -> impl Iterator<Item = SlotId> {
        (0..SLOT_COUNT as u8).map(SlotId)
    }
}

impl std::fmt::Display for SlotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Slots are numbered 1-5 for display.
        write!(f, "slot{}", self.0 + 1)
    }
}

/// One row of the externally loaded equipment catalog.
///
/// Rank and affinity arrive as free text from the catalog spreadsheet;
/// the core parses them leniently on equip and only ever reads those two
/// columns for classification. Everything else passes through for
/// display. Field names mirror the catalog's column headers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EquipmentCatalogRow {
    /// Item display name.
    pub item_name: String,
    /// Card rank text, e.g. `"A"`, `"10"`.
    pub rank: String,
    /// Affinity text, e.g. `"Iron"`.
    pub affinity: String,
    /// Primary effect text, passed through for display.
    pub primary_effect: String,
}

/// One equipment slot's contents.
///
/// A slot is empty when no item is equipped, and *incomplete* when the
/// catalog text for rank or affinity failed to parse. Incomplete slots
/// still count for display but contribute no card to hand evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquippedItem {
    /// The slot this item occupies; identity is stable across edits.
    pub slot: SlotId,
    /// Item display name; `None` for an empty slot.
    pub item_name: Option<String>,
    /// Parsed rank; `None` when empty or unparseable.
    pub rank: Option<Rank>,
    /// Parsed affinity; `None` when empty or unparseable.
    pub affinity: Option<Affinity>,
    /// Primary effect text, passed through for display.
    pub primary_effect: String,
}

impl EquippedItem {
    /// An empty slot.
    pub fn empty(slot: SlotId) -> Self {
        Self {
            slot,
            item_name: None,
            rank: None,
            affinity: None,
            primary_effect: String::new(),
        }
    }

    /// Whether nothing is equipped here.
    pub fn is_empty(&self) -> bool {
        self.item_name.is_none()
    }

    /// The card view of this slot, present only when both rank and
    /// affinity parsed. Incomplete slots yield `None` and are dropped
    /// from hand evaluation without surfacing an error.
    pub fn card(&self) -> Option<Card> {
        match (self.rank, self.affinity) {
            (Some(rank), Some(affinity)) => Some(Card { rank, affinity }),
            _ => None,
        }
    }
}

/// A clamped current/max resource such as life or action points.
///
/// The invariant `0 <= current <= max` holds after every mutation; in
/// particular, shrinking the maximum pulls `current` down with it.
///
/// # Examples
///
/// ```rust
/// use grimhand::ResourcePool;
///
/// let mut life = ResourcePool::new(13);
/// life.set_current(20);
/// assert_eq!(life.current(), 13);
/// life.set_max(8);
/// assert_eq!(life.current(), 8);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourcePool {
    current: i32,
    max: i32,
}

impl ResourcePool {
    /// Create a full pool at the given maximum.
    pub fn new(max: i32) -> Self {
        let max = max.max(0);
        Self { current: max, max }
    }

    /// Current value, always in `[0, max]`.
    pub fn current(&self) -> i32 {
        self.current
    }

    /// Maximum value, never negative.
    pub fn max(&self) -> i32 {
        self.max
    }

    /// Set the current value, clamped into `[0, max]`.
    pub fn set_current(&mut self, value: i32) {
        self.current = value.clamp(0, self.max);
    }

    /// Adjust the current value by a delta, clamped into `[0, max]`.
    pub fn adjust(&mut self, delta: i32) {
        self.set_current(self.current.saturating_add(delta));
    }

    /// Set the maximum, re-clamping the current value into the new range.
    pub fn set_max(&mut self, max: i32) {
        self.max = max.max(0);
        self.current = self.current.clamp(0, self.max);
    }
}

/// The scalar resource counters, all floored at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterKind {
    Gold,
    Xp,
    Doubt,
    Corruption,
}

/// A character: selections, five equipment slots, resource counters.
///
/// Mutating methods only edit state; they never derive stats. After any
/// mutation the caller re-runs
/// [`resolve`](crate::resolve) (or lets
/// [`CharacterSheet`](crate::CharacterSheet) do so) to obtain fresh
/// derived stats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    /// Display name.
    pub name: String,
    race: String,
    class: String,
    affinity: Affinity,
    /// Life essence pool; maximum is maintained from derived stats.
    pub life: ResourcePool,
    /// Action point pool; maximum is maintained from derived stats.
    pub action_points: ResourcePool,
    gold: i32,
    xp: i32,
    doubt: i32,
    corruption: i32,
    slots: [EquippedItem; SLOT_COUNT],
}

impl Character {
    /// Create a character with the given selections and empty slots.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use grimhand::{Affinity, Character};
    ///
    /// let recruit = Character::new("New Recruit", "Human", "Warrior", Affinity::Iron);
    /// assert_eq!(recruit.race(), "Human");
    /// assert!(recruit.cards().is_empty());
    /// ```
    pub fn new(
        name: impl Into<String>,
        race: impl Into<String>,
        class: impl Into<String>,
        affinity: Affinity,
    ) -> Self {
        let slots = std::array::from_fn(|i| {
            // from_fn index is always < SLOT_COUNT
            EquippedItem::empty(SlotId(i as u8))
        });
        Self {
            name: name.into(),
            race: race.into(),
            class: class.into(),
            affinity,
            life: ResourcePool::default(),
            action_points: ResourcePool::default(),
            gold: 0,
            xp: 0,
            doubt: 0,
            corruption: 0,
            slots,
        }
    }

    /// The selected race name.
    pub fn race(&self) -> &str {
        &self.race
    }

    /// The selected class name.
    pub fn class(&self) -> &str {
        &self.class
    }

    /// The selected affinity.
    pub fn affinity(&self) -> Affinity {
        self.affinity
    }

    /// Change the selected race.
    pub fn set_race(&mut self, race: impl Into<String>) {
        self.race = race.into();
    }

    /// Change the selected class.
    pub fn set_class(&mut self, class: impl Into<String>) {
        self.class = class.into();
    }

    /// Change the selected affinity.
    pub fn set_affinity(&mut self, affinity: Affinity) {
        self.affinity = affinity;
    }

    /// Read a scalar counter.
    pub fn counter(&self, kind: CounterKind) -> i32 {
        match kind {
            CounterKind::Gold => self.gold,
            CounterKind::Xp => self.xp,
            CounterKind::Doubt => self.doubt,
            CounterKind::Corruption => self.corruption,
        }
    }

    /// Set a scalar counter, floored at zero.
    pub fn set_counter(&mut self, kind: CounterKind, value: i32) {
        let value = value.max(0);
        match kind {
            CounterKind::Gold => self.gold = value,
            CounterKind::Xp => self.xp = value,
            CounterKind::Doubt => self.doubt = value,
            CounterKind::Corruption => self.corruption = value,
        }
    }

    /// Adjust a scalar counter by a delta, floored at zero.
    pub fn adjust_counter(&mut self, kind: CounterKind, delta: i32) {
        let value = self.counter(kind).saturating_add(delta);
        self.set_counter(kind, value);
    }

    /// Equip a catalog row into a slot, replacing its previous contents.
    ///
    /// Rank and affinity are parsed leniently from the row's text;
    /// unparseable text leaves the corresponding half unset, producing an
    /// incomplete slot that is excluded from hand evaluation. This is
    /// deliberate permissive behavior, not a failure to surface.
    pub fn equip(&mut self, slot: SlotId, row: &EquipmentCatalogRow) {
        self.slots[slot.index()] = EquippedItem {
            slot,
            item_name: Some(row.item_name.clone()),
            rank: Rank::parse(&row.rank),
            affinity: Affinity::parse(&row.affinity),
            primary_effect: row.primary_effect.clone(),
        };
    }

    /// Clear a slot. The slot itself persists; only its contents reset.
    pub fn clear_slot(&mut self, slot: SlotId) {
        self.slots[slot.index()] = EquippedItem::empty(slot);
    }

    /// The five equipment slots, in slot order.
    pub fn slots(&self) -> &[EquippedItem; SLOT_COUNT] {
        &self.slots
    }

    /// The valid cards among the equipped items, for hand evaluation.
    /// Incomplete slots are silently dropped.
    pub fn cards(&self) -> Vec<Card> {
        self.slots.iter().filter_map(EquippedItem::card).collect()
    }
}
