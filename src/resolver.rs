//! Stat resolution.
//!
//! [`resolve`] is the pure aggregation pipeline: selections to base sums,
//! per-item alignment bonuses, hand classification, hand bonus. There is
//! no subscription machinery in the core; callers invoke `resolve` after
//! each mutation, or use [`CharacterSheet`], which does exactly that and
//! guarantees derived stats and the formula result are recomputed
//! together before either becomes observable.

use crate::affinity::AlignedStat;
use crate::attributes::AttributeTable;
use crate::bonus::HandBonus;
use crate::character::{Character, CounterKind, EquipmentCatalogRow, SlotId};
use crate::derived::{DerivedStats, StatTotals};
use crate::error::{FormulaError, StatError};
use crate::formula::{self, StatSnapshot, DEFAULT_FORMULA};
use crate::hand::classify;
use std::sync::Arc;

impl StatTotals {
    fn from_bundle(bundle: crate::attributes::AttributeBundle) -> StatTotals {
        StatTotals {
            life_max: bundle.life,
            strength: bundle.strength,
            agility: bundle.agility,
            ap_max: bundle.ap,
            gold: bundle.gold,
            attack: bundle.attack,
        }
    }
}

/// Resolve a character's derived stats against a table snapshot.
///
/// Pure: the same character and table always produce the same
/// [`DerivedStats`], and nothing is mutated. The pipeline is:
///
/// 1. Sum the race, class, and affinity bundles into base totals.
/// 2. For each equipped item matching the character's affinity, add +1 to
///    the stat keyed by that affinity, and tally the match; the tally is
///    added once per match to attack.
/// 3. Classify the valid cards and apply the winning hand's bonus.
///
/// Slots with missing or unparseable rank/affinity simply contribute no
/// card. The only error condition is a selection name absent from the
/// table snapshot.
///
/// # Examples
///
/// ```rust
/// use grimhand::{resolve, Affinity, AttributeTable, Character};
///
/// let table = AttributeTable::builtin();
/// let character = Character::new("Recruit", "Human", "Warrior", Affinity::Iron);
/// let derived = resolve(&character, &table).unwrap();
///
/// assert_eq!(derived.base.life_max, 13);
/// assert_eq!(derived.base, derived.total); // nothing equipped
/// ```
pub fn resolve(character: &Character, table: &AttributeTable) -> Result<DerivedStats, StatError> {
    let bundle = table.race(character.race())?
        + table.class(character.class())?
        + table.affinity(character.affinity())?;
    let base = StatTotals::from_bundle(bundle);
    let mut total = base;

    // Alignment needs only the affinity half of a slot; an item with an
    // unreadable rank still counts if its affinity matches.
    let mut aligned_count = 0u32;
    for item in character.slots() {
        if item.affinity == Some(character.affinity()) {
            match character.affinity().aligned_stat() {
                AlignedStat::LifeMax => total.life_max += 1,
                AlignedStat::Strength => total.strength += 1,
                AlignedStat::Agility => total.agility += 1,
                AlignedStat::ApMax => total.ap_max += 1,
            }
            aligned_count += 1;
        }
    }
    total.attack += aligned_count as i32;

    let cards = character.cards();
    let hand = classify(&cards);
    let bonus = HandBonus::for_hand(hand);
    bonus.apply(&mut total);

    Ok(DerivedStats {
        base,
        total,
        aligned_count,
        hand,
        hand_summary: HandBonus::summary(hand),
        damage_reduction: bonus.damage_reduction,
    })
}

/// A character sheet: character state plus its up-to-date derived view.
///
/// The sheet owns a [`Character`], an `Arc<AttributeTable>` snapshot, and
/// the XP formula text. Every mutation re-runs the full pipeline, clamps
/// the resource pools to the refreshed maxima, and re-evaluates the
/// formula before the edit commits, so readers never observe a partially
/// updated sheet. An edit that would fail resolution (an unknown
/// selection name) is rejected whole and leaves the sheet untouched.
///
/// # Examples
///
/// ```rust
/// use grimhand::{Affinity, AttributeTable, Character, CharacterSheet};
/// use std::sync::Arc;
///
/// let table = Arc::new(AttributeTable::builtin());
/// let recruit = Character::new("Recruit", "Human", "Warrior", Affinity::Iron);
/// let mut sheet = CharacterSheet::new(recruit, table).unwrap();
///
/// assert_eq!(sheet.derived().total.life_max, 13);
/// sheet.set_race("Orc").unwrap();
/// assert_eq!(sheet.derived().total.life_max, 15);
/// ```
pub struct CharacterSheet {
    character: Character,
    table: Arc<AttributeTable>,
    formula: String,
    derived: DerivedStats,
    formula_result: Result<i64, FormulaError>,
}

impl CharacterSheet {
    /// Create a sheet, running the initial resolution pass.
    ///
    /// Life and action point pools start full at their derived maxima,
    /// and the gold counter starts at the summed starting gold.
    pub fn new(character: Character, table: Arc<AttributeTable>) -> Result<Self, StatError> {
        let mut character = character;
        let derived = resolve(&character, &table)?;
        character.life.set_max(derived.total.life_max);
        character.life.set_current(derived.total.life_max);
        character.action_points.set_max(derived.total.ap_max);
        character
            .action_points
            .set_current(derived.total.ap_max);
        character.set_counter(CounterKind::Gold, derived.total.gold);

        let formula = DEFAULT_FORMULA.to_string();
        let snapshot = StatSnapshot::capture(&character, &derived);
        let formula_result = formula::evaluate(&formula, &snapshot);

        Ok(Self {
            character,
            table,
            formula,
            derived,
            formula_result,
        })
    }

    /// Apply an edit, recompute everything, and commit only on success.
    ///
    /// The edit runs against a scratch copy; if resolution fails the
    /// previous state stays fully intact.
    fn edit(&mut self, edit: impl FnOnce(&mut Character)) -> Result<(), StatError> {
        let mut candidate = self.character.clone();
        edit(&mut candidate);

        let derived = resolve(&candidate, &self.table)?;
        // Maxima may have moved; re-clamp current values before the
        // formula snapshot is captured.
        candidate.life.set_max(derived.total.life_max);
        candidate.action_points.set_max(derived.total.ap_max);

        let snapshot = StatSnapshot::capture(&candidate, &derived);
        self.formula_result = formula::evaluate(&self.formula, &snapshot);
        self.character = candidate;
        self.derived = derived;
        Ok(())
    }

    /// Change the selected race.
    pub fn set_race(&mut self, race: impl Into<String>) -> Result<(), StatError> {
        let race = race.into();
        self.edit(|c| c.set_race(race))
    }

    /// Change the selected class.
    pub fn set_class(&mut self, class: impl Into<String>) -> Result<(), StatError> {
        let class = class.into();
        self.edit(|c| c.set_class(class))
    }

    /// Change the selected affinity.
    pub fn set_affinity(&mut self, affinity: crate::Affinity) -> Result<(), StatError> {
        self.edit(|c| c.set_affinity(affinity))
    }

    /// Equip a catalog row into a slot.
    pub fn equip(&mut self, slot: SlotId, row: &EquipmentCatalogRow) -> Result<(), StatError> {
        self.edit(|c| c.equip(slot, row))
    }

    /// Clear a slot.
    pub fn clear_slot(&mut self, slot: SlotId) -> Result<(), StatError> {
        self.edit(|c| c.clear_slot(slot))
    }

    /// Set a scalar counter (floored at zero).
    pub fn set_counter(&mut self, kind: CounterKind, value: i32) -> Result<(), StatError> {
        self.edit(|c| c.set_counter(kind, value))
    }

    /// Adjust a scalar counter by a delta (floored at zero).
    pub fn adjust_counter(&mut self, kind: CounterKind, delta: i32) -> Result<(), StatError> {
        self.edit(|c| c.adjust_counter(kind, delta))
    }

    /// Set current life, clamped into `[0, life max]`.
    pub fn set_life_current(&mut self, value: i32) -> Result<(), StatError> {
        self.edit(|c| c.life.set_current(value))
    }

    /// Set current action points, clamped into `[0, ap max]`.
    pub fn set_ap_current(&mut self, value: i32) -> Result<(), StatError> {
        self.edit(|c| c.action_points.set_current(value))
    }

    /// Replace the XP formula text and re-evaluate it immediately.
    pub fn set_formula(&mut self, formula: impl Into<String>) {
        self.formula = formula.into();
        let snapshot = StatSnapshot::capture(&self.character, &self.derived);
        self.formula_result = formula::evaluate(&self.formula, &snapshot);
    }

    /// Swap in a refreshed attribute table snapshot.
    ///
    /// Atomic: either the whole refreshed snapshot takes effect together
    /// with recomputed stats, or (if the current selections are missing
    /// from it) nothing changes.
    pub fn set_attribute_table(&mut self, table: Arc<AttributeTable>) -> Result<(), StatError> {
        let previous = std::mem::replace(&mut self.table, table);
        match self.edit(|_| {}) {
            Ok(()) => Ok(()),
            Err(err) => {
                self.table = previous;
                Err(err)
            }
        }
    }

    /// The character state.
    pub fn character(&self) -> &Character {
        &self.character
    }

    /// The current table snapshot.
    pub fn attribute_table(&self) -> &Arc<AttributeTable> {
        &self.table
    }

    /// The latest derived stats.
    pub fn derived(&self) -> &DerivedStats {
        &self.derived
    }

    /// The current formula text.
    pub fn formula(&self) -> &str {
        &self.formula
    }

    /// The latest formula outcome, recomputed with the latest snapshot.
    pub fn formula_result(&self) -> &Result<i64, FormulaError> {
        &self.formula_result
    }
}
