//! Attribute tables.
//!
//! An [`AttributeTable`] is an immutable snapshot of per-category
//! attribute deltas, keyed by race, class, and affinity name. Snapshots
//! are supplied whole by an external loader (or built programmatically)
//! and swapped atomically; the core never fetches or patches one.

use crate::affinity::Affinity;
use crate::error::StatError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Per-category attribute deltas for one race, class, or affinity.
///
/// Immutable static data; summing the three selected bundles yields a
/// character's base totals.
///
/// # Examples
///
/// ```rust
/// use grimhand::AttributeBundle;
///
/// let human = AttributeBundle::new(5, 2, 2, 3, 10, 1);
/// let warrior = AttributeBundle::new(6, 3, 1, 2, 7, 2);
/// assert_eq!((human + warrior).life, 11);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeBundle {
    /// Life essence contribution.
    pub life: i32,
    /// Strength contribution.
    pub strength: i32,
    /// Agility contribution.
    pub agility: i32,
    /// Action point contribution.
    pub ap: i32,
    /// Starting gold contribution.
    pub gold: i32,
    /// Attack score contribution.
    pub attack: i32,
}

impl AttributeBundle {
    /// Create a bundle from its six contributions.
    pub fn new(life: i32, strength: i32, agility: i32, ap: i32, gold: i32, attack: i32) -> Self {
        Self {
            life,
            strength,
            agility,
            ap,
            gold,
            attack,
        }
    }
}

impl std::ops::Add for AttributeBundle {
    type Output = AttributeBundle;

    fn add(self, rhs: AttributeBundle) -> AttributeBundle {
        AttributeBundle {
            life: self.life + rhs.life,
            strength: self.strength + rhs.strength,
            agility: self.agility + rhs.agility,
            ap: self.ap + rhs.ap,
            gold: self.gold + rhs.gold,
            attack: self.attack + rhs.attack,
        }
    }
}

/// Immutable lookup of attribute bundles by race, class, and affinity name.
///
/// External loaders deserialize one of these as a whole snapshot; callers
/// hand it to the resolver behind an `Arc` so a refreshed catalog is
/// either fully visible or not at all.
///
/// # Examples
///
/// ```rust
/// use grimhand::{Affinity, AttributeTable};
///
/// let table = AttributeTable::builtin();
/// let human = table.race("Human").unwrap();
/// let warrior = table.class("Warrior").unwrap();
/// let iron = table.affinity(Affinity::Iron).unwrap();
/// assert_eq!(human.life + warrior.life + iron.life, 13);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeTable {
    races: HashMap<String, AttributeBundle>,
    classes: HashMap<String, AttributeBundle>,
    affinities: HashMap<String, AttributeBundle>,
}

impl AttributeTable {
    /// Create an empty table, to be populated by an external loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Deserialize a whole snapshot from JSON.
    ///
    /// The document holds the three maps under `races`, `classes`, and
    /// `affinities` keys, each mapping names to bundles.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Register a race bundle.
    pub fn insert_race(&mut self, name: impl Into<String>, bundle: AttributeBundle) {
        self.races.insert(name.into(), bundle);
    }

    /// Register a class bundle.
    pub fn insert_class(&mut self, name: impl Into<String>, bundle: AttributeBundle) {
        self.classes.insert(name.into(), bundle);
    }

    /// Register an affinity bundle.
    pub fn insert_affinity(&mut self, affinity: Affinity, bundle: AttributeBundle) {
        self.affinities.insert(affinity.name().to_string(), bundle);
    }

    /// Look up a race bundle by name.
    pub fn race(&self, name: &str) -> Result<AttributeBundle, StatError> {
        self.races
            .get(name)
            .copied()
            .ok_or_else(|| StatError::UnknownRace(name.to_string()))
    }

    /// Look up a class bundle by name.
    pub fn class(&self, name: &str) -> Result<AttributeBundle, StatError> {
        self.classes
            .get(name)
            .copied()
            .ok_or_else(|| StatError::UnknownClass(name.to_string()))
    }

    /// Look up an affinity bundle.
    pub fn affinity(&self, affinity: Affinity) -> Result<AttributeBundle, StatError> {
        self.affinities
            .get(affinity.name())
            .copied()
            .ok_or_else(|| StatError::UnknownAffinity(affinity.name().to_string()))
    }

    /// Names of all registered races, unordered.
    pub fn race_names(&self) -> impl Iterator<Item = &str> {
        self.races.keys().map(String::as_str)
    }

    /// Names of all registered classes, unordered.
    pub fn class_names(&self) -> impl Iterator<Item = &str> {
        self.classes.keys().map(String::as_str)
    }

    /// The stock campaign table, usable without an external loader.
    pub fn builtin() -> Self {
        let mut table = Self::new();

        table.insert_race("Human", AttributeBundle::new(5, 2, 2, 3, 10, 1));
        table.insert_race("Dwarf", AttributeBundle::new(6, 3, 1, 2, 8, 2));
        table.insert_race("Elf", AttributeBundle::new(4, 1, 3, 4, 12, 1));
        table.insert_race("Orc", AttributeBundle::new(7, 4, 0, 2, 5, 2));
        table.insert_race("Goblin", AttributeBundle::new(3, 1, 4, 3, 15, 0));

        table.insert_class("Warrior", AttributeBundle::new(6, 3, 1, 2, 7, 2));
        table.insert_class("Ranger", AttributeBundle::new(4, 2, 3, 3, 11, 1));
        table.insert_class("Rogue", AttributeBundle::new(4, 1, 4, 3, 13, 1));
        table.insert_class("Mage", AttributeBundle::new(3, 0, 2, 5, 10, 0));
        table.insert_class("Cleric", AttributeBundle::new(5, 2, 1, 3, 8, 1));

        table.insert_affinity(Affinity::Blood, AttributeBundle::new(1, 1, 0, 1, 5, 1));
        table.insert_affinity(Affinity::Bone, AttributeBundle::new(1, 0, 1, 1, 6, 1));
        table.insert_affinity(Affinity::Shadow, AttributeBundle::new(0, 0, 1, 2, 7, 0));
        table.insert_affinity(Affinity::Iron, AttributeBundle::new(2, 1, 0, 0, 4, 1));
        table.insert_affinity(Affinity::Nature, AttributeBundle::new(1, 0, 2, 1, 8, 0));

        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_covers_all_affinities() {
        let table = AttributeTable::builtin();
        for affinity in Affinity::ALL {
            assert!(table.affinity(affinity).is_ok(), "missing {}", affinity);
        }
        assert_eq!(table.race_names().count(), 5);
        assert_eq!(table.class_names().count(), 5);
    }

    #[test]
    fn test_missing_lookups_are_classified() {
        let table = AttributeTable::new();
        assert_eq!(
            table.race("Human"),
            Err(StatError::UnknownRace("Human".into()))
        );
        assert_eq!(
            table.class("Warrior"),
            Err(StatError::UnknownClass("Warrior".into()))
        );
        assert_eq!(
            table.affinity(Affinity::Iron),
            Err(StatError::UnknownAffinity("Iron".into()))
        );
    }

    #[test]
    fn test_bundle_sum() {
        let table = AttributeTable::builtin();
        let sum = table.race("Human").unwrap()
            + table.class("Warrior").unwrap()
            + table.affinity(Affinity::Iron).unwrap();
        assert_eq!(sum.life, 13);
        assert_eq!(sum.strength, 6);
        assert_eq!(sum.gold, 21);
    }

    #[test]
    fn test_snapshot_json_round_trip() {
        let table = AttributeTable::builtin();
        let json = serde_json::to_string(&table).unwrap();
        let back = AttributeTable::from_json(&json).unwrap();
        assert_eq!(table, back);
    }

    #[test]
    fn test_loader_shaped_json() {
        let json = r#"{
            "races": { "Human": { "life": 5, "strength": 2, "agility": 2, "ap": 3, "gold": 10, "attack": 1 } },
            "classes": { "Warrior": { "life": 6, "strength": 3, "agility": 1, "ap": 2, "gold": 7, "attack": 2 } },
            "affinities": { "Iron": { "life": 2, "strength": 1, "agility": 0, "ap": 0, "gold": 4, "attack": 1 } }
        }"#;
        let table = AttributeTable::from_json(json).unwrap();
        assert_eq!(table.race("Human").unwrap().life, 5);
        assert_eq!(table.affinity(Affinity::Iron).unwrap().attack, 1);
    }
}
