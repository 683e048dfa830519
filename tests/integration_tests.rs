use grimhand::*;
use std::sync::Arc;

fn catalog_row(name: &str, rank: &str, affinity: &str) -> EquipmentCatalogRow {
    EquipmentCatalogRow {
        item_name: name.to_string(),
        rank: rank.to_string(),
        affinity: affinity.to_string(),
        primary_effect: String::new(),
    }
}

fn slot(index: usize) -> SlotId {
    SlotId::new(index).expect("slot index in range")
}

/// A full straight-flush loadout: ranks 2-3-4-5-A, all Iron, on an Iron
/// character. Five aligned items plus the level-8 hand bonus.
#[test]
fn test_straight_flush_loadout() {
    let table = AttributeTable::builtin();
    let mut character = Character::new("Recruit", "Human", "Warrior", Affinity::Iron);
    for (i, rank) in ["2", "3", "4", "5", "A"].iter().enumerate() {
        character.equip(slot(i), &catalog_row("Iron Relic", rank, "Iron"));
    }

    let derived = resolve(&character, &table).unwrap();
    assert_eq!(derived.hand, HandRank::StraightFlush);
    assert_eq!(derived.hand.level(), 8);
    assert_eq!(derived.aligned_count, 5);

    // Base 13 life, +2 from the Straight Flush bonus.
    assert_eq!(derived.total.life_max, derived.base.life_max + 2);
    // Base AP, +1 from the hand bonus.
    assert_eq!(derived.total.ap_max, derived.base.ap_max + 1);
    // Iron alignment: +1 strength per aligned item.
    assert_eq!(derived.total.strength, derived.base.strength + 5);
    // +1 attack per aligned item; the hand itself grants no attack.
    assert_eq!(derived.total.attack, derived.base.attack + 5);
}

/// Four rank-7 items with distinct affinities: Four of a Kind, +2 attack.
#[test]
fn test_four_of_a_kind_loadout() {
    let table = AttributeTable::builtin();
    let mut character = Character::new("Recruit", "Elf", "Ranger", Affinity::Shadow);
    for (i, affinity) in ["Blood", "Bone", "Iron", "Nature"].iter().enumerate() {
        character.equip(slot(i), &catalog_row("Sevenfold Shard", "7", affinity));
    }

    let derived = resolve(&character, &table).unwrap();
    assert_eq!(derived.hand, HandRank::FourOfAKind);
    assert_eq!(derived.hand.level(), 7);
    assert_eq!(derived.aligned_count, 0);
    assert_eq!(derived.total.attack, derived.base.attack + 2);
    assert_eq!(derived.total.life_max, derived.base.life_max);
}

/// Two pairs must resolve as Two Pair, never One Pair.
#[test]
fn test_two_pair_loadout() {
    let table = AttributeTable::builtin();
    let mut character = Character::new("Recruit", "Orc", "Cleric", Affinity::Blood);
    let ranks = ["5", "5", "9", "9", "2"];
    let affinities = ["Bone", "Iron", "Shadow", "Nature", "Bone"];
    for i in 0..5 {
        character.equip(slot(i), &catalog_row("Paired Token", ranks[i], affinities[i]));
    }

    let derived = resolve(&character, &table).unwrap();
    assert_eq!(derived.hand, HandRank::TwoPair);
    assert_eq!(derived.hand.level(), 2);
    assert_eq!(derived.total.ap_max, derived.base.ap_max + 1);
    assert_eq!(derived.total.attack, derived.base.attack);
}

/// No equipment at all: High Card, no transform, base equals total.
#[test]
fn test_bare_character_baseline() {
    let table = AttributeTable::builtin();
    let character = Character::new("Recruit", "Human", "Warrior", Affinity::Iron);

    let derived = resolve(&character, &table).unwrap();
    assert_eq!(derived.base.life_max, 13); // 5 + 6 + 2
    assert_eq!(derived.hand, HandRank::HighCard);
    assert_eq!(derived.hand.level(), 0);
    assert_eq!(derived.aligned_count, 0);
    assert_eq!(derived.damage_reduction, 0);
    assert_eq!(derived.base, derived.total);
}

/// Repeated resolution over unchanged state is bit-identical.
#[test]
fn test_resolution_idempotence() {
    let table = AttributeTable::builtin();
    let mut character = Character::new("Recruit", "Goblin", "Rogue", Affinity::Shadow);
    character.equip(slot(0), &catalog_row("Night Shiv", "J", "Shadow"));
    character.equip(slot(3), &catalog_row("Dusk Veil", "J", "Nature"));

    let first = resolve(&character, &table).unwrap();
    for _ in 0..10 {
        assert_eq!(resolve(&character, &table).unwrap(), first);
    }
}

/// The Full House bonus reduces incoming damage instead of mutating stats.
#[test]
fn test_full_house_damage_reduction() {
    let table = AttributeTable::builtin();
    let mut character = Character::new("Recruit", "Dwarf", "Warrior", Affinity::Bone);
    let ranks = ["8", "8", "8", "4", "4"];
    let affinities = ["Blood", "Iron", "Shadow", "Nature", "Blood"];
    for i in 0..5 {
        character.equip(slot(i), &catalog_row("Anchor Stone", ranks[i], affinities[i]));
    }

    let derived = resolve(&character, &table).unwrap();
    assert_eq!(derived.hand, HandRank::FullHouse);
    assert_eq!(derived.base, derived.total); // no aligned items, no stat delta
    assert_eq!(derived.damage_reduction, 1);
    assert_eq!(derived.mitigate(3), 2);
    assert_eq!(derived.mitigate(0), 0);
    assert!(derived.hand_summary.contains("Anchored Power"));
}

/// Unequipping drops the hand bonus on the very next resolution.
#[test]
fn test_sheet_tracks_equipment_changes() {
    let table = Arc::new(AttributeTable::builtin());
    let character = Character::new("Recruit", "Human", "Ranger", Affinity::Nature);
    let mut sheet = CharacterSheet::new(character, table).unwrap();

    sheet.equip(slot(0), &catalog_row("Thorn Loop", "6", "Nature")).unwrap();
    sheet.equip(slot(1), &catalog_row("Root Band", "6", "Iron")).unwrap();
    sheet.equip(slot(2), &catalog_row("Moss Crown", "6", "Bone")).unwrap();
    assert_eq!(sheet.derived().hand, HandRank::ThreeOfAKind);

    sheet.clear_slot(slot(2)).unwrap();
    assert_eq!(sheet.derived().hand, HandRank::OnePair);

    sheet.clear_slot(slot(1)).unwrap();
    sheet.clear_slot(slot(0)).unwrap();
    assert_eq!(sheet.derived().hand, HandRank::HighCard);
    assert_eq!(sheet.derived().base, sheet.derived().total);
}

/// An external table snapshot drives the same pipeline as the builtin.
#[test]
fn test_externally_loaded_snapshot() {
    let json = r#"{
        "races": { "Revenant": { "life": 9, "strength": 2, "agility": 1, "ap": 2, "gold": 0, "attack": 2 } },
        "classes": { "Gravecaller": { "life": 2, "strength": 0, "agility": 2, "ap": 4, "gold": 6, "attack": 1 } },
        "affinities": {
            "Bone": { "life": 1, "strength": 0, "agility": 1, "ap": 1, "gold": 6, "attack": 1 }
        }
    }"#;
    let table = Arc::new(AttributeTable::from_json(json).unwrap());
    let character = Character::new("Wight", "Revenant", "Gravecaller", Affinity::Bone);
    let mut sheet = CharacterSheet::new(character, table).unwrap();

    assert_eq!(sheet.derived().base.life_max, 12);
    assert_eq!(sheet.character().life.current(), 12);
    assert_eq!(sheet.character().counter(CounterKind::Gold), 12);

    // Bone alignment: +1 agility per matching item.
    sheet.equip(slot(0), &catalog_row("Knuckle Dice", "K", "Bone")).unwrap();
    assert_eq!(
        sheet.derived().total.agility,
        sheet.derived().base.agility + 1
    );
}

/// Resource counter edits recompute the formula against the new snapshot.
#[test]
fn test_counters_feed_formula() {
    let table = Arc::new(AttributeTable::builtin());
    let character = Character::new("Recruit", "Human", "Warrior", Affinity::Iron);
    let mut sheet = CharacterSheet::new(character, table).unwrap();

    sheet.set_formula("xp + doubt * 2");
    sheet.set_counter(CounterKind::Xp, 40).unwrap();
    sheet.set_counter(CounterKind::Doubt, 3).unwrap();
    assert_eq!(*sheet.formula_result(), Ok(46));

    sheet.adjust_counter(CounterKind::Doubt, -10).unwrap();
    assert_eq!(sheet.character().counter(CounterKind::Doubt), 0);
    assert_eq!(*sheet.formula_result(), Ok(40));
}
