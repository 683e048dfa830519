//! Character Sheet Example
//!
//! This example walks through the full resolution pipeline:
//! - Creating a character against the builtin attribute table
//! - Equipping catalog rows and watching the hand classification change
//! - Aligned-item bonuses feeding the grand totals
//! - Editing the XP formula and reading its result
//!
//! Run with: `cargo run --example character_sheet`

use grimhand::*;
use std::sync::Arc;

fn row(name: &str, rank: &str, affinity: &str, effect: &str) -> EquipmentCatalogRow {
    EquipmentCatalogRow {
        item_name: name.to_string(),
        rank: rank.to_string(),
        affinity: affinity.to_string(),
        primary_effect: effect.to_string(),
    }
}

fn print_sheet(sheet: &CharacterSheet) {
    let derived = sheet.derived();
    println!("  {} the {} {}", sheet.character().name, sheet.character().race(), sheet.character().class());
    println!(
        "  life {}/{}  strength {}  agility {}  ap {}/{}  attack {}",
        sheet.character().life.current(),
        derived.total.life_max,
        derived.total.strength,
        derived.total.agility,
        sheet.character().action_points.current(),
        derived.total.ap_max,
        derived.total.attack,
    );
    println!("  aligned items: {}", derived.aligned_count);
    println!("  hand: {}", derived.hand_summary);
    match sheet.formula_result() {
        Ok(value) => println!("  formula `{}` = {}", sheet.formula(), value),
        Err(err) => println!("  formula `{}` failed: {}", sheet.formula(), err),
    }
    println!();
}

fn main() {
    let table = Arc::new(AttributeTable::builtin());

    // ========================================================================
    // A fresh recruit: base sums only
    // ========================================================================
    let recruit = Character::new("Vess", "Human", "Warrior", Affinity::Iron);
    let mut sheet = CharacterSheet::new(recruit, table).expect("builtin table covers selections");

    println!("== Fresh recruit ==");
    print_sheet(&sheet);

    // ========================================================================
    // Equipment: alignment bonuses and hand classification
    // ========================================================================
    let slots: Vec<SlotId> = SlotId::all().collect();
    sheet
        .equip(slots[0], &row("Pitted Gauntlet", "9", "Iron", "Crush on grip"))
        .expect("equip never fails resolution");
    sheet
        .equip(slots[1], &row("Anvil Shard", "9", "Iron", "Weight of the forge"))
        .expect("equip never fails resolution");

    println!("== Two aligned rank-9 items: One Pair ==");
    print_sheet(&sheet);

    sheet
        .equip(slots[2], &row("Chain Links", "9", "Bone", ""))
        .expect("equip never fails resolution");

    println!("== Third rank-9 item: Three of a Kind ==");
    print_sheet(&sheet);

    // ========================================================================
    // Formula edits
    // ========================================================================
    sheet.set_formula("gold / 2 + strength * 2 - doubt");
    println!("== Custom formula ==");
    print_sheet(&sheet);

    sheet.set_formula("strength + sanity");
    println!("== Bad formula: classified, not executed ==");
    print_sheet(&sheet);
}
