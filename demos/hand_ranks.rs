//! Hand Ranks Example
//!
//! Classifies a spread of card sets and prints each hand's level, poker
//! name, in-world title, and bonus. Shows the count gates in action: the
//! same ranks classify differently depending on how many cards are
//! present.
//!
//! Run with: `cargo run --example hand_ranks`

use grimhand::*;

fn cards(spec: &[(u8, Affinity)]) -> Vec<Card> {
    spec.iter()
        .map(|&(rank, affinity)| Card::new(rank, affinity).expect("rank in 2..=14"))
        .collect()
}

fn show(label: &str, hand: &[Card]) {
    let rank = classify(hand);
    println!(
        "  {:<28} -> level {} {:<16} {}",
        label,
        rank.level(),
        rank.name(),
        HandBonus::summary(rank)
    );
}

fn main() {
    use Affinity::{Blood, Bone, Iron, Nature, Shadow};

    println!("== Classifications ==");
    show("empty hand", &[]);
    show("single ace", &cards(&[(14, Iron)]));
    show("pair of fives", &cards(&[(5, Blood), (5, Bone)]));
    show(
        "two pair",
        &cards(&[(5, Blood), (5, Bone), (9, Shadow), (9, Iron)]),
    );
    show(
        "three sixes",
        &cards(&[(6, Blood), (6, Bone), (6, Shadow)]),
    );
    show(
        "straight",
        &cards(&[(5, Blood), (6, Bone), (7, Shadow), (8, Iron), (9, Nature)]),
    );
    show(
        "flush",
        &cards(&[(2, Nature), (5, Nature), (9, Nature), (11, Nature), (13, Nature)]),
    );
    show(
        "full house",
        &cards(&[(8, Blood), (8, Bone), (8, Shadow), (4, Iron), (4, Nature)]),
    );
    show(
        "four sevens",
        &cards(&[(7, Blood), (7, Bone), (7, Shadow), (7, Iron)]),
    );
    show(
        "wheel straight flush",
        &cards(&[(2, Iron), (3, Iron), (4, Iron), (5, Iron), (14, Iron)]),
    );
    show(
        "five nines",
        &cards(&[(9, Blood), (9, Bone), (9, Shadow), (9, Iron), (9, Nature)]),
    );

    println!();
    println!("== Count gates ==");
    show("three in a row (no straight)", &cards(&[(4, Iron), (5, Bone), (6, Blood)]));
    show(
        "four of one affinity (no flush)",
        &cards(&[(2, Bone), (7, Bone), (9, Bone), (13, Bone)]),
    );
}
