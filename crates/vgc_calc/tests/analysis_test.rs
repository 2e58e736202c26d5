//! KO and survival analysis over real calculation output.

mod common;

use common::{attacker, defender, STRIKE_ROLLS};
use vgc_calc::analysis::{
    combined_survival, exact_repeated_survival, n_hit_ko_chance, repeated_hit_survival,
};
use vgc_calc::{calculate_damage, DamageModifiers, KoClass, Move, Precision, Type};

fn strike() -> Move {
    Move::physical("Test Strike", Type::Fighting, 100).expect("valid move")
}

fn brute_force_surviving(rolls: &[u32], hits: u32, hp: u32) -> u64 {
    let mut totals = vec![0u32];
    for _ in 0..hits {
        totals = totals
            .iter()
            .flat_map(|t| rolls.iter().map(move |r| t + r))
            .collect();
    }
    totals.iter().filter(|&&t| t < hp).count() as u64
}

#[test]
fn test_guaranteed_two_hit_ko() {
    let result = calculate_damage(
        &attacker(&[Type::Normal]),
        &defender("Target", &[Type::Normal]),
        &strike(),
        &DamageModifiers::default(),
    )
    .expect("calculation succeeds");

    let analysis = result.ko_analysis();
    assert_eq!(analysis.ko_rolls, 0);
    assert_eq!(analysis.class, KoClass::TwoHko);
    assert_eq!(analysis.guaranteed_hits, Some(2));
    assert_eq!(analysis.chance_within(2), Some(100.0));
    assert_eq!(result.ko_chance.text, "Guaranteed 2HKO");
}

#[test]
fn test_three_hit_chance_matches_brute_force() {
    let hp = 175;
    let surviving = brute_force_surviving(&STRIKE_ROLLS, 3, hp);
    let expected = (4096 - surviving) as f64 * 100.0 / 4096.0;
    assert_eq!(n_hit_ko_chance(&STRIKE_ROLLS, 3, hp as u16), Ok(expected));

    let survival = repeated_hit_survival(&STRIKE_ROLLS, 3, hp as u16).expect("valid hits");
    assert_eq!(survival.precision, Precision::Exact);
    assert_eq!(survival.surviving, Some(surviving));
    assert_eq!(survival.combinations, Some(4096));
}

#[test]
fn test_four_hits_fall_back_to_average() {
    // Average roll is 57.8; four of them clear 175
    let survival = repeated_hit_survival(&STRIKE_ROLLS, 4, 175).expect("valid hits");
    assert_eq!(survival.precision, Precision::Approximate);
    assert_eq!(survival.survive_percent, 0.0);

    let exact = exact_repeated_survival(&STRIKE_ROLLS, 4, 175).expect("valid hits");
    assert_eq!(exact.surviving, Some(0), "4 * 53 = 212 always KOs");
}

#[test]
fn test_combined_attacks_from_two_calculations() {
    let target = defender("Target", &[Type::Fire]);
    let a = calculate_damage(
        &attacker(&[Type::Normal]),
        &target,
        &strike(),
        &DamageModifiers::default(),
    )
    .expect("calculation succeeds");
    let b = calculate_damage(
        &attacker(&[Type::Fighting]),
        &target,
        &strike(),
        &DamageModifiers::default(),
    )
    .expect("calculation succeeds");

    // 132..=157 combined; check against a chipped 145 HP
    let survival =
        combined_survival(&[&a.rolls[..], &b.rolls[..]], 145).expect("valid attacks");
    let surviving = a
        .rolls
        .iter()
        .flat_map(|x| b.rolls.iter().map(move |y| x + y))
        .filter(|&total| total < 145)
        .count() as u64;
    assert_eq!(survival.surviving, Some(surviving));
    assert!(survival.survive_percent > 0.0 && survival.survive_percent < 100.0);
}
