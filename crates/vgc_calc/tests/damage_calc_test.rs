//! Damage calculation integration tests.
//!
//! Hand-checked numbers for the shared test Pokemon; see `common` for the
//! stats they resolve to.

mod common;

use common::{attacker, defender, STRIKE_ROLLS};
use vgc_calc::damage::Immunity;
use vgc_calc::{
    calculate_damage, AbilityId, BaseStats, CalcError, DamageModifiers, EvSpread, ItemId, Move,
    MoveCategory, PokemonBuild, StatId, Terrain, Type, Weather,
};

fn strike() -> Move {
    Move::physical("Test Strike", Type::Fighting, 100).expect("valid move")
}

// ============================================================================
// Golden values
// ============================================================================

#[test]
fn test_neutral_physical_hit() {
    let result = calculate_damage(
        &attacker(&[Type::Normal]),
        &defender("Target", &[Type::Fire]),
        &strike(),
        &DamageModifiers::default(),
    )
    .expect("calculation succeeds");

    assert_eq!(result.attack_stat, 167);
    assert_eq!(result.defense_stat, 120);
    assert_eq!(result.base_damage, 63);
    assert_eq!(result.rolls, STRIKE_ROLLS);
    assert_eq!(result.min_damage, 53);
    assert_eq!(result.max_damage, 63);
    assert_eq!(result.defender_hp, 175);
    assert_eq!(result.min_percent, 30.2);
    assert_eq!(result.max_percent, 36.0);
    assert_eq!(result.display_range(), "30.2-36.0%");
    assert!(!result.is_possible_ohko);
    assert!(result.ko_chance.text.ends_with("chance to 3HKO"));
    assert!(result.applied.is_empty());
}

#[test]
fn test_stab_hit() {
    let result = calculate_damage(
        &attacker(&[Type::Fighting]),
        &defender("Target", &[Type::Fire]),
        &strike(),
        &DamageModifiers::default(),
    )
    .expect("calculation succeeds");

    assert_eq!(
        result.rolls,
        [79, 81, 81, 82, 84, 84, 85, 85, 87, 88, 88, 90, 91, 91, 93, 94]
    );
}

#[test]
fn test_super_effective_doubles_every_roll() {
    let result = calculate_damage(
        &attacker(&[Type::Normal]),
        &defender("Target", &[Type::Normal]),
        &strike(),
        &DamageModifiers::default(),
    )
    .expect("calculation succeeds");

    assert_eq!(result.effectiveness, 8);
    for (roll, neutral) in result.rolls.iter().zip(STRIKE_ROLLS) {
        assert_eq!(*roll, neutral * 2);
    }
}

#[test]
fn test_rolls_are_sorted_and_deterministic() {
    let a = attacker(&[Type::Fighting]);
    let d = defender("Target", &[Type::Rock, Type::Steel]);
    let mods = DamageModifiers::default().with_weather(Weather::Sun);
    let first = calculate_damage(&a, &d, &strike(), &mods).expect("calculation succeeds");
    let second = calculate_damage(&a, &d, &strike(), &mods).expect("calculation succeeds");

    assert_eq!(first, second);
    assert!(first.rolls.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(first.effectiveness, 16, "Fighting is 4x into Rock/Steel");
}

// The random factor spans 85..=100, but the roll floors before STAB, type and
// final modifiers round again, so the ratio gets a little slack.
#[test]
fn test_roll_spread_stays_within_random_factor() {
    let moves = [
        strike(),
        Move::special("Test Wave", Type::Water, 90).expect("valid move"),
        Move::special("Test Flame", Type::Fire, 90).expect("valid move"),
        Move::physical("Test Spark", Type::Electric, 100).expect("valid move"),
        Move::physical("Test Slam", Type::Normal, 60).expect("valid move"),
    ];
    let scenarios = [
        DamageModifiers::default(),
        DamageModifiers::default().with_weather(Weather::Rain),
        DamageModifiers::default().with_weather(Weather::Sun),
        DamageModifiers::default().with_terrain(Terrain::Electric),
        DamageModifiers::default().with_crit(),
        DamageModifiers {
            reflect: true,
            attacker_burned: true,
            ..DamageModifiers::default()
        },
        DamageModifiers {
            helping_hand: true,
            attacker_item: Some(ItemId::LifeOrb),
            ..DamageModifiers::default()
        },
        DamageModifiers {
            light_screen: true,
            friend_guard: true,
            ..DamageModifiers::default()
        },
    ];
    let attackers = [
        attacker(&[Type::Normal]),
        attacker(&[Type::Fighting]),
        attacker(&[Type::Water]),
    ];
    let defenders = [
        defender("Fire", &[Type::Fire]),
        defender("Normal", &[Type::Normal]),
        defender("Mud", &[Type::Water, Type::Ground]),
    ];

    let mut checked = 0;
    for mv in &moves {
        for mods in &scenarios {
            for a in &attackers {
                for d in &defenders {
                    let result = calculate_damage(a, d, mv, mods).expect("calculation succeeds");
                    assert!(result.rolls.windows(2).all(|w| w[0] <= w[1]));
                    if result.min_damage < 20 || result.base_damage < 40 {
                        continue;
                    }
                    let ratio = result.max_damage as f64 / result.min_damage as f64;
                    assert!(
                        ratio <= 1.1 / 0.85,
                        "{} into {} spreads {ratio:.3}: {:?}",
                        mv.name,
                        d.name,
                        result.rolls
                    );
                    checked += 1;
                }
            }
        }
    }
    assert!(checked >= 50, "only {checked} combinations dealt enough damage");
}

// ============================================================================
// Critical hits and stages
// ============================================================================

#[test]
fn test_crit_ignores_attack_drop_and_defense_boost() {
    let mods = DamageModifiers {
        attack_stage: -1,
        defense_stage: 2,
        ..DamageModifiers::default().with_crit()
    };
    let result = calculate_damage(
        &attacker(&[Type::Normal]),
        &defender("Target", &[Type::Fire]),
        &strike(),
        &mods,
    )
    .expect("calculation succeeds");

    assert!(result.is_crit);
    assert_eq!(result.attack_stat, 167);
    assert_eq!(result.defense_stat, 120);
    assert_eq!(
        result.rolls,
        [79, 80, 81, 82, 83, 84, 85, 86, 87, 88, 89, 90, 91, 92, 93, 94]
    );
}

#[test]
fn test_intimidate_drop() {
    let mods = DamageModifiers {
        attack_stage: -1,
        ..DamageModifiers::default()
    };
    let result = calculate_damage(
        &attacker(&[Type::Normal]),
        &defender("Target", &[Type::Fire]),
        &strike(),
        &mods,
    )
    .expect("calculation succeeds");

    assert_eq!(result.attack_stat, 111);
    assert_eq!(result.max_damage, 42);
}

// ============================================================================
// Stat sources
// ============================================================================

#[test]
fn test_foul_play_uses_target_attack() {
    let foul_play = Move::physical("Foul Play", Type::Dark, 95).expect("valid move");
    let result = calculate_damage(
        &attacker(&[Type::Normal]),
        &defender("Target", &[Type::Fire]),
        &foul_play,
        &DamageModifiers::default(),
    )
    .expect("calculation succeeds");
    assert_eq!(result.attack_stat, 120);
}

#[test]
fn test_body_press_uses_own_defense() {
    let body_press = Move::physical("Body Press", Type::Fighting, 80).expect("valid move");
    let mods = DamageModifiers {
        attack_stage: 2,
        ..DamageModifiers::default()
    };
    let result = calculate_damage(
        &attacker(&[Type::Normal]),
        &defender("Target", &[Type::Fire]),
        &body_press,
        &mods,
    )
    .expect("calculation succeeds");
    assert_eq!(result.attack_stat, 120, "Defense stat, attack stages ignored");
}

#[test]
fn test_psyshock_targets_defense() {
    let psyshock = Move::special("Psyshock", Type::Psychic, 80).expect("valid move");
    let mods = DamageModifiers {
        defense_stage: 1,
        ..DamageModifiers::default()
    };
    let result = calculate_damage(
        &attacker(&[Type::Normal]),
        &defender("Target", &[Type::Fire]),
        &psyshock,
        &mods,
    )
    .expect("calculation succeeds");
    assert_eq!(result.category, MoveCategory::Special);
    assert_eq!(result.defense_stat, 180);
}

#[test]
fn test_sword_of_ruin_lowers_defense() {
    let mods = DamageModifiers {
        sword_of_ruin: true,
        ..DamageModifiers::default()
    };
    let result = calculate_damage(
        &attacker(&[Type::Normal]),
        &defender("Target", &[Type::Fire]),
        &strike(),
        &mods,
    )
    .expect("calculation succeeds");
    assert_eq!(result.defense_stat, 90);
}

#[test]
fn test_vessel_of_ruin_lowers_special_attack() {
    assert_eq!(AbilityId::from_str("Vessel of Ruin"), Some(AbilityId::VesselOfRuin));
    let wave = Move::special("Test Wave", Type::Water, 90).expect("valid move");

    let vessel_target = defender("Target", &[Type::Fire])
        .to_builder()
        .ability(Some(AbilityId::VesselOfRuin))
        .build()
        .expect("valid build");
    let lowered = calculate_damage(
        &attacker(&[Type::Normal]),
        &vessel_target,
        &wave,
        &DamageModifiers::default(),
    )
    .expect("calculation succeeds");
    assert_eq!(lowered.attack_stat, 81);

    // The holder ignores its own aura, even with the field flag set
    let vessel_attacker = attacker(&[Type::Normal])
        .to_builder()
        .ability(Some(AbilityId::VesselOfRuin))
        .build()
        .expect("valid build");
    let mods = DamageModifiers {
        vessel_of_ruin: true,
        ..DamageModifiers::default()
    };
    let own = calculate_damage(&vessel_attacker, &defender("Target", &[Type::Fire]), &wave, &mods)
        .expect("calculation succeeds");
    assert_eq!(own.attack_stat, 108);
}

#[test]
fn test_protosynthesis_boosts_highest_stat_in_sun() {
    let protosynthesis = attacker(&[Type::Normal])
        .to_builder()
        .ability(Some(AbilityId::Protosynthesis))
        .build()
        .expect("valid build");
    let target = defender("Target", &[Type::Fire]);

    let sun = DamageModifiers::default().with_weather(Weather::Sun);
    let boosted = calculate_damage(&protosynthesis, &target, &strike(), &sun)
        .expect("calculation succeeds");
    assert_eq!(boosted.attack_stat, 217);

    let clear = calculate_damage(&protosynthesis, &target, &strike(), &DamageModifiers::default())
        .expect("calculation succeeds");
    assert_eq!(clear.attack_stat, 167);
}

// ============================================================================
// No-damage results
// ============================================================================

#[test]
fn test_type_immunity() {
    let body_slam = Move::physical("Body Slam", Type::Normal, 85).expect("valid move");
    let result = calculate_damage(
        &attacker(&[Type::Normal]),
        &defender("Ghost", &[Type::Ghost]),
        &body_slam,
        &DamageModifiers::default(),
    )
    .expect("calculation succeeds");

    assert_eq!(result.rolls, [0; 16]);
    assert_eq!(result.immunity, Some(Immunity::TypeChart));
    assert_eq!(result.ko_chance.text, "Immune (type)");
    assert!(!result.deals_damage());
}

#[test]
fn test_scrappy_hits_ghost() {
    let body_slam = Move::physical("Body Slam", Type::Normal, 85).expect("valid move");
    let mods = DamageModifiers {
        attacker_ability: Some(AbilityId::Scrappy),
        ..DamageModifiers::default()
    };
    let result = calculate_damage(
        &attacker(&[Type::Normal]),
        &defender("Ghost", &[Type::Ghost]),
        &body_slam,
        &mods,
    )
    .expect("calculation succeeds");
    assert_eq!(result.effectiveness, 4);
    assert!(result.deals_damage());
}

#[test]
fn test_ability_immunity() {
    let earthquake = Move::physical("Earthquake", Type::Ground, 100).expect("valid move");
    let mods = DamageModifiers {
        defender_ability: Some(AbilityId::Levitate),
        ..DamageModifiers::default()
    };
    let result = calculate_damage(
        &attacker(&[Type::Normal]),
        &defender("Target", &[Type::Fire]),
        &earthquake,
        &mods,
    )
    .expect("calculation succeeds");
    assert_eq!(result.immunity, Some(Immunity::Ability(AbilityId::Levitate)));
    assert_eq!(result.ko_chance.text, "Immune (Levitate)");

    // Mold Breaker ignores Levitate
    let mods = DamageModifiers {
        attacker_ability: Some(AbilityId::MoldBreaker),
        ..mods
    };
    let result = calculate_damage(
        &attacker(&[Type::Normal]),
        &defender("Target", &[Type::Fire]),
        &earthquake,
        &mods,
    )
    .expect("calculation succeeds");
    assert_eq!(result.immunity, None);
    assert_eq!(result.effectiveness, 8);
}

#[test]
fn test_status_move_deals_nothing() {
    let protect = Move::new("Protect", Type::Normal, MoveCategory::Status, 0).expect("valid move");
    let result = calculate_damage(
        &attacker(&[Type::Normal]),
        &defender("Target", &[Type::Fire]),
        &protect,
        &DamageModifiers::default(),
    )
    .expect("calculation succeeds");
    assert_eq!(result.rolls, [0; 16]);
    assert_eq!(result.ko_chance.text, "No damage");
    assert_eq!(result.immunity, None);
}

#[test]
fn test_tera_shell_resists_at_full_hp() {
    let mods = DamageModifiers {
        defender_ability: Some(AbilityId::TeraShell),
        ..DamageModifiers::default()
    };
    let full = calculate_damage(
        &attacker(&[Type::Normal]),
        &defender("Terapagos", &[Type::Normal]),
        &strike(),
        &mods,
    )
    .expect("calculation succeeds");
    assert_eq!(full.effectiveness, 2);

    let damaged = DamageModifiers {
        defender_at_full_hp: false,
        ..mods
    };
    let result = calculate_damage(
        &attacker(&[Type::Normal]),
        &defender("Terapagos", &[Type::Normal]),
        &strike(),
        &damaged,
    )
    .expect("calculation succeeds");
    assert_eq!(result.effectiveness, 8);
}

// ============================================================================
// Multi-hit
// ============================================================================

#[test]
fn test_multi_hit_rolls_scale_with_hits() {
    let dual_wingbeat = Move::physical("Dual Wingbeat", Type::Flying, 40).expect("valid move");
    let result = calculate_damage(
        &attacker(&[Type::Normal]),
        &defender("Target", &[Type::Fire]),
        &dual_wingbeat,
        &DamageModifiers::default(),
    )
    .expect("calculation succeeds");

    assert_eq!(result.hit_count, 2);
    assert_eq!(result.per_hit_rolls[15], 26);
    for (total, single) in result.rolls.iter().zip(result.per_hit_rolls) {
        assert_eq!(*total, single * 2);
    }
}

#[test]
fn test_requested_hit_count_is_clamped() {
    let bullet_seed = Move::physical("Bullet Seed", Type::Grass, 25).expect("valid move");
    let mods = DamageModifiers {
        hits: Some(9),
        ..DamageModifiers::default()
    };
    let result = calculate_damage(
        &attacker(&[Type::Normal]),
        &defender("Target", &[Type::Water]),
        &bullet_seed,
        &mods,
    )
    .expect("calculation succeeds");
    assert_eq!(result.hit_count, 5);
}

// ============================================================================
// Rejected input
// ============================================================================

#[test]
fn test_invalid_inputs_are_errors() {
    assert_eq!(
        EvSpread::new([0, 253, 0, 0, 0, 0]),
        Err(CalcError::EvOutOfRange {
            stat: StatId::Atk,
            value: 253
        })
    );
    assert!(matches!(
        EvSpread::new([252, 252, 8, 0, 0, 0]),
        Err(CalcError::EvTotalExceeded { total: 512 })
    ));
    assert!(matches!(
        Move::physical("Broken", Type::Normal, -10),
        Err(CalcError::NegativeBasePower { power: -10, .. })
    ));
    assert_eq!(
        PokemonBuild::builder("Nothing", BaseStats::splat(100), &[]).build(),
        Err(CalcError::InvalidTypeCount(0))
    );
}
