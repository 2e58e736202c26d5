//! EV searches and bulk runs end to end.

mod common;

use common::{attacker, defender};
use vgc_calc::analysis::n_hit_ko_chance;
use vgc_calc::bulk::ScenarioSummary;
use vgc_calc::{
    calculate_damage, find_defensive_evs, find_offensive_evs, run_bulk, BulkOptions,
    BulkRequest, DamageModifiers, DefensiveSearch, EvSpread, Move, OffensiveSearch, PokemonBuild,
    StatId, Type,
};

fn strike() -> Move {
    Move::physical("Test Strike", Type::Fighting, 100).expect("valid move")
}

fn with_evs(build: &PokemonBuild, evs: EvSpread) -> PokemonBuild {
    build.to_builder().evs(evs).build().expect("valid build")
}

// ============================================================================
// Offensive search
// ============================================================================

#[test]
fn test_offensive_search_finds_minimum() {
    let a = attacker(&[Type::Fighting]);
    let d = defender("Target", &[Type::Normal]);
    let mods = DamageModifiers::default();

    let outcome = find_offensive_evs(&a, &d, &strike(), &mods, 40.0, 1).expect("search runs");
    let OffensiveSearch::Found { stat, evs, ko_chance, .. } = outcome else {
        panic!("expected an offensive spread");
    };
    assert_eq!(stat, StatId::Atk);
    assert!(ko_chance >= 40.0);

    let chance_at = |atk_evs: u16| {
        let build = with_evs(&a, EvSpread::new([0, atk_evs, 0, 0, 0, 0]).expect("valid evs"));
        let result = calculate_damage(&build, &d, &strike(), &mods).expect("calculation succeeds");
        n_hit_ko_chance(&result.rolls, 1, result.defender_hp).expect("valid hits")
    };
    assert_eq!(chance_at(evs), ko_chance);
    assert!(evs > 0);
    assert!(chance_at(evs - 4) < 40.0, "one step less falls short");
}

#[test]
fn test_offensive_search_reports_best_effort() {
    let a = attacker(&[Type::Fighting]);
    let d = defender("Target", &[Type::Normal]);

    // 252 Atk only reaches 7 of 16 OHKO rolls
    let outcome = find_offensive_evs(&a, &d, &strike(), &DamageModifiers::default(), 50.0, 1)
        .expect("search runs");
    assert_eq!(
        outcome,
        OffensiveSearch::NotAchievable {
            stat: StatId::Atk,
            max_evs: 252,
            best_ko_chance: 43.75,
            hits: 1,
        }
    );
}

#[test]
fn test_higher_target_never_needs_fewer_evs() {
    let a = attacker(&[Type::Fighting]);
    let d = defender("Target", &[Type::Normal]);
    let mods = DamageModifiers::default();
    let targets = [0.0, 6.25, 12.5, 25.0, 40.0, 43.75, 50.0, 100.0];

    for hits in [1, 2] {
        let needed: Vec<u16> = targets
            .iter()
            .map(|&target| {
                match find_offensive_evs(&a, &d, &strike(), &mods, target, hits)
                    .expect("search runs")
                {
                    OffensiveSearch::Found { evs, .. } => evs,
                    OffensiveSearch::NotAchievable { .. } => u16::MAX,
                }
            })
            .collect();
        assert_eq!(needed[0], 0, "any spread meets a zero target");
        assert!(
            needed.windows(2).all(|w| w[0] <= w[1]),
            "{hits}-hit search not monotonic: {needed:?}"
        );
    }
}

// ============================================================================
// Defensive search
// ============================================================================

#[test]
fn test_defensive_search_finds_minimum_total() {
    let a = attacker(&[Type::Normal]);
    let d = defender("Target", &[Type::Fire]);
    let mods = DamageModifiers::default();

    // 3 * 63 = 189 against 175 HP: some investment is needed
    let outcome = find_defensive_evs(&a, &d, &strike(), &mods, 3).expect("search runs");
    let DefensiveSearch::Found { spread, hits } = outcome else {
        panic!("expected a defensive spread");
    };
    assert_eq!(hits, 3);
    assert_eq!(spread.defense_stat, StatId::Def);
    assert!(spread.max_damage * 3 < spread.hp as u32);

    let total = spread.total_evs();
    assert!(total > 0);
    let smaller = total - 4;
    for hp_evs in (0..=smaller.min(252)).step_by(4) {
        let def_evs = smaller - hp_evs;
        if def_evs > 252 {
            continue;
        }
        let build = with_evs(&d, EvSpread::new([hp_evs, 0, def_evs, 0, 0, 0]).expect("valid evs"));
        let result = calculate_damage(&a, &build, &strike(), &mods).expect("calculation succeeds");
        assert!(
            result.max_damage * 3 >= result.defender_hp as u32,
            "{hp_evs} HP / {def_evs} Def already survives"
        );
    }
}

#[test]
fn test_defensive_search_not_achievable() {
    let a = attacker(&[Type::Normal]);
    let d = defender("Target", &[Type::Fire]);
    let outcome = find_defensive_evs(&a, &d, &strike(), &DamageModifiers::default(), 10)
        .expect("search runs");
    match outcome {
        DefensiveSearch::NotAchievable { best, .. } => {
            assert_eq!((best.hp_evs, best.defense_evs), (252, 252));
            assert_eq!(best.hp, 207);
        }
        other => panic!("expected not achievable, got {other:?}"),
    }
}

// ============================================================================
// Bulk
// ============================================================================

fn bulk_request() -> BulkRequest {
    let tap = Move::physical("Tap", Type::Normal, 20).expect("valid move");
    BulkRequest::new(
        attacker(&[Type::Fighting]),
        vec![strike(), tap],
        vec![
            defender("Normal Target", &[Type::Normal]),
            defender("Fire Target", &[Type::Fire]),
        ],
    )
}

#[test]
fn test_bulk_covers_every_combination_in_order() {
    let report = run_bulk(&bulk_request(), &BulkOptions::default()).expect("bulk runs");

    assert_eq!(report.total_calcs, 2 * 2 * 8);
    assert_eq!(report.entries.len(), 32);
    let keys: Vec<_> = report
        .entries
        .iter()
        .map(|e| (e.defender.clone(), e.move_name.clone(), e.scenario.clone()))
        .collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);
    assert_eq!(report.entries[0].defender, "Fire Target");
    assert_eq!(report.for_defender("Normal Target").count(), 16);
}

#[test]
fn test_bulk_result_independent_of_pool_size() {
    let request = bulk_request();
    let global = run_bulk(&request, &BulkOptions::default()).expect("bulk runs");
    let single = run_bulk(&request, &BulkOptions { threads: Some(1) }).expect("bulk runs");
    let four = run_bulk(&request, &BulkOptions { threads: Some(4) }).expect("bulk runs");
    assert_eq!(global, single);
    assert_eq!(global, four);
}

#[test]
fn test_bulk_summaries() {
    let report = run_bulk(&bulk_request(), &BulkOptions::default()).expect("bulk runs");

    // Strike into the Normal target: 158..=188 against 175 HP
    assert_eq!(
        report.summary("normal"),
        Some(&ScenarioSummary {
            scenario: "normal".into(),
            display_name: "No modifiers".into(),
            ohko: 0,
            two_hko: 1,
            defenders: 2,
        })
    );

    // Helping Hand turns the Normal target into an OHKO and the Fire target
    // into a 2HKO
    let helping_hand = report.summary("helping_hand").expect("scenario present");
    assert_eq!((helping_hand.ohko, helping_hand.two_hko), (1, 1));

    let best = report.best_move_per_defender("normal");
    assert_eq!(best.len(), 2);
    assert!(best.iter().all(|e| e.move_name == "Test Strike"));
}

#[test]
fn test_bulk_defender_tera() {
    let request = bulk_request().with_defender_tera("Normal Target", Type::Ghost);
    let report = run_bulk(&request, &BulkOptions::default()).expect("bulk runs");

    for entry in report.for_defender("Normal Target") {
        assert_eq!(entry.max_damage, 0, "{} / {}", entry.move_name, entry.scenario);
        assert_eq!(entry.ko_chance, "Immune (type)");
    }
    assert!(report.for_defender("Fire Target").all(|e| e.max_damage > 0));
}
