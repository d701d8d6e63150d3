//! End-to-end invasion runs on parsed maps.

use invasion_core::{
    parse_map, City, DirectionKind, InvasionEvent, PlanetMap, Simulation, SimulationResult,
};
use rand::rngs::mock::StepRng;

const GRID: &str = "\
A1 east=A2 south=B1
A2 west=A1 east=A3 south=B2
A3 west=A2 south=B3
B1 north=A1 east=B2 south=C1
B2 north=A2 west=B1 east=B3 south=C2
B3 north=A3 west=B2 south=C3
C1 north=B1 east=C2
C2 north=B2 west=C1 east=C3
C3 north=B3 west=C2
";

fn grid() -> PlanetMap {
    parse_map(GRID, "grid").unwrap()
}

/// Checks the invariants every finished run must satisfy.
fn assert_consistent(result: &SimulationResult) {
    for city in result.map.cities() {
        if city.is_destroyed() {
            assert!(city.aliens().is_empty(), "{} kept aliens", city.name());
        }
        for &id in city.aliens() {
            let alien = &result.aliens[id];
            assert!(!alien.is_dead());
            assert_eq!(alien.city(), city.name());
        }
    }

    for alien in &result.aliens {
        let city = result.map.get(alien.city()).unwrap();
        if alien.is_dead() {
            assert!(city.is_destroyed());
        } else {
            assert!(!city.is_destroyed());
            assert!(city.aliens().contains(&alien.id()));
        }
    }

    // dead aliens stay in the city they died in
    for event in result.battles() {
        if let InvasionEvent::Battle { city, aliens, .. } = event {
            assert!(aliens.len() >= 2);
            for &id in aliens {
                assert!(result.aliens[id].is_dead());
                assert_eq!(result.aliens[id].city(), city);
            }
        }
    }

    let last = result.events.last().unwrap();
    assert!(last.is_terminal());
    assert_eq!(result.events.iter().filter(|e| e.is_terminal()).count(), 1);
}

#[test]
fn test_zero_aliens_end_on_turn_zero() {
    let result = Simulation::seeded(grid(), 3).run(0).unwrap();
    assert_eq!(
        result.log_lines(),
        vec![
            "Simulate invasion with 0 aliens",
            "All aliens are dead, simulations is over on turn number 0",
        ]
    );
    assert!(result.aliens.is_empty());
    assert_eq!(result.map, grid());
}

#[test]
fn test_forced_meeting_in_london() {
    let map = parse_map("London east=Bolton\nBolton west=London", "testing").unwrap();
    let result = Simulation::new(map, StepRng::new(0, 0)).run(2).unwrap();

    assert_eq!(
        result.log_lines()[1],
        "Aliens: 👾0, 👾1 have met in the city of London. ⚔ Battle destroyed the city."
    );
    let mut out = Vec::new();
    result.write_map(&mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "Bolton\n");
    assert_consistent(&result);
}

#[test]
fn test_two_aliens_on_two_cities_meet_at_once_or_never() {
    // Aliens spawned apart swap cities every turn and never share one at
    // battle time.
    let map = parse_map("London east=Bolton\nBolton west=London", "testing").unwrap();
    for seed in 0..20 {
        let result = Simulation::seeded(map.clone(), seed).run(2).unwrap();
        let last = result.events.last().unwrap();
        match result.battles().count() {
            1 => assert_eq!(last, &InvasionEvent::AllDead { turn: 0 }),
            0 => assert_eq!(last, &InvasionEvent::TurnLimitReached { turns: 10_000 }),
            n => panic!("seed {seed}: unexpected {n} battles"),
        }
        assert_consistent(&result);
    }
}

#[test]
fn test_single_city_loop_always_fights() {
    let map = parse_map("London east=London", "testing").unwrap();
    let result = Simulation::seeded(map, 11).run(5).unwrap();
    assert_eq!(
        result.log_lines(),
        vec![
            "Simulate invasion with 5 aliens",
            "Aliens: 👾0, 👾1, 👾2, 👾3, 👾4 have met in the city of London. ⚔ Battle destroyed the city.",
            "All aliens are dead, simulations is over on turn number 0",
        ]
    );
    assert_eq!(result.map.to_string(), "");
}

#[test]
fn test_lone_alien_on_island_is_locked() {
    let map: PlanetMap = [City::new("Island")].into_iter().collect();
    let result = Simulation::seeded(map, 5).run(1).unwrap();
    assert_eq!(
        result.events.last(),
        Some(&InvasionEvent::AllLocked { turn: 0 })
    );
    assert!(!result.aliens[0].is_dead());
    assert_eq!(result.map.to_string(), "Island\n");
}

#[test]
fn test_alien_locked_behind_destroyed_city() {
    // A step of 2^63 makes the spawn alternate between the first and the
    // second city: aliens 0 and 2 land in Gate, alien 1 in Keep.
    let map: PlanetMap = [
        City::new("Gate").with_direction(DirectionKind::North, "Keep"),
        City::new("Keep").with_direction(DirectionKind::South, "Gate"),
    ]
    .into_iter()
    .collect();
    let result = Simulation::new(map, StepRng::new(0, 1 << 63)).run(3).unwrap();

    assert_eq!(
        result.log_lines(),
        vec![
            "Simulate invasion with 3 aliens",
            "Aliens: 👾0, 👾2 have met in the city of Gate. ⚔ Battle destroyed the city.",
            "All aliens are either dead or locked, simulations is over on turn number 0",
        ]
    );
    assert_eq!(result.aliens[1].city(), "Keep");
    assert!(!result.aliens[1].is_dead());
    assert_eq!(result.map.to_string(), "Keep\n");
    assert_consistent(&result);
}

#[test]
fn test_turn_ceiling() {
    let map = parse_map("A north=B\nB south=A", "testing").unwrap();
    let result = Simulation::seeded(map, 1).with_max_turns(3).run(1).unwrap();
    assert_eq!(
        result.log_lines().last().map(String::as_str),
        Some("3 turns are finished. Simulation is over")
    );
    assert_eq!(result.final_turn, 2);
    assert!(!result.aliens[0].is_dead());
}

#[test]
fn test_crowded_grid_runs_stay_consistent() {
    for seed in 0..25 {
        let result = Simulation::seeded(grid(), seed).run(12).unwrap();
        assert_eq!(result.aliens.len(), 12);
        assert_consistent(&result);
    }
}

#[test]
fn test_snapshot_matches_result() {
    let result = Simulation::seeded(grid(), 8).run(6).unwrap();
    let snapshot = result.snapshot();
    assert_eq!(snapshot.log, result.log_lines());
    assert_eq!(snapshot.alive_count(), result.alive_aliens().count());
    assert_eq!(
        snapshot.surviving_cities().count(),
        result.map.surviving().count()
    );
}
