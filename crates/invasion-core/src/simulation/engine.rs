//! Turn loop of an invasion run.
//!
//! A run spawns the aliens once and then plays turns. Every turn resolves
//! all battles first and only then moves the survivors, one alien at a time
//! in id order. The loop stops when nobody is alive, when nobody could move,
//! or when the turn ceiling is reached.

use invasion_events::InvasionEvent;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use thiserror::Error;
use tracing::{debug, info, trace};

use super::alien::Alien;
use super::result::SimulationResult;
use crate::map::PlanetMap;

/// Turn ceiling used unless configured otherwise.
pub const DEFAULT_MAX_TURNS: u32 = 10_000;

/// A city with at least this many aliens at the start of a turn is destroyed.
pub const CITY_DESTRUCTION_THRESHOLD: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimulationError {
    #[error("cannot run an invasion on a map without cities")]
    EmptyMap,
}

/// Alive and moving counts of one turn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct TurnOutcome {
    alive: usize,
    moves: usize,
}

/// Runs invasions against one parsed map.
///
/// The map given at construction is never modified; each run works on its
/// own copy. The random source drives both the initial placement and the
/// choice of road, so a seeded source gives reproducible runs.
#[derive(Debug, Clone)]
pub struct Simulation<R = SmallRng> {
    initial_map: PlanetMap,
    rng: R,
    max_turns: u32,
}

impl Simulation<SmallRng> {
    /// Creates a simulation driven by a [`SmallRng`] seeded with `seed`.
    pub fn seeded(map: PlanetMap, seed: u64) -> Self {
        Self::new(map, SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Simulation<R> {
    pub fn new(map: PlanetMap, rng: R) -> Self {
        Self {
            initial_map: map,
            rng,
            max_turns: DEFAULT_MAX_TURNS,
        }
    }

    /// Sets the turn ceiling. A ceiling below one turn is raised to one.
    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = max_turns.max(1);
        self
    }

    pub fn initial_map(&self) -> &PlanetMap {
        &self.initial_map
    }

    pub fn max_turns(&self) -> u32 {
        self.max_turns
    }

    /// Runs one invasion with `alien_count` aliens.
    pub fn run(&mut self, alien_count: usize) -> Result<SimulationResult, SimulationError> {
        if self.initial_map.is_empty() {
            return Err(SimulationError::EmptyMap);
        }

        let mut map = self.initial_map.clone();
        let mut events = vec![InvasionEvent::InvasionStarted {
            aliens: alien_count,
        }];
        let mut aliens = self.spawn(&mut map, alien_count);
        info!(
            aliens = alien_count,
            cities = map.len(),
            max_turns = self.max_turns,
            "invasion started"
        );

        let mut final_turn = 0;
        for turn in 0..self.max_turns {
            final_turn = turn;
            resolve_battles(&mut map, &mut aliens, turn, &mut events);
            let outcome = self.move_aliens(&mut map, &mut aliens);
            debug!(turn, alive = outcome.alive, moves = outcome.moves, "turn played");

            if outcome.alive == 0 {
                events.push(InvasionEvent::AllDead { turn });
                break;
            }
            if outcome.moves == 0 {
                events.push(InvasionEvent::AllLocked { turn });
                break;
            }
            if turn + 1 == self.max_turns {
                events.push(InvasionEvent::TurnLimitReached {
                    turns: self.max_turns,
                });
            }
        }

        if let Some(last) = events.last() {
            info!(final_turn, outcome = %last, "invasion finished");
        }

        Ok(SimulationResult {
            map,
            aliens,
            events,
            final_turn,
        })
    }

    /// Drops every alien into a uniformly chosen city. Several aliens may
    /// land in the same city.
    fn spawn(&mut self, map: &mut PlanetMap, alien_count: usize) -> Vec<Alien> {
        let mut aliens = Vec::with_capacity(alien_count);
        for id in 0..alien_count {
            let index = self.rng.gen_range(0..map.len());
            if let Some(city) = map.city_at_mut(index) {
                city.add_alien(id);
                trace!(alien = id, city = city.name(), "alien spawned");
                aliens.push(Alien::new(id, city.name()));
            }
        }
        aliens
    }

    /// Moves every living alien along one road, if it has a road to a city
    /// still standing. Roads are tried in a fresh random order per alien.
    fn move_aliens(&mut self, map: &mut PlanetMap, aliens: &mut [Alien]) -> TurnOutcome {
        let mut outcome = TurnOutcome::default();

        for alien in aliens.iter_mut().filter(|a| !a.is_dead()) {
            outcome.alive += 1;

            let Some(city) = map.get(alien.city()) else {
                continue;
            };
            let mut directions = city.directions().to_vec();
            directions.shuffle(&mut self.rng);

            let Some(destination) = directions
                .into_iter()
                .map(|d| d.target)
                .find(|target| !map.is_destroyed(target))
            else {
                trace!(alien = alien.id(), city = alien.city(), "alien is locked");
                continue;
            };

            map.relocate(alien.id(), alien.city(), &destination);
            alien.move_to(destination);
            outcome.moves += 1;
        }

        outcome
    }
}

/// Destroys every standing city holding enough aliens and kills them all.
fn resolve_battles(
    map: &mut PlanetMap,
    aliens: &mut [Alien],
    turn: u32,
    events: &mut Vec<InvasionEvent>,
) {
    for city in map.cities_mut() {
        if city.is_destroyed() || city.aliens().len() < CITY_DESTRUCTION_THRESHOLD {
            continue;
        }

        let casualties = city.destroy();
        for &id in &casualties {
            if let Some(alien) = aliens.get_mut(id) {
                alien.kill();
            }
        }
        info!(turn, city = city.name(), casualties = casualties.len(), "city destroyed");
        events.push(InvasionEvent::Battle {
            turn,
            city: city.name().to_string(),
            aliens: casualties,
        });
    }
}
