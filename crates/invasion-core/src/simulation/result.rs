//! Outcome of an invasion run.

use std::io::{self, Write};

use invasion_events::{CitySnapshot, DirectionSnapshot, InvasionEvent, RunSnapshot};

use super::alien::Alien;
use crate::map::PlanetMap;

/// Final map, every alien (dead ones included) and the events of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationResult {
    /// The working map after the run, destroyed cities flagged
    pub map: PlanetMap,
    /// All aliens, indexed by id
    pub aliens: Vec<Alien>,
    /// Everything that happened, in order
    pub events: Vec<InvasionEvent>,
    /// Index of the last turn played
    pub final_turn: u32,
}

impl SimulationResult {
    /// The battle log: one line per event.
    pub fn log_lines(&self) -> Vec<String> {
        self.events.iter().map(ToString::to_string).collect()
    }

    /// Writes the surviving map in the input file format.
    pub fn write_map<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{}", self.map)
    }

    pub fn alive_aliens(&self) -> impl Iterator<Item = &Alien> {
        self.aliens.iter().filter(|a| !a.is_dead())
    }

    /// Battle events only.
    pub fn battles(&self) -> impl Iterator<Item = &InvasionEvent> {
        self.events
            .iter()
            .filter(|e| matches!(e, InvasionEvent::Battle { .. }))
    }

    pub fn snapshot(&self) -> RunSnapshot {
        let cities = self
            .map
            .cities()
            .map(|city| CitySnapshot {
                name: city.name().to_string(),
                destroyed: city.is_destroyed(),
                directions: city
                    .directions()
                    .iter()
                    .map(|d| DirectionSnapshot {
                        direction: d.kind.to_string(),
                        target: d.target.clone(),
                    })
                    .collect(),
                aliens: city.aliens().to_vec(),
            })
            .collect();

        RunSnapshot {
            final_turn: self.final_turn,
            cities,
            aliens: self.aliens.iter().map(Alien::snapshot).collect(),
            log: self.log_lines(),
        }
    }
}
