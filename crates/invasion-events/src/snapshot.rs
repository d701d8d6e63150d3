//! Snapshot Types
//!
//! Serialization structs describing a finished invasion run, used by the
//! `--json` output of the CLI.

use serde::{Deserialize, Serialize};

use crate::AlienId;

/// Complete state of a run once it has terminated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSnapshot {
    /// Index of the last turn played (0-based)
    pub final_turn: u32,
    pub cities: Vec<CitySnapshot>,
    pub aliens: Vec<AlienSnapshot>,
    /// Human-readable battle log, in order
    pub log: Vec<String>,
}

impl RunSnapshot {
    /// Cities that were not destroyed.
    pub fn surviving_cities(&self) -> impl Iterator<Item = &CitySnapshot> {
        self.cities.iter().filter(|c| !c.destroyed)
    }

    /// Number of aliens still alive.
    pub fn alive_count(&self) -> usize {
        self.aliens.iter().filter(|a| !a.dead).count()
    }
}

/// A city at the end of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitySnapshot {
    pub name: String,
    pub destroyed: bool,
    #[serde(default)]
    pub directions: Vec<DirectionSnapshot>,
    /// Aliens currently in the city; always empty for destroyed cities
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliens: Vec<AlienId>,
}

/// One outgoing road of a city.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectionSnapshot {
    pub direction: String,
    pub target: String,
}

/// An alien at the end of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlienSnapshot {
    pub id: AlienId,
    /// Where the alien is, or where it died
    pub city: String,
    pub dead: bool,
}
