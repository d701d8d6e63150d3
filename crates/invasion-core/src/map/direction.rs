//! Compass directions and the roads built on them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four compass points a road can leave a city by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DirectionKind {
    South,
    North,
    West,
    East,
}

impl DirectionKind {
    /// All direction kinds, in the order they are listed in diagnostics.
    pub const ALL: [DirectionKind; 4] = [
        DirectionKind::South,
        DirectionKind::North,
        DirectionKind::West,
        DirectionKind::East,
    ];

    /// Looks up a direction by its keyword. Matching is case-sensitive.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "south" => Some(DirectionKind::South),
            "north" => Some(DirectionKind::North),
            "west" => Some(DirectionKind::West),
            "east" => Some(DirectionKind::East),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DirectionKind::South => "south",
            DirectionKind::North => "north",
            DirectionKind::West => "west",
            DirectionKind::East => "east",
        }
    }
}

impl fmt::Display for DirectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A one-way road from a city towards the city named `target`.
///
/// Cities refer to each other by name only; the target is resolved through
/// the owning [`PlanetMap`](crate::map::PlanetMap) when needed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Direction {
    pub kind: DirectionKind,
    pub target: String,
}

impl Direction {
    pub fn new(kind: DirectionKind, target: impl Into<String>) -> Self {
        Self {
            kind,
            target: target.into(),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.kind, self.target)
    }
}
