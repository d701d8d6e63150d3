//! Event Types
//!
//! Everything worth writing into the battle log. The `Display` impl of each
//! event is the exact line the log carries.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of an alien: its position in the spawn sequence.
pub type AlienId = usize;

/// Printed in front of every alien id in a battle line.
pub const ALIEN_GLYPH: &str = "👾";

/// An event recorded during an invasion run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum InvasionEvent {
    /// The run started and spawned this many aliens.
    InvasionStarted { aliens: usize },
    /// Two or more aliens met in a city and destroyed it.
    Battle {
        turn: u32,
        city: String,
        aliens: Vec<AlienId>,
    },
    /// No alien survived the turn.
    AllDead { turn: u32 },
    /// Nobody moved during the turn: every survivor is locked in.
    AllLocked { turn: u32 },
    /// The turn ceiling was reached.
    TurnLimitReached { turns: u32 },
}

impl InvasionEvent {
    /// Returns the snake_case tag used when the event is serialized.
    pub fn event_type(&self) -> &'static str {
        match self {
            InvasionEvent::InvasionStarted { .. } => "invasion_started",
            InvasionEvent::Battle { .. } => "battle",
            InvasionEvent::AllDead { .. } => "all_dead",
            InvasionEvent::AllLocked { .. } => "all_locked",
            InvasionEvent::TurnLimitReached { .. } => "turn_limit_reached",
        }
    }

    /// Returns true for the events that end a run.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            InvasionEvent::AllDead { .. }
                | InvasionEvent::AllLocked { .. }
                | InvasionEvent::TurnLimitReached { .. }
        )
    }
}

impl fmt::Display for InvasionEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvasionEvent::InvasionStarted { aliens } => {
                write!(f, "Simulate invasion with {} aliens", aliens)
            }
            InvasionEvent::Battle { city, aliens, .. } => {
                write!(f, "Aliens: ")?;
                for (i, id) in aliens.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}{}", ALIEN_GLYPH, id)?;
                }
                write!(
                    f,
                    " have met in the city of {}. ⚔ Battle destroyed the city.",
                    city
                )
            }
            InvasionEvent::AllDead { turn } => write!(
                f,
                "All aliens are dead, simulations is over on turn number {}",
                turn
            ),
            InvasionEvent::AllLocked { turn } => write!(
                f,
                "All aliens are either dead or locked, simulations is over on turn number {}",
                turn
            ),
            InvasionEvent::TurnLimitReached { turns } => {
                write!(f, "{} turns are finished. Simulation is over", turns)
            }
        }
    }
}
