//! Alien invasion simulator.
//!
//! Parses a map of cities linked by compass roads, lets a horde of aliens
//! loose on it, and reports which cities are left standing.
//!
//! ```
//! use invasion_core::{parse_map, Simulation};
//!
//! let map = parse_map("London east=Bolton\nBolton west=London", "example").unwrap();
//! let result = Simulation::seeded(map, 42).run(2).unwrap();
//! assert_eq!(result.log_lines()[0], "Simulate invasion with 2 aliens");
//! ```

pub mod config;
pub mod events;
pub mod map;
pub mod parser;
pub mod simulation;

pub use config::{ConfigError, InvasionConfig};
pub use events::EventLogger;
pub use map::{City, Direction, DirectionKind, PlanetMap};
pub use parser::{load_map, parse_map, ParseError, Parser, SyntaxErrorKind};
pub use simulation::{Alien, Simulation, SimulationError, SimulationResult};

pub use invasion_events::{AlienId, InvasionEvent, RunSnapshot};
