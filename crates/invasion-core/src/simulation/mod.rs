//! Invasion simulation: aliens, the turn loop, and run results.

pub mod alien;
pub mod engine;
pub mod result;

pub use alien::Alien;
pub use engine::{Simulation, SimulationError, CITY_DESTRUCTION_THRESHOLD, DEFAULT_MAX_TURNS};
pub use result::SimulationResult;
