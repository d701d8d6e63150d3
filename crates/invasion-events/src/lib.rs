//! Shared event types and serialization for the invasion simulator.
//!
//! This crate contains pure data structures with no simulation logic: the
//! events a run emits (rendered as the human-readable battle log) and the
//! serializable snapshot of a finished run.

pub mod event;
pub mod snapshot;

pub use event::{AlienId, InvasionEvent, ALIEN_GLYPH};

pub use snapshot::{AlienSnapshot, CitySnapshot, DirectionSnapshot, RunSnapshot};
