//! Event recording.
//!
//! The event vocabulary lives in the `invasion-events` crate; this module
//! persists it.

pub mod logger;

pub use invasion_events::InvasionEvent;
pub use logger::EventLogger;
