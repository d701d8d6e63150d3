//! Aliens: the invaders walking the map.

use invasion_events::{AlienId, AlienSnapshot};

/// An invader. Aliens are never removed from a run; dead ones stay where
/// they died.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alien {
    id: AlienId,
    city: String,
    dead: bool,
}

impl Alien {
    pub fn new(id: AlienId, city: impl Into<String>) -> Self {
        Self {
            id,
            city: city.into(),
            dead: false,
        }
    }

    pub fn id(&self) -> AlienId {
        self.id
    }

    /// The city the alien is in, or the city it died in.
    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }

    pub(crate) fn kill(&mut self) {
        self.dead = true;
    }

    /// Moves the alien. Dead aliens stay put.
    pub(crate) fn move_to(&mut self, city: impl Into<String>) {
        if !self.dead {
            self.city = city.into();
        }
    }

    pub fn snapshot(&self) -> AlienSnapshot {
        AlienSnapshot {
            id: self.id,
            city: self.city.clone(),
            dead: self.dead,
        }
    }
}
