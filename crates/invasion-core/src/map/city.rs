//! Cities: the nodes of the invasion graph.

use invasion_events::AlienId;

use super::direction::{Direction, DirectionKind};

/// A named city with up to four outgoing roads.
///
/// A city never holds two roads of the same kind nor two roads to the same
/// target. The destroyed flag and the alien set only change during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct City {
    name: String,
    destroyed: bool,
    directions: Vec<Direction>,
    /// Aliens in the city, in arrival order
    aliens: Vec<AlienId>,
}

impl City {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            destroyed: false,
            directions: Vec::with_capacity(4),
            aliens: Vec::new(),
        }
    }

    /// Builder form of [`City::add_direction`], for maps assembled in code.
    /// Conflicting directions are dropped.
    pub fn with_direction(mut self, kind: DirectionKind, target: impl Into<String>) -> Self {
        self.add_direction(Direction::new(kind, target));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Roads leaving the city, in declaration order.
    pub fn directions(&self) -> &[Direction] {
        &self.directions
    }

    /// Aliens currently in the city, in arrival order.
    pub fn aliens(&self) -> &[AlienId] {
        &self.aliens
    }

    /// Returns the road of the given kind, if the city has one.
    pub fn direction(&self, kind: DirectionKind) -> Option<&Direction> {
        self.directions.iter().find(|d| d.kind == kind)
    }

    /// Checks whether any road of the city leads to `target`.
    pub fn points_to(&self, target: &str) -> bool {
        self.directions.iter().any(|d| d.target == target)
    }

    /// Adds a road. Returns false and leaves the city untouched if the kind
    /// or the target is already taken.
    pub fn add_direction(&mut self, direction: Direction) -> bool {
        if self.direction(direction.kind).is_some() || self.points_to(&direction.target) {
            return false;
        }
        self.directions.push(direction);
        true
    }

    /// Adds an alien to the city. Does nothing if it is already there.
    pub(crate) fn add_alien(&mut self, id: AlienId) {
        if !self.aliens.contains(&id) {
            self.aliens.push(id);
        }
    }

    /// Removes an alien from the city, keeping the others in arrival order.
    pub(crate) fn remove_alien(&mut self, id: AlienId) {
        self.aliens.retain(|&a| a != id);
    }

    /// Flags the city as destroyed and evicts every alien in it. The evicted
    /// aliens are returned in arrival order.
    pub(crate) fn destroy(&mut self) -> Vec<AlienId> {
        self.destroyed = true;
        std::mem::take(&mut self.aliens)
    }
}
