//! The city graph.
//!
//! A [`PlanetMap`] owns its cities and keeps them in declaration order, so
//! every walk over the map (validation, battles, rendering) is deterministic.

pub mod city;
pub mod direction;

pub use city::City;
pub use direction::{Direction, DirectionKind};

use invasion_events::AlienId;
use std::collections::HashMap;
use std::fmt;

/// Mapping from city name to [`City`], iterated in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanetMap {
    cities: Vec<City>,
    index: HashMap<String, usize>,
}

impl PlanetMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a city. A city with the same name is replaced in place and
    /// returned.
    pub fn insert(&mut self, city: City) -> Option<City> {
        match self.index.get(city.name()) {
            Some(&i) => Some(std::mem::replace(&mut self.cities[i], city)),
            None => {
                self.index.insert(city.name().to_string(), self.cities.len());
                self.cities.push(city);
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&City> {
        self.index.get(name).map(|&i| &self.cities[i])
    }

    pub(crate) fn get_mut(&mut self, name: &str) -> Option<&mut City> {
        self.index.get(name).map(|&i| &mut self.cities[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// City at the given declaration index.
    pub fn city_at(&self, index: usize) -> Option<&City> {
        self.cities.get(index)
    }

    pub(crate) fn city_at_mut(&mut self, index: usize) -> Option<&mut City> {
        self.cities.get_mut(index)
    }

    /// All cities, in declaration order.
    pub fn cities(&self) -> impl Iterator<Item = &City> {
        self.cities.iter()
    }

    pub(crate) fn cities_mut(&mut self) -> impl Iterator<Item = &mut City> {
        self.cities.iter_mut()
    }

    /// Cities that have not been destroyed, in declaration order.
    pub fn surviving(&self) -> impl Iterator<Item = &City> {
        self.cities.iter().filter(|c| !c.is_destroyed())
    }

    /// Whether the named city is destroyed. Unknown names count as destroyed:
    /// nothing can ever travel there.
    pub fn is_destroyed(&self, name: &str) -> bool {
        self.get(name).map_or(true, City::is_destroyed)
    }

    /// Moves an alien from one city's alien set to another's.
    pub(crate) fn relocate(&mut self, id: AlienId, from: &str, to: &str) {
        if let Some(city) = self.get_mut(from) {
            city.remove_alien(id);
        }
        if let Some(city) = self.get_mut(to) {
            city.add_alien(id);
        }
    }
}

impl FromIterator<City> for PlanetMap {
    fn from_iter<I: IntoIterator<Item = City>>(iter: I) -> Self {
        let mut map = PlanetMap::new();
        for city in iter {
            map.insert(city);
        }
        map
    }
}

/// Renders the surviving part of the map in the input file format.
///
/// Destroyed cities are left out, and so is every road into a destroyed
/// city. A map with nothing destroyed renders back to its source format.
impl fmt::Display for PlanetMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for city in self.surviving() {
            f.write_str(city.name())?;
            for direction in city.directions() {
                if self.is_destroyed(&direction.target) {
                    continue;
                }
                write!(f, " {}", direction)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
