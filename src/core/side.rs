//! Seat identification and per-seat data storage.
//!
//! ## Side
//!
//! The game always has exactly two seats: the human at the table and the
//! computer opponent.
//!
//! ## SideMap
//!
//! Two-slot storage indexed by `Side`. Used for running totals and the
//! session win tally.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two seats in a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Human,
    Computer,
}

impl Side {
    /// Both sides, human first.
    ///
    /// ```
    /// use lucky_toss::core::Side;
    ///
    /// let sides: Vec<_> = Side::all().collect();
    /// assert_eq!(sides, vec![Side::Human, Side::Computer]);
    /// ```
    pub fn all() -> impl Iterator<Item = Side> {
        [Side::Human, Side::Computer].into_iter()
    }

    /// The other seat.
    #[must_use]
    pub const fn opponent(self) -> Side {
        match self {
            Side::Human => Side::Computer,
            Side::Computer => Side::Human,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Human => write!(f, "Human"),
            Side::Computer => write!(f, "Computer"),
        }
    }
}

/// Per-side data with O(1) access.
///
/// ## Example
///
/// ```
/// use lucky_toss::core::{Side, SideMap};
///
/// let mut totals: SideMap<u32> = SideMap::default();
/// totals[Side::Computer] += 12;
///
/// assert_eq!(totals[Side::Human], 0);
/// assert_eq!(totals[Side::Computer], 12);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    pub human: T,
    pub computer: T,
}

impl<T> SideMap<T> {
    /// Create a map from explicit values.
    pub const fn new(human: T, computer: T) -> Self {
        Self { human, computer }
    }

    /// Create a map with values from a factory function.
    pub fn from_fn(mut factory: impl FnMut(Side) -> T) -> Self {
        let human = factory(Side::Human);
        let computer = factory(Side::Computer);
        Self { human, computer }
    }

    /// Get a reference to a side's data.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        match side {
            Side::Human => &self.human,
            Side::Computer => &self.computer,
        }
    }

    /// Get a mutable reference to a side's data.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        match side {
            Side::Human => &mut self.human,
            Side::Computer => &mut self.computer,
        }
    }

    /// Iterate over (Side, &T) pairs, human first.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        [(Side::Human, &self.human), (Side::Computer, &self.computer)].into_iter()
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_basics() {
        assert_eq!(Side::Human.opponent(), Side::Computer);
        assert_eq!(Side::Computer.opponent(), Side::Human);
        assert_eq!(format!("{}", Side::Human), "Human");
        assert_eq!(Side::all().count(), 2);
    }

    #[test]
    fn test_side_map_from_fn() {
        let map = SideMap::from_fn(|s| if s == Side::Human { 1 } else { 2 });

        assert_eq!(map[Side::Human], 1);
        assert_eq!(map[Side::Computer], 2);
    }

    #[test]
    fn test_side_map_mutation() {
        let mut map: SideMap<u32> = SideMap::default();

        map[Side::Human] = 10;
        map[Side::Computer] += 20;

        assert_eq!(map, SideMap::new(10, 20));
    }

    #[test]
    fn test_side_map_iter() {
        let map = SideMap::new(3, 4);
        let pairs: Vec<_> = map.iter().collect();

        assert_eq!(pairs, vec![(Side::Human, &3), (Side::Computer, &4)]);
    }

    #[test]
    fn test_side_map_serialization() {
        let map = SideMap::new(30, 45);
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"human":30,"computer":45}"#);

        let deserialized: SideMap<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
