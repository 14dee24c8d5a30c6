//! Side identification and per-side data storage.
//!
//! ## Side
//!
//! A match always has exactly two sides: the human-controlled player and the
//! computer-controlled opponent. Both fighters share one entity type and are
//! told apart only by their `Side` tag.
//!
//! ## SideMap
//!
//! Fixed two-slot storage indexed by `Side`, with a split borrow for the
//! "attacker mutates, target mutates" shape of a turn.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Which side of the match an entity fights for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The human-controlled fighter.
    Player,
    /// The computer-controlled fighter.
    Opponent,
}

impl Side {
    /// Both sides in turn order.
    pub const ALL: [Side; 2] = [Side::Player, Side::Opponent];

    /// Get the storage index (player first).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::Player => 0,
            Side::Opponent => 1,
        }
    }

    /// Get the other side.
    ///
    /// ```
    /// use furry_fists::core::Side;
    ///
    /// assert_eq!(Side::Player.other(), Side::Opponent);
    /// assert_eq!(Side::Opponent.other(), Side::Player);
    /// ```
    #[must_use]
    pub const fn other(self) -> Side {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Player => write!(f, "Player"),
            Side::Opponent => write!(f, "Opponent"),
        }
    }
}

/// Per-side data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use furry_fists::core::{Side, SideMap};
///
/// let mut health = SideMap::with_value(100u32);
/// health[Side::Opponent] = 40;
///
/// assert_eq!(health[Side::Player], 100);
/// assert_eq!(health[Side::Opponent], 40);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create a SideMap from explicit player and opponent values.
    pub fn new(player: T, opponent: T) -> Self {
        Self {
            data: [player, opponent],
        }
    }

    /// Create a SideMap with values from a factory function.
    pub fn from_fn(factory: impl Fn(Side) -> T) -> Self {
        Self::new(factory(Side::Player), factory(Side::Opponent))
    }

    /// Create a SideMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(value.clone(), value)
    }

    /// Get a reference to one side's data.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        &self.data[side.index()]
    }

    /// Get a mutable reference to one side's data.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        &mut self.data[side.index()]
    }

    /// Borrow `side` and its opponent mutably at the same time.
    ///
    /// Returns `(side's data, other side's data)`.
    pub fn pair_mut(&mut self, side: Side) -> (&mut T, &mut T) {
        let (player, opponent) = self.data.split_at_mut(1);
        match side {
            Side::Player => (&mut player[0], &mut opponent[0]),
            Side::Opponent => (&mut opponent[0], &mut player[0]),
        }
    }

    /// Iterate over (Side, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over (Side, &mut T) pairs in turn order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Side, &mut T)> {
        Side::ALL.into_iter().zip(self.data.iter_mut())
    }

    /// Map each entry into a new SideMap.
    pub fn map<U>(&self, f: impl Fn(&T) -> U) -> SideMap<U> {
        SideMap::new(f(&self.data[0]), f(&self.data[1]))
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
        assert_eq!(Side::Player.index(), 0);
        assert_eq!(Side::Opponent.index(), 1);
        assert_eq!(Side::Player.other().other(), Side::Player);
        assert_eq!(format!("{}", Side::Opponent), "Opponent");
    }

    #[test]
    fn test_side_map_from_fn() {
        let map = SideMap::from_fn(|s| s.index() * 10);

        assert_eq!(map[Side::Player], 0);
        assert_eq!(map[Side::Opponent], 10);
    }

    #[test]
    fn test_side_map_mutation() {
        let mut map = SideMap::with_value(0);

        map[Side::Player] = 10;
        *map.get_mut(Side::Opponent) = 20;

        assert_eq!(map[Side::Player], 10);
        assert_eq!(map[Side::Opponent], 20);
    }

    #[test]
    fn test_pair_mut_orders_by_side() {
        let mut map = SideMap::new("player", "opponent");

        let (actor, target) = map.pair_mut(Side::Opponent);
        assert_eq!(*actor, "opponent");
        assert_eq!(*target, "player");

        let (actor, target) = map.pair_mut(Side::Player);
        *actor = "p";
        *target = "o";
        assert_eq!(map, SideMap::new("p", "o"));
    }

    #[test]
    fn test_side_map_iter() {
        let map = SideMap::new(1, 2);

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(Side::Player, &1), (Side::Opponent, &2)]);
    }

    #[test]
    fn test_side_map_serialization() {
        let map = SideMap::new(3u32, 4u32);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: SideMap<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
