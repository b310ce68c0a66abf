//! Ship records and the read-only snapshots handed to reporters.

use alloc::vec::Vec;
use core::fmt;

/// A ship sailing along its damage track.
#[derive(Clone, PartialEq, Eq)]
pub struct Ship {
    id: usize,
    health: i64,
    position: usize,
    track: Vec<u32>,
}

impl Ship {
    /// Build a ship at the start of its track. Callers guarantee a non-empty
    /// track; [`Board::new`](crate::Board::new) checks it.
    pub(crate) fn new(id: usize, health: i64, track: Vec<u32>) -> Self {
        Self {
            id,
            health,
            position: 0,
            track,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    /// Remaining health; negative once overkilled.
    pub fn health(&self) -> i64 {
        self.health
    }

    /// Index of the current track cell.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn track(&self) -> &[u32] {
        &self.track
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Damage a missile would deal at the current cell.
    pub fn potential_damage(&self) -> u32 {
        self.track[self.position]
    }

    /// Damage at the cell the ship would occupy after one more advance.
    pub fn next_damage(&self) -> u32 {
        self.track[(self.position + 1) % self.track.len()]
    }

    /// Move one cell forward, wrapping to the start of the track.
    pub(crate) fn advance(&mut self) {
        self.position += 1;
        if self.position >= self.track.len() {
            self.position = 0;
        }
    }

    /// Take one missile hit at the current cell and return the damage dealt.
    pub(crate) fn hit(&mut self) -> u32 {
        let damage = self.potential_damage();
        self.health -= i64::from(damage);
        damage
    }

    pub fn state(&self) -> ShipState {
        ShipState {
            id: self.id,
            health: self.health,
            position: self.position,
            potential_damage: self.potential_damage(),
        }
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ id: {}, health: {}, position: {}/{}, potential_damage: {} }}",
            self.id,
            self.health,
            self.position,
            self.track.len(),
            self.potential_damage(),
        )
    }
}

/// Point-in-time view of one ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipState {
    pub id: usize,
    pub health: i64,
    pub position: usize,
    pub potential_damage: u32,
}

impl ShipState {
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }
}
