//! Board model: an arena of ships addressed by id, plus the text parser.

use alloc::{borrow::ToOwned, vec::Vec};
use core::{fmt, str::FromStr};

use crate::common::{GameError, LoadError};
use crate::ship::{Ship, ShipState};

/// All ships of a session, indexed by id.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    ships: Vec<Ship>,
}

impl Board {
    /// Build a board from `(health, track)` rows; row order assigns ids.
    pub fn new(rows: Vec<(i64, Vec<u32>)>) -> Result<Self, LoadError> {
        let mut ships = Vec::with_capacity(rows.len());
        for (id, (health, track)) in rows.into_iter().enumerate() {
            if track.is_empty() {
                return Err(LoadError::EmptyTrack { line: id + 1 });
            }
            ships.push(Ship::new(id, health, track));
        }
        Ok(Board { ships })
    }

    /// Parse the whitespace separated `health damage...` format, one ship per line.
    pub fn parse(text: &str) -> Result<Self, LoadError> {
        let mut rows = Vec::new();
        for (idx, raw) in text.lines().enumerate() {
            let line = idx + 1;
            let mut tokens = raw.split_whitespace();
            let health = match tokens.next() {
                Some(tok) => parse_token::<i64>(tok, line)?,
                None => return Err(LoadError::EmptyLine { line }),
            };
            let track = tokens
                .map(|tok| parse_token::<u32>(tok, line))
                .collect::<Result<Vec<_>, _>>()?;
            if track.is_empty() {
                return Err(LoadError::EmptyTrack { line });
            }
            rows.push((health, track));
        }
        if rows.is_empty() {
            return Err(LoadError::NoShips);
        }
        Board::new(rows)
    }

    pub fn len(&self) -> usize {
        self.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn ship(&self, id: usize) -> Option<&Ship> {
        self.ships.get(id)
    }

    /// `false` for dead and for unknown ids.
    pub fn is_alive(&self, id: usize) -> bool {
        self.ships.get(id).is_some_and(Ship::is_alive)
    }

    /// Lowest id still afloat.
    pub fn first_alive(&self) -> Option<usize> {
        self.ships.iter().find(|s| s.is_alive()).map(Ship::id)
    }

    pub fn alive_ids(&self) -> impl Iterator<Item = usize> + '_ {
        self.ships.iter().filter(|s| s.is_alive()).map(Ship::id)
    }

    pub fn alive_count(&self) -> usize {
        self.ships.iter().filter(|s| s.is_alive()).count()
    }

    /// Move ship `id` one cell along its track.
    pub fn advance_ship(&mut self, id: usize) -> Result<(), GameError> {
        self.ship_mut(id)?.advance();
        Ok(())
    }

    /// Hit ship `id` with one missile at its current cell; returns the damage dealt.
    pub fn apply_damage(&mut self, id: usize) -> Result<u32, GameError> {
        Ok(self.ship_mut(id)?.hit())
    }

    /// State of every ship, dead ones included.
    pub fn snapshot(&self) -> Vec<ShipState> {
        self.ships.iter().map(Ship::state).collect()
    }

    fn ship_mut(&mut self, id: usize) -> Result<&mut Ship, GameError> {
        self.ships.get_mut(id).ok_or(GameError::UnknownShip(id))
    }
}

fn parse_token<T: FromStr>(tok: &str, line: usize) -> Result<T, LoadError> {
    tok.parse().map_err(|_| LoadError::InvalidNumber {
        line,
        token: tok.to_owned(),
    })
}

impl FromStr for Board {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::parse(s)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.ships.iter()).finish()
    }
}

/// Renders the board back in its text format.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ship in &self.ships {
            write!(f, "{}", ship.health())?;
            for d in ship.track() {
                write!(f, " {}", d)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
