//! Built-in movement and targeting strategies.

use alloc::{boxed::Box, vec, vec::Vec};
use rand::{rngs::SmallRng, Rng, SeedableRng};

use crate::board::Board;
use crate::ship::Ship;
use crate::strategy::{MovementStrategy, TargetingStrategy};

/// Advances the first ship still afloat.
#[derive(Debug, Default, Clone, Copy)]
pub struct NaiveMovement;

impl NaiveMovement {
    pub fn new() -> Self {
        Self
    }
}

impl MovementStrategy for NaiveMovement {
    fn choose_ship(&mut self, board: &Board, _launchers: usize) -> Option<usize> {
        board.first_alive()
    }

    fn name(&self) -> &'static str {
        "naive"
    }
}

/// Fires every launcher at the first ship still afloat.
#[derive(Debug, Default, Clone, Copy)]
pub struct NaiveTargeting;

impl NaiveTargeting {
    pub fn new() -> Self {
        Self
    }
}

impl TargetingStrategy for NaiveTargeting {
    fn choose_targets(&mut self, board: &Board, launchers: usize) -> Vec<usize> {
        match board.first_alive() {
            Some(id) => vec![id; launchers],
            None => Vec::new(),
        }
    }

    fn name(&self) -> &'static str {
        "naive"
    }
}

/// Advances the alive ship whose next cell is least exposed.
#[derive(Debug, Default, Clone, Copy)]
pub struct EvasiveMovement;

impl EvasiveMovement {
    pub fn new() -> Self {
        Self
    }
}

impl MovementStrategy for EvasiveMovement {
    fn choose_ship(&mut self, board: &Board, _launchers: usize) -> Option<usize> {
        // min_by_key keeps the first minimum, so ties go to the lowest id
        board
            .ships()
            .iter()
            .filter(|s| s.is_alive())
            .min_by_key(|s| s.next_damage())
            .map(Ship::id)
    }

    fn name(&self) -> &'static str {
        "evasive"
    }
}

/// Fires every launcher at the alive ship with the least health.
#[derive(Debug, Default, Clone, Copy)]
pub struct WeakestTargeting;

impl WeakestTargeting {
    pub fn new() -> Self {
        Self
    }
}

impl TargetingStrategy for WeakestTargeting {
    fn choose_targets(&mut self, board: &Board, launchers: usize) -> Vec<usize> {
        board
            .ships()
            .iter()
            .filter(|s| s.is_alive())
            .min_by_key(|s| s.health())
            .map(|s| vec![s.id(); launchers])
            .unwrap_or_default()
    }

    fn name(&self) -> &'static str {
        "weakest"
    }
}

/// Deals launchers round-robin over the alive ships in id order.
#[derive(Debug, Default, Clone, Copy)]
pub struct SpreadTargeting;

impl SpreadTargeting {
    pub fn new() -> Self {
        Self
    }
}

impl TargetingStrategy for SpreadTargeting {
    fn choose_targets(&mut self, board: &Board, launchers: usize) -> Vec<usize> {
        let alive: Vec<usize> = board.alive_ids().collect();
        if alive.is_empty() {
            return Vec::new();
        }
        (0..launchers).map(|i| alive[i % alive.len()]).collect()
    }

    fn name(&self) -> &'static str {
        "spread"
    }
}

/// Plans kills: concentrates fire on the most exposed ship until the
/// projected damage sinks it, then moves on to the next one.
#[derive(Debug, Default, Clone, Copy)]
pub struct FocusTargeting;

impl FocusTargeting {
    pub fn new() -> Self {
        Self
    }
}

impl TargetingStrategy for FocusTargeting {
    fn choose_targets(&mut self, board: &Board, launchers: usize) -> Vec<usize> {
        let mut order: Vec<&Ship> = board.ships().iter().filter(|s| s.is_alive()).collect();
        if order.is_empty() {
            return Vec::new();
        }
        // stable sort: equal damage keeps id order
        order.sort_by(|a, b| b.potential_damage().cmp(&a.potential_damage()));

        let mut targets = Vec::with_capacity(launchers);
        let mut idx = 0;
        let mut projected = order[0].health();
        for _ in 0..launchers {
            let ship = order[idx];
            targets.push(ship.id());
            projected -= i64::from(ship.potential_damage());
            if projected <= 0 && idx + 1 < order.len() {
                idx += 1;
                projected = order[idx].health();
            }
        }
        targets
    }

    fn name(&self) -> &'static str {
        "focus"
    }
}

/// Each launcher picks a uniformly random alive ship.
#[derive(Debug, Clone)]
pub struct RandomTargeting {
    rng: SmallRng,
}

impl RandomTargeting {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl TargetingStrategy for RandomTargeting {
    fn choose_targets(&mut self, board: &Board, launchers: usize) -> Vec<usize> {
        let alive: Vec<usize> = board.alive_ids().collect();
        if alive.is_empty() {
            return Vec::new();
        }
        (0..launchers)
            .map(|_| alive[self.rng.random_range(0..alive.len())])
            .collect()
    }

    fn name(&self) -> &'static str {
        "random"
    }
}

/// Selectable movement strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(clap::ValueEnum))]
pub enum MovementKind {
    Naive,
    Evasive,
}

impl MovementKind {
    pub fn build(self) -> Box<dyn MovementStrategy> {
        match self {
            MovementKind::Naive => Box::new(NaiveMovement::new()),
            MovementKind::Evasive => Box::new(EvasiveMovement::new()),
        }
    }
}

/// Selectable targeting strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(clap::ValueEnum))]
pub enum TargetingKind {
    Naive,
    Weakest,
    Spread,
    Focus,
    Random,
}

impl TargetingKind {
    pub const ALL: [TargetingKind; 5] = [
        TargetingKind::Naive,
        TargetingKind::Weakest,
        TargetingKind::Spread,
        TargetingKind::Focus,
        TargetingKind::Random,
    ];

    /// `seed` only matters for [`TargetingKind::Random`].
    pub fn build(self, seed: u64) -> Box<dyn TargetingStrategy> {
        match self {
            TargetingKind::Naive => Box::new(NaiveTargeting::new()),
            TargetingKind::Weakest => Box::new(WeakestTargeting::new()),
            TargetingKind::Spread => Box::new(SpreadTargeting::new()),
            TargetingKind::Focus => Box::new(FocusTargeting::new()),
            TargetingKind::Random => Box::new(RandomTargeting::new(seed)),
        }
    }
}
