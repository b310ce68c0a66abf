use alloc::vec::Vec;

use crate::board::Board;

/// Decides which ship advances each turn.
///
/// Implementations only read the board; the engine applies the move.
pub trait MovementStrategy {
    /// Return the id of an alive ship to advance, or `None` when no ship is
    /// alive.
    fn choose_ship(&mut self, board: &Board, launchers: usize) -> Option<usize>;

    /// Short name used in logs and reports.
    fn name(&self) -> &'static str;
}

/// Decides where every launcher fires each turn.
pub trait TargetingStrategy {
    /// Return exactly `launchers` ship ids, one per launcher in launcher
    /// order. Every id must be alive when the volley is chosen; duplicates
    /// are allowed.
    fn choose_targets(&mut self, board: &Board, launchers: usize) -> Vec<usize>;

    /// Short name used in logs and reports.
    fn name(&self) -> &'static str;
}
