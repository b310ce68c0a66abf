//! Reporting hooks invoked by the engine after each phase.

use alloc::vec::Vec;

use crate::ship::ShipState;

/// Observer for game progress. All hooks default to doing nothing.
pub trait Reporter {
    /// Called once before the first turn (turn 0) and after every move.
    /// `score` does not yet include the current turn.
    fn on_turn_state(&mut self, _turn: u64, _score: u64, _ships: &[ShipState]) {}

    /// Called after a volley with the literal target list, launcher order.
    fn on_volley(&mut self, _targets: &[usize]) {}

    /// Called once when the last ship sinks.
    fn on_finished(&mut self, _turn: u64, _score: u64) {}
}

/// Discards every report.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullReporter;

impl Reporter for NullReporter {}

/// A single captured hook invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
#[cfg_attr(feature = "std", serde(tag = "event", rename_all = "snake_case"))]
pub enum ReportEvent {
    TurnState {
        turn: u64,
        score: u64,
        ships: Vec<ShipState>,
    },
    Volley {
        targets: Vec<usize>,
    },
    Finished {
        turn: u64,
        score: u64,
    },
}

/// Keeps every event in order.
#[derive(Debug, Default, Clone)]
pub struct RecordingReporter {
    events: Vec<ReportEvent>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[ReportEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<ReportEvent> {
        self.events
    }
}

impl Reporter for RecordingReporter {
    fn on_turn_state(&mut self, turn: u64, score: u64, ships: &[ShipState]) {
        self.events.push(ReportEvent::TurnState {
            turn,
            score,
            ships: ships.to_vec(),
        });
    }

    fn on_volley(&mut self, targets: &[usize]) {
        self.events.push(ReportEvent::Volley {
            targets: targets.to_vec(),
        });
    }

    fn on_finished(&mut self, turn: u64, score: u64) {
        self.events.push(ReportEvent::Finished { turn, score });
    }
}

/// Forwards reports to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn on_turn_state(&mut self, turn: u64, score: u64, ships: &[ShipState]) {
        let alive = ships.iter().filter(|s| s.is_alive()).count();
        log::info!("turn {} score {} alive {}", turn, score, alive);
        for s in ships.iter().filter(|s| s.is_alive()) {
            log::debug!(
                "ship {} health {} position {} potential damage {}",
                s.id,
                s.health,
                s.position,
                s.potential_damage
            );
        }
    }

    fn on_volley(&mut self, targets: &[usize]) {
        log::info!("volley {:?}", targets);
    }

    fn on_finished(&mut self, turn: u64, score: u64) {
        log::info!("finished after {} turns with {} points", turn, score);
    }
}

#[cfg(feature = "std")]
pub use console::ConsoleReporter;

#[cfg(feature = "std")]
mod console {
    use std::io::{self, Write};

    use super::Reporter;
    use crate::ship::ShipState;

    const SEPARATOR: &str = "----------------------------------------";

    /// Human-readable text output. Write failures are logged and skipped.
    pub struct ConsoleReporter<W: Write> {
        out: W,
    }

    impl ConsoleReporter<io::Stdout> {
        pub fn stdout() -> Self {
            Self::new(io::stdout())
        }
    }

    impl<W: Write> ConsoleReporter<W> {
        pub fn new(out: W) -> Self {
            Self { out }
        }

        pub fn into_inner(self) -> W {
            self.out
        }

        fn emit(&mut self, text: &str) {
            if let Err(e) = writeln!(self.out, "{}", text) {
                log::warn!("report output failed: {}", e);
            }
        }
    }

    impl<W: Write> Reporter for ConsoleReporter<W> {
        fn on_turn_state(&mut self, turn: u64, score: u64, ships: &[ShipState]) {
            if turn == 0 {
                self.emit("Game start!");
            }
            self.emit(&format!(
                "Turn: {}, accumulated points: {}. Ships afloat:",
                turn, score
            ));
            for s in ships.iter().filter(|s| s.is_alive()) {
                self.emit(&format!(
                    "Ship {}. Health: {}, position: {}, potential damage: {}",
                    s.id, s.health, s.position, s.potential_damage
                ));
            }
            self.emit(SEPARATOR);
        }

        fn on_volley(&mut self, targets: &[usize]) {
            let shots: Vec<String> = targets
                .iter()
                .enumerate()
                .map(|(launcher, ship)| format!("Launcher {} -> ship {}", launcher, ship))
                .collect();
            self.emit(&format!("Missiles fired: {}", shots.join(", ")));
            self.emit(SEPARATOR);
        }

        fn on_finished(&mut self, turn: u64, score: u64) {
            self.emit(&format!(
                "Game over! Turns played: {}. Accumulated points: {}",
                turn, score
            ));
        }
    }
}
