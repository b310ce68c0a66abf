use alloc::boxed::Box;

use crate::{
    board::Board,
    common::{ContractViolation, GameError},
    config::SessionConfig,
    report::{NullReporter, Reporter},
    strategy::{MovementStrategy, TargetingStrategy},
};

/// Where the engine is within the turn cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Constructed, initial report not yet emitted.
    Init,
    /// Ready to play the next turn.
    TurnStart,
    /// A ship advanced this turn.
    Moved,
    /// This turn's volley landed.
    Fired,
    /// Every ship sank.
    Finished,
    /// An error stopped the session mid-turn.
    Aborted,
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Finished,
}

/// Turn count and score of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameSummary {
    pub turns: u64,
    pub score: u64,
}

/// Turn engine: owns the board, asks the strategies for decisions and is the
/// only code that mutates ships.
pub struct Game<R: Reporter = NullReporter> {
    board: Board,
    config: SessionConfig,
    movement: Box<dyn MovementStrategy>,
    targeting: Box<dyn TargetingStrategy>,
    reporter: R,
    phase: GamePhase,
    turn: u64,
    score: u64,
}

impl<R: Reporter> Game<R> {
    pub fn new(
        board: Board,
        config: SessionConfig,
        movement: Box<dyn MovementStrategy>,
        targeting: Box<dyn TargetingStrategy>,
        reporter: R,
    ) -> Result<Self, GameError> {
        if config.launcher_count == 0 {
            return Err(GameError::InvalidLaunchers);
        }
        Ok(Self {
            board,
            config,
            movement,
            targeting,
            reporter,
            phase: GamePhase::Init,
            turn: 0,
            score: 0,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn launchers(&self) -> usize {
        self.config.launcher_count
    }

    pub fn turn(&self) -> u64 {
        self.turn
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn status(&self) -> GameStatus {
        if self.phase == GamePhase::Finished {
            GameStatus::Finished
        } else {
            GameStatus::InProgress
        }
    }

    pub fn summary(&self) -> GameSummary {
        GameSummary {
            turns: self.turn,
            score: self.score,
        }
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    pub fn into_reporter(self) -> R {
        self.reporter
    }

    /// Emit the turn-0 report. A board with no ship afloat finishes here.
    /// Does nothing once the game has left `Init`.
    pub fn start(&mut self) {
        if self.phase != GamePhase::Init {
            return;
        }
        log::debug!(
            "starting game: {} ships, {} launchers, movement={}, targeting={}",
            self.board.len(),
            self.config.launcher_count,
            self.movement.name(),
            self.targeting.name()
        );
        self.reporter
            .on_turn_state(self.turn, self.score, &self.board.snapshot());
        if self.board.alive_count() == 0 {
            self.finish();
        } else {
            self.phase = GamePhase::TurnStart;
        }
    }

    /// Play one full turn. Starts the game first if needed.
    pub fn step(&mut self) -> Result<GameStatus, GameError> {
        match self.phase {
            GamePhase::Finished => return Err(GameError::GameFinished),
            GamePhase::Aborted => return Err(GameError::GameAborted),
            GamePhase::Init => {
                self.start();
                if self.phase == GamePhase::Finished {
                    return Ok(GameStatus::Finished);
                }
            }
            _ => {}
        }
        self.play_turn().map_err(|e| {
            log::warn!("turn {} aborted: {}", self.turn, e);
            self.phase = GamePhase::Aborted;
            e
        })
    }

    /// Play turns until every ship has sunk.
    pub fn run(&mut self) -> Result<GameSummary, GameError> {
        while self.step()? == GameStatus::InProgress {}
        Ok(self.summary())
    }

    fn play_turn(&mut self) -> Result<GameStatus, GameError> {
        let launchers = self.config.launcher_count;
        self.turn += 1;

        let ship = self
            .movement
            .choose_ship(&self.board, launchers)
            .ok_or(ContractViolation::NoSelection)?;
        match self.board.ship(ship) {
            None => return Err(GameError::UnknownShip(ship)),
            Some(s) if !s.is_alive() => return Err(ContractViolation::DeadShipMoved(ship).into()),
            Some(_) => {}
        }
        self.board.advance_ship(ship)?;
        self.phase = GamePhase::Moved;
        log::debug!("turn {}: ship {} advanced", self.turn, ship);
        self.reporter
            .on_turn_state(self.turn, self.score, &self.board.snapshot());

        let targets = self.targeting.choose_targets(&self.board, launchers);
        self.check_volley(&targets)?;
        // position is fixed during the volley, so repeated hits on one ship
        // deal the same damage each time
        for &target in &targets {
            let damage = self.board.apply_damage(target)?;
            log::debug!("turn {}: ship {} took {} damage", self.turn, target, damage);
        }
        self.phase = GamePhase::Fired;
        self.reporter.on_volley(&targets);

        let alive = self.board.alive_count();
        if alive == 0 {
            self.finish();
            return Ok(GameStatus::Finished);
        }
        self.score += alive as u64;
        self.phase = GamePhase::TurnStart;
        Ok(GameStatus::InProgress)
    }

    /// Validate a whole volley before any missile lands.
    fn check_volley(&self, targets: &[usize]) -> Result<(), GameError> {
        let expected = self.config.launcher_count;
        if targets.len() != expected {
            return Err(ContractViolation::VolleySize {
                expected,
                got: targets.len(),
            }
            .into());
        }
        for &target in targets {
            match self.board.ship(target) {
                None => return Err(GameError::UnknownShip(target)),
                Some(s) if !s.is_alive() => {
                    return Err(ContractViolation::DeadShipTargeted(target).into())
                }
                Some(_) => {}
            }
        }
        Ok(())
    }

    fn finish(&mut self) {
        self.phase = GamePhase::Finished;
        log::info!(
            "game finished after {} turns with {} points",
            self.turn,
            self.score
        );
        self.reporter.on_finished(self.turn, self.score);
    }
}
