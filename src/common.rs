//! Common types for the salvo game: load, contract and engine errors.

use alloc::string::String;

/// Errors raised while turning board text into a [`Board`](crate::Board).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The board text contained no ship rows.
    NoShips,
    /// A line was empty or held only whitespace (1-based line number).
    EmptyLine { line: usize },
    /// A token could not be parsed as the expected integer.
    InvalidNumber { line: usize, token: String },
    /// A row carried a health value but no damage cells.
    EmptyTrack { line: usize },
    /// The board resource could not be read.
    Io { path: String, reason: String },
}

impl core::fmt::Display for LoadError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LoadError::NoShips => write!(f, "Board contains no ships"),
            LoadError::EmptyLine { line } => write!(f, "Line {} is empty", line),
            LoadError::InvalidNumber { line, token } => {
                write!(f, "Line {}: '{}' is not a valid number", line, token)
            }
            LoadError::EmptyTrack { line } => {
                write!(f, "Line {}: ship has no damage cells", line)
            }
            LoadError::Io { path, reason } => write!(f, "Unable to read {}: {}", path, reason),
        }
    }
}

/// Ways a strategy can break its decision contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractViolation {
    /// Movement strategy returned nothing while ships are still alive.
    NoSelection,
    /// Movement strategy picked a ship that is already dead.
    DeadShipMoved(usize),
    /// Targeting strategy returned a volley of the wrong size.
    VolleySize { expected: usize, got: usize },
    /// Targeting strategy aimed at a ship that was dead before the volley.
    DeadShipTargeted(usize),
}

impl core::fmt::Display for ContractViolation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ContractViolation::NoSelection => {
                write!(f, "movement strategy made no selection while ships remain alive")
            }
            ContractViolation::DeadShipMoved(id) => {
                write!(f, "movement strategy selected dead ship {}", id)
            }
            ContractViolation::VolleySize { expected, got } => write!(
                f,
                "targeting strategy returned {} targets for {} launchers",
                got, expected
            ),
            ContractViolation::DeadShipTargeted(id) => {
                write!(f, "targeting strategy aimed at dead ship {}", id)
            }
        }
    }
}

/// Errors returned by board and engine operations. All of them are fatal
/// for the running session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Board input was malformed.
    Load(LoadError),
    /// A ship id outside the board was referenced.
    UnknownShip(usize),
    /// A strategy broke its contract.
    StrategyContract(ContractViolation),
    /// Sessions need at least one launcher.
    InvalidLaunchers,
    /// The game already ended.
    GameFinished,
    /// A previous error aborted the session.
    GameAborted,
}

impl From<LoadError> for GameError {
    fn from(err: LoadError) -> Self {
        GameError::Load(err)
    }
}

impl From<ContractViolation> for GameError {
    fn from(err: ContractViolation) -> Self {
        GameError::StrategyContract(err)
    }
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::Load(e) => write!(f, "Load error: {}", e),
            GameError::UnknownShip(id) => write!(f, "Unknown ship id {}", id),
            GameError::StrategyContract(e) => write!(f, "Strategy contract violated: {}", e),
            GameError::InvalidLaunchers => write!(f, "Launcher count must be positive"),
            GameError::GameFinished => write!(f, "Game has already finished"),
            GameError::GameAborted => write!(f, "Game was aborted by an earlier error"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LoadError {}

#[cfg(feature = "std")]
impl std::error::Error for ContractViolation {}

#[cfg(feature = "std")]
impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Load(e) => Some(e),
            GameError::StrategyContract(e) => Some(e),
            _ => None,
        }
    }
}
