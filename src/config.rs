use crate::common::GameError;

/// Launchers used when the caller does not pick a count.
pub const DEFAULT_LAUNCHERS: usize = 2;
/// Board file read by the CLI when no `--board` is given.
pub const DEFAULT_BOARD_FILE: &str = "tablero";
/// Environment variable holding the log level filter.
pub const LOG_ENV_VAR: &str = "NAVAL_SALVO_LOG";

/// Settings fixed for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub launcher_count: usize,
}

impl SessionConfig {
    pub fn new(launcher_count: usize) -> Result<Self, GameError> {
        if launcher_count == 0 {
            return Err(GameError::InvalidLaunchers);
        }
        Ok(Self { launcher_count })
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            launcher_count: DEFAULT_LAUNCHERS,
        }
    }
}
