#![cfg(feature = "std")]

use std::{fs, path::Path};

use crate::{board::Board, common::LoadError};

/// Read and parse a board file.
pub fn load_board<P: AsRef<Path>>(path: P) -> Result<Board, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| LoadError::Io {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    let board = Board::parse(&text)?;
    log::debug!("loaded {} ships from {}", board.len(), path.display());
    Ok(board)
}
