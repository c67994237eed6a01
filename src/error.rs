//! Centralized error types for the simulation.
//!
//! Only construction can fail: once a maze has been parsed and validated the
//! per-frame update is infallible.

use glam::IVec2;

/// Main error type for the simulation.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Map parsing error: {0}")]
    MapParse(#[from] ParseError),

    #[error("Map error: {0}")]
    Map(#[from] MapError),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Error type for map parsing operations.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown character in board: {0:?}")]
    UnknownCharacter(char),
    #[error("Invalid board height: expected {expected}, got {found}")]
    InvalidHeight { expected: usize, found: usize },
    #[error("Invalid board width at line {line}: expected {expected}, got {found}")]
    InvalidWidth { line: usize, expected: usize, found: usize },
    #[error("Board has no player start marker")]
    MissingPlayerStart,
}

/// Errors found while validating a parsed maze.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum MapError {
    #[error("Dead end at tile {0} ({1} open neighbours)")]
    DeadEnd(IVec2, usize),

    #[error("Maze holds {found} collectibles, expected {expected}")]
    CollectibleCount { expected: u32, found: u32 },
}

/// Result type for simulation operations.
pub type GameResult<T> = Result<T, GameError>;
