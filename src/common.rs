//! Crate-wide error and shot result types.

use crate::bitboard::BitBoardError;

/// Outcome of resolving a shot against a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotResult {
    /// Target cell was shot before; nothing changed and the same side
    /// keeps the turn.
    AlreadyTried,
    /// Shot landed in open water.
    Miss,
    /// Shot hit a ship segment that is still afloat.
    Hit,
    /// Shot hit the last remaining segment of the named ship.
    Sunk(&'static str),
}

impl ShotResult {
    /// True for `Hit` and `Sunk`.
    pub fn is_hit(&self) -> bool {
        matches!(self, ShotResult::Hit | ShotResult::Sunk(_))
    }
}

/// Errors surfaced by game operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Coordinate or footprint falls outside the 10×10 grid.
    OutOfBounds { row: usize, col: usize },
    /// Ship type index is not in the configured fleet table.
    InvalidShipIndex,
    /// That ship type is already on the board.
    ShipAlreadyPlaced,
    /// Footprint overlaps or touches a committed ship.
    InvalidPlacement,
    /// Random placement search gave up after the attempt cap.
    PlacementExhausted,
    /// Battle cannot start before every ship is placed.
    FleetIncomplete,
    /// Operation is not legal in the current phase.
    WrongPhase,
    /// Shot attempted by the side whose turn it is not.
    NotYourTurn,
    /// A hit cell has no owning ship; board state is inconsistent.
    UnknownShip,
    /// Opponent selector found no untried cell left.
    NoCellsRemaining,
    /// No snapshot stored under the save key.
    NoSavedGame,
    /// Stored snapshot bytes do not decode.
    CorruptSave,
}

impl From<BitBoardError> for GameError {
    fn from(err: BitBoardError) -> Self {
        match err {
            BitBoardError::IndexOutOfBounds { row, col } => GameError::OutOfBounds { row, col },
        }
    }
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::OutOfBounds { row, col } => {
                write!(f, "coordinate ({}, {}) is outside the board", row, col)
            }
            GameError::InvalidShipIndex => write!(f, "ship type index is out of range"),
            GameError::ShipAlreadyPlaced => write!(f, "ship is already placed on the board"),
            GameError::InvalidPlacement => {
                write!(f, "placement overlaps or touches another ship")
            }
            GameError::PlacementExhausted => {
                write!(f, "no valid placement found within the attempt limit")
            }
            GameError::FleetIncomplete => write!(f, "place all ships before starting the battle"),
            GameError::WrongPhase => write!(f, "operation is not allowed in the current phase"),
            GameError::NotYourTurn => write!(f, "it is not that side's turn"),
            GameError::UnknownShip => write!(f, "hit cell is not mapped to any ship"),
            GameError::NoCellsRemaining => write!(f, "no untried cells remain"),
            GameError::NoSavedGame => write!(f, "no saved game found"),
            GameError::CorruptSave => write!(f, "saved game data is corrupt"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
