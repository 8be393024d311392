use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("Cell is already taken")]
    CellOccupied,
    #[error("Game already ended, no new moves are accepted")]
    GameEnded,
    #[error("Position must be in 0..=8")]
    InvalidPosition,
    #[error("Board must be 3x3")]
    InvalidBoardShape,
    #[error("Turn, status or move count do not match the board")]
    InconsistentState,
}

pub type Result<T> = core::result::Result<T, MoveError>;
