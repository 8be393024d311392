#![no_std]

use core::ops::{Index, IndexMut};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use engine::*;
pub use error::*;
pub use status::*;
pub use types::*;

mod engine;
mod error;
mod status;
mod types;

/// The 3x3 grid of cells, indexed by [`Position`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardRepr")]
pub struct Board {
    cells: Array2<Cell>,
}

#[derive(Deserialize)]
struct BoardRepr {
    cells: Array2<Cell>,
}

impl TryFrom<BoardRepr> for Board {
    type Error = MoveError;

    fn try_from(BoardRepr { cells }: BoardRepr) -> Result<Self> {
        let side = usize::from(SIDE);
        if cells.dim() != (side, side) {
            return Err(MoveError::InvalidBoardShape);
        }
        Ok(Self { cells })
    }
}

impl Board {
    pub fn new() -> Self {
        let side = usize::from(SIDE);
        Self {
            cells: Array2::default((side, side)),
        }
    }

    pub fn cell_at(&self, pos: Position) -> Cell {
        self[pos]
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_empty())
    }

    /// Number of cells holding `player`'s mark.
    pub fn count(&self, player: Player) -> u8 {
        // at most 9 cells, cannot overflow
        self.cells
            .iter()
            .filter(|&&cell| cell == Cell::Taken(player))
            .count() as u8
    }

    /// Cells paired with their position, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        Position::all().map(move |pos| (pos, self[pos]))
    }

    /// The owner of `line` when all three cells carry the same mark.
    pub fn line_owner(&self, line: [Position; 3]) -> Option<Player> {
        let [a, b, c] = line;
        let player = self[a].player()?;
        (self[b] == self[a] && self[c] == self[a]).then_some(player)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Position> for Board {
    type Output = Cell;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[pos.to_nd_index()]
    }
}

impl IndexMut<Position> for Board {
    fn index_mut(&mut self, pos: Position) -> &mut Self::Output {
        &mut self.cells[pos.to_nd_index()]
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Draw,
}

impl GameStatus {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won(_) | Self::Draw)
    }

    pub const fn winner(self) -> Option<Player> {
        match self {
            Self::Won(player) => Some(player),
            _ => None,
        }
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        Self::InProgress
    }
}

/// Result of an accepted move: the board after it and the status it led to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    pub board: Board,
    pub status: GameStatus,
}

impl MoveOutcome {
    pub const fn ended_game(&self) -> bool {
        self.status.is_finished()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(index: u8) -> Position {
        Position::new(index).unwrap()
    }

    #[test]
    fn new_board_is_empty() {
        let board = Board::new();
        assert!(board.is_empty());
        assert!(!board.is_full());
        assert!(board.iter().all(|(_, cell)| cell == Cell::Empty));
    }

    #[test]
    fn index_writes_land_on_row_major_cell() {
        let mut board = Board::new();
        board[pos(5)] = Cell::Taken(Player::O);

        assert_eq!(board.cell_at(pos(5)), Cell::Taken(Player::O));
        assert_eq!(board.count(Player::O), 1);
        assert_eq!(board.count(Player::X), 0);
        assert_eq!(
            board.iter().find(|(_, cell)| !cell.is_empty()),
            Some((pos(5), Cell::Taken(Player::O)))
        );
    }

    #[test]
    fn line_owner_requires_three_identical_marks() {
        let mut board = Board::new();
        let diagonal = LINES[6];
        assert_eq!(board.line_owner(diagonal), None);

        board[pos(0)] = Cell::Taken(Player::X);
        board[pos(4)] = Cell::Taken(Player::X);
        assert_eq!(board.line_owner(diagonal), None);

        board[pos(8)] = Cell::Taken(Player::O);
        assert_eq!(board.line_owner(diagonal), None);

        board[pos(8)] = Cell::Taken(Player::X);
        assert_eq!(board.line_owner(diagonal), Some(Player::X));
    }
}
