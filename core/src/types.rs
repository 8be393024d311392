use core::fmt;
use serde::{Deserialize, Serialize};

use crate::{MoveError, Result};

/// Cells along one side of the board.
pub const SIDE: u8 = 3;

/// Total number of cells on the board.
pub const CELL_COUNT: u8 = SIDE * SIDE;

/// Player marks, `X` always opens the game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    pub const fn opponent(self) -> Self {
        match self {
            Self::X => Self::O,
            Self::O => Self::X,
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            Self::X => "X",
            Self::O => "O",
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::X
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Taken(Player),
}

impl Cell {
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    pub const fn player(self) -> Option<Player> {
        match self {
            Self::Empty => None,
            Self::Taken(player) => Some(player),
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::Empty
    }
}

/// Board position `0..=8`, row-major:
///
/// ```text
/// 0 1 2
/// 3 4 5
/// 6 7 8
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Position(u8);

impl Position {
    pub const fn new(index: u8) -> Result<Self> {
        if index < CELL_COUNT {
            Ok(Self(index))
        } else {
            Err(MoveError::InvalidPosition)
        }
    }

    pub const fn from_row_col(row: u8, col: u8) -> Result<Self> {
        if row < SIDE && col < SIDE {
            Ok(Self(row * SIDE + col))
        } else {
            Err(MoveError::InvalidPosition)
        }
    }

    /// Only for indices already known to be in range.
    pub(crate) const fn new_unchecked(index: u8) -> Self {
        Self(index)
    }

    pub const fn index(self) -> u8 {
        self.0
    }

    pub const fn row(self) -> u8 {
        self.0 / SIDE
    }

    pub const fn col(self) -> u8 {
        self.0 % SIDE
    }

    /// Every position in row-major order.
    pub fn all() -> impl Iterator<Item = Position> + Clone {
        (0..CELL_COUNT).map(Self::new_unchecked)
    }
}

impl TryFrom<u8> for Position {
    type Error = MoveError;

    fn try_from(index: u8) -> Result<Self> {
        Self::new(index)
    }
}

impl TryFrom<usize> for Position {
    type Error = MoveError;

    fn try_from(index: usize) -> Result<Self> {
        let index = u8::try_from(index).map_err(|_| MoveError::InvalidPosition)?;
        Self::new(index)
    }
}

impl From<Position> for u8 {
    fn from(pos: Position) -> Self {
        pos.0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Position {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.row().into(), self.col().into()]
    }
}

const fn line(a: u8, b: u8, c: u8) -> [Position; 3] {
    [
        Position::new_unchecked(a),
        Position::new_unchecked(b),
        Position::new_unchecked(c),
    ]
}

/// The eight winning triples, checked in this order.
pub const LINES: [[Position; 3]; 8] = [
    // rows
    line(0, 1, 2),
    line(3, 4, 5),
    line(6, 7, 8),
    // columns
    line(0, 3, 6),
    line(1, 4, 7),
    line(2, 5, 8),
    // diagonals
    line(0, 4, 8),
    line(2, 4, 6),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_rejects_out_of_range_index() {
        assert_eq!(Position::new(9), Err(MoveError::InvalidPosition));
        assert_eq!(Position::try_from(300usize), Err(MoveError::InvalidPosition));
        assert_eq!(Position::from_row_col(0, 3), Err(MoveError::InvalidPosition));
    }

    #[test]
    fn position_is_row_major() {
        let pos = Position::from_row_col(2, 1).unwrap();
        assert_eq!(pos.index(), 7);
        assert_eq!((pos.row(), pos.col()), (2, 1));
        assert_eq!(pos.to_nd_index(), [2, 1]);
    }

    #[test]
    fn lines_cover_every_cell() {
        for pos in Position::all() {
            assert!(LINES.iter().any(|line| line.contains(&pos)));
        }
        assert_eq!(Position::all().count(), usize::from(CELL_COUNT));
    }

    #[test]
    fn opponent_toggles() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent().opponent(), Player::O);
    }
}
