use core::fmt;

use crate::{GameStatus, Player};

/// Human readable status derived from the game state.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct StatusLine {
    pub status: GameStatus,
    pub turn: Player,
}

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            GameStatus::InProgress => write!(f, "Player {}'s Turn", self.turn),
            GameStatus::Won(player) => write!(f, "Player {} Wins!", player),
            GameStatus::Draw => f.write_str("It's a Draw!"),
        }
    }
}
