use serde::{Deserialize, Serialize};

use crate::*;

/// The game state machine: board, turn and status for a single game.
///
/// Starts (and resets to) an empty board with `X` to move. `Won` and `Draw`
/// are terminal; only [`Game::reset`] leaves them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameSnapshot")]
pub struct Game {
    board: Board,
    turn: Player,
    status: GameStatus,
    winning_line: Option<[Position; 3]>,
    move_count: u8,
}

#[derive(Deserialize)]
struct GameSnapshot {
    board: Board,
    turn: Player,
    status: GameStatus,
    winning_line: Option<[Position; 3]>,
    move_count: u8,
}

/// Snapshots are only accepted when they match the game rebuilt from their board.
impl TryFrom<GameSnapshot> for Game {
    type Error = MoveError;

    fn try_from(snapshot: GameSnapshot) -> Result<Self> {
        let GameSnapshot {
            board,
            turn,
            status,
            winning_line,
            move_count,
        } = snapshot;

        let game = Self::from_board(board)?;
        if (game.turn, game.status, game.winning_line, game.move_count)
            != (turn, status, winning_line, move_count)
        {
            return Err(MoveError::InconsistentState);
        }
        Ok(game)
    }
}

impl Game {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Player::X,
            status: GameStatus::InProgress,
            winning_line: None,
            move_count: 0,
        }
    }

    /// Rebuilds the game that produced `board`, deriving turn, status, winning
    /// line and move count from its marks.
    ///
    /// Fails with [`MoveError::InconsistentState`] when the mark counts break
    /// turn order, when both players hold a line, or when the line belongs to
    /// the player who did not move last.
    pub fn from_board(board: Board) -> Result<Self> {
        let xs = board.count(Player::X);
        let os = board.count(Player::O);
        if xs != os && xs != os + 1 {
            return Err(MoveError::InconsistentState);
        }
        let last_mover = if xs == os { Player::O } else { Player::X };

        let mut game = Self {
            board,
            turn: last_mover.opponent(),
            status: GameStatus::InProgress,
            winning_line: None,
            move_count: xs + os,
        };

        if let Some((winner, line)) = game.check_win() {
            let loser_has_line = LINES
                .iter()
                .any(|&line| game.board.line_owner(line) == Some(winner.opponent()));
            if winner != last_mover || loser_has_line {
                return Err(MoveError::InconsistentState);
            }
            game.turn = winner;
            game.status = GameStatus::Won(winner);
            game.winning_line = Some(line);
        } else if game.board.is_full() {
            game.turn = last_mover;
            game.status = GameStatus::Draw;
        }

        Ok(game)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player whose mark the next accepted move places. After a win this
    /// stays on the winner.
    pub fn turn(&self) -> Player {
        self.turn
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    pub fn winning_line(&self) -> Option<[Position; 3]> {
        self.winning_line
    }

    pub fn move_count(&self) -> u8 {
        self.move_count
    }

    pub fn cell_at(&self, pos: Position) -> Cell {
        self.board[pos]
    }

    pub fn can_play_at(&self, pos: Position) -> bool {
        !self.status.is_finished() && self.board[pos].is_empty()
    }

    pub fn legal_moves(&self) -> impl Iterator<Item = Position> + '_ {
        Position::all().filter(move |&pos| self.can_play_at(pos))
    }

    pub fn status_line(&self) -> StatusLine {
        StatusLine {
            status: self.status,
            turn: self.turn,
        }
    }

    /// Places the current player's mark at `pos` and advances the game.
    pub fn apply_move(&mut self, pos: Position) -> Result<MoveOutcome> {
        if let Err(err) = self.check_playable(pos) {
            log::trace!("rejected move at {}: {}", pos, err);
            return Err(err);
        }

        let player = self.turn;
        self.board[pos] = Cell::Taken(player);
        self.move_count += 1;
        log::debug!("{} plays {}", player, pos);

        if let Some((winner, line)) = self.check_win() {
            self.status = GameStatus::Won(winner);
            self.winning_line = Some(line);
            log::info!("{} wins with {:?}", winner, line.map(Position::index));
        } else if self.board.is_full() {
            self.status = GameStatus::Draw;
            log::info!("game drawn after {} moves", self.move_count);
        } else {
            self.turn = player.opponent();
        }

        Ok(MoveOutcome {
            board: self.board.clone(),
            status: self.status,
        })
    }

    /// First line, in [`LINES`] order, held entirely by one player.
    pub fn check_win(&self) -> Option<(Player, [Position; 3])> {
        LINES
            .iter()
            .find_map(|&line| self.board.line_owner(line).map(|player| (player, line)))
    }

    pub fn check_draw(&self) -> bool {
        self.board.is_full() && self.check_win().is_none()
    }

    pub fn reset(&mut self) {
        log::debug!("reset after {} moves", self.move_count);
        *self = Self::new();
    }

    fn check_playable(&self, pos: Position) -> Result<()> {
        if self.status.is_finished() {
            Err(MoveError::GameEnded)
        } else if !self.board[pos].is_empty() {
            Err(MoveError::CellOccupied)
        } else {
            Ok(())
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
