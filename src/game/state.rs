use tracing::info;

use super::{Board, Player};
use crate::config::BoardConfig;
use crate::error::{BoardError, MoveError};

/// Result of an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Continue,
    /// `moves` counts every accepted move, the winning one included.
    Win { player: Player, moves: u32 },
    Draw,
}

impl MoveOutcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, MoveOutcome::Continue)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    turn: u32,
    outcome: Option<MoveOutcome>,
}

impl GameState {
    /// Create the initial state on a fresh board of the configured size.
    pub fn start(config: &BoardConfig) -> Result<Self, BoardError> {
        Ok(GameState {
            board: Board::new(config.rows, config.columns)?,
            turn: 0,
            outcome: None,
        })
    }

    /// Player whose move it is
    pub fn current_player(&self) -> Player {
        Player::for_turn(self.turn)
    }

    /// Number of accepted moves so far
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Terminal outcome, if the game is over
    pub fn outcome(&self) -> Option<MoveOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Columns that accept a move, empty once the game is over
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.board.playable_columns()
    }

    /// Apply a move and return the successor state, leaving `self` intact.
    pub fn submit_move(&self, column: usize) -> Result<(GameState, MoveOutcome), MoveError> {
        let mut next = self.clone();
        let outcome = next.apply_move_mut(column)?;
        Ok((next, outcome))
    }

    /// Apply a move in place. On error the state is unchanged.
    pub fn apply_move_mut(&mut self, column: usize) -> Result<MoveOutcome, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let playable = self.board.is_column_playable(column).map_err(|e| match e {
            BoardError::OutOfRange { column, columns } => MoveError::OutOfRange { column, columns },
            other => unreachable!("playability check failed unexpectedly: {other}"),
        })?;
        if !playable {
            return Err(MoveError::IllegalMove { column });
        }

        let row = match self.board.next_open_row(column) {
            Ok(row) => row,
            Err(e) => unreachable!("column {column} reported playable but {e}"),
        };
        let player = self.current_player();
        self.board.drop_piece(row, column, player);
        self.turn += 1;

        let outcome = if self.board.check_win(player) {
            info!(player = player.number(), moves = self.turn, "win condition met");
            MoveOutcome::Win {
                player,
                moves: self.turn,
            }
        } else if self.board.is_full() {
            info!(moves = self.turn, "board full with no winner");
            MoveOutcome::Draw
        } else {
            MoveOutcome::Continue
        };

        if outcome.is_terminal() {
            self.outcome = Some(outcome);
        }
        Ok(outcome)
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState {
            board: Board::default(),
            turn: 0,
            outcome: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::Cell;
    use super::*;

    /// Fills a 6x7 board with no four-in-a-row for either side.
    const DRAW_SEQUENCE: [usize; 42] = [
        0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 2, 4, 3, 3, 3, 3, 3, 3, 4, 4, 4, 4,
        4, 5, 5, 5, 5, 5, 5, 6, 6, 6, 6, 6, 6,
    ];

    fn play(columns: &[usize]) -> (GameState, MoveOutcome) {
        let mut state = GameState::default();
        let mut last = MoveOutcome::Continue;
        for &col in columns {
            last = state.apply_move_mut(col).unwrap();
        }
        (state, last)
    }

    #[test]
    fn test_initial_state() {
        let state = GameState::start(&BoardConfig::default()).unwrap();
        assert_eq!(state.current_player(), Player::One);
        assert_eq!(state.turn(), 0);
        assert!(!state.is_terminal());
        assert_eq!(state.legal_columns().len(), 7);
    }

    #[test]
    fn test_start_rejects_degenerate_board() {
        let config = BoardConfig {
            rows: 6,
            columns: 3,
        };
        assert_eq!(
            GameState::start(&config),
            Err(BoardError::InvalidDimension { rows: 6, columns: 3 })
        );
    }

    #[test]
    fn test_submit_move_leaves_original_untouched() {
        let state = GameState::default();
        let (next, outcome) = state.submit_move(3).unwrap();

        assert_eq!(outcome, MoveOutcome::Continue);
        assert_eq!(next.current_player(), Player::Two);
        assert_eq!(next.turn(), 1);
        assert_eq!(next.board().get(0, 3), Cell::Player1);
        assert_eq!(state, GameState::default());
    }

    #[test]
    fn test_players_alternate() {
        let (state, _) = play(&[2, 2, 2]);
        assert_eq!(state.board().get(0, 2), Cell::Player1);
        assert_eq!(state.board().get(1, 2), Cell::Player2);
        assert_eq!(state.board().get(2, 2), Cell::Player1);
        assert_eq!(state.current_player(), Player::Two);
    }

    #[test]
    fn test_vertical_win_counts_moves() {
        let (state, outcome) = play(&[3, 0, 3, 0, 3, 0, 3]);
        assert_eq!(
            outcome,
            MoveOutcome::Win {
                player: Player::One,
                moves: 7
            }
        );
        assert!(state.is_terminal());
        assert_eq!(state.outcome(), Some(outcome));
        assert!(state.legal_columns().is_empty());
    }

    #[test]
    fn test_horizontal_win_on_move_seven() {
        let (state, outcome) = play(&[0, 0, 1, 1, 2, 2, 3]);
        assert_eq!(
            outcome,
            MoveOutcome::Win {
                player: Player::One,
                moves: 7
            }
        );
        for col in 0..4 {
            assert_eq!(state.board().get(0, col), Cell::Player1);
        }
        assert!(state.board().check_win(Player::One));
    }

    #[test]
    fn test_full_column_is_illegal_and_state_unchanged() {
        let (mut state, _) = play(&[0, 0, 0, 0, 0, 0]);
        let snapshot = state.clone();

        assert_eq!(
            state.apply_move_mut(0),
            Err(MoveError::IllegalMove { column: 0 })
        );
        assert_eq!(state, snapshot);
        assert_eq!(
            state.submit_move(0),
            Err(MoveError::IllegalMove { column: 0 })
        );
    }

    #[test]
    fn test_out_of_range_column_is_rejected() {
        let mut state = GameState::default();
        assert_eq!(
            state.apply_move_mut(7),
            Err(MoveError::OutOfRange {
                column: 7,
                columns: 7
            })
        );
        assert_eq!(state, GameState::default());
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let mut state = GameState::default();
        let (last, rest) = DRAW_SEQUENCE.split_last().unwrap();
        for &col in rest {
            assert_eq!(state.apply_move_mut(col), Ok(MoveOutcome::Continue));
        }
        assert_eq!(state.apply_move_mut(*last), Ok(MoveOutcome::Draw));
        assert!(state.board().is_full());
        assert!(!state.board().check_win(Player::One));
        assert!(!state.board().check_win(Player::Two));
        assert_eq!(state.outcome(), Some(MoveOutcome::Draw));
    }

    #[test]
    fn test_small_board_draw() {
        let config = BoardConfig {
            rows: 4,
            columns: 4,
        };
        let mut state = GameState::start(&config).unwrap();
        let sequence = [0, 0, 0, 0, 1, 1, 1, 1, 2, 2, 2, 3, 3, 3, 2, 3];
        let mut outcome = MoveOutcome::Continue;
        for col in sequence {
            outcome = state.apply_move_mut(col).unwrap();
        }
        assert_eq!(outcome, MoveOutcome::Draw);
        assert_eq!(state.turn(), 16);
    }

    #[test]
    fn test_no_moves_after_game_over() {
        let (mut state, _) = play(&[0, 0, 1, 1, 2, 2, 3]);
        let snapshot = state.clone();
        assert_eq!(state.apply_move_mut(5), Err(MoveError::GameOver));
        assert_eq!(state, snapshot);
    }
}
