use std::io;
use std::time::Duration;

use tracing::{debug, info, warn};

use super::{Board, GameState, MoveOutcome, Player};
use crate::config::AppConfig;
use crate::error::{BoardError, ExportError, InputError, MoveError, SessionError, SubmitError};
use crate::export::Exporter;
use crate::input::{MoveSource, SourceKind};

/// How long [`GameController::run`] sleeps while a source has nothing yet.
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Presentation hook called by [`GameController::run`].
pub trait Renderer {
    /// Show the board. Called once at the start and after every accepted move.
    fn render(&mut self, board: &Board) -> io::Result<()>;

    /// Tell the player their input was not accepted.
    fn reject(&mut self, message: &str) -> io::Result<()>;

    /// Announce the terminal outcome.
    fn finish(&mut self, _outcome: MoveOutcome) -> io::Result<()> {
        Ok(())
    }
}

/// What happened on one poll of the active seat.
#[derive(Debug)]
pub enum TurnEvent {
    /// The source has no column yet.
    Waiting,
    /// The source produced unusable input; ask again.
    InvalidInput(InputError),
    /// The column was refused; the state is unchanged.
    Rejected(MoveError),
    Accepted {
        column: usize,
        player: Player,
        outcome: MoveOutcome,
    },
}

/// Drives one game session: owns the state and both seats' move sources.
pub struct GameController {
    initial: GameState,
    state: GameState,
    seats: [Box<dyn MoveSource>; 2],
    exporter: Exporter,
    record_moves: bool,
}

impl GameController {
    pub fn new(
        config: &AppConfig,
        player_one: Box<dyn MoveSource>,
        player_two: Box<dyn MoveSource>,
    ) -> Result<Self, BoardError> {
        let initial = GameState::start(&config.board)?;
        info!(
            rows = config.board.rows,
            columns = config.board.columns,
            player_one = player_one.name(),
            player_two = player_two.name(),
            "initialising game"
        );
        Ok(GameController {
            state: initial.clone(),
            initial,
            seats: [player_one, player_two],
            exporter: Exporter::new(&config.export.dir),
            record_moves: config.export.record_moves,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    fn seat(player: Player) -> usize {
        match player {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    /// Kind of source for the player whose turn it is.
    pub fn active_kind(&self) -> SourceKind {
        self.seats[Self::seat(self.state.current_player())].kind()
    }

    /// Start over on an empty board with the same seats. Columns queued
    /// for the old game are discarded.
    pub fn reset(&mut self) {
        info!("game reset");
        for seat in &mut self.seats {
            seat.discard_pending();
        }
        self.state = self.initial.clone();
    }

    /// Apply a column for the current player. Rejected moves leave the
    /// state untouched. With recording on, the pre-move board and column are
    /// exported first and a failed export also leaves the state untouched.
    pub fn submit_move(&mut self, column: usize) -> Result<MoveOutcome, SubmitError> {
        let player = self.state.current_player();
        let (next, outcome) = match self.state.submit_move(column) {
            Ok(applied) => applied,
            Err(e) => {
                warn!(player = player.number(), column, error = %e, "move rejected");
                return Err(e.into());
            }
        };
        if self.record_moves {
            self.exporter.export_pair(self.state.board(), column)?;
        }
        self.state = next;
        debug!(
            player = player.number(),
            column,
            turn = self.state.turn(),
            "move accepted"
        );
        Ok(outcome)
    }

    /// Ask the active seat for a column and apply it if one is ready.
    pub fn poll_turn(&mut self) -> Result<TurnEvent, SessionError> {
        let player = self.state.current_player();
        let column = match self.seats[Self::seat(player)].poll_column(&self.state) {
            Ok(Some(column)) => column,
            Ok(None) => return Ok(TurnEvent::Waiting),
            Err(e) if e.is_recoverable() => {
                warn!(player = player.number(), error = %e, "invalid input");
                return Ok(TurnEvent::InvalidInput(e));
            }
            Err(e) => return Err(e.into()),
        };

        let outcome = match self.submit_move(column) {
            Ok(outcome) => outcome,
            Err(SubmitError::Rejected(e)) => return Ok(TurnEvent::Rejected(e)),
            Err(SubmitError::Record(e)) => return Err(e.into()),
        };

        Ok(TurnEvent::Accepted {
            column,
            player,
            outcome,
        })
    }

    /// Play until the game reaches a terminal outcome.
    pub fn run(&mut self, renderer: &mut dyn Renderer) -> Result<MoveOutcome, SessionError> {
        info!("game loop started");
        renderer.render(self.state.board())?;
        loop {
            if let Some(outcome) = self.state.outcome() {
                renderer.finish(outcome)?;
                return Ok(outcome);
            }
            match self.poll_turn()? {
                TurnEvent::Waiting => std::thread::sleep(POLL_INTERVAL),
                TurnEvent::InvalidInput(e) => renderer.reject(&e.to_string())?,
                TurnEvent::Rejected(e) => renderer.reject(&e.to_string())?,
                TurnEvent::Accepted { .. } => renderer.render(self.state.board())?,
            }
        }
    }

    /// Export the current board on request.
    pub fn export_snapshot(&self) -> Result<usize, ExportError> {
        self.exporter.export_state(self.state.board())
    }
}
