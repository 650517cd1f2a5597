//! Core Connect Four game logic: board engine, player mapping, game state
//! transitions and the session controller.

mod board;
mod controller;
mod player;
mod state;

pub use board::{Board, Cell, DEFAULT_COLUMNS, DEFAULT_ROWS, WIN_LENGTH};
pub use controller::{GameController, Renderer, TurnEvent};
pub use player::Player;
pub use state::{GameState, MoveOutcome};
