//! # Connect Four
//!
//! A two-player Connect Four game with a terminal board view, keyboard and
//! mouse input, and training-data export of board snapshots.
//!
//! ## Modules
//!
//! - [`game`]: Core game logic: board engine, players, state, controller
//! - [`input`]: Move sources for each seat (human, console, reserved agent)
//! - [`export`]: Numbered training-data snapshots and their loader
//! - [`ui`]: Terminal UI and the line-based console renderer
//! - [`config`]: TOML configuration loading and validation
//! - [`logging`]: tracing subscriber setup
//! - [`error`]: Structured error types

pub mod config;
pub mod error;
pub mod export;
pub mod game;
pub mod input;
pub mod logging;
pub mod ui;
