//! Presentation: the ratatui game view with keyboard and mouse input, and a
//! plain console renderer for line-based play.

mod app;
pub mod board_widget;
mod console;
mod game_view;

pub use app::App;
pub use console::ConsoleRenderer;
