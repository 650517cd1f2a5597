//! Move sources: where each seat's column choice comes from.

mod agent;
mod console;
mod human;

pub use agent::AgentInput;
pub use console::ConsoleInput;
pub use human::{ColumnSender, HumanInput};

use crate::error::InputError;
use crate::game::GameState;

/// Which kind of source sits in a seat.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Columns chosen by a person through the presentation layer.
    Human,
    /// Reserved for an automated opponent.
    Agent,
}

/// Supplies the column for the seat whose turn it is.
pub trait MoveSource {
    /// Next column for `state`, or `None` if no choice is available yet.
    ///
    /// Blocking sources never return `None`. Recoverable errors (see
    /// [`InputError::is_recoverable`]) mean "ask again".
    fn poll_column(&mut self, state: &GameState) -> Result<Option<usize>, InputError>;

    fn kind(&self) -> SourceKind;

    /// Drop any columns queued before a restart.
    fn discard_pending(&mut self) {}

    /// Return the source's display name.
    fn name(&self) -> &str;
}
