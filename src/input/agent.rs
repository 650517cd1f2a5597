use super::{MoveSource, SourceKind};
use crate::error::InputError;
use crate::game::GameState;

/// Seat reserved for an automated opponent. No agent is wired in, so every
/// request fails with [`InputError::AgentUnavailable`].
#[derive(Debug, Default)]
pub struct AgentInput;

impl AgentInput {
    pub fn new() -> Self {
        AgentInput
    }
}

impl MoveSource for AgentInput {
    fn poll_column(&mut self, _state: &GameState) -> Result<Option<usize>, InputError> {
        Err(InputError::AgentUnavailable)
    }

    fn kind(&self) -> SourceKind {
        SourceKind::Agent
    }

    fn name(&self) -> &str {
        "Agent"
    }
}
