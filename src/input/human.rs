use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use super::{MoveSource, SourceKind};
use crate::error::InputError;
use crate::game::GameState;

/// Presentation-side handle that forwards chosen columns to a [`HumanInput`].
#[derive(Debug, Clone)]
pub struct ColumnSender {
    tx: Sender<usize>,
}

impl ColumnSender {
    /// Queue a column. Returns false once the paired input has been dropped.
    pub fn send(&self, column: usize) -> bool {
        self.tx.send(column).is_ok()
    }
}

/// Human seat fed by key presses or mouse clicks. Never blocks.
pub struct HumanInput {
    name: String,
    input_rx: Receiver<usize>,
}

impl HumanInput {
    pub fn channel(name: impl Into<String>) -> (ColumnSender, HumanInput) {
        let (tx, input_rx) = mpsc::channel();
        let input = HumanInput {
            name: name.into(),
            input_rx,
        };
        (ColumnSender { tx }, input)
    }
}

impl MoveSource for HumanInput {
    fn poll_column(&mut self, _state: &GameState) -> Result<Option<usize>, InputError> {
        match self.input_rx.try_recv() {
            Ok(column) => Ok(Some(column)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Err(InputError::Closed),
        }
    }

    fn kind(&self) -> SourceKind {
        SourceKind::Human
    }

    fn discard_pending(&mut self) {
        while self.input_rx.try_recv().is_ok() {}
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_arrive_in_order() {
        let (sender, mut input) = HumanInput::channel("Player 1");
        let state = GameState::default();

        assert_eq!(input.poll_column(&state).unwrap(), None);
        assert!(sender.send(4));
        assert!(sender.send(1));
        assert_eq!(input.poll_column(&state).unwrap(), Some(4));
        assert_eq!(input.poll_column(&state).unwrap(), Some(1));
        assert_eq!(input.poll_column(&state).unwrap(), None);
    }

    #[test]
    fn test_dropped_sender_closes_input() {
        let (sender, mut input) = HumanInput::channel("Player 2");
        drop(sender);
        assert!(matches!(
            input.poll_column(&GameState::default()),
            Err(InputError::Closed)
        ));
    }

    #[test]
    fn test_discard_pending_empties_queue() {
        let (sender, mut input) = HumanInput::channel("Player 2");
        let state = GameState::default();

        sender.send(6);
        sender.send(2);
        input.discard_pending();
        assert_eq!(input.poll_column(&state).unwrap(), None);

        sender.send(3);
        assert_eq!(input.poll_column(&state).unwrap(), Some(3));
    }

    #[test]
    fn test_send_after_input_dropped() {
        let (sender, input) = HumanInput::channel("Player 1");
        assert_eq!(input.name(), "Player 1");
        assert_eq!(input.kind(), SourceKind::Human);
        drop(input);
        assert!(!sender.send(0));
    }
}
