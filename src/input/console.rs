use std::cell::RefCell;
use std::io::{BufRead, Write};
use std::rc::Rc;

use super::{MoveSource, SourceKind};
use crate::error::InputError;
use crate::game::GameState;

/// Human seat that prompts on a writer and reads one column per line.
///
/// The reader is shared so both seats of a console game can read from the
/// same stdin lock.
pub struct ConsoleInput<R, W> {
    name: String,
    reader: Rc<RefCell<R>>,
    prompt: W,
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    pub fn new(name: impl Into<String>, reader: Rc<RefCell<R>>, prompt: W) -> Self {
        ConsoleInput {
            name: name.into(),
            reader,
            prompt,
        }
    }
}

impl<R: BufRead, W: Write> MoveSource for ConsoleInput<R, W> {
    fn poll_column(&mut self, state: &GameState) -> Result<Option<usize>, InputError> {
        write!(
            self.prompt,
            "{} make your move (0-{}): ",
            self.name,
            state.board().columns() - 1
        )?;
        self.prompt.flush()?;

        let mut line = String::new();
        if self.reader.borrow_mut().read_line(&mut line)? == 0 {
            return Err(InputError::Closed);
        }
        let text = line.trim();
        text.parse::<usize>()
            .map(Some)
            .map_err(|_| InputError::Parse(text.to_string()))
    }

    fn kind(&self) -> SourceKind {
        SourceKind::Human
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn reader(text: &str) -> Rc<RefCell<Cursor<String>>> {
        Rc::new(RefCell::new(Cursor::new(text.to_string())))
    }

    #[test]
    fn test_reads_one_column_per_line() {
        let mut out = Vec::new();
        let mut input = ConsoleInput::new("Player 1", reader("3\n 5 \n"), &mut out);
        let state = GameState::default();

        assert_eq!(input.poll_column(&state).unwrap(), Some(3));
        assert_eq!(input.poll_column(&state).unwrap(), Some(5));
        assert!(matches!(input.poll_column(&state), Err(InputError::Closed)));
        drop(input);

        let prompts = String::from_utf8(out).unwrap();
        assert!(prompts.starts_with("Player 1 make your move (0-6): "));
    }

    #[test]
    fn test_garbage_is_recoverable() {
        let mut input = ConsoleInput::new("Player 2", reader("abc\n-1\n2\n"), Vec::new());
        let state = GameState::default();

        let err = input.poll_column(&state).unwrap_err();
        assert!(err.is_recoverable());
        assert!(matches!(err, InputError::Parse(ref s) if s == "abc"));
        assert!(input.poll_column(&state).unwrap_err().is_recoverable());
        assert_eq!(input.poll_column(&state).unwrap(), Some(2));
    }

    #[test]
    fn test_seats_share_one_reader() {
        let shared = reader("1\n2\n3\n");
        let mut one = ConsoleInput::new("Player 1", Rc::clone(&shared), Vec::new());
        let mut two = ConsoleInput::new("Player 2", shared, Vec::new());
        let state = GameState::default();

        assert_eq!(one.poll_column(&state).unwrap(), Some(1));
        assert_eq!(two.poll_column(&state).unwrap(), Some(2));
        assert_eq!(one.poll_column(&state).unwrap(), Some(3));
    }
}
