use std::io::{self, Write};

use crate::game::{Board, MoveOutcome, Renderer};

use super::game_view::outcome_text;

/// Line-based renderer: prints the board top row first after each move.
pub struct ConsoleRenderer<W> {
    out: W,
}

impl<W: Write> ConsoleRenderer<W> {
    pub fn new(out: W) -> Self {
        ConsoleRenderer { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for ConsoleRenderer<W> {
    fn render(&mut self, board: &Board) -> io::Result<()> {
        write!(self.out, "{board}")?;
        self.out.flush()
    }

    fn reject(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "Invalid move! {message}")
    }

    fn finish(&mut self, outcome: MoveOutcome) -> io::Result<()> {
        writeln!(self.out, "{}", outcome_text(outcome))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Player;

    #[test]
    fn test_console_output() {
        let mut renderer = ConsoleRenderer::new(Vec::new());
        let mut board = Board::new(4, 4).unwrap();
        board.drop_piece(0, 2, Player::Two);

        renderer.render(&board).unwrap();
        renderer.reject("column 2 is full").unwrap();
        renderer
            .finish(MoveOutcome::Win {
                player: Player::One,
                moves: 7,
            })
            .unwrap();

        let text = String::from_utf8(renderer.into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "[0 0 0 0]",
                "[0 0 0 0]",
                "[0 0 0 0]",
                "[0 0 2 0]",
                "Invalid move! column 2 is full",
                "Player 1 is the winner in 7 turns!",
            ]
        );
    }
}
