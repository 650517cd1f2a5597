use crate::game::{GameState, MoveOutcome, Player};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::board_widget::{self, BoardLayout};

pub fn player_color(player: Player) -> Color {
    match player {
        Player::One => Color::Red,
        Player::Two => Color::Yellow,
    }
}

/// One-line description of a finished game.
pub fn outcome_text(outcome: MoveOutcome) -> String {
    match outcome {
        MoveOutcome::Win { player, moves } => {
            format!("{} is the winner in {} turns!", player.name(), moves)
        }
        MoveOutcome::Draw => "It's a draw!".to_string(),
        MoveOutcome::Continue => String::new(),
    }
}

/// Draw the whole game screen and return where the board ended up.
pub fn render(
    frame: &mut Frame,
    game_state: &GameState,
    selected_column: usize,
    message: &Option<String>,
    seats: &str,
) -> BoardLayout {
    let board_height = game_state.board().rows() as u16 + 4;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Header
            Constraint::Min(board_height),    // Board
            Constraint::Length(3),            // Message
            Constraint::Length(3),            // Controls
        ])
        .split(frame.area());

    render_header(frame, game_state, seats, chunks[0]);
    let layout = board_widget::render_board(frame, game_state.board(), selected_column, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
    layout
}

fn render_header(frame: &mut Frame, game_state: &GameState, seats: &str, area: Rect) {
    let current_player = game_state.current_player();
    let (status, color) = match game_state.outcome() {
        Some(outcome @ MoveOutcome::Win { player, .. }) => (
            format!("Game Over: {}  |  {}", outcome_text(outcome), seats),
            player_color(player),
        ),
        Some(outcome) => (
            format!("Game Over: {}  |  {}", outcome_text(outcome), seats),
            Color::White,
        ),
        None => (
            format!(
                "Current Player: {}  |  Turn {}  |  {}",
                current_player.name(),
                game_state.turn() + 1,
                seats
            ),
            player_color(current_player),
        ),
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::raw("\u{2190}/\u{2192}: Move  |  Enter/Click/1-9: Drop  |  "),
        Span::styled("E", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(": Export  |  R: Restart  |  Q: Quit"),
    ]);

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_text() {
        let win = MoveOutcome::Win {
            player: Player::Two,
            moves: 12,
        };
        assert_eq!(outcome_text(win), "Player 2 is the winner in 12 turns!");
        assert_eq!(outcome_text(MoveOutcome::Draw), "It's a draw!");
    }
}
