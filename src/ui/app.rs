use crate::config::AppConfig;
use crate::error::BoardError;
use crate::game::{GameController, Player, TurnEvent};
use crate::input::{AgentInput, ColumnSender, HumanInput, MoveSource, SourceKind};
use crossterm::event::{self, Event, KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;
use tracing::error;

use super::board_widget::BoardLayout;
use super::game_view;

pub struct App {
    controller: GameController,
    /// Channel into each human seat; `None` for non-human seats.
    senders: [Option<ColumnSender>; 2],
    seats: String,
    selected_column: usize,
    should_quit: bool,
    /// Set when a seat can no longer move; cleared by a restart.
    halted: bool,
    message: Option<String>,
    board_layout: Option<BoardLayout>,
}

fn seat(kind: SourceKind, player: Player) -> (Box<dyn MoveSource>, Option<ColumnSender>) {
    match kind {
        SourceKind::Human => {
            let (sender, input) = HumanInput::channel(player.name());
            (Box::new(input), Some(sender))
        }
        SourceKind::Agent => (Box::new(AgentInput::new()), None),
    }
}

fn kind_label(kind: SourceKind) -> &'static str {
    match kind {
        SourceKind::Human => "Human",
        SourceKind::Agent => "Agent",
    }
}

impl App {
    pub fn new(config: &AppConfig) -> Result<Self, BoardError> {
        let (one, one_tx) = seat(config.players.one, Player::One);
        let (two, two_tx) = seat(config.players.two, Player::Two);
        let controller = GameController::new(config, one, two)?;
        Ok(App {
            selected_column: config.board.columns / 2, // Start in middle
            controller,
            senders: [one_tx, two_tx],
            seats: format!(
                "{} vs {}",
                kind_label(config.players.one),
                kind_label(config.players.two)
            ),
            should_quit: false,
            halted: false,
            message: None,
            board_layout: None,
        })
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(Into::<io::Error>::into)?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
            self.step();
        }
        Ok(())
    }

    /// Handle keyboard and mouse events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => self.handle_key(key),
                Event::Mouse(mouse) => self.handle_mouse(mouse),
                _ => {}
            }
        }
        Ok(())
    }

    fn columns(&self) -> usize {
        self.controller.state().board().columns()
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < self.columns() {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece(self.selected_column);
            }
            KeyCode::Char(c @ '1'..='9') => {
                let column = c as usize - '1' as usize;
                if column < self.columns() {
                    self.selected_column = column;
                    self.drop_piece(column);
                }
            }
            KeyCode::Char('r') => {
                self.controller.reset();
                self.halted = false;
                self.selected_column = self.columns() / 2;
                self.message = Some("New game started!".to_string());
            }
            KeyCode::Char('e') => {
                self.export_snapshot();
            }
            _ => {}
        }
    }

    /// Hover selects a column, left click drops into it.
    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let Some(column) = self
            .board_layout
            .and_then(|layout| layout.column_at(mouse.column, mouse.row))
        else {
            return;
        };
        match mouse.kind {
            MouseEventKind::Moved => self.selected_column = column,
            MouseEventKind::Down(MouseButton::Left) => {
                self.message = None;
                self.selected_column = column;
                self.drop_piece(column);
            }
            _ => {}
        }
    }

    /// Hand the column to the active human seat and apply it.
    fn drop_piece(&mut self, column: usize) {
        let state = self.controller.state();
        if state.is_terminal() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }

        if self.halted {
            self.message = Some("Game halted. Press 'r' to restart.".to_string());
            return;
        }

        let player = state.current_player();
        if self.controller.active_kind() != SourceKind::Human {
            self.message = Some(format!("It's not a human's turn ({}).", player.name()));
            return;
        }
        let sender = match player {
            Player::One => &self.senders[0],
            Player::Two => &self.senders[1],
        };
        if sender.as_ref().is_some_and(|s| s.send(column)) {
            self.step();
        }
    }

    /// Poll the active seat once and report the result.
    fn step(&mut self) {
        if self.halted || self.controller.state().is_terminal() {
            return;
        }
        match self.controller.poll_turn() {
            Ok(TurnEvent::Waiting) => {}
            Ok(TurnEvent::InvalidInput(e)) => self.message = Some(e.to_string()),
            Ok(TurnEvent::Rejected(e)) => self.message = Some(capitalize(&e.to_string())),
            Ok(TurnEvent::Accepted { outcome, .. }) => {
                if outcome.is_terminal() {
                    self.message = Some(game_view::outcome_text(outcome));
                }
            }
            Err(e) => {
                error!(error = %e, "session halted");
                self.halted = true;
                self.message = Some(format!("{e}. Press 'r' to restart."));
            }
        }
    }

    fn export_snapshot(&mut self) {
        self.message = Some(match self.controller.export_snapshot() {
            Ok(index) => format!("Exported ExportedState{index}.txt"),
            Err(e) => format!("Export failed: {e}"),
        });
    }

    /// Render the UI
    fn render(&mut self, frame: &mut ratatui::Frame) {
        let layout = game_view::render(
            frame,
            self.controller.state(),
            self.selected_column,
            &self.message,
            &self.seats,
        );
        self.board_layout = Some(layout);
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
