use crate::config::MatchConfig;
use crate::error::{ConfigError, MoveError};
use crate::game::{MatchController, MatchPhase};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;

pub struct App {
    game: MatchController,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: &MatchConfig) -> Result<Self, ConfigError> {
        let game = MatchController::new(config)?;
        let selected_column = game.grid().columns() / 2; // Start in middle
        Ok(App {
            game,
            selected_column,
            should_quit: false,
            message: None,
        })
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
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
                if self.selected_column + 1 < self.game.grid().columns() {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('n') => {
                if self.game.start_next_round() {
                    self.message = Some(format!("Round {} started!", self.game.rounds_played() + 1));
                }
            }
            KeyCode::Char('r') => {
                self.game.reset_match();
                self.selected_column = self.game.grid().columns() / 2;
                self.message = Some("New match started!".to_string());
            }
            _ => {}
        }
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        match self.game.play_move(self.selected_column) {
            Ok(mv) => {
                self.message = match mv.phase {
                    MatchPhase::RoundInProgress => None,
                    MatchPhase::RoundWon(seat) => Some(format!(
                        "{} won the round! Press 'n' for the next round.",
                        self.game.player(seat).name()
                    )),
                    MatchPhase::RoundDrawn => {
                        Some("The round is a draw! Press 'n' for the next round.".to_string())
                    }
                    MatchPhase::MatchComplete(seat) => Some(format!(
                        "{} won the game! Press 'r' to play again.",
                        self.game.player(seat).name()
                    )),
                };
            }
            Err(MoveError::RoundOver) => {
                self.message = Some("Round over! Press 'n' for the next round.".to_string());
            }
            Err(MoveError::MatchOver) => {
                self.message = Some("Game over! Press 'r' to restart.".to_string());
            }
            Err(MoveError::Grid(err)) => {
                self.message = Some(format!("Cannot drop there: {err}"));
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.game, self.selected_column, &self.message);
    }
}
