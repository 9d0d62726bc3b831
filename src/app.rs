//! Application logic and key dispatch

use crate::config::TuiConfig;
use crate::state::{AppState, FieldId, Focus, SubmitOutcome};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// User configuration
    pub config: TuiConfig,
    /// Whether the app should quit
    quit: bool,
    /// Feedback message shown after an accepted submission
    pub status_message: Option<String>,
}

impl App {
    /// Create a new App instance
    pub fn new(config: TuiConfig) -> Self {
        Self {
            state: AppState::default(),
            config,
            quit: false,
            status_message: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Clear any status message on key press
        self.status_message = None;

        // Submit shortcut works from any field
        if key.code == KeyCode::Char('s')
            && (key.modifiers.contains(KeyModifiers::CONTROL)
                || key.modifiers.contains(crate::platform::SUBMIT_MODIFIER))
        {
            self.submit();
            return Ok(());
        }

        match key.code {
            KeyCode::Tab => self.state.focus = self.state.focus.next(),
            KeyCode::BackTab => self.state.focus = self.state.focus.prev(),
            KeyCode::Esc => self.quit = true,
            KeyCode::Enter => match self.state.focus {
                Focus::SubmitButton => self.submit(),
                // Enter in the message field adds a newline
                Focus::Message => self.state.session.push_char(FieldId::Message, '\n'),
                _ => self.state.focus = self.state.focus.next(),
            },
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(field) = self.state.focus.field() {
                    self.state.session.push_char(field, c);
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = self.state.focus.field() {
                    self.state.session.backspace(field);
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Run a submission attempt and record the outcome
    fn submit(&mut self) {
        match self.state.session.submit() {
            SubmitOutcome::Accepted => {
                tracing::info!("submission accepted");
                self.state.focus = Focus::Name;
                self.status_message = Some("Message submitted!".to_string());
            }
            SubmitOutcome::Rejected => {
                tracing::debug!(
                    errors = self.state.session.errors().len(),
                    "submission rejected"
                );
            }
        }
    }
}
