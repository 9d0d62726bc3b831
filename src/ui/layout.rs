//! Layout components (centered card, status bar)

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Width of the centered form card
const CARD_WIDTH: u16 = 64;

/// Create the main layout: centered card column plus bottom status line
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(CARD_WIDTH.min(chunks[0].width)),
            Constraint::Min(0),
        ])
        .split(chunks[0]);

    (columns[1], chunks[1])
}

/// Draw the status bar with key hints and submission feedback
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    if app.config.hints_enabled() {
        spans.push(Span::styled(
            format!(
                " Tab:next  {}:submit  Esc:quit",
                crate::platform::SUBMIT_SHORTCUT
            ),
            Style::default().fg(Color::Gray),
        ));
    }

    if let Some(msg) = &app.status_message {
        if !spans.is_empty() {
            spans.push(Span::raw(" | "));
        }
        spans.push(Span::styled(
            msg.as_str(),
            Style::default().fg(Color::Green),
        ));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}
