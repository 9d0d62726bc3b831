//! Contact form rendering

use super::field_renderer::draw_field;
use crate::app::App;
use crate::state::{FieldId, Focus};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows per single-line field: bordered input (3) plus error line (1)
const FIELD_HEIGHT: u16 = 4;

/// Total height of the form card: borders + two single-line fields +
/// multiline message + submit button
const FORM_HEIGHT: u16 = 2 + 2 * FIELD_HEIGHT + 6 + BUTTON_HEIGHT;

/// Draw the contact form card and, below it, the submitted-data panel
pub fn draw_contact(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FORM_HEIGHT), // Form card
            Constraint::Min(0),              // Submitted panel
        ])
        .split(area);

    draw_form(frame, chunks[0], app);

    if let Some(record) = app.state.session.submitted() {
        draw_submitted_panel(frame, chunks[1], record);
    }
}

/// Draw the form fields and submit button
fn draw_form(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(format!(" {} ", app.config.title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_HEIGHT), // Name
            Constraint::Length(FIELD_HEIGHT), // Email
            Constraint::Min(6),               // Message
            Constraint::Length(BUTTON_HEIGHT), // Submit
        ])
        .margin(1)
        .split(area);

    let values = app.state.session.values();
    let errors = app.state.session.errors();

    for (chunk, field) in chunks.iter().take(3).zip(FieldId::ALL) {
        draw_field(
            frame,
            *chunk,
            field.label(),
            values.get(field),
            errors.get(field),
            app.state.focus.field() == Some(field),
            field.is_multiline(),
        );
    }

    render_button(
        frame,
        chunks[3],
        "Submit",
        app.state.focus == Focus::SubmitButton,
    );
}

/// Draw the panel showing the most recently accepted submission
fn draw_submitted_panel(
    frame: &mut Frame,
    area: Rect,
    record: &crate::state::SubmittedRecord,
) {
    let title = format!(
        " Submitted Data ({}) ",
        record.submitted_at.format("%H:%M:%S")
    );
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let body = serde_json::to_string_pretty(&record.values).unwrap_or_default();
    let panel = Paragraph::new(body).wrap(Wrap { trim: false }).block(block);
    frame.render_widget(panel, area);
}
