//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Centered card column plus bottom status line
    let (card_area, status_area) = layout::create_layout(area);

    forms::draw_contact(frame, card_area, app);
    layout::draw_status_bar(frame, status_area, app);
}
