//! UI module for rendering the TUI

mod components;
mod layout;
mod page;
pub mod theme;

use crate::app::App;
use ratatui::{style::Style, widgets::Block, Frame};
use theme::Palette;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let palette = Palette::for_theme(app.state.theme);
    let area = frame.area();

    // Paint the themed background before anything else.
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.bg).fg(palette.fg)),
        area,
    );

    let (header_area, body_area, status_area) = layout::create_layout(area);
    layout::draw_header(frame, header_area, app, &palette);
    page::draw(frame, body_area, app, &palette);
    layout::draw_status_bar(frame, status_area, app, &palette);

    // Overlays: the contact dialog blocks the page; the success notice
    // sits on top of everything.
    if app.dialog.is_open() {
        components::render_contact_dialog(frame, &app.dialog, &palette);
    }
    if let Some(notice) = &app.state.success_notice {
        components::render_success_dialog(frame, notice, &palette);
    }
}
