//! Page chrome: header with navigation, status bar

use crate::app::App;
use crate::state::{PageFocus, Section};
use crate::ui::theme::Palette;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into header, body, and status bar.
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);
    (chunks[0], chunks[1], chunks[2])
}

/// Draw the agency title and the section navigation, highlighting the
/// focused section.
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let mut nav_spans: Vec<Span> = vec![Span::styled(
        "Maple & Stone Realty",
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD),
    )];
    nav_spans.push(Span::raw("   "));

    for section in Section::ALL {
        let focused = app.state.page_focus == PageFocus::Section(section);
        let style = if focused {
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::UNDERLINED)
        } else {
            Style::default().fg(palette.muted)
        };
        nav_spans.push(Span::styled(section.title(), style));
        nav_spans.push(Span::raw("  "));
    }

    nav_spans.push(Span::styled(
        format!("[{} theme]", app.state.theme.label()),
        Style::default().fg(palette.muted),
    ));

    let header = Paragraph::new(Line::from(nav_spans));
    frame.render_widget(header, area);
}

/// Draw the status bar: a transient message when present, key hints
/// otherwise.
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let line = match &app.state.status_message {
        Some(message) => Line::from(Span::styled(
            message.clone(),
            Style::default().fg(palette.success),
        )),
        None => Line::from(vec![
            Span::styled("↑↓", Style::default().fg(palette.accent)),
            Span::styled(" navigate  ", Style::default().fg(palette.muted)),
            Span::styled("Enter", Style::default().fg(palette.accent)),
            Span::styled(" contact  ", Style::default().fg(palette.muted)),
            Span::styled("t", Style::default().fg(palette.accent)),
            Span::styled(" theme  ", Style::default().fg(palette.muted)),
            Span::styled("q", Style::default().fg(palette.accent)),
            Span::styled(" quit", Style::default().fg(palette.muted)),
        ]),
    };
    frame.render_widget(Paragraph::new(line), area);
}
