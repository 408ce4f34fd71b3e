//! Agency page rendering: sections and listings

use crate::app::App;
use crate::state::{PageFocus, Section};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use crate::ui::theme::Palette;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the page body: one bordered block per section, the focused one
/// highlighted (the nav-highlight analog of the original page).
pub fn draw(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),                 // Home
            Constraint::Min(7),                    // Listings
            Constraint::Length(4),                 // Agents
            Constraint::Length(BUTTON_HEIGHT + 3), // Contact
        ])
        .split(area);

    draw_home(frame, chunks[0], app, palette);
    draw_listings(frame, chunks[1], app, palette);
    draw_agents(frame, chunks[2], app, palette);
    draw_contact(frame, chunks[3], app, palette);
}

fn section_block(section: Section, app: &App, palette: &Palette) -> Block<'static> {
    let focused = app.state.page_focus == PageFocus::Section(section);
    let border_color = if focused { palette.accent } else { palette.muted };
    Block::default()
        .title(format!(" {} ", section.title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
}

fn draw_home(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let block = section_block(Section::Home, app, palette);
    let text = Paragraph::new(vec![
        Line::from("Find your next home with a local team."),
        Line::from(Span::styled(
            "Family-run since 2004.",
            Style::default().fg(palette.muted),
        )),
    ])
    .block(block);
    frame.render_widget(text, area);
}

fn draw_listings(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let block = section_block(Section::Listings, app, palette);
    let lines: Vec<Line> = app
        .state
        .listings
        .iter()
        .map(|l| {
            Line::from(vec![
                Span::styled(l.address, Style::default().fg(palette.fg)),
                Span::raw("  "),
                Span::styled(
                    format!("{} rooms, {} m²", l.rooms, l.area_sqm),
                    Style::default().fg(palette.muted),
                ),
                Span::raw("  "),
                Span::styled(l.price, Style::default().fg(palette.accent)),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_agents(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let block = section_block(Section::Agents, app, palette);
    let text = Paragraph::new(vec![
        Line::from("Vera Maple — sales · Tom Stone — rentals"),
        Line::from(Span::styled(
            "Viewings seven days a week.",
            Style::default().fg(palette.muted),
        )),
    ])
    .block(block);
    frame.render_widget(text, area);
}

fn draw_contact(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let block = section_block(Section::Contact, app, palette);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(BUTTON_HEIGHT)])
        .split(inner);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Questions about a property? Leave us a note.",
            Style::default().fg(palette.fg),
        ))),
        chunks[0],
    );

    let button_area = Rect {
        width: chunks[1].width.min(18),
        ..chunks[1]
    };
    render_button(
        frame,
        button_area,
        "Contact us",
        app.state.page_focus == PageFocus::ContactButton,
        palette,
    );
}
