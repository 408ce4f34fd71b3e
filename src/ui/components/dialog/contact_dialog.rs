//! Contact dialog rendering: form fields, inline errors, action buttons

use crate::platform::SUBMIT_SHORTCUT;
use crate::state::{ContactDialog, FormField, BUTTON_CANCEL, BUTTON_SEND};
use crate::ui::components::button::{render_button, BUTTON_HEIGHT};
use crate::ui::components::dialog::base::centered_rect;
use crate::ui::theme::Palette;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const DIALOG_WIDTH: u16 = 56;
const MULTILINE_FIELD_HEIGHT: u16 = 5;
const SINGLE_FIELD_HEIGHT: u16 = 3;

/// Row height for a field, including the inline error line when one is
/// attached.
fn field_height(field: &FormField) -> u16 {
    let base = if field.is_multiline() {
        MULTILINE_FIELD_HEIGHT
    } else {
        SINGLE_FIELD_HEIGHT
    };
    if field.invalid && field.message.is_some() {
        base + 1
    } else {
        base
    }
}

/// Render the contact dialog as a centered overlay.
pub fn render_contact_dialog(frame: &mut Frame, dialog: &ContactDialog, palette: &Palette) {
    let form = &dialog.form;

    let mut constraints: Vec<Constraint> = form
        .fields()
        .iter()
        .map(|f| Constraint::Length(field_height(f)))
        .collect();
    constraints.push(Constraint::Length(BUTTON_HEIGHT)); // action row
    constraints.push(Constraint::Length(1)); // help line

    let content_height: u16 = form.fields().iter().map(field_height).sum::<u16>()
        + BUTTON_HEIGHT
        + 1;
    let dialog_height = content_height + 2; // borders
    let dialog_area = centered_rect(frame.area(), DIALOG_WIDTH, dialog_height);

    frame.render_widget(Clear, dialog_area);

    let block = Block::default()
        .title(" Contact us ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent))
        .style(Style::default().bg(palette.bg));
    let inner = block.inner(dialog_area);
    frame.render_widget(block, dialog_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (i, field) in form.fields().iter().enumerate() {
        let is_active = !form.is_buttons_row_active() && form.active_field() == i;
        draw_field(frame, chunks[i], field, is_active, palette);
    }

    draw_action_row(frame, chunks[form.field_count()], dialog, palette);
    draw_help_line(frame, chunks[form.field_count() + 1], palette);
}

/// Draw a single field box, with the error annotation below it when the
/// field is marked invalid.
fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool, palette: &Palette) {
    let has_message = field.invalid && field.message.is_some();
    let (box_area, message_area) = if has_message {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(area);
        (chunks[0], Some(chunks[1]))
    } else {
        (area, None)
    };

    let border_color = if field.invalid {
        palette.error
    } else if is_active {
        palette.accent
    } else {
        palette.muted
    };

    let value_style = if is_active {
        Style::default().fg(palette.fg)
    } else {
        Style::default().fg(palette.muted)
    };

    let cursor = if is_active { "▌" } else { "" };
    let value = field.value();

    let content = if field.is_multiline() {
        let mut lines: Vec<Line> = value.lines().map(|l| Line::from(l.to_string())).collect();
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans
                    .push(Span::styled(cursor, Style::default().fg(palette.accent)));
            } else {
                lines.push(Line::from(Span::styled(
                    cursor,
                    Style::default().fg(palette.accent),
                )));
            }
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(value, value_style),
            Span::styled(cursor, Style::default().fg(palette.accent)),
        ]))
    };

    let required_mark = if field.required { " *" } else { "" };
    let block = Block::default()
        .title(format!(" {}{} ", field.label, required_mark))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), box_area);

    if let (Some(area), Some(message)) = (message_area, field.message.as_deref()) {
        let annotation = Paragraph::new(Line::from(Span::styled(
            format!(" ✗ {message}"),
            Style::default().fg(palette.error),
        )));
        frame.render_widget(annotation, area);
    }
}

fn draw_action_row(frame: &mut Frame, area: Rect, dialog: &ContactDialog, palette: &Palette) {
    let form = &dialog.form;
    let buttons_active = form.is_buttons_row_active();

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(12),
            Constraint::Length(12),
            Constraint::Min(0),
        ])
        .split(area);

    render_button(
        frame,
        chunks[1],
        "Cancel",
        buttons_active && form.selected_button == BUTTON_CANCEL,
        palette,
    );
    render_button(
        frame,
        chunks[2],
        "Send",
        buttons_active && form.selected_button == BUTTON_SEND,
        palette,
    );
}

fn draw_help_line(frame: &mut Frame, area: Rect, palette: &Palette) {
    let help = Paragraph::new(Line::from(vec![
        Span::styled("Tab", Style::default().fg(palette.accent)),
        Span::raw(": next field  "),
        Span::styled(SUBMIT_SHORTCUT, Style::default().fg(palette.accent)),
        Span::raw(": send  "),
        Span::styled("Esc", Style::default().fg(palette.accent)),
        Span::raw(": cancel"),
    ]))
    .style(Style::default().fg(palette.muted));
    frame.render_widget(help, area);
}
