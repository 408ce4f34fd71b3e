//! Success notice shown after the contact form is submitted

use crate::ui::components::dialog::base::{render_dialog, DialogConfig};
use crate::ui::theme::Palette;
use ratatui::{style::Style, text::Span, Frame};

/// Render the post-submit confirmation overlay.
pub fn render_success_dialog(frame: &mut Frame, notice: &str, palette: &Palette) {
    render_dialog(
        frame,
        DialogConfig {
            title: "Message sent",
            message: notice,
            hint: Some(vec![
                Span::styled("Enter", Style::default().fg(palette.accent)),
                Span::styled(" dismiss", Style::default().fg(palette.muted)),
            ]),
            max_width: 50,
            border_color: Some(palette.success),
        },
        palette,
    );
}
