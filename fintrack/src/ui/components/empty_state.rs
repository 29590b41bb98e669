//! Placeholders shown instead of a table.

use ratatui::prelude::Rect;
use ratatui::{
    layout::Alignment,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::ui::theme;

/// Centered message in a titled block, with an optional hint underneath.
pub fn render_empty_state(
    f: &mut Frame,
    area: Rect,
    title: &str,
    message: &str,
    hint: Option<&str>,
) {
    render_message(f, area, title, message, theme::loading_style(), hint);
}

/// Like [`render_empty_state`], for a failed load.
pub fn render_error_state(f: &mut Frame, area: Rect, title: &str, error: &str) {
    render_message(
        f,
        area,
        title,
        error,
        Style::default().fg(theme::COLOR_NEGATIVE),
        Some("Press r to retry"),
    );
}

fn render_message(
    f: &mut Frame,
    area: Rect,
    title: &str,
    message: &str,
    style: Style,
    hint: Option<&str>,
) {
    let mut lines = vec![Line::from(""), Line::from(Span::styled(message, style))];

    if let Some(hint_text) = hint {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(hint_text, theme::help_text_style())));
    }

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(title));

    f.render_widget(paragraph, area);
}
