//! "Incomplete Request" dialog listing the fields a submission is missing.

use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use crate::state::ValidationErrors;
use crate::ui::{layouts, theme};

use super::popup;

pub const TITLE: &str = "Incomplete Request";
pub const INTRO: &str =
    "Oops! We couldn’t submit your transaction because some required fields are missing:";
pub const CLOSING: &str = "Make sure all required fields are completed before submitting.";

pub fn render_incomplete_request(f: &mut Frame, parent_area: Rect, errors: &ValidationErrors) {
    let inner = popup::render_popup_frame(
        f,
        parent_area,
        layouts::popup_sizes::MEDIUM,
        TITLE,
        theme::danger_border_style(),
    );

    let paragraph = Paragraph::new(dialog_lines(errors))
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left);

    f.render_widget(paragraph, inner);
}

fn dialog_lines(errors: &ValidationErrors) -> Vec<Line<'_>> {
    let mut lines = vec![Line::from(INTRO), Line::from("")];

    lines.extend(errors.messages().into_iter().map(|message| {
        Line::from(vec![
            Span::styled("  • ", Style::default().fg(theme::COLOR_NEGATIVE)),
            Span::raw(message),
        ])
    }));

    lines.push(Line::from(""));
    lines.push(Line::from(CLOSING));
    lines.push(Line::from(""));
    lines.push(
        Line::from(vec![
            Span::styled("[ OK ]", theme::selection_style()),
            Span::styled("  Enter", theme::help_text_style()),
        ])
        .alignment(Alignment::Center),
    );

    lines
}
