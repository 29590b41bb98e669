//! Transaction entry form shared by the page and the dialog.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::state::draft::{CATEGORY_PLACEHOLDER, TYPE_PLACEHOLDER};
use crate::state::{DraftField, EntryPhase, EntrySurface};
use crate::ui::{layouts, theme};

/// Rows needed to draw every field of `surface` plus the status line.
pub fn form_height(surface: &EntrySurface) -> u16 {
    (surface.variant.fields().len() as u16 + 1) * theme::FORM_FIELD_HEIGHT
}

pub fn render_entry_form(f: &mut Frame, area: Rect, surface: &EntrySurface) {
    let fields = surface.variant.fields();
    let rows = layouts::form_rows(area, fields.len() + 1, theme::FORM_FIELD_HEIGHT);

    for (field, row) in fields.iter().zip(rows.iter()) {
        render_field(f, *row, surface, *field);
    }

    if let Some(status_area) = rows.get(fields.len()) {
        render_status(f, *status_area, surface);
    }
}

fn render_field(f: &mut Frame, area: Rect, surface: &EntrySurface, field: DraftField) {
    let hidden = !surface.is_form_visible();
    let focused = surface.focused == field && !hidden;
    let (text, is_placeholder) = field_display(surface, field, focused);

    let value_style = if hidden {
        theme::form_hidden_style()
    } else if is_placeholder {
        theme::placeholder_style()
    } else if focused {
        theme::form_field_focused_style()
    } else {
        theme::form_field_style()
    };

    let border_style = if hidden {
        theme::form_hidden_style()
    } else if surface.errors.contains(field) {
        Style::default().fg(theme::COLOR_NEGATIVE)
    } else if focused {
        theme::accent_border_style()
    } else {
        Style::default()
    };

    let mut title = vec![Span::raw(format!(" {} ", field.label()))];
    if focused {
        if let Some(hint) = field_hint(field) {
            title.push(Span::styled(format!("{} ", hint), theme::help_text_style()));
        }
    }

    let paragraph = Paragraph::new(Span::styled(text, value_style)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(Line::from(title)),
    );

    f.render_widget(paragraph, area);
}

fn render_status(f: &mut Frame, area: Rect, surface: &EntrySurface) {
    let line = match surface.phase {
        EntryPhase::Submitting => Span::styled("Saving transaction...", theme::loading_style()),
        EntryPhase::Done => Span::styled("Saved", Style::default().fg(theme::COLOR_POSITIVE)),
        EntryPhase::Editing | EntryPhase::ErrorShown => Span::raw(""),
    };
    f.render_widget(Paragraph::new(line), area);
}

/// Text shown inside a field and whether it is a placeholder.
fn field_display(surface: &EntrySurface, field: DraftField, focused: bool) -> (String, bool) {
    let value = surface.draft.get(field);
    match field {
        DraftField::Type | DraftField::Category => {
            let placeholder = value == TYPE_PLACEHOLDER || value == CATEGORY_PLACEHOLDER;
            (format!("{} ▾", value), placeholder)
        }
        DraftField::Date => (value.to_string(), false),
        DraftField::Detail | DraftField::Amount => {
            let cursor = if focused { "▏" } else { "" };
            (format!("{}{}", value, cursor), false)
        }
    }
}

fn field_hint(field: DraftField) -> Option<&'static str> {
    match field {
        DraftField::Type | DraftField::Category => Some("↑/↓ choose"),
        DraftField::Date => Some("↑/↓ day, PgUp/PgDn month"),
        DraftField::Amount => Some("non-zero"),
        DraftField::Detail => None,
    }
}
