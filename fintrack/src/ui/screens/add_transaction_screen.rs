use ratatui::prelude::*;

use crate::state::{EntryPhase, EntrySurface, LoadingState};
use crate::ui::{
    components::{entry_form, help_bar, incomplete_request, screen_title},
    layouts,
};

const HELP: &[(&str, &str)] = &[
    ("Tab", "next field"),
    ("↑/↓", "change"),
    ("Ctrl+L", "clear"),
    ("Enter", "submit"),
    ("Esc", "back"),
];

const ERROR_HELP: &[(&str, &str)] = &[("Enter", "OK")];

/// Standalone "Add Transaction" page.
pub fn render(f: &mut Frame, area: Rect, surface: &EntrySurface) {
    let (title_area, content_area, help_area) = layouts::screen_layout(area);

    let loading = match surface.phase {
        EntryPhase::Submitting => LoadingState::Loading(surface.saving.clone()),
        EntryPhase::Done => LoadingState::Loaded,
        EntryPhase::Editing | EntryPhase::ErrorShown => LoadingState::NotStarted,
    };
    screen_title::render_screen_title(f, title_area, surface.variant.title(), &loading);

    let form_area = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Max(72), Constraint::Min(0)])
        .split(content_area)[0];
    entry_form::render_entry_form(f, form_area, surface);

    if surface.is_error_dialog_visible() {
        help_bar::render_help_bar(f, help_area, ERROR_HELP);
        incomplete_request::render_incomplete_request(f, area, &surface.errors);
    } else {
        help_bar::render_help_bar(f, help_area, HELP);
    }
}
