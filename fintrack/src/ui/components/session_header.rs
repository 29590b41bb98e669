//! One-line bar with the app name and the logged-in user.

use fintrack_session::SessionContext;
use ratatui::prelude::Rect;
use ratatui::{
    layout::Alignment,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::theme;

pub fn render_session_header(f: &mut Frame, area: Rect, session: &SessionContext) {
    let left = Paragraph::new(Span::styled(" fintrack", theme::title_style()));
    let right = Paragraph::new(Line::from(vec![
        Span::styled("user ", theme::help_text_style()),
        Span::styled(user_label(session), theme::header_style()),
        Span::raw(" "),
    ]))
    .alignment(Alignment::Right);

    f.render_widget(left, area);
    f.render_widget(right, area);
}

fn user_label(session: &SessionContext) -> &str {
    session.user().unwrap_or("-")
}
