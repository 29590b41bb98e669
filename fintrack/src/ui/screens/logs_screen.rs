use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Row, Table},
};
use tracing::Level;

use crate::log_buffer::LogBuffer;
use crate::state::LogsState;
use crate::ui::{
    components::{empty_state, help_bar},
    layouts, theme,
};

const HELP: &[(&str, &str)] = &[
    ("j/k", "scroll"),
    ("G", "newest"),
    ("gg", "oldest"),
    ("PgUp/PgDn", "page"),
    ("h", "back"),
];

pub fn render(f: &mut Frame, area: Rect, state: &LogsState, log_buffer: &LogBuffer) {
    let (title_area, content_area, help_area) = layouts::screen_layout(area);

    let mut title = format!("Logs ({} entries)", state.total_entries);
    if state.scroll_offset > 0 {
        title.push_str(&format!(", {} from newest", state.scroll_offset));
    }
    f.render_widget(Paragraph::new(title).style(theme::title_style()), title_area);

    render_logs(f, content_area, state, log_buffer);
    help_bar::render_help_bar(f, help_area, HELP);
}

fn render_logs(f: &mut Frame, area: Rect, state: &LogsState, log_buffer: &LogBuffer) {
    let entries = log_buffer.entries();
    let total = entries.len();

    if total == 0 {
        empty_state::render_empty_state(f, area, "Session Logs", "No logs yet", None);
        return;
    }

    // Newest at the bottom; the offset counts back from it
    let inner_height = area.height.saturating_sub(4) as usize;
    let (start, end) = visible_window(total, state.scroll_offset, inner_height);

    let rows: Vec<Row> = entries[start..end]
        .iter()
        .map(|entry| {
            Row::new(vec![
                entry.timestamp.format("%H:%M:%S%.3f").to_string(),
                level_label(entry.level).to_string(),
                truncate_target(&entry.target, 25),
                entry.message.clone(),
            ])
            .style(level_style(entry.level))
        })
        .collect();

    let widths = [
        Constraint::Length(12),
        Constraint::Length(5),
        Constraint::Length(25),
        Constraint::Min(30),
    ];

    let table = Table::new(rows, widths)
        .block(Block::default().borders(Borders::ALL).title(format!(
            " Logs [{}-{} of {}] ",
            start + 1,
            end,
            total
        )))
        .header(
            Row::new(vec!["Time", "Level", "Target", "Message"])
                .style(theme::header_style())
                .bottom_margin(1),
        );

    f.render_widget(table, area);
}

/// Range of entries that fit in `height` rows, `offset` entries back from the newest.
fn visible_window(total: usize, offset: usize, height: usize) -> (usize, usize) {
    let end = total.saturating_sub(offset);
    (end.saturating_sub(height), end)
}

fn level_label(level: Level) -> &'static str {
    match level {
        Level::ERROR => "ERROR",
        Level::WARN => "WARN ",
        Level::INFO => "INFO ",
        Level::DEBUG => "DEBUG",
        Level::TRACE => "TRACE",
    }
}

fn level_style(level: Level) -> Style {
    match level {
        Level::ERROR => Style::default()
            .fg(theme::COLOR_NEGATIVE)
            .add_modifier(Modifier::BOLD),
        Level::WARN => Style::default().fg(theme::COLOR_LOADING),
        Level::INFO => Style::default().fg(theme::COLOR_POSITIVE),
        Level::DEBUG => Style::default().fg(Color::Blue),
        Level::TRACE => Style::default().fg(theme::COLOR_ZERO),
    }
}

/// Keep the tail of long module paths, where the interesting part is.
fn truncate_target(target: &str, max_len: usize) -> String {
    let count = target.chars().count();
    if count <= max_len {
        target.to_string()
    } else {
        let tail: String = target.chars().skip(count - max_len + 3).collect();
        format!("...{}", tail)
    }
}
