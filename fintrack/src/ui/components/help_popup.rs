use ratatui::{
    prelude::*,
    widgets::{List, ListItem},
    Frame,
};

use crate::ui::{layouts, screens::Screen, theme};

pub fn render_help_popup(f: &mut Frame, screen: &Screen) {
    let inner = super::popup::render_popup_frame(
        f,
        f.area(),
        layouts::popup_sizes::LARGE,
        "Help (press ? or Esc to close)",
        theme::accent_border_style(),
    );

    let items: Vec<ListItem> = get_help_items(screen)
        .iter()
        .map(|(key, description)| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:15}", key), theme::header_style()),
                Span::raw(*description),
            ]))
        })
        .collect();

    let list = List::new(items).style(Style::default().fg(Color::White));

    f.render_widget(list, inner);
}

fn get_help_items(screen: &Screen) -> Vec<(&'static str, &'static str)> {
    let mut items = vec![];

    match screen {
        Screen::Transactions(..) => {
            items.push(("↑/k", "Move selection up"));
            items.push(("↓/j", "Move selection down"));
            items.push(("n", "Add a transaction in a dialog"));
            items.push(("N / g then a", "Open the Add Transaction page"));
            items.push(("r", "Refresh transactions"));
        }
        Screen::AddTransaction(..) => {
            items.push(("Tab/Shift+Tab", "Next / previous field"));
            items.push(("↑/↓", "Choose type or category"));
            items.push(("Ctrl+L", "Clear field"));
            items.push(("Enter", "Submit"));
            items.push(("Esc", "Cancel"));
        }
        Screen::Logs(..) => {
            items.push(("↑/k", "Scroll up (older logs)"));
            items.push(("↓/j", "Scroll down (newer logs)"));
            items.push(("Page Up", "Scroll up one page"));
            items.push(("Page Down", "Scroll down one page"));
            items.push(("g then g", "Scroll to oldest logs"));
            items.push(("G", "Scroll to newest logs"));
        }
    }

    items.push(("", ""));
    items.push(("--- Global ---", ""));
    items.push(("h/←/Esc", "Navigate back"));
    items.push(("g then l", "Go to logs"));
    items.push(("g then g", "Navigate to top of list"));
    items.push(("G", "Navigate to bottom of list"));
    items.push(("?", "Toggle this help"));
    items.push(("q", "Quit application"));

    items
}
