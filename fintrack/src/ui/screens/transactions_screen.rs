use ratatui::{
    prelude::*,
    text::Text,
    widgets::{Block, Borders, Cell, Row, Table},
};

use crate::state::{LoadingState, TransactionsState};
use crate::ui::{
    components::{empty_state, entry_form, help_bar, incomplete_request, popup, screen_title},
    layouts, theme, utils,
};
use fintrack_api::endpoints::transactions::Transaction;

const HELP: &[(&str, &str)] = &[
    ("j/k", "move"),
    ("n", "add"),
    ("N", "add page"),
    ("r", "refresh"),
    ("?", "help"),
    ("q", "quit"),
];

const DIALOG_HELP: &[(&str, &str)] = &[
    ("Tab", "next field"),
    ("↑/↓", "change"),
    ("Enter", "submit"),
    ("Esc", "cancel"),
];

pub fn render(f: &mut Frame, area: Rect, state: &TransactionsState) {
    let (title_area, content_area, help_area) = layouts::screen_layout(area);

    screen_title::render_screen_title(f, title_area, "Transactions", &state.transactions_loading);
    render_content(f, content_area, state);

    match &state.add_dialog {
        Some(dialog) => {
            help_bar::render_help_bar(f, help_area, DIALOG_HELP);

            let inner = popup::render_popup_frame(
                f,
                area,
                layouts::popup_sizes::FORM,
                dialog.variant.title(),
                if dialog.is_form_visible() {
                    theme::info_border_style()
                } else {
                    theme::form_hidden_style()
                },
            );
            entry_form::render_entry_form(f, inner, dialog);

            if dialog.is_error_dialog_visible() {
                incomplete_request::render_incomplete_request(f, area, &dialog.errors);
            }
        }
        None => help_bar::render_help_bar(f, help_area, HELP),
    }
}

fn render_content(f: &mut Frame, area: Rect, state: &TransactionsState) {
    if state.transactions.is_empty() {
        match &state.transactions_loading {
            LoadingState::Loading(..) => {
                empty_state::render_empty_state(f, area, "Status", "Loading transactions...", None)
            }
            LoadingState::Error(error) => {
                empty_state::render_error_state(f, area, "Transactions", error)
            }
            LoadingState::NotStarted | LoadingState::Loaded => empty_state::render_empty_state(
                f,
                area,
                "Transactions",
                "No transactions yet",
                Some("Press n to add one"),
            ),
        }
        return;
    }

    let header = Row::new(vec![
        Cell::from("Date"),
        Cell::from("Type"),
        Cell::from("Category"),
        Cell::from("Detail"),
        Cell::from(Text::from("Amount").right_aligned()),
    ])
    .style(theme::header_style())
    .underlined();

    let rows: Vec<Row> = state
        .sorted_transactions()
        .into_iter()
        .map(build_transaction_row)
        .collect();

    let mut table = Table::new(
        rows,
        [
            Constraint::Length(10),
            Constraint::Length(8),
            Constraint::Percentage(20),
            Constraint::Min(20),
            Constraint::Length(14),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("Transactions ({})", state.transactions.len())),
    )
    .column_spacing(theme::TABLE_COLUMN_SPACING);

    if state.add_dialog.is_none() {
        table = table.row_highlight_style(theme::selection_style());
    }

    f.render_stateful_widget(table, area, &mut state.table_state.borrow_mut());
}

fn build_transaction_row(transaction: &Transaction) -> Row<'static> {
    Row::new(vec![
        Cell::from(utils::fmt_date(transaction.date)),
        Cell::from(transaction.kind.clone()),
        Cell::from(transaction.category.clone()),
        Cell::from(transaction.detail.clone()),
        Cell::from(Text::from(utils::fmt_amount(transaction.amount)).right_aligned()),
    ])
}
