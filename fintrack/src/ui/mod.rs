pub mod components;
pub mod layouts;
pub mod screens;
pub mod theme;
pub mod utils;

use crate::log_buffer::LogBuffer;
use crate::state::AppState;
use fintrack_session::SessionContext;
use ratatui::Frame;
use screens::*;

/// Render dispatcher. Read-only: never mutates state.
pub fn render_app(
    f: &mut Frame,
    state: &AppState,
    log_buffer: &LogBuffer,
    session: &SessionContext,
) {
    let (header_area, body_area) = layouts::app_layout(f.area());
    components::session_header::render_session_header(f, header_area, session);

    match state.current_screen() {
        Screen::Transactions(transactions_state) => {
            transactions_screen::render(f, body_area, transactions_state);
        }
        Screen::AddTransaction(surface) => {
            add_transaction_screen::render(f, body_area, surface);
        }
        Screen::Logs(logs_state) => {
            logs_screen::render(f, body_area, logs_state, log_buffer);
        }
    }

    if state.help_visible {
        components::help_popup::render_help_popup(f, state.current_screen());
    }
}
