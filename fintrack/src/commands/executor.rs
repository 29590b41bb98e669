use crate::background::{data_loader::DataLoader, BackgroundTaskManager};
use crate::commands::submission::{self, SubmitOutcome};
use crate::events::{AppCommand, Effect};
use crate::state::draft::today;
use crate::state::*;
use crate::ui::screens::Screen;
use fintrack_session::SessionContext;
use ratatui::widgets::TableState;
use std::cell::RefCell;
use throbber_widgets_tui::ThrobberState;

const LOG_PAGE_SIZE: usize = 20;

/// Execute a command, spawning a background task for any effect it produces
pub fn execute_command(
    command: AppCommand,
    state: &mut AppState,
    session: &SessionContext,
    task_manager: &mut BackgroundTaskManager,
    data_loader: &DataLoader,
) {
    let Some(effect) = apply_command(command, state, session) else {
        return;
    };

    match effect {
        Effect::LoadTransactions => {
            let future = data_loader.load_transactions(session);
            task_manager.spawn_load_task("load_transactions".to_string(), future);
        }
        Effect::AddTransaction(dispatch) => {
            // Keyed by dispatch so a second dialog submission doesn't abort the first
            let task_id = format!("add_transaction_{}", dispatch.id);
            let future = data_loader.add_transaction(dispatch.id, dispatch.payload, session);
            task_manager.spawn_load_task(task_id, future);
        }
    }
}

/// Apply a command to state without performing any I/O
///
/// Returns the background work the command asks for, if any. Production runs
/// it through [`execute_command`]; tests inspect it directly.
pub fn apply_command(
    command: AppCommand,
    state: &mut AppState,
    session: &SessionContext,
) -> Option<Effect> {
    // Save whether we're setting a pending key (we don't want to clear it in that case)
    let is_setting_pending_key = matches!(command, AppCommand::SetPendingKey(_));
    let mut effect = None;

    match command {
        // Simple state updates
        AppCommand::Quit => state.should_quit = true,
        AppCommand::ToggleHelp => state.help_visible = !state.help_visible,
        AppCommand::SetPendingKey(c) => state.pending_key = Some(c),
        AppCommand::ClearPendingKey => state.pending_key = None,

        // Navigation
        AppCommand::NavigateBack => {
            state.navigate_back();
        }

        AppCommand::SelectNext => {
            if let Screen::Transactions(transactions_state) = state.current_screen_mut() {
                transactions_state.select_next();
            }
        }

        AppCommand::SelectPrevious => {
            if let Screen::Transactions(transactions_state) = state.current_screen_mut() {
                transactions_state.select_prev();
            }
        }

        AppCommand::NavigateToTop => {
            if let Screen::Transactions(transactions_state) = state.current_screen_mut() {
                if !transactions_state.transactions.is_empty() {
                    transactions_state.table_state =
                        RefCell::new(TableState::default().with_selected(0));
                }
            }
        }

        AppCommand::NavigateToBottom => {
            if let Screen::Transactions(transactions_state) = state.current_screen_mut() {
                let num_items = transactions_state.transactions.len();
                if num_items > 0 {
                    transactions_state.table_state =
                        RefCell::new(TableState::default().with_selected(num_items - 1));
                }
            }
        }

        AppCommand::LoadTransactions => {
            if let Some(transactions_state) = state.transactions_state_mut() {
                tracing::debug!("Refreshing transactions");
                transactions_state.transactions_loading =
                    LoadingState::Loading(ThrobberState::default());
            }
            effect = Some(Effect::LoadTransactions);
        }

        // Transaction entry
        AppCommand::OpenAddTransactionPage => {
            tracing::debug!("Opening add transaction page");
            state.navigate_to(Screen::AddTransaction(EntrySurface::page()));
        }

        AppCommand::OpenAddTransactionDialog => {
            if let Screen::Transactions(transactions_state) = state.current_screen_mut() {
                tracing::debug!("Opening add transaction dialog");
                transactions_state.add_dialog = Some(EntrySurface::dialog());
            }
        }

        AppCommand::CloseAddTransactionDialog => close_dialog(state),

        AppCommand::NavigateFormField { forward } => {
            if let Some(surface) = state.entry_surface_mut() {
                surface.focus_next(forward);
            }
        }

        AppCommand::AppendFormFieldChar(c) => {
            if let Some(surface) = state.entry_surface_mut() {
                let field = surface.focused;
                surface.draft.push_char(field, c);
            }
        }

        AppCommand::DeleteFormFieldChar => {
            if let Some(surface) = state.entry_surface_mut() {
                let field = surface.focused;
                surface.draft.pop_char(field);
            }
        }

        AppCommand::ClearFormField => {
            if let Some(surface) = state.entry_surface_mut() {
                let field = surface.focused;
                surface.draft.clear(field);
            }
        }

        AppCommand::CycleFormFieldOption { forward } => {
            let options = state.options.clone();
            if let Some(surface) = state.entry_surface_mut() {
                let field = surface.focused;
                surface
                    .draft
                    .cycle_option(field, options.for_field(field), forward);
            }
        }

        AppCommand::StepFormDate { days } => {
            if let Some(surface) = state.entry_surface_mut() {
                if surface.focused == DraftField::Date {
                    surface.draft.step_date_days(days, today());
                }
            }
        }

        AppCommand::StepFormMonth { months } => {
            if let Some(surface) = state.entry_surface_mut() {
                if surface.focused == DraftField::Date {
                    surface.draft.step_date_months(months, today());
                }
            }
        }

        AppCommand::SubmitTransactionForm => {
            let outcome = match state.entry_surface_mut() {
                Some(surface) => submission::submit(surface, session),
                None => return None,
            };

            if let SubmitOutcome::Dispatched(dispatch) = outcome {
                if dispatch.variant == SurfaceVariant::Dialog {
                    close_dialog(state);
                }
                effect = Some(Effect::AddTransaction(dispatch));
            }
        }

        AppCommand::DismissErrorDialog => {
            if let Some(surface) = state.entry_surface_mut() {
                surface.dismiss_errors();
            }
        }

        // Log screen
        AppCommand::NavigateToLogs => {
            // No logging here, it would feed the screen being opened
            state.navigate_to(Screen::Logs(LogsState::default()));
        }

        AppCommand::ScrollLogsUp => {
            if let Screen::Logs(logs_state) = state.current_screen_mut() {
                // Scroll up means going back in time (increase offset)
                if logs_state.scroll_offset < logs_state.total_entries.saturating_sub(1) {
                    logs_state.scroll_offset += 1;
                }
            }
        }

        AppCommand::ScrollLogsDown => {
            if let Screen::Logs(logs_state) = state.current_screen_mut() {
                logs_state.scroll_offset = logs_state.scroll_offset.saturating_sub(1);
            }
        }

        AppCommand::ScrollLogsPageUp => {
            if let Screen::Logs(logs_state) = state.current_screen_mut() {
                logs_state.scroll_offset = (logs_state.scroll_offset + LOG_PAGE_SIZE)
                    .min(logs_state.total_entries.saturating_sub(1));
            }
        }

        AppCommand::ScrollLogsPageDown => {
            if let Screen::Logs(logs_state) = state.current_screen_mut() {
                logs_state.scroll_offset = logs_state.scroll_offset.saturating_sub(LOG_PAGE_SIZE);
            }
        }

        AppCommand::ScrollLogsToTop => {
            if let Screen::Logs(logs_state) = state.current_screen_mut() {
                logs_state.scroll_offset = logs_state.total_entries.saturating_sub(1);
            }
        }

        AppCommand::ScrollLogsToBottom => {
            if let Screen::Logs(logs_state) = state.current_screen_mut() {
                logs_state.scroll_offset = 0;
            }
        }
    }

    // Clear pending key after any command except SetPendingKey
    // This ensures multi-key sequences are properly reset after completion
    if !is_setting_pending_key && state.pending_key.is_some() {
        state.pending_key = None;
    }

    effect
}

/// Drops the dialog and its draft.
fn close_dialog(state: &mut AppState) {
    if let Screen::Transactions(transactions_state) = state.current_screen_mut() {
        transactions_state.add_dialog = None;
    }
}
