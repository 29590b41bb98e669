use super::{AppState, LoadingState};
use crate::commands::submission;
use crate::events::DataEvent;
use ratatui::widgets::TableState;
use std::cell::RefCell;

/// Pure state transition function for data events
pub fn reduce_data_event(state: &mut AppState, event: DataEvent) {
    match event {
        DataEvent::TransactionsLoaded { mut transactions } => {
            if let Some(transactions_state) = state.transactions_state_mut() {
                transactions.sort();
                transactions_state.transactions = transactions;
                transactions_state.transactions_loading = LoadingState::Loaded;
                transactions_state.table_state =
                    RefCell::new(TableState::default().with_selected(0));
            }
        }

        DataEvent::TransactionAdded {
            dispatch_id,
            transaction,
        } => {
            if let Some(transactions_state) = state.transactions_state_mut() {
                transactions_state.transactions.push(transaction.clone());
                transactions_state.transactions.sort();
                transactions_state.table_state =
                    RefCell::new(TableState::default().with_selected(0));
            }
            state.last_added = Some(transaction);
            tracing::info!("Transaction added to list");

            // A page waiting on this result leaves for the listing
            let latest = state.last_added.clone();
            let leave = state.entry_surface_mut().is_some_and(|surface| {
                submission::on_store_result(surface, dispatch_id, latest.as_ref())
            });
            if leave {
                state.navigate_to_listing();
            }
        }

        DataEvent::TransactionAddFailed { dispatch_id, error } => {
            tracing::error!("Transaction submission {} failed: {}", dispatch_id, error);
            if let Some(surface) = state.entry_surface_mut() {
                submission::on_dispatch_failed(surface, dispatch_id);
            }
        }

        DataEvent::LoadError { error } => {
            tracing::error!("Load error: {}", error);
            if let Some(transactions_state) = state.transactions_state_mut() {
                transactions_state.transactions_loading = LoadingState::Error(error);
            }
        }
    }
}
