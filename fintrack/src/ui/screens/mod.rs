pub mod add_transaction_screen;
pub mod logs_screen;
pub mod transactions_screen;

use crate::state::{EntrySurface, LogsState, TransactionsState};

#[derive(Debug, Clone)]
pub enum Screen {
    Transactions(Box<TransactionsState>),
    AddTransaction(EntrySurface),
    Logs(LogsState),
}
