use crate::commands::submission::Dispatch;
use fintrack_api::endpoints::transactions::Transaction;
use uuid::Uuid;

/// Commands to execute (user actions → state changes and background tasks)
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    SelectNext,
    SelectPrevious,
    NavigateToTop,
    NavigateToBottom,

    // Navigation
    NavigateBack,

    // Data loading
    LoadTransactions,

    // Transaction entry
    OpenAddTransactionPage,
    OpenAddTransactionDialog,
    CloseAddTransactionDialog,
    NavigateFormField { forward: bool },
    AppendFormFieldChar(char),
    DeleteFormFieldChar,
    ClearFormField,
    CycleFormFieldOption { forward: bool },
    StepFormDate { days: i64 },
    StepFormMonth { months: i32 },
    SubmitTransactionForm,
    DismissErrorDialog,

    // View toggles
    ToggleHelp,

    // Log screen
    NavigateToLogs,
    ScrollLogsUp,
    ScrollLogsDown,
    ScrollLogsPageUp,
    ScrollLogsPageDown,
    ScrollLogsToTop,
    ScrollLogsToBottom,

    // Key sequence state
    SetPendingKey(char),
    ClearPendingKey,

    // System
    Quit,
}

/// Background work requested by a command. Production runs these as tasks;
/// tests record them.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    LoadTransactions,
    AddTransaction(Dispatch),
}

/// Events from background tasks (responses to effects)
#[derive(Debug, Clone)]
pub enum DataEvent {
    TransactionsLoaded { transactions: Vec<Transaction> },

    /// The store's latest add result changed.
    TransactionAdded {
        dispatch_id: Uuid,
        transaction: Transaction,
    },
    TransactionAddFailed {
        dispatch_id: Uuid,
        error: String,
    },

    LoadError { error: String },
}
