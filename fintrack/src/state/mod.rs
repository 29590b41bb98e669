pub mod draft;
pub mod entry;
pub mod reducer;
pub mod validators;

pub use draft::{DraftField, TransactionDraft};
pub use entry::{EntryPhase, EntrySurface, SurfaceVariant};
pub use validators::{validate, ValidationErrors};

use crate::ui::screens::Screen;
use fintrack_api::endpoints::transactions::Transaction;
use itertools::Itertools;
use ratatui::widgets::TableState;
use std::cell::RefCell;
use throbber_widgets_tui::ThrobberState;

/// Represents loading state separate from data state
#[derive(Default, Debug, Clone, PartialEq)]
pub enum LoadingState {
    #[default]
    NotStarted,
    Loading(ThrobberState),
    Loaded,
    Error(String),
}

/// Labels offered by the type and category dropdowns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryOptions {
    pub types: Vec<String>,
    pub categories: Vec<String>,
}

impl EntryOptions {
    pub fn for_field(&self, field: DraftField) -> &[String] {
        match field {
            DraftField::Type => &self.types,
            DraftField::Category => &self.categories,
            _ => &[],
        }
    }
}

impl Default for EntryOptions {
    fn default() -> Self {
        Self {
            types: ["Income", "Expense"].map(String::from).to_vec(),
            categories: [
                "Food",
                "Transport",
                "Housing",
                "Utilities",
                "Entertainment",
                "Health",
                "Shopping",
                "Salary",
                "Other",
            ]
            .map(String::from)
            .to_vec(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub history: Vec<Screen>,

    pub options: EntryOptions,

    /// Latest transaction the store reported as added.
    pub last_added: Option<Transaction>,

    // UI state
    pub help_visible: bool,
    pub pending_key: Option<char>,

    // System
    pub should_quit: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_options(EntryOptions::default())
    }

    pub fn with_options(options: EntryOptions) -> Self {
        Self {
            history: vec![Screen::Transactions(Box::default())],
            options,
            last_added: None,
            help_visible: false,
            pending_key: None,
            should_quit: false,
        }
    }

    /// Get the current screen (last in navigation stack)
    pub fn current_screen(&self) -> &Screen {
        self.history
            .last()
            .expect("Navigation stack should never be empty")
    }

    /// Get mutable reference to current screen
    pub fn current_screen_mut(&mut self) -> &mut Screen {
        self.history
            .last_mut()
            .expect("Navigation stack should never be empty")
    }

    /// Navigate to a new screen (push to stack)
    pub fn navigate_to(&mut self, screen: Screen) {
        tracing::debug!(
            "Navigating to new screen, stack depth: {} -> {}",
            self.history.len(),
            self.history.len() + 1
        );
        self.history.push(screen);
    }

    /// Navigate back (pop from stack)
    /// Returns true if navigation succeeded, false if already at root
    pub fn navigate_back(&mut self) -> bool {
        if self.history.len() > 1 {
            tracing::debug!(
                "Navigating back, stack depth: {} -> {}",
                self.history.len(),
                self.history.len() - 1
            );
            self.history.pop();
            true
        } else {
            tracing::debug!("Cannot navigate back, already at root screen");
            false
        }
    }

    /// Pops screens until the transactions listing is on top.
    pub fn navigate_to_listing(&mut self) {
        while !matches!(self.current_screen(), Screen::Transactions(_)) && self.navigate_back() {}
    }

    pub fn transactions_state_mut(&mut self) -> Option<&mut TransactionsState> {
        self.history.iter_mut().rev().find_map(|screen| match screen {
            Screen::Transactions(state) => Some(state.as_mut()),
            _ => None,
        })
    }

    /// The entry surface that currently receives input, if any: the
    /// standalone page or the dialog open over the listing.
    pub fn entry_surface(&self) -> Option<&EntrySurface> {
        match self.current_screen() {
            Screen::AddTransaction(surface) => Some(surface),
            Screen::Transactions(state) => state.add_dialog.as_ref(),
            Screen::Logs(_) => None,
        }
    }

    pub fn entry_surface_mut(&mut self) -> Option<&mut EntrySurface> {
        match self.current_screen_mut() {
            Screen::AddTransaction(surface) => Some(surface),
            Screen::Transactions(state) => state.add_dialog.as_mut(),
            Screen::Logs(_) => None,
        }
    }

    /// Spinner of whatever the current screen is waiting on.
    pub fn loading_state(&mut self) -> Option<&mut ThrobberState> {
        match self.current_screen_mut() {
            Screen::Transactions(state) => match state.transactions_loading {
                LoadingState::Loading(ref mut throbber_state) => Some(throbber_state),
                _ => None,
            },
            Screen::AddTransaction(surface) if surface.is_awaiting_result() => {
                Some(&mut surface.saving)
            }
            _ => None,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Default, Debug, Clone)]
pub struct TransactionsState {
    pub transactions: Vec<Transaction>,
    pub transactions_loading: LoadingState,
    pub table_state: RefCell<TableState>,

    /// "Add New Transaction" popup, when open.
    pub add_dialog: Option<EntrySurface>,
}

impl TransactionsState {
    /// Transactions in display order, newest first.
    pub fn sorted_transactions(&self) -> Vec<&Transaction> {
        self.transactions.iter().sorted().collect()
    }

    pub fn selected_transaction(&self) -> Option<&Transaction> {
        let selected = self.table_state.borrow().selected()?;
        self.sorted_transactions().get(selected).copied()
    }
}

#[derive(Default, Debug, Clone)]
pub struct LogsState {
    pub scroll_offset: usize,
    pub total_entries: usize,
}

pub trait Scrollable {
    fn num_items(&self) -> usize;
    fn table_state(&self) -> &RefCell<TableState>;

    fn select_prev(&mut self) {
        let num_items = self.num_items();
        let mut table_state = self.table_state().borrow_mut();
        if num_items > 0 {
            if table_state.selected().unwrap_or(0) == 0 {
                table_state.select(Some(num_items - 1));
            } else {
                table_state.scroll_up_by(1)
            }
        }
    }

    fn select_next(&mut self) {
        let num_items = self.num_items();
        let mut table_state = self.table_state().borrow_mut();
        if num_items > 0 {
            if table_state.selected().unwrap_or(num_items - 1) == num_items - 1 {
                table_state.select_first();
            } else {
                table_state.scroll_down_by(1)
            }
        }
    }
}

impl Scrollable for TransactionsState {
    fn num_items(&self) -> usize {
        self.transactions.len()
    }

    fn table_state(&self) -> &RefCell<TableState> {
        &self.table_state
    }
}
