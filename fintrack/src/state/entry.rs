use super::draft::{DraftField, TransactionDraft};
use super::validators::ValidationErrors;
use throbber_widgets_tui::ThrobberState;
use uuid::Uuid;

/// Where a transaction is being entered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceVariant {
    /// Standalone "Add Transaction" screen. Waits for the store to confirm
    /// before leaving.
    Page,
    /// "Add New Transaction" popup over the listing. Closes as soon as the
    /// transaction is dispatched.
    Dialog,
}

impl SurfaceVariant {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Page => "Add Transaction",
            Self::Dialog => "Add New Transaction",
        }
    }

    /// Fields shown by the surface, in tab order.
    pub fn fields(&self) -> &'static [DraftField] {
        match self {
            Self::Page => &[
                DraftField::Type,
                DraftField::Category,
                DraftField::Detail,
                DraftField::Amount,
            ],
            Self::Dialog => &[
                DraftField::Date,
                DraftField::Type,
                DraftField::Category,
                DraftField::Detail,
                DraftField::Amount,
            ],
        }
    }

    pub fn includes_date(&self) -> bool {
        matches!(self, Self::Dialog)
    }
}

/// Lifecycle of an entry surface.
///
/// `Submitting` and `Done` are only reached by [`SurfaceVariant::Page`]; the
/// dialog is dropped instead of waiting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EntryPhase {
    #[default]
    Editing,
    /// The "Incomplete Request" dialog covers the form.
    ErrorShown,
    /// Dispatched, waiting for the store's result.
    Submitting,
    Done,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EntrySurface {
    pub variant: SurfaceVariant,
    pub draft: TransactionDraft,
    pub phase: EntryPhase,
    /// Result of the last submission attempt.
    pub errors: ValidationErrors,
    pub focused: DraftField,
    /// Dispatch this page is waiting on while `Submitting`.
    pub in_flight: Option<Uuid>,
    pub saving: ThrobberState,
}

impl EntrySurface {
    pub fn new(variant: SurfaceVariant) -> Self {
        Self::with_draft(variant, TransactionDraft::new())
    }

    pub fn with_draft(variant: SurfaceVariant, draft: TransactionDraft) -> Self {
        Self {
            variant,
            draft,
            phase: EntryPhase::default(),
            errors: ValidationErrors::default(),
            focused: variant.fields()[0],
            in_flight: None,
            saving: ThrobberState::default(),
        }
    }

    pub fn page() -> Self {
        Self::new(SurfaceVariant::Page)
    }

    pub fn dialog() -> Self {
        Self::new(SurfaceVariant::Dialog)
    }

    pub fn focus_next(&mut self, forward: bool) {
        let fields = self.variant.fields();
        let current = fields
            .iter()
            .position(|field| *field == self.focused)
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % fields.len()
        } else {
            (current + fields.len() - 1) % fields.len()
        };
        self.focused = fields[next];
    }

    /// The form is hidden while the error dialog is up.
    pub fn is_form_visible(&self) -> bool {
        self.phase != EntryPhase::ErrorShown
    }

    pub fn is_error_dialog_visible(&self) -> bool {
        self.phase == EntryPhase::ErrorShown
    }

    pub fn is_awaiting_result(&self) -> bool {
        self.phase == EntryPhase::Submitting
    }

    pub fn show_errors(&mut self) {
        self.phase = EntryPhase::ErrorShown;
    }

    /// Closes the error dialog. This is the only way out of it.
    pub fn dismiss_errors(&mut self) {
        if self.phase == EntryPhase::ErrorShown {
            self.phase = EntryPhase::Editing;
        }
    }

    pub fn toggle_errors(&mut self) {
        if self.is_error_dialog_visible() {
            self.dismiss_errors();
        } else {
            self.show_errors();
        }
    }
}
