use crate::events::AppCommand;
use crate::input::{Key, KeyEvent};
use crate::state::*;
use crate::ui::screens::Screen;

/// Map user input (KeyEvent) to AppCommand based on current UI state
/// Returns None if the key should be ignored
pub fn handle_key_input(event: KeyEvent, state: &AppState) -> Option<AppCommand> {
    let key = event.key;

    // Priority 1: An open entry surface (page or dialog) takes every key
    if let Some(surface) = state.entry_surface() {
        return handle_entry_keys(event, surface);
    }

    // Priority 2: Check if we're currently showing the help popup
    if state.help_visible {
        return match key {
            Key::Char('?') | Key::Esc => Some(AppCommand::ToggleHelp),
            Key::Char('q') => Some(AppCommand::Quit),
            _ => None,
        };
    }

    // Handle multi-key sequences
    if let Some(pending) = state.pending_key {
        return match (pending, state.current_screen(), key) {
            // 'g' followed by 'g' -> navigate to top
            ('g', Screen::Logs(..), Key::Char('g')) => Some(AppCommand::ScrollLogsToTop),
            ('g', _, Key::Char('g')) => Some(AppCommand::NavigateToTop),
            // 'g' followed by 'l' -> go to logs
            ('g', _, Key::Char('l')) => Some(AppCommand::NavigateToLogs),
            // 'g' followed by 'a' -> add transaction page
            ('g', _, Key::Char('a')) => Some(AppCommand::OpenAddTransactionPage),
            // Any other key clears the pending key
            _ => Some(AppCommand::ClearPendingKey),
        };
    }

    match (state.current_screen(), key) {
        // Global help toggle
        (_, Key::Char('?')) => Some(AppCommand::ToggleHelp),

        // Global quit command
        (_, Key::Char('q')) => Some(AppCommand::Quit),

        // Multi-key sequence initiator: 'g' sets pending key
        (_, Key::Char('g')) => Some(AppCommand::SetPendingKey('g')),

        (Screen::Logs(..), Key::Char('G')) => Some(AppCommand::ScrollLogsToBottom),
        (_, Key::Char('G')) => Some(AppCommand::NavigateToBottom),

        // Global back navigation (left/h/esc)
        (_, Key::Left | Key::Char('h') | Key::Esc) => Some(AppCommand::NavigateBack),

        // Transactions screen
        (Screen::Transactions(..), Key::Up | Key::Char('k')) => Some(AppCommand::SelectPrevious),
        (Screen::Transactions(..), Key::Down | Key::Char('j')) => Some(AppCommand::SelectNext),
        (Screen::Transactions(..), Key::Char('r')) => Some(AppCommand::LoadTransactions),
        (Screen::Transactions(..), Key::Char('n')) => Some(AppCommand::OpenAddTransactionDialog),
        (Screen::Transactions(..), Key::Char('N')) => Some(AppCommand::OpenAddTransactionPage),

        // Logs screen
        (Screen::Logs(..), Key::Up | Key::Char('k')) => Some(AppCommand::ScrollLogsUp),
        (Screen::Logs(..), Key::Down | Key::Char('j')) => Some(AppCommand::ScrollLogsDown),
        (Screen::Logs(..), Key::PageUp) => Some(AppCommand::ScrollLogsPageUp),
        (Screen::Logs(..), Key::PageDown) => Some(AppCommand::ScrollLogsPageDown),

        // Ignore other keys
        _ => None,
    }
}

/// Handle keyboard input while a transaction entry surface is open
fn handle_entry_keys(event: KeyEvent, surface: &EntrySurface) -> Option<AppCommand> {
    let key = event.key;

    match surface.phase {
        // OK is the only way out of the error dialog
        EntryPhase::ErrorShown => {
            return match key {
                Key::Enter | Key::Char('o') | Key::Char('O') => Some(AppCommand::DismissErrorDialog),
                _ => None,
            };
        }
        EntryPhase::Submitting | EntryPhase::Done => return None,
        EntryPhase::Editing => {}
    }

    // Ctrl+L to clear current field
    if event.modifiers.ctrl && matches!(key, Key::Char('l')) {
        return Some(AppCommand::ClearFormField);
    }

    let field = surface.focused;
    match key {
        Key::Enter => Some(AppCommand::SubmitTransactionForm),

        // Escape to cancel and leave the surface
        Key::Esc => match surface.variant {
            SurfaceVariant::Page => Some(AppCommand::NavigateBack),
            SurfaceVariant::Dialog => Some(AppCommand::CloseAddTransactionDialog),
        },

        Key::Tab => Some(AppCommand::NavigateFormField { forward: true }),
        Key::BackTab => Some(AppCommand::NavigateFormField { forward: false }),

        // Dropdowns cycle, the date steps
        Key::Down if field.is_dropdown() => {
            Some(AppCommand::CycleFormFieldOption { forward: true })
        }
        Key::Up if field.is_dropdown() => {
            Some(AppCommand::CycleFormFieldOption { forward: false })
        }
        Key::Up if field == DraftField::Date => Some(AppCommand::StepFormDate { days: 1 }),
        Key::Down if field == DraftField::Date => Some(AppCommand::StepFormDate { days: -1 }),
        Key::PageUp if field == DraftField::Date => Some(AppCommand::StepFormMonth { months: 1 }),
        Key::PageDown if field == DraftField::Date => {
            Some(AppCommand::StepFormMonth { months: -1 })
        }

        Key::Backspace if field.is_text() => Some(AppCommand::DeleteFormFieldChar),
        Key::Char(c) if field.is_text() && !event.modifiers.ctrl => {
            Some(AppCommand::AppendFormFieldChar(c))
        }

        // Ignore other keys
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing_state() -> AppState {
        AppState::new()
    }

    fn dialog_state() -> AppState {
        let mut state = AppState::new();
        if let Screen::Transactions(transactions_state) = state.current_screen_mut() {
            transactions_state.add_dialog = Some(EntrySurface::dialog());
        }
        state
    }

    fn page_state() -> AppState {
        let mut state = AppState::new();
        state.navigate_to(Screen::AddTransaction(EntrySurface::page()));
        state
    }

    fn with_phase(mut state: AppState, phase: EntryPhase) -> AppState {
        if let Some(surface) = state.entry_surface_mut() {
            surface.phase = phase;
        }
        state
    }

    fn press(state: &AppState, key: Key) -> Option<AppCommand> {
        handle_key_input(KeyEvent::new(key), state)
    }

    // ============================================================================
    // Global Commands
    // ============================================================================

    #[test]
    fn test_quit_command() {
        assert_eq!(press(&listing_state(), Key::Char('q')), Some(AppCommand::Quit));
    }

    #[test]
    fn test_help_visible_blocks_other_commands() {
        let mut state = listing_state();
        state.help_visible = true;

        assert_eq!(press(&state, Key::Char('j')), None);
        assert_eq!(press(&state, Key::Char('n')), None);
        assert_eq!(press(&state, Key::Esc), Some(AppCommand::ToggleHelp));
        assert_eq!(press(&state, Key::Char('?')), Some(AppCommand::ToggleHelp));
    }

    // ============================================================================
    // Multi-key Sequences
    // ============================================================================

    #[test]
    fn test_g_sequences() {
        let mut state = listing_state();
        assert_eq!(press(&state, Key::Char('g')), Some(AppCommand::SetPendingKey('g')));

        state.pending_key = Some('g');
        assert_eq!(press(&state, Key::Char('g')), Some(AppCommand::NavigateToTop));
        assert_eq!(press(&state, Key::Char('l')), Some(AppCommand::NavigateToLogs));
        assert_eq!(
            press(&state, Key::Char('a')),
            Some(AppCommand::OpenAddTransactionPage)
        );
        assert_eq!(press(&state, Key::Char('x')), Some(AppCommand::ClearPendingKey));
    }

    // ============================================================================
    // Transactions Screen
    // ============================================================================

    #[test]
    fn test_listing_opens_entry_surfaces() {
        let state = listing_state();
        assert_eq!(
            press(&state, Key::Char('n')),
            Some(AppCommand::OpenAddTransactionDialog)
        );
        assert_eq!(
            press(&state, Key::Char('N')),
            Some(AppCommand::OpenAddTransactionPage)
        );
        assert_eq!(press(&state, Key::Char('r')), Some(AppCommand::LoadTransactions));
    }

    // ============================================================================
    // Entry Surfaces
    // ============================================================================

    #[test]
    fn test_entry_surface_captures_global_keys() {
        let state = page_state();
        // Type dropdown is focused, plain chars do nothing
        assert_eq!(press(&state, Key::Char('q')), None);
        assert_eq!(press(&state, Key::Char('?')), None);
    }

    #[test]
    fn test_text_field_accepts_chars() {
        let mut state = page_state();
        if let Some(surface) = state.entry_surface_mut() {
            surface.focused = DraftField::Detail;
        }

        assert_eq!(
            press(&state, Key::Char('q')),
            Some(AppCommand::AppendFormFieldChar('q'))
        );
        assert_eq!(press(&state, Key::Backspace), Some(AppCommand::DeleteFormFieldChar));
        assert_eq!(
            handle_key_input(KeyEvent::with_ctrl(Key::Char('l')), &state),
            Some(AppCommand::ClearFormField)
        );
    }

    #[test]
    fn test_dropdown_and_date_keys() {
        let state = dialog_state();
        // Date is focused first in the dialog
        assert_eq!(press(&state, Key::Up), Some(AppCommand::StepFormDate { days: 1 }));
        assert_eq!(
            press(&state, Key::PageDown),
            Some(AppCommand::StepFormMonth { months: -1 })
        );

        let state = page_state();
        assert_eq!(
            press(&state, Key::Down),
            Some(AppCommand::CycleFormFieldOption { forward: true })
        );
        assert_eq!(press(&state, Key::PageUp), None);
    }

    #[test]
    fn test_esc_depends_on_variant() {
        assert_eq!(press(&page_state(), Key::Esc), Some(AppCommand::NavigateBack));
        assert_eq!(
            press(&dialog_state(), Key::Esc),
            Some(AppCommand::CloseAddTransactionDialog)
        );
    }

    #[test]
    fn test_error_dialog_only_dismissed_by_ok() {
        let state = with_phase(dialog_state(), EntryPhase::ErrorShown);

        assert_eq!(press(&state, Key::Esc), None);
        assert_eq!(press(&state, Key::Tab), None);
        assert_eq!(press(&state, Key::Char('q')), None);
        assert_eq!(press(&state, Key::Enter), Some(AppCommand::DismissErrorDialog));
    }

    #[test]
    fn test_submitting_page_ignores_input() {
        let state = with_phase(page_state(), EntryPhase::Submitting);

        assert_eq!(press(&state, Key::Enter), None);
        assert_eq!(press(&state, Key::Esc), None);
    }
}
