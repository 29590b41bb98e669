use fintrack::events::{DataEvent, Effect};
use fintrack::input::{Key, KeyEvent};
use fintrack::state::validators::{
    AMOUNT_REQUIRED, AMOUNT_TOO_LARGE, CATEGORY_REQUIRED, DETAIL_REQUIRED, TYPE_REQUIRED,
};
use fintrack::state::{DraftField, EntryPhase, SurfaceVariant, TransactionsState};
use fintrack::testing::TestApp;
use fintrack::ui::screens::Screen;
use fintrack_api::endpoints::transactions::Transaction;
use fintrack_api::endpoints::Milliunits;

fn listing() -> std::mem::Discriminant<Screen> {
    std::mem::discriminant(&Screen::Transactions(Box::<TransactionsState>::default()))
}

fn is_add_page(app: &TestApp) -> bool {
    matches!(app.state().current_screen(), Screen::AddTransaction(_))
}

fn stored_lunch() -> Transaction {
    Transaction {
        id: uuid::Uuid::new_v4(),
        date: None,
        category: "Food".to_string(),
        kind: "Expense".to_string(),
        detail: "Lunch".to_string(),
        amount: Milliunits::from(12_000),
    }
}

/// Fill the focused-from-Type form: Expense / Food / Lunch / `amount`
fn fill_from_type(app: &mut TestApp, amount: &str) {
    // Select type -> Income -> Expense
    app.send_keys(&[Key::Down, Key::Down, Key::Tab]);
    // Select category -> Food
    app.send_keys(&[Key::Down, Key::Tab]);
    app.type_text("Lunch");
    app.send_key(Key::Tab);
    app.type_text(amount);
}

fn open_dialog_and_fill(app: &mut TestApp, amount: &str) {
    app.send_key(Key::Char('n'));
    // Date is focused first in the dialog
    app.send_key(Key::Tab);
    fill_from_type(app, amount);
}

fn open_page_and_fill(app: &mut TestApp, amount: &str) {
    app.send_key(Key::Char('N'));
    fill_from_type(app, amount);
}

#[test]
fn test_quit_flow() {
    let mut app = TestApp::new();
    app.assert_not_quit();

    app.send_key(Key::Char('q'));

    app.assert_should_quit();
}

#[test]
fn test_help_toggle() {
    let mut app = TestApp::new();
    assert!(!app.state().help_visible);

    app.send_key(Key::Char('?'));
    assert!(app.state().help_visible);

    app.send_key(Key::Esc);
    assert!(!app.state().help_visible);
}

#[test]
fn test_refresh_requests_load() {
    let mut app = TestApp::new();

    app.send_key(Key::Char('r'));

    assert_eq!(app.effects(), &[Effect::LoadTransactions]);
}

// ============================================================================
// Dialog variant
// ============================================================================

#[test]
fn test_valid_dialog_submission_dispatches_once_and_closes() {
    let mut app = TestApp::new();
    open_dialog_and_fill(&mut app, "12");
    assert_eq!(app.entry_surface().map(|s| s.draft.detail.as_str()), Some("Lunch"));

    app.send_key(Key::Enter);

    let dispatched = app.dispatched();
    assert_eq!(dispatched.len(), 1);
    let payload = &dispatched[0].payload;
    assert_eq!(payload.kind, "Expense");
    assert_eq!(payload.category, "Food");
    assert_eq!(payload.detail, "Lunch");
    assert_eq!(payload.amount, Milliunits::from(12_000));
    assert!(payload.date.is_some());
    assert_eq!(dispatched[0].variant, SurfaceVariant::Dialog);

    // Closed immediately, no error dialog
    assert!(app.entry_surface().is_none());
    app.assert_screen_type(listing());
}

#[test]
fn test_empty_submission_shows_all_four_errors() {
    let mut app = TestApp::new();
    app.send_key(Key::Char('n'));

    app.send_key(Key::Enter);

    assert!(app.dispatched().is_empty());
    let surface = app.entry_surface().expect("dialog stays open");
    assert!(surface.is_error_dialog_visible());
    assert!(!surface.is_form_visible());
    assert_eq!(
        surface.errors.messages(),
        vec![TYPE_REQUIRED, CATEGORY_REQUIRED, DETAIL_REQUIRED, AMOUNT_REQUIRED]
    );
}

#[test]
fn test_zero_amount_shows_only_amount_error() {
    let mut app = TestApp::new();
    open_dialog_and_fill(&mut app, "0");

    app.send_key(Key::Enter);

    assert!(app.dispatched().is_empty());
    let surface = app.entry_surface().expect("dialog stays open");
    assert_eq!(surface.errors.messages(), vec![AMOUNT_REQUIRED]);
    assert_eq!(surface.draft.detail, "Lunch");
}

#[test]
fn test_error_dialog_only_closes_with_ok() {
    let mut app = TestApp::new();
    app.send_key(Key::Char('n'));
    app.send_key(Key::Enter);

    app.send_keys(&[Key::Esc, Key::Tab, Key::Char('q'), Key::Backspace]);
    assert!(app.entry_surface().is_some_and(|s| s.is_error_dialog_visible()));
    app.assert_not_quit();

    app.send_key(Key::Enter);
    let surface = app.entry_surface().expect("dialog stays open");
    assert!(!surface.is_error_dialog_visible());
    assert!(surface.is_form_visible());
}

#[test]
fn test_error_dialog_show_then_dismiss_restores_editing() {
    let mut app = TestApp::new();
    app.send_key(Key::Char('N'));
    let before = app.entry_surface().map(|s| s.phase);

    app.send_key(Key::Enter);
    app.send_key(Key::Enter);

    assert_eq!(app.entry_surface().map(|s| s.phase), before);
}

#[test]
fn test_fixing_fields_after_error_allows_submission() {
    let mut app = TestApp::new();
    open_dialog_and_fill(&mut app, "0");
    app.send_key(Key::Enter);
    app.send_key(Key::Enter);

    // Still focused on amount
    app.send_key(Key::Backspace);
    app.type_text("7.5");
    app.send_key(Key::Enter);

    let dispatched = app.dispatched();
    assert_eq!(dispatched.len(), 1);
    assert_eq!(dispatched[0].payload.amount, Milliunits::from(7_500));
}

#[test]
fn test_missing_token_is_silent_no_op() {
    let mut app = TestApp::without_session();
    open_dialog_and_fill(&mut app, "12");

    app.send_key(Key::Enter);

    assert!(app.dispatched().is_empty());
    let surface = app.entry_surface().expect("nothing closed the dialog");
    assert!(!surface.is_error_dialog_visible());
    assert!(surface.errors.is_empty());
    assert_eq!(surface.phase, EntryPhase::Editing);
}

#[test]
fn test_esc_closes_dialog_and_drops_draft() {
    let mut app = TestApp::new();
    open_dialog_and_fill(&mut app, "12");

    app.send_key(Key::Esc);
    assert!(app.entry_surface().is_none());

    app.send_key(Key::Char('n'));
    assert_eq!(app.entry_surface().map(|s| s.draft.detail.as_str()), Some(""));
}

#[test]
fn test_date_stepper_clamped_to_today() {
    let mut app = TestApp::new();
    app.send_key(Key::Char('n'));
    let today = app.entry_surface().map(|s| s.draft.date.clone());

    app.send_key(Key::Up);
    assert_eq!(app.entry_surface().map(|s| s.draft.date.clone()), today);

    app.send_key(Key::Down);
    assert_ne!(app.entry_surface().map(|s| s.draft.date.clone()), today);
}

#[test]
fn test_clear_field_with_ctrl_l() {
    let mut app = TestApp::new();
    open_dialog_and_fill(&mut app, "12");

    app.send_key_event(KeyEvent::with_ctrl(Key::Char('l')));

    let surface = app.entry_surface().expect("dialog open");
    assert_eq!(surface.focused, DraftField::Amount);
    assert_eq!(surface.draft.amount, "");
}

// ============================================================================
// Page variant
// ============================================================================

#[test]
fn test_page_waits_for_store_result_then_returns_to_listing() {
    let mut app = TestApp::new();
    open_page_and_fill(&mut app, "12");

    app.send_key(Key::Enter);

    let dispatched = app.dispatched();
    assert_eq!(dispatched.len(), 1);
    assert_eq!(dispatched[0].variant, SurfaceVariant::Page);
    assert_eq!(dispatched[0].payload.date, None);
    let dispatch_id = dispatched[0].id;
    assert!(is_add_page(&app));
    assert_eq!(app.entry_surface().map(|s| s.phase), Some(EntryPhase::Submitting));

    // Keys are ignored while waiting
    app.send_key(Key::Enter);
    app.send_key(Key::Esc);
    assert_eq!(app.dispatched().len(), 1);
    assert!(is_add_page(&app));

    app.send_data_event(DataEvent::TransactionAdded {
        dispatch_id,
        transaction: stored_lunch(),
    });

    app.assert_screen_type(listing());
    let Screen::Transactions(state) = app.state().current_screen() else {
        panic!("Expected Transactions screen");
    };
    assert_eq!(state.transactions.len(), 1);
    assert!(app.state().last_added.is_some());
}

#[test]
fn test_page_failure_allows_manual_resubmit() {
    let mut app = TestApp::new();
    open_page_and_fill(&mut app, "12");
    app.send_key(Key::Enter);
    let dispatch_id = app.dispatched()[0].id;

    app.send_data_event(DataEvent::TransactionAddFailed {
        dispatch_id,
        error: "500 Internal Server Error".to_string(),
    });

    assert!(is_add_page(&app));
    let surface = app.entry_surface().expect("page still open");
    assert_eq!(surface.phase, EntryPhase::Editing);
    assert!(!surface.is_error_dialog_visible());

    app.send_key(Key::Enter);
    assert_eq!(app.dispatched().len(), 2);
}

#[test]
fn test_dialog_results_do_not_unlock_waiting_page() {
    let mut app = TestApp::new();
    open_dialog_and_fill(&mut app, "5");
    app.send_key(Key::Enter);
    open_page_and_fill(&mut app, "12");
    app.send_key(Key::Enter);

    let dispatched = app.dispatched();
    assert_eq!(dispatched.len(), 2);
    let (dialog, page) = (dispatched[0].id, dispatched[1].id);
    assert_ne!(dialog, page);

    app.send_data_event(DataEvent::TransactionAddFailed {
        dispatch_id: dialog,
        error: "500 Internal Server Error".to_string(),
    });
    assert_eq!(app.entry_surface().map(|s| s.phase), Some(EntryPhase::Submitting));

    app.send_key(Key::Enter);
    assert_eq!(app.dispatched().len(), 2);

    app.send_data_event(DataEvent::TransactionAdded {
        dispatch_id: dialog,
        transaction: stored_lunch(),
    });
    assert!(is_add_page(&app));

    app.send_data_event(DataEvent::TransactionAdded {
        dispatch_id: page,
        transaction: stored_lunch(),
    });
    app.assert_screen_type(listing());
}

#[test]
fn test_huge_amount_opens_error_dialog_instead_of_dispatching() {
    let mut app = TestApp::new();
    open_dialog_and_fill(&mut app, "99999999999999999");

    app.send_key(Key::Enter);

    assert!(app.dispatched().is_empty());
    let surface = app.entry_surface().expect("dialog stays open");
    assert_eq!(surface.errors.messages(), vec![AMOUNT_TOO_LARGE]);
}

#[test]
fn test_page_opened_with_g_a_and_left_with_esc() {
    let mut app = TestApp::new();

    app.send_keys(&[Key::Char('g'), Key::Char('a')]);
    assert!(is_add_page(&app));
    assert_eq!(app.state().pending_key, None);

    app.send_key(Key::Esc);
    app.assert_screen_type(listing());
}

#[test]
fn test_page_missing_token_stays_editing() {
    let mut app = TestApp::without_session();
    open_page_and_fill(&mut app, "12");

    app.send_key(Key::Enter);

    assert!(app.dispatched().is_empty());
    assert!(is_add_page(&app));
    assert_eq!(app.entry_surface().map(|s| s.phase), Some(EntryPhase::Editing));
}

// ============================================================================
// Navigation
// ============================================================================

#[test]
fn test_logs_navigation() {
    let mut app = TestApp::new();

    app.send_keys(&[Key::Char('g'), Key::Char('l')]);
    assert!(matches!(app.state().current_screen(), Screen::Logs(_)));

    app.send_key(Key::Char('h'));
    app.assert_screen_type(listing());
}
