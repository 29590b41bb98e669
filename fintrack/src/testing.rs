use crate::app_core::{AppCore, DataEventHandler};
use crate::commands::executor;
use crate::commands::submission::Dispatch;
use crate::events::{AppCommand, DataEvent, Effect};
use crate::input::{Key, KeyEvent};
use crate::state::{AppState, EntrySurface};
use crate::ui::screens::Screen;
use fintrack_session::SessionContext;

/// Handler for tests: applies commands and records their effects instead of
/// spawning tasks. Results are injected with [`TestApp::send_data_event`].
#[derive(Debug, Default)]
pub struct MockDataHandler {
    pub effects: Vec<Effect>,
}

impl MockDataHandler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataEventHandler for MockDataHandler {
    fn execute_with_context(
        &mut self,
        command: AppCommand,
        state: &mut AppState,
        session: &SessionContext,
    ) {
        if let Some(effect) = executor::apply_command(command, state, session) {
            self.effects.push(effect);
        }
    }
}

pub struct TestApp {
    core: AppCore<MockDataHandler>,
}

impl TestApp {
    /// Test app with a logged-in session
    pub fn new() -> Self {
        Self::with_session(SessionContext::new(
            Some("test-token".to_string()),
            Some("ada@example.com".to_string()),
        ))
    }

    /// Test app whose session carries no token
    pub fn without_session() -> Self {
        Self::with_session(SessionContext::anonymous())
    }

    pub fn with_session(session: SessionContext) -> Self {
        Self {
            core: AppCore::new(MockDataHandler::new(), session),
        }
    }

    pub fn send_key(&mut self, key: Key) {
        self.core.handle_key(KeyEvent::new(key));
    }

    pub fn send_key_event(&mut self, event: KeyEvent) {
        self.core.handle_key(event);
    }

    pub fn send_keys(&mut self, keys: &[Key]) {
        for key in keys {
            self.send_key(*key);
        }
    }

    /// Type text one character at a time
    pub fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.send_key(Key::Char(c));
        }
    }

    /// Inject a data event (simulate a store result)
    pub fn send_data_event(&mut self, event: DataEvent) {
        self.core.handle_data_event(event);
    }

    pub fn state(&self) -> &AppState {
        self.core.state()
    }

    pub fn entry_surface(&self) -> Option<&EntrySurface> {
        self.state().entry_surface()
    }

    /// Every effect produced so far
    pub fn effects(&self) -> &[Effect] {
        &self.core.handler().effects
    }

    /// Add-transaction requests handed to the store so far
    pub fn dispatched(&self) -> Vec<&Dispatch> {
        self.effects()
            .iter()
            .filter_map(|effect| match effect {
                Effect::AddTransaction(dispatch) => Some(dispatch),
                _ => None,
            })
            .collect()
    }

    /// Assert that the app is on a specific screen type
    pub fn assert_screen_type(&self, expected_discriminant: std::mem::Discriminant<Screen>) {
        let current = self.state().current_screen();
        assert_eq!(
            std::mem::discriminant(current),
            expected_discriminant,
            "Expected different screen. Current: {:?}",
            current
        );
    }

    pub fn assert_should_quit(&self) {
        assert!(
            self.core.should_quit(),
            "App should be marked for quit but is not"
        );
    }

    pub fn assert_not_quit(&self) {
        assert!(
            !self.core.should_quit(),
            "App should NOT be marked for quit but is"
        );
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}
