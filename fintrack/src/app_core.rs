use crate::commands::handlers;
use crate::events::{AppCommand, DataEvent};
use crate::input::KeyEvent;
use crate::state::{reducer, AppState};
use fintrack_session::SessionContext;

/// Side effects of command execution (production = real loader + tasks, test = mock)
pub trait DataEventHandler {
    /// Execute a command with access to mutable state and the session
    fn execute_with_context(
        &mut self,
        command: AppCommand,
        state: &mut AppState,
        session: &SessionContext,
    );
}

/// Application core without terminal dependencies
///
/// Generic over the handler so tests can swap task spawning for recording.
pub struct AppCore<H: DataEventHandler> {
    ui_state: AppState,
    session: SessionContext,
    handler: H,
}

impl<H: DataEventHandler> AppCore<H> {
    pub fn new(handler: H, session: SessionContext) -> Self {
        Self::with_state(handler, session, AppState::new())
    }

    pub fn with_state(handler: H, session: SessionContext, ui_state: AppState) -> Self {
        Self {
            ui_state,
            session,
            handler,
        }
    }

    /// Translate a key press to a command and execute it
    pub fn handle_key(&mut self, event: KeyEvent) {
        if let Some(command) = handlers::handle_key_input(event, &self.ui_state) {
            self.execute(command);
        }
    }

    /// Execute a command directly (startup loads, tests)
    pub fn execute(&mut self, command: AppCommand) {
        self.handler
            .execute_with_context(command, &mut self.ui_state, &self.session);
    }

    /// Fold a background result into state
    pub fn handle_data_event(&mut self, event: DataEvent) {
        reducer::reduce_data_event(&mut self.ui_state, event);
    }

    pub fn state(&self) -> &AppState {
        &self.ui_state
    }

    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.ui_state
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn should_quit(&self) -> bool {
        self.ui_state.should_quit
    }
}
