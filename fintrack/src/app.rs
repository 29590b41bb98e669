use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use fintrack_session::SessionContext;
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::sync::Arc;

use crate::app_core::{AppCore, DataEventHandler};
use crate::background::{data_loader::DataLoader, BackgroundTaskManager};
use crate::commands::{executor, AppCommand};
use crate::events::DataEvent;
use crate::input::KeyEvent;
use crate::log_buffer::LogBuffer;
use crate::settings::Settings;
use crate::state::AppState;
use crate::store::ApiTransactionStore;
use crate::ui::screens::Screen;

/// Runs effects as background tasks against the real store
struct TaskHandler {
    task_manager: BackgroundTaskManager,
    data_loader: DataLoader,
}

impl DataEventHandler for TaskHandler {
    fn execute_with_context(
        &mut self,
        command: AppCommand,
        state: &mut AppState,
        session: &SessionContext,
    ) {
        executor::execute_command(
            command,
            state,
            session,
            &mut self.task_manager,
            &self.data_loader,
        );
    }
}

pub struct App {
    settings: Settings,
    session: SessionContext,
    log_buffer: LogBuffer,
}

impl App {
    pub fn new(settings: Settings, session: SessionContext, log_buffer: LogBuffer) -> Self {
        Self {
            settings,
            session,
            log_buffer,
        }
    }

    pub async fn run(self) -> Result<()> {
        tracing::info!("fintrack starting against {}", self.settings.api_url);
        if !self.session.has_token() {
            tracing::warn!("No session token found, transactions cannot be loaded or added");
        }

        let (data_tx, mut data_rx) = tokio::sync::mpsc::unbounded_channel::<DataEvent>();
        let store = Arc::new(ApiTransactionStore::new(self.settings.api_url.clone()));
        let handler = TaskHandler {
            task_manager: BackgroundTaskManager::new(),
            data_loader: DataLoader::new(store, data_tx),
        };
        let ui_state = AppState::with_options(self.settings.entry_options());
        let mut core = AppCore::with_state(handler, self.session, ui_state);

        let mut terminal = init_terminal()?;
        let mut event_stream = EventStream::new();

        core.execute(AppCommand::LoadTransactions);

        tracing::info!("Entering main event loop");

        let mut interval = tokio::time::interval(std::time::Duration::from_millis(100));
        loop {
            if let Screen::Logs(logs_state) = core.state_mut().current_screen_mut() {
                logs_state.total_entries = self.log_buffer.len();
            }

            terminal.draw(|f| {
                crate::ui::render_app(f, core.state(), &self.log_buffer, core.session());
            })?;

            tokio::select! {
                _ = interval.tick() => {
                    if let Some(throbber_state) = core.state_mut().loading_state() {
                        throbber_state.calc_next();
                    }
                }
                Some(Ok(event)) = event_stream.next() => {
                    if let Event::Key(key) = event {
                        if matches!(key.kind, KeyEventKind::Press) {
                            // Don't log when on logs screen to avoid feedback loop
                            if !matches!(core.state().current_screen(), Screen::Logs(_)) {
                                tracing::debug!("Key press: {:?}", key);
                            }
                            core.handle_key(KeyEvent::from(key));
                        }
                    }
                }
                Some(data_event) = data_rx.recv() => {
                    tracing::debug!("Received data event: {:?}", data_event);
                    core.handle_data_event(data_event);
                }
            }

            if core.should_quit() {
                tracing::info!("Quit requested, exiting event loop");
                break;
            }
        }

        tracing::info!("Cleaning up application");
        drop(core);
        exit_terminal(terminal)?;

        Ok(())
    }
}

fn init_terminal() -> Result<Terminal<CrosstermBackend<std::io::Stdout>>, std::io::Error> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn exit_terminal(
    mut terminal: Terminal<CrosstermBackend<std::io::Stdout>>,
) -> Result<(), std::io::Error> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}
