use anyhow::Result;
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use genba_portal::{PortalClient, Settings};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::Stdout;
use std::sync::Arc;
use std::time::Duration;

use crate::background::suggestions::TokioSuggestionDriver;
use crate::background::{data_loader::DataLoader, BackgroundTaskManager};
use crate::commands::{executor, handlers};
use crate::events::{AppCommand, DataEvent};
use crate::input::KeyEvent;
use crate::log_buffer::LogBuffer;
use crate::logging::init_logging_with_buffer;
use crate::state::{reducer, AppState};
use crate::ui::screens::Screen;

const LOG_CAPACITY: usize = 5000;
const TICK: Duration = Duration::from_millis(100);

type Term = Terminal<CrosstermBackend<Stdout>>;

pub struct App {
    settings: Settings,
    client: PortalClient,
}

/// Everything a command may touch besides the state itself
struct Effects {
    tasks: BackgroundTaskManager,
    loader: DataLoader,
    driver: TokioSuggestionDriver,
}

impl Effects {
    fn run(&mut self, state: &mut AppState, command: AppCommand) {
        executor::execute_command(
            command,
            state,
            &mut self.tasks,
            &self.loader,
            &mut self.driver,
        );
    }
}

impl App {
    pub fn new(settings: Settings, client: PortalClient) -> Self {
        Self { settings, client }
    }

    pub async fn run(&self) -> Result<()> {
        let log_buffer = LogBuffer::new(LOG_CAPACITY);
        let log_path = init_logging_with_buffer(log_buffer.clone())?;
        tracing::info!(
            server_url = %self.settings.server_url,
            log = %log_path.display(),
            "genba starting"
        );

        let (data_tx, mut data_rx) = tokio::sync::mpsc::unbounded_channel::<DataEvent>();
        let mut state = AppState::new(self.settings.debounce());
        let mut effects = Effects {
            tasks: BackgroundTaskManager::new(),
            loader: DataLoader::new(self.client.clone(), data_tx.clone()),
            driver: TokioSuggestionDriver::new(Arc::new(self.client.clone()), data_tx),
        };

        let mut terminal = enter_terminal()?;
        let mut keys = EventStream::new();
        let mut ticks = tokio::time::interval(TICK);

        effects.run(&mut state, AppCommand::LoadVendors);

        while !state.should_quit {
            if let Screen::Logs(logs) = state.current_screen_mut() {
                logs.total_entries = log_buffer.len();
            }
            terminal.draw(|f| crate::ui::render_app(f, &state, &log_buffer))?;

            tokio::select! {
                _ = ticks.tick() => {
                    if let Some(throbber) = state.loading_state() {
                        throbber.calc_next();
                    }
                }
                Some(Ok(Event::Key(raw))) = keys.next() => {
                    if raw.kind != KeyEventKind::Press {
                        continue;
                    }
                    // Logging on the logs screen would scroll the view under the reader
                    let quiet = matches!(state.current_screen(), Screen::Logs(_));
                    let command = KeyEvent::from_terminal(raw)
                        .and_then(|key| handlers::handle_key_input(key, &state));
                    if let Some(command) = command {
                        if !quiet {
                            tracing::debug!(?command, "key command");
                        }
                        effects.run(&mut state, command);
                    }
                }
                Some(event) = data_rx.recv() => {
                    tracing::trace!(?event, "data event");
                    if let Some(command) = reducer::reduce_data_event(&mut state, event) {
                        effects.run(&mut state, command);
                    }
                }
            }
        }

        tracing::info!("Quit requested, shutting down");
        state.slip.suggestions.teardown();
        effects.tasks.cancel_all();

        leave_terminal(terminal)?;
        Ok(())
    }
}

fn enter_terminal() -> Result<Term, std::io::Error> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

fn leave_terminal(mut terminal: Term) -> Result<(), std::io::Error> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()
}
