use crate::types::InputMode;
use crate::ui;
use crate::ui::draw;
use crate::{config::Config, state::AppState};
use color_eyre::Result;
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Direction, Layout},
};
use std::sync::{Arc, RwLock};
use std::time::Instant;

#[derive(Debug)]
pub struct App {
    state: Arc<RwLock<AppState>>,
    client: reqwest::Client,
    spinner_index: usize,
    last_tick: Instant,
    event_handler: ui::EventHandler,
    config: Config,
}

impl App {
    pub fn new(config: Config) -> Self {
        let state = AppState::new(&config);

        Self {
            state: Arc::new(RwLock::new(state)),
            client: reqwest::Client::new(),
            spinner_index: 0,
            last_tick: Instant::now(),
            event_handler: ui::EventHandler::new(),
            config,
        }
    }

    pub async fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        tracing::info!("starting event loop");

        // Main UI loop
        while !self.event_handler.should_quit {
            // Update spinner animation
            if self.last_tick.elapsed().as_millis() > 100 {
                self.spinner_index = (self.spinner_index + 1) % 4;
                self.last_tick = Instant::now();
            }

            terminal.draw(|frame| self.draw(frame))?;

            let state = Arc::clone(&self.state);
            self.event_handler
                .handle_events(state, &self.client, self.config.ui.copied_flash_ms)?;
        }

        tracing::info!("quitting");
        Ok(())
    }

    fn draw(&self, frame: &mut Frame) {
        let state = self.state.read().unwrap();

        // Create main layout: Header, Body, Footer
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Body
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let body_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
            .split(main_chunks[1]);

        let right_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),      // Request bar
                Constraint::Percentage(40), // Request tabs
                Constraint::Min(0),         // Response
            ])
            .split(body_chunks[1]);

        draw::render_header(frame, main_chunks[0], &state.auth);
        draw::render_sidebar(frame, body_chunks[0], &state);
        draw::render_request_bar(frame, right_chunks[0], &state, self.spinner_index);
        draw::render_request_panel(frame, right_chunks[1], &state);
        draw::render_response_panel(frame, right_chunks[2], &state);
        draw::render_footer(frame, main_chunks[2], &state);

        // Render modals LAST - after everything else
        match state.input.mode {
            InputMode::EditingBody => draw::render_body_editor_modal(frame, &state),
            InputMode::NamingCollection => draw::render_collection_name_modal(frame, &state),
            InputMode::Authenticating => draw::render_auth_modal(frame, &state),
            InputMode::ConfirmLogout => draw::render_logout_confirmation_modal(frame),
            InputMode::Normal | InputMode::EditingUrl | InputMode::EditingEntry { .. } => {}
        }
    }
}
