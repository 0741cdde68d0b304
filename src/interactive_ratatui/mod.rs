use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyModifiers,
        MouseButton, MouseEvent, MouseEventKind, poll,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use crate::GalleryOptions;
use crate::api::{ClientConfig, ImageSource, PixabayClient};

mod application;
pub mod constants;
pub mod domain;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_support;

use self::application::image_service::ImageService;
use self::constants::{DOUBLE_CTRL_C_TIMEOUT_SECS, EVENT_POLL_INTERVAL_MS, EXIT_PROMPT_TEXT};
use self::domain::models::{FetchRequest, FetchResponse, Mode};
use self::ui::{
    app_state::AppState,
    commands::Command,
    components::Component,
    events::Message,
    notifications::{Notification, Toasts},
    renderer::Renderer,
};

pub struct InteractiveGallery {
    state: AppState,
    renderer: Renderer,
    image_service: Arc<ImageService>,
    fetch_sender: Option<Sender<FetchRequest>>,
    fetch_receiver: Option<Receiver<FetchResponse>>,
    toasts: Toasts,
    initial_query: Option<String>,
    last_ctrl_c_press: Option<Instant>,
    should_quit: bool,
}

impl InteractiveGallery {
    pub fn new(options: GalleryOptions) -> Result<Self> {
        let config = ClientConfig::new(options.api_key.clone())
            .with_base_url(options.base_url.clone())
            .with_timeout(options.timeout);
        let client = PixabayClient::new(config).context("Failed to build HTTP client")?;

        let mut gallery = Self::with_source(Arc::new(client));
        gallery.initial_query = options.initial_query;
        Ok(gallery)
    }

    /// Build a gallery over any image source.
    pub fn with_source(source: Arc<dyn ImageSource>) -> Self {
        Self {
            state: AppState::new(),
            renderer: Renderer::new(),
            image_service: Arc::new(ImageService::new(source)),
            fetch_sender: None,
            fetch_receiver: None,
            toasts: Toasts::new(),
            initial_query: None,
            last_ctrl_c_press: None,
            should_quit: false,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = self.setup_terminal()?;

        self.start();
        let result = self.run_app(&mut terminal);

        // Dropping the sender ends the worker; a response still in flight is never applied.
        self.stop();
        self.cleanup_terminal(&mut terminal)?;
        result
    }

    fn start(&mut self) {
        let (tx, rx) = self.start_fetch_worker();
        self.fetch_sender = Some(tx);
        self.fetch_receiver = Some(rx);

        if let Some(query) = self.initial_query.take() {
            self.renderer.get_search_bar_mut().set_input(query.clone());
            self.handle_message(Message::SubmitSearch(query));
        }
    }

    fn stop(&mut self) {
        self.fetch_sender = None;
        self.fetch_receiver = None;
    }

    fn setup_terminal(&self) -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    fn cleanup_terminal(&self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        Ok(())
    }

    fn run_app(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|f| {
                self.renderer
                    .render(f, &self.state, self.toasts.current());
            })?;

            self.poll_fetch_results();
            self.tick(Instant::now());

            if poll(Duration::from_millis(EVENT_POLL_INTERVAL_MS))? {
                match event::read()? {
                    Event::Key(key) => self.handle_input(key),
                    Event::Mouse(mouse) => self.handle_mouse(mouse),
                    _ => {}
                }
            }

            if self.should_quit {
                break;
            }
        }
        Ok(())
    }

    /// Apply every response the worker has delivered so far.
    fn poll_fetch_results(&mut self) {
        let mut responses = Vec::new();
        if let Some(receiver) = &self.fetch_receiver {
            while let Ok(response) = receiver.try_recv() {
                responses.push(response);
            }
        }
        for response in responses {
            self.handle_message(Message::FetchCompleted(response));
        }
    }

    fn tick(&mut self, now: Instant) {
        let notifications = self.state.take_notifications();
        self.toasts.extend(notifications, now);
        self.toasts.expire(now);
        self.renderer.tick();

        if let Some(last_press) = self.last_ctrl_c_press {
            if now.duration_since(last_press) >= Duration::from_secs(DOUBLE_CTRL_C_TIMEOUT_SECS) {
                self.last_ctrl_c_press = None;
                if self.state.ui.message.as_deref() == Some(EXIT_PROMPT_TEXT) {
                    self.state.ui.message = None;
                }
            }
        }
    }

    fn handle_input(&mut self, key: KeyEvent) {
        // Global Ctrl+C handling for exit
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            if let Some(last_press) = self.last_ctrl_c_press {
                if last_press.elapsed() < Duration::from_secs(DOUBLE_CTRL_C_TIMEOUT_SECS) {
                    self.handle_message(Message::Quit);
                    return;
                }
            }
            self.last_ctrl_c_press = Some(Instant::now());
            self.state.ui.message = Some(EXIT_PROMPT_TEXT.to_string());
            return;
        }

        if key.code == KeyCode::Char('?') && self.state.mode != Mode::Help {
            self.handle_message(Message::ShowHelp);
            return;
        }

        self.renderer.sync(&self.state);

        let message = match self.state.mode {
            Mode::Gallery => self.handle_gallery_mode_input(key),
            Mode::Modal => self.renderer.get_image_modal_mut().handle_key(key),
            Mode::Help => self.renderer.get_help_dialog_mut().handle_key(key),
        };

        if let Some(msg) = message {
            self.handle_message(msg);
        }
    }

    fn handle_gallery_mode_input(&mut self, key: KeyEvent) -> Option<Message> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('l') => return Some(Message::LoadMore),
                KeyCode::Char('r') => return Some(Message::Retry),
                // Plain Home/End move the search cursor
                KeyCode::Char('p') | KeyCode::Char('n') | KeyCode::Home | KeyCode::End => {
                    return self.renderer.get_image_list_mut().handle_key(key);
                }
                _ => {}
            }
        }

        match key.code {
            KeyCode::Esc => Some(Message::Quit),
            KeyCode::Enter => {
                if self.renderer.get_search_bar_mut().has_pending_submit() {
                    self.renderer.get_search_bar_mut().handle_key(key)
                } else {
                    self.renderer.get_image_list_mut().handle_key(key)
                }
            }
            KeyCode::Up | KeyCode::Down | KeyCode::PageUp | KeyCode::PageDown => {
                self.renderer.get_image_list_mut().handle_key(key)
            }
            _ => self.renderer.get_search_bar_mut().handle_key(key),
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) || self.state.mode != Mode::Gallery {
            return;
        }

        let message = self
            .renderer
            .get_image_list_mut()
            .click_at(mouse.column, mouse.row)
            .or_else(|| {
                self.renderer
                    .get_status_bar()
                    .click_at(mouse.column, mouse.row)
            });

        if let Some(msg) = message {
            self.handle_message(msg);
        }
    }

    fn handle_message(&mut self, message: Message) {
        let command = self.state.update(message);
        self.execute_command(command);
    }

    fn execute_command(&mut self, command: Command) {
        match command {
            Command::None => {}
            Command::FetchPage(tag) => {
                if let Some(sender) = &self.fetch_sender {
                    if sender.send(FetchRequest { tag }).is_err() {
                        warn!("fetch worker is gone");
                    }
                }
            }
            Command::CopyToClipboard(text) => match self.copy_to_clipboard(&text) {
                Ok(()) => self.state.notify(Notification::info("✓ Copied image URL")),
                Err(e) => {
                    warn!(error = %e, "clipboard copy failed");
                    self.state
                        .notify(Notification::info(format!("Failed to copy: {e}")));
                }
            },
            Command::Quit => {
                info!("quitting gallery");
                self.should_quit = true;
            }
        }
    }

    fn start_fetch_worker(&self) -> (Sender<FetchRequest>, Receiver<FetchResponse>) {
        let (request_tx, request_rx) = mpsc::channel::<FetchRequest>();
        let (response_tx, response_rx) = mpsc::channel::<FetchResponse>();
        let image_service = self.image_service.clone();

        thread::spawn(move || {
            while let Ok(request) = request_rx.recv() {
                let request = latest_request(request, &request_rx);
                let response = image_service.fetch(request);
                if response_tx.send(response).is_err() {
                    break;
                }
            }
            debug!("fetch worker stopped");
        });

        (request_tx, response_rx)
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        #[cfg(target_os = "macos")]
        {
            use std::process::Command;
            let mut child = Command::new("pbcopy")
                .stdin(std::process::Stdio::piped())
                .spawn()
                .context("Failed to spawn pbcopy")?;

            if let Some(mut stdin) = child.stdin.take() {
                use std::io::Write;
                stdin
                    .write_all(text.as_bytes())
                    .context("Failed to write to pbcopy")?;
            }

            child.wait().context("Failed to wait for pbcopy")?;
            Ok(())
        }

        #[cfg(target_os = "linux")]
        {
            use std::process::Command;
            let mut child = Command::new("xclip")
                .arg("-selection")
                .arg("clipboard")
                .stdin(std::process::Stdio::piped())
                .spawn()
                .context("Failed to spawn xclip")?;

            if let Some(mut stdin) = child.stdin.take() {
                use std::io::Write;
                stdin
                    .write_all(text.as_bytes())
                    .context("Failed to write to xclip")?;
            }

            child.wait().context("Failed to wait for xclip")?;
            Ok(())
        }

        #[cfg(not(any(target_os = "macos", target_os = "linux")))]
        {
            let _ = text;
            Err(anyhow::anyhow!("Clipboard not supported on this platform"))
        }
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> &AppState {
        &self.state
    }

    #[cfg(test)]
    pub(crate) fn toasts(&self) -> &Toasts {
        &self.toasts
    }

    #[cfg(test)]
    pub(crate) fn should_quit(&self) -> bool {
        self.should_quit
    }

    #[cfg(test)]
    pub(crate) fn set_initial_query(&mut self, query: &str) {
        self.initial_query = Some(query.to_string());
    }

    #[cfg(test)]
    pub(crate) fn start_for_test(&mut self) {
        self.start();
    }

    #[cfg(test)]
    pub(crate) fn stop_for_test(&mut self) {
        self.stop();
    }

    #[cfg(test)]
    pub(crate) fn press(&mut self, key: KeyEvent) {
        self.handle_input(key);
    }

    #[cfg(test)]
    pub(crate) fn click(&mut self, mouse: MouseEvent) {
        self.handle_mouse(mouse);
    }

    #[cfg(test)]
    pub(crate) fn send(&mut self, message: Message) {
        self.handle_message(message);
    }

    #[cfg(test)]
    pub(crate) fn render_to(&mut self, terminal: &mut Terminal<ratatui::backend::TestBackend>) {
        terminal
            .draw(|f| {
                self.renderer
                    .render(f, &self.state, self.toasts.current());
            })
            .unwrap();
    }

    /// Block until one worker response arrives and apply it. Returns false on timeout.
    #[cfg(test)]
    pub(crate) fn wait_for_response(&mut self, timeout: Duration) -> bool {
        let Some(receiver) = &self.fetch_receiver else {
            return false;
        };
        match receiver.recv_timeout(timeout) {
            Ok(response) => {
                self.handle_message(Message::FetchCompleted(response));
                self.tick(Instant::now());
                true
            }
            Err(_) => false,
        }
    }
}

/// Skip requests that a newer one has already superseded.
fn latest_request(first: FetchRequest, pending: &Receiver<FetchRequest>) -> FetchRequest {
    let mut latest = first;
    while let Ok(next) = pending.try_recv() {
        debug!(skipped = %latest.tag, "dropping superseded request");
        latest = next;
    }
    latest
}
