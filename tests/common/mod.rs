//! Shared test utilities: app construction, key helpers, rendering.

#![allow(dead_code, unused_imports)]

pub mod mock_account;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use parking_lot::Mutex;
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use signup::api::{AccountClient, ApiError, User};
use signup::config::Config;
use signup::ui::app::{App, Route};
use signup::ui::events::{AppEvent, EventHandler};
use signup::ui::input::handle_key;
use signup::ui::render::draw;
use signup::ui::worker::run_signup_worker;
use std::sync::Arc;
use std::time::{Duration, Instant};

pub const USERNAME: &str = "muthana";
pub const EMAIL: &str = "muthana@gmail.com";
pub const PASSWORD: &str = "Gf9$Y9FJu$Tacv5";

pub type Navigations = Arc<Mutex<Vec<Route>>>;

/// App wired to a real submission worker talking to `config.api.base_url`.
pub struct Harness {
    pub app: App,
    pub events: EventHandler,
    pub navigations: Navigations,
}

pub fn test_config(base_url: &str) -> Config {
    let mut config = Config::default();
    config.api.base_url = base_url.to_string();
    config.api.timeout_seconds = 5;
    config.api.connect_timeout_seconds = 1;
    config.navigation.redirect_delay_ms = None;
    config
}

/// App with no worker attached, for pure form interaction.
pub fn offline_app() -> App {
    App::new(&test_config("http://127.0.0.1:9/api"))
}

/// Must be called inside a multi-threaded tokio runtime: the test body
/// blocks on the event channel while the worker runs on the pool.
pub fn harness(config: Config) -> Harness {
    let events = EventHandler::detached();
    let (command_tx, command_rx) = tokio::sync::mpsc::channel(8);
    let client = AccountClient::new(&config.api).expect("client builds");
    tokio::spawn(run_signup_worker(client, command_rx, events.sender()));

    let mut app = App::new(&config);
    app.set_command_sender(command_tx);

    let navigations: Navigations = Arc::new(Mutex::new(Vec::new()));
    let recorder = navigations.clone();
    app.set_navigation_hook(Arc::new(move |route: Route| recorder.lock().push(route)));

    Harness {
        app,
        events,
        navigations,
    }
}

impl Harness {
    /// Block until the worker reports back, then hand the outcome to the app.
    pub fn settle(&mut self) -> u64 {
        let (generation, outcome) = wait_for_signup(&self.events);
        self.app.on_signup_finished(generation, outcome);
        generation
    }
}

pub fn wait_for_signup(events: &EventHandler) -> (u64, Result<User, ApiError>) {
    let deadline = Instant::now() + Duration::from_secs(10);
    while Instant::now() < deadline {
        if let Ok(AppEvent::SignUpFinished {
            generation,
            outcome,
        }) = events.next(Duration::from_millis(100))
        {
            return (generation, outcome);
        }
    }
    panic!("sign-up worker did not answer in time");
}

pub fn press(app: &mut App, code: KeyCode) {
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
}

pub fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        press(app, KeyCode::Char(ch));
    }
}

/// Fill all three inputs from the top, leaving focus on "Sign Up".
pub fn fill_form(app: &mut App, username: &str, email: &str, password: &str) {
    type_text(app, username);
    press(app, KeyCode::Tab);
    type_text(app, email);
    press(app, KeyCode::Tab);
    type_text(app, password);
    press(app, KeyCode::Tab);
}

/// Draw one frame and return the screen as text, one line per row.
pub fn render(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
    terminal.draw(|frame| draw(frame, app)).unwrap();
    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
