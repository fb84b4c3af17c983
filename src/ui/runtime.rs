use crate::api::AccountClient;
use crate::config::ConfigStore;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::ui::worker::run_signup_worker;
use anyhow::Context;
use std::time::Duration;
use tokio::sync::mpsc;

const COMMAND_QUEUE: usize = 8;

pub fn run(config: ConfigStore) -> anyhow::Result<()> {
    let settings = config.get();
    let tick_rate = settings.ui.tick_rate();
    let client = AccountClient::new(&settings.api)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    let (mut terminal, guard) = setup_terminal().context("failed to set up terminal")?;
    let events = EventHandler::new(tick_rate);
    let (command_tx, command_rx) = mpsc::channel(COMMAND_QUEUE);
    runtime.spawn(run_signup_worker(client, command_rx, events.sender()));

    let mut app = App::new(&settings);
    app.set_command_sender(command_tx);
    tracing::info!(endpoint = %app.endpoint(), "Sign-up form mounted");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            // The next draw picks up the new size.
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::SignUpFinished {
                generation,
                outcome,
            }) => app.on_signup_finished(generation, outcome),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    app.request_quit();
    drop(guard);
    runtime.shutdown_timeout(Duration::from_millis(200));
    Ok(())
}
