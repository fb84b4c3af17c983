//! Background task that performs sign-up requests for the UI thread.

use crate::api::AccountClient;
use crate::ui::app::UiCommand;
use crate::ui::events::AppEvent;
use std::sync::mpsc;
use tokio::sync::mpsc as tokio_mpsc;

/// Serve commands until the UI drops its sender or stops listening.
pub async fn run_signup_worker(
    client: AccountClient,
    mut commands: tokio_mpsc::Receiver<UiCommand>,
    events: mpsc::Sender<AppEvent>,
) {
    while let Some(command) = commands.recv().await {
        match command {
            UiCommand::SignUp { generation, user } => {
                let outcome = client.register(&user).await;
                if events
                    .send(AppEvent::SignUpFinished {
                        generation,
                        outcome,
                    })
                    .is_err()
                {
                    tracing::debug!(generation, "UI gone, stopping sign-up worker");
                    break;
                }
            }
        }
    }
}
