use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;

use tokio::sync::mpsc;
use tracing::{error, info};

use orderdesk::client::OrdersClient;
use orderdesk::config::fetch_config;
use orderdesk::mutator::spawn_status_update;
use orderdesk::poller::spawn_poller;
use orderdesk::tls::build_tls_config;
use orderdesk::tui::event::{spawn_input, update};
use orderdesk::tui::{Action, App, Message, TerminalSession, render};
use orderdesk::{OrderDeskError, Result};

/// Redraw cadence for the "refreshed Ns ago" counter.
const TICK_INTERVAL: Duration = Duration::from_secs(1);

#[tokio::main]
async fn main() -> Result<()> {
    let config = fetch_config()?;
    init_logging(&config.log_file)?;

    let tls_config = build_tls_config(config.backend.ca_file.as_deref())?;
    let client = OrdersClient::new(&config.backend.api_url, tls_config)?;

    let (tx, mut rx) = mpsc::unbounded_channel();

    let mut session = TerminalSession::enter()?;
    info!(url = client.base_url(), "dashboard started");

    let input = spawn_input(tx.clone(), TICK_INTERVAL);
    spawn_quit_on_signal(tx.clone());
    let poller = spawn_poller(client.clone(), tx.clone(), config.backend.poll_interval);

    let result = run(&mut session, &client, &tx, &mut rx).await;

    poller.abort();
    input.abort();
    session.restore()?;

    if let Err(ref e) = result {
        error!("dashboard exited with error: {e}");
    }
    info!("dashboard stopped");
    result
}

/// Draws, waits for the next message, applies it, and dispatches any
/// resulting status write, until the app asks to quit.
async fn run(
    session: &mut TerminalSession,
    client: &OrdersClient,
    tx: &mpsc::UnboundedSender<Message>,
    rx: &mut mpsc::UnboundedReceiver<Message>,
) -> Result<()> {
    let mut app = App::new();

    loop {
        session.draw(|frame| render(frame, &app))?;

        let Some(message) = rx.recv().await else {
            break;
        };

        if let Some(Action::ToggleStatus { order_id, status }) = update(&mut app, message) {
            spawn_status_update(client.clone(), tx.clone(), order_id, status);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Sends [`Message::Quit`] on SIGINT delivered outside raw mode (e.g. `kill -INT`).
fn spawn_quit_on_signal(tx: mpsc::UnboundedSender<Message>) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = tx.send(Message::Quit);
        }
    });
}

/// Routes `tracing` output to `path` so it does not tear the alternate screen.
fn init_logging(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| OrderDeskError::Io(format!("failed to open log file {}: {e}", path.display())))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
