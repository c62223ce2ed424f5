//! Backend event loop on a tokio runtime.

use std::sync::Arc;
use std::time::Duration;

use crossbeam_channel::{Receiver, Sender, TryRecvError};
use tokio::runtime::Runtime;
use tracing::{debug, error};

use super::connection::ChatApi;
use super::handlers::handle_backend_action;
use super::BackendConfig;
use crate::protocol::{BackendAction, GuiEvent};

/// How long the loop sleeps when no action is queued.
const IDLE_POLL: Duration = Duration::from_millis(20);

/// Run the backend event loop until the UI drops its action sender.
///
/// Every action runs as its own task, so a slow download never holds up a
/// delete. In-flight tasks are dropped with the runtime on shutdown.
pub fn run_backend<A: ChatApi>(
    api: A,
    config: BackendConfig,
    action_rx: Receiver<BackendAction>,
    event_tx: Sender<GuiEvent>,
) {
    // Create a Tokio runtime for this thread
    let rt = match Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            error!("Failed to create Tokio runtime: {}", e);
            return;
        }
    };

    let api = Arc::new(api);
    let config = Arc::new(config);

    rt.block_on(async move {
        loop {
            match action_rx.try_recv() {
                Ok(action) => {
                    debug!(?action, "backend action");
                    let api = Arc::clone(&api);
                    let config = Arc::clone(&config);
                    let event_tx = event_tx.clone();
                    tokio::spawn(async move {
                        let event = handle_backend_action(api.as_ref(), &config, action).await;
                        // The UI may already be gone
                        let _ = event_tx.send(event);
                    });
                }
                Err(TryRecvError::Empty) => tokio::time::sleep(IDLE_POLL).await,
                Err(TryRecvError::Disconnected) => {
                    debug!("action channel closed, backend stopping");
                    break;
                }
            }
        }
    });
}
