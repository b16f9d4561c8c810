//! Async Operations
//!
//! Background processing for commands whose handlers suspend (`ls` and
//! `cat`). The loop runs on the app's tokio runtime for the lifetime of the
//! window.
//!
//! ```text
//! ┌──────────────────┐          ┌──────────────────┐
//! │    UI Thread     │          │  Background Task │
//! │   (CrtTermApp)   │          │ (async_ops loop) │
//! │                  │          │                  │
//! │  async_tx ─────────────────▶│  request_rx      │
//! │                  │          │                  │
//! │  async_rx ◀─────────────────│  result_tx       │
//! └──────────────────┘          └──────────────────┘
//! ```
//!
//! Each command gets its own task, so results arrive in completion order.
//! There is no cancellation and no timeout.

use eframe::egui;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use super::{AsyncRequest, AsyncResult};

/// Run the async operation processing loop
pub async fn async_operation_loop(
    request_rx: &mut mpsc::UnboundedReceiver<AsyncRequest>,
    result_tx: mpsc::UnboundedSender<AsyncResult>,
    repaint: egui::Context,
) {
    info!("Starting async operation loop");

    while let Some(request) = request_rx.recv().await {
        match request {
            AsyncRequest::RunCommand(pending) => {
                debug!(id = pending.id(), verb = pending.verb(), "awaiting command");
                let result_tx = result_tx.clone();
                let repaint = repaint.clone();

                tokio::spawn(async move {
                    let completed = pending.wait().await;
                    let id = completed.id;
                    if result_tx
                        .send(AsyncResult::CommandCompleted(completed))
                        .is_err()
                    {
                        warn!(id, "UI went away before the command finished");
                        return;
                    }
                    repaint.request_repaint();
                });
            }
        }
    }

    info!("Async operation loop stopped");
}
