//! Async worker - runs in the Tokio runtime and dispatches webhook tests

use std::sync::mpsc::{Receiver, Sender, TryRecvError};
use std::time::Duration;

use anyhow::Result;
use tokio::time::interval;

use crate::infrastructure::runtime::bridge::{RuntimeCommand, RuntimeEvent};
use crate::infrastructure::webhook::WebhookTester;

/// Run the async worker loop
pub async fn run_async_worker(
    product_name: String,
    cmd_rx: Receiver<RuntimeCommand>,
    evt_tx: Sender<RuntimeEvent>,
) -> Result<()> {
    let tester = WebhookTester::new(product_name)?;

    let mut poll_interval = interval(Duration::from_millis(100));

    loop {
        // Process commands (non-blocking)
        loop {
            match cmd_rx.try_recv() {
                Ok(RuntimeCommand::Shutdown) => return Ok(()),
                Ok(RuntimeCommand::TestWebhook { url }) => {
                    // One POST, no retry. The flag on the UI side clears on
                    // either event.
                    match tester.dispatch(&url).await {
                        Ok(()) => {
                            let _ = evt_tx.send(RuntimeEvent::WebhookSent { url });
                        }
                        Err(err) => {
                            let _ = evt_tx.send(RuntimeEvent::WebhookFailed {
                                message: format!("{err}"),
                            });
                        }
                    }
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => return Ok(()),
            }
        }

        poll_interval.tick().await;
    }
}
