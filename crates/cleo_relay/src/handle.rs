use std::io;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use crate::relay::{EmailJsRelay, MailRelay, RelaySettings};
use crate::{FailureKind, RelayError, RelayEvent, TemplateParams};

enum RelayCommand {
    Send { params: TemplateParams },
}

/// Runs relay sends on a background tokio runtime and hands results back to
/// the single-threaded event loop.
pub struct RelayHandle {
    cmd_tx: mpsc::Sender<RelayCommand>,
    event_rx: mpsc::Receiver<RelayEvent>,
}

impl RelayHandle {
    pub fn new(settings: RelaySettings) -> io::Result<Self> {
        Self::with_relay(Arc::new(EmailJsRelay::new(settings)))
    }

    pub fn with_relay(relay: Arc<dyn MailRelay>) -> io::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let relay = relay.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(relay.as_ref(), command, event_tx).await;
                });
            }
        });

        Ok(Self { cmd_tx, event_rx })
    }

    /// Queues a send. Fails with `Unavailable` if the worker thread is gone.
    pub fn send(&self, params: TemplateParams) -> Result<(), RelayError> {
        self.cmd_tx
            .send(RelayCommand::Send { params })
            .map_err(|_| RelayError::new(FailureKind::Unavailable, "relay worker is gone"))
    }

    pub fn try_recv(&self) -> Option<RelayEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<RelayEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    relay: &dyn MailRelay,
    command: RelayCommand,
    event_tx: mpsc::Sender<RelayEvent>,
) {
    match command {
        RelayCommand::Send { params } => {
            let result = relay.send(&params).await;
            let _ = event_tx.send(RelayEvent::Completed { result });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn send_after_worker_exit_is_unavailable() {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (_event_tx, event_rx) = mpsc::channel();
        drop(cmd_rx);
        let handle = RelayHandle { cmd_tx, event_rx };

        let err = handle
            .send(TemplateParams {
                from_name: "Ada Lovelace".to_string(),
                from_email: "ada@example.com".to_string(),
                message: "hi".to_string(),
                to_name: "CLEO Initiative".to_string(),
            })
            .unwrap_err();

        assert_eq!(err.kind, FailureKind::Unavailable);
        assert_eq!(handle.try_recv(), None);
    }
}
