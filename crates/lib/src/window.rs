//! Robot window handle: the host delivers messages through it to the
//! installed receive handler.
//!
//! The handle is owned by the embedding host and lives for the whole run;
//! at most one handler is installed at a time, and installing another one
//! replaces the previous handler.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Receives messages delivered by the simulation host.
#[async_trait]
pub trait ReceiveHandler: Send + Sync {
    /// Called once per inbound message with the raw text and the sending robot's name.
    async fn receive(&self, message: &str, robot: &str);
}

/// Handle to a host window. The host calls `receive` once per message, in
/// delivery order; whichever handler is installed at that moment gets it.
pub struct RobotWindow {
    handler: RwLock<Option<Arc<dyn ReceiveHandler>>>,
}

impl Default for RobotWindow {
    fn default() -> Self {
        Self::new()
    }
}

impl RobotWindow {
    pub fn new() -> Self {
        Self {
            handler: RwLock::new(None),
        }
    }

    /// Install the receive handler. Replaces any previously installed handler.
    pub async fn set_receive(&self, handler: Arc<dyn ReceiveHandler>) {
        let mut g = self.handler.write().await;
        if g.replace(handler).is_some() {
            log::debug!("window: receive handler replaced");
        }
    }

    /// Deliver one message from the host to the installed handler.
    /// Messages arriving before a handler is installed are dropped.
    pub async fn receive(&self, message: &str, robot: &str) {
        let handler = self.handler.read().await.clone();
        match handler {
            Some(h) => h.receive(message, robot).await,
            None => log::debug!(
                "window: no receive handler installed, dropping message from '{}'",
                robot
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Counter {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl ReceiveHandler for Counter {
        async fn receive(&self, _message: &str, _robot: &str) {
            self.calls.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[tokio::test]
    async fn delivers_to_installed_handler() {
        let window = RobotWindow::new();
        let handler = Arc::new(Counter {
            calls: AtomicUsize::new(0),
        });
        window.set_receive(handler.clone()).await;
        window.receive("hello", "red").await;
        window.receive("hello", "red").await;
        assert_eq!(handler.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn drops_message_when_no_handler_installed() {
        let window = RobotWindow::new();
        window.receive("hello", "red").await;
    }

    #[tokio::test]
    async fn installing_again_replaces_the_handler() {
        let window = RobotWindow::new();
        let first = Arc::new(Counter {
            calls: AtomicUsize::new(0),
        });
        let second = Arc::new(Counter {
            calls: AtomicUsize::new(0),
        });
        window.set_receive(first.clone()).await;
        window.set_receive(second.clone()).await;
        window.receive("hello", "red").await;
        assert_eq!(first.calls.load(Ordering::SeqCst), 0);
        assert_eq!(second.calls.load(Ordering::SeqCst), 1);
    }
}
