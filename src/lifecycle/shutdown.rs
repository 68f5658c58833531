//! Shutdown coordination.
//!
//! One broadcast channel fans the shutdown signal out to every worker.
//! Workers stop accepting, finish what they have, and exit; nothing is
//! cancelled mid-request by the shutdown path itself.

use tokio::sync::broadcast;

/// Coordinator for graceful shutdown across the worker set.
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Subscribe a worker to the shutdown signal.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Signal every subscribed worker to drain and exit.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
