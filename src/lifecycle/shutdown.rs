//! Shutdown coordination for the logging subsystem.

use tokio::sync::broadcast;

/// Coordinator for stopping background logging tasks.
///
/// Provides a broadcast channel the rotation monitor subscribes to.
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    /// Create a new shutdown coordinator.
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Subscribe to the shutdown signal.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Trigger the shutdown signal.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

/// Guard tying the logging subsystem to a scope.
///
/// On drop it stops the rotation monitor and flushes the active logger,
/// so every exit path (including error paths) drains the file sink.
pub struct FlushGuard {
    shutdown: Shutdown,
}

impl FlushGuard {
    pub(crate) fn new(shutdown: Shutdown) -> Self {
        Self { shutdown }
    }
}

impl Drop for FlushGuard {
    fn drop(&mut self) {
        self.shutdown.trigger();
        crate::logger::handle::logger().flush();
    }
}
