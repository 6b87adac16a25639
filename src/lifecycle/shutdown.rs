//! Shutdown coordination between the signal task and the HTTP server.

use tokio::sync::broadcast;

/// One-shot stop signal for the catalog server.
///
/// [`HttpServer::run`](crate::http::HttpServer::run) holds the only receiver
/// and stops accepting connections once it fires, letting in-flight requests
/// finish. `startup::run` triggers it from the OS signal task; the
/// integration tests trigger it directly to stop their server.
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Fire the signal. A server that has already stopped is not an error.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }

    /// Number of live receivers; zero once the server has exited.
    pub fn receiver_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_trigger_reaches_server_receiver() {
        let shutdown = Shutdown::new();
        let mut server = shutdown.subscribe();
        assert_eq!(shutdown.receiver_count(), 1);

        shutdown.trigger();
        assert!(server.recv().await.is_ok());

        drop(server);
        assert_eq!(shutdown.receiver_count(), 0);
    }

    #[test]
    fn test_trigger_after_server_exit() {
        let shutdown = Shutdown::default();
        shutdown.trigger();
        assert_eq!(shutdown.receiver_count(), 0);
    }
}
