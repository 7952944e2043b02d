//! Cooperative cancellation for in-flight requests.

use tokio::sync::watch;

/// Fires the [`AbortSignal`]s handed out by [`AbortController::signal`].
#[derive(Debug)]
pub struct AbortController {
    tx: watch::Sender<bool>,
}

/// Observes an [`AbortController`]. Cheap to clone; every clone sees the same abort.
#[derive(Debug, Clone)]
pub struct AbortSignal {
    rx: watch::Receiver<bool>,
}

impl AbortController {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self { tx }
    }

    pub fn signal(&self) -> AbortSignal {
        AbortSignal {
            rx: self.tx.subscribe(),
        }
    }

    /// Fire the signal. Calling it again has no further effect.
    pub fn abort(&self) {
        self.tx.send_replace(true);
    }
}

impl Default for AbortController {
    fn default() -> Self {
        Self::new()
    }
}

impl AbortSignal {
    pub fn is_aborted(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolves once the controller fires.
    ///
    /// Never resolves if the controller is dropped without aborting.
    pub async fn aborted(&self) {
        let mut rx = self.rx.clone();
        loop {
            if *rx.borrow_and_update() {
                return;
            }
            if rx.changed().await.is_err() {
                std::future::pending::<()>().await;
            }
        }
    }
}
