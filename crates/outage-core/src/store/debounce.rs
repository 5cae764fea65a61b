//! Optional debounced-save wrapper.
//!
//! Rapid bursts of edits (a drag that fires several updates, a form that
//! patches field by field) do not each need their own storage write. The
//! [`SaveDebouncer`] coalesces them: callers mark the state dirty after
//! every mutation, and a single flush runs once no new mark has arrived
//! for the configured idle window.
//!
//! This stays outside the store's mutation path by design: the store
//! persists eagerly on its own, and an application that prefers batching
//! wires the debouncer around a shared store (for example an
//! `Arc<Mutex<StepStore>>` whose flush closure locks and calls
//! [`persist`](super::StepStore::persist)).

use std::future::Future;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Coalesces dirty-marks into one flush per idle window.
pub struct SaveDebouncer {
    tx: mpsc::UnboundedSender<()>,
    worker: JoinHandle<()>,
}

impl SaveDebouncer {
    /// Spawns the debouncer worker. `flush` runs after every burst of
    /// [`mark_dirty`](Self::mark_dirty) calls once `idle` elapses without
    /// a new one, and once more on shutdown if marks are still pending.
    pub fn new<F, Fut>(idle: Duration, mut flush: F) -> Self
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send,
    {
        let (tx, mut rx) = mpsc::unbounded_channel::<()>();
        let worker = tokio::spawn(async move {
            while rx.recv().await.is_some() {
                loop {
                    match tokio::time::timeout(idle, rx.recv()).await {
                        // Another mark arrived, restart the idle timer
                        Ok(Some(())) => {}
                        // Channel closed with marks pending: final flush
                        Ok(None) => {
                            flush().await;
                            return;
                        }
                        // Idle window elapsed
                        Err(_) => {
                            flush().await;
                            break;
                        }
                    }
                }
            }
        });

        Self { tx, worker }
    }

    /// Records that the protocol changed; the flush runs after the idle
    /// window. Cheap to call from any context.
    pub fn mark_dirty(&self) {
        // Send only fails when the worker is gone, at which point there is
        // nothing left to coalesce.
        let _ = self.tx.send(());
    }

    /// Flushes any pending marks and stops the worker.
    pub async fn shutdown(self) {
        drop(self.tx);
        let _ = self.worker.await;
    }
}
