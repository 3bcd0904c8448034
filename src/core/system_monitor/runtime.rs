//! Tokio runtime that keeps metrics collection off the render path.
//!
//! The render loop asks for a snapshot once per tick; collection runs on the
//! blocking pool and the caller waits for it at most `poll_timeout`.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::runtime::Runtime;
use tokio::task::JoinHandle;

use super::collector::MetricsProvider;
use super::metrics::MetricsSnapshot;

/// Bounded-latency front end for a [`MetricsProvider`].
pub struct SnapshotPoller {
    provider: Arc<Mutex<Box<dyn MetricsProvider>>>,
    /// Collection started by an earlier poll that has not finished yet
    in_flight: Option<JoinHandle<MetricsSnapshot>>,
    poll_timeout: Duration,
    runtime: Option<Runtime>,
}

impl SnapshotPoller {
    pub fn new(provider: Box<dyn MetricsProvider>, poll_timeout: Duration) -> std::io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_time()
            .thread_name("metrics-worker")
            .build()?;

        Ok(Self {
            provider: Arc::new(Mutex::new(provider)),
            in_flight: None,
            poll_timeout,
            runtime: Some(runtime),
        })
    }

    /// Collect a fresh snapshot, waiting at most `poll_timeout`.
    ///
    /// Returns `None` when collection timed out or failed; the caller keeps
    /// its previous snapshot. A timed-out collection is resumed by the next
    /// poll rather than started again.
    pub fn poll(&mut self) -> Option<MetricsSnapshot> {
        let runtime = self.runtime.as_ref()?;

        let mut handle = match self.in_flight.take() {
            Some(handle) => handle,
            None => {
                let provider = Arc::clone(&self.provider);
                runtime.spawn_blocking(move || provider.lock().snapshot())
            }
        };

        let poll_timeout = self.poll_timeout;
        let outcome = runtime.block_on(async { tokio::time::timeout(poll_timeout, &mut handle).await });

        match outcome {
            Ok(Ok(snapshot)) => Some(snapshot),
            Ok(Err(e)) => {
                log::error!("Falha na coleta de métricas: {}", e);
                None
            }
            Err(_) => {
                log::warn!(
                    "Coleta de métricas excedeu {} ms, mantendo dados anteriores",
                    poll_timeout.as_millis()
                );
                self.in_flight = Some(handle);
                None
            }
        }
    }

    /// Forget a timed-out collection so the next poll starts a new one.
    ///
    /// The detached task still runs to completion on the blocking pool; its
    /// result is never returned.
    pub fn discard_pending(&mut self) {
        if self.in_flight.take().is_some() {
            log::debug!("Descartando coleta de métricas pendente");
        }
    }

    pub fn has_pending(&self) -> bool {
        self.in_flight.is_some()
    }
}

impl Drop for SnapshotPoller {
    fn drop(&mut self) {
        // A provider stuck in a blocking call must not hold up process exit
        if let Some(runtime) = self.runtime.take() {
            runtime.shutdown_background();
        }
    }
}
