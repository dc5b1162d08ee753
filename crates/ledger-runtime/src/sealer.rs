//! # Background Sealer
//!
//! In deferred mode `register` only stages transactions. This task seals
//! whatever is pending on every tick until told to stop. Mining is CPU
//! bound, so each seal runs on the blocking pool.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use crate::runtime::DocumentLedgerRuntime;

/// Running sealer task.
pub struct SealerHandle {
    shutdown_tx: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl SealerHandle {
    /// Stop the loop after the seal in progress, then flush what is left.
    pub async fn shutdown(self) {
        info!("[sealer] Shutdown requested");
        if let Err(e) = self.shutdown_tx.send(true) {
            error!("[sealer] Failed to send shutdown signal: {}", e);
        }
        if let Err(e) = self.task.await {
            error!("[sealer] Task ended abnormally: {}", e);
        }
    }
}

/// Spawn the sealer if the runtime is configured for deferred sealing.
///
/// Returns `None` in inline mode. Must be called inside a tokio runtime.
pub fn spawn_sealer(runtime: Arc<DocumentLedgerRuntime>) -> Option<SealerHandle> {
    let interval = runtime.config().sealing.interval()?;
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let task = tokio::spawn(run(runtime, interval, shutdown_rx));
    Some(SealerHandle { shutdown_tx, task })
}

async fn run(
    runtime: Arc<DocumentLedgerRuntime>,
    period: Duration,
    mut shutdown_rx: watch::Receiver<bool>,
) {
    info!(interval_ms = period.as_millis() as u64, "[sealer] Started");
    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = ticker.tick() => seal_once(&runtime).await,
            _ = shutdown_rx.changed() => {
                info!("[sealer] Shutdown signal received");
                break;
            }
        }
    }

    // Anything registered before shutdown still gets sealed.
    seal_once(&runtime).await;
    info!("[sealer] Stopped");
}

async fn seal_once(runtime: &Arc<DocumentLedgerRuntime>) {
    let runtime = Arc::clone(runtime);
    match tokio::task::spawn_blocking(move || runtime.seal_now()).await {
        Ok(Ok(Some(block))) => debug!(
            index = block.index,
            transactions = block.transactions.len(),
            "[sealer] Block sealed"
        ),
        Ok(Ok(None)) => {}
        Ok(Err(e)) => error!("[sealer] Seal failed: {}", e),
        Err(e) => error!("[sealer] Seal task panicked: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::{LedgerConfig, SealingMode};
    use shared_types::{DocumentId, RegistrationRequest};

    fn deferred(interval_ms: u64) -> Arc<DocumentLedgerRuntime> {
        let mut config = LedgerConfig::for_testing();
        config.sealing = SealingMode::Deferred { interval_ms };
        Arc::new(DocumentLedgerRuntime::new(config).unwrap())
    }

    fn request(doc: &str) -> RegistrationRequest {
        RegistrationRequest {
            document_id: DocumentId::new(doc),
            file_name: "f.pdf".into(),
            uploader_id: "u".into(),
            linked_case_id: None,
            document_category: "misc".into(),
        }
    }

    #[tokio::test]
    async fn test_inline_mode_has_no_sealer() {
        let rt = Arc::new(DocumentLedgerRuntime::new(LedgerConfig::for_testing()).unwrap());
        assert!(spawn_sealer(rt).is_none());
    }

    #[tokio::test]
    async fn test_sealer_seals_on_interval() {
        let rt = deferred(20);
        let handle = spawn_sealer(Arc::clone(&rt)).unwrap();

        rt.register(b"one", request("a")).unwrap();
        rt.register(b"two", request("b")).unwrap();

        let mut sealed = false;
        for _ in 0..100 {
            if rt.verify_by_bytes(b"two").unwrap().verified {
                sealed = true;
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        handle.shutdown().await;

        assert!(sealed);
        assert!(rt.verify_by_bytes(b"one").unwrap().verified);
        assert_eq!(rt.chain_stats().pending_count, 0);
        assert!(rt.validate_chain());
    }

    #[tokio::test]
    async fn test_shutdown_flushes_pending() {
        let rt = deferred(60_000);
        let handle = spawn_sealer(Arc::clone(&rt)).unwrap();
        // First tick fires immediately; let it pass on an empty pool.
        tokio::time::sleep(Duration::from_millis(20)).await;

        rt.register(b"late", request("a")).unwrap();
        handle.shutdown().await;

        assert!(rt.verify_by_bytes(b"late").unwrap().verified);
    }
}
