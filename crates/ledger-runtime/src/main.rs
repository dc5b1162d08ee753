//! # Document Ledger
//!
//! Registers the files named on the command line, verifies each one back
//! against the ledger, and prints chain statistics and a certificate per
//! file as JSON.
//!
//! ## Startup Sequence
//!
//! 1. Initialize telemetry (logging + metrics)
//! 2. Load configuration from the environment
//! 3. Validate HMAC secret is not default
//! 4. Build subsystems and mine genesis
//! 5. Start the background sealer (deferred mode only)

use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use ledger_runtime::{spawn_sealer, DocumentLedgerRuntime, LedgerConfig};
use ledger_telemetry::{init_telemetry, TelemetryConfig};
use shared_types::{DocumentId, RegistrationRequest};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    init_telemetry(&TelemetryConfig::from_env()).context("initializing telemetry")?;

    let config = LedgerConfig::from_env().context("loading configuration")?;
    config
        .validate_for_production()
        .context("validating configuration")?;

    let files: Vec<String> = std::env::args().skip(1).collect();
    if files.is_empty() {
        bail!("usage: ledger-runtime <file>...");
    }

    let runtime = Arc::new(
        tokio::task::spawn_blocking(move || DocumentLedgerRuntime::new(config))
            .await
            .context("genesis task")??,
    );
    let sealer = spawn_sealer(Arc::clone(&runtime));

    let uploader = std::env::var("DL_UPLOADER_ID").unwrap_or_else(|_| "cli".to_string());
    let mut registered = Vec::new();
    for file in &files {
        let content = tokio::fs::read(file)
            .await
            .with_context(|| format!("reading {}", file))?;
        let request = request_for(file, &uploader);
        let document_id = request.document_id.clone();

        let rt = Arc::clone(&runtime);
        let outcome = tokio::task::spawn_blocking(move || rt.register(&content, request))
            .await
            .context("register task")?;
        match outcome {
            Ok(outcome) => {
                info!(
                    document_id = %document_id,
                    sealed = outcome.is_sealed(),
                    "Registered {}",
                    file
                );
                registered.push(document_id);
            }
            Err(e) if e.is_recoverable() => warn!("Skipping {}: {}", file, e),
            Err(e) => return Err(e).with_context(|| format!("registering {}", file)),
        }
    }

    if let Some(sealer) = sealer {
        sealer.shutdown().await;
    }

    for file in &files {
        let content = tokio::fs::read(file)
            .await
            .with_context(|| format!("reading {}", file))?;
        let verification = runtime
            .verify_by_bytes(&content)
            .with_context(|| format!("verifying {}", file))?;
        println!("{}", serde_json::to_string_pretty(&verification)?);
    }

    println!("{}", serde_json::to_string_pretty(&runtime.chain_stats())?);
    for document_id in &registered {
        if let Some(certificate) = runtime.generate_certificate(document_id) {
            println!("{}", serde_json::to_string_pretty(&certificate)?);
        }
    }

    Ok(())
}

/// Registration metadata derived from a path.
fn request_for(file: &str, uploader: &str) -> RegistrationRequest {
    let file_name = Path::new(file)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| file.to_string());
    let document_category = Path::new(file)
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_else(|| "unclassified".to_string());

    RegistrationRequest {
        document_id: DocumentId::new(file),
        file_name,
        uploader_id: uploader.to_string(),
        linked_case_id: std::env::var("DL_CASE_ID").ok(),
        document_category,
    }
}
