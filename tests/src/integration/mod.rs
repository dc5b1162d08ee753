//! # Cross-Subsystem Integration Tests
//!
//! Everything here drives the ledger through `DocumentLedgerRuntime`, the
//! same façade collaborators use.

pub mod concurrency;
pub mod flows;
pub mod tampering;

use chrono::{TimeZone, Utc};
use ledger_runtime::{DocumentLedgerRuntime, LedgerConfig};
use shared_types::{DocumentId, FixedTimeSource, RegistrationRequest};
use std::sync::Arc;

/// Inline-sealing runtime at difficulty 1 on a pinned clock.
pub fn test_runtime() -> (DocumentLedgerRuntime, Arc<FixedTimeSource>) {
    let clock = Arc::new(FixedTimeSource::new(
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
    ));
    let runtime = DocumentLedgerRuntime::with_clock(LedgerConfig::for_testing(), clock.clone())
        .expect("runtime builds");
    (runtime, clock)
}

/// Registration metadata for `doc`, optionally linked to a case.
pub fn request(doc: &str, case: Option<&str>) -> RegistrationRequest {
    RegistrationRequest {
        document_id: DocumentId::new(doc),
        file_name: format!("{doc}.pdf"),
        uploader_id: "clerk-1".into(),
        linked_case_id: case.map(String::from),
        document_category: "affidavit".into(),
    }
}
