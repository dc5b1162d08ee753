//! # Verification Status Service
//!
//! Implements [`VerificationStatusApi`] over any [`DocumentStore`]. Each
//! transition runs inside `DocumentStore::update`, so a refused transition
//! never partially applies.

use shared_types::{DocumentId, TimeSource};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::adapters::InMemoryDocumentStore;
use crate::domain::{
    aggregate, BlockchainRecord, CaseOverview, DocumentRecord, OcrOutcome, ReviewDecision,
    VerificationError, VerificationStatus,
};
use crate::ports::{DocumentStore, VerificationStatusApi};

/// Status tracker.
pub struct VerificationStatusService<S: DocumentStore = InMemoryDocumentStore> {
    store: S,
    clock: Arc<dyn TimeSource>,
}

impl VerificationStatusService<InMemoryDocumentStore> {
    /// Tracker backed by an in-memory store.
    pub fn in_memory(clock: Arc<dyn TimeSource>) -> Self {
        Self::new(InMemoryDocumentStore::new(), clock)
    }
}

impl<S: DocumentStore> VerificationStatusService<S> {
    /// Tracker over a caller-supplied store.
    pub fn new(store: S, clock: Arc<dyn TimeSource>) -> Self {
        Self { store, clock }
    }

    /// Underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S: DocumentStore> VerificationStatusApi for VerificationStatusService<S> {
    fn track(&self, document_id: DocumentId, case_id: Option<String>) -> DocumentRecord {
        let record = DocumentRecord::new(document_id, case_id, self.clock.now());
        let stored = self.store.insert_if_absent(record);
        debug!(document_id = %stored.document_id, status = %stored.status, "[dl-03] Tracking document");
        stored
    }

    fn attach_blockchain(
        &self,
        document_id: &DocumentId,
        record: BlockchainRecord,
    ) -> Result<DocumentRecord, VerificationError> {
        let now = self.clock.now();
        let block_index = record.block_index;
        let updated = self.store.update(document_id, &mut |doc| {
            doc.attach_blockchain(record.clone(), now)
        })?;
        debug!(%document_id, block_index, "[dl-03] Blockchain record attached");
        Ok(updated)
    }

    fn record_ocr_outcome(
        &self,
        document_id: &DocumentId,
        outcome: OcrOutcome,
    ) -> Result<VerificationStatus, VerificationError> {
        let now = self.clock.now();
        let updated = self.store.update(document_id, &mut |doc| {
            doc.apply_ocr_outcome(outcome.clone(), now).map(|_| ())
        })?;
        if matches!(outcome, OcrOutcome::Failed { .. }) {
            warn!(%document_id, "[dl-03] OCR failed; document stays pending");
        } else {
            info!(%document_id, status = %updated.status, "[dl-03] OCR processed");
        }
        Ok(updated.status)
    }

    fn assign_case(
        &self,
        document_id: &DocumentId,
        case_id: &str,
    ) -> Result<VerificationStatus, VerificationError> {
        let now = self.clock.now();
        let updated = self
            .store
            .update(document_id, &mut |doc| doc.assign_case(case_id, now).map(|_| ()))?;
        info!(%document_id, case_id, status = %updated.status, "[dl-03] Case assigned");
        Ok(updated.status)
    }

    fn record_review_decision(
        &self,
        document_id: &DocumentId,
        decision: ReviewDecision,
    ) -> Result<VerificationStatus, VerificationError> {
        let now = self.clock.now();
        let result = self.store.update(document_id, &mut |doc| {
            doc.apply_review(decision.clone(), now).map(|_| ())
        });

        match result {
            Ok(updated) => {
                info!(
                    %document_id,
                    reviewer = %decision.reviewer_id,
                    status = %updated.status,
                    "[dl-03] Review decision recorded"
                );
                Ok(updated.status)
            }
            Err(e) => {
                warn!(%document_id, error = %e, "[dl-03] Review decision refused");
                Err(e)
            }
        }
    }

    fn forget(&self, document_id: &DocumentId) -> Option<DocumentRecord> {
        let removed = self.store.remove(document_id);
        if removed.is_some() {
            debug!(%document_id, "[dl-03] Stopped tracking document");
        }
        removed
    }

    fn get(&self, document_id: &DocumentId) -> Option<DocumentRecord> {
        self.store.get(document_id)
    }

    fn case_overview(&self, case_id: &str) -> CaseOverview {
        let members = self.store.list_by_case(case_id);
        let count = |s: VerificationStatus| members.iter().filter(|r| r.status == s).count();
        CaseOverview {
            case_id: case_id.to_string(),
            overall_status: aggregate(members.iter().map(|r| r.status)),
            document_count: members.len(),
            verified: count(VerificationStatus::Verified),
            rejected: count(VerificationStatus::Rejected),
        }
    }
}
