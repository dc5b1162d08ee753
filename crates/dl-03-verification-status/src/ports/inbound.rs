//! # Inbound Ports (Driving Ports)

use shared_types::DocumentId;

use crate::domain::{
    BlockchainRecord, CaseOverview, DocumentRecord, OcrOutcome, ReviewDecision,
    VerificationError, VerificationStatus,
};

/// Status-tracking API.
///
/// Every mutating call is atomic per document: on error the stored record
/// is unchanged.
pub trait VerificationStatusApi: Send + Sync {
    /// Start tracking a document at `pending`. Idempotent: an existing record
    /// is returned unchanged.
    fn track(&self, document_id: DocumentId, case_id: Option<String>) -> DocumentRecord;

    /// Attach the sealing coordinates.
    fn attach_blockchain(
        &self,
        document_id: &DocumentId,
        record: BlockchainRecord,
    ) -> Result<DocumentRecord, VerificationError>;

    /// Feed the text-extraction result.
    fn record_ocr_outcome(
        &self,
        document_id: &DocumentId,
        outcome: OcrOutcome,
    ) -> Result<VerificationStatus, VerificationError>;

    /// Put a document into a case.
    fn assign_case(
        &self,
        document_id: &DocumentId,
        case_id: &str,
    ) -> Result<VerificationStatus, VerificationError>;

    /// Apply a reviewer's verdict.
    fn record_review_decision(
        &self,
        document_id: &DocumentId,
        decision: ReviewDecision,
    ) -> Result<VerificationStatus, VerificationError>;

    /// Drop a record that never reached the pool.
    fn forget(&self, document_id: &DocumentId) -> Option<DocumentRecord>;

    /// Current record.
    fn get(&self, document_id: &DocumentId) -> Option<DocumentRecord>;

    /// Aggregate over the documents of a case, computed now.
    fn case_overview(&self, case_id: &str) -> CaseOverview;
}
