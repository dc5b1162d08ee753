//! Document verification record and its transitions

use serde::{Deserialize, Serialize};
use shared_types::{DocumentId, Fingerprint, Timestamp, TransactionId};

use super::errors::VerificationError;
use super::status::VerificationStatus;

/// Where a document's registration was sealed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockchainRecord {
    /// Fingerprint of the uploaded bytes
    pub content_fingerprint: Fingerprint,
    /// Registration transaction
    pub transaction_id: TransactionId,
    /// Sealing block
    pub block_index: u64,
    /// Digest of the sealing block
    pub block_digest: Fingerprint,
    /// Creation time of the sealing block
    pub sealed_at: Timestamp,
}

/// Result reported by the text-extraction collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum OcrOutcome {
    /// Text extracted and keyword analysis ran
    Succeeded {
        /// Category suggested by keyword analysis
        detected_category: Option<String>,
        /// Keywords found in the text
        keywords: Vec<String>,
    },
    /// Extraction failed; the document stays `pending`
    Failed {
        /// Collaborator-supplied reason
        reason: String,
    },
}

/// A reviewer's decision as submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDecision {
    /// Reviewer identity
    pub reviewer_id: String,
    /// Accept (`true`) or reject (`false`)
    pub verified: bool,
    /// Free-form remarks
    pub remarks: Option<String>,
    /// Required when `verified` is false
    pub rejection_reason: Option<String>,
}

/// A decision as recorded on the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRecord {
    /// Reviewer identity
    pub reviewer_id: String,
    /// Outcome
    pub verified: bool,
    /// Remarks, if any
    pub remarks: Option<String>,
    /// Trimmed reason, present on rejections
    pub rejection_reason: Option<String>,
    /// When the decision was recorded
    pub decided_at: Timestamp,
}

/// Verification state of one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRecord {
    /// Document identity
    pub document_id: DocumentId,
    /// Current status
    pub status: VerificationStatus,
    /// Case the document belongs to
    pub case_id: Option<String>,
    /// Latest OCR outcome
    pub ocr: Option<OcrOutcome>,
    /// Terminal review decision
    pub review: Option<ReviewRecord>,
    /// Sealing coordinates, once sealed
    pub blockchain: Option<BlockchainRecord>,
    /// Last modification
    pub updated_at: Timestamp,
}

impl DocumentRecord {
    /// New record at `pending`.
    pub fn new(document_id: DocumentId, case_id: Option<String>, now: Timestamp) -> Self {
        Self {
            document_id,
            status: VerificationStatus::Pending,
            case_id: case_id.filter(|c| !c.trim().is_empty()),
            ocr: None,
            review: None,
            blockchain: None,
            updated_at: now,
        }
    }

    /// Attach sealing coordinates. Allowed in any status.
    ///
    /// Re-attaching the same transaction is a no-op. Coordinates of a
    /// different transaction never replace the ones already recorded.
    pub fn attach_blockchain(
        &mut self,
        record: BlockchainRecord,
        now: Timestamp,
    ) -> Result<(), VerificationError> {
        match &self.blockchain {
            Some(existing) if existing.transaction_id == record.transaction_id => Ok(()),
            Some(existing) => Err(VerificationError::AlreadySealed {
                document_id: self.document_id.clone(),
                block_index: existing.block_index,
            }),
            None => {
                self.blockchain = Some(record);
                self.updated_at = now;
                Ok(())
            }
        }
    }

    /// Record an OCR result.
    ///
    /// Success moves `pending → ocr-processed`, and straight on to
    /// `lawyer-review` when a case is already assigned. Failure keeps the
    /// document at `pending`.
    pub fn apply_ocr_outcome(
        &mut self,
        outcome: OcrOutcome,
        now: Timestamp,
    ) -> Result<VerificationStatus, VerificationError> {
        if self.status != VerificationStatus::Pending {
            return Err(self.invalid("record OCR outcome for"));
        }

        if matches!(outcome, OcrOutcome::Succeeded { .. }) {
            self.status = if self.case_id.is_some() {
                VerificationStatus::LawyerReview
            } else {
                VerificationStatus::OcrProcessed
            };
        }
        self.ocr = Some(outcome);
        self.updated_at = now;
        Ok(self.status)
    }

    /// Associate the document with a case. An `ocr-processed` document
    /// enters `lawyer-review`.
    pub fn assign_case(
        &mut self,
        case_id: &str,
        now: Timestamp,
    ) -> Result<VerificationStatus, VerificationError> {
        let case_id = case_id.trim();
        if case_id.is_empty() {
            return Err(VerificationError::EmptyCaseId);
        }
        if self.status.is_terminal() {
            return Err(self.invalid("reassign"));
        }

        self.case_id = Some(case_id.to_string());
        if self.status == VerificationStatus::OcrProcessed {
            self.status = VerificationStatus::LawyerReview;
        }
        self.updated_at = now;
        Ok(self.status)
    }

    /// Apply a reviewer decision from `lawyer-review`.
    pub fn apply_review(
        &mut self,
        decision: ReviewDecision,
        now: Timestamp,
    ) -> Result<VerificationStatus, VerificationError> {
        if self.status.is_terminal() {
            return Err(VerificationError::AlreadyDecided {
                document_id: self.document_id.clone(),
                status: self.status,
            });
        }
        if self.status != VerificationStatus::LawyerReview {
            return Err(self.invalid("review"));
        }
        if decision.reviewer_id.trim().is_empty() {
            return Err(VerificationError::MissingReviewer);
        }

        let rejection_reason = match decision.rejection_reason.as_deref().map(str::trim) {
            Some(reason) if !reason.is_empty() => Some(reason.to_string()),
            _ if !decision.verified => return Err(VerificationError::MissingRejectionReason),
            _ => None,
        };

        self.status = if decision.verified {
            VerificationStatus::Verified
        } else {
            VerificationStatus::Rejected
        };
        self.review = Some(ReviewRecord {
            reviewer_id: decision.reviewer_id,
            verified: decision.verified,
            remarks: decision.remarks,
            rejection_reason,
            decided_at: now,
        });
        self.updated_at = now;
        Ok(self.status)
    }

    fn invalid(&self, action: &'static str) -> VerificationError {
        VerificationError::InvalidTransition {
            document_id: self.document_id.clone(),
            from: self.status,
            action,
        }
    }
}
