//! Error types for status transitions

use crate::domain::VerificationStatus;
use shared_types::DocumentId;
use thiserror::Error;

/// Errors raised by the verification-status subsystem.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerificationError {
    /// No record exists for this document
    #[error("Document {0} is not tracked")]
    UnknownDocument(DocumentId),

    /// The requested transition is not allowed from the current status
    #[error("Cannot {action} document {document_id} while it is {from}")]
    InvalidTransition {
        /// Document concerned
        document_id: DocumentId,
        /// Current status
        from: VerificationStatus,
        /// Attempted action
        action: &'static str,
    },

    /// A reviewer decision arrived after a terminal status was reached
    #[error("Document {document_id} was already {status}")]
    AlreadyDecided {
        /// Document concerned
        document_id: DocumentId,
        /// Terminal status already recorded
        status: VerificationStatus,
    },

    /// Rejection without a reason
    #[error("A rejection must state a non-empty reason")]
    MissingRejectionReason,

    /// Decision without a reviewer identity
    #[error("A review decision must name the reviewer")]
    MissingReviewer,

    /// The document already carries sealing coordinates of another
    /// transaction
    #[error("Document {document_id} is already sealed in block {block_index}")]
    AlreadySealed {
        /// Document concerned
        document_id: DocumentId,
        /// Block holding the first registration
        block_index: u64,
    },

    /// Case identifier was blank
    #[error("Case identifier must not be empty")]
    EmptyCaseId,
}

impl VerificationError {
    /// True for caller mistakes that a corrected request can fix.
    pub fn is_validation(&self) -> bool {
        !matches!(self, Self::UnknownDocument(_))
    }
}
