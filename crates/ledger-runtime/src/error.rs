//! Caller-facing error taxonomy.

use dl_01_transaction_pool::PoolError;
use dl_02_ledger::{ChainFault, LedgerError};
use dl_03_verification_status::VerificationError;
use shared_types::{DocumentId, EntityError, Fingerprint};
use thiserror::Error;

use crate::container::ConfigError;

/// Result alias for runtime operations.
pub type Result<T> = std::result::Result<T, RuntimeError>;

/// Errors returned by [`crate::DocumentLedgerRuntime`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// Malformed input: empty rejection reason, malformed fingerprint,
    /// missing metadata, or a transition not allowed from the current status.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Document absent from the ledger or the status tracker.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The chain failed its audit. Never retried, never repaired.
    #[error("Integrity violation: {fault:?}")]
    IntegrityViolation {
        /// First fault found
        fault: ChainFault,
    },

    /// Identical content is already sealed or pending.
    #[error("Duplicate content {fingerprint}: already registered as {existing_document}")]
    DuplicateContent {
        /// Fingerprint of the refused upload
        fingerprint: Fingerprint,
        /// Document that registered it first
        existing_document: DocumentId,
        /// Sealing block, if already sealed
        block_index: Option<u64>,
    },

    /// The document id is already registered. A re-submission must use a
    /// new document id.
    #[error("Document {document_id} is already registered")]
    DocumentExists {
        /// Id of the refused registration
        document_id: DocumentId,
    },

    /// Pool refused the transaction for capacity reasons.
    #[error("Pool error: {0}")]
    Pool(PoolError),

    /// Sealing failed; drained transactions were requeued.
    #[error("Ledger error: {0}")]
    Ledger(#[from] LedgerError),

    /// Bad configuration.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl RuntimeError {
    /// Whether the caller can reasonably retry or correct and resubmit.
    pub fn is_recoverable(&self) -> bool {
        match self {
            RuntimeError::IntegrityViolation { .. } | RuntimeError::Config(_) => false,
            RuntimeError::Ledger(e) => e.is_recoverable(),
            _ => true,
        }
    }

    /// Short label for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            RuntimeError::Validation(_) => "validation",
            RuntimeError::NotFound(_) => "not_found",
            RuntimeError::IntegrityViolation { .. } => "integrity_violation",
            RuntimeError::DuplicateContent { .. } => "duplicate_content",
            RuntimeError::DocumentExists { .. } => "document_exists",
            RuntimeError::Pool(_) => "pool",
            RuntimeError::Ledger(_) => "ledger",
            RuntimeError::Config(_) => "config",
        }
    }
}

impl From<EntityError> for RuntimeError {
    fn from(e: EntityError) -> Self {
        RuntimeError::Validation(e.to_string())
    }
}

impl From<PoolError> for RuntimeError {
    fn from(e: PoolError) -> Self {
        match e {
            PoolError::InvalidRegistration(inner) => inner.into(),
            other => RuntimeError::Pool(other),
        }
    }
}

impl From<VerificationError> for RuntimeError {
    fn from(e: VerificationError) -> Self {
        if e.is_validation() {
            RuntimeError::Validation(e.to_string())
        } else {
            RuntimeError::NotFound(e.to_string())
        }
    }
}
