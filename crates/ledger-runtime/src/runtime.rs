//! # Document Ledger Runtime
//!
//! The external interface of the ledger. Collaborators (upload handler,
//! review handler, certificate endpoint) call this façade; it never knows
//! about HTTP, sessions or storage of the uploaded bytes.
//!
//! ## Register flow
//!
//! ```text
//! bytes ──digest──▶ fingerprint ──track──▶ submit ──▶ pool ──seal──▶ ledger
//!                                    │                                  │
//!                               (pending)                attach blockchain record
//! ```
//!
//! Duplicate checks, `track` and `submit` run under the intake lock, and so
//! does every drain→append. A transaction is therefore always visible in
//! the pool or the ledger to the next registration, and its document
//! record exists before any sealer can see it.

use std::sync::Arc;

use parking_lot::Mutex;

use dl_01_transaction_pool::TransactionPoolApi;
use dl_02_ledger::{Block, BlockSummary, ChainAudit, LedgerApi, SealedTransaction};
use dl_03_verification_status::{
    BlockchainRecord, CaseOverview, DocumentRecord, OcrOutcome, ReviewDecision,
    VerificationStatus, VerificationStatusApi,
};
use dl_04_certificate::{Certificate, CertificateCheck};
use ledger_telemetry::{
    time_histogram, BLOCKS_SEALED, CERTIFICATES_ISSUED, CHAIN_HEIGHT, CHAIN_VALIDATIONS,
    INTEGRITY_VIOLATIONS, MINING_DURATION, POOL_PENDING, REVIEW_DECISIONS, SUBSYSTEM_ERRORS,
    TRANSACTIONS_SUBMITTED, VERIFICATIONS,
};
use shared_crypto::digest_bytes;
use shared_types::{
    DocumentId, Fingerprint, IntegrityKey, RegistrationRequest, SystemTimeSource, TimeSource,
};
use tracing::{debug, error, info, warn};

use crate::container::{LedgerConfig, SealingMode, SubsystemContainer};
use crate::error::{Result, RuntimeError};
use crate::outcomes::{ChainStats, RegistrationOutcome, VerificationOutcome};

/// Process-wide ledger façade.
pub struct DocumentLedgerRuntime {
    config: LedgerConfig,
    container: SubsystemContainer,
    key: IntegrityKey,
    intake: Mutex<()>,
}

impl DocumentLedgerRuntime {
    /// Build all subsystems with the system clock.
    pub fn new(config: LedgerConfig) -> Result<Self> {
        Self::with_clock(config, Arc::new(SystemTimeSource))
    }

    /// Build all subsystems with an injected clock.
    pub fn with_clock(config: LedgerConfig, clock: Arc<dyn TimeSource>) -> Result<Self> {
        let container = SubsystemContainer::new(&config, clock)?;
        CHAIN_HEIGHT.set(container.ledger.height() as f64);
        let key = config.integrity_key();
        Ok(Self {
            config,
            container,
            key,
            intake: Mutex::new(()),
        })
    }

    /// Active configuration.
    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// Wired subsystems.
    pub fn container(&self) -> &SubsystemContainer {
        &self.container
    }

    // =========================================================================
    // REGISTRATION & SEALING
    // =========================================================================

    /// Fingerprint `content`, stage a transaction and, in inline mode, seal
    /// it before returning.
    pub fn register(
        &self,
        content: &[u8],
        request: RegistrationRequest,
    ) -> Result<RegistrationOutcome> {
        request.validate()?;
        let fingerprint = digest_bytes(content);

        let transaction = {
            let _intake = self.intake.lock();
            self.ensure_new_document(&request.document_id)?;
            if self.config.reject_duplicate_content {
                self.ensure_not_duplicate(&fingerprint)?;
            }

            self.container
                .status
                .track(request.document_id.clone(), request.linked_case_id.clone());
            match self.container.pool.submit(&request, fingerprint) {
                Ok(tx) => tx,
                Err(e) => {
                    self.container.status.forget(&request.document_id);
                    return Err(self.record_error("dl-01", e.into()));
                }
            }
        };
        TRANSACTIONS_SUBMITTED.inc();
        POOL_PENDING.set(self.container.pool.pending_count() as f64);

        info!(
            document_id = %transaction.document_id,
            transaction_id = %transaction.transaction_id,
            fingerprint = transaction.content_fingerprint.short(),
            "Document registered"
        );

        if self.config.sealing != SealingMode::Inline {
            return Ok(RegistrationOutcome {
                transaction,
                block: None,
            });
        }

        self.seal_now()?;

        // A concurrent seal may have taken our transaction; look it up by id.
        let block = self
            .container
            .ledger
            .find_by_transaction_id(&transaction.transaction_id)
            .and_then(|sealed| self.container.ledger.block(sealed.block_index));

        Ok(RegistrationOutcome { transaction, block })
    }

    /// Seal everything pending into one block. `None` when the pool is empty.
    ///
    /// Every document in the new block gets its blockchain sub-record.
    pub fn seal_now(&self) -> Result<Option<Block>> {
        let sealed = {
            let _intake = self.intake.lock();
            let _timer = time_histogram!(MINING_DURATION);
            self.container
                .ledger
                .seal_pending(&self.container.pending_source)
        };

        let block = match sealed {
            Ok(Some(block)) => block,
            Ok(None) => return Ok(None),
            Err(e) => {
                error!("Sealing failed: {}", e);
                return Err(self.record_error("dl-02", e.into()));
            }
        };

        BLOCKS_SEALED.inc();
        CHAIN_HEIGHT.set(self.container.ledger.height() as f64);
        POOL_PENDING.set(self.container.pool.pending_count() as f64);

        for tx in &block.transactions {
            let record = BlockchainRecord {
                content_fingerprint: tx.content_fingerprint.clone(),
                transaction_id: tx.transaction_id,
                block_index: block.index,
                block_digest: block.block_digest.clone(),
                sealed_at: block.created_at,
            };
            if let Err(e) = self.container.status.attach_blockchain(&tx.document_id, record) {
                warn!(document_id = %tx.document_id, "Blockchain record not attached: {}", e);
            }
        }

        Ok(Some(block))
    }

    /// Document ids are never reused: a tracked, pending or sealed id is
    /// refused.
    fn ensure_new_document(&self, document_id: &DocumentId) -> Result<()> {
        let taken = self.container.status.get(document_id).is_some()
            || self.container.ledger.find_by_document_id(document_id).is_some();
        if taken {
            return Err(self.record_error(
                "runtime",
                RuntimeError::DocumentExists {
                    document_id: document_id.clone(),
                },
            ));
        }
        Ok(())
    }

    fn ensure_not_duplicate(&self, fingerprint: &Fingerprint) -> Result<()> {
        if let Some(sealed) = self.container.ledger.find_by_fingerprint(fingerprint) {
            return Err(self.record_error(
                "runtime",
                RuntimeError::DuplicateContent {
                    fingerprint: fingerprint.clone(),
                    existing_document: sealed.transaction.document_id,
                    block_index: Some(sealed.block_index),
                },
            ));
        }
        let pending = self
            .container
            .pool
            .snapshot()
            .into_iter()
            .find(|tx| &tx.content_fingerprint == fingerprint);
        if let Some(tx) = pending {
            return Err(self.record_error(
                "runtime",
                RuntimeError::DuplicateContent {
                    fingerprint: fingerprint.clone(),
                    existing_document: tx.document_id,
                    block_index: None,
                },
            ));
        }
        Ok(())
    }

    // =========================================================================
    // VERIFICATION
    // =========================================================================

    /// Recompute the fingerprint of `content` and look it up.
    pub fn verify_by_bytes(&self, content: &[u8]) -> Result<VerificationOutcome> {
        self.verify(digest_bytes(content), "bytes")
    }

    /// Look up a caller-supplied fingerprint (64 hex characters).
    pub fn verify_by_fingerprint(&self, fingerprint: &str) -> Result<VerificationOutcome> {
        let fingerprint = Fingerprint::parse(fingerprint)
            .map_err(|e| RuntimeError::Validation(e.to_string()))?;
        self.verify(fingerprint, "fingerprint")
    }

    fn verify(&self, fingerprint: Fingerprint, method: &str) -> Result<VerificationOutcome> {
        self.assert_chain_integrity()?;

        let Some(sealed) = self.container.ledger.find_by_fingerprint(&fingerprint) else {
            VERIFICATIONS.with_label_values(&[method, "no_match"]).inc();
            debug!(fingerprint = fingerprint.short(), "No sealed transaction for fingerprint");
            return Ok(VerificationOutcome::not_found(fingerprint));
        };

        let tag_valid = sealed.transaction.verify_integrity_tag(&self.key)
            && sealed.transaction.metadata_matches();
        if !tag_valid {
            warn!(
                transaction_id = %sealed.transaction.transaction_id,
                "Sealed transaction failed its integrity tag check"
            );
        }
        VERIFICATIONS
            .with_label_values(&[method, if tag_valid { "match" } else { "tag_mismatch" }])
            .inc();

        Ok(VerificationOutcome {
            verified: tag_valid,
            content_fingerprint: fingerprint,
            block_index: Some(sealed.block_index),
            block_digest: Some(sealed.block_digest),
            sealed_at: Some(sealed.sealed_at),
            document_id: Some(sealed.transaction.document_id),
            transaction_id: Some(sealed.transaction.transaction_id),
            integrity_tag_valid: Some(tag_valid),
        })
    }

    // =========================================================================
    // CHAIN
    // =========================================================================

    /// Full audit with metrics.
    pub fn audit_chain(&self) -> ChainAudit {
        let audit = self.container.ledger.audit_chain();
        let outcome = if audit.is_intact() { "intact" } else { "compromised" };
        CHAIN_VALIDATIONS.with_label_values(&[outcome]).inc();
        audit
    }

    /// `true` only if every block passes.
    pub fn validate_chain(&self) -> bool {
        self.audit_chain().is_intact()
    }

    /// `Err(IntegrityViolation)` carrying the first fault if the audit fails.
    pub fn assert_chain_integrity(&self) -> Result<()> {
        match self.audit_chain().fault {
            None => Ok(()),
            Some(fault) => {
                INTEGRITY_VIOLATIONS.inc();
                error!(?fault, "Chain integrity violation");
                Err(self.record_error("dl-02", RuntimeError::IntegrityViolation { fault }))
            }
        }
    }

    /// Counts, digests and a fresh integrity flag. Never fails: a broken
    /// chain is reported through `chain_integrity`.
    pub fn chain_stats(&self) -> ChainStats {
        let stats = self.container.ledger.stats();
        let outcome = if stats.chain_integrity { "intact" } else { "compromised" };
        CHAIN_VALIDATIONS.with_label_values(&[outcome]).inc();
        ChainStats {
            total_blocks: stats.total_blocks,
            total_sealed_transactions: stats.total_sealed_transactions,
            pending_count: self.container.pool.pending_count(),
            chain_integrity: stats.chain_integrity,
            latest_block_digest: stats.latest_block_digest,
            genesis_block_digest: stats.genesis_block_digest,
            difficulty: self.container.ledger.difficulty(),
        }
    }

    /// Newest blocks first.
    pub fn recent_blocks(&self, limit: usize) -> Vec<BlockSummary> {
        self.container.ledger.recent_blocks(limit)
    }

    /// Earliest sealed transaction for a document.
    pub fn find_by_document_id(&self, document_id: &DocumentId) -> Option<SealedTransaction> {
        self.container.ledger.find_by_document_id(document_id)
    }

    /// Earliest sealed transaction for a content fingerprint.
    pub fn find_by_fingerprint(&self, fingerprint: &Fingerprint) -> Option<SealedTransaction> {
        self.container.ledger.find_by_fingerprint(fingerprint)
    }

    // =========================================================================
    // VERIFICATION STATUS
    // =========================================================================

    /// Feed a text-extraction result.
    pub fn record_ocr_outcome(
        &self,
        document_id: &DocumentId,
        outcome: OcrOutcome,
    ) -> Result<VerificationStatus> {
        self.container
            .status
            .record_ocr_outcome(document_id, outcome)
            .map_err(|e| self.record_error("dl-03", e.into()))
    }

    /// Put a document into a case.
    pub fn assign_case(&self, document_id: &DocumentId, case_id: &str) -> Result<VerificationStatus> {
        self.container
            .status
            .assign_case(document_id, case_id)
            .map_err(|e| self.record_error("dl-03", e.into()))
    }

    /// Apply a reviewer's verdict. An empty rejection reason is refused and
    /// leaves the status unchanged.
    pub fn record_review_decision(
        &self,
        document_id: &DocumentId,
        decision: ReviewDecision,
    ) -> Result<VerificationStatus> {
        match self.container.status.record_review_decision(document_id, decision) {
            Ok(status) => {
                REVIEW_DECISIONS.with_label_values(&[status.as_str()]).inc();
                Ok(status)
            }
            Err(e) => {
                REVIEW_DECISIONS.with_label_values(&["refused"]).inc();
                Err(self.record_error("dl-03", e.into()))
            }
        }
    }

    /// Current verification record.
    pub fn document_status(&self, document_id: &DocumentId) -> Result<DocumentRecord> {
        self.container
            .status
            .get(document_id)
            .ok_or_else(|| RuntimeError::NotFound(format!("document {}", document_id)))
    }

    /// Case aggregate, recomputed now.
    pub fn case_overall_status(&self, case_id: &str) -> CaseOverview {
        self.container.status.case_overview(case_id)
    }

    // =========================================================================
    // CERTIFICATES
    // =========================================================================

    /// Certificate for a sealed document, with a live integrity verdict.
    pub fn generate_certificate(&self, document_id: &DocumentId) -> Option<Certificate> {
        let certificate = self.container.certificates.generate(document_id)?;
        CERTIFICATES_ISSUED
            .with_label_values(&[certificate.chain_integrity.as_str()])
            .inc();
        Some(certificate)
    }

    /// Re-check an earlier certificate against the current ledger.
    pub fn check_certificate(&self, certificate: &Certificate) -> CertificateCheck {
        self.container.certificates.check(certificate)
    }

    // =========================================================================
    // TEST HOOKS
    // =========================================================================

    /// Mutate stored blocks in place, bypassing every check.
    #[cfg(feature = "test-utils")]
    pub fn tamper_with<F: FnOnce(&mut Vec<Block>)>(&self, f: F) {
        self.container.ledger.tamper_with(f);
    }

    fn record_error(&self, subsystem: &str, error: RuntimeError) -> RuntimeError {
        SUBSYSTEM_ERRORS
            .with_label_values(&[subsystem, error.kind()])
            .inc();
        error
    }
}
