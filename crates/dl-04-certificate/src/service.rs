//! Certificate generator

use dl_02_ledger::LedgerApi;
use shared_types::{DocumentId, TimeSource};
use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::{Certificate, CertificateCheck, ChainIntegrity};

/// Issues certificates from a ledger.
pub struct CertificateGenerator<L: LedgerApi + ?Sized> {
    ledger: Arc<L>,
    clock: Arc<dyn TimeSource>,
}

impl<L: LedgerApi + ?Sized> CertificateGenerator<L> {
    /// Generator over `ledger`.
    pub fn new(ledger: Arc<L>, clock: Arc<dyn TimeSource>) -> Self {
        Self { ledger, clock }
    }

    /// Certificate for the earliest sealed registration of `document_id`,
    /// or `None` if the document was never sealed.
    ///
    /// The chain is audited on every call; nothing is cached.
    pub fn generate(&self, document_id: &DocumentId) -> Option<Certificate> {
        let sealed = self.ledger.find_by_document_id(document_id)?;
        let chain_valid = self.ledger.validate_chain();
        let certificate = Certificate::issue(sealed, chain_valid, self.clock.now());

        if certificate.chain_integrity == ChainIntegrity::Compromised {
            warn!(
                %document_id,
                certificate_id = %certificate.certificate_id,
                "[dl-04] Issued certificate over a compromised chain"
            );
        } else {
            info!(
                %document_id,
                certificate_id = %certificate.certificate_id,
                block_index = certificate.block_index,
                "[dl-04] Certificate issued"
            );
        }
        Some(certificate)
    }

    /// Re-check an earlier certificate against the ledger as it is now.
    pub fn check(&self, certificate: &Certificate) -> CertificateCheck {
        let coordinates_match = self
            .ledger
            .find_by_transaction_id(&certificate.transaction_id)
            .map(|sealed| {
                sealed.block_index == certificate.block_index
                    && sealed.block_digest == certificate.block_digest
                    && sealed.transaction.content_fingerprint == certificate.content_fingerprint
                    && sealed.transaction.document_id == certificate.document_id
            })
            .unwrap_or(false);

        CertificateCheck {
            coordinates_match,
            chain_integrity: self.ledger.validate_chain().into(),
        }
    }
}
