use dl_02_ledger::SealedTransaction;
use serde::{Deserialize, Serialize};
use shared_types::{DocumentId, Fingerprint, Timestamp, TransactionId};
use uuid::Uuid;

/// Integrity verdict carried by a certificate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChainIntegrity {
    /// Every block passed the audit
    Intact,
    /// At least one block failed
    Compromised,
}

impl ChainIntegrity {
    /// Wire name, as serialized.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Intact => "INTACT",
            Self::Compromised => "COMPROMISED",
        }
    }
}

impl From<bool> for ChainIntegrity {
    fn from(valid: bool) -> Self {
        if valid {
            Self::Intact
        } else {
            Self::Compromised
        }
    }
}

/// Verifier-facing summary of a sealed registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    /// Unique per issue, even for the same document
    pub certificate_id: Uuid,
    /// Certified document
    pub document_id: DocumentId,
    /// Sealed content fingerprint
    pub content_fingerprint: Fingerprint,
    /// Sealing block
    pub block_index: u64,
    /// Sealing block digest
    pub block_digest: Fingerprint,
    /// Registration transaction
    pub transaction_id: TransactionId,
    /// Block creation time
    pub sealed_at: Timestamp,
    /// Verdict at issue time
    pub chain_integrity: ChainIntegrity,
    /// Issue time
    pub issued_at: Timestamp,
}

impl Certificate {
    pub(crate) fn issue(
        sealed: SealedTransaction,
        chain_valid: bool,
        issued_at: Timestamp,
    ) -> Self {
        Self {
            certificate_id: Uuid::new_v4(),
            document_id: sealed.transaction.document_id,
            content_fingerprint: sealed.transaction.content_fingerprint,
            block_index: sealed.block_index,
            block_digest: sealed.block_digest,
            transaction_id: sealed.transaction.transaction_id,
            sealed_at: sealed.sealed_at,
            chain_integrity: chain_valid.into(),
            issued_at,
        }
    }
}

/// Result of re-checking a previously issued certificate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateCheck {
    /// The ledger still holds the certified transaction at the same block
    pub coordinates_match: bool,
    /// Live verdict
    pub chain_integrity: ChainIntegrity,
}

impl CertificateCheck {
    /// Both the coordinates and the chain hold.
    pub fn is_valid(&self) -> bool {
        self.coordinates_match && self.chain_integrity == ChainIntegrity::Intact
    }
}
