//! # Core Domain Entities
//!
//! ## Clusters
//!
//! - **Identity**: `DocumentId`, `TransactionId`
//! - **Registration**: `RegistrationRequest` (metadata supplied by the upload
//!   collaborator), `Transaction` (the immutable record sealed into a block)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared_crypto::{canonical_json, digest_record, Fingerprint, IntegrityKey};
use std::fmt;
use uuid::Uuid;

use crate::errors::EntityError;

/// Unique identifier of a registration transaction.
pub type TransactionId = Uuid;

/// Identity of a document as known to the document-management collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    /// Wrap an identifier supplied by the caller.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// String view.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DocumentId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Kind of ledger transaction. Only document uploads exist today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionKind {
    /// A document registration.
    DocumentUpload,
}

/// Metadata accompanying an upload.
///
/// This is the record hashed into `metadata_fingerprint`; the content bytes
/// travel separately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    /// Document being registered.
    pub document_id: DocumentId,
    /// Original file name.
    pub file_name: String,
    /// Uploading user.
    pub uploader_id: String,
    /// Case the document belongs to, if any.
    pub linked_case_id: Option<String>,
    /// Caller-assigned category (e.g. "contract", "affidavit").
    pub document_category: String,
}

impl RegistrationRequest {
    /// Reject requests missing a required identity field.
    pub fn validate(&self) -> Result<(), EntityError> {
        if self.document_id.as_str().trim().is_empty() {
            return Err(EntityError::MissingField("documentId"));
        }
        if self.file_name.trim().is_empty() {
            return Err(EntityError::MissingField("fileName"));
        }
        if self.uploader_id.trim().is_empty() {
            return Err(EntityError::MissingField("uploaderId"));
        }
        Ok(())
    }
}

/// A document-registration transaction.
///
/// Created once in the pool, copied verbatim into exactly one block, never
/// mutated. `integrity_tag` is an HMAC over every other field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Unique transaction identifier.
    pub transaction_id: TransactionId,
    /// Always `DOCUMENT_UPLOAD`.
    pub kind: TransactionKind,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Registered document.
    pub document_id: DocumentId,
    /// Original file name.
    pub file_name: String,
    /// SHA-256 of the uploaded bytes.
    pub content_fingerprint: Fingerprint,
    /// SHA-256 of the canonical registration metadata.
    pub metadata_fingerprint: Fingerprint,
    /// Uploading user.
    pub uploader_id: String,
    /// Linked case, if any.
    pub linked_case_id: Option<String>,
    /// Document category.
    pub document_category: String,
    /// Hex HMAC-SHA256 over the canonical payload.
    pub integrity_tag: String,
}

/// Every transaction field except the tag, in canonical order.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TaggedPayload<'a> {
    transaction_id: &'a TransactionId,
    kind: TransactionKind,
    created_at: &'a DateTime<Utc>,
    document_id: &'a DocumentId,
    file_name: &'a str,
    content_fingerprint: &'a Fingerprint,
    metadata_fingerprint: &'a Fingerprint,
    uploader_id: &'a str,
    linked_case_id: Option<&'a str>,
    document_category: &'a str,
}

impl Transaction {
    /// Build a tagged transaction with a fresh id.
    pub fn new(
        request: &RegistrationRequest,
        content_fingerprint: Fingerprint,
        created_at: DateTime<Utc>,
        key: &IntegrityKey,
    ) -> Result<Self, EntityError> {
        request.validate()?;
        let metadata_fingerprint = digest_record(request)?;

        let mut tx = Self {
            transaction_id: Uuid::new_v4(),
            kind: TransactionKind::DocumentUpload,
            created_at,
            document_id: request.document_id.clone(),
            file_name: request.file_name.clone(),
            content_fingerprint,
            metadata_fingerprint,
            uploader_id: request.uploader_id.clone(),
            linked_case_id: request.linked_case_id.clone(),
            document_category: request.document_category.clone(),
            integrity_tag: String::new(),
        };
        tx.integrity_tag = key.tag(&tx.tagged_payload()?);
        Ok(tx)
    }

    /// Canonical bytes covered by the integrity tag.
    pub fn tagged_payload(&self) -> Result<Vec<u8>, EntityError> {
        let payload = TaggedPayload {
            transaction_id: &self.transaction_id,
            kind: self.kind,
            created_at: &self.created_at,
            document_id: &self.document_id,
            file_name: &self.file_name,
            content_fingerprint: &self.content_fingerprint,
            metadata_fingerprint: &self.metadata_fingerprint,
            uploader_id: &self.uploader_id,
            linked_case_id: self.linked_case_id.as_deref(),
            document_category: &self.document_category,
        };
        let value = serde_json::to_value(&payload)
            .map_err(|e| EntityError::Serialization(e.to_string()))?;
        Ok(canonical_json(&value).into_bytes())
    }

    /// Recompute the HMAC and compare in constant time.
    pub fn verify_integrity_tag(&self, key: &IntegrityKey) -> bool {
        match self.tagged_payload() {
            Ok(payload) => key.verify(&payload, &self.integrity_tag),
            Err(_) => false,
        }
    }

    /// Recompute the metadata fingerprint from the stored fields.
    pub fn metadata_matches(&self) -> bool {
        let request = RegistrationRequest {
            document_id: self.document_id.clone(),
            file_name: self.file_name.clone(),
            uploader_id: self.uploader_id.clone(),
            linked_case_id: self.linked_case_id.clone(),
            document_category: self.document_category.clone(),
        };
        digest_record(&request)
            .map(|fp| fp == self.metadata_fingerprint)
            .unwrap_or(false)
    }
}
