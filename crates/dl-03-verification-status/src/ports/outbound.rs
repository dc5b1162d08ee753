//! # Outbound Ports (Driven Ports)

use shared_types::DocumentId;

use crate::domain::{DocumentRecord, VerificationError};

/// Mutation applied to a stored record.
pub type RecordMutation<'a> =
    &'a mut dyn FnMut(&mut DocumentRecord) -> Result<(), VerificationError>;

/// Storage for document records.
///
/// Production: owned by the document-management collaborator
/// Testing: `InMemoryDocumentStore` (adapters/memory.rs)
pub trait DocumentStore: Send + Sync {
    /// Fetch a record.
    fn get(&self, document_id: &DocumentId) -> Option<DocumentRecord>;

    /// Insert unless a record already exists. Returns the stored record.
    fn insert_if_absent(&self, record: DocumentRecord) -> DocumentRecord;

    /// Delete a record, returning it if present.
    fn remove(&self, document_id: &DocumentId) -> Option<DocumentRecord>;

    /// Apply `mutation` atomically. If it fails, nothing is written.
    fn update(
        &self,
        document_id: &DocumentId,
        mutation: RecordMutation<'_>,
    ) -> Result<DocumentRecord, VerificationError>;

    /// Every record whose `case_id` equals `case_id`.
    fn list_by_case(&self, case_id: &str) -> Vec<DocumentRecord>;
}
