use crate::domain::{DocumentRecord, VerificationError};
use crate::ports::outbound::{DocumentStore, RecordMutation};
use parking_lot::RwLock;
use shared_types::DocumentId;
use std::collections::HashMap;

/// In-memory implementation of DocumentStore
#[derive(Default)]
pub struct InMemoryDocumentStore {
    records: RwLock<HashMap<DocumentId, DocumentRecord>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

impl DocumentStore for InMemoryDocumentStore {
    fn get(&self, document_id: &DocumentId) -> Option<DocumentRecord> {
        self.records.read().get(document_id).cloned()
    }

    fn insert_if_absent(&self, record: DocumentRecord) -> DocumentRecord {
        self.records
            .write()
            .entry(record.document_id.clone())
            .or_insert(record)
            .clone()
    }

    fn remove(&self, document_id: &DocumentId) -> Option<DocumentRecord> {
        self.records.write().remove(document_id)
    }

    fn update(
        &self,
        document_id: &DocumentId,
        mutation: RecordMutation<'_>,
    ) -> Result<DocumentRecord, VerificationError> {
        let mut records = self.records.write();
        let stored = records
            .get_mut(document_id)
            .ok_or_else(|| VerificationError::UnknownDocument(document_id.clone()))?;

        // Work on a copy so a failed mutation leaves the stored record intact.
        let mut draft = stored.clone();
        mutation(&mut draft)?;
        *stored = draft.clone();
        Ok(draft)
    }

    fn list_by_case(&self, case_id: &str) -> Vec<DocumentRecord> {
        let mut members: Vec<_> = self
            .records
            .read()
            .values()
            .filter(|r| r.case_id.as_deref() == Some(case_id))
            .cloned()
            .collect();
        members.sort_by(|a, b| a.document_id.cmp(&b.document_id));
        members
    }
}
