//! Domain layer for document verification status

pub mod case;
pub mod errors;
pub mod record;
pub mod status;

pub use case::{aggregate, CaseOverview, CaseStatus};
pub use errors::VerificationError;
pub use record::{BlockchainRecord, DocumentRecord, OcrOutcome, ReviewDecision, ReviewRecord};
pub use status::VerificationStatus;
