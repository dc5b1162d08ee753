//! Case-level aggregate status
//!
//! Derived on demand from the member documents; never stored.

use serde::{Deserialize, Serialize};

use super::status::VerificationStatus;

/// Overall status of a case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CaseStatus {
    /// Every document verified
    Complete,
    /// At least one document rejected
    IssuesFound,
    /// Anything else, including a case with no documents
    Partial,
}

/// Aggregate counts for one case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseOverview {
    /// Case identifier
    pub case_id: String,
    /// Derived status
    pub overall_status: CaseStatus,
    /// Documents in the case
    pub document_count: usize,
    /// Documents verified
    pub verified: usize,
    /// Documents rejected
    pub rejected: usize,
}

/// `issues-found` if any rejected, else `complete` if all verified, else
/// `partial`.
pub fn aggregate<I>(statuses: I) -> CaseStatus
where
    I: IntoIterator<Item = VerificationStatus>,
{
    let mut any = false;
    let mut all_verified = true;
    for status in statuses {
        any = true;
        match status {
            VerificationStatus::Rejected => return CaseStatus::IssuesFound,
            VerificationStatus::Verified => {}
            _ => all_verified = false,
        }
    }
    if any && all_verified {
        CaseStatus::Complete
    } else {
        CaseStatus::Partial
    }
}
