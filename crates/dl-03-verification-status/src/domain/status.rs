//! Verification status values

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a document stands in the review pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VerificationStatus {
    /// Uploaded, text extraction not yet successful
    Pending,
    /// Text extracted and analysed
    OcrProcessed,
    /// Assigned to a case, awaiting a reviewer
    LawyerReview,
    /// Accepted by a reviewer. Terminal.
    Verified,
    /// Refused by a reviewer. Terminal.
    Rejected,
}

impl VerificationStatus {
    /// No transition leaves a terminal status.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Verified | Self::Rejected)
    }

    /// Wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::OcrProcessed => "ocr-processed",
            Self::LawyerReview => "lawyer-review",
            Self::Verified => "verified",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_states() {
        assert!(VerificationStatus::Verified.is_terminal());
        assert!(VerificationStatus::Rejected.is_terminal());
        assert!(!VerificationStatus::LawyerReview.is_terminal());
        assert!(!VerificationStatus::Pending.is_terminal());
    }

    #[test]
    fn test_wire_names_match_serde() {
        for status in [
            VerificationStatus::Pending,
            VerificationStatus::OcrProcessed,
            VerificationStatus::LawyerReview,
            VerificationStatus::Verified,
            VerificationStatus::Rejected,
        ] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
        }
    }
}
