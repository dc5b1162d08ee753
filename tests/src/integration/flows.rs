//! # Integration Test Flows
//!
//! Register → seal → verify → review → certificate, end to end.

#[cfg(test)]
mod tests {
    use super::super::{request, test_runtime};
    use chrono::Duration;
    use dl_03_verification_status::{CaseStatus, OcrOutcome, ReviewDecision, VerificationStatus};
    use dl_04_certificate::ChainIntegrity;
    use ledger_runtime::RuntimeError;
    use shared_crypto::digest_bytes;
    use shared_types::DocumentId;

    fn ocr_ok() -> OcrOutcome {
        OcrOutcome::Succeeded {
            detected_category: Some("affidavit".into()),
            keywords: vec!["sworn".into()],
        }
    }

    fn accept() -> ReviewDecision {
        ReviewDecision {
            reviewer_id: "lawyer-1".into(),
            verified: true,
            remarks: Some("matches original".into()),
            rejection_reason: None,
        }
    }

    fn reject(reason: &str) -> ReviewDecision {
        ReviewDecision {
            reviewer_id: "lawyer-1".into(),
            verified: false,
            remarks: None,
            rejection_reason: Some(reason.to_string()),
        }
    }

    // =============================================================================
    // LEDGER SCENARIO
    // =============================================================================

    #[test]
    fn test_hello_world_scenario() {
        let (rt, clock) = test_runtime();
        assert_eq!(rt.chain_stats().total_blocks, 1);

        rt.register(b"hello", request("A", None)).unwrap();
        let stats = rt.chain_stats();
        assert_eq!(stats.total_blocks, 2);
        assert_eq!(stats.total_sealed_transactions, 1);

        clock.advance(Duration::seconds(5));
        rt.register(b"world", request("B", None)).unwrap();
        assert_eq!(rt.chain_stats().total_blocks, 3);

        let v = rt.verify_by_bytes(b"hello").unwrap();
        assert!(v.verified);
        assert_eq!(v.block_index, Some(1));

        // Flip a byte of block 1's nonce.
        rt.tamper_with(|blocks| blocks[1].nonce ^= 0xff);
        assert!(!rt.validate_chain());
        assert!(!rt.chain_stats().chain_integrity);
    }

    #[test]
    fn test_round_trip_block_index_matches_register() {
        let (rt, _) = test_runtime();
        for (i, content) in [&b"alpha"[..], b"beta", b"gamma"].iter().enumerate() {
            let outcome = rt.register(content, request(&format!("d{i}"), None)).unwrap();
            let block = outcome.block.expect("inline mode seals");
            let v = rt.verify_by_bytes(content).unwrap();
            assert!(v.verified);
            assert_eq!(v.block_index, Some(block.index));
            assert_eq!(v.block_digest.as_ref(), Some(&block.block_digest));
            assert_eq!(v.transaction_id, Some(outcome.transaction.transaction_id));
        }
    }

    #[test]
    fn test_append_only_linkage() {
        let (rt, _) = test_runtime();
        for i in 0..5 {
            rt.register(format!("doc {i}").as_bytes(), request(&format!("d{i}"), None))
                .unwrap();
        }
        let blocks = rt.recent_blocks(usize::MAX);
        assert_eq!(blocks.len(), 6);
        // Newest first
        for pair in blocks.windows(2) {
            assert_eq!(pair[0].previous_block_digest, pair[1].block_digest);
            assert_eq!(pair[0].index, pair[1].index + 1);
        }
    }

    #[test]
    fn test_empty_pool_seal_is_noop() {
        let (rt, _) = test_runtime();
        assert!(rt.seal_now().unwrap().is_none());
        assert_eq!(rt.chain_stats().total_blocks, 1);
    }

    #[test]
    fn test_verify_by_fingerprint_matches_bytes() {
        let (rt, _) = test_runtime();
        rt.register(b"scan", request("A", None)).unwrap();
        let fp = digest_bytes(b"scan");
        assert_eq!(
            rt.verify_by_fingerprint(fp.as_str()).unwrap(),
            rt.verify_by_bytes(b"scan").unwrap()
        );
        // Uppercase hex is normalized.
        assert!(rt
            .verify_by_fingerprint(&fp.as_str().to_uppercase())
            .unwrap()
            .verified);
    }

    // =============================================================================
    // REVIEW FLOW
    // =============================================================================

    #[test]
    fn test_rejection_requires_reason() {
        let (rt, _) = test_runtime();
        let id = DocumentId::new("A");
        rt.register(b"a", request("A", Some("case-1"))).unwrap();
        rt.record_ocr_outcome(&id, ocr_ok()).unwrap();

        let err = rt.record_review_decision(&id, reject("")).unwrap_err();
        assert!(matches!(err, RuntimeError::Validation(_)));
        assert!(err.is_recoverable());
        assert_eq!(rt.document_status(&id).unwrap().status, VerificationStatus::LawyerReview);
    }

    #[test]
    fn test_verified_cannot_regress() {
        let (rt, _) = test_runtime();
        let id = DocumentId::new("A");
        rt.register(b"a", request("A", Some("case-1"))).unwrap();
        rt.record_ocr_outcome(&id, ocr_ok()).unwrap();
        rt.record_review_decision(&id, accept()).unwrap();

        assert!(rt.record_review_decision(&id, reject("second thoughts")).is_err());
        assert_eq!(rt.document_status(&id).unwrap().status, VerificationStatus::Verified);
    }

    #[test]
    fn test_case_aggregate() {
        let (rt, _) = test_runtime();
        let a = DocumentId::new("A");
        let b = DocumentId::new("B");
        rt.register(b"a", request("A", None)).unwrap();
        rt.register(b"b", request("B", None)).unwrap();
        for id in [&a, &b] {
            assert_eq!(rt.record_ocr_outcome(id, ocr_ok()).unwrap(), VerificationStatus::OcrProcessed);
            assert_eq!(rt.assign_case(id, "case-9").unwrap(), VerificationStatus::LawyerReview);
        }
        assert_eq!(rt.case_overall_status("case-9").overall_status, CaseStatus::Partial);

        rt.record_review_decision(&a, accept()).unwrap();
        rt.record_review_decision(&b, reject("seal does not match registry")).unwrap();
        assert_eq!(rt.case_overall_status("case-9").overall_status, CaseStatus::IssuesFound);

        // Same case with the rejected document swapped for a verified one.
        let c = DocumentId::new("C");
        rt.register(b"c", request("C", None)).unwrap();
        rt.record_ocr_outcome(&c, ocr_ok()).unwrap();
        rt.assign_case(&c, "case-10").unwrap();
        rt.record_review_decision(&c, accept()).unwrap();
        let a2 = DocumentId::new("A2");
        rt.register(b"a2", request("A2", Some("case-10"))).unwrap();
        rt.record_ocr_outcome(&a2, ocr_ok()).unwrap();
        rt.record_review_decision(&a2, accept()).unwrap();
        let overview = rt.case_overall_status("case-10");
        assert_eq!(overview.overall_status, CaseStatus::Complete);
        assert_eq!(overview.document_count, 2);
    }

    #[test]
    fn test_resubmission_under_same_id_refused() {
        let (rt, _) = test_runtime();
        let id = DocumentId::new("A");
        rt.register(b"original", request("A", None)).unwrap();
        rt.record_ocr_outcome(&id, ocr_ok()).unwrap();
        rt.assign_case(&id, "case-1").unwrap();
        rt.record_review_decision(&id, accept()).unwrap();

        let err = rt.register(b"swapped content", request("A", None)).unwrap_err();
        assert!(matches!(err, RuntimeError::DocumentExists { .. }));
        assert!(err.is_recoverable());
        assert!(!rt.verify_by_bytes(b"swapped content").unwrap().verified);

        // Status record, ledger and certificate all still name the original bytes.
        let record = rt.document_status(&id).unwrap();
        assert_eq!(record.status, VerificationStatus::Verified);
        let chain = record.blockchain.unwrap();
        let cert = rt.generate_certificate(&id).unwrap();
        assert_eq!(chain.block_index, cert.block_index);
        assert_eq!(chain.content_fingerprint, digest_bytes(b"original"));
        assert_eq!(cert.content_fingerprint, digest_bytes(b"original"));

        // A re-submission goes in as a new document.
        rt.register(b"swapped content", request("A-v2", None)).unwrap();
        assert!(rt.verify_by_bytes(b"swapped content").unwrap().verified);
    }

    #[test]
    fn test_blockchain_record_attached_on_seal() {
        let (rt, _) = test_runtime();
        let outcome = rt.register(b"deed", request("A", None)).unwrap();
        let record = rt.document_status(&DocumentId::new("A")).unwrap();
        let chain = record.blockchain.expect("attached at seal");
        assert_eq!(chain.transaction_id, outcome.transaction.transaction_id);
        assert_eq!(chain.block_index, 1);
        assert_eq!(chain.content_fingerprint, digest_bytes(b"deed"));
    }

    // =============================================================================
    // CERTIFICATES
    // =============================================================================

    #[test]
    fn test_certificate_reports_live_integrity() {
        let (rt, _) = test_runtime();
        rt.register(b"hello", request("A", None)).unwrap();
        rt.register(b"world", request("B", None)).unwrap();

        let before = rt.generate_certificate(&DocumentId::new("B")).unwrap();
        assert_eq!(before.chain_integrity, ChainIntegrity::Intact);
        assert_eq!(before.block_index, 2);

        rt.tamper_with(|blocks| blocks[1].transactions[0].file_name.push('x'));
        let after = rt.generate_certificate(&DocumentId::new("B")).unwrap();
        assert_eq!(after.chain_integrity, ChainIntegrity::Compromised);
        assert_ne!(before.certificate_id, after.certificate_id);
        assert!(!rt.check_certificate(&before).is_valid());
    }

    #[test]
    fn test_certificate_json_shape() {
        let (rt, _) = test_runtime();
        rt.register(b"hello", request("A", None)).unwrap();
        let cert = rt.generate_certificate(&DocumentId::new("A")).unwrap();
        let json = serde_json::to_value(&cert).unwrap();
        for field in [
            "certificateId",
            "documentId",
            "contentFingerprint",
            "blockIndex",
            "blockDigest",
            "transactionId",
            "sealedAt",
            "chainIntegrity",
            "issuedAt",
        ] {
            assert!(json.get(field).is_some(), "missing {field}");
        }
    }
}
