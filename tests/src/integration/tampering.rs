//! # Tamper Scenarios
//!
//! Attacks that bypass every API and edit stored blocks directly. The
//! audit must catch each one, and every read path must surface it.

#[cfg(test)]
mod tests {
    use super::super::{request, test_runtime};
    use dl_02_ledger::{ChainFault, Difficulty, ProofOfWorkMiner};
    use dl_04_certificate::ChainIntegrity;
    use ledger_runtime::{DocumentLedgerRuntime, RuntimeError};
    use proptest::prelude::*;
    use shared_crypto::digest_bytes;
    use shared_types::DocumentId;

    fn three_blocks() -> DocumentLedgerRuntime {
        let (rt, _) = test_runtime();
        rt.register(b"hello", request("A", None)).unwrap();
        rt.register(b"world", request("B", None)).unwrap();
        rt
    }

    fn first_fault(rt: &DocumentLedgerRuntime) -> ChainFault {
        rt.audit_chain().fault.expect("audit should fail")
    }

    // =============================================================================
    // FIELD EDITS
    // =============================================================================

    #[test]
    fn test_swapped_content_fingerprint() {
        let rt = three_blocks();
        rt.tamper_with(|blocks| {
            blocks[1].transactions[0].content_fingerprint = digest_bytes(b"forged")
        });
        assert_eq!(first_fault(&rt), ChainFault::DigestMismatch { index: 1 });
    }

    #[test]
    fn test_edited_timestamp() {
        let rt = three_blocks();
        rt.tamper_with(|blocks| blocks[2].created_at += chrono::Duration::seconds(1));
        assert_eq!(first_fault(&rt), ChainFault::DigestMismatch { index: 2 });
    }

    #[test]
    fn test_genesis_edit_detected() {
        let rt = three_blocks();
        rt.tamper_with(|blocks| blocks[0].nonce += 1);
        assert_eq!(first_fault(&rt).block_index(), 0);
    }

    #[test]
    fn test_deleted_block_is_index_gap() {
        let rt = three_blocks();
        rt.tamper_with(|blocks| {
            blocks.remove(1);
        });
        assert_eq!(
            first_fault(&rt),
            ChainFault::IndexGap {
                expected: 1,
                actual: 2
            }
        );
    }

    #[test]
    fn test_remined_block_breaks_next_link() {
        let rt = three_blocks();
        let miner = ProofOfWorkMiner::new(Difficulty::new(1));
        rt.tamper_with(|blocks| {
            let original = &blocks[1];
            let mut txs = original.transactions.clone();
            txs[0].content_fingerprint = digest_bytes(b"forged");
            // A forger who re-mines block 1 still cannot fix block 2's link.
            let forged = miner
                .mine(
                    original.index,
                    original.previous_block_digest.clone(),
                    original.created_at,
                    txs,
                )
                .unwrap();
            blocks[1] = forged;
        });
        assert_eq!(first_fault(&rt), ChainFault::BrokenLink { index: 2 });
    }

    #[test]
    fn test_restoring_block_restores_validity() {
        let rt = three_blocks();
        let mut saved = None;
        rt.tamper_with(|blocks| {
            saved = Some(blocks[1].clone());
            blocks[1].nonce ^= 1;
        });
        assert!(!rt.validate_chain());

        rt.tamper_with(|blocks| blocks[1] = saved.take().unwrap());
        assert!(rt.validate_chain());
    }

    // =============================================================================
    // SURFACING
    // =============================================================================

    #[test]
    fn test_verification_refused_on_broken_chain() {
        let rt = three_blocks();
        rt.tamper_with(|blocks| blocks[2].nonce ^= 1);

        let err = rt.verify_by_bytes(b"hello").unwrap_err();
        assert!(matches!(
            err,
            RuntimeError::IntegrityViolation {
                fault: ChainFault::DigestMismatch { index: 2 }
            }
        ));
        assert!(!err.is_recoverable());
        assert!(rt.verify_by_fingerprint(digest_bytes(b"world").as_str()).is_err());
    }

    #[test]
    fn test_stats_and_certificates_report_instead_of_failing() {
        let rt = three_blocks();
        rt.tamper_with(|blocks| blocks[1].nonce ^= 1);

        let stats = rt.chain_stats();
        assert!(!stats.chain_integrity);
        assert_eq!(stats.total_blocks, 3);

        let cert = rt.generate_certificate(&DocumentId::new("A")).unwrap();
        assert_eq!(cert.chain_integrity, ChainIntegrity::Compromised);
    }

    #[test]
    fn test_forged_integrity_tag_not_verified() {
        let rt = three_blocks();
        let miner = ProofOfWorkMiner::new(Difficulty::new(1));
        // Rewrite the whole suffix so the chain itself still audits clean;
        // only the HMAC tag can catch this.
        rt.tamper_with(|blocks| {
            let mut prev = blocks[0].block_digest.clone();
            for block in blocks.iter_mut().skip(1) {
                let mut txs = block.transactions.clone();
                if block.index == 1 {
                    txs[0].uploader_id = "mallory".into();
                }
                *block = miner
                    .mine(block.index, prev.clone(), block.created_at, txs)
                    .unwrap();
                prev = block.block_digest.clone();
            }
        });
        assert!(rt.validate_chain());

        let v = rt.verify_by_bytes(b"hello").unwrap();
        assert!(!v.verified);
        assert_eq!(v.integrity_tag_valid, Some(false));
        assert!(rt.verify_by_bytes(b"world").unwrap().verified);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_any_nonce_flip_detected(block in 0usize..3, bit in 0u32..64) {
            let rt = three_blocks();
            rt.tamper_with(|blocks| blocks[block].nonce ^= 1u64 << bit);
            prop_assert!(!rt.validate_chain());
            rt.tamper_with(|blocks| blocks[block].nonce ^= 1u64 << bit);
            prop_assert!(rt.validate_chain());
        }
    }
}
