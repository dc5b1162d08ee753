//! # Concurrent Registration
//!
//! Many uploaders registering at once, inline and deferred.

#[cfg(test)]
mod tests {
    use super::super::request;
    use ledger_runtime::{
        spawn_sealer, DocumentLedgerRuntime, LedgerConfig, RuntimeError, SealingMode,
    };
    use shared_crypto::digest_bytes;
    use shared_types::DocumentId;
    use std::collections::HashSet;
    use std::sync::{Arc, Barrier};
    use std::thread;
    use std::time::Duration;

    const WRITERS: usize = 8;
    const PER_WRITER: usize = 5;

    fn content(writer: usize, n: usize) -> Vec<u8> {
        format!("writer {writer} document {n}").into_bytes()
    }

    #[test]
    fn test_parallel_inline_registration() {
        let rt = Arc::new(DocumentLedgerRuntime::new(LedgerConfig::for_testing()).unwrap());

        let handles: Vec<_> = (0..WRITERS)
            .map(|w| {
                let rt = Arc::clone(&rt);
                thread::spawn(move || {
                    (0..PER_WRITER)
                        .map(|n| {
                            rt.register(&content(w, n), request(&format!("w{w}-{n}"), None))
                                .unwrap()
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let outcomes: Vec<_> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();

        // Every register returns with its transaction sealed somewhere.
        assert!(outcomes.iter().all(|o| o.is_sealed()));
        for o in &outcomes {
            let block = o.block.as_ref().unwrap();
            assert!(block.transactions.contains(&o.transaction));
        }

        let stats = rt.chain_stats();
        assert!(stats.chain_integrity);
        assert_eq!(stats.total_sealed_transactions, WRITERS * PER_WRITER);
        assert_eq!(stats.pending_count, 0);

        let ids: HashSet<_> = outcomes.iter().map(|o| o.transaction.transaction_id).collect();
        assert_eq!(ids.len(), WRITERS * PER_WRITER);

        for w in 0..WRITERS {
            for n in 0..PER_WRITER {
                assert!(rt.verify_by_bytes(&content(w, n)).unwrap().verified);
            }
        }
    }

    #[test]
    fn test_every_sealed_document_gets_blockchain_record() {
        const THREADS: usize = 4;
        const EACH: usize = 100;
        let rt = Arc::new(DocumentLedgerRuntime::new(LedgerConfig::for_testing()).unwrap());

        let handles: Vec<_> = (0..THREADS)
            .map(|w| {
                let rt = Arc::clone(&rt);
                thread::spawn(move || {
                    for n in 0..EACH {
                        rt.register(&content(w, n), request(&format!("w{w}-{n}"), None))
                            .unwrap();
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        for w in 0..THREADS {
            for n in 0..EACH {
                let id = DocumentId::new(format!("w{w}-{n}"));
                let sealed = rt.find_by_document_id(&id).expect("sealed");
                let record = rt.document_status(&id).unwrap().blockchain;
                let record = record.unwrap_or_else(|| panic!("{id} has no blockchain record"));
                assert_eq!(record.transaction_id, sealed.transaction.transaction_id);
                assert_eq!(record.block_index, sealed.block_index);
                assert_eq!(record.content_fingerprint, digest_bytes(&content(w, n)));
            }
        }
    }

    #[test]
    fn test_concurrent_duplicate_content_admits_one() {
        for round in 0..50 {
            let rt = Arc::new(DocumentLedgerRuntime::new(LedgerConfig::for_testing()).unwrap());
            let barrier = Arc::new(Barrier::new(2));

            let handles: Vec<_> = (0..2)
                .map(|i| {
                    let rt = Arc::clone(&rt);
                    let barrier = Arc::clone(&barrier);
                    thread::spawn(move || {
                        barrier.wait();
                        rt.register(b"same bytes", request(&format!("r{round}-{i}"), None))
                    })
                })
                .collect();
            let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

            let admitted = results.iter().filter(|r| r.is_ok()).count();
            assert_eq!(admitted, 1, "round {round}");
            assert!(results
                .iter()
                .any(|r| matches!(r, Err(RuntimeError::DuplicateContent { .. }))));
            assert_eq!(rt.chain_stats().total_sealed_transactions, 1);
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_duplicate_refused_while_sealer_runs() {
        let mut config = LedgerConfig::for_testing();
        config.sealing = SealingMode::Deferred { interval_ms: 5 };
        let rt = Arc::new(DocumentLedgerRuntime::new(config).unwrap());
        let sealer = spawn_sealer(Arc::clone(&rt)).unwrap();

        for n in 0..20 {
            let bytes = content(0, n);
            rt.register(&bytes, request(&format!("a{n}"), None)).unwrap();
            tokio::task::yield_now().await;
            let second = rt.register(&bytes, request(&format!("b{n}"), None));
            assert!(matches!(second, Err(RuntimeError::DuplicateContent { .. })));
        }
        sealer.shutdown().await;

        let stats = rt.chain_stats();
        assert_eq!(stats.total_sealed_transactions, 20);
        for n in 0..20 {
            let record = rt.document_status(&DocumentId::new(format!("a{n}"))).unwrap();
            assert!(record.blockchain.is_some());
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_deferred_batches_into_fewer_blocks() {
        let mut config = LedgerConfig::for_testing();
        config.sealing = SealingMode::Deferred { interval_ms: 200 };
        let rt = Arc::new(DocumentLedgerRuntime::new(config).unwrap());
        let sealer = spawn_sealer(Arc::clone(&rt)).unwrap();
        // Let the immediate first tick pass.
        tokio::time::sleep(Duration::from_millis(20)).await;

        for n in 0..10 {
            let outcome = rt
                .register(&content(0, n), request(&format!("d{n}"), None))
                .unwrap();
            assert!(!outcome.is_sealed());
        }
        sealer.shutdown().await;

        let stats = rt.chain_stats();
        assert_eq!(stats.total_sealed_transactions, 10);
        assert!(stats.total_blocks < 1 + 10);
        assert!(stats.chain_integrity);
    }
}
