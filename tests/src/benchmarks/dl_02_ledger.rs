//! # DL-02 Ledger Benchmarks
//!
//! - Mining cost grows 16x per difficulty step
//! - Full audit is linear in chain length
//! - Fingerprint lookup is O(1) through the side index

use chrono::Utc;
use criterion::{black_box, BenchmarkId, Criterion, Throughput};
use dl_02_ledger::{create_genesis_block, Chain, Difficulty, ProofOfWorkMiner};
use rand::Rng;
use shared_crypto::{digest_bytes, Fingerprint};
use shared_types::{DocumentId, IntegrityKey, RegistrationRequest, Transaction};
use std::time::Duration;

fn transactions(count: usize) -> Vec<Transaction> {
    let key = IntegrityKey::from_bytes([5; 32]);
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|n| {
            let request = RegistrationRequest {
                document_id: DocumentId::new(format!("doc-{n}")),
                file_name: format!("doc-{n}.pdf"),
                uploader_id: "bench".into(),
                linked_case_id: None,
                document_category: "deed".into(),
            };
            let content: [u8; 32] = rng.gen();
            Transaction::new(&request, digest_bytes(&content), Utc::now(), &key).unwrap()
        })
        .collect()
}

fn build_chain(blocks: usize, txs_per_block: usize) -> (Chain, Vec<Fingerprint>) {
    let miner = ProofOfWorkMiner::new(Difficulty::new(1));
    let genesis = create_genesis_block(&miner, Utc::now()).unwrap();
    let mut chain = Chain::new(genesis, miner.difficulty());
    let mut fingerprints = Vec::new();
    for _ in 0..blocks {
        let txs = transactions(txs_per_block);
        fingerprints.extend(txs.iter().map(|t| t.content_fingerprint.clone()));
        let block = miner
            .mine(chain.next_index(), chain.tip().block_digest.clone(), Utc::now(), txs)
            .unwrap();
        chain.append(block).unwrap();
    }
    (chain, fingerprints)
}

/// Nonce search at increasing difficulty.
pub fn bench_mining(c: &mut Criterion) {
    let mut group = c.benchmark_group("dl-02-mining");
    group.measurement_time(Duration::from_secs(10));

    let txs = transactions(10);
    let prev = digest_bytes(b"previous");
    for difficulty in [1u8, 2, 3] {
        let miner = ProofOfWorkMiner::new(Difficulty::new(difficulty));
        group.bench_with_input(
            BenchmarkId::new("mine_10_tx", difficulty),
            &difficulty,
            |b, _| {
                b.iter(|| {
                    black_box(
                        miner
                            .mine(1, prev.clone(), Utc::now(), txs.clone())
                            .unwrap()
                            .nonce,
                    )
                })
            },
        );
    }
    group.finish();
}

/// Audit and lookup against chains of increasing length.
pub fn bench_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("dl-02-chain");

    for blocks in [10usize, 100, 500] {
        let (chain, fingerprints) = build_chain(blocks, 4);
        group.throughput(Throughput::Elements(blocks as u64));
        group.bench_with_input(BenchmarkId::new("audit", blocks), &chain, |b, chain| {
            b.iter(|| black_box(chain.is_valid()))
        });

        let target = fingerprints[fingerprints.len() / 2].clone();
        group.bench_with_input(
            BenchmarkId::new("find_by_fingerprint", blocks),
            &chain,
            |b, chain| b.iter(|| black_box(chain.find_by_fingerprint(&target).is_some())),
        );
    }
    group.finish();
}
