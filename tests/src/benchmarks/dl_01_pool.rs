//! # DL-01 Transaction Pool Benchmarks
//!
//! - Submit cost is dominated by two SHA-256 digests and one HMAC
//! - Drain is a single move out of the pending list

use criterion::{black_box, BatchSize, BenchmarkId, Criterion, Throughput};
use dl_01_transaction_pool::{PoolConfig, SharedTransactionPool, TransactionPoolApi};
use shared_crypto::digest_bytes;
use shared_types::{DocumentId, IntegrityKey, RegistrationRequest, SystemTimeSource};
use std::sync::Arc;

fn pool() -> SharedTransactionPool {
    SharedTransactionPool::new(
        PoolConfig::default(),
        IntegrityKey::from_bytes([3; 32]),
        Arc::new(SystemTimeSource),
    )
}

fn request(n: usize) -> RegistrationRequest {
    RegistrationRequest {
        document_id: DocumentId::new(format!("bench-{n}")),
        file_name: format!("bench-{n}.pdf"),
        uploader_id: "bench".into(),
        linked_case_id: None,
        document_category: "contract".into(),
    }
}

/// Submit and drain throughput.
pub fn bench_pool(c: &mut Criterion) {
    let mut group = c.benchmark_group("dl-01-transaction-pool");

    let req = request(0);
    let fp = digest_bytes(b"bench content");
    group.bench_function("submit_single", |b| {
        b.iter_batched(
            pool,
            |pool| black_box(pool.submit(&req, fp.clone()).is_ok()),
            BatchSize::SmallInput,
        )
    });

    for size in [10usize, 100, 1_000] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("drain_all", size), &size, |b, &size| {
            b.iter_batched(
                || {
                    let pool = pool();
                    for n in 0..size {
                        pool.submit(&request(n), digest_bytes(&n.to_le_bytes())).unwrap();
                    }
                    pool
                },
                |pool| black_box(pool.drain_all().len()),
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}
