//! # Document Ledger Benchmarks
//!
//! | Subsystem | Claim | Target |
//! |-----------|-------|--------|
//! | dl-01 Transaction Pool | Submit | < 50μs |
//! | dl-02 Ledger | Mine at difficulty 2 | < 10ms |
//! | dl-02 Ledger | Fingerprint lookup | O(1) in chain length |

use criterion::{criterion_group, criterion_main};
use dl_tests::benchmarks::{dl_01_pool, dl_02_ledger};

criterion_group!(
    benches,
    dl_01_pool::bench_pool,
    dl_02_ledger::bench_mining,
    dl_02_ledger::bench_chain
);
criterion_main!(benches);
