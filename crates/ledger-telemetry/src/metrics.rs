//! Prometheus metrics for the document ledger.
//!
//! All metrics follow the naming convention: `dl_<subsystem>_<metric>_<unit>`
//!
//! ## Metric Types
//!
//! - **Counter**: Monotonically increasing value (e.g., blocks_sealed_total)
//! - **Gauge**: Value that can go up or down (e.g., transactions_pending)
//! - **Histogram**: Distribution of values (e.g., mining_duration_seconds)

use lazy_static::lazy_static;
use prometheus::{
    exponential_buckets, Counter, CounterVec, Encoder, Gauge, Histogram, HistogramOpts, Opts,
    Registry, TextEncoder,
};

use crate::TelemetryError;

lazy_static! {
    /// Global metrics registry
    pub static ref REGISTRY: Registry = Registry::new();

    // =========================================================================
    // TRANSACTION POOL METRICS (Subsystem 1)
    // =========================================================================

    /// Registrations accepted into the pool
    pub static ref TRANSACTIONS_SUBMITTED: Counter = Counter::new(
        "dl_pool_transactions_submitted_total",
        "Total registration transactions accepted into the pool"
    ).expect("metric creation failed");

    /// Current pool size
    pub static ref POOL_PENDING: Gauge = Gauge::new(
        "dl_pool_transactions_pending",
        "Transactions waiting to be sealed"
    ).expect("metric creation failed");

    // =========================================================================
    // LEDGER METRICS (Subsystem 2)
    // =========================================================================

    /// Blocks sealed since start
    pub static ref BLOCKS_SEALED: Counter = Counter::new(
        "dl_ledger_blocks_sealed_total",
        "Total number of blocks sealed"
    ).expect("metric creation failed");

    /// Blocks in the chain, genesis included
    pub static ref CHAIN_HEIGHT: Gauge = Gauge::new(
        "dl_ledger_chain_height",
        "Number of blocks in the chain"
    ).expect("metric creation failed");

    /// Seal duration (drain, nonce search and append)
    pub static ref MINING_DURATION: Histogram = Histogram::with_opts(
        HistogramOpts::new(
            "dl_ledger_mining_duration_seconds",
            "Time spent sealing a block"
        ).buckets(exponential_buckets(0.0001, 2.0, 16).expect("valid bucket layout"))
    ).expect("metric creation failed");

    /// Full chain audits
    pub static ref CHAIN_VALIDATIONS: CounterVec = CounterVec::new(
        Opts::new("dl_ledger_chain_validations_total", "Chain audits by outcome"),
        &["outcome"]  // outcome: intact/compromised
    ).expect("metric creation failed");

    /// Integrity violations surfaced to callers (for alerting)
    pub static ref INTEGRITY_VIOLATIONS: Counter = Counter::new(
        "dl_ledger_integrity_violations_total",
        "Operations refused because the chain failed its audit"
    ).expect("metric creation failed");

    // =========================================================================
    // VERIFICATION METRICS (Subsystems 3, 4)
    // =========================================================================

    /// Content verifications
    pub static ref VERIFICATIONS: CounterVec = CounterVec::new(
        Opts::new("dl_verify_requests_total", "Content verifications"),
        &["method", "result"]  // method: bytes/fingerprint, result: match/no_match
    ).expect("metric creation failed");

    /// Reviewer decisions
    pub static ref REVIEW_DECISIONS: CounterVec = CounterVec::new(
        Opts::new("dl_status_review_decisions_total", "Reviewer decisions by outcome"),
        &["outcome"]  // outcome: verified/rejected/refused
    ).expect("metric creation failed");

    /// Certificates issued
    pub static ref CERTIFICATES_ISSUED: CounterVec = CounterVec::new(
        Opts::new("dl_certificate_issued_total", "Certificates issued by chain verdict"),
        &["chain_integrity"]  // INTACT/COMPROMISED
    ).expect("metric creation failed");

    // =========================================================================
    // ERROR METRICS
    // =========================================================================

    /// Errors by subsystem and type
    pub static ref SUBSYSTEM_ERRORS: CounterVec = CounterVec::new(
        Opts::new("dl_subsystem_errors_total", "Errors by subsystem and type"),
        &["subsystem", "error_type"]
    ).expect("metric creation failed");
}

/// Register all metrics with the global registry.
///
/// Safe to call more than once; already-registered collectors are skipped.
pub fn register_metrics() -> Result<(), TelemetryError> {
    let metrics: Vec<Box<dyn prometheus::core::Collector>> = vec![
        // Pool
        Box::new(TRANSACTIONS_SUBMITTED.clone()),
        Box::new(POOL_PENDING.clone()),
        // Ledger
        Box::new(BLOCKS_SEALED.clone()),
        Box::new(CHAIN_HEIGHT.clone()),
        Box::new(MINING_DURATION.clone()),
        Box::new(CHAIN_VALIDATIONS.clone()),
        Box::new(INTEGRITY_VIOLATIONS.clone()),
        // Verification
        Box::new(VERIFICATIONS.clone()),
        Box::new(REVIEW_DECISIONS.clone()),
        Box::new(CERTIFICATES_ISSUED.clone()),
        // Errors
        Box::new(SUBSYSTEM_ERRORS.clone()),
    ];

    for metric in metrics {
        match REGISTRY.register(metric) {
            Ok(()) | Err(prometheus::Error::AlreadyReg) => {}
            Err(e) => return Err(TelemetryError::MetricsInit(e.to_string())),
        }
    }
    Ok(())
}

/// Encode all metrics as Prometheus text format.
pub fn gather_metrics() -> Result<String, TelemetryError> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| TelemetryError::MetricsInit(e.to_string()))?;
    String::from_utf8(buffer).map_err(|e| TelemetryError::MetricsInit(e.to_string()))
}

/// Timer guard for automatic histogram observation.
pub struct HistogramTimer {
    histogram: Histogram,
    start: std::time::Instant,
}

impl HistogramTimer {
    /// Start a new timer for the given histogram.
    pub fn new(histogram: &Histogram) -> Self {
        Self {
            histogram: histogram.clone(),
            start: std::time::Instant::now(),
        }
    }
}

impl Drop for HistogramTimer {
    fn drop(&mut self) {
        self.histogram.observe(self.start.elapsed().as_secs_f64());
    }
}

/// Start timing for a histogram. Observation happens on drop.
#[macro_export]
macro_rules! time_histogram {
    ($histogram:expr) => {
        $crate::metrics::HistogramTimer::new(&$histogram)
    };
}
