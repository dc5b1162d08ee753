//! # Subsystem Container
//!
//! Holds all subsystem instances and builds them in dependency order:
//!
//! ```text
//! Level 0: Transaction Pool (dl-01)
//! Level 1: Ledger (dl-02), mines genesis on construction
//! Level 2: Verification Status (dl-03), Certificates (dl-04, reads dl-02)
//! ```
//!
//! ## Thread Safety
//!
//! - All subsystems wrapped in `Arc` for shared ownership
//! - Each subsystem does its own locking; the container adds none

use std::sync::Arc;

use dl_01_transaction_pool::SharedTransactionPool;
use dl_02_ledger::{LedgerError, LedgerService};
use dl_03_verification_status::VerificationStatusService;
use dl_04_certificate::CertificateGenerator;
use shared_types::TimeSource;
use tracing::info;

use crate::adapters::PoolSource;
use crate::container::config::LedgerConfig;

/// Central container holding all subsystem instances.
pub struct SubsystemContainer {
    /// Transaction Pool (Subsystem 1)
    pub pool: Arc<SharedTransactionPool>,

    /// Ledger (Subsystem 2)
    pub ledger: Arc<LedgerService>,

    /// Verification Status (Subsystem 3)
    pub status: Arc<VerificationStatusService>,

    /// Certificate Generator (Subsystem 4)
    pub certificates: CertificateGenerator<LedgerService>,

    /// Pool adapter handed to the sealer
    pub pending_source: PoolSource,

    /// Shared clock
    pub clock: Arc<dyn TimeSource>,
}

impl SubsystemContainer {
    /// Build every subsystem from `config`. Genesis is mined here.
    pub fn new(config: &LedgerConfig, clock: Arc<dyn TimeSource>) -> Result<Self, LedgerError> {
        info!("Initializing subsystems...");

        let pool = Arc::new(SharedTransactionPool::new(
            config.pool.clone(),
            config.integrity_key(),
            Arc::clone(&clock),
        ));
        let ledger = Arc::new(LedgerService::new(config.mining.clone(), Arc::clone(&clock))?);
        let status = Arc::new(VerificationStatusService::in_memory(Arc::clone(&clock)));
        let certificates = CertificateGenerator::new(Arc::clone(&ledger), Arc::clone(&clock));
        let pending_source = PoolSource::new(Arc::clone(&pool));

        info!(
            difficulty = ledger.difficulty(),
            genesis = %ledger.genesis_digest(),
            "All subsystems initialized"
        );

        Ok(Self {
            pool,
            ledger,
            status,
            certificates,
            pending_source,
            clock,
        })
    }
}
