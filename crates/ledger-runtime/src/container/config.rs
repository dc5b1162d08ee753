//! # Ledger Configuration
//!
//! Unified configuration for the pool, the miner and the runtime façade.
//!
//! ## Security Requirements
//!
//! - `hmac_secret` MUST NOT be the default zero value in production
//! - Invalid environment values are errors, never silently defaulted

use dl_01_transaction_pool::PoolConfig;
use dl_02_ledger::config::MAX_DIFFICULTY;
use dl_02_ledger::MiningConfig;
use shared_types::IntegrityKey;
use std::env;
use std::time::Duration;
use thiserror::Error;

/// When sealing happens relative to `register`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SealingMode {
    /// `register` seals before returning.
    Inline,
    /// A background task seals on an interval; `register` returns unsealed.
    Deferred {
        /// Time between seal attempts
        interval_ms: u64,
    },
}

impl SealingMode {
    /// Seal interval, for deferred mode.
    pub fn interval(&self) -> Option<Duration> {
        match self {
            SealingMode::Inline => None,
            SealingMode::Deferred { interval_ms } => Some(Duration::from_millis(*interval_ms)),
        }
    }
}

/// Default deferred-seal interval.
pub const DEFAULT_SEAL_INTERVAL_MS: u64 = 1_000;

/// Complete runtime configuration.
#[derive(Debug, Clone)]
pub struct LedgerConfig {
    /// Proof-of-work settings.
    pub mining: MiningConfig,
    /// Pool capacity.
    pub pool: PoolConfig,
    /// Integrity-tag secret (32 bytes). MUST NOT be default in production.
    pub hmac_secret: [u8; 32],
    /// Refuse content whose fingerprint is already sealed or pending.
    pub reject_duplicate_content: bool,
    /// Inline or deferred sealing.
    pub sealing: SealingMode,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            mining: MiningConfig::default(),
            pool: PoolConfig::default(),
            hmac_secret: [0u8; 32], // MUST be overridden in production
            reject_duplicate_content: true,
            sealing: SealingMode::Inline,
        }
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// HMAC secret is not set (zero value).
    #[error(
        "SECURITY VIOLATION: HMAC secret is default zero value. \
         Set DL_HMAC_SECRET (64 hex chars) or provide it in config."
    )]
    InsecureHmacSecret,

    /// An environment variable could not be parsed.
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue {
        /// Variable name
        var: &'static str,
        /// Parse failure
        reason: String,
    },
}

impl LedgerConfig {
    /// Load from the process environment over the defaults.
    ///
    /// # Environment Variables
    ///
    /// - `DL_DIFFICULTY`: leading hex zeros, 0..=8 (default: 2)
    /// - `DL_HMAC_SECRET`: 64 hex characters
    /// - `DL_REJECT_DUPLICATES`: true/false (default: true)
    /// - `DL_SEALING_MODE`: inline/deferred (default: inline)
    /// - `DL_SEAL_INTERVAL_MS`: deferred interval (default: 1000)
    /// - `DL_MAX_PENDING`: pool capacity (default: 10000)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) over an arbitrary lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup("DL_DIFFICULTY") {
            let difficulty: u8 = parse("DL_DIFFICULTY", &raw)?;
            if difficulty > MAX_DIFFICULTY {
                return Err(ConfigError::InvalidValue {
                    var: "DL_DIFFICULTY",
                    reason: format!("{} exceeds maximum {}", difficulty, MAX_DIFFICULTY),
                });
            }
            config.mining.difficulty = difficulty;
        }

        if let Some(raw) = lookup("DL_HMAC_SECRET") {
            let bytes = hex::decode(raw.trim()).map_err(|e| ConfigError::InvalidValue {
                var: "DL_HMAC_SECRET",
                reason: e.to_string(),
            })?;
            config.hmac_secret =
                bytes
                    .as_slice()
                    .try_into()
                    .map_err(|_| ConfigError::InvalidValue {
                        var: "DL_HMAC_SECRET",
                        reason: format!("expected 32 bytes, got {}", bytes.len()),
                    })?;
        }

        if let Some(raw) = lookup("DL_REJECT_DUPLICATES") {
            config.reject_duplicate_content = parse_bool("DL_REJECT_DUPLICATES", &raw)?;
        }

        if let Some(raw) = lookup("DL_MAX_PENDING") {
            config.pool.max_pending = parse("DL_MAX_PENDING", &raw)?;
        }

        let interval_ms = match lookup("DL_SEAL_INTERVAL_MS") {
            Some(raw) => parse("DL_SEAL_INTERVAL_MS", &raw)?,
            None => DEFAULT_SEAL_INTERVAL_MS,
        };
        if let Some(raw) = lookup("DL_SEALING_MODE") {
            config.sealing = match raw.trim().to_ascii_lowercase().as_str() {
                "inline" => SealingMode::Inline,
                "deferred" => SealingMode::Deferred { interval_ms },
                other => {
                    return Err(ConfigError::InvalidValue {
                        var: "DL_SEALING_MODE",
                        reason: format!("expected inline or deferred, got {:?}", other),
                    })
                }
            };
        }

        Ok(config)
    }

    /// Validate configuration for production readiness.
    ///
    /// # Returns
    ///
    /// Returns `Err` if:
    /// - HMAC secret is the default zero value
    pub fn validate_for_production(&self) -> Result<(), ConfigError> {
        if self.hmac_secret == [0u8; 32] {
            return Err(ConfigError::InsecureHmacSecret);
        }
        Ok(())
    }

    /// Integrity key built from `hmac_secret`.
    pub fn integrity_key(&self) -> IntegrityKey {
        IntegrityKey::from_bytes(self.hmac_secret)
    }

    /// Fast, inline, non-zero secret.
    pub fn for_testing() -> Self {
        Self {
            mining: MiningConfig::for_testing(),
            pool: PoolConfig::default(),
            hmac_secret: [7u8; 32],
            reject_duplicate_content: true,
            sealing: SealingMode::Inline,
        }
    }
}

fn parse<T>(var: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
        var,
        reason: e.to_string(),
    })
}

fn parse_bool(var: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => Err(ConfigError::InvalidValue {
            var,
            reason: format!("expected a boolean, got {:?}", other),
        }),
    }
}
