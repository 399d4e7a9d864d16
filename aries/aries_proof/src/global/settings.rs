use std::time::Duration;

use typed_builder::TypedBuilder;

pub const DEFAULT_SEARCH_LIMIT: usize = 100;
pub const DEFAULT_MAX_CONCURRENT_LEDGER_REQUESTS: usize = 8;
pub const DEFAULT_LEDGER_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CRYPTO_TIMEOUT_SECS: u64 = 60;
pub const MIN_TIMEOUT_SECS: u64 = 1;

/// Tunables of [`crate::handlers::proof_presentation::service::ProofService`].
///
/// Deserializes from a partial JSON object, missing keys take their defaults:
/// `{"search_limit": 20, "ledger_timeout_secs": 5}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(default)]
pub struct ProofServiceConfig {
    /// Page size of record listings and credential searches when the caller gives none.
    #[builder(default = DEFAULT_SEARCH_LIMIT)]
    pub search_limit: usize,
    /// Upper bound of ledger lookups in flight for one aggregation. Values below 1 act as 1.
    #[builder(default = DEFAULT_MAX_CONCURRENT_LEDGER_REQUESTS)]
    pub max_concurrent_ledger_requests: usize,
    /// Per ledger call. Values below [`MIN_TIMEOUT_SECS`] act as the minimum, as do those of
    /// `crypto_timeout_secs`.
    #[builder(default = DEFAULT_LEDGER_TIMEOUT_SECS)]
    pub ledger_timeout_secs: u64,
    #[builder(default = DEFAULT_CRYPTO_TIMEOUT_SECS)]
    pub crypto_timeout_secs: u64,
}

impl Default for ProofServiceConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl ProofServiceConfig {
    pub fn ledger_concurrency(&self) -> usize {
        self.max_concurrent_ledger_requests.max(1)
    }

    pub fn ledger_timeout(&self) -> Duration {
        Duration::from_secs(self.ledger_timeout_secs.max(MIN_TIMEOUT_SECS))
    }

    pub fn crypto_timeout(&self) -> Duration {
        Duration::from_secs(self.crypto_timeout_secs.max(MIN_TIMEOUT_SECS))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = ProofServiceConfig::default();
        assert_eq!(config.search_limit, 100);
        assert_eq!(config.ledger_concurrency(), 8);
        assert_eq!(config.ledger_timeout(), Duration::from_secs(30));
        assert_eq!(config.crypto_timeout(), Duration::from_secs(60));
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: ProofServiceConfig =
            serde_json::from_value(json!({"search_limit": 20, "max_concurrent_ledger_requests": 0}))
                .unwrap();
        assert_eq!(config.search_limit, 20);
        assert_eq!(config.ledger_concurrency(), 1);
        assert_eq!(config.ledger_timeout_secs, DEFAULT_LEDGER_TIMEOUT_SECS);
    }

    #[test]
    fn test_zero_timeouts_are_raised_to_minimum() {
        let config: ProofServiceConfig =
            serde_json::from_value(json!({"ledger_timeout_secs": 0, "crypto_timeout_secs": 0}))
                .unwrap();
        assert_eq!(config.ledger_timeout(), Duration::from_secs(MIN_TIMEOUT_SECS));
        assert_eq!(config.crypto_timeout(), Duration::from_secs(MIN_TIMEOUT_SECS));

        let config = ProofServiceConfig::builder().ledger_timeout_secs(5).build();
        assert_eq!(config.ledger_timeout(), Duration::from_secs(5));
    }
}
