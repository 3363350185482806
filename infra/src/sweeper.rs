//! Background expiry sweeper
//!
//! Expiry is checked lazily at verification time, so an entry whose owner
//! never verifies again would linger forever. The sweeper bounds memory by
//! periodically purging expired entries; it is not a correctness mechanism.

use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

use otp_core::services::otp::CodeStoreTrait;

/// Configuration for the expiry sweeper
#[derive(Debug, Clone)]
pub struct SweeperConfig {
    /// How often to run a sweep, in seconds
    pub interval_seconds: u64,
    /// Whether the sweeper runs at all
    pub enabled: bool,
}

impl Default for SweeperConfig {
    fn default() -> Self {
        Self {
            interval_seconds: 300,
            enabled: true,
        }
    }
}

/// Periodic cleanup of expired pending codes
pub struct ExpirySweeper<S: CodeStoreTrait + 'static> {
    store: Arc<S>,
    config: SweeperConfig,
}

impl<S: CodeStoreTrait> ExpirySweeper<S> {
    /// Create a new sweeper over the given store
    pub fn new(store: Arc<S>, config: SweeperConfig) -> Self {
        Self { store, config }
    }

    /// Run a single sweep cycle, returning the number of entries purged.
    pub async fn run_sweep(&self) -> Result<usize, String> {
        let purged = self.store.purge_expired(Utc::now()).await?;
        if purged > 0 {
            info!(purged = purged, "Purged expired verification codes");
        }
        Ok(purged)
    }

    /// Spawn the periodic sweep loop on the current tokio runtime.
    ///
    /// Returns immediately; the task runs until the runtime shuts down.
    /// Does nothing when the sweeper is disabled.
    pub fn spawn(self) {
        if !self.config.enabled {
            info!("Expiry sweeper disabled");
            return;
        }

        let interval = Duration::from_secs(self.config.interval_seconds);
        info!(
            interval_seconds = self.config.interval_seconds,
            "Starting expiry sweeper"
        );

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            // The first tick fires immediately; skip it so a sweep never
            // races server startup
            ticker.tick().await;
            loop {
                ticker.tick().await;
                if let Err(e) = self.run_sweep().await {
                    warn!(error = %e, "Expiry sweep failed");
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryCodeStore;
    use chrono::Duration as ChronoDuration;

    #[tokio::test]
    async fn test_run_sweep_purges_only_expired() {
        let store = Arc::new(InMemoryCodeStore::new());
        store
            .put("live@x.com", "111111", ChronoDuration::minutes(5))
            .await
            .unwrap();
        store
            .put("dead@x.com", "222222", ChronoDuration::seconds(-1))
            .await
            .unwrap();

        let sweeper = ExpirySweeper::new(store.clone(), SweeperConfig::default());
        let purged = sweeper.run_sweep().await.unwrap();

        assert_eq!(purged, 1);
        assert_eq!(store.len(), 1);
        assert!(store.get("live@x.com").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_run_sweep_on_empty_store() {
        let store = Arc::new(InMemoryCodeStore::new());
        let sweeper = ExpirySweeper::new(store, SweeperConfig::default());

        assert_eq!(sweeper.run_sweep().await.unwrap(), 0);
    }
}
