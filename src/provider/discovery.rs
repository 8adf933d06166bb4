//! Bounded-retry discovery of the injected wallet provider.
//!
//! # Responsibilities
//! - Resolve immediately with the no-op capability outside interactive
//!   contexts
//! - Poll the host at a fixed interval with a bounded attempt budget
//! - Guarantee the poll timer is released on both exit paths

use std::sync::Arc;
use std::time::Duration;

use tokio::time::{interval, MissedTickBehavior};

use crate::config::schema::DiscoveryConfig;
use crate::error::{BridgeError, BridgeResult};
use crate::provider::capability::WalletCapability;
use crate::provider::environment::HostEnvironment;

/// Locates the environment-injected wallet capability.
#[derive(Clone)]
pub struct ProviderDiscovery {
    env: Arc<dyn HostEnvironment>,
    config: DiscoveryConfig,
}

impl ProviderDiscovery {
    /// Create a discovery with the default poll settings (100 ms, 10 attempts).
    pub fn new(env: Arc<dyn HostEnvironment>) -> Self {
        Self::with_config(env, DiscoveryConfig::default())
    }

    pub fn with_config(env: Arc<dyn HostEnvironment>, config: DiscoveryConfig) -> Self {
        Self { env, config }
    }

    /// Whether the underlying context can carry an injected provider.
    pub fn is_interactive(&self) -> bool {
        self.env.is_interactive()
    }

    /// Resolve the wallet capability.
    ///
    /// Non-interactive contexts resolve immediately with the no-op
    /// capability. Interactive contexts probe the host once per tick up to
    /// the attempt budget and fail with [`BridgeError::NotInstalled`] when
    /// the budget is exhausted. Each call runs its own poll; no state is
    /// shared between invocations, and the interval timer is dropped as
    /// soon as the call settles.
    pub async fn acquire(&self) -> BridgeResult<WalletCapability> {
        if !self.env.is_interactive() {
            return Ok(WalletCapability::noop());
        }

        let mut ticker = interval(Duration::from_millis(self.config.poll_interval_ms));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        for attempt in 1..=self.config.max_attempts {
            ticker.tick().await;

            if let Some(capability) = self.env.probe() {
                tracing::debug!(attempt, "wallet provider found");
                return Ok(capability);
            }
        }

        tracing::warn!(
            attempts = self.config.max_attempts,
            "wallet provider not found, giving up"
        );
        Err(BridgeError::NotInstalled)
    }
}

impl std::fmt::Debug for ProviderDiscovery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderDiscovery")
            .field("poll_interval_ms", &self.config.poll_interval_ms)
            .field("max_attempts", &self.config.max_attempts)
            .finish()
    }
}
