//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files,
//! and every field has a default so a minimal (or absent) config works.

use serde::{Deserialize, Serialize};

use crate::tx::executor::GasConfig;

/// Root configuration for the wallet bridge.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct BridgeConfig {
    /// Provider discovery poll settings.
    pub discovery: DiscoveryConfig,

    /// Process-wide default gas for transition calls.
    pub gas: GasDefaults,
}

/// Provider discovery settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// Fixed interval between provider probes, in milliseconds.
    pub poll_interval_ms: u64,

    /// Attempt budget before discovery fails with NotInstalled.
    pub max_attempts: u32,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 100,
            max_attempts: 10,
        }
    }
}

/// Default gas configuration, applied when a caller supplies none.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GasDefaults {
    /// Gas price in the display unit.
    pub gas_price: String,

    /// Gas limit as a decimal string.
    pub gas_limit: String,
}

impl Default for GasDefaults {
    fn default() -> Self {
        Self {
            gas_price: "2000".to_string(),
            gas_limit: "10000".to_string(),
        }
    }
}

impl From<GasDefaults> for GasConfig {
    fn from(defaults: GasDefaults) -> Self {
        GasConfig {
            gas_price: defaults.gas_price,
            gas_limit: defaults.gas_limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_chain_constants() {
        let config = BridgeConfig::default();
        assert_eq!(config.discovery.poll_interval_ms, 100);
        assert_eq!(config.discovery.max_attempts, 10);
        assert_eq!(config.gas.gas_price, "2000");
        assert_eq!(config.gas.gas_limit, "10000");
    }

    #[test]
    fn test_gas_defaults_convert_to_call_gas() {
        let gas: GasConfig = GasDefaults::default().into();
        assert_eq!(gas, GasConfig::default());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: BridgeConfig =
            toml::from_str("[discovery]\nmax_attempts = 5\n").unwrap();
        assert_eq!(config.discovery.max_attempts, 5);
        assert_eq!(config.discovery.poll_interval_ms, 100);
        assert_eq!(config.gas.gas_limit, "10000");
    }
}
