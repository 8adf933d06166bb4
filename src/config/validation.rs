//! Semantic configuration checks, separate from serde parsing.

use crate::config::schema::BridgeConfig;

/// A single semantic validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a parsed configuration. Collects every failure rather than
/// stopping at the first.
pub fn validate_config(config: &BridgeConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.discovery.poll_interval_ms == 0 {
        errors.push(ValidationError {
            field: "discovery.poll_interval_ms".to_string(),
            message: "poll interval must be nonzero".to_string(),
        });
    }

    if config.discovery.max_attempts == 0 {
        errors.push(ValidationError {
            field: "discovery.max_attempts".to_string(),
            message: "attempt budget must be nonzero".to_string(),
        });
    }

    if config.gas.gas_price.parse::<u64>().is_err() {
        errors.push(ValidationError {
            field: "gas.gas_price".to_string(),
            message: format!("'{}' is not a decimal number", config.gas.gas_price),
        });
    }

    if config.gas.gas_limit.parse::<u64>().is_err() {
        errors.push(ValidationError {
            field: "gas.gas_limit".to_string(),
            message: format!("'{}' is not a decimal number", config.gas.gas_limit),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
