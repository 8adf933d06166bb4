//! Transition call execution.
//!
//! # Responsibilities
//! - Resolve the gas envelope (caller override or process-wide default)
//! - Convert gas price, gas limit and amount into chain units
//! - Invoke the named transition and hand back the provider's handle

use crate::error::BridgeResult;
use crate::provider::discovery::ProviderDiscovery;
use crate::provider::types::{CallEnvelope, ContractField, TransactionHandle, Unit};

/// Default gas price, in the gas-price display unit.
pub const DEFAULT_GAS_PRICE: &str = "2000";
/// Default gas limit.
pub const DEFAULT_GAS_LIMIT: &str = "10000";

/// Gas configuration for a transition call. Immutable once constructed;
/// a caller override replaces the default wholesale, never field by field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GasConfig {
    /// Gas price in the display unit, converted before submission.
    pub gas_price: String,
    /// Gas limit as a decimal string.
    pub gas_limit: String,
}

impl Default for GasConfig {
    fn default() -> Self {
        Self {
            gas_price: DEFAULT_GAS_PRICE.to_string(),
            gas_limit: DEFAULT_GAS_LIMIT.to_string(),
        }
    }
}

/// Parameters of a transition call.
#[derive(Debug, Clone)]
pub struct CallParams {
    pub contract_address: String,
    pub transition: String,
    /// Ordered transition fields, passed through to the provider as-is.
    pub params: Vec<ContractField>,
    /// Amount in the major display unit; converted to minor units, with an
    /// unconvertible amount submitted as "0".
    pub amount: String,
}

/// Submits transition calls against the discovered provider.
#[derive(Debug, Clone)]
pub struct TransactionExecutor {
    discovery: ProviderDiscovery,
    defaults: GasConfig,
}

impl TransactionExecutor {
    pub fn new(discovery: ProviderDiscovery) -> Self {
        Self::with_defaults(discovery, GasConfig::default())
    }

    pub fn with_defaults(discovery: ProviderDiscovery, defaults: GasConfig) -> Self {
        Self {
            discovery,
            defaults,
        }
    }

    /// Invoke a contract transition.
    ///
    /// Provider-level failures propagate unchanged; there is no local
    /// retry or recovery.
    pub async fn call(
        &self,
        params: CallParams,
        gas: Option<GasConfig>,
    ) -> BridgeResult<TransactionHandle> {
        let gas = gas.unwrap_or_else(|| self.defaults.clone());

        let capability = self.discovery.acquire().await?;
        let contract = capability.contracts.at(&params.contract_address);

        let gas_price = capability.utils.to_minor(&gas.gas_price, Unit::GasPrice)?;
        let gas_limit = capability.utils.long_from_number(&gas.gas_limit)?;

        // An amount that converts to nothing is submitted as zero rather
        // than failing the call.
        let amount = match capability.utils.to_minor(&params.amount, Unit::Native) {
            Ok(amount) if !amount.is_empty() => amount,
            _ => "0".to_string(),
        };

        tracing::debug!(
            contract = %params.contract_address,
            transition = %params.transition,
            %amount,
            %gas_price,
            gas_limit,
            "submitting transition call"
        );

        contract
            .call(
                &params.transition,
                &params.params,
                CallEnvelope {
                    amount,
                    gas_price,
                    gas_limit,
                },
            )
            .await
    }
}
