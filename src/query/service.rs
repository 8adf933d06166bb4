//! On-chain state queries.
//!
//! # Responsibilities
//! - Fetch contract state, sub-state and chain metadata via the provider
//! - Short-circuit to absence in non-interactive contexts
//! - Forward structured provider errors verbatim

use serde_json::Value;

use crate::error::{BridgeError, BridgeResult};
use crate::provider::discovery::ProviderDiscovery;
use crate::provider::types::RpcResponse;
use crate::query::normalize::normalize_sub_state;

/// Read-only query facade over the discovered provider.
#[derive(Debug, Clone)]
pub struct StateQueryService {
    discovery: ProviderDiscovery,
}

impl StateQueryService {
    pub fn new(discovery: ProviderDiscovery) -> Self {
        Self { discovery }
    }

    /// Query one field of a contract's state.
    ///
    /// The result shape follows the arity policy in
    /// [`crate::query::normalize`]: no keys returns the full field value,
    /// one key drills into it, more than one probes existence and returns
    /// the full value. Absence is `Ok(None)`, never an error.
    pub async fn sub_state(
        &self,
        contract: &str,
        field: &str,
        args: &[String],
    ) -> BridgeResult<Option<Value>> {
        if !self.discovery.is_interactive() {
            return Ok(None);
        }

        let capability = self.discovery.acquire().await?;
        let res = capability
            .blockchain
            .get_smart_contract_sub_state(contract, field, args)
            .await?;
        let res = Self::check_provider_error(res)?;

        Ok(normalize_sub_state(res.result.as_ref(), field, args))
    }

    /// Query a contract's full state.
    pub async fn state(&self, contract: &str) -> BridgeResult<Option<Value>> {
        if !self.discovery.is_interactive() {
            return Ok(None);
        }

        let capability = self.discovery.acquire().await?;
        let res = capability
            .blockchain
            .get_smart_contract_state(contract)
            .await?;
        let res = Self::check_provider_error(res)?;

        Ok(res.result)
    }

    /// Query chain metadata.
    pub async fn blockchain_info(&self) -> BridgeResult<Option<Value>> {
        if !self.discovery.is_interactive() {
            return Ok(None);
        }

        let capability = self.discovery.acquire().await?;
        let res = capability.blockchain.get_blockchain_info().await?;
        let res = Self::check_provider_error(res)?;

        Ok(res.result)
    }

    fn check_provider_error(res: RpcResponse) -> BridgeResult<RpcResponse> {
        if let Some(err) = res.error {
            tracing::debug!(code = err.code, message = %err.message, "provider returned error");
            return Err(BridgeError::Provider(err.message));
        }
        Ok(res)
    }
}
