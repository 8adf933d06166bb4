//! Injected wallet capability surface.
//!
//! # Responsibilities
//! - Define the trait seams for the provider's `blockchain`, `contracts`
//!   and `utils` sub-capabilities
//! - Bundle them into a [`WalletCapability`] handle
//! - Provide the no-op capability used in non-interactive contexts
//!
//! # Design Decisions
//! - The host-injected singleton is modelled as an explicit parameter so
//!   every component can be exercised against a test double
//! - The capability is discovered, never owned: handles are `Arc` clones
//!   into the host environment

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::{BridgeError, BridgeResult};
use crate::provider::types::{
    CallEnvelope, ContractField, DeployGas, DeployedContract, RpcResponse, TransactionHandle,
    Unit,
};

/// Chain-query sub-capability (`blockchain.*`).
#[async_trait]
pub trait BlockchainApi: Send + Sync {
    /// Query a named field of a contract's state, optionally drilled into
    /// by lookup keys.
    async fn get_smart_contract_sub_state(
        &self,
        address: &str,
        field: &str,
        args: &[String],
    ) -> BridgeResult<RpcResponse>;

    /// Query a contract's full persisted state.
    async fn get_smart_contract_state(&self, address: &str) -> BridgeResult<RpcResponse>;

    /// Query chain metadata.
    async fn get_blockchain_info(&self) -> BridgeResult<RpcResponse>;
}

/// Contract lookup and instantiation sub-capability (`contracts.*`).
pub trait ContractsApi: Send + Sync {
    /// Handle to a deployed contract at the given address.
    fn at(&self, address: &str) -> Arc<dyn ContractHandle>;

    /// Stage a new contract from code and an init sequence, ready to deploy.
    fn create(&self, code: String, init: Vec<ContractField>) -> Arc<dyn PendingContract>;
}

/// Handle to a deployed contract.
#[async_trait]
pub trait ContractHandle: Send + Sync {
    /// Fetch the contract's code.
    async fn code(&self) -> BridgeResult<String>;

    /// Invoke a named transition with ordered fields and a value envelope.
    async fn call(
        &self,
        transition: &str,
        params: &[ContractField],
        envelope: CallEnvelope,
    ) -> BridgeResult<TransactionHandle>;
}

/// A staged contract awaiting deployment.
#[async_trait]
pub trait PendingContract: Send + Sync {
    /// Submit the deployment with a fixed gas envelope.
    async fn deploy(
        &self,
        gas: DeployGas,
    ) -> BridgeResult<(TransactionHandle, DeployedContract)>;
}

/// Numeric helper sub-capability (`utils.*`).
pub trait UnitUtils: Send + Sync {
    /// Convert a display-unit amount into the chain's minor unit.
    fn to_minor(&self, amount: &str, unit: Unit) -> BridgeResult<String>;

    /// Convert a decimal string into the chain's large-integer representation.
    fn long_from_number(&self, value: &str) -> BridgeResult<u64>;
}

/// The discovered wallet capability: one handle per sub-capability.
#[derive(Clone)]
pub struct WalletCapability {
    pub blockchain: Arc<dyn BlockchainApi>,
    pub contracts: Arc<dyn ContractsApi>,
    pub utils: Arc<dyn UnitUtils>,
}

impl WalletCapability {
    pub fn new(
        blockchain: Arc<dyn BlockchainApi>,
        contracts: Arc<dyn ContractsApi>,
        utils: Arc<dyn UnitUtils>,
    ) -> Self {
        Self {
            blockchain,
            contracts,
            utils,
        }
    }

    /// The empty capability handed out in non-interactive contexts.
    ///
    /// Queries answer with an absent result and never touch the network;
    /// contract operations fail with a provider error.
    pub fn noop() -> Self {
        let noop = Arc::new(NoopProvider);
        Self {
            blockchain: noop.clone(),
            contracts: noop.clone(),
            utils: noop,
        }
    }
}

impl std::fmt::Debug for WalletCapability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletCapability").finish_non_exhaustive()
    }
}

struct NoopProvider;

const NO_PROVIDER: &str = "no wallet provider available in this context";

#[async_trait]
impl BlockchainApi for NoopProvider {
    async fn get_smart_contract_sub_state(
        &self,
        _address: &str,
        _field: &str,
        _args: &[String],
    ) -> BridgeResult<RpcResponse> {
        Ok(RpcResponse::absent())
    }

    async fn get_smart_contract_state(&self, _address: &str) -> BridgeResult<RpcResponse> {
        Ok(RpcResponse::absent())
    }

    async fn get_blockchain_info(&self) -> BridgeResult<RpcResponse> {
        Ok(RpcResponse::absent())
    }
}

impl ContractsApi for NoopProvider {
    fn at(&self, _address: &str) -> Arc<dyn ContractHandle> {
        Arc::new(NoopProvider)
    }

    fn create(&self, _code: String, _init: Vec<ContractField>) -> Arc<dyn PendingContract> {
        Arc::new(NoopProvider)
    }
}

#[async_trait]
impl ContractHandle for NoopProvider {
    async fn code(&self) -> BridgeResult<String> {
        Err(BridgeError::Provider(NO_PROVIDER.to_string()))
    }

    async fn call(
        &self,
        _transition: &str,
        _params: &[ContractField],
        _envelope: CallEnvelope,
    ) -> BridgeResult<TransactionHandle> {
        Err(BridgeError::Provider(NO_PROVIDER.to_string()))
    }
}

#[async_trait]
impl PendingContract for NoopProvider {
    async fn deploy(
        &self,
        _gas: DeployGas,
    ) -> BridgeResult<(TransactionHandle, DeployedContract)> {
        Err(BridgeError::Provider(NO_PROVIDER.to_string()))
    }
}

impl UnitUtils for NoopProvider {
    fn to_minor(&self, _amount: &str, _unit: Unit) -> BridgeResult<String> {
        Err(BridgeError::Conversion(NO_PROVIDER.to_string()))
    }

    fn long_from_number(&self, _value: &str) -> BridgeResult<u64> {
        Err(BridgeError::Conversion(NO_PROVIDER.to_string()))
    }
}
