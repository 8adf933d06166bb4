//! Shared mock provider for integration tests.
#![allow(dead_code)]

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use wallet_bridge::error::{BridgeError, BridgeResult};
use wallet_bridge::provider::{
    BlockchainApi, CallEnvelope, ContractField, ContractHandle, ContractsApi, DeployGas,
    DeployedContract, HostEnvironment, PendingContract, RpcResponse, TransactionHandle, Unit,
    UnitUtils, WalletCapability,
};

/// Scripted host environment: the provider appears at a fixed probe count.
pub struct MockEnvironment {
    interactive: bool,
    appear_at: u32,
    probes: AtomicU32,
    capability: Option<WalletCapability>,
}

impl MockEnvironment {
    /// Interactive context with the provider present from the first probe.
    pub fn with_provider(capability: WalletCapability) -> Self {
        Self {
            interactive: true,
            appear_at: 1,
            probes: AtomicU32::new(0),
            capability: Some(capability),
        }
    }

    /// Interactive context where the provider appears at probe `n`.
    pub fn appearing_at(capability: WalletCapability, n: u32) -> Self {
        Self {
            interactive: true,
            appear_at: n,
            probes: AtomicU32::new(0),
            capability: Some(capability),
        }
    }

    /// Interactive context where the provider never appears.
    pub fn never_injected() -> Self {
        Self {
            interactive: true,
            appear_at: u32::MAX,
            probes: AtomicU32::new(0),
            capability: None,
        }
    }

    /// Non-interactive context (no provider can exist).
    pub fn non_interactive() -> Self {
        Self {
            interactive: false,
            appear_at: u32::MAX,
            probes: AtomicU32::new(0),
            capability: None,
        }
    }

    pub fn probe_count(&self) -> u32 {
        self.probes.load(Ordering::SeqCst)
    }
}

impl HostEnvironment for MockEnvironment {
    fn is_interactive(&self) -> bool {
        self.interactive
    }

    fn probe(&self) -> Option<WalletCapability> {
        let n = self.probes.fetch_add(1, Ordering::SeqCst) + 1;
        if n >= self.appear_at {
            self.capability.clone()
        } else {
            None
        }
    }
}

/// Blockchain API answering every query with a canned response.
#[derive(Clone, Default)]
pub struct ScriptedBlockchain {
    pub sub_state: RpcResponse,
    pub state: RpcResponse,
    pub info: RpcResponse,
}

impl ScriptedBlockchain {
    pub fn with_sub_state(mut self, res: RpcResponse) -> Self {
        self.sub_state = res;
        self
    }

    pub fn with_state(mut self, res: RpcResponse) -> Self {
        self.state = res;
        self
    }

    pub fn with_info(mut self, res: RpcResponse) -> Self {
        self.info = res;
        self
    }
}

#[async_trait]
impl BlockchainApi for ScriptedBlockchain {
    async fn get_smart_contract_sub_state(
        &self,
        _address: &str,
        _field: &str,
        _args: &[String],
    ) -> BridgeResult<RpcResponse> {
        Ok(self.sub_state.clone())
    }

    async fn get_smart_contract_state(&self, _address: &str) -> BridgeResult<RpcResponse> {
        Ok(self.state.clone())
    }

    async fn get_blockchain_info(&self) -> BridgeResult<RpcResponse> {
        Ok(self.info.clone())
    }
}

/// One recorded transition call.
pub struct RecordedCall {
    pub address: String,
    pub transition: String,
    pub params: Vec<ContractField>,
    pub envelope: CallEnvelope,
}

/// One recorded deployment.
pub struct RecordedDeploy {
    pub code: String,
    pub init: Vec<ContractField>,
    pub gas: DeployGas,
}

pub struct ContractsInner {
    code: String,
    fail_code: Option<String>,
    fail_calls: Option<String>,
    pub fetched: Mutex<Vec<String>>,
    pub calls: Mutex<Vec<RecordedCall>>,
    pub deploys: Mutex<Vec<RecordedDeploy>>,
}

/// Contracts API that records every fetch, call and deploy.
#[derive(Clone)]
pub struct RecordingContracts {
    pub inner: Arc<ContractsInner>,
}

impl RecordingContracts {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(ContractsInner {
                code: code.into(),
                fail_code: None,
                fail_calls: None,
                fetched: Mutex::new(Vec::new()),
                calls: Mutex::new(Vec::new()),
                deploys: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Make every code fetch fail with a provider error.
    pub fn failing_code(message: impl Into<String>) -> Self {
        let mut contracts = Self::new("");
        Arc::get_mut(&mut contracts.inner).unwrap().fail_code = Some(message.into());
        contracts
    }

    /// Make every transition call fail with a provider error.
    pub fn failing_calls(message: impl Into<String>) -> Self {
        let mut contracts = Self::new("");
        Arc::get_mut(&mut contracts.inner).unwrap().fail_calls = Some(message.into());
        contracts
    }

    pub fn fetch_count(&self) -> usize {
        self.inner.fetched.lock().unwrap().len()
    }

    pub fn deploy_count(&self) -> usize {
        self.inner.deploys.lock().unwrap().len()
    }
}

impl ContractsApi for RecordingContracts {
    fn at(&self, address: &str) -> Arc<dyn ContractHandle> {
        Arc::new(MockHandle {
            inner: self.inner.clone(),
            address: address.to_string(),
        })
    }

    fn create(&self, code: String, init: Vec<ContractField>) -> Arc<dyn PendingContract> {
        Arc::new(MockPending {
            inner: self.inner.clone(),
            code,
            init,
        })
    }
}

struct MockHandle {
    inner: Arc<ContractsInner>,
    address: String,
}

#[async_trait]
impl ContractHandle for MockHandle {
    async fn code(&self) -> BridgeResult<String> {
        if let Some(message) = &self.inner.fail_code {
            return Err(BridgeError::Provider(message.clone()));
        }
        self.inner.fetched.lock().unwrap().push(self.address.clone());
        Ok(self.inner.code.clone())
    }

    async fn call(
        &self,
        transition: &str,
        params: &[ContractField],
        envelope: CallEnvelope,
    ) -> BridgeResult<TransactionHandle> {
        if let Some(message) = &self.inner.fail_calls {
            return Err(BridgeError::Provider(message.clone()));
        }
        self.inner.calls.lock().unwrap().push(RecordedCall {
            address: self.address.clone(),
            transition: transition.to_string(),
            params: params.to_vec(),
            envelope,
        });
        Ok(TransactionHandle {
            id: "0xmocktx".to_string(),
        })
    }
}

struct MockPending {
    inner: Arc<ContractsInner>,
    code: String,
    init: Vec<ContractField>,
}

#[async_trait]
impl PendingContract for MockPending {
    async fn deploy(
        &self,
        gas: DeployGas,
    ) -> BridgeResult<(TransactionHandle, DeployedContract)> {
        self.inner.deploys.lock().unwrap().push(RecordedDeploy {
            code: self.code.clone(),
            init: self.init.clone(),
            gas,
        });
        Ok((
            TransactionHandle {
                id: "0xdeploytx".to_string(),
            },
            DeployedContract {
                address: "0xdeployed".to_string(),
            },
        ))
    }
}

/// Unit helper scaling integer amounts by fixed decimal factors.
pub struct ScalingUnits;

impl UnitUtils for ScalingUnits {
    fn to_minor(&self, amount: &str, unit: Unit) -> BridgeResult<String> {
        // Mirrors the provider helper: an empty input converts to nothing.
        if amount.is_empty() {
            return Ok(String::new());
        }
        let scale: u128 = match unit {
            Unit::GasPrice => 1_000_000,
            Unit::Native => 1_000_000_000_000,
        };
        let value: u128 = amount
            .parse()
            .map_err(|_| BridgeError::Conversion(format!("not a number: '{}'", amount)))?;
        Ok((value * scale).to_string())
    }

    fn long_from_number(&self, value: &str) -> BridgeResult<u64> {
        value
            .parse()
            .map_err(|_| BridgeError::Conversion(format!("not a number: '{}'", value)))
    }
}

/// Bundle a capability from scripted parts.
pub fn capability(chain: ScriptedBlockchain, contracts: RecordingContracts) -> WalletCapability {
    WalletCapability::new(Arc::new(chain), Arc::new(contracts), Arc::new(ScalingUnits))
}
