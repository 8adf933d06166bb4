//! Client-side bridge to a browser-injected wallet provider.
//!
//! Discovers the extension-injected capability object with a bounded
//! poll, normalizes on-chain state queries, submits transition calls with
//! gas defaults and unit conversion, and assembles init parameters for
//! deploying DID and domain-registry contracts.

pub mod config;
pub mod deploy;
pub mod error;
pub mod observability;
pub mod provider;
pub mod query;
pub mod tx;

pub use config::BridgeConfig;
pub use deploy::{ContractDeployer, DomainKind, Network};
pub use error::{BridgeError, BridgeResult};
pub use provider::{ProviderDiscovery, WalletCapability};
pub use query::StateQueryService;
pub use tx::{CallParams, GasConfig, TransactionExecutor};
