//! Wallet provider subsystem.
//!
//! # Data Flow
//! ```text
//! Host environment (extension-injected singleton)
//!     → environment.rs (interactive? + probe)
//!     → discovery.rs (bounded 100 ms poll, 10 attempts)
//!     → capability.rs (blockchain / contracts / utils trait handles)
//!     → query, tx and deploy subsystems
//! ```
//!
//! # Design Decisions
//! - The injected singleton is passed in as a capability, never read from
//!   ambient global state
//! - Non-interactive contexts get a no-op capability instead of an error;
//!   absence is a valid answer there
//! - Discovery's timer is scoped to each `acquire` call

pub mod capability;
pub mod discovery;
pub mod environment;
pub mod types;

pub use capability::{
    BlockchainApi, ContractHandle, ContractsApi, PendingContract, UnitUtils, WalletCapability,
};
pub use discovery::ProviderDiscovery;
pub use environment::HostEnvironment;
pub use types::{
    CallEnvelope, ContractField, DeployGas, DeployedContract, FieldValue, MapEntry, RpcError,
    RpcResponse, TransactionHandle, Unit,
};
