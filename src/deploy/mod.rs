//! Contract deployment subsystem.
//!
//! # Data Flow
//! ```text
//! caller (network, owner, connection)
//!     → addresses.rs (fixed template/controller lookup)
//!     → keys.rs (one derivation per purpose, fixed order)
//!     → deployer.rs (code fetch, init assembly, deploy)
//!     → (TransactionHandle, DeployedContract)
//! ```
//!
//! # Design Decisions
//! - Address tables are immutable match-based lookups; an unmapped
//!   network/domain combination is a typed error, not an empty string
//! - The two parallel DID maps are built from the same entry sequence so
//!   they stay index-aligned by construction

pub mod addresses;
pub mod deployer;
pub mod keys;

pub use addresses::{domain_template, DomainKind, Network};
pub use deployer::ContractDeployer;
pub use keys::{
    ConnectionHandle, DerivedElement, DerivedKeyDocument, KeyDerivation, KeyDerivationRequest,
    KeyPurpose, VerificationMethodEntry,
};
