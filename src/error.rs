//! Bridge-wide error definitions.

use thiserror::Error;

use crate::deploy::addresses::{DomainKind, Network};

/// Errors surfaced by bridge operations.
///
/// Provider and collaborator failures are forwarded unchanged; the bridge
/// performs no local recovery beyond discovery's bounded poll.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// Discovery exhausted its attempt budget without finding a provider.
    #[error("wallet provider is not installed")]
    NotInstalled,

    /// The provider returned a structured error; message forwarded verbatim.
    #[error("provider error: {0}")]
    Provider(String),

    /// A DID deployment was requested without a key-wallet connection.
    #[error("connect the key wallet to continue")]
    MissingWalletConnection,

    /// No template contract is mapped for this network/domain combination.
    #[error("no template contract for domain '{domain}' on {network}")]
    TemplateUnavailable { network: Network, domain: DomainKind },

    /// A unit-conversion helper rejected its input.
    #[error("unit conversion failed: {0}")]
    Conversion(String),
}

/// Result type for bridge operations.
pub type BridgeResult<T> = Result<T, BridgeError>;
