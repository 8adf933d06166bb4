//! External key-derivation collaborator.
//!
//! Key-pair material for verification methods is produced by an external
//! service reached through the user's key-wallet connection. The bridge
//! only routes requests and shapes responses; it never validates the
//! cryptographic material it receives.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::BridgeResult;

/// Authorization purpose of one verification method in a DID document.
///
/// The order of [`KeyPurpose::ALL`] is the order keys are derived and laid
/// out in the deployment maps; it is part of the wire contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum KeyPurpose {
    Update,
    SocialRecovery,
    General,
    Auth,
    Assertion,
    Agreement,
    Invocation,
    Delegation,
}

impl KeyPurpose {
    /// Every purpose, in derivation order.
    pub const ALL: [KeyPurpose; 8] = [
        KeyPurpose::Update,
        KeyPurpose::SocialRecovery,
        KeyPurpose::General,
        KeyPurpose::Auth,
        KeyPurpose::Assertion,
        KeyPurpose::Agreement,
        KeyPurpose::Invocation,
        KeyPurpose::Delegation,
    ];

    /// Stable tag used as the map key for this purpose.
    pub fn tag(&self) -> &'static str {
        match self {
            KeyPurpose::Update => "update",
            KeyPurpose::SocialRecovery => "socialrecovery",
            KeyPurpose::General => "general",
            KeyPurpose::Auth => "authentication",
            KeyPurpose::Assertion => "assertion",
            KeyPurpose::Agreement => "agreement",
            KeyPurpose::Invocation => "invocation",
            KeyPurpose::Delegation => "delegation",
        }
    }
}

/// Opaque handle to the user's key-wallet connection.
///
/// Required by the derivation service; the bridge never inspects it.
#[derive(Debug, Clone)]
pub struct ConnectionHandle(Value);

impl ConnectionHandle {
    pub fn new(inner: Value) -> Self {
        Self(inner)
    }

    pub fn inner(&self) -> &Value {
        &self.0
    }
}

/// One derived verification method.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VerificationMethodEntry {
    /// Purpose tag this key answers for.
    pub id: String,
    /// Public key material.
    pub key: String,
    /// Encrypted private material.
    pub encrypted: String,
}

/// Response shape of the derivation service.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DerivedKeyDocument {
    pub element: DerivedElement,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DerivedElement {
    pub key: VerificationMethodEntry,
}

/// One derivation request: connection, purpose, owner.
#[derive(Debug)]
pub struct KeyDerivationRequest<'a> {
    pub connection: &'a ConnectionHandle,
    pub purpose: KeyPurpose,
    pub owner_address: &'a str,
}

/// The external key-derivation service.
#[async_trait]
pub trait KeyDerivation: Send + Sync {
    /// Derive the key pair for one purpose. Failures are surfaced to the
    /// caller unchanged.
    async fn derive(&self, request: KeyDerivationRequest<'_>)
        -> BridgeResult<DerivedKeyDocument>;
}
