//! Contract deployment.
//!
//! # Responsibilities
//! - Resolve the network-specific template address
//! - Fetch the template's code
//! - Assemble the ordered constructor init sequence
//! - Instantiate and deploy with the fixed gas envelope
//!
//! Both operations share that shape; failures at any step propagate to
//! the caller unchanged, with no retry or rollback of partial work.

use std::sync::Arc;

use crate::deploy::addresses::{domain_template, DomainKind, Network};
use crate::deploy::keys::{
    ConnectionHandle, KeyDerivation, KeyDerivationRequest, KeyPurpose, VerificationMethodEntry,
};
use crate::error::{BridgeError, BridgeResult};
use crate::provider::discovery::ProviderDiscovery;
use crate::provider::types::{
    ContractField, DeployGas, DeployedContract, FieldValue, MapEntry, TransactionHandle,
};

/// Fixed gas envelope for DID deployments.
fn did_deploy_gas() -> DeployGas {
    DeployGas {
        gas_limit: "45000".to_string(),
        gas_price: "2000000000".to_string(),
    }
}

/// Fixed gas envelope for domain deployments.
fn domain_deploy_gas() -> DeployGas {
    DeployGas {
        gas_limit: "35000".to_string(),
        gas_price: "2000000000".to_string(),
    }
}

/// Deploys DID and domain-registry contracts via the discovered provider.
#[derive(Clone)]
pub struct ContractDeployer {
    discovery: ProviderDiscovery,
    keys: Arc<dyn KeyDerivation>,
}

impl ContractDeployer {
    pub fn new(discovery: ProviderDiscovery, keys: Arc<dyn KeyDerivation>) -> Self {
        Self { discovery, keys }
    }

    /// Deploy a new DID contract for `owner_address`.
    ///
    /// Derives one verification method per purpose in the fixed
    /// [`KeyPurpose::ALL`] order and lays the public and encrypted halves
    /// out as two index-aligned maps in the init sequence. Requires the
    /// key-wallet connection; without it the call fails before any code
    /// fetch.
    pub async fn deploy_did(
        &self,
        network: Network,
        owner_address: &str,
        connection: Option<&ConnectionHandle>,
    ) -> BridgeResult<(TransactionHandle, DeployedContract)> {
        let connection = connection.ok_or(BridgeError::MissingWalletConnection)?;

        let capability = self.discovery.acquire().await?;

        let wallet_address = network.reference_wallet();
        let init_address = network.init_controller();
        tracing::debug!(%network, wallet = wallet_address, "fetching reference wallet code");

        let template = capability.contracts.at(wallet_address);
        let code = template.code().await?;

        let mut methods: Vec<VerificationMethodEntry> = Vec::with_capacity(KeyPurpose::ALL.len());
        for purpose in KeyPurpose::ALL {
            let doc = self
                .keys
                .derive(KeyDerivationRequest {
                    connection,
                    purpose,
                    owner_address,
                })
                .await?;
            methods.push(doc.element.key);
        }

        let did_methods: Vec<MapEntry> = methods
            .iter()
            .map(|m| MapEntry {
                key: m.id.clone(),
                val: m.key.clone(),
            })
            .collect();
        let did_dkms: Vec<MapEntry> = methods
            .iter()
            .map(|m| MapEntry {
                key: m.id.clone(),
                val: m.encrypted.clone(),
            })
            .collect();

        let init = vec![
            ContractField::new("_scilla_version", "Uint32", FieldValue::text("0")),
            ContractField::new("init_controller", "ByStr20", FieldValue::text(owner_address)),
            ContractField::new("init", "ByStr20", FieldValue::text(init_address)),
            ContractField::new("did_methods", "Map String ByStr33", FieldValue::Map(did_methods)),
            ContractField::new("did_dkms", "Map String String", FieldValue::Map(did_dkms)),
        ];

        let pending = capability.contracts.create(code, init);
        let (tx, deployed) = pending.deploy(did_deploy_gas()).await?;

        tracing::info!(%network, owner = owner_address, address = %deployed.address, "DID contract deployed");
        Ok((tx, deployed))
    }

    /// Deploy a domain-registry contract of the given kind.
    ///
    /// Network/domain combinations with no mapped template fail with
    /// [`BridgeError::TemplateUnavailable`] before touching the provider.
    pub async fn deploy_domain(
        &self,
        network: Network,
        domain: DomainKind,
        owner_address: &str,
    ) -> BridgeResult<(TransactionHandle, DeployedContract)> {
        let template_address = domain_template(network, domain)
            .ok_or(BridgeError::TemplateUnavailable { network, domain })?;

        let capability = self.discovery.acquire().await?;

        tracing::debug!(%network, %domain, template = template_address, "fetching domain template code");
        let template = capability.contracts.at(template_address);
        let code = template.code().await?;

        let init = vec![
            ContractField::new("_scilla_version", "Uint32", FieldValue::text("0")),
            ContractField::new("init_controller", "ByStr20", FieldValue::text(owner_address)),
        ];

        let pending = capability.contracts.create(code, init);
        let (tx, deployed) = pending.deploy(domain_deploy_gas()).await?;

        tracing::info!(%network, %domain, address = %deployed.address, "domain contract deployed");
        Ok((tx, deployed))
    }
}

impl std::fmt::Debug for ContractDeployer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContractDeployer").finish_non_exhaustive()
    }
}
