//! Fixed network/contract address tables.
//!
//! These addresses are part of the deployment contract with the target
//! chain and must be reproduced exactly. Missing combinations are a
//! detectable configuration gap, not an empty string.

use serde::{Deserialize, Serialize};

/// Target network for deployments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Mainnet,
    Testnet,
}

impl Network {
    /// Address of the reference wallet contract whose code seeds a new
    /// DID deployment.
    pub fn reference_wallet(&self) -> &'static str {
        match self {
            Network::Mainnet => "0x4f64daa860b19d5ac7b3552917c385ca0b6075c7",
            Network::Testnet => "0xadd4b95f32f3aa4d23f19746ebf9fb87d20c82fb",
        }
    }

    /// Address of the init-controller contract wired into a DID's init
    /// sequence.
    pub fn init_controller(&self) -> &'static str {
        match self {
            Network::Mainnet => "0x2d7e1a96ac0592cd1ac2c58aa1662de6fe71c5b9",
            Network::Testnet => "0xec194d20eab90cfab70ead073d742830d3d2a91b",
        }
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Network::Mainnet => write!(f, "mainnet"),
            Network::Testnet => write!(f, "testnet"),
        }
    }
}

/// Kind of domain-registry contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DomainKind {
    Vc,
    Ssi,
}

impl std::fmt::Display for DomainKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainKind::Vc => write!(f, "vc"),
            DomainKind::Ssi => write!(f, "ssi"),
        }
    }
}

/// Template contract address for a domain deployment, if one is mapped
/// for this network/domain combination.
pub fn domain_template(network: Network, domain: DomainKind) -> Option<&'static str> {
    match (network, domain) {
        (Network::Mainnet, DomainKind::Vc) => {
            Some("0x6ae25f8df1f7f3fae9b8f9630e323b456c945e88")
        }
        (Network::Mainnet, DomainKind::Ssi) => None,
        (Network::Testnet, DomainKind::Vc) => {
            Some("0x25B4B343ba84D53c2f9Db964Fd966BB1a579EF25")
        }
        (Network::Testnet, DomainKind::Ssi) => {
            Some("zil1jnc7wsynp4q9cvtmrkeea9eu2qmyvwdy8dxl53")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_did_addresses() {
        assert_eq!(
            Network::Mainnet.reference_wallet(),
            "0x4f64daa860b19d5ac7b3552917c385ca0b6075c7"
        );
        assert_eq!(
            Network::Mainnet.init_controller(),
            "0x2d7e1a96ac0592cd1ac2c58aa1662de6fe71c5b9"
        );
        assert_eq!(
            Network::Testnet.reference_wallet(),
            "0xadd4b95f32f3aa4d23f19746ebf9fb87d20c82fb"
        );
        assert_eq!(
            Network::Testnet.init_controller(),
            "0xec194d20eab90cfab70ead073d742830d3d2a91b"
        );
    }

    #[test]
    fn test_domain_templates() {
        assert_eq!(
            domain_template(Network::Mainnet, DomainKind::Vc),
            Some("0x6ae25f8df1f7f3fae9b8f9630e323b456c945e88")
        );
        assert_eq!(
            domain_template(Network::Testnet, DomainKind::Vc),
            Some("0x25B4B343ba84D53c2f9Db964Fd966BB1a579EF25")
        );
        assert_eq!(
            domain_template(Network::Testnet, DomainKind::Ssi),
            Some("zil1jnc7wsynp4q9cvtmrkeea9eu2qmyvwdy8dxl53")
        );
        assert_eq!(domain_template(Network::Mainnet, DomainKind::Ssi), None);
    }

    #[test]
    fn test_network_serde() {
        let net: Network = serde_json::from_str("\"testnet\"").unwrap();
        assert_eq!(net, Network::Testnet);
        assert_eq!(serde_json::to_string(&Network::Mainnet).unwrap(), "\"mainnet\"");
    }
}
