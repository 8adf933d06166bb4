//! Wire types shared across the provider capability surface.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Structured error carried inside a provider RPC response.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RpcError {
    /// Provider-defined error code.
    #[serde(default)]
    pub code: i64,
    /// Human-readable message, forwarded verbatim to callers.
    pub message: String,
}

/// Raw response envelope from a blockchain query.
///
/// The provider answers every query with `{result?, error?}`; an absent
/// `result` with no `error` means the queried value does not exist.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RpcResponse {
    pub result: Option<Value>,
    pub error: Option<RpcError>,
}

impl RpcResponse {
    /// A response carrying a value.
    pub fn ok(result: Value) -> Self {
        Self {
            result: Some(result),
            error: None,
        }
    }

    /// A response carrying a structured error.
    pub fn err(message: impl Into<String>) -> Self {
        Self {
            result: None,
            error: Some(RpcError {
                code: -1,
                message: message.into(),
            }),
        }
    }

    /// An absent result with no error.
    pub fn absent() -> Self {
        Self::default()
    }
}

/// Display unit for conversion into the chain's minor unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    /// Gas-price display unit (converted to the minor gas-price unit).
    GasPrice,
    /// Major display unit of the native token.
    Native,
}

/// Resolved value envelope attached to a transition call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallEnvelope {
    /// Amount in minor units.
    pub amount: String,
    /// Gas price in minor gas-price units.
    pub gas_price: String,
    /// Gas limit in the chain's large-integer representation.
    pub gas_limit: u64,
}

/// Fixed gas envelope used for contract deployments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployGas {
    pub gas_limit: String,
    pub gas_price: String,
}

/// Handle to a submitted transaction, as yielded by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TransactionHandle {
    /// Transaction identifier assigned by the provider.
    pub id: String,
}

/// Handle to a freshly deployed contract.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DeployedContract {
    /// Address the contract was deployed at.
    pub address: String,
}

/// One ordered field of a transition call or constructor init sequence.
///
/// Field names `vname`/`type`/`value` are part of the wire contract with
/// the target chain and must serialize exactly.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ContractField {
    pub vname: String,
    #[serde(rename = "type")]
    pub ty: String,
    pub value: FieldValue,
}

impl ContractField {
    pub fn new(vname: impl Into<String>, ty: impl Into<String>, value: FieldValue) -> Self {
        Self {
            vname: vname.into(),
            ty: ty.into(),
            value,
        }
    }
}

/// Value of a contract field: either a scalar rendered as text or an
/// ordered key/value map (chain map literals are entry sequences).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Map(Vec<MapEntry>),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }
}

/// One entry of a map-typed contract field.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MapEntry {
    pub key: String,
    pub val: String,
}
