//! Battery passport contract ABI and binding handle.
//!
//! SYSTEM CONTEXT
//! ==============
//! The deployed contract address is not known yet; configs default to a
//! placeholder string and report `is_deployed() == false` until a real address
//! is supplied. A `ContractBinding` only records what a signer would call.
//! Nothing in this crate talks to a chain.

#[cfg(test)]
#[path = "contract_test.rs"]
mod contract_test;

use serde::{Deserialize, Serialize};

use crate::address::WalletAddress;

/// Address used until a real deployment exists.
pub const PLACEHOLDER_CONTRACT_ADDRESS: &str = "YOUR_SMART_CONTRACT_ADDRESS";

const BATTERY_PASSPORT_ABI: &str = include_str!("../abi/BatteryPassport.json");

/// Error returned by [`Abi::parse`].
#[derive(Debug, thiserror::Error)]
pub enum AbiError {
    /// The ABI text is not a JSON array of ABI entries.
    #[error("failed to parse ABI: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A named, typed parameter of an ABI entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbiParam {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// One entry of a contract ABI description.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbiEntry {
    /// `function`, `event`, `constructor`, ...
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub inputs: Vec<AbiParam>,
    #[serde(default)]
    pub outputs: Vec<AbiParam>,
    #[serde(default)]
    pub state_mutability: Option<String>,
}

impl AbiEntry {
    #[must_use]
    pub fn is_function(&self) -> bool {
        self.kind == "function"
    }

    /// True for `view` and `pure` functions.
    #[must_use]
    pub fn is_read_only(&self) -> bool {
        matches!(self.state_mutability.as_deref(), Some("view" | "pure"))
    }

    /// Solidity-style signature, e.g. `hasRole(bytes32,address)`.
    #[must_use]
    pub fn signature(&self) -> Option<String> {
        let name = self.name.as_deref()?;
        let params: Vec<&str> = self.inputs.iter().map(|p| p.kind.as_str()).collect();
        Some(format!("{name}({})", params.join(",")))
    }
}

/// A parsed contract ABI.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Abi {
    entries: Vec<AbiEntry>,
}

impl Abi {
    /// Parse a JSON ABI description.
    ///
    /// # Errors
    ///
    /// Returns [`AbiError::Parse`] when `json` is not a valid ABI array.
    pub fn parse(json: &str) -> Result<Self, AbiError> {
        let entries: Vec<AbiEntry> = serde_json::from_str(json)?;
        Ok(Self { entries })
    }

    /// The ABI bundled with this crate for the battery passport contract.
    ///
    /// # Errors
    ///
    /// Returns [`AbiError::Parse`] if the bundled file is malformed.
    pub fn battery_passport() -> Result<Self, AbiError> {
        Self::parse(BATTERY_PASSPORT_ABI)
    }

    #[must_use]
    pub fn entries(&self) -> &[AbiEntry] {
        &self.entries
    }

    /// Look up a function entry by name.
    #[must_use]
    pub fn function(&self, name: &str) -> Option<&AbiEntry> {
        self.entries
            .iter()
            .find(|e| e.is_function() && e.name.as_deref() == Some(name))
    }

    /// Function entries in declaration order.
    pub fn functions(&self) -> impl Iterator<Item = &AbiEntry> {
        self.entries.iter().filter(|e| e.is_function())
    }

    /// Function names in declaration order.
    #[must_use]
    pub fn function_names(&self) -> Vec<&str> {
        self.functions().filter_map(|e| e.name.as_deref()).collect()
    }
}

/// Where the contract lives.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractConfig {
    pub address: String,
    /// Chain the contract is deployed on; `None` accepts any chain.
    pub chain_id: Option<u64>,
}

impl Default for ContractConfig {
    fn default() -> Self {
        Self { address: PLACEHOLDER_CONTRACT_ADDRESS.to_owned(), chain_id: None }
    }
}

impl ContractConfig {
    /// True when `address` is a real account address rather than the placeholder.
    #[must_use]
    pub fn is_deployed(&self) -> bool {
        WalletAddress::parse(&self.address).is_ok()
    }
}

/// A handle to the contract for one signing account.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContractBinding {
    pub config: ContractConfig,
    pub abi: Abi,
    pub signer: WalletAddress,
}

impl ContractBinding {
    #[must_use]
    pub fn new(config: ContractConfig, abi: Abi, signer: WalletAddress) -> Self {
        Self { config, abi, signer }
    }

    #[must_use]
    pub fn address(&self) -> &str {
        &self.config.address
    }
}
