//! Server configuration parsed from environment variables.

use passport::ContractConfig;
use passport::contract::PLACEHOLDER_CONTRACT_ADDRESS;

pub const DEFAULT_PORT: u16 = 3000;

/// Errors produced while reading server configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `PORT` is not a valid TCP port.
    #[error("invalid PORT: {0}")]
    InvalidPort(String),

    /// `PASSPORT_CHAIN_ID` is not a decimal or `0x` hex integer.
    #[error("invalid PASSPORT_CHAIN_ID: {0}")]
    InvalidChainId(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub contract: ContractConfig,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `PASSPORT_CONTRACT_ADDRESS`: placeholder address when absent
    /// - `PASSPORT_CHAIN_ID`: chain the contract is deployed on, decimal or `0x` hex
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let port = match get("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let address = get("PASSPORT_CONTRACT_ADDRESS").unwrap_or_else(|| PLACEHOLDER_CONTRACT_ADDRESS.to_owned());
        let chain_id = get("PASSPORT_CHAIN_ID")
            .map(|raw| passport::wallet::parse_chain_id(&raw).map_err(|_| ConfigError::InvalidChainId(raw)))
            .transpose()?;

        Ok(Self { port, contract: ContractConfig { address, chain_id } })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
