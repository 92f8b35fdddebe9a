//! Contract service: bind the passport contract to the connected account.
//!
//! Not reached from any UI action yet; the header only connects the wallet.

#[cfg(test)]
#[path = "contract_test.rs"]
mod contract_test;

use passport::{Abi, ContractBinding, ContractConfig, WalletError};

use super::wallet::{WalletProvider, connect};

/// Request accounts, check the network, and build a contract handle.
///
/// # Errors
///
/// Any [`connect`] error, [`WalletError::NetworkMismatch`] when the config
/// pins a chain the provider is not on, or [`WalletError::Rpc`] when the
/// bundled ABI cannot be parsed.
pub async fn connect_contract<P: WalletProvider>(
    provider: Option<&P>,
    config: ContractConfig,
) -> Result<ContractBinding, WalletError> {
    let signer = connect(provider).await?;

    if let (Some(expected), Some(provider)) = (config.chain_id, provider) {
        let actual = provider.chain_id().await?;
        if actual != expected {
            return Err(WalletError::NetworkMismatch { expected, actual });
        }
    }

    if !config.is_deployed() {
        leptos::logging::warn!("contract address {} is a placeholder", config.address);
    }

    let abi = Abi::battery_passport().map_err(|e| WalletError::Rpc { code: None, message: e.to_string() })?;
    Ok(ContractBinding::new(config, abi, signer))
}
