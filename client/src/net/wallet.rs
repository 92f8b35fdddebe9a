//! Wallet provider seam and the account-request handshake.
//!
//! ERROR HANDLING
//! ==============
//! `connect` reports every failure as a `WalletError`; deciding what to show
//! (currently nothing beyond a console line) is left to `WalletState::apply`.

#![allow(async_fn_in_trait)]

#[cfg(test)]
#[path = "wallet_test.rs"]
pub(crate) mod wallet_test;

use passport::{WalletAddress, WalletError};

/// An EIP-1193 style account provider.
pub trait WalletProvider {
    /// Ask the user to authorize account access (`eth_requestAccounts`).
    /// May stay pending until the user answers the extension prompt.
    async fn request_accounts(&self) -> Result<Vec<String>, WalletError>;

    /// Current chain id (`eth_chainId`).
    async fn chain_id(&self) -> Result<u64, WalletError>;
}

/// Request accounts and return the first one as the provider reported it.
///
/// # Errors
///
/// [`WalletError::ProviderUnavailable`] when `provider` is `None`,
/// [`WalletError::NoAccounts`] when the provider authorizes nothing, or any
/// error the provider raises.
pub async fn connect<P: WalletProvider>(provider: Option<&P>) -> Result<WalletAddress, WalletError> {
    let provider = provider.ok_or(WalletError::ProviderUnavailable)?;
    let accounts = provider.request_accounts().await?;
    let first = accounts.first().ok_or(WalletError::NoAccounts)?;
    WalletAddress::from_provider(first)
}
