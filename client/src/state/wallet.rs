//! Wallet connection state for the current browser session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Written by the header wallet button after a connect attempt resolves.
//! Failed attempts are logged to the console and never change the state, so
//! the button keeps offering "Connect Wallet".

#[cfg(test)]
#[path = "wallet_test.rs"]
mod wallet_test;

use passport::{WalletAddress, WalletError};

/// Button text shown while no account is connected.
pub const CONNECT_LABEL: &str = "Connect Wallet";

/// Connected account, if any. `connected()` is derived from `address` so the
/// two can never disagree.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WalletState {
    pub address: Option<WalletAddress>,
}

impl WalletState {
    pub fn connected(&self) -> bool {
        self.address.is_some()
    }

    /// Header button text for the current state.
    pub fn button_label(&self) -> String {
        match &self.address {
            Some(address) => format!("Connected: {}", address.short()),
            None => CONNECT_LABEL.to_owned(),
        }
    }

    /// Record the outcome of a connect attempt.
    pub fn apply(&mut self, result: Result<WalletAddress, WalletError>) {
        match result {
            Ok(address) => {
                leptos::logging::log!("Connected account: {address}");
                self.address = Some(address);
            }
            Err(WalletError::ProviderUnavailable) => {
                leptos::logging::log!("{}", WalletError::ProviderUnavailable);
            }
            Err(e) => {
                leptos::logging::error!("Failed to connect wallet: {e}");
            }
        }
    }
}
