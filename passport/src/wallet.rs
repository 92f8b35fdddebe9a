//! Wallet connection errors.
//!
//! ERROR HANDLING
//! ==============
//! Providers report failures as EIP-1193 `{ code, message }` pairs. The codes
//! the UI cares about get their own variant; everything else is kept as
//! `Rpc` so the log line still carries the provider code.

#[cfg(test)]
#[path = "wallet_test.rs"]
mod wallet_test;

/// EIP-1193 code returned when the user dismisses an authorization prompt.
pub const USER_REJECTED_CODE: i64 = 4001;

/// Errors produced while connecting a wallet or binding a contract.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WalletError {
    /// No injected wallet provider exists in the page.
    #[error("no wallet provider detected; install a browser wallet extension to connect")]
    ProviderUnavailable,

    /// The user declined the account authorization request.
    #[error("user rejected the request")]
    UserRejected,

    /// The provider authorized the request but returned no accounts.
    #[error("provider returned no accounts")]
    NoAccounts,

    /// A returned account is blank, or an address is not `0x` + 40 hex digits.
    #[error("invalid wallet address: {0}")]
    InvalidAddress(String),

    /// The provider is on a different chain than the contract expects.
    #[error("network mismatch: expected chain {expected}, provider is on chain {actual}")]
    NetworkMismatch { expected: u64, actual: u64 },

    /// Any other provider failure.
    #[error("provider error {code:?}: {message}")]
    Rpc { code: Option<i64>, message: String },
}

impl WalletError {
    /// Classify a provider error payload.
    #[must_use]
    pub fn from_rpc(code: Option<i64>, message: impl Into<String>) -> Self {
        match code {
            Some(USER_REJECTED_CODE) => Self::UserRejected,
            _ => Self::Rpc { code, message: message.into() },
        }
    }
}

/// Parse an `eth_chainId` result (`0x`-prefixed hex, or plain decimal).
///
/// # Errors
///
/// Returns [`WalletError::Rpc`] when the value is not a number.
pub fn parse_chain_id(raw: &str) -> Result<u64, WalletError> {
    let trimmed = raw.trim();
    let parsed = match trimmed.strip_prefix("0x").or_else(|| trimmed.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => trimmed.parse::<u64>(),
    };
    parsed.map_err(|_| WalletError::Rpc { code: None, message: format!("invalid chain id: {raw}") })
}
