//! Wallet address parsing and display.

#[cfg(test)]
#[path = "address_test.rs"]
mod address_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::wallet::WalletError;

const HEX_DIGITS: usize = 40;
const SHORT_HEAD: usize = 6;
const SHORT_TAIL: usize = 4;

/// An account address as reported by a wallet provider, stored trimmed.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WalletAddress(String);

impl WalletAddress {
    /// Accept whatever account a provider returned, trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`WalletError::InvalidAddress`] when nothing is left after trimming.
    pub fn from_provider(raw: &str) -> Result<Self, WalletError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(WalletError::InvalidAddress(raw.to_owned()));
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Parse a canonical account address.
    ///
    /// # Errors
    ///
    /// Returns [`WalletError::InvalidAddress`] unless the trimmed input is
    /// `0x` followed by exactly 40 hex digits.
    pub fn parse(raw: &str) -> Result<Self, WalletError> {
        let trimmed = raw.trim();
        let Some(hex) = trimmed.strip_prefix("0x").or_else(|| trimmed.strip_prefix("0X")) else {
            return Err(WalletError::InvalidAddress(raw.to_owned()));
        };
        if hex.len() != HEX_DIGITS || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(WalletError::InvalidAddress(raw.to_owned()));
        }
        Ok(Self(trimmed.to_owned()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Abbreviated form, e.g. `0xABCD...1234`.
    #[must_use]
    pub fn short(&self) -> String {
        shorten(&self.0)
    }
}

impl fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for WalletAddress {
    type Error = WalletError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_provider(&value)
    }
}

impl From<WalletAddress> for String {
    fn from(value: WalletAddress) -> Self {
        value.0
    }
}

/// Keep the first 6 and last 4 characters of `raw`, joined by `...`.
///
/// Strings too short to abbreviate are returned unchanged.
#[must_use]
pub fn shorten(raw: &str) -> String {
    let chars: Vec<char> = raw.chars().collect();
    if chars.len() <= SHORT_HEAD + SHORT_TAIL {
        return raw.to_owned();
    }
    let head: String = chars[..SHORT_HEAD].iter().collect();
    let tail: String = chars[chars.len() - SHORT_TAIL..].iter().collect();
    format!("{head}...{tail}")
}
