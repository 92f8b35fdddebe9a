//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. All
//! of it is read-only after startup: the passport record served for every id
//! and the contract the client should bind to.

use std::sync::Arc;

use passport::{Abi, AbiError, ContractConfig, PassportRecord};

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    pub record: Arc<PassportRecord>,
    pub contract: Arc<ContractConfig>,
    pub abi: Arc<Abi>,
}

impl AppState {
    /// Build state around a record and contract config.
    ///
    /// # Errors
    ///
    /// Returns [`AbiError`] if the bundled contract ABI cannot be parsed.
    pub fn new(record: PassportRecord, contract: ContractConfig) -> Result<Self, AbiError> {
        Ok(Self { record: Arc::new(record), contract: Arc::new(contract), abi: Arc::new(Abi::battery_passport()?) })
    }
}

#[cfg(test)]
pub mod test_helpers {
    use super::*;

    /// State serving the sample record with the placeholder contract.
    #[must_use]
    pub fn test_app_state() -> AppState {
        AppState::new(passport::sample_record(), ContractConfig::default()).expect("bundled ABI parses")
    }
}
