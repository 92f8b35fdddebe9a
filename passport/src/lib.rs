//! Shared battery passport model for the `server` and `client` crates.
//!
//! This crate owns the passport record shape, the icon vocabulary used to
//! decorate record fields, wallet address handling, and the contract ABI
//! binding. Everything here is plain data; no browser or network access.

pub mod address;
pub mod contract;
pub mod record;
pub mod sample;
pub mod wallet;

pub use address::WalletAddress;
pub use contract::{Abi, AbiError, ContractBinding, ContractConfig};
pub use record::{CustodyEvent, Icon, InfoField, PassportRecord};
pub use sample::sample_record;
pub use wallet::WalletError;
