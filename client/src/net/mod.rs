//! Wallet provider and contract modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `wallet` defines the provider seam and the connect handshake, `ethereum`
//! implements that seam over the browser-injected provider (hydrate only),
//! and `contract` binds the passport contract to a connected signer.

pub mod contract;
#[cfg(feature = "hydrate")]
pub mod ethereum;
pub mod wallet;
