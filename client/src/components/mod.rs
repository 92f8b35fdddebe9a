//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome and the passport card. The wallet button is
//! the only one that writes shared state.

pub mod footer;
pub mod header;
pub mod icon;
pub mod passport_view;
pub mod wallet_button;
