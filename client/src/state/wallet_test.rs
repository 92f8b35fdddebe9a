use super::*;

use futures::executor::block_on;

use crate::net::wallet::connect;
use crate::net::wallet::wallet_test::{ADDR, MockProvider};

// =============================================================
// WalletState defaults
// =============================================================

#[test]
fn wallet_state_default_disconnected() {
    let state = WalletState::default();
    assert!(!state.connected());
    assert!(state.address.is_none());
    assert_eq!(state.button_label(), "Connect Wallet");
}

// =============================================================
// apply
// =============================================================

#[test]
fn apply_success_stores_address_and_shortens_label() {
    let mut state = WalletState::default();
    state.apply(WalletAddress::parse(ADDR));
    assert!(state.connected());
    assert_eq!(state.address.as_ref().map(WalletAddress::as_str), Some(ADDR));
    assert_eq!(state.button_label(), "Connected: 0xABCD...1234");
}

#[test]
fn apply_error_leaves_state_unchanged() {
    for err in [
        WalletError::ProviderUnavailable,
        WalletError::UserRejected,
        WalletError::NoAccounts,
        WalletError::Rpc { code: Some(-32603), message: "internal".to_owned() },
    ] {
        let mut state = WalletState::default();
        state.apply(Err(err));
        assert_eq!(state, WalletState::default());
        assert_eq!(state.button_label(), CONNECT_LABEL);
    }
}

#[test]
fn apply_error_keeps_existing_connection() {
    let mut state = WalletState::default();
    state.apply(WalletAddress::parse(ADDR));
    state.apply(Err(WalletError::UserRejected));
    assert!(state.connected());
}

// =============================================================
// Connect flow
// =============================================================

#[test]
fn provider_absent_keeps_connect_label() {
    let mut state = WalletState::default();
    state.apply(block_on(connect::<MockProvider>(None)));
    assert!(state.address.is_none());
    assert_eq!(state.button_label(), "Connect Wallet");
}

#[test]
fn provider_approval_connects() {
    let provider = MockProvider::approving(&[ADDR]);
    let mut state = WalletState::default();
    state.apply(block_on(connect(Some(&provider))));
    assert_eq!(state.button_label(), "Connected: 0xABCD...1234");
}

#[test]
fn provider_rejection_stays_disconnected() {
    let provider = MockProvider::failing(WalletError::from_rpc(Some(4001), "User rejected the request."));
    let mut state = WalletState::default();
    state.apply(block_on(connect(Some(&provider))));
    assert!(state.address.is_none());
}

#[test]
fn provider_short_account_still_connects() {
    let provider = MockProvider::approving(&["0xABCD5678901234"]);
    let mut state = WalletState::default();
    state.apply(block_on(connect(Some(&provider))));
    assert!(state.connected());
    assert_eq!(state.button_label(), "Connected: 0xABCD...1234");
}
