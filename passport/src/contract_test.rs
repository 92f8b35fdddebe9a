use super::*;

const SIGNER: &str = "0x9fB29AAc15b9A4B7F17c3385939b007540f4d791";

#[test]
fn bundled_abi_parses() {
    let abi = Abi::battery_passport().unwrap();
    assert!(!abi.entries().is_empty());
    assert_eq!(abi.function_names().len(), 22);
}

#[test]
fn bundled_abi_exposes_battery_functions() {
    let abi = Abi::battery_passport().unwrap();
    for name in ["addManufacturer", "deposit", "lockDeposit", "setBatteryData", "viewBatteryDetails"] {
        assert!(abi.function(name).is_some(), "missing {name}");
    }
    assert!(abi.function("Transfer").is_none(), "events are not functions");
}

#[test]
fn function_signature_and_mutability() {
    let abi = Abi::battery_passport().unwrap();
    let has_role = abi.function("hasRole").unwrap();
    assert_eq!(has_role.signature().as_deref(), Some("hasRole(bytes32,address)"));
    assert!(has_role.is_read_only());

    let deposit = abi.function("deposit").unwrap();
    assert_eq!(deposit.state_mutability.as_deref(), Some("payable"));
    assert!(!deposit.is_read_only());
}

#[test]
fn functions_skip_constructor_and_events() {
    let abi = Abi::battery_passport().unwrap();
    let kinds: Vec<&str> = abi.functions().map(|e| e.kind.as_str()).collect();
    assert_eq!(kinds.len(), 22);
    assert!(kinds.iter().all(|k| *k == "function"));
}

#[test]
fn parse_rejects_non_array() {
    let err = Abi::parse(r#"{"type":"function"}"#).unwrap_err();
    assert!(err.to_string().contains("failed to parse ABI"));
}

#[test]
fn parse_tolerates_missing_optional_fields() {
    let abi = Abi::parse(r#"[{"type":"fallback"},{"type":"function","name":"ping"}]"#).unwrap();
    assert_eq!(abi.function_names(), ["ping"]);
    assert!(abi.function("ping").unwrap().inputs.is_empty());
}

#[test]
fn default_config_is_placeholder() {
    let config = ContractConfig::default();
    assert_eq!(config.address, PLACEHOLDER_CONTRACT_ADDRESS);
    assert_eq!(config.chain_id, None);
    assert!(!config.is_deployed());
}

#[test]
fn config_with_real_address_is_deployed() {
    let config = ContractConfig { address: SIGNER.to_owned(), chain_id: Some(1) };
    assert!(config.is_deployed());
}

#[test]
fn binding_reports_address_and_supported_calls() {
    let binding = ContractBinding::new(
        ContractConfig::default(),
        Abi::battery_passport().unwrap(),
        WalletAddress::parse(SIGNER).unwrap(),
    );
    assert_eq!(binding.address(), PLACEHOLDER_CONTRACT_ADDRESS);
    assert!(binding.abi.function("viewBatteryDetails").is_some());
    assert!(binding.abi.function("selfDestruct").is_none());
    assert_eq!(binding.signer.as_str(), SIGNER);
}
