use super::*;

#[test]
fn icon_serializes_as_snake_case_name() {
    for icon in Icon::ALL {
        let json = serde_json::to_value(icon).unwrap();
        assert_eq!(json, serde_json::Value::String(icon.name().to_owned()));
    }
}

#[test]
fn icon_deserializes_from_name() {
    let icon: Icon = serde_json::from_str("\"alert_triangle\"").unwrap();
    assert_eq!(icon, Icon::AlertTriangle);
}

#[test]
fn icon_rejects_unknown_name() {
    assert!(serde_json::from_str::<Icon>("\"dice1\"").is_err());
}

#[test]
fn record_uses_camel_case_keys() {
    let record = PassportRecord {
        id: "id-1".to_owned(),
        weight: "1 kg".to_owned(),
        required_info: vec![InfoField::new(Icon::Battery, "Battery Type", "Lithium-Ion")],
        additional_info: Vec::new(),
        chain_of_custody: vec![CustodyEvent::new("01/01/2024, 10:00", "Made")],
    };
    let json = serde_json::to_value(&record).unwrap();
    assert!(json.get("requiredInfo").is_some());
    assert!(json.get("additionalInfo").is_some());
    assert!(json.get("chainOfCustody").is_some());
    assert_eq!(json["requiredInfo"][0]["icon"], "battery");
    assert_eq!(json["chainOfCustody"][0]["event"], "Made");
}

#[test]
fn field_count_sums_both_sections() {
    let record = PassportRecord {
        id: String::new(),
        weight: String::new(),
        required_info: vec![
            InfoField::new(Icon::Battery, "a", "1"),
            InfoField::new(Icon::Battery, "b", "2"),
        ],
        additional_info: vec![InfoField::new(Icon::Award, "c", "3")],
        chain_of_custody: Vec::new(),
    };
    assert_eq!(record.field_count(), 3);
}
