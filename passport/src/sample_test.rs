use super::*;

#[test]
fn sample_has_expected_identity() {
    let record = sample_record();
    assert_eq!(record.id, "0Xf4r...G937");
    assert_eq!(record.weight, "175 kg");
}

#[test]
fn sample_section_sizes() {
    let record = sample_record();
    assert_eq!(record.required_info.len(), 4);
    assert_eq!(record.additional_info.len(), 10);
    assert_eq!(record.chain_of_custody.len(), 4);
    assert_eq!(record.field_count(), 14);
}

#[test]
fn sample_custody_keeps_newest_first_order() {
    let record = sample_record();
    let dates: Vec<&str> = record.chain_of_custody.iter().map(|e| e.date.as_str()).collect();
    assert_eq!(
        dates,
        ["08/07/2023, 11:00", "12/09/2021, 08:00", "27/08/2021, 19:30", "14/07/2021, 11:00"]
    );
}

#[test]
fn sample_is_deterministic() {
    assert_eq!(sample_record(), sample_record());
}

#[test]
fn sample_survives_json_transport() {
    let record = sample_record();
    let json = serde_json::to_string(&record).unwrap();
    let back: PassportRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(back, record);
}
