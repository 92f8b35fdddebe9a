use super::*;

use passport::{CustodyEvent, InfoField, sample_record};

fn record(required: usize, additional: usize, events: usize) -> PassportRecord {
    PassportRecord {
        id: "PX-1".to_owned(),
        weight: "90 kg".to_owned(),
        required_info: (0..required)
            .map(|i| InfoField::new(Icon::Battery, format!("req-{i}"), format!("r{i}")))
            .collect(),
        additional_info: (0..additional)
            .map(|i| InfoField::new(Icon::Award, format!("add-{i}"), format!("a{i}")))
            .collect(),
        chain_of_custody: (0..events)
            .map(|i| CustodyEvent::new(format!("day {i}"), format!("event {i}")))
            .collect(),
    }
}

// =============================================================
// Sections
// =============================================================

#[test]
fn renders_n_plus_m_pairs_in_input_order() {
    for (n, m) in [(0, 0), (1, 0), (0, 3), (4, 10)] {
        let layout = PassportLayout::from_record(&record(n, m, 0));
        let labels: Vec<&str> = layout.labeled_values().map(|v| v.label.as_str()).collect();
        let expected: Vec<String> = (0..n)
            .map(|i| format!("req-{i}"))
            .chain((0..m).map(|i| format!("add-{i}")))
            .collect();
        assert_eq!(labels, expected);
    }
}

#[test]
fn sections_are_required_then_additional() {
    let layout = PassportLayout::from_record(&record(2, 3, 0));
    let titles: Vec<&str> = layout.sections.iter().map(|s| s.title).collect();
    assert_eq!(titles, [REQUIRED_TITLE, ADDITIONAL_TITLE]);
    assert_eq!(layout.sections[0].entries.len(), 2);
    assert_eq!(layout.sections[1].entries.len(), 3);
}

#[test]
fn entries_keep_icon_and_value() {
    let layout = PassportLayout::from_record(&record(1, 1, 0));
    assert_eq!(
        layout.sections[1].entries[0],
        LabeledValue { icon: Icon::Award, label: "add-0".to_owned(), value: "a0".to_owned() }
    );
}

#[test]
fn id_and_weight_are_verbatim() {
    let layout = PassportLayout::from_record(&sample_record());
    assert_eq!(layout.id, "0Xf4r...G937");
    assert_eq!(layout.weight, "175 kg");
}

// =============================================================
// Timeline
// =============================================================

#[test]
fn renders_k_timeline_entries() {
    for k in [0, 1, 7] {
        let layout = PassportLayout::from_record(&record(0, 0, k));
        assert_eq!(layout.timeline.len(), k);
    }
}

#[test]
fn timeline_is_not_sorted() {
    let layout = PassportLayout::from_record(&sample_record());
    let events: Vec<&str> = layout.timeline.iter().map(|e| e.event.as_str()).collect();
    assert_eq!(
        events,
        [
            "Battery Serviced",
            "Car sold to Consumer",
            "Battery Serviced",
            "Battery Sold to automotive OEM",
        ]
    );
    assert_eq!(layout.timeline[0].date, "08/07/2023, 11:00");
    assert_eq!(layout.timeline[3].date, "14/07/2021, 11:00");
}

#[test]
fn sample_layout_has_fourteen_pairs() {
    let layout = PassportLayout::from_record(&sample_record());
    assert_eq!(layout.labeled_values().count(), 14);
}
