//! View model for the passport detail card.
//!
//! DESIGN
//! ======
//! `PassportLayout` is the whole visual tree as data: section titles, entries
//! in record order, timeline entries in record order. `PassportView` only maps
//! it to markup, so ordering and counts are checked here instead of in DOM.

#[cfg(test)]
#[path = "passport_layout_test.rs"]
mod passport_layout_test;

use passport::{Icon, PassportRecord};

pub const REQUIRED_TITLE: &str = "Required Information";
pub const ADDITIONAL_TITLE: &str = "Additional Information";
pub const CUSTODY_TITLE: &str = "Chain of Custody";
pub const TRACEABILITY_BADGE: &str = "Batch Traceability";

/// One icon + label/value block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabeledValue {
    pub icon: Icon,
    pub label: String,
    pub value: String,
}

/// A titled grid of labeled values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InfoSection {
    pub title: &'static str,
    pub entries: Vec<LabeledValue>,
}

/// One point on the custody timeline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimelineEntry {
    pub date: String,
    pub event: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PassportLayout {
    pub id: String,
    pub weight: String,
    pub sections: Vec<InfoSection>,
    pub timeline: Vec<TimelineEntry>,
}

impl PassportLayout {
    /// Project a record. No filtering or reordering takes place.
    pub fn from_record(record: &PassportRecord) -> Self {
        let section = |title, fields: &[passport::InfoField]| InfoSection {
            title,
            entries: fields
                .iter()
                .map(|f| LabeledValue { icon: f.icon, label: f.label.clone(), value: f.value.clone() })
                .collect(),
        };

        Self {
            id: record.id.clone(),
            weight: record.weight.clone(),
            sections: vec![
                section(REQUIRED_TITLE, &record.required_info),
                section(ADDITIONAL_TITLE, &record.additional_info),
            ],
            timeline: record
                .chain_of_custody
                .iter()
                .map(|e| TimelineEntry { date: e.date.clone(), event: e.event.clone() })
                .collect(),
        }
    }

    /// All label/value blocks across sections, in render order.
    pub fn labeled_values(&self) -> impl Iterator<Item = &LabeledValue> {
        self.sections.iter().flat_map(|s| s.entries.iter())
    }
}
