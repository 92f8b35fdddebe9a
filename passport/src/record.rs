//! Passport record types.
//!
//! DESIGN
//! ======
//! Field icons are identifiers, not renderable values. The client resolves
//! each `Icon` through a lookup table when it builds markup, so a record can
//! be serialized, compared, and served as JSON without dragging view code
//! along with it.

#[cfg(test)]
#[path = "record_test.rs"]
mod record_test;

use serde::{Deserialize, Serialize};

/// Icon identifiers available to passport fields and landing cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    Battery,
    Activity,
    Settings,
    Factory,
    Award,
    Recycle,
    AlertTriangle,
    Truck,
    Shield,
    Database,
    Lock,
    Building2,
    User,
    Zap,
    ChevronRight,
    Wallet,
}

impl Icon {
    /// Every icon variant, in declaration order.
    pub const ALL: [Icon; 16] = [
        Icon::Battery,
        Icon::Activity,
        Icon::Settings,
        Icon::Factory,
        Icon::Award,
        Icon::Recycle,
        Icon::AlertTriangle,
        Icon::Truck,
        Icon::Shield,
        Icon::Database,
        Icon::Lock,
        Icon::Building2,
        Icon::User,
        Icon::Zap,
        Icon::ChevronRight,
        Icon::Wallet,
    ];

    /// Stable snake_case name, matching the serde representation.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Battery => "battery",
            Self::Activity => "activity",
            Self::Settings => "settings",
            Self::Factory => "factory",
            Self::Award => "award",
            Self::Recycle => "recycle",
            Self::AlertTriangle => "alert_triangle",
            Self::Truck => "truck",
            Self::Shield => "shield",
            Self::Database => "database",
            Self::Lock => "lock",
            Self::Building2 => "building2",
            Self::User => "user",
            Self::Zap => "zap",
            Self::ChevronRight => "chevron_right",
            Self::Wallet => "wallet",
        }
    }
}

/// One labeled value shown in a passport information section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoField {
    pub icon: Icon,
    pub label: String,
    pub value: String,
}

impl InfoField {
    #[must_use]
    pub fn new(icon: Icon, label: impl Into<String>, value: impl Into<String>) -> Self {
        Self { icon, label: label.into(), value: value.into() }
    }
}

/// A lifecycle event in the chain of custody.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustodyEvent {
    /// Display string; not parsed or ordered.
    pub date: String,
    /// Human-readable description of what happened.
    pub event: String,
}

impl CustodyEvent {
    #[must_use]
    pub fn new(date: impl Into<String>, event: impl Into<String>) -> Self {
        Self { date: date.into(), event: event.into() }
    }
}

/// The structured description of one battery's attributes and history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PassportRecord {
    /// Opaque identifier, displayed verbatim.
    pub id: String,
    /// Display string, e.g. `"175 kg"`.
    pub weight: String,
    pub required_info: Vec<InfoField>,
    pub additional_info: Vec<InfoField>,
    /// Presented in the order given.
    pub chain_of_custody: Vec<CustodyEvent>,
}

impl PassportRecord {
    /// Total number of label/value fields across both information sections.
    #[must_use]
    pub fn field_count(&self) -> usize {
        self.required_info.len() + self.additional_info.len()
    }
}
