//! Landing page card content.

#[cfg(test)]
#[path = "landing_test.rs"]
mod landing_test;

use passport::Icon;

/// A feature or role tile on the landing page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LandingCard {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
    /// CSS modifier selecting the tile gradient.
    pub accent: &'static str,
}

pub static FEATURES: [LandingCard; 3] = [
    LandingCard {
        icon: Icon::Shield,
        title: "Data Privacy & Consent",
        description: "Secure control over battery data access with advanced encryption",
        accent: "blue",
    },
    LandingCard {
        icon: Icon::Database,
        title: "Blockchain Tracking",
        description: "Immutable lifecycle tracking from production to recycling",
        accent: "purple",
    },
    LandingCard {
        icon: Icon::Lock,
        title: "Role-Based Access",
        description: "Tailored permissions for all stakeholders in the ecosystem",
        accent: "indigo",
    },
];

pub static ROLES: [LandingCard; 5] = [
    LandingCard {
        icon: Icon::Building2,
        title: "Government",
        description: "Oversees the system, authorizes roles, and ensures compliance with regulations.",
        accent: "purple",
    },
    LandingCard {
        icon: Icon::Battery,
        title: "Manufacturer",
        description: "Registers batteries and provides technical specifications to the system.",
        accent: "green",
    },
    LandingCard {
        icon: Icon::Truck,
        title: "Supplier",
        description: "Manages battery distribution and updates delivery statuses.",
        accent: "yellow",
    },
    LandingCard {
        icon: Icon::User,
        title: "Consumer",
        description: "Views battery information and gives/revokes consent for data access.",
        accent: "red",
    },
    LandingCard {
        icon: Icon::Recycle,
        title: "Recycler",
        description: "Updates the system when a battery is recycled and provides details on material recovery.",
        accent: "cyan",
    },
];

/// CSS class list for a card tile.
pub fn card_class(base: &str, card: &LandingCard) -> String {
    format!("{base} {base}--{}", card.accent)
}
