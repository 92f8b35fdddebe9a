//! The compiled-in demonstration passport.

#[cfg(test)]
#[path = "sample_test.rs"]
mod sample_test;

use crate::record::{CustodyEvent, Icon, InfoField, PassportRecord};

/// Build the demonstration record shown on every passport route.
#[must_use]
pub fn sample_record() -> PassportRecord {
    PassportRecord {
        id: "0Xf4r...G937".to_owned(),
        weight: "175 kg".to_owned(),
        required_info: vec![
            InfoField::new(Icon::Battery, "Battery Type", "Lithium-Ion"),
            InfoField::new(Icon::Activity, "Durability", "8 years / 160,000 km"),
            InfoField::new(Icon::Settings, "Battery Model", "EV75-85"),
            InfoField::new(Icon::Activity, "Performance", "75 kWh"),
        ],
        additional_info: vec![
            InfoField::new(Icon::Battery, "Product Name", "EcoPower 75"),
            InfoField::new(Icon::Factory, "GHG Emissions", "6.5 tCO2e"),
            InfoField::new(Icon::Factory, "Manufacturing Site", "Gigafactory 1, Nevada"),
            InfoField::new(Icon::Award, "Declaration of Conformity", "EU 2006/66/EC"),
            InfoField::new(Icon::Recycle, "Recycled Content", "12% by weight"),
            InfoField::new(Icon::AlertTriangle, "Hazardous Substance", "See detailed report"),
            InfoField::new(Icon::Recycle, "End of Life Collection Information", "Available"),
            InfoField::new(Icon::Award, "Certifications", "ISO 14001, IATF 16949"),
            InfoField::new(Icon::Activity, "Battery Health", "98%"),
            InfoField::new(Icon::Truck, "Supply Chain due Diligence Policy", "Implemented"),
        ],
        chain_of_custody: vec![
            CustodyEvent::new("08/07/2023, 11:00", "Battery Serviced"),
            CustodyEvent::new("12/09/2021, 08:00", "Car sold to Consumer"),
            CustodyEvent::new("27/08/2021, 19:30", "Battery Serviced"),
            CustodyEvent::new("14/07/2021, 11:00", "Battery Sold to automotive OEM"),
        ],
    }
}
