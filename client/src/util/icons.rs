//! Icon lookup table.
//!
//! Maps each `passport::Icon` to the SVG path data of a 24x24 stroked glyph.

#[cfg(test)]
#[path = "icons_test.rs"]
mod icons_test;

use passport::Icon;

/// SVG `d` attributes drawn, in order, for `icon`.
pub fn svg_paths(icon: Icon) -> &'static [&'static str] {
    match icon {
        Icon::Battery => &["M6 7h11a2 2 0 0 1 2 2v6a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V9a2 2 0 0 1 2-2z", "M22 11v2"],
        Icon::Activity => &["M22 12h-4l-3 9L9 3l-3 9H2"],
        Icon::Settings => &[
            "M12 15a3 3 0 1 0 0-6 3 3 0 0 0 0 6z",
            "M19.4 15a1.7 1.7 0 0 0 .3 1.8l.1.1a2 2 0 1 1-2.8 2.8l-.1-.1a1.7 1.7 0 0 0-1.8-.3 1.7 1.7 0 0 0-1 1.5V21a2 2 0 0 1-4 0v-.1a1.7 1.7 0 0 0-1.1-1.5 1.7 1.7 0 0 0-1.8.3l-.1.1a2 2 0 1 1-2.8-2.8l.1-.1a1.7 1.7 0 0 0 .3-1.8 1.7 1.7 0 0 0-1.5-1H3a2 2 0 0 1 0-4h.1a1.7 1.7 0 0 0 1.5-1.1 1.7 1.7 0 0 0-.3-1.8l-.1-.1a2 2 0 1 1 2.8-2.8l.1.1a1.7 1.7 0 0 0 1.8.3H9a1.7 1.7 0 0 0 1-1.5V3a2 2 0 0 1 4 0v.1a1.7 1.7 0 0 0 1 1.5 1.7 1.7 0 0 0 1.8-.3l.1-.1a2 2 0 1 1 2.8 2.8l-.1.1a1.7 1.7 0 0 0-.3 1.8V9a1.7 1.7 0 0 0 1.5 1H21a2 2 0 0 1 0 4h-.1a1.7 1.7 0 0 0-1.5 1z",
        ],
        Icon::Factory => &["M2 20a2 2 0 0 0 2 2h16a2 2 0 0 0 2-2V8l-7 5V8l-7 5V4a2 2 0 0 0-2-2H4a2 2 0 0 0-2 2z", "M17 18h1", "M12 18h1", "M7 18h1"],
        Icon::Award => &["M12 15a7 7 0 1 0 0-14 7 7 0 0 0 0 14z", "M8.2 13.9 7 23l5-3 5 3-1.2-9.1"],
        Icon::Recycle => &[
            "M7 19H4.8a1.8 1.8 0 0 1-1.6-2.7L7.2 9.5",
            "M11 19h8.2a1.8 1.8 0 0 0 1.6-2.7l-1.2-2.1",
            "m14 16-3 3 3 3",
            "M8.3 13.6 7.2 9.5 3.1 10.6",
            "m9.3 5.8 1.1-1.9a1.8 1.8 0 0 1 3.1 0l3.9 6.6",
            "m13.4 10.5 4.1 1.1 1.1-4.1",
        ],
        Icon::AlertTriangle => &["m21.7 18-8-14a2 2 0 0 0-3.5 0l-8 14A2 2 0 0 0 4 21h16a2 2 0 0 0 1.7-3z", "M12 9v4", "M12 17h.01"],
        Icon::Truck => &[
            "M14 18V6a2 2 0 0 0-2-2H4a2 2 0 0 0-2 2v11a1 1 0 0 0 1 1h2",
            "M15 18H9",
            "M19 18h2a1 1 0 0 0 1-1v-3.7a1 1 0 0 0-.2-.6l-3.5-4.3A1 1 0 0 0 17.5 8H14",
            "M17 20a2 2 0 1 0 0-4 2 2 0 0 0 0 4z",
            "M7 20a2 2 0 1 0 0-4 2 2 0 0 0 0 4z",
        ],
        Icon::Shield => &["M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z"],
        Icon::Database => &[
            "M12 8c4.97 0 9-1.34 9-3s-4.03-3-9-3-9 1.34-9 3 4.03 3 9 3z",
            "M3 5v14c0 1.66 4 3 9 3s9-1.34 9-3V5",
            "M3 12c0 1.66 4 3 9 3s9-1.34 9-3",
        ],
        Icon::Lock => &["M5 11h14a2 2 0 0 1 2 2v7a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-7a2 2 0 0 1 2-2z", "M7 11V7a5 5 0 0 1 10 0v4"],
        Icon::Building2 => &[
            "M6 22V4a2 2 0 0 1 2-2h8a2 2 0 0 1 2 2v18z",
            "M6 12H4a2 2 0 0 0-2 2v6a2 2 0 0 0 2 2h2",
            "M18 9h2a2 2 0 0 1 2 2v9a2 2 0 0 1-2 2h-2",
            "M10 6h4",
            "M10 10h4",
            "M10 14h4",
            "M10 18h4",
        ],
        Icon::User => &["M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2", "M12 11a4 4 0 1 0 0-8 4 4 0 0 0 0 8z"],
        Icon::Zap => &["M13 2 3 14h9l-1 8 10-12h-9l1-8z"],
        Icon::ChevronRight => &["m9 18 6-6-6-6"],
        Icon::Wallet => &[
            "M19 7V4a1 1 0 0 0-1-1H5a2 2 0 0 0 0 4h15a1 1 0 0 1 1 1v4h-3a2 2 0 0 0 0 4h3a1 1 0 0 0 1-1v-2a1 1 0 0 0-1-1",
            "M3 5v14a2 2 0 0 0 2 2h15a1 1 0 0 0 1-1v-4",
        ],
    }
}
