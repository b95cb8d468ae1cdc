// Summary statistic domain model
use serde::{Deserialize, Serialize};

/// Glyphs available to stat tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Icon {
    Users,
    Trophy,
}

impl Icon {
    pub fn name(self) -> &'static str {
        match self {
            Icon::Users => "users",
            Icon::Trophy => "trophy",
        }
    }

    /// Inner SVG elements for a 24x24 stroke icon.
    pub fn svg_paths(self) -> &'static str {
        match self {
            Icon::Users => concat!(
                r#"<path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"/>"#,
                r#"<circle cx="9" cy="7" r="4"/>"#,
                r#"<path d="M22 21v-2a4 4 0 0 0-3-3.87"/>"#,
                r#"<path d="M16 3.13a4 4 0 0 1 0 7.75"/>"#,
            ),
            Icon::Trophy => concat!(
                r#"<path d="M6 9H4.5a2.5 2.5 0 0 1 0-5H6"/>"#,
                r#"<path d="M18 9h1.5a2.5 2.5 0 0 0 0-5H18"/>"#,
                r#"<path d="M4 22h16"/>"#,
                r#"<path d="M10 14.66V17c0 .55-.47.98-.97 1.21C7.85 18.75 7 20.24 7 22"/>"#,
                r#"<path d="M14 14.66V17c0 .55.47.98.97 1.21C16.15 18.75 17 20.24 17 22"/>"#,
                r#"<path d="M18 2H6v7a6 6 0 0 0 12 0V2Z"/>"#,
            ),
        }
    }
}

/// A display-only summary figure. `value` is pre-formatted and never parsed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatEntry {
    pub label: String,
    pub value: String,
    pub icon: Icon,
}

impl StatEntry {
    pub fn new(label: String, value: String, icon: Icon) -> Self {
        Self { label, value, icon }
    }
}
