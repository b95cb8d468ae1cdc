use maud::{html, Markup};

use crate::domain::announcement::Announcements;

pub const ANNOUNCEMENT_GLYPH: &str = "📢";

/// Highlighted strip with the current announcement. Renders nothing when there
/// are no messages.
pub fn announcement_banner(announcements: &Announcements) -> Markup {
    html! {
        @if let Some(message) = announcements.current() {
            div class="announcement" role="status" {
                (ANNOUNCEMENT_GLYPH) " " (message)
            }
        }
    }
}
