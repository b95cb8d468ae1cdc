// Responsive iframe wrapper for hosted charts
use maud::{html, Markup};

use crate::domain::embed::{aspect_padding, VisualizationEmbed, EMBED_ALLOW, EMBED_SANDBOX};

/// Reserve a fixed aspect ratio box and fill it with the embedded document.
/// Load failures surface only as a blank frame.
pub fn embed_frame(embed: &VisualizationEmbed) -> Markup {
    html! {
        div.embed-frame style=(format!("padding-top: {}", aspect_padding())) {
            iframe.embed-frame__doc
                title=(embed.title())
                src=(embed.url())
                loading="eager"
                referrerpolicy="no-referrer-when-downgrade"
                sandbox=(EMBED_SANDBOX)
                allow=(EMBED_ALLOW)
                allowfullscreen {}
        }
    }
}
