use maud::{html, Markup, PreEscaped};

use crate::domain::stat::{Icon, StatEntry};

pub fn icon(icon: Icon) -> Markup {
    html! {
        svg.icon
            data-icon=(icon.name())
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true" {
            (PreEscaped(icon.svg_paths()))
        }
    }
}

pub fn stat_card(stat: &StatEntry) -> Markup {
    html! {
        div.card.stat-card {
            (icon(stat.icon))
            div {
                div.stat-card__label { (stat.label) }
                div.stat-card__value { (stat.value) }
            }
        }
    }
}
