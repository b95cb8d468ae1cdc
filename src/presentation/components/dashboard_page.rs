// Full dashboard document
use maud::{html, Markup, PreEscaped, DOCTYPE};

use super::announcement_banner::announcement_banner;
use super::embed_frame::embed_frame;
use super::page_header::page_header;
use super::stat_card::stat_card;
use crate::domain::dashboard::Dashboard;
use crate::domain::tabs::{CardSection, TabDefinition, TabSelection, TabSet};

const DASHBOARD_CSS: &str = include_str!("../../../assets/dashboard.css");

/// Radio group name shared by the tab triggers.
pub const TAB_GROUP_NAME: &str = "dashboard-tab";

fn trigger_id(key: &str) -> String {
    format!("tab-{key}")
}

fn panel_id(key: &str) -> String {
    format!("panel-{key}")
}

/// Per-tab rules: a panel is displayed only while its own radio is checked.
/// Switching tabs is handled entirely by the browser.
pub fn tab_rules(tabs: &TabSet) -> String {
    let mut css = String::new();
    for tab in tabs.tabs() {
        let trigger = trigger_id(&tab.key);
        css.push_str(&format!(
            "#{trigger}:checked ~ #{panel} {{ display: block; }}\n\
             #{trigger}:checked ~ .tab-list label[for=\"{trigger}\"] \
             {{ background: #fff; color: #111827; box-shadow: 0 1px 2px rgba(0, 0, 0, 0.1); }}\n\
             #{trigger}:focus-visible ~ .tab-list label[for=\"{trigger}\"] \
             {{ outline: 2px solid #2563eb; }}\n",
            panel = panel_id(&tab.key),
        ));
    }
    css
}

pub fn card_section(card: &CardSection) -> Markup {
    html! {
        div class="card" {
            h3 class="card__heading" { (card.heading) }
            (embed_frame(&card.embed))
        }
    }
}

pub fn tab_panel(tab: &TabDefinition) -> Markup {
    html! {
        div class="tab-panel" id=(panel_id(&tab.key)) role="tabpanel" data-tab=(tab.key) {
            @for grid in &tab.grids {
                div class=(format!("card-grid cols-{}", grid.columns)) {
                    @for card in &grid.cards {
                        (card_section(card))
                    }
                }
            }
        }
    }
}

/// Mutually exclusive tabs. Every panel is rendered up front; `selection`
/// only decides which radio starts checked.
pub fn tab_group(tabs: &TabSet, selection: &TabSelection) -> Markup {
    html! {
        section class="tabs" {
            @for tab in tabs.tabs() {
                input class="tab-radio" type="radio" name=(TAB_GROUP_NAME)
                    id=(trigger_id(&tab.key)) value=(tab.key)
                    checked[selection.is_selected(tab)];
            }
            div class="tab-list" role="tablist" {
                @for tab in tabs.tabs() {
                    label class="tab-trigger" for=(trigger_id(&tab.key)) role="tab"
                        aria-controls=(panel_id(&tab.key)) {
                        (tab.label)
                    }
                }
            }
            @for tab in tabs.tabs() {
                (tab_panel(tab))
            }
        }
    }
}

pub fn dashboard_page(dashboard: &Dashboard, selection: &TabSelection) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (dashboard.title) }
                style {
                    (PreEscaped(DASHBOARD_CSS))
                    (PreEscaped(tab_rules(&dashboard.tabs)))
                }
            }
            body {
                (page_header(&dashboard.title, &dashboard.subtitle, dashboard.logo.as_deref()))
                main {
                    (announcement_banner(&dashboard.announcements))
                    section class="stats" aria-label="Summary" {
                        @for stat in &dashboard.stats {
                            (stat_card(stat))
                        }
                    }
                    (tab_group(&dashboard.tabs, selection))
                }
            }
        }
    }
}
