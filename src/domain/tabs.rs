// Tab and card layout domain model
use serde::Serialize;
use std::collections::HashSet;

use super::embed::VisualizationEmbed;
use super::error::DashboardError;

pub const MAX_GRID_COLUMNS: u8 = 4;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardSection {
    pub heading: String,
    pub embed: VisualizationEmbed,
}

impl CardSection {
    pub fn new(heading: String, embed: VisualizationEmbed) -> Self {
        Self { heading, embed }
    }
}

/// A row of cards laid out in `columns` equal columns on wide screens.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardGrid {
    pub columns: u8,
    pub cards: Vec<CardSection>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TabDefinition {
    pub key: String,
    pub label: String,
    pub grids: Vec<CardGrid>,
}

impl TabDefinition {
    pub fn new(key: String, label: String, grids: Vec<CardGrid>) -> Result<Self, DashboardError> {
        if !is_valid_key(&key) {
            return Err(DashboardError::InvalidTabKey(key));
        }
        if grids.is_empty() {
            return Err(DashboardError::EmptyTab(key));
        }
        for grid in &grids {
            if grid.cards.is_empty() {
                return Err(DashboardError::EmptyGrid(key));
            }
            if grid.columns == 0 || grid.columns > MAX_GRID_COLUMNS {
                return Err(DashboardError::UnsupportedColumns {
                    tab: key,
                    columns: grid.columns,
                });
            }
        }
        Ok(Self { key, label, grids })
    }

    /// The panel's cards in display order.
    pub fn sections(&self) -> impl Iterator<Item = &CardSection> {
        self.grids.iter().flat_map(|grid| grid.cards.iter())
    }
}

// Keys end up in element ids and CSS selectors.
fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-' || b == b'_')
}

/// The ordered, mutually exclusive tabs of the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TabSet {
    tabs: Vec<TabDefinition>,
    default_key: String,
}

impl TabSet {
    pub fn new(tabs: Vec<TabDefinition>, default_key: String) -> Result<Self, DashboardError> {
        if tabs.is_empty() {
            return Err(DashboardError::NoTabs);
        }
        let mut seen = HashSet::new();
        for tab in &tabs {
            if !seen.insert(tab.key.as_str()) {
                return Err(DashboardError::DuplicateTabKey(tab.key.clone()));
            }
        }
        if !seen.contains(default_key.as_str()) {
            return Err(DashboardError::UnknownDefaultTab(default_key));
        }
        Ok(Self { tabs, default_key })
    }

    pub fn tabs(&self) -> &[TabDefinition] {
        &self.tabs
    }

    pub fn get(&self, key: &str) -> Option<&TabDefinition> {
        self.tabs.iter().find(|tab| tab.key == key)
    }

    /// Selection every page load starts from.
    pub fn initial(&self) -> TabSelection {
        TabSelection {
            key: self.default_key.clone(),
        }
    }

    /// Selection for a requested key, falling back to the default tab when the
    /// key is absent or unknown.
    pub fn select(&self, requested: Option<&str>) -> TabSelection {
        let mut selection = self.initial();
        if let Some(key) = requested {
            selection.activate(self, key);
        }
        selection
    }

    /// The one tab whose panel is visible for `selection`.
    #[cfg(test)]
    pub fn visible(&self, selection: &TabSelection) -> &TabDefinition {
        self.get(&selection.key).unwrap_or(&self.tabs[0])
    }
}

/// The selected tab. Changes only through an explicit activation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSelection {
    key: String,
}

impl TabSelection {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn is_selected(&self, tab: &TabDefinition) -> bool {
        self.key == tab.key
    }

    /// Switch to `key`. Unknown keys leave the selection unchanged and return false.
    pub fn activate(&mut self, tabs: &TabSet, key: &str) -> bool {
        if tabs.get(key).is_none() {
            return false;
        }
        self.key = key.to_string();
        true
    }
}
