// Dashboard domain model
use serde::Serialize;

use super::announcement::Announcements;
use super::stat::StatEntry;
use super::tabs::TabSet;

/// Everything the dashboard page shows. Built once at startup, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub title: String,
    pub subtitle: String,
    pub logo: Option<String>,
    pub announcements: Announcements,
    pub stats: Vec<StatEntry>,
    pub tabs: TabSet,
}

impl Dashboard {
    pub fn new(
        title: String,
        subtitle: String,
        logo: Option<String>,
        announcements: Announcements,
        stats: Vec<StatEntry>,
        tabs: TabSet,
    ) -> Self {
        Self {
            title,
            subtitle,
            logo,
            announcements,
            stats,
            tabs,
        }
    }

    /// Number of embedded visualizations across all tabs.
    pub fn embed_count(&self) -> usize {
        self.tabs.tabs().iter().map(|tab| tab.sections().count()).sum()
    }
}
