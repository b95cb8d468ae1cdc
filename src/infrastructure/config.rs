use serde::Deserialize;
use std::path::Path;

use crate::domain::announcement::Announcements;
use crate::domain::dashboard::Dashboard;
use crate::domain::embed::VisualizationEmbed;
use crate::domain::error::DashboardError;
use crate::domain::stat::{Icon, StatEntry};
use crate::domain::tabs::{CardGrid, CardSection, TabDefinition, TabSet};

pub const DEFAULT_CONFIG_PATH: &str = "config/dashboard.toml";

/// Built-in event content, used when no config file is present.
const BUILTIN_DASHBOARD: &str = include_str!("../../config/dashboard.toml");

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    #[serde(default)]
    pub server: ServerSettings,
    pub page: PageSettings,
    #[serde(default)]
    pub announcements: Vec<String>,
    #[serde(default)]
    pub stats: Vec<StatConfig>,
    pub tabs: TabsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub bind: String,
    pub static_dir: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:8080".to_string(),
            static_dir: "static".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct PageSettings {
    pub title: String,
    pub subtitle: String,
    pub logo: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StatConfig {
    pub label: String,
    pub value: String,
    pub icon: Icon,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TabsConfig {
    #[serde(rename = "default")]
    pub default_key: String,
    #[serde(default)]
    pub items: Vec<TabConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TabConfig {
    pub key: String,
    pub label: String,
    #[serde(default)]
    pub grids: Vec<GridConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GridConfig {
    pub columns: u8,
    #[serde(default)]
    pub cards: Vec<CardConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CardConfig {
    pub heading: String,
    pub url: String,
    pub title: Option<String>,
}

/// Load dashboard content from `path`, or from the built-in copy when the file
/// does not exist. `READATHON_*` environment variables override scalar keys,
/// e.g. `READATHON_SERVER__BIND=127.0.0.1:3000`.
///
/// The file replaces the built-in content as a whole rather than layering on
/// top of it, so a shorter list in the file never inherits trailing entries.
pub fn load_dashboard_config(path: &str) -> anyhow::Result<DashboardConfig> {
    let builder = if Path::new(path).exists() {
        tracing::info!("Loading dashboard config from {}", path);
        config::Config::builder().add_source(config::File::from(Path::new(path)))
    } else {
        tracing::info!("{} not found, using built-in dashboard content", path);
        config::Config::builder().add_source(config::File::from_str(
            BUILTIN_DASHBOARD,
            config::FileFormat::Toml,
        ))
    };

    let settings = builder
        .add_source(
            config::Environment::with_prefix("READATHON")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}

/// Parse dashboard content from a TOML string.
#[cfg(test)]
pub fn parse_dashboard_config(toml: &str) -> anyhow::Result<DashboardConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::from_str(toml, config::FileFormat::Toml))
        .build()?;

    Ok(settings.try_deserialize()?)
}

impl DashboardConfig {
    /// Validate the configured content and turn it into the domain model.
    pub fn into_dashboard(self) -> Result<Dashboard, DashboardError> {
        let stats = self
            .stats
            .into_iter()
            .map(|stat| StatEntry::new(stat.label, stat.value, stat.icon))
            .collect();

        let tabs = self
            .tabs
            .items
            .into_iter()
            .map(TabConfig::into_tab)
            .collect::<Result<Vec<_>, _>>()?;

        let logo = self.page.logo.filter(|logo| !logo.trim().is_empty());

        Ok(Dashboard::new(
            self.page.title,
            self.page.subtitle,
            logo,
            Announcements::new(self.announcements),
            stats,
            TabSet::new(tabs, self.tabs.default_key)?,
        ))
    }
}

impl TabConfig {
    fn into_tab(self) -> Result<TabDefinition, DashboardError> {
        let grids = self
            .grids
            .into_iter()
            .map(|grid| {
                let cards = grid
                    .cards
                    .into_iter()
                    .map(|card| {
                        VisualizationEmbed::new(card.url, card.title)
                            .map(|embed| CardSection::new(card.heading, embed))
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Ok::<_, DashboardError>(CardGrid {
                    columns: grid.columns,
                    cards,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        TabDefinition::new(self.key, self.label, grids)
    }
}

/// The built-in event dashboard.
#[cfg(test)]
pub fn builtin_dashboard() -> Dashboard {
    parse_dashboard_config(BUILTIN_DASHBOARD)
        .unwrap()
        .into_dashboard()
        .unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headings(dashboard: &Dashboard, key: &str) -> Vec<String> {
        dashboard
            .tabs
            .get(key)
            .unwrap()
            .sections()
            .map(|s| s.heading.clone())
            .collect()
    }

    #[test]
    fn test_builtin_content() {
        let dashboard = builtin_dashboard();
        assert_eq!(dashboard.title, "Broadmor Elementary 2025 Read-a-Thon");
        assert_eq!(dashboard.logo.as_deref(), Some("/static/broadmor-logo.svg"));

        let values: Vec<_> = dashboard.stats.iter().map(|s| s.value.as_str()).collect();
        assert_eq!(values, ["48,900", "270", "263"]);
        assert_eq!(dashboard.stats[2].icon, Icon::Trophy);

        assert_eq!(dashboard.tabs.initial().key(), "home");
        assert_eq!(
            headings(&dashboard, "home"),
            [
                "Total Minutes Read",
                "Minutes and Fundraising Scatterplot",
                "Fundraising Goal Progress"
            ]
        );
        assert_eq!(headings(&dashboard, "classrooms").len(), 4);
    }

    #[test]
    fn test_builtin_awards_layout() {
        let dashboard = builtin_dashboard();
        let awards = dashboard.tabs.get("awards").unwrap();
        let layout: Vec<_> = awards.grids.iter().map(|g| (g.columns, g.cards.len())).collect();
        assert_eq!(layout, [(1, 1), (2, 2)]);
    }

    #[test]
    fn test_ten_distinct_embed_urls() {
        let dashboard = builtin_dashboard();
        let mut urls: Vec<_> = dashboard
            .tabs
            .tabs()
            .iter()
            .flat_map(|t| t.sections())
            .map(|s| s.embed.url().to_string())
            .collect();
        assert_eq!(dashboard.embed_count(), 10);
        urls.sort();
        urls.dedup();
        assert_eq!(urls.len(), 10);
        assert!(urls.iter().all(|u| u.starts_with("https://flo.uri.sh/visualisation/")));
    }

    #[test]
    fn test_invalid_url_rejected() {
        let toml = BUILTIN_DASHBOARD.replace(
            "https://flo.uri.sh/visualisation/24962948/embed",
            "not a url",
        );
        let err = parse_dashboard_config(&toml).unwrap().into_dashboard().unwrap_err();
        assert!(matches!(err, DashboardError::InvalidEmbedUrl { url, .. } if url == "not a url"));
    }

    #[test]
    fn test_unknown_default_tab_rejected() {
        let toml = BUILTIN_DASHBOARD.replace("default = \"home\"", "default = \"library\"");
        let err = parse_dashboard_config(&toml).unwrap().into_dashboard().unwrap_err();
        assert!(matches!(err, DashboardError::UnknownDefaultTab(k) if k == "library"));
    }

    #[test]
    fn test_duplicate_tab_key_rejected() {
        let toml = BUILTIN_DASHBOARD.replace("key = \"awards\"", "key = \"home\"");
        let err = parse_dashboard_config(&toml).unwrap().into_dashboard().unwrap_err();
        assert!(matches!(err, DashboardError::DuplicateTabKey(k) if k == "home"));
    }

    #[test]
    fn test_unknown_icon_rejected() {
        let toml = BUILTIN_DASHBOARD.replace("icon = \"trophy\"", "icon = \"rocket\"");
        assert!(parse_dashboard_config(&toml).is_err());
    }

    #[test]
    fn test_blank_logo_is_placeholder() {
        let toml = BUILTIN_DASHBOARD.replace("logo = \"/static/broadmor-logo.svg\"", "logo = \"\"");
        let dashboard = parse_dashboard_config(&toml).unwrap().into_dashboard().unwrap();
        assert_eq!(dashboard.logo, None);
    }

    #[test]
    fn test_missing_file_uses_builtin() {
        let config = load_dashboard_config("does/not/exist.toml").unwrap();
        assert_eq!(config.tabs.items.len(), 3);
        assert_eq!(config.announcements.len(), 3);
    }

    #[test]
    fn test_file_replaces_builtin_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dashboard.toml");
        std::fs::write(
            &path,
            r#"
announcements = ["Only one"]

[page]
title = "Spring Read-a-Thon"
subtitle = "Live stats"

[[stats]]
label = "Total Minutes"
value = "1,000"
icon = "users"

[tabs]
default = "home"

[[tabs.items]]
key = "home"
label = "Home"

[[tabs.items.grids]]
columns = 1

[[tabs.items.grids.cards]]
heading = "Total Minutes Read"
url = "https://flo.uri.sh/visualisation/1/embed"
"#,
        )
        .unwrap();

        let config = load_dashboard_config(path.to_str().unwrap()).unwrap();
        assert_eq!(config.server.static_dir, "static");
        assert_eq!(config.stats.len(), 1);
        assert_eq!(config.announcements, ["Only one"]);

        let dashboard = config.into_dashboard().unwrap();
        assert_eq!(dashboard.title, "Spring Read-a-Thon");
        assert_eq!(dashboard.logo, None);
        assert_eq!(dashboard.embed_count(), 1);
    }

    #[test]
    fn test_environment_overrides_bind() {
        // SAFETY: other tests that load config concurrently never assert on server.bind.
        unsafe { std::env::set_var("READATHON_SERVER__BIND", "127.0.0.1:3999") };
        let config = load_dashboard_config("does/not/exist.toml");
        unsafe { std::env::remove_var("READATHON_SERVER__BIND") };

        assert_eq!(config.unwrap().server.bind, "127.0.0.1:3999");
    }
}
