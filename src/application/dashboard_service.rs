// Dashboard service - Use case for rendering the dashboard page
use crate::domain::dashboard::Dashboard;
use crate::presentation::components::dashboard_page::dashboard_page;
use maud::Markup;
use std::sync::Arc;

#[derive(Clone)]
pub struct DashboardService {
    dashboard: Arc<Dashboard>,
}

impl DashboardService {
    pub fn new(dashboard: Dashboard) -> Self {
        Self {
            dashboard: Arc::new(dashboard),
        }
    }

    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    /// Render the page with `requested_tab` initially selected, or the default
    /// tab if it is absent or unknown.
    pub fn render_page(&self, requested_tab: Option<&str>) -> Markup {
        let selection = self.dashboard.tabs.select(requested_tab);
        if let Some(requested) = requested_tab {
            if requested != selection.key() {
                tracing::debug!(
                    "Unknown tab {:?} requested, showing {:?}",
                    requested,
                    selection.key()
                );
            }
        }
        dashboard_page(&self.dashboard, &selection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::config::builtin_dashboard;

    #[test]
    fn test_render_requested_tab() {
        let service = DashboardService::new(builtin_dashboard());
        let html = service.render_page(Some("awards")).into_string();
        assert!(html.contains(r#"value="awards" checked>"#));
        assert!(!html.contains(r#"value="home" checked>"#));
    }

    #[test]
    fn test_unknown_tab_falls_back_to_home() {
        let service = DashboardService::new(builtin_dashboard());
        let html = service.render_page(Some("../etc")).into_string();
        assert!(html.contains(r#"value="home" checked>"#));
    }
}
