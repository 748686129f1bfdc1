// Dashboard service - Use case for building dashboards
use crate::application::widget_renderer::render_widget;
use crate::application::widget_repository::WidgetRepository;
use crate::domain::dashboard::{Dashboard, Widget};
use crate::domain::region::Region;
use crate::infrastructure::config::PageSettings;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum DashboardError {
    #[error("unknown widget `{0}`")]
    UnknownWidget(String),
}

#[derive(Clone)]
pub struct DashboardService {
    repository: Arc<dyn WidgetRepository>,
    page: PageSettings,
}

impl DashboardService {
    pub fn new(repository: Arc<dyn WidgetRepository>, page: PageSettings) -> Self {
        Self { repository, page }
    }

    pub fn get_dashboard(&self, region: Region, last_updated: DateTime<Utc>) -> Dashboard {
        let widgets: Vec<Widget> = self
            .repository
            .list_widgets()
            .iter()
            .map(|definition| render_widget(definition, region))
            .collect();

        tracing::debug!("Built dashboard for {} with {} widgets", region, widgets.len());

        Dashboard {
            title: self.page.title.clone(),
            window: self.page.window.clone(),
            note: self.page.note.clone(),
            region,
            last_updated,
            widgets,
        }
    }

    pub fn get_widget(&self, id: &str, region: Region) -> Result<Widget, DashboardError> {
        self.repository
            .find_widget(id)
            .map(|definition| render_widget(definition, region))
            .ok_or_else(|| DashboardError::UnknownWidget(id.to_string()))
    }
}
