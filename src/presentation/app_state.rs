// Application state for HTTP handlers
use crate::application::dashboard_service::DashboardService;
use crate::application::selection_service::SelectionService;

#[derive(Clone)]
pub struct AppState {
    pub dashboard_service: DashboardService,
    pub selection_service: SelectionService,
}
