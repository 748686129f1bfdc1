// HTTP request handlers
use crate::application::dashboard_service::DashboardError;
use crate::domain::dashboard::{Dashboard, Widget};
use crate::domain::region::{Region, UnknownRegion};
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    UnknownRegion(#[from] UnknownRegion),
    #[error(transparent)]
    Dashboard(#[from] DashboardError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::UnknownRegion(_) => StatusCode::BAD_REQUEST,
            ApiError::Dashboard(DashboardError::UnknownWidget(_)) => StatusCode::NOT_FOUND,
        };
        tracing::warn!("Rejected request: {}", self);
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[derive(Deserialize)]
pub struct RegionQuery {
    pub region: Option<String>,
}

#[derive(Deserialize)]
pub struct SelectRequest {
    pub region: String,
}

#[derive(Serialize)]
pub struct RegionsResponse {
    pub regions: Vec<Region>,
    pub selected: Region,
}

#[derive(Serialize)]
pub struct SelectionResponse {
    pub selected: Region,
}

#[derive(Serialize)]
pub struct RefreshResponse {
    pub last_updated: DateTime<Utc>,
}

/// Explicit `?region=` wins over the selector state.
async fn effective_region(state: &AppState, query: &RegionQuery) -> Result<Region, ApiError> {
    match query.region.as_deref() {
        Some(raw) => Ok(raw.parse()?),
        None => Ok(state.selection_service.current().await),
    }
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

pub async fn list_regions(State(state): State<Arc<AppState>>) -> Json<RegionsResponse> {
    Json(RegionsResponse {
        regions: Region::ALL.to_vec(),
        selected: state.selection_service.current().await,
    })
}

pub async fn select_region(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SelectRequest>,
) -> Result<Json<SelectionResponse>, ApiError> {
    let region: Region = request.region.parse()?;
    let selected = state.selection_service.select(region).await;
    Ok(Json(SelectionResponse { selected }))
}

pub async fn next_region(State(state): State<Arc<AppState>>) -> Json<SelectionResponse> {
    let selected = state.selection_service.cycle().await;
    Json(SelectionResponse { selected })
}

pub async fn refresh(State(state): State<Arc<AppState>>) -> Json<RefreshResponse> {
    let last_updated = state.selection_service.refresh().await;
    Json(RefreshResponse { last_updated })
}

pub async fn get_dashboard(
    Query(query): Query<RegionQuery>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Dashboard>, ApiError> {
    let region = effective_region(&state, &query).await?;
    let last_updated = state.selection_service.last_updated().await;
    Ok(Json(state.dashboard_service.get_dashboard(region, last_updated)))
}

pub async fn get_widget(
    Path(id): Path<String>,
    Query(query): Query<RegionQuery>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Widget>, ApiError> {
    let region = effective_region(&state, &query).await?;
    Ok(Json(state.dashboard_service.get_widget(&id, region)?))
}
