// Dashboard view models - what the renderer hands to clients
use super::comparison::Direction;
use super::region::Region;
use super::threshold::Severity;
use super::widget::{ChartStyle, WidgetKind};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub title: String,
    pub window: String,
    pub note: Option<String>,
    pub region: Region,
    pub last_updated: DateTime<Utc>,
    pub widgets: Vec<Widget>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Widget {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub kind: WidgetKind,
    /// Region the dataset was resolved for.
    pub region: Region,
    /// True when a region-specific dataset replaced the default.
    pub overridden: bool,
    pub body: WidgetBody,
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum WidgetBody {
    Table(TableView),
    Comparison(ComparisonView),
    Tiles(TilesView),
    Chart(ChartView),
    Alerts(AlertsView),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnHeader {
    pub key: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub severity: Severity,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CellView {
    pub text: String,
    pub severity: Severity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tone: Option<String>,
    /// Untruncated label when `text` was shortened.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_text: Option<String>,
}

impl CellView {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            severity: Severity::Neutral,
            tone: None,
            full_text: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TableView {
    pub columns: Vec<ColumnHeader>,
    pub rows: Vec<Vec<CellView>>,
    pub legend: Vec<LegendEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComparisonRow {
    pub dimensions: Vec<CellView>,
    pub today: String,
    pub yesterday: String,
    pub difference: String,
    pub percentage: String,
    pub percentage_value: Option<f64>,
    pub direction: Option<Direction>,
    pub tooltip: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComparisonView {
    pub columns: Vec<ColumnHeader>,
    pub rows: Vec<ComparisonRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TileView {
    pub label: String,
    pub value: String,
    pub severity: Severity,
}

#[derive(Debug, Clone, Serialize)]
pub struct TilesView {
    pub tiles: Vec<TileView>,
    pub legend: Vec<LegendEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SeriesView {
    pub key: String,
    pub name: String,
    pub color: Option<String>,
    /// One entry per x label; `None` where the row has no value.
    pub points: Vec<Option<f64>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartView {
    pub style: ChartStyle,
    pub unit: Option<String>,
    pub y_min: Option<f64>,
    pub y_max: Option<f64>,
    pub x_labels: Vec<String>,
    pub series: Vec<SeriesView>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    Info,
    Warning,
    Critical,
}

impl AlertLevel {
    /// Unknown levels read as `Info`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "critical" => AlertLevel::Critical,
            "warning" => AlertLevel::Warning,
            _ => AlertLevel::Info,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlertView {
    pub level: AlertLevel,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionView {
    pub level: AlertLevel,
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AlertsView {
    pub alerts: Vec<AlertView>,
    pub actions: Vec<ActionView>,
}
