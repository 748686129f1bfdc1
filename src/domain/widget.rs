// Widget definitions - what each dashboard card shows and how its cells are derived
use super::dataset::DatasetFamily;
use super::formatting::NumberFormat;
use super::palette::CategoryPalette;
use super::threshold::{ThresholdKind, ThresholdRule};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetKind {
    Table,
    Comparison,
    Tiles,
    Chart,
    Alerts,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartStyle {
    Line,
    Area,
}

#[derive(Debug, Clone)]
pub struct DimensionSpec {
    pub key: String,
    pub label: String,
    pub palette: Option<CategoryPalette>,
    /// Labels longer than this are shortened; the full text stays available.
    pub truncate_at: Option<usize>,
}

impl DimensionSpec {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            palette: None,
            truncate_at: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MeasureSpec {
    pub key: String,
    pub label: String,
    pub format: NumberFormat,
    pub threshold: Option<ThresholdKind>,
    /// Series colour for charts.
    pub color: Option<String>,
}

impl MeasureSpec {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            format: NumberFormat::default(),
            threshold: None,
            color: None,
        }
    }

    pub fn rule(&self) -> Option<ThresholdRule> {
        self.threshold.map(ThresholdRule::for_kind)
    }
}

#[derive(Debug, Clone)]
pub struct ComparisonSpec {
    pub today: String,
    pub yesterday: String,
    pub percent_precision: usize,
}

impl Default for ComparisonSpec {
    fn default() -> Self {
        Self {
            today: "today".to_string(),
            yesterday: "yesterday".to_string(),
            percent_precision: 2,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ChartSpec {
    pub style: ChartStyle,
    /// Dimension holding the x-axis label of each row.
    pub x_key: String,
    pub unit: Option<String>,
    pub y_min: Option<f64>,
    pub y_max: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct WidgetDefinition {
    pub id: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub kind: WidgetKind,
    pub placeholder: String,
    pub dimensions: Vec<DimensionSpec>,
    pub measures: Vec<MeasureSpec>,
    pub comparison: Option<ComparisonSpec>,
    pub chart: Option<ChartSpec>,
    pub family: DatasetFamily,
}
