use crate::domain::region::Region;
use crate::domain::threshold::ThresholdKind;
use crate::domain::widget::{ChartStyle, WidgetKind};
use anyhow::Context;
use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::path::Path;

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub server: ServerSettings,
    pub dashboard: PageSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PageSettings {
    pub title: String,
    pub window: String,
    pub note: Option<String>,
    pub default_region: Region,
    pub widgets_path: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct WidgetsConfig {
    #[serde(default)]
    pub palettes: HashMap<String, HashMap<String, String>>,
    #[serde(default)]
    pub widgets: Vec<WidgetConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WidgetConfig {
    pub id: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub kind: WidgetKind,
    pub placeholder: Option<String>,
    #[serde(default)]
    pub dimensions: Vec<DimensionConfig>,
    #[serde(default)]
    pub measures: Vec<MeasureConfig>,
    pub comparison: Option<ComparisonConfig>,
    pub chart: Option<ChartConfig>,
    #[serde(default)]
    pub rows: Vec<RowConfig>,
    /// Region label to replacement rows.
    #[serde(default)]
    pub overrides: HashMap<String, Vec<RowConfig>>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DimensionConfig {
    pub key: String,
    pub label: String,
    pub palette: Option<String>,
    pub truncate_at: Option<usize>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MeasureConfig {
    pub key: String,
    pub label: String,
    #[serde(default)]
    pub unit: String,
    pub precision: Option<usize>,
    #[serde(default)]
    pub grouped: bool,
    pub threshold: Option<ThresholdKind>,
    pub color: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ComparisonConfig {
    #[serde(default = "default_today_key")]
    pub today: String,
    #[serde(default = "default_yesterday_key")]
    pub yesterday: String,
    #[serde(default = "default_percent_precision")]
    pub percent_precision: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChartConfig {
    pub style: ChartStyle,
    #[serde(default = "default_x_key")]
    pub x_key: String,
    pub unit: Option<String>,
    pub y_min: Option<f64>,
    pub y_max: Option<f64>,
}

pub type RowConfig = BTreeMap<String, RawCell>;

/// A cell exactly as written in the catalog, before it is read as a label or
/// a measurement.
#[derive(Debug, Clone, PartialEq)]
pub enum RawCell {
    Number(f64),
    Text(String),
}

impl RawCell {
    pub fn as_label(&self) -> String {
        match self {
            RawCell::Number(n) => n.to_string(),
            RawCell::Text(s) => s.clone(),
        }
    }
}

impl<'de> Deserialize<'de> for RawCell {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RawCellVisitor;

        impl<'de> Visitor<'de> for RawCellVisitor {
            type Value = RawCell;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a number or a string")
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<RawCell, E> {
                Ok(RawCell::Number(v as f64))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<RawCell, E> {
                Ok(RawCell::Number(v as f64))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<RawCell, E> {
                Ok(RawCell::Number(v))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<RawCell, E> {
                Ok(RawCell::Text(v.to_string()))
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<RawCell, E> {
                Ok(RawCell::Text(v.to_string()))
            }
        }

        deserializer.deserialize_any(RawCellVisitor)
    }
}

fn default_today_key() -> String {
    "today".to_string()
}

fn default_yesterday_key() -> String {
    "yesterday".to_string()
}

fn default_percent_precision() -> usize {
    2
}

fn default_x_key() -> String {
    "time".to_string()
}

/// Server settings from `config/server.*`, overridden by `DASHBOARD__*`
/// environment variables. Every key has a default.
pub fn load_server_config() -> anyhow::Result<ServerConfig> {
    let settings = config::Config::builder()
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8080)?
        .set_default("dashboard.title", "Order Count Metrics")?
        .set_default("dashboard.window", "02:00 - 08:00 CET")?
        .set_default("dashboard.default_region", Region::AllInstances.label())?
        .set_default("dashboard.widgets_path", "config/widgets.toml")?
        .add_source(config::File::with_name("config/server").required(false))
        .add_source(
            config::Environment::with_prefix("DASHBOARD")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}

pub fn load_widgets_config(path: impl AsRef<Path>) -> anyhow::Result<WidgetsConfig> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read widget catalog {}", path.display()))?;
    parse_widgets_config(&raw)
        .with_context(|| format!("Failed to parse widget catalog {}", path.display()))
}

pub fn parse_widgets_config(raw: &str) -> anyhow::Result<WidgetsConfig> {
    Ok(toml::from_str(raw)?)
}
