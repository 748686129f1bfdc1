// Static widget catalog - datasets shipped with the service, validated at load
use crate::application::widget_repository::WidgetRepository;
use crate::domain::dataset::DatasetFamily;
use crate::domain::formatting::{NumberFormat, DEFAULT_PLACEHOLDER};
use crate::domain::metric::{Measurement, MetricRow};
use crate::domain::palette::CategoryPalette;
use crate::domain::region::{Region, UnknownRegion};
use crate::domain::widget::{
    ChartSpec, ChartStyle, ComparisonSpec, DimensionSpec, MeasureSpec, WidgetDefinition,
    WidgetKind,
};
use crate::infrastructure::config::{load_widgets_config, RawCell, RowConfig, WidgetConfig, WidgetsConfig};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("widget id `{0}` is defined more than once")]
    DuplicateWidget(String),
    #[error("widget `{widget}` overrides an unknown region")]
    UnknownRegion {
        widget: String,
        #[source]
        source: UnknownRegion,
    },
    #[error("widget `{widget}` overrides region `{region}` more than once")]
    DuplicateOverride { widget: String, region: Region },
    #[error("widget `{widget}` references unknown palette `{palette}`")]
    UnknownPalette { widget: String, palette: String },
    #[error("widget `{0}` declares no measures")]
    NoMeasures(String),
}

#[derive(Debug, Clone, Default)]
pub struct StaticWidgetRepository {
    widgets: Vec<WidgetDefinition>,
}

impl StaticWidgetRepository {
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let config = load_widgets_config(path)?;
        Ok(Self::from_config(config)?)
    }

    pub fn from_config(config: WidgetsConfig) -> Result<Self, CatalogError> {
        let palettes: HashMap<String, CategoryPalette> = config
            .palettes
            .into_iter()
            .map(|(name, tones)| (name, CategoryPalette::new(tones)))
            .collect();

        let mut seen = HashSet::new();
        let mut widgets = Vec::with_capacity(config.widgets.len());

        for widget in config.widgets {
            if !seen.insert(widget.id.clone()) {
                return Err(CatalogError::DuplicateWidget(widget.id));
            }
            widgets.push(Self::build_widget(widget, &palettes)?);
        }

        tracing::info!("Loaded {} widgets", widgets.len());
        Ok(Self { widgets })
    }

    fn build_widget(
        config: WidgetConfig,
        palettes: &HashMap<String, CategoryPalette>,
    ) -> Result<WidgetDefinition, CatalogError> {
        let needs_measures = matches!(
            config.kind,
            WidgetKind::Table | WidgetKind::Tiles | WidgetKind::Chart
        );
        if needs_measures && config.measures.is_empty() {
            return Err(CatalogError::NoMeasures(config.id));
        }

        let mut dimensions = Vec::with_capacity(config.dimensions.len());
        for d in config.dimensions {
            let palette = match d.palette {
                Some(name) => match palettes.get(&name) {
                    Some(p) => Some(p.clone()),
                    None => {
                        return Err(CatalogError::UnknownPalette {
                            widget: config.id,
                            palette: name,
                        });
                    }
                },
                None => None,
            };
            dimensions.push(DimensionSpec {
                key: d.key,
                label: d.label,
                palette,
                truncate_at: d.truncate_at,
            });
        }

        let measures: Vec<MeasureSpec> = config
            .measures
            .into_iter()
            .map(|m| MeasureSpec {
                key: m.key,
                label: m.label,
                format: NumberFormat {
                    precision: m.precision,
                    unit: m.unit,
                    grouped: m.grouped,
                },
                threshold: m.threshold,
                color: m.color,
            })
            .collect();

        let comparison = match config.kind {
            WidgetKind::Comparison => Some(
                config
                    .comparison
                    .map(|c| ComparisonSpec {
                        today: c.today,
                        yesterday: c.yesterday,
                        percent_precision: c.percent_precision,
                    })
                    .unwrap_or_default(),
            ),
            _ => None,
        };

        let chart = match config.kind {
            WidgetKind::Chart => Some(match config.chart {
                Some(c) => ChartSpec {
                    style: c.style,
                    x_key: c.x_key,
                    unit: c.unit,
                    y_min: c.y_min,
                    y_max: c.y_max,
                },
                None => ChartSpec {
                    style: ChartStyle::Line,
                    x_key: "time".to_string(),
                    unit: None,
                    y_min: None,
                    y_max: None,
                },
            }),
            _ => None,
        };

        let mut measure_keys: HashSet<String> = measures.iter().map(|m| m.key.clone()).collect();
        if let Some(c) = &comparison {
            measure_keys.insert(c.today.clone());
            measure_keys.insert(c.yesterday.clone());
        }

        let build_rows = |rows: Vec<RowConfig>| -> Vec<MetricRow> {
            rows.into_iter()
                .map(|row| build_row(row, &measure_keys))
                .collect()
        };

        let mut family = DatasetFamily::new(build_rows(config.rows));
        for (label, rows) in config.overrides {
            let region: Region = label.parse().map_err(|source| CatalogError::UnknownRegion {
                widget: config.id.clone(),
                source,
            })?;
            if family.has_override(region) {
                return Err(CatalogError::DuplicateOverride {
                    widget: config.id.clone(),
                    region,
                });
            }
            tracing::debug!("Widget {} has an override for {}", config.id, region);
            family = family.with_override(region, build_rows(rows));
        }

        Ok(WidgetDefinition {
            id: config.id,
            title: config.title,
            subtitle: config.subtitle,
            kind: config.kind,
            placeholder: config
                .placeholder
                .unwrap_or_else(|| DEFAULT_PLACEHOLDER.to_string()),
            dimensions,
            measures,
            comparison,
            chart,
            family,
        })
    }
}

/// Declared measure keys become measurements, everything else a label.
fn build_row(row: RowConfig, measure_keys: &HashSet<String>) -> MetricRow {
    row.into_iter().fold(MetricRow::new(), |acc, (key, cell)| {
        if measure_keys.contains(&key) {
            let measurement = match cell {
                RawCell::Number(n) => Measurement::from(n),
                RawCell::Text(s) => Measurement::parse(&s),
            };
            acc.with_measure(key, measurement)
        } else {
            acc.with_dimension(key, cell.as_label())
        }
    })
}

impl WidgetRepository for StaticWidgetRepository {
    fn list_widgets(&self) -> &[WidgetDefinition] {
        &self.widgets
    }
}
