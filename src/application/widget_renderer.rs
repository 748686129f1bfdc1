// Widget renderer - resolves a widget's dataset for a region and derives its view
use crate::domain::dashboard::{
    ActionView, AlertLevel, AlertView, AlertsView, CellView, ChartView, ColumnHeader,
    ComparisonRow, ComparisonView, LegendEntry, SeriesView, TableView, TileView, TilesView,
    Widget, WidgetBody,
};
use crate::domain::formatting::{format_comparison, format_measurement, truncate_label};
use crate::domain::metric::MetricRow;
use crate::domain::region::Region;
use crate::domain::threshold::ThresholdRule;
use crate::domain::widget::{ChartStyle, ComparisonSpec, DimensionSpec, WidgetDefinition, WidgetKind};

pub fn render_widget(definition: &WidgetDefinition, region: Region) -> Widget {
    let rows = definition.family.resolve(region);
    let overridden = definition.family.has_override(region);

    tracing::debug!(
        "Rendering widget {} for {} ({} rows, override={})",
        definition.id,
        region,
        rows.len(),
        overridden
    );

    let body = match definition.kind {
        WidgetKind::Table => WidgetBody::Table(render_table(definition, rows)),
        WidgetKind::Comparison => WidgetBody::Comparison(render_comparison(definition, rows)),
        WidgetKind::Tiles => WidgetBody::Tiles(render_tiles(definition, rows)),
        WidgetKind::Chart => WidgetBody::Chart(render_chart(definition, rows)),
        WidgetKind::Alerts => WidgetBody::Alerts(render_alerts(rows)),
    };

    Widget {
        id: definition.id.clone(),
        title: definition.title.clone(),
        subtitle: definition.subtitle.clone(),
        kind: definition.kind,
        region,
        overridden,
        body,
    }
}

fn dimension_headers(definition: &WidgetDefinition) -> Vec<ColumnHeader> {
    definition
        .dimensions
        .iter()
        .map(|d| ColumnHeader {
            key: d.key.clone(),
            label: d.label.clone(),
        })
        .collect()
}

fn dimension_cell(spec: &DimensionSpec, row: &MetricRow, placeholder: &str) -> CellView {
    let value = row.dimension(&spec.key).unwrap_or(placeholder);
    let tone = spec.palette.as_ref().map(|p| p.tone_for(value).to_string());

    let (text, full_text) = match spec.truncate_at {
        Some(max) => {
            let short = truncate_label(value, max, max.saturating_sub(2));
            if short == value {
                (short, None)
            } else {
                (short, Some(value.to_string()))
            }
        }
        None => (value.to_string(), None),
    };

    CellView {
        tone,
        full_text,
        ..CellView::plain(text)
    }
}

fn legend(definition: &WidgetDefinition) -> Vec<LegendEntry> {
    definition
        .measures
        .iter()
        .find_map(|m| m.threshold)
        .map(|kind| {
            ThresholdRule::for_kind(kind)
                .legend(kind.legend_unit())
                .into_iter()
                .map(|(severity, label)| LegendEntry { severity, label })
                .collect()
        })
        .unwrap_or_default()
}

fn render_table(definition: &WidgetDefinition, rows: &[MetricRow]) -> TableView {
    let mut columns = dimension_headers(definition);
    columns.extend(definition.measures.iter().map(|m| ColumnHeader {
        key: m.key.clone(),
        label: m.label.clone(),
    }));

    let rows = rows
        .iter()
        .map(|row| {
            let mut cells: Vec<CellView> = definition
                .dimensions
                .iter()
                .map(|d| dimension_cell(d, row, &definition.placeholder))
                .collect();

            for measure in &definition.measures {
                let rule = measure.rule();
                let formatted = format_measurement(
                    row.measure(&measure.key),
                    &measure.format,
                    rule.as_ref(),
                    &definition.placeholder,
                );
                cells.push(CellView {
                    severity: formatted.severity,
                    ..CellView::plain(formatted.text)
                });
            }
            cells
        })
        .collect();

    TableView {
        columns,
        rows,
        legend: legend(definition),
    }
}

fn render_comparison(definition: &WidgetDefinition, rows: &[MetricRow]) -> ComparisonView {
    let default_spec = ComparisonSpec::default();
    let spec = definition.comparison.as_ref().unwrap_or(&default_spec);

    let mut columns = dimension_headers(definition);
    for (key, label) in [
        ("today", "Today"),
        ("yesterday", "Yesterday"),
        ("difference", "Difference"),
        ("percentage", "% Change"),
    ] {
        columns.push(ColumnHeader {
            key: key.to_string(),
            label: label.to_string(),
        });
    }

    let rows = rows
        .iter()
        .map(|row| {
            let formatted = format_comparison(
                row.measure(&spec.today),
                row.measure(&spec.yesterday),
                spec.percent_precision,
                &definition.placeholder,
            );
            ComparisonRow {
                dimensions: definition
                    .dimensions
                    .iter()
                    .map(|d| dimension_cell(d, row, &definition.placeholder))
                    .collect(),
                today: formatted.today,
                yesterday: formatted.yesterday,
                difference: formatted.difference,
                percentage: formatted.percentage,
                percentage_value: formatted.percentage_value,
                direction: formatted.direction,
                tooltip: formatted.tooltip,
            }
        })
        .collect();

    ComparisonView { columns, rows }
}

fn render_tiles(definition: &WidgetDefinition, rows: &[MetricRow]) -> TilesView {
    let many_measures = definition.measures.len() > 1;
    let mut tiles = Vec::new();

    for row in rows {
        let label = definition
            .dimensions
            .iter()
            .filter_map(|d| row.dimension(&d.key))
            .collect::<Vec<_>>()
            .join(" ");

        for measure in &definition.measures {
            let rule = measure.rule();
            let formatted = format_measurement(
                row.measure(&measure.key),
                &measure.format,
                rule.as_ref(),
                &definition.placeholder,
            );
            let label = if many_measures {
                format!("{label} {}", measure.label)
            } else {
                label.clone()
            };
            tiles.push(TileView {
                label,
                value: formatted.text,
                severity: formatted.severity,
            });
        }
    }

    TilesView {
        tiles,
        legend: legend(definition),
    }
}

fn render_chart(definition: &WidgetDefinition, rows: &[MetricRow]) -> ChartView {
    let (style, x_key, unit, y_min, y_max) = match &definition.chart {
        Some(c) => (c.style, c.x_key.as_str(), c.unit.clone(), c.y_min, c.y_max),
        None => (ChartStyle::Line, "time", None, None, None),
    };

    let x_labels = rows
        .iter()
        .map(|row| row.dimension(x_key).unwrap_or(definition.placeholder.as_str()).to_string())
        .collect();

    // Series with no value anywhere in the resolved dataset are dropped.
    let series = definition
        .measures
        .iter()
        .map(|m| SeriesView {
            key: m.key.clone(),
            name: m.label.clone(),
            color: m.color.clone(),
            points: rows.iter().map(|row| row.measure(&m.key).value()).collect(),
        })
        .filter(|s| s.points.iter().any(Option::is_some))
        .collect();

    ChartView {
        style,
        unit,
        y_min,
        y_max,
        x_labels,
        series,
    }
}

fn render_alerts(rows: &[MetricRow]) -> AlertsView {
    let mut alerts = Vec::new();
    let mut actions = Vec::new();

    for row in rows {
        let level = AlertLevel::parse(row.dimension("level").unwrap_or_default());
        let title = row.dimension("title").unwrap_or_default().to_string();
        let description = row.dimension("description").unwrap_or_default().to_string();

        match row.dimension("type") {
            Some("action") => actions.push(ActionView {
                level,
                text: if description.is_empty() { title } else { description },
            }),
            _ => alerts.push(AlertView {
                level,
                title,
                description,
            }),
        }
    }

    AlertsView { alerts, actions }
}
