// Derived-metric formatting - raw cells to display strings and tiers
use super::comparison::{Comparison, Direction};
use super::metric::Measurement;
use super::threshold::{Severity, ThresholdRule};

pub const DEFAULT_PLACEHOLDER: &str = "-";

/// How a numeric cell is written out.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NumberFormat {
    /// Fixed decimals. `None` prints whole numbers without a fraction.
    pub precision: Option<usize>,
    pub unit: String,
    /// Thousands separators, as used for order counts.
    pub grouped: bool,
}

impl NumberFormat {
    pub fn count() -> Self {
        Self {
            precision: None,
            unit: String::new(),
            grouped: true,
        }
    }

    pub fn percent(precision: usize) -> Self {
        Self {
            precision: Some(precision),
            unit: "%".to_string(),
            grouped: false,
        }
    }

    pub fn format(&self, value: f64) -> String {
        // Normalises -0.0 so it never prints with a sign
        let value = value + 0.0;
        let body = match self.precision {
            Some(p) => format!("{value:.p$}"),
            None => format!("{value}"),
        };
        let body = if self.grouped { group_thousands(&body) } else { body };
        format!("{body}{}", self.unit)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormattedCell {
    pub text: String,
    pub severity: Severity,
}

/// Format and classify one measurement. Missing cells always get the
/// placeholder and `Neutral`, regardless of the rule.
pub fn format_measurement(
    measurement: Measurement,
    format: &NumberFormat,
    rule: Option<&ThresholdRule>,
    placeholder: &str,
) -> FormattedCell {
    match measurement {
        Measurement::Missing => FormattedCell {
            text: placeholder.to_string(),
            severity: Severity::Neutral,
        },
        Measurement::Value(v) => FormattedCell {
            text: format.format(v),
            severity: rule.map(|r| r.classify(v)).unwrap_or(Severity::Neutral),
        },
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormattedComparison {
    pub today: String,
    pub yesterday: String,
    pub difference: String,
    /// Absolute change, e.g. `78.52%`.
    pub percentage: String,
    pub percentage_value: Option<f64>,
    pub direction: Option<Direction>,
    pub tooltip: Option<String>,
}

pub fn format_comparison(
    today: Measurement,
    yesterday: Measurement,
    percent_precision: usize,
    placeholder: &str,
) -> FormattedComparison {
    let count = NumberFormat::count();
    let side = |m: Measurement| {
        m.value()
            .map(|v| count.format(v))
            .unwrap_or_else(|| placeholder.to_string())
    };

    match Comparison::from_measurements(today, yesterday) {
        Some(c) => {
            let magnitude = NumberFormat::percent(percent_precision).format(c.percentage.abs());
            let tooltip = match c.direction {
                Direction::Flat => "No change compared to yesterday".to_string(),
                dir => format!(
                    "Order {} of {} compared to yesterday",
                    dir.verb(),
                    NumberFormat::percent(2).format(c.percentage.abs())
                ),
            };
            FormattedComparison {
                today: side(today),
                yesterday: side(yesterday),
                difference: count.format(c.difference),
                percentage: magnitude,
                percentage_value: Some(c.percentage),
                direction: Some(c.direction),
                tooltip: Some(tooltip),
            }
        }
        None => FormattedComparison {
            today: side(today),
            yesterday: side(yesterday),
            difference: placeholder.to_string(),
            percentage: placeholder.to_string(),
            percentage_value: None,
            direction: None,
            tooltip: None,
        },
    }
}

/// Shorten a label to `keep` characters plus `...` once it exceeds `max`.
pub fn truncate_label(label: &str, max: usize, keep: usize) -> String {
    if label.chars().count() > max {
        let head: String = label.chars().take(keep).collect();
        format!("{head}...")
    } else {
        label.to_string()
    }
}

fn group_thousands(number: &str) -> String {
    let (sign, unsigned) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}
