// Metric row domain models

/// A single measurement cell. `Missing` covers every "no data" input
/// ("null", "NaN", "undefined", blank or absent) and is distinct from zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Measurement {
    Value(f64),
    Missing,
}

impl Measurement {
    /// Parse a textual cell such as `"99.91%"`, `"12"` or `"null"`.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        let number = trimmed.strip_suffix('%').unwrap_or(trimmed).trim();

        if is_sentinel(number) {
            return Measurement::Missing;
        }

        match number.replace(',', "").parse::<f64>() {
            Ok(value) => Measurement::from(value),
            Err(_) => Measurement::Missing,
        }
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            Measurement::Value(v) => Some(*v),
            Measurement::Missing => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Measurement::Missing)
    }
}

impl From<f64> for Measurement {
    fn from(value: f64) -> Self {
        if value.is_finite() {
            Measurement::Value(value)
        } else {
            Measurement::Missing
        }
    }
}

impl From<i64> for Measurement {
    fn from(value: i64) -> Self {
        Measurement::Value(value as f64)
    }
}

impl From<Option<f64>> for Measurement {
    fn from(value: Option<f64>) -> Self {
        value.map(Measurement::from).unwrap_or(Measurement::Missing)
    }
}

fn is_sentinel(raw: &str) -> bool {
    raw.is_empty()
        || raw.eq_ignore_ascii_case("null")
        || raw.eq_ignore_ascii_case("nan")
        || raw.eq_ignore_ascii_case("undefined")
        || raw == "-"
}

/// One record of a dataset: ordered dimension labels followed by ordered
/// measurements. Order is display order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricRow {
    dimensions: Vec<(String, String)>,
    measures: Vec<(String, Measurement)>,
}

impl MetricRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dimension(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.dimensions.push((key.into(), value.into()));
        self
    }

    pub fn with_measure(mut self, key: impl Into<String>, value: impl Into<Measurement>) -> Self {
        self.measures.push((key.into(), value.into()));
        self
    }

    pub fn dimension(&self, key: &str) -> Option<&str> {
        self.dimensions
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Absent keys read as [`Measurement::Missing`].
    pub fn measure(&self, key: &str) -> Measurement {
        self.measures
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, m)| *m)
            .unwrap_or(Measurement::Missing)
    }
}
