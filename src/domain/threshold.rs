// Threshold rules - numeric value to severity tier
use super::metric::Measurement;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Good,
    Warning,
    Critical,
    /// No colour. Used for sentinels and unclassified cells.
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThresholdKind {
    LatencyMinutes,
    SuccessRate,
    PodCount,
}

impl ThresholdKind {
    pub fn legend_unit(self) -> &'static str {
        match self {
            ThresholdKind::LatencyMinutes => " min",
            ThresholdKind::SuccessRate => "%",
            ThresholdKind::PodCount => " pods",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Polarity {
    LowerIsBetter,
    HigherIsBetter,
}

/// Two breakpoints splitting the number line into good, warning and critical.
/// Each breakpoint belongs to the better tier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdRule {
    polarity: Polarity,
    good: f64,
    warning: f64,
}

impl ThresholdRule {
    /// Minutes since an event: `<= 5` good, `<= 15` warning, above critical.
    pub const fn latency_minutes() -> Self {
        Self {
            polarity: Polarity::LowerIsBetter,
            good: 5.0,
            warning: 15.0,
        }
    }

    /// Success percentage: `>= 99.5` good, `>= 97` warning, below critical.
    pub const fn success_rate() -> Self {
        Self {
            polarity: Polarity::HigherIsBetter,
            good: 99.5,
            warning: 97.0,
        }
    }

    pub const fn pod_count() -> Self {
        Self {
            polarity: Polarity::HigherIsBetter,
            good: 70.0,
            warning: 50.0,
        }
    }

    pub fn for_kind(kind: ThresholdKind) -> Self {
        match kind {
            ThresholdKind::LatencyMinutes => Self::latency_minutes(),
            ThresholdKind::SuccessRate => Self::success_rate(),
            ThresholdKind::PodCount => Self::pod_count(),
        }
    }

    pub fn classify(&self, value: f64) -> Severity {
        if !value.is_finite() {
            return Severity::Neutral;
        }
        match self.polarity {
            Polarity::LowerIsBetter if value <= self.good => Severity::Good,
            Polarity::LowerIsBetter if value <= self.warning => Severity::Warning,
            Polarity::LowerIsBetter => Severity::Critical,
            Polarity::HigherIsBetter if value >= self.good => Severity::Good,
            Polarity::HigherIsBetter if value >= self.warning => Severity::Warning,
            Polarity::HigherIsBetter => Severity::Critical,
        }
    }

    pub fn classify_measurement(&self, measurement: Measurement) -> Severity {
        match measurement {
            Measurement::Value(v) => self.classify(v),
            Measurement::Missing => Severity::Neutral,
        }
    }

    /// Legend entries in good, warning, critical order.
    pub fn legend(&self, unit: &str) -> Vec<(Severity, String)> {
        let good = trim_number(self.good);
        let warning = trim_number(self.warning);
        match self.polarity {
            Polarity::LowerIsBetter => vec![
                (Severity::Good, format!("<= {good}{unit}")),
                (Severity::Warning, format!("{good}-{warning}{unit}")),
                (Severity::Critical, format!("> {warning}{unit}")),
            ],
            Polarity::HigherIsBetter => vec![
                (Severity::Good, format!(">= {good}{unit}")),
                (Severity::Warning, format!("{warning}{unit} - {good}{unit}")),
                (Severity::Critical, format!("< {warning}{unit}")),
            ],
        }
    }
}

fn trim_number(value: f64) -> String {
    format!("{}", value + 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latency_boundaries() {
        let rule = ThresholdRule::latency_minutes();
        assert_eq!(rule.classify(0.0), Severity::Good);
        assert_eq!(rule.classify(5.0), Severity::Good);
        assert_eq!(rule.classify(5.0001), Severity::Warning);
        assert_eq!(rule.classify(15.0), Severity::Warning);
        assert_eq!(rule.classify(15.0001), Severity::Critical);
        assert_eq!(rule.classify(43.0), Severity::Critical);
    }

    #[test]
    fn test_success_rate_boundaries() {
        let rule = ThresholdRule::success_rate();
        assert_eq!(rule.classify(100.0), Severity::Good);
        assert_eq!(rule.classify(99.5), Severity::Good);
        assert_eq!(rule.classify(99.46), Severity::Warning);
        assert_eq!(rule.classify(97.0), Severity::Warning);
        assert_eq!(rule.classify(96.999), Severity::Critical);
    }

    #[test]
    fn test_pod_count_boundaries() {
        let rule = ThresholdRule::pod_count();
        assert_eq!(rule.classify(70.0), Severity::Good);
        assert_eq!(rule.classify(60.0), Severity::Warning);
        assert_eq!(rule.classify(49.0), Severity::Critical);
    }

    #[test]
    fn test_missing_is_neutral() {
        for kind in [
            ThresholdKind::LatencyMinutes,
            ThresholdKind::SuccessRate,
            ThresholdKind::PodCount,
        ] {
            let rule = ThresholdRule::for_kind(kind);
            assert_eq!(rule.classify_measurement(Measurement::Missing), Severity::Neutral);
            assert_eq!(rule.classify(f64::NAN), Severity::Neutral);
        }
    }

    #[test]
    fn test_legend_labels() {
        let legend = ThresholdRule::latency_minutes().legend(" min");
        assert_eq!(legend[0], (Severity::Good, "<= 5 min".to_string()));
        assert_eq!(legend[1], (Severity::Warning, "5-15 min".to_string()));
        assert_eq!(legend[2], (Severity::Critical, "> 15 min".to_string()));

        let legend = ThresholdRule::success_rate().legend("%");
        assert_eq!(legend[1], (Severity::Warning, "97% - 99.5%".to_string()));
        assert_eq!(trim_number(1e19), "10000000000000000000");
    }
}
