// Today-vs-yesterday comparison
use super::metric::Measurement;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Increase,
    Decrease,
    Flat,
}

impl Direction {
    fn of(difference: f64) -> Self {
        if difference > 0.0 {
            Direction::Increase
        } else if difference < 0.0 {
            Direction::Decrease
        } else {
            Direction::Flat
        }
    }

    pub fn verb(self) -> &'static str {
        match self {
            Direction::Increase => "increase",
            Direction::Decrease => "decrease",
            Direction::Flat => "no change",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Comparison {
    pub today: f64,
    pub yesterday: f64,
    pub difference: f64,
    /// Relative change in percent; 0 when yesterday is 0.
    pub percentage: f64,
    pub direction: Direction,
}

impl Comparison {
    pub fn compute(today: f64, yesterday: f64) -> Self {
        let difference = today - yesterday + 0.0;
        let percentage = if yesterday != 0.0 {
            difference / yesterday * 100.0 + 0.0
        } else {
            0.0
        };

        Self {
            today,
            yesterday,
            difference,
            percentage,
            direction: Direction::of(difference),
        }
    }

    /// `None` when either side is missing.
    pub fn from_measurements(today: Measurement, yesterday: Measurement) -> Option<Self> {
        Some(Self::compute(today.value()?, yesterday.value()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decrease() {
        let c = Comparison::compute(100.0, 200.0);
        assert_eq!(c.difference, -100.0);
        assert_eq!(c.percentage, -50.0);
        assert_eq!(c.direction, Direction::Decrease);
    }

    #[test]
    fn test_increase_and_flat() {
        let c = Comparison::compute(150.0, 100.0);
        assert_eq!(c.percentage, 50.0);
        assert_eq!(c.direction, Direction::Increase);

        let c = Comparison::compute(50.0, 50.0);
        assert_eq!(c.difference, 0.0);
        assert_eq!(c.percentage, 0.0);
        assert_eq!(c.direction, Direction::Flat);
    }

    #[test]
    fn test_zero_yesterday_yields_zero_percentage() {
        for today in [0.0, 1.0, 5165.0, -3.0] {
            let c = Comparison::compute(today, 0.0);
            assert_eq!(c.percentage, 0.0);
            assert!(c.percentage.is_finite());
        }
        assert_eq!(Comparison::compute(10.0, 0.0).direction, Direction::Increase);
    }

    #[test]
    fn test_sample_row_matches_source_figures() {
        let c = Comparison::compute(5165.0, 24050.0);
        assert_eq!(c.difference, -18885.0);
        assert_eq!(format!("{:.2}", c.percentage), "-78.52");
    }

    #[test]
    fn test_unchanged_negative_values_have_unsigned_zero() {
        let c = Comparison::compute(-5.0, -5.0);
        assert!(c.difference.is_sign_positive());
        assert!(c.percentage.is_sign_positive());
        assert_eq!(format!("{:.2}", c.percentage), "0.00");
        assert_eq!(c.direction, Direction::Flat);
    }

    #[test]
    fn test_missing_side_has_no_comparison() {
        assert!(Comparison::from_measurements(Measurement::Missing, Measurement::Value(1.0)).is_none());
        assert!(Comparison::from_measurements(Measurement::Value(1.0), Measurement::Missing).is_none());
        assert!(Comparison::from_measurements(Measurement::Value(1.0), Measurement::Value(2.0)).is_some());
    }
}
