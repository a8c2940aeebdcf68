//! Interval bands mapping a metric to a classification and its text.

use crate::domain::classification::Classification;
use std::fmt;

/// One edge of a band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    Unbounded,
    Inclusive(f64),
    Exclusive(f64),
}

impl Bound {
    pub fn value(&self) -> Option<f64> {
        match self {
            Bound::Unbounded => None,
            Bound::Inclusive(v) | Bound::Exclusive(v) => Some(*v),
        }
    }

    pub fn is_inclusive(&self) -> bool {
        matches!(self, Bound::Inclusive(_))
    }
}

/// A band of an indicator's table. Tables are ordered low to high and the
/// first band containing the metric wins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeRule {
    pub lower: Bound,
    pub upper: Bound,
    pub classification: Classification,
    /// Human label such as `"1 <= Current Ratio <= 1.5"`.
    pub range: &'static str,
    pub description: &'static str,
    pub risks: &'static str,
    pub cross_reference: &'static str,
    pub recommendation: &'static str,
}

impl RangeRule {
    pub fn contains(&self, x: f64) -> bool {
        let above_lower = match self.lower {
            Bound::Unbounded => true,
            Bound::Inclusive(lo) => x >= lo,
            Bound::Exclusive(lo) => x > lo,
        };
        let below_upper = match self.upper {
            Bound::Unbounded => true,
            Bound::Inclusive(hi) => x <= hi,
            Bound::Exclusive(hi) => x < hi,
        };
        above_lower && below_upper
    }

    /// Interval notation of the band, e.g. `[1, 1.5]` or `(-inf, 0)`.
    pub fn interval(&self) -> String {
        let open = match self.lower {
            Bound::Inclusive(_) => '[',
            _ => '(',
        };
        let close = match self.upper {
            Bound::Inclusive(_) => ']',
            _ => ')',
        };
        let lo = self
            .lower
            .value()
            .map_or_else(|| "-inf".to_string(), |v| v.to_string());
        let hi = self
            .upper
            .value()
            .map_or_else(|| "+inf".to_string(), |v| v.to_string());
        format!("{open}{lo}, {hi}{close}")
    }
}

impl fmt::Display for RangeRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.interval(), self.classification)
    }
}

/// First rule containing `x`, scanning in table order.
pub fn select_rule(rules: &[RangeRule], x: f64) -> Option<&RangeRule> {
    rules.iter().find(|r| r.contains(x))
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn band(lower: Bound, upper: Bound, classification: Classification) -> RangeRule {
        RangeRule {
            lower,
            upper,
            classification,
            range: "test",
            description: "test",
            risks: "test",
            cross_reference: "test",
            recommendation: "test",
        }
    }

    const TABLE: [RangeRule; 3] = [
        band(Bound::Unbounded, Bound::Exclusive(0.0), Classification::Critical),
        band(Bound::Inclusive(0.0), Bound::Exclusive(1.0), Classification::Low),
        band(Bound::Inclusive(1.0), Bound::Unbounded, Classification::Good),
    ];

    #[test]
    fn contains_respects_inclusivity() {
        let low = &TABLE[1];
        assert!(low.contains(0.0));
        assert!(low.contains(0.999));
        assert!(!low.contains(1.0));
        assert!(!low.contains(-0.001));
    }

    #[test]
    fn degenerate_point_band() {
        let zero = band(Bound::Inclusive(0.0), Bound::Inclusive(0.0), Classification::Null);
        assert!(zero.contains(0.0));
        assert!(!zero.contains(f64::MIN_POSITIVE));
    }

    #[test]
    fn select_rule_first_match() {
        assert_eq!(
            select_rule(&TABLE, -3.0).map(|r| r.classification),
            Some(Classification::Critical)
        );
        assert_eq!(
            select_rule(&TABLE, 1.0).map(|r| r.classification),
            Some(Classification::Good)
        );
        assert!(select_rule(&TABLE, f64::NAN).is_none());
    }

    #[test]
    fn interval_notation() {
        assert_eq!(TABLE[0].interval(), "(-inf, 0)");
        assert_eq!(TABLE[1].interval(), "[0, 1)");
        assert_eq!(TABLE[2].interval(), "[1, +inf)");
        assert_eq!(TABLE[1].to_string(), "[0, 1) Low");
    }
}
