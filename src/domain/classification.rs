//! Qualitative tiers and indicator groupings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Tier assigned to an indicator value, worst to best, plus the two
/// out-of-scale labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    #[serde(rename = "Critical")]
    Critical,
    #[serde(rename = "Very Poor")]
    VeryPoor,
    #[serde(rename = "Poor")]
    Poor,
    #[serde(rename = "Low")]
    Low,
    #[serde(rename = "Moderate")]
    Moderate,
    #[serde(rename = "Good")]
    Good,
    #[serde(rename = "Optimal")]
    Optimal,
    /// Value outside the range where the indicator is meaningful.
    #[serde(rename = "Out of Range")]
    OutOfRange,
    /// A meaningful zero, e.g. a company that pays no dividends.
    #[serde(rename = "None")]
    Null,
    /// Input failed validation.
    #[serde(rename = "Error")]
    Error,
}

impl Classification {
    pub const ALL: [Classification; 10] = [
        Classification::Critical,
        Classification::VeryPoor,
        Classification::Poor,
        Classification::Low,
        Classification::Moderate,
        Classification::Good,
        Classification::Optimal,
        Classification::OutOfRange,
        Classification::Null,
        Classification::Error,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Classification::Critical => "Critical",
            Classification::VeryPoor => "Very Poor",
            Classification::Poor => "Poor",
            Classification::Low => "Low",
            Classification::Moderate => "Moderate",
            Classification::Good => "Good",
            Classification::Optimal => "Optimal",
            Classification::OutOfRange => "Out of Range",
            Classification::Null => "None",
            Classification::Error => "Error",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Classification::Error)
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Classification {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Classification::ALL
            .iter()
            .copied()
            .find(|c| c.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("unknown classification: {wanted}"))
    }
}

/// Grouping label shown next to every result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Liquidity,
    Leverage,
    Profitability,
    Valuation,
    Efficiency,
    #[serde(rename = "Balance Sheet")]
    BalanceSheet,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Liquidity,
        Category::Leverage,
        Category::Profitability,
        Category::Valuation,
        Category::Efficiency,
        Category::BalanceSheet,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Liquidity => "Liquidity",
            Category::Leverage => "Leverage",
            Category::Profitability => "Profitability",
            Category::Valuation => "Valuation",
            Category::Efficiency => "Efficiency",
            Category::BalanceSheet => "Balance Sheet",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace(['_', '-'], " ");
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.label().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| format!("unknown category: {}", s.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_labels_round_trip() {
        for c in Classification::ALL {
            assert_eq!(c.label().parse::<Classification>().unwrap(), c);
        }
    }

    #[test]
    fn null_tier_displays_as_none() {
        assert_eq!(Classification::Null.to_string(), "None");
        assert_eq!(
            serde_json::to_string(&Classification::Null).unwrap(),
            "\"None\""
        );
    }

    #[test]
    fn only_error_is_error() {
        let errors: Vec<_> = Classification::ALL
            .iter()
            .filter(|c| c.is_error())
            .collect();
        assert_eq!(errors, vec![&Classification::Error]);
    }

    #[test]
    fn category_parses_loosely() {
        assert_eq!(
            "balance_sheet".parse::<Category>().unwrap(),
            Category::BalanceSheet
        );
        assert_eq!("VALUATION".parse::<Category>().unwrap(), Category::Valuation);
        assert!("growth".parse::<Category>().is_err());
    }

    #[test]
    fn category_serializes_with_spaces() {
        assert_eq!(
            serde_json::to_string(&Category::BalanceSheet).unwrap(),
            "\"Balance Sheet\""
        );
    }
}
