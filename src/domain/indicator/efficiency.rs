//! Asset efficiency.

use crate::domain::classification::{Category, Classification};
use crate::domain::indicator::{IndicatorDefinition, InputShape};
use crate::domain::range_rule::{Bound, RangeRule};

pub static ASSET_TURNOVER: IndicatorDefinition = IndicatorDefinition {
    key: "asset_turnover",
    name: "Asset Turnover",
    category: Category::Efficiency,
    definition: "
        Asset turnover measures how much revenue each unit of assets generates. Higher
        values mean the asset base is used more intensively; capital-heavy sectors
        naturally run lower turnover than retail or services.
    ",
    formula: "Asset Turnover = Net Revenue / Total Assets",
    inputs: InputShape::Ratio {
        numerator: "net revenue",
        denominator: "total assets",
    },
    rules: &ASSET_TURNOVER_RULES,
};

static ASSET_TURNOVER_RULES: [RangeRule; 5] = [
    RangeRule {
        lower: Bound::Unbounded,
        upper: Bound::Exclusive(0.0),
        classification: Classification::Critical,
        range: "Asset Turnover < 0",
        description: "Negative turnover implies negative revenue or assets, which is invalid.",
        risks: "Inputs are inconsistent.",
        cross_reference: "Re-check total_assets and the revenue figure.",
        recommendation: "Correct the inputs.",
    },
    RangeRule {
        lower: Bound::Inclusive(0.0),
        upper: Bound::Exclusive(0.3),
        classification: Classification::Low,
        range: "0 <= Asset Turnover < 0.3",
        description: "Assets generate little revenue.",
        risks: "Capital-intensive model or underused assets; returns depend on high margins.",
        cross_reference: "Compare with net_margin and roa.",
        recommendation: "Acceptable only for utilities, real estate or infrastructure with stable margins.",
    },
    RangeRule {
        lower: Bound::Inclusive(0.3),
        upper: Bound::Exclusive(0.7),
        classification: Classification::Moderate,
        range: "0.3 <= Asset Turnover < 0.7",
        description: "Average use of the asset base.",
        risks: "Margin pressure would weigh on returns.",
        cross_reference: "Review ebit_margin and roic.",
        recommendation: "Compare with sector peers.",
    },
    RangeRule {
        lower: Bound::Inclusive(0.7),
        upper: Bound::Exclusive(1.2),
        classification: Classification::Good,
        range: "0.7 <= Asset Turnover < 1.2",
        description: "Efficient use of assets.",
        risks: "Low.",
        cross_reference: "Combine with net_margin to decompose roe.",
        recommendation: "Healthy efficiency.",
    },
    RangeRule {
        lower: Bound::Inclusive(1.2),
        upper: Bound::Unbounded,
        classification: Classification::Optimal,
        range: "Asset Turnover >= 1.2",
        description: "Very intensive use of assets.",
        risks: "Thin-margin business models rely on volume; check gross_margin.",
        cross_reference: "Check gross_margin and net_margin.",
        recommendation: "Strong efficiency; verify margins are sustainable.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn revenue_over_assets() {
        let result = ASSET_TURNOVER.evaluate_pair(120.0, 100.0);
        assert_eq!(result.metric, Some(1.2));
        assert_eq!(result.classification, Classification::Optimal);
    }

    #[test]
    fn zero_assets_rejected() {
        let result = ASSET_TURNOVER.evaluate_pair(120.0, 0.0);
        assert!(result.is_error());
        assert!(result.description.contains("total assets must not be zero"));
    }
}
