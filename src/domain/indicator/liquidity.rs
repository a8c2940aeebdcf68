//! Short-term solvency and market liquidity.

use crate::domain::classification::{Category, Classification};
use crate::domain::indicator::{IndicatorDefinition, InputShape};
use crate::domain::range_rule::{Bound, RangeRule};

pub static DAILY_LIQUIDITY: IndicatorDefinition = IndicatorDefinition {
    key: "daily_liquidity",
    name: "Average Daily Liquidity",
    category: Category::Liquidity,
    definition: "
        Average daily liquidity is the mean value of the company's shares traded per
        session, in millions. It measures how easily a position can be opened or closed
        without moving the price.
    ",
    formula: "Daily Liquidity = Sum of Daily Traded Value / Number of Sessions",
    inputs: InputShape::Single {
        label: "average daily traded value (millions)",
    },
    rules: &DAILY_LIQUIDITY_RULES,
};

static DAILY_LIQUIDITY_RULES: [RangeRule; 6] = [
    RangeRule {
        lower: Bound::Unbounded,
        upper: Bound::Exclusive(0.0),
        classification: Classification::Critical,
        range: "Daily Liquidity < 0",
        description: "Traded value cannot be negative; the figure is invalid.",
        risks: "Data error.",
        cross_reference: "Reload market data before using total_assets or valuation multiples.",
        recommendation: "Correct the input.",
    },
    RangeRule {
        lower: Bound::Inclusive(0.0),
        upper: Bound::Inclusive(0.0),
        classification: Classification::Null,
        range: "Daily Liquidity = 0",
        description: "The shares did not trade during the period.",
        risks: "Positions may be impossible to exit; prices may be stale.",
        cross_reference: "Valuation multiples such as price_to_earnings rely on a stale price.",
        recommendation: "Avoid until trading resumes.",
    },
    RangeRule {
        lower: Bound::Exclusive(0.0),
        upper: Bound::Exclusive(1.0),
        classification: Classification::Low,
        range: "0 < Daily Liquidity < 1",
        description: "Thinly traded shares.",
        risks: "Wide spreads and high price impact on entry and exit.",
        cross_reference: "Combine with total_assets to gauge company size.",
        recommendation: "Keep position sizes small relative to daily volume.",
    },
    RangeRule {
        lower: Bound::Inclusive(1.0),
        upper: Bound::Exclusive(10.0),
        classification: Classification::Moderate,
        range: "1 <= Daily Liquidity < 10",
        description: "Reasonable liquidity for individual investors.",
        risks: "Large orders may still move the price.",
        cross_reference: "Check price_to_book and price_to_earnings for valuation.",
        recommendation: "Spread large orders over several sessions.",
    },
    RangeRule {
        lower: Bound::Inclusive(10.0),
        upper: Bound::Exclusive(50.0),
        classification: Classification::Good,
        range: "10 <= Daily Liquidity < 50",
        description: "Good liquidity.",
        risks: "Low execution risk.",
        cross_reference: "Focus analysis on fundamentals such as roe and net_debt_to_ebitda.",
        recommendation: "Suitable for most position sizes.",
    },
    RangeRule {
        lower: Bound::Inclusive(50.0),
        upper: Bound::Unbounded,
        classification: Classification::Optimal,
        range: "Daily Liquidity >= 50",
        description: "Highly liquid shares.",
        risks: "Minimal execution risk; price may react fast to news.",
        cross_reference: "Focus on fundamentals such as roic and ev_to_ebitda.",
        recommendation: "No liquidity constraint.",
    },
];

pub static CURRENT_RATIO: IndicatorDefinition = IndicatorDefinition {
    key: "current_ratio",
    name: "Current Ratio",
    category: Category::Liquidity,
    definition: "
        The current ratio compares current assets with current liabilities. It measures the
        company's ability to pay obligations due within twelve months using resources that
        convert to cash in the same period.
    ",
    formula: "Current Ratio = Current Assets / Current Liabilities",
    inputs: InputShape::Ratio {
        numerator: "current assets",
        denominator: "current liabilities",
    },
    rules: &CURRENT_RATIO_RULES,
};

static CURRENT_RATIO_RULES: [RangeRule; 5] = [
    RangeRule {
        lower: Bound::Unbounded,
        upper: Bound::Exclusive(0.0),
        classification: Classification::Critical,
        range: "Current Ratio < 0",
        description: "A negative current ratio indicates invalid balance-sheet figures.",
        risks: "Inputs are inconsistent; liquidity cannot be assessed.",
        cross_reference: "Re-check current_assets and the liabilities reported in the filing.",
        recommendation: "Correct the inputs.",
    },
    RangeRule {
        lower: Bound::Inclusive(0.0),
        upper: Bound::Exclusive(1.0),
        classification: Classification::Low,
        range: "0 <= Current Ratio < 1",
        description: "Short-term liabilities exceed short-term assets.",
        risks: "Possible difficulty meeting obligations; dependence on new financing.",
        cross_reference: "Evaluate net_debt_to_ebitda and daily_liquidity.",
        recommendation: "Check credit lines and upcoming maturities.",
    },
    RangeRule {
        lower: Bound::Inclusive(1.0),
        upper: Bound::Inclusive(1.5),
        classification: Classification::Moderate,
        range: "1 <= Current Ratio <= 1.5",
        description: "Short-term assets cover short-term liabilities with a thin margin.",
        risks: "A slowdown in receivables or inventory could strain liquidity.",
        cross_reference: "Review asset_turnover and current_assets composition.",
        recommendation: "Acceptable; monitor working capital trends.",
    },
    RangeRule {
        lower: Bound::Exclusive(1.5),
        upper: Bound::Inclusive(2.0),
        classification: Classification::Good,
        range: "1.5 < Current Ratio <= 2",
        description: "Comfortable short-term coverage.",
        risks: "Low.",
        cross_reference: "Compare with price_to_working_capital.",
        recommendation: "Healthy liquidity.",
    },
    RangeRule {
        lower: Bound::Exclusive(2.0),
        upper: Bound::Unbounded,
        classification: Classification::Optimal,
        range: "Current Ratio > 2",
        description: "Short-term assets far exceed short-term liabilities.",
        risks: "Very high values can signal idle cash or excess inventory.",
        cross_reference: "Check roic and asset_turnover for capital efficiency.",
        recommendation: "Strong liquidity; verify the assets are productive.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_ratio_one_is_moderate() {
        assert_eq!(
            CURRENT_RATIO.evaluate_pair(100.0, 100.0).classification,
            Classification::Moderate
        );
        assert_eq!(
            CURRENT_RATIO.evaluate_pair(99.0, 100.0).classification,
            Classification::Low
        );
    }

    #[test]
    fn current_ratio_above_two() {
        assert_eq!(
            CURRENT_RATIO.evaluate_pair(200.0, 100.0).classification,
            Classification::Good
        );
        assert_eq!(
            CURRENT_RATIO.evaluate_pair(201.0, 100.0).classification,
            Classification::Optimal
        );
    }

    #[test]
    fn zero_liquidity_is_null_tier() {
        let result = DAILY_LIQUIDITY.evaluate(0);
        assert_eq!(result.classification, Classification::Null);
        assert!(!result.is_error());
    }
}
