//! Debt levels and capital structure.

use crate::domain::classification::{Category, Classification};
use crate::domain::indicator::{IndicatorDefinition, InputShape};
use crate::domain::range_rule::{Bound, RangeRule};

pub static GROSS_DEBT: IndicatorDefinition = IndicatorDefinition {
    key: "gross_debt",
    name: "Gross Debt",
    category: Category::Leverage,
    definition: "
        Gross debt is the total of all interest-bearing obligations, short and long term,
        before subtracting cash. It shows the absolute amount the company must refinance
        or repay regardless of its cash position.
    ",
    formula: "Gross Debt = Short-term Borrowings + Long-term Borrowings",
    inputs: InputShape::Single {
        label: "gross debt (millions)",
    },
    rules: &GROSS_DEBT_RULES,
};

static GROSS_DEBT_RULES: [RangeRule; 6] = [
    RangeRule {
        lower: Bound::Unbounded,
        upper: Bound::Exclusive(0.0),
        classification: Classification::Critical,
        range: "Gross Debt < 0",
        description: "Gross debt cannot be negative; the figure is invalid.",
        risks: "Likely a sign error or net debt reported in place of gross debt.",
        cross_reference: "Compare with net_debt, which can legitimately be negative.",
        recommendation: "Correct the input before relying on any leverage reading.",
    },
    RangeRule {
        lower: Bound::Inclusive(0.0),
        upper: Bound::Inclusive(0.0),
        classification: Classification::Optimal,
        range: "Gross Debt = 0",
        description: "The company carries no interest-bearing debt.",
        risks: "A debt-free structure can mean under-use of cheap financing.",
        cross_reference: "Check roe and roic to see whether returns suffer from an all-equity structure.",
        recommendation: "Confirm there are no off-balance-sheet leases or guarantees.",
    },
    RangeRule {
        lower: Bound::Exclusive(0.0),
        upper: Bound::Exclusive(100.0),
        classification: Classification::Good,
        range: "0 < Gross Debt < 100",
        description: "A small absolute debt load.",
        risks: "Even small debt matters if cash generation is weak.",
        cross_reference: "Relate it to earnings with net_debt_to_ebitda.",
        recommendation: "Review the maturity schedule for near-term refinancing.",
    },
    RangeRule {
        lower: Bound::Inclusive(100.0),
        upper: Bound::Exclusive(1000.0),
        classification: Classification::Moderate,
        range: "100 <= Gross Debt < 1000",
        description: "A meaningful debt load that needs to be weighed against earnings.",
        risks: "Rising interest rates raise financing costs.",
        cross_reference: "Use net_debt_to_ebitda and net_debt_to_equity for relative leverage.",
        recommendation: "Check the share of floating-rate debt and covenant headroom.",
    },
    RangeRule {
        lower: Bound::Inclusive(1000.0),
        upper: Bound::Exclusive(10000.0),
        classification: Classification::Poor,
        range: "1000 <= Gross Debt < 10000",
        description: "A large debt load.",
        risks: "Refinancing risk in tight credit markets; interest can absorb a large share of operating profit.",
        cross_reference: "Compare with net_debt_to_ebit and ebit_margin for coverage.",
        recommendation: "Only accept if cash generation clearly covers interest and amortisation.",
    },
    RangeRule {
        lower: Bound::Inclusive(10000.0),
        upper: Bound::Unbounded,
        classification: Classification::VeryPoor,
        range: "Gross Debt >= 10000",
        description: "A very large absolute debt load.",
        risks: "High exposure to credit cycles and rating downgrades.",
        cross_reference: "Evaluate net_debt_to_ebitda and equity_to_assets before anything else.",
        recommendation: "Demand evidence of a deleveraging plan.",
    },
];

pub static NET_DEBT: IndicatorDefinition = IndicatorDefinition {
    key: "net_debt",
    name: "Net Debt",
    category: Category::Leverage,
    definition: "
        Net debt is gross debt minus cash and equivalents. A negative value means the
        company holds more cash than debt (a net cash position).
    ",
    formula: "Net Debt = Gross Debt - Cash and Equivalents",
    inputs: InputShape::Single {
        label: "net debt (millions)",
    },
    rules: &NET_DEBT_RULES,
};

static NET_DEBT_RULES: [RangeRule; 5] = [
    RangeRule {
        lower: Bound::Unbounded,
        upper: Bound::Exclusive(0.0),
        classification: Classification::Optimal,
        range: "Net Debt < 0",
        description: "Net cash position: cash exceeds total debt.",
        risks: "Excess cash can be left idle or spent on value-destroying acquisitions.",
        cross_reference: "Check roic and dividend_yield to see how the cash is deployed.",
        recommendation: "Favourable for solvency; review the capital allocation policy.",
    },
    RangeRule {
        lower: Bound::Inclusive(0.0),
        upper: Bound::Exclusive(100.0),
        classification: Classification::Good,
        range: "0 <= Net Debt < 100",
        description: "Small net debt.",
        risks: "Limited, but cash can fall quickly in a downturn.",
        cross_reference: "Relate it to earnings with net_debt_to_ebitda.",
        recommendation: "Keep monitoring cash burn.",
    },
    RangeRule {
        lower: Bound::Inclusive(100.0),
        upper: Bound::Exclusive(1000.0),
        classification: Classification::Moderate,
        range: "100 <= Net Debt < 1000",
        description: "Moderate net debt.",
        risks: "Higher interest expense if rates rise.",
        cross_reference: "Review net_debt_to_equity and net_debt_to_ebit.",
        recommendation: "Compare with the sector's typical leverage.",
    },
    RangeRule {
        lower: Bound::Inclusive(1000.0),
        upper: Bound::Exclusive(10000.0),
        classification: Classification::Poor,
        range: "1000 <= Net Debt < 10000",
        description: "High net debt.",
        risks: "Reduced flexibility for investment and dividends.",
        cross_reference: "Evaluate net_debt_to_ebitda and current_ratio.",
        recommendation: "Check the maturity profile and the cost of debt.",
    },
    RangeRule {
        lower: Bound::Inclusive(10000.0),
        upper: Bound::Unbounded,
        classification: Classification::VeryPoor,
        range: "Net Debt >= 10000",
        description: "Very high net debt.",
        risks: "Vulnerable to credit tightening and covenant breaches.",
        cross_reference: "Evaluate net_debt_to_ebitda, equity_to_assets and ebitda_margin together.",
        recommendation: "Treat as highly leveraged unless earnings are exceptionally stable.",
    },
];

pub static EQUITY_TO_ASSETS: IndicatorDefinition = IndicatorDefinition {
    key: "equity_to_assets",
    name: "Equity/Assets",
    category: Category::Leverage,
    definition: "
        Equity to assets is the share of total assets financed by shareholders rather than
        creditors. Higher values mean a more conservative capital structure.
    ",
    formula: "Equity/Assets = Shareholders' Equity / Total Assets",
    inputs: InputShape::Ratio {
        numerator: "equity",
        denominator: "total assets",
    },
    rules: &EQUITY_TO_ASSETS_RULES,
};

static EQUITY_TO_ASSETS_RULES: [RangeRule; 6] = [
    RangeRule {
        lower: Bound::Unbounded,
        upper: Bound::Exclusive(0.0),
        classification: Classification::Critical,
        range: "Equity/Assets < 0",
        description: "Negative equity: liabilities exceed assets.",
        risks: "Insolvency on a book basis; restructuring is likely.",
        cross_reference: "Check equity, net_debt_to_ebitda and net_margin.",
        recommendation: "Treat as distressed.",
    },
    RangeRule {
        lower: Bound::Inclusive(0.0),
        upper: Bound::Exclusive(0.2),
        classification: Classification::Low,
        range: "0 <= Equity/Assets < 0.2",
        description: "Creditors finance more than 80% of the assets.",
        risks: "High leverage amplifies losses; normal only for banks and insurers.",
        cross_reference: "Review net_debt_to_equity and current_ratio.",
        recommendation: "Accept only in regulated financial sectors or with strong cash flows.",
    },
    RangeRule {
        lower: Bound::Inclusive(0.2),
        upper: Bound::Exclusive(0.4),
        classification: Classification::Moderate,
        range: "0.2 <= Equity/Assets < 0.4",
        description: "Leveraged but common capital structure.",
        risks: "Sensitive to asset write-downs.",
        cross_reference: "Compare with roa and roe to see the leverage effect on returns.",
        recommendation: "Monitor the trend across several periods.",
    },
    RangeRule {
        lower: Bound::Inclusive(0.4),
        upper: Bound::Inclusive(0.6),
        classification: Classification::Good,
        range: "0.4 <= Equity/Assets <= 0.6",
        description: "Balanced capital structure.",
        risks: "Low, barring large off-balance-sheet obligations.",
        cross_reference: "Check net_debt_to_ebitda for debt quality.",
        recommendation: "Healthy structure; focus on return metrics.",
    },
    RangeRule {
        lower: Bound::Exclusive(0.6),
        upper: Bound::Inclusive(1.0),
        classification: Classification::Optimal,
        range: "0.6 < Equity/Assets <= 1",
        description: "Shareholders finance most of the assets.",
        risks: "Very conservative structure may reduce roe.",
        cross_reference: "Compare with roe and roic.",
        recommendation: "Strong solvency; verify capital is being used productively.",
    },
    RangeRule {
        lower: Bound::Exclusive(1.0),
        upper: Bound::Unbounded,
        classification: Classification::OutOfRange,
        range: "Equity/Assets > 1",
        description: "Equity cannot exceed total assets on a consistent balance sheet.",
        risks: "Inputs are inconsistent or refer to different dates.",
        cross_reference: "Re-check equity and total_assets.",
        recommendation: "Correct the inputs.",
    },
];

pub static NET_DEBT_TO_EQUITY: IndicatorDefinition = IndicatorDefinition {
    key: "net_debt_to_equity",
    name: "Net Debt/Equity",
    category: Category::Leverage,
    definition: "
        Net debt to equity compares net borrowings with the shareholders' stake. It measures
        how much of the business is financed by creditors relative to owners.
    ",
    formula: "Net Debt/Equity = Net Debt / Shareholders' Equity",
    inputs: InputShape::Ratio {
        numerator: "net debt",
        denominator: "equity",
    },
    rules: &NET_DEBT_TO_EQUITY_RULES,
};

static NET_DEBT_TO_EQUITY_RULES: [RangeRule; 5] = [
    RangeRule {
        lower: Bound::Unbounded,
        upper: Bound::Exclusive(0.0),
        classification: Classification::Optimal,
        range: "Net Debt/Equity < 0",
        description: "Net cash position relative to equity.",
        risks: "Idle cash can weigh on returns on equity.",
        cross_reference: "Check equity and net_debt separately.",
        recommendation: "Favourable; check how the cash is deployed.",
    },
    RangeRule {
        lower: Bound::Inclusive(0.0),
        upper: Bound::Inclusive(0.3),
        classification: Classification::Good,
        range: "0 <= Net Debt/Equity <= 0.3",
        description: "Low leverage.",
        risks: "Limited financial risk.",
        cross_reference: "Compare with net_debt_to_ebitda.",
        recommendation: "Comfortable leverage level.",
    },
    RangeRule {
        lower: Bound::Exclusive(0.3),
        upper: Bound::Inclusive(0.7),
        classification: Classification::Moderate,
        range: "0.3 < Net Debt/Equity <= 0.7",
        description: "Moderate leverage.",
        risks: "Interest costs start to weigh on earnings.",
        cross_reference: "Review net_debt_to_ebit and ebit_margin.",
        recommendation: "Acceptable for stable businesses.",
    },
    RangeRule {
        lower: Bound::Exclusive(0.7),
        upper: Bound::Inclusive(1.5),
        classification: Classification::Poor,
        range: "0.7 < Net Debt/Equity <= 1.5",
        description: "High leverage.",
        risks: "Earnings volatility is amplified for shareholders.",
        cross_reference: "Check current_ratio and net_debt_to_ebitda.",
        recommendation: "Require a margin of safety in valuation.",
    },
    RangeRule {
        lower: Bound::Exclusive(1.5),
        upper: Bound::Unbounded,
        classification: Classification::Critical,
        range: "Net Debt/Equity > 1.5",
        description: "Net debt well above equity.",
        risks: "Elevated default and dilution risk.",
        cross_reference: "Evaluate equity_to_assets and net_margin.",
        recommendation: "Avoid unless a credible deleveraging plan exists.",
    },
];

pub static NET_DEBT_TO_EBIT: IndicatorDefinition = IndicatorDefinition {
    key: "net_debt_to_ebit",
    name: "Net Debt/EBIT",
    category: Category::Leverage,
    definition: "
        Net debt to EBIT estimates how many years of operating profit would be needed to
        repay net debt. It is stricter than the EBITDA version because it deducts
        depreciation and amortisation.
    ",
    formula: "Net Debt/EBIT = Net Debt / EBIT",
    inputs: InputShape::Ratio {
        numerator: "net debt",
        denominator: "EBIT",
    },
    rules: &NET_DEBT_TO_EBIT_RULES,
};

static NET_DEBT_TO_EBIT_RULES: [RangeRule; 5] = [
    RangeRule {
        lower: Bound::Unbounded,
        upper: Bound::Exclusive(0.0),
        classification: Classification::Optimal,
        range: "Net Debt/EBIT < 0",
        description: "Net cash position.",
        risks: "Idle cash can weigh on returns.",
        cross_reference: "Check ebit_margin and net_debt.",
        recommendation: "Favourable; check how the cash is deployed.",
    },
    RangeRule {
        lower: Bound::Inclusive(0.0),
        upper: Bound::Inclusive(1.5),
        classification: Classification::Good,
        range: "0 <= Net Debt/EBIT <= 1.5",
        description: "Debt could be repaid with less than two years of operating profit.",
        risks: "Low.",
        cross_reference: "Compare with net_debt_to_ebitda.",
        recommendation: "Comfortable leverage.",
    },
    RangeRule {
        lower: Bound::Exclusive(1.5),
        upper: Bound::Inclusive(3.0),
        classification: Classification::Moderate,
        range: "1.5 < Net Debt/EBIT <= 3",
        description: "Moderate leverage relative to operating profit.",
        risks: "Margin compression would quickly lengthen the payback.",
        cross_reference: "Review ebit_margin trend.",
        recommendation: "Monitor earnings stability.",
    },
    RangeRule {
        lower: Bound::Exclusive(3.0),
        upper: Bound::Inclusive(4.5),
        classification: Classification::Poor,
        range: "3 < Net Debt/EBIT <= 4.5",
        description: "High leverage relative to operating profit.",
        risks: "Refinancing dependency.",
        cross_reference: "Check current_ratio and gross_debt.",
        recommendation: "Demand a discount in valuation.",
    },
    RangeRule {
        lower: Bound::Exclusive(4.5),
        upper: Bound::Unbounded,
        classification: Classification::Critical,
        range: "Net Debt/EBIT > 4.5",
        description: "Debt far exceeds operating profit capacity.",
        risks: "High default risk.",
        cross_reference: "Evaluate equity_to_assets and net_debt_to_equity.",
        recommendation: "Avoid unless restructuring is underway.",
    },
];

pub static NET_DEBT_TO_EBITDA: IndicatorDefinition = IndicatorDefinition {
    key: "net_debt_to_ebitda",
    name: "Net Debt/EBITDA",
    category: Category::Leverage,
    definition: "
        Net debt to EBITDA is the most common leverage covenant: the number of years of
        operating cash earnings needed to repay net debt.
    ",
    formula: "Net Debt/EBITDA = Net Debt / EBITDA",
    inputs: InputShape::Ratio {
        numerator: "net debt",
        denominator: "EBITDA",
    },
    rules: &NET_DEBT_TO_EBITDA_RULES,
};

static NET_DEBT_TO_EBITDA_RULES: [RangeRule; 5] = [
    RangeRule {
        lower: Bound::Unbounded,
        upper: Bound::Exclusive(0.0),
        classification: Classification::Optimal,
        range: "Net Debt/EBITDA < 0",
        description: "Net cash position.",
        risks: "Idle cash can weigh on returns.",
        cross_reference: "Check ebitda_margin and net_debt.",
        recommendation: "Favourable; check how the cash is deployed.",
    },
    RangeRule {
        lower: Bound::Inclusive(0.0),
        upper: Bound::Inclusive(1.0),
        classification: Classification::Good,
        range: "0 <= Net Debt/EBITDA <= 1",
        description: "Low leverage.",
        risks: "Low.",
        cross_reference: "Compare with net_debt_to_equity.",
        recommendation: "Comfortable leverage.",
    },
    RangeRule {
        lower: Bound::Exclusive(1.0),
        upper: Bound::Inclusive(2.5),
        classification: Classification::Moderate,
        range: "1 < Net Debt/EBITDA <= 2.5",
        description: "Moderate leverage, common for mature companies.",
        risks: "Sensitive to EBITDA declines.",
        cross_reference: "Review ebitda_margin and ev_to_ebitda.",
        recommendation: "Acceptable; watch covenant thresholds.",
    },
    RangeRule {
        lower: Bound::Exclusive(2.5),
        upper: Bound::Inclusive(3.5),
        classification: Classification::Poor,
        range: "2.5 < Net Debt/EBITDA <= 3.5",
        description: "High leverage near typical covenant limits.",
        risks: "Covenant breach risk if earnings fall.",
        cross_reference: "Check net_debt_to_ebit and current_ratio.",
        recommendation: "Require a clear deleveraging path.",
    },
    RangeRule {
        lower: Bound::Exclusive(3.5),
        upper: Bound::Unbounded,
        classification: Classification::Critical,
        range: "Net Debt/EBITDA > 3.5",
        description: "Leverage beyond usual covenant limits.",
        risks: "Elevated default and dilution risk.",
        cross_reference: "Evaluate equity_to_assets and gross_debt.",
        recommendation: "Avoid unless restructuring is underway.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_net_debt_is_favourable() {
        assert_eq!(NET_DEBT.evaluate(-120.0).classification, Classification::Optimal);
        assert_eq!(NET_DEBT.evaluate(0.0).classification, Classification::Good);
    }

    #[test]
    fn zero_gross_debt_is_point_band() {
        assert_eq!(GROSS_DEBT.evaluate(0.0).classification, Classification::Optimal);
        assert_eq!(GROSS_DEBT.evaluate(0.5).classification, Classification::Good);
        assert_eq!(GROSS_DEBT.evaluate(-0.5).classification, Classification::Critical);
    }

    #[test]
    fn equity_to_assets_is_ratio() {
        let result = EQUITY_TO_ASSETS.evaluate_pair(500.0, 1000.0);
        assert_eq!(result.classification, Classification::Good);
        assert_eq!(result.metric, Some(0.5));
        assert_eq!(
            EQUITY_TO_ASSETS.evaluate_pair(1200.0, 1000.0).classification,
            Classification::OutOfRange
        );
    }

    #[test]
    fn net_debt_to_ebitda_boundaries() {
        assert_eq!(
            NET_DEBT_TO_EBITDA.evaluate_pair(100.0, 100.0).classification,
            Classification::Good
        );
        assert_eq!(
            NET_DEBT_TO_EBITDA.evaluate_pair(350.0, 100.0).classification,
            Classification::Poor
        );
        assert_eq!(
            NET_DEBT_TO_EBITDA.evaluate_pair(351.0, 100.0).classification,
            Classification::Critical
        );
    }

    #[test]
    fn zero_ebit_is_rejected() {
        let result = NET_DEBT_TO_EBIT.evaluate_pair(100.0, 0.0);
        assert!(result.is_error());
        assert!(result.description.contains("EBIT must not be zero"));
    }
}
