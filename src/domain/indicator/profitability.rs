//! Returns, margins and earnings per share. Returns and margins are given
//! in percent (30 means 30%).

use crate::domain::classification::{Category, Classification};
use crate::domain::indicator::{IndicatorDefinition, InputShape};
use crate::domain::range_rule::{Bound, RangeRule};

pub static ROIC: IndicatorDefinition = IndicatorDefinition {
    key: "roic",
    name: "ROIC",
    category: Category::Profitability,
    definition: "
        Return on invested capital measures the after-tax operating profit generated on
        the capital provided by both shareholders and lenders. Value is created when ROIC
        exceeds the cost of capital.
    ",
    formula: "ROIC = NOPAT / (Equity + Net Debt) x 100",
    inputs: InputShape::Single {
        label: "ROIC (%)",
    },
    rules: &ROIC_RULES,
};

static ROIC_RULES: [RangeRule; 5] = [
    RangeRule {
        lower: Bound::Unbounded,
        upper: Bound::Exclusive(0.0),
        classification: Classification::Critical,
        range: "ROIC < 0%",
        description: "Operations destroy invested capital.",
        risks: "Persistent losses erode equity and increase reliance on debt.",
        cross_reference: "Check ebit_margin and net_debt_to_equity.",
        recommendation: "Avoid unless a turnaround is clearly underway.",
    },
    RangeRule {
        lower: Bound::Inclusive(0.0),
        upper: Bound::Exclusive(5.0),
        classification: Classification::Low,
        range: "0% <= ROIC < 5%",
        description: "Returns below a typical cost of capital.",
        risks: "Growth may destroy value.",
        cross_reference: "Compare with asset_turnover and ebit_margin.",
        recommendation: "Look for catalysts that raise margins or turnover.",
    },
    RangeRule {
        lower: Bound::Inclusive(5.0),
        upper: Bound::Exclusive(10.0),
        classification: Classification::Moderate,
        range: "5% <= ROIC < 10%",
        description: "Returns near the cost of capital.",
        risks: "Little value creation.",
        cross_reference: "Review roe and roa.",
        recommendation: "Acceptable for stable, low-risk businesses.",
    },
    RangeRule {
        lower: Bound::Inclusive(10.0),
        upper: Bound::Inclusive(15.0),
        classification: Classification::Good,
        range: "10% <= ROIC <= 15%",
        description: "Returns above the cost of capital.",
        risks: "Competition can compress returns over time.",
        cross_reference: "Compare with ev_to_ebit for the price paid.",
        recommendation: "Value-creating business.",
    },
    RangeRule {
        lower: Bound::Exclusive(15.0),
        upper: Bound::Unbounded,
        classification: Classification::Optimal,
        range: "ROIC > 15%",
        description: "High returns on capital, a sign of competitive advantage.",
        risks: "The market often prices this in; valuation can be stretched.",
        cross_reference: "Check ev_to_ebit and price_to_earnings.",
        recommendation: "High-quality business; verify the valuation.",
    },
];

pub static ROA: IndicatorDefinition = IndicatorDefinition {
    key: "roa",
    name: "ROA",
    category: Category::Profitability,
    definition: "
        Return on assets measures net income generated per unit of total assets. It shows
        how profitably management uses the whole asset base, independent of financing.
    ",
    formula: "ROA = Net Income / Total Assets x 100",
    inputs: InputShape::Single { label: "ROA (%)" },
    rules: &ROA_RULES,
};

static ROA_RULES: [RangeRule; 5] = [
    RangeRule {
        lower: Bound::Unbounded,
        upper: Bound::Exclusive(0.0),
        classification: Classification::Critical,
        range: "ROA < 0%",
        description: "The company is losing money on its asset base.",
        risks: "Asset impairments and capital consumption.",
        cross_reference: "Check net_margin and asset_turnover.",
        recommendation: "Avoid unless losses are clearly temporary.",
    },
    RangeRule {
        lower: Bound::Inclusive(0.0),
        upper: Bound::Exclusive(2.0),
        classification: Classification::Low,
        range: "0% <= ROA < 2%",
        description: "Low return on assets.",
        risks: "Normal for banks; weak for industrial companies.",
        cross_reference: "Compare with equity_to_assets and roe.",
        recommendation: "Interpret by sector.",
    },
    RangeRule {
        lower: Bound::Inclusive(2.0),
        upper: Bound::Exclusive(5.0),
        classification: Classification::Moderate,
        range: "2% <= ROA < 5%",
        description: "Average return on assets.",
        risks: "Margins may be thin.",
        cross_reference: "Review asset_turnover and net_margin.",
        recommendation: "Compare with peers.",
    },
    RangeRule {
        lower: Bound::Inclusive(5.0),
        upper: Bound::Inclusive(10.0),
        classification: Classification::Good,
        range: "5% <= ROA <= 10%",
        description: "Good return on assets.",
        risks: "Low.",
        cross_reference: "Check roic.",
        recommendation: "Efficient use of assets.",
    },
    RangeRule {
        lower: Bound::Exclusive(10.0),
        upper: Bound::Unbounded,
        classification: Classification::Optimal,
        range: "ROA > 10%",
        description: "Excellent return on assets.",
        risks: "Sustainability depends on competitive position.",
        cross_reference: "Check price_to_assets for the valuation.",
        recommendation: "High-quality asset base.",
    },
];

pub static ROE: IndicatorDefinition = IndicatorDefinition {
    key: "roe",
    name: "ROE",
    category: Category::Profitability,
    definition: "
        Return on equity measures net income generated per unit of shareholders' equity.
        It reflects profitability, efficiency and leverage together, so high values should
        be checked against the debt level.
    ",
    formula: "ROE = Net Income / Shareholders' Equity x 100",
    inputs: InputShape::Single { label: "ROE (%)" },
    rules: &ROE_RULES,
};

static ROE_RULES: [RangeRule; 5] = [
    RangeRule {
        lower: Bound::Unbounded,
        upper: Bound::Exclusive(0.0),
        classification: Classification::Critical,
        range: "ROE < 0%",
        description: "The company is losing money for its shareholders.",
        risks: "Equity erosion and possible dilution.",
        cross_reference: "Evaluate net_margin and net_debt_to_equity.",
        recommendation: "Avoid unless losses are clearly temporary.",
    },
    RangeRule {
        lower: Bound::Inclusive(0.0),
        upper: Bound::Exclusive(10.0),
        classification: Classification::Low,
        range: "0% <= ROE < 10%",
        description: "Return on equity below a typical cost of equity.",
        risks: "Shareholder value is not being created.",
        cross_reference: "Compare with roic and asset_turnover.",
        recommendation: "Look for margin or efficiency catalysts.",
    },
    RangeRule {
        lower: Bound::Inclusive(10.0),
        upper: Bound::Exclusive(15.0),
        classification: Classification::Moderate,
        range: "10% <= ROE < 15%",
        description: "Return on equity around the cost of equity.",
        risks: "Limited value creation.",
        cross_reference: "Review net_margin and equity_to_assets.",
        recommendation: "Acceptable for stable businesses.",
    },
    RangeRule {
        lower: Bound::Inclusive(15.0),
        upper: Bound::Inclusive(25.0),
        classification: Classification::Good,
        range: "15% <= ROE <= 25%",
        description: "Return on equity above the cost of equity.",
        risks: "Check that leverage is not the main driver.",
        cross_reference: "Compare with net_debt_to_equity and roa.",
        recommendation: "Value-creating business.",
    },
    RangeRule {
        lower: Bound::Exclusive(25.0),
        upper: Bound::Unbounded,
        classification: Classification::Optimal,
        range: "ROE > 25%",
        description: "Very high return on equity.",
        risks: "May be inflated by high leverage, buybacks or a small equity base.",
        cross_reference: "Check equity_to_assets and price_to_book.",
        recommendation: "Excellent profitability; confirm it is not leverage-driven.",
    },
];

pub static NET_MARGIN: IndicatorDefinition = IndicatorDefinition {
    key: "net_margin",
    name: "Net Margin",
    category: Category::Profitability,
    definition: "
        Net margin is the share of revenue left as net income after all costs, interest and
        taxes. It summarises the whole income statement in one number.
    ",
    formula: "Net Margin = Net Income / Net Revenue x 100",
    inputs: InputShape::Single {
        label: "net margin (%)",
    },
    rules: &NET_MARGIN_RULES,
};

static NET_MARGIN_RULES: [RangeRule; 6] = [
    RangeRule {
        lower: Bound::Unbounded,
        upper: Bound::Exclusive(0.0),
        classification: Classification::Critical,
        range: "Net Margin < 0%",
        description: "The company reports a net loss.",
        risks: "Cash burn and equity erosion.",
        cross_reference: "Check ebit_margin to locate the loss and net_debt_to_ebitda for solvency.",
        recommendation: "Avoid unless losses are non-recurring.",
    },
    RangeRule {
        lower: Bound::Inclusive(0.0),
        upper: Bound::Exclusive(5.0),
        classification: Classification::Low,
        range: "0% <= Net Margin < 5%",
        description: "Thin net margin.",
        risks: "Small cost increases can turn profit into loss.",
        cross_reference: "Compare with asset_turnover; volume businesses run thin margins.",
        recommendation: "Acceptable only with high turnover.",
    },
    RangeRule {
        lower: Bound::Inclusive(5.0),
        upper: Bound::Exclusive(10.0),
        classification: Classification::Moderate,
        range: "5% <= Net Margin < 10%",
        description: "Average net margin.",
        risks: "Exposure to cost inflation.",
        cross_reference: "Review gross_margin and ebit_margin.",
        recommendation: "Compare with peers.",
    },
    RangeRule {
        lower: Bound::Inclusive(10.0),
        upper: Bound::Inclusive(20.0),
        classification: Classification::Good,
        range: "10% <= Net Margin <= 20%",
        description: "Healthy net margin.",
        risks: "Low.",
        cross_reference: "Check roe.",
        recommendation: "Profitable business.",
    },
    RangeRule {
        lower: Bound::Exclusive(20.0),
        upper: Bound::Inclusive(100.0),
        classification: Classification::Optimal,
        range: "20% < Net Margin <= 100%",
        description: "High net margin.",
        risks: "May include non-recurring gains; verify sustainability.",
        cross_reference: "Compare with ebit_margin to spot non-operating items.",
        recommendation: "Strong profitability.",
    },
    RangeRule {
        lower: Bound::Exclusive(100.0),
        upper: Bound::Unbounded,
        classification: Classification::OutOfRange,
        range: "Net Margin > 100%",
        description: "Net income exceeds revenue.",
        risks: "Driven by one-off gains such as asset sales or tax credits.",
        cross_reference: "Use ebit_margin for the recurring picture.",
        recommendation: "Exclude non-recurring items before analysis.",
    },
];

pub static EBITDA_MARGIN: IndicatorDefinition = IndicatorDefinition {
    key: "ebitda_margin",
    name: "EBITDA Margin",
    category: Category::Profitability,
    definition: "
        EBITDA margin is operating profit before depreciation and amortisation as a share of
        revenue. It approximates operating cash generation.
    ",
    formula: "EBITDA Margin = EBITDA / Net Revenue x 100",
    inputs: InputShape::Single {
        label: "EBITDA margin (%)",
    },
    rules: &EBITDA_MARGIN_RULES,
};

static EBITDA_MARGIN_RULES: [RangeRule; 6] = [
    RangeRule {
        lower: Bound::Unbounded,
        upper: Bound::Exclusive(0.0),
        classification: Classification::Critical,
        range: "EBITDA Margin < 0%",
        description: "Operations burn cash before investment.",
        risks: "Dependence on external financing.",
        cross_reference: "Check current_ratio and net_debt.",
        recommendation: "Avoid unless in an early growth phase with funding secured.",
    },
    RangeRule {
        lower: Bound::Inclusive(0.0),
        upper: Bound::Exclusive(10.0),
        classification: Classification::Low,
        range: "0% <= EBITDA Margin < 10%",
        description: "Low operating cash margin.",
        risks: "Little room to service debt.",
        cross_reference: "Review net_debt_to_ebitda.",
        recommendation: "Compare with sector norms.",
    },
    RangeRule {
        lower: Bound::Inclusive(10.0),
        upper: Bound::Exclusive(20.0),
        classification: Classification::Moderate,
        range: "10% <= EBITDA Margin < 20%",
        description: "Average operating cash margin.",
        risks: "Exposure to input cost swings.",
        cross_reference: "Check ev_to_ebitda.",
        recommendation: "Monitor the trend.",
    },
    RangeRule {
        lower: Bound::Inclusive(20.0),
        upper: Bound::Inclusive(35.0),
        classification: Classification::Good,
        range: "20% <= EBITDA Margin <= 35%",
        description: "Strong operating cash margin.",
        risks: "Capital expenditure may still absorb much of it.",
        cross_reference: "Compare with ebit_margin for depreciation weight.",
        recommendation: "Healthy cash generation.",
    },
    RangeRule {
        lower: Bound::Exclusive(35.0),
        upper: Bound::Inclusive(100.0),
        classification: Classification::Optimal,
        range: "35% < EBITDA Margin <= 100%",
        description: "Very high operating cash margin.",
        risks: "Common in capital-heavy sectors where depreciation is large.",
        cross_reference: "Check ebit_margin and roic.",
        recommendation: "Excellent; confirm capex needs.",
    },
    RangeRule {
        lower: Bound::Exclusive(100.0),
        upper: Bound::Unbounded,
        classification: Classification::OutOfRange,
        range: "EBITDA Margin > 100%",
        description: "EBITDA exceeds revenue.",
        risks: "Inputs are inconsistent or include non-operating income.",
        cross_reference: "Re-check the revenue figure.",
        recommendation: "Correct the inputs.",
    },
];

pub static EBIT_MARGIN: IndicatorDefinition = IndicatorDefinition {
    key: "ebit_margin",
    name: "EBIT Margin",
    category: Category::Profitability,
    definition: "
        EBIT margin is operating profit after depreciation and amortisation as a share of
        revenue. It measures the profitability of the core business before financing and
        taxes.
    ",
    formula: "EBIT Margin = EBIT / Net Revenue x 100",
    inputs: InputShape::Single {
        label: "EBIT margin (%)",
    },
    rules: &EBIT_MARGIN_RULES,
};

static EBIT_MARGIN_RULES: [RangeRule; 6] = [
    RangeRule {
        lower: Bound::Unbounded,
        upper: Bound::Exclusive(0.0),
        classification: Classification::Critical,
        range: "EBIT Margin < 0%",
        description: "The core business operates at a loss.",
        risks: "Erosion of capital.",
        cross_reference: "Check gross_margin and ebitda_margin.",
        recommendation: "Avoid unless a turnaround is visible.",
    },
    RangeRule {
        lower: Bound::Inclusive(0.0),
        upper: Bound::Exclusive(8.0),
        classification: Classification::Low,
        range: "0% <= EBIT Margin < 8%",
        description: "Thin operating margin.",
        risks: "Vulnerable to cost pressure.",
        cross_reference: "Review asset_turnover.",
        recommendation: "Acceptable with high turnover.",
    },
    RangeRule {
        lower: Bound::Inclusive(8.0),
        upper: Bound::Exclusive(15.0),
        classification: Classification::Moderate,
        range: "8% <= EBIT Margin < 15%",
        description: "Average operating margin.",
        risks: "Moderate sensitivity to costs.",
        cross_reference: "Check net_debt_to_ebit.",
        recommendation: "Compare with peers.",
    },
    RangeRule {
        lower: Bound::Inclusive(15.0),
        upper: Bound::Inclusive(25.0),
        classification: Classification::Good,
        range: "15% <= EBIT Margin <= 25%",
        description: "Strong operating margin.",
        risks: "Low.",
        cross_reference: "Check ev_to_ebit.",
        recommendation: "Profitable core business.",
    },
    RangeRule {
        lower: Bound::Exclusive(25.0),
        upper: Bound::Inclusive(100.0),
        classification: Classification::Optimal,
        range: "25% < EBIT Margin <= 100%",
        description: "Very high operating margin, often a sign of pricing power.",
        risks: "Attracts competition and regulation.",
        cross_reference: "Check roic and price_to_ebit.",
        recommendation: "Excellent; verify durability.",
    },
    RangeRule {
        lower: Bound::Exclusive(100.0),
        upper: Bound::Unbounded,
        classification: Classification::OutOfRange,
        range: "EBIT Margin > 100%",
        description: "EBIT exceeds revenue.",
        risks: "Inputs are inconsistent.",
        cross_reference: "Re-check the revenue figure.",
        recommendation: "Correct the inputs.",
    },
];

pub static GROSS_MARGIN: IndicatorDefinition = IndicatorDefinition {
    key: "gross_margin",
    name: "Gross Margin",
    category: Category::Profitability,
    definition: "
        Gross margin is revenue minus cost of goods sold, as a share of revenue. It reflects
        pricing power and production efficiency before operating expenses.
    ",
    formula: "Gross Margin = Gross Profit / Net Revenue x 100",
    inputs: InputShape::Single {
        label: "gross margin (%)",
    },
    rules: &GROSS_MARGIN_RULES,
};

static GROSS_MARGIN_RULES: [RangeRule; 6] = [
    RangeRule {
        lower: Bound::Unbounded,
        upper: Bound::Exclusive(0.0),
        classification: Classification::Critical,
        range: "Gross Margin < 0%",
        description: "Products sell below their production cost.",
        risks: "Unsustainable business model.",
        cross_reference: "Check ebitda_margin and net_margin.",
        recommendation: "Avoid.",
    },
    RangeRule {
        lower: Bound::Inclusive(0.0),
        upper: Bound::Exclusive(20.0),
        classification: Classification::Low,
        range: "0% <= Gross Margin < 20%",
        description: "Low gross margin, typical of commodities and distribution.",
        risks: "No pricing power.",
        cross_reference: "Compare with asset_turnover.",
        recommendation: "Requires volume and tight cost control.",
    },
    RangeRule {
        lower: Bound::Inclusive(20.0),
        upper: Bound::Exclusive(35.0),
        classification: Classification::Moderate,
        range: "20% <= Gross Margin < 35%",
        description: "Average gross margin.",
        risks: "Moderate exposure to input costs.",
        cross_reference: "Review ebit_margin.",
        recommendation: "Compare with peers.",
    },
    RangeRule {
        lower: Bound::Inclusive(35.0),
        upper: Bound::Inclusive(50.0),
        classification: Classification::Good,
        range: "35% <= Gross Margin <= 50%",
        description: "Healthy gross margin.",
        risks: "Low.",
        cross_reference: "Check net_margin for operating cost discipline.",
        recommendation: "Good pricing position.",
    },
    RangeRule {
        lower: Bound::Exclusive(50.0),
        upper: Bound::Inclusive(100.0),
        classification: Classification::Optimal,
        range: "50% < Gross Margin <= 100%",
        description: "High gross margin, a sign of pricing power or brand strength.",
        risks: "Heavy operating expenses can still absorb it.",
        cross_reference: "Check ebit_margin.",
        recommendation: "Excellent; verify operating cost discipline.",
    },
    RangeRule {
        lower: Bound::Exclusive(100.0),
        upper: Bound::Unbounded,
        classification: Classification::OutOfRange,
        range: "Gross Margin > 100%",
        description: "Gross profit cannot exceed revenue.",
        risks: "Inputs are inconsistent.",
        cross_reference: "Re-check the revenue figure.",
        recommendation: "Correct the inputs.",
    },
];

pub static EPS: IndicatorDefinition = IndicatorDefinition {
    key: "eps",
    name: "EPS",
    category: Category::Profitability,
    definition: "
        Earnings per share is net income divided by the number of shares outstanding. It is
        the per-share profit that feeds the P/E multiple.
    ",
    formula: "EPS = Net Income / Shares Outstanding",
    inputs: InputShape::Single {
        label: "EPS (currency per share)",
    },
    rules: &EPS_RULES,
};

static EPS_RULES: [RangeRule; 5] = [
    RangeRule {
        lower: Bound::Unbounded,
        upper: Bound::Exclusive(0.0),
        classification: Classification::Critical,
        range: "EPS < 0",
        description: "The company reports a loss per share.",
        risks: "No earnings support for the share price.",
        cross_reference: "Check net_margin and price_to_sales.",
        recommendation: "Value on revenue or assets instead of earnings.",
    },
    RangeRule {
        lower: Bound::Inclusive(0.0),
        upper: Bound::Exclusive(0.5),
        classification: Classification::Low,
        range: "0 <= EPS < 0.5",
        description: "Low earnings per share.",
        risks: "Small changes in profit swing the P/E widely.",
        cross_reference: "Compare with price_to_earnings.",
        recommendation: "Read together with the share price.",
    },
    RangeRule {
        lower: Bound::Inclusive(0.5),
        upper: Bound::Exclusive(2.0),
        classification: Classification::Moderate,
        range: "0.5 <= EPS < 2",
        description: "Moderate earnings per share.",
        risks: "Depends on the share price level.",
        cross_reference: "Check price_to_earnings.",
        recommendation: "Track growth over several years.",
    },
    RangeRule {
        lower: Bound::Inclusive(2.0),
        upper: Bound::Exclusive(5.0),
        classification: Classification::Good,
        range: "2 <= EPS < 5",
        description: "Solid earnings per share.",
        risks: "Low.",
        cross_reference: "Compare with book_value_per_share for roe.",
        recommendation: "Positive earnings base.",
    },
    RangeRule {
        lower: Bound::Inclusive(5.0),
        upper: Bound::Unbounded,
        classification: Classification::Optimal,
        range: "EPS >= 5",
        description: "High earnings per share.",
        risks: "Absolute EPS is not comparable across share counts.",
        cross_reference: "Check price_to_earnings for the multiple.",
        recommendation: "Strong earnings; compare via P/E.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roe_above_25_is_optimal() {
        assert_eq!(ROE.evaluate(30.0).classification, Classification::Optimal);
        assert_eq!(ROE.evaluate(25.0).classification, Classification::Good);
    }

    #[test]
    fn margins_above_100_are_out_of_range() {
        for def in [&NET_MARGIN, &EBITDA_MARGIN, &EBIT_MARGIN, &GROSS_MARGIN] {
            assert_eq!(def.evaluate(100.0).classification, Classification::Optimal);
            assert_eq!(def.evaluate(100.5).classification, Classification::OutOfRange);
        }
    }

    #[test]
    fn negative_eps_is_critical() {
        assert_eq!(EPS.evaluate(-0.1).classification, Classification::Critical);
        assert_eq!(EPS.evaluate(0).classification, Classification::Low);
    }
}
