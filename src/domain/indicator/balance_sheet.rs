//! Absolute balance-sheet amounts, in millions of the reporting currency.

use crate::domain::classification::{Category, Classification};
use crate::domain::indicator::{IndicatorDefinition, InputShape};
use crate::domain::range_rule::{Bound, RangeRule};

pub static CURRENT_ASSETS: IndicatorDefinition = IndicatorDefinition {
    key: "current_assets",
    name: "Current Assets",
    category: Category::BalanceSheet,
    definition: "
        Current assets are the resources a company expects to convert into cash within
        twelve months: cash and equivalents, receivables, inventories and short-term
        investments. The size of this pool shows how much short-term capacity the company
        has to fund operations and meet obligations that fall due within the year.
    ",
    formula: "Current Assets = Cash + Receivables + Inventories + Short-term Investments",
    inputs: InputShape::Single {
        label: "current assets (millions)",
    },
    rules: &CURRENT_ASSETS_RULES,
};

static CURRENT_ASSETS_RULES: [RangeRule; 5] = [
    RangeRule {
        lower: Bound::Unbounded,
        upper: Bound::Exclusive(0.0),
        classification: Classification::Critical,
        range: "Current Assets < 0",
        description: "A negative current asset balance is not economically possible and points to a data or accounting error.",
        risks: "Figures may be corrupted or mislabelled; any analysis built on them is unreliable.",
        cross_reference: "Check total_assets and current_ratio against the original filing.",
        recommendation: "Discard the figure and reload the balance sheet before drawing conclusions.",
    },
    RangeRule {
        lower: Bound::Inclusive(0.0),
        upper: Bound::Exclusive(50.0),
        classification: Classification::Low,
        range: "0 <= Current Assets < 50",
        description: "A small pool of short-term resources, typical of micro caps or asset-light firms.",
        risks: "Little buffer against revenue shocks or an unexpected payment.",
        cross_reference: "Compare with current_ratio for coverage of short-term liabilities and daily_liquidity for market depth.",
        recommendation: "Confirm that short-term liabilities are equally small before treating the position as safe.",
    },
    RangeRule {
        lower: Bound::Inclusive(50.0),
        upper: Bound::Exclusive(500.0),
        classification: Classification::Moderate,
        range: "50 <= Current Assets < 500",
        description: "A mid-sized short-term asset base able to fund routine operations.",
        risks: "Composition matters: inventories and receivables convert to cash slower than cash itself.",
        cross_reference: "Review current_ratio and asset_turnover to see how efficiently these assets are used.",
        recommendation: "Break the total down by cash, receivables and inventories before relying on it.",
    },
    RangeRule {
        lower: Bound::Inclusive(500.0),
        upper: Bound::Exclusive(5000.0),
        classification: Classification::Good,
        range: "500 <= Current Assets < 5000",
        description: "A large short-term asset base that supports operations and absorbs moderate shocks.",
        risks: "Excess working capital can hide slow-moving inventory or doubtful receivables.",
        cross_reference: "Check price_to_working_capital for how the market prices this base and current_ratio for coverage.",
        recommendation: "Track inventory and receivable days to make sure the base stays productive.",
    },
    RangeRule {
        lower: Bound::Inclusive(5000.0),
        upper: Bound::Unbounded,
        classification: Classification::Optimal,
        range: "Current Assets >= 5000",
        description: "A very large pool of short-term resources, characteristic of large caps.",
        risks: "Idle cash may signal a lack of investment opportunities and drag on returns.",
        cross_reference: "Compare with roic and roa to see whether the capital is being put to work.",
        recommendation: "Assess capital allocation policy: dividends, buybacks or reinvestment plans.",
    },
];

pub static TOTAL_ASSETS: IndicatorDefinition = IndicatorDefinition {
    key: "total_assets",
    name: "Total Assets",
    category: Category::BalanceSheet,
    definition: "
        Total assets is the sum of everything a company owns or controls that carries
        economic value, both current and non-current. It measures the scale of the
        business and is the denominator of several efficiency and valuation ratios.
    ",
    formula: "Total Assets = Current Assets + Non-current Assets",
    inputs: InputShape::Single {
        label: "total assets (millions)",
    },
    rules: &TOTAL_ASSETS_RULES,
};

static TOTAL_ASSETS_RULES: [RangeRule; 5] = [
    RangeRule {
        lower: Bound::Unbounded,
        upper: Bound::Inclusive(0.0),
        classification: Classification::Critical,
        range: "Total Assets <= 0",
        description: "A company cannot hold zero or negative total assets; the figure is invalid.",
        risks: "Probable data error or a shell company with no operations.",
        cross_reference: "Verify equity and current_assets in the same filing.",
        recommendation: "Do not analyse the company until the balance sheet is corrected.",
    },
    RangeRule {
        lower: Bound::Exclusive(0.0),
        upper: Bound::Exclusive(100.0),
        classification: Classification::Low,
        range: "0 < Total Assets < 100",
        description: "A very small asset base, typical of micro caps.",
        risks: "Small companies are more exposed to concentration, liquidity and governance risks.",
        cross_reference: "Check daily_liquidity for tradability and net_debt_to_equity for solvency.",
        recommendation: "Size positions conservatively and demand a larger margin of safety.",
    },
    RangeRule {
        lower: Bound::Inclusive(100.0),
        upper: Bound::Exclusive(1000.0),
        classification: Classification::Moderate,
        range: "100 <= Total Assets < 1000",
        description: "A small to mid-sized asset base.",
        risks: "Growth may require external financing that dilutes shareholders or adds debt.",
        cross_reference: "Review asset_turnover and roa to see how productively the assets are used.",
        recommendation: "Follow the financing plan for the next expansion cycle.",
    },
    RangeRule {
        lower: Bound::Inclusive(1000.0),
        upper: Bound::Exclusive(10000.0),
        classification: Classification::Good,
        range: "1000 <= Total Assets < 10000",
        description: "A large asset base with meaningful scale.",
        risks: "Scale does not guarantee returns; heavy assets can depress roa.",
        cross_reference: "Compare with price_to_assets for valuation and roa for efficiency.",
        recommendation: "Focus on return metrics rather than size alone.",
    },
    RangeRule {
        lower: Bound::Inclusive(10000.0),
        upper: Bound::Unbounded,
        classification: Classification::Optimal,
        range: "Total Assets >= 10000",
        description: "A very large asset base, typical of market leaders.",
        risks: "Large conglomerates can suffer from complexity and slow capital turnover.",
        cross_reference: "Check asset_turnover and roic for capital efficiency.",
        recommendation: "Look for segment disclosures to understand where value is created.",
    },
];

pub static EQUITY: IndicatorDefinition = IndicatorDefinition {
    key: "equity",
    name: "Shareholders' Equity",
    category: Category::BalanceSheet,
    definition: "
        Shareholders' equity is the book value of the owners' stake: total assets minus
        total liabilities. Negative equity means liabilities exceed assets, a condition
        that usually follows accumulated losses.
    ",
    formula: "Equity = Total Assets - Total Liabilities",
    inputs: InputShape::Single {
        label: "equity (millions)",
    },
    rules: &EQUITY_RULES,
};

static EQUITY_RULES: [RangeRule; 5] = [
    RangeRule {
        lower: Bound::Unbounded,
        upper: Bound::Exclusive(0.0),
        classification: Classification::Critical,
        range: "Equity < 0",
        description: "Liabilities exceed assets; shareholders hold a negative book stake.",
        risks: "High probability of restructuring, recapitalisation or bankruptcy with heavy dilution.",
        cross_reference: "Evaluate net_debt_to_ebitda for debt service capacity and net_margin for the source of losses.",
        recommendation: "Treat as distressed; only consider with a clear turnaround thesis.",
    },
    RangeRule {
        lower: Bound::Inclusive(0.0),
        upper: Bound::Exclusive(100.0),
        classification: Classification::Low,
        range: "0 <= Equity < 100",
        description: "A thin equity cushion.",
        risks: "A single bad year can wipe out the book value.",
        cross_reference: "Check equity_to_assets for leverage and roe, which is inflated by a small base.",
        recommendation: "Read roe carefully and verify the trend of retained earnings.",
    },
    RangeRule {
        lower: Bound::Inclusive(100.0),
        upper: Bound::Exclusive(1000.0),
        classification: Classification::Moderate,
        range: "100 <= Equity < 1000",
        description: "A moderate equity base.",
        risks: "Capacity to absorb losses is limited relative to larger peers.",
        cross_reference: "Compare with net_debt_to_equity and book_value_per_share.",
        recommendation: "Monitor equity growth against dividend payouts.",
    },
    RangeRule {
        lower: Bound::Inclusive(1000.0),
        upper: Bound::Exclusive(10000.0),
        classification: Classification::Good,
        range: "1000 <= Equity < 10000",
        description: "A solid equity base that supports borrowing capacity.",
        risks: "Book value may include goodwill or intangibles that do not hold value in a downturn.",
        cross_reference: "Review price_to_book for valuation and roe for returns on this capital.",
        recommendation: "Check the share of intangibles in equity.",
    },
    RangeRule {
        lower: Bound::Inclusive(10000.0),
        upper: Bound::Unbounded,
        classification: Classification::Optimal,
        range: "Equity >= 10000",
        description: "A very large equity base.",
        risks: "Large equity can dilute returns if not reinvested productively.",
        cross_reference: "Compare with roe and roic.",
        recommendation: "Confirm returns on equity stay above the cost of capital.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_total_assets_is_critical() {
        assert_eq!(
            TOTAL_ASSETS.evaluate(0.0).classification,
            Classification::Critical
        );
        assert_eq!(TOTAL_ASSETS.evaluate(0.01).classification, Classification::Low);
    }

    #[test]
    fn negative_equity_is_critical() {
        assert_eq!(EQUITY.evaluate(-1.0).classification, Classification::Critical);
        assert_eq!(EQUITY.evaluate(0.0).classification, Classification::Low);
    }

    #[test]
    fn current_assets_thresholds() {
        assert_eq!(
            CURRENT_ASSETS.evaluate(50.0).classification,
            Classification::Moderate
        );
        assert_eq!(
            CURRENT_ASSETS.evaluate(5000.0).classification,
            Classification::Optimal
        );
    }
}
