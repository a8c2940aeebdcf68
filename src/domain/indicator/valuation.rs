//! Market multiples, per-share book value and dividend yield.

use crate::domain::classification::{Category, Classification};
use crate::domain::indicator::{IndicatorDefinition, InputShape};
use crate::domain::range_rule::{Bound, RangeRule};

pub static DIVIDEND_YIELD: IndicatorDefinition = IndicatorDefinition {
    key: "dividend_yield",
    name: "Dividend Yield",
    category: Category::Valuation,
    definition: "
        Dividend yield is the cash paid to shareholders over the last twelve months as a
        percentage of the share price. Zero is a meaningful value: the company pays no
        dividends.
    ",
    formula: "Dividend Yield = Dividends per Share (12 months) / Share Price x 100",
    inputs: InputShape::Single {
        label: "dividend yield (%)",
    },
    rules: &DIVIDEND_YIELD_RULES,
};

static DIVIDEND_YIELD_RULES: [RangeRule; 7] = [
    RangeRule {
        lower: Bound::Unbounded,
        upper: Bound::Exclusive(0.0),
        classification: Classification::Critical,
        range: "Dividend Yield < 0%",
        description: "A negative yield is not possible; the figure is invalid.",
        risks: "Data error.",
        cross_reference: "Re-check the dividend and price inputs.",
        recommendation: "Correct the input.",
    },
    RangeRule {
        lower: Bound::Inclusive(0.0),
        upper: Bound::Inclusive(0.0),
        classification: Classification::Null,
        range: "Dividend Yield = 0%",
        description: "The company paid no dividends in the period.",
        risks: "No income component; returns depend entirely on price appreciation.",
        cross_reference: "Check roic to see whether retained earnings are reinvested well.",
        recommendation: "Suitable for growth-oriented investors only.",
    },
    RangeRule {
        lower: Bound::Exclusive(0.0),
        upper: Bound::Exclusive(2.0),
        classification: Classification::Low,
        range: "0% < Dividend Yield < 2%",
        description: "Low dividend yield.",
        risks: "Limited income; payout may be low or the price high.",
        cross_reference: "Compare with price_to_earnings and net_margin.",
        recommendation: "Not an income stock.",
    },
    RangeRule {
        lower: Bound::Inclusive(2.0),
        upper: Bound::Exclusive(4.0),
        classification: Classification::Moderate,
        range: "2% <= Dividend Yield < 4%",
        description: "Moderate dividend yield.",
        risks: "Payout can be cut in weak years.",
        cross_reference: "Check eps stability.",
        recommendation: "Reasonable income contribution.",
    },
    RangeRule {
        lower: Bound::Inclusive(4.0),
        upper: Bound::Inclusive(6.0),
        classification: Classification::Good,
        range: "4% <= Dividend Yield <= 6%",
        description: "Attractive dividend yield.",
        risks: "Verify the payout ratio is sustainable.",
        cross_reference: "Check net_debt_to_ebitda and net_margin.",
        recommendation: "Good income stock candidate.",
    },
    RangeRule {
        lower: Bound::Exclusive(6.0),
        upper: Bound::Inclusive(12.0),
        classification: Classification::Optimal,
        range: "6% < Dividend Yield <= 12%",
        description: "High dividend yield.",
        risks: "May reflect a falling price or a one-off distribution.",
        cross_reference: "Compare with eps and price_to_earnings.",
        recommendation: "Strong income; confirm the payout is recurring.",
    },
    RangeRule {
        lower: Bound::Exclusive(12.0),
        upper: Bound::Unbounded,
        classification: Classification::OutOfRange,
        range: "Dividend Yield > 12%",
        description: "Unusually high yield.",
        risks: "Likely extraordinary dividends or a collapsing share price (yield trap).",
        cross_reference: "Check net_margin, eps and net_debt.",
        recommendation: "Do not extrapolate; treat as non-recurring.",
    },
];

pub static PRICE_TO_WORKING_CAPITAL: IndicatorDefinition = IndicatorDefinition {
    key: "price_to_working_capital",
    name: "P/Working Capital",
    category: Category::Valuation,
    definition: "
        Price to working capital compares the share price with net working capital per share
        (current assets minus current liabilities). Negative values arise when current
        liabilities exceed current assets.
    ",
    formula: "P/Working Capital = Share Price / (Working Capital / Shares Outstanding)",
    inputs: InputShape::Single {
        label: "P/Working Capital",
    },
    rules: &PRICE_TO_WORKING_CAPITAL_RULES,
};

static PRICE_TO_WORKING_CAPITAL_RULES: [RangeRule; 6] = [
    RangeRule {
        lower: Bound::Unbounded,
        upper: Bound::Exclusive(0.0),
        classification: Classification::Critical,
        range: "P/Working Capital < 0",
        description: "Working capital is negative.",
        risks: "Short-term obligations exceed short-term resources.",
        cross_reference: "Evaluate current_ratio and net_debt.",
        recommendation: "Investigate liquidity before anything else.",
    },
    RangeRule {
        lower: Bound::Inclusive(0.0),
        upper: Bound::Inclusive(5.0),
        classification: Classification::Optimal,
        range: "0 <= P/Working Capital <= 5",
        description: "The market pays little for the working capital.",
        risks: "Working capital may include slow inventory.",
        cross_reference: "Check current_assets composition and current_ratio.",
        recommendation: "Attractive; verify asset quality.",
    },
    RangeRule {
        lower: Bound::Exclusive(5.0),
        upper: Bound::Inclusive(10.0),
        classification: Classification::Good,
        range: "5 < P/Working Capital <= 10",
        description: "Reasonable price for the working capital.",
        risks: "Low.",
        cross_reference: "Compare with price_to_book.",
        recommendation: "Fair valuation on this measure.",
    },
    RangeRule {
        lower: Bound::Exclusive(10.0),
        upper: Bound::Inclusive(20.0),
        classification: Classification::Moderate,
        range: "10 < P/Working Capital <= 20",
        description: "Moderate premium over working capital.",
        risks: "Valuation relies on earnings rather than assets.",
        cross_reference: "Check price_to_earnings.",
        recommendation: "Neutral.",
    },
    RangeRule {
        lower: Bound::Exclusive(20.0),
        upper: Bound::Inclusive(50.0),
        classification: Classification::Poor,
        range: "20 < P/Working Capital <= 50",
        description: "High premium over working capital.",
        risks: "Thin working capital or a rich price.",
        cross_reference: "Review current_ratio and ev_to_ebitda.",
        recommendation: "Demand strong earnings support.",
    },
    RangeRule {
        lower: Bound::Exclusive(50.0),
        upper: Bound::Unbounded,
        classification: Classification::VeryPoor,
        range: "P/Working Capital > 50",
        description: "Very high premium over working capital.",
        risks: "Working capital close to zero makes the multiple unstable.",
        cross_reference: "Use current_ratio instead.",
        recommendation: "Do not rely on this multiple.",
    },
];

pub static PRICE_TO_SALES: IndicatorDefinition = IndicatorDefinition {
    key: "price_to_sales",
    name: "P/Sales",
    category: Category::Valuation,
    definition: "
        Price to sales (PSR) compares market capitalisation with annual revenue. It is useful
        for companies without stable earnings, but ignores profitability.
    ",
    formula: "P/Sales = Market Capitalisation / Net Revenue",
    inputs: InputShape::Single { label: "P/Sales" },
    rules: &PRICE_TO_SALES_RULES,
};

static PRICE_TO_SALES_RULES: [RangeRule; 6] = [
    RangeRule {
        lower: Bound::Unbounded,
        upper: Bound::Exclusive(0.0),
        classification: Classification::Critical,
        range: "P/Sales < 0",
        description: "A negative PSR implies negative revenue, which is invalid.",
        risks: "Data error.",
        cross_reference: "Re-check the revenue figure.",
        recommendation: "Correct the input.",
    },
    RangeRule {
        lower: Bound::Inclusive(0.0),
        upper: Bound::Inclusive(1.0),
        classification: Classification::Optimal,
        range: "0 <= P/Sales <= 1",
        description: "The market values the company at or below one year of revenue.",
        risks: "Low margins can justify a low PSR.",
        cross_reference: "Check net_margin and gross_margin.",
        recommendation: "Attractive if margins are sound.",
    },
    RangeRule {
        lower: Bound::Exclusive(1.0),
        upper: Bound::Inclusive(2.0),
        classification: Classification::Good,
        range: "1 < P/Sales <= 2",
        description: "Reasonable revenue multiple.",
        risks: "Low.",
        cross_reference: "Compare with ev_to_ebitda.",
        recommendation: "Fair valuation.",
    },
    RangeRule {
        lower: Bound::Exclusive(2.0),
        upper: Bound::Inclusive(4.0),
        classification: Classification::Moderate,
        range: "2 < P/Sales <= 4",
        description: "Moderate revenue multiple.",
        risks: "Requires healthy margins to be justified.",
        cross_reference: "Check ebit_margin.",
        recommendation: "Neutral.",
    },
    RangeRule {
        lower: Bound::Exclusive(4.0),
        upper: Bound::Inclusive(8.0),
        classification: Classification::Poor,
        range: "4 < P/Sales <= 8",
        description: "High revenue multiple.",
        risks: "Growth expectations are priced in.",
        cross_reference: "Check price_to_earnings and net_margin.",
        recommendation: "Requires high growth or margins.",
    },
    RangeRule {
        lower: Bound::Exclusive(8.0),
        upper: Bound::Unbounded,
        classification: Classification::VeryPoor,
        range: "P/Sales > 8",
        description: "Very high revenue multiple.",
        risks: "Speculative valuation sensitive to sentiment.",
        cross_reference: "Compare with gross_margin and roic.",
        recommendation: "Treat with caution.",
    },
];

pub static BOOK_VALUE_PER_SHARE: IndicatorDefinition = IndicatorDefinition {
    key: "book_value_per_share",
    name: "Book Value per Share",
    category: Category::Valuation,
    definition: "
        Book value per share is shareholders' equity divided by the number of shares
        outstanding. It is the per-share accounting value that anchors the P/BV multiple.
    ",
    formula: "Book Value per Share = Shareholders' Equity / Shares Outstanding",
    inputs: InputShape::Single {
        label: "book value per share",
    },
    rules: &BOOK_VALUE_PER_SHARE_RULES,
};

static BOOK_VALUE_PER_SHARE_RULES: [RangeRule; 5] = [
    RangeRule {
        lower: Bound::Unbounded,
        upper: Bound::Exclusive(0.0),
        classification: Classification::Critical,
        range: "Book Value per Share < 0",
        description: "Negative equity per share.",
        risks: "Liabilities exceed assets.",
        cross_reference: "Evaluate equity and net_debt_to_ebitda.",
        recommendation: "Treat as distressed.",
    },
    RangeRule {
        lower: Bound::Inclusive(0.0),
        upper: Bound::Exclusive(1.0),
        classification: Classification::Low,
        range: "0 <= Book Value per Share < 1",
        description: "Low book value per share.",
        risks: "Little accounting support for the price.",
        cross_reference: "Compare with price_to_book.",
        recommendation: "Read together with the share count.",
    },
    RangeRule {
        lower: Bound::Inclusive(1.0),
        upper: Bound::Exclusive(5.0),
        classification: Classification::Moderate,
        range: "1 <= Book Value per Share < 5",
        description: "Moderate book value per share.",
        risks: "Depends on asset quality.",
        cross_reference: "Check price_to_book and roe.",
        recommendation: "Track growth over time.",
    },
    RangeRule {
        lower: Bound::Inclusive(5.0),
        upper: Bound::Exclusive(20.0),
        classification: Classification::Good,
        range: "5 <= Book Value per Share < 20",
        description: "Solid book value per share.",
        risks: "Intangibles may inflate book value.",
        cross_reference: "Check price_to_book.",
        recommendation: "Sound equity base.",
    },
    RangeRule {
        lower: Bound::Inclusive(20.0),
        upper: Bound::Unbounded,
        classification: Classification::Optimal,
        range: "Book Value per Share >= 20",
        description: "High book value per share.",
        risks: "Absolute values are not comparable across share counts.",
        cross_reference: "Use price_to_book for comparisons.",
        recommendation: "Strong equity base per share.",
    },
];

pub static PRICE_TO_EARNINGS: IndicatorDefinition = IndicatorDefinition {
    key: "price_to_earnings",
    name: "P/E",
    category: Category::Valuation,
    definition: "
        Price to earnings compares the share price with earnings per share. It approximates
        how many years of current profit the market is paying for. Negative values mean the
        company reports losses.
    ",
    formula: "P/E = Share Price / Earnings per Share",
    inputs: InputShape::Single { label: "P/E" },
    rules: &PRICE_TO_EARNINGS_RULES,
};

static PRICE_TO_EARNINGS_RULES: [RangeRule; 7] = [
    RangeRule {
        lower: Bound::Unbounded,
        upper: Bound::Exclusive(0.0),
        classification: Classification::Critical,
        range: "P/E < 0",
        description: "The company reports losses; the multiple has no earnings support.",
        risks: "Risk of further losses, dilution or restructuring.",
        cross_reference: "Evaluate net_margin, net_debt_to_ebitda and price_to_sales.",
        recommendation: "Value on revenue or assets until earnings turn positive.",
    },
    RangeRule {
        lower: Bound::Inclusive(0.0),
        upper: Bound::Inclusive(10.0),
        classification: Classification::Optimal,
        range: "0 <= P/E <= 10",
        description: "Low multiple relative to earnings.",
        risks: "Possible value trap if earnings are about to fall.",
        cross_reference: "Check eps trend and roe.",
        recommendation: "Attractive if earnings are sustainable.",
    },
    RangeRule {
        lower: Bound::Exclusive(10.0),
        upper: Bound::Inclusive(15.0),
        classification: Classification::Good,
        range: "10 < P/E <= 15",
        description: "Reasonable multiple.",
        risks: "Low.",
        cross_reference: "Compare with ev_to_ebit.",
        recommendation: "Fair valuation.",
    },
    RangeRule {
        lower: Bound::Exclusive(15.0),
        upper: Bound::Inclusive(20.0),
        classification: Classification::Moderate,
        range: "15 < P/E <= 20",
        description: "Moderate multiple pricing in some growth.",
        risks: "Growth disappointment would compress the multiple.",
        cross_reference: "Check roic and net_margin.",
        recommendation: "Neutral.",
    },
    RangeRule {
        lower: Bound::Exclusive(20.0),
        upper: Bound::Inclusive(30.0),
        classification: Classification::Poor,
        range: "20 < P/E <= 30",
        description: "High multiple.",
        risks: "Strong growth is priced in.",
        cross_reference: "Compare with price_to_book and ev_to_ebitda.",
        recommendation: "Requires high and durable growth.",
    },
    RangeRule {
        lower: Bound::Exclusive(30.0),
        upper: Bound::Inclusive(50.0),
        classification: Classification::VeryPoor,
        range: "30 < P/E <= 50",
        description: "Very high multiple.",
        risks: "Sensitive to any earnings miss.",
        cross_reference: "Check price_to_sales and roic.",
        recommendation: "Treat with caution.",
    },
    RangeRule {
        lower: Bound::Exclusive(50.0),
        upper: Bound::Unbounded,
        classification: Classification::OutOfRange,
        range: "P/E > 50",
        description: "Earnings are too small for the multiple to be meaningful.",
        risks: "Speculative valuation or depressed earnings.",
        cross_reference: "Use price_to_sales or ev_to_ebitda instead.",
        recommendation: "Do not rely on this multiple.",
    },
];

pub static PRICE_TO_EBITDA: IndicatorDefinition = IndicatorDefinition {
    key: "price_to_ebitda",
    name: "P/EBITDA",
    category: Category::Valuation,
    definition: "
        Price to EBITDA compares market capitalisation with operating profit before
        depreciation and amortisation. Unlike EV/EBITDA it ignores the debt load.
    ",
    formula: "P/EBITDA = Market Capitalisation / EBITDA",
    inputs: InputShape::Single { label: "P/EBITDA" },
    rules: &PRICE_TO_EBITDA_RULES,
};

static PRICE_TO_EBITDA_RULES: [RangeRule; 6] = [
    RangeRule {
        lower: Bound::Unbounded,
        upper: Bound::Exclusive(0.0),
        classification: Classification::Critical,
        range: "P/EBITDA < 0",
        description: "Negative EBITDA: operations burn cash.",
        risks: "Dependence on financing.",
        cross_reference: "Check ebitda_margin and current_ratio.",
        recommendation: "Avoid unless funding is secured.",
    },
    RangeRule {
        lower: Bound::Inclusive(0.0),
        upper: Bound::Inclusive(4.0),
        classification: Classification::Optimal,
        range: "0 <= P/EBITDA <= 4",
        description: "Low multiple of operating cash earnings.",
        risks: "High debt can justify a low equity multiple.",
        cross_reference: "Compare with ev_to_ebitda and net_debt_to_ebitda.",
        recommendation: "Attractive if leverage is moderate.",
    },
    RangeRule {
        lower: Bound::Exclusive(4.0),
        upper: Bound::Inclusive(8.0),
        classification: Classification::Good,
        range: "4 < P/EBITDA <= 8",
        description: "Reasonable multiple.",
        risks: "Low.",
        cross_reference: "Check ev_to_ebitda.",
        recommendation: "Fair valuation.",
    },
    RangeRule {
        lower: Bound::Exclusive(8.0),
        upper: Bound::Inclusive(12.0),
        classification: Classification::Moderate,
        range: "8 < P/EBITDA <= 12",
        description: "Moderate multiple.",
        risks: "Growth expectations embedded.",
        cross_reference: "Review ebitda_margin.",
        recommendation: "Neutral.",
    },
    RangeRule {
        lower: Bound::Exclusive(12.0),
        upper: Bound::Inclusive(20.0),
        classification: Classification::Poor,
        range: "12 < P/EBITDA <= 20",
        description: "High multiple.",
        risks: "Sensitive to earnings downgrades.",
        cross_reference: "Check roic.",
        recommendation: "Requires strong growth.",
    },
    RangeRule {
        lower: Bound::Exclusive(20.0),
        upper: Bound::Unbounded,
        classification: Classification::VeryPoor,
        range: "P/EBITDA > 20",
        description: "Very high multiple.",
        risks: "Speculative valuation.",
        cross_reference: "Compare with price_to_sales.",
        recommendation: "Treat with caution.",
    },
];

pub static PRICE_TO_EBIT: IndicatorDefinition = IndicatorDefinition {
    key: "price_to_ebit",
    name: "P/EBIT",
    category: Category::Valuation,
    definition: "
        Price to EBIT compares market capitalisation with operating profit after
        depreciation and amortisation.
    ",
    formula: "P/EBIT = Market Capitalisation / EBIT",
    inputs: InputShape::Single { label: "P/EBIT" },
    rules: &PRICE_TO_EBIT_RULES,
};

static PRICE_TO_EBIT_RULES: [RangeRule; 6] = [
    RangeRule {
        lower: Bound::Unbounded,
        upper: Bound::Exclusive(0.0),
        classification: Classification::Critical,
        range: "P/EBIT < 0",
        description: "Negative EBIT: the core business operates at a loss.",
        risks: "Erosion of capital.",
        cross_reference: "Check ebit_margin and gross_margin.",
        recommendation: "Avoid unless a turnaround is visible.",
    },
    RangeRule {
        lower: Bound::Inclusive(0.0),
        upper: Bound::Inclusive(5.0),
        classification: Classification::Optimal,
        range: "0 <= P/EBIT <= 5",
        description: "Low multiple of operating profit.",
        risks: "Possible cyclical peak in earnings.",
        cross_reference: "Compare with ev_to_ebit.",
        recommendation: "Attractive if earnings are sustainable.",
    },
    RangeRule {
        lower: Bound::Exclusive(5.0),
        upper: Bound::Inclusive(10.0),
        classification: Classification::Good,
        range: "5 < P/EBIT <= 10",
        description: "Reasonable multiple.",
        risks: "Low.",
        cross_reference: "Check net_debt_to_ebit.",
        recommendation: "Fair valuation.",
    },
    RangeRule {
        lower: Bound::Exclusive(10.0),
        upper: Bound::Inclusive(15.0),
        classification: Classification::Moderate,
        range: "10 < P/EBIT <= 15",
        description: "Moderate multiple.",
        risks: "Growth expectations embedded.",
        cross_reference: "Review ebit_margin.",
        recommendation: "Neutral.",
    },
    RangeRule {
        lower: Bound::Exclusive(15.0),
        upper: Bound::Inclusive(25.0),
        classification: Classification::Poor,
        range: "15 < P/EBIT <= 25",
        description: "High multiple.",
        risks: "Sensitive to margin pressure.",
        cross_reference: "Check roic.",
        recommendation: "Requires strong growth.",
    },
    RangeRule {
        lower: Bound::Exclusive(25.0),
        upper: Bound::Unbounded,
        classification: Classification::VeryPoor,
        range: "P/EBIT > 25",
        description: "Very high multiple.",
        risks: "Speculative valuation.",
        cross_reference: "Compare with price_to_sales.",
        recommendation: "Treat with caution.",
    },
];

pub static PRICE_TO_ASSETS: IndicatorDefinition = IndicatorDefinition {
    key: "price_to_assets",
    name: "P/Assets",
    category: Category::Valuation,
    definition: "
        Price to assets compares market capitalisation with total assets. Low values mean
        the market pays little for each unit of the company's asset base.
    ",
    formula: "P/Assets = Market Capitalisation / Total Assets",
    inputs: InputShape::Single { label: "P/Assets" },
    rules: &PRICE_TO_ASSETS_RULES,
};

static PRICE_TO_ASSETS_RULES: [RangeRule; 6] = [
    RangeRule {
        lower: Bound::Unbounded,
        upper: Bound::Exclusive(0.0),
        classification: Classification::Critical,
        range: "P/Assets < 0",
        description: "A negative value implies negative assets, which is invalid.",
        risks: "Data error.",
        cross_reference: "Re-check total_assets.",
        recommendation: "Correct the input.",
    },
    RangeRule {
        lower: Bound::Inclusive(0.0),
        upper: Bound::Inclusive(0.5),
        classification: Classification::Optimal,
        range: "0 <= P/Assets <= 0.5",
        description: "The market pays half or less of the asset base.",
        risks: "Assets may be overstated or unproductive.",
        cross_reference: "Check roa and asset_turnover.",
        recommendation: "Attractive if assets generate returns.",
    },
    RangeRule {
        lower: Bound::Exclusive(0.5),
        upper: Bound::Inclusive(1.0),
        classification: Classification::Good,
        range: "0.5 < P/Assets <= 1",
        description: "Price below or at the asset base.",
        risks: "Low.",
        cross_reference: "Compare with price_to_book.",
        recommendation: "Fair valuation.",
    },
    RangeRule {
        lower: Bound::Exclusive(1.0),
        upper: Bound::Inclusive(2.0),
        classification: Classification::Moderate,
        range: "1 < P/Assets <= 2",
        description: "Premium over the asset base.",
        risks: "Depends on returns on assets.",
        cross_reference: "Check roa.",
        recommendation: "Neutral.",
    },
    RangeRule {
        lower: Bound::Exclusive(2.0),
        upper: Bound::Inclusive(3.0),
        classification: Classification::Poor,
        range: "2 < P/Assets <= 3",
        description: "High premium over the asset base.",
        risks: "Requires high returns to be justified.",
        cross_reference: "Check roic and price_to_earnings.",
        recommendation: "Demand strong profitability.",
    },
    RangeRule {
        lower: Bound::Exclusive(3.0),
        upper: Bound::Unbounded,
        classification: Classification::VeryPoor,
        range: "P/Assets > 3",
        description: "Very high premium over the asset base.",
        risks: "Asset-light or speculative valuation.",
        cross_reference: "Use price_to_earnings or ev_to_ebit instead.",
        recommendation: "Treat with caution.",
    },
];

pub static EV_TO_EBITDA: IndicatorDefinition = IndicatorDefinition {
    key: "ev_to_ebitda",
    name: "EV/EBITDA",
    category: Category::Valuation,
    definition: "
        Enterprise value to EBITDA compares the value of the whole firm, equity plus net
        debt, with operating cash earnings. It is neutral to capital structure.
    ",
    formula: "EV/EBITDA = (Market Capitalisation + Net Debt) / EBITDA",
    inputs: InputShape::Single { label: "EV/EBITDA" },
    rules: &EV_TO_EBITDA_RULES,
};

static EV_TO_EBITDA_RULES: [RangeRule; 6] = [
    RangeRule {
        lower: Bound::Unbounded,
        upper: Bound::Exclusive(0.0),
        classification: Classification::Critical,
        range: "EV/EBITDA < 0",
        description: "Negative EBITDA, or net cash larger than market value.",
        risks: "Operating losses or a distorted balance sheet.",
        cross_reference: "Check ebitda_margin and net_debt.",
        recommendation: "Investigate the sign before using the multiple.",
    },
    RangeRule {
        lower: Bound::Inclusive(0.0),
        upper: Bound::Inclusive(6.0),
        classification: Classification::Optimal,
        range: "0 <= EV/EBITDA <= 6",
        description: "Low firm-value multiple.",
        risks: "Possible cyclical peak in earnings.",
        cross_reference: "Check ebitda_margin trend.",
        recommendation: "Attractive if earnings are sustainable.",
    },
    RangeRule {
        lower: Bound::Exclusive(6.0),
        upper: Bound::Inclusive(10.0),
        classification: Classification::Good,
        range: "6 < EV/EBITDA <= 10",
        description: "Reasonable firm-value multiple.",
        risks: "Low.",
        cross_reference: "Compare with net_debt_to_ebitda.",
        recommendation: "Fair valuation.",
    },
    RangeRule {
        lower: Bound::Exclusive(10.0),
        upper: Bound::Inclusive(14.0),
        classification: Classification::Moderate,
        range: "10 < EV/EBITDA <= 14",
        description: "Moderate multiple.",
        risks: "Growth expectations embedded.",
        cross_reference: "Check roic.",
        recommendation: "Neutral.",
    },
    RangeRule {
        lower: Bound::Exclusive(14.0),
        upper: Bound::Inclusive(20.0),
        classification: Classification::Poor,
        range: "14 < EV/EBITDA <= 20",
        description: "High multiple.",
        risks: "Sensitive to earnings downgrades.",
        cross_reference: "Compare with price_to_earnings.",
        recommendation: "Requires strong growth.",
    },
    RangeRule {
        lower: Bound::Exclusive(20.0),
        upper: Bound::Unbounded,
        classification: Classification::VeryPoor,
        range: "EV/EBITDA > 20",
        description: "Very high multiple.",
        risks: "Speculative valuation.",
        cross_reference: "Check price_to_sales.",
        recommendation: "Treat with caution.",
    },
];

pub static EV_TO_EBIT: IndicatorDefinition = IndicatorDefinition {
    key: "ev_to_ebit",
    name: "EV/EBIT",
    category: Category::Valuation,
    definition: "
        Enterprise value to EBIT compares the value of the whole firm with operating profit
        after depreciation. It penalises capital-heavy businesses more than EV/EBITDA.
    ",
    formula: "EV/EBIT = (Market Capitalisation + Net Debt) / EBIT",
    inputs: InputShape::Single { label: "EV/EBIT" },
    rules: &EV_TO_EBIT_RULES,
};

static EV_TO_EBIT_RULES: [RangeRule; 6] = [
    RangeRule {
        lower: Bound::Unbounded,
        upper: Bound::Exclusive(0.0),
        classification: Classification::Critical,
        range: "EV/EBIT < 0",
        description: "Negative EBIT, or net cash larger than market value.",
        risks: "Operating losses or a distorted balance sheet.",
        cross_reference: "Check ebit_margin and net_debt.",
        recommendation: "Investigate the sign before using the multiple.",
    },
    RangeRule {
        lower: Bound::Inclusive(0.0),
        upper: Bound::Inclusive(8.0),
        classification: Classification::Optimal,
        range: "0 <= EV/EBIT <= 8",
        description: "Low firm-value multiple of operating profit.",
        risks: "Possible cyclical peak in earnings.",
        cross_reference: "Check ebit_margin trend and roic.",
        recommendation: "Attractive if earnings are sustainable.",
    },
    RangeRule {
        lower: Bound::Exclusive(8.0),
        upper: Bound::Inclusive(12.0),
        classification: Classification::Good,
        range: "8 < EV/EBIT <= 12",
        description: "Reasonable multiple.",
        risks: "Low.",
        cross_reference: "Compare with net_debt_to_ebit.",
        recommendation: "Fair valuation.",
    },
    RangeRule {
        lower: Bound::Exclusive(12.0),
        upper: Bound::Inclusive(16.0),
        classification: Classification::Moderate,
        range: "12 < EV/EBIT <= 16",
        description: "Moderate multiple.",
        risks: "Growth expectations embedded.",
        cross_reference: "Check roic.",
        recommendation: "Neutral.",
    },
    RangeRule {
        lower: Bound::Exclusive(16.0),
        upper: Bound::Inclusive(25.0),
        classification: Classification::Poor,
        range: "16 < EV/EBIT <= 25",
        description: "High multiple.",
        risks: "Sensitive to margin pressure.",
        cross_reference: "Compare with price_to_earnings.",
        recommendation: "Requires strong growth.",
    },
    RangeRule {
        lower: Bound::Exclusive(25.0),
        upper: Bound::Unbounded,
        classification: Classification::VeryPoor,
        range: "EV/EBIT > 25",
        description: "Very high multiple.",
        risks: "Speculative valuation.",
        cross_reference: "Check price_to_sales.",
        recommendation: "Treat with caution.",
    },
];

pub static PRICE_TO_BOOK: IndicatorDefinition = IndicatorDefinition {
    key: "price_to_book",
    name: "P/BV",
    category: Category::Valuation,
    definition: "
        Price to book value (P/BV) compares the share price with book value per share,
        calculated as (Share Price / Book Value per Share). It is a valuation indicator that
        assesses whether the share is expensive or cheap relative to the company's net
        assets. A low P/BV suggests undervaluation, while a high value indicates
        overvaluation or growth expectations.
    ",
    formula: "P/BV = Share Price / Book Value per Share",
    inputs: InputShape::Single { label: "P/BV" },
    rules: &PRICE_TO_BOOK_RULES,
};

static PRICE_TO_BOOK_RULES: [RangeRule; 6] = [
    RangeRule {
        lower: Bound::Unbounded,
        upper: Bound::Exclusive(0.0),
        classification: Classification::Critical,
        range: "P/BV < 0",
        description: "A negative value may indicate accounting distortions or accumulated losses.",
        risks: "High probability of bankruptcy or shareholder dilution in restructurings.",
        cross_reference: "Evaluate net_debt_to_equity for financial health, ebitda_margin for cash generation and price_to_earnings for growth prospects.",
        recommendation: "Treat as distressed; do not rely on book value.",
    },
    RangeRule {
        lower: Bound::Inclusive(0.0),
        upper: Bound::Inclusive(1.0),
        classification: Classification::Optimal,
        range: "0 <= P/BV <= 1",
        description: "The share trades below book value.",
        risks: "Equity may include obsolete assets.",
        cross_reference: "Analyse book_value_per_share for book value and roe for profitability.",
        recommendation: "Potential undervaluation; verify the quality of the assets.",
    },
    RangeRule {
        lower: Bound::Exclusive(1.0),
        upper: Bound::Inclusive(1.5),
        classification: Classification::Moderate,
        range: "1 < P/BV <= 1.5",
        description: "Price close to book value, with a slight premium.",
        risks: "Stagnation in mature sectors.",
        cross_reference: "Compare with price_to_earnings for earnings and equity_to_assets for structure.",
        recommendation: "Fair valuation; confirm returns justify the premium.",
    },
    RangeRule {
        lower: Bound::Exclusive(1.5),
        upper: Bound::Inclusive(2.0),
        classification: Classification::Poor,
        range: "1.5 < P/BV <= 2",
        description: "Price high relative to equity.",
        risks: "Unrealised expectations can lead to corrections.",
        cross_reference: "Check roe for growth support and ev_to_ebitda for valuation.",
        recommendation: "Require above-average profitability.",
    },
    RangeRule {
        lower: Bound::Exclusive(2.0),
        upper: Bound::Inclusive(3.0),
        classification: Classification::VeryPoor,
        range: "2 < P/BV <= 3",
        description: "Price well above book value.",
        risks: "Sensitivity to economic changes.",
        cross_reference: "Combine with price_to_sales for revenue and net_margin for efficiency.",
        recommendation: "Treat with caution unless roe is exceptional.",
    },
    RangeRule {
        lower: Bound::Exclusive(3.0),
        upper: Bound::Unbounded,
        classification: Classification::OutOfRange,
        range: "P/BV > 3",
        description: "Price extremely high relative to equity.",
        risks: "Speculative bubbles.",
        cross_reference: "Evaluate price_to_assets for assets and net_margin for trends.",
        recommendation: "Book value no longer anchors the price; use earnings multiples.",
    },
];
