//! Indicator registry.
//!
//! Every indicator is the same engine over different data:
//! - `IndicatorDefinition`: static metadata plus an ordered band table
//! - `InputShape`: a single value, or a numerator/denominator pair
//! - `IndicatorKind`: closed enumeration of the supported indicators
//!
//! Tables live in one submodule per category.

pub mod balance_sheet;
pub mod efficiency;
pub mod leverage;
pub mod liquidity;
pub mod profitability;
pub mod valuation;

use std::fmt;
use std::str::FromStr;

use crate::domain::classification::Category;
use crate::domain::range_rule::RangeRule;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputShape {
    Single {
        label: &'static str,
    },
    /// Metric is `numerator / denominator`. The denominator must be
    /// positive: zero cannot divide and a negative one flips the sign of the
    /// metric into the wrong band.
    Ratio {
        numerator: &'static str,
        denominator: &'static str,
    },
}

impl InputShape {
    pub fn arity(&self) -> usize {
        match self {
            InputShape::Single { .. } => 1,
            InputShape::Ratio { .. } => 2,
        }
    }

    pub fn labels(&self) -> Vec<&'static str> {
        match self {
            InputShape::Single { label } => vec![*label],
            InputShape::Ratio {
                numerator,
                denominator,
            } => vec![*numerator, *denominator],
        }
    }
}

#[derive(Debug)]
pub struct IndicatorDefinition {
    pub key: &'static str,
    pub name: &'static str,
    pub category: Category,
    pub definition: &'static str,
    pub formula: &'static str,
    pub inputs: InputShape,
    pub rules: &'static [RangeRule],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IndicatorKind {
    CurrentAssets,
    TotalAssets,
    GrossDebt,
    NetDebt,
    Equity,
    DailyLiquidity,
    EquityToAssets,
    DividendYield,
    PriceToWorkingCapital,
    PriceToSales,
    AssetTurnover,
    CurrentRatio,
    BookValuePerShare,
    PriceToEarnings,
    Roic,
    Roa,
    Roe,
    PriceToEbitda,
    PriceToEbit,
    PriceToAssets,
    NetDebtToEquity,
    NetDebtToEbit,
    NetMargin,
    EbitdaMargin,
    EbitMargin,
    GrossMargin,
    EvToEbitda,
    EvToEbit,
    NetDebtToEbitda,
    Eps,
    PriceToBook,
}

impl IndicatorKind {
    pub const ALL: [IndicatorKind; 31] = [
        IndicatorKind::CurrentAssets,
        IndicatorKind::TotalAssets,
        IndicatorKind::GrossDebt,
        IndicatorKind::NetDebt,
        IndicatorKind::Equity,
        IndicatorKind::DailyLiquidity,
        IndicatorKind::EquityToAssets,
        IndicatorKind::DividendYield,
        IndicatorKind::PriceToWorkingCapital,
        IndicatorKind::PriceToSales,
        IndicatorKind::AssetTurnover,
        IndicatorKind::CurrentRatio,
        IndicatorKind::BookValuePerShare,
        IndicatorKind::PriceToEarnings,
        IndicatorKind::Roic,
        IndicatorKind::Roa,
        IndicatorKind::Roe,
        IndicatorKind::PriceToEbitda,
        IndicatorKind::PriceToEbit,
        IndicatorKind::PriceToAssets,
        IndicatorKind::NetDebtToEquity,
        IndicatorKind::NetDebtToEbit,
        IndicatorKind::NetMargin,
        IndicatorKind::EbitdaMargin,
        IndicatorKind::EbitMargin,
        IndicatorKind::GrossMargin,
        IndicatorKind::EvToEbitda,
        IndicatorKind::EvToEbit,
        IndicatorKind::NetDebtToEbitda,
        IndicatorKind::Eps,
        IndicatorKind::PriceToBook,
    ];

    pub fn definition(&self) -> &'static IndicatorDefinition {
        match self {
            IndicatorKind::CurrentAssets => &balance_sheet::CURRENT_ASSETS,
            IndicatorKind::TotalAssets => &balance_sheet::TOTAL_ASSETS,
            IndicatorKind::Equity => &balance_sheet::EQUITY,
            IndicatorKind::GrossDebt => &leverage::GROSS_DEBT,
            IndicatorKind::NetDebt => &leverage::NET_DEBT,
            IndicatorKind::EquityToAssets => &leverage::EQUITY_TO_ASSETS,
            IndicatorKind::NetDebtToEquity => &leverage::NET_DEBT_TO_EQUITY,
            IndicatorKind::NetDebtToEbit => &leverage::NET_DEBT_TO_EBIT,
            IndicatorKind::NetDebtToEbitda => &leverage::NET_DEBT_TO_EBITDA,
            IndicatorKind::DailyLiquidity => &liquidity::DAILY_LIQUIDITY,
            IndicatorKind::CurrentRatio => &liquidity::CURRENT_RATIO,
            IndicatorKind::AssetTurnover => &efficiency::ASSET_TURNOVER,
            IndicatorKind::Roic => &profitability::ROIC,
            IndicatorKind::Roa => &profitability::ROA,
            IndicatorKind::Roe => &profitability::ROE,
            IndicatorKind::NetMargin => &profitability::NET_MARGIN,
            IndicatorKind::EbitdaMargin => &profitability::EBITDA_MARGIN,
            IndicatorKind::EbitMargin => &profitability::EBIT_MARGIN,
            IndicatorKind::GrossMargin => &profitability::GROSS_MARGIN,
            IndicatorKind::Eps => &profitability::EPS,
            IndicatorKind::DividendYield => &valuation::DIVIDEND_YIELD,
            IndicatorKind::PriceToWorkingCapital => &valuation::PRICE_TO_WORKING_CAPITAL,
            IndicatorKind::PriceToSales => &valuation::PRICE_TO_SALES,
            IndicatorKind::BookValuePerShare => &valuation::BOOK_VALUE_PER_SHARE,
            IndicatorKind::PriceToEarnings => &valuation::PRICE_TO_EARNINGS,
            IndicatorKind::PriceToEbitda => &valuation::PRICE_TO_EBITDA,
            IndicatorKind::PriceToEbit => &valuation::PRICE_TO_EBIT,
            IndicatorKind::PriceToAssets => &valuation::PRICE_TO_ASSETS,
            IndicatorKind::EvToEbitda => &valuation::EV_TO_EBITDA,
            IndicatorKind::EvToEbit => &valuation::EV_TO_EBIT,
            IndicatorKind::PriceToBook => &valuation::PRICE_TO_BOOK,
        }
    }

    pub fn key(&self) -> &'static str {
        self.definition().key
    }

    pub fn by_category(category: Category) -> Vec<IndicatorKind> {
        IndicatorKind::ALL
            .iter()
            .copied()
            .filter(|k| k.definition().category == category)
            .collect()
    }

    fn aliases(&self) -> &'static [&'static str] {
        match self {
            IndicatorKind::CurrentAssets => &["ativo_circulante"],
            IndicatorKind::TotalAssets => &["ativo_total", "assets"],
            IndicatorKind::GrossDebt => &["divida_bruta"],
            IndicatorKind::NetDebt => &["divida_liquida"],
            IndicatorKind::Equity => &["patrimonio_liquido", "pl_total"],
            IndicatorKind::DailyLiquidity => &["liquidez_diaria", "liquidity"],
            IndicatorKind::EquityToAssets => &["pl_ativos", "equity_assets"],
            IndicatorKind::DividendYield => &["dy"],
            IndicatorKind::PriceToWorkingCapital => &["p_cap_giro", "p_wc"],
            IndicatorKind::PriceToSales => &["psr", "p_s", "p_sr"],
            IndicatorKind::AssetTurnover => &["giro_ativos"],
            IndicatorKind::CurrentRatio => &["liquidez_corrente"],
            IndicatorKind::BookValuePerShare => &["vpa", "bvps"],
            IndicatorKind::PriceToEarnings => &["p_l", "pl", "pe", "p_e"],
            IndicatorKind::Roic => &[],
            IndicatorKind::Roa => &[],
            IndicatorKind::Roe => &[],
            IndicatorKind::PriceToEbitda => &["p_ebitda"],
            IndicatorKind::PriceToEbit => &["p_ebit"],
            IndicatorKind::PriceToAssets => &["p_ativo", "p_assets"],
            IndicatorKind::NetDebtToEquity => &["div_liq_pl"],
            IndicatorKind::NetDebtToEbit => &["div_liq_ebit"],
            IndicatorKind::NetDebtToEbitda => &["div_liq_ebitda"],
            IndicatorKind::NetMargin => &["margem_liquida"],
            IndicatorKind::EbitdaMargin => &["margem_ebitda"],
            IndicatorKind::EbitMargin => &["margem_ebit"],
            IndicatorKind::GrossMargin => &["margem_bruta"],
            IndicatorKind::EvToEbitda => &["ev_ebitda"],
            IndicatorKind::EvToEbit => &["ev_ebit"],
            IndicatorKind::Eps => &["lpa"],
            IndicatorKind::PriceToBook => &["p_vp", "pvp", "p_bv", "pb"],
        }
    }
}

impl fmt::Display for IndicatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Accepts the key, the display name or an alias, case-insensitively.
/// `/`, `-` and spaces are treated as `_`.
impl FromStr for IndicatorKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        IndicatorKind::ALL
            .iter()
            .copied()
            .find(|kind| {
                let def = kind.definition();
                normalize(def.key) == wanted
                    || normalize(def.name) == wanted
                    || kind.aliases().iter().any(|a| *a == wanted)
            })
            .ok_or_else(|| format!("unknown indicator: {}", s.trim()))
    }
}

fn normalize(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            '/' | '-' | ' ' => '_',
            other => other,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn all_keys_unique() {
        let keys: HashSet<_> = IndicatorKind::ALL.iter().map(|k| k.key()).collect();
        assert_eq!(keys.len(), IndicatorKind::ALL.len());
    }

    #[test]
    fn key_round_trips_through_from_str() {
        for kind in IndicatorKind::ALL {
            assert_eq!(kind.key().parse::<IndicatorKind>().unwrap(), kind);
            assert_eq!(kind.to_string(), kind.key());
        }
    }

    #[test]
    fn display_names_and_aliases_parse() {
        assert_eq!(
            "P/VP".parse::<IndicatorKind>().unwrap(),
            IndicatorKind::PriceToBook
        );
        assert_eq!(
            "P/BV".parse::<IndicatorKind>().unwrap(),
            IndicatorKind::PriceToBook
        );
        assert_eq!(
            "p_l".parse::<IndicatorKind>().unwrap(),
            IndicatorKind::PriceToEarnings
        );
        assert_eq!("DY".parse::<IndicatorKind>().unwrap(), IndicatorKind::DividendYield);
        assert_eq!(
            "Current Ratio".parse::<IndicatorKind>().unwrap(),
            IndicatorKind::CurrentRatio
        );
        assert!("peg".parse::<IndicatorKind>().is_err());
    }

    #[test]
    fn aliases_do_not_collide() {
        let mut seen = HashSet::new();
        for kind in IndicatorKind::ALL {
            assert!(seen.insert(normalize(kind.key())), "duplicate key {kind}");
            for alias in kind.aliases() {
                assert!(seen.insert(alias.to_string()), "duplicate alias {alias}");
            }
        }
    }

    #[test]
    fn definition_key_matches_registry() {
        for kind in IndicatorKind::ALL {
            let def = kind.definition();
            assert!(!def.rules.is_empty(), "{kind} has no rules");
            assert!(!def.definition.trim().is_empty());
            assert!(!def.formula.is_empty());
        }
    }

    #[test]
    fn by_category_covers_registry() {
        let total: usize = Category::ALL
            .iter()
            .map(|c| IndicatorKind::by_category(*c).len())
            .sum();
        assert_eq!(total, IndicatorKind::ALL.len());
        assert!(IndicatorKind::by_category(Category::Liquidity).contains(&IndicatorKind::CurrentRatio));
    }

    #[test]
    fn ratio_indicators_have_two_inputs() {
        let ratios: Vec<_> = IndicatorKind::ALL
            .iter()
            .filter(|k| k.definition().inputs.arity() == 2)
            .copied()
            .collect();
        assert_eq!(
            ratios,
            vec![
                IndicatorKind::EquityToAssets,
                IndicatorKind::AssetTurnover,
                IndicatorKind::CurrentRatio,
                IndicatorKind::NetDebtToEquity,
                IndicatorKind::NetDebtToEbit,
                IndicatorKind::NetDebtToEbitda,
            ]
        );
    }
}
