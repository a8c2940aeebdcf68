//! Structural validation of range tables.
//!
//! A table is valid when its rules, read in order, tile the whole real line:
//! the first band is unbounded below, the last unbounded above, and each pair
//! of neighbours meets at one value claimed by exactly one of them.

use crate::domain::error::TableError;
use crate::domain::indicator::{IndicatorDefinition, IndicatorKind};
use crate::domain::range_rule::{Bound, RangeRule};

pub fn check_table(definition: &IndicatorDefinition) -> Result<(), TableError> {
    let indicator = definition.key.to_string();
    let rules = definition.rules;

    let (first, last) = match (rules.first(), rules.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(TableError::Empty { indicator }),
    };
    if first.lower != Bound::Unbounded {
        return Err(TableError::OpenStart { indicator });
    }
    if last.upper != Bound::Unbounded {
        return Err(TableError::OpenEnd { indicator });
    }

    for (index, rule) in rules.iter().enumerate() {
        let inner_lower = index > 0 && rule.lower == Bound::Unbounded;
        let inner_upper = index + 1 < rules.len() && rule.upper == Bound::Unbounded;
        if inner_lower || inner_upper {
            return Err(TableError::InnerUnbounded { indicator, index });
        }
        if !is_non_empty(rule) {
            return Err(TableError::EmptyInterval {
                indicator,
                index,
                range: rule.interval(),
            });
        }
    }

    for (index, pair) in rules.windows(2).enumerate() {
        check_seam(&indicator, index, &pair[0], &pair[1])?;
    }
    Ok(())
}

/// Every registered indicator whose table is defective.
pub fn check_all() -> Vec<(IndicatorKind, TableError)> {
    IndicatorKind::ALL
        .iter()
        .filter_map(|kind| check_table(kind.definition()).err().map(|e| (*kind, e)))
        .collect()
}

fn is_non_empty(rule: &RangeRule) -> bool {
    match (rule.lower.value(), rule.upper.value()) {
        (Some(lo), Some(hi)) if lo == hi => rule.lower.is_inclusive() && rule.upper.is_inclusive(),
        (Some(lo), Some(hi)) => lo < hi,
        _ => true,
    }
}

fn check_seam(
    indicator: &str,
    index: usize,
    left: &RangeRule,
    right: &RangeRule,
) -> Result<(), TableError> {
    let next = index + 1;
    let (hi, lo) = match (left.upper.value(), right.lower.value()) {
        (Some(hi), Some(lo)) => (hi, lo),
        // unbounded inner edges were rejected earlier
        _ => return Ok(()),
    };

    if hi < lo {
        return Err(TableError::Gap {
            indicator: indicator.to_string(),
            index,
            next,
            at: hi,
        });
    }
    if hi > lo {
        return Err(TableError::Overlap {
            indicator: indicator.to_string(),
            index,
            next,
            at: lo,
        });
    }

    match (left.upper.is_inclusive(), right.lower.is_inclusive()) {
        (true, true) => Err(TableError::Overlap {
            indicator: indicator.to_string(),
            index,
            next,
            at: hi,
        }),
        (false, false) => Err(TableError::Gap {
            indicator: indicator.to_string(),
            index,
            next,
            at: hi,
        }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::classification::{Category, Classification};
    use crate::domain::indicator::InputShape;

    const fn band(lower: Bound, upper: Bound) -> RangeRule {
        RangeRule {
            lower,
            upper,
            classification: Classification::Moderate,
            range: "test",
            description: "test",
            risks: "test",
            cross_reference: "test",
            recommendation: "test",
        }
    }

    fn table(rules: &'static [RangeRule]) -> IndicatorDefinition {
        IndicatorDefinition {
            key: "test",
            name: "Test",
            category: Category::Valuation,
            definition: "test",
            formula: "test",
            inputs: InputShape::Single { label: "test" },
            rules,
        }
    }

    static VALID: [RangeRule; 3] = [
        band(Bound::Unbounded, Bound::Exclusive(0.0)),
        band(Bound::Inclusive(0.0), Bound::Inclusive(0.0)),
        band(Bound::Exclusive(0.0), Bound::Unbounded),
    ];

    static GAP: [RangeRule; 2] = [
        band(Bound::Unbounded, Bound::Exclusive(1.0)),
        band(Bound::Exclusive(1.0), Bound::Unbounded),
    ];

    static OVERLAP: [RangeRule; 2] = [
        band(Bound::Unbounded, Bound::Inclusive(1.0)),
        band(Bound::Inclusive(1.0), Bound::Unbounded),
    ];

    static DISJOINT: [RangeRule; 2] = [
        band(Bound::Unbounded, Bound::Exclusive(1.0)),
        band(Bound::Inclusive(2.0), Bound::Unbounded),
    ];

    static CLOSED_START: [RangeRule; 1] = [band(Bound::Inclusive(0.0), Bound::Unbounded)];

    static POINT_NOT_CLOSED: [RangeRule; 3] = [
        band(Bound::Unbounded, Bound::Exclusive(0.0)),
        band(Bound::Inclusive(0.0), Bound::Exclusive(0.0)),
        band(Bound::Inclusive(0.0), Bound::Unbounded),
    ];

    static INNER_OPEN: [RangeRule; 2] = [
        band(Bound::Unbounded, Bound::Unbounded),
        band(Bound::Inclusive(0.0), Bound::Unbounded),
    ];

    #[test]
    fn valid_table_passes() {
        assert_eq!(check_table(&table(&VALID)), Ok(()));
    }

    #[test]
    fn empty_table_rejected() {
        assert_eq!(
            check_table(&table(&[])),
            Err(TableError::Empty {
                indicator: "test".into()
            })
        );
    }

    #[test]
    fn both_sides_exclusive_is_gap() {
        assert!(matches!(
            check_table(&table(&GAP)),
            Err(TableError::Gap { index: 0, next: 1, at, .. }) if at == 1.0
        ));
    }

    #[test]
    fn both_sides_inclusive_is_overlap() {
        assert!(matches!(
            check_table(&table(&OVERLAP)),
            Err(TableError::Overlap { index: 0, .. })
        ));
    }

    #[test]
    fn separated_bounds_are_gap() {
        assert!(matches!(
            check_table(&table(&DISJOINT)),
            Err(TableError::Gap { at, .. }) if at == 1.0
        ));
    }

    #[test]
    fn bounded_start_rejected() {
        assert!(matches!(
            check_table(&table(&CLOSED_START)),
            Err(TableError::OpenStart { .. })
        ));
    }

    #[test]
    fn half_open_point_rejected() {
        assert!(matches!(
            check_table(&table(&POINT_NOT_CLOSED)),
            Err(TableError::EmptyInterval { index: 1, .. })
        ));
    }

    #[test]
    fn inner_unbounded_rejected() {
        assert!(matches!(
            check_table(&table(&INNER_OPEN)),
            Err(TableError::InnerUnbounded { index: 0, .. })
        ));
    }

    #[test]
    fn registry_is_clean() {
        assert!(check_all().is_empty(), "{:?}", check_all());
    }
}
