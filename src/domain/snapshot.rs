//! Company snapshots: a batch of indicator inputs evaluated one by one.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::info;

use crate::domain::evaluation::EvaluationResult;
use crate::domain::indicator::IndicatorKind;
use crate::domain::input::NumericInput;

#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotEntry {
    pub kind: IndicatorKind,
    pub inputs: Vec<NumericInput>,
}

impl SnapshotEntry {
    pub fn new(kind: IndicatorKind, inputs: Vec<NumericInput>) -> Self {
        Self { kind, inputs }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub company: String,
    pub ticker: String,
    pub as_of: Option<NaiveDate>,
    pub entries: Vec<SnapshotEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SnapshotReport {
    pub company: String,
    pub ticker: String,
    pub as_of: Option<NaiveDate>,
    pub results: Vec<EvaluationResult>,
}

impl SnapshotReport {
    pub fn error_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_error()).count()
    }
}

/// Evaluate every entry independently, in file order. A bad entry yields an
/// Error result for that entry only.
pub fn evaluate_snapshot(snapshot: &Snapshot) -> SnapshotReport {
    let results: Vec<EvaluationResult> = snapshot
        .entries
        .iter()
        .map(|entry| entry.kind.definition().evaluate_inputs(&entry.inputs))
        .collect();

    let report = SnapshotReport {
        company: snapshot.company.clone(),
        ticker: snapshot.ticker.clone(),
        as_of: snapshot.as_of,
        results,
    };
    info!(
        ticker = %report.ticker,
        evaluated = report.results.len(),
        errors = report.error_count(),
        "snapshot evaluated"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::classification::Classification;

    fn snapshot(entries: Vec<SnapshotEntry>) -> Snapshot {
        Snapshot {
            company: "Acme Holdings".into(),
            ticker: "ACME3".into(),
            as_of: NaiveDate::from_ymd_opt(2024, 12, 31),
            entries,
        }
    }

    #[test]
    fn entries_evaluated_in_order() {
        let report = evaluate_snapshot(&snapshot(vec![
            SnapshotEntry::new(IndicatorKind::PriceToBook, vec![1.2.into()]),
            SnapshotEntry::new(IndicatorKind::CurrentRatio, vec![300.0.into(), 100.0.into()]),
            SnapshotEntry::new(IndicatorKind::NetDebt, vec![(-50.0).into()]),
        ]));
        let tiers: Vec<_> = report.results.iter().map(|r| r.classification).collect();
        assert_eq!(
            tiers,
            vec![
                Classification::Moderate,
                Classification::Optimal,
                Classification::Optimal
            ]
        );
        assert_eq!(report.ticker, "ACME3");
        assert_eq!(report.error_count(), 0);
    }

    #[test]
    fn bad_entry_does_not_affect_others() {
        let report = evaluate_snapshot(&snapshot(vec![
            SnapshotEntry::new(IndicatorKind::Roe, vec![NumericInput::from_field("abc")]),
            SnapshotEntry::new(IndicatorKind::Roe, vec![18.0.into()]),
        ]));
        assert!(report.results[0].is_error());
        assert_eq!(report.results[1].classification, Classification::Good);
        assert_eq!(report.error_count(), 1);
    }

    #[test]
    fn empty_snapshot_gives_empty_report() {
        let report = evaluate_snapshot(&snapshot(Vec::new()));
        assert!(report.results.is_empty());
    }
}
