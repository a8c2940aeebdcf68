//! Plain-text report adapter.
//!
//! One block per result listing every field, blocks separated by a dashed
//! rule, followed by a one-line summary.

use crate::domain::error::RatioTierError;
use crate::domain::evaluation::{EvaluationResult, NOT_APPLICABLE};
use crate::domain::indicator::IndicatorKind;
use crate::domain::snapshot::SnapshotReport;
use crate::ports::report_port::ReportPort;

pub const RULE_WIDTH: usize = 60;

pub struct TextReportAdapter {
    precision: usize,
    show_definition: bool,
}

impl TextReportAdapter {
    pub fn new(precision: usize, show_definition: bool) -> Self {
        Self {
            precision,
            show_definition,
        }
    }

    /// Block for a single result, without trailing rule.
    pub fn render_result(&self, result: &EvaluationResult) -> String {
        let name = result
            .indicator
            .parse::<IndicatorKind>()
            .map(|k| k.definition().name)
            .unwrap_or(result.indicator.as_str());
        let metric = result.metric.map_or_else(
            || NOT_APPLICABLE.to_string(),
            |m| format!("{:.*}", self.precision, m),
        );

        let mut out = String::new();
        out.push_str(&format!("Indicator:       {} ({})\n", name, result.indicator));
        out.push_str(&format!("Category:        {}\n", result.category));
        out.push_str(&format!("Metric:          {}\n", metric));
        out.push_str(&format!("Classification:  {}\n", result.classification));
        out.push_str(&format!("Range:           {}\n", result.range));
        out.push_str(&format!("Formula:         {}\n", result.formula));
        if self.show_definition {
            out.push_str(&format!("Definition:      {}\n", collapse(&result.definition)));
        }
        out.push_str(&format!("Description:     {}\n", result.description));
        out.push_str(&format!("Risks:           {}\n", result.risks));
        out.push_str(&format!("Cross-reference: {}\n", result.cross_reference));
        out.push_str(&format!("Recommendation:  {}\n", result.recommendation));
        out
    }
}

impl ReportPort for TextReportAdapter {
    fn render(&self, report: &SnapshotReport) -> Result<String, RatioTierError> {
        let rule = "-".repeat(RULE_WIDTH);
        let mut out = String::new();

        out.push_str(&report.company);
        if !report.ticker.is_empty() {
            out.push_str(&format!(" ({})", report.ticker));
        }
        if let Some(date) = report.as_of {
            out.push_str(&format!(" as of {}", date.format("%Y-%m-%d")));
        }
        out.push('\n');
        out.push_str(&format!("{}\n", "=".repeat(RULE_WIDTH)));

        for result in &report.results {
            out.push_str(&self.render_result(result));
            out.push_str(&format!("{}\n", rule));
        }

        out.push_str(&format!(
            "{} indicator(s) evaluated, {} error(s)\n",
            report.results.len(),
            report.error_count()
        ));
        Ok(out)
    }
}

/// Definitions are stored as wrapped paragraphs; print them on one line.
fn collapse(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn report() -> SnapshotReport {
        SnapshotReport {
            company: "Acme Holdings".into(),
            ticker: "ACME3".into(),
            as_of: NaiveDate::from_ymd_opt(2024, 12, 31),
            results: vec![
                IndicatorKind::PriceToBook.definition().evaluate(1.2),
                IndicatorKind::CurrentRatio.definition().evaluate_pair(1.0, 0.0),
            ],
        }
    }

    #[test]
    fn renders_blocks_and_summary() {
        let text = TextReportAdapter::new(2, true).render(&report()).unwrap();
        assert!(text.starts_with("Acme Holdings (ACME3) as of 2024-12-31\n"));
        assert!(text.contains("Indicator:       P/BV (price_to_book)"));
        assert!(text.contains("Metric:          1.20"));
        assert!(text.contains("Range:           1 < P/BV <= 1.5"));
        assert!(text.contains("Classification:  Error"));
        assert!(text.contains("Metric:          N/A"));
        assert_eq!(text.matches(&"-".repeat(RULE_WIDTH)).count(), 2);
        assert!(text.ends_with("2 indicator(s) evaluated, 1 error(s)\n"));
    }

    #[test]
    fn definition_can_be_hidden() {
        let shown = TextReportAdapter::new(2, true).render(&report()).unwrap();
        let hidden = TextReportAdapter::new(2, false).render(&report()).unwrap();
        assert!(shown.contains("Definition:"));
        assert!(!hidden.contains("Definition:"));
    }

    #[test]
    fn collapse_joins_wrapped_lines() {
        assert_eq!(collapse("\n   a b\n   c  \n"), "a b c");
    }
}
