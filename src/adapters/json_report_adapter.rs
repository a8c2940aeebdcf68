//! JSON report adapter: pretty-printed snapshot header and results.

use crate::domain::error::RatioTierError;
use crate::domain::snapshot::SnapshotReport;
use crate::ports::report_port::ReportPort;

pub struct JsonReportAdapter;

impl ReportPort for JsonReportAdapter {
    fn render(&self, report: &SnapshotReport) -> Result<String, RatioTierError> {
        serde_json::to_string_pretty(report).map_err(|e| RatioTierError::Report {
            reason: format!("JSON serialization failed: {}", e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::indicator::IndicatorKind;
    use chrono::NaiveDate;

    #[test]
    fn renders_header_and_results() {
        let report = SnapshotReport {
            company: "Acme Holdings".into(),
            ticker: "ACME3".into(),
            as_of: NaiveDate::from_ymd_opt(2024, 12, 31),
            results: vec![
                IndicatorKind::PriceToBook.definition().evaluate(1.2),
                IndicatorKind::Roe.definition().evaluate("oops"),
            ],
        };
        let rendered = JsonReportAdapter.render(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(value["ticker"], "ACME3");
        assert_eq!(value["as_of"], "2024-12-31");
        assert_eq!(value["results"][0]["classification"], "Moderate");
        assert_eq!(value["results"][0]["range"], "1 < P/BV <= 1.5");
        assert_eq!(value["results"][1]["classification"], "Error");
        assert!(value["results"][1]["metric"].is_null());
    }
}
