//! CSV snapshot source and CSV report writer.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::error::RatioTierError;
use crate::domain::evaluation::NOT_APPLICABLE;
use crate::domain::indicator::IndicatorKind;
use crate::domain::input::NumericInput;
use crate::domain::snapshot::{Snapshot, SnapshotEntry, SnapshotReport};
use crate::ports::report_port::ReportPort;
use crate::ports::snapshot_port::SnapshotPort;

/// Reads `indicator,value,denominator` rows. The file stem names the
/// company; CSV snapshots carry no as-of date.
pub struct CsvSnapshotAdapter {
    path: PathBuf,
}

impl CsvSnapshotAdapter {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn file_label(&self) -> String {
        self.path.display().to_string()
    }

    fn csv_error(&self, reason: impl Into<String>) -> RatioTierError {
        RatioTierError::Csv {
            file: self.file_label(),
            reason: reason.into(),
        }
    }

    fn parse(&self, content: &str) -> Result<Vec<SnapshotEntry>, RatioTierError> {
        let mut rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(content.as_bytes());

        let headers = rdr
            .headers()
            .map_err(|e| self.csv_error(format!("CSV parse error: {}", e)))?;
        if headers.get(0) != Some("indicator") || headers.get(1) != Some("value") {
            return Err(self.csv_error("expected header indicator,value[,denominator]"));
        }

        let mut entries = Vec::new();
        for (line, result) in rdr.records().enumerate() {
            let record = result.map_err(|e| self.csv_error(format!("CSV parse error: {}", e)))?;

            let name = record
                .get(0)
                .filter(|s| !s.is_empty())
                .ok_or_else(|| self.csv_error(format!("row {}: missing indicator column", line + 1)))?;
            let kind: IndicatorKind =
                name.parse()
                    .map_err(|_| RatioTierError::UnknownIndicator {
                        name: name.to_string(),
                    })?;

            let value = record
                .get(1)
                .ok_or_else(|| self.csv_error(format!("row {}: missing value column", line + 1)))?;
            let mut inputs = vec![NumericInput::from_field(value)];
            if let Some(den) = record.get(2).filter(|s| !s.is_empty()) {
                inputs.push(NumericInput::from_field(den));
            }
            entries.push(SnapshotEntry::new(kind, inputs));
        }
        Ok(entries)
    }
}

impl SnapshotPort for CsvSnapshotAdapter {
    fn load_snapshot(&self) -> Result<Snapshot, RatioTierError> {
        let content = fs::read_to_string(&self.path)?;
        let entries = self.parse(&content)?;
        let company = self
            .path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();

        Ok(Snapshot {
            ticker: company.to_uppercase(),
            company,
            as_of: None,
            entries,
        })
    }
}

/// One row per result, with the snapshot header repeated on each row.
pub struct CsvReportAdapter {
    precision: usize,
}

impl CsvReportAdapter {
    pub const HEADER: [&'static str; 12] = [
        "company",
        "ticker",
        "as_of",
        "indicator",
        "metric",
        "classification",
        "range",
        "category",
        "description",
        "risks",
        "cross_reference",
        "recommendation",
    ];

    pub fn new(precision: usize) -> Self {
        Self { precision }
    }
}

impl ReportPort for CsvReportAdapter {
    fn render(&self, report: &SnapshotReport) -> Result<String, RatioTierError> {
        let to_report_err = |e: csv::Error| RatioTierError::Report {
            reason: format!("CSV write error: {}", e),
        };

        let mut wtr = csv::Writer::from_writer(Vec::new());
        wtr.write_record(Self::HEADER).map_err(to_report_err)?;

        let as_of = report
            .as_of
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default();
        for result in &report.results {
            let metric = result.metric.map_or_else(
                || NOT_APPLICABLE.to_string(),
                |m| format!("{:.*}", self.precision, m),
            );
            wtr.write_record([
                report.company.as_str(),
                report.ticker.as_str(),
                as_of.as_str(),
                result.indicator.as_str(),
                metric.as_str(),
                result.classification.label(),
                result.range.as_str(),
                result.category.label(),
                result.description.as_str(),
                result.risks.as_str(),
                result.cross_reference.as_str(),
                result.recommendation.as_str(),
            ])
            .map_err(to_report_err)?;
        }

        let bytes = wtr.into_inner().map_err(|e| RatioTierError::Report {
            reason: format!("CSV flush error: {}", e),
        })?;
        String::from_utf8(bytes).map_err(|e| RatioTierError::Report {
            reason: format!("CSV output is not UTF-8: {}", e),
        })
    }
}

/// True when `path` should be read as CSV rather than INI.
pub fn is_csv_path(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::classification::Classification;
    use crate::domain::snapshot::evaluate_snapshot;
    use tempfile::TempDir;

    fn write_csv(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn loads_single_and_ratio_rows() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(
            &dir,
            "acme.csv",
            "indicator,value,denominator\n\
             price_to_book,1.2,\n\
             current_ratio, 150 , 100\n\
             net_debt,-35\n",
        );
        let snapshot = CsvSnapshotAdapter::new(path).load_snapshot().unwrap();

        assert_eq!(snapshot.company, "acme");
        assert_eq!(snapshot.ticker, "ACME");
        assert_eq!(snapshot.as_of, None);
        assert_eq!(snapshot.entries.len(), 3);
        assert_eq!(snapshot.entries[0].kind, IndicatorKind::PriceToBook);
        assert_eq!(
            snapshot.entries[1].inputs,
            vec![NumericInput::Text("150".into()), NumericInput::Text("100".into())]
        );
        assert_eq!(snapshot.entries[2].inputs, vec![NumericInput::Number(-35.0)]);
    }

    #[test]
    fn missing_denominator_becomes_error_result() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(&dir, "x.csv", "indicator,value,denominator\ncurrent_ratio,1.5,\n");
        let snapshot = CsvSnapshotAdapter::new(path).load_snapshot().unwrap();
        let report = evaluate_snapshot(&snapshot);
        assert_eq!(report.results[0].classification, Classification::Error);
    }

    #[test]
    fn unknown_indicator_fails_load() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(&dir, "x.csv", "indicator,value\nwidgets,3\n");
        let err = CsvSnapshotAdapter::new(path).load_snapshot().unwrap_err();
        assert!(matches!(err, RatioTierError::UnknownIndicator { ref name } if name == "widgets"));
    }

    #[test]
    fn wrong_header_fails_load() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(&dir, "x.csv", "name,amount\nroe,3\n");
        let err = CsvSnapshotAdapter::new(path).load_snapshot().unwrap_err();
        assert!(matches!(err, RatioTierError::Csv { .. }));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = CsvSnapshotAdapter::new(PathBuf::from("/nonexistent/acme.csv"))
            .load_snapshot()
            .unwrap_err();
        assert!(matches!(err, RatioTierError::Io(_)));
    }

    #[test]
    fn report_has_header_and_one_row_per_result() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(&dir, "acme.csv", "indicator,value\nroe,18\nroe,abc\n");
        let report = evaluate_snapshot(&CsvSnapshotAdapter::new(path).load_snapshot().unwrap());
        let rendered = CsvReportAdapter::new(1).render(&report).unwrap();

        let mut rdr = csv::Reader::from_reader(rendered.as_bytes());
        let headers = rdr.headers().unwrap().clone();
        assert_eq!(headers.iter().collect::<Vec<_>>(), CsvReportAdapter::HEADER);
        let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][4], "18.0");
        assert_eq!(&rows[0][5], "Good");
        assert_eq!(&rows[1][4], "N/A");
        assert_eq!(&rows[1][5], "Error");
    }

    #[test]
    fn csv_extension_detection() {
        assert!(is_csv_path(Path::new("a/b.CSV")));
        assert!(!is_csv_path(Path::new("a/b.ini")));
        assert!(!is_csv_path(Path::new("noext")));
    }
}
