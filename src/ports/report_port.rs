//! Report generation port trait.

use crate::domain::error::RatioTierError;
use crate::domain::snapshot::SnapshotReport;
use std::path::Path;

/// Port for rendering evaluated snapshots.
pub trait ReportPort {
    fn render(&self, report: &SnapshotReport) -> Result<String, RatioTierError>;

    /// Default implementation: renders, then writes the text to `output_path`.
    fn write(&self, report: &SnapshotReport, output_path: &Path) -> Result<(), RatioTierError> {
        let rendered = self.render(report)?;
        std::fs::write(output_path, rendered)?;
        Ok(())
    }
}
