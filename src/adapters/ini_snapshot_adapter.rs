//! INI snapshot source.
//!
//! ```ini
//! [company]
//! name = Acme Holdings
//! ticker = ACME3
//! as_of = 2024-12-31
//!
//! [indicators]
//! price_to_book = 1.2
//! current_ratio = 150, 100
//!
//! [output]
//! format = json
//! ```

use std::path::Path;

use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::domain::config_validation::{
    parse_as_of, split_inputs, validate_snapshot_config, COMPANY_SECTION, INDICATORS_SECTION,
    MAX_PRECISION, OUTPUT_SECTION,
};
use crate::domain::error::RatioTierError;
use crate::domain::indicator::IndicatorKind;
use crate::domain::input::NumericInput;
use crate::domain::snapshot::{Snapshot, SnapshotEntry};
use crate::ports::config_port::ConfigPort;
use crate::ports::snapshot_port::SnapshotPort;

/// Rendering preferences read from `[output]`.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputSettings {
    pub format: Option<String>,
    pub precision: usize,
    pub show_definition: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            format: None,
            precision: 2,
            show_definition: true,
        }
    }
}

pub struct IniSnapshotAdapter {
    config: FileConfigAdapter,
}

impl IniSnapshotAdapter {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, RatioTierError> {
        Ok(Self {
            config: FileConfigAdapter::from_file(path)?,
        })
    }

    pub fn from_string(content: &str) -> Result<Self, RatioTierError> {
        Ok(Self {
            config: FileConfigAdapter::from_string(content)?,
        })
    }

    pub fn output_settings(&self) -> OutputSettings {
        let defaults = OutputSettings::default();
        let precision = self
            .config
            .get_int(OUTPUT_SECTION, "precision", defaults.precision as i64);
        OutputSettings {
            format: self
                .config
                .get_string(OUTPUT_SECTION, "format")
                .map(|f| f.trim().to_lowercase()),
            precision: usize::try_from(precision.clamp(0, MAX_PRECISION))
                .unwrap_or(defaults.precision),
            show_definition: self.config.get_bool(
                OUTPUT_SECTION,
                "show_definition",
                defaults.show_definition,
            ),
        }
    }
}

impl SnapshotPort for IniSnapshotAdapter {
    fn load_snapshot(&self) -> Result<Snapshot, RatioTierError> {
        validate_snapshot_config(&self.config)?;

        let company = self
            .config
            .get_string(COMPANY_SECTION, "name")
            .unwrap_or_default()
            .trim()
            .to_string();
        let ticker = self
            .config
            .get_string(COMPANY_SECTION, "ticker")
            .map(|t| t.trim().to_uppercase())
            .unwrap_or_default();
        let as_of = parse_as_of(self.config.get_string(COMPANY_SECTION, "as_of").as_deref())?;

        let mut entries = Vec::new();
        for key in self.config.keys(INDICATORS_SECTION) {
            let kind: IndicatorKind = key
                .parse()
                .map_err(|_| RatioTierError::UnknownIndicator { name: key.clone() })?;
            let raw = self
                .config
                .get_string(INDICATORS_SECTION, &key)
                .unwrap_or_default();
            let inputs = split_inputs(&raw)
                .into_iter()
                .map(NumericInput::from_field)
                .collect();
            entries.push(SnapshotEntry::new(kind, inputs));
        }

        Ok(Snapshot {
            company,
            ticker,
            as_of,
            entries,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const SAMPLE: &str = r#"
[company]
name = Acme Holdings
ticker = acme3
as_of = 2024-12-31

[indicators]
pvp = 1.2
current_ratio = 150, 100
net_debt = -35
roe = n/a

[output]
format = JSON
precision = 3
show_definition = no
"#;

    #[test]
    fn loads_header_and_entries_in_order() {
        let adapter = IniSnapshotAdapter::from_string(SAMPLE).unwrap();
        let snapshot = adapter.load_snapshot().unwrap();
        assert_eq!(snapshot.company, "Acme Holdings");
        assert_eq!(snapshot.ticker, "ACME3");
        assert_eq!(snapshot.as_of, NaiveDate::from_ymd_opt(2024, 12, 31));

        let kinds: Vec<_> = snapshot.entries.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                IndicatorKind::PriceToBook,
                IndicatorKind::CurrentRatio,
                IndicatorKind::NetDebt,
                IndicatorKind::Roe
            ]
        );
        assert_eq!(snapshot.entries[1].inputs.len(), 2);
        assert_eq!(snapshot.entries[2].inputs, vec![NumericInput::Number(-35.0)]);
        assert_eq!(
            snapshot.entries[3].inputs,
            vec![NumericInput::Text("n/a".into())]
        );
    }

    #[test]
    fn reads_output_settings() {
        let adapter = IniSnapshotAdapter::from_string(SAMPLE).unwrap();
        let settings = adapter.output_settings();
        assert_eq!(settings.format.as_deref(), Some("json"));
        assert_eq!(settings.precision, 3);
        assert!(!settings.show_definition);
    }

    #[test]
    fn output_settings_default() {
        let adapter =
            IniSnapshotAdapter::from_string("[company]\nname = A\n[indicators]\nroe = 1\n")
                .unwrap();
        assert_eq!(adapter.output_settings(), OutputSettings::default());
    }

    #[test]
    fn invalid_config_fails_to_load() {
        let adapter =
            IniSnapshotAdapter::from_string("[company]\nname = A\n[indicators]\nnope = 1\n")
                .unwrap();
        assert!(matches!(
            adapter.load_snapshot(),
            Err(RatioTierError::UnknownIndicator { .. })
        ));
    }
}
